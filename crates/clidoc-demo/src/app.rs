use clidoc::{App, BoolFlag, Command, IntFlag, StringFlag};

/// The demo's command surface, described once and used both for parsing and
/// for documenting itself.
pub fn app() -> App {
    App::new("clidoc-demo")
        .description("A small CLI that documents its own command surface.")
        .flag(
            StringFlag::new("config")
                .alias("c")
                .env("DEMO_CONFIG")
                .usage("Path to the configuration file"),
        )
        .flag(
            BoolFlag::new("verbose")
                .alias("v")
                .usage("Enable verbose output"),
        )
        .command(
            Command::new("config")
                .usage("Manage configuration values")
                .subcommand(
                    Command::new("get")
                        .usage("Print the configured fragment directories")
                        .runnable()
                        .flag(
                            StringFlag::new("format")
                                .env("DEMO_FORMAT")
                                .usage("Output format, text or toml"),
                        ),
                )
                .subcommand(
                    Command::new("set")
                        .usage("Update a configuration value")
                        .runnable(),
                ),
        )
        .command(
            Command::new("sync")
                .usage("Synchronize the local cache")
                .description("Fetches remote state and reconciles the local cache with it")
                .alias("s")
                .runnable()
                .flag(
                    BoolFlag::new("dry-run")
                        .env("DEMO_DRY_RUN")
                        .usage("Preview changes without applying them"),
                )
                .flag(
                    IntFlag::new("jobs")
                        .alias("j")
                        .env("DEMO_JOBS")
                        .usage("Number of concurrent workers"),
                ),
        )
        .command(
            Command::new("telemetry")
                .usage("Inspect telemetry buffers")
                .hidden()
                .subcommand(
                    Command::new("flush")
                        .usage("Flush buffered telemetry")
                        .runnable(),
                ),
        )
        .command(clidoc::manual_command())
        .command(clidoc::commands_command())
        .command(clidoc::envvars_command())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_mounts_the_documentation_commands() {
        let app = app();
        let names: Vec<&str> = app.commands.iter().map(|c| c.name.as_str()).collect();
        assert!(names.contains(&"manual"));
        assert!(names.contains(&"commands"));
        assert!(names.contains(&"envvars"));
    }

    #[test]
    fn test_telemetry_stays_hidden() {
        let app = app();
        let telemetry = app
            .commands
            .iter()
            .find(|c| c.name == "telemetry")
            .unwrap();
        assert!(telemetry.hidden);
        assert!(!telemetry.runnable);
        assert_eq!(telemetry.subcommands[0].name, "flush");
    }
}
