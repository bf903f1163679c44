use crate::app;
use crate::config::Config;
use anyhow::{Result, bail};
use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand, value_parser};
use clidoc::{App, Command, Flag};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Parse the command line and run the selected command.
pub fn run() -> Result<()> {
    let app = app::app();
    let matches = command(&app).get_matches();
    dispatch(&app, &matches)
}

/// Build the parseable clap command from the descriptor tree.
///
/// The descriptor stays the single source of truth: every flag and command
/// the parser accepts is derived from it. The only host-side addition is the
/// manual's positional fragment directories.
pub fn command(app: &App) -> ClapCommand {
    let mut root = ClapCommand::new(app.name.clone())
        .about(app.description.clone())
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true);
    for flag in &app.flags {
        root = root.arg(arg(flag).global(true));
    }
    for command in &app.commands {
        root = root.subcommand(subcommand(command));
    }
    root.mut_subcommand("manual", |manual| {
        manual.arg(
            Arg::new("dir")
                .value_name("DIR")
                .num_args(0..)
                .help("Directories searched for documentation fragments, last match wins"),
        )
    })
}

fn subcommand(command: &Command) -> ClapCommand {
    let mut cmd = ClapCommand::new(command.name.clone()).about(command.usage.clone());
    if !command.description.is_empty() {
        cmd = cmd.long_about(command.description.clone());
    }
    for alias in &command.aliases {
        cmd = cmd.visible_alias(alias.clone());
    }
    if command.hidden {
        cmd = cmd.hide(true);
    }
    if !command.subcommands.is_empty() && !command.runnable {
        cmd = cmd.subcommand_required(true).arg_required_else_help(true);
    }
    for flag in &command.flags {
        cmd = cmd.arg(arg(flag));
    }
    for sub in &command.subcommands {
        cmd = cmd.subcommand(subcommand(sub));
    }
    cmd
}

fn arg(flag: &Flag) -> Arg {
    let names = flag.names();
    let mut arg = Arg::new(names[0].clone()).long(names[0].clone());
    for alias in &names[1..] {
        // Single character names become shorts, anything longer an alias.
        let mut chars = alias.chars();
        match (chars.next(), chars.next()) {
            (Some(short), None) => arg = arg.short(short),
            _ => arg = arg.visible_alias(alias.clone()),
        }
    }
    if let Some(var) = flag.env_vars().first() {
        arg = arg.env(var.clone());
    }
    if !flag.usage().is_empty() {
        arg = arg.help(flag.usage().to_string());
    }
    match flag {
        Flag::Bool(_) => arg.action(ArgAction::SetTrue),
        Flag::String(_) => arg.action(ArgAction::Set),
        Flag::Int(_) => arg.action(ArgAction::Set).value_parser(value_parser!(i64)),
    }
}

fn dispatch(app: &App, matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("manual", sub)) => manual(app, sub),
        Some(("commands", sub)) => {
            let mut stdout = io::stdout().lock();
            clidoc::commands(
                app,
                sub.get_flag("description"),
                sub.get_flag("relative"),
                &mut stdout,
            )?;
            Ok(())
        }
        Some(("envvars", _)) => {
            let mut stdout = io::stdout().lock();
            clidoc::envvars(app, &mut stdout)?;
            Ok(())
        }
        Some(("config", sub)) => config(sub),
        Some(("sync", sub)) => sync(sub),
        Some(("telemetry", sub)) => telemetry(sub),
        _ => bail!("a subcommand is required"),
    }
}

fn manual(app: &App, matches: &ArgMatches) -> Result<()> {
    let mut dirs = load_config(matches)?.template_dirs;
    if let Some(extra) = matches.get_many::<String>("dir") {
        dirs.extend(extra.map(PathBuf::from));
    }
    match matches.get_one::<String>("output") {
        Some(path) => {
            // A failed render must not truncate an existing file.
            let text = clidoc::render(app, &dirs)?;
            fs::write(path, text)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            clidoc::manual(app, &dirs, &mut stdout)?;
        }
    }
    Ok(())
}

fn config(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("get", sub)) => {
            let config = load_config(sub)?;
            match sub.get_one::<String>("format").map(String::as_str) {
                Some("toml") => print!("{}", toml::to_string(&config)?),
                _ => {
                    for dir in &config.template_dirs {
                        println!("{}", dir.display());
                    }
                }
            }
            Ok(())
        }
        Some(("set", _)) => {
            println!("the demo configuration is read-only, edit the file directly");
            Ok(())
        }
        _ => bail!("a subcommand is required"),
    }
}

fn sync(matches: &ArgMatches) -> Result<()> {
    let jobs = matches.get_one::<i64>("jobs").copied().unwrap_or(1);
    if matches.get_flag("verbose") {
        println!("fetching remote state");
    }
    if matches.get_flag("dry-run") {
        println!("dry-run: would synchronize with {} workers", jobs);
        return Ok(());
    }
    println!("synchronized with {} workers", jobs);
    Ok(())
}

fn telemetry(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("flush", _)) => {
            println!("telemetry buffer flushed");
            Ok(())
        }
        _ => bail!("a subcommand is required"),
    }
}

fn load_config(matches: &ArgMatches) -> Result<Config> {
    match matches.get_one::<String>("config") {
        Some(path) => Config::load_from(Path::new(path)),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clidoc::BoolFlag;

    #[test]
    fn test_command_tree_parses_nested_paths() {
        let app = app::app();
        let matches = command(&app)
            .try_get_matches_from(["clidoc-demo", "config", "get", "--format", "toml"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "config");
        let (name, sub) = sub.subcommand().unwrap();
        assert_eq!(name, "get");
        assert_eq!(sub.get_one::<String>("format").map(String::as_str), Some("toml"));
    }

    #[test]
    fn test_command_aliases_resolve() {
        let app = app::app();
        let matches = command(&app)
            .try_get_matches_from(["clidoc-demo", "s", "--dry-run", "-j", "4"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "sync");
        assert!(sub.get_flag("dry-run"));
        assert_eq!(sub.get_one::<i64>("jobs").copied(), Some(4));
    }

    #[test]
    fn test_longer_flag_aliases_resolve_as_long_forms() {
        let app = App::new("demo")
            .command(
                Command::new("list")
                    .runnable()
                    .flag(BoolFlag::new("relative").alias("rel")),
            )
            .command(clidoc::manual_command());
        let matches = command(&app)
            .try_get_matches_from(["demo", "list", "--rel"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "list");
        assert!(sub.get_flag("relative"));
    }

    #[test]
    fn test_manual_accepts_positional_directories() {
        let app = app::app();
        let matches = command(&app)
            .try_get_matches_from(["clidoc-demo", "manual", "docs/a", "docs/b"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "manual");
        let dirs: Vec<&String> = sub.get_many::<String>("dir").unwrap().collect();
        assert_eq!(dirs, ["docs/a", "docs/b"]);
    }

    #[test]
    fn test_global_config_flag_reaches_subcommands() {
        let app = app::app();
        let matches = command(&app)
            .try_get_matches_from(["clidoc-demo", "--config", "demo.toml", "config", "get"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        let (_, get) = sub.subcommand().unwrap();
        assert_eq!(
            get.get_one::<String>("config").map(String::as_str),
            Some("demo.toml")
        );
    }

    #[test]
    fn test_containers_require_a_subcommand() {
        let app = app::app();
        let result = command(&app).try_get_matches_from(["clidoc-demo", "config"]);
        assert!(result.is_err());
    }
}
