use crate::command::{App, BoolFlag, Command, StringFlag};
use crate::error::Result;
use crate::flatten::flatten;
use crate::render;
use std::env;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

/// Render the Markdown manual for `app` to `out`.
///
/// `dirs` are searched in the given order for the master template and every
/// per-command fragment; later directories override earlier ones and the
/// embedded defaults apply last. Nothing is written unless the whole render
/// succeeds.
pub fn manual(app: &App, dirs: &[PathBuf], out: &mut dyn Write) -> Result<()> {
    let text = render::render(app, dirs)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

/// List every invocable command path, one per line.
///
/// Each line is prefixed with the application name, or with the running
/// executable's path relative to the current working directory when
/// `relative` is set. With `description` set, a `# ...` comment precedes
/// each line, carrying the command's description or, when that is empty, its
/// usage text; commands with neither get no comment.
pub fn commands(app: &App, description: bool, relative: bool, out: &mut dyn Write) -> Result<()> {
    let prefix = if relative {
        relative_invocation()?.display().to_string()
    } else {
        app.name.clone()
    };
    for flat in flatten(&app.commands) {
        if !flat.cmd.runnable {
            continue;
        }
        if description {
            let comment = [&flat.cmd.description, &flat.cmd.usage]
                .into_iter()
                .find(|text| !text.is_empty());
            if let Some(comment) = comment {
                writeln!(out, "# {}", comment)?;
            }
        }
        writeln!(out, "{} {}", prefix, flat)?;
    }
    Ok(())
}

/// Print one `NAME=` line for every environment variable consumable by a
/// global flag or by any flag of a listed command, deduplicated and sorted.
/// The output seeds a `.env` file.
pub fn envvars(app: &App, out: &mut dyn Write) -> Result<()> {
    let mut flags: Vec<_> = app.flags.iter().collect();
    for flat in flatten(&app.commands) {
        flags.extend(flat.cmd.flags.iter());
    }
    for var in crate::envvars::collect(flags) {
        writeln!(out, "{}=", var)?;
    }
    Ok(())
}

fn relative_invocation() -> Result<PathBuf> {
    let cwd = env::current_dir()?;
    let exe = env::current_exe()?;
    Ok(relative_to(&cwd, &exe))
}

/// Express `target` relative to `base` by walking shared components. Both
/// paths are expected to be absolute.
fn relative_to(base: &Path, target: &Path) -> PathBuf {
    let base: Vec<Component> = base.components().collect();
    let target: Vec<Component> = target.components().collect();
    let shared = base
        .iter()
        .zip(target.iter())
        .take_while(|(b, t)| b == t)
        .count();

    let mut relative = PathBuf::new();
    for _ in shared..base.len() {
        relative.push("..");
    }
    for component in &target[shared..] {
        relative.push(component.as_os_str());
    }
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    relative
}

/// Descriptor for mounting the manual operation into a host's command tree.
///
/// Hidden by default so the documentation plumbing stays off the help
/// screen; the host's wiring accepts the fragment directories as positional
/// arguments.
pub fn manual_command() -> Command {
    Command::new("manual")
        .usage("Generate the user manual")
        .alias("man")
        .hidden()
        .runnable()
        .flag(
            StringFlag::new("output")
                .alias("o")
                .usage("Write the manual to a file instead of standard output"),
        )
}

/// Descriptor for mounting the command listing operation.
pub fn commands_command() -> Command {
    Command::new("commands")
        .usage("Print all possible commands")
        .runnable()
        .flag(
            BoolFlag::new("description")
                .alias("d")
                .usage("Print the command description as a comment"),
        )
        .flag(
            BoolFlag::new("relative")
                .alias("r")
                .usage("Specify the command relative to the current working directory"),
        )
}

/// Descriptor for mounting the environment variable listing operation.
pub fn envvars_command() -> Command {
    Command::new("envvars")
        .usage("Print all the possible environment variables")
        .description("Useful for creating a .env file for all possible environment variables")
        .runnable()
}
