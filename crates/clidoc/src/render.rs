use crate::command::{App, Flag};
use crate::error::{Error, Result};
use crate::flatten::{FlatCommand, flatten};
use crate::fragment;
use minijinja::value::Value;
use minijinja::{Environment, context};
use serde::Serialize;
use std::path::PathBuf;

type TemplateResult<T> = std::result::Result<T, minijinja::Error>;

/// Template-facing view of one command.
///
/// `path` holds the lineage names followed by the command's own name, which
/// is all the `fullname` helper needs regardless of separator.
#[derive(Debug, Serialize)]
struct CommandView {
    name: String,
    usage: String,
    description: String,
    aliases: Vec<String>,
    path: Vec<String>,
    flags: Vec<FlagView>,
}

impl CommandView {
    fn new(flat: &FlatCommand<'_>) -> Self {
        let mut path: Vec<String> = flat.lineage.iter().map(|c| c.name.clone()).collect();
        path.push(flat.cmd.name.clone());
        CommandView {
            name: flat.cmd.name.clone(),
            usage: flat.cmd.usage.clone(),
            description: flat.cmd.description.clone(),
            aliases: flat.cmd.aliases.clone(),
            path,
            flags: flat.cmd.flags.iter().map(FlagView::new).collect(),
        }
    }
}

/// Template-facing view of one flag.
#[derive(Debug, Serialize)]
struct FlagView {
    names: Vec<String>,
    env_vars: Vec<String>,
    usage: String,
}

impl FlagView {
    fn new(flag: &Flag) -> Self {
        FlagView {
            names: flag.names().to_vec(),
            env_vars: flag.env_vars().to_vec(),
            usage: flag.usage().to_string(),
        }
    }
}

/// Render the manual for `app`.
///
/// The `_commands.md` master template and every fragment it includes are
/// resolved through `dirs` with the embedded defaults last; failing to
/// resolve the master template is fatal. The result is buffered in full, so
/// an error never leaves partial output behind.
pub fn render(app: &App, dirs: &[PathBuf]) -> Result<String> {
    let master = fragment::read(fragment::MASTER, dirs)?;
    let env = environment(dirs.to_vec());
    let commands: Vec<CommandView> = flatten(&app.commands)
        .iter()
        .map(CommandView::new)
        .collect();
    let global_flags: Vec<FlagView> = app.flags.iter().map(FlagView::new).collect();
    let rendered = env.render_named_str(
        fragment::MASTER,
        &master,
        context! {
            Name => app.name,
            Description => app.description,
            GlobalFlags => global_flags,
            Commands => commands,
        },
    )?;
    Ok(rendered)
}

/// Build the template environment: the helper functions plus a `partial`
/// closure bound to the fragment search path.
fn environment(dirs: Vec<PathBuf>) -> Environment<'static> {
    let mut env = Environment::new();
    env.add_function("partial", move |name: String| -> TemplateResult<String> {
        match fragment::read(&format!("{name}.md"), &dirs) {
            Ok(text) => Ok(text),
            // Commands without usage documentation are fine.
            Err(Error::FragmentNotFound { .. }) => Ok(String::new()),
            Err(err) => Err(minijinja::Error::new(
                minijinja::ErrorKind::InvalidOperation,
                format!("failed to include partial for {name}"),
            )
            .with_source(err)),
        }
    });
    env.add_function("join", join);
    env.add_function("fullname", fullname);
    env.add_function("aliases", aliases);
    env.add_function("names", names);
    env.add_function("envvars", envvars);
    env.add_function("description", description);
    env
}

fn join(values: Value, sep: String) -> TemplateResult<String> {
    Ok(string_seq(&values)?.join(&sep))
}

fn fullname(command: Value, sep: String) -> TemplateResult<String> {
    Ok(string_seq(&command.get_attr("path")?)?.join(&sep))
}

fn aliases(command: Value) -> TemplateResult<Value> {
    let aliases: Vec<String> = string_seq(&command.get_attr("aliases")?)?
        .into_iter()
        .filter(|alias| !alias.is_empty())
        .collect();
    Ok(Value::from_serialize(&aliases))
}

fn names(flag: Value) -> TemplateResult<String> {
    let names = string_seq(&flag.get_attr("names")?)?;
    // The first name is always the long name, so skip it.
    if names.len() <= 1 {
        return Ok(String::new());
    }
    Ok(names[1..].join(", "))
}

fn envvars(flag: Value) -> TemplateResult<String> {
    let vars = string_seq(&flag.get_attr("env_vars")?)?;
    Ok(crate::envvars::sorted_unique(vars).join(", "))
}

fn description(flag: Value) -> TemplateResult<String> {
    Ok(flag
        .get_attr("usage")?
        .as_str()
        .unwrap_or_default()
        .to_string())
}

fn string_seq(value: &Value) -> TemplateResult<Vec<String>> {
    Ok(value.try_iter()?.map(|item| item.to_string()).collect())
}
