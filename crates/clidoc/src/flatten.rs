use crate::command::Command;
use std::fmt;

/// One reachable command paired with its ancestor chain.
#[derive(Debug, Clone)]
pub struct FlatCommand<'a> {
    pub cmd: &'a Command,
    /// Ancestors from the root down to, but not including, `cmd`.
    pub lineage: Vec<&'a Command>,
}

impl FlatCommand<'_> {
    /// The command's path joined with `sep`: lineage names first, own name
    /// last. The empty separator squeezes the path into the form used for
    /// sorting, anchors and fragment file names.
    pub fn full_name(&self, sep: &str) -> String {
        let mut names: Vec<&str> = self.lineage.iter().map(|c| c.name.as_str()).collect();
        names.push(&self.cmd.name);
        names.join(sep)
    }
}

impl fmt::Display for FlatCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name(" "))
    }
}

/// Flatten a command tree into an ordered list of reachable commands.
///
/// Hidden commands are skipped along with their entire subtree, even when
/// descendants are not themselves hidden. The result is sorted by full name
/// with the separator elided; the sort is stable, so commands whose squeezed
/// names collide keep discovery order.
pub fn flatten(commands: &[Command]) -> Vec<FlatCommand<'_>> {
    let mut flat = lineate(commands, &[]);
    flat.sort_by_key(|c| c.full_name(""));
    flat
}

fn lineate<'a>(commands: &'a [Command], lineage: &[&'a Command]) -> Vec<FlatCommand<'a>> {
    let mut flat = Vec::new();
    for cmd in commands {
        if cmd.hidden {
            continue;
        }
        flat.push(FlatCommand {
            cmd,
            lineage: lineage.to_vec(),
        });
        // Each branch gets its own copy so siblings never share a lineage.
        let mut child_lineage = lineage.to_vec();
        child_lineage.push(cmd);
        flat.extend(lineate(&cmd.subcommands, &child_lineage));
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<Command> {
        vec![
            Command::new("sync").runnable(),
            Command::new("config")
                .subcommand(Command::new("get").runnable())
                .subcommand(Command::new("set").runnable()),
        ]
    }

    #[test]
    fn test_flatten_orders_by_squeezed_name() {
        let commands = tree();
        let flat = flatten(&commands);
        let names: Vec<String> = flat.iter().map(|c| c.full_name(" ")).collect();
        assert_eq!(names, ["config", "config get", "config set", "sync"]);
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let commands = tree();
        let first: Vec<String> = flatten(&commands).iter().map(|c| c.full_name("")).collect();
        let second: Vec<String> = flatten(&commands).iter().map(|c| c.full_name("")).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_flatten_records_lineage() {
        let commands = tree();
        let flat = flatten(&commands);
        let get = flat.iter().find(|c| c.cmd.name == "get").unwrap();
        let ancestors: Vec<&str> = get.lineage.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(ancestors, ["config"]);
        assert_eq!(get.full_name("."), "config.get");
    }

    #[test]
    fn test_hidden_subtree_is_skipped_entirely() {
        let commands = vec![
            Command::new("visible").runnable(),
            Command::new("secret")
                .hidden()
                .subcommand(Command::new("inner").runnable()),
        ];
        let flat = flatten(&commands);
        let names: Vec<String> = flat.iter().map(|c| c.full_name(" ")).collect();
        assert_eq!(names, ["visible"]);
    }

    #[test]
    fn test_all_hidden_yields_empty_list() {
        let commands = vec![Command::new("a").hidden(), Command::new("b").hidden()];
        assert!(flatten(&commands).is_empty());
    }

    #[test]
    fn test_leaf_yields_single_record() {
        let commands = vec![Command::new("only").runnable()];
        let flat = flatten(&commands);
        assert_eq!(flat.len(), 1);
        assert!(flat[0].lineage.is_empty());
        assert_eq!(flat[0].to_string(), "only");
    }

    #[test]
    fn test_squeezed_name_ties_keep_discovery_order() {
        // "a b" and "ab" both squeeze to "ab"; the nested command was
        // discovered first and must stay first.
        let commands = vec![
            Command::new("a")
                .runnable()
                .subcommand(Command::new("b").runnable()),
            Command::new("ab").runnable(),
        ];
        let flat = flatten(&commands);
        let names: Vec<String> = flat.iter().map(|c| c.full_name(" ")).collect();
        assert_eq!(names, ["a", "a b", "ab"]);
    }

    #[test]
    fn test_aliases_do_not_create_records() {
        let commands = vec![Command::new("sync").alias("s").alias("sy").runnable()];
        let flat = flatten(&commands);
        assert_eq!(flat.len(), 1);
    }
}
