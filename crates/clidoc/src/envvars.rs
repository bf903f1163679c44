use crate::command::Flag;
use std::collections::BTreeSet;

/// Collect the distinct environment variable names consumable by any flag in
/// `flags`, sorted ascending. Flags with no binding contribute nothing.
pub(crate) fn collect<'a>(flags: impl IntoIterator<Item = &'a Flag>) -> Vec<String> {
    sorted_unique(
        flags
            .into_iter()
            .flat_map(|flag| flag.env_vars())
            .cloned(),
    )
}

/// Deduplicate and sort ascending, discarding input order.
pub(crate) fn sorted_unique(vars: impl IntoIterator<Item = String>) -> Vec<String> {
    let vars: BTreeSet<String> = vars.into_iter().collect();
    vars.into_iter().collect()
}
