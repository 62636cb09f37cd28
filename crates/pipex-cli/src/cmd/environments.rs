use crate::output::{print_json, print_table};
use pipex_core::reference::environments;

pub fn run(json: bool) -> anyhow::Result<()> {
    let envs = environments();

    if json {
        return print_json(&envs);
    }

    let rows: Vec<Vec<String>> = envs
        .into_iter()
        .map(|e| vec![e.name, e.purpose, e.promotion_gate])
        .collect();
    print_table(&["ENVIRONMENT", "PURPOSE", "PROMOTION GATE"], rows);
    Ok(())
}
