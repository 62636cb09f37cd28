use crate::output::{print_json, print_table};
use pipex_core::reference::dora_metrics;

pub fn run(json: bool) -> anyhow::Result<()> {
    let metrics = dora_metrics();

    if json {
        return print_json(&metrics);
    }

    let rows: Vec<Vec<String>> = metrics
        .into_iter()
        .map(|m| vec![m.name, m.measures, m.elite_target])
        .collect();
    print_table(&["METRIC", "MEASURES", "ELITE TARGET"], rows);
    Ok(())
}
