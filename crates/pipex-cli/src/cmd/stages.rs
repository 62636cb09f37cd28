use crate::output::{print_json, print_table};
use crate::source::resolve_catalog;
use std::path::Path;

pub fn run(catalog_path: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let catalog = resolve_catalog(catalog_path)?;

    if json {
        let stages: Vec<_> = catalog.iter().collect();
        return print_json(&stages);
    }

    let rows: Vec<Vec<String>> = catalog
        .iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                s.title.clone(),
                s.summary.clone(),
                s.tools.len().to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "STAGE", "SUMMARY", "TOOLS"], rows);
    Ok(())
}
