use crate::output::{print_json, print_table};
use pipex_core::reference::tool_categories;

pub fn run(json: bool) -> anyhow::Result<()> {
    let categories = tool_categories();

    if json {
        return print_json(&categories);
    }

    let rows: Vec<Vec<String>> = categories
        .into_iter()
        .map(|c| vec![c.category, c.tools.join(", ")])
        .collect();
    print_table(&["CATEGORY", "TOOLS"], rows);
    Ok(())
}
