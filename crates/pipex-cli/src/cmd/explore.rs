use crate::source::resolve_catalog;
use crate::tui;
use pipex_core::explorer::StageExplorer;
use std::path::Path;

pub fn run(catalog_path: Option<&Path>) -> anyhow::Result<()> {
    let catalog = resolve_catalog(catalog_path)?;
    tui::run_explorer(StageExplorer::new(catalog))
}
