use crate::output::print_json;
use crate::source::resolve_catalog;
use anyhow::Context;
use pipex_core::explorer::StageExplorer;
use pipex_core::render::render;
use pipex_core::ExplorerError;
use std::path::Path;

pub fn run(catalog_path: Option<&Path>, id: u32, json: bool) -> anyhow::Result<()> {
    let catalog = resolve_catalog(catalog_path)?;

    if json {
        let stage = catalog
            .get(id)
            .ok_or(ExplorerError::StageNotFound(id))
            .with_context(|| format!("cannot show stage {id}"))?;
        return print_json(stage);
    }

    // Human output: the whole pipeline with the requested stage expanded
    let mut explorer = StageExplorer::new(catalog);
    explorer
        .select(id)
        .with_context(|| format!("cannot show stage {id}"))?;
    print!("{}", render(&explorer));
    Ok(())
}
