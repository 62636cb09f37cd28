use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use pipex_core::catalog::StageCatalog;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum CatalogSubcommand {
    /// Load a catalog file and check its invariants
    Validate { file: PathBuf },
    /// Write the built-in catalog as YAML to stdout
    Export,
}

pub fn run(subcmd: CatalogSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        CatalogSubcommand::Validate { file } => validate(&file, json),
        CatalogSubcommand::Export => export(),
    }
}

fn validate(file: &Path, json: bool) -> anyhow::Result<()> {
    let catalog = StageCatalog::load(file)
        .with_context(|| format!("catalog '{}' is not valid", file.display()))?;

    if json {
        print_json(&serde_json::json!({
            "file": file,
            "valid": true,
            "stage_count": catalog.len(),
        }))?;
    } else {
        println!(
            "ok: {} stage{}",
            catalog.len(),
            if catalog.len() == 1 { "" } else { "s" }
        );
    }
    Ok(())
}

fn export() -> anyhow::Result<()> {
    let yaml = StageCatalog::builtin()
        .to_yaml()
        .context("failed to serialize built-in catalog")?;
    print!("{yaml}");
    Ok(())
}
