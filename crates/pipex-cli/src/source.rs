use anyhow::Context;
use pipex_core::catalog::StageCatalog;
use std::path::Path;

/// Resolve the stage catalog for a command.
///
/// Priority:
/// 1. `--catalog` flag / `PIPEX_CATALOG` env var (passed in as `explicit`)
/// 2. The built-in seven-stage pipeline
pub fn resolve_catalog(explicit: Option<&Path>) -> anyhow::Result<StageCatalog> {
    match explicit {
        Some(path) => StageCatalog::load(path)
            .with_context(|| format!("failed to load catalog '{}'", path.display())),
        None => Ok(StageCatalog::builtin()),
    }
}
