use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("catalog is empty: at least one stage is required")]
    EmptyCatalog,

    #[error("duplicate stage id: {0}")]
    DuplicateStage(u32),

    #[error("stage not found: {0}")]
    StageNotFound(u32),

    #[error("catalog file not found: {0}")]
    CatalogNotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
