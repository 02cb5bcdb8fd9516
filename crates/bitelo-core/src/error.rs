use thiserror::Error;

#[derive(Error, Debug)]
pub enum BiteloError {
    #[error("No window available")]
    NoWindow,

    #[error("No document available")]
    NoDocument,

    #[error("Mount target not found: #{0}")]
    MountTargetMissing(String),

    #[error("Mount target is not an HTML element: #{0}")]
    MountTargetNotHtml(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BiteloError>;
