use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("invalid project name '{0}': expected lowercase slug with a YYMMDD suffix")]
    InvalidName(String),

    #[error("no project recorded for this prompt")]
    UnknownPrompt,

    #[error("content generation failed: {0}")]
    Generation(String),

    #[error("latex compile failed for '{source_file}': {reason}")]
    Compile { source_file: String, reason: String },

    #[error("remote host error: {0}")]
    Remote(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ForgeError>;
