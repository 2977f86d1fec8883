use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("empty prompt")]
    EmptyPrompt,

    #[error("cannot resolve path {path}: {source}")]
    PathResolve {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot express {0} as a file URL")]
    FileUrl(String),
}
