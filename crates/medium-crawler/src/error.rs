use medium_markdown::ConvertError;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CrawlError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Convert(#[from] ConvertError),

    #[error("Failed to build HTTP client: {0}")]
    #[diagnostic(
        code(medium_crawler::client),
        help("Check the TLS and timeout options.")
    )]
    Client(String),

    #[error("Invalid header '{header}': {message}")]
    #[diagnostic(
        code(medium_crawler::header),
        help("Headers are written as \"Name: Value\", e.g. -H \"User-Agent: Mozilla/5.0\".")
    )]
    InvalidHeader { header: String, message: String },

    #[error("Failed to read {}: {source}", path.display())]
    #[diagnostic(code(medium_crawler::input))]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize post: {0}")]
    #[diagnostic(code(medium_crawler::serialize))]
    Serialize(#[from] serde_json::Error),
}
