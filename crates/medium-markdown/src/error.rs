use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConvertError {
    #[error("Failed to fetch {url}: {message}")]
    #[diagnostic(
        code(medium_markdown::network),
        help("Check the URL, your network connection and the TLS/header options.")
    )]
    Network { url: String, message: String },

    #[error("Missing metadata: <meta {selector}>")]
    #[diagnostic(
        code(medium_markdown::metadata),
        help("The page does not carry the expected <meta> element; the field is left empty.")
    )]
    Metadata { selector: String },

    #[error("Failed to write {}: {source}", path.display())]
    #[diagnostic(
        code(medium_markdown::filesystem),
        help("Make sure the output directory is writable.")
    )]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported markup: {message}")]
    #[diagnostic(code(medium_markdown::unsupported_markup))]
    UnsupportedMarkup { message: String },
}

impl ConvertError {
    pub fn network(url: impl Into<String>, message: impl ToString) -> Self {
        ConvertError::Network {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Filesystem {
            path: path.into(),
            source,
        }
    }
}
