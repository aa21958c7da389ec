use super::node::HtmlDocument;
use crate::ConvertError;
use chrono::NaiveDate;
use regex_lite::Regex;
use std::sync::LazyLock;

static ILLEGAL_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("valid filename regex"));

pub const UNTITLED_FILE_NAME: &str = "untitled";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Metadata {
    pub title: String,
    pub author: String,
    pub url: String,
}

fn meta_or_warn(
    document: &HtmlDocument,
    key: &str,
    value: &str,
    warnings: &mut Vec<ConvertError>,
) -> String {
    match document.meta_content(key, value) {
        Some(content) => content.to_string(),
        None => {
            let warning = ConvertError::Metadata {
                selector: format!("{}=\"{}\"", key, value),
            };
            tracing::warn!("{}", warning);
            warnings.push(warning);
            String::new()
        }
    }
}

/// Reads title, author and canonical URL. Missing elements degrade to empty
/// strings; a non-empty `source_url` wins over `og:url`.
pub fn extract_metadata(
    document: &HtmlDocument,
    source_url: &str,
    warnings: &mut Vec<ConvertError>,
) -> Metadata {
    let url = if source_url.is_empty() {
        meta_or_warn(document, "property", "og:url", warnings)
    } else {
        source_url.to_string()
    };

    Metadata {
        title: meta_or_warn(document, "name", "title", warnings),
        author: meta_or_warn(document, "name", "author", warnings),
        url,
    }
}

/// Removes characters that are illegal in file names and turns spaces into `_`.
pub fn sanitize_title(title: &str) -> String {
    ILLEGAL_FILENAME_CHARS
        .replace_all(title, "")
        .replace(' ', "_")
}

/// `{date}-{name}`, where `name` is the override (without `.md`), else the
/// sanitized title, else [`UNTITLED_FILE_NAME`].
pub fn file_stem(date: NaiveDate, output_filename: Option<&str>, title: &str) -> String {
    let name = match output_filename.filter(|name| !name.is_empty()) {
        Some(name) => name.strip_suffix(".md").unwrap_or(name).to_string(),
        None => {
            let sanitized = sanitize_title(title);
            if sanitized.is_empty() {
                UNTITLED_FILE_NAME.to_string()
            } else {
                sanitized
            }
        }
    };
    format!("{}-{}", date.format("%Y-%m-%d"), name)
}
