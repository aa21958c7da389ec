use chrono::NaiveDate;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "medium/origin_md";
pub const DEFAULT_IMAGE_LINK_PATH: &str = "image";
pub const DEFAULT_IMAGE_ALT: &str = "Medium-Image";
/// Class Medium puts on article body paragraphs; other `<p>` elements are page chrome.
pub const BODY_PARAGRAPH_CLASS: &str = "pw-post-body-paragraph";
/// Subdirectory of the output directory that downloaded images are written to.
pub const IMAGE_DIR_NAME: &str = "image";

/// File extension used for downloaded images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageExtension {
    /// Always `.png`, whatever the real encoding is.
    #[default]
    Png,
    /// Extension of the selected source URL path, falling back to `png`.
    FromSource,
}

#[derive(Debug, Clone)]
pub struct ConversionOptions {
    /// Source URL written to the front matter. When empty, `og:url` is used.
    pub url: String,
    pub output_dir: PathBuf,
    /// Output name without the date prefix; a trailing `.md` is dropped.
    pub output_filename: Option<String>,
    /// Path prefix used in image links for downloaded images.
    pub link_image_path: String,
    pub download_images: bool,
    pub image_extension: ImageExtension,
    pub image_alt: String,
    /// Backslash-escape Markdown metacharacters in text outside `<pre>`.
    pub escape_markdown: bool,
    /// Return the parsed tree alongside the Markdown.
    pub retain_dom: bool,
    /// Date written to the front matter and file name; today when `None`.
    pub date: Option<NaiveDate>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        ConversionOptions {
            url: String::new(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_filename: None,
            link_image_path: DEFAULT_IMAGE_LINK_PATH.to_string(),
            download_images: false,
            image_extension: ImageExtension::default(),
            image_alt: DEFAULT_IMAGE_ALT.to_string(),
            escape_markdown: false,
            retain_dom: false,
            date: None,
        }
    }
}

impl ConversionOptions {
    pub fn new(url: impl Into<String>) -> Self {
        ConversionOptions {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn current_date(&self) -> NaiveDate {
        self.date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
