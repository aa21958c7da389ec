use crate::fetch::Fetch;
use crate::options::{ConversionOptions, IMAGE_DIR_NAME, ImageExtension};
use crate::ConvertError;
use std::path::{Path, PathBuf};

/// Mutable state for exactly one conversion.
pub struct ConversionContext<'a> {
    pub title: String,
    pub author: String,
    pub url: String,
    pub(crate) output_dir: PathBuf,
    pub(crate) file_stem: String,
    pub(crate) link_image_path: String,
    pub(crate) image_alt: String,
    pub(crate) image_extension: ImageExtension,
    pub(crate) escape_markdown: bool,
    pub(crate) download_images: bool,
    image_sequence: usize,
    saved_images: Vec<PathBuf>,
    warnings: Vec<ConvertError>,
    fetcher: &'a dyn Fetch,
}

impl<'a> ConversionContext<'a> {
    pub fn new(options: &ConversionOptions, file_stem: String, fetcher: &'a dyn Fetch) -> Self {
        ConversionContext {
            title: String::new(),
            author: String::new(),
            url: options.url.clone(),
            output_dir: options.output_dir.clone(),
            file_stem,
            link_image_path: options.link_image_path.clone(),
            image_alt: options.image_alt.clone(),
            image_extension: options.image_extension,
            escape_markdown: options.escape_markdown,
            download_images: options.download_images,
            image_sequence: 0,
            saved_images: Vec::new(),
            warnings: Vec::new(),
            fetcher,
        }
    }

    pub fn image_sequence(&self) -> usize {
        self.image_sequence
    }

    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    pub fn warnings(&self) -> &[ConvertError] {
        &self.warnings
    }

    pub fn saved_images(&self) -> &[PathBuf] {
        &self.saved_images
    }

    pub(crate) fn fetcher(&self) -> &'a dyn Fetch {
        self.fetcher
    }

    pub(crate) fn image_dir(&self) -> PathBuf {
        self.output_dir.join(IMAGE_DIR_NAME)
    }

    /// File name the next persisted image gets; the counter itself only moves
    /// in [`Self::record_saved_image`].
    pub(crate) fn next_image_file_name(&self, extension: &str) -> String {
        format!("{}_{}.{}", self.file_stem, self.image_sequence, extension)
    }

    pub(crate) fn record_saved_image(&mut self, path: &Path) {
        self.saved_images.push(path.to_path_buf());
        self.image_sequence += 1;
    }

    /// Records a best-effort failure that did not abort the conversion.
    pub fn warn(&mut self, warning: ConvertError) {
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Adds warnings that were already logged where they were raised.
    pub(crate) fn extend_warnings(&mut self, warnings: Vec<ConvertError>) {
        self.warnings.extend(warnings);
    }

    pub(crate) fn into_parts(self) -> (Vec<PathBuf>, Vec<ConvertError>) {
        (self.saved_images, self.warnings)
    }
}
