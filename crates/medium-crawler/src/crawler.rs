use crate::error::CrawlError;
use crate::http_client::HttpClient;
use crate::saver;
use medium_markdown::{ConversionOptions, ConvertedDocument, convert_html};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use url::Url;

/// Where the article HTML comes from.
#[derive(Debug, Clone)]
pub enum Source {
    Url(Url),
    HtmlFile(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Front matter followed by the Markdown body.
    #[default]
    Markdown,
    /// The parsed post (title, author, date, url, contents) as JSON.
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Default)]
pub struct CrawlResult {
    pub start_time: Option<Instant>,
    pub end_time: Option<Instant>,
    pub images_saved: usize,
    pub warnings: usize,
    pub saved_to: Option<PathBuf>,
}

impl CrawlResult {
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            Some(end.duration_since(start))
        } else {
            None
        }
    }

    pub fn write_stats_to_stderr(&self) {
        let stderr = io::stderr();
        let mut handle = stderr.lock();

        let _ = writeln!(handle, "\n=== Conversion Statistics ===");
        if let Some(path) = &self.saved_to {
            let _ = writeln!(handle, "Saved to: {}", path.display());
        }
        let _ = writeln!(handle, "Images saved: {}", self.images_saved);
        let _ = writeln!(handle, "Warnings: {}", self.warnings);

        if let Some(duration) = self.duration() {
            let _ = writeln!(handle, "Total duration: {:.2}s", duration.as_secs_f64());
        }
        let _ = writeln!(handle, "=============================\n");
    }
}

#[derive(Debug)]
pub struct CrawlOutcome {
    pub document: ConvertedDocument,
    /// The document in the requested output format.
    pub rendered: String,
    pub result: CrawlResult,
}

/// Fetches one article, converts it and saves the result.
#[derive(Debug)]
pub struct Crawler {
    http_client: HttpClient,
    options: ConversionOptions,
    format: OutputFormat,
    to_stdout: bool,
}

impl Crawler {
    pub fn new(
        http_client: HttpClient,
        options: ConversionOptions,
        format: OutputFormat,
        to_stdout: bool,
    ) -> Self {
        Self {
            http_client,
            options,
            format,
            to_stdout,
        }
    }

    /// Runs one conversion. Nothing is written when the page cannot be
    /// loaded, and downloaded images are removed again when the document
    /// cannot be saved.
    pub fn run(&self, source: &Source) -> Result<CrawlOutcome, CrawlError> {
        let mut result = CrawlResult {
            start_time: Some(Instant::now()),
            ..Default::default()
        };

        let mut options = self.options.clone();
        let html = match source {
            Source::Url(url) => {
                if options.url.is_empty() {
                    options.url = url.to_string();
                }
                self.http_client.fetch_text(url.as_str())?
            }
            Source::HtmlFile(path) => {
                tracing::info!("Reading {:?}", path);
                fs::read_to_string(path).map_err(|source| CrawlError::Input {
                    path: path.clone(),
                    source,
                })?
            }
        };

        let document = convert_html(&html, &options, &self.http_client)?;
        for warning in &document.warnings {
            tracing::debug!("Skipped: {}", warning);
        }

        let rendered = self.render(&document)?;
        if !self.to_stdout {
            let file_name = format!("{}.{}", document.file_stem, self.format.extension());
            match saver::save(&options.output_dir, &file_name, &rendered) {
                Ok(path) => result.saved_to = Some(path),
                Err(e) => {
                    remove_images(&document.images);
                    return Err(e.into());
                }
            }
        }

        result.images_saved = document.images.len();
        result.warnings = document.warnings.len();
        result.end_time = Some(Instant::now());

        Ok(CrawlOutcome {
            document,
            rendered,
            result,
        })
    }

    fn render(&self, document: &ConvertedDocument) -> Result<String, CrawlError> {
        match self.format {
            OutputFormat::Markdown => Ok(document.markdown.clone()),
            OutputFormat::Json => Ok(format!(
                "{}\n",
                serde_json::to_string_pretty(&document.post)?
            )),
        }
    }
}

fn remove_images(images: &[PathBuf]) {
    for image in images {
        if let Err(e) = fs::remove_file(image) {
            tracing::warn!("Failed to remove {:?}: {}", image, e);
        }
    }
}
