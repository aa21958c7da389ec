//! Fetches a Medium article and saves it as Markdown.
//!
//! This crate wires [`medium_markdown`] to the network and the filesystem:
//! a blocking HTTP client that also serves image downloads, environment
//! configuration, and saving the converted document to the output directory.
//!
//! # Usage
//!
//! ```rust,no_run
//! use medium_crawler::crawler::{Crawler, OutputFormat, Source};
//! use medium_crawler::http_client::HttpClient;
//! use medium_markdown::ConversionOptions;
//! use url::Url;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let url = Url::parse("https://medium.com/@someone/some-post")?;
//!     let crawler = Crawler::new(
//!         HttpClient::default(),
//!         ConversionOptions::default(),
//!         OutputFormat::Markdown,
//!         false,
//!     );
//!     let outcome = crawler.run(&Source::Url(url))?;
//!     println!("Saved to {:?}", outcome.result.saved_to);
//!     Ok(())
//! }
//! ```
//!
//! # Behavior
//!
//! - A failed page fetch aborts the run before anything is written
//! - Failed image downloads are skipped and counted as warnings
//! - The document is saved as `{output_dir}/{YYYY-MM-DD}-{name}.md`
//!   (`.json` with [`crawler::OutputFormat::Json`])
pub mod config;
pub mod crawler;
pub mod error;
pub mod http_client;
pub mod saver;

pub use error::CrawlError;
