//! # medium-markdown: Medium article HTML to Markdown
//!
//! Converts the rendered HTML of a Medium article into a Markdown document
//! with a front-matter header, optionally downloading the article images.
//!
//! Only the markup patterns Medium uses for article content are recognized:
//!
//! - `<h1>` / `<h2>` headings
//! - `<p class="pw-post-body-paragraph">` body paragraphs (other paragraphs are page chrome)
//! - `<li>` list items and `<pre>` code blocks
//! - `<source srcset="...">` images, using the webp variant
//! - `<b>`/`<strong>`, `<i>`/`<em>`, `<code>`, `<a>` and `<br>` inside those blocks
//!
//! Everything else is walked through to find nested matches.
//!
//! ## Quick Start
//!
//! ```rust
//! use medium_markdown::{ConversionOptions, Offline, convert_html};
//!
//! let html = r#"<html><head><meta name="title" content="Hello"></head>
//!     <body><h1>Hello</h1><p class="pw-post-body-paragraph">Some <b>bold</b> text</p></body></html>"#;
//! let options = ConversionOptions::new("https://medium.com/p/hello");
//! let doc = convert_html(html, &options, &Offline).unwrap();
//! assert!(doc.markdown.contains("\n# Hello\n"));
//! assert!(doc.markdown.contains("\nSome **bold**  text\n"));
//! ```
//!
//! ## Image downloads
//!
//! With [`ConversionOptions::download_images`] set, images are fetched through
//! a [`Fetch`] implementation and written to `{output_dir}/image/{stem}_{n}.png`.
//! A failed download is recorded in [`ConvertedDocument::warnings`] and the
//! image is left out; a failed write aborts the conversion.
mod block;
mod context;
mod document;
mod error;
mod fetch;
mod front_matter;
mod image;
mod inline;
mod metadata;
mod node;
mod options;
mod parser;

pub use block::{convert_block, convert_children};
pub use context::ConversionContext;
pub use document::{ConvertedDocument, convert_document, convert_html};
pub use error::ConvertError;
pub use fetch::{Fetch, Offline};
pub use front_matter::{FrontMatter, ParsedPost};
pub use image::{materialize_image, select_webp};
pub use inline::{TextMode, aggregate_inline, escape_markdown, format_inline};
pub use metadata::{Metadata, UNTITLED_FILE_NAME, extract_metadata, file_stem, sanitize_title};
pub use node::{HtmlDocument, HtmlElement, HtmlNode};
pub use options::{
    BODY_PARAGRAPH_CLASS, ConversionOptions, DEFAULT_IMAGE_ALT, DEFAULT_IMAGE_LINK_PATH,
    DEFAULT_OUTPUT_DIR, IMAGE_DIR_NAME, ImageExtension,
};
pub use parser::parse_html;
