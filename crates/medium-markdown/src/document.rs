use super::block::convert_block;
use super::context::ConversionContext;
use super::fetch::Fetch;
use super::front_matter::{FrontMatter, ParsedPost};
use super::metadata::{extract_metadata, file_stem};
use super::node::HtmlDocument;
use super::options::ConversionOptions;
use super::parser::parse_html;
use crate::ConvertError;
use itertools::Itertools;
use std::path::PathBuf;

#[derive(Debug)]
pub struct ConvertedDocument {
    /// Front matter followed by the body.
    pub markdown: String,
    pub post: ParsedPost,
    /// `{date}-{name}`, shared by the Markdown file and downloaded images.
    pub file_stem: String,
    pub images: Vec<PathBuf>,
    /// Failures that were skipped over: missing metadata, images without a
    /// webp variant, failed image downloads.
    pub warnings: Vec<ConvertError>,
    pub dom: Option<HtmlDocument>,
}

impl ConvertedDocument {
    pub fn file_name(&self) -> String {
        format!("{}.md", self.file_stem)
    }
}

pub fn convert_html(
    html_input: &str,
    options: &ConversionOptions,
    fetcher: &dyn Fetch,
) -> Result<ConvertedDocument, ConvertError> {
    convert_document(parse_html(html_input), options, fetcher)
}

pub fn convert_document(
    document: HtmlDocument,
    options: &ConversionOptions,
    fetcher: &dyn Fetch,
) -> Result<ConvertedDocument, ConvertError> {
    let date = options.current_date();
    let mut metadata_warnings = Vec::new();
    let metadata = extract_metadata(&document, &options.url, &mut metadata_warnings);
    let stem = file_stem(date, options.output_filename.as_deref(), &metadata.title);

    let mut ctx = ConversionContext::new(options, stem.clone(), fetcher);
    ctx.title = metadata.title;
    ctx.author = metadata.author;
    ctx.url = metadata.url;
    ctx.extend_warnings(metadata_warnings);

    let mut fragments = Vec::new();
    for node in &document.children {
        if let Some(fragment) = convert_block(node, &mut ctx)? {
            fragments.push(fragment);
        }
    }

    let front_matter = FrontMatter {
        title: &ctx.title,
        author: &ctx.author,
        date,
        url: &ctx.url,
    }
    .to_string();
    let contents = fragments.iter().join("\n");
    let markdown = std::iter::once(&front_matter).chain(&fragments).join("\n");

    tracing::info!(
        "Converted \"{}\": {} fragment(s), {} image(s) saved, {} warning(s)",
        ctx.title,
        fragments.len(),
        ctx.image_sequence(),
        ctx.warnings().len()
    );

    let post = ParsedPost {
        title: ctx.title.clone(),
        author: ctx.author.clone(),
        contents,
        date: date.format("%Y-%m-%d").to_string(),
        url: ctx.url.clone(),
    };
    let (images, warnings) = ctx.into_parts();

    Ok(ConvertedDocument {
        markdown,
        post,
        file_stem: stem,
        images,
        warnings,
        dom: options.retain_dom.then_some(document),
    })
}
