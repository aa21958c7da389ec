use super::context::ConversionContext;
use super::image::materialize_image;
use super::inline::{TextMode, aggregate_inline};
use super::node::{HtmlElement, HtmlNode};
use super::options::BODY_PARAGRAPH_CLASS;
use crate::ConvertError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind<'a> {
    Heading1,
    Heading2,
    BodyParagraph,
    /// `<p>` without the body marker class: navigation, footers, captions.
    ChromeParagraph,
    ListItem,
    Preformatted,
    ImageSource(&'a str),
    /// `<source>` without a `srcset`.
    EmptySource,
    Container,
}

impl<'a> BlockKind<'a> {
    fn of(element: &'a HtmlElement) -> Self {
        match element.tag_name.as_str() {
            "h1" => BlockKind::Heading1,
            "h2" => BlockKind::Heading2,
            "p" if element.has_class(BODY_PARAGRAPH_CLASS) => BlockKind::BodyParagraph,
            "p" => BlockKind::ChromeParagraph,
            "li" => BlockKind::ListItem,
            "pre" => BlockKind::Preformatted,
            "source" => element
                .attr("srcset")
                .map_or(BlockKind::EmptySource, BlockKind::ImageSource),
            _ => BlockKind::Container,
        }
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}

/// Converts `node` and every recognized descendant. `Ok(None)` means the
/// subtree contributes nothing, which is different from an empty fragment.
pub fn convert_block(
    node: &HtmlNode,
    ctx: &mut ConversionContext<'_>,
) -> Result<Option<String>, ConvertError> {
    let HtmlNode::Element(element) = node else {
        return Ok(None);
    };

    let text_mode = if ctx.escape_markdown {
        TextMode::Escaped
    } else {
        TextMode::Verbatim
    };

    let fragment = match BlockKind::of(element) {
        BlockKind::Heading1 => {
            non_empty(aggregate_inline(element, text_mode)).map(|text| format!("\n# {}\n", text))
        }
        BlockKind::Heading2 => {
            non_empty(aggregate_inline(element, text_mode)).map(|text| format!("\n## {}\n", text))
        }
        BlockKind::BodyParagraph => non_empty(aggregate_inline(element, text_mode))
            .map(|text| format!("\n{}\n", text.trim())),
        BlockKind::ChromeParagraph => None,
        BlockKind::ListItem => {
            non_empty(aggregate_inline(element, text_mode)).map(|text| format!("\n- {}\n\n", text))
        }
        BlockKind::Preformatted => non_empty(aggregate_inline(element, TextMode::Verbatim))
            .map(|text| format!("```\n{}\n```\n", text)),
        BlockKind::ImageSource(srcset) => materialize_image(srcset, ctx)?,
        BlockKind::EmptySource => None,
        BlockKind::Container => convert_children(&element.children, ctx)?,
    };

    if let Some(ref fragment) = fragment {
        tracing::trace!("<{}> -> {:?}", element.tag_name, fragment);
    }

    Ok(fragment)
}

/// Block-converts each node in order and concatenates the results without a
/// separator.
pub fn convert_children(
    nodes: &[HtmlNode],
    ctx: &mut ConversionContext<'_>,
) -> Result<Option<String>, ConvertError> {
    let mut parts = Vec::new();
    for node in nodes {
        if let Some(part) = convert_block(node, ctx)? {
            parts.push(part);
        }
    }
    Ok(if parts.is_empty() {
        None
    } else {
        Some(parts.concat())
    })
}
