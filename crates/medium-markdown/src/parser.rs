//! Maps the `scraper` (html5ever) tree onto [`HtmlNode`].

use super::node::{HtmlDocument, HtmlElement, HtmlNode};
use scraper::{ElementRef, Html, Node};

/// Parses a full HTML page. html5ever always synthesises `<html>`, `<head>`
/// and `<body>`, so fragments come back wrapped in a document as well.
pub fn parse_html(html_input: &str) -> HtmlDocument {
    let document = Html::parse_document(html_input);
    let root = map_element(document.root_element());
    tracing::debug!("Parsed HTML document ({} bytes)", html_input.len());
    HtmlDocument::new(vec![HtmlNode::Element(root)])
}

fn map_element(element: ElementRef<'_>) -> HtmlElement {
    let attributes = element
        .value()
        .attrs()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    let children = element
        .children()
        .filter_map(|child| match child.value() {
            Node::Text(text) => Some(HtmlNode::Text(text.text.to_string())),
            Node::Comment(comment) => Some(HtmlNode::Comment(comment.comment.to_string())),
            Node::Element(_) => ElementRef::wrap(child).map(|el| HtmlNode::Element(map_element(el))),
            _ => None,
        })
        .collect();

    HtmlElement::new(element.value().name(), attributes, children)
}
