use super::node::{HtmlElement, HtmlNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InlineKind {
    Strong,
    Emphasis,
    LineBreak,
    Code,
    Link,
    Passthrough,
}

impl InlineKind {
    fn of(tag_name: &str) -> Self {
        match tag_name {
            "b" | "strong" => InlineKind::Strong,
            "i" | "em" => InlineKind::Emphasis,
            "br" => InlineKind::LineBreak,
            "code" => InlineKind::Code,
            "a" => InlineKind::Link,
            _ => InlineKind::Passthrough,
        }
    }
}

/// How text node contents are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    Verbatim,
    Escaped,
}

const MARKDOWN_METACHARACTERS: &[char] = &['\\', '`', '*', '_', '[', ']', '#'];

pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_METACHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Formats one inline node. Wrapped runs end in a single space so adjacent
/// runs never merge into one emphasis marker.
pub fn format_inline(node: &HtmlNode, mode: TextMode) -> Option<String> {
    match node {
        HtmlNode::Text(text) => Some(match mode {
            TextMode::Verbatim => text.clone(),
            TextMode::Escaped => escape_markdown(text),
        }),
        HtmlNode::Element(el) => Some(format_element(el, mode)),
        HtmlNode::Comment(_) => None,
    }
}

fn format_element(el: &HtmlElement, mode: TextMode) -> String {
    match InlineKind::of(&el.tag_name) {
        InlineKind::Strong => format!("**{}** ", aggregate_inline(el, mode).trim()),
        InlineKind::Emphasis => format!("*{}* ", aggregate_inline(el, mode).trim()),
        InlineKind::LineBreak => "\n".to_string(),
        InlineKind::Code => format!("`{}` ", aggregate_inline(el, mode).trim()),
        InlineKind::Link => format!(
            "[{}]({}) ",
            aggregate_inline(el, mode),
            el.attr("href").unwrap_or_default()
        ),
        InlineKind::Passthrough => aggregate_inline(el, mode),
    }
}

/// Concatenates the formatted direct children of `element` in document order.
pub fn aggregate_inline(element: &HtmlElement, mode: TextMode) -> String {
    element
        .children
        .iter()
        .filter_map(|child| format_inline(child, mode))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn el(tag: &str, text: &str) -> HtmlNode {
        HtmlNode::element(tag, vec![HtmlNode::text(text)])
    }

    fn aggregate(children: Vec<HtmlNode>) -> String {
        let HtmlNode::Element(span) = HtmlNode::element("span", children) else {
            unreachable!()
        };
        aggregate_inline(&span, TextMode::Verbatim)
    }

    #[rstest]
    #[case(el("b", " bold "), "**bold** ")]
    #[case(el("strong", "bold"), "**bold** ")]
    #[case(el("i", "it"), "*it* ")]
    #[case(el("em", " it"), "*it* ")]
    #[case(el("code", " x = 1 "), "`x = 1` ")]
    #[case(HtmlNode::element("br", vec![]), "\n")]
    #[case(el("span", " plain "), " plain ")]
    #[case(HtmlNode::text("*raw*"), "*raw*")]
    fn test_format_inline(#[case] node: HtmlNode, #[case] expected: &str) {
        assert_eq!(format_inline(&node, TextMode::Verbatim).as_deref(), Some(expected));
    }

    #[test]
    fn test_format_inline_comment_is_absent() {
        let node = HtmlNode::Comment("hidden".to_string());
        assert_eq!(format_inline(&node, TextMode::Verbatim), None);
    }

    #[test]
    fn test_link_keeps_text_and_href_verbatim() {
        let node = HtmlNode::element_with_attrs(
            "a",
            &[("href", "https://example.com/a b?x=(1)")],
            vec![HtmlNode::text(" see "), el("b", "this")],
        );
        assert_eq!(
            format_inline(&node, TextMode::Verbatim).as_deref(),
            Some("[ see **this** ](https://example.com/a b?x=(1)) ")
        );
    }

    #[test]
    fn test_link_without_href() {
        let node = el("a", "anchor");
        assert_eq!(
            format_inline(&node, TextMode::Verbatim).as_deref(),
            Some("[anchor]() ")
        );
    }

    #[test]
    fn test_aggregate_preserves_order_and_spacing() {
        let text = aggregate(vec![el("strong", "A"), HtmlNode::text(" and "), el("em", "B")]);
        assert_eq!(text, "**A**  and *B* ");
    }

    #[test]
    fn test_consecutive_bold_runs_keep_separator() {
        let text = aggregate(vec![el("b", "one"), el("b", "two")]);
        assert_eq!(text, "**one** **two** ");
    }

    #[test]
    fn test_nested_formatting() {
        let text = aggregate(vec![HtmlNode::element(
            "strong",
            vec![HtmlNode::text("bold "), el("em", "both")],
        )]);
        assert_eq!(text, "**bold *both*** ");
    }

    #[test]
    fn test_aggregate_skips_comments() {
        let text = aggregate(vec![
            HtmlNode::text("a"),
            HtmlNode::Comment("x".to_string()),
            HtmlNode::text("b"),
        ]);
        assert_eq!(text, "ab");
    }

    #[test]
    fn test_escaped_mode() {
        let node = el("b", "2 * 3 = [six]");
        assert_eq!(
            format_inline(&node, TextMode::Escaped).as_deref(),
            Some(r"**2 \* 3 = \[six\]** ")
        );
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case("a_b", r"a\_b")]
    #[case("# not a heading", r"\# not a heading")]
    #[case(r"back\slash `tick`", r"back\\slash \`tick\`")]
    fn test_escape_markdown(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_markdown(input), expected);
    }
}
