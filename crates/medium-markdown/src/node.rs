use std::collections::HashMap;

/// A node of the parsed page. Comments are kept so the tree mirrors the
/// source, but every conversion path ignores them.
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    Text(String),
    Element(HtmlElement),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HtmlElement {
    pub tag_name: String,
    pub attributes: HashMap<String, String>,
    pub children: Vec<HtmlNode>,
}

/// The top-level nodes of a parsed document, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HtmlDocument {
    pub children: Vec<HtmlNode>,
}

impl HtmlElement {
    pub fn new(tag_name: &str, attributes: HashMap<String, String>, children: Vec<HtmlNode>) -> Self {
        HtmlElement {
            tag_name: tag_name.to_lowercase(),
            attributes,
            children,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether the whitespace separated `class` attribute contains `class_name`.
    pub fn has_class(&self, class_name: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class_name))
    }
}

impl HtmlNode {
    pub fn text(content: &str) -> Self {
        HtmlNode::Text(content.to_string())
    }

    pub fn element(tag_name: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Element(HtmlElement::new(tag_name, HashMap::new(), children))
    }

    pub fn element_with_attrs(
        tag_name: &str,
        attrs: &[(&str, &str)],
        children: Vec<HtmlNode>,
    ) -> Self {
        let attributes = attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HtmlNode::Element(HtmlElement::new(tag_name, attributes, children))
    }

    pub fn as_element(&self) -> Option<&HtmlElement> {
        match self {
            HtmlNode::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Depth-first, pre-order search for the first element matching `predicate`.
    pub fn find_element<P>(&self, predicate: &P) -> Option<&HtmlElement>
    where
        P: Fn(&HtmlElement) -> bool,
    {
        let el = self.as_element()?;
        if predicate(el) {
            return Some(el);
        }
        el.children.iter().find_map(|child| child.find_element(predicate))
    }
}

impl HtmlDocument {
    pub fn new(children: Vec<HtmlNode>) -> Self {
        Self { children }
    }

    pub fn find_element<P>(&self, predicate: P) -> Option<&HtmlElement>
    where
        P: Fn(&HtmlElement) -> bool,
    {
        self.children
            .iter()
            .find_map(|child| child.find_element(&predicate))
    }

    /// First `<meta>` whose `key` attribute equals `value`, returning its `content`.
    pub fn meta_content(&self, key: &str, value: &str) -> Option<&str> {
        self.find_element(|el| el.tag_name == "meta" && el.attr(key) == Some(value))
            .and_then(|el| el.attr("content"))
    }
}
