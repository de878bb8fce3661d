use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Tags serialized without a closing tag
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta"];

/// Virtual DOM node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        styles: BTreeMap<String, String>,
        children: Vec<VNode>,
        /// Id of the document element this node frames
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },

    /// Text node
    Text { content: String },

    /// Comment node
    Comment { content: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            children: Vec::new(),
            key: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn comment(content: impl Into<String>) -> Self {
        VNode::Comment {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        if let VNode::Element {
            key: ref mut node_key,
            ..
        } = self
        {
            *node_key = Some(key.into());
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            _ => None,
        }
    }

    pub fn style(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { styles, .. } => styles.get(key).map(String::as_str),
            _ => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            VNode::Element { key, .. } => key.as_deref(),
            _ => None,
        }
    }

    /// Depth-first search for the first node matching `pred`
    pub fn find(&self, pred: &dyn Fn(&VNode) -> bool) -> Option<&VNode> {
        if pred(self) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(pred))
    }

    /// Every node matching `pred`, in document order
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&VNode) -> bool) -> Vec<&'a VNode> {
        let mut found = Vec::new();
        self.collect(pred, &mut found);
        found
    }

    fn collect<'a>(&'a self, pred: &dyn Fn(&VNode) -> bool, found: &mut Vec<&'a VNode>) {
        if pred(self) {
            found.push(self);
        }
        for child in self.children() {
            child.collect(pred, found);
        }
    }

    /// Concatenated text content of this subtree
    pub fn text_content(&self) -> String {
        match self {
            VNode::Text { content } => content.clone(),
            VNode::Comment { .. } => String::new(),
            VNode::Element { children, .. } => children.iter().map(VNode::text_content).collect(),
        }
    }

    /// Serialize to HTML. Attributes and style properties come out in key
    /// order, so equal trees always produce equal strings.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            VNode::Text { content } => out.push_str(&escape(content)),
            VNode::Comment { content } => {
                let _ = write!(out, "<!-- {} -->", content.replace("--", "- -"));
            }
            VNode::Element {
                tag,
                attributes,
                styles,
                children,
                key,
            } => {
                out.push('<');
                out.push_str(tag);
                if let Some(key) = key {
                    let _ = write!(out, " data-element-id=\"{}\"", escape(key));
                }
                for (name, value) in attributes {
                    let _ = write!(out, " {}=\"{}\"", name, escape(value));
                }
                if !styles.is_empty() {
                    let css: Vec<String> = styles.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                    let _ = write!(out, " style=\"{}\"", escape(&css.join("; ")));
                }
                out.push('>');

                if VOID_TAGS.contains(&tag.as_str()) {
                    return;
                }
                for child in children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", tag);
            }
        }
    }
}

fn escape(s: &str) -> String {
    letterpress_compiler_html::escape_html(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_is_ordered_and_escaped() {
        let node = VNode::element("a")
            .with_style("padding", "8px")
            .with_style("color", "#fff")
            .with_attr("title", "\"Olá\"")
            .with_attr("href", "https://example.com?a=1&b=2")
            .with_child(VNode::text("Tom & Jerry"));

        assert_eq!(
            node.to_html(),
            "<a href=\"https://example.com?a=1&amp;b=2\" title=\"&quot;Olá&quot;\" \
             style=\"color: #fff; padding: 8px\">Tom &amp; Jerry</a>"
        );
    }

    #[test]
    fn test_void_tags_have_no_closing_tag() {
        let node = VNode::element("div")
            .with_child(VNode::element("img").with_attr("src", "x.png"))
            .with_child(VNode::element("br"));
        assert_eq!(node.to_html(), "<div><img src=\"x.png\"><br></div>");
    }

    #[test]
    fn test_key_becomes_data_attribute() {
        let node = VNode::element("div").with_key("text-2");
        assert_eq!(node.key(), Some("text-2"));
        assert_eq!(node.to_html(), "<div data-element-id=\"text-2\"></div>");
    }

    #[test]
    fn test_find_and_text_content() {
        let tree = VNode::element("div").with_children(vec![
            VNode::element("span").with_attr("data-action", "delete"),
            VNode::element("p").with_child(VNode::text("Olá")),
            VNode::comment("ignored"),
        ]);

        let delete = tree.find(&|n| n.attr("data-action") == Some("delete"));
        assert_eq!(delete.and_then(VNode::tag), Some("span"));
        assert_eq!(tree.find_all(&|n| n.tag().is_some()).len(), 3);
        assert_eq!(tree.text_content(), "Olá");
    }
}
