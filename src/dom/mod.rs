pub mod parser;
pub mod css;

use std::collections::HashMap;

use css::InlineStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Document,
    Element,
    Text,
}

/// Location of a node as child indices walked from the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(pub Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    fn child(&self, idx: usize) -> Self {
        let mut steps = self.0.clone();
        steps.push(idx);
        Self(steps)
    }
}

/// Internal DOM node. Only the parts of the page the carousel reads or
/// writes are modelled: classes, inline style and text.
#[derive(Debug, Clone)]
pub struct DomNode {
    pub tag: String,
    pub attributes: HashMap<String, String>,
    pub text: String,
    pub children: Vec<DomNode>,
    pub node_type: NodeType,
}

impl DomNode {
    pub fn document(children: Vec<DomNode>) -> Self {
        Self {
            tag: "#document".into(),
            attributes: HashMap::new(),
            text: String::new(),
            children,
            node_type: NodeType::Document,
        }
    }

    pub fn element(
        tag: impl Into<String>,
        attrs: HashMap<String, String>,
        children: Vec<DomNode>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attributes: attrs,
            text: String::new(),
            children,
            node_type: NodeType::Element,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: String::new(),
            attributes: HashMap::new(),
            text: content.into(),
            children: Vec::new(),
            node_type: NodeType::Text,
        }
    }

    /// Element with a `class` attribute and no other attributes.
    pub fn with_class(tag: impl Into<String>, class: &str, children: Vec<DomNode>) -> Self {
        let mut attrs = HashMap::new();
        attrs.insert("class".to_string(), class.to_string());
        Self::element(tag, attrs, children)
    }

    /// Recursively count all nodes in this subtree
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Collect all text content recursively
    pub fn collect_text(&self) -> String {
        let mut buf = String::new();
        self.collect_text_inner(&mut buf);
        buf
    }

    fn collect_text_inner(&self, buf: &mut String) {
        if !self.text.is_empty() {
            if !buf.is_empty() {
                buf.push(' ');
            }
            buf.push_str(self.text.trim());
        }
        for child in &self.children {
            child.collect_text_inner(buf);
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes().any(|c| c == name)
    }

    /// `classList.toggle(name, force)`: adds the class when `force` is true,
    /// removes every occurrence otherwise.
    pub fn toggle_class(&mut self, name: &str, force: bool) {
        if self.has_class(name) == force {
            return;
        }
        let mut classes: Vec<String> = self
            .classes()
            .filter(|c| *c != name)
            .map(str::to_string)
            .collect();
        if force {
            classes.push(name.to_string());
        }
        if classes.is_empty() {
            self.attributes.remove("class");
        } else {
            self.attributes.insert("class".to_string(), classes.join(" "));
        }
    }

    pub fn style_property(&self, name: &str) -> Option<String> {
        let style = InlineStyle::parse(self.attr("style")?);
        style.get(name).map(str::to_string)
    }

    /// Set one inline style declaration, keeping the others as written.
    pub fn set_style_property(&mut self, name: &str, value: &str) {
        let mut style = InlineStyle::parse(self.attr("style").unwrap_or(""));
        style.set(name, value);
        self.attributes.insert("style".to_string(), style.to_string());
    }

    /// Whether inline style hides this node (`display: none`).
    pub fn is_hidden(&self) -> bool {
        self.style_property("display").as_deref() == Some("none")
    }

    /// Paths of all descendants (and self) carrying `class`, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<NodePath> {
        let mut found = Vec::new();
        find_by_class_inner(self, class, &NodePath::root(), &mut found);
        found
    }

    pub fn node(&self, path: &NodePath) -> Option<&DomNode> {
        path.0
            .iter()
            .try_fold(self, |node, &idx| node.children.get(idx))
    }

    pub fn node_mut(&mut self, path: &NodePath) -> Option<&mut DomNode> {
        path.0
            .iter()
            .try_fold(self, |node, &idx| node.children.get_mut(idx))
    }
}

fn find_by_class_inner(node: &DomNode, class: &str, path: &NodePath, found: &mut Vec<NodePath>) {
    if node.node_type == NodeType::Element && node.has_class(class) {
        found.push(path.clone());
    }
    for (idx, child) in node.children.iter().enumerate() {
        find_by_class_inner(child, class, &path.child(idx), found);
    }
}

/// Parsed DOM tree with metadata
#[derive(Debug, Clone)]
pub struct DomTree {
    pub root: DomNode,
    pub source: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DomNode {
        DomNode::document(vec![DomNode::element(
            "main",
            HashMap::new(),
            vec![
                DomNode::with_class("section", "carousel-section lead", vec![DomNode::text("One")]),
                DomNode::with_class("section", "carousel-section", vec![DomNode::text("Two")]),
                DomNode::with_class("span", "swipe-dot", Vec::new()),
            ],
        )])
    }

    #[test]
    fn finds_classes_in_document_order() {
        let root = sample();
        let paths = root.find_by_class("carousel-section");
        assert_eq!(paths, vec![NodePath(vec![0, 0]), NodePath(vec![0, 1])]);
        assert_eq!(root.node(&paths[1]).map(|n| n.collect_text()), Some("Two".to_string()));
    }

    #[test]
    fn missing_class_yields_nothing() {
        assert!(sample().find_by_class("swipe-arrow-left").is_empty());
    }

    #[test]
    fn toggle_class_adds_and_removes() {
        let mut node = DomNode::with_class("div", "carousel-section", Vec::new());
        node.toggle_class("active", true);
        assert!(node.has_class("active"));
        assert_eq!(node.attr("class"), Some("carousel-section active"));

        node.toggle_class("active", true);
        assert_eq!(node.classes().filter(|c| *c == "active").count(), 1);

        node.toggle_class("active", false);
        assert!(!node.has_class("active"));
        node.toggle_class("carousel-section", false);
        assert_eq!(node.attr("class"), None);
    }

    #[test]
    fn style_property_round_trip() {
        let mut attrs = HashMap::new();
        attrs.insert("style".to_string(), "color: red; display:none".to_string());
        let mut node = DomNode::element("div", attrs, Vec::new());
        assert!(node.is_hidden());

        node.set_style_property("display", "block");
        assert!(!node.is_hidden());
        assert_eq!(node.style_property("display").as_deref(), Some("block"));
        assert_eq!(node.style_property("color").as_deref(), Some("red"));
    }

    #[test]
    fn node_mut_follows_path() {
        let mut root = sample();
        let path = NodePath(vec![0, 2]);
        root.node_mut(&path).unwrap().toggle_class("active", true);
        assert!(root.node(&path).unwrap().has_class("active"));
        assert!(root.node(&NodePath(vec![0, 9])).is_none());
    }
}
