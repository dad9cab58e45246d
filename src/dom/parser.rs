use crate::dom::{DomNode, DomTree};
use crate::error::CarouselError;
use scraper::{ElementRef, Html, Node};
use std::collections::HashMap;
use std::path::Path;

/// Tags whose children are dropped (never rendered as carousel content)
const SKIP_CHILDREN: &[&str] = &["script", "style", "noscript", "svg"];

/// Parse a page's markup into a DomTree.
///
/// `source` is recorded verbatim (file path or label) for log messages.
pub fn parse_html(html: &str, source: &str) -> DomTree {
    let document = Html::parse_document(html);

    let title = scraper::Selector::parse("title")
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();

    let root = DomNode::document(vec![convert_element(document.root_element())]);
    log::debug!("parsed {} ({} nodes)", source, root.node_count());

    DomTree {
        root,
        source: source.to_string(),
        title: title.trim().to_string(),
    }
}

/// Read and parse a page from disk.
pub fn load_html_file(path: &Path) -> Result<DomTree, CarouselError> {
    let html = std::fs::read_to_string(path)
        .map_err(|e| CarouselError::new("page-read", format!("{}: {}", path.display(), e)))?;
    Ok(parse_html(&html, &path.display().to_string()))
}

fn convert_element(el: ElementRef<'_>) -> DomNode {
    let tag = el.value().name().to_string();
    let attributes: HashMap<String, String> = el
        .value()
        .attrs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    if SKIP_CHILDREN.contains(&tag.as_str()) {
        return DomNode::element(tag, attributes, Vec::new());
    }

    let children = el
        .children()
        .filter_map(|child_ref| match child_ref.value() {
            Node::Element(_) => ElementRef::wrap(child_ref).map(convert_element),
            Node::Text(t) if !t.text.trim().is_empty() => Some(DomNode::text(t.text.to_string())),
            _ => None,
        })
        .collect();

    DomNode::element(tag, attributes, children)
}
