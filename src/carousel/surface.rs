//! The DOM the controller writes to.
//!
//! `CarouselSurface` is everything the controller needs from a page;
//! `DomSurface` implements it over a parsed `DomTree`.

use crate::dom::{DomNode, DomTree, NodePath};

use super::options::Selectors;

/// Element collections of one carousel, addressed by index.
///
/// Out-of-range indices are ignored, so a page whose dot collection is
/// shorter than its section collection only loses the missing highlights.
pub trait CarouselSurface {
    fn section_count(&self) -> usize;
    fn dot_count(&self) -> usize;
    /// Show or hide section `idx` and toggle its active class.
    fn set_section_active(&mut self, idx: usize, active: bool);
    fn set_dot_active(&mut self, idx: usize, active: bool);
    fn has_arrows(&self) -> bool;
    fn set_arrows_visible(&mut self, visible: bool);
}

/// Carousel bound to an in-memory DOM by marker classes.
#[derive(Debug, Clone)]
pub struct DomSurface {
    tree: DomTree,
    active_class: String,
    container: Option<NodePath>,
    sections: Vec<NodePath>,
    dots: Vec<NodePath>,
    arrow_left: Option<NodePath>,
    arrow_right: Option<NodePath>,
}

impl DomSurface {
    /// Locate the carousel's elements. The first match wins for the
    /// container and each arrow; sections and dots keep document order.
    pub fn bind(tree: DomTree, selectors: &Selectors) -> Self {
        let root = &tree.root;
        let container = root.find_by_class(&selectors.container).into_iter().next();
        let sections = root.find_by_class(&selectors.section);
        let dots = root.find_by_class(&selectors.dot);
        let arrow_left = root.find_by_class(&selectors.arrow_left).into_iter().next();
        let arrow_right = root.find_by_class(&selectors.arrow_right).into_iter().next();

        log::info!(
            "bound carousel in {}: {} sections, {} dots, arrows: {}",
            tree.source,
            sections.len(),
            dots.len(),
            arrow_left.is_some() || arrow_right.is_some(),
        );
        if container.is_none() {
            log::warn!("no .{} element; swipes cannot be targeted", selectors.container);
        }
        if !dots.is_empty() && dots.len() != sections.len() {
            log::warn!(
                "{} dots for {} sections; highlights beyond the shorter list are lost",
                dots.len(),
                sections.len()
            );
        }

        Self {
            tree,
            active_class: selectors.active.clone(),
            container,
            sections,
            dots,
            arrow_left,
            arrow_right,
        }
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn has_container(&self) -> bool {
        self.container.is_some()
    }

    pub fn section(&self, idx: usize) -> Option<&DomNode> {
        self.tree.root.node(self.sections.get(idx)?)
    }

    pub fn dot(&self, idx: usize) -> Option<&DomNode> {
        self.tree.root.node(self.dots.get(idx)?)
    }

    pub fn arrow_left(&self) -> Option<&DomNode> {
        self.tree.root.node(self.arrow_left.as_ref()?)
    }

    pub fn arrow_right(&self) -> Option<&DomNode> {
        self.tree.root.node(self.arrow_right.as_ref()?)
    }

    pub fn is_active(&self, node: &DomNode) -> bool {
        node.has_class(&self.active_class)
    }

    fn node_mut(&mut self, path: Option<&NodePath>) -> Option<&mut DomNode> {
        self.tree.root.node_mut(path?)
    }
}

impl CarouselSurface for DomSurface {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn dot_count(&self) -> usize {
        self.dots.len()
    }

    fn set_section_active(&mut self, idx: usize, active: bool) {
        let path = self.sections.get(idx).cloned();
        let class = self.active_class.clone();
        if let Some(node) = self.node_mut(path.as_ref()) {
            node.set_style_property("display", if active { "block" } else { "none" });
            node.toggle_class(&class, active);
        }
    }

    fn set_dot_active(&mut self, idx: usize, active: bool) {
        let path = self.dots.get(idx).cloned();
        let class = self.active_class.clone();
        if let Some(node) = self.node_mut(path.as_ref()) {
            node.toggle_class(&class, active);
        }
    }

    fn has_arrows(&self) -> bool {
        self.arrow_left.is_some() || self.arrow_right.is_some()
    }

    fn set_arrows_visible(&mut self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        for path in [self.arrow_left.clone(), self.arrow_right.clone()] {
            if let Some(node) = self.node_mut(path.as_ref()) {
                node.set_style_property("display", display);
            }
        }
    }
}
