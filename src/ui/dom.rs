//! Markup tree, mutable document and testing-library style queries
//!
//! Views build [`El`] trees, which are plain values and serialize to HTML.
//! Mounting an `El` into a [`Document`] turns it into arena nodes addressed by
//! [`NodeId`], so handlers can mutate parts of the page in place.

use crate::core::DomError;
use indexmap::IndexMap;
use regex::Regex;
use std::fmt::Write as _;

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Attribute used by `*_by_test_id` queries
pub const TEST_ID_ATTRIBUTE: &str = "data-testid";

// =============================================================================
// Markup
// =============================================================================

/// A markup node produced by a view
#[derive(Debug, Clone, PartialEq)]
pub enum Markup {
    Element(El),
    Text(String),
}

/// A markup element with ordered attributes
#[derive(Debug, Clone, PartialEq)]
pub struct El {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Markup>,
}

impl El {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Append to the `class` attribute
    pub fn class(mut self, class: &str) -> Self {
        let entry = self.attributes.entry("class".to_string()).or_default();
        if !entry.is_empty() {
            entry.push(' ');
        }
        entry.push_str(class);
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn test_id(self, test_id: &str) -> Self {
        self.attr(TEST_ID_ATTRIBUTE, test_id)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Markup::Text(text.into()));
        self
    }

    pub fn child(mut self, child: El) -> Self {
        self.children.push(Markup::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = El>) -> Self {
        self.children
            .extend(children.into_iter().map(Markup::Element));
        self
    }

    /// Serialize to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(&mut out, &self.tag, &self.attributes, |out| {
            for child in &self.children {
                match child {
                    Markup::Element(el) => out.push_str(&el.to_html()),
                    Markup::Text(text) => out.push_str(&escape_text(text)),
                }
            }
        });
        out
    }
}

fn write_element(
    out: &mut String,
    tag: &str,
    attributes: &IndexMap<String, String>,
    write_children: impl FnOnce(&mut String),
) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in attributes {
        let _ = write!(out, " {}=\"{}\"", name, escape_attribute(value));
    }
    out.push('>');
    if VOID_ELEMENTS.contains(&tag) {
        return;
    }
    write_children(out);
    let _ = write!(out, "</{tag}>");
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

// =============================================================================
// Text matching
// =============================================================================

/// How `*_by_text` queries compare an element's own text
#[derive(Debug, Clone)]
pub enum TextMatch {
    /// Whole normalized text equals the string
    Exact(String),
    /// Regex finds a match anywhere in the normalized text
    Pattern(Regex),
}

impl TextMatch {
    pub fn matches(&self, text: &str) -> bool {
        let normalized = normalize_whitespace(text);
        match self {
            TextMatch::Exact(expected) => normalized == normalize_whitespace(expected),
            TextMatch::Pattern(re) => re.is_match(&normalized),
        }
    }
}

impl std::fmt::Display for TextMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextMatch::Exact(text) => write!(f, "text \"{text}\""),
            TextMatch::Pattern(re) => write!(f, "text /{}/", re.as_str()),
        }
    }
}

impl From<&str> for TextMatch {
    fn from(text: &str) -> Self {
        TextMatch::Exact(text.to_string())
    }
}

impl From<String> for TextMatch {
    fn from(text: String) -> Self {
        TextMatch::Exact(text)
    }
}

impl From<Regex> for TextMatch {
    fn from(re: Regex) -> Self {
        TextMatch::Pattern(re)
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// =============================================================================
// Selectors
// =============================================================================

/// One compound selector: `tag#id.class[attr="value"]`
#[derive(Debug, Clone, Default, PartialEq)]
struct SelectorStep {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attribute: Option<(String, Option<String>)>,
}

/// Parse a descendant-only selector chain such as `tbody tr` or `#root .content`
fn parse_selector(selector: &str) -> Result<Vec<SelectorStep>, DomError> {
    let unsupported = || DomError::UnsupportedSelector {
        selector: selector.to_string(),
    };

    let steps = selector
        .split_whitespace()
        .map(|token| parse_selector_step(token).ok_or_else(unsupported))
        .collect::<Result<Vec<_>, _>>()?;

    if steps.is_empty() {
        return Err(unsupported());
    }
    Ok(steps)
}

fn parse_selector_step(token: &str) -> Option<SelectorStep> {
    let mut step = SelectorStep::default();
    let mut rest = token;

    if let Some(open) = rest.find('[') {
        let inner = rest[open..].strip_prefix('[')?.strip_suffix(']')?;
        step.attribute = Some(match inner.split_once('=') {
            Some((name, value)) => (
                name.to_string(),
                Some(value.trim_matches(|c| c == '"' || c == '\'').to_string()),
            ),
            None => (inner.to_string(), None),
        });
        rest = &rest[..open];
    }

    let tag_end = rest.find(['#', '.']).unwrap_or(rest.len());
    if tag_end > 0 {
        step.tag = Some(rest[..tag_end].to_ascii_lowercase());
    }
    rest = &rest[tag_end..];

    while !rest.is_empty() {
        let marker = rest.chars().next()?;
        let body = &rest[1..];
        let end = body.find(['#', '.']).unwrap_or(body.len());
        let name = &body[..end];
        if name.is_empty() {
            return None;
        }
        match marker {
            '#' => step.id = Some(name.to_string()),
            '.' => step.classes.push(name.to_string()),
            _ => return None,
        }
        rest = &body[end..];
    }

    if step == SelectorStep::default() {
        return None;
    }
    Some(step)
}

// =============================================================================
// Document
// =============================================================================

/// Handle to a node of a [`Document`]
///
/// Slots are recycled once their node is detached; the generation tells a
/// recycled slot apart from the node a stale handle used to point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone)]
enum NodeKind {
    Element {
        tag: String,
        attributes: IndexMap<String, String>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// A mutable document rooted at `<body>`
///
/// Clearing a node releases its former subtree; handles into it resolve to
/// nothing afterwards, as do handles taken from another document.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with an empty body
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                generation: 0,
                node: Some(Node {
                    parent: None,
                    children: Vec::new(),
                    kind: NodeKind::Element {
                        tag: "body".to_string(),
                        attributes: IndexMap::new(),
                    },
                }),
            }],
            free: Vec::new(),
            body: NodeId {
                index: 0,
                generation: 0,
            },
        }
    }

    /// Create a document whose body holds an empty `<div id="root">`
    pub fn with_root() -> Self {
        let mut doc = Self::new();
        doc.append(doc.body, &El::new("div").id("root"));
        doc
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// The application root `#root`
    pub fn root(&self) -> Result<NodeId, DomError> {
        self.get_by_id("root")
    }

    /// Number of live nodes, attached or not
    pub fn node_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Number of slots the arena holds, live or free
    pub fn arena_size(&self) -> usize {
        self.slots.len()
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    // --- mutation ------------------------------------------------------------

    /// Replace the body content, `document.body.innerHTML = ...`
    pub fn set_body(&mut self, markup: &El) -> NodeId {
        let body = self.body;
        self.set_inner(body, markup)
    }

    /// Replace all children of `parent` with `markup`
    pub fn set_inner(&mut self, parent: NodeId, markup: &El) -> NodeId {
        self.clear_children(parent);
        self.append(parent, markup)
    }

    /// Remove every child of `parent` and release their subtrees
    pub fn clear_children(&mut self, parent: NodeId) {
        let Some(node) = self.node_mut(parent) else {
            return;
        };
        let mut released = std::mem::take(&mut node.children);
        while let Some(id) = released.pop() {
            let Some(slot) = self
                .slots
                .get_mut(id.index)
                .filter(|slot| slot.generation == id.generation)
            else {
                continue;
            };
            if let Some(node) = slot.node.take() {
                released.extend(node.children);
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(id.index);
            }
        }
    }

    /// Mount `markup` as the last child of `parent`
    pub fn append(&mut self, parent: NodeId, markup: &El) -> NodeId {
        let id = self.create_node(
            Some(parent),
            NodeKind::Element {
                tag: markup.tag.clone(),
                attributes: markup.attributes.clone(),
            },
        );
        for child in &markup.children {
            match child {
                Markup::Element(el) => {
                    self.append(id, el);
                }
                Markup::Text(text) => {
                    self.create_node(Some(id), NodeKind::Text(text.clone()));
                }
            }
        }
        id
    }

    fn create_node(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let node = Node {
            parent,
            children: Vec::new(),
            kind,
        };
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        };
        if let Some(parent_node) = parent.and_then(|parent_id| self.node_mut(parent_id)) {
            parent_node.children.push(id);
        }
        id
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(Node {
            kind: NodeKind::Element { attributes, .. },
            ..
        }) = self.node_mut(id)
        {
            attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if self.has_class(id, class) {
            return;
        }
        let classes = match self.attribute(id, "class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attribute(id, "class", &classes);
    }

    // --- inspection ----------------------------------------------------------

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.node(id)?.kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.node(id)?.kind {
            NodeKind::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            NodeKind::Text(_) => None,
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attribute(id, "class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], |node| node.children.as_slice())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self, id: NodeId) -> String {
        match self.node(id).map(|node| &node.kind) {
            Some(NodeKind::Text(text)) => text.clone(),
            Some(NodeKind::Element { .. }) => self
                .children(id)
                .iter()
                .map(|child| self.text_content(*child))
                .collect(),
            None => String::new(),
        }
    }

    /// Text of the direct text children only, what `getByText` compares
    pub fn own_text(&self, id: NodeId) -> String {
        self.children(id)
            .iter()
            .filter_map(|child| match self.node(*child).map(|node| &node.kind) {
                Some(NodeKind::Text(text)) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// An element is visible unless it or an ancestor is hidden
    pub fn is_visible(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if self.attribute(node, "hidden").is_some()
                || self.attribute(node, "aria-hidden") == Some("true")
                || self
                    .attribute(node, "style")
                    .is_some_and(|style| style.replace(' ', "").contains("display:none"))
            {
                return false;
            }
            current = self.parent(node);
        }
        true
    }

    /// Whether `id` is still reachable from the body
    pub fn is_attached(&self, id: NodeId) -> bool {
        if self.node(id).is_none() {
            return false;
        }
        let mut current = id;
        loop {
            if current == self.body {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(&mut out, id);
        out
    }

    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for child in self.children(id) {
            self.write_node(&mut out, *child);
        }
        out
    }

    fn write_node(&self, out: &mut String, id: NodeId) {
        match self.node(id).map(|node| &node.kind) {
            Some(NodeKind::Text(text)) => out.push_str(&escape_text(text)),
            Some(NodeKind::Element { tag, attributes }) => {
                write_element(out, tag, attributes, |out| {
                    for child in self.children(id) {
                        self.write_node(out, *child);
                    }
                });
            }
            None => {}
        }
    }

    // --- queries -------------------------------------------------------------

    /// All attached elements in document order
    fn elements(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.body];
        while let Some(id) = stack.pop() {
            if let Some(NodeKind::Element { .. }) = self.node(id).map(|node| &node.kind) {
                out.push(id);
                stack.extend(self.children(id).iter().rev());
            }
        }
        out
    }

    fn query_all(&self, predicate: impl Fn(NodeId) -> bool) -> Vec<NodeId> {
        self.elements().into_iter().filter(|id| predicate(*id)).collect()
    }

    fn exactly_one(found: Vec<NodeId>, query: String) -> Result<NodeId, DomError> {
        match found.as_slice() {
            [single] => Ok(*single),
            [] => Err(DomError::NotFound { query }),
            _ => Err(DomError::MultipleFound {
                count: found.len(),
                query,
            }),
        }
    }

    fn at_least_one(found: Vec<NodeId>, query: String) -> Result<Vec<NodeId>, DomError> {
        if found.is_empty() {
            Err(DomError::NotFound { query })
        } else {
            Ok(found)
        }
    }

    pub fn get_by_id(&self, id: &str) -> Result<NodeId, DomError> {
        self.query_all(|node| self.attribute(node, "id") == Some(id))
            .first()
            .copied()
            .ok_or_else(|| DomError::NotFound {
                query: format!("#{id}"),
            })
    }

    pub fn query_all_by_test_id(&self, test_id: &str) -> Vec<NodeId> {
        self.query_all(|node| self.attribute(node, TEST_ID_ATTRIBUTE) == Some(test_id))
    }

    pub fn get_all_by_test_id(&self, test_id: &str) -> Result<Vec<NodeId>, DomError> {
        Self::at_least_one(
            self.query_all_by_test_id(test_id),
            format!("test id {test_id}"),
        )
    }

    pub fn get_by_test_id(&self, test_id: &str) -> Result<NodeId, DomError> {
        Self::exactly_one(
            self.query_all_by_test_id(test_id),
            format!("test id {test_id}"),
        )
    }

    pub fn query_all_by_text(&self, matcher: impl Into<TextMatch>) -> Vec<NodeId> {
        let matcher = matcher.into();
        self.query_all(|node| {
            !matches!(self.tag(node), Some("script" | "style"))
                && matcher.matches(&self.own_text(node))
        })
    }

    pub fn get_all_by_text(&self, matcher: impl Into<TextMatch>) -> Result<Vec<NodeId>, DomError> {
        let matcher = matcher.into();
        let query = matcher.to_string();
        Self::at_least_one(self.query_all_by_text(matcher), query)
    }

    pub fn get_by_text(&self, matcher: impl Into<TextMatch>) -> Result<NodeId, DomError> {
        let matcher = matcher.into();
        let query = matcher.to_string();
        Self::exactly_one(self.query_all_by_text(matcher), query)
    }

    /// `querySelectorAll` for descendant-only selector chains
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, DomError> {
        let steps = parse_selector(selector)?;
        Ok(self.query_all(|node| self.matches_chain(node, &steps)))
    }

    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, DomError> {
        Ok(self.query_selector_all(selector)?.first().copied())
    }

    fn matches_chain(&self, node: NodeId, steps: &[SelectorStep]) -> bool {
        let Some((last, ancestors)) = steps.split_last() else {
            return false;
        };
        if !self.matches_step(node, last) {
            return false;
        }

        // Nearest matching ancestor first; correct for descendant combinators.
        let mut current = self.parent(node);
        for step in ancestors.iter().rev() {
            loop {
                let Some(candidate) = current else {
                    return false;
                };
                current = self.parent(candidate);
                if self.matches_step(candidate, step) {
                    break;
                }
            }
        }
        true
    }

    fn matches_step(&self, node: NodeId, step: &SelectorStep) -> bool {
        let Some(tag) = self.tag(node) else {
            return false;
        };
        step.tag.as_deref().is_none_or(|t| t == "*" || t == tag)
            && step
                .id
                .as_deref()
                .is_none_or(|id| self.attribute(node, "id") == Some(id))
            && step.classes.iter().all(|class| self.has_class(node, class))
            && step.attribute.as_ref().is_none_or(|(name, value)| {
                match (self.attribute(node, name), value) {
                    (Some(actual), Some(expected)) => actual == expected,
                    (Some(_), None) => true,
                    (None, _) => false,
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> El {
        El::new("div")
            .class("layout")
            .child(El::new("h1").test_id("title").text(" Mes notes de frais "))
            .child(
                El::new("table").child(
                    El::new("tbody")
                        .test_id("tbody")
                        .child(El::new("tr").child(El::new("td").text("2004-04-04")))
                        .child(El::new("tr").child(El::new("td").text("2003-03-03"))),
                ),
            )
            .child(
                El::new("div")
                    .test_id("hidden-box")
                    .attr("style", "display: none;")
                    .child(El::new("span").text("inside")),
            )
    }

    #[test]
    fn test_html_escaping() {
        let html = El::new("p")
            .attr("title", "a \"quote\"")
            .text("<script>&")
            .to_html();
        assert_eq!(
            html,
            "<p title=\"a &quot;quote&quot;\">&lt;script&gt;&amp;</p>"
        );
    }

    #[test]
    fn test_void_elements_are_not_closed() {
        let html = El::new("img").attr("src", "x.jpg").to_html();
        assert_eq!(html, "<img src=\"x.jpg\">");
    }

    #[test]
    fn test_get_by_text_normalizes_whitespace() {
        let mut doc = Document::new();
        doc.set_body(&sample());

        let title = doc.get_by_text("Mes notes de frais").unwrap();
        assert_eq!(doc.attribute(title, TEST_ID_ATTRIBUTE), Some("title"));
    }

    #[test]
    fn test_get_all_by_text_with_regex() {
        let mut doc = Document::new();
        doc.set_body(&sample());

        let dates = doc
            .get_all_by_text(Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
            .unwrap();
        let texts: Vec<String> = dates.iter().map(|id| doc.own_text(*id)).collect();
        assert_eq!(texts, ["2004-04-04", "2003-03-03"]);
    }

    #[test]
    fn test_get_by_text_requires_single_match() {
        let mut doc = Document::new();
        doc.set_body(&sample());

        let err = doc
            .get_by_text(Regex::new(r"\d{4}").unwrap())
            .unwrap_err();
        assert!(matches!(err, DomError::MultipleFound { count: 2, .. }));

        let err = doc.get_by_text("absent").unwrap_err();
        assert!(matches!(err, DomError::NotFound { .. }));
    }

    #[test]
    fn test_query_selector_all_descendants() {
        let mut doc = Document::new();
        doc.set_body(&sample());

        assert_eq!(doc.query_selector_all("tbody tr").unwrap().len(), 2);
        assert_eq!(doc.query_selector_all("div.layout td").unwrap().len(), 2);
        assert_eq!(
            doc.query_selector_all("[data-testid=\"tbody\"] tr")
                .unwrap()
                .len(),
            2
        );
        assert!(doc.query_selector_all("thead tr").unwrap().is_empty());
        assert!(doc.query_selector_all("   ").is_err());
    }

    #[test]
    fn test_visibility_follows_ancestors() {
        let mut doc = Document::new();
        doc.set_body(&sample());

        let span = doc.get_by_text("inside").unwrap();
        assert!(!doc.is_visible(span));

        let title = doc.get_by_test_id("title").unwrap();
        assert!(doc.is_visible(title));
    }

    #[test]
    fn test_set_inner_detaches_previous_children() {
        let mut doc = Document::with_root();
        let root = doc.root().unwrap();

        doc.set_inner(root, &sample());
        let old_title = doc.get_by_test_id("title").unwrap();

        doc.set_inner(root, &El::new("p").text("Loading..."));

        assert!(!doc.is_attached(old_title));
        assert!(doc.get_by_test_id("title").is_err());
        assert!(doc.get_by_text("Loading...").is_ok());
        assert_eq!(doc.inner_html(root), "<p>Loading...</p>");
    }

    #[test]
    fn test_cleared_nodes_are_reused() {
        let mut doc = Document::with_root();
        let root = doc.root().unwrap();

        doc.set_inner(root, &sample());
        let size = doc.arena_size();
        let live = doc.node_count();

        for _ in 0..100 {
            doc.set_inner(root, &sample());
        }

        assert_eq!(doc.arena_size(), size);
        assert_eq!(doc.node_count(), live);
    }

    #[test]
    fn test_stale_handle_resolves_to_nothing() {
        let mut doc = Document::with_root();
        let root = doc.root().unwrap();

        doc.set_inner(root, &sample());
        let old_title = doc.get_by_test_id("title").unwrap();
        doc.set_inner(root, &sample());

        assert_eq!(doc.tag(old_title), None);
        assert_eq!(doc.attribute(old_title, "data-testid"), None);
        assert!(doc.children(old_title).is_empty());
        assert_eq!(doc.text_content(old_title), "");
        assert!(!doc.is_attached(old_title));
        assert!(doc.get_by_test_id("title").is_ok());
    }

    #[test]
    fn test_handle_from_larger_document_does_not_panic() {
        let mut large = Document::with_root();
        let root = large.root().unwrap();
        large.set_inner(root, &sample());
        let title = large.get_by_test_id("title").unwrap();

        let small = Document::new();

        assert_eq!(small.tag(title), None);
        assert_eq!(small.parent(title), None);
        assert_eq!(small.outer_html(title), "");
        assert!(small.children(title).is_empty());
    }

    #[test]
    fn test_add_class_is_idempotent() {
        let mut doc = Document::with_root();
        let root = doc.root().unwrap();

        doc.add_class(root, "active-icon");
        doc.add_class(root, "active-icon");

        assert_eq!(doc.attribute(root, "class"), Some("active-icon"));
    }
}
