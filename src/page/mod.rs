//! The page being populated: a parsed HTML document with in-place edits
//!
//! Queries take CSS selectors and return node handles in document order.
//! Edits never fail on a missing node; they simply do nothing.

use ego_tree::{NodeId, NodeRef, Tree};
use html5ever::tendril::StrTendril;
use html5ever::{Attribute, LocalName, Namespace, QualName};
use scraper::node::{Element, Text};
use scraper::{ElementRef, Html, Node, Selector};
use thiserror::Error;

/// Errors raised while querying the page
#[derive(Debug, Error)]
pub enum PageError {
    #[error("invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },
}

/// An HTML document that section renderers patch in place
pub struct Page {
    html: Html,
}

impl Page {
    /// Parse a full HTML document
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// Serialize the current document
    pub fn to_html(&self) -> String {
        self.html.html()
    }

    fn selector(selector: &str) -> Result<Selector, PageError> {
        Selector::parse(selector).map_err(|e| PageError::Selector {
            selector: selector.to_string(),
            message: e.to_string(),
        })
    }

    fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(id).and_then(ElementRef::wrap)
    }

    /// First element matching `selector`, in document order
    pub fn select_first(&self, selector: &str) -> Result<Option<NodeId>, PageError> {
        let selector = Self::selector(selector)?;
        Ok(self
            .html
            .root_element()
            .select(&selector)
            .next()
            .map(|el| el.id()))
    }

    /// Every element matching `selector`, in document order
    pub fn select_all(&self, selector: &str) -> Result<Vec<NodeId>, PageError> {
        let selector = Self::selector(selector)?;
        Ok(self
            .html
            .root_element()
            .select(&selector)
            .map(|el| el.id())
            .collect())
    }

    /// First descendant of `scope` matching `selector`
    pub fn select_first_in(
        &self,
        scope: NodeId,
        selector: &str,
    ) -> Result<Option<NodeId>, PageError> {
        let selector = Self::selector(selector)?;
        Ok(self
            .element(scope)
            .and_then(|el| el.select(&selector).next())
            .map(|el| el.id()))
    }

    /// Text content of an element
    pub fn text(&self, id: NodeId) -> Option<String> {
        self.element(id).map(|el| el.text().collect())
    }

    /// Attribute value of an element
    pub fn attr(&self, id: NodeId, name: &str) -> Option<String> {
        self.element(id)
            .and_then(|el| el.value().attr(name))
            .map(str::to_string)
    }

    /// Number of child elements
    pub fn child_element_count(&self, id: NodeId) -> usize {
        self.html
            .tree
            .get(id)
            .map(|node| node.children().filter(|c| c.value().is_element()).count())
            .unwrap_or(0)
    }

    /// Remove every child node
    pub fn clear_children(&mut self, id: NodeId) {
        let children: Vec<NodeId> = match self.html.tree.get(id) {
            Some(node) => node.children().map(|c| c.id()).collect(),
            None => return,
        };

        for child in children {
            if let Some(mut node) = self.html.tree.get_mut(child) {
                node.detach();
            }
        }
    }

    /// Replace the children of an element with a single text node.
    /// The text is never interpreted as markup.
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        self.clear_children(id);
        if let Some(mut node) = self.html.tree.get_mut(id) {
            node.append(Node::Text(Text {
                text: StrTendril::from(text),
            }));
        }
    }

    /// Set (or add) an attribute, keeping the others in place
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        let Some(mut node) = self.html.tree.get_mut(id) else {
            return;
        };

        let rebuilt = match node.value() {
            Node::Element(element) => {
                let mut replaced = false;
                let mut attrs: Vec<Attribute> = element
                    .attrs()
                    .map(|(key, current)| {
                        if key == name {
                            replaced = true;
                            attribute(key, value)
                        } else {
                            attribute(key, current)
                        }
                    })
                    .collect();
                if !replaced {
                    attrs.push(attribute(name, value));
                }
                Element::new(element.name.clone(), attrs)
            }
            _ => return,
        };

        *node.value() = Node::Element(rebuilt);
    }

    /// Parse `markup` as a fragment and append its nodes to an element
    pub fn append_html(&mut self, id: NodeId, markup: &str) {
        let fragment = Html::parse_fragment(markup);
        graft(&mut self.html.tree, id, *fragment.root_element());
    }

    /// Replace the children of an element with parsed markup.
    /// Only for content that is trusted to be markup.
    pub fn set_inner_html(&mut self, id: NodeId, markup: &str) {
        self.clear_children(id);
        self.append_html(id, markup);
    }

    /// Set the document title, adding a `<title>` to `<head>` when missing
    pub fn set_title(&mut self, title: &str) -> Result<(), PageError> {
        let id = match self.select_first("title")? {
            Some(id) => id,
            None => {
                let Some(head) = self.select_first("head")? else {
                    return Ok(());
                };
                self.append_html(head, "<title></title>");
                match self.select_first("title")? {
                    Some(id) => id,
                    None => return Ok(()),
                }
            }
        };

        self.set_text(id, title);
        Ok(())
    }

    /// Current document title
    pub fn title(&self) -> Option<String> {
        self.select_first("title")
            .ok()
            .flatten()
            .and_then(|id| self.text(id))
    }

    /// Set the text of the first match, when both node and value exist
    pub fn fill_text(&mut self, selector: &str, value: Option<&str>) -> Result<bool, PageError> {
        let target = self.select_first(selector)?;
        Ok(self.fill_text_at(target, value))
    }

    /// Scoped form of [`Page::fill_text`]
    pub fn fill_text_in(
        &mut self,
        scope: NodeId,
        selector: &str,
        value: Option<&str>,
    ) -> Result<bool, PageError> {
        let target = self.select_first_in(scope, selector)?;
        Ok(self.fill_text_at(target, value))
    }

    /// Set an attribute on the first match, when both node and value exist
    pub fn fill_attr(
        &mut self,
        selector: &str,
        name: &str,
        value: Option<&str>,
    ) -> Result<bool, PageError> {
        let target = self.select_first(selector)?;
        Ok(self.fill_attr_at(target, name, value))
    }

    /// Scoped form of [`Page::fill_attr`]
    pub fn fill_attr_in(
        &mut self,
        scope: NodeId,
        selector: &str,
        name: &str,
        value: Option<&str>,
    ) -> Result<bool, PageError> {
        let target = self.select_first_in(scope, selector)?;
        Ok(self.fill_attr_at(target, name, value))
    }

    fn fill_text_at(&mut self, target: Option<NodeId>, value: Option<&str>) -> bool {
        match (target, value) {
            (Some(id), Some(value)) => {
                self.set_text(id, value);
                true
            }
            _ => false,
        }
    }

    fn fill_attr_at(&mut self, target: Option<NodeId>, name: &str, value: Option<&str>) -> bool {
        match (target, value) {
            (Some(id), Some(value)) => {
                self.set_attr(id, name, value);
                true
            }
            _ => false,
        }
    }
}

/// Build a plain (namespace-less) HTML attribute
fn attribute(name: &str, value: &str) -> Attribute {
    Attribute {
        name: QualName::new(None, Namespace::from(""), LocalName::from(name)),
        value: StrTendril::from(value),
    }
}

/// Deep-copy the children of `source` under `parent`
fn graft(tree: &mut Tree<Node>, parent: NodeId, source: NodeRef<'_, Node>) {
    for child in source.children() {
        let Some(mut target) = tree.get_mut(parent) else {
            return;
        };
        let id = target.append(child.value().clone()).id();
        graft(tree, id, child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<!DOCTYPE html>
<html>
<head><title>Old</title><meta name="description" content="old"></head>
<body>
<div id="hero"><div class="wrapper"><p>one</p><p>two</p></div></div>
<ul class="menu"><li><a href="/a">A</a></li><li><a href="/b">B</a></li></ul>
<p class="copy">x</p>
</body>
</html>"#;

    #[test]
    fn test_select_in_document_order() {
        let page = Page::parse(DOC);
        let links = page.select_all(".menu li a").unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(page.text(links[0]), Some("A".to_string()));
        assert_eq!(page.attr(links[1], "href"), Some("/b".to_string()));
        assert!(page.select_first(".nothing").unwrap().is_none());
    }

    #[test]
    fn test_invalid_selector() {
        let page = Page::parse(DOC);
        assert!(matches!(
            page.select_first("div[["),
            Err(PageError::Selector { .. })
        ));
    }

    #[test]
    fn test_set_text_escapes_markup() {
        let mut page = Page::parse(DOC);
        let id = page.select_first(".copy").unwrap().unwrap();
        page.set_text(id, "<b>bold</b> & more");

        assert_eq!(page.text(id), Some("<b>bold</b> & more".to_string()));
        assert!(page.to_html().contains("&lt;b&gt;bold&lt;/b&gt; &amp; more"));
    }

    #[test]
    fn test_set_inner_html_parses_markup() {
        let mut page = Page::parse(DOC);
        let id = page.select_first(".copy").unwrap().unwrap();
        page.set_inner_html(id, "&copy; 2024 <a href=\"/\">Home</a>");

        assert_eq!(page.text(id), Some("© 2024 Home".to_string()));
        assert!(page.select_first(".copy a").unwrap().is_some());
    }

    #[test]
    fn test_set_attr_replaces_and_adds() {
        let mut page = Page::parse(DOC);
        let id = page.select_first("meta[name=\"description\"]").unwrap().unwrap();
        page.set_attr(id, "content", "new");
        page.set_attr(id, "data-x", "1");

        assert_eq!(page.attr(id, "content"), Some("new".to_string()));
        assert_eq!(page.attr(id, "name"), Some("description".to_string()));
        assert_eq!(page.attr(id, "data-x"), Some("1".to_string()));
    }

    #[test]
    fn test_clear_and_append() {
        let mut page = Page::parse(DOC);
        let wrapper = page.select_first("#hero .wrapper").unwrap().unwrap();
        assert_eq!(page.child_element_count(wrapper), 2);

        page.clear_children(wrapper);
        assert_eq!(page.child_element_count(wrapper), 0);
        // Detached nodes are no longer selectable
        assert!(page.select_first("#hero p").unwrap().is_none());

        page.append_html(wrapper, "<div class=\"slide\"><h1>New</h1></div>");
        page.append_html(wrapper, "<div class=\"slide\"><h1>Next</h1></div>");
        let slides = page.select_all("#hero .slide h1").unwrap();
        assert_eq!(slides.len(), 2);
        assert_eq!(page.text(slides[1]), Some("Next".to_string()));
    }

    #[test]
    fn test_appended_nodes_keep_document_order() {
        let mut page = Page::parse(DOC);
        let wrapper = page.select_first("#hero .wrapper").unwrap().unwrap();
        page.append_html(wrapper, "<a class=\"social\" href=\"https://instagram.com/hero\"></a>");
        page.append_html(
            page.select_first(".copy").unwrap().unwrap(),
            "<a class=\"social\" href=\"https://instagram.com/footer\"></a>",
        );

        let first = page.select_first("a.social").unwrap().unwrap();
        assert_eq!(
            page.attr(first, "href"),
            Some("https://instagram.com/hero".to_string())
        );
    }

    #[test]
    fn test_set_title() {
        let mut page = Page::parse(DOC);
        page.set_title("New title").unwrap();
        assert_eq!(page.title(), Some("New title".to_string()));

        let mut bare = Page::parse("<html><head></head><body></body></html>");
        bare.set_title("Created").unwrap();
        assert_eq!(bare.title(), Some("Created".to_string()));
        assert!(bare.select_first("head title").unwrap().is_some());
    }

    #[test]
    fn test_fill_helpers_skip_missing() {
        let mut page = Page::parse(DOC);
        assert!(!page.fill_text(".copy", None).unwrap());
        assert!(!page.fill_text(".absent", Some("x")).unwrap());
        assert!(page.fill_text(".copy", Some("y")).unwrap());

        let menu = page.select_first(".menu").unwrap().unwrap();
        assert!(page.fill_attr_in(menu, "li a", "href", Some("/z")).unwrap());
        let first = page.select_first(".menu a").unwrap().unwrap();
        assert_eq!(page.attr(first, "href"), Some("/z".to_string()));
    }
}
