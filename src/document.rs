//! Page adapter: the localizer only ever touches the page through [`Document`].
use std::collections::{BTreeMap, BTreeSet};

/// Attribute naming the dot-path key for an element's content.
pub const TEXT_ATTR: &str = "data-i18n";
/// Attribute naming the dot-path key for an element's placeholder.
pub const PLACEHOLDER_ATTR: &str = "data-i18n-placeholder";
/// Attribute carrying a language-select button's code.
pub const LANG_ATTR: &str = "data-lang";
/// Id of the single combined toggle control.
pub const TOGGLE_ID: &str = "lang-toggle";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Text,
    Placeholder,
}

impl Marker {
    pub fn attribute(self) -> &'static str {
        match self { Marker::Text => TEXT_ATTR, Marker::Placeholder => PLACEHOLDER_ATTR }
    }
}

/// `Markup` replaces rendered content as HTML, `Text` as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Markup,
    Text,
}

pub trait Document: Send {
    type Element: Clone + Send;

    /// Elements carrying `marker`'s attribute, with the key it names.
    fn marked(&self, marker: Marker) -> Vec<(Self::Element, String)>;
    fn set_content(&mut self, el: &Self::Element, value: &str, kind: ContentKind);
    fn set_placeholder(&mut self, el: &Self::Element, value: &str);

    /// Language-select buttons with their codes.
    fn language_buttons(&self) -> Vec<(Self::Element, String)>;
    fn set_active(&mut self, el: &Self::Element, classes: &[String], active: bool);

    fn toggle(&self) -> Option<Self::Element>;
    fn set_label(&mut self, el: &Self::Element, label: &str);

    /// Root language attribute.
    fn lang(&self) -> Option<String>;
    fn set_lang(&mut self, lang: &str);
}

/// Minimal HTML escaping for adapters that can only write markup.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub tag: String,
    pub id: Option<String>,
    pub attrs: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    /// Inner HTML.
    pub html: String,
}

impl Node {
    pub fn new(tag: &str) -> Self { Self { tag: tag.to_string(), ..Self::default() } }
    pub fn attr(mut self, name: &str, value: &str) -> Self { self.attrs.insert(name.into(), value.into()); self }
    pub fn id(mut self, id: &str) -> Self { self.id = Some(id.into()); self }
    pub fn html(mut self, html: &str) -> Self { self.html = html.into(); self }
    pub fn class(mut self, class: &str) -> Self { self.classes.insert(class.into()); self }
}

/// In-memory page; element handles are node indices.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    lang: Option<String>,
}

impl MemoryDocument {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, node: Node) -> usize { self.nodes.push(node); self.nodes.len() - 1 }

    /// `<span data-i18n=key>initial</span>`
    pub fn text(&mut self, key: &str, initial: &str) -> usize {
        self.push(Node::new("span").attr(TEXT_ATTR, key).html(initial))
    }

    /// `<input data-i18n-placeholder=key placeholder=initial>`
    pub fn input(&mut self, key: &str, initial: &str) -> usize {
        self.push(Node::new("input").attr(PLACEHOLDER_ATTR, key).attr("placeholder", initial))
    }

    /// `<button data-lang=code>`
    pub fn button(&mut self, code: &str) -> usize {
        self.push(Node::new("button").attr(LANG_ATTR, code).html(&code.to_uppercase()))
    }

    /// `<button id="lang-toggle">`
    pub fn toggle_button(&mut self, label: &str) -> usize {
        self.push(Node::new("button").id(TOGGLE_ID).html(label))
    }

    pub fn with_lang(mut self, lang: &str) -> Self { self.lang = Some(lang.into()); self }

    pub fn html_of(&self, idx: usize) -> &str { &self.nodes[idx].html }
    pub fn placeholder_of(&self, idx: usize) -> Option<&str> { self.nodes[idx].attrs.get("placeholder").map(String::as_str) }
    pub fn has_class(&self, idx: usize, class: &str) -> bool { self.nodes[idx].classes.contains(class) }
}

impl Document for MemoryDocument {
    type Element = usize;

    fn marked(&self, marker: Marker) -> Vec<(usize, String)> {
        let attr = marker.attribute();
        self.nodes.iter().enumerate()
            .filter_map(|(i, n)| n.attrs.get(attr).map(|k| (i, k.clone())))
            .collect()
    }

    fn set_content(&mut self, el: &usize, value: &str, kind: ContentKind) {
        self.nodes[*el].html = match kind { ContentKind::Markup => value.to_string(), ContentKind::Text => escape_html(value) };
    }

    fn set_placeholder(&mut self, el: &usize, value: &str) {
        self.nodes[*el].attrs.insert("placeholder".into(), value.into());
    }

    // matches `button[data-lang]`, other tags are ignored
    fn language_buttons(&self) -> Vec<(usize, String)> {
        self.nodes.iter().enumerate()
            .filter(|(_, n)| n.tag == "button")
            .filter_map(|(i, n)| n.attrs.get(LANG_ATTR).map(|c| (i, c.clone())))
            .collect()
    }

    fn set_active(&mut self, el: &usize, classes: &[String], active: bool) {
        let node = &mut self.nodes[*el];
        for c in classes {
            if active { node.classes.insert(c.clone()); } else { node.classes.remove(c); }
        }
    }

    fn toggle(&self) -> Option<usize> { self.nodes.iter().position(|n| n.id.as_deref() == Some(TOGGLE_ID)) }

    fn set_label(&mut self, el: &usize, label: &str) { self.nodes[*el].html = escape_html(label); }

    fn lang(&self) -> Option<String> { self.lang.clone() }

    fn set_lang(&mut self, lang: &str) { self.lang = Some(lang.to_string()); }
}
