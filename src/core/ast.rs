use crate::render::{Attributes, HtmlNode};

/// A typed fragment of inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

impl InlineSpan {
    /// Converts the span into the leaf node that renders it.
    pub fn into_html(self) -> HtmlNode {
        match self {
            InlineSpan::Text(text) => HtmlNode::text(text),
            InlineSpan::Bold(text) => HtmlNode::leaf("b", text),
            InlineSpan::Italic(text) => HtmlNode::leaf("i", text),
            InlineSpan::Code(text) => HtmlNode::leaf("code", text),
            InlineSpan::Link { text, url } => {
                let mut attrs = Attributes::new();
                attrs.insert("href", url);
                HtmlNode::leaf_with_attrs("a", text, attrs)
            }
            InlineSpan::Image { alt, url } => {
                let mut attrs = Attributes::new();
                attrs.insert("src", url);
                attrs.insert("alt", alt);
                HtmlNode::leaf_with_attrs("img", "", attrs)
            }
        }
    }
}

/// Structural classification of a Markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}
