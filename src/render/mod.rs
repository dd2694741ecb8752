mod escape;
mod node;

use crate::Result;

pub use escape::{escape_html_attr, escape_html_text};
pub use node::{Attributes, HtmlNode, LeafNode, ParentNode};

pub trait Renderer {
    fn render(&self, document: &HtmlNode) -> Result<String>;
}

/// Flat HTML serializer with no pretty-printing.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, document: &HtmlNode) -> Result<String> {
        let html = document.to_html()?;
        log::debug!("rendered {} bytes of HTML", html.len());
        Ok(html)
    }
}
