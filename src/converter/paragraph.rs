//! Paragraph converter - the fallback block type.

use super::text_to_children;
use crate::render::HtmlNode;
use crate::Result;

/// Converter for paragraph blocks.
pub struct ParagraphConverter;

impl ParagraphConverter {
    /// Folds line breaks into spaces and wraps the inline content in `p`.
    pub fn convert(block: &str) -> Result<HtmlNode> {
        let text = block.replace('\n', " ");
        Ok(HtmlNode::parent("p", text_to_children(&text)?))
    }
}
