//! List converter - unordered (`- `) and ordered (`1. `) lists.

use super::text_to_children;
use crate::render::HtmlNode;
use crate::Result;

/// Converter for list blocks.
pub struct ListConverter;

impl ListConverter {
    /// Converts `- item` lines into a `ul`.
    pub fn convert_unordered(block: &str) -> Result<HtmlNode> {
        let items = block
            .split('\n')
            .filter_map(|line| line.strip_prefix("- "))
            .map(list_item)
            .collect::<Result<Vec<_>>>()?;
        Ok(HtmlNode::parent("ul", items))
    }

    /// Converts `N. item` lines into an `ol`.
    pub fn convert_ordered(block: &str) -> Result<HtmlNode> {
        let items = block
            .split('\n')
            .filter_map(|line| line.split_once(". ").map(|(_, text)| text))
            .map(list_item)
            .collect::<Result<Vec<_>>>()?;
        Ok(HtmlNode::parent("ol", items))
    }
}

fn list_item(text: &str) -> Result<HtmlNode> {
    Ok(HtmlNode::parent("li", text_to_children(text)?))
}
