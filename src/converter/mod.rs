//! Converter modules for Markdown to HTML transformation.

mod blocks;
mod code;
mod extract;
mod heading;
mod inline;
mod list;
mod paragraph;
mod quote;
mod title;

use crate::core::ast::BlockType;
use crate::render::{Attributes, HtmlNode, ParentNode};
use crate::Result;

pub use self::blocks::{classify, heading_level, split_into_blocks};
pub use self::code::CodeConverter;
pub use self::extract::{extract_markdown_images, extract_markdown_links};
pub use self::heading::HeadingConverter;
pub use self::inline::{parse_inline, split_delimiter, split_images, split_links};
pub use self::list::ListConverter;
pub use self::paragraph::ParagraphConverter;
pub use self::quote::QuoteConverter;
pub use self::title::extract_document_title;

/// Converts a Markdown document into a single `div` holding one node per block.
///
/// # Arguments
/// * `markdown` - Markdown source text
///
/// # Returns
/// The root node of the document tree.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    let mut root = ParentNode {
        tag: Some("div".to_string()),
        children: Some(Vec::new()),
        attrs: Attributes::new(),
    };

    for block in split_into_blocks(markdown) {
        let block_type = classify(block);
        log::debug!("classified block as {:?}", block_type);
        root.push(convert_block(block, block_type)?);
    }

    Ok(HtmlNode::Parent(root))
}

fn convert_block(block: &str, block_type: BlockType) -> Result<HtmlNode> {
    match block_type {
        BlockType::Heading => HeadingConverter::convert(block),
        BlockType::Code => CodeConverter::convert(block),
        BlockType::Quote => QuoteConverter::convert(block),
        BlockType::UnorderedList => ListConverter::convert_unordered(block),
        BlockType::OrderedList => ListConverter::convert_ordered(block),
        BlockType::Paragraph => ParagraphConverter::convert(block),
    }
}

/// Parses inline markdown and converts every span to a leaf node.
fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(parse_inline(text)?
        .into_iter()
        .map(|span| span.into_html())
        .collect())
}
