//! Code block converter - fenced code is emitted verbatim.

use crate::render::HtmlNode;
use crate::Result;

const FENCE: char = '`';

/// Converter for fenced code blocks.
pub struct CodeConverter;

impl CodeConverter {
    /// Converts a fenced block into `<pre><code>…</code></pre>`.
    ///
    /// Inline markdown is not parsed. The content always ends with a newline.
    pub fn convert(block: &str) -> Result<HtmlNode> {
        let lines: Vec<&str> = block.split('\n').collect();
        let mut content = if lines.len() >= 3 {
            lines[1..lines.len() - 1].join("\n")
        } else {
            block.trim_matches(FENCE).to_string()
        };
        if !content.ends_with('\n') {
            content.push('\n');
        }
        Ok(HtmlNode::parent("pre", vec![HtmlNode::leaf("code", content)]))
    }
}
