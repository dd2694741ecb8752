//! Heading converter - `# text` through `###### text`.

use super::{blocks::heading_level, text_to_children};
use crate::render::HtmlNode;
use crate::Result;

/// Converter for heading blocks.
pub struct HeadingConverter;

impl HeadingConverter {
    /// Converts a heading block into an `h1`-`h6` node.
    ///
    /// Only the first line carries the heading; any following lines are dropped.
    pub fn convert(block: &str) -> Result<HtmlNode> {
        let line = block.lines().next().unwrap_or_default();
        let level = heading_level(line).unwrap_or(1);
        let text = line.trim_start_matches('#').trim();
        Ok(HtmlNode::parent(format!("h{level}"), text_to_children(text)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(5)]
    #[case(6)]
    fn test_heading_levels(#[case] level: usize) {
        let block = format!("{} X", "#".repeat(level));
        let html = HeadingConverter::convert(&block).unwrap().to_html().unwrap();
        assert_eq!(html, format!("<h{level}>X</h{level}>"));
    }

    #[test]
    fn test_hash_inside_text_does_not_change_level() {
        let html = HeadingConverter::convert("## Tips for C#")
            .unwrap()
            .to_html()
            .unwrap();
        assert_eq!(html, "<h2>Tips for C#</h2>");
    }

    #[test]
    fn test_heading_parses_inline() {
        let html = HeadingConverter::convert("# A **bold** _move_")
            .unwrap()
            .to_html()
            .unwrap();
        assert_eq!(html, "<h1>A <b>bold</b> <i>move</i></h1>");
    }

    #[test]
    fn test_level_matches_classifier_rule() {
        for line in ["#  two spaces", "### C# and F#", "###### six"] {
            let expected = heading_level(line).unwrap();
            let node = HeadingConverter::convert(line).unwrap();
            assert_eq!(node.tag(), Some(format!("h{expected}").as_str()));
        }
    }

    #[test]
    fn test_heading_drops_following_lines() {
        let html = HeadingConverter::convert("#   Spaced title  \nsecond line")
            .unwrap()
            .to_html()
            .unwrap();
        assert_eq!(html, "<h1>Spaced title</h1>");
    }
}
