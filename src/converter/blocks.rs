//! Block classifier - splits a document into blocks and tags each one.

use crate::core::ast::BlockType;

const FENCE: &str = "```";

/// Splits `markdown` on blank lines, trimming each block and dropping empty ones.
pub fn split_into_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classifies a block. Rules are checked in priority order.
pub fn classify(block: &str) -> BlockType {
    let lines: Vec<&str> = block.split('\n').collect();

    if lines.first().is_some_and(|line| heading_level(line).is_some()) {
        BlockType::Heading
    } else if is_code_block(block) {
        BlockType::Code
    } else if lines.iter().all(|line| line.starts_with('>')) {
        BlockType::Quote
    } else if lines.iter().all(|line| line.starts_with("- ")) {
        BlockType::UnorderedList
    } else if is_ordered_list(&lines) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}

/// Level of an ATX heading line: 1-6 `#`, one space, then non-empty text.
pub fn heading_level(line: &str) -> Option<usize> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    match line[level..].strip_prefix(' ') {
        Some(rest) if !rest.is_empty() => Some(level),
        _ => None,
    }
}

fn is_code_block(block: &str) -> bool {
    block.len() >= FENCE.len() && block.starts_with(FENCE) && block.ends_with(FENCE)
}

fn is_ordered_list(lines: &[&str]) -> bool {
    lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
}
