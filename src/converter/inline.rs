//! Inline parser - turns a run of text into typed spans.
//!
//! Parsing is a fixed pipeline of stages over `Vec<InlineSpan>`. Each stage
//! only rewrites `InlineSpan::Text` entries; any span that already has a type
//! passes through untouched.

use super::extract::{extract_markdown_images, extract_markdown_links};
use crate::core::ast::InlineSpan;
use crate::{error::Error, Result};

/// Parses `text` into ordered inline spans.
pub fn parse_inline(text: &str) -> Result<Vec<InlineSpan>> {
    let spans = vec![InlineSpan::Text(text.to_string())];
    let spans = split_delimiter(spans, "**", InlineSpan::Bold)?;
    let spans = split_delimiter(spans, "_", InlineSpan::Italic)?;
    let spans = split_delimiter(spans, "`", InlineSpan::Code)?;
    let spans = split_images(spans);
    Ok(split_links(spans))
}

/// Splits every text span on `delimiter`; odd-numbered parts become `make(part)`.
pub fn split_delimiter(
    spans: Vec<InlineSpan>,
    delimiter: &str,
    make: fn(String) -> InlineSpan,
) -> Result<Vec<InlineSpan>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let InlineSpan::Text(text) = span else {
            out.push(span);
            continue;
        };

        let parts: Vec<&str> = text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(Error::MarkdownSyntax {
                delimiter: delimiter.to_string(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if i % 2 == 1 {
                out.push(make(part.to_string()));
            } else if !part.is_empty() {
                out.push(InlineSpan::Text(part.to_string()));
            }
        }
    }
    Ok(out)
}

/// Replaces `![alt](url)` occurrences in text spans with image spans.
pub fn split_images(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_matches(spans, extract_markdown_images, |alt, url| {
        (format!("![{alt}]({url})"), InlineSpan::Image { alt, url })
    })
}

/// Replaces `[text](url)` occurrences in text spans with link spans.
pub fn split_links(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_matches(spans, extract_markdown_links, |text, url| {
        (format!("[{text}]({url})"), InlineSpan::Link { text, url })
    })
}

/// One left-to-right pass per text span: `find` locates matches, `build`
/// returns the literal markdown for a match together with its typed span.
fn split_matches(
    spans: Vec<InlineSpan>,
    find: fn(&str) -> Vec<(String, String)>,
    build: fn(String, String) -> (String, InlineSpan),
) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let InlineSpan::Text(text) = span else {
            out.push(span);
            continue;
        };

        let matches = find(&text);
        if matches.is_empty() {
            out.push(InlineSpan::Text(text));
            continue;
        }

        let mut remaining = text.as_str();
        for (display, url) in matches {
            let (pattern, typed) = build(display, url);
            let (before, after) = remaining.split_once(&pattern).unwrap_or((remaining, ""));
            if !before.is_empty() {
                out.push(InlineSpan::Text(before.to_string()));
            }
            out.push(typed);
            remaining = after;
        }
        if !remaining.is_empty() {
            out.push(InlineSpan::Text(remaining.to_string()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> InlineSpan {
        InlineSpan::Text(s.to_string())
    }

    #[test]
    fn test_split_code_block() {
        let spans = split_delimiter(
            vec![text("This is text with a `code block` word")],
            "`",
            InlineSpan::Code,
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                text("This is text with a "),
                InlineSpan::Code("code block".into()),
                text(" word"),
            ]
        );
    }

    #[test]
    fn test_split_bold_text() {
        let spans =
            split_delimiter(vec![text("This is **bold** text")], "**", InlineSpan::Bold).unwrap();
        assert_eq!(
            spans,
            vec![text("This is "), InlineSpan::Bold("bold".into()), text(" text")]
        );
    }

    #[test]
    fn test_multiple_delimiters() {
        let spans = split_delimiter(
            vec![text("This `code` and `more code` here")],
            "`",
            InlineSpan::Code,
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                text("This "),
                InlineSpan::Code("code".into()),
                text(" and "),
                InlineSpan::Code("more code".into()),
                text(" here"),
            ]
        );
    }

    #[test]
    fn test_non_text_span_passthrough() {
        let input = vec![text("plain"), InlineSpan::Bold("a `b".into()), text("more plain")];
        let spans = split_delimiter(input.clone(), "`", InlineSpan::Code).unwrap();
        assert_eq!(spans, input);
    }

    #[test]
    fn test_unmatched_delimiter_fails() {
        let err = split_delimiter(
            vec![text("This has an unmatched `delimiter")],
            "`",
            InlineSpan::Code,
        )
        .unwrap_err();
        assert!(matches!(err, Error::MarkdownSyntax { ref delimiter } if delimiter == "`"));
    }

    #[test]
    fn test_empty_string_between_delimiters() {
        let spans =
            split_delimiter(vec![text("Empty `` delimiters")], "`", InlineSpan::Code).unwrap();
        assert_eq!(
            spans,
            vec![text("Empty "), InlineSpan::Code(String::new()), text(" delimiters")]
        );
    }

    #[test]
    fn test_delimiter_at_edges() {
        let spans = split_delimiter(vec![text("`code` at start")], "`", InlineSpan::Code).unwrap();
        assert_eq!(spans, vec![InlineSpan::Code("code".into()), text(" at start")]);

        let spans = split_delimiter(vec![text("End with `code`")], "`", InlineSpan::Code).unwrap();
        assert_eq!(spans, vec![text("End with "), InlineSpan::Code("code".into())]);
    }

    #[test]
    fn test_split_images() {
        let spans = split_images(vec![text(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        )]);
        assert_eq!(
            spans,
            vec![
                text("This is text with an "),
                InlineSpan::Image {
                    alt: "image".into(),
                    url: "https://i.imgur.com/zjjcJKZ.png".into()
                },
                text(" and another "),
                InlineSpan::Image {
                    alt: "second image".into(),
                    url: "https://i.imgur.com/3elNhQu.png".into()
                },
            ]
        );
    }

    #[test]
    fn test_split_links_with_trailing_text() {
        let spans = split_links(vec![text("[a](b) tail")]);
        assert_eq!(
            spans,
            vec![
                InlineSpan::Link {
                    text: "a".into(),
                    url: "b".into()
                },
                text(" tail"),
            ]
        );
    }

    #[test]
    fn test_split_links_keeps_repeated_pattern_order() {
        let spans = split_links(vec![text("[x](y) mid [x](y)")]);
        let link = InlineSpan::Link {
            text: "x".into(),
            url: "y".into(),
        };
        assert_eq!(spans, vec![link.clone(), text(" mid "), link]);
    }

    #[test]
    fn test_split_links_skips_images() {
        let input = vec![text("![x](y)")];
        assert_eq!(split_links(input.clone()), input);
    }

    #[test]
    fn test_plain_text_is_single_span() {
        assert_eq!(
            parse_inline("Nothing special here.").unwrap(),
            vec![text("Nothing special here.")]
        );
    }

    #[test]
    fn test_parse_inline_full_pipeline() {
        let spans = parse_inline(
            "This is **text** with an _italic_ word and a `code block` and an ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)",
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                text("This is "),
                InlineSpan::Bold("text".into()),
                text(" with an "),
                InlineSpan::Italic("italic".into()),
                text(" word and a "),
                InlineSpan::Code("code block".into()),
                text(" and an "),
                InlineSpan::Image {
                    alt: "obi wan image".into(),
                    url: "https://i.imgur.com/fJRm4Vk.jpeg".into()
                },
                text(" and a "),
                InlineSpan::Link {
                    text: "link".into(),
                    url: "https://boot.dev".into()
                },
            ]
        );
    }

    #[test]
    fn test_typed_spans_are_opaque_to_later_stages() {
        // The link inside the code span must stay literal.
        let spans = parse_inline("`[a](b)` and **_x_**").unwrap();
        assert_eq!(
            spans,
            vec![
                InlineSpan::Code("[a](b)".into()),
                text(" and "),
                InlineSpan::Bold("_x_".into()),
            ]
        );
    }

    #[test]
    fn test_unmatched_backtick_fails_whole_parse() {
        assert!(matches!(
            parse_inline("a `b"),
            Err(Error::MarkdownSyntax { .. })
        ));
    }

    #[test]
    fn test_unmatched_bold_fails() {
        let err = parse_inline("a **b").unwrap_err();
        assert_eq!(err.to_string(), "Invalid Markdown syntax: unmatched delimiter `**`");
    }

    #[test]
    fn test_empty_text_yields_no_spans() {
        assert_eq!(parse_inline("").unwrap(), Vec::new());
    }
}
