pub fn escape_html_text(value: &str) -> String {
    escape(value, false)
}

pub fn escape_html_attr(value: &str) -> String {
    escape(value, true)
}

fn escape(value: &str, apostrophe: bool) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' if apostrophe => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
