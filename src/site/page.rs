//! Page generation - fills the HTML template for one Markdown document.

use crate::converter::{extract_document_title, markdown_to_html_node};
use crate::render::{HtmlRenderer, Renderer};
use crate::Result;
use std::fs;
use std::path::Path;

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Renders a full page from Markdown and a template, without touching the disk.
pub fn render_page(markdown: &str, template: &str, basepath: &str) -> Result<String> {
    let root = markdown_to_html_node(markdown)?;
    let content = HtmlRenderer.render(&root)?;
    let title = extract_document_title(markdown)?;

    let page = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content);
    Ok(rewrite_basepath(&page, basepath))
}

/// Points root-relative `href`/`src` attributes at `basepath`.
pub fn rewrite_basepath(html: &str, basepath: &str) -> String {
    if basepath == "/" {
        return html.to_string();
    }
    html.replace("href=\"/", &format!("href=\"{basepath}"))
        .replace("src=\"/", &format!("src=\"{basepath}"))
}

/// Reads `from`, renders it through `template_path` and writes `dest`.
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path, basepath: &str) -> Result<()> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let markdown = fs::read_to_string(from)?;
    let template = fs::read_to_string(template_path)?;
    let page = render_page(&markdown, &template, basepath)?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, page)?;
    Ok(())
}
