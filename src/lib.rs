//! # md2page
//!
//! Markdown to HTML converter and static page generator.
//!
//! ## Example
//!
//! ```
//! let html = md2page::markdown_to_html("# Hello\n\nSome **bold** text").unwrap();
//! assert_eq!(html, "<div><h1>Hello</h1><p>Some <b>bold</b> text</p></div>");
//! ```

pub mod converter;
pub mod core;
pub mod error;
pub mod render;
pub mod site;

pub use converter::{
    classify, extract_document_title, markdown_to_html_node, parse_inline, split_into_blocks,
};
pub use crate::core::ast::{BlockType, InlineSpan};
pub use error::{Error, Result};
pub use render::{Attributes, HtmlNode, HtmlRenderer, Renderer};
pub use site::{build_site, generate_page, generate_pages_recursive};

use std::path::PathBuf;

/// Converts Markdown into the root `div` of an HTML tree.
pub fn convert(markdown: &str) -> Result<HtmlNode> {
    markdown_to_html_node(markdown)
}

/// Serializes an HTML tree to flat HTML text.
pub fn serialize(node: &HtmlNode) -> Result<String> {
    HtmlRenderer.render(node)
}

/// Converts Markdown straight to HTML text.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    serialize(&convert(markdown)?)
}

/// Options for building a site.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// Directory holding the Markdown sources.
    pub content_dir: PathBuf,
    /// Directory copied verbatim into the output.
    pub static_dir: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template_path: PathBuf,
    /// Output directory. Deleted and recreated on every build.
    pub output_dir: PathBuf,
    /// Prefix for root-relative links, e.g. `/repo-name/`.
    pub basepath: String,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template_path: PathBuf::from("template.html"),
            output_dir: PathBuf::from("docs"),
            basepath: "/".to_string(),
        }
    }
}

// Python bindings (only when 'python' feature is enabled)
#[cfg(feature = "python")]
mod python_bindings {
    use pyo3::prelude::*;

    fn to_py_err(e: crate::Error) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
    }

    /// Converts Markdown text to an HTML fragment.
    #[pyfunction]
    fn markdown_to_html(markdown: &str) -> PyResult<String> {
        crate::markdown_to_html(markdown).map_err(to_py_err)
    }

    /// Returns the first level-1 heading of a Markdown document.
    #[pyfunction]
    fn extract_title(markdown: &str) -> PyResult<String> {
        crate::extract_document_title(markdown).map_err(to_py_err)
    }

    #[pymodule]
    pub fn md2page(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(markdown_to_html, m)?)?;
        m.add_function(wrap_pyfunction!(extract_title, m)?)?;
        Ok(())
    }
}
