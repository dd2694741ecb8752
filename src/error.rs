//! Error types for md2page.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for md2page operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting Markdown or building a site.
#[derive(Error, Debug)]
pub enum Error {
    /// An inline delimiter was opened but never closed.
    #[error("Invalid Markdown syntax: unmatched delimiter `{delimiter}`")]
    MarkdownSyntax { delimiter: String },

    /// The document has no level-1 heading to use as a page title.
    #[error("No level-1 heading found in document")]
    TitleNotFound,

    /// A parent node was serialized without a tag.
    #[error("Parent node is missing a tag")]
    MissingTag,

    /// A parent node was serialized without a children list.
    #[error("Parent node is missing children")]
    MissingChildren,

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error occurred while walking a directory tree.
    #[error("Directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A source path could not be mapped into the output tree.
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
}
