//! Static site generation on top of the Markdown converter.

mod copy;
mod page;

use crate::{error::Error, Result, SiteOptions};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub use self::copy::copy_static;
pub use self::page::{
    generate_page, render_page, rewrite_basepath, CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER,
};

/// Renders every `.md` file under `content_dir` to the mirrored `.html` path
/// under `dest_dir`. Returns the written paths in source order.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    basepath: &str,
) -> Result<Vec<PathBuf>> {
    let pages = collect_pages(content_dir, dest_dir)?;

    pages
        .par_iter()
        .try_for_each(|(from, dest)| generate_page(from, template_path, dest, basepath))?;

    Ok(pages.into_iter().map(|(_, dest)| dest).collect())
}

/// Copies static assets, then generates every page.
pub fn build_site(options: &SiteOptions) -> Result<Vec<PathBuf>> {
    log::info!("Starting static site generation...");
    copy_static(&options.static_dir, &options.output_dir)?;
    let pages = generate_pages_recursive(
        &options.content_dir,
        &options.template_path,
        &options.output_dir,
        &options.basepath,
    )?;
    log::info!("Static site generation complete: {} pages", pages.len());
    Ok(pages)
}

fn collect_pages(content_dir: &Path, dest_dir: &Path) -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut pages = Vec::new();
    for entry in WalkDir::new(content_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
            log::warn!("Skipping non-Markdown file {}", path.display());
            continue;
        }
        let relative = path
            .strip_prefix(content_dir)
            .map_err(|_| Error::InvalidPath(path.to_path_buf()))?;
        pages.push((
            path.to_path_buf(),
            dest_dir.join(relative).with_extension("html"),
        ));
    }
    Ok(pages)
}
