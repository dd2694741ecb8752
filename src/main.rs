//! CLI for md2page - builds a static site from Markdown

use clap::Parser;
use md2page::{build_site, SiteOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Prefix for root-relative links (e.g. "/my-repo/")
    #[arg(default_value = "/")]
    basepath: String,

    /// Directory with Markdown sources
    #[arg(long, default_value = "content")]
    content: PathBuf,

    /// Directory with static assets copied as-is
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long, default_value = "template.html")]
    template: PathBuf,

    /// Output directory (deleted and recreated)
    #[arg(long, default_value = "docs")]
    output: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let options = SiteOptions {
        content_dir: args.content,
        static_dir: args.static_dir,
        template_path: args.template,
        output_dir: args.output,
        basepath: args.basepath,
    };

    match build_site(&options) {
        Ok(pages) => {
            println!(
                "Successfully generated {} pages in {:?}",
                pages.len(),
                options.output_dir
            );
        }
        Err(e) => {
            eprintln!("Error building site: {}", e);
            std::process::exit(1);
        }
    }
}
