//! HTML Report: Render a diff as the diff-checker page fragment.
//!
//! Prints a standalone HTML page to stdout. With no arguments, a built-in
//! sample is diffed.
//!
//! ```text
//! cargo run --example html_report -- old.txt new.txt > diff.html
//! ```

use clap::Parser;
use diffcheck::render::html;
use diffcheck::{source, Comparison, DiffError, RenderConfig};
use std::path::PathBuf;

const ORIGINAL: &str = "fn greet(name: &str) {\n    println!(\"Hello, {}\", name);\n}\n";
const MODIFIED: &str = "fn greet(name: &str) {\n    println!(\"Hi, {name}!\");\n}\n\ngreet(\"<world>\");\n";

const STYLE: &str = r"
.diff-line { display: flex; font-family: monospace; white-space: pre; }
.line-num { width: 3em; color: #888; text-align: right; padding-right: 8px; }
.diff-added { background: #e6ffec; }
.diff-removed { background: #ffebe9; }
";

#[derive(Parser)]
#[command(name = "html_report")]
#[command(about = "Render a line diff as HTML", long_about = None)]
struct Args {
    /// Original file
    #[arg(requires = "modified")]
    original: Option<PathBuf>,

    /// Modified file
    modified: Option<PathBuf>,
}

fn main() -> Result<(), DiffError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();
    let comparison = match (&args.original, &args.modified) {
        (Some(original), Some(modified)) => source::compare_files(original, modified)?,
        _ => Comparison::of(ORIGINAL, MODIFIED),
    };

    let config = RenderConfig::default();
    let body = html::render_html(&comparison, &config);

    println!("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">");
    println!("<style>{STYLE}</style>\n</head>\n<body>");
    if let Some(script) = comparison.script() {
        println!("<p>{}</p>", script.stats());
    }
    println!("<div id=\"output\">\n{body}</div>\n</body>\n</html>");
    Ok(())
}
