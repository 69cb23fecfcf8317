//! Bundle and minify the dashboard stylesheets into `assets/dist/bundle.css`.

use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
    targets::{Browsers, Targets},
};
use std::fs;
use std::path::Path;

const ENTRY: &str = "assets/css/main.css";
const OUT_DIR: &str = "assets/dist";
const OUT_FILE: &str = "assets/dist/bundle.css";

/// Evergreen browsers with `color-mix()` support.
fn targets() -> Targets {
    let version = |major: u32| Some(major << 16);
    Targets::from(Browsers {
        chrome: version(111),
        edge: version(111),
        firefox: version(113),
        safari: version(16).map(|v| v | (2 << 8)),
        ios_saf: version(16).map(|v| v | (2 << 8)),
        ..Browsers::default()
    })
}

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");
    if let Ok(entries) = fs::read_dir("assets/css") {
        for entry in entries.flatten() {
            println!("cargo:rerun-if-changed={}", entry.path().display());
        }
    }

    fs::create_dir_all(OUT_DIR).expect("Failed to create assets/dist");

    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());
    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY))
        .unwrap_or_else(|e| panic!("Failed to bundle {ENTRY}: {e}"));

    let targets = targets();
    stylesheet
        .minify(MinifyOptions {
            targets,
            ..MinifyOptions::default()
        })
        .expect("Failed to minify stylesheet");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            targets,
            ..PrinterOptions::default()
        })
        .expect("Failed to print stylesheet");

    fs::write(OUT_FILE, css.code).expect("Failed to write bundle.css");
}
