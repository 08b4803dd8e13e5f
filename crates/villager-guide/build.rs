//! Minifies the guide stylesheet and derives the asset cache-busting version.

use std::{
    env, fs,
    hash::{DefaultHasher, Hash, Hasher},
    path::PathBuf,
};

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

const STYLESHEET: &str = "assets/css/guide.css";

fn main() {
    println!("cargo:rerun-if-changed={STYLESHEET}");

    let source = fs::read_to_string(STYLESHEET)
        .unwrap_or_else(|e| panic!("failed to read {STYLESHEET}: {e}"));

    let mut sheet = StyleSheet::parse(&source, ParserOptions::default())
        .unwrap_or_else(|e| panic!("failed to parse {STYLESHEET}: {e}"));
    sheet
        .minify(MinifyOptions::default())
        .unwrap_or_else(|e| panic!("failed to minify {STYLESHEET}: {e}"));
    let minified = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .unwrap_or_else(|e| panic!("failed to print {STYLESHEET}: {e}"))
        .code;

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(out_dir.join("guide.min.css"), &minified).expect("failed to write minified css");

    let mut hasher = DefaultHasher::new();
    minified.hash(&mut hasher);
    println!("cargo:rustc-env=BUILD_VERSION={:016x}", hasher.finish());
}
