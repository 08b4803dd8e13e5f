//! Static Export
//!
//! Writes the rendered guide and its stylesheet to a directory that any
//! static file host can serve.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{error::SiteError, handlers::assets::GUIDE_CSS, templates::render_guide};

/// A file written by [`export`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Summary of an export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub files: Vec<ExportedFile>,
}

impl ExportReport {
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.bytes).sum()
    }
}

/// Render the guide into `out_dir`.
///
/// Produces `index.html` and `public/css/guide.css`, mirroring the server's
/// routes so the stylesheet link in the page resolves unchanged.
pub fn export(out_dir: &Path) -> Result<ExportReport, SiteError> {
    let css_dir = out_dir.join("public").join("css");
    fs::create_dir_all(&css_dir).map_err(|source| SiteError::Io {
        path: css_dir.clone(),
        source,
    })?;

    let html = render_guide()?;

    let mut report = ExportReport::default();
    report.files.push(write_file(&out_dir.join("index.html"), &html)?);
    report
        .files
        .push(write_file(&css_dir.join("guide.css"), GUIDE_CSS)?);

    tracing::info!(
        "Exported {} files ({} bytes) to {}",
        report.files.len(),
        report.total_bytes(),
        out_dir.display()
    );

    Ok(report)
}

fn write_file(path: &Path, contents: &str) -> Result<ExportedFile, SiteError> {
    fs::write(path, contents).map_err(|source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Wrote {}", path.display());
    Ok(ExportedFile {
        path: path.to_path_buf(),
        bytes: contents.len(),
    })
}
