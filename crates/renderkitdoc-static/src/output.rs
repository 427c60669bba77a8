//! Filesystem output and touched-file tracking.

use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::AssetSource;
use crate::builder::BuildError;

/// Name of the directory created under the output root.
pub const DOC_DIR_NAME: &str = "renderkitdoc";

/// What a touched path is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchedKind {
    Directory,
    CopiedAsset,
    GeneratedDocument,
}

/// A path created, copied or written during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchedFile {
    pub path: PathBuf,
    pub kind: TouchedKind,
}

/// Writes the document set and records every path it touches.
///
/// Layout: `<root>/renderkitdoc/` holds the static assets and the navigation
/// frame; `<root>/renderkitdoc/<render-kit-id>/` holds the summary and the
/// renderer pages.
#[derive(Debug)]
pub struct OutputTracker {
    doc_dir: PathBuf,
    render_kit_dir: PathBuf,
    touched: Vec<TouchedFile>,
}

impl OutputTracker {
    pub fn new(output_root: &Path, render_kit_id: &str) -> Self {
        let doc_dir = output_root.join(DOC_DIR_NAME);
        let render_kit_dir = doc_dir.join(render_kit_id);

        Self {
            doc_dir,
            render_kit_dir,
            touched: Vec::new(),
        }
    }

    /// Top-level documentation directory.
    pub fn doc_dir(&self) -> &Path {
        &self.doc_dir
    }

    /// Directory holding the render-kit's pages.
    pub fn render_kit_dir(&self) -> &Path {
        &self.render_kit_dir
    }

    /// Create both output directories, recording the ones that did not exist.
    pub fn ensure_dirs(&mut self) -> Result<(), BuildError> {
        for dir in [self.doc_dir.clone(), self.render_kit_dir.clone()] {
            if dir.is_dir() {
                continue;
            }

            fs::create_dir_all(&dir).map_err(|e| BuildError::WriteError {
                path: dir.clone(),
                message: e.to_string(),
            })?;
            tracing::debug!("Created {}", dir.display());
            self.record(dir, TouchedKind::Directory);
        }

        Ok(())
    }

    /// Copy an asset byte-for-byte into the top-level directory.
    pub fn copy_asset(&mut self, assets: &dyn AssetSource, name: &str) -> Result<(), BuildError> {
        let bytes = assets.load(name)?;
        let path = self.doc_dir.join(name);

        write_file(&path, &bytes)?;
        self.record(path, TouchedKind::CopiedAsset);

        Ok(())
    }

    /// Write a document into the top-level directory.
    pub fn write_doc(&mut self, file_name: &str, html: &str) -> Result<(), BuildError> {
        let path = self.doc_dir.join(file_name);
        self.write_document(path, html)
    }

    /// Write a document into the render-kit directory.
    pub fn write_render_kit_doc(&mut self, file_name: &str, html: &str) -> Result<(), BuildError> {
        let path = self.render_kit_dir.join(file_name);
        self.write_document(path, html)
    }

    /// Paths touched so far, in order.
    pub fn touched(&self) -> &[TouchedFile] {
        &self.touched
    }

    pub fn into_touched(self) -> Vec<TouchedFile> {
        self.touched
    }

    fn write_document(&mut self, path: PathBuf, html: &str) -> Result<(), BuildError> {
        write_file(&path, html.as_bytes())?;
        self.record(path, TouchedKind::GeneratedDocument);

        Ok(())
    }

    fn record(&mut self, path: PathBuf, kind: TouchedKind) {
        self.touched.push(TouchedFile { path, kind });
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), BuildError> {
    fs::write(path, bytes).map_err(|e| BuildError::WriteError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!("Wrote {}", path.display());

    Ok(())
}
