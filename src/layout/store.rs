//! JSON file persistence for the dashboard layout.
//!
//! The engine never persists anything itself; hosts wire a [`LayoutStore`]
//! into the controller's change callback. Writes go to a sibling temp file
//! that is renamed over the target, so a crash mid-write leaves the
//! previous layout intact.

use super::catalog::WidgetCatalog;
use super::model::DashboardLayout;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading or writing the layout file.
#[derive(Error, Debug)]
pub enum LayoutStoreError {
    /// The file exists but could not be read.
    #[error("Failed to read layout file: {path}")]
    Read {
        /// Layout file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid layout document.
    #[error("Invalid layout document at {path}: {source}")]
    Parse {
        /// Layout file path.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The layout could not be written.
    #[error("Failed to write layout file: {path}")]
    Write {
        /// Path that failed to be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The layout could not be serialized.
    #[error("Failed to serialize layout: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// A layout document stored at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutStore {
    path: PathBuf,
}

impl LayoutStore {
    /// Creates a store for `path`. Nothing is touched until load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the layout document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored layout; `Ok(None)` when no file exists yet.
    pub fn load(&self) -> Result<Option<DashboardLayout>, LayoutStoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(LayoutStoreError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| LayoutStoreError::Parse {
                path: self.path.clone(),
                source: e,
            })
    }

    /// Reads the stored layout, falling back to the catalog's default layout.
    pub fn load_or_default(
        &self,
        catalog: &WidgetCatalog,
    ) -> Result<DashboardLayout, LayoutStoreError> {
        match self.load()? {
            Some(layout) => Ok(layout),
            None => {
                tracing::debug!("No layout at {:?}, using default layout", self.path);
                Ok(catalog.default_layout())
            }
        }
    }

    /// Writes `layout` as pretty JSON, replacing any previous document.
    pub fn save(&self, layout: &DashboardLayout) -> Result<(), LayoutStoreError> {
        let json = serde_json::to_string_pretty(layout).map_err(LayoutStoreError::Serialize)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| LayoutStoreError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| LayoutStoreError::Write {
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| LayoutStoreError::Write {
            path: self.path.clone(),
            source: e,
        })?;
        tracing::debug!("Saved layout ({} widgets) to {:?}", layout.len(), self.path);
        Ok(())
    }

    /// Deletes the stored document so the next load yields the default.
    pub fn clear(&self) -> Result<(), LayoutStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LayoutStoreError::Write {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    /// A change callback that saves every layout and logs failures.
    ///
    /// Save errors are not reported back to the caller.
    pub fn autosave_callback(&self) -> super::controller::LayoutChangeCallback {
        let store = self.clone();
        Box::new(move |layout| {
            if let Err(e) = store.save(layout) {
                tracing::warn!("layout not saved: {e}");
            }
        })
    }
}
