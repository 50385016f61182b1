//! Icon map for a browser-extension `manifest.json`
//!
//! Extension manifests reference their icons through an `"icons"` object keyed
//! by pixel size. This module produces that fragment for the files that were
//! actually written so it can be pasted (or merged) into the manifest.

use crate::error::{IconError, IconResult};
use serde::Serialize;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// File name of the fragment written next to the icons
pub const MANIFEST_FILE_NAME: &str = "icons.json";

/// Root of the `icons.json` fragment
#[derive(Serialize, Debug, Clone, Default)]
pub struct IconManifest {
    /// Icon paths keyed by size; a `BTreeMap<u32, _>` keeps keys in numeric order
    pub icons: BTreeMap<u32, String>,
}

impl IconManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the icon written for `size`, replacing any earlier entry
    pub fn add_icon(&mut self, size: u32, path: &Path) {
        // Manifests always use forward slashes
        let path = path.to_string_lossy().replace('\\', "/");
        self.icons.insert(size, path);
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn to_json(&self) -> IconResult<String> {
        serde_json::to_string_pretty(self).map_err(IconError::Manifest)
    }

    /// Writes the fragment to `out_dir/icons.json` and returns its path
    pub fn write_to_dir(&self, out_dir: &Path) -> IconResult<PathBuf> {
        let path = out_dir.join(MANIFEST_FILE_NAME);
        let json = self.to_json()?;
        std::fs::write(&path, json).map_err(|error| IconError::Write {
            path: path.clone(),
            error,
        })?;
        Ok(path)
    }
}
