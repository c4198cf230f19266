//! Record of the resolved options, kept next to the generated fonts

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::Project;

/// File name of the manifest inside the fonts directory
pub const MANIFEST_FILE_NAME: &str = ".fontcustom-manifest.json";

/// Snapshot of everything a build depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub font_name: String,
    pub css_prefix: String,
    pub hash: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preprocessor_path: Option<String>,
    pub vectors: PathBuf,
    pub template_dir: PathBuf,
    /// Output role name to directory
    pub output: BTreeMap<String, PathBuf>,
    pub templates: Vec<PathBuf>,
}

impl Manifest {
    pub fn from_project(project: &Project) -> Self {
        let options = &project.options;
        Self {
            font_name: options.font_name.clone(),
            css_prefix: options.css_prefix.clone(),
            hash: options.hash,
            preprocessor_path: options.preprocessor_path.clone(),
            vectors: project.input.vectors.to_path_buf(),
            template_dir: project.input.templates.to_path_buf(),
            output: project
                .output
                .iter()
                .map(|(role, path)| (role.to_string(), path.to_path_buf()))
                .collect(),
            templates: project.templates.clone(),
        }
    }
}

/// What [`ManifestStore::update`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestStatus {
    Created,
    Updated,
    Unchanged,
}

/// Where manifests get persisted.
///
/// Passed into [`crate::prepare`] so tests can swap it out.
pub trait ManifestStore {
    fn update(&self, path: &Path, manifest: &Manifest) -> Result<ManifestStatus>;
}

/// Pretty-printed JSON on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonManifest;

impl JsonManifest {
    pub fn read(path: &Path) -> io::Result<Manifest> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl ManifestStore for JsonManifest {
    fn update(&self, path: &Path, manifest: &Manifest) -> Result<ManifestStatus> {
        let status = match Self::read(path) {
            Ok(existing) if existing == *manifest => return Ok(ManifestStatus::Unchanged),
            Ok(_) => ManifestStatus::Updated,
            Err(e) if e.kind() == io::ErrorKind::NotFound => ManifestStatus::Created,
            // Unreadable manifests get rewritten
            Err(_) => ManifestStatus::Updated,
        };

        let write = || -> io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut json = serde_json::to_string_pretty(manifest)?;
            json.push('\n');
            fs::write(path, json)
        };
        write().map_err(|e| Error::Manifest(path.to_path_buf(), e))?;

        Ok(status)
    }
}
