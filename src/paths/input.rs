use std::path::Path;
use std::sync::Arc;

use super::resolve;
use crate::config::PathSpec;
use crate::error::{Error, Result};
use crate::walker::list_vectors;

/// Where vectors and custom templates are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub vectors: Arc<Path>,
    /// Same `Arc` as `vectors` unless set separately
    pub templates: Arc<Path>,
}

impl InputPaths {
    /// Look a path up by role name (`"vectors"` or `"templates"`).
    pub fn get(&self, role: &str) -> Option<&Arc<Path>> {
        match role {
            "vectors" => Some(&self.vectors),
            "templates" => Some(&self.templates),
            _ => None,
        }
    }

    /// Whether custom templates live in their own directory.
    pub fn has_separate_templates(&self) -> bool {
        !Arc::ptr_eq(&self.vectors, &self.templates)
    }
}

/// Resolve the `input` option.
///
/// The vectors directory has to exist and hold at least one vector. The
/// templates directory isn't checked here; a missing custom template is
/// reported when templates are resolved.
pub fn get_input_paths(input: Option<&PathSpec>, project_root: &Path) -> Result<InputPaths> {
    let paths = match input {
        Some(PathSpec::Single(path)) => {
            let vectors = resolve(project_root, path);
            InputPaths {
                templates: Arc::clone(&vectors),
                vectors,
            }
        }
        Some(spec @ PathSpec::Mapped(_)) => {
            let vectors = spec
                .role("vectors")
                .map(|path| resolve(project_root, path))
                .ok_or(Error::InvalidInputSpec)?;
            let templates = match spec.role("templates") {
                Some(path) => resolve(project_root, path),
                None => Arc::clone(&vectors),
            };
            InputPaths { vectors, templates }
        }
        None => return Err(Error::InvalidInputSpec),
    };

    if !paths.vectors.is_dir() {
        return Err(Error::InvalidInputPath(paths.vectors.to_path_buf()));
    }

    let vectors = list_vectors(&paths.vectors)
        .map_err(|e| Error::Io(paths.vectors.to_path_buf(), e))?;
    if vectors.is_empty() {
        return Err(Error::EmptyInputDirectory(paths.vectors.to_path_buf()));
    }

    Ok(paths)
}
