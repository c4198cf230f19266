use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use super::resolve;
use crate::config::PathSpec;
use crate::error::{Error, Result};

/// Where generated files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub fonts: Arc<Path>,
    /// Same `Arc` as `fonts` unless set separately
    pub css: Arc<Path>,
    /// Same `Arc` as `fonts` unless set separately
    pub preview: Arc<Path>,
    /// Caller-declared roles, usually custom template names
    pub extra: BTreeMap<String, Arc<Path>>,
    /// No `output` option was given and `project_root/font_name` was used
    pub defaulted: bool,
}

impl OutputPaths {
    fn shared(fonts: Arc<Path>, defaulted: bool) -> Self {
        Self {
            css: Arc::clone(&fonts),
            preview: Arc::clone(&fonts),
            fonts,
            extra: BTreeMap::new(),
            defaulted,
        }
    }

    /// Look a path up by role name, including extra roles.
    pub fn get(&self, role: &str) -> Option<&Arc<Path>> {
        match role {
            "fonts" => Some(&self.fonts),
            "css" => Some(&self.css),
            "preview" => Some(&self.preview),
            _ => self.extra.get(role),
        }
    }

    /// Every role with its path, the three standard roles first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Path>)> {
        [
            ("fonts", &self.fonts),
            ("css", &self.css),
            ("preview", &self.preview),
        ]
        .into_iter()
        .chain(self.extra.iter().map(|(role, path)| (role.as_str(), path)))
    }
}

/// Resolve the `output` option.
///
/// Paths that don't exist yet are fine; they get created when files are
/// written. A path that exists has to be a directory.
pub fn get_output_paths(
    output: Option<&PathSpec>,
    project_root: &Path,
    font_name: &str,
) -> Result<OutputPaths> {
    let paths = match output {
        None => OutputPaths::shared(resolve(project_root, font_name), true),
        Some(PathSpec::Single(path)) => OutputPaths::shared(resolve(project_root, path), false),
        Some(PathSpec::Mapped(map)) => {
            let fonts = map
                .get("fonts")
                .map(|path| resolve(project_root, path))
                .ok_or(Error::InvalidOutputSpec)?;
            let or_fonts = |role: &str| match map.get(role) {
                Some(path) => resolve(project_root, path),
                None => Arc::clone(&fonts),
            };

            let css = or_fonts("css");
            let preview = or_fonts("preview");
            let extra = map
                .iter()
                .filter(|(role, _)| !matches!(role.as_str(), "fonts" | "css" | "preview"))
                .map(|(role, path)| (role.clone(), resolve(project_root, path)))
                .collect();

            OutputPaths {
                fonts,
                css,
                preview,
                extra,
                defaulted: false,
            }
        }
    };

    for (_, path) in paths.iter() {
        if path.exists() && !path.is_dir() {
            return Err(Error::InvalidOutputPath(path.to_path_buf()));
        }
    }

    Ok(paths)
}
