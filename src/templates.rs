//! Expansion of template tokens into template files

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Packaged files behind each shorthand token. Files listed after the first
/// are dependencies pulled in with it.
const SHORTHANDS: &[(&str, &[&str])] = &[
    ("css", &["fontcustom.css"]),
    ("scss", &["_fontcustom.scss"]),
    ("preview", &["fontcustom-preview.html", "fontcustom.css"]),
    ("bootstrap", &["fontcustom-bootstrap.css"]),
    ("bootstrap-scss", &["_fontcustom-bootstrap.scss"]),
    ("bootstrap-ie7", &["fontcustom-bootstrap-ie7.css"]),
    ("bootstrap-ie7-scss", &["_fontcustom-bootstrap-ie7.scss"]),
];

/// Environment variable pointing at the packaged templates when the binary
/// no longer sits next to its source tree
pub const TEMPLATE_DIR_ENV: &str = "FONTCUSTOM_TEMPLATE_DIR";

/// Directory holding the templates shipped with this crate.
///
/// `FONTCUSTOM_TEMPLATE_DIR` wins over the build-time location.
pub fn packaged_template_dir() -> PathBuf {
    template_dir_from(std::env::var_os(TEMPLATE_DIR_ENV))
}

fn template_dir_from(env_override: Option<OsString>) -> PathBuf {
    env_override
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("templates"))
}

/// Packaged file names for a shorthand token, if it is one.
pub fn shorthand(token: &str) -> Option<&'static [&'static str]> {
    SHORTHANDS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, files)| *files)
}

/// Turns the `templates` option into template file paths.
#[derive(Debug, Clone)]
pub struct TemplateResolver {
    packaged_dir: PathBuf,
}

impl Default for TemplateResolver {
    fn default() -> Self {
        Self::new(packaged_template_dir())
    }
}

impl TemplateResolver {
    pub fn new(packaged_dir: impl Into<PathBuf>) -> Self {
        Self {
            packaged_dir: packaged_dir.into(),
        }
    }

    pub fn packaged_dir(&self) -> &Path {
        &self.packaged_dir
    }

    /// Expand `tokens` into absolute template paths.
    ///
    /// Shorthands map to packaged templates; anything else must name a file
    /// inside `custom_dir`. Both have to exist. Every path appears once, in
    /// the order it was first needed.
    pub fn get_templates(&self, tokens: &[String], custom_dir: Option<&Path>) -> Result<Vec<PathBuf>> {
        let mut templates: Vec<PathBuf> = vec![];
        let mut push = |path: PathBuf| {
            if !templates.contains(&path) {
                templates.push(path);
            }
        };

        for token in tokens {
            if let Some(files) = shorthand(token) {
                for file in files {
                    let path = self.packaged_dir.join(file);
                    if !path.is_file() {
                        return Err(Error::TemplateNotFound {
                            token: token.clone(),
                            search_dir: Some(self.packaged_dir.clone()),
                        });
                    }
                    push(path);
                }
                continue;
            }

            let custom = custom_dir
                .map(|dir| dir.join(token))
                .filter(|path| path.is_file())
                .ok_or_else(|| Error::TemplateNotFound {
                    token: token.clone(),
                    search_dir: custom_dir.map(Path::to_path_buf),
                })?;
            push(custom);
        }

        Ok(templates)
    }
}
