//! Shapes of the values found in fontcustom.yml and on the command line

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An `input` or `output` value: either one path for every role, or a
/// mapping from role name to path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSpec {
    Single(String),
    Mapped(BTreeMap<String, String>),
}

impl PathSpec {
    /// Look up a role in a mapped spec. Always `None` for a single path.
    pub fn role(&self, name: &str) -> Option<&str> {
        match self {
            PathSpec::Single(_) => None,
            PathSpec::Mapped(map) => map.get(name).map(String::as_str),
        }
    }
}

impl From<&str> for PathSpec {
    fn from(path: &str) -> Self {
        PathSpec::Single(path.to_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PathSpec {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        PathSpec::Mapped(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// One layer of options. fontcustom.yml deserializes into this directly,
/// and command-line overrides are collected into one too.
///
/// `None` means "not set in this layer".
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionLayer {
    /// Vector directory, or `{vectors, templates}` mapping
    pub input: Option<PathSpec>,

    /// Output directory, or `{fonts, css, preview, ...}` mapping
    pub output: Option<PathSpec>,

    pub font_name: Option<String>,

    /// Prefix for generated CSS class names
    pub css_prefix: Option<String>,

    /// Template tokens or custom template file names
    pub templates: Option<Vec<String>>,

    /// Append a content hash to generated font file names
    pub hash: Option<bool>,

    /// Path prepended to font URLs in preprocessor (scss) templates
    pub preprocessor_path: Option<String>,

    pub debug: Option<bool>,

    pub quiet: Option<bool>,
}
