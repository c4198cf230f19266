//! Configuration merging logic
//!
//! Priority: caller overrides > fontcustom.yml > defaults

use std::path::PathBuf;

use super::file::{get_config_path, load_config};
use super::schema::{OptionLayer, PathSpec};
use crate::error::Result;
use crate::naming::normalize_name;

pub const DEFAULT_FONT_NAME: &str = "fontcustom";
pub const DEFAULT_CSS_PREFIX: &str = "icon-";
pub const DEFAULT_TEMPLATES: &[&str] = &["css", "preview"];

/// Built-in values used when neither the config file nor the caller set a key.
#[derive(Debug, Clone)]
pub struct Defaults {
    pub input: Option<PathSpec>,
    pub output: Option<PathSpec>,
    pub font_name: String,
    pub css_prefix: String,
    pub templates: Vec<String>,
    pub hash: bool,
    pub preprocessor_path: Option<String>,
    pub debug: bool,
    pub quiet: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            font_name: DEFAULT_FONT_NAME.to_string(),
            css_prefix: DEFAULT_CSS_PREFIX.to_string(),
            templates: DEFAULT_TEMPLATES.iter().map(|t| t.to_string()).collect(),
            hash: true,
            preprocessor_path: None,
            debug: false,
            quiet: false,
        }
    }
}

/// What the caller (usually the command line) supplies.
///
/// `project_root` is required and never read from the config file.
#[derive(Debug, Clone)]
pub struct Overrides {
    /// Absolute project directory every relative path is resolved against
    pub project_root: PathBuf,
    /// Config file or directory hint, relative to `project_root`
    pub config: Option<PathBuf>,
    pub options: OptionLayer,
}

impl Overrides {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            config: None,
            options: OptionLayer::default(),
        }
    }
}

/// The final option set for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub project_root: PathBuf,
    /// Configuration file that was loaded, if any
    pub config: Option<PathBuf>,
    pub input: Option<PathSpec>,
    pub output: Option<PathSpec>,
    /// Always normalized, see [`normalize_name`]
    pub font_name: String,
    pub css_prefix: String,
    pub templates: Vec<String>,
    pub hash: bool,
    pub preprocessor_path: Option<String>,
    pub debug: bool,
    pub quiet: bool,
}

/// Merge defaults, the config file layer and caller overrides.
///
/// `input` and `output` are taken whole from the highest layer that sets
/// them, so a string never gets mixed with a mapping.
pub fn merge_options(
    defaults: &Defaults,
    config: Option<&OptionLayer>,
    overrides: &Overrides,
) -> Options {
    let cli = &overrides.options;

    let font_name = cli
        .font_name
        .clone()
        .or_else(|| config.and_then(|c| c.font_name.clone()))
        .unwrap_or_else(|| defaults.font_name.clone());

    Options {
        project_root: overrides.project_root.clone(),
        config: None,
        input: cli
            .input
            .clone()
            .or_else(|| config.and_then(|c| c.input.clone()))
            .or_else(|| defaults.input.clone()),
        output: cli
            .output
            .clone()
            .or_else(|| config.and_then(|c| c.output.clone()))
            .or_else(|| defaults.output.clone()),
        font_name: normalize_name(&font_name),
        css_prefix: cli
            .css_prefix
            .clone()
            .or_else(|| config.and_then(|c| c.css_prefix.clone()))
            .unwrap_or_else(|| defaults.css_prefix.clone()),
        templates: cli
            .templates
            .clone()
            .or_else(|| config.and_then(|c| c.templates.clone()))
            .unwrap_or_else(|| defaults.templates.clone()),
        hash: cli
            .hash
            .or_else(|| config.and_then(|c| c.hash))
            .unwrap_or(defaults.hash),
        preprocessor_path: cli
            .preprocessor_path
            .clone()
            .or_else(|| config.and_then(|c| c.preprocessor_path.clone()))
            .or_else(|| defaults.preprocessor_path.clone()),
        debug: cli
            .debug
            .or_else(|| config.and_then(|c| c.debug))
            .unwrap_or(defaults.debug),
        quiet: cli
            .quiet
            .or_else(|| config.and_then(|c| c.quiet))
            .unwrap_or(defaults.quiet),
    }
}

/// Locate and load the config file, then merge it with the built-in
/// defaults and `overrides`.
///
/// A missing `fontcustom.yml` is fine when no `config` hint was given;
/// `Options::config` is `None` in that case so the caller can say so.
pub fn collect_options(overrides: &Overrides) -> Result<Options> {
    let config_path = get_config_path(&overrides.project_root, overrides.config.as_deref())?;
    let layer = load_config(config_path.as_deref())?;

    let mut options = merge_options(&Defaults::default(), Some(&layer), overrides);
    options.config = config_path;
    Ok(options)
}
