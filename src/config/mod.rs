//! Configuration support for fontcustom.
//!
//! This module provides:
//! - Locating `fontcustom.yml` from a `--config` hint or the project root
//! - Loading it into an [`OptionLayer`]
//! - Merging defaults, the config file and caller overrides
//! - Template generation for the `config` command

mod file;
mod init;
mod merge;
mod schema;

pub use file::{get_config_path, load_config, CONFIG_FILE_NAME};
pub use init::{generate_config_file_in, FONTCUSTOM_YML_TEMPLATE};
pub use merge::{
    collect_options, merge_options, Defaults, Options, Overrides, DEFAULT_CSS_PREFIX,
    DEFAULT_FONT_NAME, DEFAULT_TEMPLATES,
};
pub use schema::{OptionLayer, PathSpec};
