//! Resolution of the `input` and `output` options into concrete paths.
//!
//! Every path is held in an `Arc<Path>`. A role that wasn't given its own
//! value shares the `Arc` of the role it defaults to, so
//! `Arc::ptr_eq(&paths.css, &paths.fonts)` tells whether the user set a
//! separate CSS directory.

mod input;
mod output;

pub use input::{get_input_paths, InputPaths};
pub use output::{get_output_paths, OutputPaths};

use std::path::Path;
use std::sync::Arc;

/// Resolve `value` against `project_root` unless it is already absolute.
fn resolve(project_root: &Path, value: &str) -> Arc<Path> {
    Arc::from(project_root.join(value))
}
