pub mod colors;
pub mod config;
pub mod error;
pub mod manifest;
pub mod naming;
pub mod paths;
mod report;
pub mod templates;
pub mod toolchain;
pub mod walker;

pub use colors::{should_use_colors, Colors};
pub use config::{
    collect_options, generate_config_file_in, get_config_path, load_config, merge_options,
    Defaults, OptionLayer, Options, Overrides, PathSpec, CONFIG_FILE_NAME,
    FONTCUSTOM_YML_TEMPLATE,
};
pub use error::{Error, Result};
pub use manifest::{JsonManifest, Manifest, ManifestStatus, ManifestStore, MANIFEST_FILE_NAME};
pub use naming::normalize_name;
pub use paths::{get_input_paths, get_output_paths, InputPaths, OutputPaths};
pub use report::{print_advisories, print_prepared, print_project, Reporter};
pub use templates::{packaged_template_dir, TemplateResolver};
pub use toolchain::{check_toolchain, FontForge, Toolchain};
pub use walker::{is_vector, list_vectors};

use std::path::PathBuf;

/// Everything a build needs to know, resolved and validated.
#[derive(Debug, Clone)]
pub struct Project {
    pub options: Options,
    pub input: InputPaths,
    pub output: OutputPaths,
    pub templates: Vec<PathBuf>,
}

impl Project {
    /// Where the manifest for this build lives
    pub fn manifest_path(&self) -> PathBuf {
        self.output.fonts.join(MANIFEST_FILE_NAME)
    }
}

/// Result of [`prepare`].
#[derive(Debug)]
pub struct Prepared {
    pub project: Project,
    pub manifest: ManifestStatus,
}

/// Collect options and resolve every path from them.
///
/// Nothing is written; the first problem found is returned.
pub fn resolve_project(overrides: &Overrides, resolver: &TemplateResolver) -> Result<Project> {
    let options = collect_options(overrides)?;

    let input = get_input_paths(options.input.as_ref(), &options.project_root)?;
    let output = get_output_paths(
        options.output.as_ref(),
        &options.project_root,
        &options.font_name,
    )?;
    let templates = resolver.get_templates(&options.templates, Some(&*input.templates))?;

    Ok(Project {
        options,
        input,
        output,
        templates,
    })
}

/// Get a build ready to run: check the toolchain, resolve the project and
/// record it in the manifest.
pub fn prepare(
    overrides: &Overrides,
    resolver: &TemplateResolver,
    toolchain: &dyn Toolchain,
    store: &dyn ManifestStore,
) -> Result<Prepared> {
    check_toolchain(toolchain)?;

    let project = resolve_project(overrides, resolver)?;
    let manifest = store.update(&project.manifest_path(), &Manifest::from_project(&project))?;

    Ok(Prepared { project, manifest })
}
