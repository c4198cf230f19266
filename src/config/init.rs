//! Template generation for the `config` command

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::file::CONFIG_FILE_NAME;

/// Template fontcustom.yml with documentation
pub const FONTCUSTOM_YML_TEMPLATE: &str = r#"# fontcustom.yml - Configuration for fontcustom
#
# Relative paths are resolved against the project root (the directory
# fontcustom is run from, or --project-root). Command-line flags override
# anything set here. Uncomment and modify as needed.

# Name of the generated font. Anything other than letters, digits,
# underscores and hyphens is replaced with a hyphen.
# font_name: fontcustom

# Prefix for the generated CSS classes.
# css_prefix: icon-

# Append a content hash to generated font file names (cache busting).
# hash: true

# Where your vectors (*.svg, *.eps) live. Either a single directory...
# input: vectors
#
# ...or separate directories for vectors and custom templates:
# input:
#   vectors: vectors
#   templates: templates

# Where generated files go. Either a single directory...
# output: fontcustom
#
# ...or one directory per kind of file. "fonts" is required; "css" and
# "preview" default to it. Extra keys name custom templates and where
# their output should be written.
# output:
#   fonts: app/assets/fonts
#   css: app/assets/stylesheets
#   preview: app/views/styleguide
#   custom.css: app/assets/stylesheets/custom

# Templates to generate. Shorthands: css, scss, preview, bootstrap,
# bootstrap-scss, bootstrap-ie7, bootstrap-ie7-scss. Anything else is a
# file name inside input.templates.
# templates:
#   - css
#   - preview

# Font path prefix used by preprocessor (scss) templates.
# preprocessor_path: /assets/fonts
"#;

/// Generate fontcustom.yml in the specified directory (or current directory if None).
///
/// Returns an error if fontcustom.yml already exists.
pub fn generate_config_file_in(dir: Option<&Path>) -> io::Result<PathBuf> {
    let path = dir.map_or_else(
        || PathBuf::from(CONFIG_FILE_NAME),
        |d| d.join(CONFIG_FILE_NAME),
    );

    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", path.display()),
        ));
    }

    fs::write(&path, FONTCUSTOM_YML_TEMPLATE)?;
    Ok(path)
}
