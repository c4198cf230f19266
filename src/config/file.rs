//! Config file discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use super::schema::OptionLayer;
use crate::error::{Error, Result};

/// File name looked for in the project root or in a `--config` directory
pub const CONFIG_FILE_NAME: &str = "fontcustom.yml";

/// Find the configuration file to use.
///
/// `hint` is the `config` option, relative to `project_root` unless absolute.
///
/// - no hint: `project_root/fontcustom.yml` if present, otherwise `Ok(None)`
/// - hint is a directory: `fontcustom.yml` inside it, which must exist
/// - hint is a file: the file itself
///
/// Anything else is [`Error::ConfigNotFound`].
pub fn get_config_path(project_root: &Path, hint: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(hint) = hint else {
        let default = project_root.join(CONFIG_FILE_NAME);
        return Ok(default.is_file().then_some(default));
    };

    let path = project_root.join(hint);
    if path.is_dir() {
        let inside = path.join(CONFIG_FILE_NAME);
        if inside.is_file() {
            Ok(Some(inside))
        } else {
            Err(Error::ConfigNotFound(inside))
        }
    } else if path.is_file() {
        Ok(Some(path))
    } else {
        Err(Error::ConfigNotFound(path))
    }
}

/// Load and parse the configuration file, or return an empty layer when
/// there is nothing to load.
pub fn load_config(path: Option<&Path>) -> Result<OptionLayer> {
    let Some(path) = path else {
        return Ok(OptionLayer::default());
    };

    let parse_error = |message: String| Error::ConfigParseError {
        path: path.to_path_buf(),
        message,
    };

    let content = fs::read_to_string(path).map_err(|e| parse_error(e.to_string()))?;
    if is_blank_document(&content) {
        return Ok(OptionLayer::default());
    }

    // `~` on its own is a null document, not a mapping.
    let layer: Option<OptionLayer> =
        serde_yaml_ng::from_str(&content).map_err(|e| parse_error(e.to_string()))?;
    Ok(layer.unwrap_or_default())
}

/// True when the file holds nothing but whitespace and comments.
fn is_blank_document(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::PathSpec;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_no_hint_finds_config_in_project_root() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("fontcustom.yml");
        fs::write(&config_path, "font_name: icons\n").unwrap();

        let found = get_config_path(dir.path(), None).unwrap();
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_no_hint_and_no_config_is_not_an_error() {
        let dir = TempDir::new().unwrap();

        let found = get_config_path(dir.path(), None).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn test_hint_directory_searches_for_fontcustom_yml() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("config-is-in-dir");
        fs::create_dir(&config_dir).unwrap();
        fs::write(config_dir.join("fontcustom.yml"), "").unwrap();

        let found = get_config_path(dir.path(), Some(Path::new("config-is-in-dir"))).unwrap();
        assert_eq!(found, Some(config_dir.join("fontcustom.yml")));
    }

    #[test]
    fn test_hint_directory_without_config_fails() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("empty")).unwrap();

        let result = get_config_path(dir.path(), Some(Path::new("empty")));
        assert!(matches!(result, Err(Error::ConfigNotFound(p)) if p.ends_with("empty/fontcustom.yml")));
    }

    #[test]
    fn test_hint_file_is_used_directly() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        fs::write(&config_path, "").unwrap();

        let found = get_config_path(dir.path(), Some(Path::new("custom.yml"))).unwrap();
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_absolute_hint_ignores_project_root() {
        let project = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let config_path = elsewhere.path().join("fontcustom.yml");
        fs::write(&config_path, "").unwrap();

        let found = get_config_path(project.path(), Some(elsewhere.path())).unwrap();
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_missing_hint_fails() {
        let dir = TempDir::new().unwrap();

        let result = get_config_path(dir.path(), Some(Path::new("does-not-exist")));
        let err = result.unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
        assert!(err.to_string().contains("couldn't find"));
    }

    #[test]
    fn test_load_nothing_gives_empty_layer() {
        assert_eq!(load_config(None).unwrap(), OptionLayer::default());
    }

    #[test]
    fn test_load_config_full() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("fontcustom.yml");
        fs::write(
            &config_path,
            r#"
font_name: Custom Name From Config
css_prefix: glyph-
hash: false
input:
  vectors: shared/vectors
  templates: shared/templates
output: build/fonts
templates:
  - scss
  - preview
"#,
        )
        .unwrap();

        let layer = load_config(Some(&config_path)).unwrap();
        assert_eq!(layer.font_name.as_deref(), Some("Custom Name From Config"));
        assert_eq!(layer.css_prefix.as_deref(), Some("glyph-"));
        assert_eq!(layer.hash, Some(false));
        assert_eq!(layer.input.as_ref().and_then(|i| i.role("vectors")), Some("shared/vectors"));
        assert_eq!(layer.output, Some(PathSpec::from("build/fonts")));
        assert_eq!(
            layer.templates,
            Some(vec!["scss".to_string(), "preview".to_string()])
        );
        assert_eq!(layer.debug, None);
    }

    #[test]
    fn test_load_config_empty() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("fontcustom.yml");
        fs::write(&config_path, "# nothing here yet\n").unwrap();

        let layer = load_config(Some(&config_path)).unwrap();
        assert_eq!(layer, OptionLayer::default());
    }

    #[test]
    fn test_load_config_malformed() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("fontcustom-malformed.yml");
        fs::write(&config_path, "font_name: [unclosed\n  input: : :\n").unwrap();

        let err = load_config(Some(&config_path)).unwrap_err();
        assert!(matches!(err, Error::ConfigParseError { .. }));
        assert!(err.to_string().contains("couldn't read your configuration"));
    }

    #[test]
    fn test_load_config_not_a_mapping() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("fontcustom.yml");
        fs::write(&config_path, "just a sentence, not a mapping\n").unwrap();

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(Error::ConfigParseError { .. })));
    }
}
