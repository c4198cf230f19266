use ignore::WalkBuilder;
use std::io;
use std::path::{Path, PathBuf};

/// Extensions accepted as glyph sources
pub const VECTOR_EXTENSIONS: &[&str] = &["svg", "eps"];

/// Check whether a path looks like a vector image by its extension
pub fn is_vector(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            VECTOR_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// List the vector files directly inside `dir`, sorted by path.
///
/// Subdirectories and hidden files are skipped. Ignore files are not
/// consulted: every vector the user put in the directory counts.
/// Symlinks count when they point at a file; dangling ones are skipped.
pub fn list_vectors(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .hidden(true) // Skip hidden files
        .max_depth(Some(1))
        .build();

    let mut vectors = vec![];
    for entry in walker {
        let entry = entry.map_err(|e| io::Error::other(e.to_string()))?;
        // `Path::is_file` follows symlinks, `DirEntry::file_type` doesn't.
        if entry.path().is_file() && is_vector(entry.path()) {
            vectors.push(entry.into_path());
        }
    }

    vectors.sort();
    Ok(vectors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_vector() {
        assert!(is_vector(Path::new("a.svg")));
        assert!(is_vector(Path::new("b.eps")));
        assert!(is_vector(Path::new("C.SVG")));
        assert!(!is_vector(Path::new("notes.txt")));
        assert!(!is_vector(Path::new("svg")));
    }

    #[test]
    fn test_list_vectors_only_recognized_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("c.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("a.eps"), "%!PS").unwrap();
        fs::write(dir.path().join("readme.txt"), "not a vector").unwrap();

        let vectors = list_vectors(dir.path()).unwrap();

        assert_eq!(
            vectors,
            vec![dir.path().join("a.eps"), dir.path().join("c.svg")]
        );
    }

    #[test]
    fn test_list_vectors_not_recursive() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/deep.svg"), "<svg/>").unwrap();

        let vectors = list_vectors(dir.path()).unwrap();

        assert!(vectors.is_empty());
    }

    #[test]
    fn test_list_vectors_skips_hidden_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".hidden.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("visible.svg"), "<svg/>").unwrap();

        let vectors = list_vectors(dir.path()).unwrap();

        assert_eq!(vectors, vec![dir.path().join("visible.svg")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_list_vectors_follows_symlinked_files() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source");
        let vectors_dir = dir.path().join("vectors");
        fs::create_dir(&source).unwrap();
        fs::create_dir(&vectors_dir).unwrap();
        fs::write(source.join("a.svg"), "<svg/>").unwrap();
        std::os::unix::fs::symlink(source.join("a.svg"), vectors_dir.join("a.svg")).unwrap();
        std::os::unix::fs::symlink(source.join("gone.svg"), vectors_dir.join("gone.svg"))
            .unwrap();

        let vectors = list_vectors(&vectors_dir).unwrap();

        assert_eq!(vectors, vec![vectors_dir.join("a.svg")]);
    }

    #[test]
    fn test_list_vectors_ignores_gitignore() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".gitignore"), "*.svg\n").unwrap();
        fs::write(dir.path().join("kept.svg"), "<svg/>").unwrap();

        let vectors = list_vectors(dir.path()).unwrap();

        assert_eq!(vectors, vec![dir.path().join("kept.svg")]);
    }
}
