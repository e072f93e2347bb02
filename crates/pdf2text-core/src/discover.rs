//! Locate PDF files inside a directory.

use std::path::{Path, PathBuf};

use glob::{glob_with, MatchOptions, Pattern};

use crate::error::{ConvertError, Result};

/// Find `*.pdf` files directly under `dir`, or anywhere below it when
/// `recursive` is set. The extension match ignores case. Results are sorted.
///
/// Symlinked directories below `dir` are not descended into. Entries that
/// cannot be read are logged and skipped.
pub fn find_pdfs(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let base = Pattern::escape(&dir.to_string_lossy());
    let pattern = if recursive {
        format!("{}/**/*.pdf", base)
    } else {
        format!("{}/*.pdf", base)
    };

    let options = MatchOptions {
        case_sensitive: false,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let entries = glob_with(&pattern, options)
        .map_err(|e| ConvertError::Discovery(format!("invalid pattern {}: {}", pattern, e)))?;

    let mut found = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if path.is_file() && !through_symlinked_dir(dir, &path) {
            found.push(path);
        }
    }
    found.sort();

    log::debug!("Found {} PDF files under {}", found.len(), dir.display());
    Ok(found)
}

/// Whether any directory between `dir` and `path` is a symlink.
fn through_symlinked_dir(dir: &Path, path: &Path) -> bool {
    let Ok(relative) = path.strip_prefix(dir) else {
        return false;
    };
    let Some(parent) = relative.parent() else {
        return false;
    };

    let mut current = dir.to_path_buf();
    for component in parent.components() {
        current.push(component);
        let is_link = std::fs::symlink_metadata(&current)
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false);
        if is_link {
            log::debug!("Not following symlinked directory {}", current.display());
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_top_level_only() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("b.pdf"));
        touch(&dir.path().join("a.PDF"));
        touch(&dir.path().join("notes.txt"));
        touch(&dir.path().join("nested/c.pdf"));

        let found = find_pdfs(dir.path(), false).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.PDF", "b.pdf"]);
    }

    #[test]
    fn test_recursive() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.pdf"));
        touch(&dir.path().join("nested/c.pdf"));
        touch(&dir.path().join("nested/deeper/d.pdf"));
        touch(&dir.path().join("nested/deeper/e.doc"));

        let found = find_pdfs(dir.path(), true).unwrap();
        assert_eq!(found.len(), 3);
        assert!(found.contains(&dir.path().join("nested/deeper/d.pdf")));
        assert!(found.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_directories_named_pdf_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("folder.pdf")).unwrap();
        touch(&dir.path().join("real.pdf"));

        let found = find_pdfs(dir.path(), false).unwrap();
        assert_eq!(found, vec![dir.path().join("real.pdf")]);
    }

    #[test]
    fn test_glob_metacharacters_in_dir_name() {
        let dir = tempfile::tempdir().unwrap();
        let odd = dir.path().join("reports [2024]");
        touch(&odd.join("q1.pdf"));

        let found = find_pdfs(&odd, false).unwrap();
        assert_eq!(found, vec![odd.join("q1.pdf")]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_pdfs(dir.path(), true).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_is_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.pdf"));
        std::os::unix::fs::symlink(".", dir.path().join("loop")).unwrap();

        let found = find_pdfs(dir.path(), true).unwrap();
        assert_eq!(found, vec![dir.path().join("a.pdf")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let outside = tempfile::tempdir().unwrap();
        touch(&outside.path().join("elsewhere.pdf"));
        touch(&dir.path().join("nested/own.pdf"));
        std::os::unix::fs::symlink(outside.path(), dir.path().join("nested/link")).unwrap();

        let found = find_pdfs(dir.path(), true).unwrap();
        assert_eq!(found, vec![dir.path().join("nested/own.pdf")]);
    }

    #[test]
    fn test_through_symlinked_dir_plain_paths() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("x/y/z.pdf"));
        assert!(!through_symlinked_dir(dir.path(), &dir.path().join("x/y/z.pdf")));
        assert!(!through_symlinked_dir(dir.path(), &dir.path().join("top.pdf")));
        assert!(!through_symlinked_dir(dir.path(), Path::new("/elsewhere/a.pdf")));
    }
}
