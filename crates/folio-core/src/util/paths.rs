//! Path resolution utilities.

use std::path::{Path, PathBuf};

/// Expands `~` to the user's home directory.
///
/// If the path starts with `~`, replaces it with the user's home directory.
/// Otherwise returns the path unchanged.
///
/// # Example
///
/// ```
/// use folio_core::util::paths::expand_tilde;
///
/// let expanded = expand_tilde("~/site");
/// assert!(!expanded.starts_with("~"));
/// ```
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

/// Resolve `path` against `base`.
///
/// Tildes are expanded first; absolute results are returned as-is.
pub fn resolve_against<P: AsRef<Path>>(base: &Path, path: P) -> PathBuf {
    let expanded = expand_tilde(path);
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_with_tilde() {
        let path = expand_tilde("~/site/posts");
        assert!(!path.starts_with("~"), "Tilde should be expanded");
        if let Some(home) = dirs::home_dir() {
            assert!(path.starts_with(&home));
            assert!(path.ends_with("site/posts"));
        }
    }

    #[test]
    fn test_expand_tilde_without_tilde() {
        let original = PathBuf::from("/absolute/path");
        assert_eq!(expand_tilde(&original), original);
    }

    #[test]
    fn test_expand_tilde_tilde_only() {
        let path = expand_tilde("~");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home);
        }
    }

    #[test]
    fn test_resolve_against_relative() {
        let resolved = resolve_against(Path::new("/site"), "src/posts");
        assert_eq!(resolved, PathBuf::from("/site/src/posts"));
    }

    #[test]
    fn test_resolve_against_absolute() {
        let resolved = resolve_against(Path::new("/site"), "/elsewhere/posts");
        assert_eq!(resolved, PathBuf::from("/elsewhere/posts"));
    }

    #[test]
    fn test_resolve_against_tilde() {
        let resolved = resolve_against(Path::new("/site"), "~/posts");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(resolved, home.join("posts"));
        }
    }
}
