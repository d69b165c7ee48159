//! Path and text utility functions / 路径与文本工具函数

use std::path::{Component, Path, PathBuf};

/// Resolve a file name inside a base directory / 在基础目录中解析文件名
///
/// Returns None for names that would leave the directory (absolute paths,
/// `..` components) or that resolve to nothing.
pub fn resolve_in_dir(base: &Path, name: &str) -> Option<PathBuf> {
    let mut resolved = base.to_path_buf();
    let mut pushed = false;

    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => {
                resolved.push(part);
                pushed = true;
            }
            Component::CurDir => continue,
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    pushed.then_some(resolved)
}

/// Check that a file exists inside the base directory / 检查目录中文件是否存在
pub fn file_in_dir(base: &Path, name: &str) -> Option<PathBuf> {
    resolve_in_dir(base, name).filter(|path| path.is_file())
}

/// Escape text for HTML element and attribute content / HTML 转义
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_in_dir() {
        let base = Path::new("/srv/images");
        assert_eq!(
            resolve_in_dir(base, "sword.png"),
            Some(PathBuf::from("/srv/images/sword.png"))
        );
        assert_eq!(
            resolve_in_dir(base, "./tools/axe.png"),
            Some(PathBuf::from("/srv/images/tools/axe.png"))
        );
        assert_eq!(resolve_in_dir(base, "../secret.txt"), None);
        assert_eq!(resolve_in_dir(base, "a/../../b.png"), None);
        assert_eq!(resolve_in_dir(base, "/etc/passwd"), None);
        assert_eq!(resolve_in_dir(base, "."), None);
    }

    #[test]
    fn test_file_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sword.png"), b"png").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        assert!(file_in_dir(dir.path(), "sword.png").is_some());
        assert!(file_in_dir(dir.path(), "shield.png").is_none());
        assert!(file_in_dir(dir.path(), "sub").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_backslash_is_part_of_file_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a\\b.png"), b"png").unwrap();

        assert_eq!(
            file_in_dir(dir.path(), "a\\b.png"),
            Some(dir.path().join("a\\b.png"))
        );
        assert!(file_in_dir(dir.path(), "a/b.png").is_none());
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Fish & Chips"), "Fish &amp; Chips");
        assert_eq!(escape_html("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
        assert_eq!(escape_html("it's"), "it&#39;s");
    }
}
