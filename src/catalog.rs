//! Dataset loader / 数据集加载器
//!
//! Reads the gilding dataset once and keeps it for the process lifetime.
//! A failed load is not cached, the next call reads the file again.

use once_cell::sync::OnceCell;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::models::{RawRecord, Record};

/// Loaded dataset, shared read-only / 只读共享的数据集
pub type Catalog = Arc<Vec<Record>>;

/// Dataset source errors, all fatal at startup / 数据源错误
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("dataset file not found: {0:?}")]
    NotFound(PathBuf),

    #[error("failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset entry {index} is malformed: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset must be a JSON array of objects: {0}")]
    Shape(String),
}

/// Memoizing dataset loader / 带缓存的数据集加载器
pub struct CatalogLoader {
    path: PathBuf,
    cache: OnceCell<Catalog>,
}

impl CatalogLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the dataset, reading the file only on the first success / 加载数据集（首次成功后缓存）
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        self.cache
            .get_or_try_init(|| {
                let records = read_catalog(&self.path)?;
                tracing::info!("Loaded {} gilding records from {:?}", records.len(), self.path);
                Ok::<_, CatalogError>(Arc::new(records))
            })
            .cloned()
    }
}

/// Read and parse a dataset file / 读取并解析数据文件
pub fn read_catalog(path: &Path) -> Result<Vec<Record>, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CatalogError::NotFound(path.to_path_buf())
        } else {
            CatalogError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_catalog(&content)
}

/// Parse dataset JSON into records, preserving order / 解析数据集（保持顺序）
pub fn parse_catalog(content: &str) -> Result<Vec<Record>, CatalogError> {
    let value: Value = serde_json::from_str(content)?;

    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(CatalogError::Shape(format!(
                "top-level value is {}",
                json_kind(&other)
            )))
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            if !entry.is_object() {
                return Err(CatalogError::Shape(format!(
                    "entry {} is {}",
                    index,
                    json_kind(&entry)
                )));
            }
            serde_json::from_value::<RawRecord>(entry)
                .map(Record::from)
                .map_err(|source| CatalogError::Record { index, source })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"name": "Iron Sword", "category": "Weapon", "gilds": ["+5 Damage"], "success_attributes": ["Sharp"]},
        {"name": "Iron Shield", "category": "Armor", "gilds": ["+5 Block"], "success_attributes": ["Sturdy"]},
        {"category": "Misc"}
    ]"#;

    #[test]
    fn test_parse_preserves_order() {
        let records = parse_catalog(SAMPLE).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.display_name()).collect();
        assert_eq!(names, vec!["Iron Sword", "Iron Shield", "Unknown"]);
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(matches!(parse_catalog("[{"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_catalog(r#"{"name":"x"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Shape(_)));
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_parse_rejects_non_object_entry() {
        assert!(matches!(parse_catalog(r#"[{}, 3]"#), Err(CatalogError::Shape(_))));
    }

    #[test]
    fn test_parse_rejects_mistyped_field() {
        let err = parse_catalog(r#"[{}, {"gilds": "not a list"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Record { index: 1, .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loader = CatalogLoader::new(dir.path().join("gildings.json"));
        assert!(matches!(loader.load(), Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn test_load_is_memoized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gildings.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let loader = CatalogLoader::new(&path);
        let first = loader.load().unwrap();
        std::fs::remove_file(&path).unwrap();

        let second = loader.load().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 3);
    }

    #[test]
    fn test_failed_load_retries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gildings.json");
        std::fs::write(&path, "not json").unwrap();

        let loader = CatalogLoader::new(&path);
        assert!(loader.load().is_err());

        std::fs::write(&path, SAMPLE).unwrap();
        assert_eq!(loader.load().unwrap().len(), 3);
    }
}
