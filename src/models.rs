//! Gilding record model / 镀金记录模型

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Display fallback for records without a name / 无名称记录的显示名
pub const UNKNOWN_NAME: &str = "Unknown";

/// One gilding record, defaults already applied / 一条镀金记录（已填充默认值）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub name: Option<String>,
    pub category: String,
    pub image: Option<String>,
    pub gild_chance: Option<String>,
    pub gilds: Vec<String>,
    pub success_attributes: Vec<String>,
}

/// Record as it appears in the dataset file / 数据文件中的原始记录
///
/// Every field is optional and unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub gild_chance: Option<Value>,
    #[serde(default)]
    pub gilds: Option<Vec<String>>,
    #[serde(default)]
    pub success_attributes: Option<Vec<String>>,
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        Self {
            name: raw.name,
            category: raw.category.unwrap_or_default(),
            image: raw.image.filter(|s| !s.is_empty()),
            gild_chance: raw.gild_chance.and_then(chance_text),
            gilds: raw.gilds.unwrap_or_default(),
            success_attributes: raw.success_attributes.unwrap_or_default(),
        }
    }
}

/// Falsy chance values count as absent / 空值视为缺失
fn chance_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Array(items) if !items.is_empty() => Some(Value::Array(items).to_string()),
        Value::Object(map) if !map.is_empty() => Some(Value::Object(map).to_string()),
        _ => None,
    }
}

impl Record {
    /// Name used for display and wiki links / 显示名称
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }

    /// Name as matched against queries, empty when absent / 用于匹配的名称
    pub fn search_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
