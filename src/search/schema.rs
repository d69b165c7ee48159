//! Search query and result types / 搜索查询与结果类型

use serde::Deserialize;

use crate::models::Record;
use super::tokenizer::tokenize;

/// Raw query text for the three search boxes / 三个搜索框的原始输入
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    /// Item name / category / 名称或分类
    #[serde(default)]
    pub name: String,
    /// Gilding stats / 镀金属性
    #[serde(default)]
    pub gilds: String,
    /// Success attributes / 成功属性
    #[serde(default)]
    pub attributes: String,
}

impl SearchQuery {
    pub fn new(
        name: impl Into<String>,
        gilds: impl Into<String>,
        attributes: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            gilds: gilds.into(),
            attributes: attributes.into(),
        }
    }

    /// Tokenize all three fields independently / 分别对三个字段分词
    pub fn tokens(&self) -> QueryTokens {
        QueryTokens {
            name: tokenize(&self.name),
            gilds: tokenize(&self.gilds),
            attributes: tokenize(&self.attributes),
        }
    }
}

/// Tokenized query / 分词后的查询
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTokens {
    pub name: Vec<String>,
    pub gilds: Vec<String>,
    pub attributes: Vec<String>,
}

/// Matching records in dataset order / 按数据集顺序的匹配结果
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
    pub items: Vec<&'a Record>,
    pub count: usize,
}
