//! Search module - tokenizing, matching and filtering primitives / 搜索模块
//!
//! Architecture principles / 架构原则：
//! - Pure functions over the loaded catalog, no shared mutable state
//! - Matching is boolean, results keep dataset order (no ranking)
//! - Call direction: API → Search (unidirectional) / 调用方向

pub mod engine;
pub mod matcher;
pub mod schema;
pub mod tokenizer;

pub use engine::filter;
pub use matcher::{matches_field_list, matches_tokens};
pub use schema::{SearchQuery, SearchResult};
pub use tokenizer::tokenize;
