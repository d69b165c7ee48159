//! Query tokenizer / 查询分词器
//!
//! English-style segmentation: whitespace separated, lowercased.

/// Tokenize query text / 对查询文本进行分词
///
/// Splits on whitespace, drops empty pieces and lowercases the rest.
/// Empty or whitespace-only input yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}
