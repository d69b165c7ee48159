//! Field matcher / 字段匹配
//!
//! A field matches when every token is a substring of the field's haystack.
//! The haystack of a list field is its elements joined by a single space,
//! so tokens may be satisfied by different elements.

/// Check that all tokens occur in the haystack / 检查所有词元均出现在文本中
///
/// No tokens means no filter, which always matches.
pub fn matches_tokens(haystack: &str, tokens: &[String]) -> bool {
    if tokens.is_empty() {
        return true;
    }

    let haystack = haystack.to_lowercase();
    tokens.iter().all(|token| haystack.contains(token.as_str()))
}

/// Match a list field (gilds / success attributes) / 匹配列表字段
pub fn matches_field_list<S: AsRef<str>>(fields: &[S], tokens: &[String]) -> bool {
    if tokens.is_empty() {
        return true;
    }

    let haystack = fields
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");
    matches_tokens(&haystack, tokens)
}

/// Haystack for the name / category query / 名称与分类的检索文本
pub fn name_haystack(name: &str, category: &str) -> String {
    format!("{} {}", name, category)
}
