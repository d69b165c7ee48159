//! Filtering pipeline / 过滤管线
//!
//! Linear scan over the catalog. A record is kept only when the name /
//! category, gilds and success-attribute checks all pass.

use crate::models::Record;
use super::matcher::{matches_field_list, matches_tokens, name_haystack};
use super::schema::{QueryTokens, SearchQuery, SearchResult};

/// Filter records by the three queries, keeping dataset order / 按三个查询过滤记录
pub fn filter<'a>(records: &'a [Record], query: &SearchQuery) -> SearchResult<'a> {
    let tokens = query.tokens();
    let items: Vec<&Record> = records
        .iter()
        .filter(|record| record_matches(record, &tokens))
        .collect();

    tracing::debug!(
        "Filter name={:?} gilds={:?} attributes={:?}: {} of {} records",
        tokens.name,
        tokens.gilds,
        tokens.attributes,
        items.len(),
        records.len()
    );

    let count = items.len();
    SearchResult { items, count }
}

/// Check one record against tokenized queries / 检查单条记录
pub fn record_matches(record: &Record, tokens: &QueryTokens) -> bool {
    if !tokens.name.is_empty() {
        let haystack = name_haystack(record.search_name(), &record.category);
        if !matches_tokens(&haystack, &tokens.name) {
            return false;
        }
    }

    if !matches_field_list(&record.gilds, &tokens.gilds) {
        return false;
    }

    matches_field_list(&record.success_attributes, &tokens.attributes)
}
