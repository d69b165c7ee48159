use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;
use crate::api::ApiResponse;
use gilding_backend::models::Record;
use gilding_backend::render::{build_rows, RowView};
use gilding_backend::search::{filter, SearchQuery};

/// 搜索结果项
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    #[serde(flatten)]
    pub record: Record,
    pub display_name: String,
    pub wiki_url: String,
    pub image_url: Option<String>,
}

impl From<RowView<'_>> for SearchResultItem {
    fn from(row: RowView<'_>) -> Self {
        Self {
            record: row.record.clone(),
            display_name: row.display_name.to_string(),
            wiki_url: row.wiki_url,
            image_url: row.image_url,
        }
    }
}

/// 搜索响应
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub count: usize,
    pub items: Vec<SearchResultItem>,
}

/// GET /api/search?name=&gilds=&attributes= - 搜索镀金记录
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<ApiResponse<SearchResponse>> {
    let result = filter(&state.catalog, &query);
    let items = build_rows(&result.items, &state.images)
        .into_iter()
        .map(SearchResultItem::from)
        .collect();

    Json(ApiResponse::success(SearchResponse {
        count: result.count,
        items,
    }))
}
