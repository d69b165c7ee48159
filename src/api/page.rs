use axum::{
    extract::{Query, State},
    response::Html,
};
use std::sync::Arc;

use crate::state::AppState;
use gilding_backend::render::{build_rows, render_page};
use gilding_backend::search::{filter, SearchQuery};

/// GET / - 搜索页面
pub async fn search_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Html<String> {
    let result = filter(&state.catalog, &query);
    let rows = build_rows(&result.items, &state.images);
    Html(render_page(&query, &rows))
}
