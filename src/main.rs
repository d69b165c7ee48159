use axum::{
    routing::get,
    Router,
    response::{Response, IntoResponse},
    http::{header, StatusCode, Uri},
    body::Body,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use rust_embed::RustEmbed;

/// Embedded static assets (compile-time embed from assets/) / 嵌入静态资源
#[derive(RustEmbed)]
#[folder = "assets"]
struct StaticAssets;

mod api;
mod state;

use gilding_backend::catalog::CatalogLoader;
use gilding_backend::config;
use gilding_backend::render::IMAGE_ROUTE;
use state::AppState;

/// Handle embedded static file requests / 处理嵌入的静态文件请求
async fn serve_embedded_file(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if let Some(content) = StaticAssets::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return (
            [(header::CONTENT_TYPE, mime.as_ref().to_string())],
            Body::from(content.data.into_owned()),
        )
            .into_response();
    }

    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// Build the application router / 构建路由
fn app(state: Arc<AppState>) -> Router {
    let images = ServeDir::new(state.images.dir());

    Router::new()
        .route("/", get(api::page::search_page))
        .route("/api/health", get(api::server::health_check))
        .route("/api/version", get(api::server::get_version_info))
        .route("/api/search", get(api::search::search))
        .nest_service(IMAGE_ROUTE, images)
        // Embedded stylesheet
        .fallback(serve_embedded_file)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gilding_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration / 加载配置
    let app_config = config::load_config().map_err(anyhow::Error::msg)?;
    tracing::info!("Server will listen on {}:{}", app_config.server.host, app_config.server.port);

    // Load dataset, fatal on failure / 加载数据集（失败则退出）
    let loader = CatalogLoader::new(app_config.get_data_file());
    let catalog = loader.load().map_err(|e| {
        tracing::error!("Failed to load dataset {:?}: {}", loader.path(), e);
        e
    })?;

    let image_dir = app_config.get_image_dir();
    if !image_dir.is_dir() {
        tracing::warn!("Image directory {:?} not found, items will render without images", image_dir);
    }

    let bind_addr = app_config.get_bind_address();
    let state = Arc::new(AppState::new(&app_config, catalog));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await?;

    tracing::info!("Server running at http://{}", bind_addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use gilding_backend::catalog::parse_catalog;
    use gilding_backend::config::{AppConfig, CatalogConfig};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app(image_dir: &std::path::Path) -> Router {
        let records = parse_catalog(
            r#"[
                {"name": "Iron Sword", "category": "Weapon", "image": "sword.png", "gild_chance": "10%", "gilds": ["+5 Damage"], "success_attributes": ["Sharp"]},
                {"name": "Iron Shield", "category": "Armor", "image": "shield.png", "gilds": ["+5 Block"], "success_attributes": ["Sturdy"]}
            ]"#,
        )
        .unwrap();
        let config = AppConfig {
            catalog: CatalogConfig {
                data_file: "unused.json".to_string(),
                image_dir: image_dir.to_string_lossy().into_owned(),
            },
            ..AppConfig::default()
        };
        app(Arc::new(AppState::new(&config, Arc::new(records))))
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn test_page_filters_by_query_string() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sword.png"), b"png").unwrap();

        let (status, body) = get_body(test_app(dir.path()), "/?name=iron&gilds=damage").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Found 1 items"));
        assert!(body.contains("https://ringofbrodgar.com/wiki/Iron_Sword"));
        assert!(body.contains("<img src=\"/images/sword.png\""));
        assert!(!body.contains("Iron Shield"));
    }

    #[tokio::test]
    async fn test_page_without_query_lists_everything() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get_body(test_app(dir.path()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Found 2 items"));
        assert!(!body.contains("<img"));
    }

    #[tokio::test]
    async fn test_images_and_assets_are_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sword.png"), b"png").unwrap();

        let (status, body) = get_body(test_app(dir.path()), "/images/sword.png").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "png");

        let (status, _) = get_body(test_app(dir.path()), "/images/shield.png").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = get_body(test_app(dir.path()), "/style.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(".block-container"));
    }

    #[tokio::test]
    async fn test_search_api() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get_body(test_app(dir.path()), "/api/search?attributes=sturdy").await;
        assert_eq!(status, StatusCode::OK);

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["data"]["count"], 1);
        assert_eq!(value["data"]["items"][0]["name"], "Iron Shield");
        assert!(value["data"]["items"][0]["image_url"].is_null());
    }
}
