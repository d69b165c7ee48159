use gilding_backend::catalog::Catalog;
use gilding_backend::config::AppConfig;
use gilding_backend::render::ImageStore;

/// Shared application state, read-only after startup / 应用共享状态（启动后只读）
pub struct AppState {
    pub catalog: Catalog,
    pub images: ImageStore,
}

impl AppState {
    pub fn new(config: &AppConfig, catalog: Catalog) -> Self {
        Self {
            catalog,
            images: ImageStore::new(config.get_image_dir()),
        }
    }
}
