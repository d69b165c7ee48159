use axum::Json;
use serde_json::{json, Value};

/// GET /api/health - 健康检查
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Gilding database is running"
    }))
}

/// GET /api/version - 获取版本信息
pub async fn get_version_info() -> Json<Value> {
    Json(json!({
        "code": 200,
        "data": {
            "backend_version": env!("CARGO_PKG_VERSION"),
            "build_time": env!("BUILD_TIME"),
        }
    }))
}
