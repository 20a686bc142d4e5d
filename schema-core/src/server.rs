//! 带跨域响应头的本地静态文件服务

use crate::constants::server::{ALLOWED_HEADERS, ALLOWED_METHODS};
use crate::error::{Result, SchemaError};
use axum::Router;
use axum::extract::Request;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use std::future::Future;
use std::net::SocketAddr;
use std::path::Path;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// 构建服务某个目录的路由
///
/// 每个响应都带上跨域头；OPTIONS 请求直接返回 200，不访问文件系统。
pub fn static_router(root: impl AsRef<Path>) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root.as_ref()))
        .layer(middleware::from_fn(cors_headers))
        .layer(TraceLayer::new_for_http())
}

async fn cors_headers(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        debug!("OPTIONS {} -> 200", request.uri());
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    response
}

/// 在所有网卡的指定端口上服务目录，直到 `shutdown` 完成
pub async fn serve_directory<F>(port: u16, root: impl AsRef<Path>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(SchemaError::server(format!(
            "服务目录不存在: {}",
            root.display()
        )));
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| SchemaError::server(format!("无法绑定端口 {port}: {e}")))?;

    info!("🌐 静态文件服务已启动: http://localhost:{}/", port);
    info!("📁 服务目录: {}", root.display());
    info!("按 Ctrl+C 停止服务");

    axum::serve(listener, static_router(root))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("🛑 服务器已停止");
    Ok(())
}
