use axum::{Router, http::StatusCode, routing::get};

use postview::{
    api,
    catalog::{Catalog, MemoryCatalog},
    fetch::{CatalogFetchPipeline, REVALIDATE_FAILURE_SECS, REVALIDATE_SUCCESS_SECS},
    state::AppState,
};

/// 在随机本地端口上启动给定路由，返回基地址。
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("绑定本地端口失败");
    let addr = listener.local_addr().expect("获取端口失败");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("启动测试服务失败");
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_revalidate_success_returns_catalog_with_long_window() {
    let catalog = MemoryCatalog::seeded();
    let base = spawn_upstream(api::setup_route(AppState::new(catalog.clone()))).await;

    let pipeline = CatalogFetchPipeline::with_base_address(base);
    let result = pipeline.revalidate().await;

    assert_eq!(result.revalidate_after_secs, REVALIDATE_SUCCESS_SECS);
    assert_eq!(result.posts, catalog.list_posts(), "应原样返回目录快照");
}

#[tokio::test]
async fn test_revalidate_upstream_rejected_returns_empty_with_short_window() {
    let router = Router::new().route(
        "/api/posts",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = spawn_upstream(router).await;

    let pipeline = CatalogFetchPipeline::with_base_address(base);
    let result = pipeline.revalidate().await;

    assert_eq!(result.revalidate_after_secs, REVALIDATE_FAILURE_SECS);
    assert!(result.posts.is_empty());
}

#[tokio::test]
async fn test_revalidate_malformed_payload_returns_empty_with_short_window() {
    let router = Router::new().route("/api/posts", get(|| async { "not json at all" }));
    let base = spawn_upstream(router).await;

    let pipeline = CatalogFetchPipeline::with_base_address(base);
    let result = pipeline.revalidate().await;

    assert_eq!(result.revalidate_after_secs, REVALIDATE_FAILURE_SECS);
    assert!(result.posts.is_empty());
}

#[tokio::test]
async fn test_revalidate_wrong_shape_returns_empty_with_short_window() {
    // 状态码成功但响应体不是 { "posts": [...] } 的形状
    let router = Router::new().route("/api/posts", get(|| async { r#"{"posts": 42}"# }));
    let base = spawn_upstream(router).await;

    let pipeline = CatalogFetchPipeline::with_base_address(base);
    let result = pipeline.revalidate().await;

    assert_eq!(result.revalidate_after_secs, REVALIDATE_FAILURE_SECS);
    assert!(result.posts.is_empty());
}

#[tokio::test]
async fn test_revalidate_transport_failure_returns_empty_with_short_window() {
    // 拿到一个端口后立即释放，对它的请求会被拒绝连接
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("绑定本地端口失败");
    let addr = listener.local_addr().expect("获取端口失败");
    drop(listener);

    let pipeline = CatalogFetchPipeline::with_base_address(format!("http://{addr}"));
    let result = pipeline.revalidate().await;

    assert_eq!(result.revalidate_after_secs, REVALIDATE_FAILURE_SECS);
    assert!(result.posts.is_empty());
}
