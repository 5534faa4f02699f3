use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::catalog::{Catalog, MemoryCatalog};
use crate::model::PostsResponse;
use crate::state::AppState;

/// 配置文章相关路由。
///
/// 路由包括：
/// - `GET /posts`：完整的目录快照
///
/// 路径上只注册了 GET，其他方法由 axum 回退为 405 空响应体。
pub fn setup_route() -> Router<AppState> {
    Router::new().route("/posts", get(posts_list))
}

/// 获取目录中的全部文章。
///
/// 返回 `{ "posts": [...] }`，顺序与目录快照一致。
async fn posts_list(State(catalog): State<Arc<MemoryCatalog>>) -> Json<PostsResponse> {
    Json(PostsResponse {
        posts: catalog.list_posts(),
    })
}
