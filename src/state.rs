use std::sync::Arc;

use axum::extract::FromRef;

use crate::catalog::MemoryCatalog;

/// 应用程序上下文
///
/// [`AppState`] 封装了文章目录，提供统一访问入口。
#[derive(Clone, FromRef)]
pub struct AppState {
    catalog: Arc<MemoryCatalog>,
}

impl AppState {
    /// 创建一个新的 [`AppState`] 实例
    pub fn new(catalog: MemoryCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// 获取目录对象
    pub fn catalog(&self) -> &MemoryCatalog {
        &self.catalog
    }
}
