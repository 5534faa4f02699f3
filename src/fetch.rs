use std::env;

use reqwest::StatusCode;
use serde::Serialize;

use crate::model::{PostCollection, PostsResponse};

/// 抓取成功后的再生成窗口（秒）。
pub const REVALIDATE_SUCCESS_SECS: u64 = 3600;
/// 抓取失败后的再生成窗口（秒）。
///
/// 短窗口是唯一的容错机制：单次调用内不重试，
/// 下个再生成周期重新跑整条管线。
pub const REVALIDATE_FAILURE_SECS: u64 = 60;

/// 部署环境，决定抓取时使用哪个服务地址。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    /// 从进程级环境变量 `APP_ENV` 读取部署环境
    ///
    /// 只有 `production` 映射到生产环境，其余取值（包括未设置）一律视为开发环境。
    pub fn from_env() -> Self {
        Self::from_flag(env::var("APP_ENV").ok().as_deref())
    }

    fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }

    /// 当前环境对应的服务基地址
    pub fn base_address(self) -> &'static str {
        match self {
            Self::Production => "https://your-domain.com",
            Self::Development => "http://localhost:3000",
        }
    }
}

/// 单次抓取的失败分类。
///
/// 三种失败在管线边界被折叠成同一个结果：空目录加短窗口。
/// 任何一种都不会越过 [`CatalogFetchPipeline::revalidate`] 向上传播。
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream rejected the query: {0}")]
    UpstreamRejected(StatusCode),

    #[error("malformed payload: {0}")]
    MalformedPayload(#[source] reqwest::Error),
}

/// 一次再生成周期的产出：页面数据加下次再生成的间隔。
///
/// 产出后立即被页面消费，不跨周期保留。
#[derive(Debug, Serialize)]
pub struct CachePolicyResult {
    pub posts: PostCollection,
    pub revalidate_after_secs: u64,
}

/// 再生成时的目录抓取管线。
///
/// 每个再生成触发点调用一次 [`revalidate`](Self::revalidate)：
/// 向目录端点发起一次查询，把结果分类成缓存策略。
/// 基地址在构造时注入，调用期间不再读取进程环境。
pub struct CatalogFetchPipeline {
    client: reqwest::Client,
    base_address: String,
}

impl CatalogFetchPipeline {
    /// 按部署环境构造管线
    pub fn new(environment: Environment) -> Self {
        Self::with_base_address(environment.base_address())
    }

    /// 使用指定基地址构造管线
    ///
    /// ```ignore
    /// let pipeline = CatalogFetchPipeline::with_base_address("http://localhost:3000");
    /// // 按环境变量选择地址
    /// let pipeline = CatalogFetchPipeline::new(Environment::from_env());
    /// ```
    pub fn with_base_address(base_address: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build reqwest client");

        Self {
            client,
            base_address: base_address.into(),
        }
    }

    /// 执行一次再生成抓取，永不失败。
    ///
    /// 成功返回解析出的目录和 3600 秒窗口；
    /// 任何失败（传输、非成功状态、响应体解析）记录日志后
    /// 返回空目录和 60 秒窗口。
    pub async fn revalidate(&self) -> CachePolicyResult {
        classify(self.fetch_posts().await)
    }

    /// 向目录端点发起单次查询
    ///
    /// 返回显式的 [`FetchError`]，分类留给 [`classify`]。
    async fn fetch_posts(&self) -> Result<PostCollection, FetchError> {
        let resp = self
            .client
            .get(format!("{}/api/posts", self.base_address))
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamRejected(status));
        }

        let body: PostsResponse = resp.json().await.map_err(FetchError::MalformedPayload)?;
        Ok(body.posts)
    }
}

/// 把抓取结果分类成缓存策略。
///
/// 失败路径在此记录错误及其原因，调用方只会看到（可能为空的）目录。
fn classify(outcome: Result<PostCollection, FetchError>) -> CachePolicyResult {
    match outcome {
        Ok(posts) => CachePolicyResult {
            posts,
            revalidate_after_secs: REVALIDATE_SUCCESS_SECS,
        },
        Err(e) => {
            tracing::error!(error = %e, "catalog fetch failed");
            CachePolicyResult {
                posts: Vec::new(),
                revalidate_after_secs: REVALIDATE_FAILURE_SECS,
            }
        }
    }
}
