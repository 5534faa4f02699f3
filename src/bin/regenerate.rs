//! 手动触发一次再生成抓取，把结果打印到标准输出。
//!
//! 基地址按 `APP_ENV` 解析，与托管环境的再生成调度行为一致。

use postview::fetch::{CatalogFetchPipeline, Environment};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_env("POSTVIEW_LOG"))
        .init();

    let pipeline = CatalogFetchPipeline::new(Environment::from_env());
    let result = pipeline.revalidate().await;

    println!(
        "fetched {} posts, revalidate after {}s",
        result.posts.len(),
        result.revalidate_after_secs
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&result).expect("Failed to serialize result")
    );
}
