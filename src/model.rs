use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// 一篇博客文章，包含标识、标题、正文、作者、时间戳和摘要。
///
/// 六个字段全部序列化到线上格式，字段名使用 camelCase（`createdAt`）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub excerpt: String,
}

impl Post {
    /// 解析 `created_at` 为具体时间
    ///
    /// 字段按 RFC 3339 存储，解析失败说明数据源给出了非法时间戳。
    pub fn created_date(&self) -> chrono::ParseResult<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.created_at)
    }
}

/// 目录快照，插入顺序即展示顺序，不按日期或 id 隐式排序。
pub type PostCollection = Vec<Post>;

/// 查询端点的响应体，同时也是抓取管线的解析目标。
#[derive(Debug, Serialize, Deserialize)]
pub struct PostsResponse {
    pub posts: PostCollection,
}
