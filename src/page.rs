use crate::fetch::CachePolicyResult;
use crate::model::{Post, PostCollection};
use crate::selection::Selection;

/// 一次页面视图的状态：列表数据加详情选中状态机。
///
/// 由管线产出的 [`CachePolicyResult`] 物化而来，选中状态初始为关闭；
/// 列表与详情视图从这里读取数据，选中事件经由这里驱动状态机。
/// 页面卸载时整体丢弃。
#[derive(Debug)]
pub struct PostsPage {
    posts: PostCollection,
    selection: Selection,
}

impl PostsPage {
    /// 从一次再生成的产出构造页面状态
    pub fn new(result: CachePolicyResult) -> Self {
        Self {
            posts: result.posts,
            selection: Selection::default(),
        }
    }

    /// 列表视图的数据，顺序即展示顺序
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// 详情视图的选中状态
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// 列表项点击事件：选中并打开详情
    pub fn select(&mut self, post: Post) {
        self.selection.select(post);
    }

    /// 详情关闭事件
    pub fn close(&mut self) {
        self.selection.close();
    }
}
