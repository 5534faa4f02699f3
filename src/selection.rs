use crate::model::Post;

/// 详情视图的选中状态机。
///
/// 两个状态：未选中（列表视图）和选中某篇文章（详情打开）。
/// "详情打开则必有选中文章" 由和类型结构保证，无法表示非法组合。
/// 状态机随页面视图存在，转换只改本地状态，不触发任何 I/O。
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    Closed,
    Open(Post),
}

impl Selection {
    /// 选中一篇文章，打开详情。
    ///
    /// 已打开时直接切换到新文章，不经过关闭状态。
    pub fn select(&mut self, post: Post) {
        *self = Selection::Open(post);
    }

    /// 关闭详情，清除选中。幂等：已关闭时为空操作。
    pub fn close(&mut self) {
        *self = Selection::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    /// 当前选中的文章，未选中时返回 `None`。
    pub fn selected_post(&self) -> Option<&Post> {
        match self {
            Selection::Open(post) => Some(post),
            Selection::Closed => None,
        }
    }
}
