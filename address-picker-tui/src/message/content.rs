//! 地址列表消息

/// 地址列表消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 光标移动 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== 选择 ==========
    /// 将光标所在地址设为选中地址
    Confirm,
    /// 清除选中地址
    ClearSelection,

    // ========== 列表 ==========
    /// 从地址来源重新加载列表
    Reload,
}
