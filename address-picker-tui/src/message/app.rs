//! 应用主消息枚举

use address_picker_core::Selection;

use super::ContentMessage;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 地址列表相关消息
    Content(ContentMessage),

    /// 共享选择状态已变化（来自 SelectionStore 订阅）
    SelectionChanged(Selection),

    /// 显示帮助
    ShowHelp,

    /// 关闭弹窗 / 清除状态消息
    GoBack,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
