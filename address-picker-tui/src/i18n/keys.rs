//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//! 文本归属于它出现的 UI 组件。

/// 所有翻译文本的根结构
pub struct Translations {
    pub common: CommonTexts,
    pub hints: HintTexts,
    /// 地址列表页面文本
    pub addresses: AddressesTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    pub help: HelpTexts,
}

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
    pub quit: &'static str,
    pub back: &'static str,
}

/// 键盘提示
pub struct HintTexts {
    pub move_up_down: &'static str,
    pub select: &'static str,
    pub clear: &'static str,
    pub help: &'static str,
}

/// 地址列表页面文本
pub struct AddressesTexts {
    pub title: &'static str,
    pub empty: &'static str,
    pub empty_hint: &'static str,
    pub default_badge: &'static str,
    pub selected_badge: &'static str,
    pub zip_code: &'static str,
}

/// 状态栏消息
pub struct StatusTexts {
    pub selected: &'static str,
    pub cleared: &'static str,
    pub select_failed: &'static str,
    pub drifted: &'static str,
    pub reloaded: &'static str,
    pub reload_ignored: &'static str,
    pub reload_failed: &'static str,
}

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub move_cursor: &'static str,
    pub jump: &'static str,
    pub select: &'static str,
    pub clear: &'static str,
    pub reload: &'static str,
    pub close: &'static str,
    pub quit: &'static str,
}
