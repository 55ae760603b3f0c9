//! 弹窗状态

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 帮助（快捷键列表）
    Help,
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// None = 无弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn close(&mut self) {
        self.active = None;
    }
}
