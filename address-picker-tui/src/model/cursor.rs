//! 列表光标状态

/// 键盘光标，始终落在 `[0, len)` 内（列表为空时为 0）
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    /// 当前光标位置
    pub position: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.position > 0 {
            self.position -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.position < len - 1 {
            self.position += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.position = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self, len: usize) {
        self.position = len.saturating_sub(1);
    }

    /// 跳到指定位置（超出范围时夹到末尾）
    pub fn jump_to(&mut self, position: usize, len: usize) {
        self.position = position.min(len.saturating_sub(1));
    }

    /// 可见 `visible` 张卡片时，第一张可见卡片的位置
    pub fn first_visible(self, visible: usize) -> usize {
        if visible == 0 {
            return self.position;
        }
        (self.position + 1).saturating_sub(visible)
    }
}
