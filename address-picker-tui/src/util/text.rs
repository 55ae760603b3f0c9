//! 文本宽度工具

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 按显示宽度截断，超出时以 `…` 结尾
///
/// 韩文等全角字符占两列，不能按字节或字符数截断。
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
