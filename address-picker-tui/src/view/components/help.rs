//! 帮助弹窗

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（若有）
pub fn render(app: &App, frame: &mut Frame) {
    match app.modal.active {
        Some(Modal::Help) => render_help(frame),
        None => {}
    }
}

/// 计算居中矩形
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_help(frame: &mut Frame) {
    let texts = t();
    let c = colors();
    let area = centered_rect(44, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));

    let rows = [
        ("↑↓ / jk", texts.help.move_cursor),
        ("Home/End", texts.help.jump),
        ("Enter", texts.help.select),
        ("Alt+c", texts.help.clear),
        ("r", texts.help.reload),
        ("Esc", texts.help.close),
        ("q", texts.help.quit),
    ];

    let mut lines = vec![Line::from("")];
    lines.extend(rows.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(
                format!("  {key:<10}"),
                Style::default().fg(c.warning).add_modifier(Modifier::BOLD),
            ),
            Span::styled(*desc, Style::default().fg(c.fg)),
        ])
    }));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
