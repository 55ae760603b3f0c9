//! 地址列表页面视图

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::components::address_card::{AddressCard, CARD_HEIGHT};
use crate::view::theme::colors;

/// 渲染地址列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.address_list.is_empty() {
        render_empty(frame, area);
    } else {
        render_cards(app, frame, area);
    }
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {}", texts.addresses.empty), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(
            format!("  {}", texts.addresses.empty_hint),
            Style::default().fg(c.muted),
        ),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// 纵向排列卡片，保证光标所在卡片可见
fn render_cards(app: &App, frame: &mut Frame, area: Rect) {
    let cards = app.address_list.cards();
    let visible = usize::from(area.height / CARD_HEIGHT).max(1);
    let first = app.cursor.first_visible(visible);

    for (row, props) in cards.iter().skip(first).take(visible).enumerate() {
        // row < visible <= area.height / CARD_HEIGHT，不会溢出
        let offset = u16::try_from(row).unwrap_or(u16::MAX).saturating_mul(CARD_HEIGHT);
        let card_area = Rect {
            x: area.x,
            y: area.y.saturating_add(offset),
            width: area.width,
            height: CARD_HEIGHT.min(area.height.saturating_sub(offset)),
        };
        if card_area.height == 0 {
            break;
        }

        let focused = props.index == app.cursor.position;
        frame.render_widget(AddressCard::new(props).focused(focused), card_area);
    }
}
