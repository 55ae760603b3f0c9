//! 地址卡片组件
//!
//! 纯展示组件：只根据 `AddressCardProps` 绘制，不读取任何应用状态。

use address_picker_core::AddressCardProps;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::i18n::t;
use crate::util::truncate_to_width;
use crate::view::theme::colors;

/// 每张卡片占用的行数（上下边框 + 两行内容）
pub const CARD_HEIGHT: u16 = 4;

/// 单个地址卡片
pub struct AddressCard<'a> {
    props: &'a AddressCardProps,
    focused: bool,
}

impl<'a> AddressCard<'a> {
    pub fn new(props: &'a AddressCardProps) -> Self {
        Self {
            props,
            focused: false,
        }
    }

    /// 键盘光标停在此卡片上
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for AddressCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let texts = t();
        let c = colors();
        let props = self.props;

        let border_style = if props.is_selected {
            Style::default().fg(c.success)
        } else if self.focused {
            Style::default().fg(c.border_focused)
        } else {
            Style::default().fg(c.border)
        };

        let marker = if props.is_selected { "◉" } else { "○" };
        let mut title = vec![
            Span::raw(" "),
            Span::styled(marker, border_style),
            Span::raw(" "),
            Span::styled(
                props.name.as_str(),
                Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ];
        if props.is_default {
            title.push(Span::styled(
                format!("[{}] ", texts.addresses.default_badge),
                Style::default().fg(c.warning),
            ));
        }

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Line::from(title));
        if props.is_selected {
            block = block.title(
                Line::from(Span::styled(
                    format!(" {} ", texts.addresses.selected_badge),
                    Style::default().fg(c.success).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Right),
            );
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let width = usize::from(inner.width);
        let body_style = if self.focused {
            Style::default().bg(c.selected_bg).fg(c.selected_fg)
        } else {
            Style::default().fg(c.fg)
        };

        let detail = if props.detail_addr.is_empty() {
            format!("{} {}", texts.addresses.zip_code, props.zip_code)
        } else {
            format!(
                "{} · {} {}",
                props.detail_addr, texts.addresses.zip_code, props.zip_code
            )
        };

        let lines = vec![
            Line::styled(truncate_to_width(&props.default_addr, width), body_style),
            Line::styled(
                truncate_to_width(&detail, width),
                body_style.fg(if self.focused { c.selected_fg } else { c.muted }),
            ),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use address_picker_core::{
        Address, AddressList, AddressListOptions, InMemorySelectionStore,
    };

    use super::*;

    fn render_to_string(props: &AddressCardProps, focused: bool) -> String {
        let area = Rect::new(0, 0, 48, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        AddressCard::new(props).focused(focused).render(area, &mut buf);

        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn cards() -> Vec<AddressCardProps> {
        let list = AddressList::new(
            vec![
                Address::new(1, "Home")
                    .with_default(true)
                    .with_lines("12 Teheran-ro", "Apt 301")
                    .with_zip_code("06234"),
                Address::new(2, "Work").with_lines("235 Pangyoyeok-ro", "").with_zip_code("13494"),
            ],
            Arc::new(InMemorySelectionStore::new()),
            AddressListOptions::default(),
        );
        list.select(1).unwrap();
        list.cards()
    }

    #[test]
    fn renders_all_address_fields() {
        let cards = cards();
        let out = render_to_string(&cards[0], false);
        assert!(out.contains("Home"));
        assert!(out.contains("Default"));
        assert!(out.contains("12 Teheran-ro"));
        assert!(out.contains("Apt 301"));
        assert!(out.contains("06234"));
        assert!(!out.contains("Selected"));
    }

    #[test]
    fn selected_card_shows_badge() {
        let cards = cards();
        let out = render_to_string(&cards[1], true);
        assert!(out.contains("Work"));
        assert!(out.contains("Selected"));
        assert!(out.contains("◉"));
        assert!(out.contains("13494"));
    }
}
