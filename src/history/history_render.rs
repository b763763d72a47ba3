use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::AdviceEntry;
use crate::theme;

pub const EMPTY_LIST_TEXT: &str = "No history to show";

/// Shorten `text` to at most `max_width` terminal columns, ending in `…`
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        // Leave one column for the ellipsis
        if width + ch_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
        width += ch_width;
    }
    truncated.push('…');
    truncated
}

/// Render the revealed history list
pub fn render_history(entries: &[AdviceEntry], frame: &mut Frame, area: Rect) {
    // 2 for borders, 2 for the leading marker and quotes
    let max_text_len = (area.width as usize).saturating_sub(6);

    let items: Vec<ListItem> = if entries.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            format!(" {}", EMPTY_LIST_TEXT),
            Style::default().fg(theme::history::EMPTY),
        )))]
    } else {
        entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let text = truncate_to_width(entry.as_str(), max_text_len);
                let style = if idx % 2 == 1 {
                    Style::default()
                        .fg(theme::history::ITEM)
                        .bg(theme::history::ITEM_ALT_BG)
                } else {
                    Style::default().fg(theme::history::ITEM)
                };
                ListItem::new(Line::from(Span::styled(format!(" “{}”", text), style)))
            })
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" History ({}) ", entries.len()))
        .border_style(Style::default().fg(theme::history::BORDER));

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
#[path = "history_render_tests.rs"]
mod history_render_tests;
