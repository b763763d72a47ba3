//! Advice card rendering
//!
//! Shows exactly one of: the loading placeholder, the last error, the idle
//! prompt, or the current advice.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::advice_state::FetchState;
use crate::theme;

pub const IDLE_PROMPT: &str = "Press Enter to get a piece of advice";
pub const LOADING_TEXT: &str = "Fetching advice...";

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for the given frame; advances every 4 frames
pub fn spinner_frame(frame_count: u64) -> &'static str {
    SPINNER_FRAMES[((frame_count / 4) % SPINNER_FRAMES.len() as u64) as usize]
}

/// Build the card body for the current fetch state
pub fn card_lines(state: &FetchState, frame_count: u64) -> Vec<Line<'static>> {
    if state.is_loading {
        return vec![Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame(frame_count)),
                Style::default().fg(theme::card::SPINNER),
            ),
            Span::styled(LOADING_TEXT, Style::default().fg(theme::card::PLACEHOLDER)),
        ])];
    }

    if let Some(error) = &state.last_error {
        return vec![Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme::card::ERROR),
        ))];
    }

    match &state.current_advice {
        Some(advice) => vec![Line::from(Span::styled(
            format!("“{}”", advice),
            Style::default().fg(theme::card::ADVICE),
        ))],
        None => vec![Line::from(Span::styled(
            IDLE_PROMPT,
            Style::default().fg(theme::card::PLACEHOLDER),
        ))],
    }
}

pub fn render_card(state: &FetchState, frame_count: u64, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Advice ")
        .border_style(Style::default().fg(theme::card::BORDER));

    // Vertically centre short bodies inside the card
    let inner_height = area.height.saturating_sub(2);
    let mut lines = Vec::new();
    if inner_height > 1 {
        for _ in 0..(inner_height - 1) / 2 {
            lines.push(Line::from(""));
        }
    }
    lines.extend(card_lines(state, frame_count));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "advice_render_tests.rs"]
mod advice_render_tests;
