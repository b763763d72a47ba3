use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app_state::{App, Focus};
use crate::advice::render_card;
use crate::history::history_render::render_history;
use crate::theme;

pub const TITLE: &str = "Advice Generator";

const WIDGET_WIDTH: u16 = 72;
const CARD_HEIGHT: u16 = 7;
const CONTROLS_HEIGHT: u16 = 3;

const GENERATE_WIDTH: u16 = 24;
const COUNT_WIDTH: u16 = 11;
const TOGGLE_WIDTH: u16 = 22;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.frame_count = self.frame_count.wrapping_add(1);

        let history_height = if self.history_visible {
            // +2 for borders; an empty list still shows its placeholder line
            u16::try_from(self.revealed.len().max(1))
                .unwrap_or(u16::MAX)
                .saturating_add(2)
        } else {
            0
        };
        let content_height = column_height(history_height);
        let area = centered_rect(frame.area(), WIDGET_WIDTH, content_height);

        let layout = Layout::vertical([
            Constraint::Length(1),               // Title
            Constraint::Length(CARD_HEIGHT),     // Advice card
            Constraint::Length(CONTROLS_HEIGHT), // Buttons and count input
            Constraint::Length(1),               // Warning
            Constraint::Min(0),                  // History list
            Constraint::Length(1),               // Key hints
        ])
        .split(area);

        render_title(frame, layout[0]);
        render_card(self.advice.state(), self.frame_count, frame, layout[1]);
        self.render_controls(frame, layout[2]);

        if let Some(warning) = &self.warning {
            let paragraph = Paragraph::new(warning.as_str())
                .style(Style::default().fg(theme::warning::TEXT))
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, layout[3]);
        }

        if self.history_visible && layout[4].height > 0 {
            render_history(&self.revealed, frame, layout[4]);
        }

        render_help_line(self.focus, frame, layout[5]);
    }

    fn render_controls(&mut self, frame: &mut Frame, area: Rect) {
        let row = Layout::horizontal([
            Constraint::Length(GENERATE_WIDTH),
            Constraint::Length(1),
            Constraint::Length(COUNT_WIDTH),
            Constraint::Length(1),
            Constraint::Length(TOGGLE_WIDTH),
            Constraint::Min(0),
        ])
        .split(area);

        let controls_focused = self.focus == Focus::Controls;
        let loading = self.advice.is_loading();

        let generate_label = if loading {
            "Fetching..."
        } else {
            "[Enter] Get advice"
        };
        frame.render_widget(button(generate_label, !loading, controls_focused), row[0]);

        let input_focused = self.focus == Focus::CountInput;
        self.count_input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Count ")
                .border_style(Style::default().fg(border_color(input_focused))),
        );
        self.count_input
            .set_style(Style::default().fg(theme::controls::INPUT_TEXT));
        self.count_input.set_cursor_line_style(Style::default());
        self.count_input.set_cursor_style(if input_focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });
        frame.render_widget(&self.count_input, row[2]);

        let toggle_label = if self.history_visible {
            "[h] Hide history"
        } else {
            "[h] Show history"
        };
        frame.render_widget(button(toggle_label, true, controls_focused), row[4]);
    }
}

fn border_color(focused: bool) -> ratatui::style::Color {
    if focused {
        theme::controls::FOCUSED_BORDER
    } else {
        theme::controls::BORDER
    }
}

fn button(label: &str, enabled: bool, focused: bool) -> Paragraph<'static> {
    let text_style = if enabled {
        Style::default()
            .fg(theme::controls::BUTTON_TEXT)
            .bg(theme::controls::BUTTON)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::controls::BUTTON_DISABLED)
    };

    Paragraph::new(Line::from(Span::styled(format!(" {} ", label), text_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color(focused))),
        )
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(TITLE)
        .style(
            Style::default()
                .fg(theme::title::TEXT)
                .add_modifier(theme::title::MODIFIER),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_help_line(focus: Focus, frame: &mut Frame, area: Rect) {
    let hints: &[(&str, &str)] = match focus {
        Focus::Controls => &[
            ("Enter/g", "advice"),
            ("h", "history"),
            ("Tab", "count"),
            ("q", "quit"),
        ],
        Focus::CountInput => &[
            ("Enter", "show history"),
            ("Esc", "back"),
            ("Tab", "controls"),
            ("Ctrl+C", "quit"),
        ],
    };

    let mut spans = Vec::new();
    for (idx, (key, action)) in hints.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("  ", Style::default().fg(theme::help::TEXT)));
        }
        spans.push(Span::styled(*key, Style::default().fg(theme::help::KEY)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(theme::help::TEXT),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Rows needed for the whole widget column
fn column_height(history_height: u16) -> u16 {
    // Title, card, controls, warning, history, key hints
    [1, CARD_HEIGHT, CONTROLS_HEIGHT, 1, history_height, 1]
        .into_iter()
        .fold(0u16, u16::saturating_add)
}

/// Centre a `width` x `height` box in `area`, shrinking it to fit
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
