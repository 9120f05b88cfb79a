use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app_state::App;
use crate::classify::ResultKind;
use crate::controller::ViewSnapshot;
use crate::suggest::{Suggestion, match_ranges, suggestion_icon, suggestion_label};
use crate::widgets::popup;

const KEY_HINTS: &str =
    "Enter search  ↑/↓ select  Esc hide/quit  Ctrl+L clear  Ctrl+D forget  F2 voice  F3 image  F4 lucky";
const HISTORY_GLYPH: &str = "↺";
const RECENT_MIN_WIDTH: u16 = 30;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let snapshot = self.snapshot();
        let bounds = frame.area();

        let layout = Layout::vertical([
            Constraint::Length(3), // Search input
            Constraint::Min(3),    // Result panel
            Constraint::Length(1), // Status line
        ])
        .split(bounds);

        let input_area = layout[0];
        let results_area = layout[1];
        let status_area = layout[2];

        self.render_input(frame, input_area, &snapshot);
        render_results(frame, results_area, &snapshot);
        self.render_status(frame, status_area, &snapshot);

        // Popups draw last so they sit on top of the result panel
        if !snapshot.suggestions.is_empty() {
            render_suggestions(frame, input_area, bounds, &snapshot);
        } else if snapshot.show_recent && !snapshot.history.is_empty() {
            render_recent(frame, input_area, bounds, &snapshot, self.history_cursor);
        }
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect, snapshot: &ViewSnapshot) {
        let border_color = if snapshot.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(border_color));
        if snapshot.loading {
            block = block.title(Line::from(" … ").right_aligned());
        }

        self.input.textarea.set_block(block);
        frame.render_widget(&self.input.textarea, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, snapshot: &ViewSnapshot) {
        let message = self.notice.as_deref().or(snapshot.notification.as_deref());
        let line = match message {
            Some(text) => Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(Span::styled(
                KEY_HINTS,
                Style::default().fg(Color::DarkGray),
            )),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_results(frame: &mut Frame, area: Rect, snapshot: &ViewSnapshot) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Result ")
        .border_style(Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = match &snapshot.outcome {
        Some(outcome) => {
            let accent = kind_color(outcome.kind);
            let mut lines = vec![
                Line::from(Span::styled(
                    outcome.title(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];
            lines.extend(outcome.summary_lines().into_iter().map(Line::from));
            lines
        }
        None => vec![Line::from(Span::styled(
            "Type to search. Suggestions appear as you type.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let content = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(content, area);
}

fn render_suggestions(frame: &mut Frame, anchor: Rect, bounds: Rect, snapshot: &ViewSnapshot) {
    let height = snapshot.suggestions.len() as u16 + 2;
    let area = popup::popup_below_anchor(anchor, bounds, height, 0);
    if area.height < 3 {
        return;
    }

    let text_width = area.width.saturating_sub(4) as usize;
    let lines: Vec<Line> = snapshot
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            suggestion_line(
                suggestion,
                &snapshot.matched_query,
                snapshot.selected_index == Some(i),
                text_width,
            )
        })
        .collect();

    popup::clear_area(frame, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// One suggestion row: icon, text with the query highlighted, label
fn suggestion_line(
    suggestion: &Suggestion,
    query: &str,
    selected: bool,
    width: usize,
) -> Line<'static> {
    let base = if selected {
        Style::default().bg(Color::Cyan).fg(Color::Black)
    } else {
        Style::default()
    };
    let highlight = base.add_modifier(Modifier::BOLD);

    let text = suggestion.text();
    let label = suggestion_label(text);
    let label_width = label.map_or(0, |l| l.len() + 1);
    let shown = popup::truncate_to_width(text, width.saturating_sub(2 + label_width));

    let mut spans = vec![Span::styled(
        format!("{} ", suggestion_icon(text).glyph()),
        base.fg(if selected { Color::Black } else { Color::DarkGray }),
    )];

    let mut cursor = 0;
    for range in match_ranges(&shown, query) {
        if range.start > cursor {
            spans.push(Span::styled(shown[cursor..range.start].to_string(), base));
        }
        spans.push(Span::styled(shown[range.clone()].to_string(), highlight));
        cursor = range.end;
    }
    if cursor < shown.len() {
        spans.push(Span::styled(shown[cursor..].to_string(), base));
    }

    if let Some(label) = label {
        spans.push(Span::styled(
            format!(" {}", label),
            base.fg(if selected { Color::Black } else { Color::Blue }),
        ));
    }

    Line::from(spans)
}

fn render_recent(
    frame: &mut Frame,
    anchor: Rect,
    bounds: Rect,
    snapshot: &ViewSnapshot,
    cursor: Option<usize>,
) {
    let height = snapshot.history.len() as u16 + 2;
    let mut area = popup::popup_below_anchor(anchor, bounds, height, 0);
    if area.height < 3 {
        return;
    }
    // Glyph, space and borders around the longest entry
    area.width = popup::content_width(
        snapshot.history.iter().map(|(_, text)| text.as_str()),
        4,
        RECENT_MIN_WIDTH,
        area.width,
    );

    let text_width = area.width.saturating_sub(4) as usize;
    let lines: Vec<Line> = snapshot
        .history
        .iter()
        .enumerate()
        .map(|(row, (_, text))| {
            let style = if cursor == Some(row) {
                Style::default().bg(Color::Cyan).fg(Color::Black)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!("{} ", HISTORY_GLYPH), style.fg(Color::DarkGray)),
                Span::styled(popup::truncate_to_width(text, text_width), style),
            ])
        })
        .collect();

    popup::clear_area(frame, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Recent searches ")
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn kind_color(kind: ResultKind) -> Color {
    match kind {
        ResultKind::Weather => Color::Yellow,
        ResultKind::Calculator => Color::Green,
        ResultKind::Time => Color::Magenta,
        ResultKind::Translate => Color::Blue,
        ResultKind::General => Color::Cyan,
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
