use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::config::{LogRecord, Severity};
use crate::ui::layout::LogsRegions;
use crate::ui::theme::{
    label_style, ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
    STATUS_ERROR, STATUS_OK, STATUS_WARN,
};

use super::state::{FilterField, LogFilter, LogsState};

pub fn render_logs(frame: &mut Frame, state: &LogsState, regions: &LogsRegions) {
    frame.render_widget(filter_panel(state), regions.filters);
    frame.render_widget(log_table(state), regions.table);
}

fn filter_panel(state: &LogsState) -> Paragraph<'static> {
    let mut inputs = Vec::new();
    for field in FilterField::ALL {
        let focused = state.focused == field;
        let marker = if focused { "› " } else { "  " };
        let cursor = if focused { "▏" } else { "" };
        let value_style = if focused {
            Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        inputs.push(Span::styled(marker, Style::default().fg(ACCENT)));
        inputs.push(Span::styled(format!("{}: ", field.label()), label_style()));
        inputs.push(Span::styled(
            format!("{}{}", state.filter.text(field), cursor),
            value_style,
        ));
        inputs.push(Span::raw("  "));
    }

    Paragraph::new(vec![Line::from(inputs), toggle_line(&state.filter)]).block(
        Block::default()
            .title(" Filters ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn toggle_line(filter: &LogFilter) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (index, severity) in Severity::ALL.into_iter().enumerate() {
        spans.push(Span::styled(format!("F{} ", index + 1), label_style()));
        spans.push(checkbox(filter.severities.contains(&severity)));
        spans.push(Span::styled(
            format!(" {}  ", severity.label()),
            Style::default().fg(severity_color(severity)),
        ));
    }
    spans.push(Span::styled("F5 ", label_style()));
    spans.push(checkbox(filter.commands_only));
    spans.push(Span::styled(" Commands only", Style::default().fg(HEADER_TEXT)));
    Line::from(spans)
}

fn checkbox(checked: bool) -> Span<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    Span::styled(mark, Style::default().fg(ACCENT))
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Debug => HEADER_SEPARATOR,
        Severity::Info => STATUS_OK,
        Severity::Warn => STATUS_WARN,
        Severity::Error => STATUS_ERROR,
    }
}

fn log_table(state: &LogsState) -> Table<'static> {
    let header = Row::new(vec!["Timestamp", "Severity", "Trace", "Message"])
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    let visible = state.visible();
    let title = format!(" Logs ({} of {}) ", visible.len(), state.entries.len());
    let rows: Vec<Row> = if visible.is_empty() {
        vec![Row::new(vec![
            Cell::from(""),
            Cell::from(""),
            Cell::from(""),
            Cell::from("No log entries match the filter"),
        ])
        .style(Style::default().fg(HEADER_SEPARATOR))]
    } else {
        visible.into_iter().skip(state.scroll).map(log_row).collect()
    };

    Table::new(
        rows,
        [
            Constraint::Length(19),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn log_row(entry: &LogRecord) -> Row<'static> {
    let message = match &entry.command {
        Some(command) => format!("{} · {}", entry.message, command),
        None => entry.message.clone(),
    };
    Row::new(vec![
        Cell::from(entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()),
        Cell::from(Span::styled(
            entry.severity.label(),
            Style::default().fg(severity_color(entry.severity)),
        )),
        Cell::from(entry.trace_id.clone()),
        Cell::from(message),
    ])
    .style(Style::default().fg(HEADER_TEXT))
}
