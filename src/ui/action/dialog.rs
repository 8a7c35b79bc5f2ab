//! Rendering for the certificate action overlay.

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::config::CertificateRecord;
use crate::ui::layout::{ActionRegions, CLOSE_LABEL, RUN_LABEL};
use crate::ui::status_log::status_lines;
use crate::ui::theme::{
    button_style, label_style, ACCENT, HEADER_TEXT, OVERLAY_DIM, POPUP_BORDER, STATUS_ERROR,
    STATUS_OK,
};

use super::state::ActionDialogState;

const LABEL_WIDTH: usize = 10;

/// Render the dialog and its overlay. Does nothing while hidden.
pub fn render_action_dialog(frame: &mut Frame, state: &ActionDialogState, regions: &ActionRegions) {
    let Some(view) = state.view() else {
        return;
    };

    frame.render_widget(
        Block::default().style(Style::default().bg(OVERLAY_DIM)),
        regions.overlay,
    );
    frame.render_widget(Clear, regions.content);
    frame.render_widget(
        Block::default()
            .title(view.action.title())
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER)),
        regions.content,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(CLOSE_LABEL, Style::default().fg(ACCENT))),
        regions.close_button,
    );

    frame.render_widget(Paragraph::new(detail_lines(&view.certificate)), regions.details);

    if !view.action.runs_command() {
        return;
    }

    frame.render_widget(
        Paragraph::new(format!(" $ {}", view.preview))
            .style(Style::default().fg(HEADER_TEXT))
            .wrap(Wrap { trim: false }),
        regions.preview,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(RUN_LABEL, button_style())),
        regions.run_button,
    );
    frame.render_widget(
        Paragraph::new(status_lines(&view.status_log, regions.status_log.height)),
        regions.status_log,
    );
}

fn detail_lines(certificate: &CertificateRecord) -> Vec<Line<'static>> {
    let status_color = if certificate.status == "active" {
        STATUS_OK
    } else {
        STATUS_ERROR
    };
    vec![
        detail("ID", certificate.id.clone(), HEADER_TEXT),
        detail("Name", certificate.name.clone(), HEADER_TEXT),
        detail("Status", certificate.status.clone(), status_color),
        detail(
            "Expires",
            certificate.expiration_date.format("%Y-%m-%d").to_string(),
            HEADER_TEXT,
        ),
    ]
}

fn detail(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<width$}", label, width = LABEL_WIDTH), label_style()),
        Span::styled(value, Style::default().fg(color)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn details_show_expiration() {
        let certificate = CertificateRecord {
            id: "456".into(),
            name: "cert2".into(),
            status: "expired".into(),
            expiration_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };
        let lines = detail_lines(&certificate);
        assert_eq!(lines.len(), 4);
        assert!(lines[3].to_string().ends_with("2024-01-15"));
    }
}
