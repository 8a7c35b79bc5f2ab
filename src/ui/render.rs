use crate::config::CertificateRecord;
use crate::ui::action::render_action_dialog;
use crate::ui::app::{App, Screen};
use crate::ui::footer::{Footer, HintContext};
use crate::ui::generate::render_generate_dialog;
use crate::ui::header::Header;
use crate::ui::layout::{
    ActionRegions, DashboardRegions, DialogRegions, LogsRegions, TRIGGER_LABEL,
};
use crate::ui::logs::render_logs;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use ratatui::Frame;

/// Action hints shown in every certificate row.
const ROW_ACTIONS: &str = "v:View r:Renew x:Revoke";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = DashboardRegions::compute(area);

    frame.render_widget(
        Header::new().widget(app.screen(), app.certificates().len(), app.pending_submissions()),
        regions.header,
    );
    frame.render_widget(Clear, regions.body);

    match app.screen() {
        Screen::Certificates => draw_certificates(frame, app, &regions),
        Screen::Logs => render_logs(frame, app.logs(), &LogsRegions::compute(area)),
    }

    frame.render_widget(
        Footer::new().widget(regions.footer, hint_context(app)),
        regions.footer,
    );

    render_generate_dialog(frame, app.dialog(), &DialogRegions::compute(area));
    render_action_dialog(frame, app.action_dialog(), &ActionRegions::compute(area));
}

fn hint_context(app: &App) -> HintContext {
    if app.is_dialog_visible() {
        HintContext::GenerateDialog
    } else if app.is_action_visible() {
        HintContext::ActionDialog
    } else {
        match app.screen() {
            Screen::Certificates => HintContext::Certificates,
            Screen::Logs => HintContext::Logs,
        }
    }
}

fn draw_certificates(frame: &mut Frame<'_>, app: &App, regions: &DashboardRegions) {
    frame.render_widget(
        Paragraph::new(Span::styled(
            TRIGGER_LABEL,
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        regions.trigger,
    );

    let visible = regions.table_rows().height as usize;
    let mut state = TableState::default()
        .with_offset(app.table_offset(visible))
        .with_selected(Some(app.selected()));
    frame.render_stateful_widget(certificate_table(app.certificates()), regions.table, &mut state);
}

fn certificate_table(certificates: &[CertificateRecord]) -> Table<'static> {
    let header = Row::new(vec!["ID", "Name", "Status", "Expires", "Actions"])
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = certificates
        .iter()
        .map(|cert| {
            let status_color = if cert.status == "active" {
                STATUS_OK
            } else {
                STATUS_ERROR
            };
            Row::new(vec![
                Cell::from(cert.id.clone()),
                Cell::from(cert.name.clone()),
                Cell::from(Span::styled(
                    cert.status.clone(),
                    Style::default().fg(status_color),
                )),
                Cell::from(cert.expiration_date.format("%Y-%m-%d").to_string()),
                Cell::from(ROW_ACTIONS),
            ])
            .style(Style::default().fg(HEADER_TEXT))
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Min(12),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(ROW_ACTIONS.chars().count() as u16),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD))
    .highlight_symbol("› ")
    .block(
        Block::default()
            .title(" Certificates ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
