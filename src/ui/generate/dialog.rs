//! Dialog rendering for the generate-certificate overlay.

use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::layout::{DialogRegions, CLOSE_LABEL, RELOAD_LABEL, SUBMIT_LABEL};
use crate::ui::status_log::status_lines;
use crate::ui::theme::{
    button_style, label_style, ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, OVERLAY_DIM, POPUP_BORDER,
};

use super::state::{FormField, GenerateDialogState};

/// Width of the field label column.
const LABEL_WIDTH: usize = 15;

/// Render the dialog and its overlay. Does nothing while hidden.
pub fn render_generate_dialog(frame: &mut Frame, state: &GenerateDialogState, regions: &DialogRegions) {
    if !state.is_visible() {
        return;
    }

    frame.render_widget(
        Block::default().style(Style::default().bg(OVERLAY_DIM)),
        regions.overlay,
    );
    frame.render_widget(Clear, regions.content);

    let block = Block::default()
        .title(" Generate Certificate ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(block, regions.content);
    frame.render_widget(
        Paragraph::new(Span::styled(CLOSE_LABEL, Style::default().fg(ACCENT))),
        regions.close_button,
    );

    for field in FormField::ALL {
        frame.render_widget(field_line(state, field), regions.field(field));
    }

    frame.render_widget(
        Paragraph::new(Span::styled(" Command preview", label_style())),
        regions.preview_label,
    );
    frame.render_widget(
        Paragraph::new(format!(" {}", state.preview))
            .style(Style::default().fg(HEADER_TEXT))
            .wrap(Wrap { trim: false }),
        regions.preview,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(RELOAD_LABEL, button_style())),
        regions.reload_button,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(SUBMIT_LABEL, button_style())),
        regions.submit_button,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(" Status", label_style())),
        regions.status_label,
    );
    frame.render_widget(
        Paragraph::new(status_lines(&state.status_log, regions.status_log.height)),
        regions.status_log,
    );
}

fn field_line(state: &GenerateDialogState, field: FormField) -> Line<'static> {
    let focused = state.focused == field;
    let value = state.form.value(field);
    let shown = if field.is_choice() {
        format!("‹ {} ›", value)
    } else if focused {
        format!("{}▏", value)
    } else {
        value.to_string()
    };

    let marker = if focused { "›" } else { " " };
    let mut line = Line::from(vec![
        Span::styled(format!("{} ", marker), Style::default().fg(ACCENT)),
        Span::styled(
            format!("{:<width$}", field.label(), width = LABEL_WIDTH),
            label_style(),
        ),
        Span::styled(shown, Style::default().fg(HEADER_TEXT)),
    ]);
    if focused {
        line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_field_shows_arrows() {
        let mut state = GenerateDialogState::default();
        state.form.key_type = crate::ui::generate::ChoiceField::new(vec!["RSA".into()], "RSA");
        let line = field_line(&state, FormField::KeyType);
        assert!(line.to_string().ends_with("‹ RSA ›"));
    }
}
