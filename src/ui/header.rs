use crate::ui::app::Screen;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(
        &self,
        screen: Screen,
        certificate_count: usize,
        pending_submissions: usize,
    ) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let tab = |label: &'static str, active: bool| {
            if active {
                Span::styled(
                    label,
                    text_style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(label, separator_style)
            }
        };
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("step-ca console", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            tab(" Certificates ", screen == Screen::Certificates),
            Span::raw(" "),
            tab(" Logs ", screen == Screen::Logs),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} certificates", certificate_count), text_style),
        ];
        if pending_submissions > 0 {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("{} pending", pending_submissions),
                text_style,
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
