use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const CERTIFICATES_HINTS: &str =
    " g: Generate │ ↑/↓: Select │ v/r/x: View/Renew/Revoke │ Tab: Logs │ q: Quit";
const LOGS_HINTS: &str =
    " ←/→: Field │ F1-F4: Severity │ F5: Commands │ Esc: Clear │ Tab: Certificates";
const GENERATE_HINTS: &str =
    " Tab: Next field │ ←/→: Choose │ Ctrl+R: Preview │ Enter: Generate │ Esc: Close";
const ACTION_HINTS: &str = " Enter: Run │ Esc: Close";

/// Which key hints the footer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintContext {
    Certificates,
    Logs,
    GenerateDialog,
    ActionDialog,
}

impl HintContext {
    fn hints(self) -> &'static str {
        match self {
            HintContext::Certificates => CERTIFICATES_HINTS,
            HintContext::Logs => LOGS_HINTS,
            HintContext::GenerateDialog => GENERATE_HINTS,
            HintContext::ActionDialog => ACTION_HINTS,
        }
    }
}

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, context: HintContext) -> Paragraph<'static> {
        let hints = context.hints();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
