//! Status log lines shared by the dialogs.

use ratatui::text::{Line, Span};
use ratatui::style::Style;

use crate::ui::generate::EXECUTING_MESSAGE;
use crate::ui::theme::{HEADER_TEXT, STATUS_OK};

/// The most recent `rows` entries of `log`, oldest first.
///
/// `rows` is the height of the region the lines are drawn into, which shrinks
/// on short terminals; the newest entry must always stay visible.
pub fn status_lines(log: &[String], rows: u16) -> Vec<Line<'static>> {
    let skip = log.len().saturating_sub(rows as usize);
    log.iter()
        .skip(skip)
        .map(|entry| {
            let color = if entry == EXECUTING_MESSAGE {
                HEADER_TEXT
            } else {
                STATUS_OK
            };
            Line::from(Span::styled(format!(" {}", entry), Style::default().fg(color)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("line {}", i)).collect()
    }

    #[test]
    fn keeps_most_recent_that_fit() {
        let lines = status_lines(&log(6), 4);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].to_string(), " line 2");
        assert_eq!(lines[3].to_string(), " line 5");
    }

    #[test]
    fn single_row_shows_newest() {
        let lines = status_lines(&log(2), 1);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].to_string(), " line 1");
    }

    #[test]
    fn zero_rows_is_empty() {
        assert!(status_lines(&log(3), 0).is_empty());
    }
}
