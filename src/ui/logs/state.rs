use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::config::{LogRecord, Severity};
use crate::ui::mvi::UiState;

/// Dates are typed as `YYYY-MM-DD`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_INPUT_LEN: usize = 10;

/// Editable text inputs of the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    Keywords,
    DateFrom,
    DateTo,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [
        FilterField::Keywords,
        FilterField::DateFrom,
        FilterField::DateTo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterField::Keywords => "Keywords",
            FilterField::DateFrom => "From",
            FilterField::DateTo => "To",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which entries the logs screen shows.
///
/// Date bounds are kept as typed. Empty or not-yet-valid text means no
/// bound, so a half-typed date never hides everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    pub severities: BTreeSet<Severity>,
    /// Whitespace-separated terms, all of which must appear (case-insensitive).
    pub keywords: String,
    pub date_from: String,
    pub date_to: String,
    /// Only entries that belong to a command.
    pub commands_only: bool,
}

impl Default for LogFilter {
    fn default() -> Self {
        Self {
            severities: Severity::ALL.into_iter().collect(),
            keywords: String::new(),
            date_from: String::new(),
            date_to: String::new(),
            commands_only: false,
        }
    }
}

impl LogFilter {
    pub fn date_from(&self) -> Option<NaiveDate> {
        parse_date(&self.date_from)
    }

    pub fn date_to(&self) -> Option<NaiveDate> {
        parse_date(&self.date_to)
    }

    pub fn text(&self, field: FilterField) -> &str {
        match field {
            FilterField::Keywords => &self.keywords,
            FilterField::DateFrom => &self.date_from,
            FilterField::DateTo => &self.date_to,
        }
    }

    pub fn text_mut(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::Keywords => &mut self.keywords,
            FilterField::DateFrom => &mut self.date_from,
            FilterField::DateTo => &mut self.date_to,
        }
    }

    pub fn matches(&self, entry: &LogRecord) -> bool {
        if !self.severities.contains(&entry.severity) {
            return false;
        }
        if self.commands_only && entry.command.is_none() {
            return false;
        }

        let day = entry.timestamp.date();
        if self.date_from().is_some_and(|from| day < from) {
            return false;
        }
        if self.date_to().is_some_and(|to| day > to) {
            return false;
        }

        let haystack = format!(
            "{} {} {}",
            entry.message,
            entry.trace_id,
            entry.command.as_deref().unwrap_or("")
        )
        .to_lowercase();
        self.keywords
            .split_whitespace()
            .all(|term| haystack.contains(&term.to_lowercase()))
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogsState {
    pub entries: Vec<LogRecord>,
    pub filter: LogFilter,
    pub focused: FilterField,
    /// Index of the first shown row in [`LogsState::visible`].
    pub scroll: usize,
}

impl UiState for LogsState {}

impl LogsState {
    pub fn with_entries(entries: Vec<LogRecord>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    /// Entries passing the filter, newest first.
    pub fn visible(&self) -> Vec<&LogRecord> {
        let mut visible: Vec<&LogRecord> = self
            .entries
            .iter()
            .filter(|entry| self.filter.matches(entry))
            .collect();
        visible.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        visible
    }
}
