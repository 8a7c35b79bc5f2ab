use crate::command::FormSnapshot;
use crate::config::FormConfig;
use crate::ui::mvi::UiState;

/// First status line written when a submission starts.
pub const EXECUTING_MESSAGE: &str = "Executing command...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    KeyName,
    KeyType,
    Duration,
    DurationUnit,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::KeyName,
        FormField::KeyType,
        FormField::Duration,
        FormField::DurationUnit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::KeyName => "Key name",
            FormField::KeyType => "Key type",
            FormField::Duration => "Duration",
            FormField::DurationUnit => "Duration unit",
        }
    }

    pub fn is_choice(self) -> bool {
        matches!(self, FormField::KeyType | FormField::DurationUnit)
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

/// A fixed list of options with one selected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChoiceField {
    options: Vec<String>,
    selected: usize,
}

impl ChoiceField {
    /// Selects `initial` if present, otherwise the first option.
    pub fn new(options: Vec<String>, initial: &str) -> Self {
        let selected = options.iter().position(|o| o == initial).unwrap_or(0);
        Self { options, selected }
    }

    /// Selected value, or empty when there are no options.
    pub fn value(&self) -> &str {
        self.options
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn cycle(&mut self, forward: bool) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        self.selected = if forward {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
    }
}

/// Current contents of the four form fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerateForm {
    pub key_name: String,
    pub key_type: ChoiceField,
    pub duration: String,
    pub duration_unit: ChoiceField,
}

impl GenerateForm {
    pub fn from_config(config: &FormConfig) -> Self {
        Self {
            key_name: config.key_name.clone(),
            key_type: ChoiceField::new(config.key_types.clone(), &config.key_type),
            duration: config.duration.clone(),
            duration_unit: ChoiceField::new(config.duration_units.clone(), &config.duration_unit),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::KeyName => &self.key_name,
            FormField::KeyType => self.key_type.value(),
            FormField::Duration => &self.duration,
            FormField::DurationUnit => self.duration_unit.value(),
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            key_name: self.key_name.clone(),
            key_type: self.key_type.value().to_string(),
            duration: self.duration.clone(),
            duration_unit: self.duration_unit.value().to_string(),
        }
    }
}

/// Full state of the generate dialog.
///
/// Form, preview and status log survive while the dialog is hidden.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerateDialogState {
    pub visibility: Visibility,
    pub form: GenerateForm,
    pub focused: FormField,
    /// Empty until first computed.
    pub preview: String,
    pub status_log: Vec<String>,
}

impl UiState for GenerateDialogState {}

impl GenerateDialogState {
    pub fn with_form(form: GenerateForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }
}
