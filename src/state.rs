//! Page state container.
//!
//! All mutable state of the landing page lives in [`PageState`]. The view
//! layer holds it in a single signal and calls the update methods here;
//! DOM side effects (class toggles, scrolling, timers) stay in the view.

use std::fmt;

use crate::contact::BANNER_DURATION_MS;
use crate::error::ValidationError;
use crate::nav::Section;
use crate::storage::PreferenceStore;
use crate::theme::{self, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Company,
    Message,
}

impl FormField {
    /// Fields that must be non-blank at submission, in reporting order.
    pub const REQUIRED: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    pub fn is_required(self) -> bool {
        self != FormField::Company
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Company => "company",
            FormField::Message => "message",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Presence check only; whitespace-only counts as missing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match FormField::REQUIRED
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            Some(field) => Err(ValidationError::MissingRequiredField(field)),
            None => Ok(()),
        }
    }

    pub fn clear(&mut self) {
        *self = FormState::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == FormState::default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub mobile_menu_open: bool,
    pub submitting: bool,
    pub success_banner: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub ui: UiState,
    pub form: FormState,
    /// When the current success banner should disappear, in ms since epoch.
    pub(crate) banner_deadline: Option<f64>,
    pub(crate) banner_duration_ms: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            ui: UiState::default(),
            form: FormState::default(),
            banner_deadline: None,
            banner_duration_ms: BANNER_DURATION_MS,
        }
    }
}

impl PageState {
    pub fn new(theme: Theme) -> Self {
        Self {
            ui: UiState {
                theme,
                ..UiState::default()
            },
            ..Self::default()
        }
    }

    /// Initial state for a page load: theme read once from the store.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        Self::new(theme::load_theme(store))
    }

    /// Flip the theme and persist it. Storage failures are swallowed.
    pub fn toggle_theme(&mut self, store: &dyn PreferenceStore) -> Theme {
        self.ui.theme = self.ui.theme.toggled();
        theme::persist_theme(store, self.ui.theme);
        self.ui.theme
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.ui.mobile_menu_open = !self.ui.mobile_menu_open;
        self.ui.mobile_menu_open
    }

    /// Record navigation to a section anchor. The mobile menu always closes,
    /// whether or not `id` names a known section.
    pub fn navigate(&mut self, id: &str) -> Option<Section> {
        self.ui.mobile_menu_open = false;
        Section::from_id(id)
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        self.form.set(field, value);
    }

    /// How long a success banner stays up after each accepted submission.
    pub fn with_banner_duration(mut self, ms: u32) -> Self {
        self.banner_duration_ms = ms;
        self
    }

    pub fn banner_duration_ms(&self) -> u32 {
        self.banner_duration_ms
    }

    pub fn banner_deadline(&self) -> Option<f64> {
        self.banner_deadline
    }
}
