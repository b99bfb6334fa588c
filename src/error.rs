use thiserror::Error;

use crate::state::FormField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(FormField),
}

/// Failure reported by a contact transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Transport unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A submission is already in progress")]
    InFlight,

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SubmitError {
    /// Text shown to the visitor in a blocking alert, if any.
    pub fn alert_text(&self) -> Option<&'static str> {
        match self {
            SubmitError::Validation(_) => Some("Veuillez remplir tous les champs obligatoires."),
            SubmitError::InFlight => None,
            SubmitError::Transport(_) => Some("Erreur lors de l'envoi du message."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Persistent storage is unavailable")]
    Unavailable,

    #[error("Storage write failed: {0}")]
    Write(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid site configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
