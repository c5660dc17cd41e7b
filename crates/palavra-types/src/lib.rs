use serde::{Deserialize, Serialize};

/// Events crossing the UI/backend channel boundary
#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// User pressed the submit button with the current form draft
    SubmitForm(FormDraft),
    /// User asked for a fresh batch with unchanged settings
    Refresh,
    /// Backend echoes the clamped/normalized values back into the form
    FormNormalized(FormDraft),
    /// A fetch cycle started; UI shows the loading indicator
    FetchStarted,
    /// Fetch cycle resolved with a word batch
    WordsLoaded(Vec<String>),
    /// Fetch cycle resolved with a user-facing error message
    FetchFailed(String),
    BackendReady,
}

/// Raw, unvalidated string mirror of the request settings.
///
/// May transiently hold invalid text (empty, out of range) while the user
/// edits; normalization happens only on submit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormDraft {
    pub count: String,
    pub length: String,
    pub language: String,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Window closed; the backend loop should stop
    Close,
}
