use palavra_types::{AppEvent, UiEvent};
use slint::{ComponentHandle, Weak};

use crate::MainWindow;

pub fn handle_event(event: AppEvent, window_weak: Weak<MainWindow>) {
    let Some(w) = window_weak.upgrade() else {
        return;
    };

    match event {
        AppEvent::UiEvent(UiEvent::Close) => {
            w.hide().ok();
            slint::quit_event_loop().ok();
        }
        AppEvent::FormNormalized(draft) => {
            tracing::debug!("[SLINT] form normalized to {:?}", draft);
            w.set_count_text(draft.count.into());
            w.set_length_text(draft.length.into());
            w.set_language_code(draft.language.into());
        }
        AppEvent::FetchStarted => {
            w.set_loading(true);
            w.set_error_message("".into());
        }
        AppEvent::WordsLoaded(words) => {
            tracing::debug!("[SLINT] showing {} words", words.len());
            let rows: Vec<slint::SharedString> = words.into_iter().map(Into::into).collect();
            let model = std::rc::Rc::new(slint::VecModel::from(rows));
            w.set_word_list(model.into());
            w.set_loading(false);
            w.set_error_message("".into());
        }
        AppEvent::FetchFailed(message) => {
            tracing::debug!("[SLINT] fetch failed: {message}");
            w.set_loading(false);
            w.set_error_message(message.into());
        }
        AppEvent::BackendReady => {
            w.set_ready(true);
        }
        // Backend-bound events never arrive on this channel
        AppEvent::SubmitForm(_) | AppEvent::Refresh => {}
    }
}
