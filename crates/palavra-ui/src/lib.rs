use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use palavra_config::Config;
use palavra_core::settings::Language;
use palavra_types::{AppEvent, FormDraft};
use slint::ComponentHandle;
use tokio::sync::RwLock;

pub mod events;

slint::include_modules!();

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let window = MainWindow::new()?;

    // Language choices come from the domain enum, not the markup
    {
        let codes: Vec<slint::SharedString> = Language::all()
            .iter()
            .map(|lang| lang.code().into())
            .collect();
        let model = std::rc::Rc::new(slint::VecModel::from(codes));
        window.set_language_model(model.into());
    }

    // Seed the form with the configured initial settings
    {
        let config = config.read().await;
        let draft = config.ui.initial_settings.to_draft();
        window.set_window_title(config.ui.window_title.clone().into());
        window.set_count_text(draft.count.into());
        window.set_length_text(draft.length.into());
        window.set_language_code(draft.language.into());
    }

    // Submit button: ship the raw draft to the backend, which normalizes it
    {
        let tx = ui_to_app_tx.clone();
        let weak = window.as_weak();
        window.on_submit(move || {
            let Some(w) = weak.upgrade() else { return };
            let draft = FormDraft {
                count: w.get_count_text().to_string(),
                length: w.get_length_text().to_string(),
                language: w.get_language_code().to_string(),
            };
            let tx = tx.clone();
            slint::spawn_local(async move {
                let _ = tx.send(AppEvent::SubmitForm(draft)).await;
            })
            .unwrap();
        });
    }

    // Refresh button: same settings, new batch
    {
        let tx = ui_to_app_tx.clone();
        window.on_refresh(move || {
            let tx = tx.clone();
            slint::spawn_local(async move {
                let _ = tx.send(AppEvent::Refresh).await;
            })
            .unwrap();
        });
    }

    // Receive events from the backend
    {
        let weak = window.as_weak();
        slint::spawn_local(async move {
            while let Ok(event) = app_to_ui_rx.recv().await {
                if weak.upgrade().is_none() {
                    break;
                }
                events::handle_event(event, weak.clone());
            }
        })
        .unwrap();
    }

    window.show()?;
    window.run()?;

    // Window closed; tell the backend to stop
    let _ = ui_to_app_tx
        .send(AppEvent::UiEvent(palavra_types::UiEvent::Close))
        .await;

    Ok(())
}
