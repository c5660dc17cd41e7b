use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use palavra_provider::WordProvider;
use palavra_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod fetch;
pub mod refresh;
pub mod submit;

use fetch::{CycleReport, FetchSlot};
use refresh::handle_refresh;
use submit::handle_submit;

/// App's main loop: reacts to UI events and drives fetch cycles.
///
/// Cycle outcomes come back through an internal report channel, so state
/// writes and UI-bound events are applied here, one at a time, in the same
/// order cycles are issued and superseded.
pub async fn event_loop(
    state: Arc<AppState>,
    provider: Arc<dyn WordProvider>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut fetch = FetchSlot::new(cancel.clone());
    let (report_tx, report_rx) = kanal::bounded_async::<CycleReport>(8);

    let _ = app_to_ui_tx.send(AppEvent::BackendReady).await;

    tracing::info!("event loop started, waiting for events");
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            report = report_rx.recv() => {
                fetch::apply_report(&state, report?, &app_to_ui_tx).await;
            }
            event = ui_to_app_rx.recv() => {
                let event = event?;
                tracing::debug!("event received: {:?}", std::mem::discriminant(&event));

                match event {
                    AppEvent::SubmitForm(draft) => {
                        handle_submit(&state, &provider, &mut fetch, &app_to_ui_tx, &report_tx, draft)
                            .await?;
                    }
                    AppEvent::Refresh => {
                        handle_refresh(&state, &provider, &mut fetch, &app_to_ui_tx, &report_tx)
                            .await?;
                    }
                    AppEvent::UiEvent(UiEvent::Close) => {
                        tracing::info!("UI closed, stopping event loop");
                        break;
                    }
                    // UI-bound events, nothing to do in the backend
                    AppEvent::FormNormalized(_)
                    | AppEvent::FetchStarted
                    | AppEvent::WordsLoaded(_)
                    | AppEvent::FetchFailed(_)
                    | AppEvent::BackendReady => {}
                }
            }
        }
    }

    Ok(())
}
