use std::sync::Arc;

use kanal::AsyncSender;
use palavra_core::settings::RequestSettings;
use palavra_provider::{ProviderError, WordProvider};
use palavra_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Tracks the active fetch cycle's cancellation token.
///
/// Issuing a new cycle cancels the previous one at that moment, so at most
/// one cycle is ever allowed to mutate visible state per settings value.
pub struct FetchSlot {
    parent: CancellationToken,
    current: Option<CancellationToken>,
}

impl FetchSlot {
    pub fn new(parent: CancellationToken) -> Self {
        Self {
            parent,
            current: None,
        }
    }

    /// Cancel the in-flight cycle, if any, and arm a token for the next one
    pub fn supersede(&mut self) -> CancellationToken {
        if let Some(prev) = self.current.take() {
            prev.cancel();
        }
        let token = self.parent.child_token();
        self.current = Some(token.clone());
        token
    }
}

/// Resolution of one cycle's network call, tagged with the cycle's token so
/// the event loop can tell whether the cycle is still current
pub struct CycleReport {
    pub token: CancellationToken,
    pub outcome: Result<Vec<String>, ProviderError>,
}

/// Begin a new fetch cycle: supersede the previous one, flip the status to
/// loading and spawn the network task.
///
/// The task itself never touches state or the UI channel; it reports back
/// to the event loop, which applies outcomes one at a time in arrival
/// order. That keeps the UI event stream consistent with supersession
/// order even if a task is descheduled around its send.
pub async fn begin_cycle(
    state: &AppState,
    provider: Arc<dyn WordProvider>,
    settings: RequestSettings,
    fetch: &mut FetchSlot,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    report_tx: &AsyncSender<CycleReport>,
) {
    let cancel = fetch.supersede();

    {
        // Loading transition: prior error cleared, stale words stay
        // visible until the cycle resolves
        let mut view = state.view.write().await;
        view.status.begin();
    }
    let _ = app_to_ui_tx.send(AppEvent::FetchStarted).await;

    let report_tx = report_tx.clone();
    let _ = tokio::spawn(async move {
        let outcome = tokio::select! {
            _ = cancel.cancelled() => return,
            outcome = provider.fetch_words(&settings) => outcome,
        };

        // The loop discards superseded reports anyway; this just skips a
        // pointless send
        if cancel.is_cancelled() {
            return;
        }

        let _ = report_tx
            .send(CycleReport {
                token: cancel,
                outcome,
            })
            .await;
    });
}

/// Apply a cycle's outcome, unless the cycle was superseded while its
/// report was in flight. Runs on the event loop, so reports and new cycles
/// never interleave.
pub async fn apply_report(
    state: &AppState,
    report: CycleReport,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) {
    if report.token.is_cancelled() {
        tracing::debug!("discarding report from superseded cycle");
        return;
    }

    let mut view = state.view.write().await;
    match report.outcome {
        Ok(words) => {
            tracing::debug!("fetch cycle resolved with {} words", words.len());
            view.status.succeed();
            view.words = words.clone();
            drop(view);
            let _ = app_to_ui_tx.send(AppEvent::WordsLoaded(words)).await;
        }
        Err(err) => {
            tracing::warn!("fetch cycle failed: {err}");
            let message = err.user_message();
            view.status.fail(message.clone());
            drop(view);
            let _ = app_to_ui_tx.send(AppEvent::FetchFailed(message)).await;
        }
    }
}
