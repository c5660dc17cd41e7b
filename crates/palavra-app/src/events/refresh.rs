use std::sync::Arc;

use kanal::AsyncSender;
use palavra_provider::WordProvider;
use palavra_types::AppEvent;

use crate::events::fetch::{self, CycleReport, FetchSlot};
use crate::state::AppState;

/// Re-apply the current settings unchanged to force a new fetch cycle.
///
/// The cycle fires on every refresh, equal values or not; that is what
/// yields a different random sample with identical filters.
pub async fn handle_refresh(
    state: &AppState,
    provider: &Arc<dyn WordProvider>,
    fetch: &mut FetchSlot,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    report_tx: &AsyncSender<CycleReport>,
) -> anyhow::Result<()> {
    let settings = { state.view.read().await.settings };
    tracing::info!(
        count = settings.count,
        length = settings.word_length,
        lang = settings.language.code(),
        "refresh with unchanged settings"
    );

    fetch::begin_cycle(
        state,
        provider.clone(),
        settings,
        fetch,
        app_to_ui_tx,
        report_tx,
    )
    .await;

    Ok(())
}
