use std::sync::Arc;

use kanal::AsyncSender;
use palavra_core::settings::RequestSettings;
use palavra_provider::WordProvider;
use palavra_types::{AppEvent, FormDraft};

use crate::events::fetch::{self, CycleReport, FetchSlot};
use crate::state::AppState;

/// Normalize the submitted draft, echo the clamped values back to the form
/// and replace the settings, which starts a new fetch cycle.
///
/// Clamping is silent and total; a submit never fails on bad input.
pub async fn handle_submit(
    state: &AppState,
    provider: &Arc<dyn WordProvider>,
    fetch: &mut FetchSlot,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    report_tx: &AsyncSender<CycleReport>,
    draft: FormDraft,
) -> anyhow::Result<()> {
    let settings = RequestSettings::from_draft(&draft);
    tracing::info!(
        count = settings.count,
        length = settings.word_length,
        lang = settings.language.code(),
        "submit"
    );

    let _ = app_to_ui_tx
        .send(AppEvent::FormNormalized(settings.to_draft()))
        .await;

    {
        let mut view = state.view.write().await;
        view.settings = settings;
    }

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
