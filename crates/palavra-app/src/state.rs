use std::sync::Arc;

use palavra_config::Config;
use palavra_core::settings::RequestSettings;
use palavra_core::status::FetchStatus;
use tokio::sync::RwLock;

/// Visible state bundle.
///
/// Mutated only by the active (non-superseded) fetch cycle and by the two
/// user operations, submit and refresh. Words are replaced wholesale on
/// success, never merged.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub settings: RequestSettings,
    pub words: Vec<String>,
    pub status: FetchStatus,
}

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub view: RwLock<ViewState>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let view = ViewState {
            settings: config.ui.initial_settings,
            ..ViewState::default()
        };

        Self {
            config: Arc::new(RwLock::new(config)),
            view: RwLock::new(view),
        }
    }
}
