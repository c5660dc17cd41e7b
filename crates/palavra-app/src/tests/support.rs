use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use palavra_config::Config;
use palavra_core::settings::RequestSettings;
use palavra_provider::{ProviderError, WordProvider};
use palavra_types::AppEvent;
use tokio::sync::{Mutex, Notify};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

pub struct TestHarness {
    pub state: Arc<AppState>,
    pub ui_tx: AsyncSender<AppEvent>,
    pub app_rx: AsyncReceiver<AppEvent>,
    pub cancel: CancellationToken,
}

pub async fn spawn_event_loop(provider: Arc<dyn WordProvider>) -> TestHarness {
    let state = Arc::new(AppState::new(Config::default()));
    let (ui_tx, ui_rx) = kanal::bounded_async::<AppEvent>(64);
    let (app_tx, app_rx) = kanal::bounded_async::<AppEvent>(64);
    let cancel = CancellationToken::new();

    tokio::spawn(event_loop(
        state.clone(),
        provider,
        ui_rx,
        app_tx,
        cancel.clone(),
    ));

    let harness = TestHarness {
        state,
        ui_tx,
        app_rx,
        cancel,
    };

    match harness.next_event().await {
        AppEvent::BackendReady => {}
        other => panic!("expected BackendReady, got {other:?}"),
    }

    harness
}

impl TestHarness {
    pub async fn next_event(&self) -> AppEvent {
        timeout(Duration::from_secs(2), self.app_rx.recv())
            .await
            .expect("timed out waiting for event")
            .expect("event channel closed")
    }

    pub async fn expect_no_event(&self, within: Duration) {
        // A closed channel also means no event is coming
        if let Ok(Ok(event)) = timeout(within, self.app_rx.recv()).await {
            panic!("unexpected event: {event:?}");
        }
    }
}

/// Provider that pops scripted outcomes in order and counts calls
pub struct ScriptedProvider {
    outcomes: Mutex<VecDeque<Result<Vec<String>, ProviderError>>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(outcomes: Vec<Result<Vec<String>, ProviderError>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl WordProvider for ScriptedProvider {
    async fn fetch_words(&self, _settings: &RequestSettings) -> Result<Vec<String>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcomes
            .lock()
            .await
            .pop_front()
            .expect("no scripted outcome left")
    }
}

/// Provider whose first call blocks until released; later calls resolve at once
pub struct GatedProvider {
    pub gate: Arc<Notify>,
    calls: AtomicUsize,
}

impl GatedProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            gate: Arc::new(Notify::new()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl WordProvider for GatedProvider {
    async fn fetch_words(&self, _settings: &RequestSettings) -> Result<Vec<String>, ProviderError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call == 0 {
            self.gate.notified().await;
            Ok(vec!["primeira".to_string()])
        } else {
            Ok(vec!["segunda".to_string()])
        }
    }
}

pub fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
