//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_endpoint;

use std::time::Duration;
use tokio::sync::mpsc;

use flagdex::{AppActor, Config, NetworkActor, RenderState, UiEvent};

pub const FRANCE_GERMANY: &str = r#"[{"name":"France","flag":"f.png"},{"name":"Germany","flag":"g.png"}]"#;

/// A running App + Network actor pair, driven like the UI loop drives it
pub struct Harness {
    pub ui_tx: mpsc::UnboundedSender<UiEvent>,
    pub render_rx: mpsc::UnboundedReceiver<RenderState>,
    pub latest: RenderState,
}

impl Harness {
    pub fn start(config: Config) -> Self {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();

        let network = NetworkActor::new(net_resp_tx, config.request_timeout(), config.flag_concurrency);
        tokio::spawn(network.run(net_cmd_rx));
        tokio::spawn(AppActor::new(config, net_cmd_tx, render_tx).run(ui_rx, net_resp_rx));

        Harness {
            ui_tx,
            render_rx,
            latest: RenderState::default(),
        }
    }

    pub fn send(&self, event: UiEvent) {
        self.ui_tx.send(event).expect("app actor stopped");
    }

    pub fn type_text(&self, text: &str) {
        self.send(UiEvent::StartEditing);
        for c in text.chars() {
            self.send(UiEvent::CharInput(c));
        }
    }

    /// Wait for a render state satisfying `pred`, or panic after a few seconds
    pub async fn wait_for(&mut self, pred: impl Fn(&RenderState) -> bool) -> RenderState {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        loop {
            if pred(&self.latest) {
                return self.latest.clone();
            }
            match tokio::time::timeout_at(deadline, self.render_rx.recv()).await {
                Ok(Some(state)) => self.latest = state,
                Ok(None) => panic!("app actor stopped before condition was met"),
                Err(_) => panic!("timed out waiting for render state, last: {:?}", self.latest),
            }
        }
    }
}

pub fn config_for(endpoint: String) -> Config {
    Config {
        endpoint,
        placeholder_flag_url: "http://placeholder.test/missing.png".to_string(),
        ..Config::default()
    }
}
