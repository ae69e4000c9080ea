//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{json, Value};

use teny::config::AssistConfig;
use teny::model::AppModel;
use teny::runtime::{AudioPlayer, Runtime};
use teny::service::{Gateway, ServiceError, Transport};

type Route = Box<dyn Fn(&Value) -> Result<Value, ServiceError> + Send + Sync>;

#[derive(Default)]
struct Script {
    routes: HashMap<&'static str, Route>,
    calls: Vec<(&'static str, Value)>,
    in_flight: usize,
    max_in_flight: usize,
}

/// In-memory service: answers from scripted routes and records every call
///
/// Clones share the same script, so a test can keep one handle while the
/// runtime owns another.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
    delay: Duration,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every response takes this long to arrive
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn route(
        self,
        path: &'static str,
        handler: impl Fn(&Value) -> Result<Value, ServiceError> + Send + Sync + 'static,
    ) -> Self {
        self.script
            .lock()
            .unwrap()
            .routes
            .insert(path, Box::new(handler));
        self
    }

    /// Answer `path` with a fixed body
    pub fn respond(self, path: &'static str, body: Value) -> Self {
        self.route(path, move |_| Ok(body.clone()))
    }

    /// Fail every call to `path` at the transport level
    pub fn fail(self, path: &'static str) -> Self {
        self.route(path, move |_| {
            Err(ServiceError::Transport {
                endpoint: path,
                cause: "connection refused".to_string(),
            })
        })
    }

    pub fn calls(&self) -> Vec<(&'static str, Value)> {
        self.script.lock().unwrap().calls.clone()
    }

    /// Request bodies sent to `path`, in order
    pub fn calls_to(&self, path: &str) -> Vec<Value> {
        self.calls()
            .into_iter()
            .filter(|(p, _)| *p == path)
            .map(|(_, body)| body)
            .collect()
    }

    pub fn max_in_flight(&self) -> usize {
        self.script.lock().unwrap().max_in_flight
    }
}

impl Transport for ScriptedTransport {
    async fn post(&self, path: &'static str, body: Value) -> Result<Value, ServiceError> {
        {
            let mut script = self.script.lock().unwrap();
            script.calls.push((path, body.clone()));
            script.in_flight += 1;
            script.max_in_flight = script.max_in_flight.max(script.in_flight);
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let mut script = self.script.lock().unwrap();
        script.in_flight -= 1;
        match script.routes.get(path) {
            Some(handler) => handler(&body),
            None => Err(ServiceError::Status {
                endpoint: path,
                status: 404,
            }),
        }
    }
}

/// Records played URLs instead of playing them
#[derive(Clone, Default)]
pub struct RecordingPlayer {
    played: Arc<Mutex<Vec<String>>>,
}

impl RecordingPlayer {
    pub fn played(&self) -> Vec<String> {
        self.played.lock().unwrap().clone()
    }
}

impl AudioPlayer for RecordingPlayer {
    fn play(&self, url: &str) -> Result<(), String> {
        self.played.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Create a test model with the given text and default config
pub fn test_model(text: &str) -> AppModel {
    AppModel::with_text(AssistConfig::default(), text)
}

/// Wire a model to a scripted service
pub fn runtime(
    model: AppModel,
    transport: &ScriptedTransport,
) -> (Runtime<ScriptedTransport>, RecordingPlayer) {
    let player = RecordingPlayer::default();
    let runtime = Runtime::new(
        model,
        Gateway::new(transport.clone()),
        Arc::new(player.clone()),
    );
    (runtime, player)
}

/// `check-spelling` handler that flags the listed words as incorrect
pub fn spelling_with_errors(
    incorrect: &'static [&'static str],
) -> impl Fn(&Value) -> Result<Value, ServiceError> + Send + Sync + 'static {
    move |body| {
        let word = body["word"].as_str().unwrap_or_default();
        let correct = !incorrect.contains(&word);
        Ok(json!({
            "correct": correct,
            "suggestions": if correct { json!([]) } else { json!(["tsara"]) },
            "phonetic_errors": [],
        }))
    }
}

/// Current notification text, if any
pub fn notification(runtime: &Runtime<ScriptedTransport>) -> Option<String> {
    runtime.model().notification.message().map(str::to_string)
}
