//! Runtime module - executes commands and feeds results back as messages
//!
//! - `player` - audio playback seam
//! - `tasks` - gateway calls behind each service command
//! - `timer` - single-slot debounce and dismissal timers
//!
//! All state changes happen in [`Runtime::dispatch`] on the caller's task.
//! Spawned work only ever sends a [`Msg`] back over the channel.

pub mod player;
pub mod tasks;
pub mod timer;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::AbortHandle;
use tokio::time::Instant;

use crate::commands::Cmd;
use crate::messages::{ActionMsg, AppMsg, Msg, SuggestMsg, UiMsg, ValidationMsg};
use crate::model::AppModel;
use crate::service::{Gateway, Transport};
use crate::update::update;

pub use player::{AudioPlayer, SystemPlayer};
pub use timer::TimerSlot;

pub struct Runtime<T: Transport> {
    model: AppModel,
    gateway: Arc<Gateway<T>>,
    player: Arc<dyn AudioPlayer>,
    msg_tx: UnboundedSender<Msg>,
    msg_rx: UnboundedReceiver<Msg>,
    debounce: TimerSlot,
    dismissal: TimerSlot,
}

impl<T: Transport> Runtime<T> {
    pub fn new(model: AppModel, gateway: Gateway<T>, player: Arc<dyn AudioPlayer>) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        Self {
            model,
            gateway: Arc::new(gateway),
            player,
            msg_tx,
            msg_rx,
            debounce: TimerSlot::new(),
            dismissal: TimerSlot::new(),
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    /// Handle for feeding messages from outside the loop
    pub fn sender(&self) -> UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Whether an autocomplete debounce is pending
    pub fn debounce_armed(&self) -> bool {
        self.debounce.is_armed()
    }

    /// Run one message through `update` and execute the resulting command
    ///
    /// Returns whether the view should be redrawn. Must be called from
    /// inside a tokio runtime.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let Some(cmd) = update(&mut self.model, msg) else {
            return false;
        };
        let redraw = cmd.needs_redraw();
        self.process_cmd(cmd);
        redraw
    }

    /// Wait for the next result message and dispatch it
    pub async fn next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => self.dispatch(msg),
            None => false,
        }
    }

    /// Dispatch every message that arrives within `duration`
    ///
    /// Returns whether any of them asked for a redraw.
    pub async fn run_for(&mut self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        let mut redraw = false;
        loop {
            tokio::select! {
                biased;
                msg = self.msg_rx.recv() => match msg {
                    Some(msg) => redraw |= self.dispatch(msg),
                    None => break,
                },
                _ = tokio::time::sleep_until(deadline) => break,
            }
        }
        redraw
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }

            // === Timers ===
            Cmd::ScheduleDismissal { id, delay_ms } => {
                let timer = self.send_after(delay_ms, Msg::Ui(UiMsg::NotificationExpired(id)));
                self.dismissal.replace(timer);
            }
            Cmd::ScheduleSuggestions {
                generation,
                delay_ms,
            } => {
                let timer = self.send_after(
                    delay_ms,
                    Msg::Suggest(SuggestMsg::TimerElapsed { generation }),
                );
                self.debounce.replace(timer);
            }
            Cmd::CancelSuggestions => self.debounce.cancel(),

            // === Service calls ===
            Cmd::RequestSuggestions {
                generation,
                context,
            } => {
                let gateway = Arc::clone(&self.gateway);
                self.spawn_request(async move {
                    let result = tasks::fetch_suggestions(&gateway, context).await;
                    Msg::Suggest(SuggestMsg::Received { generation, result })
                });
            }
            Cmd::CheckSpelling { words } => {
                let gateway = Arc::clone(&self.gateway);
                self.spawn_request(async move {
                    let report = tasks::check_words(&gateway, words).await;
                    Msg::Validation(ValidationMsg::Completed(report))
                });
            }
            Cmd::Translate { text } => {
                let gateway = Arc::clone(&self.gateway);
                self.spawn_request(async move {
                    let result = tasks::translate(&gateway, text.clone()).await;
                    Msg::Action(ActionMsg::TranslateCompleted {
                        source: text,
                        result,
                    })
                });
            }
            Cmd::AnalyzeSentiment { text } => {
                let gateway = Arc::clone(&self.gateway);
                self.spawn_request(async move {
                    let result = tasks::analyze_sentiment(&gateway, text).await;
                    Msg::Action(ActionMsg::SentimentCompleted(result))
                });
            }
            Cmd::Lemmatize { word } => {
                let gateway = Arc::clone(&self.gateway);
                self.spawn_request(async move {
                    let result = tasks::lemmatize(&gateway, word).await;
                    Msg::Action(ActionMsg::LemmaCompleted(result))
                });
            }
            Cmd::ExtractEntities { text } => {
                let gateway = Arc::clone(&self.gateway);
                self.spawn_request(async move {
                    let result = tasks::extract_entities(&gateway, text).await;
                    Msg::Action(ActionMsg::EntitiesCompleted(result))
                });
            }
            Cmd::ValidatePhonetics { word } => {
                let gateway = Arc::clone(&self.gateway);
                self.spawn_request(async move {
                    let result = tasks::validate_phonetics(&gateway, word.clone()).await;
                    Msg::Action(ActionMsg::PhoneticsCompleted { word, result })
                });
            }
            Cmd::SynthesizeSpeech { text } => {
                let gateway = Arc::clone(&self.gateway);
                self.spawn_request(async move {
                    let result = tasks::synthesize_speech(&gateway, text).await;
                    Msg::Action(ActionMsg::SpeechCompleted(result))
                });
            }

            // === Platform ===
            Cmd::PlayAudio { url } => {
                tracing::info!("Playing {}", url);
                if let Err(e) = self.player.play(&url) {
                    tracing::warn!("Audio playback failed: {}", e);
                }
            }
            Cmd::SaveFile { path, content } => {
                self.spawn_request(async move {
                    let result = tokio::fs::write(&path, content)
                        .await
                        .map(|()| path)
                        .map_err(|e| e.to_string());
                    Msg::App(AppMsg::ExportCompleted(result))
                });
            }
        }
    }

    /// Send `msg` after `delay_ms`, unless the returned handle is aborted first
    fn send_after(&self, delay_ms: u64, msg: Msg) -> AbortHandle {
        let tx = self.msg_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            let _ = tx.send(msg);
        })
        .abort_handle()
    }

    fn spawn_request<F>(&self, work: F)
    where
        F: Future<Output = Msg> + Send + 'static,
    {
        let tx = self.msg_tx.clone();
        tokio::spawn(async move {
            let msg = work.await;
            let _ = tx.send(msg);
        });
    }
}
