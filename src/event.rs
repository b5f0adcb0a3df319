use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

use crate::api::Response;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    #[allow(dead_code)]
    Resize(u16, u16),
    Api(Response),
}

/// Polls the terminal on its own thread and forwards input to the event loop.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Start forwarding. The thread exits once the receiver is dropped.
    pub fn spawn(self, tx: UnboundedSender<AppEvent>) -> thread::JoinHandle<()> {
        thread::spawn(move || loop {
            let event = match self.next() {
                Ok(event) => event,
                Err(e) => {
                    warn!("terminal input failed: {}", e);
                    return;
                }
            };
            if tx.send(event).is_err() {
                return;
            }
        })
    }

    fn next(&self) -> std::io::Result<AppEvent> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(AppEvent::Key(key)),
                CrosstermEvent::Resize(w, h) => Ok(AppEvent::Resize(w, h)),
                _ => Ok(AppEvent::Tick),
            }
        } else {
            Ok(AppEvent::Tick)
        }
    }
}
