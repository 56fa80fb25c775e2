//! Terminal input, redraw ticks and console change notifications merged
//! into one stream.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent};
use futures_util::StreamExt;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::scripts::Page;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// A page's console appended, cleared, or changed state.
    ConsoleChanged(Page),
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    tx: mpsc::UnboundedSender<Event>,
    tasks: Vec<JoinHandle<()>>,
}

impl EventHandler {
    pub fn new(tick: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let input = tokio::spawn(Self::input_loop(tx.clone(), tick));
        Self {
            rx,
            tx,
            tasks: vec![input],
        }
    }

    /// Forward a console's change feed as `ConsoleChanged(page)` events.
    pub fn watch_console(&mut self, page: Page, mut changes: watch::Receiver<u64>) {
        let tx = self.tx.clone();
        self.tasks.push(tokio::spawn(async move {
            while changes.changed().await.is_ok() {
                if tx.send(Event::ConsoleChanged(page)).is_err() {
                    break;
                }
            }
        }));
    }

    async fn input_loop(tx: mpsc::UnboundedSender<Event>, tick: Duration) {
        let mut reader = EventStream::new();
        let mut tick = tokio::time::interval(tick);

        loop {
            let event = tokio::select! {
                maybe_event = reader.next() => match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) => Event::Key(key),
                    Some(Ok(CrosstermEvent::Resize(w, h))) => Event::Resize(w, h),
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => {
                        tracing::warn!("terminal event error: {e}");
                        continue;
                    }
                    None => break,
                },
                _ = tick.tick() => Event::Tick,
            };
            if tx.send(event).is_err() {
                break;
            }
        }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}
