use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Mutex;

use lazy_static::lazy_static;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::point::Point;
use crate::core::snapshot::PresentationSnapshot;

/// Everything that travels between contexts. The wire shape is a
/// `{type, data}` pair; `sync_state` carries no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Message {
    /// "Send me your current snapshot."
    SyncState,
    /// The full authoritative snapshot, never a diff.
    StateUpdate(PresentationSnapshot),
    /// A timer-widget position proposed by a presentation context.
    TimerMoved(Point),
}

struct Subscriber {
    id: u64,
    sender: Sender<Message>,
}

lazy_static! {
    static ref CHANNELS: Mutex<HashMap<String, Vec<Subscriber>>> = Mutex::new(HashMap::new());
    static ref NEXT_SUBSCRIBER: AtomicU64 = AtomicU64::new(1);
}

/// One end of a named, process-wide broadcast bus. Every context that opens
/// the same name receives what the others post, in order per sender, at most
/// once; posting with nobody listening delivers nowhere and is not an error.
/// Dropping the handle unsubscribes this context without affecting others.
pub struct Channel {
    name: String,
    id: u64,
    incoming: Receiver<Message>,
}

impl Channel {
    pub fn open(name: &str) -> Channel {
        let (sender, incoming) = channel();
        let id = NEXT_SUBSCRIBER.fetch_add(1, Ordering::Relaxed);

        CHANNELS
            .lock()
            .unwrap()
            .entry(name.to_string())
            .or_default()
            .push(Subscriber { id, sender });

        trace!("|= subscriber {} joined '{}'", id, name);
        Channel {
            name: name.to_string(),
            id,
            incoming,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Fire-and-forget delivery to every other subscriber of this name.
    pub fn post(&self, message: Message) {
        if let Ok(channels) = CHANNELS.lock() {
            if let Some(subscribers) = channels.get(self.name.as_str()) {
                for subscriber in subscribers.iter() {
                    if subscriber.id == self.id {
                        continue;
                    }
                    let _ = subscriber.sender.send(message.clone());
                }
            }
        }
    }

    pub fn try_recv(&self) -> Option<Message> {
        match self.incoming.try_recv() {
            Ok(message) => Some(message),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

impl Drop for Channel {
    fn drop(&mut self) {
        if let Ok(mut channels) = CHANNELS.lock() {
            if let Some(subscribers) = channels.get_mut(self.name.as_str()) {
                subscribers.retain(|subscriber| subscriber.id != self.id);
                if subscribers.is_empty() {
                    channels.remove(self.name.as_str());
                }
            }
        }
        trace!("=| subscriber {} left '{}'", self.id, self.name);
    }
}
