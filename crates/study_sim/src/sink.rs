use std::sync::mpsc;

use crate::SimEvent;

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: SimEvent);
}

pub struct ChannelProgressSink {
    tx: mpsc::Sender<SimEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: mpsc::Sender<SimEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: SimEvent) {
        // The receiver is gone only during shutdown.
        let _ = self.tx.send(event);
    }
}
