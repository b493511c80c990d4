//! Session recording hooks.
//!
//! Every completed move or resize step is reported to the recorder attached
//! to the target, so a session can be replayed later.

use crate::types::TargetId;
use serde::Serialize;
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::trace;

pub trait SessionRecorder: Send + Sync {
    /// Target moved to the given (rounded) position.
    fn record_moved(&self, target: TargetId, x: i32, y: i32);

    /// Target resized to the given parent-space dimensions.
    fn record_resized(&self, target: TargetId, width: f64, height: f64);
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RecorderEvent {
    Moved { target: TargetId, x: i32, y: i32 },
    Resized { target: TargetId, width: f64, height: f64 },
}

impl RecorderEvent {
    pub fn target(&self) -> TargetId {
        match self {
            RecorderEvent::Moved { target, .. } | RecorderEvent::Resized { target, .. } => *target,
        }
    }
}

/// Recorder that forwards events over an unbounded channel. Sending never
/// blocks; events sent after the receiver is dropped are discarded.
#[derive(Debug, Clone)]
pub struct ChannelRecorder {
    tx: Sender<RecorderEvent>,
}

impl ChannelRecorder {
    pub fn new() -> (Self, Receiver<RecorderEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    fn send(&self, event: RecorderEvent) {
        if let Err(err) = self.tx.send(event) {
            trace!(event = ?err.0, "Recorder channel closed, dropping event");
        }
    }
}

impl SessionRecorder for ChannelRecorder {
    fn record_moved(&self, target: TargetId, x: i32, y: i32) {
        self.send(RecorderEvent::Moved { target, x, y });
    }

    fn record_resized(&self, target: TargetId, width: f64, height: f64) {
        self.send(RecorderEvent::Resized { target, width, height });
    }
}
