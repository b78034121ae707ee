use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;

use crate::models::WsServerMessage;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Server-wide broadcast channel (chat + presence events)
    pub global_tx: broadcast::Sender<WsServerMessage>,
    /// Number of connected WebSocket clients
    pub online: Arc<AtomicUsize>,
}

impl AppState {
    pub fn new() -> Self {
        let (global_tx, _) = broadcast::channel(1024);
        Self {
            global_tx,
            online: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Record a new connection; returns the updated online count.
    pub fn inc_online(&self) -> usize {
        self.online.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Record a disconnect; returns the updated online count. Saturates at
    /// zero so an unpaired call cannot wrap the counter.
    pub fn dec_online(&self) -> usize {
        let prev = self
            .online
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| {
                Some(n.saturating_sub(1))
            })
            .unwrap_or(0);
        prev.saturating_sub(1)
    }

    pub fn online_count(&self) -> usize {
        self.online.load(Ordering::Relaxed)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_online_counter() {
        let state = AppState::new();
        assert_eq!(state.online_count(), 0);
        assert_eq!(state.inc_online(), 1);
        assert_eq!(state.inc_online(), 2);
        assert_eq!(state.dec_online(), 1);
        assert_eq!(state.online_count(), 1);
    }

    #[test]
    fn test_unpaired_disconnect_does_not_wrap() {
        let state = AppState::new();
        assert_eq!(state.dec_online(), 0);
        assert_eq!(state.online_count(), 0);
        assert_eq!(state.inc_online(), 1);
    }

    #[tokio::test]
    async fn test_global_broadcast_reaches_subscribers() {
        let state = AppState::new();
        let mut rx = state.global_tx.subscribe();
        state
            .global_tx
            .send(WsServerMessage::Presence { online: 3 })
            .unwrap();
        match rx.recv().await.unwrap() {
            WsServerMessage::Presence { online } => assert_eq!(online, 3),
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
