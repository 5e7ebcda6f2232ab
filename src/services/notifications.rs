//! Fan-out of completion events to connected clients

use tokio::sync::broadcast;

use crate::models::CompletionEvent;

/// Broadcast handle for completion notifications. Slow subscribers lose
/// the oldest events rather than blocking publishers.
#[derive(Clone)]
pub struct Notifier {
    sender: broadcast::Sender<CompletionEvent>,
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn publish(&self, event: CompletionEvent) {
        match self.sender.send(event) {
            Ok(receivers) => tracing::debug!(receivers, "Completion notification sent"),
            Err(_) => tracing::debug!("Completion notification dropped, no subscribers"),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CompletionEvent> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_event() {
        let notifier = Notifier::new(4);
        let mut rx = notifier.subscribe();
        notifier.publish(CompletionEvent::new("job_1", "Benchy", None));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.job_id, "job_1");
        assert_eq!(event.message, "Benchy has finished printing!");
    }

    #[test]
    fn test_publish_without_subscribers() {
        let notifier = Notifier::new(0);
        notifier.publish(CompletionEvent::new("job_1", "Benchy", None));
    }
}
