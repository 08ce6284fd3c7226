use tokio::sync::broadcast;

use crate::modules::storages::application::domain::events::ProjectStorageEvent;
use crate::modules::storages::application::ports::outgoing::ProjectStorageEventPublisher;

/// In-process fan-out of project storage lifecycle events.
#[derive(Clone)]
pub struct ProjectStorageEventBus {
    sender: broadcast::Sender<ProjectStorageEvent>,
}

impl ProjectStorageEventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ProjectStorageEvent> {
        self.sender.subscribe()
    }
}

impl ProjectStorageEventPublisher for ProjectStorageEventBus {
    fn publish(&self, event: ProjectStorageEvent) {
        let kind = event.kind.as_str();
        let project_storage_id = event.project_storage_id;

        match self.sender.send(event) {
            Ok(receivers) => tracing::debug!(
                %project_storage_id,
                receivers,
                "Published {}",
                kind
            ),
            // No subscriber is not an error for the publisher
            Err(_) => tracing::debug!(%project_storage_id, "No subscribers for {}", kind),
        }
    }
}

/// Logs every lifecycle event until the bus is closed.
#[cfg(not(tarpaulin_include))]
pub async fn run_audit_logger(mut receiver: broadcast::Receiver<ProjectStorageEvent>) {
    loop {
        match receiver.recv().await {
            Ok(event) => tracing::info!(
                project_storage_id = %event.project_storage_id,
                project_id = %event.project_id,
                storage_id = %event.storage_id,
                occurred_at = %event.occurred_at,
                "{}",
                event.kind.as_str()
            ),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!("Audit logger lagged behind, {} events skipped", skipped)
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
