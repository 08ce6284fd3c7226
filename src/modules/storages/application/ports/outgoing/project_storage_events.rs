use crate::modules::storages::application::domain::events::ProjectStorageEvent;

pub trait ProjectStorageEventPublisher: Send + Sync {
    fn publish(&self, event: ProjectStorageEvent);
}
