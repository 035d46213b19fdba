use super::*;
use usecases::Visibility;

/// Create an event together with its owned photo/news/comment sets
/// in a single transaction.
pub fn create_event(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    visibility: &Visibility,
    new_event: usecases::NewEvent,
) -> Result<Event> {
    let event = connections
        .exclusive()?
        .transaction(|conn| usecases::create_event(conn, visibility, new_event))?;
    notify.notify(NotificationEvent::EventCreated { event: &event });
    Ok(event)
}
