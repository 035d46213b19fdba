use super::*;
use usecases::Visibility;

pub fn update_event(
    connections: &sqlite::Connections,
    visibility: &Visibility,
    id: Id,
    new_event: usecases::NewEvent,
) -> Result<()> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::update_event(conn, visibility, id, new_event))?)
}
