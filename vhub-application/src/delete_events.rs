use super::*;
use usecases::Visibility;

pub fn delete_events(
    connections: &sqlite::Connections,
    visibility: &Visibility,
    ids: &[Id],
) -> Result<usize> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::delete_events(conn, visibility, ids))?)
}
