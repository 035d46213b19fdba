use super::*;

pub fn update_subsidiary(
    connections: &sqlite::Connections,
    id: Id,
    new_subsidiary: usecases::NewSubsidiary,
) -> Result<()> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::update_subsidiary(conn, id, new_subsidiary))?)
}

pub fn set_subsidiary_managers(
    connections: &sqlite::Connections,
    id: Id,
    user_ids: &[Id],
) -> Result<()> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::set_subsidiary_managers(conn, id, user_ids))?)
}
