use super::*;

pub fn create_subsidiary(
    connections: &sqlite::Connections,
    new_subsidiary: usecases::NewSubsidiary,
) -> Result<Subsidiary> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::create_subsidiary(conn, new_subsidiary))?)
}
