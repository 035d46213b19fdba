use super::*;

pub fn delete_news(connections: &sqlite::Connections, ids: &[Id]) -> Result<usize> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::delete_news(conn, ids))?)
}
