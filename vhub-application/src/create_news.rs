use super::*;

/// Create a news article together with its owned photo and comment
/// sets in a single transaction.
pub fn create_news(
    connections: &sqlite::Connections,
    new_news: usecases::NewNews,
) -> Result<News> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::create_news(conn, new_news))?)
}
