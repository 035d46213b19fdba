use super::*;

pub fn set_user_roles(
    connections: &sqlite::Connections,
    account_email: &EmailAddress,
    user_id: Id,
    roles: &[Role],
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::set_user_roles(conn, account_email, user_id, roles).map_err(|err| {
            warn!("Failed to change roles for user {user_id}: {err}");
            err
        })
    })?)
}
