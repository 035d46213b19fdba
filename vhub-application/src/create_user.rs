use super::*;

pub fn register_user(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    new_user: usecases::NewUser,
) -> Result<User> {
    let user = connections
        .exclusive()?
        .transaction(|conn| usecases::create_new_user(conn, new_user))?;
    notify.notify(NotificationEvent::UserRegistered { user: &user });
    Ok(user)
}
