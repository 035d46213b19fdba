use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub password: String,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let password = u.password.parse::<Password>()?;
    if repo.try_get_user_by_email(&u.email)?.is_some() {
        return Err(Error::UserExists);
    }
    let new_user = User {
        id: Id::default(),
        email: u.email,
        email_confirmed: false,
        password,
        roles: vec![Role::Regular],
        photo: None,
        created_at: Timestamp::now(),
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    let id = repo.create_user(&new_user)?;
    Ok(User { id, ..new_user })
}
