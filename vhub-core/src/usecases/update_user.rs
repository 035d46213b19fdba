use super::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub password: Option<String>,
    pub photo: Option<Id>,
}

/// Update the account of the logged-in user.
pub fn update_current_user<R: UserRepo>(
    repo: &R,
    email: &EmailAddress,
    update: UpdateUser,
) -> Result<()> {
    let mut user = repo
        .try_get_user_by_email(email)?
        .ok_or(Error::UserDoesNotExist)?;
    if let Some(password) = update.password {
        user.password = password.parse::<Password>()?;
    }
    if update.photo.is_some() {
        user.photo = update.photo;
    }
    repo.update_user(&user)?;
    Ok(())
}
