use super::prelude::*;

pub fn confirm_email_address<R: UserRepo>(repo: &R, email: &EmailAddress) -> Result<()> {
    let mut user = repo
        .try_get_user_by_email(email)?
        .ok_or(Error::UserDoesNotExist)?;
    if !user.email_confirmed {
        user.email_confirmed = true;
        repo.update_user(&user)?;
    }
    Ok(())
}
