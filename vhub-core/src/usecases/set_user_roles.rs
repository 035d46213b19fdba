use super::prelude::*;
use crate::repositories::Error as RepoError;

pub fn set_user_roles<R: UserRepo>(
    repo: &R,
    account_email: &EmailAddress,
    user_id: Id,
    roles: &[Role],
) -> Result<()> {
    log::info!("Changing roles to {roles:?} for user {user_id}");
    let account = repo
        .try_get_user_by_email(account_email)?
        .ok_or(Error::UserDoesNotExist)?;
    let user = repo.get_user(user_id).map_err(|err| match err {
        RepoError::NotFound => Error::UserDoesNotExist,
        err => Error::Repo(err),
    })?;
    let new_top_role = roles.iter().copied().max().unwrap_or_default();
    // Roles can only be assigned below the own role and only to users
    // below the own role.
    if account.effective_role() > user.effective_role()
        && new_top_role < account.effective_role()
    {
        repo.set_user_roles(user_id, roles)?;
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn add_user(db: &MockDb, email: &str, roles: Vec<Role>) -> Id {
        let user = User::build().email(email).password("secret").roles(roles).finish();
        db.create_user(&user).unwrap()
    }

    #[test]
    fn admin_can_promote_regular_user_to_manager() {
        let db = MockDb::default();
        let admin = "admin@example.com".parse().unwrap();
        add_user(&db, "admin@example.com", vec![Role::Admin]);
        let user_id = add_user(&db, "user@example.com", vec![Role::Regular]);
        assert!(set_user_roles(&db, &admin, user_id, &[Role::Manager]).is_ok());
        assert_eq!(
            db.get_user(user_id).unwrap().effective_role(),
            Role::Manager
        );
    }

    #[test]
    fn admin_cannot_promote_to_admin() {
        let db = MockDb::default();
        let admin = "admin@example.com".parse().unwrap();
        add_user(&db, "admin@example.com", vec![Role::Admin]);
        let user_id = add_user(&db, "user@example.com", vec![Role::Regular]);
        assert!(matches!(
            set_user_roles(&db, &admin, user_id, &[Role::Admin]),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn manager_cannot_block_manager() {
        let db = MockDb::default();
        let manager = "manager@example.com".parse().unwrap();
        add_user(&db, "manager@example.com", vec![Role::Manager]);
        let other_id = add_user(&db, "other@example.com", vec![Role::Manager]);
        assert!(matches!(
            set_user_roles(&db, &manager, other_id, &[Role::Blocked]),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn admin_can_block_user() {
        let db = MockDb::default();
        let admin = "admin@example.com".parse().unwrap();
        add_user(&db, "admin@example.com", vec![Role::Admin]);
        let user_id = add_user(&db, "user@example.com", vec![Role::Regular]);
        assert!(set_user_roles(&db, &admin, user_id, &[Role::Blocked]).is_ok());
        assert_eq!(
            db.get_user(user_id).unwrap().effective_role(),
            Role::Blocked
        );
    }
}
