use super::prelude::*;

pub fn authorize_role(user: &User, min_required_role: Role) -> Result<()> {
    if user.effective_role() < min_required_role {
        return Err(Error::Forbidden);
    }
    Ok(())
}

pub fn authorize_user_by_email<R>(
    repo: &R,
    email: &EmailAddress,
    min_required_role: Role,
) -> Result<User>
where
    R: UserRepo,
{
    if let Some(user) = repo.try_get_user_by_email(email)? {
        return authorize_role(&user, min_required_role).map(|()| user);
    }
    Err(Error::Unauthorized)
}

/// What part of the organizational data a request may see.
///
/// Managers are restricted to the subsidiaries they manage, everyone
/// else sees the unfiltered directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility {
    All,
    Subsidiaries(Vec<Id>),
}

impl Visibility {
    pub fn contains_subsidiary(&self, id: Id) -> bool {
        match self {
            Self::All => true,
            Self::Subsidiaries(ids) => ids.contains(&id),
        }
    }
}

pub fn visibility_of<R>(repo: &R, user: Option<&User>) -> Result<Visibility>
where
    R: SubsidiaryRepo,
{
    let Some(user) = user else {
        return Ok(Visibility::All);
    };
    match user.effective_role() {
        Role::Blocked => Err(Error::Forbidden),
        Role::Manager => Ok(Visibility::Subsidiaries(
            repo.subsidiary_ids_managed_by(user.id)?,
        )),
        Role::Regular | Role::Admin => Ok(Visibility::All),
    }
}

pub fn ensure_subsidiary_in_scope(visibility: &Visibility, subsidiary_id: Id) -> Result<()> {
    if visibility.contains_subsidiary(subsidiary_id) {
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}
