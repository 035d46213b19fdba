use num_derive::{FromPrimitive, ToPrimitive};

use crate::{email::EmailAddress, id::Id, password::Password, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id              : Id,
    pub email           : EmailAddress,
    pub email_confirmed : bool,
    pub password        : Password,
    pub roles           : Vec<Role>,
    pub photo           : Option<Id>,
    pub created_at      : Timestamp,
}

impl User {
    /// The role that governs what this user may do.
    ///
    /// A blocked user is blocked regardless of any other assigned role.
    /// Without any assignment a user acts as a regular member.
    pub fn effective_role(&self) -> Role {
        if self.roles.contains(&Role::Blocked) {
            return Role::Blocked;
        }
        self.roles.iter().copied().max().unwrap_or(Role::Regular)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, ToPrimitive)]
pub enum Role {
    Blocked = 0,
    Regular = 1,
    Manager = 2,
    Admin   = 3,
}

impl Default for Role {
    fn default() -> Role {
        Role::Regular
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_roles(roles: Vec<Role>) -> User {
        User {
            id: Id::new(1),
            email: EmailAddress::new_unchecked("user@example.com".into()),
            email_confirmed: true,
            password: Password::from_hash("hash".into()),
            roles,
            photo: None,
            created_at: Timestamp::from_seconds(0),
        }
    }

    #[test]
    fn effective_role_is_highest() {
        let u = user_with_roles(vec![Role::Regular, Role::Manager]);
        assert_eq!(u.effective_role(), Role::Manager);
    }

    #[test]
    fn blocked_wins_over_other_roles() {
        let u = user_with_roles(vec![Role::Admin, Role::Blocked]);
        assert_eq!(u.effective_role(), Role::Blocked);
    }

    #[test]
    fn no_roles_means_regular() {
        let u = user_with_roles(vec![]);
        assert_eq!(u.effective_role(), Role::Regular);
    }
}
