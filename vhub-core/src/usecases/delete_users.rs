use super::prelude::*;

/// Delete a batch of user accounts.
///
/// Returns the number of accounts that actually existed and were
/// removed. Join rows (roles, managed subsidiaries, event
/// registrations) are removed by the cascading foreign keys.
pub fn delete_users<R: UserRepo>(repo: &R, ids: &[Id]) -> Result<usize> {
    if ids.is_empty() {
        return Err(Error::EmptyIdList);
    }
    Ok(repo.delete_users(ids)?)
}
