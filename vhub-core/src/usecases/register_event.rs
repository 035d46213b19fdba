use super::prelude::*;
use crate::repositories::Error as RepoError;

/// Sequence code for human-facing registration numbers.
pub const EVENT_REGISTRATION_SEQUENCE: &str = "event-registration";

pub fn register_for_event<R>(repo: &R, event_id: Id, user_id: Id) -> Result<EventRegistration>
where
    R: EventRepo + UserRepo + EventRegistrationRepo + SequenceRepo,
{
    repo.get_event(event_id)?;
    repo.get_user(user_id)?;
    if repo
        .try_get_event_registration(event_id, user_id)?
        .is_some()
    {
        return Err(Error::AlreadyRegistered);
    }
    let registration_number = repo.next_sequence_number(EVENT_REGISTRATION_SEQUENCE)?;
    let registration = EventRegistration {
        event: event_id,
        user: user_id,
        registered_at: Timestamp::now(),
        registration_number,
    };
    match repo.create_event_registration(&registration) {
        Ok(()) => Ok(registration),
        // Concurrent registrations are resolved by the primary key of
        // the join table, not by any application-level coordination.
        Err(RepoError::AlreadyExists) => Err(Error::AlreadyRegistered),
        Err(err) => Err(err.into()),
    }
}

pub fn unregister_from_event<R>(repo: &R, event_id: Id, user_id: Id) -> Result<()>
where
    R: EventRegistrationRepo,
{
    Ok(repo.delete_event_registration(event_id, user_id)?)
}
