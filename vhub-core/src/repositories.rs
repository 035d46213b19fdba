// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    // The id of the passed entity is ignored and assigned by the database.
    fn create_user(&self, user: &User) -> Result<Id>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn delete_users(&self, ids: &[Id]) -> Result<usize>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;

    fn get_user(&self, id: Id) -> Result<User>;
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;

    fn set_user_roles(&self, id: Id, roles: &[Role]) -> Result<()>;
}

pub trait AddressRepo {
    fn create_address(&self, address: &Address) -> Result<Id>;
    fn update_address(&self, address: &Address) -> Result<()>;
    fn delete_addresses(&self, ids: &[Id]) -> Result<usize>;

    fn get_address(&self, id: Id) -> Result<Address>;
    fn all_addresses(&self) -> Result<Vec<Address>>;

    // Addresses referenced by the given subsidiaries or by their events.
    fn addresses_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> Result<Vec<Address>>;
}

pub trait OrganizationRepo {
    fn create_organization(&self, org: &MainOrganization) -> Result<Id>;
    fn update_organization(&self, org: &MainOrganization) -> Result<()>;
    fn delete_organizations(&self, ids: &[Id]) -> Result<usize>;

    fn get_organization(&self, id: Id) -> Result<MainOrganization>;
    fn try_get_organization_by_name(&self, name: &str) -> Result<Option<MainOrganization>>;
    fn all_organizations(&self) -> Result<Vec<MainOrganization>>;

    fn organizations_of_subsidiaries(&self, subsidiary_ids: &[Id])
        -> Result<Vec<MainOrganization>>;
}

pub trait SubsidiaryRepo {
    fn create_subsidiary(&self, subsidiary: &Subsidiary) -> Result<Id>;
    fn update_subsidiary(&self, subsidiary: &Subsidiary) -> Result<()>;
    fn delete_subsidiaries(&self, ids: &[Id]) -> Result<usize>;

    fn get_subsidiary(&self, id: Id) -> Result<Subsidiary>;
    fn all_subsidiaries(&self) -> Result<Vec<Subsidiary>>;
    fn subsidiaries_by_ids(&self, ids: &[Id]) -> Result<Vec<Subsidiary>>;

    fn subsidiary_ids_managed_by(&self, user_id: Id) -> Result<Vec<Id>>;
    fn set_subsidiary_managers(&self, id: Id, user_ids: &[Id]) -> Result<()>;
    fn set_subsidiary_missions(&self, id: Id, mission_ids: &[Id]) -> Result<()>;
}

pub trait MissionRepo {
    fn create_mission(&self, mission: &Mission) -> Result<Id>;
    fn update_mission(&self, mission: &Mission) -> Result<()>;
    fn delete_missions(&self, ids: &[Id]) -> Result<usize>;

    fn get_mission(&self, id: Id) -> Result<Mission>;
    fn try_get_mission_by_name(&self, name: &str) -> Result<Option<Mission>>;
    fn all_missions(&self) -> Result<Vec<Mission>>;

    fn missions_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> Result<Vec<Mission>>;
}

pub trait EventTypeRepo {
    fn create_event_type(&self, event_type: &EventType) -> Result<Id>;
    fn update_event_type(&self, event_type: &EventType) -> Result<()>;
    fn delete_event_types(&self, ids: &[Id]) -> Result<usize>;

    fn get_event_type(&self, id: Id) -> Result<EventType>;
    fn try_get_event_type_by_name(&self, name: &str) -> Result<Option<EventType>>;
    fn all_event_types(&self) -> Result<Vec<EventType>>;

    // Event types in use by the events of the given subsidiaries.
    fn event_types_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> Result<Vec<EventType>>;
}

pub trait EventRepo {
    fn create_event(&self, event: &Event) -> Result<Id>;
    fn update_event(&self, event: &Event) -> Result<()>;
    fn delete_events(&self, ids: &[Id]) -> Result<usize>;

    fn get_event(&self, id: Id) -> Result<Event>;
    fn all_events_chronologically(&self) -> Result<Vec<Event>>;
    fn events_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> Result<Vec<Event>>;
    fn count_events(&self) -> Result<usize>;
}

pub trait EventRegistrationRepo {
    // Fails with `AlreadyExists` if the pair is already registered.
    fn create_event_registration(&self, registration: &EventRegistration) -> Result<()>;
    // Fails with `NotFound` if the pair is not registered.
    fn delete_event_registration(&self, event_id: Id, user_id: Id) -> Result<()>;

    fn try_get_event_registration(
        &self,
        event_id: Id,
        user_id: Id,
    ) -> Result<Option<EventRegistration>>;
    fn registrations_of_event(&self, event_id: Id) -> Result<Vec<EventRegistration>>;
}

// The one-row aggregator tables that collect the photos, news and
// comments shared by a subsidiary, an event or a news article.
pub trait SetRepo {
    fn create_photo_set(&self) -> Result<Id>;
    fn create_news_set(&self) -> Result<Id>;
    fn create_comment_set(&self) -> Result<Id>;

    fn delete_photo_sets(&self, ids: &[Id]) -> Result<usize>;
    fn delete_news_sets(&self, ids: &[Id]) -> Result<usize>;
    fn delete_comment_sets(&self, ids: &[Id]) -> Result<usize>;
}

pub trait PhotoRepo {
    fn create_photo(&self, photo: &Photo) -> Result<Id>;
    fn delete_photos(&self, ids: &[Id]) -> Result<usize>;

    fn get_photo(&self, id: Id) -> Result<Photo>;
    fn photos_of_set(&self, photo_set_id: Id) -> Result<Vec<Photo>>;
}

pub trait NewsRepo {
    fn create_news(&self, news: &News) -> Result<Id>;
    fn update_news(&self, news: &News) -> Result<()>;
    fn delete_news(&self, ids: &[Id]) -> Result<usize>;

    fn get_news(&self, id: Id) -> Result<News>;
    fn news_of_set(&self, news_set_id: Id) -> Result<Vec<News>>;
    fn all_news(&self) -> Result<Vec<News>>;
}

pub trait CommentRepo {
    fn create_comment(&self, comment: &Comment) -> Result<Id>;
    fn delete_comments(&self, ids: &[Id]) -> Result<usize>;

    fn get_comment(&self, id: Id) -> Result<Comment>;
    fn comments_of_set(&self, comment_set_id: Id) -> Result<Vec<Comment>>;
}

// Monotonic per-code counters, analogous to database sequence objects.
pub trait SequenceRepo {
    fn next_sequence_number(&self, code: &str) -> Result<i64>;
}
