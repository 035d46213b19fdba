#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamps in seconds.

use vhub_core::entities as e;

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = addresses, treat_none_as_null = true)]
pub struct NewAddress<'a> {
    pub street: Option<&'a str>,
    pub zip: Option<&'a str>,
    pub city: &'a str,
    pub country: &'a str,
    pub state: Option<&'a str>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct AddressEntity {
    pub id: i64,
    pub street: Option<String>,
    pub zip: Option<String>,
    pub city: String,
    pub country: String,
    pub state: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<AddressEntity> for e::Address {
    fn from(from: AddressEntity) -> Self {
        let AddressEntity {
            id,
            street,
            zip,
            city,
            country,
            state,
            created_at,
            updated_at: _,
        } = from;
        Self {
            id: id.into(),
            street,
            zip,
            city,
            country,
            state,
            created_at: e::Timestamp::from_seconds(created_at),
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users, treat_none_as_null = true)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub email_confirmed: bool,
    pub password: &'a str,
    pub photo_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub email: String,
    pub email_confirmed: bool,
    pub password: String,
    pub photo_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl UserEntity {
    pub fn into_user(self, roles: Vec<e::Role>) -> e::User {
        let UserEntity {
            id,
            email,
            email_confirmed,
            password,
            photo_id,
            created_at,
            updated_at: _,
        } = self;
        e::User {
            id: id.into(),
            email: e::EmailAddress::new_unchecked(email),
            email_confirmed,
            password: e::Password::from_hash(password),
            roles,
            photo: photo_id.map(Into::into),
            created_at: e::Timestamp::from_seconds(created_at),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = users_roles)]
pub struct NewUserRole {
    pub user_id: i64,
    pub role_id: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = main_organizations, treat_none_as_null = true)]
pub struct NewMainOrganization<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct MainOrganizationEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<MainOrganizationEntity> for e::MainOrganization {
    fn from(from: MainOrganizationEntity) -> Self {
        let MainOrganizationEntity {
            id,
            name,
            description,
            created_at,
            updated_at: _,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            created_at: e::Timestamp::from_seconds(created_at),
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = subsidiaries, treat_none_as_null = true)]
pub struct NewSubsidiary<'a> {
    pub name: &'a str,
    pub main_organization_id: Option<i64>,
    pub address_id: Option<i64>,
    pub photo_set_id: Option<i64>,
    pub news_set_id: Option<i64>,
    pub comment_set_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct SubsidiaryEntity {
    pub id: i64,
    pub name: String,
    pub main_organization_id: Option<i64>,
    pub address_id: Option<i64>,
    pub photo_set_id: Option<i64>,
    pub news_set_id: Option<i64>,
    pub comment_set_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl SubsidiaryEntity {
    pub fn into_subsidiary(self, missions: Vec<e::Id>) -> e::Subsidiary {
        let SubsidiaryEntity {
            id,
            name,
            main_organization_id,
            address_id,
            photo_set_id,
            news_set_id,
            comment_set_id,
            created_at,
            updated_at: _,
        } = self;
        e::Subsidiary {
            id: id.into(),
            name,
            main_organization: main_organization_id.map(Into::into),
            address: address_id.map(Into::into),
            photo_set: photo_set_id.map(Into::into),
            news_set: news_set_id.map(Into::into),
            comment_set: comment_set_id.map(Into::into),
            missions,
            created_at: e::Timestamp::from_seconds(created_at),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = subsidiaries_users)]
pub struct NewSubsidiaryUser {
    pub subsidiary_id: i64,
    pub user_id: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = missions, treat_none_as_null = true)]
pub struct NewMission<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct MissionEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<MissionEntity> for e::Mission {
    fn from(from: MissionEntity) -> Self {
        let MissionEntity {
            id,
            name,
            description,
            created_at,
            updated_at: _,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            created_at: e::Timestamp::from_seconds(created_at),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = subsidiaries_missions)]
pub struct NewSubsidiaryMission {
    pub subsidiary_id: i64,
    pub mission_id: i64,
}

#[derive(Insertable)]
#[diesel(table_name = event_types)]
pub struct NewEventType<'a> {
    pub name: &'a str,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct EventTypeEntity {
    pub id: i64,
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<EventTypeEntity> for e::EventType {
    fn from(from: EventTypeEntity) -> Self {
        let EventTypeEntity {
            id,
            name,
            created_at: _,
            updated_at: _,
        } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = events, treat_none_as_null = true)]
pub struct NewEvent<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub starts_at: i64,
    pub ends_at: Option<i64>,
    pub address_id: Option<i64>,
    pub subsidiary_id: i64,
    pub event_type_id: Option<i64>,
    pub created_by: Option<i64>,
    pub photo_set_id: Option<i64>,
    pub news_set_id: Option<i64>,
    pub comment_set_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct EventEntity {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub starts_at: i64,
    pub ends_at: Option<i64>,
    pub address_id: Option<i64>,
    pub subsidiary_id: i64,
    pub event_type_id: Option<i64>,
    pub created_by: Option<i64>,
    pub photo_set_id: Option<i64>,
    pub news_set_id: Option<i64>,
    pub comment_set_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<EventEntity> for e::Event {
    fn from(from: EventEntity) -> Self {
        let EventEntity {
            id,
            title,
            description,
            starts_at,
            ends_at,
            address_id,
            subsidiary_id,
            event_type_id,
            created_by,
            photo_set_id,
            news_set_id,
            comment_set_id,
            created_at,
            updated_at: _,
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            starts_at: e::Timestamp::from_seconds(starts_at),
            ends_at: ends_at.map(e::Timestamp::from_seconds),
            address: address_id.map(Into::into),
            subsidiary: subsidiary_id.into(),
            event_type: event_type_id.map(Into::into),
            created_by: created_by.map(Into::into),
            photo_set: photo_set_id.map(Into::into),
            news_set: news_set_id.map(Into::into),
            comment_set: comment_set_id.map(Into::into),
            created_at: e::Timestamp::from_seconds(created_at),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = events_users)]
pub struct NewEventRegistration {
    pub event_id: i64,
    pub user_id: i64,
    pub registered_at: i64,
    pub registration_number: i64,
}

#[derive(Queryable)]
pub struct EventRegistrationEntity {
    pub event_id: i64,
    pub user_id: i64,
    pub registered_at: i64,
    pub registration_number: i64,
}

impl From<EventRegistrationEntity> for e::EventRegistration {
    fn from(from: EventRegistrationEntity) -> Self {
        let EventRegistrationEntity {
            event_id,
            user_id,
            registered_at,
            registration_number,
        } = from;
        Self {
            event: event_id.into(),
            user: user_id.into(),
            registered_at: e::Timestamp::from_seconds(registered_at),
            registration_number,
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = photos, treat_none_as_null = true)]
pub struct NewPhoto<'a> {
    pub url: &'a str,
    pub caption: Option<&'a str>,
    pub photo_set_id: Option<i64>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct PhotoEntity {
    pub id: i64,
    pub url: String,
    pub caption: Option<String>,
    pub photo_set_id: Option<i64>,
    pub created_at: i64,
}

impl From<PhotoEntity> for e::Photo {
    fn from(from: PhotoEntity) -> Self {
        let PhotoEntity {
            id,
            url,
            caption,
            photo_set_id,
            created_at,
        } = from;
        Self {
            id: id.into(),
            url,
            caption,
            photo_set: photo_set_id.map(Into::into),
            created_at: e::Timestamp::from_seconds(created_at),
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = news, treat_none_as_null = true)]
pub struct NewNews<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub created_by: Option<i64>,
    pub news_set_id: Option<i64>,
    pub photo_set_id: Option<i64>,
    pub comment_set_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct NewsEntity {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_by: Option<i64>,
    pub news_set_id: Option<i64>,
    pub photo_set_id: Option<i64>,
    pub comment_set_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<NewsEntity> for e::News {
    fn from(from: NewsEntity) -> Self {
        let NewsEntity {
            id,
            title,
            body,
            created_by,
            news_set_id,
            photo_set_id,
            comment_set_id,
            created_at,
            updated_at: _,
        } = from;
        Self {
            id: id.into(),
            title,
            body,
            created_by: created_by.map(Into::into),
            news_set: news_set_id.map(Into::into),
            photo_set: photo_set_id.map(Into::into),
            comment_set: comment_set_id.map(Into::into),
            created_at: e::Timestamp::from_seconds(created_at),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment<'a> {
    pub comment_set_id: i64,
    pub created_by: Option<i64>,
    pub created_at: i64,
    pub text: &'a str,
}

#[derive(Queryable)]
pub struct CommentEntity {
    pub id: i64,
    pub comment_set_id: i64,
    pub created_by: Option<i64>,
    pub created_at: i64,
    pub text: String,
}

impl From<CommentEntity> for e::Comment {
    fn from(from: CommentEntity) -> Self {
        let CommentEntity {
            id,
            comment_set_id,
            created_by,
            created_at,
            text,
        } = from;
        Self {
            id: id.into(),
            comment_set: comment_set_id.into(),
            created_by: created_by.map(Into::into),
            created_at: e::Timestamp::from_seconds(created_at),
            text,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = request_sequences)]
pub struct NewRequestSequence<'a> {
    pub code: &'a str,
    pub value: i64,
}
