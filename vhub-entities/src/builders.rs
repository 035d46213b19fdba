pub use self::{event_builder::*, subsidiary_builder::*, user_builder::*};

pub mod user_builder {

    use crate::{email::*, id::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn confirmed(mut self, confirmed: bool) -> Self {
            self.user.email_confirmed = confirmed;
            self
        }
        pub fn password(mut self, password: &str) -> Self {
            self.user.password = password.parse().unwrap();
            self
        }
        pub fn roles(mut self, roles: Vec<Role>) -> Self {
            self.user.roles = roles;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl User {
        pub fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::default(),
                    email: EmailAddress::new_unchecked("user@example.com".into()),
                    email_confirmed: true,
                    password: Password::from_hash(String::new()),
                    roles: vec![Role::Regular],
                    photo: None,
                    created_at: Timestamp::from_seconds(0),
                },
            }
        }
    }
}

pub mod subsidiary_builder {

    use crate::{id::*, subsidiary::*, time::*};

    #[derive(Debug)]
    pub struct SubsidiaryBuild {
        subsidiary: Subsidiary,
    }

    impl SubsidiaryBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.subsidiary.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.subsidiary.name = name.into();
            self
        }
        pub fn main_organization(mut self, id: Option<i64>) -> Self {
            self.subsidiary.main_organization = id.map(Into::into);
            self
        }
        pub fn address(mut self, id: Option<i64>) -> Self {
            self.subsidiary.address = id.map(Into::into);
            self
        }
        pub fn missions(mut self, ids: Vec<i64>) -> Self {
            self.subsidiary.missions = ids.into_iter().map(Into::into).collect();
            self
        }
        pub fn finish(self) -> Subsidiary {
            self.subsidiary
        }
    }

    impl Subsidiary {
        pub fn build() -> SubsidiaryBuild {
            SubsidiaryBuild {
                subsidiary: Subsidiary {
                    id: Id::default(),
                    name: "subsidiary".into(),
                    main_organization: None,
                    address: None,
                    photo_set: None,
                    news_set: None,
                    comment_set: None,
                    missions: vec![],
                    created_at: Timestamp::from_seconds(0),
                },
            }
        }
    }
}

pub mod event_builder {

    use crate::{event::*, id::*, time::*};

    #[derive(Debug)]
    pub struct EventBuild {
        event: Event,
    }

    impl EventBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.event.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.event.title = title.into();
            self
        }
        pub fn starts_at(mut self, ts: i64) -> Self {
            self.event.starts_at = Timestamp::from_seconds(ts);
            self
        }
        pub fn subsidiary(mut self, id: i64) -> Self {
            self.event.subsidiary = id.into();
            self
        }
        pub fn event_type(mut self, id: Option<i64>) -> Self {
            self.event.event_type = id.map(Into::into);
            self
        }
        pub fn created_by(mut self, id: Option<i64>) -> Self {
            self.event.created_by = id.map(Into::into);
            self
        }
        pub fn finish(self) -> Event {
            self.event
        }
    }

    impl Event {
        pub fn build() -> EventBuild {
            EventBuild {
                event: Event {
                    id: Id::default(),
                    title: "event".into(),
                    description: None,
                    starts_at: Timestamp::from_seconds(0),
                    ends_at: None,
                    address: None,
                    subsidiary: Id::default(),
                    event_type: None,
                    created_by: None,
                    photo_set: None,
                    news_set: None,
                    comment_set: None,
                    created_at: Timestamp::from_seconds(0),
                },
            }
        }
    }
}
