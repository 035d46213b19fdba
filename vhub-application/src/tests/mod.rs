pub mod prelude {

    pub use vhub_core::{
        db::*,
        entities::*,
        gateways::notify::{NotificationEvent, NotificationGateway},
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct DummyNotifyGW;

    impl NotificationGateway for DummyNotifyGW {
        fn notify(&self, _: NotificationEvent) {}
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub notify: DummyNotifyGW,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            vhub_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap());
            Self {
                db_connections,
                notify: DummyNotifyGW,
            }
        }

        pub fn create_user(&self, new_user: usecases::NewUser, role: Option<Role>) -> Id {
            let mut user =
                flows::register_user(&self.db_connections, &self.notify, new_user).unwrap();
            let db = self.db_connections.exclusive().unwrap();
            // Confirm the email address so that the account can log in.
            user.email_confirmed = true;
            db.update_user(&user).unwrap();
            if let Some(role) = role {
                db.set_user_roles(user.id, &[role]).unwrap();
            }
            user.id
        }

        pub fn create_event(&self, title: &str) -> Id {
            let subsidiary = flows::create_subsidiary(
                &self.db_connections,
                usecases::NewSubsidiary {
                    name: format!("{title} Branch"),
                    ..Default::default()
                },
            )
            .unwrap();
            flows::create_event(
                &self.db_connections,
                &self.notify,
                &usecases::Visibility::All,
                usecases::NewEvent {
                    title: title.into(),
                    description: None,
                    starts_at: Timestamp::from_seconds(10_000),
                    ends_at: None,
                    address: None,
                    subsidiary: subsidiary.id,
                    event_type: None,
                    created_by: None,
                },
            )
            .unwrap()
            .id
        }

        pub fn try_get_user(&self, email: &str) -> Option<User> {
            self.db_connections
                .shared()
                .unwrap()
                .try_get_user_by_email(&email.parse().unwrap())
                .unwrap()
        }
    }
}
