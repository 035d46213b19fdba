use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use crate::{
    core::prelude::*,
    web::{self, sqlite},
};
use vhub_core::gateways::notify::{NotificationEvent, NotificationGateway};

pub mod prelude {

    pub const DUMMY_VERSION: &str = "0.0.0-test";

    pub use rocket::{
        http::{ContentType, Cookie, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{
        cookie_from_response, register_user, register_user_with_roles, setup_with_mounts,
        DummyNotifyGW,
    };
}

pub struct DummyNotifyGW;

impl NotificationGateway for DummyNotifyGW {
    fn notify(&self, _: NotificationEvent) {}
}

fn rocket_test_instance(
    mounts: Vec<(&'static str, Vec<Route>)>,
) -> (rocket::Rocket<rocket::Build>, sqlite::Connections) {
    let connections = vhub_db_sqlite::Connections::init(":memory:", 1).unwrap();
    vhub_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
    let db = sqlite::Connections::from(connections);
    let options = web::InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
        version: prelude::DUMMY_VERSION,
    };
    let rocket = web::rocket_instance(options, db.clone(), Box::new(DummyNotifyGW));
    (rocket, db)
}

pub fn setup_with_mounts(
    mounts: Vec<(&'static str, Vec<Route>)>,
) -> (Client, sqlite::Connections) {
    let (rocket, db) = rocket_test_instance(mounts);
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}

pub fn register_user(db: &sqlite::Connections, email: &str, password: &str, confirmed: bool) -> i64 {
    register_user_with(db, email, password, confirmed, &[Role::Regular])
}

pub fn register_user_with_roles(
    db: &sqlite::Connections,
    email: &str,
    password: &str,
    roles: &[Role],
) -> i64 {
    register_user_with(db, email, password, true, roles)
}

fn register_user_with(
    db: &sqlite::Connections,
    email: &str,
    password: &str,
    confirmed: bool,
    roles: &[Role],
) -> i64 {
    let user = User {
        id: Id::default(),
        email: email.parse().unwrap(),
        email_confirmed: confirmed,
        password: password.parse().unwrap(),
        roles: roles.to_vec(),
        photo: None,
        created_at: Timestamp::now(),
    };
    db.exclusive().unwrap().create_user(&user).unwrap().value()
}

pub fn cookie_from_response(response: &rocket::local::blocking::LocalResponse) -> Option<rocket::http::Cookie<'static>> {
    response
        .headers()
        .get("Set-Cookie")
        .filter(|value| value.starts_with(super::guards::COOKIE_EMAIL_KEY))
        .find_map(|value| rocket::http::Cookie::parse_encoded(value.to_string()).ok())
}
