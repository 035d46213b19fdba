use std::{fmt::Display, result};

use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, get,
    http::{Cookie, CookieJar, Status},
    post,
    response::{self, status::Created, Responder},
    routes, Route, State,
};
use vhub_boundary::Error as JsonErrorResponse;

use super::guards::*;
use crate::{
    adapters::json,
    core::{prelude::*, usecases},
    web::sqlite,
};
use vhub_application::prelude as flows;

mod addresses;
mod auth;
mod comments;
mod error;
mod event_types;
mod event_user;
pub mod events;
mod missions;
mod news;
mod organizations;
mod photos;
mod subsidiaries;
mod users;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type CreatedResult<T> = result::Result<Created<Json<T>>, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   auth   --- //
        auth::post_login,
        auth::post_logout,
        // ---   users   --- //
        users::get_users,
        users::get_current_user,
        users::post_user_add,
        users::post_user_edit,
        users::post_user_delete,
        users::post_confirm_email,
        users::post_set_roles,
        // ---   addresses   --- //
        addresses::get_addresses,
        addresses::post_address_add,
        addresses::post_address_edit,
        addresses::post_address_delete,
        // ---   organizations   --- //
        organizations::get_organizations,
        organizations::post_organization_add,
        organizations::post_organization_edit,
        organizations::post_organization_delete,
        // ---   subsidiaries   --- //
        subsidiaries::get_subsidiaries,
        subsidiaries::get_subsidiary,
        subsidiaries::post_subsidiary_add,
        subsidiaries::post_subsidiary_edit,
        subsidiaries::post_subsidiary_delete,
        subsidiaries::post_subsidiary_set_managers,
        // ---   missions   --- //
        missions::get_missions,
        missions::post_mission_add,
        missions::post_mission_edit,
        missions::post_mission_delete,
        // ---   event types   --- //
        event_types::get_event_types,
        event_types::post_event_type_add,
        event_types::post_event_type_edit,
        event_types::post_event_type_delete,
        // ---   events   --- //
        events::get_events,
        events::get_event,
        events::post_event_add,
        events::post_event_edit,
        events::post_event_delete,
        // ---   event registration   --- //
        event_user::get_registrations,
        event_user::post_register,
        event_user::post_unregister,
        // ---   news   --- //
        news::get_news,
        news::post_news_add,
        news::post_news_edit,
        news::post_news_delete,
        // ---   comments   --- //
        comments::get_comments,
        comments::post_comment_add,
        comments::post_comment_delete,
        // ---   photos   --- //
        photos::get_photos,
        photos::post_photo_add,
        photos::post_photo_delete,
        // ---   util   --- //
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
