use super::*;
use crate::web::guards::Version;

#[get("/server/version")]
pub fn get_version(version: &State<Version>) -> &'static str {
    version.0
}
