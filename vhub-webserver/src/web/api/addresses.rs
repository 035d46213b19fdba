use super::*;
use crate::adapters::json::from_json;

#[get("/address/get")]
pub fn get_addresses(db: sqlite::Connections, auth: Auth) -> Result<Vec<json::Address>> {
    let db = db.shared()?;
    let visibility = auth.visibility(&db)?;
    let addresses = usecases::list_addresses(&db, &visibility)?;
    Ok(Json(addresses.into_iter().map(Into::into).collect()))
}

#[post("/address/add", format = "application/json", data = "<addr>")]
pub fn post_address_add(
    db: sqlite::Connections,
    auth: Auth,
    addr: JsonResult<json::NewAddress>,
) -> CreatedResult<json::Address> {
    let db = db.exclusive()?;
    auth.user_with_min_role(&db, Role::Manager)?;
    let address = usecases::create_address(&db, from_json::new_address(addr?.into_inner()))?;
    Ok(Created::new("/api/address/get".to_string()).body(Json(address.into())))
}

#[post("/address/edit/<id>", format = "application/json", data = "<addr>")]
pub fn post_address_edit(
    db: sqlite::Connections,
    auth: Auth,
    id: i64,
    addr: JsonResult<json::NewAddress>,
) -> Result<()> {
    let db = db.exclusive()?;
    auth.user_with_min_role(&db, Role::Manager)?;
    usecases::update_address(&db, id.into(), from_json::new_address(addr?.into_inner()))?;
    Ok(Json(()))
}

#[post("/address/delete", format = "application/json", data = "<ids>")]
pub fn post_address_delete(
    db: sqlite::Connections,
    auth: Auth,
    ids: JsonResult<json::Ids>,
) -> Result<json::ResultCount> {
    let ids = from_json::ids(ids?.into_inner());
    let db = db.exclusive()?;
    auth.user_with_min_role(&db, Role::Admin)?;
    let count = usecases::delete_addresses(&db, &ids)?;
    Ok(Json(json::ResultCount {
        count: count as u64,
    }))
}
