use super::*;
use crate::adapters::json::from_json;

#[get("/subsidiary/get")]
pub fn get_subsidiaries(db: sqlite::Connections, auth: Auth) -> Result<Vec<json::Subsidiary>> {
    let db = db.shared()?;
    let visibility = auth.visibility(&db)?;
    let subsidiaries = usecases::list_subsidiaries(&db, &visibility)?;
    Ok(Json(subsidiaries.into_iter().map(Into::into).collect()))
}

#[get("/subsidiary/get/<id>")]
pub fn get_subsidiary(db: sqlite::Connections, id: i64) -> Result<json::Subsidiary> {
    let subsidiary = db.shared()?.get_subsidiary(id.into())?;
    Ok(Json(subsidiary.into()))
}

#[post("/subsidiary/add", format = "application/json", data = "<subsidiary>")]
pub fn post_subsidiary_add(
    connections: sqlite::Connections,
    auth: Auth,
    subsidiary: JsonResult<json::NewSubsidiary>,
) -> CreatedResult<json::Subsidiary> {
    {
        let db = connections.shared()?;
        auth.user_with_min_role(&db, Role::Admin)?;
    }
    let subsidiary = flows::create_subsidiary(
        &connections,
        from_json::new_subsidiary(subsidiary?.into_inner()),
    )?;
    let location = format!("/api/subsidiary/get/{}", subsidiary.id);
    Ok(Created::new(location).body(Json(subsidiary.into())))
}

#[post("/subsidiary/edit/<id>", format = "application/json", data = "<subsidiary>")]
pub fn post_subsidiary_edit(
    connections: sqlite::Connections,
    auth: Auth,
    id: i64,
    subsidiary: JsonResult<json::NewSubsidiary>,
) -> Result<()> {
    {
        let db = connections.shared()?;
        let user = auth.user_with_min_role(&db, Role::Manager)?;
        let visibility = usecases::visibility_of(&db, Some(&user))?;
        usecases::ensure_subsidiary_in_scope(&visibility, id.into())?;
    }
    flows::update_subsidiary(
        &connections,
        id.into(),
        from_json::new_subsidiary(subsidiary?.into_inner()),
    )?;
    Ok(Json(()))
}

#[post("/subsidiary/delete", format = "application/json", data = "<ids>")]
pub fn post_subsidiary_delete(
    connections: sqlite::Connections,
    auth: Auth,
    ids: JsonResult<json::Ids>,
) -> Result<json::ResultCount> {
    let ids = from_json::ids(ids?.into_inner());
    {
        let db = connections.shared()?;
        auth.user_with_min_role(&db, Role::Admin)?;
    }
    let count = flows::delete_subsidiaries(&connections, &ids)?;
    Ok(Json(json::ResultCount {
        count: count as u64,
    }))
}

#[post("/subsidiary/set-managers", format = "application/json", data = "<data>")]
pub fn post_subsidiary_set_managers(
    connections: sqlite::Connections,
    auth: Auth,
    data: JsonResult<json::SetSubsidiaryManagers>,
) -> Result<()> {
    let json::SetSubsidiaryManagers {
        subsidiary_id,
        user_ids,
    } = data?.into_inner();
    {
        let db = connections.shared()?;
        auth.user_with_min_role(&db, Role::Admin)?;
    }
    let user_ids: Vec<_> = user_ids.into_iter().map(Into::into).collect();
    flows::set_subsidiary_managers(&connections, subsidiary_id.into(), &user_ids)?;
    Ok(Json(()))
}
