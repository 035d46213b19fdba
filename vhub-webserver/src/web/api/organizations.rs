use super::*;
use crate::adapters::json::from_json;

#[get("/organization/get")]
pub fn get_organizations(
    db: sqlite::Connections,
    auth: Auth,
) -> Result<Vec<json::MainOrganization>> {
    let db = db.shared()?;
    let visibility = auth.visibility(&db)?;
    let orgs = usecases::list_organizations(&db, &visibility)?;
    Ok(Json(orgs.into_iter().map(Into::into).collect()))
}

#[post("/organization/add", format = "application/json", data = "<org>")]
pub fn post_organization_add(
    db: sqlite::Connections,
    auth: Auth,
    org: JsonResult<json::NewMainOrganization>,
) -> CreatedResult<json::MainOrganization> {
    let db = db.exclusive()?;
    auth.user_with_min_role(&db, Role::Admin)?;
    let org = usecases::create_organization(&db, from_json::new_organization(org?.into_inner()))?;
    Ok(Created::new("/api/organization/get".to_string()).body(Json(org.into())))
}

#[post("/organization/edit/<id>", format = "application/json", data = "<org>")]
pub fn post_organization_edit(
    db: sqlite::Connections,
    auth: Auth,
    id: i64,
    org: JsonResult<json::NewMainOrganization>,
) -> Result<()> {
    let db = db.exclusive()?;
    auth.user_with_min_role(&db, Role::Admin)?;
    usecases::update_organization(&db, id.into(), from_json::new_organization(org?.into_inner()))?;
    Ok(Json(()))
}

#[post("/organization/delete", format = "application/json", data = "<ids>")]
pub fn post_organization_delete(
    db: sqlite::Connections,
    auth: Auth,
    ids: JsonResult<json::Ids>,
) -> Result<json::ResultCount> {
    let ids = from_json::ids(ids?.into_inner());
    let db = db.exclusive()?;
    auth.user_with_min_role(&db, Role::Admin)?;
    let count = usecases::delete_organizations(&db, &ids)?;
    Ok(Json(json::ResultCount {
        count: count as u64,
    }))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn duplicate_organization_name() {
        let (client, db) = setup();
        register_user_with_roles(&db, "admin@example.com", "secret", &[Role::Admin]);
        login(&client, "admin@example.com", "secret");
        let res = client
            .post("/api/organization/add")
            .header(ContentType::JSON)
            .body(r#"{"name":"Helping Hands"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Created);
        let res = client
            .post("/api/organization/add")
            .header(ContentType::JSON)
            .body(r#"{"name":"Helping Hands"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
        let err: json::Error = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert!(err.message.contains("organization"));
    }
}
