use super::*;
use crate::adapters::json::from_json;

#[get("/mission/get")]
pub fn get_missions(db: sqlite::Connections, auth: Auth) -> Result<Vec<json::Mission>> {
    let db = db.shared()?;
    let visibility = auth.visibility(&db)?;
    let missions = usecases::list_missions(&db, &visibility)?;
    Ok(Json(missions.into_iter().map(Into::into).collect()))
}

#[post("/mission/add", format = "application/json", data = "<mission>")]
pub fn post_mission_add(
    db: sqlite::Connections,
    auth: Auth,
    mission: JsonResult<json::NewMission>,
) -> CreatedResult<json::Mission> {
    let db = db.exclusive()?;
    auth.user_with_min_role(&db, Role::Manager)?;
    let mission = usecases::create_mission(&db, from_json::new_mission(mission?.into_inner()))?;
    Ok(Created::new("/api/mission/get".to_string()).body(Json(mission.into())))
}

#[post("/mission/edit/<id>", format = "application/json", data = "<mission>")]
pub fn post_mission_edit(
    db: sqlite::Connections,
    auth: Auth,
    id: i64,
    mission: JsonResult<json::NewMission>,
) -> Result<()> {
    let db = db.exclusive()?;
    auth.user_with_min_role(&db, Role::Manager)?;
    usecases::update_mission(&db, id.into(), from_json::new_mission(mission?.into_inner()))?;
    Ok(Json(()))
}

#[post("/mission/delete", format = "application/json", data = "<ids>")]
pub fn post_mission_delete(
    db: sqlite::Connections,
    auth: Auth,
    ids: JsonResult<json::Ids>,
) -> Result<json::ResultCount> {
    let ids = from_json::ids(ids?.into_inner());
    let db = db.exclusive()?;
    auth.user_with_min_role(&db, Role::Admin)?;
    let count = usecases::delete_missions(&db, &ids)?;
    Ok(Json(json::ResultCount {
        count: count as u64,
    }))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn duplicate_mission_name() {
        let (client, db) = setup();
        register_user_with_roles(&db, "manager@example.com", "secret", &[Role::Manager]);
        login(&client, "manager@example.com", "secret");
        let res = client
            .post("/api/mission/add")
            .header(ContentType::JSON)
            .body(r#"{"name":"Food Security"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Created);
        let res = client
            .post("/api/mission/add")
            .header(ContentType::JSON)
            .body(r#"{"name":"Food Security"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
        let err: json::Error = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert!(err.message.contains("mission"));
    }
}
