use super::*;
use crate::adapters::json::from_json;

#[get("/event-type/get")]
pub fn get_event_types(db: sqlite::Connections, auth: Auth) -> Result<Vec<json::EventType>> {
    let db = db.shared()?;
    let visibility = auth.visibility(&db)?;
    let event_types = usecases::list_event_types(&db, &visibility)?;
    Ok(Json(event_types.into_iter().map(Into::into).collect()))
}

#[post("/event-type/add", format = "application/json", data = "<event_type>")]
pub fn post_event_type_add(
    db: sqlite::Connections,
    auth: Auth,
    event_type: JsonResult<json::NewEventType>,
) -> CreatedResult<json::EventType> {
    let db = db.exclusive()?;
    auth.user_with_min_role(&db, Role::Manager)?;
    let event_type =
        usecases::create_event_type(&db, from_json::new_event_type(event_type?.into_inner()))?;
    Ok(Created::new("/api/event-type/get".to_string()).body(Json(event_type.into())))
}

#[post("/event-type/edit/<id>", format = "application/json", data = "<event_type>")]
pub fn post_event_type_edit(
    db: sqlite::Connections,
    auth: Auth,
    id: i64,
    event_type: JsonResult<json::NewEventType>,
) -> Result<()> {
    let db = db.exclusive()?;
    auth.user_with_min_role(&db, Role::Manager)?;
    usecases::update_event_type(
        &db,
        id.into(),
        from_json::new_event_type(event_type?.into_inner()),
    )?;
    Ok(Json(()))
}

#[post("/event-type/delete", format = "application/json", data = "<ids>")]
pub fn post_event_type_delete(
    db: sqlite::Connections,
    auth: Auth,
    ids: JsonResult<json::Ids>,
) -> Result<json::ResultCount> {
    let ids = from_json::ids(ids?.into_inner());
    let db = db.exclusive()?;
    auth.user_with_min_role(&db, Role::Admin)?;
    let count = usecases::delete_event_types(&db, &ids)?;
    Ok(Json(json::ResultCount {
        count: count as u64,
    }))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn duplicate_event_type_name() {
        let (client, db) = setup();
        register_user_with_roles(&db, "manager@example.com", "secret", &[Role::Manager]);
        login(&client, "manager@example.com", "secret");
        let res = client
            .post("/api/event-type/add")
            .header(ContentType::JSON)
            .body(r#"{"name":"Workshop"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Created);
        let res = client
            .post("/api/event-type/add")
            .header(ContentType::JSON)
            .body(r#"{"name":"Workshop"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
        let err: json::Error = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert!(err.message.contains("event type"));
    }
}
