use super::*;
use crate::adapters::json::from_json;

#[get("/event/get")]
pub fn get_events(db: sqlite::Connections, auth: Auth) -> Result<Vec<json::Event>> {
    let db = db.shared()?;
    let visibility = auth.visibility(&db)?;
    let events = usecases::list_events(&db, &visibility)?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}

#[get("/event/get/<id>")]
pub fn get_event(db: sqlite::Connections, id: i64) -> Result<json::Event> {
    let mut event = usecases::get_event(&db.shared()?, id.into())?;
    // The author is not exposed to anonymous readers.
    event.created_by = None;
    Ok(Json(event.into()))
}

#[post("/event/add", format = "application/json", data = "<ev>")]
pub fn post_event_add(
    connections: sqlite::Connections,
    notify: &State<Notify>,
    auth: Auth,
    ev: JsonResult<json::NewEvent>,
) -> CreatedResult<json::Event> {
    let (visibility, created_by) = {
        let db = connections.shared()?;
        let user = auth.user_with_min_role(&db, Role::Manager)?;
        let visibility = usecases::visibility_of(&db, Some(&user))?;
        (visibility, Some(user.id))
    };
    let new_event = from_json::new_event(ev?.into_inner(), created_by);
    let event = flows::create_event(&connections, &*notify.0, &visibility, new_event)?;
    let location = format!("/api/event/get/{}", event.id);
    Ok(Created::new(location).body(Json(event.into())))
}

#[post("/event/edit/<id>", format = "application/json", data = "<ev>")]
pub fn post_event_edit(
    connections: sqlite::Connections,
    auth: Auth,
    id: i64,
    ev: JsonResult<json::NewEvent>,
) -> Result<()> {
    let visibility = {
        let db = connections.shared()?;
        let user = auth.user_with_min_role(&db, Role::Manager)?;
        usecases::visibility_of(&db, Some(&user))?
    };
    let new_event = from_json::new_event(ev?.into_inner(), None);
    flows::update_event(&connections, &visibility, id.into(), new_event)?;
    Ok(Json(()))
}

#[post("/event/delete", format = "application/json", data = "<ids>")]
pub fn post_event_delete(
    connections: sqlite::Connections,
    auth: Auth,
    ids: JsonResult<json::Ids>,
) -> Result<json::ResultCount> {
    let ids = from_json::ids(ids?.into_inner());
    let visibility = {
        let db = connections.shared()?;
        let user = auth.user_with_min_role(&db, Role::Manager)?;
        usecases::visibility_of(&db, Some(&user))?
    };
    let count = flows::delete_events(&connections, &visibility, &ids)?;
    Ok(Json(json::ResultCount {
        count: count as u64,
    }))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn create_event_for_unknown_subsidiary() {
        let (client, db) = setup();
        register_user_with_roles(&db, "admin@example.com", "secret", &[Role::Admin]);
        login(&client, "admin@example.com", "secret");
        let res = client
            .post("/api/event/add")
            .header(ContentType::JSON)
            .body(r#"{"title":"Cleanup Day","starts_at":10000,"subsidiary_id":4711}"#)
            .dispatch();
        assert_eq!(res.status(), Status::NotFound);
    }

    #[test]
    fn create_event_with_end_before_start() {
        let (client, db) = setup();
        register_user_with_roles(&db, "admin@example.com", "secret", &[Role::Admin]);
        login(&client, "admin@example.com", "secret");
        let subsidiary_id = create_subsidiary(&client, "Branch");
        let res = client
            .post("/api/event/add")
            .header(ContentType::JSON)
            .body(format!(
                r#"{{"title":"Cleanup Day","starts_at":10000,"ends_at":5000,"subsidiary_id":{subsidiary_id}}}"#
            ))
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
    }

    #[test]
    fn read_event_without_login() {
        let (client, db) = setup();
        register_user_with_roles(&db, "admin@example.com", "secret", &[Role::Admin]);
        login(&client, "admin@example.com", "secret");
        let subsidiary_id = create_subsidiary(&client, "Branch");
        let event_id = create_event(&client, "Cleanup Day", subsidiary_id);
        logout(&client);

        let res = client
            .get(format!("/api/event/get/{event_id}"))
            .header(ContentType::JSON)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let event: json::Event = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(event.title, "Cleanup Day");
        // Author details are stripped for anonymous readers.
        assert!(event.created_by.is_none());
    }

    #[test]
    fn manager_cannot_create_event_for_foreign_subsidiary() {
        let (client, db) = setup();
        register_user_with_roles(&db, "admin@example.com", "secret", &[Role::Admin]);
        register_user_with_roles(&db, "manager@example.com", "secret", &[Role::Manager]);
        login(&client, "admin@example.com", "secret");
        let subsidiary_id = create_subsidiary(&client, "Branch");

        login(&client, "manager@example.com", "secret");
        let res = client
            .post("/api/event/add")
            .header(ContentType::JSON)
            .body(format!(
                r#"{{"title":"Cleanup Day","starts_at":10000,"subsidiary_id":{subsidiary_id}}}"#
            ))
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);
    }
}
