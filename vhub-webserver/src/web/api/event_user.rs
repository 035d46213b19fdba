use super::*;

#[get("/event-user/get?<event>")]
pub fn get_registrations(
    db: sqlite::Connections,
    auth: Auth,
    event: i64,
) -> Result<Vec<json::EventRegistration>> {
    let db = db.shared()?;
    auth.user_with_min_role(&db, Role::Manager)?;
    let registrations = db.registrations_of_event(event.into())?;
    Ok(Json(registrations.into_iter().map(Into::into).collect()))
}

#[post("/event-user/register", format = "application/json", data = "<data>")]
pub fn post_register(
    connections: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    data: JsonResult<json::EventUser>,
) -> CreatedResult<json::EventRegistration> {
    let json::EventUser { event_id, user_id } = data?.into_inner();
    {
        let db = connections.shared()?;
        let user = usecases::authorize_user_by_email(&db, account.email(), Role::Regular)?;
        // Members register themselves, managers may register others.
        if user.id.value() != user_id {
            usecases::authorize_role(&user, Role::Manager)?;
        }
    }
    let registration =
        flows::register_for_event(&connections, &*notify.0, event_id.into(), user_id.into())?;
    Ok(Created::new("/api/event-user/register".to_string()).body(Json(registration.into())))
}

#[post("/event-user/unregister", format = "application/json", data = "<data>")]
pub fn post_unregister(
    connections: sqlite::Connections,
    account: Account,
    data: JsonResult<json::EventUser>,
) -> Result<()> {
    let json::EventUser { event_id, user_id } = data?.into_inner();
    {
        let db = connections.shared()?;
        let user = usecases::authorize_user_by_email(&db, account.email(), Role::Regular)?;
        if user.id.value() != user_id {
            usecases::authorize_role(&user, Role::Manager)?;
        }
    }
    flows::unregister_from_event(&connections, event_id.into(), user_id.into())?;
    Ok(Json(()))
}
