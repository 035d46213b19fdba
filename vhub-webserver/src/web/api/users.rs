use super::*;
use crate::adapters::json::from_json;

#[get("/user/get")]
pub fn get_users(db: sqlite::Connections, auth: Auth) -> Result<Vec<json::User>> {
    let db = db.shared()?;
    auth.user_with_min_role(&db, Role::Admin)?;
    let users = usecases::all_users(&db)?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[get("/user/current")]
pub fn get_current_user(db: sqlite::Connections, account: Account) -> Result<json::User> {
    let user = usecases::get_user(&db.shared()?, account.email(), account.email())?;
    Ok(Json(user.into()))
}

#[post("/user/add", format = "application/json", data = "<new_user>")]
pub fn post_user_add(
    connections: sqlite::Connections,
    notify: &State<Notify>,
    new_user: JsonResult<json::NewUser>,
) -> CreatedResult<json::User> {
    let new_user = from_json::try_new_user(new_user?.into_inner())?;
    let user = flows::register_user(&connections, &*notify.0, new_user)?;
    Ok(Created::new("/api/user/current".to_string()).body(Json(user.into())))
}

#[post("/user/edit", format = "application/json", data = "<update>")]
pub fn post_user_edit(
    db: sqlite::Connections,
    account: Account,
    update: JsonResult<json::UpdateUser>,
) -> Result<()> {
    let update = from_json::update_user(update?.into_inner());
    usecases::update_current_user(&db.exclusive()?, account.email(), update)?;
    Ok(Json(()))
}

#[post("/user/delete", format = "application/json", data = "<ids>")]
pub fn post_user_delete(
    db: sqlite::Connections,
    auth: Auth,
    ids: JsonResult<json::Ids>,
) -> Result<json::ResultCount> {
    let ids = from_json::ids(ids?.into_inner());
    let db = db.exclusive()?;
    auth.user_with_min_role(&db, Role::Admin)?;
    let count = usecases::delete_users(&db, &ids)?;
    Ok(Json(json::ResultCount {
        count: count as u64,
    }))
}

#[post("/user/confirm-email", format = "application/json", data = "<confirm>")]
pub fn post_confirm_email(
    db: sqlite::Connections,
    confirm: JsonResult<json::ConfirmEmailAddress>,
) -> Result<()> {
    let email = confirm?.into_inner().email.parse::<EmailAddress>()?;
    usecases::confirm_email_address(&db.exclusive()?, &email)?;
    Ok(Json(()))
}

#[post("/user/set-roles", format = "application/json", data = "<data>")]
pub fn post_set_roles(
    connections: sqlite::Connections,
    account: Account,
    data: JsonResult<json::SetUserRoles>,
) -> Result<()> {
    let json::SetUserRoles { user_id, roles } = data?.into_inner();
    let roles = from_json::roles(roles);
    flows::set_user_roles(&connections, account.email(), user_id.into(), &roles)?;
    Ok(Json(()))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn current_user() {
        let (client, db) = setup();
        register_user(&db, "user@example.com", "secret", true);

        // Before login
        let res = client
            .get("/api/user/current")
            .header(ContentType::JSON)
            .dispatch();
        assert_eq!(res.status(), Status::Unauthorized);

        login(&client, "user@example.com", "secret");

        // After login
        let res = client
            .get("/api/user/current")
            .header(ContentType::JSON)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body = res.into_string().unwrap();
        let current_user: json::User = serde_json::from_str(&body).unwrap();
        assert_eq!("user@example.com", current_user.email);
        assert!(current_user.email_confirmed);
    }

    #[test]
    fn register_with_duplicate_email() {
        let (client, _db) = setup();
        let res = client
            .post("/api/user/add")
            .header(ContentType::JSON)
            .body(r#"{"email":"new@example.com","password":"secret"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Created);
        let res = client
            .post("/api/user/add")
            .header(ContentType::JSON)
            .body(r#"{"email":"new@example.com","password":"secret"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
        let body = res.into_string().unwrap();
        let err: json::Error = serde_json::from_str(&body).unwrap();
        assert_eq!(err.http_status, 400);
        assert!(err.message.contains("already exists"));
    }

    #[test]
    fn user_list_requires_admin() {
        let (client, db) = setup();
        register_user(&db, "user@example.com", "secret", true);
        register_user_with_roles(&db, "admin@example.com", "secret", &[Role::Admin]);

        login(&client, "user@example.com", "secret");
        let res = client
            .get("/api/user/get")
            .header(ContentType::JSON)
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);

        login(&client, "admin@example.com", "secret");
        let res = client
            .get("/api/user/get")
            .header(ContentType::JSON)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let users: Vec<json::User> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(users.len(), 2);
    }

    #[test]
    fn delete_users_reports_count_of_existing_ids() {
        let (client, db) = setup();
        register_user_with_roles(&db, "admin@example.com", "secret", &[Role::Admin]);
        let a = register_user(&db, "a@example.com", "secret", true);
        let b = register_user(&db, "b@example.com", "secret", true);
        login(&client, "admin@example.com", "secret");

        let res = client
            .post("/api/user/delete")
            .header(ContentType::JSON)
            .body(format!(r#"{{"ids":[{a},{b},4711]}}"#))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let count: json::ResultCount =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(count.count, 2);
    }

    #[test]
    fn confirm_email_address() {
        let (client, db) = setup();
        register_user(&db, "user@example.com", "secret", false);
        let res = client
            .post("/api/auth/login")
            .header(ContentType::JSON)
            .body(r#"{"email":"user@example.com","password":"secret"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);

        let res = client
            .post("/api/user/confirm-email")
            .header(ContentType::JSON)
            .body(r#"{"email":"user@example.com"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);

        let res = client
            .post("/api/auth/login")
            .header(ContentType::JSON)
            .body(r#"{"email":"user@example.com","password":"secret"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
    }
}
