use super::*;

#[post("/auth/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    cookies: &CookieJar<'_>,
    login: JsonResult<json::Credentials>,
) -> Result<()> {
    let login = login?.into_inner();
    let email = login.email.parse::<EmailAddress>()?;
    {
        let credentials = usecases::Credentials {
            email: &email,
            password: &login.password,
        };
        usecases::login_with_email(&db.shared()?, &credentials).map_err(|err| {
            debug!("Login with email '{}' failed: {err}", login.email);
            err
        })?;
    }
    cookies.add_private(
        Cookie::build((COOKIE_EMAIL_KEY, email.into_string()))
            .same_site(rocket::http::SameSite::Lax),
    );
    Ok(Json(()))
}

#[post("/auth/logout", format = "application/json")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Json<()> {
    cookies.remove_private(Cookie::from(COOKIE_EMAIL_KEY));
    Json(())
}
