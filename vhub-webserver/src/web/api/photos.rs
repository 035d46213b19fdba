use super::*;
use crate::adapters::json::from_json;

#[get("/photo/get?<photo_set>")]
pub fn get_photos(db: sqlite::Connections, photo_set: i64) -> Result<Vec<json::Photo>> {
    let photos = usecases::photos_of_set(&db.shared()?, photo_set.into())?;
    Ok(Json(photos.into_iter().map(Into::into).collect()))
}

#[post("/photo/add", format = "application/json", data = "<photo>")]
pub fn post_photo_add(
    db: sqlite::Connections,
    auth: Auth,
    photo: JsonResult<json::NewPhoto>,
) -> CreatedResult<json::Photo> {
    let db = db.exclusive()?;
    auth.user_with_min_role(&db, Role::Manager)?;
    let photo = usecases::create_photo(&db, from_json::new_photo(photo?.into_inner()))?;
    Ok(Created::new("/api/photo/get".to_string()).body(Json(photo.into())))
}

#[post("/photo/delete", format = "application/json", data = "<ids>")]
pub fn post_photo_delete(
    db: sqlite::Connections,
    auth: Auth,
    ids: JsonResult<json::Ids>,
) -> Result<json::ResultCount> {
    let ids = from_json::ids(ids?.into_inner());
    let db = db.exclusive()?;
    auth.user_with_min_role(&db, Role::Manager)?;
    let count = usecases::delete_photos(&db, &ids)?;
    Ok(Json(json::ResultCount {
        count: count as u64,
    }))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn add_photo_to_a_subsidiary_photo_set() {
        let (client, db) = setup();
        register_user_with_roles(&db, "admin@example.com", "secret", &[Role::Admin]);
        login(&client, "admin@example.com", "secret");
        let res = client
            .post("/api/subsidiary/add")
            .header(ContentType::JSON)
            .body(r#"{"name":"Branch"}"#)
            .dispatch();
        let subsidiary: json::Subsidiary =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        let photo_set_id = subsidiary.photo_set_id.unwrap();

        let res = client
            .post("/api/photo/add")
            .header(ContentType::JSON)
            .body(format!(
                r#"{{"url":"https://img.example.com/1.jpg","photo_set_id":{photo_set_id}}}"#
            ))
            .dispatch();
        assert_eq!(res.status(), Status::Created);

        let res = client
            .get(format!("/api/photo/get?photo_set={photo_set_id}"))
            .header(ContentType::JSON)
            .dispatch();
        let photos: Vec<json::Photo> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(photos.len(), 1);
    }

    #[test]
    fn reject_photo_without_url() {
        let (client, db) = setup();
        register_user_with_roles(&db, "manager@example.com", "secret", &[Role::Manager]);
        login(&client, "manager@example.com", "secret");
        let res = client
            .post("/api/photo/add")
            .header(ContentType::JSON)
            .body(r#"{"url":""}"#)
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
    }
}
