use super::*;
use crate::adapters::json::from_json;

#[get("/comment/get?<comment_set>")]
pub fn get_comments(db: sqlite::Connections, comment_set: i64) -> Result<Vec<json::Comment>> {
    let comments = usecases::comments_of_set(&db.shared()?, comment_set.into())?;
    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

#[post("/comment/add", format = "application/json", data = "<comment>")]
pub fn post_comment_add(
    db: sqlite::Connections,
    account: Account,
    comment: JsonResult<json::NewComment>,
) -> CreatedResult<json::Comment> {
    let db = db.exclusive()?;
    let user = usecases::authorize_user_by_email(&db, account.email(), Role::Regular)?;
    let new_comment = from_json::new_comment(comment?.into_inner(), Some(user.id));
    let comment = usecases::create_comment(&db, new_comment)?;
    let location = format!("/api/comment/get?comment_set={}", comment.comment_set);
    Ok(Created::new(location).body(Json(comment.into())))
}

#[post("/comment/delete", format = "application/json", data = "<ids>")]
pub fn post_comment_delete(
    db: sqlite::Connections,
    auth: Auth,
    ids: JsonResult<json::Ids>,
) -> Result<json::ResultCount> {
    let ids = from_json::ids(ids?.into_inner());
    let db = db.exclusive()?;
    auth.user_with_min_role(&db, Role::Manager)?;
    let count = usecases::delete_comments(&db, &ids)?;
    Ok(Json(json::ResultCount {
        count: count as u64,
    }))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn comment_on_an_event() {
        let (client, db) = setup();
        register_user_with_roles(&db, "admin@example.com", "secret", &[Role::Admin]);
        register_user(&db, "volunteer@example.com", "secret", true);
        login(&client, "admin@example.com", "secret");
        let subsidiary_id = create_subsidiary(&client, "Branch");
        let event_id = create_event(&client, "Cleanup Day", subsidiary_id);
        let res = client
            .get(format!("/api/event/get/{event_id}"))
            .header(ContentType::JSON)
            .dispatch();
        let event: json::Event = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        let comment_set_id = event.comment_set_id.unwrap();

        login(&client, "volunteer@example.com", "secret");
        let res = client
            .post("/api/comment/add")
            .header(ContentType::JSON)
            .body(format!(
                r#"{{"comment_set_id":{comment_set_id},"text":"Happy to help!"}}"#
            ))
            .dispatch();
        assert_eq!(res.status(), Status::Created);

        let res = client
            .get(format!("/api/comment/get?comment_set={comment_set_id}"))
            .header(ContentType::JSON)
            .dispatch();
        let comments: Vec<json::Comment> =
            serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].text, "Happy to help!");
        assert!(comments[0].created_by.is_some());
    }

    #[test]
    fn reject_empty_comment() {
        let (client, db) = setup();
        register_user(&db, "volunteer@example.com", "secret", true);
        login(&client, "volunteer@example.com", "secret");
        let res = client
            .post("/api/comment/add")
            .header(ContentType::JSON)
            .body(r#"{"comment_set_id":1,"text":"   "}"#)
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
    }
}
