use super::*;
use crate::adapters::json::from_json;

#[get("/news/get?<news_set>")]
pub fn get_news(db: sqlite::Connections, news_set: Option<i64>) -> Result<Vec<json::News>> {
    let db = db.shared()?;
    let news = match news_set {
        Some(news_set) => usecases::news_of_set(&db, news_set.into())?,
        None => usecases::all_news(&db)?,
    };
    Ok(Json(news.into_iter().map(Into::into).collect()))
}

#[post("/news/add", format = "application/json", data = "<news>")]
pub fn post_news_add(
    connections: sqlite::Connections,
    auth: Auth,
    news: JsonResult<json::NewNews>,
) -> CreatedResult<json::News> {
    let created_by = {
        let db = connections.shared()?;
        let user = auth.user_with_min_role(&db, Role::Manager)?;
        Some(user.id)
    };
    let new_news = from_json::new_news(news?.into_inner(), created_by);
    let news = flows::create_news(&connections, new_news)?;
    Ok(Created::new("/api/news/get".to_string()).body(Json(news.into())))
}

#[post("/news/edit/<id>", format = "application/json", data = "<update>")]
pub fn post_news_edit(
    db: sqlite::Connections,
    auth: Auth,
    id: i64,
    update: JsonResult<json::UpdateNews>,
) -> Result<()> {
    let json::UpdateNews { title, body } = update?.into_inner();
    let db = db.exclusive()?;
    auth.user_with_min_role(&db, Role::Manager)?;
    usecases::update_news(&db, id.into(), title, body)?;
    Ok(Json(()))
}

#[post("/news/delete", format = "application/json", data = "<ids>")]
pub fn post_news_delete(
    connections: sqlite::Connections,
    auth: Auth,
    ids: JsonResult<json::Ids>,
) -> Result<json::ResultCount> {
    let ids = from_json::ids(ids?.into_inner());
    {
        let db = connections.shared()?;
        auth.user_with_min_role(&db, Role::Manager)?;
    }
    let count = flows::delete_news(&connections, &ids)?;
    Ok(Json(json::ResultCount {
        count: count as u64,
    }))
}
