use super::{prelude::*, subsidiaries::delete_owned_sets};

#[derive(Debug, Clone)]
pub struct NewNews {
    pub title: String,
    pub body: String,
    pub created_by: Option<Id>,
    // The news set of the owning subsidiary or event.
    pub news_set: Option<Id>,
}

fn check_news_fields(title: &str, body: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::EmptyField("title"));
    }
    if body.trim().is_empty() {
        return Err(Error::EmptyField("body"));
    }
    Ok(())
}

pub fn create_news<R>(repo: &R, new: NewNews) -> Result<News>
where
    R: NewsRepo + SetRepo,
{
    check_news_fields(&new.title, &new.body)?;
    let news = News {
        id: Id::default(),
        title: new.title,
        body: new.body,
        created_by: new.created_by,
        news_set: new.news_set,
        // News articles own a photo and a comment set themselves.
        photo_set: Some(repo.create_photo_set()?),
        comment_set: Some(repo.create_comment_set()?),
        created_at: Timestamp::now(),
    };
    let id = repo.create_news(&news)?;
    Ok(News { id, ..news })
}

pub fn update_news<R: NewsRepo>(repo: &R, id: Id, title: String, body: String) -> Result<()> {
    check_news_fields(&title, &body)?;
    let mut news = repo.get_news(id)?;
    news.title = title;
    news.body = body;
    repo.update_news(&news)?;
    Ok(())
}

pub fn delete_news<R>(repo: &R, ids: &[Id]) -> Result<usize>
where
    R: NewsRepo + SetRepo,
{
    if ids.is_empty() {
        return Err(Error::EmptyIdList);
    }
    let mut existing = Vec::with_capacity(ids.len());
    for id in ids {
        match repo.get_news(*id) {
            Ok(news) => existing.push(news),
            Err(crate::repositories::Error::NotFound) => (),
            Err(err) => return Err(err.into()),
        }
    }
    let count = repo.delete_news(ids)?;
    delete_owned_sets(
        repo,
        existing.iter().map(|n| (n.photo_set, None, n.comment_set)),
    )?;
    Ok(count)
}

pub fn news_of_set<R: NewsRepo>(repo: &R, news_set_id: Id) -> Result<Vec<News>> {
    Ok(repo.news_of_set(news_set_id)?)
}

pub fn all_news<R: NewsRepo>(repo: &R) -> Result<Vec<News>> {
    Ok(repo.all_news()?)
}
