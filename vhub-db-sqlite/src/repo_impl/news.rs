use super::*;

impl<'a> NewsRepo for DbReadOnly<'a> {
    fn create_news(&self, _news: &News) -> Result<Id> {
        unreachable!();
    }
    fn update_news(&self, _news: &News) -> Result<()> {
        unreachable!();
    }
    fn delete_news(&self, _ids: &[Id]) -> Result<usize> {
        unreachable!();
    }

    fn get_news(&self, id: Id) -> Result<News> {
        get_news(&mut self.conn.borrow_mut(), id)
    }
    fn news_of_set(&self, news_set_id: Id) -> Result<Vec<News>> {
        news_of_set(&mut self.conn.borrow_mut(), news_set_id)
    }
    fn all_news(&self) -> Result<Vec<News>> {
        all_news(&mut self.conn.borrow_mut())
    }
}

impl<'a> NewsRepo for DbReadWrite<'a> {
    fn create_news(&self, news: &News) -> Result<Id> {
        create_news(&mut self.conn.borrow_mut(), news)
    }
    fn update_news(&self, news: &News) -> Result<()> {
        update_news(&mut self.conn.borrow_mut(), news)
    }
    fn delete_news(&self, ids: &[Id]) -> Result<usize> {
        delete_news(&mut self.conn.borrow_mut(), ids)
    }

    fn get_news(&self, id: Id) -> Result<News> {
        get_news(&mut self.conn.borrow_mut(), id)
    }
    fn news_of_set(&self, news_set_id: Id) -> Result<Vec<News>> {
        news_of_set(&mut self.conn.borrow_mut(), news_set_id)
    }
    fn all_news(&self) -> Result<Vec<News>> {
        all_news(&mut self.conn.borrow_mut())
    }
}

impl<'a> NewsRepo for DbConnection<'a> {
    fn create_news(&self, news: &News) -> Result<Id> {
        create_news(&mut self.conn.borrow_mut(), news)
    }
    fn update_news(&self, news: &News) -> Result<()> {
        update_news(&mut self.conn.borrow_mut(), news)
    }
    fn delete_news(&self, ids: &[Id]) -> Result<usize> {
        delete_news(&mut self.conn.borrow_mut(), ids)
    }

    fn get_news(&self, id: Id) -> Result<News> {
        get_news(&mut self.conn.borrow_mut(), id)
    }
    fn news_of_set(&self, news_set_id: Id) -> Result<Vec<News>> {
        news_of_set(&mut self.conn.borrow_mut(), news_set_id)
    }
    fn all_news(&self) -> Result<Vec<News>> {
        all_news(&mut self.conn.borrow_mut())
    }
}

fn new_news_record<'a>(news: &'a News, updated_at: i64) -> models::NewNews<'a> {
    models::NewNews {
        title: &news.title,
        body: &news.body,
        created_by: news.created_by.map(Id::value),
        news_set_id: news.news_set.map(Id::value),
        photo_set_id: news.photo_set.map(Id::value),
        comment_set_id: news.comment_set.map(Id::value),
        created_at: news.created_at.into_seconds(),
        updated_at,
    }
}

fn create_news(conn: &mut SqliteConnection, news: &News) -> Result<Id> {
    let now = Timestamp::now().into_seconds();
    diesel::insert_into(schema::news::table)
        .values(&new_news_record(news, now))
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_rowid(conn)
}

fn update_news(conn: &mut SqliteConnection, news: &News) -> Result<()> {
    use schema::news::dsl;
    let now = Timestamp::now().into_seconds();
    let count = diesel::update(dsl::news.filter(dsl::id.eq(news.id.value())))
        .set(&new_news_record(news, now))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_news(conn: &mut SqliteConnection, ids: &[Id]) -> Result<usize> {
    use schema::news::dsl;
    diesel::delete(dsl::news.filter(dsl::id.eq_any(to_rowids(ids))))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn get_news(conn: &mut SqliteConnection, id: Id) -> Result<News> {
    use schema::news::dsl;
    Ok(dsl::news
        .filter(dsl::id.eq(id.value()))
        .first::<models::NewsEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn news_of_set(conn: &mut SqliteConnection, news_set_id: Id) -> Result<Vec<News>> {
    use schema::news::dsl;
    Ok(dsl::news
        .filter(dsl::news_set_id.eq(news_set_id.value()))
        .order_by(dsl::created_at.desc())
        .load::<models::NewsEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn all_news(conn: &mut SqliteConnection) -> Result<Vec<News>> {
    use schema::news::dsl;
    Ok(dsl::news
        .order_by(dsl::created_at.desc())
        .load::<models::NewsEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
