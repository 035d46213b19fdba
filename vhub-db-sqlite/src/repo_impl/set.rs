use super::*;

macro_rules! set_repo_fns {
    ($create:ident, $delete:ident, $table:ident) => {
        fn $create(conn: &mut SqliteConnection) -> Result<Id> {
            use schema::$table::dsl;
            let now = Timestamp::now().into_seconds();
            diesel::insert_into(dsl::$table)
                .values(dsl::created_at.eq(now))
                .execute(conn)
                .map_err(from_diesel_err)?;
            last_insert_rowid(conn)
        }

        fn $delete(conn: &mut SqliteConnection, ids: &[Id]) -> Result<usize> {
            use schema::$table::dsl;
            diesel::delete(dsl::$table.filter(dsl::id.eq_any(to_rowids(ids))))
                .execute(conn)
                .map_err(from_diesel_err)
        }
    };
}

set_repo_fns!(create_photo_set, delete_photo_sets, photo_sets);
set_repo_fns!(create_news_set, delete_news_sets, news_sets);
set_repo_fns!(create_comment_set, delete_comment_sets, comment_sets);

impl<'a> SetRepo for DbReadOnly<'a> {
    fn create_photo_set(&self) -> Result<Id> {
        unreachable!();
    }
    fn create_news_set(&self) -> Result<Id> {
        unreachable!();
    }
    fn create_comment_set(&self) -> Result<Id> {
        unreachable!();
    }
    fn delete_photo_sets(&self, _ids: &[Id]) -> Result<usize> {
        unreachable!();
    }
    fn delete_news_sets(&self, _ids: &[Id]) -> Result<usize> {
        unreachable!();
    }
    fn delete_comment_sets(&self, _ids: &[Id]) -> Result<usize> {
        unreachable!();
    }
}

impl<'a> SetRepo for DbReadWrite<'a> {
    fn create_photo_set(&self) -> Result<Id> {
        create_photo_set(&mut self.conn.borrow_mut())
    }
    fn create_news_set(&self) -> Result<Id> {
        create_news_set(&mut self.conn.borrow_mut())
    }
    fn create_comment_set(&self) -> Result<Id> {
        create_comment_set(&mut self.conn.borrow_mut())
    }
    fn delete_photo_sets(&self, ids: &[Id]) -> Result<usize> {
        delete_photo_sets(&mut self.conn.borrow_mut(), ids)
    }
    fn delete_news_sets(&self, ids: &[Id]) -> Result<usize> {
        delete_news_sets(&mut self.conn.borrow_mut(), ids)
    }
    fn delete_comment_sets(&self, ids: &[Id]) -> Result<usize> {
        delete_comment_sets(&mut self.conn.borrow_mut(), ids)
    }
}

impl<'a> SetRepo for DbConnection<'a> {
    fn create_photo_set(&self) -> Result<Id> {
        create_photo_set(&mut self.conn.borrow_mut())
    }
    fn create_news_set(&self) -> Result<Id> {
        create_news_set(&mut self.conn.borrow_mut())
    }
    fn create_comment_set(&self) -> Result<Id> {
        create_comment_set(&mut self.conn.borrow_mut())
    }
    fn delete_photo_sets(&self, ids: &[Id]) -> Result<usize> {
        delete_photo_sets(&mut self.conn.borrow_mut(), ids)
    }
    fn delete_news_sets(&self, ids: &[Id]) -> Result<usize> {
        delete_news_sets(&mut self.conn.borrow_mut(), ids)
    }
    fn delete_comment_sets(&self, ids: &[Id]) -> Result<usize> {
        delete_comment_sets(&mut self.conn.borrow_mut(), ids)
    }
}
