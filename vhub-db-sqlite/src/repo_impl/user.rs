use num_traits::FromPrimitive as _;

use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: &User) -> Result<Id> {
        unreachable!();
    }
    fn update_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }
    fn delete_users(&self, _ids: &[Id]) -> Result<usize> {
        unreachable!();
    }
    fn set_user_roles(&self, _id: Id, _roles: &[Role]) -> Result<()> {
        unreachable!();
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }

    fn get_user(&self, id: Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: &User) -> Result<Id> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }
    fn delete_users(&self, ids: &[Id]) -> Result<usize> {
        delete_users(&mut self.conn.borrow_mut(), ids)
    }
    fn set_user_roles(&self, id: Id, roles: &[Role]) -> Result<()> {
        set_user_roles(&mut self.conn.borrow_mut(), id, roles)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }

    fn get_user(&self, id: Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_user(&self, user: &User) -> Result<Id> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }
    fn delete_users(&self, ids: &[Id]) -> Result<usize> {
        delete_users(&mut self.conn.borrow_mut(), ids)
    }
    fn set_user_roles(&self, id: Id, roles: &[Role]) -> Result<()> {
        set_user_roles(&mut self.conn.borrow_mut(), id, roles)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }

    fn get_user(&self, id: Id) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
}

fn load_roles_of_user(conn: &mut SqliteConnection, user_rowid: i64) -> Result<Vec<Role>> {
    use schema::users_roles::dsl;
    let role_ids = dsl::users_roles
        .select(dsl::role_id)
        .filter(dsl::user_id.eq(user_rowid))
        .load::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(role_ids
        .into_iter()
        .filter_map(|role_id| {
            let role = Role::from_i64(role_id);
            if role.is_none() {
                // This should never happen
                log::warn!("Ignoring unknown role id {role_id} of user {user_rowid}");
            }
            role
        })
        .collect())
}

fn replace_roles_of_user(
    conn: &mut SqliteConnection,
    user_rowid: i64,
    roles: &[Role],
) -> Result<()> {
    use schema::users_roles::dsl;
    diesel::delete(dsl::users_roles.filter(dsl::user_id.eq(user_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let mut role_ids: Vec<i64> = roles.iter().map(|role| *role as i64).collect();
    role_ids.sort_unstable();
    role_ids.dedup();
    let new_roles: Vec<_> = role_ids
        .into_iter()
        .map(|role_id| models::NewUserRole {
            user_id: user_rowid,
            role_id,
        })
        .collect();
    diesel::insert_into(schema::users_roles::table)
        .values(&new_roles)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<Id> {
    let now = Timestamp::now().into_seconds();
    let new_user = models::NewUser {
        email: u.email.as_str(),
        email_confirmed: u.email_confirmed,
        password: u.password.as_ref(),
        photo_id: u.photo.map(Id::value),
        created_at: u.created_at.into_seconds(),
        updated_at: now,
    };
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = last_insert_rowid(conn)?;
    replace_roles_of_user(conn, id.value(), &u.roles)?;
    Ok(id)
}

fn update_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    use schema::users::dsl;
    let now = Timestamp::now().into_seconds();
    let new_user = models::NewUser {
        email: u.email.as_str(),
        email_confirmed: u.email_confirmed,
        password: u.password.as_ref(),
        photo_id: u.photo.map(Id::value),
        created_at: u.created_at.into_seconds(),
        updated_at: now,
    };
    let count = diesel::update(dsl::users.filter(dsl::id.eq(u.id.value())))
        .set(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_users(conn: &mut SqliteConnection, ids: &[Id]) -> Result<usize> {
    use schema::users::dsl;
    diesel::delete(dsl::users.filter(dsl::id.eq_any(to_rowids(ids))))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn set_user_roles(conn: &mut SqliteConnection, id: Id, roles: &[Role]) -> Result<()> {
    use schema::users::dsl;
    let count: i64 = dsl::users
        .filter(dsl::id.eq(id.value()))
        .count()
        .get_result(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    replace_roles_of_user(conn, id.value(), roles)
}

fn all_users(conn: &mut SqliteConnection) -> Result<Vec<User>> {
    let entities = schema::users::table
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    entities
        .into_iter()
        .map(|entity| {
            let roles = load_roles_of_user(conn, entity.id)?;
            Ok(entity.into_user(roles))
        })
        .collect()
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    Ok(dsl::users
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn get_user(conn: &mut SqliteConnection, id: Id) -> Result<User> {
    use schema::users::dsl;
    let entity = dsl::users
        .filter(dsl::id.eq(id.value()))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    let roles = load_roles_of_user(conn, entity.id)?;
    Ok(entity.into_user(roles))
}

fn get_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<User> {
    try_get_user_by_email(conn, email)?.ok_or(repo::Error::NotFound)
}

fn try_get_user_by_email(
    conn: &mut SqliteConnection,
    email: &EmailAddress,
) -> Result<Option<User>> {
    use schema::users::dsl;
    let entity = dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?;
    entity
        .map(|entity| {
            let roles = load_roles_of_user(conn, entity.id)?;
            Ok(entity.into_user(roles))
        })
        .transpose()
}
