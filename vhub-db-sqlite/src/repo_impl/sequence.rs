use super::*;

impl<'a> SequenceRepo for DbReadOnly<'a> {
    fn next_sequence_number(&self, _code: &str) -> Result<i64> {
        unreachable!();
    }
}

impl<'a> SequenceRepo for DbReadWrite<'a> {
    fn next_sequence_number(&self, code: &str) -> Result<i64> {
        next_sequence_number(&mut self.conn.borrow_mut(), code)
    }
}

impl<'a> SequenceRepo for DbConnection<'a> {
    fn next_sequence_number(&self, code: &str) -> Result<i64> {
        next_sequence_number(&mut self.conn.borrow_mut(), code)
    }
}

// Monotonic counter per code. Callers hold the exclusive write
// connection, so increment and read-back cannot interleave.
fn next_sequence_number(conn: &mut SqliteConnection, code: &str) -> Result<i64> {
    use schema::request_sequences::dsl;
    let updated = diesel::update(dsl::request_sequences.filter(dsl::code.eq(code)))
        .set(dsl::value.eq(dsl::value + 1))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if updated == 0 {
        diesel::insert_into(dsl::request_sequences)
            .values(&models::NewRequestSequence { code, value: 1 })
            .execute(conn)
            .map_err(from_diesel_err)?;
        return Ok(1);
    }
    dsl::request_sequences
        .select(dsl::value)
        .filter(dsl::code.eq(code))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}
