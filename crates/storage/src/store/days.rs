#![forbid(unsafe_code)]

use super::*;
use tp_core::days::{default_day_title, is_valid_day_number};

impl SqliteStore {
    /// Inserts a day unconditionally. Use [`SqliteStore::get_or_create_day`]
    /// when one day per `(trip, day_number)` matters.
    pub fn create_day(&mut self, request: CreateDayRequest) -> Result<String, StoreError> {
        if !is_valid_day_number(request.day_number) {
            return Err(StoreError::InvalidInput("dayNumber must be a positive integer"));
        }

        let now_ms = now_ms();
        let tx = self.conn.transaction()?;
        if !trip_exists_tx(&tx, &request.trip_id)? {
            return Err(StoreError::trip_not_found(&request.trip_id));
        }
        let id = insert_day_tx(
            &tx,
            &request.trip_id,
            request.day_number,
            request.title,
            request.description,
            request.notes,
            now_ms,
        )?;
        tx.commit()?;
        tracing::debug!(day_id = %id, trip_id = %request.trip_id, day_number = request.day_number, "day created");
        Ok(id)
    }

    /// Returns the day for `(trip_id, day_number)`, creating it on first use.
    ///
    /// Repeated calls with the same arguments return the same id. When
    /// several rows already share the pair (raw `create_day` does not
    /// dedupe), the oldest wins.
    pub fn get_or_create_day(
        &mut self,
        trip_id: &str,
        day_number: i64,
        title: Option<String>,
    ) -> Result<DayHandle, StoreError> {
        if !is_valid_day_number(day_number) {
            return Err(StoreError::InvalidInput("dayNumber must be a positive integer"));
        }

        let now_ms = now_ms();
        let tx = self.conn.transaction()?;
        if !trip_exists_tx(&tx, trip_id)? {
            return Err(StoreError::trip_not_found(trip_id));
        }

        if let Some(existing) = find_day_by_number_tx(&tx, trip_id, day_number)? {
            tx.commit()?;
            return Ok(DayHandle {
                id: existing,
                created: false,
            });
        }

        let title = title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| default_day_title(day_number));
        let id = insert_day_tx(&tx, trip_id, day_number, Some(title), None, None, now_ms)?;
        tx.commit()?;
        tracing::debug!(day_id = %id, trip_id, day_number, "day created on demand");
        Ok(DayHandle { id, created: true })
    }

    /// Days of a trip, ascending by day number.
    pub fn list_days(&self, trip_id: &str) -> Result<Vec<DayRow>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {DAY_COLUMNS} FROM days WHERE trip_id = ?1 ORDER BY day_number ASC, seq ASC"
        ))?;
        let rows = stmt.query_map(params![trip_id], day_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn get_day(&self, id: &str) -> Result<Option<DayRow>, StoreError> {
        Ok(self
            .conn
            .query_row(
                &format!("SELECT {DAY_COLUMNS} FROM days WHERE id = ?1"),
                params![id],
                day_from_row,
            )
            .optional()?)
    }

    pub fn get_day_by_number(&self, trip_id: &str, day_number: i64) -> Result<Option<DayRow>, StoreError> {
        Ok(self
            .conn
            .query_row(
                &format!(
                    "SELECT {DAY_COLUMNS} FROM days WHERE trip_id = ?1 AND day_number = ?2 ORDER BY seq ASC LIMIT 1"
                ),
                params![trip_id, day_number],
                day_from_row,
            )
            .optional()?)
    }

    pub fn get_day_with_entries(&self, id: &str) -> Result<Option<DayWithEntries>, StoreError> {
        let Some(day) = self.get_day(id)? else {
            return Ok(None);
        };
        let entries = self.list_entries(&day.id)?;
        Ok(Some(DayWithEntries { day, entries }))
    }

    pub fn update_day(&mut self, id: &str, patch: DayPatch) -> Result<DayRow, StoreError> {
        if let Some(day_number) = patch.day_number
            && !is_valid_day_number(day_number)
        {
            return Err(StoreError::InvalidInput("dayNumber must be a positive integer"));
        }

        let now_ms = now_ms();
        let tx = self.conn.transaction()?;
        let Some(mut row) = tx
            .query_row(
                &format!("SELECT {DAY_COLUMNS} FROM days WHERE id = ?1"),
                params![id],
                day_from_row,
            )
            .optional()?
        else {
            return Err(StoreError::day_not_found(id));
        };

        if let Some(day_number) = patch.day_number
            && day_number != row.day_number
        {
            if find_day_by_number_tx(&tx, &row.trip_id, day_number)?.is_some() {
                return Err(StoreError::InvalidInput(
                    "another day in this trip already has that dayNumber",
                ));
            }
            row.day_number = day_number;
        }
        if let Some(title) = patch.title {
            row.title = Some(title);
        }
        if let Some(description) = patch.description {
            row.description = Some(description);
        }
        if let Some(notes) = patch.notes {
            row.notes = Some(notes);
        }
        row.updated_at_ms = now_ms;

        tx.execute(
            r#"
            UPDATE days
            SET day_number=?2, title=?3, description=?4, notes=?5, updated_at_ms=?6
            WHERE id=?1
            "#,
            params![
                id,
                row.day_number,
                row.title,
                row.description,
                row.notes,
                row.updated_at_ms
            ],
        )?;
        tx.commit()?;
        Ok(row)
    }

    /// Deletes a day and its entries (entries first). Returns the number of
    /// entries removed with it.
    pub fn delete_day(&mut self, id: &str) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        if !day_exists_tx(&tx, id)? {
            return Err(StoreError::day_not_found(id));
        }
        let entries = delete_day_cascade_tx(&tx, id)?;
        tx.commit()?;
        tracing::info!(day_id = %id, entries, "day deleted");
        Ok(entries)
    }
}

fn find_day_by_number_tx(
    tx: &Transaction<'_>,
    trip_id: &str,
    day_number: i64,
) -> Result<Option<String>, StoreError> {
    Ok(tx
        .query_row(
            "SELECT id FROM days WHERE trip_id = ?1 AND day_number = ?2 ORDER BY seq ASC LIMIT 1",
            params![trip_id, day_number],
            |row| row.get::<_, String>(0),
        )
        .optional()?)
}

fn insert_day_tx(
    tx: &Transaction<'_>,
    trip_id: &str,
    day_number: i64,
    title: Option<String>,
    description: Option<String>,
    notes: Option<String>,
    now_ms: i64,
) -> Result<String, StoreError> {
    let (id, seq) = next_id_tx(tx, DAY_SEQ, "DAY")?;
    tx.execute(
        r#"
        INSERT INTO days(id, seq, trip_id, day_number, title, description, notes, order_high_water, created_at_ms, updated_at_ms)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0, ?8, ?9)
        "#,
        params![id, seq, trip_id, day_number, title, description, notes, now_ms, now_ms],
    )?;
    Ok(id)
}
