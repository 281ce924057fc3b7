#![forbid(unsafe_code)]

use super::*;
use tp_core::model::TripStatus;

impl SqliteStore {
    pub fn create_trip(&mut self, request: CreateTripRequest) -> Result<String, StoreError> {
        if request.name.trim().is_empty() {
            return Err(StoreError::InvalidInput("trip name must not be empty"));
        }
        if let Some(travelers) = request.travelers
            && travelers < 0
        {
            return Err(StoreError::InvalidInput("travelers must not be negative"));
        }

        let now_ms = now_ms();
        let tx = self.conn.transaction()?;
        let (id, seq) = next_id_tx(&tx, TRIP_SEQ, "TRIP")?;
        tx.execute(
            r#"
            INSERT INTO trips(id, seq, name, description, status, budget, travelers, notes, created_at_ms, updated_at_ms)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                id,
                seq,
                request.name,
                request.description,
                TripStatus::Planning.as_str(),
                request.budget,
                request.travelers,
                request.notes,
                now_ms,
                now_ms
            ],
        )?;
        tx.commit()?;
        tracing::debug!(trip_id = %id, "trip created");
        Ok(id)
    }

    /// All trips, newest first.
    pub fn list_trips(&self) -> Result<Vec<TripRow>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TRIP_COLUMNS} FROM trips ORDER BY created_at_ms DESC, seq DESC"
        ))?;
        let rows = stmt.query_map([], trip_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn get_trip(&self, id: &str) -> Result<Option<TripRow>, StoreError> {
        Ok(self
            .conn
            .query_row(
                &format!("SELECT {TRIP_COLUMNS} FROM trips WHERE id = ?1"),
                params![id],
                trip_from_row,
            )
            .optional()?)
    }

    pub fn update_trip(&mut self, id: &str, patch: TripPatch) -> Result<TripRow, StoreError> {
        if let Some(name) = patch.name.as_deref()
            && name.trim().is_empty()
        {
            return Err(StoreError::InvalidInput("trip name must not be empty"));
        }

        let now_ms = now_ms();
        let tx = self.conn.transaction()?;
        let Some(mut row) = tx
            .query_row(
                &format!("SELECT {TRIP_COLUMNS} FROM trips WHERE id = ?1"),
                params![id],
                trip_from_row,
            )
            .optional()?
        else {
            return Err(StoreError::trip_not_found(id));
        };

        if let Some(name) = patch.name {
            row.name = name;
        }
        if let Some(description) = patch.description {
            row.description = Some(description);
        }
        if let Some(status) = patch.status {
            row.status = status;
        }
        if let Some(budget) = patch.budget {
            row.budget = Some(budget);
        }
        if let Some(travelers) = patch.travelers {
            row.travelers = Some(travelers);
        }
        if let Some(notes) = patch.notes {
            row.notes = Some(notes);
        }
        row.updated_at_ms = now_ms;

        tx.execute(
            r#"
            UPDATE trips
            SET name=?2, description=?3, status=?4, budget=?5, travelers=?6, notes=?7, updated_at_ms=?8
            WHERE id=?1
            "#,
            params![
                id,
                row.name,
                row.description,
                row.status.as_str(),
                row.budget,
                row.travelers,
                row.notes,
                row.updated_at_ms
            ],
        )?;
        tx.commit()?;
        Ok(row)
    }

    /// Deletes a trip with all of its days and entries.
    ///
    /// The whole cascade runs in one transaction. Inside it the order is
    /// entries, then their day, then the trip, so a reader on another
    /// connection never sees entries whose day is gone.
    pub fn delete_trip(&mut self, id: &str) -> Result<CascadeReport, StoreError> {
        let tx = self.conn.transaction()?;
        if !trip_exists_tx(&tx, id)? {
            return Err(StoreError::trip_not_found(id));
        }

        let mut report = CascadeReport::default();
        for day_id in day_ids_for_trip_tx(&tx, id)? {
            report.entries_deleted += delete_day_cascade_tx(&tx, &day_id)?;
            report.days_deleted += 1;
        }
        tx.execute("DELETE FROM trips WHERE id = ?1", params![id])?;
        tx.commit()?;

        tracing::info!(
            trip_id = %id,
            days = report.days_deleted,
            entries = report.entries_deleted,
            "trip deleted"
        );
        Ok(report)
    }

    /// Trip plus its days and entries, assembled with one entry query per day.
    pub fn get_trip_with_hierarchy(&self, id: &str) -> Result<Option<TripHierarchy>, StoreError> {
        let Some(trip) = self.get_trip(id)? else {
            return Ok(None);
        };
        let days = self
            .list_days(id)?
            .into_iter()
            .map(|day| {
                let entries = self.list_entries(&day.id)?;
                Ok(DayWithEntries { day, entries })
            })
            .collect::<Result<Vec<_>, StoreError>>()?;
        Ok(Some(TripHierarchy { trip, days }))
    }
}
