#![forbid(unsafe_code)]

use super::*;
use tp_core::entries::is_valid_order;
use tp_core::maps;
use tp_core::model::EntryStatus;

impl SqliteStore {
    /// Creates one entry. An omitted `order` lands after everything the day
    /// has ever held, so deleted positions are never handed out again.
    pub fn create_entry(&mut self, entry: NewEntry) -> Result<String, StoreError> {
        validate_new_entry(&entry)?;

        let now_ms = now_ms();
        let tx = self.conn.transaction()?;
        if !day_exists_tx(&tx, &entry.day_id)? {
            return Err(StoreError::day_not_found(&entry.day_id));
        }
        let order = match entry.order {
            Some(order) => order,
            None => next_order_tx(&tx, &entry.day_id)?,
        };
        let id = insert_entry_tx(&tx, &entry, order, now_ms)?;
        raise_high_water_tx(&tx, &entry.day_id, order)?;
        tx.commit()?;
        tracing::debug!(entry_id = %id, day_id = %entry.day_id, order, "entry created");
        Ok(id)
    }

    /// Inserts a batch of entries in one transaction. Every element must
    /// carry an explicit `order`; nothing is written when any element fails.
    pub fn create_multiple_entries(&mut self, entries: Vec<NewEntry>) -> Result<Vec<String>, StoreError> {
        if entries.is_empty() {
            return Err(StoreError::InvalidInput("entries must not be empty"));
        }
        for entry in &entries {
            validate_new_entry(entry)?;
            if entry.order.is_none() {
                return Err(StoreError::InvalidInput("order is required for every entry in a batch"));
            }
        }

        let now_ms = now_ms();
        let tx = self.conn.transaction()?;
        let mut ids = Vec::with_capacity(entries.len());
        for entry in &entries {
            if !day_exists_tx(&tx, &entry.day_id)? {
                return Err(StoreError::day_not_found(&entry.day_id));
            }
            let order = entry.order.unwrap_or_default();
            ids.push(insert_entry_tx(&tx, entry, order, now_ms)?);
            raise_high_water_tx(&tx, &entry.day_id, order)?;
        }
        tx.commit()?;
        tracing::debug!(count = ids.len(), "entries created");
        Ok(ids)
    }

    pub fn get_entry(&self, id: &str) -> Result<Option<EntryRow>, StoreError> {
        Ok(self
            .conn
            .query_row(
                &format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1"),
                params![id],
                entry_from_row,
            )
            .optional()?)
    }

    /// Entries of a day, ascending by order (creation sequence breaks ties).
    pub fn list_entries(&self, day_id: &str) -> Result<Vec<EntryRow>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries WHERE day_id = ?1 ORDER BY ord ASC, seq ASC"
        ))?;
        let rows = stmt.query_map(params![day_id], entry_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn update_entry(&mut self, id: &str, patch: EntryPatch) -> Result<EntryRow, StoreError> {
        if let Some(name) = &patch.name
            && name.trim().is_empty()
        {
            return Err(StoreError::InvalidInput("entry name must not be empty"));
        }
        if let Some(url) = &patch.google_maps_url
            && !maps::is_present(url)
        {
            return Err(StoreError::InvalidInput("googleMapsUrl must not be empty"));
        }
        check_order(patch.order)?;

        let now_ms = now_ms();
        let tx = self.conn.transaction()?;
        let Some(mut row) = tx
            .query_row(
                &format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1"),
                params![id],
                entry_from_row,
            )
            .optional()?
        else {
            return Err(StoreError::entry_not_found(id));
        };

        let order_changed = patch.order.is_some_and(|order| order != row.order);
        if let Some(name) = patch.name {
            row.name = name;
        }
        if let Some(description) = patch.description {
            row.description = Some(description);
        }
        if let Some(timestamp) = patch.timestamp {
            row.timestamp = timestamp;
        }
        if let Some(url) = patch.google_maps_url {
            row.google_maps_url = url;
        }
        if let Some(url) = patch.website_url {
            row.website_url = Some(url);
        }
        if let Some(links) = patch.additional_links {
            row.additional_links = Some(links);
        }
        if let Some(images) = patch.images {
            row.images = Some(images);
        }
        if let Some(category) = patch.category {
            row.category = Some(category);
        }
        if let Some(duration) = patch.duration {
            row.duration = Some(duration);
        }
        if let Some(cost) = patch.cost {
            row.cost = Some(cost);
        }
        if let Some(order) = patch.order {
            row.order = order;
        }
        if let Some(status) = patch.status {
            row.status = status;
        }
        if let Some(notes) = patch.notes {
            row.notes = Some(notes);
        }
        row.updated_at_ms = now_ms;

        tx.execute(
            r#"
            UPDATE entries
            SET name=?2, description=?3, timestamp=?4, google_maps_url=?5, website_url=?6,
                additional_links_json=?7, images_json=?8, category=?9, duration=?10, cost=?11,
                ord=?12, status=?13, notes=?14, updated_at_ms=?15
            WHERE id=?1
            "#,
            params![
                id,
                row.name,
                row.description,
                row.timestamp,
                row.google_maps_url,
                row.website_url,
                string_list_json(row.additional_links.as_ref())?,
                string_list_json(row.images.as_ref())?,
                category_str(row.category),
                row.duration,
                row.cost,
                row.order,
                row.status.as_str(),
                row.notes,
                row.updated_at_ms
            ],
        )?;
        if order_changed {
            raise_high_water_tx(&tx, &row.day_id, row.order)?;
        }
        tx.commit()?;
        Ok(row)
    }

    pub fn delete_entry(&mut self, id: &str) -> Result<(), StoreError> {
        let removed = self.conn.execute("DELETE FROM entries WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(StoreError::entry_not_found(id));
        }
        tracing::debug!(entry_id = %id, "entry deleted");
        Ok(())
    }

    /// Deletes every listed entry or none of them.
    pub fn delete_multiple_entries(&mut self, ids: &[String]) -> Result<usize, StoreError> {
        if ids.is_empty() {
            return Err(StoreError::InvalidInput("entryIds must not be empty"));
        }

        let tx = self.conn.transaction()?;
        let mut removed = 0;
        for id in ids {
            let n = tx.execute("DELETE FROM entries WHERE id = ?1", params![id])?;
            if n == 0 {
                return Err(StoreError::entry_not_found(id));
            }
            removed += n;
        }
        tx.commit()?;
        tracing::info!(removed, "entries deleted");
        Ok(removed)
    }

    /// Removes every entry of a day, keeping the day itself.
    pub fn clear_day(&mut self, day_id: &str) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        if !day_exists_tx(&tx, day_id)? {
            return Err(StoreError::day_not_found(day_id));
        }
        let removed = delete_entries_for_day_tx(&tx, day_id)?;
        tx.commit()?;
        tracing::info!(day_id = %day_id, removed, "day cleared");
        Ok(removed)
    }

    pub fn reorder_entries(&mut self, updates: Vec<EntryOrderUpdate>) -> Result<(), StoreError> {
        if updates.is_empty() {
            return Err(StoreError::InvalidInput("updates must not be empty"));
        }
        for update in &updates {
            check_order(Some(update.order))?;
        }

        let now_ms = now_ms();
        let tx = self.conn.transaction()?;
        for update in &updates {
            let Some(day_id) = tx
                .query_row(
                    "SELECT day_id FROM entries WHERE id = ?1",
                    params![update.entry_id],
                    |row| row.get::<_, String>(0),
                )
                .optional()?
            else {
                return Err(StoreError::entry_not_found(&update.entry_id));
            };
            tx.execute(
                "UPDATE entries SET ord = ?2, updated_at_ms = ?3 WHERE id = ?1",
                params![update.entry_id, update.order, now_ms],
            )?;
            raise_high_water_tx(&tx, &day_id, update.order)?;
        }
        tx.commit()?;
        Ok(())
    }
}

fn validate_new_entry(entry: &NewEntry) -> Result<(), StoreError> {
    if entry.name.trim().is_empty() {
        return Err(StoreError::InvalidInput("entry name must not be empty"));
    }
    if !maps::is_present(&entry.google_maps_url) {
        return Err(StoreError::InvalidInput("googleMapsUrl is required"));
    }
    check_order(entry.order)
}

fn next_order_tx(tx: &Transaction<'_>, day_id: &str) -> Result<i64, StoreError> {
    let (max_order, high_water): (Option<i64>, i64) = tx.query_row(
        r#"
        SELECT (SELECT MAX(ord) FROM entries WHERE day_id = ?1), order_high_water
        FROM days WHERE id = ?1
        "#,
        params![day_id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    max_order
        .unwrap_or(0)
        .max(high_water)
        .checked_add(1)
        .filter(|next| is_valid_order(*next))
        .ok_or(StoreError::InvalidInput("order is out of range"))
}

fn check_order(order: Option<i64>) -> Result<(), StoreError> {
    match order {
        Some(order) if !is_valid_order(order) => Err(StoreError::InvalidInput("order is out of range")),
        _ => Ok(()),
    }
}

fn raise_high_water_tx(tx: &Transaction<'_>, day_id: &str, order: i64) -> Result<(), StoreError> {
    tx.execute(
        "UPDATE days SET order_high_water = MAX(order_high_water, ?2) WHERE id = ?1",
        params![day_id, order],
    )?;
    Ok(())
}

fn insert_entry_tx(
    tx: &Transaction<'_>,
    entry: &NewEntry,
    order: i64,
    now_ms: i64,
) -> Result<String, StoreError> {
    let (id, seq) = next_id_tx(tx, ENTRY_SEQ, "ENTRY")?;
    tx.execute(
        r#"
        INSERT INTO entries(
            id, seq, day_id, name, description, timestamp, google_maps_url, website_url,
            additional_links_json, images_json, category, duration, cost, ord, status, notes,
            created_at_ms, updated_at_ms
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)
        "#,
        params![
            id,
            seq,
            entry.day_id,
            entry.name,
            entry.description,
            entry.timestamp,
            entry.google_maps_url,
            entry.website_url,
            string_list_json(entry.additional_links.as_ref())?,
            string_list_json(entry.images.as_ref())?,
            category_str(entry.category),
            entry.duration,
            entry.cost,
            order,
            EntryStatus::Planned.as_str(),
            entry.notes,
            now_ms,
            now_ms
        ],
    )?;
    Ok(id)
}
