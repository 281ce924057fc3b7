#![forbid(unsafe_code)]

use super::*;
use tp_core::model::EntryCategory;

impl SqliteStore {
    /// Case-insensitive name search across one trip. `exact` compares whole
    /// names; otherwise `needle` may appear anywhere in the name. An empty
    /// needle matches every entry when `exact` is false.
    pub fn find_entries_by_name(
        &self,
        trip_id: &str,
        needle: &str,
        exact: bool,
    ) -> Result<Vec<EntryMatch>, StoreError> {
        let needle = needle.trim().to_lowercase();
        let matches = self
            .entries_for_trip(trip_id)?
            .into_iter()
            .filter(|m| {
                let name = m.entry.name.to_lowercase();
                if exact {
                    name.trim() == needle
                } else {
                    name.contains(&needle)
                }
            })
            .collect();
        Ok(matches)
    }

    pub fn find_entries_by_category(
        &self,
        trip_id: &str,
        category: EntryCategory,
    ) -> Result<Vec<EntryMatch>, StoreError> {
        Ok(self
            .entries_for_trip(trip_id)?
            .into_iter()
            .filter(|m| m.entry.category == Some(category))
            .collect())
    }

    /// Entries of the day `get_day_by_number` resolves, so the result is
    /// exactly what `clear_day`/`delete_day` on that day would remove.
    pub fn find_entries_by_day(&self, trip_id: &str, day_number: i64) -> Result<Vec<EntryMatch>, StoreError> {
        let Some(day) = self.get_day_by_number(trip_id, day_number)? else {
            return Ok(Vec::new());
        };
        Ok(self
            .list_entries(&day.id)?
            .into_iter()
            .map(|entry| EntryMatch {
                entry,
                day_number: day.day_number,
                day_title: day.title.clone(),
            })
            .collect())
    }

    pub fn find_trips_by_name(&self, needle: &str) -> Result<Vec<TripRow>, StoreError> {
        let needle = needle.trim().to_lowercase();
        Ok(self
            .list_trips()?
            .into_iter()
            .filter(|trip| trip.name.to_lowercase().contains(&needle))
            .collect())
    }

    fn entries_for_trip(&self, trip_id: &str) -> Result<Vec<EntryMatch>, StoreError> {
        let columns = ENTRY_COLUMNS
            .split(", ")
            .map(|c| format!("e.{c}"))
            .collect::<Vec<_>>()
            .join(", ");
        let mut stmt = self.conn.prepare(&format!(
            r#"
            SELECT {columns}, d.day_number, d.title
            FROM entries e
            JOIN days d ON d.id = e.day_id
            WHERE d.trip_id = ?1
            ORDER BY d.day_number ASC, d.seq ASC, e.ord ASC, e.seq ASC
            "#
        ))?;
        let rows = stmt.query_map(params![trip_id], |row| {
            Ok(EntryMatch {
                entry: entry_from_row(row)?,
                day_number: row.get(17)?,
                day_title: row.get(18)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}
