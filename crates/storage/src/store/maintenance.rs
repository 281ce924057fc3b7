#![forbid(unsafe_code)]

use super::*;

impl SqliteStore {
    /// Removes days whose trip is gone and entries whose day is gone.
    ///
    /// Days go first so entries orphaned by that pass are swept in the same
    /// call.
    pub fn sweep_orphans(&mut self) -> Result<OrphanReport, StoreError> {
        let tx = self.conn.transaction()?;
        let days_removed = tx.execute(
            "DELETE FROM days WHERE NOT EXISTS (SELECT 1 FROM trips t WHERE t.id = days.trip_id)",
            [],
        )?;
        let entries_removed = tx.execute(
            "DELETE FROM entries WHERE NOT EXISTS (SELECT 1 FROM days d WHERE d.id = entries.day_id)",
            [],
        )?;
        tx.commit()?;

        let report = OrphanReport {
            days_removed,
            entries_removed,
        };
        if report.is_clean() {
            tracing::debug!("orphan sweep found nothing");
        } else {
            tracing::info!(days_removed, entries_removed, "orphans swept");
        }
        Ok(report)
    }
}
