#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE INDEX IF NOT EXISTS idx_trips_created ON trips(created_at_ms, seq);
        CREATE INDEX IF NOT EXISTS idx_days_trip ON days(trip_id);
        CREATE INDEX IF NOT EXISTS idx_days_trip_day ON days(trip_id, day_number, seq);
        CREATE INDEX IF NOT EXISTS idx_entries_day ON entries(day_id);
        CREATE INDEX IF NOT EXISTS idx_entries_day_order ON entries(day_id, ord, seq);
"#;
