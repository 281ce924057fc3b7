#![forbid(unsafe_code)]

// No foreign keys: parents are enforced by the store's write paths and
// cascades run children-first inside one transaction. `sweep_orphans` repairs
// files written by anything that bypassed those paths.
pub(super) const SQL: &str = r#"

        CREATE TABLE IF NOT EXISTS trips (
          id TEXT PRIMARY KEY,
          seq INTEGER NOT NULL,
          name TEXT NOT NULL,
          description TEXT,
          status TEXT NOT NULL,
          budget REAL,
          travelers INTEGER,
          notes TEXT,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS days (
          id TEXT PRIMARY KEY,
          seq INTEGER NOT NULL,
          trip_id TEXT NOT NULL,
          day_number INTEGER NOT NULL,
          title TEXT,
          description TEXT,
          notes TEXT,
          order_high_water INTEGER NOT NULL DEFAULT 0,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS entries (
          id TEXT PRIMARY KEY,
          seq INTEGER NOT NULL,
          day_id TEXT NOT NULL,
          name TEXT NOT NULL,
          description TEXT,
          timestamp TEXT NOT NULL,
          google_maps_url TEXT NOT NULL,
          website_url TEXT,
          additional_links_json TEXT,
          images_json TEXT,
          category TEXT,
          duration INTEGER,
          cost REAL,
          ord INTEGER NOT NULL,
          status TEXT NOT NULL,
          notes TEXT,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER NOT NULL
        );
"#;
