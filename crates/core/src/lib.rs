#![forbid(unsafe_code)]

pub mod maps;

pub mod model {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub enum TripStatus {
        #[default]
        Planning,
        Active,
        Completed,
    }

    impl TripStatus {
        pub const ALL: &'static [TripStatus] =
            &[TripStatus::Planning, TripStatus::Active, TripStatus::Completed];

        pub fn as_str(self) -> &'static str {
            match self {
                TripStatus::Planning => "planning",
                TripStatus::Active => "active",
                TripStatus::Completed => "completed",
            }
        }

        pub fn parse(value: &str) -> Option<Self> {
            let value = value.trim();
            Self::ALL.iter().copied().find(|s| s.as_str() == value)
        }

        pub fn names() -> Vec<&'static str> {
            Self::ALL.iter().map(|s| s.as_str()).collect()
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub enum EntryStatus {
        #[default]
        Planned,
        Confirmed,
        Cancelled,
        Completed,
    }

    impl EntryStatus {
        pub const ALL: &'static [EntryStatus] = &[
            EntryStatus::Planned,
            EntryStatus::Confirmed,
            EntryStatus::Cancelled,
            EntryStatus::Completed,
        ];

        pub fn as_str(self) -> &'static str {
            match self {
                EntryStatus::Planned => "planned",
                EntryStatus::Confirmed => "confirmed",
                EntryStatus::Cancelled => "cancelled",
                EntryStatus::Completed => "completed",
            }
        }

        pub fn parse(value: &str) -> Option<Self> {
            let value = value.trim();
            Self::ALL.iter().copied().find(|s| s.as_str() == value)
        }

        pub fn names() -> Vec<&'static str> {
            Self::ALL.iter().map(|s| s.as_str()).collect()
        }
    }

    /// Closed set of activity categories an entry may be filed under.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum EntryCategory {
        Restaurant,
        Hotel,
        Attraction,
        Museum,
        Park,
        Shopping,
        Nightlife,
        Transport,
        Activity,
        Landmark,
        Other,
    }

    impl EntryCategory {
        pub const ALL: &'static [EntryCategory] = &[
            EntryCategory::Restaurant,
            EntryCategory::Hotel,
            EntryCategory::Attraction,
            EntryCategory::Museum,
            EntryCategory::Park,
            EntryCategory::Shopping,
            EntryCategory::Nightlife,
            EntryCategory::Transport,
            EntryCategory::Activity,
            EntryCategory::Landmark,
            EntryCategory::Other,
        ];

        pub fn as_str(self) -> &'static str {
            match self {
                EntryCategory::Restaurant => "restaurant",
                EntryCategory::Hotel => "hotel",
                EntryCategory::Attraction => "attraction",
                EntryCategory::Museum => "museum",
                EntryCategory::Park => "park",
                EntryCategory::Shopping => "shopping",
                EntryCategory::Nightlife => "nightlife",
                EntryCategory::Transport => "transport",
                EntryCategory::Activity => "activity",
                EntryCategory::Landmark => "landmark",
                EntryCategory::Other => "other",
            }
        }

        /// Exact match only: categories are enum values, not free text.
        pub fn parse(value: &str) -> Option<Self> {
            Self::ALL.iter().copied().find(|c| c.as_str() == value)
        }

        pub fn names() -> Vec<&'static str> {
            Self::ALL.iter().map(|c| c.as_str()).collect()
        }
    }
}

pub mod days {
    pub fn default_day_title(day_number: i64) -> String {
        format!("Day {day_number}")
    }

    pub fn is_valid_day_number(day_number: i64) -> bool {
        day_number >= 1
    }
}

pub mod entries {
    /// Largest magnitude accepted for an entry's `order`. Keeps automatic
    /// numbering (high-water + 1) far away from integer overflow.
    pub const MAX_ORDER: i64 = 1_000_000_000;

    pub fn is_valid_order(order: i64) -> bool {
        (-MAX_ORDER..=MAX_ORDER).contains(&order)
    }
}

#[cfg(test)]
mod tests;
