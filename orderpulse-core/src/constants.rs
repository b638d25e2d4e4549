/// Project config file looked up in the project root.
pub const CONFIG_FILENAME: &str = "orderpulse.toml";

/// Upper bound for any configured stage threshold, in days.
/// Keeps the urgency bands from overlapping.
pub const MAX_EXPECTED_DAYS: u32 = 365;

/// Category assigned to insights that carry none.
pub const DEFAULT_CATEGORY: &str = "general";

/// Number of items shown inside a collapsed insight group.
pub const GROUP_PREVIEW_SIZE: usize = 3;
