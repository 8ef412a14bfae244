/// Standard date format used throughout the codebase: "2024-03-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Placeholder shown for absent optional fields
pub(crate) const EMPTY_CELL: &str = "-";
