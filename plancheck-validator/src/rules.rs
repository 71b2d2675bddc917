//! Process-wide validation rules.
//!
//! The vocabulary, format list, and alias groups are fixed constants so the
//! row checks stay pure functions; they are never rebuilt per call.

/// Item types accepted by the scheduling importer. Values are compared
/// case-insensitively after trimming.
pub const VALID_TYPES: &[&str] = &["task", "milestone", "release", "meeting"];

/// Header spellings consulted for the item-type column, in priority order.
/// Header matching is case-sensitive; the first spelling present wins.
pub const TYPE_ALIASES: &[&str] = &["type", "Type"];

/// Date formats tried in order; the first full-string match wins.
///
/// chrono's numeric fields accept both padded (`06/01/2025`) and unpadded
/// (`6/1/2025`) components, and the final `%-m/%-d/%Y` entry pins the
/// unpadded slash form explicitly. No time-of-day or timezone component
/// is accepted by any entry.
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",   // ISO: 2025-06-01
    "%m/%d/%Y",   // US slash: 06/01/2025
    "%m-%d-%Y",   // US dash: 6-1-2025
    "%-m/%-d/%Y", // US slash no padding: 6/1/2025
];

/// Alias groups for the logical date fields (start, end, generic), each in
/// priority order. Only the first alias present in a file's header is
/// consulted for its group: even when that column's value is empty, later
/// aliases in the same group are never used as a fallback.
pub const DATE_FIELD_GROUPS: &[&[&str]] = &[
    &["start_date", "Start Date", "Start", "start"],
    &["end_date", "End Date", "Finish", "end", "Due Date"],
    &["Date", "date"],
];
