//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for layout dimensions used across
//! multiple rendering components.

/// Height of the header bar in rows.
///
/// The header displays the title, the greeting and the help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the summary bar: counts on the left, filter tabs on the right.
pub const SUMMARY_HEIGHT: u16 = 3;

/// Height of the new-task form.
pub const FORM_HEIGHT: u16 = 3;

/// Height of the status line at the bottom.
pub const STATUS_HEIGHT: u16 = 1;

/// Minimum terminal height for useful rendering (content area).
///
/// Below this height, we display a "terminal too small" message. The app
/// screen needs the summary, the form, the status line and at least three
/// list rows:
/// - Summary: 3 rows
/// - Form: 3 rows
/// - List borders: 2 rows
/// - List rows: 3 rows
/// - Status: 1 row
pub const MIN_HEIGHT: u16 = 12;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The new-task form puts the description and three date fields side by
/// side; below this width the date fields become unreadable.
pub const MIN_WIDTH: u16 = 60;

/// Width of the day and month fields, borders included.
pub const DATE_FIELD_WIDTH: u16 = 7;

/// Width of the year field, borders included.
pub const YEAR_FIELD_WIDTH: u16 = 9;
