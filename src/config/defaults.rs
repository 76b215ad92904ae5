// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Clock**: Tick interval and analog face size
//! - **Calendar**: Mini calendar highlighting

// ==========================================================================
// Clock Defaults
// ==========================================================================

/// Interval between clock ticks (1 Hz). Drift is acceptable.
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Default edge length of the analog clock canvas, in logical pixels.
pub const DEFAULT_CLOCK_SIZE: f32 = 200.0;

/// Minimum analog clock canvas size.
pub const MIN_CLOCK_SIZE: f32 = 120.0;

/// Maximum analog clock canvas size.
pub const MAX_CLOCK_SIZE: f32 = 400.0;

/// Whether the digital readout shows seconds by default.
pub const DEFAULT_SHOW_SECONDS: bool = true;

// ==========================================================================
// Calendar Defaults
// ==========================================================================

/// Whether the current day is highlighted in the mini calendar.
pub const DEFAULT_HIGHLIGHT_TODAY: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_CLOCK_SIZE < DEFAULT_CLOCK_SIZE);
    assert!(DEFAULT_CLOCK_SIZE < MAX_CLOCK_SIZE);
    assert!(TICK_INTERVAL_MS > 0);
};
