// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use the Fluent localization system. `.ftl` files are
//! embedded at build time from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Weekday and month names plus date/time patterns for the clock
//! - Fallback to `en-US` when no better match exists

mod format;
pub mod fluent;
