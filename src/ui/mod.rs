// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns a `State`, a `Message` enum and a `view` taking a `ViewContext`.
//!
//! # Components
//!
//! - [`clock_panel`] - Digital/analog clock card
//! - [`calendar_panel`] - Mini calendar card with month paging
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (analog clock face)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (spacing, sizing, typography)
//! - [`theming`] - Theme presets and color schemes

pub mod calendar_panel;
pub mod clock_panel;
pub mod design_tokens;
pub mod styles;
pub mod theming;
pub mod widgets;
