// SPDX-License-Identifier: MPL-2.0
//! `showcase_clock` is the clock and mini calendar panel of a component
//! showcase, built with the Iced GUI framework.
//!
//! The [`clock`] and [`calendar`] modules hold the pure core (hand geometry,
//! face rendering against a drawing surface, the display mode controller and
//! the month grid). [`app`] and [`ui`] host them in an Iced window with
//! Fluent localization and themed styling.

#![doc(html_root_url = "https://docs.rs/showcase_clock/0.1.0")]

pub mod app;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
