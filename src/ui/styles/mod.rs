// SPDX-License-Identifier: MPL-2.0
//! Centralized styles, parameterized by the active color scheme.

pub mod button;
pub mod container;
