// SPDX-License-Identifier: MPL-2.0
pub mod clock_face;

pub use clock_face::ClockFace;
