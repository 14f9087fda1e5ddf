// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod filter;
pub mod units;

pub use activity::{Activity, RawActivityRecord, RouteBounds, SanitizedActivity};
pub use filter::{derive_view, ActivityFilter};
pub use units::UnitSystem;
