//! `sm-spatial` — precomputed path hints and grid navigation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`hints`]     | `PathHints` trait (the narrow lookup interface)            |
//! | [`guide`]     | `GuideTable`, `GuideTableBuilder`                          |
//! | [`loader`]    | JSON asset loading (`load_guide`, `GuideTable::from_json`) |
//! | [`navigator`] | `Navigator`, `SpeedStep`                                   |
//! | [`testkit`]   | `open_grid` (feature = `"testkit"` only)                   |
//! | [`error`]     | `SpatialError`, `SpatialResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `testkit` | Exposes an obstacle-free guide generator for tests.        |
//!
//! The navigator never searches.  It reads the candidate directions the
//! guide stores for `(from, to)` and filters them against the live
//! obstacle predicate and the grid bounds.

pub mod error;
pub mod guide;
pub mod hints;
pub mod loader;
pub mod navigator;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;


pub use error::{SpatialError, SpatialResult};
pub use guide::{GuideTable, GuideTableBuilder};
pub use hints::PathHints;
pub use loader::load_guide;
pub use navigator::{Navigator, SpeedStep};
