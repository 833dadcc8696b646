//! Version model for implementations and version restrictions
//!
//! This module provides the total ordering of implementation versions and the
//! range algebra used to restrict which versions a dependency may resolve to.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐
//! │ VersionDottedList│◀────│   VersionPart    │
//! │     (1.2.3)      │     │  (pre2, rc1, 3)  │
//! └──────────────────┘     └──────────────────┘
//!          ▲                        ▲
//!          └──────────┬─────────────┘
//!          ┌──────────────────────┐
//!          │ImplementationVersion │
//!          │    (1.2.3-pre2)      │
//!          └──────────────────────┘
//!                     ▲
//!          ┌──────────────────────┐     ┌──────────────┐
//!          │   VersionRangePart   │◀────│ VersionRange │
//!          │ (1.0..!2.0, !1.5, 3) │     │ (a|b|c)      │
//!          └──────────────────────┘     └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`dotted_list`]: Period-separated integer lists
//! - [`part`]: Modifier-tagged version parts
//! - [`implementation_version`]: Full versions with total ordering
//! - [`range_part`]: Exact, interval and exclusion conditions
//! - [`range`]: Unions of conditions with matching and intersection
//! - [`constraint`]: `not-before`/`before` pairs and per-interface restrictions
//! - [`candidates`]: Picking the newest version a range allows
//! - [`error`]: Parse and intersection errors

pub mod candidates;
pub mod constraint;
pub mod dotted_list;
pub mod error;
pub mod implementation_version;
pub mod part;
pub mod range;
pub mod range_part;

pub use constraint::{Constraint, Restriction};
pub use dotted_list::VersionDottedList;
pub use error::{FormatError, UnsupportedIntersection};
pub use implementation_version::ImplementationVersion;
pub use part::{VersionModifier, VersionPart};
pub use range::VersionRange;
pub use range_part::VersionRangePart;
