//! Read-only dataset snapshot.
//!
//! A [`DatasetStore`] is built once from normalized records and never
//! mutated afterwards. Localized release labels and name memberships are
//! computed at load time so queries only do map lookups.

mod error;
mod snapshot;

pub use error::{Result, StoreError};
pub use snapshot::{DatasetStore, ReleaseLabels};
