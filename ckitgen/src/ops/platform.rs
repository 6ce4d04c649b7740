//! Platform operation - every predicate by name.

use ckitgen_core::Platform;

use crate::reports::{PlatformReport, PlatformRow};

/// Collect every platform predicate.
pub fn platforms() -> PlatformReport {
    PlatformReport {
        rows: Platform::ALL
            .into_iter()
            .map(|platform| PlatformRow {
                name: platform.as_str(),
                predicate: platform.predicate(),
            })
            .collect(),
    }
}
