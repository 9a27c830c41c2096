//! Core domain logic for starbook.
//! This crate is the single source of truth for business invariants.

pub mod browse;
pub mod logging;
pub mod model;
pub mod search;
pub mod store;

pub use browse::coordinator::{BrowseCoordinator, EditDraft, PanelPhase};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::celebrity::{
    derive_age, is_valid_country, Celebrity, CelebrityId, CelebrityPatch, CelebritySeed, Gender,
};
pub use search::name_filter::{filter_by_name, matches_name};
pub use store::celebrity_store::{CelebrityStore, LoadPhase, LOAD_FAILURE_MESSAGE};
pub use store::source::{
    CelebritySource, FetchResult, JsonFileSource, LoadError, DEFAULT_RESOURCE_PATH,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
