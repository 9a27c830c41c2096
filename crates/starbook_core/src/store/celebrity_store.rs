//! In-memory celebrity store.
//!
//! # Responsibility
//! - Load the roster once, decorating every seed with derived `age`.
//! - Serve the two mutating operations, `update` and `delete`.
//!
//! # Invariants
//! - `load` runs at most once per store lifetime, whatever its outcome.
//! - `update`/`delete` are total: unknown ids are silent no-ops.
//! - `update` never touches `age`.
//! - Every mutation publishes a freshly built list; a reader holding the
//!   previous slice never sees it change underneath.

use crate::model::celebrity::{Celebrity, CelebrityId, CelebrityPatch};
use crate::store::source::CelebritySource;
use chrono::NaiveDate;
use log::{debug, error, info, warn};

/// Fixed user-facing text published when the initial fetch fails.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load celebrities";

/// Publication state of the one-time load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// The fetch has not completed yet.
    Loading,
    /// The fetch failed; the message is the fixed user-facing text.
    Failed(String),
    /// The roster is published and serving reads.
    Ready,
}

impl Default for LoadPhase {
    fn default() -> Self {
        Self::Loading
    }
}

/// Sole owner of the in-memory roster.
#[derive(Debug, Default)]
pub struct CelebrityStore {
    phase: LoadPhase,
    celebrities: Vec<Celebrity>,
}

impl CelebrityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current publication state.
    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// The published roster. Empty until a load succeeds.
    pub fn celebrities(&self) -> &[Celebrity] {
        &self.celebrities
    }

    /// Looks up one record by id.
    pub fn get(&self, id: CelebrityId) -> Option<&Celebrity> {
        self.celebrities.iter().find(|c| c.id == id)
    }

    /// Fetches the seed collection and publishes the decorated roster.
    ///
    /// # Contract
    /// - Runs exactly once per store lifetime; later calls are no-ops.
    /// - On success every record carries `age` derived at `today`.
    /// - On failure publishes [`LOAD_FAILURE_MESSAGE`] instead of a roster;
    ///   the underlying cause goes to the log, never to the caller.
    pub fn load(&mut self, source: &dyn CelebritySource, today: NaiveDate) {
        if self.phase != LoadPhase::Loading {
            warn!("event=roster_load module=store status=skipped reason=already_loaded");
            return;
        }

        match source.fetch() {
            Ok(seeds) => {
                self.celebrities = seeds
                    .into_iter()
                    .map(|seed| Celebrity::from_seed(seed, today))
                    .collect();
                self.phase = LoadPhase::Ready;
                info!(
                    "event=roster_load module=store status=ok count={} today={today}",
                    self.celebrities.len()
                );
            }
            Err(err) => {
                error!("event=roster_load module=store status=error error={err}");
                self.phase = LoadPhase::Failed(LOAD_FAILURE_MESSAGE.to_string());
            }
        }
    }

    /// Replaces exactly the fields named by `patch` on the matching record.
    ///
    /// Unknown ids leave the roster unchanged. Derived `age` is never
    /// recomputed here.
    pub fn update(&mut self, id: CelebrityId, patch: &CelebrityPatch) {
        if self.get(id).is_none() {
            debug!("event=roster_update module=store status=noop id={id}");
            return;
        }

        let next: Vec<Celebrity> = self
            .celebrities
            .iter()
            .map(|record| {
                if record.id == id {
                    let mut updated = record.clone();
                    patch.apply_to(&mut updated);
                    updated
                } else {
                    record.clone()
                }
            })
            .collect();
        self.celebrities = next;
        info!("event=roster_update module=store status=ok id={id}");
    }

    /// Removes the matching record. Idempotent; unknown ids are no-ops.
    pub fn delete(&mut self, id: CelebrityId) {
        if self.get(id).is_none() {
            debug!("event=roster_delete module=store status=noop id={id}");
            return;
        }

        let next: Vec<Celebrity> = self
            .celebrities
            .iter()
            .filter(|record| record.id != id)
            .cloned()
            .collect();
        self.celebrities = next;
        info!("event=roster_delete module=store status=ok id={id}");
    }
}
