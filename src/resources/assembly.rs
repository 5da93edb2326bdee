use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::components::PartKind;
use crate::utils::AssemblyError;

/// Snapshot of assembly progress for UI and gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyProgress {
    pub installed: usize,
    pub total: usize,
    pub complete: bool,
}

impl From<AssemblyProgress> for (usize, usize, bool) {
    fn from(progress: AssemblyProgress) -> Self {
        (progress.installed, progress.total, progress.complete)
    }
}

/// Tracks which required part kinds are installed.
///
/// Completion is never stored; it is derived from the installed mapping on
/// every query.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyTracker {
    required: Vec<PartKind>,
    installed: BTreeMap<PartKind, bool>,
}

impl Default for AssemblyTracker {
    fn default() -> Self {
        Self::new(&PartKind::REQUIRED)
    }
}

impl AssemblyTracker {
    pub fn new(required: &[PartKind]) -> Self {
        let mut tracker = Self {
            required: Vec::new(),
            installed: BTreeMap::new(),
        };
        tracker.initialize(required);
        tracker
    }

    /// Reset to the given requirement list with nothing installed. Duplicate
    /// kinds are collapsed, keeping first-seen order.
    pub fn initialize(&mut self, required: &[PartKind]) {
        self.required.clear();
        self.installed.clear();
        for &kind in required {
            if self.installed.insert(kind, false).is_none() {
                self.required.push(kind);
            }
        }
    }

    /// Mark `kind` installed. Kinds outside the required set are ignored and
    /// `false` is returned.
    pub fn install(&mut self, kind: PartKind) -> bool {
        let was_complete = self.is_complete();
        match self.installed.get_mut(&kind) {
            Some(flag) => {
                *flag = true;
                if !was_complete && self.is_complete() {
                    info!("Quadcopter assembly complete");
                }
                true
            }
            None => {
                debug!("Ignoring install of non-required part {}", kind);
                false
            }
        }
    }

    /// Mark `kind` not installed. Completion is retracted immediately.
    pub fn remove(&mut self, kind: PartKind) -> bool {
        match self.installed.get_mut(&kind) {
            Some(flag) => {
                *flag = false;
                true
            }
            None => false,
        }
    }

    pub fn is_installed(&self, kind: PartKind) -> bool {
        self.installed.get(&kind).copied().unwrap_or(false)
    }

    pub fn is_required(&self, kind: PartKind) -> bool {
        self.installed.contains_key(&kind)
    }

    pub fn required(&self) -> &[PartKind] {
        &self.required
    }

    pub fn installed_count(&self) -> usize {
        self.installed.values().filter(|installed| **installed).count()
    }

    pub fn is_complete(&self) -> bool {
        self.installed.values().all(|installed| *installed)
    }

    pub fn progress(&self) -> AssemblyProgress {
        AssemblyProgress {
            installed: self.installed_count(),
            total: self.required.len(),
            complete: self.is_complete(),
        }
    }

    /// Required kinds not yet installed, in requirement order.
    pub fn missing(&self) -> impl Iterator<Item = PartKind> + '_ {
        self.required
            .iter()
            .copied()
            .filter(move |kind| !self.is_installed(*kind))
    }

    /// Succeeds only once every required kind is installed. The caller owns
    /// the actual transition into flight.
    pub fn try_start_flight(&self) -> Result<(), AssemblyError> {
        let progress = self.progress();
        if progress.complete {
            Ok(())
        } else {
            Err(AssemblyError::NotComplete {
                installed: progress.installed,
                total: progress.total,
            })
        }
    }
}
