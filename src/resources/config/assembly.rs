use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::ensure_non_negative;
use crate::components::PartKind;
use crate::utils::{ConfigError, DEFAULT_SNAP_DISTANCE};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// Kinds that must be installed before flight
    pub required_parts: Vec<PartKind>,
    /// Maximum distance at which a dropped part snaps into its slot [m]
    pub snap_distance: f64,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            required_parts: PartKind::REQUIRED.to_vec(),
            snap_distance: DEFAULT_SNAP_DISTANCE,
        }
    }
}

impl AssemblyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_negative("snap_distance", self.snap_distance)?;
        if self.required_parts.contains(&PartKind::Camera) {
            warn!("Camera listed as a required part");
        }
        Ok(())
    }
}
