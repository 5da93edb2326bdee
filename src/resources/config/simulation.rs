use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{AssemblyConfig, FlightSupervisorConfig, PhysicsConfig, QuadcopterConfig};
use crate::utils::ConfigError;

/// Top-level configuration file for a simulation session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub quadcopter: QuadcopterConfig,
    pub assembly: AssemblyConfig,
    pub flight: FlightSupervisorConfig,
}

impl SimulationConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        self.quadcopter.validate()?;
        self.assembly.validate()?;
        self.flight.validate()
    }
}
