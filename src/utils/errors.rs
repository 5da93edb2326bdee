use std::io;
use thiserror::Error;

/// Top-level error for the simulation binary and I/O-facing helpers.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Assembly error: {0}")]
    Assembly(#[from] AssemblyError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid parameter '{name}' with value '{value}'")]
    InvalidParameter { name: String, value: String },
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl ConfigError {
    pub(crate) fn invalid(name: &str, value: f64) -> Self {
        ConfigError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Precondition failures surfaced by the assembly tracker.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Assembly not complete: {installed} of {total} required parts installed")]
    NotComplete { installed: usize, total: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(installed: usize, total: usize) -> Result<(), AssemblyError> {
        if installed < total {
            Err(AssemblyError::NotComplete { installed, total })
        } else {
            Ok(())
        }
    }

    fn start(installed: usize, total: usize) -> Result<(), SimError> {
        gate(installed, total)?;
        Ok(())
    }

    #[test]
    fn test_assembly_error_converts() {
        let err = start(10, 11).unwrap_err();
        assert!(matches!(
            err,
            SimError::Assembly(AssemblyError::NotComplete {
                installed: 10,
                total: 11
            })
        ));
        assert_eq!(
            err.to_string(),
            "Assembly error: Assembly not complete: 10 of 11 required parts installed"
        );
        assert!(start(11, 11).is_ok());
    }

    #[test]
    fn test_config_error_converts() {
        let err: SimError = ConfigError::invalid("drag", -1.0).into();
        assert!(matches!(err, SimError::Config(ConfigError::InvalidParameter { .. })));
    }
}
