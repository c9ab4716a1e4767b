//! Coordinator configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use veil_mask::{MaskConfig, MaskConfigError};

/// Configuration for a [`FieldCoordinator`](crate::FieldCoordinator).
///
/// Validated once at construction; all runtime operations assume a
/// valid configuration.
#[derive(Clone, Debug)]
pub struct CoordinatorConfig {
    /// Effect-field cell size in world units. Default: 1.0.
    pub cell_size: f32,
    /// Seconds between emitter movement scans. The field is rebuilt at
    /// most this often in response to movement — sub-second granularity
    /// is enough for field precision, and rebuilding every frame would
    /// be wasted work. Default: 0.25.
    pub scan_interval: f32,
    /// Emitter displacement (world units) below which movement is
    /// treated as floating-point jitter and ignored. Default: 0.01.
    pub movement_threshold: f32,
    /// Transition speed in amount-units per second; a full reveal takes
    /// `1.0 / reveal_rate` seconds. Default: 2.0.
    pub reveal_rate: f32,
    /// Mask generation, LOD, and cache settings.
    pub mask: MaskConfig,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            scan_interval: 0.25,
            movement_threshold: 0.01,
            reveal_rate: 2.0,
            mask: MaskConfig::default(),
        }
    }
}

impl CoordinatorConfig {
    /// Check structural invariants, including the nested mask config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize {
                value: self.cell_size,
            });
        }
        if !self.scan_interval.is_finite() || self.scan_interval < 0.0 {
            return Err(ConfigError::InvalidScanInterval {
                value: self.scan_interval,
            });
        }
        if !self.movement_threshold.is_finite() || self.movement_threshold < 0.0 {
            return Err(ConfigError::InvalidMovementThreshold {
                value: self.movement_threshold,
            });
        }
        if !self.reveal_rate.is_finite() || self.reveal_rate <= 0.0 {
            return Err(ConfigError::InvalidRevealRate {
                value: self.reveal_rate,
            });
        }
        self.mask.validate().map_err(ConfigError::Mask)
    }
}

/// Errors detected during [`CoordinatorConfig::validate`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Cell size is non-finite, zero, or negative.
    InvalidCellSize {
        /// The invalid value.
        value: f32,
    },
    /// Scan interval is non-finite or negative.
    InvalidScanInterval {
        /// The invalid value.
        value: f32,
    },
    /// Movement threshold is non-finite or negative.
    InvalidMovementThreshold {
        /// The invalid value.
        value: f32,
    },
    /// Reveal rate is non-finite, zero, or negative — the transition
    /// would never converge.
    InvalidRevealRate {
        /// The invalid value.
        value: f32,
    },
    /// The nested mask configuration is invalid.
    Mask(MaskConfigError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellSize { value } => {
                write!(f, "cell_size must be finite and > 0, got {value}")
            }
            Self::InvalidScanInterval { value } => {
                write!(f, "scan_interval must be finite and >= 0, got {value}")
            }
            Self::InvalidMovementThreshold { value } => {
                write!(f, "movement_threshold must be finite and >= 0, got {value}")
            }
            Self::InvalidRevealRate { value } => {
                write!(f, "reveal_rate must be finite and > 0, got {value}")
            }
            Self::Mask(err) => write!(f, "mask config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mask(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(CoordinatorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_cell_size_rejected() {
        let cfg = CoordinatorConfig {
            cell_size: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidCellSize { .. })
        ));
    }

    #[test]
    fn negative_scan_interval_rejected() {
        let cfg = CoordinatorConfig {
            scan_interval: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidScanInterval { .. })
        ));
    }

    #[test]
    fn zero_reveal_rate_rejected() {
        let cfg = CoordinatorConfig {
            reveal_rate: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidRevealRate { .. })
        ));
    }

    #[test]
    fn nested_mask_error_surfaces_with_source() {
        let cfg = CoordinatorConfig {
            mask: MaskConfig {
                cache_capacity: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Mask(_)));
        assert!(Error::source(&err).is_some());
    }
}
