//! Mask generation configuration and validation.

use std::error::Error;
use std::fmt;

/// Configuration for mask generation, LOD selection, and caching.
///
/// Validated once by the coordinator at construction; the generator
/// assumes a valid configuration afterwards.
#[derive(Clone, Debug)]
pub struct MaskConfig {
    /// Samples per side at the nearest LOD tier. Default: 128.
    pub full_resolution: u32,
    /// Floor applied to every LOD tier, avoiding degenerate textures.
    /// Default: 32.
    pub min_resolution: u32,
    /// Viewer distance within which masks render at full resolution.
    /// Default: 10.0 world units.
    pub near_distance: f32,
    /// Viewer distance beyond which masks render at quarter resolution;
    /// between near and far they render at half. Default: 25.0.
    pub far_distance: f32,
    /// Maximum number of cached bitmaps. Default: 32.
    pub cache_capacity: usize,
    /// Minimum seconds between regenerations of one entity's mask,
    /// absent a stronger trigger. Default: 0.5.
    pub min_interval: f32,
    /// Viewer displacement (world units) that forces regeneration
    /// because the LOD tier may have changed. Default: 1.0.
    pub viewer_threshold: f32,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            full_resolution: 128,
            min_resolution: 32,
            near_distance: 10.0,
            far_distance: 25.0,
            cache_capacity: 32,
            min_interval: 0.5,
            viewer_threshold: 1.0,
        }
    }
}

impl MaskConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), MaskConfigError> {
        if self.full_resolution == 0 || self.min_resolution == 0 {
            return Err(MaskConfigError::ZeroResolution);
        }
        if self.min_resolution > self.full_resolution {
            return Err(MaskConfigError::MinAboveFull {
                min: self.min_resolution,
                full: self.full_resolution,
            });
        }
        if !self.near_distance.is_finite()
            || !self.far_distance.is_finite()
            || self.near_distance < 0.0
            || self.near_distance >= self.far_distance
        {
            return Err(MaskConfigError::InvalidLodDistances {
                near: self.near_distance,
                far: self.far_distance,
            });
        }
        if self.cache_capacity == 0 {
            return Err(MaskConfigError::ZeroCacheCapacity);
        }
        if !self.min_interval.is_finite() || self.min_interval < 0.0 {
            return Err(MaskConfigError::InvalidInterval {
                value: self.min_interval,
            });
        }
        if !self.viewer_threshold.is_finite() || self.viewer_threshold < 0.0 {
            return Err(MaskConfigError::InvalidViewerThreshold {
                value: self.viewer_threshold,
            });
        }
        Ok(())
    }
}

/// Errors detected during [`MaskConfig::validate`].
#[derive(Clone, Debug, PartialEq)]
pub enum MaskConfigError {
    /// A resolution tier is zero.
    ZeroResolution,
    /// The minimum resolution exceeds the full resolution.
    MinAboveFull {
        /// Configured minimum.
        min: u32,
        /// Configured full resolution.
        full: u32,
    },
    /// LOD distances are non-finite, negative, or not `near < far`.
    InvalidLodDistances {
        /// Configured near distance.
        near: f32,
        /// Configured far distance.
        far: f32,
    },
    /// The cache capacity is zero.
    ZeroCacheCapacity,
    /// The regeneration interval is negative or non-finite.
    InvalidInterval {
        /// The invalid value.
        value: f32,
    },
    /// The viewer movement threshold is negative or non-finite.
    InvalidViewerThreshold {
        /// The invalid value.
        value: f32,
    },
}

impl fmt::Display for MaskConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroResolution => write!(f, "mask resolution must be at least 1"),
            Self::MinAboveFull { min, full } => {
                write!(f, "min_resolution {min} exceeds full_resolution {full}")
            }
            Self::InvalidLodDistances { near, far } => {
                write!(f, "LOD distances must satisfy 0 <= near < far, got {near}..{far}")
            }
            Self::ZeroCacheCapacity => write!(f, "mask cache capacity must be at least 1"),
            Self::InvalidInterval { value } => {
                write!(f, "regeneration interval must be finite and >= 0, got {value}")
            }
            Self::InvalidViewerThreshold { value } => {
                write!(f, "viewer threshold must be finite and >= 0, got {value}")
            }
        }
    }
}

impl Error for MaskConfigError {}
