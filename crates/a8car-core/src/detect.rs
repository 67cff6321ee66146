//! Cartridge type autodetection from ROM length.
//!
//! ## Algorithm
//!
//! 1. Take the first entry of a short preferred list (plain 8K/16K and the
//!    XEGS boards) whose canonical size equals the ROM length
//! 2. Failing that, take the first real registry entry of that size,
//!    passing over entries flagged as not recommended unless nothing
//!    else fits
//! 3. Failing that, report [`Error::NoMatchingType`]
//!
//! Many sizes are shared by several boards (32 KiB alone matches a dozen).
//! Ties are broken purely by list order; the ROM contents are never
//! inspected, so callers should let the user override the choice.
//!
//! ## Extensibility
//!
//! The [`DetectStrategy`] trait allows other policies to be plugged into
//! [`CarFile::from_rom_with`](crate::CarFile::from_rom_with).

use crate::error::{Error, Result};
use crate::registry::{self, CartType};
use tracing::{debug, info};

/// Type ids tried first, in order: 8K, 16K, then XEGS 32K through 1M
pub const PREFERRED_MODES: [i32; 8] = [1, 2, 12, 13, 14, 23, 24, 25];

/// Configuration for the detector
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Ids consulted before the full registry
    pub preferred: Vec<i32>,
    /// Pass over not-recommended entries while a recommended one fits
    pub skip_not_recommended: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            preferred: PREFERRED_MODES.to_vec(),
            skip_not_recommended: true,
        }
    }
}

impl DetectorConfig {
    /// Creates a new detector config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the preferred id list
    pub fn preferred(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        self.preferred = ids.into_iter().collect();
        self
    }

    /// Sets whether not-recommended entries are deferred
    pub fn skip_not_recommended(mut self, skip: bool) -> Self {
        self.skip_not_recommended = skip;
        self
    }
}

/// Trait for implementing custom detection policies
pub trait DetectStrategy {
    /// Chooses a type for a ROM of `len` bytes
    fn detect(&self, len: usize) -> Result<&'static CartType>;

    /// Returns every real type whose canonical size is `len`
    fn candidates(&self, len: usize) -> Vec<&'static CartType> {
        candidates(len)
    }
}

/// Standard size-based detector
#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    /// Creates a new detector with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new detector with custom configuration
    pub fn with_config(config: DetectorConfig) -> Self {
        Self { config }
    }

    fn from_preferred(&self, len: usize) -> Option<&'static CartType> {
        self.config
            .preferred
            .iter()
            .filter_map(|&id| registry::get(id.into()))
            .find(|cart| cart.size_bytes() == len)
    }

    fn from_registry(&self, len: usize) -> Option<&'static CartType> {
        let mut matching = registry::all()
            .iter()
            .filter(|cart| !cart.is_virtual() && cart.size_bytes() == len);

        if self.config.skip_not_recommended {
            let all: Vec<_> = matching.collect();
            all.iter()
                .find(|cart| cart.is_recommended())
                .or_else(|| all.first())
                .copied()
        } else {
            matching.next()
        }
    }
}

impl DetectStrategy for Detector {
    fn detect(&self, len: usize) -> Result<&'static CartType> {
        // The "none" sentinel has size 0; an empty ROM is never a match
        if len == 0 {
            return Err(Error::NoMatchingType { len });
        }

        let names: Vec<&str> = self.candidates(len).iter().map(|cart| cart.name).collect();
        info!(
            "Autodetecting: ROM size {} bytes, all matching options: {}",
            len,
            names.join(", ")
        );

        let chosen = match self.from_preferred(len) {
            Some(cart) => cart,
            None => {
                debug!("No preferred type of {} bytes, scanning full registry", len);
                self.from_registry(len)
                    .ok_or(Error::NoMatchingType { len })?
            }
        };

        info!("Detected cart type {}", chosen);
        Ok(chosen)
    }
}

/// Returns every real type whose canonical size is `len`, in catalog order
pub fn candidates(len: usize) -> Vec<&'static CartType> {
    registry::all()
        .iter()
        .filter(|cart| !cart.is_virtual() && cart.size_bytes() == len)
        .collect()
}

/// Detects a type with the default detector
pub fn detect_type(len: usize) -> Result<&'static CartType> {
    Detector::new().detect(len)
}
