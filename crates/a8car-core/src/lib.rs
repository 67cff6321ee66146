//! # a8car-core
//!
//! A library for working with Atari 8-bit cartridge images in the CAR
//! container format.
//!
//! This crate provides the core functionality for:
//! - Looking up cartridge hardware configurations by id or name
//! - Reading and writing CAR files (header, ROM image and optional blob)
//! - Guessing the cartridge type of a raw ROM dump from its length
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`registry`]: Static catalog of cartridge types
//! - [`header`]: The 16-byte CAR header codec
//! - [`container`]: The in-memory CAR file
//! - [`detect`]: Size-based type autodetection
//! - [`export`]: Text and JSON listings of the catalog
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use a8car_core::CarFile;
//! use std::fs;
//!
//! // Wrap a raw 32K dump, letting the type be detected from its size
//! let rom = fs::read("river_raid.rom")?;
//! let mut car = CarFile::from_rom(rom, None)?;
//! println!("detected {}", car.mode().description);
//!
//! car.save("river_raid.car")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Extensibility
//!
//! - [`DetectStrategy`]: Customize how a type is chosen for a raw ROM
//!

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod container;
pub mod detect;
pub mod error;
pub mod export;
pub mod header;
pub mod registry;

// Re-export primary types for convenience
pub use container::CarFile;
pub use detect::{detect_type, DetectStrategy, Detector, DetectorConfig};
pub use error::{Error, ErrorKind, Result};
pub use header::{Header, HEADER_LEN};
pub use registry::{resolve_or_unknown, resolve_strict, CartType, TypeQuery};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
