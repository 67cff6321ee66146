//! Fixed-size CAR header codec.
//!
//! ## Layout
//!
//! All fields are big-endian:
//!
//! | offset | size | field                                  |
//! |--------|------|----------------------------------------|
//! | 0      | 4    | signature, always `CART`               |
//! | 4      | 4    | cartridge type id                      |
//! | 8      | 4    | sum of ROM bytes, modulo 2^32          |
//! | 12     | 4    | blob offset from file start, 0 if none |

use crate::error::{Error, Result};
use crate::registry::{self, CartType};
use bytes::{Buf, BufMut};
use tracing::trace;

/// Header signature
pub const MAGIC: [u8; 4] = *b"CART";

/// Encoded header length in bytes
pub const HEADER_LEN: usize = 16;

/// Decoded CAR header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Cartridge type
    pub mode: &'static CartType,
    /// Sum of the ROM bytes, modulo 2^32
    pub checksum: u32,
    /// Absolute offset of the blob, or 0 when there is none
    pub blob_offset: u32,
}

impl Default for Header {
    fn default() -> Self {
        Self::new(registry::none())
    }
}

impl Header {
    /// Creates a header for the given type with zero checksum and no blob
    pub fn new(mode: &'static CartType) -> Self {
        Self {
            mode,
            checksum: 0,
            blob_offset: 0,
        }
    }

    /// Decodes a header from the start of `data`
    ///
    /// Bytes past [`HEADER_LEN`] are ignored. Type ids missing from the
    /// registry decode as the unknown sentinel.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(Error::TruncatedHeader {
                needed: HEADER_LEN,
                available: data.len(),
            });
        }

        let mut buf = &data[..HEADER_LEN];
        let mut magic = [0u8; 4];
        buf.copy_to_slice(&mut magic);
        if magic != MAGIC {
            return Err(Error::BadMagic { found: magic });
        }

        let raw_mode = buf.get_u32();
        let checksum = buf.get_u32();
        let blob_offset = buf.get_u32();
        trace!(
            "Decoded header: mode={} checksum={:#010x} blob_offset={}",
            raw_mode,
            checksum,
            blob_offset
        );

        Ok(Self {
            mode: registry::resolve_or_unknown(raw_mode),
            checksum,
            blob_offset,
        })
    }

    /// Appends the encoded header to `buf`
    pub fn write_to(&self, buf: &mut impl BufMut) {
        buf.put_slice(&MAGIC);
        // Negative sentinel ids wrap, so -1 is stored as 0xFFFFFFFF
        buf.put_u32(self.mode.id as u32);
        buf.put_u32(self.checksum);
        buf.put_u32(self.blob_offset);
    }

    /// Encodes the header
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        self.write_to(&mut &mut out[..]);
        out
    }
}

/// Sums `data` byte-wise modulo 2^32
pub fn checksum(data: &[u8]) -> u32 {
    data.iter()
        .fold(0u32, |sum, &byte| sum.wrapping_add(u32::from(byte)))
}
