//! Cartridge type registry.
//!
//! A fixed catalog of Atari 8-bit and 5200 cartridge hardware configurations,
//! keyed by the numeric type id stored in CAR headers.
//!
//! ## Resolution
//!
//! Two lookups are provided and they differ only in how a miss is handled:
//!
//! - [`resolve_strict`] fails with [`Error::UnknownType`]. Use it wherever a
//!   person names a type explicitly.
//! - [`resolve_or_unknown`] maps every miss onto the [`MODE_UNKNOWN`]
//!   sentinel. Use it for ids decoded from untrusted header bytes.
//!
//! Both accept anything convertible into a [`TypeQuery`]: a numeric id, a
//! numeric string (`"12"`, `"0x0C"`, `"0o14"`, `"0b1100"`) or a symbolic
//! name (`"Mode_XEGS_32K"`, `"xegs_32k"`).
//!
//! ```
//! use a8car_core::registry;
//!
//! let xegs = registry::resolve_strict("0x0C")?;
//! assert_eq!(xegs.name, "Mode_XEGS_32K");
//! assert_eq!(xegs.size, 32 * 1024);
//!
//! assert!(registry::resolve_strict(999).is_err());
//! assert_eq!(registry::resolve_or_unknown(999).id, registry::MODE_UNKNOWN);
//! # Ok::<(), a8car_core::Error>(())
//! ```

mod table;

use crate::error::{Error, Result};
use bitflags::bitflags;
use std::fmt;
use std::ops::Range;

use table::{ALIASES, CART_TYPES};

/// Id of the "no cartridge" sentinel
pub const MODE_NONE: i32 = 0;

/// Id of the "unknown cartridge" sentinel
pub const MODE_UNKNOWN: i32 = -1;

/// Target machine family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum System {
    /// Atari 400/800/XL/XE computers
    Atari800,
    /// Atari 5200 console
    Atari5200,
}

impl System {
    /// Returns a short human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            System::Atari800 => "800/XL/XE",
            System::Atari5200 => "5200",
        }
    }
}

bitflags! {
    /// ROM size classes a configuration accepts
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SizeClasses: u16 {
        /// 2 KiB
        const SIZE_2K = 0x0001;
        /// 4 KiB
        const SIZE_4K = 0x0002;
        /// 8 KiB
        const SIZE_8K = 0x0004;
        /// 16 KiB
        const SIZE_16K = 0x0008;
        /// 32 KiB
        const SIZE_32K = 0x0010;
        /// 40 KiB
        const SIZE_40K = 0x0020;
        /// 64 KiB
        const SIZE_64K = 0x0040;
        /// 128 KiB
        const SIZE_128K = 0x0080;
        /// 256 KiB
        const SIZE_256K = 0x0100;
        /// 512 KiB
        const SIZE_512K = 0x0200;
        /// 1 MiB
        const SIZE_1M = 0x0400;
        /// 2 MiB
        const SIZE_2M = 0x0800;
        /// 4 MiB
        const SIZE_4M = 0x1000;
        /// 32 MiB
        const SIZE_32M = 0x2000;
        /// 64 MiB
        const SIZE_64M = 0x4000;
        /// 128 MiB
        const SIZE_128M = 0x8000;
    }
}

/// Single size classes paired with their byte length, ascending
const SIZE_CLASS_BYTES: [(SizeClasses, usize); 16] = [
    (SizeClasses::SIZE_2K, 0x800),
    (SizeClasses::SIZE_4K, 0x1000),
    (SizeClasses::SIZE_8K, 0x2000),
    (SizeClasses::SIZE_16K, 0x4000),
    (SizeClasses::SIZE_32K, 0x8000),
    (SizeClasses::SIZE_40K, 0xA000),
    (SizeClasses::SIZE_64K, 0x1_0000),
    (SizeClasses::SIZE_128K, 0x2_0000),
    (SizeClasses::SIZE_256K, 0x4_0000),
    (SizeClasses::SIZE_512K, 0x8_0000),
    (SizeClasses::SIZE_1M, 0x10_0000),
    (SizeClasses::SIZE_2M, 0x20_0000),
    (SizeClasses::SIZE_4M, 0x40_0000),
    (SizeClasses::SIZE_32M, 0x200_0000),
    (SizeClasses::SIZE_64M, 0x400_0000),
    (SizeClasses::SIZE_128M, 0x800_0000),
];

impl SizeClasses {
    /// Returns the byte length of a single size class
    ///
    /// Returns `None` for empty or combined flag sets.
    pub fn bytes(self) -> Option<usize> {
        SIZE_CLASS_BYTES
            .iter()
            .find(|(class, _)| *class == self)
            .map(|&(_, bytes)| bytes)
    }

    /// Returns the largest size class not exceeding `len`
    ///
    /// Images with an auxiliary store appended (e.g. 0x2100 bytes) fall
    /// into the class of their ROM part.
    pub fn class_for(len: usize) -> Option<SizeClasses> {
        SIZE_CLASS_BYTES
            .iter()
            .rev()
            .find(|&&(_, bytes)| bytes <= len)
            .map(|&(class, _)| class)
    }
}

/// Auxiliary store attached to a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritableStore {
    /// No writable store
    None,
    /// 256 bytes
    Bytes256,
    /// 8 KiB
    Bytes8K,
}

impl WritableStore {
    /// Returns a short human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            WritableStore::None => "none",
            WritableStore::Bytes256 => "256 bytes",
            WritableStore::Bytes8K => "8K",
        }
    }
}

/// Bank switching strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banking {
    /// Not banked
    None,
    /// Bank selected by the value written
    Data,
    /// Data-selected with a disable switch
    DataSwitchable,
    /// Bank selected by the address accessed
    Address,
    /// Address-selected with a disable switch
    AddressSwitchable,
    /// Address-selected in $D570-$D57F
    AddressD57x,
    /// Address-selected in $D5D0-$D5DF
    AddressD5Dx,
    /// Address-selected in $D5E0-$D5EF
    AddressD5Ex,
    /// Address-selected in $D5E0-$D5FF
    AddressD5EFx,
    /// Any access to the control range
    Any,
    /// Access to $BFxx (5200 super carts)
    Bfxx,
    /// Irregular hardware
    Other,
}

impl Banking {
    /// Returns a short human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Banking::None => "none",
            Banking::Data => "data",
            Banking::DataSwitchable => "data, switchable",
            Banking::Address => "address",
            Banking::AddressSwitchable => "address, switchable",
            Banking::AddressD57x => "address $D57x",
            Banking::AddressD5Dx => "address $D5Dx",
            Banking::AddressD5Ex => "address $D5Ex",
            Banking::AddressD5EFx => "address $D5Ex-$D5Fx",
            Banking::Any => "any access",
            Banking::Bfxx => "access $BFxx",
            Banking::Other => "other",
        }
    }
}

/// Address window mapped at reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitRange {
    /// 2 KiB
    Bank2K,
    /// 4 KiB
    Bank4K,
    /// 8 KiB in the left slot
    Bank8K,
    /// 8 KiB in the right slot ($8000-$9FFF)
    RightSlot8K,
    /// 16 KiB
    Bank16K,
    /// 32 KiB
    Bank32K,
}

impl InitRange {
    /// Returns the window length in bytes
    pub fn window_len(&self) -> usize {
        match self {
            InitRange::Bank2K => 0x800,
            InitRange::Bank4K => 0x1000,
            InitRange::Bank8K | InitRange::RightSlot8K => 0x2000,
            InitRange::Bank16K => 0x4000,
            InitRange::Bank32K => 0x8000,
        }
    }

    /// Returns true for the right cartridge slot of the 800
    pub fn is_right_slot(&self) -> bool {
        matches!(self, InitRange::RightSlot8K)
    }
}

/// Portion of the image holding the boot header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPolicy {
    /// First 4 KiB
    First4K,
    /// First 8 KiB
    First8K,
    /// First 8 KiB, whole bank preferred
    First8KPreferAll8K,
    /// First 16 KiB
    First16K,
    /// First 16 KiB, whole bank preferred
    First16KPreferAll16K,
    /// First 32 KiB
    First32K,
    /// Last 32 KiB
    Last32K,
    /// Last 16 bytes
    Last16B,
    /// Last 8 KiB, whole bank preferred
    Last8KPreferAll8K,
}

impl HeaderPolicy {
    /// Returns the byte range of an image of `rom_len` bytes holding the
    /// boot header, clamped to the image
    pub fn span(&self, rom_len: usize) -> Range<usize> {
        let head = |n: usize| 0..n.min(rom_len);
        let tail = |n: usize| rom_len.saturating_sub(n)..rom_len;
        match self {
            HeaderPolicy::First4K => head(0x1000),
            HeaderPolicy::First8K | HeaderPolicy::First8KPreferAll8K => head(0x2000),
            HeaderPolicy::First16K | HeaderPolicy::First16KPreferAll16K => head(0x4000),
            HeaderPolicy::First32K => head(0x8000),
            HeaderPolicy::Last32K => tail(0x8000),
            HeaderPolicy::Last16B => tail(16),
            HeaderPolicy::Last8KPreferAll8K => tail(0x2000),
        }
    }
}

/// Autodetection hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectFlag {
    /// No restriction
    None,
    /// Only chosen when nothing else matches
    DontRecommend,
}

/// A cartridge hardware configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartType {
    /// Type id as stored in CAR headers
    pub id: i32,
    /// Symbolic name
    pub name: &'static str,
    /// Target machine family
    pub system: System,
    /// Accepted ROM size classes
    pub sizes: SizeClasses,
    /// Attached writable store
    pub store: WritableStore,
    /// Bank switching strategy
    pub banking: Banking,
    /// Window mapped at reset
    pub init: InitRange,
    /// Boot header location
    pub header: HeaderPolicy,
    /// Autodetection hint
    pub detect: DetectFlag,
    /// Expected image length in bytes
    pub size: u32,
    /// Human-readable label
    pub description: &'static str,
}

impl CartType {
    /// Returns true for sentinels and ids outside the header's 0..=255 range
    pub fn is_virtual(&self) -> bool {
        is_virtual(self.id.into())
    }

    /// Returns true unless the type is flagged as not recommended
    pub fn is_recommended(&self) -> bool {
        self.detect != DetectFlag::DontRecommend
    }

    /// Returns the expected image length in bytes
    pub fn size_bytes(&self) -> usize {
        self.size as usize
    }
}

impl fmt::Display for CartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Input accepted by the resolution functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeQuery<'a> {
    /// Numeric type id
    Id(i64),
    /// Numeric string or symbolic name
    Text(&'a str),
}

impl From<i64> for TypeQuery<'_> {
    fn from(id: i64) -> Self {
        TypeQuery::Id(id)
    }
}

impl From<i32> for TypeQuery<'_> {
    fn from(id: i32) -> Self {
        TypeQuery::Id(id.into())
    }
}

impl From<u32> for TypeQuery<'_> {
    fn from(id: u32) -> Self {
        TypeQuery::Id(id.into())
    }
}

impl<'a> From<&'a str> for TypeQuery<'a> {
    fn from(text: &'a str) -> Self {
        TypeQuery::Text(text)
    }
}

impl<'a> From<&'a String> for TypeQuery<'a> {
    fn from(text: &'a String) -> Self {
        TypeQuery::Text(text.as_str())
    }
}

impl From<&CartType> for TypeQuery<'_> {
    fn from(cart: &CartType) -> Self {
        TypeQuery::Id(cart.id.into())
    }
}

impl fmt::Display for TypeQuery<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeQuery::Id(id) => write!(f, "{}", id),
            TypeQuery::Text(text) => f.write_str(text),
        }
    }
}

/// Returns true for the sentinels and for ids outside `0..=255`
pub fn is_virtual(id: i64) -> bool {
    !(0..=255).contains(&id) || id == i64::from(MODE_NONE) || id == i64::from(MODE_UNKNOWN)
}

/// Returns every entry, sentinels included, in catalog order
pub fn all() -> &'static [CartType] {
    CART_TYPES
}

/// Returns the entry with the given id
pub fn get(id: i64) -> Option<&'static CartType> {
    CART_TYPES.iter().find(|cart| i64::from(cart.id) == id)
}

/// Returns the "unknown cartridge" sentinel
pub fn unknown() -> &'static CartType {
    sentinel(MODE_UNKNOWN)
}

/// Returns the "no cartridge" sentinel
pub fn none() -> &'static CartType {
    sentinel(MODE_NONE)
}

fn sentinel(id: i32) -> &'static CartType {
    match CART_TYPES.iter().find(|cart| cart.id == id) {
        Some(cart) => cart,
        None => unreachable!("sentinel {} missing from cartridge table", id),
    }
}

/// Returns all real (non-virtual) entries sorted by id
pub fn list_real() -> Vec<&'static CartType> {
    let mut real: Vec<_> = CART_TYPES.iter().filter(|cart| !cart.is_virtual()).collect();
    real.sort_by_key(|cart| cart.id);
    real
}

/// Looks up an entry by symbolic name
///
/// Exact names and aliases match first; then the comparison ignores ASCII
/// case and an optional `Mode_` prefix.
pub fn lookup_name(name: &str) -> Option<&'static CartType> {
    let name = name.trim();

    if let Some(cart) = CART_TYPES.iter().find(|cart| cart.name == name) {
        return Some(cart);
    }
    if let Some(&(_, id)) = ALIASES.iter().find(|(alias, _)| *alias == name) {
        return get(id.into());
    }

    let wanted = strip_mode_prefix(name);
    CART_TYPES
        .iter()
        .map(|cart| (cart.name, cart.id))
        .chain(ALIASES.iter().copied())
        .find(|(candidate, _)| strip_mode_prefix(candidate).eq_ignore_ascii_case(wanted))
        .and_then(|(_, id)| get(id.into()))
}

fn strip_mode_prefix(name: &str) -> &str {
    match name.get(..5) {
        Some(prefix) if prefix.eq_ignore_ascii_case("mode_") => &name[5..],
        _ => name,
    }
}

/// Parses an integer literal with an optional sign and radix prefix
///
/// Accepts `0x`, `0o` and `0b` prefixes and `_` digit separators. Decimal
/// literals with leading zeros are rejected.
pub fn parse_id(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        Some("0o" | "0O") => (8, &unsigned[2..]),
        Some("0b" | "0B") => (2, &unsigned[2..]),
        _ => (10, unsigned),
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }
    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    if radix == 10 && digits.starts_with('0') && !digits.trim_start_matches('0').is_empty() {
        return None;
    }

    let value = i64::from_str_radix(&digits, radix).ok()?;
    Some(if negative { -value } else { value })
}

fn find(query: TypeQuery<'_>) -> Option<&'static CartType> {
    match query {
        TypeQuery::Id(id) => get(id),
        TypeQuery::Text(text) => match parse_id(text) {
            Some(id) => get(id),
            None => lookup_name(text),
        },
    }
}

/// Resolves an id, numeric string or name, failing on a miss
pub fn resolve_strict<'a>(query: impl Into<TypeQuery<'a>>) -> Result<&'static CartType> {
    let query = query.into();
    find(query).ok_or_else(|| Error::unknown_type(query.to_string()))
}

/// Resolves an id, numeric string or name, mapping a miss to [`unknown()`]
pub fn resolve_or_unknown<'a>(query: impl Into<TypeQuery<'a>>) -> &'static CartType {
    find(query.into()).unwrap_or_else(unknown)
}
