//! CAR container model.
//!
//! A [`CarFile`] owns a ROM image, an optional blob and a cartridge type.
//! The header written on output is never stored: [`CarFile::header`]
//! derives checksum and blob offset from the live data every time, so the
//! serialized form is always self-consistent. The header read at load time
//! is kept only to answer [`CarFile::is_valid`].
//!
//! ## Example
//!
//! ```no_run
//! use a8car_core::CarFile;
//!
//! let mut car = CarFile::open("game.car")?;
//! if !car.is_valid() {
//!     eprintln!("stored checksum does not match the ROM");
//! }
//! car.clear_blob();
//! car.save("game.car")?;
//! # Ok::<(), a8car_core::Error>(())
//! ```

use crate::detect::{DetectStrategy, Detector};
use crate::error::{Error, Result};
use crate::header::{checksum, Header, HEADER_LEN};
use crate::registry::{self, CartType, TypeQuery};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Byte used to pad ROM images up to a larger size
pub const FILL_BYTE: u8 = 0xFF;

/// An in-memory CAR file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarFile {
    mode: &'static CartType,
    stored: Header,
    rom: Vec<u8>,
    blob: Vec<u8>,
}

impl Default for CarFile {
    fn default() -> Self {
        Self::new()
    }
}

impl CarFile {
    /// Creates an empty container: no ROM, no blob, type "none"
    pub fn new() -> Self {
        Self {
            mode: registry::none(),
            stored: Header::default(),
            rom: Vec::new(),
            blob: Vec::new(),
        }
    }

    /// Parses a complete CAR image
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let stored = Header::decode(data)?;
        let body = &data[HEADER_LEN..];

        let (rom, blob) = match stored.blob_offset as usize {
            0 => (body, &[][..]),
            offset if offset < HEADER_LEN || offset > data.len() => {
                warn!(
                    "Blob offset {} is outside {}..={}; treating all data as ROM",
                    offset,
                    HEADER_LEN,
                    data.len()
                );
                (body, &[][..])
            }
            offset => body.split_at(offset - HEADER_LEN),
        };

        debug!(
            "Loaded CAR: type {}, {} ROM bytes, {} blob bytes",
            stored.mode,
            rom.len(),
            blob.len()
        );

        Ok(Self {
            mode: stored.mode,
            stored,
            rom: rom.to_vec(),
            blob: blob.to_vec(),
        })
    }

    /// Reads a complete CAR image from `reader`
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Reads a CAR file from disk
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| Error::file_read(path, e))?;
        Self::from_bytes(&data)
    }

    /// Builds a container around a raw ROM dump
    ///
    /// With no type, or a virtual one, the type is autodetected from the ROM
    /// length. An explicit type whose canonical size differs from the ROM
    /// length is accepted with a warning.
    pub fn from_rom(rom: Vec<u8>, cart_type: Option<&'static CartType>) -> Result<Self> {
        Self::from_rom_with(rom, cart_type, &Detector::new())
    }

    /// Like [`CarFile::from_rom`], with a custom detection strategy
    pub fn from_rom_with(
        rom: Vec<u8>,
        cart_type: Option<&'static CartType>,
        detector: &dyn DetectStrategy,
    ) -> Result<Self> {
        if rom.is_empty() {
            return Err(Error::EmptyRom);
        }

        let mode = match cart_type {
            Some(cart) if !cart.is_virtual() => cart,
            _ => detector.detect(rom.len())?,
        };

        if mode.size_bytes() != rom.len() {
            warn!(
                "ROM size mismatch for type \"{}\"! (ROM size={}, cart type ROM size={})",
                mode.name,
                rom.len(),
                mode.size
            );
        }

        let mut car = Self::new();
        car.mode = mode;
        car.rom = rom;
        Ok(car)
    }

    /// Returns the cartridge type
    pub fn mode(&self) -> &'static CartType {
        self.mode
    }

    /// Sets the cartridge type by id, name or descriptor
    ///
    /// Virtual types are accepted here; see [`CarFile::retype`] for the
    /// checked variant.
    pub fn set_mode<'a>(&mut self, query: impl Into<TypeQuery<'a>>) -> Result<&'static CartType> {
        self.mode = registry::resolve_strict(query)?;
        Ok(self.mode)
    }

    /// Changes the type to real hardware, optionally resizing the ROM to the
    /// new type's canonical size
    pub fn retype<'a>(
        &mut self,
        query: impl Into<TypeQuery<'a>>,
        adjust_size: bool,
    ) -> Result<&'static CartType> {
        let mode = registry::resolve_strict(query)?;
        if mode.is_virtual() {
            return Err(Error::VirtualType {
                id: mode.id,
                description: mode.description,
            });
        }

        info!("Changing cart type {} -> {}", self.mode, mode);
        self.mode = mode;
        if adjust_size {
            self.resize_rom(mode.size_bytes());
        }
        Ok(mode)
    }

    /// Returns the ROM image
    pub fn rom(&self) -> &[u8] {
        &self.rom
    }

    /// Replaces the ROM image
    pub fn set_rom(&mut self, rom: impl Into<Vec<u8>>) {
        self.rom = rom.into();
    }

    /// Truncates the ROM, or pads it with [`FILL_BYTE`], to `len` bytes
    pub fn resize_rom(&mut self, len: usize) {
        if self.rom.len() != len {
            debug!("Resizing ROM from {} to {} bytes", self.rom.len(), len);
            self.rom.resize(len, FILL_BYTE);
        }
    }

    /// Returns the blob, empty when there is none
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Returns true if the container carries a blob
    pub fn has_blob(&self) -> bool {
        !self.blob.is_empty()
    }

    /// Replaces the blob; an empty blob removes it
    pub fn set_blob(&mut self, blob: impl Into<Vec<u8>>) {
        self.blob = blob.into();
    }

    /// Removes the blob
    pub fn clear_blob(&mut self) {
        self.blob.clear();
    }

    /// Derives the header from the current contents
    pub fn header(&self) -> Header {
        let blob_offset = if self.blob.is_empty() {
            0
        } else {
            (HEADER_LEN + self.rom.len()) as u32
        };
        Header {
            mode: self.mode,
            checksum: checksum(&self.rom),
            blob_offset,
        }
    }

    /// Returns the header as read at load time
    pub fn stored_header(&self) -> &Header {
        &self.stored
    }

    /// Returns true if the loaded checksum and blob offset match the data
    pub fn is_valid(&self) -> bool {
        let current = self.header();
        self.stored.checksum == current.checksum && self.stored.blob_offset == current.blob_offset
    }

    /// Returns the serialized length in bytes
    pub fn len(&self) -> usize {
        HEADER_LEN + self.rom.len() + self.blob.len()
    }

    /// Returns true if there is neither ROM nor blob
    pub fn is_empty(&self) -> bool {
        self.rom.is_empty() && self.blob.is_empty()
    }

    /// Serializes header, ROM and blob
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        self.header().write_to(&mut out);
        out.extend_from_slice(&self.rom);
        out.extend_from_slice(&self.blob);
        out
    }

    /// Writes the serialized container to `writer`
    pub fn write_to(&self, mut writer: impl Write) -> Result<()> {
        writer.write_all(&self.header().encode())?;
        writer.write_all(&self.rom)?;
        writer.write_all(&self.blob)?;
        Ok(())
    }

    /// Writes the container to `path`, replacing any existing file
    ///
    /// Data goes to a temporary file in the same directory which is then
    /// renamed over `path`, so a failed write leaves the old file intact.
    /// On success the stored header is updated and the container is valid.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::file_write(path, e))?;
        // The temporary file is created 0600; carry over the mode of the file being replaced
        if let Ok(existing) = fs::metadata(path) {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| Error::file_write(path, e))?;
        }
        tmp.write_all(&self.to_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| Error::file_write(path, e))?;
        tmp.persist(path)
            .map_err(|e| Error::file_write(path, e.error))?;

        debug!("Wrote {} bytes to {}", self.len(), path.display());
        self.stored = self.header();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::MAGIC;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn car_bytes(mode: u32, rom: &[u8], blob: &[u8], blob_offset: u32) -> Vec<u8> {
        let mut out = MAGIC.to_vec();
        out.extend_from_slice(&mode.to_be_bytes());
        out.extend_from_slice(&checksum(rom).to_be_bytes());
        out.extend_from_slice(&blob_offset.to_be_bytes());
        out.extend_from_slice(rom);
        out.extend_from_slice(blob);
        out
    }

    #[test]
    fn test_new_is_empty_and_valid() {
        let car = CarFile::new();
        assert!(car.is_empty());
        assert!(car.is_valid());
        assert_eq!(car.mode().id, registry::MODE_NONE);
        assert_eq!(car.to_bytes().len(), HEADER_LEN);
    }

    #[test]
    fn test_load_without_blob() {
        let rom: Vec<u8> = (0..=255).collect();
        let car = CarFile::from_bytes(&car_bytes(1, &rom, &[], 0)).unwrap();
        assert_eq!(car.rom(), &rom[..]);
        assert!(car.blob().is_empty());
        assert_eq!(car.mode().id, 1);
        assert!(car.is_valid());
    }

    #[test]
    fn test_load_splits_at_blob_offset() {
        let rom = vec![0x11; 0x2000];
        let blob = b"high score table".to_vec();
        let data = car_bytes(1, &rom, &blob, 16 + 0x2000);
        let car = CarFile::from_bytes(&data).unwrap();
        assert_eq!(car.rom(), &rom[..]);
        assert_eq!(car.blob(), &blob[..]);
        assert!(car.is_valid());
        assert_eq!(car.header().blob_offset, 16 + 0x2000);
    }

    #[test]
    fn test_load_offset_inside_header() {
        for offset in [1, 8, 15] {
            let data = car_bytes(1, &[1, 2, 3], &[], offset);
            let car = CarFile::from_bytes(&data).unwrap();
            assert_eq!(car.rom(), &[1, 2, 3]);
            assert!(!car.has_blob());
            assert!(!car.is_valid());
            assert_eq!(car.stored_header().blob_offset, offset);
        }
    }

    #[test]
    fn test_load_offset_past_end() {
        let data = car_bytes(1, &[1, 2, 3], &[], 4096);
        let car = CarFile::from_bytes(&data).unwrap();
        assert_eq!(car.rom(), &[1, 2, 3]);
        assert!(!car.has_blob());
        assert!(!car.is_valid());
    }

    #[test]
    fn test_load_rejects_bad_header() {
        assert!(CarFile::from_bytes(b"CART").is_err());
        let mut data = car_bytes(1, &[1], &[], 0);
        data[0] = b'X';
        assert!(matches!(
            CarFile::from_bytes(&data).unwrap_err(),
            Error::BadMagic { .. }
        ));
    }

    #[test]
    fn test_from_reader() {
        let data = car_bytes(12, &[7; 64], &[], 0);
        let car = CarFile::from_reader(std::io::Cursor::new(data)).unwrap();
        assert_eq!(car.mode().id, 12);
        assert_eq!(car.rom().len(), 64);
    }

    #[test]
    fn test_serialize_is_idempotent() {
        let data = car_bytes(12, &[0x5A; 0x8000], b"blob", 16 + 0x8000);
        let car = CarFile::from_bytes(&data).unwrap();
        let first = car.to_bytes();
        let second = car.to_bytes();
        assert_eq!(first, second);
        assert_eq!(first, data);
    }

    #[test]
    fn test_header_tracks_mutation() {
        let mut car = CarFile::from_bytes(&car_bytes(1, &[1, 2, 3], &[], 0)).unwrap();
        car.set_blob(vec![9, 9]);
        assert!(!car.is_valid());
        assert_eq!(car.header().blob_offset, 16 + 3);

        car.set_rom(vec![10, 20]);
        assert_eq!(car.header().checksum, 30);
        assert_eq!(car.header().blob_offset, 16 + 2);

        car.clear_blob();
        assert_eq!(car.header().blob_offset, 0);

        let bytes = car.to_bytes();
        assert_eq!(&bytes[..4], b"CART");
        assert_eq!(bytes.len(), 16 + 2);
    }

    #[test]
    fn test_write_to_matches_to_bytes() {
        let mut car = CarFile::from_rom(vec![3; 0x4000], None).unwrap();
        car.set_blob(b"extra".to_vec());
        let mut out = Vec::new();
        car.write_to(&mut out).unwrap();
        assert_eq!(out, car.to_bytes());
    }

    #[test]
    fn test_set_mode_strict() {
        let mut car = CarFile::new();
        assert_eq!(car.set_mode("Mode_16K").unwrap().id, 2);
        assert!(matches!(
            car.set_mode("no such cart").unwrap_err(),
            Error::UnknownType { .. }
        ));
        assert_eq!(car.mode().id, 2);
        // Virtual types are the caller's concern here
        assert_eq!(car.set_mode(-1).unwrap().id, registry::MODE_UNKNOWN);
    }

    #[test]
    fn test_retype_truncates() {
        let mut car = CarFile::from_rom(vec![0x42; 0x8000], None).unwrap();
        car.retype("Mode_8K", true).unwrap();
        assert_eq!(car.rom(), &[0x42; 0x2000][..]);
    }

    #[test]
    fn test_retype_pads() {
        let mut car = CarFile::from_rom(vec![0x42; 0x2000], None).unwrap();
        car.retype(12, true).unwrap();
        assert_eq!(car.rom().len(), 0x8000);
        assert!(car.rom()[..0x2000].iter().all(|&b| b == 0x42));
        assert!(car.rom()[0x2000..].iter().all(|&b| b == FILL_BYTE));
    }

    #[test]
    fn test_retype_without_resize_keeps_rom() {
        let mut car = CarFile::from_rom(vec![0x42; 0x2000], None).unwrap();
        car.retype(12, false).unwrap();
        assert_eq!(car.mode().id, 12);
        assert_eq!(car.rom().len(), 0x2000);
    }

    #[test]
    fn test_retype_rejects_virtual() {
        let mut car = CarFile::from_rom(vec![0; 0x2000], None).unwrap();
        for query in ["Mode_None", "Mode_Unknown", "1000"] {
            let err = car.retype(query, true).unwrap_err();
            assert!(matches!(err, Error::VirtualType { .. }), "query {}", query);
        }
        assert_eq!(car.mode().id, 1);
        assert_eq!(car.rom().len(), 0x2000);
    }

    #[test]
    fn test_from_rom_detects() {
        let car = CarFile::from_rom(vec![0; 0x8000], None).unwrap();
        assert_eq!(car.mode().name, "Mode_XEGS_32K");
        let car = CarFile::from_rom(vec![0; 0x8000], Some(registry::unknown())).unwrap();
        assert_eq!(car.mode().id, 12);
    }

    #[test]
    fn test_from_rom_explicit_type() {
        let blizzard = registry::resolve_strict("Mode_Blizzard_32K").unwrap();
        let car = CarFile::from_rom(vec![0; 0x8000], Some(blizzard)).unwrap();
        assert_eq!(car.mode(), blizzard);

        // Size mismatch is reported, not rejected
        let car = CarFile::from_rom(vec![0; 100], Some(blizzard)).unwrap();
        assert_eq!(car.rom().len(), 100);
    }

    #[derive(Clone, Default)]
    struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_from_rom_warns_on_size_mismatch() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let car = tracing::subscriber::with_default(subscriber, || {
            let mode = registry::resolve_strict("Mode_8K").unwrap();
            CarFile::from_rom(vec![0; 0x1000], Some(mode)).unwrap()
        });
        assert_eq!(car.rom().len(), 0x1000);

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"), "{}", output);
        assert!(output.contains("ROM size mismatch"), "{}", output);
    }

    #[test]
    fn test_from_rom_errors() {
        assert!(matches!(
            CarFile::from_rom(Vec::new(), None).unwrap_err(),
            Error::EmptyRom
        ));
        assert!(matches!(
            CarFile::from_rom(vec![0; 12345], None).unwrap_err(),
            Error::NoMatchingType { len: 12345 }
        ));
    }

    #[test]
    fn test_save_and_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.car");

        let mut car = CarFile::from_rom(vec![0xA5; 0x4000], None).unwrap();
        car.set_blob(b"save data".to_vec());
        car.save(&path).unwrap();
        assert!(car.is_valid());

        let loaded = CarFile::open(&path).unwrap();
        assert_eq!(loaded.mode().id, 2);
        assert_eq!(loaded.rom(), car.rom());
        assert_eq!(loaded.blob(), b"save data");
        assert!(loaded.is_valid());
        assert_eq!(std::fs::read(&path).unwrap(), car.to_bytes());
    }

    #[test]
    fn test_save_overwrites_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.car");
        std::fs::write(&path, b"old contents that are longer than the new file").unwrap();

        let mut car = CarFile::new();
        car.set_rom(vec![1, 2]);
        car.save(&path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap().len(), HEADER_LEN + 2);
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.car");
        let mut car = CarFile::from_rom(vec![0; 0x2000], None).unwrap();
        car.save(&path).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let mut car = CarFile::open(&path).unwrap();
        car.set_blob(b"saved".to_vec());
        car.save(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
        assert_eq!(CarFile::open(&path).unwrap().blob(), b"saved");
    }

    #[test]
    fn test_open_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = CarFile::open(dir.path().join("missing.car")).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
