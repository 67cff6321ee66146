//! cart-tool - Inspect, retype and convert Atari 8-bit CAR cartridge images
//!
//! A CAR file is a 16-byte header followed by the raw ROM image and an
//! optional blob. This tool edits the blob, extracts the parts, changes the
//! recorded cartridge type and wraps raw ROM dumps into CAR files.

use a8car_core::registry::{self, CartType};
use a8car_core::{export, CarFile, DetectStrategy, Detector};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, warn, Level};
use tracing_subscriber::EnvFilter;

/// Name used as the source of top-level diagnostics
const BIN_NAME: &str = "cart-tool";

/// Inspect, retype and convert Atari 8-bit CAR cartridge images
#[derive(Parser, Debug)]
#[command(name = "cart-tool")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Get <CAR file> information based on header
    Info {
        /// Input file. The file is not modified.
        #[arg(value_name = "CAR file")]
        cart_file: PathBuf,
    },

    /// Set <CAR file> blob to bytes from <BLOB file>
    #[command(name = "setblob", visible_aliases = ["set", "addblob", "add"])]
    SetBlob {
        /// Input/output file. File content rewritten. No backups created.
        #[arg(value_name = "CAR file")]
        cart_file: PathBuf,

        /// Input file. The file is not modified. An empty file removes the blob.
        #[arg(value_name = "BLOB file")]
        blob_file: PathBuf,
    },

    /// Eliminate BLOB from <CAR file>
    #[command(name = "delblob", visible_aliases = ["del", "rm", "erase"])]
    DelBlob {
        /// Input/output file. File content rewritten. No backups created.
        #[arg(value_name = "CAR file")]
        cart_file: PathBuf,
    },

    /// Extract BLOB from <CAR file> to <BLOB file>
    #[command(name = "getblob", visible_aliases = ["get", "extract"])]
    GetBlob {
        /// Input file. The file is not modified.
        #[arg(value_name = "CAR file")]
        cart_file: PathBuf,

        /// Generated file. If file exists, it will be overwritten without backup.
        #[arg(value_name = "BLOB file")]
        blob_file: PathBuf,
    },

    /// Extract RAW ROM content from <CAR file> to <ROM file>
    #[command(name = "getrom", visible_aliases = ["rom"])]
    GetRom {
        /// Input file. The file is not modified.
        #[arg(value_name = "CAR file")]
        cart_file: PathBuf,

        /// Generated file. If file exists, it will be overwritten without backup.
        #[arg(value_name = "ROM file")]
        rom_file: PathBuf,
    },

    /// Override cart type in <CAR file>
    #[command(name = "settype")]
    SetType(SetTypeArgs),

    /// Convert RAW <ROM file> to <CAR file>
    #[command(name = "rom2car", visible_aliases = ["convert", "convertrom"])]
    Rom2Car(Rom2CarArgs),

    /// List available CART type identifiers
    #[command(visible_aliases = ["types"])]
    List {
        /// Output format
        #[arg(short, long, value_enum, ignore_case = true, default_value = "text")]
        format: ListFormat,
    },
}

#[derive(Args, Debug)]
struct SetTypeArgs {
    /// Input/output file. File content rewritten. No backups created.
    #[arg(value_name = "CAR file", required_unless_present = "list")]
    cart_file: Option<PathBuf>,

    /// New type identifier (id, hex id or name). To list all known types, run with --list
    #[arg(
        value_name = "TYPE",
        value_parser = parse_cart_type,
        required_unless_present = "list"
    )]
    cart_type: Option<&'static CartType>,

    /// If the new CART type is bigger or smaller, the ROM content will be
    /// extended (0xFF) or truncated
    #[arg(short, long)]
    adjust_size: bool,

    /// List available CART type identifiers and exit
    #[arg(
        short,
        long,
        value_enum,
        ignore_case = true,
        num_args = 0..=1,
        default_missing_value = "text"
    )]
    list: Option<ListFormat>,
}

#[derive(Args, Debug)]
struct Rom2CarArgs {
    /// Source ROM (cart-type guess is based only on the size)
    #[arg(value_name = "ROM file", required_unless_present = "list")]
    rom_file: Option<PathBuf>,

    /// Generated file. If file exists, it will be overwritten without backup.
    #[arg(value_name = "CAR file", required_unless_present = "list")]
    cart_file: Option<PathBuf>,

    /// Cart type (id, hex id or name). If omitted, the cart type will be guessed
    #[arg(short = 't', long, value_parser = parse_cart_type)]
    cart_type: Option<&'static CartType>,

    /// List available CART type identifiers and exit
    #[arg(
        short,
        long,
        value_enum,
        ignore_case = true,
        num_args = 0..=1,
        default_missing_value = "text"
    )]
    list: Option<ListFormat>,
}

/// Output format for type listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ListFormat {
    /// One line per type: id=name <size> "description"
    #[value(alias = "default")]
    Text,
    /// Compact JSON object keyed by type name
    Json,
}

/// Parses a user-supplied type, rejecting virtual types
fn parse_cart_type(value: &str) -> std::result::Result<&'static CartType, String> {
    let cart = registry::resolve_strict(value).map_err(|e| e.to_string())?;
    if cart.is_virtual() {
        return Err(format!("virtual cart type {} - {}", cart, cart.description));
    }
    Ok(cart)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", diagnostic(&err));
            ExitCode::FAILURE
        }
    }
}

/// Formats the one-line diagnostic printed for a failed command
fn diagnostic(err: &anyhow::Error) -> String {
    let kind = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<a8car_core::Error>())
        .map_or("Error", |core| core.kind().as_str());
    format!("{}: {}: {:#}", BIN_NAME, kind, err)
}

/// Dispatch a parsed command
fn run(command: &Command) -> Result<()> {
    match command {
        Command::Info { cart_file } => cmd_info(cart_file),
        Command::SetBlob {
            cart_file,
            blob_file,
        } => cmd_set_blob(cart_file, Some(blob_file)),
        Command::DelBlob { cart_file } => cmd_set_blob(cart_file, None),
        Command::GetBlob {
            cart_file,
            blob_file,
        } => cmd_get_blob(cart_file, blob_file),
        Command::GetRom {
            cart_file,
            rom_file,
        } => cmd_get_rom(cart_file, rom_file),
        Command::SetType(args) => match (args.list, &args.cart_file, args.cart_type) {
            (Some(format), _, _) => print_listing(format),
            (None, Some(cart_file), Some(cart_type)) => {
                cmd_set_type(cart_file, cart_type, args.adjust_size)
            }
            _ => unreachable!("clap enforces settype arguments"),
        },
        Command::Rom2Car(args) => match (args.list, &args.rom_file, &args.cart_file) {
            (Some(format), _, _) => print_listing(format),
            (None, Some(rom_file), Some(cart_file)) => {
                cmd_rom2car(rom_file, cart_file, args.cart_type)
            }
            _ => unreachable!("clap enforces rom2car arguments"),
        },
        Command::List { format } => print_listing(*format),
    }
}

fn load(cart_file: &Path) -> Result<CarFile> {
    debug!("Loading {}", cart_file.display());
    CarFile::open(cart_file)
        .with_context(|| format!("Failed to load CAR file: {}", cart_file.display()))
}

fn save(car: &mut CarFile, cart_file: &Path) -> Result<()> {
    car.save(cart_file)
        .with_context(|| format!("Failed to save CAR file: {}", cart_file.display()))
}

/// Print header, type and size details of a CAR file
fn cmd_info(cart_file: &Path) -> Result<()> {
    let car = load(cart_file)?;
    let mode = car.mode();
    let span = mode.header.span(car.rom().len());

    println!(
        "Validity check: {}",
        if car.is_valid() { "✓ OK" } else { "✗ fail" }
    );
    println!("Cart type: {} → {}", mode, mode.description);
    println!(
        "System: {}, banking: {}, writable store: {}",
        mode.system.label(),
        mode.banking.label(),
        mode.store.label()
    );
    println!(
        "Init window: {}{}",
        export::human_size(mode.init.window_len() as u64),
        if mode.init.is_right_slot() { " (right slot)" } else { "" }
    );
    println!("Cart max ROM size: {}", size_summary(mode.size_bytes()));
    println!("ROM actual size: {}", size_summary(car.rom().len()));
    if !span.is_empty() {
        println!("Boot header: 0x{:04X}..0x{:04X}", span.start, span.end);
    }
    if car.has_blob() {
        println!("BLOB: ✓ {}", size_summary(car.blob().len()));
    } else {
        println!("BLOB: ✗ No BLOB");
    }
    Ok(())
}

/// Replace the blob with the contents of `blob_file`, or remove it
fn cmd_set_blob(cart_file: &Path, blob_file: Option<&PathBuf>) -> Result<()> {
    let mut car = load(cart_file)?;

    match blob_file {
        Some(blob_file) => {
            let blob = fs::read(blob_file)
                .with_context(|| format!("Failed to read BLOB file: {}", blob_file.display()))?;
            debug!("Setting {} byte blob", blob.len());
            car.set_blob(blob);
        }
        None => car.clear_blob(),
    }

    save(&mut car, cart_file)
}

fn cmd_get_blob(cart_file: &Path, blob_file: &Path) -> Result<()> {
    let car = load(cart_file)?;
    if !car.has_blob() {
        warn!("{} has no BLOB; nothing written", cart_file.display());
        return Ok(());
    }
    write_output(blob_file, car.blob())
}

fn cmd_get_rom(cart_file: &Path, rom_file: &Path) -> Result<()> {
    let car = load(cart_file)?;
    if car.rom().is_empty() {
        warn!("{} has no ROM data; nothing written", cart_file.display());
        return Ok(());
    }
    write_output(rom_file, car.rom())
}

fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).with_context(|| format!("Failed to write file: {}", path.display()))?;
    debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

fn cmd_set_type(cart_file: &Path, cart_type: &'static CartType, adjust_size: bool) -> Result<()> {
    let mut car = load(cart_file)?;
    let mode = car.retype(cart_type, adjust_size)?;
    save(&mut car, cart_file)?;
    println!("Cart type set to \"{}\"", mode.name);
    Ok(())
}

fn cmd_rom2car(
    rom_file: &Path,
    cart_file: &Path,
    cart_type: Option<&'static CartType>,
) -> Result<()> {
    let rom = fs::read(rom_file)
        .with_context(|| format!("Failed to read ROM file: {}", rom_file.display()))?;
    let rom_len = rom.len();

    let detector = Detector::new();
    if cart_type.is_none() && rom_len > 0 {
        println!("{}", autodetect_report(&detector, rom_len));
    }

    let mut car = CarFile::from_rom_with(rom, cart_type, &detector)?;
    save(&mut car, cart_file)?;

    let mode = car.mode();
    println!("Created CART with mode: \"{}\"", mode.name);
    if mode.size_bytes() != rom_len {
        println!(
            "ROM size mismatch for type \"{}\"! (ROM file size={}, Cart mode ROM size={})",
            mode.name,
            group_digits(rom_len),
            group_digits(mode.size_bytes())
        );
    }
    Ok(())
}

/// Describes the candidates `strategy` considers for a ROM of `len` bytes
fn autodetect_report(strategy: &dyn DetectStrategy, len: usize) -> String {
    let names: Vec<&str> = strategy
        .candidates(len)
        .iter()
        .map(|cart| cart.name)
        .collect();
    format!(
        "Autodetecting:\n ROM size {},\n all matching options: {}",
        export::human_size(len as u64),
        names.join(", ")
    )
}

fn print_listing(format: ListFormat) -> Result<()> {
    let real = registry::list_real();
    match format {
        ListFormat::Text => print!("{}", export::to_text(&real)),
        ListFormat::Json => println!("{}", export::to_json(&real)?),
    }
    Ok(())
}

/// Formats a size as `32_768 (0x8000) <32.0 KiB>`
fn size_summary(len: usize) -> String {
    format!(
        "{} (0x{:04X}) <{}>",
        group_digits(len),
        len,
        export::human_size(len as u64)
    )
}

/// Groups decimal digits in threes with underscores
fn group_digits(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('_');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cart-tool").chain(args.iter().copied())).unwrap()
    }

    fn run_args(args: &[&str]) -> Result<()> {
        run(&parse(args).command)
    }

    fn path_arg(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_aliases_dispatch_to_same_command() {
        for alias in ["setblob", "set", "addblob", "add"] {
            assert!(matches!(
                parse(&[alias, "a.car", "b.bin"]).command,
                Command::SetBlob { .. }
            ));
        }
        for alias in ["delblob", "del", "rm", "erase"] {
            assert!(matches!(parse(&[alias, "a.car"]).command, Command::DelBlob { .. }));
        }
        for alias in ["getblob", "get", "extract"] {
            assert!(matches!(
                parse(&[alias, "a.car", "b.bin"]).command,
                Command::GetBlob { .. }
            ));
        }
        assert!(matches!(parse(&["rom", "a.car", "a.rom"]).command, Command::GetRom { .. }));
        for alias in ["rom2car", "convert", "convertrom"] {
            assert!(matches!(
                parse(&[alias, "a.rom", "a.car"]).command,
                Command::Rom2Car(_)
            ));
        }
        assert!(matches!(parse(&["types"]).command, Command::List { .. }));
    }

    #[test]
    fn test_settype_arguments() {
        let cli = parse(&["settype", "a.car", "0x0C", "-a"]);
        let Command::SetType(args) = cli.command else {
            panic!("expected settype");
        };
        assert_eq!(args.cart_type.map(|c| c.id), Some(12));
        assert!(args.adjust_size);
        assert_eq!(args.list, None);

        let cli = parse(&["settype", "--list", "JSON"]);
        let Command::SetType(args) = cli.command else {
            panic!("expected settype");
        };
        assert_eq!(args.list, Some(ListFormat::Json));

        let cli = parse(&["settype", "-l"]);
        let Command::SetType(args) = cli.command else {
            panic!("expected settype");
        };
        assert_eq!(args.list, Some(ListFormat::Text));
    }

    #[test]
    fn test_settype_requires_positionals_without_list() {
        assert!(Cli::try_parse_from(["cart-tool", "settype", "a.car"]).is_err());
        assert!(Cli::try_parse_from(["cart-tool", "rom2car", "a.rom"]).is_err());
    }

    #[test]
    fn test_type_parser_rejects_virtual_and_unknown() {
        assert!(parse_cart_type("Mode_XEGS_32K").is_ok());
        assert!(parse_cart_type("0").unwrap_err().contains("virtual"));
        assert!(parse_cart_type("-1").unwrap_err().contains("virtual"));
        assert!(parse_cart_type("1000").unwrap_err().contains("virtual"));
        assert!(parse_cart_type("Mode_Bogus").unwrap_err().contains("unknown"));
        assert!(
            Cli::try_parse_from(["cart-tool", "rom2car", "a.rom", "a.car", "-t", "0"]).is_err()
        );
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(32768), "32_768");
        assert_eq!(group_digits(1_048_576), "1_048_576");
        assert_eq!(size_summary(0x8000), "32_768 (0x8000) <32.0 KiB>");
    }

    struct OnlyMegaCart;

    impl DetectStrategy for OnlyMegaCart {
        fn detect(&self, _len: usize) -> a8car_core::Result<&'static CartType> {
            registry::resolve_strict("Mode_MegaCart_32K")
        }

        fn candidates(&self, _len: usize) -> Vec<&'static CartType> {
            vec![registry::resolve_strict("Mode_MegaCart_32K").unwrap()]
        }
    }

    #[test]
    fn test_autodetect_report_uses_strategy_candidates() {
        assert_eq!(
            autodetect_report(&OnlyMegaCart, 0x8000),
            "Autodetecting:\n ROM size 32.0 KiB,\n all matching options: Mode_MegaCart_32K"
        );
        let report = autodetect_report(&Detector::new(), 0x8000);
        assert!(report.contains("Mode_XEGS_32K, "));
        assert!(report.contains("Mode_MegaCart_32K"));
    }

    #[test]
    fn test_diagnostic_names_error_kind() {
        let err = anyhow::Error::new(a8car_core::Error::EmptyRom).context("Failed to convert");
        assert_eq!(
            diagnostic(&err),
            "cart-tool: ValueError: Failed to convert: ROM file length is 0"
        );
        let err = anyhow::anyhow!("something else");
        assert_eq!(diagnostic(&err), "cart-tool: Error: something else");
    }

    #[test]
    fn test_convert_retype_and_blob_roundtrip() {
        let dir = TempDir::new().unwrap();
        let rom_path = dir.path().join("game.rom");
        let car_path = dir.path().join("game.car");
        let blob_path = dir.path().join("blob.bin");
        let out_path = dir.path().join("out.bin");

        fs::write(&rom_path, vec![0x77u8; 0x8000]).unwrap();
        run_args(&["convert", path_arg(&rom_path), path_arg(&car_path)]).unwrap();
        let car = CarFile::open(&car_path).unwrap();
        assert_eq!(car.mode().id, 12);
        assert!(car.is_valid());

        fs::write(&blob_path, b"highscores").unwrap();
        run_args(&["add", path_arg(&car_path), path_arg(&blob_path)]).unwrap();
        run_args(&["extract", path_arg(&car_path), path_arg(&out_path)]).unwrap();
        assert_eq!(fs::read(&out_path).unwrap(), b"highscores");

        run_args(&["settype", path_arg(&car_path), "Mode_8K", "-a"]).unwrap();
        let car = CarFile::open(&car_path).unwrap();
        assert_eq!(car.mode().id, 1);
        assert_eq!(car.rom().len(), 0x2000);
        assert_eq!(car.blob(), b"highscores");
        assert!(car.is_valid());

        run_args(&["rm", path_arg(&car_path)]).unwrap();
        let car = CarFile::open(&car_path).unwrap();
        assert!(!car.has_blob());
        assert_eq!(fs::metadata(&car_path).unwrap().len(), 16 + 0x2000);

        run_args(&["info", path_arg(&car_path)]).unwrap();
    }

    #[test]
    fn test_convert_empty_rom_fails() {
        let dir = TempDir::new().unwrap();
        let rom_path = dir.path().join("empty.rom");
        let car_path = dir.path().join("empty.car");
        fs::write(&rom_path, b"").unwrap();

        let err = run_args(&["rom2car", path_arg(&rom_path), path_arg(&car_path)]).unwrap_err();
        assert!(diagnostic(&err).starts_with("cart-tool: ValueError:"));
        assert!(!car_path.exists());
    }

    #[test]
    fn test_getblob_without_blob_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let car_path = dir.path().join("plain.car");
        let out_path = dir.path().join("blob.bin");
        CarFile::from_rom(vec![0; 0x2000], None)
            .unwrap()
            .save(&car_path)
            .unwrap();

        run_args(&["getblob", path_arg(&car_path), path_arg(&out_path)]).unwrap();
        assert!(!out_path.exists());
    }

    #[test]
    fn test_info_reports_format_error() {
        let dir = TempDir::new().unwrap();
        let car_path = dir.path().join("junk.car");
        fs::write(&car_path, b"not a cart file at all").unwrap();

        let err = run_args(&["info", path_arg(&car_path)]).unwrap_err();
        assert!(diagnostic(&err).starts_with("cart-tool: FormatError:"));
    }
}
