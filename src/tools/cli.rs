use clap::Parser;
use log::{debug, info};
use std::{fmt::Display, fmt::Formatter};

/// Default I/O block, in KiB.
pub const DEFAULT_BLOCK_KIB: u32 = 256;

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Map a count of `-v` flags to a verbosity.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Warnings,
            1 => Verbosity::Info,
            2 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        match self {
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Zip, Unzip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    name = "hfmn",
    version,
    about = "A static Huffman file compressor",
    long_about = "
    Compresses a file with a two pass static Huffman code over all 256 byte values,
    or extracts such an archive again with -x.

    usage: hfmn [-x] file.in file.out"
)]
pub struct Args {
    /// Extract the archive instead of compressing
    #[clap(short = 'x', action)]
    extract: bool,

    /// File to read. Must exist.
    #[clap(value_parser, value_name = "INPUT")]
    input: String,

    /// File to create or overwrite
    #[clap(value_parser, value_name = "OUTPUT")]
    output: String,

    /// Size of the I/O block in KiB
    #[clap(
        short = 'b',
        long = "block-size",
        default_value_t = DEFAULT_BLOCK_KIB,
        value_parser = clap::value_parser!(u32).range(1..=65536)
    )]
    block_kib: u32,

    /// Sets verbosity. -v shows progress, -vvv is chatty
    #[clap(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug)]
pub struct HfOpts {
    /// Compress/Decompress
    pub op_mode: Mode,
    /// Name of the file to read for input
    pub input: String,
    /// Name of the file to write
    pub output: String,
    /// Bytes read or written per I/O block
    pub block_size: usize,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl From<Args> for HfOpts {
    fn from(args: Args) -> Self {
        Self {
            op_mode: if args.extract { Mode::Unzip } else { Mode::Zip },
            input: args.input,
            output: args.output,
            block_size: args.block_kib as usize * 1024,
            verbose: Verbosity::from_count(args.verbose),
        }
    }
}

/// Parse the command line into our options and set the log level. Exits with usage information
/// if the arguments are wrong.
pub fn hfopts_init() -> HfOpts {
    let opts = HfOpts::from(Args::parse());

    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    // Below we report initialization status to the user
    debug!("---- hfmn Initialization Start ----");
    debug!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Reading {}, writing {}", opts.input, opts.output);
    debug!("Block size set to {} bytes", opts.block_size);
    debug!("---- hfmn Initialization End ----");
    opts
}

/// One line usage summary, printed with errors that happen after parsing.
pub fn usage() -> String {
    use clap::CommandFactory;
    Args::command().render_usage()
}
