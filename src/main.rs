//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
use std::fs::File;
use std::process::exit;

use hfmn::tools::cli::{hfopts_init, usage, Mode};
use hfmn::{compress, compress_stream, decompress, CompressStats, Result};

use log::{debug, error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use tikv_jemallocator::Jemalloc;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() {
    // Log to stderr so nothing mixes with file output. The real level is set from -v below.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Unable to start the logger: {}", e);
    }

    let options = hfopts_init();

    //----- Open both files before any codec work, as a usage error
    let mut fin = match File::open(&options.input) {
        Ok(f) => f,
        Err(e) => usage_error(&format!("Can't open {}: {}", options.input, e)),
    };
    let fout = match File::create(&options.output) {
        Ok(f) => f,
        Err(e) => usage_error(&format!("Can't create {}: {}", options.output, e)),
    };

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Zip => zip(&mut fin, fout, options.block_size).map(|stats| {
            info!(
                "Compressed {} bytes into {} bytes ({:.1}%)",
                stats.input_len,
                stats.output_len,
                stats.ratio() * 100.0
            )
        }),
        Mode::Unzip => decompress(fin, fout, options.block_size)
            .map(|n| info!("Extracted {} bytes", n)),
    };

    match result {
        Ok(()) => info!("Done."),
        Err(e) => {
            error!("{}", e);
            exit(e.exit_code());
        }
    }
}

/// Compress `fin`. Pipes, FIFOs and other non-regular files can't be rewound for the second
/// pass, so those are read through a temp file.
fn zip(fin: &mut File, fout: File, block_size: usize) -> Result<CompressStats> {
    if fin.metadata()?.is_file() {
        compress(fin, fout, block_size)
    } else {
        debug!("Input is not a regular file, spooling it first");
        compress_stream(fin, fout, block_size)
    }
}

/// Report a problem with the command line and quit.
fn usage_error(msg: &str) -> ! {
    eprintln!("{}\n", msg);
    eprintln!("{}", usage());
    eprintln!("file.in must exist");
    exit(1);
}
