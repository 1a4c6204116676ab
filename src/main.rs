//! The `linemark` binary.

use linemark::{load_all, markdown_to_pretty_html, Options, Render, Source};

use std::error::Error;
use std::ffi::OsString;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

const EXIT_NOT_FOUND: i32 = 2;

const DEMO: &str = "This is a multiline input
to be parsed by the markdown parser

# This line is an h1 header
#### This line is an h4 header
####### This line is an h6 header
**this line is bold**
*this line is italic*
# This h1 header has ***bold and italic text***

- an unordered list
- with two items

+ an ordered list
+ with two items

> A quote spanning
> two lines

_An underlined note_

See [the docs](https://example.com/docs) or ![a logo](https://example.com/logo.png)
";

#[derive(Debug, Parser)]
#[command(about, author, version)]
#[command(
    after_help = "By default, linemark will attempt to read command-line options from a config file specified by --config-file. This behaviour can be disabled by passing --config-file none. The config file holds extra arguments in shell syntax."
)]
struct Cli {
    /// Markdown file(s) to convert; or standard input if none passed
    #[arg(value_name = "FILE", conflicts_with_all = ["raw", "demo"])]
    files: Option<Vec<PathBuf>>,

    /// Path to config file containing command-line arguments, or 'none'
    #[arg(short, long, value_name = "PATH", default_value = get_default_config_path())]
    config_file: String,

    /// Convert the given text instead of reading a file
    #[arg(short, long, value_name = "TEXT", conflicts_with = "demo")]
    raw: Option<String>,

    /// Convert a built-in sample document
    #[arg(long)]
    demo: bool,

    /// Reformat the HTML with one block-level tag per line
    #[arg(short, long)]
    prettify: bool,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit only the body content, without the document shell
    #[arg(long)]
    fragment: bool,

    /// Document title
    #[arg(long, value_name = "TITLE")]
    title: Option<String>,

    /// Document author
    #[arg(long, value_name = "NAME")]
    author: Option<String>,

    /// Render line-leading underlines as inline spans
    #[arg(long)]
    inline_underline: bool,

    /// Log parser decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(all(not(windows), not(target_arch = "wasm32")))]
fn get_default_config_path() -> String {
    if let Ok(xdg_dirs) = xdg::BaseDirectories::with_prefix("linemark") {
        if let Ok(path) = xdg_dirs.place_config_file("config") {
            if let Some(path_str) = path.to_str() {
                return String::from(path_str);
            }
        }
    }

    String::from("linemark.config")
}

#[cfg(any(windows, target_arch = "wasm32"))]
fn get_default_config_path() -> String {
    String::from("linemark.config")
}

fn parse_cli() -> Result<Cli, Box<dyn Error>> {
    let cli = Cli::parse();
    if cli.config_file == "none" {
        return Ok(cli);
    }

    let config = match fs::read_to_string(&cli.config_file) {
        Ok(config) => config,
        Err(_) => return Ok(cli),
    };

    let mut args: Vec<OsString> = std::env::args_os().collect();
    let extra = shell_words::split(&config)?;
    args.splice(1..1, extra.into_iter().map(OsString::from));
    Ok(Cli::parse_from(args))
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("linemark=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = parse_cli()?;
    init_logging(cli.verbose);

    let sources = if let Some(raw) = cli.raw.clone() {
        vec![Source::Raw(raw)]
    } else if cli.demo {
        vec![Source::Raw(DEMO.to_string())]
    } else {
        match cli.files {
            Some(ref files) => files.iter().cloned().map(Source::File).collect(),
            None => vec![Source::Stdin],
        }
    };

    let md = match load_all(&sources) {
        Ok(md) => md,
        Err(err @ linemark::Error::NotFound(_)) => {
            error!(%err, "cannot load input");
            eprintln!("linemark: {}", err);
            process::exit(EXIT_NOT_FOUND);
        }
        Err(err) => {
            error!(%err, "cannot load input");
            eprintln!("linemark: {}", err);
            process::exit(1);
        }
    };

    let options = Options {
        render: Render {
            fragment: cli.fragment,
            title: cli.title,
            author: cli.author,
            underline_block: !cli.inline_underline,
        },
        ..Options::default()
    };
    debug!(?options, "converting");

    let mut bw: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(BufWriter::new(fs::File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    if cli.prettify {
        bw.write_all(markdown_to_pretty_html(&md, &options).as_bytes())?;
    } else {
        fmt2io::write(&mut bw, |writer| linemark::format_html(&md, &options, writer))?;
    }
    bw.flush()?;

    Ok(())
}
