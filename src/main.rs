use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use linktext::config::CONFIG_ENV;
use linktext::renderer::HtmlRenderer;
use linktext::{
    Color, Config, Content, Element, Error, MarginLevel, RenderOptions, Result, Variant,
    extract_link, render_lines,
};

#[derive(Parser)]
#[command(name = "linktext", version, about = "Render plain-text content with inline links")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// TOML config file with a [render] table
    #[arg(long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a content field, one block per non-blank line
    Render(RenderArgs),

    /// Print the link found in a single line of text
    Extract {
        /// Line of text to scan
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Input file (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Parse the input as JSON: a string or an array of lines
    #[arg(long)]
    json_input: bool,

    #[arg(long)]
    variant: Option<Variant>,

    #[arg(long)]
    color: Option<Color>,

    #[arg(long)]
    element: Option<Element>,

    #[arg(long)]
    center: bool,

    #[arg(long)]
    bold: bool,

    /// Margin tier below every line but the last
    #[arg(long)]
    min_margin: Option<MarginLevel>,

    /// Margin tier below the last line
    #[arg(long)]
    max_margin: Option<MarginLevel>,

    /// Extra class added to each block
    #[arg(long = "class")]
    class_name: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Render(args) => run_render(cli.config.as_deref(), args),
        Command::Extract { text } => run_extract(&text),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(2);
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run_render(config_path: Option<&Path>, args: RenderArgs) -> Result<i32> {
    let config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let options = merge_options(config.render, &args);
    debug!(?options, "render options");

    let source = read_input(args.file.as_deref())?;
    let content = if args.json_input {
        serde_json::from_str::<Content>(&source)?
    } else {
        Content::Text(source)
    };

    let segments = render_lines(&content, &options);
    match args.format {
        Format::Html => {
            let renderer = HtmlRenderer::new().with_class(options.class_name.clone());
            print!("{}", renderer.render(&segments));
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&segments)?),
    }
    Ok(0)
}

fn run_extract(text: &str) -> Result<i32> {
    match extract_link(text) {
        Some(link) => {
            println!("{}", serde_json::to_string_pretty(&link)?);
            Ok(0)
        }
        None => {
            println!("no link found");
            Ok(1)
        }
    }
}

fn merge_options(mut options: RenderOptions, args: &RenderArgs) -> RenderOptions {
    if let Some(variant) = args.variant {
        options.variant = variant;
    }
    if let Some(color) = args.color {
        options.color = color;
    }
    if let Some(element) = args.element {
        options.element = element;
    }
    if let Some(min_margin) = args.min_margin {
        options.min_margin = min_margin;
    }
    if let Some(max_margin) = args.max_margin {
        options.max_margin = max_margin;
    }
    if args.class_name.is_some() {
        options.class_name = args.class_name.clone();
    }
    options.center |= args.center;
    options.bold |= args.bold;
    options
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| Error::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(buffer)
        }
    }
}
