//! pdf2docx CLI - PDF text to Word document

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdf2docx::{pdf_metadata, read_paragraphs, ConvertOptions, Converter, PageSelection};

#[derive(Parser)]
#[command(name = "pdf2docx")]
#[command(version)]
#[command(about = "Extract PDF text into a Word document, one paragraph per page", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(flatten)]
    convert: ConvertArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a PDF to DOCX (the default when no subcommand is given)
    Convert(ConvertArgs),

    /// Show PDF document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print the paragraphs of a DOCX file
    Dump {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

#[derive(Args, Default)]
struct ConvertArgs {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output DOCX file (defaults to FILE with a .docx extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Page range (e.g., "1-10", "1,3,5")
    #[arg(long)]
    pages: Option<String>,

    /// Treat pages whose text cannot be extracted as blank
    #[arg(long)]
    lenient: bool,

    /// Start each paragraph on a new page
    #[arg(long)]
    page_breaks: bool,

    /// Document title (defaults to the PDF title)
    #[arg(long)]
    title: Option<String>,

    /// Print the conversion report as JSON
    #[arg(long)]
    json: bool,

    /// Read the output back and check its paragraph count
    #[arg(long)]
    verify: bool,

    /// Hide the progress spinner
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert(args)) => cmd_convert(args),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Dump { input }) => cmd_dump(&input),
        None => cmd_convert(cli.convert),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// `report.pdf` -> `report.docx`, next to the input.
fn default_output(input: &Path) -> PathBuf {
    input.with_extension("docx")
}

fn build_options(args: &ConvertArgs) -> pdf2docx::Result<ConvertOptions> {
    let mut options = ConvertOptions::new().with_page_breaks(args.page_breaks);

    if let Some(pages) = &args.pages {
        options = options.with_pages(PageSelection::parse(pages)?);
    }
    if args.lenient {
        options = options.lenient();
    }
    if let Some(title) = &args.title {
        options = options.with_title(title);
    }

    Ok(options)
}

fn cmd_convert(args: ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let Some(input) = args.input.as_deref() else {
        println!("{}", "Usage: pdf2docx <FILE> [OUTPUT]".yellow());
        println!("       pdf2docx --help for more information");
        return Ok(());
    };
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(input));

    let options = build_options(&args)?;

    let spinner = if args.quiet || args.json {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };
    spinner.set_message(format!("Converting {}...", input.display()));

    let result = Converter::new(options).convert(input, &output);
    spinner.finish_and_clear();
    let report = result?;

    if args.verify {
        let written = read_paragraphs(&output)?;
        if written.len() != report.paragraphs {
            return Err(format!(
                "verification failed: expected {} paragraph(s), found {}",
                report.paragraphs,
                written.len()
            )
            .into());
        }
    }

    if args.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!("{} {}", "Saved to".green(), output.display());
    println!(
        "  {} {} paragraph(s) from {} page(s)",
        "├─".dimmed(),
        report.paragraphs,
        report.pages_processed
    );
    if report.has_skipped_pages() {
        let skipped: Vec<String> = report.skipped_pages.iter().map(u32::to_string).collect();
        println!(
            "  {} {} {}",
            "└─".dimmed(),
            "Skipped (no text):".yellow(),
            skipped.join(", ")
        );
    } else {
        println!("  {} no pages skipped", "└─".dimmed());
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let meta = pdf_metadata(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), meta.pdf_version);
    println!("{}: {}", "Pages".bold(), meta.page_count);

    let fields = [
        ("Title", &meta.title),
        ("Author", &meta.author),
        ("Subject", &meta.subject),
        ("Keywords", &meta.keywords),
        ("Creator", &meta.creator),
        ("Producer", &meta.producer),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            println!("{}: {}", label.bold(), value);
        }
    }
    if let Some(created) = meta.created {
        println!("{}: {}", "Created".bold(), created);
    }

    Ok(())
}

fn cmd_dump(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let paragraphs = read_paragraphs(input)?;

    for (i, paragraph) in paragraphs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format!("[{}]", i + 1).dimmed());
        println!("{}", paragraph);
    }

    Ok(())
}
