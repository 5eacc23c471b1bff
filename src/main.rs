//! @ai:module:intent CLI entry point for rendering stored errors
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on config, format, load, code

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use errtrace::{code, config, load, Error, FormatMode};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "errtrace")]
#[command(author, version, about = "Render structured errors in GNU, custom or JSON layouts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a stored error document
    Render {
        /// Path to the JSON error document ("-" for stdin)
        #[arg(default_value = "-")]
        path: PathBuf,

        /// Text mode: 0-3 or gnu, gnu-with-traces, custom, custom-with-traces
        /// (defaults to ERRTRACE_FORMAT)
        #[arg(long, short)]
        mode: Option<FormatMode>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },

    /// Show a colored summary of a stored error document
    Inspect {
        /// Path to the JSON error document ("-" for stdin)
        #[arg(default_value = "-")]
        path: PathBuf,
    },

    /// List the built-in category codes
    Codes {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    JsonPretty,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("errtrace=warn".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let exit = match cli.command {
        Commands::Render { path, mode, format } => match load::read_error(&path) {
            Ok(err) => {
                if let Some(mode) = mode {
                    config::install(mode);
                }
                println!("{}", render(&err, format));
                ExitCode::SUCCESS
            }
            Err(e) => fail(&e),
        },

        Commands::Inspect { path } => match load::read_error(&path) {
            Ok(err) => {
                print!("{}", inspect(&err));
                ExitCode::SUCCESS
            }
            Err(e) => fail(&e),
        },

        Commands::Codes { format } => {
            let codes = code::defaults();
            match format {
                Format::Text => print!("{}", errtrace::format::format_code_table(&codes)),
                Format::Json => println!("{}", errtrace::to_json(&codes, false)),
                Format::JsonPretty => println!("{}", errtrace::to_json(&codes, true)),
            }
            ExitCode::SUCCESS
        }
    };

    Ok(exit)
}

fn render(err: &Error, format: Format) -> String {
    match format {
        // Display picks up the installed (or environment) mode
        Format::Text => err.to_string(),
        Format::Json => err.format_json(false),
        Format::JsonPretty => err.format_json(true),
    }
}

fn inspect(err: &Error) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {} ({})\n",
        "code".bold(),
        err.code().id().to_string().red().bold(),
        err.code().description()
    ));
    output.push_str(&format!("{} {}\n", "message".bold(), err.message()));
    output.push_str(&format!(
        "{} {}\n",
        "at".bold(),
        format!("{}:{}", err.location().file, err.location().line).dimmed()
    ));

    if err.traces().is_empty() {
        output.push_str(&format!("{}\n", "no traces".dimmed()));
        return output;
    }

    output.push_str(&format!("\n  Traces ({}):\n", err.traces().len()));
    for (depth, trace) in err.traces().iter().enumerate() {
        output.push_str(&format!(
            "    #{} {} {}\n",
            depth,
            trace.message().cyan(),
            format!("{}:{}", trace.location().file, trace.location().line).dimmed()
        ));
    }

    output
}

fn fail(e: &load::LoadError) -> ExitCode {
    eprintln!("{} {}", "Error:".red().bold(), e);
    ExitCode::from(2)
}
