//! qrkit CLI - styled QR code generation.

mod args;
mod commands;
mod ui;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use args::{ContactArgs, OutputArgs, StyleArgs, WifiArgs};

#[derive(Parser)]
#[command(name = "qrkit")]
#[command(about = "Generate styled QR codes", long_about = None)]
struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    style: StyleArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode free text (at most 500 characters are kept; "-" reads stdin)
    Text { text: String },
    /// Encode a URL ("http://" is added when no scheme is given)
    Url { url: String },
    /// Encode Wi-Fi network credentials
    Wifi(WifiArgs),
    /// Encode an email draft
    Email {
        /// Recipient address
        #[arg(long)]
        to: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        body: String,
    },
    /// Encode an SMS draft
    Sms {
        /// Recipient phone number
        #[arg(long)]
        number: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Encode a vCard 3.0 contact
    Vcard(ContactArgs),
    /// List module drawing styles
    Styles,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("failed to initialise logging: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[1;31m✗\x1b[0m Error: {e:#}");
            commands::exit_code(&e)
        }
    }
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("qrkit={level}").parse()?)
                .add_directive(format!("qrkit_core={level}").parse()?),
        )
        .init();
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let content = match cli.command {
        Commands::Styles => {
            commands::list_styles();
            return Ok(());
        }
        Commands::Text { text } => commands::text_content(&text)?,
        Commands::Url { url } => commands::url_content(url),
        Commands::Wifi(wifi) => wifi.into_content(),
        Commands::Email { to, subject, body } => commands::email_content(to, subject, body),
        Commands::Sms { number, message } => commands::sms_content(number, message),
        Commands::Vcard(contact) => contact.into_content(),
    };

    commands::generate(&content, &cli.style, &cli.output)
}
