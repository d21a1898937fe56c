#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Inspect an SMTP URI or send a message through it

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use smtp_uri::{
    domain::communication::{
        delivery::{DeliveryOutcome, DeliveryService, DeliverySettings, LastAttempt},
        mailer::OutgoingMessage,
        smtp_uri::SmtpUriSource,
    },
    infrastructure::{email::config::MailConfig, email::smtp::SMTPMailer, logging::TracingLogSink},
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// The mail configuration
    #[clap(flatten)]
    pub mail: MailConfig,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the transport configuration the SMTP URI resolves to
    Check {
        /// Sender address to validate
        #[arg(long)]
        from: Option<String>,
    },

    /// Send one message
    Send {
        /// Sender address
        #[arg(long)]
        from: Option<String>,

        /// Recipient, may be repeated
        #[arg(long, required = true)]
        to: Vec<String>,

        /// Carbon-copy recipient, may be repeated
        #[arg(long)]
        cc: Vec<String>,

        /// Blind carbon-copy recipient, may be repeated
        #[arg(long)]
        bcc: Vec<String>,

        /// Subject line
        #[arg(long, default_value = "")]
        subject: String,

        /// Plain text body
        #[arg(long, default_value = "")]
        body: String,
    },
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let store = args.mail.settings_store()?;
    let settings = args.mail.delivery_settings(store.as_ref())?;

    let service = DeliveryService::new(
        Arc::new(SMTPMailer::new(args.mail.sender.clone())),
        settings,
        Arc::new(TracingLogSink),
    );

    match args.command {
        Command::Check { from } => {
            check(&service, from);
            Ok(())
        }
        Command::Send {
            from,
            to,
            cc,
            bcc,
            subject,
            body,
        } => {
            let message = OutgoingMessage {
                from,
                to,
                cc,
                bcc,
                subject,
                body,
            };

            let mut last = LastAttempt::new();
            let outcome = service.send(&mut last, message).await;
            service.shutdown(last);

            if outcome == DeliveryOutcome::Failed {
                bail!("mail was not sent");
            }

            Ok(())
        }
    }
}

#[mutants::skip]
fn check(service: &DeliveryService<SMTPMailer>, from: Option<String>) {
    let DeliverySettings { smtp_uri, .. } = service.settings();

    if smtp_uri.is_locked() {
        println!("source: SMTP_URI (settings locked)");
    } else if let SmtpUriSource::Stored(_) = smtp_uri {
        println!("source: smtp_uri setting");
    } else {
        println!("source: none");
    }

    let mut message = OutgoingMessage {
        from,
        ..Default::default()
    };
    let config = service.configure(&mut message);

    println!("transport: {}", config);

    if let Some(from) = message.from {
        println!("from: {}", from);
    }

    for bcc in message.bcc {
        println!("bcc: {}", bcc);
    }
}
