//! CLI tool for building WhatsApp inquiry links.
//!
//! Renders the same templates as the HTTP service and prints both the
//! message and the deep link, without opening anything.
//!
//! # Usage
//!
//! ```bash
//! # Quick location search
//! cargo run --bin linkgen -- location-search --location Pune
//!
//! # Filtered search
//! cargo run --bin linkgen -- filtered-search --location Noida --category pg --max-price 15000
//!
//! # Property inquiry
//! cargo run --bin linkgen -- property --name "Green Villa" --location Noida --price 15000
//!
//! # Feedback
//! cargo run --bin linkgen -- feedback --rating 5 --text "Found a flat in two days"
//! ```
//!
//! # Environment Variables
//!
//! - `WHATSAPP_NUMBER` (required unless `--number` is given)
//! - `MESSAGING_DOMAIN` (optional, default `wa.me`)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

use inquiry_gateway::domain::catalog::Catalog;
use inquiry_gateway::prelude::{Destination, InquiryFields, InquiryService, InquiryVariant};

/// CLI tool for building WhatsApp inquiry links.
#[derive(Parser)]
#[command(name = "linkgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Destination number as bare digits (overrides WHATSAPP_NUMBER)
    #[arg(short, long)]
    number: Option<String>,

    /// Deep-link host (overrides MESSAGING_DOMAIN)
    #[arg(short, long)]
    domain: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// One subcommand per inquiry variant.
#[derive(Subcommand)]
enum Commands {
    /// Search rentals in a city
    LocationSearch {
        #[arg(short, long)]
        location: Option<String>,
    },

    /// Search with location/category/budget filters
    FilteredSearch {
        #[arg(short, long)]
        location: Option<String>,

        /// Catalog id (pg, houses, ...), or free text
        #[arg(short, long)]
        category: Option<String>,

        #[arg(long)]
        min_price: Option<String>,

        #[arg(long)]
        max_price: Option<String>,
    },

    /// Ask about a rental category
    Category {
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Ask about a specific property
    Property {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        /// Monthly price in rupees, digits only
        #[arg(short, long)]
        price: Option<String>,
    },

    /// Request a property visit
    Visit {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        location: Option<String>,
    },

    /// Send feedback (rating 1-5 and text are required)
    Feedback {
        #[arg(short, long)]
        rating: u8,

        #[arg(short, long)]
        text: String,

        #[arg(short, long)]
        name: Option<String>,
    },

    /// Ask for support
    Support,

    /// General question
    General,

    /// Partner/listing inquiry
    Partnership,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let number = match cli.number {
        Some(n) => n,
        None => std::env::var("WHATSAPP_NUMBER")
            .context("WHATSAPP_NUMBER must be set (or pass --number)")?,
    };
    let domain = cli
        .domain
        .or_else(|| std::env::var("MESSAGING_DOMAIN").ok())
        .unwrap_or_else(|| "wa.me".to_string());

    let destination = Destination::new(number)?;
    let service = InquiryService::new(domain, destination);
    let catalog = Catalog::new();

    let (variant, fields) = collect(cli.command, &catalog);

    let link = service
        .build_link(variant, &fields)
        .map_err(|e| anyhow::anyhow!("Failed to build link: {}", e.to_error_info().message))?;

    println!("{}", "\u{1F4AC} Inquiry message".bright_blue().bold());
    println!();
    println!("{}", link.message);
    println!();
    println!("{}", "\u{1F517} Deep link".bright_blue().bold());
    println!();
    println!("{}", link.url.bright_cyan());

    Ok(())
}

/// Maps a subcommand onto a variant and its field bag.
fn collect(command: Commands, catalog: &Catalog) -> (InquiryVariant, InquiryFields) {
    match command {
        Commands::LocationSearch { location } => (
            InquiryVariant::LocationSearch,
            InquiryFields {
                location,
                ..InquiryFields::default()
            },
        ),
        Commands::FilteredSearch {
            location,
            category,
            min_price,
            max_price,
        } => (
            InquiryVariant::FilteredSearch,
            InquiryFields {
                location,
                category: category.and_then(|raw| catalog.display_title(&raw)),
                min_price,
                max_price,
                ..InquiryFields::default()
            },
        ),
        Commands::Category { category } => (
            InquiryVariant::CategoryInquiry,
            InquiryFields {
                category: category.and_then(|raw| catalog.display_title(&raw)),
                ..InquiryFields::default()
            },
        ),
        Commands::Property {
            name,
            location,
            price,
        } => (
            InquiryVariant::PropertyInquiry,
            InquiryFields {
                property_name: name,
                location,
                price,
                ..InquiryFields::default()
            },
        ),
        Commands::Visit { name, location } => (
            InquiryVariant::VisitRequest,
            InquiryFields {
                property_name: name,
                location,
                ..InquiryFields::default()
            },
        ),
        Commands::Feedback { rating, text, name } => (
            InquiryVariant::Feedback,
            InquiryFields {
                rating: Some(rating),
                feedback_text: Some(text),
                name,
                ..InquiryFields::default()
            },
        ),
        Commands::Support => (InquiryVariant::SupportRequest, InquiryFields::default()),
        Commands::General => (InquiryVariant::GeneralInquiry, InquiryFields::default()),
        Commands::Partnership => (InquiryVariant::PartnershipInquiry, InquiryFields::default()),
    }
}
