use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use valuation_core::PricingSchedule;
use valuation_ui::display::format_currency;
use valuation_ui::form::Field;
use valuation_ui::logging;
use valuation_ui::session::ValuationSession;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Instant home valuation estimator.
///
/// Fills the six property attributes from the flags, runs the pricing
/// formula with a ±5% volatility draw after the simulated calculation
/// delay, and prints the estimate. Every attribute must be provided;
/// missing ones are listed and the run exits nonzero.
#[derive(Debug, Parser)]
struct Cli {
    /// Living area in square feet.
    #[arg(long)]
    living_area: Option<String>,

    /// Bedroom count: 1 through 4, or "5+".
    #[arg(long)]
    bedrooms: Option<String>,

    /// Bathroom count: 1, 1.5, 2, 2.5, 3, 3.5, or "4+".
    #[arg(long)]
    bathrooms: Option<String>,

    /// Location category: urban, suburban, or rural.
    #[arg(long)]
    zone: Option<String>,

    /// Construction year, 1800-2025.
    #[arg(long)]
    year: Option<String>,

    /// Parking spaces: 0 through 2, or "3+".
    #[arg(long)]
    parking: Option<String>,

    /// Seed for the volatility draw. Omit for a fresh draw each run.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the full breakdown as JSON instead of one formatted line.
    #[arg(long)]
    json: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    let mut session = ValuationSession::new(PricingSchedule::default());
    session.edit(Field::LivingArea, cli.living_area.unwrap_or_default());
    session.edit(Field::BedroomCount, cli.bedrooms.unwrap_or_default());
    session.edit(Field::BathroomCount, cli.bathrooms.unwrap_or_default());
    session.edit(Field::GeographicZone, cli.zone.unwrap_or_default());
    session.edit(Field::ConstructionYear, cli.year.unwrap_or_default());
    session.edit(Field::ParkingSpaces, cli.parking.unwrap_or_default());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let breakdown = session.submit(&mut rng).await?;
    info!(
        estimate = %format_currency(breakdown.final_valuation),
        "valuation complete"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        println!(
            "Estimated value: {}",
            format_currency(breakdown.final_valuation)
        );
    }

    Ok(())
}
