use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod aggregate;
mod chart;
mod dashboard;
mod derive;
mod load;
mod models;

#[derive(Parser)]
#[command(name = "appointment-noshow-dashboard")]
#[command(about = "Medical appointment no-show dashboard", long_about = None)]
struct Cli {
    /// Path to the appointment dataset
    #[arg(long, default_value = "KaggleV2-May-2016.csv")]
    csv: PathBuf,
    /// Address to serve the dashboard on
    #[arg(long, default_value = "127.0.0.1:8050")]
    bind: String,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);
    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rows = load::load_appointments(&cli.csv)?;
    let records = derive::augment(rows);
    tracing::info!(records = records.len(), csv = %cli.csv.display(), "dataset loaded");
    let dates = records.iter().map(|r| r.appointment_date);
    if let (Some(first), Some(last)) = (dates.clone().min(), dates.max()) {
        tracing::info!(%first, %last, "appointment date span");
    }

    let counts = aggregate::show_status_counts(&records);
    let weekday_rates = aggregate::rates_by_weekday(&records);
    let age_gender_rates = aggregate::no_show_rate_by_age_gender(&records);

    let tabs = vec![
        dashboard::TabSpec::new(
            "Overall No-show vs Show-up",
            "No-show vs Show-up Rates",
            chart::overall_chart(&counts),
        ),
        dashboard::TabSpec::new(
            "Age & Gender Analysis",
            "Impact of Age & Gender on No-show Rates",
            chart::age_gender_chart(&age_gender_rates),
        ),
        dashboard::TabSpec::new(
            "Day of Week Analysis",
            "No-show Rate by Day of the Week",
            chart::weekday_chart(&weekday_rates),
        ),
    ];

    let page = dashboard::render_page(&tabs);
    dashboard::serve(&cli.bind, page).await
}
