use std::io::{self, Write};

use anyhow::Context;
use log::debug;
use sources::wfm::WarframeMarket;
use sources::PriceSource;

pub mod input;
pub mod report;
pub mod slug;
pub mod sources;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();

    // fatal line bypasses the log filter
    if let Err(e) = run().await {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let item = input::resolve_item(&args, io::stdin().lock(), io::stdout())?;

    let slug = slug::normalize(&item);
    debug!("Resolved '{}' to slug '{}'", item, slug);

    let market = WarframeMarket::from_env().context("error setting up http client")?;
    let response = market
        .get_orders(&slug)
        .await
        .context("error fetching orders")?;

    if response.payload.orders.is_empty() {
        debug!("No orders listed for '{}'", slug);
    }
    let extremes = response.payload.orders.price_extremes();

    let mut stdout = io::stdout().lock();
    report::write_report(&mut stdout, &response.payload.item.item_name, &extremes)
        .and_then(|_| stdout.flush())
        .context("error writing report")?;

    Ok(())
}
