use std::io::{self, Write};

use crate::sources::wfm::types::PriceExtremes;

/// Whole amounts print without a decimal point, anything else with two places
pub fn format_platinum(value: f64) -> String {
    if value.trunc() == value {
        format!("{:.0} platinum", value)
    } else {
        format!("{:.2} platinum", value)
    }
}

pub fn write_report<W: Write>(out: &mut W, item_name: &str, extremes: &PriceExtremes) -> io::Result<()> {
    writeln!(out, "Item: {}", item_name)?;

    match extremes.lowest_sell {
        Some(price) => writeln!(out, "Lowest sell: {}", format_platinum(price))?,
        None => writeln!(out, "Lowest sell: (no visible sell orders)")?,
    }

    match extremes.highest_buy {
        Some(price) => writeln!(out, "Highest buy: {}", format_platinum(price))?,
        None => writeln!(out, "Highest buy: (no visible buy orders)")?,
    }

    Ok(())
}
