//! Terminal rendering for simulation reports and candles.

use dca_domain::time::date_from_millis;
use dca_domain::{Candle, SimulationReport, SimulationResult};
use prettytable::{Table, row};
use rust_decimal::Decimal;

/// Prints the headline numbers of a report.
pub fn print_summary(report: &SimulationReport) {
    let result = &report.result;

    println!("\n📊 DCA Simulation Results");
    println!("════════════════════════════════════");
    println!(
        "Period:          {} → {} ({})",
        report.start_date, report.end_date, report.frequency
    );
    println!("Per purchase:    ${:.2}", report.amount);
    println!("Purchases:       {}", result.purchase_count());
    println!("Total Invested:  ${:.2}", result.total_invested);
    println!("BTC Accumulated: {:.8}", result.btc_accumulated);
    println!("Avg Buy Price:   ${:.2}", result.avg_buy_price);
    println!("Latest Price:    {}", money_or_dash(result.latest_price));
    println!("Current Value:   {}", money_or_dash(result.current_value));
    println!(
        "ROI:             {}",
        result
            .roi
            .map(|roi| format!("{:.2}%", roi * Decimal::ONE_HUNDRED))
            .unwrap_or_else(|| "-".to_string())
    );
    println!("Lump Sum Value:  {}", money_or_dash(result.lump_sum_value));
    println!("DCA vs Lump Sum: {}", money_or_dash(result.dca_vs_lump_sum()));
    println!("════════════════════════════════════");
}

/// One row per purchase.
pub fn chart_table(result: &SimulationResult) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Date", "Price", "Invested", "BTC", "Value"]);
    for event in &result.chart_data {
        table.add_row(row![
            event.date,
            format!("{:.2}", event.price_at_buy.value),
            format!("{:.2}", event.invested),
            format!("{:.8}", event.btc_accumulated),
            format!("{:.2}", event.portfolio_value_at_date),
        ]);
    }
    table
}

/// One row per candle.
pub fn candle_table(candles: &[Candle]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Date", "Open", "High", "Low", "Close", "Volume"]);
    for candle in candles {
        let day = date_from_millis(candle.open_time)
            .map(|d| d.to_string())
            .unwrap_or_else(|| candle.open_time.to_string());
        table.add_row(row![
            day,
            format!("{:.2}", candle.open.value),
            format!("{:.2}", candle.high.value),
            format!("{:.2}", candle.low.value),
            format!("{:.2}", candle.close.value),
            format!("{:.4}", candle.volume),
        ]);
    }
    table
}

fn money_or_dash(value: Option<Decimal>) -> String {
    value
        .map(|v| format!("${v:.2}"))
        .unwrap_or_else(|| "-".to_string())
}
