//! Human-readable rendering of engine results.

use std::fmt::Write as _;

use tubefolio_core::allocation::AllocationBucket;
use tubefolio_core::{AllocationSplit, Currency, RevenueProjection, YearlySnapshot};
use tubefolio_growth::{ProjectionSummary, Report};

/// Insert `,` every three digits of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Split a non-negative fixed-point string into grouped integer and fraction.
fn grouped(fixed: &str) -> (String, Option<&str>) {
    match fixed.split_once('.') {
        Some((int, frac)) => (group_thousands(int), Some(frac)),
        None => (group_thousands(fixed), None),
    }
}

/// `-฿1,234.50` style: symbol, grouping, exactly two decimals.
pub fn format_currency(value: f64, currency: Currency) -> String {
    let fixed = format!("{:.2}", value.abs());
    let negative = value < 0.0 && fixed != "0.00";
    let (int, frac) = grouped(&fixed);
    format!(
        "{}{}{}.{}",
        if negative { "-" } else { "" },
        currency.symbol(),
        int,
        frac.unwrap_or("00")
    )
}

/// Grouped count with up to three decimals, trailing zeros dropped.
pub fn format_count(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    let negative = value < 0.0 && trimmed != "0";
    let (int, frac) = grouped(trimmed);
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&int);
    if let Some(frac) = frac {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Percentage with no decimals, e.g. `+38%`.
pub fn format_growth_percent(percent: f64) -> String {
    format!("{percent:+.0}%")
}

pub fn render_revenue(revenue: &RevenueProjection, currency: Currency) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== REVENUE ESTIMATE ===");
    let _ = writeln!(out, "Daily revenue:          {}", format_currency(revenue.daily_revenue, currency));
    let _ = writeln!(out, "Monthly revenue:        {}", format_currency(revenue.monthly_revenue, currency));
    let _ = writeln!(out, "Annual revenue:         {}", format_currency(revenue.annual_revenue, currency));
    let _ = writeln!(out, "Channel value (est.):   {}", format_currency(revenue.channel_valuation_estimate, currency));
    let _ = writeln!(out, "Total monthly views:    {}", format_count(revenue.total_monthly_views));
    let _ = writeln!(out, "Estimated impressions:  {}", format_count(revenue.estimated_impressions));
    let _ = writeln!(out, "Revenue per 1k views:   {}", format_currency(revenue.revenue_per_mille, currency));
    let _ = writeln!(out, "Effective RPM:          {}", format_currency(revenue.effective_rpm(), currency));
    out
}

pub fn render_allocation(allocation: &AllocationSplit, currency: Currency) -> String {
    let annual = allocation.annualized();
    let mut out = String::new();
    let _ = writeln!(out, "=== 10-5-85 ALLOCATION ===");
    for bucket in AllocationBucket::ALL {
        let _ = writeln!(
            out,
            "{:<18} {:>3}%  {:>16}/mo  {:>18}/yr",
            bucket.label(),
            bucket.percent(),
            format_currency(allocation.amount(bucket), currency),
            format_currency(annual.amount(bucket), currency),
        );
    }
    out
}

pub fn render_projection(snapshots: &[YearlySnapshot], currency: Currency) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== GROWTH PROJECTION ===");
    if snapshots.is_empty() {
        let _ = writeln!(out, "(no completed years)");
        return out;
    }
    let _ = writeln!(
        out,
        "{:>4}  {:>18}  {:>18}  {:>18}  {:>16}",
        "Year", "Principal", "Value", "Returns", "Passive/mo"
    );
    for snap in snapshots {
        let _ = writeln!(
            out,
            "{:>4}  {:>18}  {:>18}  {:>18}  {:>16}",
            snap.year_index,
            format_currency(snap.cumulative_principal, currency),
            format_currency(snap.compounded_value, currency),
            format_currency(snap.cumulative_returns, currency),
            format_currency(snap.monthly_passive_income_estimate, currency),
        );
    }
    out
}

pub fn render_summary(summary: &ProjectionSummary, currency: Currency) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== AFTER {} YEARS ===", summary.years);
    let _ = writeln!(out, "Total wealth:           {}", format_currency(summary.compounded_value, currency));
    let _ = writeln!(out, "Total invested:         {}", format_currency(summary.cumulative_principal, currency));
    let _ = writeln!(
        out,
        "Investment returns:     {} ({} growth)",
        format_currency(summary.cumulative_returns, currency),
        format_growth_percent(summary.return_percentage)
    );
    let _ = writeln!(out, "Passive income:         {}/mo", format_currency(summary.monthly_passive_income_estimate, currency));
    out
}

pub fn render_report(report: &Report) -> String {
    let currency = report.metrics.currency;
    let mut out = String::new();
    out.push_str(&render_revenue(&report.revenue, currency));
    out.push('\n');
    out.push_str(&render_allocation(&report.allocation, currency));
    out.push('\n');
    out.push_str(&render_projection(&report.projection, currency));
    out.push('\n');
    out.push_str(&render_summary(&report.summary, currency));
    let _ = writeln!(
        out,
        "\nAssumes {:.1}% annual yield and a {:.1}% withdrawal rate.",
        report.annual_yield * 100.0,
        report.withdrawal_rate * 100.0
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tubefolio_core::{estimate_revenue, split_allocation, ActivityMetrics};
    use tubefolio_growth::{build_report, CompoundingEngine};

    #[test]
    fn currency_grouping_and_decimals() {
        assert_eq!(format_currency(1710.0, Currency::Thb), "฿1,710.00");
        assert_eq!(format_currency(1_234_567.891, Currency::Usd), "$1,234,567.89");
        assert_eq!(format_currency(57.0, Currency::Usd), "$57.00");
        assert_eq!(format_currency(0.0, Currency::Thb), "฿0.00");
    }

    #[test]
    fn currency_negative() {
        assert_eq!(format_currency(-1234.5, Currency::Thb), "-฿1,234.50");
        assert_eq!(format_currency(-0.001, Currency::Usd), "$0.00");
    }

    #[test]
    fn count_formatting() {
        assert_eq!(format_count(300_000.0), "300,000");
        assert_eq!(format_count(2_550_000.0), "2,550,000");
        assert_eq!(format_count(999.0), "999");
        assert_eq!(format_count(1234.5), "1,234.5");
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(-1000.0), "-1,000");
    }

    #[test]
    fn growth_percent_is_signed() {
        assert_eq!(format_growth_percent(38.4), "+38%");
        assert_eq!(format_growth_percent(0.0), "+0%");
    }

    #[test]
    fn revenue_block_lists_figures() {
        let text = render_revenue(&estimate_revenue(30, 10_000, 5.7), Currency::Thb);
        assert!(text.contains("฿1,710.00"));
        assert!(text.contains("฿57.00"));
        assert!(text.contains("300,000"));
    }

    #[test]
    fn allocation_block_lists_buckets() {
        let text = render_allocation(&split_allocation(1710.0), Currency::Thb);
        assert!(text.contains("Operator draw"));
        assert!(text.contains("฿1,453.50"));
        assert!(text.contains("฿17,442.00"));
    }

    #[test]
    fn empty_projection_block() {
        assert!(render_projection(&[], Currency::Usd).contains("no completed years"));
    }

    #[test]
    fn report_block_mentions_assumptions() {
        let metrics = ActivityMetrics::new(30, 10_000, 5.7, Currency::Thb);
        let report = build_report(&metrics, 2, &CompoundingEngine::default());
        let text = render_report(&report);
        assert!(text.contains("AFTER 2 YEARS"));
        assert!(text.contains("7.0% annual yield"));
        assert!(text.contains("4.0% withdrawal rate"));
    }
}
