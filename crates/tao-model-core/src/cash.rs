use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::ModelConfig;
use crate::pnl;
use crate::types::{round_half_away, with_metadata, ComputationOutput, Money};
use crate::TaoModelResult;

/// Months in the trajectory.
pub const CASH_MONTHS: usize = 12;

/// Pre-sales months at the start of year 1.
pub const PRE_SALES_MONTHS: usize = 3;

/// 12-month year-1 cash trajectory.
///
/// Months 1..=3 burn salaries, overhead and media at the monthly run rate
/// with no revenue; months 4..=12 spread the remaining year-1 net evenly.
/// Both monthly figures are rounded half away from zero, so the 12-month
/// sum can differ from the year-1 net by up to 4.5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashTrajectory {
    /// Net cash movement per month, 1-based order
    pub monthly_net: Vec<Money>,
    /// Running sum of `monthly_net`, starting from zero
    pub cumulative: Vec<Money>,
    /// Monthly pre-sales movement (negative when burning)
    pub pre_sales_burn: Money,
    /// Monthly post-sales movement
    pub post_sales_net: Money,
    /// Lowest cumulative balance across the 12 months
    pub max_deficit: Money,
    /// First 1-based month with a positive cumulative balance; None when the
    /// balance never turns positive within 12 months
    pub month_turn_positive: Option<u8>,
}

/// Build the 12-month cash trajectory from the year-1 P&L.
pub fn build_cash_trajectory(
    config: &ModelConfig,
) -> TaoModelResult<ComputationOutput<CashTrajectory>> {
    let start = Instant::now();
    config.validate()?;

    let (years, mut warnings) = pnl::compute_years(config);
    let y1 = &years[0];

    let months = dec!(12);
    let pre_sales_burn =
        -round_half_away(y1.salaries / months + y1.overhead / months + y1.media / months);
    let pre_sales_total = Decimal::from(PRE_SALES_MONTHS as u32) * pre_sales_burn;
    let post_sales_net = round_half_away(
        (y1.net - pre_sales_total) / Decimal::from((CASH_MONTHS - PRE_SALES_MONTHS) as u32),
    );

    let mut monthly_net = Vec::with_capacity(CASH_MONTHS);
    let mut cumulative = Vec::with_capacity(CASH_MONTHS);
    let mut balance = Decimal::ZERO;
    for month in 1..=CASH_MONTHS {
        let net = if month <= PRE_SALES_MONTHS {
            pre_sales_burn
        } else {
            post_sales_net
        };
        balance += net;
        monthly_net.push(net);
        cumulative.push(balance);
    }

    let max_deficit = cumulative.iter().copied().min().unwrap_or(Decimal::ZERO);
    let month_turn_positive = cumulative
        .iter()
        .position(|c| *c > Decimal::ZERO)
        .map(|i| (i + 1) as u8);

    if month_turn_positive.is_none() {
        warnings.push("Cumulative cash does not turn positive within 12 months".into());
    }

    let output = CashTrajectory {
        monthly_net,
        cumulative,
        pre_sales_burn,
        post_sales_net,
        max_deficit,
        month_turn_positive,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "12-Month Year-1 Cash Trajectory",
        &serde_json::json!({
            "pre_sales_months": PRE_SALES_MONTHS,
            "months": CASH_MONTHS,
            "rounding": "nearest whole, ties away from zero",
        }),
        warnings,
        elapsed,
        output,
    ))
}
