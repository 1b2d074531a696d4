use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::{ModelConfig, BROKER_SHARE_RATE, CLOSE_RATE_FLOOR, OVERHEAD_ANNUAL, RETAINER_MONTHS};
use crate::team::PROJECTION_YEARS;
use crate::types::{round_half_away, safe_divide, with_metadata, ComputationOutput, Money, Rate};
use crate::TaoModelResult;

// ---------------------------------------------------------------------------
// Output types — Annual P&L
// ---------------------------------------------------------------------------

/// One projection year of the investor P&L.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlYear {
    /// Projection year, 1-based
    pub year: u8,
    pub closings: Decimal,
    /// Gross merchandise value: closings * ASP
    pub gmv: Money,
    /// Leads required to hit the closings, rounded half away from zero
    pub leads: Decimal,
    /// Media spend: leads * CPL
    pub media: Money,
    /// GMV * capture rate
    pub commission_revenue: Money,
    /// Fixed 25% of commission revenue
    pub broker_share: Money,
    pub salaries: Money,
    pub overhead: Money,
    pub brainium_rev_share: Money,
    pub net: Money,
    /// net / commission_revenue, 0 when revenue is 0
    pub net_margin_on_revenue: Rate,
}

/// Per-closing economics for year 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitEconomics {
    pub commission_per_closing: Money,
    pub media_per_closing: Money,
    pub net_per_closing: Money,
}

/// Consultant (Brainium) cost breakdown for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultantYearCost {
    pub year: u8,
    /// Monthly fee * retainer months, year 1 only
    pub retainer: Money,
    /// One-off success fee, year 1 only
    pub success_fee: Money,
    /// Revenue share on commission, every year
    pub revenue_share: Money,
    pub total: Money,
}

/// Full annual P&L output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlOutput {
    pub years: Vec<PnlYear>,
    pub unit_economics: UnitEconomics,
    pub consultant_costs: Vec<ConsultantYearCost>,
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Compute the three P&L year rows. Shared with the cash trajectory, which
/// consumes the year-1 row.
pub(crate) fn compute_years(config: &ModelConfig) -> (Vec<PnlYear>, Vec<String>) {
    let mut warnings = Vec::new();

    let capture_rate = config.capture_rate();
    let effective_close = config.effective_close_rate();
    if config.close_rate() < CLOSE_RATE_FLOOR {
        warnings.push(format!(
            "Close rate {}% is below the 0.01% floor; leads computed at the floor",
            config.close_pct
        ));
    }

    let rev_share_rate = config.rev_share_rate();
    let salaries = config.annual_salaries();
    let overhead = config.annual_overhead();

    let mut years = Vec::with_capacity(PROJECTION_YEARS);
    for i in 0..PROJECTION_YEARS {
        let year = (i + 1) as u8;
        let closings = config.closings[i];
        let gmv = closings * config.asp;
        let commission_revenue = gmv * capture_rate;
        let broker_share = commission_revenue * BROKER_SHARE_RATE;
        let leads = round_half_away(closings / effective_close);
        let media = leads * config.cpl;
        let brainium_rev_share = commission_revenue * rev_share_rate;
        let net = commission_revenue
            - broker_share
            - salaries[i]
            - overhead[i]
            - media
            - brainium_rev_share;

        if commission_revenue.is_zero() {
            warnings.push(format!(
                "Commission revenue is zero in year {year}; net margin reported as 0"
            ));
        }

        years.push(PnlYear {
            year,
            closings,
            gmv,
            leads,
            media,
            commission_revenue,
            broker_share,
            salaries: salaries[i],
            overhead: overhead[i],
            brainium_rev_share,
            net,
            net_margin_on_revenue: safe_divide(net, commission_revenue),
        });
    }

    (years, warnings)
}

fn unit_economics(year_1: &PnlYear) -> UnitEconomics {
    let closings_safe = year_1.closings.max(Decimal::ONE);
    UnitEconomics {
        commission_per_closing: year_1.commission_revenue / closings_safe,
        media_per_closing: year_1.media / closings_safe,
        net_per_closing: year_1.net / closings_safe,
    }
}

fn consultant_costs(config: &ModelConfig, years: &[PnlYear]) -> Vec<ConsultantYearCost> {
    years
        .iter()
        .map(|row| {
            let retainer = if row.year == 1 {
                config.brainium_monthly_fee * RETAINER_MONTHS
            } else {
                Decimal::ZERO
            };
            let success_fee = if row.year == 1 {
                config.brainium_success_fee
            } else {
                Decimal::ZERO
            };
            let revenue_share = row.brainium_rev_share;
            ConsultantYearCost {
                year: row.year,
                retainer,
                success_fee,
                revenue_share,
                total: retainer + success_fee + revenue_share,
            }
        })
        .collect()
}

/// Build the 3-year investor P&L with unit economics and the consultant
/// cost schedule.
pub fn build_annual_pnl(config: &ModelConfig) -> TaoModelResult<ComputationOutput<PnlOutput>> {
    let start = Instant::now();
    config.validate()?;

    let (years, warnings) = compute_years(config);
    let output = PnlOutput {
        unit_economics: unit_economics(&years[0]),
        consultant_costs: consultant_costs(config, &years),
        years,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "3-Year Investor P&L (commission capture)",
        &serde_json::json!({
            "broker_share_rate": BROKER_SHARE_RATE,
            "overhead_annual": OVERHEAD_ANNUAL,
            "retainer_months": RETAINER_MONTHS,
            "close_rate_floor": CLOSE_RATE_FLOOR,
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigUpdate;
    use crate::team::HireYear;
    use pretty_assertions::assert_eq;

    fn sample_input() -> ModelConfig {
        ModelConfig::default()
    }

    #[test]
    fn test_year_1_known_answer() {
        let result = build_annual_pnl(&sample_input()).unwrap();
        let y1 = &result.result.years[0];

        assert_eq!(y1.closings, dec!(180));
        assert_eq!(y1.gmv, dec!(40500000));
        assert_eq!(y1.leads, dec!(9000));
        assert_eq!(y1.media, dec!(270000));
        assert_eq!(y1.commission_revenue, dec!(1478250));
        assert_eq!(y1.broker_share, dec!(369562.5));
        assert_eq!(y1.salaries, dec!(78000));
        assert_eq!(y1.overhead, dec!(156000));
        assert_eq!(y1.brainium_rev_share, dec!(0));
        assert_eq!(y1.net, dec!(604687.5));
    }

    #[test]
    fn test_later_years_known_answers() {
        let result = build_annual_pnl(&sample_input()).unwrap();
        assert_eq!(result.result.years[1].net, dec!(1689750));
        assert_eq!(result.result.years[2].net, dec!(2854593.75));
    }

    #[test]
    fn test_leads_round_half_away() {
        let mut config = sample_input();
        config.apply(ConfigUpdate::ClosePct(dec!(1.7))).unwrap();
        let result = build_annual_pnl(&config).unwrap();
        // 180 / 0.017 = 10588.23.. => 10588
        assert_eq!(result.result.years[0].leads, dec!(10588));
    }

    #[test]
    fn test_close_rate_floor_applies() {
        let mut config = sample_input();
        config.apply(ConfigUpdate::ClosePct(Decimal::ZERO)).unwrap();
        let result = build_annual_pnl(&config).unwrap();
        // 180 / 0.0001 = 1,800,000 leads
        assert_eq!(result.result.years[0].leads, dec!(1800000));
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_unit_economics_known_answer() {
        let result = build_annual_pnl(&sample_input()).unwrap();
        let unit = &result.result.unit_economics;
        assert_eq!(unit.commission_per_closing, dec!(8212.5));
        assert_eq!(unit.media_per_closing, dec!(1500));
        assert_eq!(unit.net_per_closing, dec!(3359.375));
    }

    #[test]
    fn test_unit_economics_zero_closings_guard() {
        let mut config = sample_input();
        config
            .apply(ConfigUpdate::ClosingsYear {
                year: 1,
                closings: Decimal::ZERO,
            })
            .unwrap();
        let result = build_annual_pnl(&config).unwrap();
        // Divisor guard is max(closings, 1); per-closing figures equal totals
        let y1 = &result.result.years[0];
        let unit = &result.result.unit_economics;
        assert_eq!(unit.commission_per_closing, y1.commission_revenue);
        assert_eq!(unit.net_per_closing, y1.net);
    }

    #[test]
    fn test_consultant_schedule() {
        let mut config = sample_input();
        config
            .apply(ConfigUpdate::BrainiumSuccessFee(dec!(25000)))
            .unwrap();
        config
            .apply(ConfigUpdate::BrainiumRevSharePct(dec!(1)))
            .unwrap();
        let result = build_annual_pnl(&config).unwrap();
        let costs = &result.result.consultant_costs;

        assert_eq!(costs[0].retainer, dec!(60000));
        assert_eq!(costs[0].success_fee, dec!(25000));
        assert_eq!(costs[0].revenue_share, dec!(14782.50));
        assert_eq!(costs[0].total, dec!(99782.50));

        assert_eq!(costs[1].retainer, dec!(0));
        assert_eq!(costs[1].success_fee, dec!(0));
        assert_eq!(costs[1].revenue_share, dec!(32850.00));

        // Year-1 overhead picks up the success fee too
        assert_eq!(result.result.years[0].overhead, dec!(181000));
    }

    #[test]
    fn test_staged_hires_raise_later_salaries() {
        let mut config = sample_input();
        config.apply(ConfigUpdate::SrHireCount(2)).unwrap();
        config
            .apply(ConfigUpdate::SrHireYear {
                index: 1,
                year: HireYear::Y2,
            })
            .unwrap();
        let result = build_annual_pnl(&config).unwrap();
        assert_eq!(result.result.years[0].salaries, dec!(78000));
        assert_eq!(result.result.years[1].salaries, dec!(126000));
        assert_eq!(result.result.years[2].salaries, dec!(126000));
    }

    #[test]
    fn test_zero_revenue_margin_guard() {
        let mut config = sample_input();
        config.apply(ConfigUpdate::Asp(Decimal::ZERO)).unwrap();
        let result = build_annual_pnl(&config).unwrap();
        for row in &result.result.years {
            assert_eq!(row.commission_revenue, dec!(0));
            assert_eq!(row.net_margin_on_revenue, dec!(0));
            assert!(row.net < Decimal::ZERO);
        }
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("Commission revenue is zero")));
    }

    #[test]
    fn test_gmv_identity() {
        let result = build_annual_pnl(&sample_input()).unwrap();
        for row in &result.result.years {
            assert_eq!(row.gmv, row.closings * dec!(225000));
            assert_eq!(row.broker_share, row.commission_revenue * dec!(0.25));
        }
    }

    #[test]
    fn test_rejects_negative_input() {
        let mut config = sample_input();
        config.cpl = dec!(-30);
        assert!(build_annual_pnl(&config).is_err());
    }
}
