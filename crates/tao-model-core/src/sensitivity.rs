use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::{ModelConfig, BROKER_SHARE_RATE, CLOSE_RATE_FLOOR, OVERHEAD_ANNUAL};
use crate::types::{round_half_away, safe_divide, with_metadata, ComputationOutput, Money, Rate};
use crate::TaoModelResult;

// ---------------------------------------------------------------------------
// Scenario bounds (fixed)
// ---------------------------------------------------------------------------

const DOWNSIDE_CLOSINGS: Decimal = dec!(450);
const DOWNSIDE_CAPTURE_RATE: Rate = dec!(0.03);
const DOWNSIDE_CLOSE_RATE: Rate = dec!(0.015);
const DOWNSIDE_CPL: Money = dec!(50);

const UPSIDE_CLOSINGS: Decimal = dec!(900);
const UPSIDE_CAPTURE_RATE: Rate = dec!(0.043);
const UPSIDE_CLOSE_RATE: Rate = dec!(0.03);
const UPSIDE_CPL: Money = dec!(25);

/// Scenario identity in the three-row table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioKind {
    Downside,
    Base,
    Upside,
}

/// One scenario row: the inputs it was computed from plus the resulting
/// steady-state year economics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityScenario {
    pub scenario: ScenarioKind,
    pub closings: Decimal,
    pub capture_rate: Rate,
    pub close_rate: Rate,
    pub cpl: Money,
    pub gmv: Money,
    pub leads: Decimal,
    /// leads * cpl, rounded half away from zero (scenario table only)
    pub media: Money,
    pub commission_revenue: Money,
    pub broker_share: Money,
    /// Year-3 salary bill plus the fixed annual overhead
    pub salaries_plus_overhead: Money,
    pub brainium_rev_share: Money,
    pub net: Money,
    pub net_margin_on_revenue: Rate,
}

/// Full sensitivity output: Downside, Base, Upside in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityOutput {
    pub scenarios: Vec<SensitivityScenario>,
}

/// Build the three-scenario sensitivity table.
///
/// Downside and Upside use fixed bounds; Base tracks the live year-3 inputs
/// (closings, capture, floored close rate, CPL). All three carry the year-3
/// salary bill plus fixed overhead, and revenue share at the live rate.
pub fn build_sensitivity(
    config: &ModelConfig,
) -> TaoModelResult<ComputationOutput<SensitivityOutput>> {
    let start = Instant::now();
    config.validate()?;

    let mut warnings = Vec::new();
    if config.close_rate() < CLOSE_RATE_FLOOR {
        warnings.push(format!(
            "Close rate {}% is below the 0.01% floor; base scenario uses the floor",
            config.close_pct
        ));
    }

    let salaries_plus_overhead = config.annual_salaries()[2] + OVERHEAD_ANNUAL;
    let rev_share_rate = config.rev_share_rate();

    let bounds = [
        (
            ScenarioKind::Downside,
            DOWNSIDE_CLOSINGS,
            DOWNSIDE_CAPTURE_RATE,
            DOWNSIDE_CLOSE_RATE,
            DOWNSIDE_CPL,
        ),
        (
            ScenarioKind::Base,
            config.closings[2],
            config.capture_rate(),
            config.effective_close_rate(),
            config.cpl,
        ),
        (
            ScenarioKind::Upside,
            UPSIDE_CLOSINGS,
            UPSIDE_CAPTURE_RATE,
            UPSIDE_CLOSE_RATE,
            UPSIDE_CPL,
        ),
    ];

    let mut scenarios = Vec::with_capacity(bounds.len());
    for (scenario, closings, capture_rate, close_rate, cpl) in bounds {
        let gmv = closings * config.asp;
        let commission_revenue = gmv * capture_rate;
        let broker_share = commission_revenue * BROKER_SHARE_RATE;
        let leads = round_half_away(closings / close_rate);
        let media = round_half_away(leads * cpl);
        let brainium_rev_share = commission_revenue * rev_share_rate;
        let net = commission_revenue
            - broker_share
            - salaries_plus_overhead
            - media
            - brainium_rev_share;

        if commission_revenue.is_zero() {
            warnings.push(format!(
                "Commission revenue is zero in the {scenario:?} scenario; net margin reported as 0"
            ));
        }

        scenarios.push(SensitivityScenario {
            scenario,
            closings,
            capture_rate,
            close_rate,
            cpl,
            gmv,
            leads,
            media,
            commission_revenue,
            broker_share,
            salaries_plus_overhead,
            brainium_rev_share,
            net,
            net_margin_on_revenue: safe_divide(net, commission_revenue),
        });
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Downside / Base / Upside Scenario Table",
        &serde_json::json!({
            "downside": { "closings": DOWNSIDE_CLOSINGS, "capture_rate": DOWNSIDE_CAPTURE_RATE,
                          "close_rate": DOWNSIDE_CLOSE_RATE, "cpl": DOWNSIDE_CPL },
            "upside": { "closings": UPSIDE_CLOSINGS, "capture_rate": UPSIDE_CAPTURE_RATE,
                        "close_rate": UPSIDE_CLOSE_RATE, "cpl": UPSIDE_CPL },
            "broker_share_rate": BROKER_SHARE_RATE,
            "overhead_annual": OVERHEAD_ANNUAL,
        }),
        warnings,
        elapsed,
        SensitivityOutput { scenarios },
    ))
}
