use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::cash::{self, CashTrajectory};
use crate::config::ModelConfig;
use crate::pnl::{self, PnlOutput};
use crate::sensitivity::{self, SensitivityOutput};
use crate::types::{with_metadata, ComputationOutput};
use crate::TaoModelResult;

/// All three analyses computed from a single configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEvaluation {
    pub pnl: PnlOutput,
    pub sensitivity: SensitivityOutput,
    pub cash: CashTrajectory,
}

/// Evaluate the full model in one call. Deterministic, pure and synchronous;
/// warnings from the three analyses are concatenated (deduplicated, since the
/// cash trajectory re-derives the year-1 P&L).
pub fn evaluate_model(
    config: &ModelConfig,
) -> TaoModelResult<ComputationOutput<ModelEvaluation>> {
    let start = Instant::now();

    let pnl = pnl::build_annual_pnl(config)?;
    let sensitivity = sensitivity::build_sensitivity(config)?;
    let cash = cash::build_cash_trajectory(config)?;

    let mut warnings: Vec<String> = Vec::new();
    for warning in pnl
        .warnings
        .into_iter()
        .chain(sensitivity.warnings)
        .chain(cash.warnings)
    {
        if !warnings.contains(&warning) {
            warnings.push(warning);
        }
    }

    let output = ModelEvaluation {
        pnl: pnl.result,
        sensitivity: sensitivity.result,
        cash: cash.result,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Combined Investor Model Evaluation",
        &serde_json::to_value(config)?,
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigUpdate;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn sample_input() -> ModelConfig {
        ModelConfig::default()
    }

    #[test]
    fn test_combined_parts_match_standalone_runs() {
        let config = sample_input();
        let combined = evaluate_model(&config).unwrap();
        let pnl = pnl::build_annual_pnl(&config).unwrap();
        let sensitivity = sensitivity::build_sensitivity(&config).unwrap();
        let cash = cash::build_cash_trajectory(&config).unwrap();

        assert_eq!(combined.result.pnl, pnl.result);
        assert_eq!(combined.result.sensitivity, sensitivity.result);
        assert_eq!(combined.result.cash, cash.result);
    }

    #[test]
    fn test_base_scenario_net_equals_year_3_net() {
        let result = evaluate_model(&sample_input()).unwrap();
        let y3 = &result.result.pnl.years[2];
        let base = &result.result.sensitivity.scenarios[1];
        assert_eq!(base.net, y3.net);
        assert_eq!(result.result.pnl.years[2].net, dec!(2854593.75));
    }

    #[test]
    fn test_deterministic() {
        let config = sample_input();
        let a = evaluate_model(&config).unwrap();
        let b = evaluate_model(&config).unwrap();
        assert_eq!(a.result, b.result);
        assert_eq!(a.warnings, b.warnings);
    }

    #[test]
    fn test_warnings_deduplicated() {
        let mut config = sample_input();
        config.apply(ConfigUpdate::ClosePct(Decimal::ZERO)).unwrap();
        let result = evaluate_model(&config).unwrap();
        let floor_warnings = result
            .warnings
            .iter()
            .filter(|w| w.contains("below the 0.01% floor"))
            .count();
        // P&L and cash share the identical floor warning; sensitivity words its own
        assert_eq!(floor_warnings, 2);
    }

    #[test]
    fn test_rejects_negative_input() {
        let mut config = sample_input();
        config.asp = dec!(-1);
        assert!(evaluate_model(&config).is_err());
    }
}
