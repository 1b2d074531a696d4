use rust_decimal_macros::dec;
use tao_model_core::config::{ConfigUpdate, ModelConfig};
use tao_model_core::pnl::build_annual_pnl;
use tao_model_core::sensitivity::{build_sensitivity, ScenarioKind};

// ===========================================================================
// Scenario table — fixed bounds and the live Base row
// ===========================================================================

#[test]
fn test_reference_defaults_scenario_nets() {
    let result = build_sensitivity(&ModelConfig::default()).unwrap();
    let scenarios = &result.result.scenarios;

    assert_eq!(scenarios[0].scenario, ScenarioKind::Downside);
    assert_eq!(scenarios[0].net, dec!(604125));

    assert_eq!(scenarios[1].scenario, ScenarioKind::Base);
    assert_eq!(scenarios[1].net, dec!(2854593.75));

    assert_eq!(scenarios[2].scenario, ScenarioKind::Upside);
    assert_eq!(scenarios[2].net, dec!(5606625));
}

#[test]
fn test_downside_and_upside_ignore_live_commercial_inputs() {
    let mut config = ModelConfig::default();
    config.apply(ConfigUpdate::CapturePct(dec!(5))).unwrap();
    config.apply(ConfigUpdate::ClosePct(dec!(3.5))).unwrap();
    config.apply(ConfigUpdate::Cpl(dec!(100))).unwrap();

    let result = build_sensitivity(&config).unwrap();
    let down = &result.result.scenarios[0];
    let up = &result.result.scenarios[2];

    assert_eq!(down.closings, dec!(450));
    assert_eq!(down.capture_rate, dec!(0.03));
    assert_eq!(down.close_rate, dec!(0.015));
    assert_eq!(down.cpl, dec!(50));

    assert_eq!(up.closings, dec!(900));
    assert_eq!(up.capture_rate, dec!(0.043));
    assert_eq!(up.close_rate, dec!(0.03));
    assert_eq!(up.cpl, dec!(25));
}

#[test]
fn test_base_net_matches_year_3_pnl_net() {
    // Holds for any non-degenerate config since Base mirrors the Y3 inputs
    // and the Y3 cost structure is salaries + fixed overhead.
    let mut config = ModelConfig::default();
    config.apply(ConfigUpdate::Asp(dec!(275000))).unwrap();
    config.apply(ConfigUpdate::CapturePct(dec!(4.2))).unwrap();
    config
        .apply(ConfigUpdate::BrainiumRevSharePct(dec!(2.5)))
        .unwrap();
    config
        .apply(ConfigUpdate::ClosingsYear {
            year: 3,
            closings: dec!(800),
        })
        .unwrap();

    let pnl = build_annual_pnl(&config).unwrap();
    let sensitivity = build_sensitivity(&config).unwrap();
    assert_eq!(
        sensitivity.result.scenarios[1].net,
        pnl.result.years[2].net
    );
}

#[test]
fn test_asp_scales_every_scenario() {
    let mut config = ModelConfig::default();
    config.apply(ConfigUpdate::Asp(dec!(450000))).unwrap();

    let result = build_sensitivity(&config).unwrap();
    // Double the default ASP doubles scenario GMV and commission
    assert_eq!(result.result.scenarios[0].gmv, dec!(202500000));
    assert_eq!(result.result.scenarios[0].commission_revenue, dec!(6075000));
    assert_eq!(result.result.scenarios[2].gmv, dec!(405000000));
}

#[test]
fn test_cost_base_follows_year_3_roster() {
    let mut config = ModelConfig::default();
    config.apply(ConfigUpdate::SrHireCount(3)).unwrap();

    let result = build_sensitivity(&config).unwrap();
    // GM + 3 Sr + 1 Jr = 14500/mo => 174000/yr salaries + 96000 overhead
    for row in &result.result.scenarios {
        assert_eq!(row.salaries_plus_overhead, dec!(270000));
    }
}

#[test]
fn test_scenario_margins_ordered_on_defaults() {
    let result = build_sensitivity(&ModelConfig::default()).unwrap();
    let scenarios = &result.result.scenarios;
    assert!(scenarios[0].net_margin_on_revenue < scenarios[1].net_margin_on_revenue);
    assert!(scenarios[1].net_margin_on_revenue < scenarios[2].net_margin_on_revenue);
}
