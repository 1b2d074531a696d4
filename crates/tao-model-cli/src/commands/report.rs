use serde_json::{json, Value};

use tao_model_core::engine::evaluate_model;

use crate::copy::{self, KeyStat, Language, Section};
use crate::format::{pct1, usd0};

use super::model::ModelArgs;

/// Build the investor report: the combined evaluation reduced to formatted,
/// localised figures the way the dashboard presents them.
pub fn run_report(args: ModelArgs, lang: Language) -> Result<Value, Box<dyn std::error::Error>> {
    let config = args.resolve()?;
    let output = evaluate_model(&config)?;
    let eval = &output.result;

    let mut rows = Vec::new();
    let mut push = |section: Section, label: String, value: String| {
        rows.push(json!({
            "section": copy::section_label(section, lang),
            "label": label,
            "value": value,
        }));
    };

    let y1 = &eval.pnl.years[0];
    let cash = &eval.cash;
    let stats = [
        (KeyStat::ClosingsY1, y1.closings.to_string()),
        (KeyStat::CommissionRevenueY1, usd0(y1.commission_revenue)),
        (KeyStat::NetIncomeY1, usd0(y1.net)),
        (KeyStat::NetMarginY1, pct1(y1.net_margin_on_revenue)),
        (
            KeyStat::CashTurnPositive,
            match cash.month_turn_positive {
                Some(month) => copy::month_label(month, lang),
                None => copy::never_within_year(lang).to_string(),
            },
        ),
        (KeyStat::PreSalesBurn, usd0(cash.pre_sales_burn)),
        (KeyStat::PostSalesNet, usd0(cash.post_sales_net)),
        (KeyStat::MaxDeficit, usd0(cash.max_deficit)),
    ];
    for (stat, value) in stats {
        push(Section::KeyStats, copy::stat_label(stat, lang).to_string(), value);
    }

    for scenario in &eval.sensitivity.scenarios {
        push(
            Section::Scenarios,
            copy::scenario_label(scenario.scenario, lang).to_string(),
            usd0(scenario.net),
        );
    }

    for member in config.roster() {
        push(
            Section::Team,
            copy::role_label(member.role, lang).to_string(),
            usd0(member.monthly_salary),
        );
    }

    Ok(json!({
        "title": copy::header_title(lang),
        "rows": rows,
    }))
}
