use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use tao_model_core::cash::build_cash_trajectory;
use tao_model_core::config::{ConfigUpdate, ModelConfig};
use tao_model_core::engine::evaluate_model;
use tao_model_core::pnl::build_annual_pnl;
use tao_model_core::sensitivity::build_sensitivity;

use crate::input;

/// Shared model inputs. A config file or piped JSON replaces the whole
/// configuration; individual flags override the reference defaults.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ModelArgs {
    /// Average sale price per closing (USD)
    #[arg(long)]
    pub asp: Option<Decimal>,

    /// Commission capture on GMV, percent (e.g. 3.65)
    #[arg(long)]
    pub capture_pct: Option<Decimal>,

    /// Lead close rate, percent (e.g. 2.0)
    #[arg(long)]
    pub close_pct: Option<Decimal>,

    /// Cost per lead (USD)
    #[arg(long)]
    pub cpl: Option<Decimal>,

    /// Year-1 closings
    #[arg(long)]
    pub closings_y1: Option<Decimal>,

    /// Year-2 closings
    #[arg(long)]
    pub closings_y2: Option<Decimal>,

    /// Year-3 closings
    #[arg(long)]
    pub closings_y3: Option<Decimal>,

    /// Consultant monthly retainer, billed for 6 months in year 1 (USD)
    #[arg(long)]
    pub brainium_monthly_fee: Option<Decimal>,

    /// Consultant one-off success fee in year 1 (USD)
    #[arg(long)]
    pub brainium_success_fee: Option<Decimal>,

    /// Consultant revenue share on commission, percent
    #[arg(long)]
    pub brainium_rev_share_pct: Option<Decimal>,

    /// Shared monthly salary for senior analysts (USD)
    #[arg(long)]
    pub sr_monthly_salary: Option<Decimal>,

    /// Shared monthly salary for junior analysts (USD)
    #[arg(long)]
    pub jr_monthly_salary: Option<Decimal>,

    /// Number of senior analyst hires (0-3)
    #[arg(long)]
    pub sr_hires: Option<usize>,

    /// Number of junior analyst hires (0-3)
    #[arg(long)]
    pub jr_hires: Option<usize>,

    /// Path to a JSON or YAML config file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

impl ModelArgs {
    /// Resolve the configuration: file, then piped stdin, then flags applied
    /// on top of the reference defaults.
    pub fn resolve(&self) -> Result<ModelConfig, Box<dyn std::error::Error>> {
        if let Some(ref path) = self.input {
            return input::file::read_config(path);
        }
        if let Some(data) = input::stdin::read_stdin()? {
            return Ok(serde_json::from_value(data)?);
        }

        let mut config = ModelConfig::default();
        for update in self.updates() {
            config.apply(update)?;
        }
        Ok(config)
    }

    fn updates(&self) -> Vec<ConfigUpdate> {
        let mut updates = Vec::new();
        if let Some(v) = self.asp {
            updates.push(ConfigUpdate::Asp(v));
        }
        if let Some(v) = self.capture_pct {
            updates.push(ConfigUpdate::CapturePct(v));
        }
        if let Some(v) = self.close_pct {
            updates.push(ConfigUpdate::ClosePct(v));
        }
        if let Some(v) = self.cpl {
            updates.push(ConfigUpdate::Cpl(v));
        }
        for (year, closings) in [
            (1, self.closings_y1),
            (2, self.closings_y2),
            (3, self.closings_y3),
        ] {
            if let Some(v) = closings {
                updates.push(ConfigUpdate::ClosingsYear { year, closings: v });
            }
        }
        if let Some(v) = self.brainium_monthly_fee {
            updates.push(ConfigUpdate::BrainiumMonthlyFee(v));
        }
        if let Some(v) = self.brainium_success_fee {
            updates.push(ConfigUpdate::BrainiumSuccessFee(v));
        }
        if let Some(v) = self.brainium_rev_share_pct {
            updates.push(ConfigUpdate::BrainiumRevSharePct(v));
        }
        if let Some(v) = self.sr_monthly_salary {
            updates.push(ConfigUpdate::SrMonthlySalary(v));
        }
        if let Some(v) = self.jr_monthly_salary {
            updates.push(ConfigUpdate::JrMonthlySalary(v));
        }
        if let Some(n) = self.sr_hires {
            updates.push(ConfigUpdate::SrHireCount(n));
        }
        if let Some(n) = self.jr_hires {
            updates.push(ConfigUpdate::JrHireCount(n));
        }
        updates
    }
}

pub fn run_pnl(args: ModelArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config = args.resolve()?;
    let result = build_annual_pnl(&config)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_sensitivity(args: ModelArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config = args.resolve()?;
    let result = build_sensitivity(&config)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_cash(args: ModelArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config = args.resolve()?;
    let result = build_cash_trajectory(&config)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_model(args: ModelArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config = args.resolve()?;
    let result = evaluate_model(&config)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_defaults() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(ModelConfig::default())?)
}
