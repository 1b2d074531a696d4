use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::TaoModelError;
use crate::team::{self, HireYear, Role, TeamMember, MAX_HIRES_PER_ROLE, PROJECTION_YEARS};
use crate::types::{Money, Rate};
use crate::TaoModelResult;

// ---------------------------------------------------------------------------
// Fixed model constants (not user-editable)
// ---------------------------------------------------------------------------

/// Broker share of commission revenue.
pub const BROKER_SHARE_RATE: Rate = dec!(0.25);

/// Annual office rent.
pub const OVERHEAD_RENT_ANNUAL: Money = dec!(36000);

/// Annual travel budget.
pub const OVERHEAD_TRAVEL_ANNUAL: Money = dec!(24000);

/// Annual legal and accounting.
pub const OVERHEAD_LEGAL_ANNUAL: Money = dec!(24000);

/// Annual miscellaneous overhead.
pub const OVERHEAD_OTHER_ANNUAL: Money = dec!(12000);

/// Total annual overhead (rent + travel + legal + other).
pub const OVERHEAD_ANNUAL: Money = dec!(96000);

/// Months of consultant retainer billed in year 1.
pub const RETAINER_MONTHS: Decimal = dec!(6);

/// Floor applied to the close rate before dividing closings by it.
pub const CLOSE_RATE_FLOOR: Rate = dec!(0.0001);

/// The general manager is a fixed roster member.
pub const GM_MONTHLY_SALARY: Money = Decimal::ZERO;
pub const GM_HIRE_YEAR: HireYear = HireYear::Y1;

// ---------------------------------------------------------------------------
// Model configuration
// ---------------------------------------------------------------------------

/// Full set of user-editable model inputs.
///
/// Percent fields hold percent values as entered (3.65 means 3.65%); the
/// `*_rate` accessors convert to decimal rates. Missing fields deserialize
/// to the reference defaults, so a partial JSON config is always usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Average sale price per closing (USD)
    pub asp: Money,
    /// Commission capture on GMV, in percent
    pub capture_pct: Decimal,
    /// Lead close rate, in percent
    pub close_pct: Decimal,
    /// Cost per lead (USD)
    pub cpl: Money,
    /// Closings per projection year [Y1, Y2, Y3]
    pub closings: [Decimal; 3],
    /// Consultant monthly retainer fee (billed for 6 months in year 1)
    pub brainium_monthly_fee: Money,
    /// Consultant one-off success fee (year 1)
    pub brainium_success_fee: Money,
    /// Consultant revenue share on commission revenue, in percent
    pub brainium_rev_share_pct: Decimal,
    /// Shared monthly salary for senior analysts
    pub sr_monthly_salary: Money,
    /// Shared monthly salary for junior analysts
    pub jr_monthly_salary: Money,
    /// Hire year per senior analyst (at most 3)
    pub sr_hire_years: Vec<HireYear>,
    /// Hire year per junior analyst (at most 3)
    pub jr_hire_years: Vec<HireYear>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            asp: dec!(225000),
            capture_pct: dec!(3.65),
            close_pct: dec!(2.0),
            cpl: dec!(30),
            closings: [dec!(180), dec!(400), dec!(650)],
            brainium_monthly_fee: dec!(10000),
            brainium_success_fee: Decimal::ZERO,
            brainium_rev_share_pct: Decimal::ZERO,
            sr_monthly_salary: dec!(4000),
            jr_monthly_salary: dec!(2500),
            sr_hire_years: vec![HireYear::Y1],
            jr_hire_years: vec![HireYear::Y1],
        }
    }
}

/// A single typed edit to the configuration. All mutation goes through
/// `ModelConfig::apply`, so every caller shares one set of semantics for
/// roster resizing and field updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ConfigUpdate {
    Asp(Money),
    CapturePct(Decimal),
    ClosePct(Decimal),
    Cpl(Money),
    ClosingsYear { year: u8, closings: Decimal },
    BrainiumMonthlyFee(Money),
    BrainiumSuccessFee(Money),
    BrainiumRevSharePct(Decimal),
    SrMonthlySalary(Money),
    JrMonthlySalary(Money),
    SrHireCount(usize),
    JrHireCount(usize),
    SrHireYear { index: usize, year: HireYear },
    JrHireYear { index: usize, year: HireYear },
    Reset,
}

impl ModelConfig {
    /// Apply one typed update.
    ///
    /// Hire-count updates clamp to the per-role cap; an out-of-range year or
    /// hire index is an error.
    pub fn apply(&mut self, update: ConfigUpdate) -> TaoModelResult<()> {
        match update {
            ConfigUpdate::Asp(v) => self.asp = v,
            ConfigUpdate::CapturePct(v) => self.capture_pct = v,
            ConfigUpdate::ClosePct(v) => self.close_pct = v,
            ConfigUpdate::Cpl(v) => self.cpl = v,
            ConfigUpdate::ClosingsYear { year, closings } => {
                if !(1..=PROJECTION_YEARS as u8).contains(&year) {
                    return Err(TaoModelError::InvalidInput {
                        field: "closings_year".into(),
                        reason: format!("Year must be 1..={PROJECTION_YEARS}, got {year}"),
                    });
                }
                self.closings[(year - 1) as usize] = closings;
            }
            ConfigUpdate::BrainiumMonthlyFee(v) => self.brainium_monthly_fee = v,
            ConfigUpdate::BrainiumSuccessFee(v) => self.brainium_success_fee = v,
            ConfigUpdate::BrainiumRevSharePct(v) => self.brainium_rev_share_pct = v,
            ConfigUpdate::SrMonthlySalary(v) => self.sr_monthly_salary = v,
            ConfigUpdate::JrMonthlySalary(v) => self.jr_monthly_salary = v,
            ConfigUpdate::SrHireCount(n) => team::resize_hires(&mut self.sr_hire_years, n),
            ConfigUpdate::JrHireCount(n) => team::resize_hires(&mut self.jr_hire_years, n),
            ConfigUpdate::SrHireYear { index, year } => {
                Self::set_hire_year(&mut self.sr_hire_years, "sr_hire_year", index, year)?
            }
            ConfigUpdate::JrHireYear { index, year } => {
                Self::set_hire_year(&mut self.jr_hire_years, "jr_hire_year", index, year)?
            }
            ConfigUpdate::Reset => self.reset(),
        }
        Ok(())
    }

    fn set_hire_year(
        hires: &mut [HireYear],
        field: &str,
        index: usize,
        year: HireYear,
    ) -> TaoModelResult<()> {
        match hires.get_mut(index) {
            Some(slot) => {
                *slot = year;
                Ok(())
            }
            None => Err(TaoModelError::InvalidInput {
                field: field.into(),
                reason: format!("Hire index {index} past roster of {}", hires.len()),
            }),
        }
    }

    /// Restore the reference defaults.
    pub fn reset(&mut self) {
        *self = ModelConfig::default();
    }

    /// Reject negative monetary values, rates and closings. Everything
    /// non-negative is computable; degenerate values surface as warnings
    /// from the analyses instead.
    pub fn validate(&self) -> TaoModelResult<()> {
        let non_negative: [(&str, Decimal); 9] = [
            ("asp", self.asp),
            ("capture_pct", self.capture_pct),
            ("close_pct", self.close_pct),
            ("cpl", self.cpl),
            ("brainium_monthly_fee", self.brainium_monthly_fee),
            ("brainium_success_fee", self.brainium_success_fee),
            ("brainium_rev_share_pct", self.brainium_rev_share_pct),
            ("sr_monthly_salary", self.sr_monthly_salary),
            ("jr_monthly_salary", self.jr_monthly_salary),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(TaoModelError::InvalidInput {
                    field: field.into(),
                    reason: "Must be non-negative".into(),
                });
            }
        }
        for (i, closings) in self.closings.iter().enumerate() {
            if *closings < Decimal::ZERO {
                return Err(TaoModelError::InvalidInput {
                    field: format!("closings[{}]", i),
                    reason: "Must be non-negative".into(),
                });
            }
        }
        for (field, hires) in [
            ("sr_hire_years", &self.sr_hire_years),
            ("jr_hire_years", &self.jr_hire_years),
        ] {
            if hires.len() > MAX_HIRES_PER_ROLE {
                return Err(TaoModelError::InvalidInput {
                    field: field.into(),
                    reason: format!("At most {MAX_HIRES_PER_ROLE} hires per role"),
                });
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Derived values
    // -----------------------------------------------------------------------

    /// Capture percent as a decimal rate.
    pub fn capture_rate(&self) -> Rate {
        self.capture_pct / dec!(100)
    }

    /// Close percent as a decimal rate, before flooring.
    pub fn close_rate(&self) -> Rate {
        self.close_pct / dec!(100)
    }

    /// Close rate with the divisor floor applied.
    pub fn effective_close_rate(&self) -> Rate {
        self.close_rate().max(CLOSE_RATE_FLOOR)
    }

    /// Consultant revenue share as a decimal rate.
    pub fn rev_share_rate(&self) -> Rate {
        self.brainium_rev_share_pct / dec!(100)
    }

    /// Full roster: the fixed GM plus the configured analyst hires.
    pub fn roster(&self) -> Vec<TeamMember> {
        let mut roster = vec![TeamMember {
            role: Role::GeneralManager,
            monthly_salary: GM_MONTHLY_SALARY,
            hire_year: GM_HIRE_YEAR,
        }];
        for &hire_year in &self.sr_hire_years {
            roster.push(TeamMember {
                role: Role::SeniorAnalyst,
                monthly_salary: self.sr_monthly_salary,
                hire_year,
            });
        }
        for &hire_year in &self.jr_hire_years {
            roster.push(TeamMember {
                role: Role::JuniorAnalyst,
                monthly_salary: self.jr_monthly_salary,
                hire_year,
            });
        }
        roster
    }

    /// Annual salary bill per projection year, staged by hire year.
    pub fn annual_salaries(&self) -> [Money; PROJECTION_YEARS] {
        team::annual_salaries(&self.roster())
    }

    /// Annual overhead per projection year. Year 1 carries the consultant
    /// retainer (6 months) and the one-off success fee on top of the fixed
    /// overhead.
    pub fn annual_overhead(&self) -> [Money; PROJECTION_YEARS] {
        [
            OVERHEAD_ANNUAL + self.brainium_monthly_fee * RETAINER_MONTHS
                + self.brainium_success_fee,
            OVERHEAD_ANNUAL,
            OVERHEAD_ANNUAL,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reference_defaults() {
        let config = ModelConfig::default();
        assert_eq!(config.asp, dec!(225000));
        assert_eq!(config.capture_pct, dec!(3.65));
        assert_eq!(config.close_pct, dec!(2.0));
        assert_eq!(config.cpl, dec!(30));
        assert_eq!(config.closings, [dec!(180), dec!(400), dec!(650)]);
        assert_eq!(config.brainium_monthly_fee, dec!(10000));
        assert_eq!(config.sr_hire_years, vec![HireYear::Y1]);
        assert_eq!(config.jr_hire_years, vec![HireYear::Y1]);
    }

    #[test]
    fn test_default_salary_schedule() {
        let config = ModelConfig::default();
        // GM 0 + Sr 4000 + Jr 2500, all hired Y1 => 6500 * 12 every year
        assert_eq!(config.annual_salaries(), [dec!(78000), dec!(78000), dec!(78000)]);
    }

    #[test]
    fn test_default_overhead_schedule() {
        let config = ModelConfig::default();
        // Year 1: 96k + 10k retainer * 6 months
        assert_eq!(config.annual_overhead(), [dec!(156000), dec!(96000), dec!(96000)]);
    }

    #[test]
    fn test_effective_close_rate_floor() {
        let mut config = ModelConfig::default();
        config.apply(ConfigUpdate::ClosePct(Decimal::ZERO)).unwrap();
        assert_eq!(config.effective_close_rate(), CLOSE_RATE_FLOOR);
    }

    #[test]
    fn test_apply_closings_year() {
        let mut config = ModelConfig::default();
        config
            .apply(ConfigUpdate::ClosingsYear {
                year: 3,
                closings: dec!(700),
            })
            .unwrap();
        assert_eq!(config.closings[2], dec!(700));

        let err = config.apply(ConfigUpdate::ClosingsYear {
            year: 4,
            closings: dec!(1),
        });
        assert!(err.is_err());
    }

    #[test]
    fn test_apply_hire_count_and_year() {
        let mut config = ModelConfig::default();
        config.apply(ConfigUpdate::SrHireCount(3)).unwrap();
        assert_eq!(config.sr_hire_years.len(), 3);
        // Extension repeats the last hire year
        assert_eq!(config.sr_hire_years, vec![HireYear::Y1; 3]);

        config
            .apply(ConfigUpdate::SrHireYear {
                index: 2,
                year: HireYear::Y3,
            })
            .unwrap();
        assert_eq!(config.sr_hire_years[2], HireYear::Y3);

        let err = config.apply(ConfigUpdate::JrHireYear {
            index: 5,
            year: HireYear::Y2,
        });
        assert!(err.is_err());
    }

    #[test]
    fn test_apply_hire_count_clamps() {
        let mut config = ModelConfig::default();
        config.apply(ConfigUpdate::JrHireCount(9)).unwrap();
        assert_eq!(config.jr_hire_years.len(), MAX_HIRES_PER_ROLE);
    }

    #[test]
    fn test_reset_round_trip() {
        let mut config = ModelConfig::default();
        config.apply(ConfigUpdate::Asp(dec!(300000))).unwrap();
        config.apply(ConfigUpdate::SrHireCount(2)).unwrap();
        assert_ne!(config, ModelConfig::default());
        config.apply(ConfigUpdate::Reset).unwrap();
        assert_eq!(config, ModelConfig::default());
    }

    #[test]
    fn test_validate_rejects_negatives() {
        let mut config = ModelConfig::default();
        config.asp = dec!(-1);
        assert!(config.validate().is_err());

        let mut config = ModelConfig::default();
        config.closings[1] = dec!(-5);
        assert!(config.validate().is_err());

        let mut config = ModelConfig::default();
        config.brainium_rev_share_pct = dec!(-0.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ModelConfig = serde_json::from_str(r#"{"asp": "250000"}"#).unwrap();
        assert_eq!(config.asp, dec!(250000));
        assert_eq!(config.capture_pct, dec!(3.65));
        assert_eq!(config.closings, [dec!(180), dec!(400), dec!(650)]);
    }

    #[test]
    fn test_update_json_shape() {
        let update: ConfigUpdate = serde_json::from_str(
            r#"{"field": "closings_year", "value": {"year": 2, "closings": "500"}}"#,
        )
        .unwrap();
        assert_eq!(
            update,
            ConfigUpdate::ClosingsYear {
                year: 2,
                closings: dec!(500),
            }
        );
    }

    #[test]
    fn test_roster_shape() {
        let config = ModelConfig::default();
        let roster = config.roster();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].role, Role::GeneralManager);
        assert_eq!(roster[0].monthly_salary, Decimal::ZERO);
    }
}
