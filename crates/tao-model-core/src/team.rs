use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Hard cap on analyst hires per role.
pub const MAX_HIRES_PER_ROLE: usize = 3;

/// Number of projection years in the model.
pub const PROJECTION_YEARS: usize = 3;

/// Hire year for a roster member. Y0 is pre-launch; the projection itself
/// covers Y1..Y3.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum HireYear {
    Y0,
    #[default]
    Y1,
    Y2,
    Y3,
}

impl HireYear {
    /// Numeric position on the timeline: Y0 = 0 .. Y3 = 3.
    pub fn order(self) -> u8 {
        match self {
            HireYear::Y0 => 0,
            HireYear::Y1 => 1,
            HireYear::Y2 => 2,
            HireYear::Y3 => 3,
        }
    }
}

/// Roster roles. The general manager is a fixed member; analyst roles are
/// hired in configurable counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    GeneralManager,
    SeniorAnalyst,
    JuniorAnalyst,
}

/// A single roster member with a shared per-role monthly salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub role: Role,
    pub monthly_salary: Money,
    pub hire_year: HireYear,
}

/// Resize a role's hire list to `count` entries (clamped to the per-role cap).
///
/// Shrinking truncates; growing repeats the last hire year, or Y1 when the
/// list is empty.
pub fn resize_hires(hires: &mut Vec<HireYear>, count: usize) {
    let count = count.min(MAX_HIRES_PER_ROLE);
    if count <= hires.len() {
        hires.truncate(count);
        return;
    }
    let fill = hires.last().copied().unwrap_or(HireYear::Y1);
    hires.resize(count, fill);
}

/// Annual salary bill per projection year, staged by hire year.
///
/// A member contributes a full 12 months of salary in every year at or after
/// their hire year (Y0 hires are on payroll throughout).
pub fn annual_salaries(roster: &[TeamMember]) -> [Money; PROJECTION_YEARS] {
    let mut totals = [Decimal::ZERO; PROJECTION_YEARS];
    for (i, total) in totals.iter_mut().enumerate() {
        let year = (i + 1) as u8;
        for member in roster {
            if member.hire_year.order() <= year {
                *total += member.monthly_salary * dec!(12);
            }
        }
    }
    totals
}
