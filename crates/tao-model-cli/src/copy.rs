use clap::ValueEnum;

use tao_model_core::sensitivity::ScenarioKind;
use tao_model_core::team::Role;

/// Report language. The dashboard ships to a bilingual audience, so every
/// report label exists in English and Spanish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    En,
    Es,
}

/// Sections of the investor report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    KeyStats,
    Scenarios,
    Team,
}

/// Headline figures surfaced on the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStat {
    ClosingsY1,
    CommissionRevenueY1,
    NetIncomeY1,
    NetMarginY1,
    CashTurnPositive,
    PreSalesBurn,
    PostSalesNet,
    MaxDeficit,
}

pub fn header_title(lang: Language) -> &'static str {
    match lang {
        Language::En => "TAO Investor Model",
        Language::Es => "Modelo de Inversión TAO",
    }
}

pub fn section_label(section: Section, lang: Language) -> &'static str {
    match (section, lang) {
        (Section::KeyStats, Language::En) => "Key Figures",
        (Section::KeyStats, Language::Es) => "Cifras Clave",
        (Section::Scenarios, Language::En) => "Scenario Net Income",
        (Section::Scenarios, Language::Es) => "Resultado Neto por Escenario",
        (Section::Team, Language::En) => "Team",
        (Section::Team, Language::Es) => "Equipo",
    }
}

pub fn stat_label(stat: KeyStat, lang: Language) -> &'static str {
    match (stat, lang) {
        (KeyStat::ClosingsY1, Language::En) => "Year-1 closings",
        (KeyStat::ClosingsY1, Language::Es) => "Cierres año 1",
        (KeyStat::CommissionRevenueY1, Language::En) => "Year-1 commission revenue",
        (KeyStat::CommissionRevenueY1, Language::Es) => "Ingresos por comisión año 1",
        (KeyStat::NetIncomeY1, Language::En) => "Year-1 net income",
        (KeyStat::NetIncomeY1, Language::Es) => "Resultado neto año 1",
        (KeyStat::NetMarginY1, Language::En) => "Year-1 net margin",
        (KeyStat::NetMarginY1, Language::Es) => "Margen neto año 1",
        (KeyStat::CashTurnPositive, Language::En) => "Cash turns positive",
        (KeyStat::CashTurnPositive, Language::Es) => "Caja en positivo",
        (KeyStat::PreSalesBurn, Language::En) => "Monthly burn before sales",
        (KeyStat::PreSalesBurn, Language::Es) => "Consumo mensual antes de ventas",
        (KeyStat::PostSalesNet, Language::En) => "Monthly net after ramp",
        (KeyStat::PostSalesNet, Language::Es) => "Neto mensual tras el arranque",
        (KeyStat::MaxDeficit, Language::En) => "Maximum cash deficit",
        (KeyStat::MaxDeficit, Language::Es) => "Déficit máximo de caja",
    }
}

pub fn scenario_label(kind: ScenarioKind, lang: Language) -> &'static str {
    match (kind, lang) {
        (ScenarioKind::Downside, Language::En) => "Downside",
        (ScenarioKind::Downside, Language::Es) => "Pesimista",
        (ScenarioKind::Base, Language::En) => "Base",
        (ScenarioKind::Base, Language::Es) => "Base",
        (ScenarioKind::Upside, Language::En) => "Upside",
        (ScenarioKind::Upside, Language::Es) => "Optimista",
    }
}

pub fn role_label(role: Role, lang: Language) -> &'static str {
    match (role, lang) {
        (Role::GeneralManager, Language::En) => "General Manager",
        (Role::GeneralManager, Language::Es) => "Gerente General",
        (Role::SeniorAnalyst, Language::En) => "Senior Analyst",
        (Role::SeniorAnalyst, Language::Es) => "Analista Senior",
        (Role::JuniorAnalyst, Language::En) => "Junior Analyst",
        (Role::JuniorAnalyst, Language::Es) => "Analista Junior",
    }
}

pub fn month_label(month: u8, lang: Language) -> String {
    match lang {
        Language::En => format!("Month {}", month),
        Language::Es => format!("Mes {}", month),
    }
}

pub fn never_within_year(lang: Language) -> &'static str {
    match lang {
        Language::En => "Not within 12 months",
        Language::Es => "No dentro de 12 meses",
    }
}
