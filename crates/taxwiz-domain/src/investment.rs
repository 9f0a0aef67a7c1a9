//! Cálculo de recomendaciones de inversión con ventajas fiscales.
//!
//! Reglas simplificadas con límites de 2024: 15% del ingreso como tope
//! deducible (máx. $23,000), 15% mensual recomendado (máx. $1,900) y un
//! tramo marginal supuesto del 22% para el ahorro estimado.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

pub const DEDUCTIBLE_RATE: f64 = 0.15;
pub const MAX_TAX_DEDUCTIBLE: f64 = 23_000.0;
pub const MAX_RECOMMENDED_MONTHLY: f64 = 1_900.0;
pub const ASSUMED_TAX_BRACKET: f64 = 0.22;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
    MarriedFilingSeparately,
    HeadOfHousehold,
    QualifyingWidower,
}

impl FilingStatus {
    pub const ALL: [FilingStatus; 5] = [FilingStatus::Single,
                                        FilingStatus::MarriedFilingJointly,
                                        FilingStatus::MarriedFilingSeparately,
                                        FilingStatus::HeadOfHousehold,
                                        FilingStatus::QualifyingWidower];

    /// Texto tal como aparece en el selector.
    pub fn label(self) -> &'static str {
        match self {
            FilingStatus::Single => "Single",
            FilingStatus::MarriedFilingJointly => "Married Filing Jointly",
            FilingStatus::MarriedFilingSeparately => "Married Filing Separately",
            FilingStatus::HeadOfHousehold => "Head of Household",
            FilingStatus::QualifyingWidower => "Qualifying Widow(er)",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.label()).collect()
    }
}

impl FromStr for FilingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter()
                 .copied()
                 .find(|v| v.label() == s)
                 .ok_or_else(|| DomainError::UnknownVariant { kind: "filing status",
                                                              value: s.to_string() })
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentStrategy {
    pub strategy: String,
    pub max_contribution: f64,
    pub tax_benefit: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentAdvice {
    pub max_tax_deductible_amount: f64,
    pub recommended_monthly_investment: f64,
    pub estimated_tax_savings: f64,
    pub investment_strategies: Vec<InvestmentStrategy>,
    pub additional_questions: Vec<String>,
    pub resources: Vec<Resource>,
}

impl InvestmentAdvice {
    /// Calcula la recomendación a partir del ingreso mensual.
    pub fn compute(monthly_income: f64) -> Result<Self, DomainError> {
        if !monthly_income.is_finite() || monthly_income < 0.0 {
            return Err(DomainError::ValidationError(format!("monthly income must be a non-negative amount, got {monthly_income}")));
        }
        let annual_income = monthly_income * 12.0;
        let max_tax_deductible_amount = (annual_income * DEDUCTIBLE_RATE).min(MAX_TAX_DEDUCTIBLE);
        Ok(Self { max_tax_deductible_amount,
                  recommended_monthly_investment: (monthly_income * DEDUCTIBLE_RATE).min(MAX_RECOMMENDED_MONTHLY),
                  estimated_tax_savings: max_tax_deductible_amount * ASSUMED_TAX_BRACKET,
                  investment_strategies: strategies(),
                  additional_questions: ADDITIONAL_QUESTIONS.iter().map(|q| q.to_string()).collect(),
                  resources: resources() })
    }
}

const ADDITIONAL_QUESTIONS: [&str; 5] = ["Do you have access to an employer 401(k) match?",
                                         "Are you eligible for a Health Savings Account (HSA)?",
                                         "Do you have any existing retirement accounts?",
                                         "What are your specific retirement timeline goals?",
                                         "Are you considering any major life changes (marriage, home purchase, etc.)?"];

fn strategies() -> Vec<InvestmentStrategy> {
    const TABLE: [(&str, f64, &str, &str); 4] =
        [("401(k) Contribution",
          23_000.0,
          "Pre-tax deduction",
          "Maximize employer match if available, then contribute up to annual limit"),
         ("Traditional IRA", 7_000.0, "Tax-deductible contribution", "Additional retirement savings with immediate tax benefits"),
         ("Roth IRA", 7_000.0, "Tax-free growth", "Tax-free withdrawals in retirement, income limits apply"),
         ("HSA (if eligible)",
          4_300.0,
          "Triple tax advantage",
          "Deductible contributions, tax-free growth, tax-free medical withdrawals")];
    TABLE.iter()
         .map(|(strategy, max, benefit, desc)| InvestmentStrategy { strategy: strategy.to_string(),
                                                                    max_contribution: *max,
                                                                    tax_benefit: benefit.to_string(),
                                                                    description: desc.to_string() })
         .collect()
}

fn resources() -> Vec<Resource> {
    [("IRS Publication 590-A - Contributions to IRAs", "Official IRS guide on IRA contribution rules and limits"),
     ("401(k) Plan Overview - Department of Labor", "Comprehensive guide to 401(k) plans and employer benefits"),
     ("Tax-Advantaged Investment Calculator", "Interactive tool to calculate potential tax savings from investments")]
        .into_iter()
        .map(|(title, description)| Resource { title: title.into(),
                                               url: "#".into(),
                                               description: description.into() })
        .collect()
}
