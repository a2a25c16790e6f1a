//! The hardcoded financial plan and its derived figures.
//!
//! Amounts are thousands of pesos (M$), annual OPEX for the maintenance
//! superintendence. The only computation is arithmetic aggregation over
//! the fixed category lines; the "optimized" scenario is the same plan
//! read from its projected column.

use serde::Serialize;

/// One budget category with its current and IoT-scenario amounts.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetLine {
    pub category: &'static str,
    /// What the category covers, shown in the breakdown tables.
    pub detail: &'static str,
    /// Annual amount under the current run-to-failure model, in M$.
    pub current: u64,
    /// Annual amount under the IoT scenario, in M$.
    pub projected: u64,
    /// Why the amount moves (or does not).
    pub note: &'static str,
}

impl BudgetLine {
    /// Signed change from current to projected, in M$.
    pub fn variation(&self) -> i64 {
        self.projected as i64 - self.current as i64
    }

    /// Variation as a percentage of the current amount.
    ///
    /// `None` for lines with no current spend (new categories), where a
    /// percentage is meaningless.
    pub fn impact_pct(&self) -> Option<f64> {
        if self.current == 0 {
            return None;
        }
        Some(self.variation() as f64 / self.current as f64 * 100.0)
    }
}

/// Headline figures quoted verbatim in the executive view.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HeadlineKpis {
    pub capex: &'static str,
    pub net_savings: &'static str,
    pub budget_reduction: &'static str,
    pub roi: &'static str,
}

/// The full plan: category lines plus headline figures.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialPlan {
    pub lines: Vec<BudgetLine>,
    pub kpis: HeadlineKpis,
}

impl FinancialPlan {
    /// The plan as pitched.
    pub fn standard() -> Self {
        Self {
            lines: vec![
                BudgetLine {
                    category: "1. Own Workforce",
                    detail: "13 FTE (superintendent, engineers, shift crews)",
                    current: 1_564_731,
                    projected: 1_564_731,
                    note: "Fixed structure unchanged",
                },
                BudgetLine {
                    category: "2. Third-Party Services",
                    detail: "Base contract plus failure add-ons",
                    current: 6_257_442,
                    projected: 5_944_570,
                    note: "Better planning (-5%)",
                },
                BudgetLine {
                    category: "3. Materials & Spares",
                    detail: "Replacement driven by accelerated wear",
                    current: 1_808_100,
                    projected: 1_771_938,
                    note: "Less collateral damage (-2%)",
                },
                BudgetLine {
                    category: "4. IoT Technology (new)",
                    detail: "Licences plus depreciation",
                    current: 0,
                    projected: 35_047,
                    note: "Cost of the innovation",
                },
                BudgetLine {
                    category: "5. Contingencies & Logistics",
                    detail: "Hot-shot urgency freight",
                    current: 194_227,
                    projected: 159_699,
                    note: "Sharp drop in urgencies (-17.8%)",
                },
            ],
            kpis: HeadlineKpis {
                capex: "M$ 70.210",
                net_savings: "M$ 348.515",
                budget_reduction: "3.5%",
                roi: "> 15%",
            },
        }
    }

    /// Annual OPEX under the current model, in M$.
    pub fn total_current(&self) -> u64 {
        self.lines.iter().map(|l| l.current).sum()
    }

    /// Annual OPEX under the IoT scenario, in M$.
    pub fn total_projected(&self) -> u64 {
        self.lines.iter().map(|l| l.projected).sum()
    }

    /// Captured savings: current minus projected, in M$.
    pub fn total_savings(&self) -> i64 {
        self.total_current() as i64 - self.total_projected() as i64
    }

    /// Overall budget movement as a (negative) percentage.
    pub fn reduction_pct(&self) -> f64 {
        -(self.total_savings() as f64) / self.total_current() as f64 * 100.0
    }

    /// A line's share of the current-scenario total, as a percentage.
    pub fn share_pct(&self, line: &BudgetLine) -> f64 {
        line.current as f64 / self.total_current() as f64 * 100.0
    }
}

/// Group digits with dots, es-CL style: 9824500 -> "9.824.500".
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format an amount for display: `M$ 9.824.500`.
pub fn format_money(value: i64) -> String {
    format!("M$ {}", format_thousands(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_totals() {
        let plan = FinancialPlan::standard();
        assert_eq!(plan.total_current(), 9_824_500);
        assert_eq!(plan.total_projected(), 9_475_985);
        assert_eq!(plan.total_savings(), 348_515);
        assert!((plan.reduction_pct() + 3.55).abs() < 0.01);
    }

    #[test]
    fn test_line_variation_and_impact() {
        let plan = FinancialPlan::standard();
        let services = &plan.lines[1];
        assert_eq!(services.variation(), -312_872);
        assert!((services.impact_pct().unwrap() + 5.0).abs() < 0.01);

        // The new IoT line has no current spend, so no impact percentage.
        let iot = &plan.lines[3];
        assert_eq!(iot.variation(), 35_047);
        assert!(iot.impact_pct().is_none());
    }

    #[test]
    fn test_services_dominate_the_current_budget() {
        let plan = FinancialPlan::standard();
        let services = &plan.lines[1];
        assert!((plan.share_pct(services) - 63.7).abs() < 0.05);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(950), "950");
        assert_eq!(format_thousands(35_047), "35.047");
        assert_eq!(format_thousands(9_824_500), "9.824.500");
        assert_eq!(format_thousands(-312_872), "-312.872");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(348_515), "M$ 348.515");
        assert_eq!(format_money(-34_528), "M$ -34.528");
    }
}
