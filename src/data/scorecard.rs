//! Balanced-scorecard KPI catalog.
//!
//! Four perspectives, two cards each, all figures hardcoded. Trend shapes
//! render as fixed sparkline patterns; they carry no data, only the visual
//! story each KPI is meant to tell.

/// The four scorecard perspectives, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    Financial,
    Customer,
    Process,
    Learning,
}

impl Perspective {
    pub fn label(&self) -> &'static str {
        match self {
            Perspective::Financial => "Financial",
            Perspective::Customer => "Customer",
            Perspective::Process => "Internal Processes",
            Perspective::Learning => "Learning & Growth",
        }
    }
}

/// The canned story a KPI's mini-chart tells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendShape {
    Growth,
    StableHigh,
    Consistent,
    Reduction,
    Step,
}

impl TrendShape {
    /// Fixed sparkline levels (0-7) for the 8-character mini-chart.
    pub fn pattern(&self) -> [u8; 8] {
        match self {
            TrendShape::Growth => [1, 2, 2, 3, 4, 5, 6, 7],
            TrendShape::StableHigh => [6, 6, 7, 6, 7, 7, 6, 7],
            TrendShape::Consistent => [5, 5, 5, 5, 5, 5, 5, 5],
            TrendShape::Reduction => [7, 6, 5, 4, 3, 2, 2, 1],
            TrendShape::Step => [1, 1, 3, 3, 5, 5, 7, 7],
        }
    }
}

/// One KPI card on the scorecard.
#[derive(Debug, Clone)]
pub struct KpiCard {
    pub title: &'static str,
    pub desc: &'static str,
    pub formula: &'static str,
    pub target: &'static str,
    pub current: &'static str,
    pub trend: TrendShape,
}

/// The full scorecard, perspectives in display order.
pub fn scorecard() -> Vec<(Perspective, Vec<KpiCard>)> {
    vec![
        (
            Perspective::Financial,
            vec![
                KpiCard {
                    title: "Project ROI",
                    desc: "Maximize return on the investment",
                    formula: "(benefits - total cost) / total cost * 100",
                    target: "> 15% (annual)",
                    current: "18.5%",
                    trend: TrendShape::Growth,
                },
                KpiCard {
                    title: "Cost Avoidance",
                    desc: "Fewer unscheduled failures",
                    formula: "sum(downtime hrs x hourly value) + maint. delta",
                    target: "> M$ 11.270 (monthly)",
                    current: "M$ 14.500",
                    trend: TrendShape::StableHigh,
                },
            ],
        ),
        (
            Perspective::Customer,
            vec![
                KpiCard {
                    title: "IoT Network Availability",
                    desc: "Guarantee data quality",
                    formula: "(uptime / total time) * 100",
                    target: "> 99% (daily)",
                    current: "99.8%",
                    trend: TrendShape::Consistent,
                },
                KpiCard {
                    title: "Alert Lead Time",
                    desc: "Safety in real time",
                    formula: "t(action) - t(alert)",
                    target: "< 10 min",
                    current: "4.2 min",
                    trend: TrendShape::Reduction,
                },
            ],
        ),
        (
            Perspective::Process,
            vec![
                KpiCard {
                    title: "Predictive Maintenance Ratio",
                    desc: "Grow the CBM strategy",
                    formula: "(predictive WO / corrective WO) * 100",
                    target: "+30% increase",
                    current: "+45%",
                    trend: TrendShape::Growth,
                },
                KpiCard {
                    title: "Alarm Precision",
                    desc: "Reduce operational noise",
                    formula: "(real alerts / total alerts) * 100",
                    target: "> 85%",
                    current: "92%",
                    trend: TrendShape::Growth,
                },
            ],
        ),
        (
            Perspective::Learning,
            vec![
                KpiCard {
                    title: "Training Coverage",
                    desc: "Strengthen digital capabilities",
                    formula: "(certified staff / headcount) * 100",
                    target: "> 80%",
                    current: "85%",
                    trend: TrendShape::Step,
                },
                KpiCard {
                    title: "Adoption Level",
                    desc: "Ensure the system is used",
                    formula: "(active users / total users) * 100",
                    target: "> 75%",
                    current: "78%",
                    trend: TrendShape::Growth,
                },
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scorecard_shape() {
        let card = scorecard();
        assert_eq!(card.len(), 4);
        for (_, kpis) in &card {
            assert_eq!(kpis.len(), 2);
        }
        assert_eq!(card[0].0, Perspective::Financial);
        assert_eq!(card[3].0, Perspective::Learning);
    }

    #[test]
    fn test_trend_patterns_fit_sparkline_levels() {
        for shape in [
            TrendShape::Growth,
            TrendShape::StableHigh,
            TrendShape::Consistent,
            TrendShape::Reduction,
            TrendShape::Step,
        ] {
            assert!(shape.pattern().iter().all(|&level| level <= 7));
        }
    }
}
