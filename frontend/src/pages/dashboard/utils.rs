use serde::{Deserialize, Serialize};

use crate::api::{Employee, EmployeeDaySummary, MonthlyRevenue, Payment};

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBar {
    pub month: u32,
    pub label: String,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffDay {
    pub employee_id: String,
    pub name: String,
    pub total: i64,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub today_revenue: i64,
    pub today_appointments: usize,
    pub staff_count: usize,
    pub staff: Vec<StaffDay>,
    pub monthly: Vec<MonthBar>,
}

pub fn sum_payments(payments: &[Payment]) -> i64 {
    payments.iter().map(|payment| payment.amount).sum()
}

/// Twelve bars for `year`; months without a grouped row stay at zero and rows
/// tagged with another year are ignored.
pub fn monthly_scaffold(rows: &[MonthlyRevenue], year: i32) -> Vec<MonthBar> {
    let mut bars: Vec<MonthBar> = MONTH_LABELS
        .iter()
        .enumerate()
        .map(|(index, label)| MonthBar {
            month: index as u32 + 1,
            label: (*label).to_string(),
            total: 0,
        })
        .collect();
    for row in rows {
        if row.key.year().is_some_and(|y| y != year) {
            continue;
        }
        let month = row.key.month();
        if let Some(bar) = bars.get_mut(month.wrapping_sub(1) as usize) {
            bar.total += row.total;
        }
    }
    bars
}

pub fn staff_rows(roster: &[Employee], summaries: Vec<EmployeeDaySummary>) -> Vec<StaffDay> {
    roster
        .iter()
        .zip(summaries)
        .map(|(employee, summary)| StaffDay {
            employee_id: employee.id.clone(),
            name: employee.name.clone(),
            total: summary.total_amount,
            count: summary.count,
        })
        .collect()
}

/// Bar height as a percentage of the tallest bar.
pub fn bar_percent(total: i64, max: i64) -> u32 {
    if max <= 0 || total <= 0 {
        return 0;
    }
    ((total as f64 / max as f64) * 100.0).round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api::MonthKey, test_support::helpers::employee};

    fn row(key: MonthKey, total: i64) -> MonthlyRevenue {
        MonthlyRevenue { key, total }
    }

    #[test]
    fn scaffold_fills_missing_months_with_zero() {
        let bars = monthly_scaffold(
            &[
                row(MonthKey::Month(3), 1200),
                row(MonthKey::Object { month: 5, year: Some(2025) }, 800),
            ],
            2025,
        );
        assert_eq!(bars.len(), 12);
        assert_eq!(bars[2].total, 1200);
        assert_eq!(bars[4].total, 800);
        assert_eq!(bars.iter().filter(|b| b.total == 0).count(), 10);
        assert_eq!(bars[0].label, "Jan");
        assert_eq!(bars[11].month, 12);
    }

    #[test]
    fn scaffold_skips_other_years_and_bad_months() {
        let bars = monthly_scaffold(
            &[
                row(MonthKey::Object { month: 1, year: Some(2024) }, 999),
                row(MonthKey::Month(0), 50),
                row(MonthKey::Month(13), 50),
                row(MonthKey::Month(1), 10),
                row(MonthKey::Object { month: 1, year: None }, 5),
            ],
            2025,
        );
        assert_eq!(bars[0].total, 15);
        assert_eq!(bars.iter().map(|b| b.total).sum::<i64>(), 15);
    }

    #[test]
    fn staff_rows_pair_roster_with_summaries() {
        let roster = vec![employee("e1", "Asha"), employee("e2", "Ravi")];
        let rows = staff_rows(
            &roster,
            vec![
                EmployeeDaySummary { total_amount: 1500, count: 2 },
                EmployeeDaySummary::default(),
            ],
        );
        assert_eq!(rows[0].name, "Asha");
        assert_eq!(rows[0].total, 1500);
        assert_eq!(rows[1].count, 0);
    }

    #[test]
    fn bar_percent_scales_to_maximum() {
        assert_eq!(bar_percent(50, 200), 25);
        assert_eq!(bar_percent(200, 200), 100);
        assert_eq!(bar_percent(10, 0), 0);
        assert_eq!(bar_percent(0, 100), 0);
    }
}
