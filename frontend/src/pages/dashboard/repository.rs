use chrono::NaiveDate;
use futures::future::join_all;
use std::rc::Rc;

use super::utils::{monthly_scaffold, staff_rows, sum_payments, DashboardReport};
use crate::api::{ApiClient, ApiError, EmployeeDaySummary};

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Roster, today's payments and the monthly grouping load concurrently;
    /// per-employee summaries follow the roster, concurrently across staff.
    /// A failed summary counts as zero for that employee.
    pub async fn fetch_report(&self, today: NaiveDate, year: i32) -> Result<DashboardReport, ApiError> {
        let (roster, payments, grouped) = futures::join!(
            self.client.get_employees(),
            self.client.get_payments_for_date(today),
            self.client.get_monthly_revenue(),
        );
        let roster = roster?;
        let payments = payments?;
        let grouped = grouped?;

        let summaries = join_all(roster.iter().map(|employee| async move {
            match self.client.get_employee_day_summary(&employee.id, today).await {
                Ok(summary) => summary,
                Err(err) => {
                    log::warn!("summary for {} unavailable: {}", employee.id, err);
                    EmployeeDaySummary::default()
                }
            }
        }))
        .await;

        Ok(DashboardReport {
            today_revenue: sum_payments(&payments),
            today_appointments: payments.len(),
            staff_count: roster.len(),
            staff: staff_rows(&roster, summaries),
            monthly: monthly_scaffold(&grouped, year),
        })
    }
}
