use chrono::NaiveDate;

use super::{
    client::ApiClient,
    types::{ApiError, EmployeeDaySummary, ListEnvelope, MonthlyRevenue, Payment},
};
use crate::utils::time::format_date;

impl ApiClient {
    pub async fn get_payments_for_date(&self, date: NaiveDate) -> Result<Vec<Payment>, ApiError> {
        self.get_json::<ListEnvelope<Payment>>(
            &format!("/payments/date/{}", format_date(date)),
            "Failed to load today's payments",
        )
        .await
        .map(ListEnvelope::into_items)
    }

    pub async fn get_employee_day_summary(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> Result<EmployeeDaySummary, ApiError> {
        self.get_json(
            &format!("/payments/employee/{}/{}", employee_id, format_date(date)),
            "Failed to load staff revenue",
        )
        .await
    }

    pub async fn get_monthly_revenue(&self) -> Result<Vec<MonthlyRevenue>, ApiError> {
        self.get_json::<ListEnvelope<MonthlyRevenue>>(
            "/payments/grouped",
            "Failed to load monthly revenue",
        )
        .await
        .map(ListEnvelope::into_items)
    }
}
