use chrono::NaiveDate;
use leptos::{IntoView, View};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::utils::time::parse_api_date;

mod lenient {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawNumber {
        Int(i64),
        Float(f64),
        Text(String),
    }

    fn to_amount(raw: Option<RawNumber>) -> i64 {
        match raw {
            Some(RawNumber::Int(value)) => value,
            Some(RawNumber::Float(value)) if value.is_finite() => value.round() as i64,
            Some(RawNumber::Text(text)) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| v.round() as i64)
                .unwrap_or_default(),
            _ => 0,
        }
    }

    /// Whole currency units from a number, a numeric string, or `null` (zero).
    pub fn amount<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
        Option::<RawNumber>::deserialize(d).map(to_amount)
    }

    pub fn opt_amount<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        Ok(Option::<RawNumber>::deserialize(d)?.map(|raw| to_amount(Some(raw))))
    }

    /// Durations arrive as numbers or free text; empty text means none.
    pub fn opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Option::<RawNumber>::deserialize(d)? {
            Some(RawNumber::Int(value)) => Some(value.to_string()),
            Some(RawNumber::Float(value)) => Some(value.to_string()),
            Some(RawNumber::Text(text)) if !text.trim().is_empty() => Some(text),
            _ => None,
        })
    }

    pub fn date<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        parse_api_date(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{}'", raw)))
    }

    pub fn opt_date<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        Ok(Option::<String>::deserialize(d)?
            .as_deref()
            .and_then(parse_api_date))
    }

    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        Ok(Option::<bool>::deserialize(d)?.unwrap_or_default())
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Receptionist,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Receptionist => "receptionist",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Receptionist => "Receptionist",
        }
    }

    pub fn parse(raw: &str) -> Option<Role> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "receptionist" => Some(Role::Receptionist),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// A reference to another document: either a bare id or a populated `{ _id, name }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl<'de> Deserialize<'de> for EntityRef {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Id(String),
            Object {
                #[serde(rename = "_id", alias = "id")]
                id: String,
                #[serde(default)]
                name: Option<String>,
            },
        }
        Ok(match Raw::deserialize(d)? {
            Raw::Id(id) => EntityRef { id, name: None },
            Raw::Object { id, name } => EntityRef { id, name },
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Customer {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub note: Option<String>,
}

impl<'de> Deserialize<'de> for Customer {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Populated {
            #[serde(default, rename = "_id", alias = "id")]
            id: Option<String>,
            #[serde(default)]
            name: Option<String>,
            #[serde(default)]
            phone: Option<String>,
            #[serde(default)]
            email: Option<String>,
            #[serde(default)]
            gender: Option<String>,
            #[serde(default)]
            address: Option<String>,
            #[serde(default)]
            note: Option<String>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Id(String),
            Populated(Populated),
        }

        Ok(match Raw::deserialize(d)? {
            Raw::Id(id) => Customer {
                id: Some(id),
                ..Customer::default()
            },
            Raw::Populated(p) => Customer {
                id: p.id,
                name: p.name.unwrap_or_default(),
                phone: p.phone.unwrap_or_default(),
                email: p.email,
                gender: p.gender,
                address: p.address,
                note: p.note,
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubService {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub price: i64,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sub_services: Vec<SubService>,
}

impl Service {
    pub fn sub_service(&self, id: &str) -> Option<&SubService> {
        self.sub_services.iter().find(|sub| sub.id == id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Refunded,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [
        PaymentStatus::Pending,
        PaymentStatus::Completed,
        PaymentStatus::Refunded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Refunded => "Refunded",
        }
    }

    pub fn parse(raw: &str) -> Option<PaymentStatus> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

impl<'de> Deserialize<'de> for PaymentStatus {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw
            .as_deref()
            .and_then(PaymentStatus::parse)
            .unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentSource {
    #[serde(rename = "online")]
    Online,
    #[serde(rename = "walk-in", alias = "admin", alias = "walkin")]
    WalkIn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentService {
    #[serde(default)]
    pub service_id: Option<EntityRef>,
    #[serde(default)]
    pub sub_service_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub price: i64,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, rename = "customer_id", alias = "customer")]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub services: Vec<AppointmentService>,
    #[serde(default)]
    pub employee_id: Option<EntityRef>,
    #[serde(default, deserialize_with = "lenient::opt_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: i64,
    #[serde(default)]
    pub payment_mode: Option<String>,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub confirmation_status: bool,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub seen: bool,
    #[serde(default)]
    pub note: Option<String>,
}

impl Appointment {
    pub fn customer_name(&self) -> &str {
        self.customer.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }

    pub fn customer_phone(&self) -> &str {
        self.customer.as_ref().map(|c| c.phone.as_str()).unwrap_or("")
    }

    pub fn employee_name(&self) -> Option<&str> {
        self.employee_id.as_ref().and_then(|e| e.name.as_deref())
    }

    pub fn service_names(&self) -> String {
        self.services
            .iter()
            .filter_map(|line| line.service_id.as_ref().and_then(|s| s.name.as_deref()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn payment_mode(&self) -> Option<&str> {
        self.payment_mode.as_deref().filter(|mode| !mode.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLinePayload {
    pub service_id: String,
    pub sub_service_id: String,
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// Body of `POST /appointments` and `PUT /appointments/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentPayload {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub services: Vec<ServiceLinePayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    pub date: NaiveDate,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    pub source: AppointmentSource,
    pub confirmation_status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seen: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalPayload {
    pub confirmation_status: bool,
    pub seen: bool,
}

impl ApprovalPayload {
    pub fn approve() -> Self {
        Self {
            confirmation_status: true,
            seen: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_true")]
    pub status: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEmployee {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    pub status: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeStatusUpdate {
    pub status: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub employee_id: Option<EntityRef>,
    #[serde(deserialize_with = "lenient::date")]
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub leave: bool,
}

/// Body of `POST /attendance`: presence is sent as `leave = !present`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceMark {
    pub employee_id: String,
    pub date: NaiveDate,
    pub leave: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceUpdate {
    pub leave: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default, rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub appointment_id: Option<EntityRef>,
    #[serde(default)]
    pub employee_id: Option<EntityRef>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: i64,
    #[serde(default)]
    pub payment_mode: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_date")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDaySummary {
    #[serde(
        default,
        alias = "total",
        alias = "totalAmount",
        deserialize_with = "lenient::amount"
    )]
    pub total_amount: i64,
    #[serde(default, alias = "appointments", alias = "totalAppointments")]
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MonthKey {
    Month(u32),
    Object {
        month: u32,
        #[serde(default)]
        year: Option<i32>,
    },
}

impl MonthKey {
    pub fn month(&self) -> u32 {
        match self {
            MonthKey::Month(month) => *month,
            MonthKey::Object { month, .. } => *month,
        }
    }

    pub fn year(&self) -> Option<i32> {
        match self {
            MonthKey::Month(_) => None,
            MonthKey::Object { year, .. } => *year,
        }
    }
}

/// One row of `GET /payments/grouped`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    #[serde(rename = "_id", alias = "month")]
    pub key: MonthKey,
    #[serde(
        default,
        alias = "totalAmount",
        alias = "total_amount",
        alias = "revenue",
        deserialize_with = "lenient::amount"
    )]
    pub total: i64,
}

/// List endpoints answer either with a bare array or with an object wrapping it.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(
            alias = "appointments",
            alias = "employees",
            alias = "services",
            alias = "payments",
            alias = "records",
            alias = "data"
        )]
        items: Vec<T>,
    },
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) => items,
            ListEnvelope::Wrapped { items } => items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    /// Builds an error from a non-success response body, preferring the server's
    /// `message` (or `error`) text over `fallback`.
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        #[derive(Deserialize)]
        struct ServerMessage {
            #[serde(default)]
            message: Option<String>,
            #[serde(default)]
            error: Option<String>,
        }
        let parsed = serde_json::from_str::<ServerMessage>(body).ok();
        let text = parsed
            .and_then(|m| m.message.or(m.error))
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        let code = match status {
            401 => "UNAUTHORIZED".to_string(),
            403 => "FORBIDDEN".to_string(),
            404 => "NOT_FOUND".to_string(),
            400 | 422 => "VALIDATION_ERROR".to_string(),
            other => format!("HTTP_{}", other),
        };
        Self {
            error: text,
            code,
            details: None,
        }
    }
}
