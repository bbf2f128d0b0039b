//! Dashboard records, their grid columns and status badges
//!
//! Statuses and payment methods are stored as short keys (`paid`, `cash`).
//! Persian labels only appear through the column formatters and badges.

use crate::grid::{CellFormatter, CellValue, Column, GridField, GridRecord};
use crate::utils::{format_amount, format_date, to_persian_digits, usage_percent};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};
use validator::Validate;

/// Text shown for an absent value
pub const EMPTY_CELL: &str = "-";

/// Visual tone of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    /// Green
    Success,
    /// Amber
    Warning,
    /// Red
    Danger,
    /// Grey
    Neutral,
}

/// Label and tone for a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Persian label
    pub label: &'static str,
    /// Tone
    pub tone: BadgeTone,
}

/// Records that render a status badge
pub trait Badged {
    /// Badge for the record's current status
    fn badge(&self) -> Badge;
}

/// Payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Settled
    Paid,
    /// Awaiting settlement
    Pending,
    /// Rejected by the gateway or cancelled
    Failed,
    /// Returned to the customer
    Refunded,
}

impl PaymentStatus {
    /// Stored key, as in the seed file
    pub const fn key(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }

    /// Badge shown for this status
    pub const fn badge(self) -> Badge {
        match self {
            Self::Paid => Badge {
                label: "پرداخت شده",
                tone: BadgeTone::Success,
            },
            Self::Pending => Badge {
                label: "در انتظار",
                tone: BadgeTone::Warning,
            },
            Self::Failed => Badge {
                label: "ناموفق",
                tone: BadgeTone::Danger,
            },
            Self::Refunded => Badge {
                label: "بازگشت داده شده",
                tone: BadgeTone::Neutral,
            },
        }
    }
}

/// Subscription status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Running
    Active,
    /// Running, ends soon
    Expiring,
    /// Ended
    Expired,
    /// Paused by an operator
    Suspended,
}

impl SubscriptionStatus {
    /// Stored key, as in the seed file
    pub const fn key(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expiring => "expiring",
            Self::Expired => "expired",
            Self::Suspended => "suspended",
        }
    }

    /// Badge shown for this status
    pub const fn badge(self) -> Badge {
        match self {
            Self::Active => Badge {
                label: "فعال",
                tone: BadgeTone::Success,
            },
            Self::Expiring => Badge {
                label: "رو به اتمام",
                tone: BadgeTone::Warning,
            },
            Self::Expired => Badge {
                label: "منقضی شده",
                tone: BadgeTone::Danger,
            },
            Self::Suspended => Badge {
                label: "معلق",
                tone: BadgeTone::Neutral,
            },
        }
    }
}

/// Known payment method keys and their labels
pub const PAYMENT_METHODS: &[(&str, &str)] = &[
    ("cash", "نقدی"),
    ("card", "کارت به کارت"),
    ("pos", "کارتخوان"),
    ("online", "درگاه اینترنتی"),
    ("wallet", "کیف پول"),
];

/// Label for a payment method key
///
/// Unknown keys are shown as is.
pub fn payment_method_label(key: &str) -> &str {
    PAYMENT_METHODS
        .iter()
        .find(|(known, _)| *known == key)
        .map_or_else(
            || {
                warn!(method = key, "unknown payment method");
                key
            },
            |&(_, label)| label,
        )
}

/// A payment received at the gamenet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Payment {
    /// Identifier
    pub id: u64,

    /// Paying customer
    #[validate(length(min = 1, max = 100))]
    pub customer_name: String,

    /// Amount in toman
    #[validate(range(min = 0))]
    pub amount: i64,

    /// Payment method key, see [`PAYMENT_METHODS`]
    #[validate(length(min = 1, max = 32))]
    pub method: String,

    /// Settlement status
    pub status: PaymentStatus,

    /// Settlement date; absent while pending
    pub paid_on: Option<NaiveDate>,

    /// Free-form note
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

/// Fields of [`Payment`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentField {
    /// `id`
    Id,
    /// `customer_name`
    CustomerName,
    /// `amount`
    Amount,
    /// `method`
    Method,
    /// `status`
    Status,
    /// `paid_on`
    PaidOn,
    /// `description`
    Description,
}

impl GridField for PaymentField {
    fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::CustomerName => "customer_name",
            Self::Amount => "amount",
            Self::Method => "method",
            Self::Status => "status",
            Self::PaidOn => "paid_on",
            Self::Description => "description",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Id,
            Self::CustomerName,
            Self::Amount,
            Self::Method,
            Self::Status,
            Self::PaidOn,
            Self::Description,
        ]
    }
}

impl GridRecord for Payment {
    type Field = PaymentField;

    fn cell(&self, field: PaymentField) -> Option<CellValue<'_>> {
        match field {
            PaymentField::Id => i64::try_from(self.id).ok().map(CellValue::Number),
            PaymentField::CustomerName => Some(CellValue::text(&self.customer_name)),
            PaymentField::Amount => Some(CellValue::Number(self.amount)),
            PaymentField::Method => Some(CellValue::text(&self.method)),
            PaymentField::Status => Some(CellValue::text(self.status.key())),
            PaymentField::PaidOn => self.paid_on.map(CellValue::Date),
            PaymentField::Description => self.description.as_deref().map(CellValue::text),
        }
    }
}

impl Badged for Payment {
    fn badge(&self) -> Badge {
        self.status.badge()
    }
}

impl Payment {
    /// Columns of the payments table
    pub fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new(PaymentField::Id, "شناسه").with_formatter(NumberFormatter),
            Column::new(PaymentField::CustomerName, "مشتری"),
            Column::new(PaymentField::Amount, "مبلغ").with_formatter(AmountFormatter),
            Column::new(PaymentField::Method, "روش پرداخت")
                .unsortable()
                .with_formatter(MethodFormatter),
            Column::new(PaymentField::Status, "وضعیت").with_formatter(StatusFormatter),
            Column::new(PaymentField::PaidOn, "تاریخ پرداخت").with_formatter(DateFormatter),
            Column::new(PaymentField::Description, "توضیحات")
                .unsortable()
                .with_formatter(PlainFormatter),
        ]
    }
}

/// A prepaid gaming-hours subscription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Subscription {
    /// Identifier
    pub id: u64,

    /// Subscriber
    #[validate(length(min = 1, max = 100))]
    pub customer_name: String,

    /// Plan name
    #[validate(length(min = 1, max = 100))]
    pub plan: String,

    /// Lifecycle status
    pub status: SubscriptionStatus,

    /// First day of the subscription
    pub started_on: NaiveDate,

    /// Last day; absent for open-ended plans
    pub expires_on: Option<NaiveDate>,

    /// Hours included in the plan
    #[validate(range(min = 0))]
    pub hours_total: i64,

    /// Hours consumed so far
    #[validate(range(min = 0))]
    pub hours_used: i64,
}

/// Fields of [`Subscription`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionField {
    /// `id`
    Id,
    /// `customer_name`
    CustomerName,
    /// `plan`
    Plan,
    /// `status`
    Status,
    /// `started_on`
    StartedOn,
    /// `expires_on`
    ExpiresOn,
    /// `hours_total`
    HoursTotal,
    /// `hours_used`
    HoursUsed,
}

impl GridField for SubscriptionField {
    fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::CustomerName => "customer_name",
            Self::Plan => "plan",
            Self::Status => "status",
            Self::StartedOn => "started_on",
            Self::ExpiresOn => "expires_on",
            Self::HoursTotal => "hours_total",
            Self::HoursUsed => "hours_used",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Id,
            Self::CustomerName,
            Self::Plan,
            Self::Status,
            Self::StartedOn,
            Self::ExpiresOn,
            Self::HoursTotal,
            Self::HoursUsed,
        ]
    }
}

impl GridRecord for Subscription {
    type Field = SubscriptionField;

    fn cell(&self, field: SubscriptionField) -> Option<CellValue<'_>> {
        match field {
            SubscriptionField::Id => i64::try_from(self.id).ok().map(CellValue::Number),
            SubscriptionField::CustomerName => Some(CellValue::text(&self.customer_name)),
            SubscriptionField::Plan => Some(CellValue::text(&self.plan)),
            SubscriptionField::Status => Some(CellValue::text(self.status.key())),
            SubscriptionField::StartedOn => Some(CellValue::Date(self.started_on)),
            SubscriptionField::ExpiresOn => self.expires_on.map(CellValue::Date),
            SubscriptionField::HoursTotal => Some(CellValue::Number(self.hours_total)),
            SubscriptionField::HoursUsed => Some(CellValue::Number(self.hours_used)),
        }
    }
}

impl Badged for Subscription {
    fn badge(&self) -> Badge {
        self.status.badge()
    }
}

impl Subscription {
    /// Columns of the subscriptions table
    pub fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new(SubscriptionField::Id, "شناسه").with_formatter(NumberFormatter),
            Column::new(SubscriptionField::CustomerName, "مشتری"),
            Column::new(SubscriptionField::Plan, "طرح"),
            Column::new(SubscriptionField::Status, "وضعیت").with_formatter(StatusFormatter),
            Column::new(SubscriptionField::StartedOn, "شروع").with_formatter(DateFormatter),
            Column::new(SubscriptionField::ExpiresOn, "پایان").with_formatter(DateFormatter),
            Column::new(SubscriptionField::HoursTotal, "ساعات").with_formatter(NumberFormatter),
            Column::new(SubscriptionField::HoursUsed, "مصرف").with_formatter(UsageFormatter),
        ]
    }

    /// Used share of the plan's hours, `0..=100`
    pub fn usage_percent(&self) -> u8 {
        usage_percent(self.hours_used, self.hours_total)
    }
}

/// Text as is, [`EMPTY_CELL`] when absent
#[derive(Debug, Clone, Copy)]
pub struct PlainFormatter;

impl<R> CellFormatter<R> for PlainFormatter {
    fn format(&self, value: Option<&CellValue<'_>>, _record: &R) -> String {
        value.map_or_else(|| EMPTY_CELL.to_string(), ToString::to_string)
    }
}

/// Numbers in Persian digits
#[derive(Debug, Clone, Copy)]
pub struct NumberFormatter;

impl<R> CellFormatter<R> for NumberFormatter {
    fn format(&self, value: Option<&CellValue<'_>>, _record: &R) -> String {
        value.map_or_else(
            || EMPTY_CELL.to_string(),
            |value| to_persian_digits(&value.to_text()),
        )
    }
}

/// Toman amounts with grouped Persian digits
#[derive(Debug, Clone, Copy)]
pub struct AmountFormatter;

impl<R> CellFormatter<R> for AmountFormatter {
    fn format(&self, value: Option<&CellValue<'_>>, _record: &R) -> String {
        match value {
            Some(CellValue::Number(amount)) => format_amount(*amount),
            Some(other) => other.to_string(),
            None => EMPTY_CELL.to_string(),
        }
    }
}

/// Dates as `YYYY/MM/DD` in Persian digits
#[derive(Debug, Clone, Copy)]
pub struct DateFormatter;

impl<R> CellFormatter<R> for DateFormatter {
    fn format(&self, value: Option<&CellValue<'_>>, _record: &R) -> String {
        match value {
            Some(CellValue::Date(date)) => format_date(*date),
            Some(other) => other.to_string(),
            None => EMPTY_CELL.to_string(),
        }
    }
}

/// Payment method label from [`PAYMENT_METHODS`]
#[derive(Debug, Clone, Copy)]
pub struct MethodFormatter;

impl<R> CellFormatter<R> for MethodFormatter {
    fn format(&self, value: Option<&CellValue<'_>>, _record: &R) -> String {
        value.map_or_else(
            || EMPTY_CELL.to_string(),
            |value| payment_method_label(&value.to_text()).to_string(),
        )
    }
}

/// Persian badge label of the record's status
#[derive(Debug, Clone, Copy)]
pub struct StatusFormatter;

impl<R: Badged> CellFormatter<R> for StatusFormatter {
    fn format(&self, _value: Option<&CellValue<'_>>, record: &R) -> String {
        record.badge().label.to_string()
    }
}

/// Used hours against the plan total, e.g. `۱۲ از ۲۰ ساعت (۶۰٪)`
#[derive(Debug, Clone, Copy)]
pub struct UsageFormatter;

impl CellFormatter<Subscription> for UsageFormatter {
    fn format(&self, _value: Option<&CellValue<'_>>, record: &Subscription) -> String {
        to_persian_digits(&format!(
            "{} از {} ساعت ({}٪)",
            record.hours_used,
            record.hours_total,
            record.usage_percent()
        ))
    }
}

/// All records the dashboard serves
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Payments table
    #[serde(default)]
    pub payments: Vec<Payment>,
    /// Subscriptions table
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
}

impl Dataset {
    /// Parse and validate a dataset from JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a record fails validation.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let dataset: Self = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load a dataset from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let dataset = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            payments = dataset.payments.len(),
            subscriptions = dataset.subscriptions.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Validate every record
    ///
    /// # Errors
    ///
    /// Returns the first failing record's validation error.
    pub fn validate(&self) -> crate::Result<()> {
        for payment in &self.payments {
            payment.validate()?;
        }
        for subscription in &self.subscriptions {
            subscription.validate()?;
            if subscription.expires_on.is_some_and(|end| end < subscription.started_on) {
                return Err(crate::Error::validation(
                    "expires_on",
                    format!("subscription {} ends before it starts", subscription.id),
                ));
            }
        }
        Ok(())
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Error code
    pub code: String,

    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            details: None,
        }
    }

    /// Create an error response with details
    pub fn with_details(
        error: impl Into<String>,
        code: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            details: Some(details),
        }
    }
}
