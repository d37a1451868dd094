use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Earliest delivery slot, minutes after midnight (11:00).
pub const DELIVERY_WINDOW_START_MIN: u32 = 11 * 60;
/// Latest delivery slot, minutes after midnight (20:00).
pub const DELIVERY_WINDOW_END_MIN: u32 = 20 * 60;

/// Данные доставки, которые покупатель заполняет при оформлении заказа
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInfo {
    /// "YYYY-MM-DD"
    #[serde(default)]
    pub delivery_date: String,
    /// "HH:MM"
    #[serde(default)]
    pub delivery_time: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub recipient_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub payment_method: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryValidationError {
    #[error("Delivery date is required")]
    DateRequired,

    #[error("Invalid delivery date: {0}")]
    InvalidDate(String),

    #[error("Please select a date at least 24 hours from now")]
    DateTooSoon,

    #[error("Delivery time is required")]
    TimeRequired,

    #[error("Invalid delivery time: {0}")]
    InvalidTime(String),

    #[error("Delivery time must be between 11:00 AM and 8:00 PM")]
    TimeOutsideWindow,

    #[error("Delivery address is required")]
    AddressRequired,

    #[error("Recipient name is required")]
    RecipientNameRequired,

    #[error("Recipient phone is required")]
    RecipientPhoneRequired,
}

impl DeliveryValidationError {
    /// Name of the checkout form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::DateRequired | Self::InvalidDate(_) | Self::DateTooSoon => "deliveryDate",
            Self::TimeRequired | Self::InvalidTime(_) | Self::TimeOutsideWindow => "deliveryTime",
            Self::AddressRequired => "address",
            Self::RecipientNameRequired => "recipientName",
            Self::RecipientPhoneRequired => "recipientPhone",
        }
    }
}

/// First day a delivery can be booked for when ordering on `today`.
pub fn earliest_delivery_date(today: NaiveDate) -> Option<NaiveDate> {
    today.succ_opt()
}

/// Delivery must be booked at least one calendar day ahead.
pub fn validate_delivery_date(date: &str, today: NaiveDate) -> Result<NaiveDate, DeliveryValidationError> {
    let date = date.trim();
    if date.is_empty() {
        return Err(DeliveryValidationError::DateRequired);
    }

    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| DeliveryValidationError::InvalidDate(date.to_string()))?;

    match earliest_delivery_date(today) {
        Some(min) if parsed >= min => Ok(parsed),
        _ => Err(DeliveryValidationError::DateTooSoon),
    }
}

/// Delivery time must fall inside 11:00..=20:00. Seconds are ignored.
pub fn validate_delivery_time(time: &str) -> Result<NaiveTime, DeliveryValidationError> {
    let time = time.trim();
    if time.is_empty() {
        return Err(DeliveryValidationError::TimeRequired);
    }

    let parsed = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .map_err(|_| DeliveryValidationError::InvalidTime(time.to_string()))?;

    let minutes = parsed.hour() * 60 + parsed.minute();
    if !(DELIVERY_WINDOW_START_MIN..=DELIVERY_WINDOW_END_MIN).contains(&minutes) {
        return Err(DeliveryValidationError::TimeOutsideWindow);
    }

    Ok(parsed)
}

/// Validate the whole checkout form, collecting every problem found.
pub fn validate_delivery(
    info: &DeliveryInfo,
    today: NaiveDate,
) -> Result<(), Vec<DeliveryValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = validate_delivery_date(&info.delivery_date, today) {
        errors.push(e);
    }
    if let Err(e) = validate_delivery_time(&info.delivery_time) {
        errors.push(e);
    }
    if info.address.trim().is_empty() {
        errors.push(DeliveryValidationError::AddressRequired);
    }
    if info.recipient_name.trim().is_empty() {
        errors.push(DeliveryValidationError::RecipientNameRequired);
    }
    if info.recipient_phone.trim().is_empty() {
        errors.push(DeliveryValidationError::RecipientPhoneRequired);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
