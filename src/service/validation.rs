//! Request bodies and their validation into typed commands.

use crate::error::AppError;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Upper bound on a single rent extension.
pub const MAX_DAYS_TO_PAY: f64 = 3650.0;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayRentRequest {
    pub vendor_id: Option<i32>,
    pub stall_id: Option<i32>,
    pub amount: Option<Decimal>,
    pub days_to_pay: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUpRequest {
    pub vendor_id: Option<i32>,
    pub amount: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorLoginRequest {
    pub business_id: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectorLoginRequest {
    pub collector_id: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AdminLoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PayRent {
    pub vendor_id: i32,
    pub stall_id: i32,
    pub amount: Decimal,
    /// Whole days, rounded up from the request.
    pub days: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TopUp {
    pub vendor_id: i32,
    pub amount: Decimal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl PayRentRequest {
    pub fn validate(self) -> Result<PayRent, AppError> {
        let invalid = || AppError::Validation("Invalid data provided. All fields are required.".into());
        let vendor_id = positive_id(self.vendor_id).ok_or_else(invalid)?;
        let stall_id = positive_id(self.stall_id).ok_or_else(invalid)?;
        let amount = positive_amount(self.amount).ok_or_else(invalid)?;
        let days = self
            .days_to_pay
            .filter(|d| d.is_finite() && *d > 0.0)
            .ok_or_else(invalid)?;
        if days > MAX_DAYS_TO_PAY {
            return Err(AppError::Validation(format!(
                "daysToPay must be at most {}",
                MAX_DAYS_TO_PAY
            )));
        }
        Ok(PayRent {
            vendor_id,
            stall_id,
            amount,
            days: days.ceil() as u32,
        })
    }
}

impl TopUpRequest {
    pub fn validate(self) -> Result<TopUp, AppError> {
        let invalid = || AppError::Validation("Invalid data provided.".into());
        Ok(TopUp {
            vendor_id: positive_id(self.vendor_id).ok_or_else(invalid)?,
            amount: positive_amount(self.amount).ok_or_else(invalid)?,
        })
    }
}

impl VendorLoginRequest {
    pub fn validate(self) -> Result<Credentials, AppError> {
        credentials(self.business_id, self.password, "Please enter all fields")
    }
}

impl CollectorLoginRequest {
    pub fn validate(self) -> Result<Credentials, AppError> {
        credentials(self.collector_id, self.password, "Please enter all fields")
    }
}

impl AdminLoginRequest {
    pub fn validate(self) -> Result<Credentials, AppError> {
        credentials(self.username, self.password, "Please enter all fields.")
    }
}

/// Trimmed, non-empty query parameter or a validation error naming it.
pub fn required_param(value: Option<String>, message: &str) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(message.to_string()))
}

fn credentials(login: Option<String>, password: Option<String>, message: &str) -> Result<Credentials, AppError> {
    let login = login.map(|l| l.trim().to_string()).filter(|l| !l.is_empty());
    let password = password.filter(|p| !p.is_empty());
    match (login, password) {
        (Some(login), Some(password)) => Ok(Credentials { login, password }),
        _ => Err(AppError::Validation(message.to_string())),
    }
}

fn positive_id(id: Option<i32>) -> Option<i32> {
    id.filter(|id| *id > 0)
}

/// Amounts are stored with two decimals; anything that rounds to zero is rejected.
fn positive_amount(amount: Option<Decimal>) -> Option<Decimal> {
    amount
        .map(|a| a.round_dp(2))
        .filter(|a| a.is_sign_positive() && !a.is_zero())
}
