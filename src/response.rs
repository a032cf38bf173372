//! Response bodies shared by handlers.

use crate::auth::AdminClaims;
use crate::service::{AdminProfile, CollectorProfile, VendorProfile};
use axum::{http::StatusCode, Json};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize)]
pub struct VendorLogin {
    pub msg: &'static str,
    pub vendor: VendorProfile,
}

#[derive(Serialize)]
pub struct CollectorLogin {
    pub msg: &'static str,
    pub collector: CollectorProfile,
}

#[derive(Serialize)]
pub struct AdminLogin {
    pub token: String,
    pub admin: AdminProfile,
}

#[derive(Serialize)]
pub struct RentPaid {
    pub msg: &'static str,
    pub lease_end: NaiveDate,
}

#[derive(Serialize)]
pub struct AdminIdentity {
    pub id: i32,
    pub name: String,
}

impl From<AdminClaims> for AdminIdentity {
    fn from(c: AdminClaims) -> Self {
        AdminIdentity { id: c.id, name: c.name }
    }
}

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const PAYMENT_SUCCESS: &str = "Payment successful!";

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}
