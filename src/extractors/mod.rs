//! Request extractors with rejections mapped into `AppError`.

pub mod admin;
pub mod json;

pub use admin::AdminSession;
pub use json::ApiJson;
