//! Services: one struct per area, each operation a single query or one transaction.

mod accounts;
pub(crate) mod ledger;
mod reports;
mod stalls;
pub mod validation;

pub use accounts::{
    AccountService, AdminProfile, CollectorProfile, DashboardStall, DashboardVendor, LedgerEntry, VendorDashboard,
    VendorProfile,
};
pub use ledger::{extend_lease, LedgerService, RentPayment, WalletBalance};
pub use reports::{MarketInsights, MarketSummary, OverduePayment, ReportService, UpcomingRenewal};
pub use stalls::{StallListing, StallLookup, StallService};
