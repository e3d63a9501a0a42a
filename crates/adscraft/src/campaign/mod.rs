//! Campaign form intake and the simulated performance report derived from it.

mod calculator;
pub mod domain;
mod form;
mod market;
pub mod parse;
pub mod report;
mod simulated;

pub use calculator::{compute, BusinessMetrics, ReportCalculator};
pub use domain::{CampaignField, CampaignInput, CampaignObjective, FieldError, TargetGender};
pub use form::{CampaignForm, FormError};
pub use market::{market_size, DEFAULT_MARKET_SIZE};
pub use report::views::AnalysisReport;
