//! Record models for the three registry list endpoints.
//!
//! Wire fields are snake_case, matching the `{count, results}` endpoints the
//! backend serves. All three types are summaries: list rows, not full
//! documents.

use epdex_core::ListRecord;
use serde::{Deserialize, Serialize};

/// Verification status of a declaration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpdStatus {
    /// Data entry incomplete.
    Draft,
    /// Submitted, awaiting verification.
    Pending,
    /// Independently verified.
    Verified,
}

impl EpdStatus {
    /// Lowercase wire/filter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Verified => "verified",
        }
    }
}

impl std::fmt::Display for EpdStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the declaration registry list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpdSummary {
    /// Registry identifier.
    pub id: String,
    /// Declared product name.
    pub name: String,
    /// Product classification (e.g. "cement", "steel").
    pub classification: String,
    /// Reference year of the declaration.
    pub year: u16,
    /// Verification status.
    pub status: EpdStatus,
    /// Owning account.
    pub owner: String,
    /// Declared unit, when published (e.g. "1 kg", "1 m2").
    #[serde(default)]
    pub declared_unit: Option<String>,
    /// Headline global-warming-potential figure in kg CO2e, when published.
    #[serde(default)]
    pub gwp_total: Option<f64>,
}

impl ListRecord for EpdSummary {
    fn record_id(&self) -> &str {
        &self.id
    }
}

/// One row of a product portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Portfolio identifier.
    pub id: String,
    /// Product name.
    pub name: String,
    /// Industry sector.
    pub industry: String,
    /// Product classification.
    pub classification: String,
    /// Portfolio image, when uploaded.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Number of declarations attached to this product.
    #[serde(default)]
    pub epd_count: u32,
}

impl ListRecord for ProductSummary {
    fn record_id(&self) -> &str {
        &self.id
    }
}

/// One row of the company user administration list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyUser {
    /// Account identifier.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Company role (e.g. "admin", "member").
    pub role: String,
    /// Whether the account may sign in.
    #[serde(default)]
    pub is_active: bool,
}

impl ListRecord for CompanyUser {
    fn record_id(&self) -> &str {
        &self.id
    }
}
