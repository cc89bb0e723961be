//! Tool catalog records.
//!
//! Tools are seeded in bulk, read-mostly, and replaced wholesale on update.
//! The `name` field is the identity key - there is no separate id.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// Pricing flags for a tool.
///
/// The flags are not mutually exclusive: a tool with a usable free plan and
/// paid upgrades carries both `free` and `freemium`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    /// Has a usable free plan.
    pub free: bool,
    /// Free tier with paid upgrades.
    pub freemium: bool,
    /// No free tier at all.
    pub paid_only: bool,
    /// Entry price of the cheapest paid plan, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_price: Option<Decimal>,
    /// ISO 4217 currency code for `starting_price`.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Pricing {
    /// Whether the tool can be used without paying (free or freemium plan).
    #[must_use]
    pub const fn has_free_tier(&self) -> bool {
        self.free || self.freemium
    }

    /// Whether the tool has a paid plan (paid-only or freemium upgrade).
    #[must_use]
    pub const fn has_paid_tier(&self) -> bool {
        self.paid_only || self.freemium
    }
}

/// A recommendable tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Unique display name, used as the identity key.
    pub name: String,
    /// The single category this tool belongs to.
    pub category: Category,
    /// Short human-readable description.
    pub description: String,
    /// Product URL.
    pub url: String,
    /// Pricing flags and entry price.
    pub pricing: Pricing,
    /// Ordered capability phrases the tool is best at.
    pub best_for: Vec<String>,
    /// Static quality prior, roughly 0-10.
    pub strength: f64,
    /// Notable feature phrases.
    #[serde(default)]
    pub features: Vec<String>,
    /// Date string of the last catalog refresh for this record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    /// Deprecated tools are kept in the catalog but never assigned to
    /// workflow steps.
    #[serde(default)]
    pub deprecated: bool,
}
