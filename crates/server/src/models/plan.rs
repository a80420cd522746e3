//! Pricing plan domain type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use makeready_core::PlanId;

/// A pricing plan from the static catalog.
///
/// Plans are seeded once at process start and never mutated through the
/// public contract; there is no billing logic behind them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Catalog id.
    pub id: PlanId,
    /// Plan name.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// Monthly price in USD.
    pub monthly_price: Decimal,
    /// Included features, in display order.
    pub features: Vec<String>,
}
