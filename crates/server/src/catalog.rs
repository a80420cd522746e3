//! Static pricing plan catalog.
//!
//! Seeded once at process start; immutable at runtime. No authorization is
//! required to read plans, and there is no billing logic behind them.

use rust_decimal::Decimal;

use makeready_core::PlanId;

use crate::models::Plan;

/// Read-only catalog of pricing plans.
#[derive(Debug, Clone)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    /// Build the catalog with the production seed data.
    #[must_use]
    pub fn seeded() -> Self {
        Self { plans: seed_plans() }
    }

    /// All plans in display order.
    #[must_use]
    pub fn get_all(&self) -> &[Plan] {
        &self.plans
    }

    /// Look up a plan by id.
    #[must_use]
    pub fn get_by_id(&self, id: &PlanId) -> Option<&Plan> {
        self.plans.iter().find(|plan| &plan.id == id)
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

fn seed_plans() -> Vec<Plan> {
    vec![
        Plan {
            id: PlanId::new("essential"),
            name: "Essential".to_string(),
            description: "Includes basic maintenance request management, photo uploads, \
                          and status tracking for up to 3 active listings."
                .to_string(),
            monthly_price: Decimal::from(99),
            features: vec![
                "Up to 3 active listings".to_string(),
                "Basic maintenance request management".to_string(),
                "Photo uploads".to_string(),
                "Status tracking".to_string(),
                "Up to 2 hours of repairs/touch-ups".to_string(),
                "Email support".to_string(),
                "48-hour response time".to_string(),
            ],
        },
        Plan {
            id: PlanId::new("pro"),
            name: "Pro".to_string(),
            description: "Includes all Essential features plus priority scheduling, \
                          unlimited active listings, and direct messaging with the admin \
                          team for faster response."
                .to_string(),
            monthly_price: Decimal::from(199),
            features: vec![
                "All Essential features".to_string(),
                "Unlimited active listings".to_string(),
                "Priority scheduling".to_string(),
                "Direct messaging with admin team".to_string(),
                "Up to 5 hours including painting and fixture installs".to_string(),
                "Faster response times".to_string(),
                "Phone & email support".to_string(),
                "24-hour response time".to_string(),
            ],
        },
        Plan {
            id: PlanId::new("concierge"),
            name: "Concierge".to_string(),
            description: "Includes all Pro features plus custom make-ready coordination, \
                          on-site visit scheduling, and 24/7 request support for high-end \
                          listings."
                .to_string(),
            monthly_price: Decimal::from(299),
            features: vec![
                "All Pro features".to_string(),
                "Custom make-ready coordination".to_string(),
                "On-site visit scheduling".to_string(),
                "24/7 request support".to_string(),
                "Up to 10 hours with full project coordination".to_string(),
                "Staging assistance".to_string(),
                "Dedicated account manager".to_string(),
                "Full photo & video documentation".to_string(),
                "Weekend & emergency service".to_string(),
            ],
        },
    ]
}
