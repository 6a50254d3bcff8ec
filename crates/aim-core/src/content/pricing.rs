//! Pricing tiers and the billing toggle

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BillingCycle {
    Monthly,
    #[default]
    Annual,
}

impl BillingCycle {
    pub fn toggle(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Annual,
            BillingCycle::Annual => BillingCycle::Monthly,
        }
    }

    pub fn is_annual(self) -> bool {
        self == BillingCycle::Annual
    }
}

/// Price as stored in content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Price {
    /// Dollars per month, depending on billing cycle
    Tiered { annual: u32, monthly: u32 },
    Custom,
}

impl Price {
    pub fn for_cycle(self, cycle: BillingCycle) -> DisplayPrice {
        match (self, cycle) {
            (Price::Tiered { annual, .. }, BillingCycle::Annual) => DisplayPrice::PerMonth(annual),
            (Price::Tiered { monthly, .. }, BillingCycle::Monthly) => DisplayPrice::PerMonth(monthly),
            (Price::Custom, _) => DisplayPrice::Custom,
        }
    }
}

/// Price as shown for the selected billing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPrice {
    PerMonth(u32),
    Custom,
}

impl fmt::Display for DisplayPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayPrice::PerMonth(dollars) => write!(f, "${}", dollars),
            DisplayPrice::Custom => write!(f, "Custom"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub features: Vec<String>,
    #[serde(default)]
    pub highlight: bool,
}

impl PricingPlan {
    pub fn display_price(&self, cycle: BillingCycle) -> DisplayPrice {
        self.price.for_cycle(cycle)
    }

    pub fn cta_label(&self) -> &'static str {
        match self.price {
            Price::Custom => "Contact Sales",
            Price::Tiered { .. } => "Get Started",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(price: Price) -> PricingPlan {
        PricingPlan {
            name: "Starter".to_string(),
            description: String::new(),
            price,
            features: Vec::new(),
            highlight: false,
        }
    }

    #[test]
    fn test_billing_defaults_to_annual() {
        assert!(BillingCycle::default().is_annual());
        assert_eq!(BillingCycle::Annual.toggle(), BillingCycle::Monthly);
        assert_eq!(BillingCycle::Monthly.toggle().toggle(), BillingCycle::Monthly);
    }

    #[test]
    fn test_tiered_price_follows_cycle() {
        let starter = plan(Price::Tiered { annual: 999, monthly: 1299 });
        assert_eq!(starter.display_price(BillingCycle::Annual), DisplayPrice::PerMonth(999));
        assert_eq!(starter.display_price(BillingCycle::Monthly), DisplayPrice::PerMonth(1299));
        assert_eq!(starter.display_price(BillingCycle::Monthly).to_string(), "$1299");
        assert_eq!(starter.cta_label(), "Get Started");
    }

    #[test]
    fn test_custom_price() {
        let enterprise = plan(Price::Custom);
        assert_eq!(enterprise.display_price(BillingCycle::Monthly), DisplayPrice::Custom);
        assert_eq!(enterprise.display_price(BillingCycle::Annual).to_string(), "Custom");
        assert_eq!(enterprise.cta_label(), "Contact Sales");
    }

    #[test]
    fn test_price_json_shape() {
        let price: Price = serde_json::from_str(r#"{"kind": "tiered", "annual": 1, "monthly": 2}"#).unwrap();
        assert_eq!(price, Price::Tiered { annual: 1, monthly: 2 });
        let price: Price = serde_json::from_str(r#"{"kind": "custom"}"#).unwrap();
        assert_eq!(price, Price::Custom);
    }
}
