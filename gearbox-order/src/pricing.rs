use rust_decimal::Decimal;
use serde::Deserialize;

fn default_free_shipping_threshold() -> Decimal {
    Decimal::new(20000, 2)
}

fn default_flat_shipping_fee() -> Decimal {
    Decimal::new(2500, 2)
}

/// Shipping rules applied when pricing an order. Subtotals at or above the
/// threshold ship free; everything below pays the flat fee.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingRules {
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: Decimal,
    #[serde(default = "default_flat_shipping_fee")]
    pub flat_shipping_fee: Decimal,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            free_shipping_threshold: default_free_shipping_threshold(),
            flat_shipping_fee: default_flat_shipping_fee(),
        }
    }
}

impl PricingRules {
    /// Whether a merchandise subtotal clears the free-shipping threshold.
    pub fn qualifies_free_shipping(&self, subtotal: Decimal) -> bool {
        subtotal >= self.free_shipping_threshold
    }

    /// Shipping fee owed for a merchandise subtotal.
    pub fn shipping_for(&self, subtotal: Decimal) -> Decimal {
        if self.qualifies_free_shipping(subtotal) {
            Decimal::ZERO
        } else {
            self.flat_shipping_fee
        }
    }
}
