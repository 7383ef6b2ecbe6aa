use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::order::Cart;

// ============================================================================
// Shipping Rates
// ============================================================================
//
// Concrete shipping-rate collaborator: flat per-method rates, a domestic
// free-shipping threshold for standard delivery, and free delivery for
// all-digital carts regardless of method.
//
// ============================================================================

/// Standard domestic shipping is free once the physical part of the cart
/// reaches this value.
pub const FREE_SHIPPING_THRESHOLD: Decimal = dec!(35.00);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShippingMethod {
    Standard,
    Expedited,
    Overnight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Destination {
    Domestic,
    International,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub method: ShippingMethod,
    pub cost: Decimal,
}

/// Quote shipping for a cart. Digital-only carts always ship free.
pub fn quote(cart: &Cart, method: ShippingMethod, destination: Destination) -> ShippingQuote {
    if !cart.has_physical_items() {
        return ShippingQuote {
            method,
            cost: Decimal::ZERO,
        };
    }

    let cost = match (method, destination) {
        (ShippingMethod::Standard, Destination::Domestic) => {
            if cart.physical_subtotal() >= FREE_SHIPPING_THRESHOLD {
                Decimal::ZERO
            } else {
                dec!(4.99)
            }
        }
        (ShippingMethod::Standard, Destination::International) => dec!(24.99),
        (ShippingMethod::Expedited, Destination::Domestic) => dec!(9.99),
        (ShippingMethod::Expedited, Destination::International) => dec!(39.99),
        (ShippingMethod::Overnight, Destination::Domestic) => dec!(19.99),
        (ShippingMethod::Overnight, Destination::International) => dec!(59.99),
    };

    ShippingQuote { method, cost }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{BookFormat, LineItem};

    fn item(format: BookFormat, price: Decimal) -> LineItem {
        LineItem {
            book_id: "1".to_string(),
            title: "Test Book".to_string(),
            unit_price: price,
            quantity: 1,
            format,
            refundable: true,
        }
    }

    #[test]
    fn test_digital_only_cart_ships_free() {
        let cart = Cart::new(vec![item(BookFormat::Ebook, dec!(8.39))]);
        let quote = quote(&cart, ShippingMethod::Overnight, Destination::International);
        assert_eq!(quote.cost, dec!(0));
    }

    #[test]
    fn test_standard_domestic_rate() {
        let cart = Cart::new(vec![item(BookFormat::Physical, dec!(14.99))]);
        assert_eq!(
            quote(&cart, ShippingMethod::Standard, Destination::Domestic).cost,
            dec!(4.99)
        );
    }

    #[test]
    fn test_free_shipping_threshold() {
        let cart = Cart::new(vec![item(BookFormat::Physical, dec!(35.00))]);
        assert_eq!(
            quote(&cart, ShippingMethod::Standard, Destination::Domestic).cost,
            dec!(0)
        );
        // Ebook value doesn't count toward the threshold.
        let mixed = Cart::new(vec![
            item(BookFormat::Physical, dec!(20.00)),
            item(BookFormat::Ebook, dec!(20.00)),
        ]);
        assert_eq!(
            quote(&mixed, ShippingMethod::Standard, Destination::Domestic).cost,
            dec!(4.99)
        );
    }

    #[test]
    fn test_no_free_threshold_for_faster_methods() {
        let cart = Cart::new(vec![item(BookFormat::Physical, dec!(100.00))]);
        assert_eq!(
            quote(&cart, ShippingMethod::Expedited, Destination::Domestic).cost,
            dec!(9.99)
        );
        assert_eq!(
            quote(&cart, ShippingMethod::Overnight, Destination::Domestic).cost,
            dec!(19.99)
        );
    }

    #[test]
    fn test_international_rates() {
        let cart = Cart::new(vec![item(BookFormat::Physical, dec!(100.00))]);
        assert_eq!(
            quote(&cart, ShippingMethod::Standard, Destination::International).cost,
            dec!(24.99)
        );
        assert_eq!(
            quote(&cart, ShippingMethod::Expedited, Destination::International).cost,
            dec!(39.99)
        );
        assert_eq!(
            quote(&cart, ShippingMethod::Overnight, Destination::International).cost,
            dec!(59.99)
        );
    }
}
