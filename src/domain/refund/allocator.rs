use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::money;
use crate::domain::order::Order;
use super::errors::RefundError;

// ============================================================================
// Refund Allocator
// ============================================================================
//
// Computes the gross refundable amount for a subset of an order's line
// items, allocating shipping and tax:
//
// - Full return (every REFUNDABLE item selected, not every item): the
//   whole shipping cost and the whole tax amount come back. An order
//   carrying a non-refundable ebook still qualifies once all refundable
//   items are selected; store policy treats that as a full return.
// - Partial return: shipping stays with the customer (it was already
//   incurred), tax comes back in proportion to the pre-tax order value
//   being returned.
//
// ============================================================================

/// Gross refund breakdown, before return fees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrossRefund {
    pub items_total: Decimal,
    pub shipping_portion: Decimal,
    pub tax_portion: Decimal,
    pub gross_refund: Decimal,
}

/// Compute the gross refund for the selected item ids.
///
/// Every id must reference a refundable line item of `order`; the first
/// unknown or non-refundable id is reported so the caller can surface
/// exactly which item disqualifies the selection. Duplicate ids count
/// once.
pub fn allocate(order: &Order, selected_item_ids: &[String]) -> Result<GrossRefund, RefundError> {
    if selected_item_ids.is_empty() {
        return Err(RefundError::EmptySelection);
    }

    let mut selected: BTreeSet<&str> = BTreeSet::new();
    for id in selected_item_ids {
        let item = order
            .find_item(id)
            .ok_or_else(|| RefundError::ItemNotFound(id.clone()))?;
        if !item.refundable {
            return Err(RefundError::ItemNotRefundable(id.clone()));
        }
        selected.insert(id.as_str());
    }

    let items_total: Decimal = order
        .items
        .iter()
        .filter(|item| selected.contains(item.book_id.as_str()))
        .map(|item| item.line_total())
        .sum();

    let refundable: BTreeSet<&str> = order.refundable_item_ids().into_iter().collect();
    let full_return = selected == refundable;

    let (shipping_portion, tax_portion) = if full_return {
        (order.shipping_cost, order.tax_amount)
    } else {
        let pre_tax_value = order.pre_tax_value();
        let tax_portion = if pre_tax_value.is_zero() {
            // Degenerate free order; nothing to apportion.
            Decimal::ZERO
        } else {
            money::round(order.tax_amount * items_total / pre_tax_value)
        };
        (Decimal::ZERO, tax_portion)
    };

    Ok(GrossRefund {
        items_total,
        shipping_portion,
        tax_portion,
        gross_refund: items_total + shipping_portion + tax_portion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{BookFormat, Cart, LineItem, PaymentMethod};
    use crate::domain::pricing;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn item(id: &str, price: Decimal, refundable: bool) -> LineItem {
        LineItem {
            book_id: id.to_string(),
            title: format!("Book {id}"),
            unit_price: price,
            quantity: 1,
            format: if refundable { BookFormat::Physical } else { BookFormat::Ebook },
            refundable,
        }
    }

    fn order_with(items: Vec<LineItem>, shipping: Decimal, tax_rate: Decimal) -> Order {
        let cart = Cart::new(items);
        let totals = pricing::price(&cart, dec!(0), shipping, tax_rate);
        Order::place(Uuid::new_v4(), &cart, &totals, PaymentMethod::CreditCard)
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    // Partial return of a $30 item from a $40 order (shipping $5, tax
    // $3.20 at 8%): shipping stays, tax portion = 3.20 * 30/40 = $2.40,
    // gross = $32.40.
    #[test]
    fn test_partial_return_apportions_tax_only() {
        let order = order_with(
            vec![item("A", dec!(30.00), true), item("C", dec!(10.00), true)],
            dec!(5.00),
            dec!(0.08),
        );
        assert_eq!(order.total, dec!(48.20));

        let gross = allocate(&order, &ids(&["A"])).unwrap();
        assert_eq!(gross.items_total, dec!(30.00));
        assert_eq!(gross.shipping_portion, dec!(0.00));
        assert_eq!(gross.tax_portion, dec!(2.40));
        assert_eq!(gross.gross_refund, dec!(32.40));
    }

    // All refundable items selected while a non-refundable ebook stays
    // behind: still treated as a full return for shipping and tax.
    #[test]
    fn test_full_refundable_set_triggers_full_allocation() {
        let order = order_with(
            vec![item("A", dec!(30.00), true), item("B", dec!(10.00), false)],
            dec!(5.00),
            dec!(0.08),
        );

        let gross = allocate(&order, &ids(&["A"])).unwrap();
        assert_eq!(gross.shipping_portion, dec!(5.00));
        assert_eq!(gross.tax_portion, dec!(3.20));
        assert_eq!(gross.gross_refund, dec!(38.20));
    }

    // Full-return equivalence: when every item is refundable and no
    // discount was applied, the gross refund equals the order total.
    #[test]
    fn test_full_return_refunds_order_total()  {
        let order = order_with(
            vec![item("A", dec!(30.00), true), item("C", dec!(10.00), true)],
            dec!(5.00),
            dec!(0.08),
        );

        let gross = allocate(&order, &ids(&["A", "C"])).unwrap();
        assert_eq!(gross.gross_refund, order.total);
    }

    #[test]
    fn test_duplicate_ids_count_once() {
        let order = order_with(
            vec![item("A", dec!(30.00), true), item("C", dec!(10.00), true)],
            dec!(5.00),
            dec!(0.08),
        );

        let once = allocate(&order, &ids(&["A"])).unwrap();
        let twice = allocate(&order, &ids(&["A", "A"])).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_non_refundable_item_rejected_by_id() {
        let order = order_with(
            vec![item("A", dec!(30.00), true), item("B", dec!(10.00), false)],
            dec!(5.00),
            dec!(0.08),
        );

        assert_eq!(
            allocate(&order, &ids(&["A", "B"])).unwrap_err(),
            RefundError::ItemNotRefundable("B".to_string())
        );
    }

    #[test]
    fn test_unknown_item_rejected_by_id() {
        let order = order_with(vec![item("A", dec!(30.00), true)], dec!(5.00), dec!(0.08));
        assert_eq!(
            allocate(&order, &ids(&["Z"])).unwrap_err(),
            RefundError::ItemNotFound("Z".to_string())
        );
    }

    #[test]
    fn test_empty_selection_rejected() {
        let order = order_with(vec![item("A", dec!(30.00), true)], dec!(5.00), dec!(0.08));
        assert_eq!(allocate(&order, &[]).unwrap_err(), RefundError::EmptySelection);
    }

    // Degenerate free order: no division by zero, tax portion is zero.
    #[test]
    fn test_zero_value_order_has_zero_tax_portion() {
        let order = order_with(
            vec![item("A", dec!(0.00), true), item("C", dec!(0.00), true)],
            dec!(0.00),
            dec!(0.08),
        );

        let gross = allocate(&order, &ids(&["A"])).unwrap();
        assert_eq!(gross.tax_portion, dec!(0.00));
        assert_eq!(gross.gross_refund, dec!(0.00));
    }
}
