use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SettlementConfig;
use crate::domain::order::Order;
use crate::domain::refund::{self, RefundError, RefundMethod};
use crate::domain::returns::{ReturnHistoryStore, ReturnRecord, ReturnStatus};
use crate::events::{EventPublisher, ReturnFiled, SettlementEvent};

// ============================================================================
// Refund Service
// ============================================================================
//
// Orchestrates a return submission: allocation → first-return lookup →
// fee computation → payout conversion → history append → event
// publication. The first-return flag is resolved once, before fees, and
// frozen onto the record.
//
// Callers must serialize submissions per customer if the backing history
// store cannot order appends causally (see ReturnHistoryStore).
//
// ============================================================================

/// Outcome of a settled return: the immutable record plus the amount the
/// payment collaborator should actually move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSettlement {
    pub record: ReturnRecord,
    pub refund_method: RefundMethod,
    pub payout: Decimal,
}

pub struct RefundService<H, P> {
    history: H,
    publisher: P,
    config: SettlementConfig,
}

impl<H: ReturnHistoryStore, P: EventPublisher> RefundService<H, P> {
    pub fn new(history: H, publisher: P, config: SettlementConfig) -> Self {
        Self {
            history,
            publisher,
            config,
        }
    }

    /// File a return for a subset of an order's items and settle the
    /// refund amount.
    pub fn submit_return(
        &mut self,
        order: &Order,
        selected_item_ids: &[String],
        reason: &str,
        refund_method: RefundMethod,
    ) -> Result<ReturnSettlement, RefundError> {
        let gross = refund::allocate(order, selected_item_ids)?;

        let is_first_return = self.history.is_first_return(order.customer_id);
        let fees = self.config.fees.compute(gross.gross_refund, is_first_return);
        let payout =
            refund::convert_with(fees.net_refund, refund_method, self.config.store_credit_bonus);

        let record = ReturnRecord {
            id: Uuid::new_v4(),
            order_id: order.order_id,
            customer_id: order.customer_id,
            selected_item_ids: selected_item_ids.to_vec(),
            reason: reason.to_string(),
            gross_refund: gross.gross_refund,
            net_refund: fees.net_refund,
            fees,
            is_first_return,
            status: ReturnStatus::Pending,
            created_at: Utc::now(),
        };

        tracing::info!(
            return_id = %record.id,
            order_id = %order.order_id,
            customer_id = %order.customer_id,
            gross = %record.gross_refund,
            net = %record.net_refund,
            %payout,
            is_first_return,
            "return filed"
        );

        self.publisher
            .publish(SettlementEvent::ReturnFiled(ReturnFiled {
                return_id: record.id,
                order_id: order.order_id,
                customer_id: order.customer_id,
                gross_refund: record.gross_refund,
                net_refund: record.net_refund,
                payout,
                is_first_return,
                timestamp: record.created_at,
            }));

        self.history.append(record.clone());

        Ok(ReturnSettlement {
            record,
            refund_method,
            payout,
        })
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{BookFormat, Cart, LineItem, PaymentMethod};
    use crate::domain::pricing;
    use crate::domain::returns::InMemoryReturnHistory;
    use crate::events::InMemoryEventPublisher;
    use rust_decimal_macros::dec;

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

    // A $40 order with $5 shipping and 8% tax, two refundable items.
    fn order() -> Order {
        let cart = Cart::new(vec![
            item("A", dec!(30.00), true),
            item("C", dec!(10.00), true),
        ]);
        let totals = pricing::price(&cart, dec!(0), dec!(5.00), dec!(0.08));
        Order::place(Uuid::new_v4(), &cart, &totals, PaymentMethod::CreditCard)
    }

    fn service() -> RefundService<InMemoryReturnHistory, InMemoryEventPublisher> {
        RefundService::new(
            InMemoryReturnHistory::new(),
            InMemoryEventPublisher::new(),
            SettlementConfig::default(),
        )
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_first_return_settles_without_fees() {
        let mut service = service();
        let order = order();

        let settlement = service
            .submit_return(&order, &ids(&["A"]), "Item damaged during shipping", RefundMethod::OriginalPayment)
            .unwrap();

        assert!(settlement.record.is_first_return);
        assert_eq!(settlement.record.gross_refund, dec!(32.40));
        assert_eq!(settlement.record.fees.total_fees, dec!(0.00));
        assert_eq!(settlement.payout, dec!(32.40));
        assert!(!service.history().is_first_return(order.customer_id));
    }

    #[test]
    fn test_second_return_pays_the_fee_schedule() {
        let mut service = service();
        let order = order();

        service
            .submit_return(&order, &ids(&["C"]), "Changed my mind", RefundMethod::OriginalPayment)
            .unwrap();
        let second = service
            .submit_return(&order, &ids(&["A"]), "Quality issues", RefundMethod::OriginalPayment)
            .unwrap();

        assert!(!second.record.is_first_return);
        assert_eq!(second.record.gross_refund, dec!(32.40));
        assert_eq!(second.record.fees.restocking_fee, dec!(4.86));
        assert_eq!(second.record.fees.total_fees, dec!(12.84));
        assert_eq!(second.record.net_refund, dec!(19.56));
        assert_eq!(second.payout, dec!(19.56));
    }

    #[test]
    fn test_store_credit_payout_gets_bonus() {
        let mut service = service();
        let order = order();

        service
            .submit_return(&order, &ids(&["C"]), "Changed my mind", RefundMethod::OriginalPayment)
            .unwrap();
        let second = service
            .submit_return(&order, &ids(&["A"]), "Quality issues", RefundMethod::StoreCredit)
            .unwrap();

        // $19.56 net becomes $21.52 in store credit; fees were assessed
        // against the cash-equivalent amount first.
        assert_eq!(second.record.net_refund, dec!(19.56));
        assert_eq!(second.payout, dec!(21.52));
    }

    // An earlier record's fee basis never changes when later returns come in.
    #[test]
    fn test_first_return_flag_is_frozen() {
        let mut service = service();
        let order = order();

        let first = service
            .submit_return(&order, &ids(&["C"]), "Changed my mind", RefundMethod::OriginalPayment)
            .unwrap();
        service
            .submit_return(&order, &ids(&["A"]), "Quality issues", RefundMethod::OriginalPayment)
            .unwrap();

        let history = service.history().history(order.customer_id);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, first.record.id);
        assert!(history[0].is_first_return);
        assert!(!history[1].is_first_return);
    }

    #[test]
    fn test_invalid_selection_files_nothing() {
        let mut service = service();
        let order = order();

        let err = service
            .submit_return(&order, &ids(&["Z"]), "Wrong item received", RefundMethod::OriginalPayment)
            .unwrap_err();

        assert_eq!(err, RefundError::ItemNotFound("Z".to_string()));
        assert!(service.history().is_first_return(order.customer_id));
        assert!(service.publisher().events().is_empty());
    }

    #[test]
    fn test_return_filed_event_carries_payout() {
        let mut service = service();
        let order = order();

        let settlement = service
            .submit_return(&order, &ids(&["A", "C"]), "Item not as described", RefundMethod::StoreCredit)
            .unwrap();

        match &service.publisher().events()[0] {
            SettlementEvent::ReturnFiled(event) => {
                assert_eq!(event.return_id, settlement.record.id);
                assert_eq!(event.payout, settlement.payout);
                assert!(event.is_first_return);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
