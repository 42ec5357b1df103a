//! Integration tests for the full purchase flow.
//!
//! Tests: requests → TicketService → payment ledger + seat ledger
//!
//! Verifies:
//! - Successful purchases reach both ledgers with derived totals
//! - Rejected purchases leave both ledgers untouched
//! - Concurrent purchases through one shared service do not interfere

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use boxoffice_core::AccountId;
    use boxoffice_ticketing::{TicketService, TicketType, TicketTypeRequest};
    use proptest::prelude::*;

    use crate::ledger::{Charge, InMemoryPaymentLedger, InMemorySeatLedger, Reservation};
    use crate::logging::{TracingPaymentCharger, TracingSeatReserver};

    type LedgerService = TicketService<Arc<InMemoryPaymentLedger>, Arc<InMemorySeatLedger>>;

    fn setup() -> (LedgerService, Arc<InMemoryPaymentLedger>, Arc<InMemorySeatLedger>) {
        boxoffice_observability::init();
        let payments = Arc::new(InMemoryPaymentLedger::new());
        let seats = Arc::new(InMemorySeatLedger::new());
        let service = TicketService::new(payments.clone(), seats.clone());
        (service, payments, seats)
    }

    fn account(raw: i64) -> AccountId {
        AccountId::new(raw).unwrap()
    }

    fn family() -> Vec<TicketTypeRequest> {
        vec![
            TicketTypeRequest::new(TicketType::Adult, 2),
            TicketTypeRequest::new(TicketType::Child, 1),
            TicketTypeRequest::new(TicketType::Infant, 1),
        ]
    }

    #[test]
    fn purchase_reaches_both_ledgers() {
        let (service, payments, seats) = setup();

        let summary = service.purchase_tickets(12345, &family()).unwrap();

        assert_eq!(
            payments.charges(),
            vec![Charge { account_id: account(12345), amount: 65 }]
        );
        assert_eq!(
            seats.reservations(),
            vec![Reservation { account_id: account(12345), seats: 3 }]
        );
        assert_eq!(summary.total_price, 65);
        assert_eq!(summary.total_seats, 3);
    }

    #[test]
    fn rejected_purchase_leaves_ledgers_untouched() {
        let (service, payments, seats) = setup();

        let err = service
            .purchase_tickets(0, &[TicketTypeRequest::new(TicketType::Adult, 1)])
            .unwrap_err();
        assert_eq!(err.reason(), "Invalid account ID.");

        let err = service
            .purchase_tickets(12345, &[TicketTypeRequest::new(TicketType::Adult, 26)])
            .unwrap_err();
        assert_eq!(err.reason(), "must purchase between 1 and 25 tickets");

        assert!(payments.charges().is_empty());
        assert!(seats.reservations().is_empty());
    }

    #[test]
    fn rejection_does_not_affect_later_purchases() {
        let (service, payments, seats) = setup();

        assert!(service.purchase_tickets(1, &[]).is_err());
        service.purchase_tickets(1, &family()).unwrap();

        assert_eq!(payments.total_charged(account(1)), 65);
        assert_eq!(seats.total_reserved(account(1)), 3);
    }

    #[test]
    fn concurrent_purchases_share_one_service() {
        let (service, payments, seats) = setup();
        let service = &service;

        std::thread::scope(|scope| {
            for raw in 1..=8i64 {
                scope.spawn(move || {
                    for _ in 0..10 {
                        service.purchase_tickets(raw, &family()).unwrap();
                    }
                });
            }
        });

        assert_eq!(payments.charges().len(), 80);
        assert_eq!(seats.reservations().len(), 80);
        for raw in 1..=8 {
            assert_eq!(payments.total_charged(account(raw)), 650);
            assert_eq!(seats.total_reserved(account(raw)), 30);
        }
    }

    #[test]
    fn tracing_collaborators_accept_purchases() {
        let service = TicketService::new(TracingPaymentCharger, TracingSeatReserver);
        let summary = service.purchase_tickets(77, &family()).unwrap();
        assert_eq!(summary.account_id, account(77));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: across any mix of valid and invalid purchases, the ledgers
        /// hold exactly the totals of the purchases that succeeded.
        #[test]
        fn ledgers_match_successful_summaries(
            orders in prop::collection::vec((-2i64..4, 0u32..30, 0u32..30, 0u32..30), 1..20)
        ) {
            let (service, payments, seats) = setup();
            let mut expected_price = 0u64;
            let mut expected_seats = 0u64;
            let mut successes = 0usize;

            for (raw, adults, children, infants) in orders {
                let requests = [
                    TicketTypeRequest::new(TicketType::Adult, adults),
                    TicketTypeRequest::new(TicketType::Child, children),
                    TicketTypeRequest::new(TicketType::Infant, infants),
                ];
                if let Ok(summary) = service.purchase_tickets(raw, &requests) {
                    expected_price += summary.total_price;
                    expected_seats += summary.total_seats;
                    successes += 1;
                }
            }

            let charged: u64 = payments.charges().iter().map(|c| c.amount).sum();
            let reserved: u64 = seats.reservations().iter().map(|r| r.seats).sum();
            prop_assert_eq!(payments.charges().len(), successes);
            prop_assert_eq!(seats.reservations().len(), successes);
            prop_assert_eq!(charged, expected_price);
            prop_assert_eq!(reserved, expected_seats);
        }
    }
}
