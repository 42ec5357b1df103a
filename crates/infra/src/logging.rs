//! Collaborators that only log.
//!
//! Stand-ins for the real payment gateway and seat booking clients when a
//! process has nowhere to send them (local runs, demos).

use boxoffice_core::AccountId;
use boxoffice_ticketing::{PaymentCharger, SeatReserver};

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPaymentCharger;

impl PaymentCharger for TracingPaymentCharger {
    fn charge(&self, account_id: AccountId, amount: u64) {
        tracing::info!(%account_id, amount, "payment charged");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSeatReserver;

impl SeatReserver for TracingSeatReserver {
    fn reserve(&self, account_id: AccountId, seat_count: u64) {
        tracing::info!(%account_id, seat_count, "seats reserved");
    }
}
