//! In-memory payment and seat ledgers for tests/dev.

use std::sync::{Mutex, MutexGuard, PoisonError};

use boxoffice_core::AccountId;
use boxoffice_ticketing::{PaymentCharger, SeatReserver};

/// A charge taken from an account.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Charge {
    pub account_id: AccountId,
    pub amount: u64,
}

/// Seats held for an account.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub account_id: AccountId,
    pub seats: u64,
}

// A poisoned lock still holds a consistent Vec; a ledger must not fail a purchase.
fn lock<T>(m: &Mutex<Vec<T>>) -> MutexGuard<'_, Vec<T>> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Append-only record of every charge, in call order.
///
/// - No IO
/// - Safe to share across threads (`Arc<InMemoryPaymentLedger>`)
#[derive(Debug, Default)]
pub struct InMemoryPaymentLedger {
    charges: Mutex<Vec<Charge>>,
}

impl InMemoryPaymentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn charges(&self) -> Vec<Charge> {
        lock(&self.charges).clone()
    }

    pub fn total_charged(&self, account_id: AccountId) -> u64 {
        lock(&self.charges)
            .iter()
            .filter(|c| c.account_id == account_id)
            .map(|c| c.amount)
            .sum()
    }
}

impl PaymentCharger for InMemoryPaymentLedger {
    fn charge(&self, account_id: AccountId, amount: u64) {
        lock(&self.charges).push(Charge { account_id, amount });
    }
}

/// Append-only record of every seat reservation, in call order.
#[derive(Debug, Default)]
pub struct InMemorySeatLedger {
    reservations: Mutex<Vec<Reservation>>,
}

impl InMemorySeatLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        lock(&self.reservations).clone()
    }

    pub fn total_reserved(&self, account_id: AccountId) -> u64 {
        lock(&self.reservations)
            .iter()
            .filter(|r| r.account_id == account_id)
            .map(|r| r.seats)
            .sum()
    }
}

impl SeatReserver for InMemorySeatLedger {
    fn reserve(&self, account_id: AccountId, seat_count: u64) {
        lock(&self.reservations).push(Reservation {
            account_id,
            seats: seat_count,
        });
    }
}
