//! Boundaries to the external payment and seat booking services.
//!
//! Both collaborators are treated as reliable and synchronous: they are called
//! once per successful purchase and nothing comes back. Implementations that can
//! fail must handle that on their own side.

use std::sync::Arc;

use boxoffice_core::AccountId;

/// Takes payment for a validated purchase.
pub trait PaymentCharger {
    /// Charge `amount` (whole currency units) to `account_id`.
    fn charge(&self, account_id: AccountId, amount: u64);
}

/// Holds seats for a validated purchase.
pub trait SeatReserver {
    fn reserve(&self, account_id: AccountId, seat_count: u64);
}

impl<T: PaymentCharger + ?Sized> PaymentCharger for &T {
    fn charge(&self, account_id: AccountId, amount: u64) {
        (**self).charge(account_id, amount)
    }
}

impl<T: PaymentCharger + ?Sized> PaymentCharger for Box<T> {
    fn charge(&self, account_id: AccountId, amount: u64) {
        (**self).charge(account_id, amount)
    }
}

impl<T: PaymentCharger + ?Sized> PaymentCharger for Arc<T> {
    fn charge(&self, account_id: AccountId, amount: u64) {
        (**self).charge(account_id, amount)
    }
}

impl<T: SeatReserver + ?Sized> SeatReserver for &T {
    fn reserve(&self, account_id: AccountId, seat_count: u64) {
        (**self).reserve(account_id, seat_count)
    }
}

impl<T: SeatReserver + ?Sized> SeatReserver for Box<T> {
    fn reserve(&self, account_id: AccountId, seat_count: u64) {
        (**self).reserve(account_id, seat_count)
    }
}

impl<T: SeatReserver + ?Sized> SeatReserver for Arc<T> {
    fn reserve(&self, account_id: AccountId, seat_count: u64) {
        (**self).reserve(account_id, seat_count)
    }
}
