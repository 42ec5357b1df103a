//! Infrastructure layer: adapters for the external payment and seat booking
//! services.

pub mod ledger;
pub mod logging;

mod integration_tests;

pub use ledger::{Charge, InMemoryPaymentLedger, InMemorySeatLedger, Reservation};
pub use logging::{TracingPaymentCharger, TracingSeatReserver};
