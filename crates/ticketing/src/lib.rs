//! Ticket purchasing domain module.
//!
//! This crate contains the business rules for buying venue tickets: request
//! aggregation, validation, pricing and seat counting, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage). Payment and seat
//! reservation are reached through the [`PaymentCharger`] and [`SeatReserver`]
//! traits only after a purchase has been validated.

pub mod gateway;
pub mod rules;
pub mod service;
pub mod summary;
pub mod ticket;

pub use boxoffice_core::{AccountId, InvalidPurchase, PurchaseResult};
pub use gateway::{PaymentCharger, SeatReserver};
pub use rules::{MAX_TICKETS, PURCHASE_RULES, PurchaseRule};
pub use service::{PurchaseQuote, TicketService, validate_purchase};
pub use summary::{PurchaseSummary, TicketLine};
pub use ticket::{TicketCounts, TicketType, TicketTypeRequest};
