//! Ticket purchase service.
//!
//! A purchase runs in two phases:
//!
//! 1. **Decide** ([`validate_purchase`]): aggregate the requests, check the
//!    account and the ticket rules, then price the order. Pure, no side effects.
//! 2. **Delegate** ([`TicketService::purchase_tickets`]): charge the account,
//!    then reserve seats, then hand back a [`PurchaseSummary`].
//!
//! A rejected purchase never reaches phase 2. Every call builds its own
//! counters, so a service can be shared and called repeatedly.

use boxoffice_core::{AccountId, PurchaseResult};

use crate::gateway::{PaymentCharger, SeatReserver};
use crate::rules;
use crate::summary::{PurchaseSummary, TicketLine};
use crate::ticket::{TicketCounts, TicketTypeRequest};

/// A validated, priced purchase that has not been paid for yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseQuote {
    pub account_id: AccountId,
    pub counts: TicketCounts,
    pub total_price: u64,
    pub total_seats: u64,
}

/// Validate and price a purchase without touching any collaborator.
///
/// Checks run in a fixed order: account id first, then the ticket rules in
/// [`rules::PURCHASE_RULES`] order.
pub fn validate_purchase(
    account_id: i64,
    requests: &[TicketTypeRequest],
) -> PurchaseResult<PurchaseQuote> {
    let counts = TicketCounts::from_requests(requests);
    let account_id = AccountId::new(account_id)?;
    rules::check(&counts)?;

    Ok(PurchaseQuote {
        account_id,
        counts,
        total_price: counts.total_price(),
        total_seats: counts.seated(),
    })
}

/// Purchase entry point, wired to a payment charger and a seat reserver.
#[derive(Debug, Clone)]
pub struct TicketService<P, S> {
    payments: P,
    seats: S,
}

impl<P, S> TicketService<P, S>
where
    P: PaymentCharger,
    S: SeatReserver,
{
    pub fn new(payments: P, seats: S) -> Self {
        Self { payments, seats }
    }

    pub fn payments(&self) -> &P {
        &self.payments
    }

    pub fn seats(&self) -> &S {
        &self.seats
    }

    /// Same as [`validate_purchase`].
    pub fn validate(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<PurchaseQuote> {
        validate_purchase(account_id, requests)
    }

    /// Validate, charge, reserve, and summarize a purchase.
    ///
    /// Payment is taken before seats are reserved. Neither collaborator is
    /// called when validation fails.
    #[tracing::instrument(
        name = "purchase_tickets",
        skip(self, requests),
        fields(requests = requests.len())
    )]
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<PurchaseSummary> {
        let quote = validate_purchase(account_id, requests).inspect_err(|err| {
            tracing::warn!(reason = err.reason(), "purchase rejected");
        })?;

        tracing::debug!(amount = quote.total_price, "charging account");
        self.payments.charge(quote.account_id, quote.total_price);

        tracing::debug!(seats = quote.total_seats, "reserving seats");
        self.seats.reserve(quote.account_id, quote.total_seats);

        tracing::info!(
            total_price = quote.total_price,
            total_seats = quote.total_seats,
            "tickets purchased"
        );

        Ok(PurchaseSummary {
            account_id: quote.account_id,
            total_price: quote.total_price,
            total_seats: quote.total_seats,
            tickets: requests.iter().map(TicketLine::from).collect(),
        })
    }
}
