//! Ticket count rules.
//!
//! Rules are evaluated in declaration order and the first violation wins, so the
//! order of [`PURCHASE_RULES`] decides which message a purchaser sees when more
//! than one rule is broken.

use boxoffice_core::InvalidPurchase;

use crate::ticket::TicketCounts;

/// Maximum number of seated tickets (adults + children) in one purchase.
pub const MAX_TICKETS: u64 = 25;

/// A named predicate over ticket counts and the message reported when it fails.
#[derive(Debug, Clone, Copy)]
pub struct PurchaseRule {
    pub name: &'static str,
    pub message: &'static str,
    violated: fn(&TicketCounts) -> bool,
}

impl PurchaseRule {
    pub fn is_violated_by(&self, counts: &TicketCounts) -> bool {
        (self.violated)(counts)
    }
}

pub static PURCHASE_RULES: [PurchaseRule; 4] = [
    PurchaseRule {
        name: "at_least_one_ticket",
        message: "must purchase at least one ticket",
        violated: |c| c.seated() < 1,
    },
    PurchaseRule {
        name: "at_most_max_tickets",
        message: "must purchase between 1 and 25 tickets",
        violated: |c| c.seated() > MAX_TICKETS,
    },
    PurchaseRule {
        name: "child_needs_adult",
        message: "must purchase at least one Adult ticket with Child tickets",
        violated: |c| c.children() > 0 && c.adults() < 1,
    },
    PurchaseRule {
        name: "adult_per_infant",
        message: "must purchase an Adult ticket for each Infant",
        violated: |c| c.infants() > c.adults(),
    },
];

/// Returns the first violated rule, if any.
pub fn first_violation(counts: &TicketCounts) -> Option<&'static PurchaseRule> {
    PURCHASE_RULES.iter().find(|rule| rule.is_violated_by(counts))
}

/// Checks `counts` against every rule in order.
pub fn check(counts: &TicketCounts) -> Result<(), InvalidPurchase> {
    match first_violation(counts) {
        Some(rule) => Err(InvalidPurchase::new(rule.message)),
        None => Ok(()),
    }
}
