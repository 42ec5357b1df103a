use serde::{Deserialize, Serialize};

use boxoffice_core::{AccountId, ValueObject};

use crate::ticket::{TicketType, TicketTypeRequest};

/// One line of a purchase summary, echoing a request as it was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketLine {
    #[serde(rename = "type")]
    pub ticket_type: TicketType,
    pub number: u32,
}

impl ValueObject for TicketLine {}

impl From<&TicketTypeRequest> for TicketLine {
    fn from(req: &TicketTypeRequest) -> Self {
        Self {
            ticket_type: req.ticket_type(),
            number: req.no_of_tickets(),
        }
    }
}

/// Record of a completed purchase.
///
/// Only built after every rule has passed and both collaborators have been
/// called. `tickets` keeps the caller's request order and granularity; repeated
/// types are not merged here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseSummary {
    pub account_id: AccountId,
    pub total_price: u64,
    pub total_seats: u64,
    pub tickets: Vec<TicketLine>,
}

impl PurchaseSummary {
    pub const CONFIRMATION: &'static str = "Tickets purchased successfully!";

    /// Confirmation text for the purchaser.
    pub fn message(&self) -> &'static str {
        Self::CONFIRMATION
    }
}
