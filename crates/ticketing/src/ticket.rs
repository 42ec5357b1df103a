use serde::{Deserialize, Serialize};

use boxoffice_core::ValueObject;

/// Ticket category. Determines unit price and whether a seat is occupied.
///
/// The set is closed: a request can only name one of these three types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    /// Every ticket type, in reporting order.
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Unit price in whole currency units.
    pub const fn unit_price(self) -> u64 {
        match self {
            TicketType::Adult => 25,
            TicketType::Child => 15,
            TicketType::Infant => 0,
        }
    }

    /// Infants sit on an adult's lap.
    pub const fn occupies_seat(self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    const fn index(self) -> usize {
        match self {
            TicketType::Adult => 0,
            TicketType::Child => 1,
            TicketType::Infant => 2,
        }
    }
}

impl core::fmt::Display for TicketType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        };
        f.write_str(name)
    }
}

/// Request for a number of tickets of one type (immutable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    no_of_tickets: u32,
}

impl ValueObject for TicketTypeRequest {}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, no_of_tickets: u32) -> Self {
        Self {
            ticket_type,
            no_of_tickets,
        }
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn no_of_tickets(&self) -> u32 {
        self.no_of_tickets
    }
}

/// Per-type ticket totals for one purchase.
///
/// Built fresh from a request list on every call; repeated entries of the same
/// type add up. Sums saturate rather than wrap, so an absurd request can only
/// ever trip the upper ticket limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicketCounts {
    counts: [u64; 3],
}

impl ValueObject for TicketCounts {}

impl TicketCounts {
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut acc, req| {
            let slot = &mut acc.counts[req.ticket_type().index()];
            *slot = slot.saturating_add(u64::from(req.no_of_tickets()));
            acc
        })
    }

    pub fn get(&self, ticket_type: TicketType) -> u64 {
        self.counts[ticket_type.index()]
    }

    pub fn adults(&self) -> u64 {
        self.get(TicketType::Adult)
    }

    pub fn children(&self) -> u64 {
        self.get(TicketType::Child)
    }

    pub fn infants(&self) -> u64 {
        self.get(TicketType::Infant)
    }

    /// Tickets that occupy a seat (adults and children).
    pub fn seated(&self) -> u64 {
        TicketType::ALL
            .iter()
            .filter(|t| t.occupies_seat())
            .fold(0u64, |acc, t| acc.saturating_add(self.get(*t)))
    }

    pub fn total_price(&self) -> u64 {
        TicketType::ALL.iter().fold(0u64, |acc, t| {
            acc.saturating_add(t.unit_price().saturating_mul(self.get(*t)))
        })
    }
}
