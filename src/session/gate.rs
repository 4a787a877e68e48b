use crate::canvas::export::EncodedImage;

/// Identifies one in-flight classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckTicket {
    epoch: u64,
}

/// Allows one check at a time and lets late responses be recognised after the screen moved on.
///
/// [`CheckGate::invalidate`] bumps the epoch, so every ticket handed out before it is stale.
#[derive(Debug, Default)]
pub struct CheckGate {
    epoch: u64,
    in_flight: bool,
}

impl CheckGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` while another check is in flight.
    pub fn begin(&mut self) -> Option<CheckTicket> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(CheckTicket { epoch: self.epoch })
    }

    /// Accepts only a ticket from the current epoch.
    pub fn finish(&mut self, ticket: CheckTicket) -> bool {
        if ticket.epoch != self.epoch {
            tracing::debug!(
                ticket = ticket.epoch,
                current = self.epoch,
                "discarding stale classification"
            );
            return false;
        }
        self.in_flight = false;
        true
    }

    pub fn invalidate(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.in_flight = false;
    }

    pub fn is_checking(&self) -> bool {
        self.in_flight
    }
}

/// Everything a caller needs to run one classification outside the session borrow.
#[derive(Clone, Debug)]
pub struct PendingCheck {
    pub ticket: CheckTicket,
    pub expected: String,
    pub image: EncodedImage,
}

#[cfg(test)]
#[path = "../../tests/unit/session/gate.rs"]
mod tests;
