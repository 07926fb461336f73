//! Request sequence numbers for last-issued-wins response handling.

/// Issues a strictly increasing number per request so that a view can tell
/// the response it is waiting for from an older one still in flight.
#[derive(Debug, Default)]
pub struct Sequencer {
    latest: u64,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next sequence number; it becomes the only current one.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq != 0 && seq == self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }
}

/// A request a view wants sent, tagged with the sequence number its response
/// must carry back to be applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket<R> {
    pub seq: u64,
    pub request: R,
}
