//! Request sequencing.
//!
//! Overlapping requests of the same kind can settle out of order. Each request
//! takes a ticket when issued; only the holder of the newest ticket may render.

use std::cell::Cell;

/// Identifies one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Hands out increasing tickets for one kind of request.
#[derive(Debug, Default)]
pub struct RequestSequencer {
	latest: Cell<u64>,
}

impl RequestSequencer {
	/// Sequencer with no request issued yet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Issues a ticket that supersedes every earlier one.
	pub fn begin(&self) -> RequestTicket {
		let next = self.latest.get() + 1;
		self.latest.set(next);
		RequestTicket(next)
	}

	/// Whether no newer request was issued after `ticket`.
	pub fn is_current(&self, ticket: RequestTicket) -> bool {
		self.latest.get() == ticket.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_latest_ticket_is_current() {
		let seq = RequestSequencer::new();
		let first = seq.begin();
		assert!(seq.is_current(first));

		let second = seq.begin();
		assert!(!seq.is_current(first));
		assert!(seq.is_current(second));
	}

	#[test]
	fn stale_response_does_not_shadow_a_later_request() {
		let seq = RequestSequencer::new();
		let slow = seq.begin();
		let fast = seq.begin();
		// slow settles after fast and is dropped
		assert!(!seq.is_current(slow));

		// a third request supersedes fast even though fast already rendered
		let third = seq.begin();
		assert!(!seq.is_current(fast));
		assert!(!seq.is_current(slow));
		assert!(seq.is_current(third));
		assert_ne!(third, slow);
	}
}
