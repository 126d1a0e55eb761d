//! Seat registry binding each side to at most one live session.
//!
//! Replaces an alternating next-side counter with an explicit per-side
//! binding: the first connection takes seat A, the second seat B, and any
//! further connection is refused instead of aliasing an occupied side. A
//! seat freed by a disconnect can be reclaimed by the next connection.

use crate::game::types::Side;

/// Generic over the session handle type so the assignment logic can be
/// tested without spinning up actors.
pub struct SeatRegistry<A> {
    seat_a: Option<A>,
    seat_b: Option<A>,
}

impl<A: PartialEq> SeatRegistry<A> {
    pub fn new() -> Self {
        SeatRegistry {
            seat_a: None,
            seat_b: None,
        }
    }

    /// Bind the handle to the first free seat.
    /// Returns `None` when both seats are occupied.
    pub fn assign(&mut self, addr: A) -> Option<Side> {
        if self.seat_a.is_none() {
            self.seat_a = Some(addr);
            Some(Side::A)
        } else if self.seat_b.is_none() {
            self.seat_b = Some(addr);
            Some(Side::B)
        } else {
            None
        }
    }

    /// Side currently bound to this handle, if any.
    pub fn side_of(&self, addr: &A) -> Option<Side> {
        if self.seat_a.as_ref() == Some(addr) {
            Some(Side::A)
        } else if self.seat_b.as_ref() == Some(addr) {
            Some(Side::B)
        } else {
            None
        }
    }

    /// Release whichever seat is bound to this handle and return its side.
    /// A handle that no longer holds a seat releases nothing, so a stale
    /// disconnect cannot evict a reclaimed seat.
    pub fn release(&mut self, addr: &A) -> Option<Side> {
        match self.side_of(addr) {
            Some(Side::A) => {
                self.seat_a = None;
                Some(Side::A)
            }
            Some(Side::B) => {
                self.seat_b = None;
                Some(Side::B)
            }
            None => None,
        }
    }

    /// Iterate over the handles of the occupied seats.
    pub fn occupied(&self) -> impl Iterator<Item = &A> {
        self.seat_a.iter().chain(self.seat_b.iter())
    }
}

impl<A: PartialEq> Default for SeatRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}
