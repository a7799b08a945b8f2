//! `Floor`: two FIFO waiting lists keyed by heading.

use std::collections::VecDeque;

use log::debug;

use lift_core::{Heading, Passenger};

/// A floor of the building and the riders waiting on it.
///
/// A passenger is queued in `waiting_up` iff its destination is above this
/// floor and in `waiting_down` iff it is below.  A rider whose destination is
/// this floor is never queued.
#[derive(Debug, Clone)]
pub struct Floor {
    number:       i32,
    waiting_up:   VecDeque<Passenger>,
    waiting_down: VecDeque<Passenger>,
}

impl Floor {
    pub fn new(number: i32) -> Self {
        Self {
            number,
            waiting_up:   VecDeque::new(),
            waiting_down: VecDeque::new(),
        }
    }

    #[inline]
    pub fn number(&self) -> i32 {
        self.number
    }

    /// Queue `p` behind everyone already waiting in its heading.
    ///
    /// Returns `false` (and queues nothing) when `p` is already at its
    /// destination.
    pub fn add_waiting_person(&mut self, p: Passenger) -> bool {
        match Heading::between(self.number, p.destination) {
            Some(heading) => {
                self.queue_mut(heading).push_back(p);
                true
            }
            None => {
                debug!("floor {}: dropping passenger {} already at destination", self.number, p.id);
                false
            }
        }
    }

    /// Pop the earliest-queued rider heading `heading`, if any.
    pub fn next_waiting_person(&mut self, heading: Heading) -> Option<Passenger> {
        self.queue_mut(heading).pop_front()
    }

    /// Put a rider back at the head of its queue.
    ///
    /// Used when a car turns out to be full after the rider was popped, so the
    /// rider keeps its place in line.
    pub fn return_waiting_person(&mut self, p: Passenger) {
        if let Some(heading) = Heading::between(self.number, p.destination) {
            self.queue_mut(heading).push_front(p);
        }
    }

    /// Number of riders waiting to travel `heading`.
    #[inline]
    pub fn waiting_count(&self, heading: Heading) -> usize {
        self.queue(heading).len()
    }

    /// Riders waiting in either direction.
    #[inline]
    pub fn total_waiting(&self) -> usize {
        self.waiting_up.len() + self.waiting_down.len()
    }

    /// Iterate the riders waiting to travel `heading`, head first.
    pub fn waiting(&self, heading: Heading) -> impl Iterator<Item = &Passenger> {
        self.queue(heading).iter()
    }

    /// The status line for this floor.
    pub fn status_line(&self) -> String {
        format!(
            "Floor {}: Waiting Up: {}, Waiting Down: {}",
            self.number,
            self.waiting_up.len(),
            self.waiting_down.len(),
        )
    }

    fn queue(&self, heading: Heading) -> &VecDeque<Passenger> {
        match heading {
            Heading::Up   => &self.waiting_up,
            Heading::Down => &self.waiting_down,
        }
    }

    fn queue_mut(&mut self, heading: Heading) -> &mut VecDeque<Passenger> {
        match heading {
            Heading::Up   => &mut self.waiting_up,
            Heading::Down => &mut self.waiting_down,
        }
    }
}
