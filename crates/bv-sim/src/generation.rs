//! Double-buffered vehicle storage.
//!
//! Two equally sized arenas alternate roles.  `side` names the authoritative
//! one: the generation every vehicle reads from during a step.  The other is
//! the write target.  After a step the roles swap with [`Generations::flip`];
//! nothing is copied.

use bv_vehicle::Vehicle;

#[derive(Clone, Debug)]
pub struct Generations {
    buffers: [Vec<Vehicle>; 2],
    side:    usize,
}

impl Generations {
    /// Seed both arenas with the initial vehicles.
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        let back = vehicles.clone();
        Self { buffers: [vehicles, back], side: 0 }
    }

    pub fn len(&self) -> usize {
        self.buffers[self.side].len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers[self.side].is_empty()
    }

    /// The authoritative generation.
    #[inline]
    pub fn current(&self) -> &[Vehicle] {
        &self.buffers[self.side]
    }

    /// Mutable access to the authoritative generation, for edits between
    /// steps.
    #[inline]
    pub fn current_mut(&mut self) -> &mut [Vehicle] {
        &mut self.buffers[self.side]
    }

    /// `(authoritative, write target)`.
    pub fn split(&mut self) -> (&[Vehicle], &mut [Vehicle]) {
        let [a, b] = &mut self.buffers;
        if self.side == 0 {
            (a.as_slice(), b.as_mut_slice())
        } else {
            (b.as_slice(), a.as_mut_slice())
        }
    }

    /// Promote the write target to authoritative.
    #[inline]
    pub fn flip(&mut self) {
        self.side ^= 1;
    }

    /// Which arena is currently authoritative (0 or 1).
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }
}
