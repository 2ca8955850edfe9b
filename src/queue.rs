//! Bounded blocking multi-producer/multi-consumer queue of subproblems,
//! with a donation protocol for idle-worker load balancing.
//!
//! Built on `Mutex` + `Condvar` rather than a channel crate: the donation
//! protocol needs to inspect and mutate queue occupancy from both producer
//! and consumer sides under one lock.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};
use std::time::Duration;

use crate::bitset::BitSet;

/// a unit of search work: a partial clique, its remaining candidates, and
/// the progress-display position vector at the point it was created
#[derive(Debug, Clone)]
pub struct Subproblem {
    pub c: Vec<u32>,
    pub p: BitSet,
    pub position: Vec<usize>,
}

/// low-water mark below which [`Queue::want_donations`] starts returning `true`
const LOW_WATER_MARK: usize = 2;

struct QueueState {
    items: VecDeque<Subproblem>,
    capacity: usize,
    producer_done: bool,
    donations_in_flight: usize,
}

/// a bounded blocking queue of [`Subproblem`]s
#[derive(Debug)]
pub struct Queue {
    state: Mutex<QueueState>,
    not_empty: Condvar,
    not_full: Condvar,
}

impl std::fmt::Debug for QueueState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueState")
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .field("producer_done", &self.producer_done)
            .field("donations_in_flight", &self.donations_in_flight)
            .finish()
    }
}

impl Queue {
    /// a new queue with room for `capacity` items before producers block
    pub fn new(capacity: usize) -> Self {
        Queue {
            state: Mutex::new(QueueState {
                items: VecDeque::new(),
                capacity: capacity.max(1),
                producer_done: false,
                donations_in_flight: 0,
            }),
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
        }
    }

    /// push `item`, blocking while the queue is full
    pub fn enqueue(&self, item: Subproblem) {
        let mut state = self.state.lock().expect("queue mutex poisoned");
        while state.items.len() >= state.capacity && !state.producer_done {
            state = self.not_full.wait(state).expect("queue mutex poisoned");
        }
        state.items.push_back(item);
        self.not_empty.notify_one();
    }

    /// the seeder's bulk-push variant: grows capacity if needed so the
    /// initial burst of `expected_consumers`-sized work never spuriously
    /// blocks against the consumers that are about to start dequeuing
    pub fn enqueue_blocking(&self, item: Subproblem, expected_consumers: usize) {
        let mut state = self.state.lock().expect("queue mutex poisoned");
        if state.capacity < expected_consumers {
            state.capacity = expected_consumers;
        }
        state.items.push_back(item);
        self.not_empty.notify_one();
    }

    /// pop the next item, blocking until one is available or the queue has
    /// permanently closed (empty, producer done, no donation in flight)
    pub fn dequeue_blocking(&self) -> Option<Subproblem> {
        let mut state = self.state.lock().expect("queue mutex poisoned");
        loop {
            if let Some(item) = state.items.pop_front() {
                self.not_full.notify_one();
                return Some(item);
            }
            if state.producer_done && state.donations_in_flight == 0 {
                return None;
            }
            state = self
                .not_empty
                .wait_timeout(state, Duration::from_millis(50))
                .expect("queue mutex poisoned")
                .0;
        }
    }

    /// flip the queue into donation mode: once called, the queue closes as
    /// soon as it is empty and no donation is in flight
    pub fn initial_producer_done(&self) {
        let mut state = self.state.lock().expect("queue mutex poisoned");
        state.producer_done = true;
        self.not_empty.notify_all();
        self.not_full.notify_all();
    }

    /// a hint that idle consumers likely exist and a donation would help
    pub fn want_donations(&self) -> bool {
        let state = self.state.lock().expect("queue mutex poisoned");
        state.items.len() < LOW_WATER_MARK
    }

    /// record that a donation is about to be enqueued; call before
    /// [`Queue::enqueue`]d donation item is pushed, to keep the closing
    /// condition correct against a race where the queue briefly drains
    pub fn begin_donation(&self) {
        let mut state = self.state.lock().expect("queue mutex poisoned");
        state.donations_in_flight += 1;
    }

    /// record that a previously-begun donation has been enqueued (or
    /// abandoned without enqueuing, if the caller decided not to donate
    /// after all)
    pub fn end_donation(&self) {
        let mut state = self.state.lock().expect("queue mutex poisoned");
        state.donations_in_flight -= 1;
        self.not_empty.notify_all();
    }
}
