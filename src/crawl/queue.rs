// src/crawl/queue.rs
// =============================================================================
// The crawl frontier: URLs we've discovered but not fetched yet.
//
// How it works:
// - New links go on the back of the queue
// - The crawler always takes the next URL from the front
// - That first-in, first-out order is what makes the crawl breadth-first:
//   every page linked from the start page is fetched before any page that
//   is two clicks away
//
// The frontier does NOT deduplicate. The same URL can be queued twice if two
// pages link to it before it is fetched; the crawler skips the second copy
// when it comes off the queue.
//
// Rust concepts:
// - VecDeque: Double-ended queue, O(1) push at the back and pop at the front
// =============================================================================

use std::collections::VecDeque;
use url::Url;

#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<Url>,
}

impl Frontier {
    // Creates a frontier holding just the starting URL
    pub fn starting_at(url: Url) -> Self {
        let mut frontier = Self::default();
        frontier.push(url);
        frontier
    }

    pub fn push(&mut self, url: Url) {
        self.queue.push_back(url);
    }

    pub fn pop(&mut self) -> Option<Url> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why wrap VecDeque in our own struct?
//    - The crawler only needs "add to the back" and "take from the front"
//    - Hiding the other VecDeque methods means nobody can accidentally
//      push_front() and turn the crawl depth-first
//
// 2. Why not a Vec?
//    - Vec::remove(0) shifts every remaining element: O(n) per pop
//    - VecDeque is a ring buffer, so pop_front() is O(1)
//
// 3. What is #[derive(Default)]?
//    - Generates Frontier::default(), an empty queue
//    - Works because VecDeque itself implements Default
// -----------------------------------------------------------------------------
