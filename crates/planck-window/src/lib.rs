//! A fixed-capacity overwriting ring buffer, stack-allocated.
//!
//! This crate provides [`window::RingWindow`], a circular buffer with a
//! compile-time fixed capacity that silently evicts its oldest element when
//! a new one is pushed into a full buffer. It is the "sliding window"
//! counterpart to a bounded FIFO queue: instead of rejecting writes at
//! capacity, the window always accepts them and keeps the most recent `N`
//! elements.
//!
//! # Overview
//!
//! A `RingWindow` owns a fixed array of `N` slots and presents the most
//! recently pushed elements as a linear sequence, oldest first. Elements
//! are appended at the back and removed from the front; any element in the
//! current window can be read by logical index in O(1). A pair of
//! iterator types ([`iter::Iter`], [`iter::IterMut`]) walk the window in
//! either direction, hiding the physical wraparound entirely.
//!
//! All of this works without heap allocation:
//!
//! - No allocator is required (`no_std` compatible)
//! - Maximum capacity is fixed at compile time
//! - Every operation except [`window::RingWindow::fill`] is O(1)
//!
//! # When to Use This Crate
//!
//! Use `planck_window` when you need a rolling view over a stream:
//!
//! - Sliding-window statistics (last `N` samples)
//! - Bounded history buffers (recent log lines, recent commands)
//! - Producer/consumer windows where the newest data always wins
//!
//! If overwriting the oldest element is *not* acceptable and producers
//! must be told the buffer is full, a rejecting FIFO ring buffer is the
//! better fit.
//!
//! # Examples
//!
//! ```
//! use planck_window::window::RingWindow;
//!
//! // A window over the last three samples.
//! let mut window = RingWindow::<u32, 3>::new();
//!
//! for sample in [1, 2, 3, 4, 5] {
//!     window.push_back(sample);
//! }
//!
//! // Only the newest three survive, oldest first.
//! assert_eq!(window.len(), 3);
//! let contents: Vec<u32> = window.iter().copied().collect();
//! assert_eq!(contents, vec![3, 4, 5]);
//!
//! // Reverse iteration walks newest first.
//! let reversed: Vec<u32> = window.iter().rev().copied().collect();
//! assert_eq!(reversed, vec![5, 4, 3]);
//! ```
//!
//! # Features
//!
//! - `std` (default): enables the host-side test suite; the library
//!   itself only depends on `core`.

#![no_std]

pub mod iter;
pub mod window;
