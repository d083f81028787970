//! Stigmergy: a scripted console demo of multi-agent coordination.
//!
//! Plays back a fixed narrative of four symbolic agents coordinating a
//! software task purely through shared artifacts (files and git commits),
//! never by messaging each other directly. Nothing real happens: the
//! "files", "commits", and "reviews" are inert strings. The engine here
//! is the phased narrative sequencer in [`sequencer`], which renders a
//! declarative script with human-paced delays.
//!
//! Layout:
//! - [`actor`] - the fixed registry of symbolic participants
//! - [`script`] - phases, narration events, and the run summary
//! - [`demo`] - the hard-coded demo script as data
//! - [`sequencer`] - the rendering loop
//! - [`clock`] - the pacing seam (real sleeps vs. no-op for tests)
//! - [`color`] - ANSI styling and emoji constants
//! - [`shutdown`] - Ctrl+C handling

pub mod actor;
pub mod clock;
pub mod color;
pub mod demo;
pub mod script;
pub mod sequencer;
pub mod shutdown;
