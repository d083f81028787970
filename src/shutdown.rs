//! Graceful interrupt handling for the animation.
//!
//! A first Ctrl+C sets a flag the sequencer checks between events, so the
//! run stops at a line boundary and already-written output stays valid.
//! Repeated presses force-quit.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Global flag indicating shutdown has been requested.
static SHUTDOWN_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Counter for how many times Ctrl+C was pressed.
static INTERRUPT_COUNT: AtomicUsize = AtomicUsize::new(0);

/// Maximum number of interrupts before force-quitting.
const MAX_INTERRUPTS: usize = 3;

/// Register the Ctrl+C handler. Call once at program startup.
pub fn register_handler() -> Result<(), String> {
    ctrlc::set_handler(move || {
        let count = INTERRUPT_COUNT.fetch_add(1, Ordering::SeqCst) + 1;

        if count >= MAX_INTERRUPTS {
            eprintln!("\nForce quit (received {} interrupts)", count);
            std::process::exit(130);
        }

        if count == 1 {
            eprintln!();
            eprintln!("Interrupt received. Stopping after the current line...");
            eprintln!(
                "(Press Ctrl+C {} more time(s) to force quit)",
                MAX_INTERRUPTS - count
            );
            SHUTDOWN_REQUESTED.store(true, Ordering::SeqCst);
        } else {
            eprintln!(
                "(Press Ctrl+C {} more time(s) to force quit)",
                MAX_INTERRUPTS - count
            );
        }
    })
    .map_err(|e| format!("failed to register Ctrl+C handler: {}", e))
}

/// Check if shutdown has been requested.
pub fn requested() -> bool {
    SHUTDOWN_REQUESTED.load(Ordering::SeqCst)
}

/// Programmatically request shutdown. Useful for testing.
pub fn request() {
    SHUTDOWN_REQUESTED.store(true, Ordering::SeqCst);
}

/// Reset the shutdown state. Primarily for testing.
pub fn reset() {
    SHUTDOWN_REQUESTED.store(false, Ordering::SeqCst);
    INTERRUPT_COUNT.store(0, Ordering::SeqCst);
}

/// Get the number of interrupts received.
pub fn interrupt_count() -> usize {
    INTERRUPT_COUNT.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use crate::actor::ActorRegistry;
    use crate::clock::NullClock;
    use crate::color::Style;
    use crate::script::{NarrationEvent, Phase, RunSummary};
    use crate::sequencer::Sequencer;

    // All tests touching the global flag serialize through this lock.
    static FLAG_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_shutdown_request_and_check() {
        let _guard = FLAG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        reset();
        assert!(!requested());

        request();
        assert!(requested());

        reset();
        assert!(!requested());
    }

    #[test]
    fn test_interrupt_count_resets() {
        let _guard = FLAG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        reset();
        assert_eq!(interrupt_count(), 0);

        INTERRUPT_COUNT.store(2, Ordering::SeqCst);
        assert_eq!(interrupt_count(), 2);

        reset();
        assert_eq!(interrupt_count(), 0);
    }

    #[test]
    fn test_interrupted_run_stops_before_next_phase() {
        let _guard = FLAG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        reset();

        let registry = ActorRegistry::standard();
        let phases = vec![
            Phase::new(
                "First",
                vec![NarrationEvent::raw(Style::Plain, "one", Duration::ZERO)],
            ),
            Phase::new(
                "Second",
                vec![NarrationEvent::raw(Style::Plain, "two", Duration::ZERO)],
            ),
        ];
        let summary = RunSummary {
            agents_involved: 0,
            files_changed: 0,
            external_actions: 0,
            conflicts: 0,
            highlights: vec![],
        };
        let sequencer = Sequencer::new(&registry, phases, summary).with_color(false);

        request();
        let mut out: Vec<u8> = Vec::new();
        sequencer
            .run(&mut out, &NullClock)
            .expect("interrupted run still returns Ok");
        reset();

        let rendered = String::from_utf8(out).unwrap();
        // Header was written, but no phase content and no summary.
        assert!(rendered.contains("Stigmergy Coordination Demo"));
        assert!(!rendered.contains("Phase 1: First"));
        assert!(!rendered.contains("TASK COMPLETED"));
    }
}
