//! The hard-coded demo script.
//!
//! Five phases narrating one task's life: creation, claim, implementation,
//! review, and knowledge capture. Delays are tuned for reading pace; they
//! carry no meaning beyond pacing.

use std::time::Duration;

use once_cell::sync::Lazy;

use crate::actor::ActorRegistry;
use crate::color::{emoji, Style};
use crate::script::{NarrationEvent, Phase, RunSummary};

/// The demo's actor registry, built once at first use.
pub static ACTORS: Lazy<ActorRegistry> = Lazy::new(ActorRegistry::standard);

const THINKER: &str = "THINKER";
const BUILDER_DDD: &str = "BUILDER-DDD";
const GUARDIAN: &str = "GUARDIAN";

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// The full phase sequence, in playback order.
pub fn script() -> Vec<Phase> {
    vec![
        task_creation(),
        task_claim(),
        implementation(),
        review(),
        knowledge_capture(),
    ]
}

fn task_creation() -> Phase {
    Phase::new(
        "Task Creation",
        vec![
            NarrationEvent::speech(THINKER, "Analyzing project requirements...", ms(1100)),
            NarrationEvent::speech(THINKER, "Creating new task in queue.json", ms(300)),
            NarrationEvent::file_change("created task #42", "tasks/queue.json", ms(200)),
            NarrationEvent::external(
                "git",
                "commit: 'Add task: Implement user authentication'",
                ms(200),
            ),
            NarrationEvent::external("git", "push origin main ✓", ms(700)),
        ],
    )
}

fn task_claim() -> Phase {
    Phase::new(
        "Task Claim (Stigmergy)",
        vec![
            NarrationEvent::speech(BUILDER_DDD, "Scanning queue.json for available tasks...", ms(800)),
            NarrationEvent::speech(BUILDER_DDD, "Found task #42 matching my skills", ms(300)),
            NarrationEvent::speech(BUILDER_DDD, "Claiming task via Git atomic operation...", ms(300)),
            NarrationEvent::file_change("removed task #42", "tasks/queue.json", ms(200)),
            NarrationEvent::file_change(
                "added task #42 (owner: BUILDER-DDD)",
                "tasks/active.json",
                ms(200),
            ),
            NarrationEvent::external("git", "commit: 'Claim task #42'", ms(200)),
            NarrationEvent::external("git", "push origin main ✓", ms(200)),
            NarrationEvent::raw(
                Style::BrightGreen,
                "✓ Task claimed successfully (no conflicts)",
                ms(500),
            ),
        ],
    )
}

fn implementation() -> Phase {
    let mut events = vec![NarrationEvent::speech(
        BUILDER_DDD,
        "Implementing user authentication...",
        ms(300),
    )];

    let files = [
        "src/auth/AuthService.ts",
        "src/auth/JWTProvider.ts",
        "src/middleware/authMiddleware.ts",
        "tests/auth.test.ts",
    ];
    for file in files {
        events.push(NarrationEvent::file_change("created", file, ms(600)));
    }

    events.extend([
        NarrationEvent::speech(BUILDER_DDD, "Running local tests...", ms(900)),
        NarrationEvent::raw(Style::BrightGreen, "✓ All tests passed (12/12)", ms(200)),
        NarrationEvent::speech(BUILDER_DDD, "Submitting for review...", ms(300)),
        NarrationEvent::file_change("created", "reviews/pending/task-42.json", ms(200)),
        NarrationEvent::external("git", "commit: 'Implement auth + submit for review'", ms(200)),
        NarrationEvent::external("git", "push origin main ✓", ms(700)),
    ]);

    Phase::new("Implementation", events)
}

fn review() -> Phase {
    Phase::new(
        "Code Review",
        vec![
            NarrationEvent::speech(GUARDIAN, "Detected new review request...", ms(300)),
            NarrationEvent::speech(GUARDIAN, "Analyzing code quality...", ms(1100)),
            NarrationEvent::check("Type safety", true, ms(300)),
            NarrationEvent::check("Security patterns", true, ms(300)),
            NarrationEvent::check("Test coverage", true, ms(300)),
            NarrationEvent::check("Documentation", true, ms(300)),
            NarrationEvent::speech(GUARDIAN, "All checks passed! Approving...", ms(300)),
            NarrationEvent::file_change("moved to approved/", "reviews/pending/task-42.json", ms(200)),
            NarrationEvent::file_change("marked task #42 as completed", "tasks/active.json", ms(200)),
            NarrationEvent::external("git", "commit: 'Approve task #42'", ms(200)),
            NarrationEvent::external("git", "push origin main ✓", ms(700)),
        ],
    )
}

fn knowledge_capture() -> Phase {
    Phase::new(
        "Knowledge Capture",
        vec![
            NarrationEvent::speech(THINKER, "Extracting patterns from completed task...", ms(800)),
            NarrationEvent::file_change("added: JWT Auth Pattern", "knowledge/patterns.jsonl", ms(200)),
            NarrationEvent::speech(THINKER, "Pattern saved for future reference", ms(300)),
            NarrationEvent::raw(
                Style::BrightCyan,
                format!("{} System learned: JWT authentication pattern", emoji::BULB),
                ms(500),
            ),
        ],
    )
}

/// The fixed closing block. The counters are narration, not tallies of the
/// events above.
pub fn summary() -> RunSummary {
    RunSummary {
        agents_involved: 3,
        files_changed: 7,
        external_actions: 5,
        conflicts: 0,
        highlights: vec![
            "No direct agent communication".to_string(),
            "Coordination via shared files (Git)".to_string(),
            "Atomic operations prevent conflicts".to_string(),
            "Knowledge captured for future tasks".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::EventKind;

    #[test]
    fn test_script_has_five_phases_in_order() {
        let phases = script();
        let titles: Vec<&str> = phases.iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            vec![
                "Task Creation",
                "Task Claim (Stigmergy)",
                "Implementation",
                "Code Review",
                "Knowledge Capture",
            ]
        );
    }

    #[test]
    fn test_every_speech_actor_is_registered() {
        for phase in script() {
            for event in &phase.events {
                if event.kind == EventKind::Speech {
                    let id = event.actor_id.expect("speech must carry an actor");
                    assert!(
                        ACTORS.get(id).is_some(),
                        "unregistered actor {:?} in phase {:?}",
                        id,
                        phase.title
                    );
                }
            }
        }
    }

    #[test]
    fn test_non_speech_events_unattributed() {
        for phase in script() {
            for event in &phase.events {
                if event.kind != EventKind::Speech {
                    assert!(
                        event.actor_id.is_none(),
                        "non-speech event with actor in {:?}",
                        phase.title
                    );
                }
            }
        }
    }

    #[test]
    fn test_no_phase_is_empty() {
        for phase in script() {
            assert!(!phase.events.is_empty(), "empty phase {:?}", phase.title);
        }
    }

    #[test]
    fn test_review_checks_all_pass() {
        let review = &script()[3];
        let checks: Vec<bool> = review
            .events
            .iter()
            .filter_map(|e| match e.kind {
                EventKind::CheckResult { passed } => Some(passed),
                _ => None,
            })
            .collect();
        assert_eq!(checks, vec![true, true, true, true]);
    }

    #[test]
    fn test_summary_is_fixed() {
        let s = summary();
        assert_eq!(s.agents_involved, 3);
        assert_eq!(s.files_changed, 7);
        assert_eq!(s.external_actions, 5);
        assert_eq!(s.conflicts, 0);
        assert_eq!(s.highlights.len(), 4);
    }

    #[test]
    fn test_delays_within_reading_pace() {
        // Nothing in the script should stall longer than a couple seconds.
        for phase in script() {
            for event in &phase.events {
                assert!(
                    event.delay <= Duration::from_secs(2),
                    "over-long delay in {:?}: {:?}",
                    phase.title,
                    event.delay
                );
            }
        }
    }
}
