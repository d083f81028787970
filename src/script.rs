//! The declarative narration model: events, phases, and the run summary.
//!
//! The script is plain data consumed by the sequencer's rendering loop.
//! "What is said" lives here; "how it is rendered" lives in
//! [`crate::sequencer`].

use std::time::Duration;

use crate::color::Style;

/// What kind of line an event renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A line attributed to an actor: `{glyph} [{id}] {text}`.
    Speech,
    /// A narrated file change: `📄 {action}: {filename}`.
    FileChange,
    /// A narrated external tool action: `{label}: {message}`.
    ExternalAction {
        /// Tool label, e.g. "git".
        label: &'static str,
    },
    /// A named check with a pass/fail mark.
    CheckResult {
        /// Chooses the pass mark over the fail mark.
        passed: bool,
    },
    /// A free-form styled line.
    Raw {
        /// Style the whole line is painted in.
        style: Style,
    },
}

/// One unit of scripted output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationEvent {
    /// Actor attribution; required for `Speech`, absent otherwise.
    pub actor_id: Option<&'static str>,
    /// The line's text (for file changes, `"{action}: {filename}"`).
    pub text: String,
    /// How the line is rendered.
    pub kind: EventKind,
    /// Indentation in two-space units.
    pub indent: usize,
    /// Pacing delay after the line is written.
    pub delay: Duration,
}

impl NarrationEvent {
    /// An actor-attributed line.
    pub fn speech(actor_id: &'static str, text: impl Into<String>, delay: Duration) -> Self {
        Self {
            actor_id: Some(actor_id),
            text: text.into(),
            kind: EventKind::Speech,
            indent: 0,
            delay,
        }
    }

    /// A narrated file change.
    pub fn file_change(action: &str, filename: &str, delay: Duration) -> Self {
        Self {
            actor_id: None,
            text: format!("{}: {}", action, filename),
            kind: EventKind::FileChange,
            indent: 0,
            delay,
        }
    }

    /// A narrated external tool action.
    pub fn external(label: &'static str, message: impl Into<String>, delay: Duration) -> Self {
        Self {
            actor_id: None,
            text: message.into(),
            kind: EventKind::ExternalAction { label },
            indent: 0,
            delay,
        }
    }

    /// A check line with a pass/fail mark.
    pub fn check(name: impl Into<String>, passed: bool, delay: Duration) -> Self {
        Self {
            actor_id: None,
            text: name.into(),
            kind: EventKind::CheckResult { passed },
            indent: 0,
            delay,
        }
    }

    /// A free-form styled line.
    pub fn raw(style: Style, text: impl Into<String>, delay: Duration) -> Self {
        Self {
            actor_id: None,
            text: text.into(),
            kind: EventKind::Raw { style },
            indent: 0,
            delay,
        }
    }

    /// Set the indentation level.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// A named, ordered block of narration events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    /// Heading label, e.g. "Task Creation".
    pub title: &'static str,
    /// Events rendered strictly in order.
    pub events: Vec<NarrationEvent>,
}

impl Phase {
    pub fn new(title: &'static str, events: Vec<NarrationEvent>) -> Self {
        Self { title, events }
    }
}

/// Fixed counters and key points for the closing block.
///
/// Display data only; the numbers are part of the narration and are never
/// derived from the events actually rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub agents_involved: usize,
    pub files_changed: usize,
    pub external_actions: usize,
    pub conflicts: usize,
    /// Bulleted key points printed above the stats.
    pub highlights: Vec<String>,
}
