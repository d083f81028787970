//! Symbolic actors referenced by the narration script.
//!
//! Actors carry purely cosmetic identity: a display style, a glyph, and a
//! role label. The registry is built once at startup and never changes
//! during a run.

use crate::color::{emoji, Style};

/// A symbolic participant in the narrated workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    /// Unique identifier, as it appears in attributed lines.
    pub id: &'static str,
    /// Color token used when rendering the actor's attribution tag.
    pub style: Style,
    /// Short icon shown before the id.
    pub glyph: &'static str,
    /// Free-text role label.
    pub role: &'static str,
}

/// An immutable, ordered registry of actors.
#[derive(Debug, Clone)]
pub struct ActorRegistry {
    actors: Vec<Actor>,
}

impl ActorRegistry {
    /// Build a registry from a fixed actor list.
    pub fn new(actors: Vec<Actor>) -> Self {
        Self { actors }
    }

    /// The four actors of the coordination demo.
    pub fn standard() -> Self {
        Self::new(vec![
            Actor {
                id: "THINKER",
                style: Style::BrightCyan,
                glyph: emoji::BRAIN,
                role: "Architect",
            },
            Actor {
                id: "BUILDER-UI",
                style: Style::BrightGreen,
                glyph: emoji::PALETTE,
                role: "Frontend",
            },
            Actor {
                id: "BUILDER-DDD",
                style: Style::BrightYellow,
                glyph: emoji::GEAR,
                role: "Backend",
            },
            Actor {
                id: "GUARDIAN",
                style: Style::BrightMagenta,
                glyph: emoji::SHIELD,
                role: "Reviewer",
            },
        ])
    }

    /// Look up an actor by id.
    pub fn get(&self, id: &str) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    /// Iterate actors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    /// Number of registered actors.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
