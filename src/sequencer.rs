//! The phased narrative sequencer.
//!
//! Renders a fixed script of phases to a writable sink, pacing output
//! through a [`Clock`] so the animation reads like live activity. The
//! rendering rules live here; the script itself is data (see
//! [`crate::demo`]). Write failures propagate unhandled: there is nothing
//! to recover for a demonstration.

use std::io::{self, Write};
use std::time::Duration;

use crate::actor::ActorRegistry;
use crate::clock::Clock;
use crate::color::{self, emoji, Style};
use crate::script::{EventKind, NarrationEvent, Phase, RunSummary};
use crate::shutdown;

const BANNER_WIDTH: usize = 60;
const RULE_WIDTH: usize = 40;
const HEADER_PAUSE: Duration = Duration::from_secs(1);
const PHASE_HEADING_PAUSE: Duration = Duration::from_millis(500);

const PASS_MARK: &str = "✓";
const FAIL_MARK: &str = "✗";

/// Renders the script in order: header, each phase, then the summary.
///
/// Holds only immutable script data; re-running replays the whole script
/// from the top.
pub struct Sequencer<'a> {
    registry: &'a ActorRegistry,
    phases: Vec<Phase>,
    summary: RunSummary,
    color: bool,
}

impl<'a> Sequencer<'a> {
    pub fn new(registry: &'a ActorRegistry, phases: Vec<Phase>, summary: RunSummary) -> Self {
        Self {
            registry,
            phases,
            summary,
            color: true,
        }
    }

    /// Enable or disable ANSI styling (disable when not writing to a TTY).
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Play the full script once.
    ///
    /// Returns early (still `Ok`) if an interrupt was requested; output
    /// written so far remains valid since the check sits at line
    /// boundaries.
    pub fn run<W: Write>(&self, out: &mut W, clock: &dyn Clock) -> io::Result<()> {
        self.render_header(out, clock)?;
        for (idx, phase) in self.phases.iter().enumerate() {
            if shutdown::requested() {
                return Ok(());
            }
            self.render_phase(out, clock, idx + 1, phase)?;
        }
        if shutdown::requested() {
            return Ok(());
        }
        self.render_summary(out)
    }

    /// Write the fixed opening banner, then pause.
    pub fn render_header<W: Write>(&self, out: &mut W, clock: &dyn Clock) -> io::Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(out)?;
        writeln!(out, "{}", self.paint(Style::Bold, &rule))?;
        writeln!(
            out,
            "{}",
            self.paint_bold(
                Style::BrightCyan,
                &format!("   {} AUTONOMOUS AGENTS - Stigmergy Coordination Demo", emoji::ROBOT)
            )
        )?;
        writeln!(out, "{}", self.paint(Style::Bold, &rule))?;
        writeln!(out)?;
        writeln!(out, "{}", self.paint(Style::Bold, "Starting simulation..."))?;
        writeln!(
            out,
            "Watch how {} AI agents coordinate without direct communication.",
            self.registry.len()
        )?;
        writeln!(
            out,
            "{}",
            self.paint(Style::Dim, &format!("Session started at {}", clock.timestamp()))
        )?;
        writeln!(out)?;
        out.flush()?;
        clock.pause(HEADER_PAUSE);
        Ok(())
    }

    /// Write a phase heading, pause, then render its events in order.
    pub fn render_phase<W: Write>(
        &self,
        out: &mut W,
        clock: &dyn Clock,
        number: usize,
        phase: &Phase,
    ) -> io::Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            self.paint(Style::Bold, &format!("▶ Phase {}: {}", number, phase.title))
        )?;
        writeln!(out, "  {}", "-".repeat(RULE_WIDTH))?;
        out.flush()?;
        clock.pause(PHASE_HEADING_PAUSE);

        for event in &phase.events {
            if shutdown::requested() {
                return Ok(());
            }
            self.render_event(out, clock, event)?;
        }
        Ok(())
    }

    /// Write one event, then hand its delay to the clock.
    pub fn render_event<W: Write>(
        &self,
        out: &mut W,
        clock: &dyn Clock,
        event: &NarrationEvent,
    ) -> io::Result<()> {
        let indent = "  ".repeat(event.indent);
        match &event.kind {
            EventKind::Speech => {
                let (glyph, id, style) = match event.actor_id.and_then(|id| self.registry.get(id))
                {
                    Some(actor) => (actor.glyph, actor.id, actor.style),
                    // Unattributed speech is a script bug; render it
                    // legibly rather than panic mid-animation.
                    None => ("?", event.actor_id.unwrap_or("?"), Style::Plain),
                };
                let tag = format!("{} [{}]", glyph, id);
                writeln!(out, "{}{} {}", indent, self.paint(style, &tag), event.text)?;
            }
            EventKind::FileChange => {
                let line = format!("{} {}", emoji::PAGE, event.text);
                writeln!(out, "{}   {}", indent, self.paint(Style::BrightBlue, &line))?;
            }
            EventKind::ExternalAction { label } => {
                let line = format!("{}: {}", label, event.text);
                writeln!(out, "{}   {}", indent, self.paint(Style::BrightGreen, &line))?;
            }
            EventKind::CheckResult { passed } => {
                let mark = if *passed {
                    self.paint(Style::BrightGreen, PASS_MARK)
                } else {
                    self.paint(Style::BrightRed, FAIL_MARK)
                };
                writeln!(out, "{}   {} {}", indent, mark, event.text)?;
            }
            EventKind::Raw { style } => {
                writeln!(out, "{}   {}", indent, self.paint(*style, &event.text))?;
            }
        }
        out.flush()?;
        clock.pause(event.delay);
        Ok(())
    }

    /// Write the fixed closing block.
    pub fn render_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(out)?;
        writeln!(out, "{}", self.paint(Style::Bold, &rule))?;
        writeln!(
            out,
            "{}",
            self.paint_bold(Style::BrightGreen, &format!("   {} TASK COMPLETED SUCCESSFULLY", emoji::CHECK))
        )?;
        writeln!(out, "{}", self.paint(Style::Bold, &rule))?;
        writeln!(out)?;
        writeln!(out, "   {}", self.paint(Style::BrightCyan, "Key Points:"))?;
        for point in &self.summary.highlights {
            writeln!(out, "   • {}", point)?;
        }
        writeln!(out)?;
        writeln!(out, "   {}", self.paint(Style::BrightYellow, "Stats:"))?;
        writeln!(out, "   • Agents involved: {}", self.summary.agents_involved)?;
        writeln!(out, "   • Files changed: {}", self.summary.files_changed)?;
        writeln!(out, "   • Git operations: {}", self.summary.external_actions)?;
        writeln!(out, "   • Conflicts: {}", self.summary.conflicts)?;
        writeln!(out)?;
        writeln!(out, "{}", self.paint(Style::Bold, "Demo complete!"))?;
        out.flush()
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.color {
            color::paint(style, text)
        } else {
            text.to_string()
        }
    }

    fn paint_bold(&self, style: Style, text: &str) -> String {
        if self.color {
            color::paint_bold(style, text)
        } else {
            text.to_string()
        }
    }
}
