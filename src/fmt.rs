//! Human-friendly CLI output formatters.
//!
//! Each `fmt_*` function formats one tool's output for terminal display.
//! When `color` is true, ANSI escape codes are emitted via `owo_colors`.

use crate::tools::{CreateOutput, CurrentOutput, DeleteOutput, ListOutput, SessionEffect};
use owo_colors::OwoColorize;
use std::io::{self, Write};

// ── list ────────────────────────────────────────────────────────────────────

pub fn fmt_list(w: &mut impl Write, out: &ListOutput, color: bool) -> io::Result<()> {
    if let Some(pinned) = &out.pinned {
        if color {
            writeln!(w, "{} {}", pinned.bold(), "(pinned)".dimmed())?;
        } else {
            writeln!(w, "{pinned} (pinned)")?;
        }
        return Ok(());
    }

    for name in &out.projects {
        let marker = if *name == out.current { "*" } else { " " };
        if color && *name == out.current {
            writeln!(w, "{} {}", marker.green(), name.bold())?;
        } else {
            writeln!(w, "{marker} {name}")?;
        }
    }

    Ok(())
}

// ── current / info ──────────────────────────────────────────────────────────

pub fn fmt_stats(w: &mut impl Write, out: &CurrentOutput, color: bool) -> io::Result<()> {
    let stats = &out.statistics;
    if color {
        writeln!(w, "{}", out.project.bold())?;
        writeln!(w, "  {:<14} {}", "Entities:".dimmed(), stats.total_entities)?;
        writeln!(w, "  {:<14} {}", "Observations:".dimmed(), stats.total_observations)?;
        writeln!(w, "  {:<14} {}", "Relations:".dimmed(), stats.total_relations)?;
    } else {
        writeln!(w, "{}", out.project)?;
        writeln!(w, "  {:<14} {}", "Entities:", stats.total_entities)?;
        writeln!(w, "  {:<14} {}", "Observations:", stats.total_observations)?;
        writeln!(w, "  {:<14} {}", "Relations:", stats.total_relations)?;
    }
    Ok(())
}

// ── create ──────────────────────────────────────────────────────────────────

pub fn fmt_create(w: &mut impl Write, out: &CreateOutput, color: bool) -> io::Result<()> {
    if color {
        writeln!(w, "{} {}", "✓".green(), out.message)?;
    } else {
        writeln!(w, "✓ {}", out.message)?;
    }

    if let Some(project) = &out.new_project {
        let path = project.path.as_deref().unwrap_or("-");
        if color {
            writeln!(w, "  {}  {}", project.name.bold(), path.dimmed())?;
        } else {
            writeln!(w, "  {}  {}", project.name, path)?;
        }
    }
    if out.set_default {
        writeln!(w, "  set as default project")?;
    }

    Ok(())
}

// ── delete ──────────────────────────────────────────────────────────────────

pub fn fmt_delete(w: &mut impl Write, out: &DeleteOutput, color: bool) -> io::Result<()> {
    if color {
        writeln!(w, "{} {}", "✓".green(), out.message)?;
    } else {
        writeln!(w, "✓ {}", out.message)?;
    }

    if let Some(path) = out.old_project.as_ref().and_then(|p| p.path.as_deref()) {
        writeln!(w, "  files kept at {path}")?;
    }

    if out.session == SessionEffect::Stranded {
        if color {
            writeln!(w, "{}", "warning: the default project was deleted".yellow())?;
        } else {
            writeln!(w, "warning: the default project was deleted")?;
        }
    }

    Ok(())
}
