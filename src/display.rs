//! Rendering layer.  All terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state plus the HUD values.  No game logic is performed; this module
//! only translates state into terminal commands and maps the world onto the
//! terminal grid.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use glam::Vec2;

use swarm_survivor::entities::{Appearance, GameState, Phase};
use swarm_survivor::hud::Hud;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_XP: Color = Color::Cyan;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::Green;
const C_PLAYER_HIT: Color = Color::White;
const C_ENEMY: Color = Color::Red;
const C_PROJECTILE: Color = Color::Yellow;
const C_CRYSTAL: Color = Color::Cyan;
const C_POINTER: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

// ── Screen ↔ world mapping ────────────────────────────────────────────────────

/// The play field occupies rows 2..h-2 and columns 1..w-1, inside the border.
pub struct Viewport {
    pub width: u16,
    pub height: u16,
    world: Vec2,
}

impl Viewport {
    pub fn new(width: u16, height: u16, state: &GameState) -> Self {
        Self {
            width,
            height,
            world: Vec2::new(state.config.world_width, state.config.world_height),
        }
    }

    fn field(&self) -> (f32, f32) {
        (
            self.width.saturating_sub(2).max(1) as f32,
            self.height.saturating_sub(4).max(1) as f32,
        )
    }

    /// Cell for a world position, or `None` when it lies off the field.
    pub fn to_cell(&self, pos: Vec2) -> Option<(u16, u16)> {
        let (cols, rows) = self.field();
        let col = (pos.x / self.world.x * cols).floor();
        let row = (pos.y / self.world.y * rows).floor();
        if col < 0.0 || row < 0.0 || col >= cols || row >= rows {
            return None;
        }
        Some((col as u16 + 1, row as u16 + 2))
    }

    /// World position at the centre of a terminal cell (mouse pointer).
    pub fn to_world(&self, column: u16, row: u16) -> Vec2 {
        let (cols, rows) = self.field();
        let col = column.saturating_sub(1) as f32 + 0.5;
        let row = row.saturating_sub(2) as f32 + 0.5;
        Vec2::new(col / cols * self.world.x, row / rows * self.world.y)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    view: &Viewport,
    state: &GameState,
    hud: &Hud,
    pointer: Vec2,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;
    draw_hud(out, view, state, hud)?;

    draw_glyph(out, view, pointer, "+", C_POINTER)?;
    for (_, crystal) in state.crystals.iter() {
        draw_glyph(out, view, crystal.position, "◆", C_CRYSTAL)?;
    }
    for (_, enemy) in state.enemies.iter() {
        draw_glyph(out, view, enemy.position, "X", C_ENEMY)?;
    }
    for (_, projectile) in state.projectiles.iter() {
        draw_glyph(out, view, projectile.position, "•", C_PROJECTILE)?;
    }
    let player_color = match state.player.appearance {
        Appearance::Normal => C_PLAYER,
        Appearance::Flashing => C_PLAYER_HIT,
    };
    draw_glyph(out, view, state.player.position, "@", player_color)?;

    draw_controls_hint(out, view)?;

    if !hud.prompt.is_empty() {
        draw_upgrade_prompt(out, view, hud)?;
    }
    if state.phase == Phase::GameOver {
        draw_game_over(out, view, state, hud)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.width as usize;
    let h = view.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1: top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2: bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    view: &Viewport,
    state: &GameState,
    hud: &Hud,
) -> std::io::Result<()> {
    // Score and XP, left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&hud.score_text))?;
    out.queue(Print("   "))?;
    out.queue(style::SetForegroundColor(C_HUD_XP))?;
    out.queue(Print(&hud.experience_text))?;

    // Level, centre
    let level_str = format!("[ LV {} ]", state.progression.level);
    let lx = (view.width / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(&level_str))?;

    // Lives, right.  Marker 0 is drawn rightmost.
    let hearts: String = hud
        .life_indicators
        .iter()
        .rev()
        .map(|&shown| if shown { '♥' } else { ' ' })
        .collect();
    let rx = view
        .width
        .saturating_sub(hearts.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&hearts))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_glyph<W: Write>(
    out: &mut W,
    view: &Viewport,
    pos: Vec2,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    if let Some((col, row)) = view.to_cell(pos) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("WASD / arrows : Move   Mouse : Aim   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    view: &Viewport,
    lines: &[(String, Color)],
) -> std::io::Result<()> {
    let cx = view.width / 2;
    let start_row = (view.height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }
    Ok(())
}

fn draw_upgrade_prompt<W: Write>(out: &mut W, view: &Viewport, hud: &Hud) -> std::io::Result<()> {
    let mut lines = vec![("╔═══ LEVEL UP ═══╗".to_string(), Color::Cyan)];
    for (i, choice) in hud.prompt.iter().enumerate() {
        lines.push((format!("[{}] {}", i + 1, choice.label), Color::White));
    }
    draw_centered(out, view, &lines)
}

fn draw_game_over<W: Write>(
    out: &mut W,
    view: &Viewport,
    state: &GameState,
    hud: &Hud,
) -> std::io::Result<()> {
    let banner = hud.banner.clone().unwrap_or_else(|| "GAME OVER".to_string());
    let lines = [
        ("╔══════════════════╗".to_string(), Color::Red),
        (format!("║{:^18}║", banner), Color::Red),
        ("╚══════════════════╝".to_string(), Color::Red),
        (format!("Final Score: {}", state.score), Color::Yellow),
        ("R - Play Again  Q - Quit".to_string(), Color::White),
    ];
    draw_centered(out, view, &lines)
}
