mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseEvent, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use glam::Vec2;
use tracing::info;
use tracing_subscriber::EnvFilter;

use swarm_survivor::compute::{choose_upgrade_at, init_state, tick};
use swarm_survivor::config::SimConfig;
use swarm_survivor::entities::{GameState, Phase};
use swarm_survivor::hud::{DisplaySink, Hud};
use swarm_survivor::input::InputState;
use swarm_survivor::random::{RandomSource, RngSource};

use display::Viewport;

#[derive(Parser)]
#[command(name = "swarm_survivor")]
#[command(about = "Top-down survival shooter in the terminal")]
struct Args {
    /// JSON file overriding gameplay constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Write tracing output here (the terminal is busy drawing the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Frames per second
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

// ── Simultaneous-input constants ──────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (≈133 ms at
/// 30 FPS) is always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|key| {
        key_frame
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    })
}

fn sample_input(key_frame: &HashMap<KeyCode, u64>, frame: u64, pointer: Vec2) -> InputState {
    InputState {
        up: is_held(key_frame, &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')], frame),
        down: is_held(key_frame, &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')], frame),
        left: is_held(key_frame, &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')], frame),
        right: is_held(key_frame, &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')], frame),
        pointer,
    }
}

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    best_score: u32,
) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let lines: Vec<(String, Color)> = vec![
        ("★  SWARM  SURVIVOR  ★".to_string(), Color::Cyan),
        (format!("Best this session: {best_score}"), Color::Yellow),
        (String::new(), Color::White),
        ("Enter / Space : Start".to_string(), Color::White),
        ("WASD / arrows : Move    Mouse : Aim".to_string(), Color::DarkGrey),
        ("1 2 3 : Pick an upgrade on level up".to_string(), Color::DarkGrey),
        ("Q : Quit".to_string(), Color::DarkGrey),
    ];
    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = cy.saturating_sub(4) + i as u16;
        out.queue(cursor::MoveTo(
            cx.saturating_sub(msg.chars().count() as u16 / 2),
            row,
        ))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. })) => match code {
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(MenuResult::Start),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            },
            Ok(_) => {}
            Err(_) => return Ok(MenuResult::Quit),
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` to quit the program, `false` to go back to the menu.
///
/// Input model: a `key_frame` map records the frame of the last press/repeat
/// event for every key, and each frame the keys still "fresh" become the
/// held directions for the tick.  Mouse movement updates the pointer the
/// player aims at; without a mouse the pointer stays where it was.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rng: &mut impl RandomSource,
    rx: &mpsc::Receiver<Event>,
    frame_time: Duration,
) -> std::io::Result<bool> {
    let mut hud = Hud::new(state);
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut pointer = Vec2::new(state.config.world_width, state.player.position.y);
    let mut frame: u64 = 0;
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let (width, height) = terminal::size()?;
        let view = Viewport::new(width, height, state);

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                    KeyEventKind::Press => {
                        key_frame.insert(code, frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(true);
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(true);
                            }
                            KeyCode::Char('r') | KeyCode::Char('R')
                                if state.phase == Phase::GameOver =>
                            {
                                return Ok(false);
                            }
                            KeyCode::Char(digit @ '1'..='9')
                                if matches!(state.phase, Phase::LevelingUp { .. }) =>
                            {
                                let index = digit as usize - '1' as usize;
                                if choose_upgrade_at(state, index).is_ok() {
                                    // Keys held through the pause must not leak into play.
                                    key_frame.clear();
                                    last_tick = Instant::now();
                                }
                            }
                            _ => {}
                        }
                    }
                    KeyEventKind::Repeat => {
                        key_frame.insert(code, frame);
                    }
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                    }
                },
                Event::Mouse(MouseEvent { column, row, .. }) => {
                    pointer = view.to_world(column, row);
                }
                _ => {}
            }
        }

        let delta = last_tick.elapsed().as_millis() as u64;
        last_tick = Instant::now();
        let input = sample_input(&key_frame, frame, pointer);
        tick(state, &input, delta, rng);

        let events = state.drain_events();
        hud.handle_all(&events);

        display::render(out, &view, state, &hud, pointer)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(path: Option<&PathBuf>) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let mut rng = match args.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let frame_time = Duration::from_millis(1000 / u64::from(args.fps.max(1)));

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped, program exiting
            }
        }
    });

    let result = run(&mut out, &rx, &config, &mut rng, frame_time);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &SimConfig,
    rng: &mut impl RandomSource,
    frame_time: Duration,
) -> anyhow::Result<()> {
    let mut best_score = 0;

    loop {
        match show_menu(out, rx, best_score)? {
            MenuResult::Quit => break,
            MenuResult::Start => {
                let mut state = init_state(config.clone());
                info!("game started");
                let quit = game_loop(out, &mut state, rng, rx, frame_time)?;
                best_score = best_score.max(state.score);

                if quit {
                    break;
                }
                // Otherwise loop back to the menu
            }
        }
    }
    Ok(())
}
