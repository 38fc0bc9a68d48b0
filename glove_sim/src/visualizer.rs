//! Windowed visualizer using `minifb`.
//!
//! Layout:
//!
//! ```text
//! ┌──────────────────┬──────────────────────────────┐
//! │                  │  SIGNAL GLOVE                │
//! │   simulated      │  detected letter, confidence │
//! │   phone screen   │  8 channel rows with bars    │
//! │   (300 × 500)    │  transcript                  │
//! │   + hand pose    │  status line                 │
//! │                  │  key legend                  │
//! └──────────────────┴──────────────────────────────┘
//! ```
//!
//! The window owns the pixel buffers; the phone surface is rendered by the
//! pure renderers and blitted in, so the drawing path stays testable
//! without a window.

use minifb::{Key, KeyRepeat, Window, WindowOptions};
use std::sync::mpsc::Sender;

use sign_sensor::Letter;

use crate::app::{AppState, Channel};
use crate::canvas::{Canvas, PixelCanvas};
use crate::hand::draw_hand;
use crate::input::{SimInput, SimKey};
use crate::phone::{draw_phone_screen, SCREEN_H, SCREEN_W};

// ════════════════════════════════════════════════════════════════════════════
// Layout constants
// ════════════════════════════════════════════════════════════════════════════

pub const WIN_W: usize = 640;
pub const WIN_H: usize = 520;

const PHONE_X: i32 = 10;
const PHONE_Y: i32 = 10;
const PANEL_X: i32 = 330;

const BG:       u32 = 0xFF1A_1A2E;
const PANEL_BG: u32 = 0xFF16_213E;
const CARD:     u32 = 0xFF0F_3460;
const GOLD:     u32 = 0xFFFF_D700;
const TEXT:     u32 = 0xFFEE_EEEE;
const DIM:      u32 = 0xFF88_8888;
const FLEX_BAR: u32 = 0xFFAA_DDFF;
const TURN_BAR: u32 = 0xFFFF_BBAA;

// ════════════════════════════════════════════════════════════════════════════
// Visualizer
// ════════════════════════════════════════════════════════════════════════════

pub struct Visualizer {
    window: Window,
    buf:    PixelCanvas,
    phone:  PixelCanvas,
    sim_tx: Sender<SimInput>,
}

impl Visualizer {
    pub fn new(sim_tx: Sender<SimInput>) -> Result<Self, String> {
        let mut window = Window::new(
            "Signal — Glove Interpreter Simulator",
            WIN_W, WIN_H,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        ).map_err(|e| e.to_string())?;

        window.limit_update_rate(Some(std::time::Duration::from_millis(16))); // ~60fps

        Ok(Visualizer {
            window,
            buf:   PixelCanvas::new(WIN_W, WIN_H, BG),
            phone: PixelCanvas::new(SCREEN_W, SCREEN_H, 0xFF00_0000),
            sim_tx,
        })
    }

    /// Returns false when the window should close.
    pub fn is_open(&self) -> bool { self.window.is_open() }

    /// Poll keyboard input and translate to SimInput events.
    pub fn poll_input(&mut self) -> bool {
        if !self.window.is_open() { return false; }

        let shift = self.window.is_key_down(Key::LeftShift)
                 || self.window.is_key_down(Key::RightShift);

        // Keys that trigger on first press only
        let one_shot = |k: Key| self.window.is_key_pressed(k, KeyRepeat::No);
        // Keys that repeat while held
        let held     = |k: Key| self.window.is_key_pressed(k, KeyRepeat::Yes);

        if one_shot(Key::Escape) {
            let _ = self.sim_tx.send(SimInput::KeyDown(SimKey::Quit));
            return false;
        }
        if one_shot(Key::Backspace) {
            let _ = self.sim_tx.send(SimInput::KeyDown(SimKey::Reset));
        }
        if one_shot(Key::Tab) {
            let key = if shift { SimKey::ChannelPrev } else { SimKey::ChannelNext };
            let _ = self.sim_tx.send(SimInput::KeyDown(key));
        }
        if held(Key::Up) {
            let key = if shift { SimKey::StepUpFast } else { SimKey::StepUp };
            let _ = self.sim_tx.send(SimInput::KeyDown(key));
        }
        if held(Key::Down) {
            let key = if shift { SimKey::StepDownFast } else { SimKey::StepDown };
            let _ = self.sim_tx.send(SimInput::KeyDown(key));
        }
        for (key, letter) in letter_keys() {
            if one_shot(key) {
                let _ = self.sim_tx.send(SimInput::KeyDown(SimKey::Preset(letter)));
            }
        }

        true
    }

    /// Render one frame: phone screen + hand into the phone surface, then
    /// the surrounding panel.
    pub fn render(&mut self, app: &AppState, clock: &str) {
        draw_phone_screen(&mut self.phone, clock, app.classification(), app.transcript());
        draw_hand(&mut self.phone, app.frame());

        self.buf.clear(BG);
        self.buf.stroke_rect(PHONE_X - 2, PHONE_Y - 2,
                             SCREEN_W as i32 + 4, SCREEN_H as i32 + 4, CARD);
        self.buf.blit(&self.phone, PHONE_X, PHONE_Y);
        draw_panel(&mut self.buf, app);

        self.window.update_with_buffer(self.buf.pixels(), WIN_W, WIN_H).ok();
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Panel drawing
// ════════════════════════════════════════════════════════════════════════════

fn draw_panel(buf: &mut PixelCanvas, app: &AppState) {
    buf.fill_rect(PANEL_X - 10, 0, (WIN_W as i32) - PANEL_X + 10, WIN_H as i32, PANEL_BG);

    buf.fill_text("SIGNAL GLOVE", PANEL_X, 12, 2, GOLD);

    // ── Detection card ────────────────────────────────────────────────────
    buf.fill_rect(PANEL_X, 40, 300, 56, CARD);
    buf.fill_text("DETECTED", PANEL_X + 8, 48, 1, DIM);
    let c = app.classification();
    match c.letter {
        Some(letter) => {
            let mut glyph = [0u8; 4];
            buf.fill_text(letter.as_char().encode_utf8(&mut glyph),
                          PANEL_X + 8, 58, 4, TEXT);
        }
        None => buf.fill_text("-", PANEL_X + 8, 58, 4, DIM),
    }
    buf.fill_text("CONFIDENCE", PANEL_X + 160, 48, 1, DIM);
    buf.fill_text(&format!("{}%", c.confidence_pct()), PANEL_X + 160, 60, 2, TEXT);

    // ── Channel rows ──────────────────────────────────────────────────────
    buf.fill_text("CHANNELS", PANEL_X, 108, 1, DIM);
    for (i, channel) in Channel::all().into_iter().enumerate() {
        let y = 122 + i as i32 * 24;
        if channel == app.selected_channel() {
            buf.fill_text(">", PANEL_X, y, 1, GOLD);
        }
        buf.fill_text(&channel.label(), PANEL_X + 10, y, 1, TEXT);
        buf.fill_text(&format!("{}", app.channel_value(channel)), PANEL_X + 92, y, 1, TEXT);

        match channel {
            Channel::Flex(_)   => draw_flex_bar(buf, y, app.channel_value(channel)),
            Channel::Orient(_) => draw_turn_bar(buf, y, app.channel_value(channel)),
        }
    }

    // ── Transcript ────────────────────────────────────────────────────────
    buf.fill_text("TRANSCRIPT", PANEL_X, 330, 1, DIM);
    buf.fill_rect(PANEL_X, 342, 300, 28, CARD);
    let line = if app.transcript().is_empty() { "..." } else { app.transcript().as_str() };
    buf.fill_text(line, PANEL_X + 8, 349, 2, TEXT);

    // ── Status + legend ───────────────────────────────────────────────────
    buf.fill_rect(PANEL_X - 10, 468, (WIN_W as i32) - PANEL_X + 10, 18, CARD);
    buf.fill_text(&app.status, PANEL_X, 474, 1, TEXT);
    buf.fill_text("A-Z PRESET   TAB CHANNEL   UP/DOWN ADJUST", PANEL_X, 494, 1, DIM);
    buf.fill_text("SHIFT FAST   BACKSPACE RESET   ESC QUIT",   PANEL_X, 506, 1, DIM);
}

/// 0..100 flex as a filled bar plus the bend wording of the app UI.
fn draw_flex_bar(buf: &mut PixelCanvas, y: i32, value: i32) {
    buf.stroke_rect(PANEL_X + 130, y - 1, 102, 10, DIM);
    buf.fill_rect(PANEL_X + 131, y, value, 8, FLEX_BAR);
    let wording = if value < 30 { "STRAIGHT" } else if value > 70 { "BENT" } else { "NEUTRAL" };
    buf.fill_text(wording, PANEL_X + 244, y, 1, DIM);
}

/// −180..180 as a center-zero bar with a position tick.
fn draw_turn_bar(buf: &mut PixelCanvas, y: i32, degrees: i32) {
    buf.stroke_rect(PANEL_X + 130, y - 1, 102, 10, DIM);
    buf.fill_rect(PANEL_X + 180, y, 2, 8, DIM); // zero mark
    let tick = (degrees + 180) * 98 / 360;
    buf.fill_rect(PANEL_X + 131 + tick, y, 3, 8, TURN_BAR);
    buf.fill_text("DEG", PANEL_X + 244, y, 1, DIM);
}

// ════════════════════════════════════════════════════════════════════════════
// Key table
// ════════════════════════════════════════════════════════════════════════════

/// The 26 preset keys in letter order.
fn letter_keys() -> [(Key, Letter); 26] {
    [
        (Key::A, Letter::A), (Key::B, Letter::B), (Key::C, Letter::C),
        (Key::D, Letter::D), (Key::E, Letter::E), (Key::F, Letter::F),
        (Key::G, Letter::G), (Key::H, Letter::H), (Key::I, Letter::I),
        (Key::J, Letter::J), (Key::K, Letter::K), (Key::L, Letter::L),
        (Key::M, Letter::M), (Key::N, Letter::N), (Key::O, Letter::O),
        (Key::P, Letter::P), (Key::Q, Letter::Q), (Key::R, Letter::R),
        (Key::S, Letter::S), (Key::T, Letter::T), (Key::U, Letter::U),
        (Key::V, Letter::V), (Key::W, Letter::W), (Key::X, Letter::X),
        (Key::Y, Letter::Y), (Key::Z, Letter::Z),
    ]
}
