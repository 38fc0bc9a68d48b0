//! Synthetic phone screen.
//!
//! Pure function of `(surface, clock label, classification, transcript)` —
//! the full app interface the glove would drive on a paired handset: status
//! bar with the time, app title, the detected letter in large type, the
//! running translation, and a three-button navigation bar drawn from plain
//! shapes.  No state of its own; redrawn from scratch every cycle.

use crate::canvas::Canvas;
use sign_classify::{Classification, Transcript};

/// Native phone surface size.
pub const SCREEN_W: usize = 300;
pub const SCREEN_H: usize = 500;

// Screen palette.
const BODY:      u32 = 0xFFF8_FAFC;
const ACCENT:    u32 = 0xFF3B_75D9;
const INK:       u32 = 0xFF00_0000;
const MUTED:     u32 = 0xFF4B_5563;
const HAIRLINE:  u32 = 0xFFE5_E7EB;
const ICON_GRAY: u32 = 0xFF9C_A3AF;
const WHITE:     u32 = 0xFFFF_FFFF;

const STATUS_BAR_H: i32 = 30;
const NAV_BAR_H:    i32 = 50;
const ICON_HALF:    i32 = 10;

/// Draw one frame of the phone interface.
pub fn draw_phone_screen(
    canvas:         &mut dyn Canvas,
    clock_label:    &str,
    classification: Classification,
    transcript:     &Transcript,
) {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;

    canvas.clear(BODY);

    // ── Status bar with the clock ─────────────────────────────────────────
    canvas.fill_rect(0, 0, w, STATUS_BAR_H, ACCENT);
    canvas.fill_text_centered(clock_label, w / 2, 8, 2, WHITE);

    // ── App title ─────────────────────────────────────────────────────────
    canvas.fill_text_centered("Signal", w / 2, 44, 3, ACCENT);

    // ── Detected letter, front and center ─────────────────────────────────
    if let Some(letter) = classification.letter {
        let mut glyph = [0u8; 4];
        canvas.fill_text_centered(letter.as_char().encode_utf8(&mut glyph),
                                  w / 2, h / 2 - 100, 8, INK);
    }

    // ── Translation region ────────────────────────────────────────────────
    canvas.fill_text_centered("Translation:", w / 2, h - 172, 2, MUTED);
    let line = if transcript.is_empty() { "..." } else { transcript.as_str() };
    canvas.fill_text_centered(line, w / 2, h - 148, 3, INK);

    // ── Navigation bar ────────────────────────────────────────────────────
    canvas.fill_rect(0, h - NAV_BAR_H, w, NAV_BAR_H, WHITE);
    canvas.fill_rect(0, h - NAV_BAR_H, w, 1, HAIRLINE);

    let spacing = w / 4;
    draw_home_icon(canvas, spacing, h, ACCENT);
    draw_back_icon(canvas, spacing * 2, h, ICON_GRAY);
    draw_menu_icon(canvas, spacing * 3, h, ICON_GRAY);
}

/// House pentagon: roof apex over a square body.
fn draw_home_icon(canvas: &mut dyn Canvas, cx: i32, h: i32, color: u32) {
    let (cx, h) = (cx as f32, h as f32);
    let half = ICON_HALF as f32;
    canvas.fill_polygon(
        &[(cx - half, h - 30.0), (cx, h - 40.0), (cx + half, h - 30.0),
          (cx + half, h - 20.0), (cx - half, h - 20.0)],
        color,
    );
}

/// Back triangle pointing down-left.
fn draw_back_icon(canvas: &mut dyn Canvas, cx: i32, h: i32, color: u32) {
    let (cx, h) = (cx as f32, h as f32);
    let half = ICON_HALF as f32;
    canvas.fill_polygon(
        &[(cx + half, h - 30.0), (cx - half, h - 30.0), (cx, h - 20.0)],
        color,
    );
}

/// Hamburger menu: three short bars.
fn draw_menu_icon(canvas: &mut dyn Canvas, cx: i32, h: i32, color: u32) {
    for i in 0..3 {
        canvas.fill_rect(cx - ICON_HALF, h - 35 + i * 5, ICON_HALF * 2, 3, color);
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
