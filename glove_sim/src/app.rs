//! Top-level application state machine.
//!
//! `AppState` owns the classification [`Session`] plus the UI-only state
//! (selected channel, status line).  It turns [`ControlEvent`]s into
//! validated session [`Command`]s — clamping happens here, so the core
//! never sees an out-of-range value — and `run()` drives the whole
//! event/render loop.

use std::sync::mpsc::{self, TryRecvError};

use sign_classify::{Classification, Command, Session, Transcript};
use sign_sensor::{Axis, Finger, SensorFrame};

use crate::input::{spawn_input_source, ControlEvent, SimInputSource};
use crate::visualizer::Visualizer;

// ════════════════════════════════════════════════════════════════════════════
// Channel — the eight adjustable inputs
// ════════════════════════════════════════════════════════════════════════════

/// One adjustable input: a flex sensor or an orientation axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Flex(Finger),
    Orient(Axis),
}

impl Channel {
    /// All eight channels in panel order: five fingers, then x/y/z.
    pub fn all() -> [Channel; 8] {
        [
            Channel::Flex(Finger::Thumb),
            Channel::Flex(Finger::Index),
            Channel::Flex(Finger::Middle),
            Channel::Flex(Finger::Ring),
            Channel::Flex(Finger::Pinky),
            Channel::Orient(Axis::X),
            Channel::Orient(Axis::Y),
            Channel::Orient(Axis::Z),
        ]
    }

    pub fn label(self) -> String {
        match self {
            Channel::Flex(finger) => format!("{} flex", finger.name()),
            Channel::Orient(axis) => format!("{}-axis turn", axis.name()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// AppConfig
// ════════════════════════════════════════════════════════════════════════════

/// Configuration for the full application.
pub struct AppConfig {
    /// Flex change per nudge step (percent).
    pub flex_step:   u8,
    /// Orientation change per nudge step (degrees).
    pub orient_step: i16,
    /// Frame the session opens with.
    pub start_frame: SensorFrame,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            flex_step:   5,
            orient_step: 15,
            start_frame: SensorFrame::neutral(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// AppState
// ════════════════════════════════════════════════════════════════════════════

pub struct AppState {
    session:     Session,
    selected:    usize, // index into Channel::all()
    flex_step:   u8,
    orient_step: i16,
    pub status:  String,
}

impl AppState {
    pub fn new(cfg: AppConfig) -> Self {
        AppState {
            session:     Session::with_frame(cfg.start_frame),
            selected:    0,
            flex_step:   cfg.flex_step.clamp(1, 25),
            orient_step: cfg.orient_step.clamp(1, 90),
            status:      "Ready — pick a letter or adjust a channel".to_string(),
        }
    }

    // ── process one ControlEvent ─────────────────────────────────────────

    pub fn handle_event(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::Preset(letter) => {
                let c = self.session.apply(Command::Preset(letter));
                self.status = format!("Preset {} — {}", letter, describe(c));
            }

            ControlEvent::NextChannel => {
                self.selected = (self.selected + 1) % Channel::all().len();
                self.status = format!("Selected {}", self.selected_channel().label());
            }

            ControlEvent::PrevChannel => {
                let n = Channel::all().len();
                self.selected = (self.selected + n - 1) % n;
                self.status = format!("Selected {}", self.selected_channel().label());
            }

            ControlEvent::Nudge { steps } => {
                let channel = self.selected_channel();
                let command = self.nudge_command(channel, steps);
                let c = self.session.apply(command);
                self.status = format!("{} = {} — {}",
                                      channel.label(),
                                      self.channel_value(channel),
                                      describe(c));
            }

            ControlEvent::Reset => {
                self.session.apply(Command::Reset);
                self.status = "Reset — neutral pose, transcript cleared".to_string();
            }

            ControlEvent::Quit => { /* handled in the run loop */ }
        }
    }

    /// Build the clamped absolute command for a relative nudge.
    fn nudge_command(&self, channel: Channel, steps: i32) -> Command {
        match channel {
            Channel::Flex(finger) => {
                let current = self.session.frame().flex_for(finger) as i32;
                let value = (current + steps * self.flex_step as i32).clamp(0, 100) as u8;
                Command::SetFlex { finger, value }
            }
            Channel::Orient(axis) => {
                let current = self.session.frame().orientation.get(axis) as i32;
                let degrees =
                    (current + steps * self.orient_step as i32).clamp(-180, 180) as i16;
                Command::SetOrientation { axis, degrees }
            }
        }
    }

    // ── accessors for the render loop ────────────────────────────────────

    pub fn selected_channel(&self) -> Channel {
        Channel::all()[self.selected]
    }

    pub fn channel_value(&self, channel: Channel) -> i32 {
        match channel {
            Channel::Flex(finger) => self.session.frame().flex_for(finger) as i32,
            Channel::Orient(axis) => self.session.frame().orientation.get(axis) as i32,
        }
    }

    pub fn frame(&self)          -> &SensorFrame   { self.session.frame() }
    pub fn transcript(&self)     -> &Transcript    { self.session.transcript() }
    pub fn classification(&self) -> Classification { self.session.classification() }
}

fn describe(c: Classification) -> String {
    match c.letter {
        Some(letter) => format!("detected {} ({}%)", letter, c.confidence_pct()),
        None         => "no match".to_string(),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// run() — the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Run the full simulator.
///
/// Creates the keyboard input source and the visualizer window, then
/// drives the synchronous cycle at ~60 fps: poll keys, apply control
/// events to the session, redraw phone + hand + panel.
pub fn run(cfg: AppConfig) -> Result<(), String> {
    // ── Sim input channel ─────────────────────────────────────────────────
    let (sim_tx, sim_rx) = mpsc::channel();
    let events = spawn_input_source(SimInputSource { rx: sim_rx });

    // ── Visualizer (owns the window and the sim input sender) ────────────
    let mut vis = Visualizer::new(sim_tx)?;

    // ── App state ─────────────────────────────────────────────────────────
    let mut app = AppState::new(cfg);

    // ── Main loop ─────────────────────────────────────────────────────────
    while vis.is_open() {
        if !vis.poll_input() { break; }

        loop {
            match events.try_recv() {
                Ok(ControlEvent::Quit)          => return Ok(()),
                Ok(event)                       => app.handle_event(event),
                Err(TryRecvError::Empty)        => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }

        let clock = chrono::Local::now().format("%H:%M").to_string();
        vis.render(&app, &clock);
    }

    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use sign_sensor::Letter;

    fn make_app() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn presets_build_the_transcript() {
        let mut app = make_app();
        app.handle_event(ControlEvent::Preset(Letter::B));
        app.handle_event(ControlEvent::Preset(Letter::A));
        assert_eq!(app.transcript().as_str(), "BA");
        assert_eq!(app.classification().letter, Some(Letter::A));
    }

    #[test]
    fn channel_cycling_wraps_both_ways() {
        let mut app = make_app();
        assert_eq!(app.selected_channel(), Channel::Flex(Finger::Thumb));
        app.handle_event(ControlEvent::PrevChannel);
        assert_eq!(app.selected_channel(), Channel::Orient(Axis::Z));
        app.handle_event(ControlEvent::NextChannel);
        assert_eq!(app.selected_channel(), Channel::Flex(Finger::Thumb));
        for _ in 0..5 {
            app.handle_event(ControlEvent::NextChannel);
        }
        assert_eq!(app.selected_channel(), Channel::Orient(Axis::X));
    }

    #[test]
    fn nudge_moves_the_selected_channel_only() {
        let mut app = make_app();
        app.handle_event(ControlEvent::Nudge { steps: 2 }); // thumb +10
        assert_eq!(app.frame().flex, [60, 50, 50, 50, 50]);
    }

    #[test]
    fn nudge_clamps_at_flex_bounds() {
        let mut app = make_app();
        for _ in 0..30 {
            app.handle_event(ControlEvent::Nudge { steps: 5 });
        }
        assert_eq!(app.frame().flex_for(Finger::Thumb), 100);
        for _ in 0..60 {
            app.handle_event(ControlEvent::Nudge { steps: -5 });
        }
        assert_eq!(app.frame().flex_for(Finger::Thumb), 0);
    }

    #[test]
    fn nudge_clamps_at_orientation_bounds() {
        let mut app = make_app();
        // Select the z axis (index 7).
        app.handle_event(ControlEvent::PrevChannel);
        for _ in 0..40 {
            app.handle_event(ControlEvent::Nudge { steps: 5 });
        }
        assert_eq!(app.frame().orientation.z, 180);
        for _ in 0..80 {
            app.handle_event(ControlEvent::Nudge { steps: -5 });
        }
        assert_eq!(app.frame().orientation.z, -180);
    }

    #[test]
    fn reset_event_restores_neutral() {
        let mut app = make_app();
        app.handle_event(ControlEvent::Preset(Letter::S));
        app.handle_event(ControlEvent::Nudge { steps: 3 });
        app.handle_event(ControlEvent::Reset);
        assert_eq!(*app.frame(), SensorFrame::neutral());
        assert!(app.transcript().is_empty());
    }

    #[test]
    fn nudging_into_a_pose_detects_it() {
        let mut app = make_app();
        // Drive the thumb down to 20 and the rest up to 90 → the A pose.
        for _ in 0..6 {
            app.handle_event(ControlEvent::Nudge { steps: -1 }); // thumb 50→20
        }
        for _ in 0..4 {
            app.handle_event(ControlEvent::NextChannel);
            for _ in 0..8 {
                app.handle_event(ControlEvent::Nudge { steps: 1 }); // finger 50→90
            }
        }
        assert_eq!(*app.frame(), sign_sensor::profile(Letter::A));
        assert_eq!(app.classification().letter, Some(Letter::A));
        assert!(app.transcript().as_str().ends_with('A'));
    }

    #[test]
    fn status_line_tracks_events() {
        let mut app = make_app();
        app.handle_event(ControlEvent::Preset(Letter::L));
        assert!(app.status.contains('L'));
        app.handle_event(ControlEvent::NextChannel);
        assert!(app.status.contains("Index"));
    }
}
