//! Input events — keyboard simulation translated to session control.
//!
//! The public interface is [`ControlEvent`] delivered over a `mpsc`
//! channel.  The app doesn't care that events come from the simulation
//! window; anything implementing [`InputSource`] could feed it.

use sign_sensor::Letter;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

// ════════════════════════════════════════════════════════════════════════════
// ControlEvent
// ════════════════════════════════════════════════════════════════════════════

/// A high-level control event consumed by the app loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    /// Snap the frame to a letter's canonical profile.
    Preset(Letter),

    /// Move the channel selection down / up the list.
    NextChannel,
    PrevChannel,

    /// Adjust the selected channel by `steps` (sign carries direction);
    /// the app scales by its configured step size and clamps to the
    /// channel's range before anything reaches the session.
    Nudge { steps: i32 },

    /// Back to the neutral pose and an empty transcript.
    Reset,

    /// Close the application.
    Quit,
}

// ════════════════════════════════════════════════════════════════════════════
// InputSource trait — anything that can feed ControlEvents
// ════════════════════════════════════════════════════════════════════════════

pub trait InputSource: Send + 'static {
    fn run(self: Box<Self>, tx: Sender<ControlEvent>);
}

/// Spawn an input source on its own thread and return the receiving end.
pub fn spawn_input_source<S: InputSource>(source: S) -> Receiver<ControlEvent> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || Box::new(source).run(tx));
    rx
}

// ════════════════════════════════════════════════════════════════════════════
// SimInputSource — keyboard events from the visualizer window
// ════════════════════════════════════════════════════════════════════════════

/// Raw input event from the simulation window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimInput {
    KeyDown(SimKey),
}

/// Simulated key codes (mapped from minifb keys by the visualizer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimKey {
    Preset(Letter),  // A-Z
    ChannelNext,     // Tab
    ChannelPrev,     // Shift+Tab
    StepUp,          // Up
    StepDown,        // Down
    StepUpFast,      // Shift+Up
    StepDownFast,    // Shift+Down
    Reset,           // Backspace
    Quit,            // Escape
}

/// Translator from window key events to [`ControlEvent`]s.  Decouples the
/// window event loop from control logic.
pub struct SimInputSource {
    pub rx: Receiver<SimInput>,
}

impl InputSource for SimInputSource {
    fn run(self: Box<Self>, tx: Sender<ControlEvent>) {
        for input in self.rx {
            let SimInput::KeyDown(key) = input;
            let event = match key {
                SimKey::Preset(letter) => ControlEvent::Preset(letter),
                SimKey::ChannelNext    => ControlEvent::NextChannel,
                SimKey::ChannelPrev    => ControlEvent::PrevChannel,
                SimKey::StepUp         => ControlEvent::Nudge { steps:  1 },
                SimKey::StepDown       => ControlEvent::Nudge { steps: -1 },
                SimKey::StepUpFast     => ControlEvent::Nudge { steps:  5 },
                SimKey::StepDownFast   => ControlEvent::Nudge { steps: -5 },
                SimKey::Reset          => ControlEvent::Reset,
                SimKey::Quit           => {
                    let _ = tx.send(ControlEvent::Quit);
                    return;
                }
            };
            if tx.send(event).is_err() { return; }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn translate(inputs: Vec<SimInput>) -> Vec<ControlEvent> {
        let (sim_tx, sim_rx) = mpsc::channel();
        let events = spawn_input_source(SimInputSource { rx: sim_rx });
        for input in inputs {
            sim_tx.send(input).unwrap();
        }
        drop(sim_tx); // source thread drains and exits
        events.iter().collect()
    }

    #[test]
    fn keys_map_to_control_events() {
        let out = translate(vec![
            SimInput::KeyDown(SimKey::Preset(Letter::A)),
            SimInput::KeyDown(SimKey::ChannelNext),
            SimInput::KeyDown(SimKey::StepUp),
            SimInput::KeyDown(SimKey::StepDownFast),
            SimInput::KeyDown(SimKey::Reset),
        ]);
        assert_eq!(out, vec![
            ControlEvent::Preset(Letter::A),
            ControlEvent::NextChannel,
            ControlEvent::Nudge { steps: 1 },
            ControlEvent::Nudge { steps: -5 },
            ControlEvent::Reset,
        ]);
    }

    #[test]
    fn quit_terminates_the_source() {
        let out = translate(vec![
            SimInput::KeyDown(SimKey::Quit),
            SimInput::KeyDown(SimKey::Preset(Letter::B)), // after quit: dropped
        ]);
        assert_eq!(out, vec![ControlEvent::Quit]);
    }
}
