//! # sign_classify
//!
//! Turns a live [`SensorFrame`] into letters: a nearest-match classifier
//! over the canonical profile table, a [`Transcript`] that accumulates the
//! recognized letters into a running translation, and a [`Session`] that
//! owns the mutable frame/transcript pair and recomputes both synchronously
//! on every input [`Command`].
//!
//! Everything here is single-threaded, total, and deterministic: the same
//! frame always classifies the same way, and nothing blocks or fails.
//!
//! ## Quick start
//!
//! ```rust
//! use sign_classify::{classify, Command, Session};
//! use sign_sensor::{profile, Letter};
//!
//! assert_eq!(classify(&profile(Letter::A)).letter, Some(Letter::A));
//!
//! let mut session = Session::new();
//! session.apply(Command::Preset(Letter::B));
//! session.apply(Command::Preset(Letter::A));
//! assert_eq!(session.transcript().as_str(), "BA");
//! ```

use sign_sensor::{profile, profiles, Axis, Finger, Letter, SensorFrame};

// ════════════════════════════════════════════════════════════════════════════
// Classification — the per-frame match result
// ════════════════════════════════════════════════════════════════════════════

/// Flex differences count four times as much as orientation differences.
const FLEX_WEIGHT:   f32 = 0.8;
const ORIENT_WEIGHT: f32 = 0.2;

/// A frame further than this from every profile reads as "no match".
const DETECT_THRESHOLD: f32 = 200.0;

/// Displayed confidence when a letter is detected.  A fixed badge value,
/// not a probability.
pub const DETECT_CONFIDENCE_PCT: u8 = 95;

/// Result of classifying one frame.  Produced fresh per call, never
/// retained by the classifier itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    /// Best-matching letter, or `None` when nothing is close enough.
    pub letter: Option<Letter>,
}

impl Classification {
    /// Badge percentage for the status panel: 95 when detected, else 0.
    pub fn confidence_pct(&self) -> u8 {
        if self.letter.is_some() { DETECT_CONFIDENCE_PCT } else { 0 }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// classify — nearest profile under the weighted L1 distance
// ════════════════════════════════════════════════════════════════════════════

/// Weighted distance between a profile and a live frame.
fn total_diff(profile: &SensorFrame, frame: &SensorFrame) -> f32 {
    let mut flex_diff = 0.0f32;
    for finger in Finger::all() {
        let p = profile.flex_for(finger) as f32;
        let f = frame.flex_for(finger) as f32;
        flex_diff += (p - f).abs();
    }

    let mut orient_diff = 0i16;
    for axis in Axis::all() {
        orient_diff += (profile.orientation.get(axis) - frame.orientation.get(axis)).abs();
    }

    FLEX_WEIGHT * flex_diff + ORIENT_WEIGHT * orient_diff as f32
}

/// The closest profile and its distance, scanned in A..Z table order.
///
/// Ties keep the earlier letter: the comparison is strict, so a later
/// profile at the same distance never replaces the current best.  That
/// makes the duplicate pairs (U/V, K/R) resolve to U and K.
pub fn best_match(frame: &SensorFrame) -> (Letter, f32) {
    let mut best   = Letter::A;
    let mut lowest = f32::INFINITY;
    for (letter, candidate) in profiles() {
        let diff = total_diff(&candidate, frame);
        if diff < lowest {
            lowest = diff;
            best   = letter;
        }
    }
    (best, lowest)
}

/// Classify one frame against the full profile table.
///
/// Pure and stateless: 26 × 5 subtractions per call, cheap enough to run
/// on every slider movement with no batching or debouncing.
pub fn classify(frame: &SensorFrame) -> Classification {
    let (letter, diff) = best_match(frame);
    if diff < DETECT_THRESHOLD {
        Classification { letter: Some(letter) }
    } else {
        Classification { letter: None }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Transcript — the running translation
// ════════════════════════════════════════════════════════════════════════════

/// Once the transcript is longer than this, the next distinct letter
/// restarts it instead of appending.
pub const TRANSCRIPT_RESTART_LEN: usize = 20;

/// Accumulates recognized letters into the translation line.
///
/// The update rule is deliberate and exact:
/// * a letter equal to the current last character is dropped (a held pose
///   produces one character, not a stream of them);
/// * past [`TRANSCRIPT_RESTART_LEN`] characters the next distinct letter
///   replaces the whole line — a hard restart, not a sliding window;
/// * otherwise the letter is appended.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript { text: String::new() }
    }

    /// Feed one recognized letter through the update rule.
    pub fn push(&mut self, letter: Letter) {
        let ch = letter.as_char();
        if self.text.ends_with(ch) {
            return;
        }
        if self.text.len() > TRANSCRIPT_RESTART_LEN {
            self.text.clear();
        }
        self.text.push(ch);
    }

    /// Empty the transcript.  Used by session reset; not part of the
    /// push rule above.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str { &self.text }
    pub fn len(&self)    -> usize { self.text.len() }
    pub fn is_empty(&self) -> bool { self.text.is_empty() }
}

// ════════════════════════════════════════════════════════════════════════════
// Command — the validated input vocabulary
// ════════════════════════════════════════════════════════════════════════════

/// One validated input event.  Producers (sliders, presets) clamp values
/// to their ranges before building a command; the session trusts them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Set one finger's flex, value already in 0..=100.
    SetFlex { finger: Finger, value: u8 },

    /// Set one orientation axis, degrees already in −180..=180.
    SetOrientation { axis: Axis, degrees: i16 },

    /// Overwrite the whole frame with a letter's canonical profile.
    Preset(Letter),

    /// Back to the neutral frame with an empty transcript.
    Reset,
}

// ════════════════════════════════════════════════════════════════════════════
// Session — the frame/transcript pair and the recompute entry point
// ════════════════════════════════════════════════════════════════════════════

/// Owns the one mutable [`SensorFrame`] / [`Transcript`] pair of a
/// simulation run.
///
/// Every [`Session::apply`] performs the full synchronous cycle: update
/// the frame, reclassify, feed the transcript, hand back the fresh
/// classification for display.  There is no hidden recomputation anywhere
/// else.
#[derive(Clone, Debug)]
pub struct Session {
    frame:          SensorFrame,
    transcript:     Transcript,
    classification: Classification,
}

impl Session {
    /// Start at the neutral frame.
    pub fn new() -> Self {
        Session::with_frame(SensorFrame::neutral())
    }

    /// Start at an arbitrary (pre-validated) frame.  The transcript
    /// starts empty either way.
    pub fn with_frame(frame: SensorFrame) -> Self {
        Session {
            frame,
            transcript:     Transcript::new(),
            classification: classify(&frame),
        }
    }

    /// Apply one command: frame update, reclassify, transcript update.
    ///
    /// Reset clears the transcript and deliberately skips the transcript
    /// update for the frame it installs — a reset lands on a blank line
    /// even though the neutral pose itself still classifies.
    pub fn apply(&mut self, command: Command) -> Classification {
        let feed_transcript = match command {
            Command::SetFlex { finger, value } => {
                self.frame.set_flex(finger, value);
                true
            }
            Command::SetOrientation { axis, degrees } => {
                self.frame.orientation.set(axis, degrees);
                true
            }
            Command::Preset(letter) => {
                self.frame = profile(letter);
                true
            }
            Command::Reset => {
                self.frame = SensorFrame::neutral();
                self.transcript.clear();
                false
            }
        };

        self.classification = classify(&self.frame);
        if feed_transcript {
            if let Some(letter) = self.classification.letter {
                self.transcript.push(letter);
            }
        }
        self.classification
    }

    // ── read accessors ────────────────────────────────────────────────────

    pub fn frame(&self)          -> &SensorFrame    { &self.frame }
    pub fn transcript(&self)     -> &Transcript     { &self.transcript }
    pub fn classification(&self) -> Classification  { self.classification }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use sign_sensor::Orientation;

    /// A frame at least 200 from every profile: extreme alternating flex
    /// plus full-turn orientation on all axes.  Nearest profile is G at
    /// total_diff 250.
    fn far_frame() -> SensorFrame {
        SensorFrame::new([100, 0, 100, 0, 100], Orientation::new(180, -180, 180))
    }

    // ── classifier ───────────────────────────────────────────────────────

    #[test]
    fn classify_is_deterministic() {
        for (_, frame) in profiles() {
            assert_eq!(classify(&frame), classify(&frame));
        }
        let neutral = SensorFrame::neutral();
        assert_eq!(classify(&neutral), classify(&neutral));
    }

    #[test]
    fn every_profile_matches_at_zero_distance() {
        for (letter, frame) in profiles() {
            let (best, diff) = best_match(&frame);
            assert_eq!(diff, 0.0, "{} should sit exactly on its profile", letter);
            // The winner's profile is identical to the probed one even
            // when the winner is the other half of a duplicate pair.
            assert_eq!(profile(best), frame);
        }
    }

    #[test]
    fn duplicate_profiles_resolve_to_earlier_letter() {
        assert_eq!(classify(&profile(Letter::V)).letter, Some(Letter::U));
        assert_eq!(classify(&profile(Letter::R)).letter, Some(Letter::K));
        // Non-duplicates still recognize themselves.
        assert_eq!(classify(&profile(Letter::U)).letter, Some(Letter::U));
        assert_eq!(classify(&profile(Letter::K)).letter, Some(Letter::K));
    }

    #[test]
    fn unique_profiles_classify_as_themselves() {
        for (letter, frame) in profiles() {
            if matches!(letter, Letter::V | Letter::R) {
                continue; // duplicate pairs covered above
            }
            assert_eq!(classify(&frame).letter, Some(letter));
        }
    }

    #[test]
    fn preset_a_classifies_as_a() {
        let frame = SensorFrame::new([20, 90, 90, 90, 90], Orientation::ZERO);
        assert_eq!(classify(&frame).letter, Some(Letter::A));
    }

    #[test]
    fn far_frame_is_no_match() {
        let (_, diff) = best_match(&far_frame());
        assert!(diff >= DETECT_THRESHOLD);
        assert_eq!(classify(&far_frame()).letter, None);
    }

    #[test]
    fn far_frame_nearest_is_g_at_250() {
        let (letter, diff) = best_match(&far_frame());
        assert_eq!(letter, Letter::G);
        assert!((diff - 250.0).abs() < 1e-3);
    }

    #[test]
    fn neutral_frame_sits_next_to_c() {
        // The calibration table places C almost on the rest pose (flex
        // off by 10 on the thumb, x off by 10), so a neutral hand reads
        // as C rather than "no match".
        let (letter, diff) = best_match(&SensorFrame::neutral());
        assert_eq!(letter, Letter::C);
        assert!((diff - 10.0).abs() < 1e-3);
        assert_eq!(classify(&SensorFrame::neutral()).letter, Some(Letter::C));
    }

    #[test]
    fn orientation_separates_i_from_j() {
        let mut frame = profile(Letter::I);
        assert_eq!(classify(&frame).letter, Some(Letter::I));
        frame.orientation.set(Axis::Z, 45);
        assert_eq!(classify(&frame).letter, Some(Letter::J));
    }

    #[test]
    fn confidence_is_fixed_95_or_0() {
        assert_eq!(classify(&profile(Letter::A)).confidence_pct(), 95);
        assert_eq!(classify(&far_frame()).confidence_pct(), 0);
    }

    // ── transcript ───────────────────────────────────────────────────────

    #[test]
    fn transcript_appends_distinct_letters() {
        let mut t = Transcript::new();
        t.push(Letter::B);
        t.push(Letter::A);
        assert_eq!(t.as_str(), "BA");
    }

    #[test]
    fn transcript_suppresses_immediate_repeat() {
        let mut t = Transcript::new();
        t.push(Letter::A);
        t.push(Letter::A);
        assert_eq!(t.as_str(), "A");
        t.push(Letter::B);
        t.push(Letter::A);
        assert_eq!(t.as_str(), "ABA");
    }

    #[test]
    fn transcript_restarts_past_twenty_one() {
        let mut t = Transcript::new();
        // Alternate A/B up to length 21 — each append is distinct.
        for i in 0..21 {
            t.push(if i % 2 == 0 { Letter::A } else { Letter::B });
        }
        assert_eq!(t.len(), 21);
        t.push(Letter::X);
        assert_eq!(t.as_str(), "X");
    }

    #[test]
    fn transcript_appends_at_exactly_twenty() {
        let mut t = Transcript::new();
        for i in 0..20 {
            t.push(if i % 2 == 0 { Letter::A } else { Letter::B });
        }
        assert_eq!(t.len(), 20);
        // Length 20 is not "greater than 20": still an append.
        t.push(Letter::X);
        assert_eq!(t.len(), 21);
        assert!(t.as_str().ends_with('X'));
    }

    #[test]
    fn transcript_clear_empties() {
        let mut t = Transcript::new();
        t.push(Letter::A);
        t.clear();
        assert!(t.is_empty());
    }

    // ── session ──────────────────────────────────────────────────────────

    #[test]
    fn preset_then_preset_builds_transcript() {
        let mut s = Session::new();
        s.apply(Command::Preset(Letter::B));
        s.apply(Command::Preset(Letter::A));
        assert_eq!(s.transcript().as_str(), "BA");
    }

    #[test]
    fn repeated_preset_never_grows_transcript() {
        let mut s = Session::new();
        for _ in 0..22 {
            s.apply(Command::Preset(Letter::A));
        }
        assert_eq!(s.transcript().as_str(), "A");
    }

    #[test]
    fn preset_overwrites_whole_frame() {
        let mut s = Session::new();
        s.apply(Command::SetOrientation { axis: Axis::Z, degrees: 90 });
        s.apply(Command::Preset(Letter::A));
        assert_eq!(*s.frame(), profile(Letter::A));
    }

    #[test]
    fn set_flex_reclassifies_immediately() {
        let mut s = Session::with_frame(profile(Letter::S));
        assert_eq!(s.classification().letter, Some(Letter::S));
        // Straightening the thumb turns a fist into the A pose.
        let c = s.apply(Command::SetFlex { finger: Finger::Thumb, value: 20 });
        assert_eq!(c.letter, Some(Letter::A));
        assert_eq!(s.classification(), c);
        assert_eq!(s.transcript().as_str(), "A");
    }

    #[test]
    fn no_match_leaves_transcript_alone() {
        let mut s = Session::new();
        s.apply(Command::Preset(Letter::A));
        // Drive the frame out of range of every profile.
        s.apply(Command::SetOrientation { axis: Axis::X, degrees: 180 });
        s.apply(Command::SetOrientation { axis: Axis::Y, degrees: -180 });
        s.apply(Command::SetOrientation { axis: Axis::Z, degrees: 180 });
        s.apply(Command::SetFlex { finger: Finger::Thumb,  value: 100 });
        s.apply(Command::SetFlex { finger: Finger::Index,  value: 0 });
        s.apply(Command::SetFlex { finger: Finger::Middle, value: 100 });
        s.apply(Command::SetFlex { finger: Finger::Ring,   value: 0 });
        let c = s.apply(Command::SetFlex { finger: Finger::Pinky, value: 100 });
        assert_eq!(c.letter, None);
        // Only the letters seen on the way survive; no-match added nothing.
        assert!(!s.transcript().is_empty());
        let len_before = s.transcript().len();
        s.apply(Command::SetOrientation { axis: Axis::X, degrees: -180 });
        assert_eq!(s.transcript().len(), len_before);
    }

    #[test]
    fn reset_restores_neutral_state() {
        let mut s = Session::new();
        s.apply(Command::Preset(Letter::B));
        s.apply(Command::Preset(Letter::A));
        s.apply(Command::Reset);
        assert_eq!(*s.frame(), SensorFrame::neutral());
        assert_eq!(s.transcript().as_str(), "");
    }

    #[test]
    fn reset_is_idempotent() {
        let mut s = Session::new();
        s.apply(Command::Preset(Letter::L));
        s.apply(Command::Reset);
        let once = s.clone();
        s.apply(Command::Reset);
        assert_eq!(*s.frame(), *once.frame());
        assert_eq!(s.transcript(), once.transcript());
        assert_eq!(s.classification(), once.classification());
    }
}
