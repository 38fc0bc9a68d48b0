//! Scripted walk through classification and transcript accumulation.

use sign_classify::{best_match, classify, Command, Session};
use sign_sensor::{profile, Letter, Orientation, SensorFrame};

fn main() {
    println!("\n=== Letter Classification Demo ===\n");

    // ── 1. Every canonical profile sits at distance zero ──────────────────
    println!("1. Exact matches");
    for letter in [Letter::A, Letter::B, Letter::S] {
        let (best, diff) = best_match(&profile(letter));
        println!("   profile({})  →  {}  (diff {:.1})", letter, best, diff);
    }
    println!();

    // ── 2. A slightly perturbed pose still resolves ───────────────────────
    println!("2. Near match");
    let mut wobbly = profile(Letter::A);
    wobbly.flex[1] = 75;               // index not quite curled
    wobbly.orientation.z = 12;         // wrist turned a little
    let (best, diff) = best_match(&wobbly);
    println!("   perturbed A  →  {}  (diff {:.1}, detected: {})",
             best, diff, classify(&wobbly).letter.is_some());
    println!();

    // ── 3. Nothing within range ───────────────────────────────────────────
    println!("3. Out-of-range pose");
    let far = SensorFrame::new([100, 0, 100, 0, 100], Orientation::new(180, -180, 180));
    let (best, diff) = best_match(&far);
    println!("   nearest is {} at diff {:.1} — above threshold, no match", best, diff);
    assert_eq!(classify(&far).letter, None);
    println!();

    // ── 4. Transcript policy in action ────────────────────────────────────
    println!("4. Session transcript");
    let mut session = Session::new();
    for letter in [Letter::H, Letter::E, Letter::L, Letter::L, Letter::O] {
        session.apply(Command::Preset(letter));
    }
    // The held double-L collapses to one character.
    println!("   spelled H,E,L,L,O  →  \"{}\"", session.transcript().as_str());

    session.apply(Command::Reset);
    println!("   after reset        →  \"{}\"", session.transcript().as_str());
    println!();

    // ── 5. Overflow restarts rather than trimming ─────────────────────────
    println!("5. Transcript restart");
    let mut session = Session::new();
    let mut flip = false;
    while session.transcript().len() <= 20 {
        session.apply(Command::Preset(if flip { Letter::A } else { Letter::B }));
        flip = !flip;
    }
    println!("   filled to {} chars: \"{}\"",
             session.transcript().len(), session.transcript().as_str());
    session.apply(Command::Preset(Letter::X));
    println!("   one more letter    : \"{}\"", session.transcript().as_str());
}
