//! Walks the profile table and shows how frames are read and written.

use sign_sensor::{profile, profiles, Axis, Finger, Letter, SensorFrame};

fn show(letter: Letter, frame: &SensorFrame) {
    let o = frame.orientation;
    println!("   {}  flex {:?}  orientation ({:>4}, {:>4}, {:>4})",
             letter, frame.flex, o.x, o.y, o.z);
}

fn main() {
    println!("\n=== Glove Sensor Frame Demo ===\n");

    // ── 1. A handful of canonical profiles ────────────────────────────────
    println!("1. Canonical profiles");
    for letter in [Letter::A, Letter::B, Letter::L, Letter::S, Letter::Y] {
        show(letter, &profile(letter));
    }
    println!();

    // ── 2. Letters separated only by orientation ──────────────────────────
    println!("2. I vs J: same fingers, different wrist");
    show(Letter::I, &profile(Letter::I));
    show(Letter::J, &profile(Letter::J));
    println!();

    // ── 3. The intentional duplicates ─────────────────────────────────────
    println!("3. Static-frame duplicates (motion letters)");
    show(Letter::U, &profile(Letter::U));
    show(Letter::V, &profile(Letter::V));
    assert_eq!(profile(Letter::U), profile(Letter::V));
    println!("   U and V are identical on the static sensors.");
    println!();

    // ── 4. Editing a frame channel by channel ─────────────────────────────
    println!("4. Building a frame by hand");
    let mut frame = SensorFrame::neutral();
    frame.set_flex(Finger::Thumb, 20);
    for finger in [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky] {
        frame.set_flex(finger, 90);
    }
    show(Letter::A, &frame);
    println!("   matches profile(A): {}", frame == profile(Letter::A));
    println!();

    // ── 5. Range sweep over the whole table ───────────────────────────────
    println!("5. Table-wide ranges");
    let mut max_flex = 0u8;
    let mut max_turn = 0i16;
    for (_, frame) in profiles() {
        for &v in &frame.flex {
            max_flex = max_flex.max(v);
        }
        for axis in Axis::all() {
            max_turn = max_turn.max(frame.orientation.get(axis).abs());
        }
    }
    println!("   26 profiles, flex peaks at {}, |orientation| peaks at {} deg",
             max_flex, max_turn);
}
