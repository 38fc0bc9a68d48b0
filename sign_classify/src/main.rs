//! Interactive classification console: drive a session from the keyboard
//! and watch the match and the transcript evolve.

use sign_classify::{best_match, Command, Session};
use sign_sensor::{Axis, Finger, Letter};
use std::io::{self, Write};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║            Glove Letter Classification Console           ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();

    let mut session = Session::new();
    print_state(&session);

    loop {
        print_ops_menu();
        let choice = read_line("Command: ").trim().to_ascii_lowercase();

        match choice.as_str() {
            "1" => {
                let finger = pick_finger();
                let value = read_line("  Flex 0-100: ")
                    .trim().parse::<u8>().unwrap_or(50).min(100);
                session.apply(Command::SetFlex { finger, value });
            }
            "2" => {
                let axis = pick_axis();
                let degrees = read_line("  Degrees -180..180: ")
                    .trim().parse::<i16>().unwrap_or(0).clamp(-180, 180);
                session.apply(Command::SetOrientation { axis, degrees });
            }
            "3" => {
                let input = read_line("  Preset letter A-Z: ");
                match input.trim().chars().next().map(Letter::from_char) {
                    Some(Ok(letter)) => { session.apply(Command::Preset(letter)); }
                    _ => { println!("  ⚠  Not a letter."); continue; }
                }
            }
            "4" => {
                session.apply(Command::Reset);
                println!("  Session reset.");
            }
            "q" | "quit" => {
                println!("\nGoodbye!\n");
                break;
            }
            _ => { println!("  ⚠  Unknown command."); continue; }
        }

        print_state(&session);
    }
}

fn print_state(session: &Session) {
    let frame = session.frame();
    let (nearest, diff) = best_match(frame);
    let c = session.classification();

    println!();
    println!("  Flex        : {:?}", frame.flex);
    println!("  Orientation : ({}, {}, {})",
             frame.orientation.x, frame.orientation.y, frame.orientation.z);
    println!("  Nearest     : {}  (total diff {:.1})", nearest, diff);
    match c.letter {
        Some(l) => println!("  Detected    : {}  (confidence {}%)", l, c.confidence_pct()),
        None    => println!("  Detected    : —  (no profile within range)"),
    }
    println!("  Transcript  : \"{}\"", session.transcript().as_str());
    println!();
}

fn print_ops_menu() {
    println!("  ┌─────────────────────────────────────────────────────┐");
    println!("  │  1. Set a flex channel     3. Apply letter preset   │");
    println!("  │  2. Set an orientation     4. Reset session         │");
    println!("  │                            q. Quit                  │");
    println!("  └─────────────────────────────────────────────────────┘");
}

fn pick_finger() -> Finger {
    loop {
        for (i, f) in Finger::all().into_iter().enumerate() {
            print!("  {}.{}", i + 1, f.name());
        }
        println!();
        match read_line("  Finger (1-5): ").trim() {
            "1" => break Finger::Thumb,
            "2" => break Finger::Index,
            "3" => break Finger::Middle,
            "4" => break Finger::Ring,
            "5" => break Finger::Pinky,
            _   => println!("  ⚠  Please enter 1-5."),
        }
    }
}

fn pick_axis() -> Axis {
    loop {
        match read_line("  Axis (x/y/z): ").trim().to_ascii_lowercase().as_str() {
            "x" => break Axis::X,
            "y" => break Axis::Y,
            "z" => break Axis::Z,
            _   => println!("  ⚠  Please enter x, y, or z."),
        }
    }
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
