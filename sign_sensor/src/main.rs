//! Interactive explorer for the ASL fingerspelling profile table.

use sign_sensor::{profile, Axis, Finger, Letter};
use std::io::{self, Write};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║        ASL Fingerspelling Profile Explorer           ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    loop {
        let choice = read_line("Letter A-Z (or q to quit): ");
        let trimmed = choice.trim();

        if trimmed.eq_ignore_ascii_case("q") {
            println!("\nGoodbye!\n");
            break;
        }

        let letter = match trimmed.chars().next().map(Letter::from_char) {
            Some(Ok(l)) => l,
            _ => { println!("  ⚠  Please enter a single letter A-Z or q.\n"); continue; }
        };

        print_profile(letter);
    }
}

fn print_profile(letter: Letter) {
    let frame = profile(letter);

    println!();
    println!("  ┌─ {} ─", letter);
    println!("  │");
    for finger in Finger::all() {
        let v = frame.flex_for(finger);
        println!("  │  {:6}  {:3}  {}", finger.name(), v, bar(v));
    }
    println!("  │");
    for axis in Axis::all() {
        println!("  │  {}-axis  {:4} deg", axis.name(), frame.orientation.get(axis));
    }
    println!("  └─");
    println!();
}

/// 20-cell bar sketch of a 0-100 flex value.
fn bar(value: u8) -> String {
    let filled = (value as usize + 2) / 5;
    let mut s = String::with_capacity(20);
    for i in 0..20 {
        s.push(if i < filled { '█' } else { '·' });
    }
    s
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
