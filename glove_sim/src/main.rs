//! glove_sim — interactive entry point.

use glove_sim::app::{run, AppConfig};
use std::io::{self, Write};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║        Signal — Sign-Language Glove Simulator                ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    println!("  Virtual sensors only — no glove hardware is required.");
    println!();

    let cfg = if std::env::args().any(|a| a == "--quick") {
        println!("  Quick-start: 5% flex steps, 15 deg turn steps\n");
        AppConfig::default()
    } else {
        configure_interactively()
    };

    println!();
    println!("  Opening simulator window…");
    println!();

    if let Err(e) = run(cfg) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn configure_interactively() -> AppConfig {
    let flex_step: u8 = {
        let s = read_line("  Flex step per keypress, percent (1-25, default 5): ")
            .trim().parse().unwrap_or(5);
        s.clamp(1, 25)
    };
    let orient_step: i16 = {
        let s = read_line("  Turn step per keypress, degrees (1-90, default 15): ")
            .trim().parse().unwrap_or(15);
        s.clamp(1, 90)
    };

    AppConfig { flex_step, orient_step, ..AppConfig::default() }
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
