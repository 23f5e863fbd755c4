//! Interactive menu for exploring the key catalog: scales and triads.

use key_signature::{iter_keys, KeySignature, DEGREES};
use pitch_names::MIDDLE_C_OCTAVE;
use std::io::{self, Write};

const ROMAN: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              Key Signature Explorer                  ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    loop {
        print_menu();
        let choice = read_line("Select a key (number or identifier, q to quit): ");
        let choice = choice.trim();

        if choice.eq_ignore_ascii_case("q") {
            println!("\nGoodbye!\n");
            break;
        }

        let ident = match choice.parse::<usize>() {
            Ok(i) => match iter_keys().nth(i.wrapping_sub(1)) {
                Some(id) => id.to_string(),
                None     => { println!("  ⚠  No key number {}.\n", i); continue; }
            },
            Err(_) => choice.to_string(),
        };

        let key = match KeySignature::get(&ident) {
            Ok(k)  => k,
            Err(e) => { println!("  ⚠  {}\n", e); continue; }
        };

        let octave: i64 = read_line(&format!("  Octave (default {}): ", MIDDLE_C_OCTAVE))
            .trim().parse().unwrap_or(MIDDLE_C_OCTAVE as i64);

        println!();
        println!("  ┌─ {} ({}), octave {} ─", key, key.scale_type().name(), octave);
        print!("  │  Scale  :");
        for r in key.iter_octave(octave) {
            match r {
                Ok(p)  => print!(" {}", p),
                Err(e) => { print!("  ⚠  {}", e); break; }
            }
        }
        println!();
        println!("  │");
        for degree in 1..=DEGREES {
            match key.triad(octave, degree) {
                Ok(chord) => println!("  │  {:>3}  {}", ROMAN[(degree - 1) as usize], chord),
                Err(e)    => println!("  │  {:>3}  ⚠  {}", ROMAN[(degree - 1) as usize], e),
            }
        }
        println!("  └─");
        println!();
    }
}

fn print_menu() {
    println!("  ┌──────────────────────────────────────────────────────┐");
    for (i, id) in iter_keys().enumerate() {
        if let Ok(k) = KeySignature::get(id) {
            println!("  │  {:>2}. {:8} {:40} │", i + 1, id, k.display_name());
        }
    }
    println!("  └──────────────────────────────────────────────────────┘");
    println!();
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
