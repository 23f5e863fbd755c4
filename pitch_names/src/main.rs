//! Interactive menu for exploring the pitch-name table.

use pitch_names::{
    PitchRegistry, Pitch, HIGHEST_OCTAVE, LOWEST_OCTAVE, MIDDLE_C_OCTAVE,
};
use std::io::{self, Write};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              MIDI Pitch Name Explorer                ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
    println!("  Middle C is octave {}; octaves run {}..{}.",
        MIDDLE_C_OCTAVE, LOWEST_OCTAVE, HIGHEST_OCTAVE);
    println!();

    let registry = PitchRegistry::global();

    loop {
        print_menu();
        match read_line("Choice: ").trim() {
            "1" => {
                let n: i64 = read_line("  Note number (0–127): ")
                    .trim().parse().unwrap_or(60);
                match registry.by_number(n) {
                    Ok(aliases) => show_aliases(n, aliases),
                    Err(e)      => println!("  ⚠  {}", e),
                }
            }
            "2" => {
                let octave: i64 = read_line("  Octave: ")
                    .trim().parse().unwrap_or(MIDDLE_C_OCTAVE as i64);
                let offset: i64 = read_line("  Semitone offset (0–11): ")
                    .trim().parse().unwrap_or(0);
                match registry.by_octave_offset(octave, offset) {
                    Ok(aliases) => show_aliases(aliases[0].note_number() as i64, aliases),
                    Err(e)      => println!("  ⚠  {}", e),
                }
            }
            "3" => {
                let ident = read_line("  Identifier (e.g. Cs4, Bb3, Enat5): ")
                    .trim().to_string();
                match registry.by_identifier(&ident) {
                    Ok(p)  => println!("  {}", p.long_form()),
                    Err(e) => println!("  ⚠  {}", e),
                }
            }
            "4" => {
                let octave: i8 = read_line("  Octave: ")
                    .trim().parse().unwrap_or(MIDDLE_C_OCTAVE);
                for offset in 0..12 {
                    if let Ok(aliases) = registry.by_octave_offset(octave as i64, offset) {
                        for p in aliases {
                            println!("  {}", p.long_form());
                        }
                    }
                }
            }
            "q" | "quit" => { println!("\nGoodbye!\n"); break; }
            _   => println!("  ⚠  Enter 1–4 or q."),
        }
        println!();
    }
}

fn show_aliases(n: i64, aliases: &[Pitch]) {
    let names: Vec<String> = aliases.iter().map(|p| p.display_name()).collect();
    let ids:   Vec<String> = aliases.iter().map(|p| p.identifier()).collect();
    println!("  Note number {:3}: names {:?}, ids {:?}", n, names, ids);
}

fn print_menu() {
    println!("  ┌──────────────────────────────────────────────────────┐");
    println!("  │  1. Look up a note number                            │");
    println!("  │  2. Look up an octave + semitone offset              │");
    println!("  │  3. Look up an identifier                            │");
    println!("  │  4. List a whole octave                              │");
    println!("  │  q. Quit                                             │");
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
