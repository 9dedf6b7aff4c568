// Triad walk generator — CLI entry point.
//
// Random-walks the harmonic transition tables from C major, re-voicing each
// chord for minimal melodic motion, and writes the result as a two-track
// standard MIDI file.
//
// Usage:
//   cargo run -p triad_walk -- [output.mid] [--seed N] [--chords N]

use std::path::Path;
use triad_walk::chord::ChordState;
use triad_walk::midi::MidiRenderer;
use triad_walk::progression::generate;
use triad_walk_prng::WalkRng;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let output_path = args
        .get(1)
        .filter(|s| !s.starts_with("--"))
        .map(|s| s.as_str())
        .unwrap_or("progression.mid");
    let seed: u64 = parse_flag(&args, "--seed").unwrap_or(0);
    let chords: usize = parse_flag(&args, "--chords").unwrap_or(24);

    println!("=== Triad Walk ===");
    println!("Output: {output_path}");
    println!("Seed: {seed}");
    println!("Chords: {chords}");
    println!();

    let mut rng = WalkRng::new(seed);
    let mut renderer = MidiRenderer::new();

    let progression = match generate(ChordState::c_major(), chords, &mut rng, &mut renderer) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: generation failed: {e}");
            std::process::exit(1);
        }
    };

    for (i, chord) in progression.iter().enumerate() {
        println!("{:3}. {chord}", i + 1);
    }

    println!();
    println!("Writing MIDI to {output_path}...");
    if let Err(e) = renderer.write(Path::new(output_path)) {
        eprintln!("Error writing MIDI: {e}");
        std::process::exit(1);
    }
    println!("Done. Play with: timidity {output_path} (or any MIDI player)");
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}
