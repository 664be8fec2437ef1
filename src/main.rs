use chordal::{
    parse_sheet, Chord, EleventhQuality, NinthQuality, PitchClass, SeventhQuality, Slot,
    ThirteenthQuality,
};
use std::env;
use std::fs;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        run_demo();
        return;
    }

    let mut as_yaml = false;
    let mut input_path = &args[1];

    // Parse flags
    if args[1] == "--yaml" {
        as_yaml = true;
        if args.len() < 3 {
            eprintln!("Usage: chordal --yaml <sheet.yaml>");
            process::exit(1);
        }
        input_path = &args[2];
    } else if args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: chordal                      run the built-in demonstration");
        eprintln!("       chordal <sheet.yaml>         print every chord of a sheet");
        eprintln!("       chordal --yaml <sheet.yaml>  print chord reports as YAML");
        return;
    }

    // Read input file
    let source = match fs::read_to_string(input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    if as_yaml {
        match chordal::sheet_to_yaml(&source) {
            Ok(yaml) => print!("{}", yaml),
            Err(e) => {
                eprintln!("Chord sheet error: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let sheet = match parse_sheet(&source) {
        Ok(sheet) => sheet,
        Err(e) => {
            eprintln!("Chord sheet error: {}", e);
            process::exit(1);
        }
    };

    if let Some(title) = &sheet.title {
        println!("{}", title);
        println!("--------------------");
    }
    for chord in &sheet.chords {
        print_chord(chord);
        println!("--------------------");
    }
}

/// Build C13 two ways, then move the step-by-step chord to G
fn run_demo() {
    println!("--------------------");
    println!("Chord on C, thirteenth set directly");
    println!("--------------------");

    let mut direct = Chord::new(PitchClass::C);
    direct.set_quality(ThirteenthQuality::Major);
    print_chord(&direct);

    println!("--------------------");
    println!("Chord on C, seventh, ninth, eleventh and thirteenth set in turn");
    println!("--------------------");

    let mut stepwise = Chord::new(PitchClass::C);
    stepwise.set_quality(SeventhQuality::Minor);
    stepwise.set_quality(NinthQuality::Major);
    stepwise.set_quality(EleventhQuality::Perfect);
    stepwise.set_quality(ThirteenthQuality::Major);
    print_chord(&stepwise);

    println!("--------------------");
    println!("New root: G");
    println!("--------------------");

    stepwise.set_root(PitchClass::G);
    print_chord(&stepwise);

    println!("--------------------");
}

fn print_chord(chord: &Chord) {
    println!("root: {}", chord.root());
    for slot in Slot::ALL {
        if let Some(tone) = chord.tone(slot) {
            println!("{}: {} ({}, {} semitones)", slot, tone.note, tone.quality.label(), tone.offset);
        }
    }
    let notes: Vec<String> = chord.note_signature().iter().map(|pc| pc.to_string()).collect();
    println!("note signature: [{}]", notes.join(", "));
    println!("interval signature: {:?}", chord.interval_signature());
}
