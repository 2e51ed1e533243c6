//! Position bias harness - prints, for every output position, how often
//! each character class lands there across many generations.
//!
//! With a uniform shuffle every position should show roughly the same class
//! mix as the password as a whole.
//!
//! Usage:
//!   ./position_bias                       # 100,000 samples, length 12, all classes
//!   ./position_bias -n 1000000 -l 8
//!   ./position_bias --classes ud          # uppercase + digits

use std::io::{self, Write};

use strongpass::pass::{self, CharacterClass, ClassSet, PoolSelection, clamp_length};

struct Options {
    samples: usize,
    length: usize,
    classes: ClassSet,
}

fn class_code(class: CharacterClass) -> char {
    match class {
        CharacterClass::Uppercase => 'u',
        CharacterClass::Lowercase => 'l',
        CharacterClass::Digit => 'd',
        CharacterClass::Symbol => 's',
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        samples: 100_000,
        length: 12,
        classes: ClassSet::all(),
    };

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "-n" | "--samples" => {
                let v = value.ok_or("missing value for --samples")?;
                options.samples = v.parse().map_err(|_| format!("Invalid number: {}", v))?;
                i += 1;
            }
            "-l" | "--length" => {
                let v = value.ok_or("missing value for --length")?;
                let n: i64 = v.parse().map_err(|_| format!("Invalid number: {}", v))?;
                options.length = clamp_length(n);
                i += 1;
            }
            "-c" | "--classes" => {
                let v = value.ok_or("missing value for --classes")?;
                options.classes = CharacterClass::ALL
                    .into_iter()
                    .filter(|class| v.contains(class_code(*class)))
                    .collect();
                i += 1;
            }
            arg => return Err(format!("Unknown argument: {}", arg)),
        }
        i += 1;
    }

    Ok(options)
}

fn print_help() {
    eprintln!("Usage: position_bias [OPTIONS]");
    eprintln!();
    eprintln!("Per-position character class frequencies over many generated passwords.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -n, --samples <N>    Passwords to generate (default: 100000)");
    eprintln!("  -l, --length <N>     Password length, clamped to 4..=32 (default: 12)");
    eprintln!("  -c, --classes <ulds> Classes to enable (default: ulds)");
    eprintln!("  -h, --help           Show this help");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        std::process::exit(0);
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let PoolSelection::Active(pool) = pass::build_pool(options.classes) else {
        eprintln!("Select at least one character class.");
        std::process::exit(1);
    };

    let active: Vec<CharacterClass> = options.classes.iter().collect();
    let mut counts = vec![vec![0usize; active.len()]; options.length];
    let mut rng = rand::thread_rng();

    for _ in 0..options.samples {
        let password = pass::generate(options.length, &pool, &mut rng);
        for (position, c) in password.chars().enumerate() {
            if let Some(k) = active.iter().position(|class| class.alphabet().contains(c)) {
                counts[position][k] += 1;
            }
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let header: String = active
        .iter()
        .map(|class| format!("{:>8}", class_code(*class)))
        .collect();
    let _ = writeln!(out, "pos{}", header);

    let mut worst = 0.0f64;
    let expected = 1.0 / active.len() as f64;
    for (position, row) in counts.iter().enumerate() {
        let shares: Vec<f64> = row
            .iter()
            .map(|&n| n as f64 / options.samples.max(1) as f64)
            .collect();
        for share in &shares {
            worst = worst.max((share - expected).abs());
        }
        let cells: String = shares.iter().map(|s| format!("{:>8.4}", s)).collect();
        let _ = writeln!(out, "{:>3}{}", position, cells);
    }
    let _ = writeln!(out, "max deviation from {:.4}: {:.4}", expected, worst);
}
