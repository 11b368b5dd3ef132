mod parser;
mod teams;
mod display;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use display::{print_game_plan, write_game_plan_json, write_game_plan_to_file};
use parser::load_roster;
use teams::{generate_game_plan, GameOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: volley-teams <roster.csv> [--capacity N] [--seed N] [--no-bracket] [--out FILE] [--json FILE]"
        );
        std::process::exit(2);
    }

    let csv_path = &args[1];
    let mut options = GameOptions::default();
    let mut seed: Option<u64> = None;
    let mut out_file: Option<String> = None;
    let mut json_file: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--capacity" => options.capacity = next_value(&args, &mut i)?.parse()?,
            "--seed" => seed = Some(next_value(&args, &mut i)?.parse()?),
            "--no-bracket" => options.bracket_threshold = None,
            "--out" => out_file = Some(next_value(&args, &mut i)?),
            "--json" => json_file = Some(next_value(&args, &mut i)?),
            other => return Err(format!("unknown argument: {}", other).into()),
        }
        i += 1;
    }

    println!("Loading roster from {}...", csv_path);
    let selected = load_roster(csv_path)?;
    println!("Loaded {} players (duplicate names merged)", selected.len());

    // Seeded runs reproduce the exact same teams, handy for reviewing a plan
    let mut rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let plan = generate_game_plan(&selected, &options, &mut rng)?;
    print_game_plan(&plan);

    if let Some(path) = out_file {
        write_game_plan_to_file(&plan, &path)?;
        println!("\nPlan saved to {}", path);
    }
    if let Some(path) = json_file {
        write_game_plan_json(&plan, &path)?;
        println!("Plan saved to {}", path);
    }

    Ok(())
}

/// Fetches the value following a flag, advancing the argument cursor
fn next_value(args: &[String], i: &mut usize) -> Result<String, Box<dyn std::error::Error>> {
    *i += 1;
    match args.get(*i) {
        Some(value) => Ok(value.clone()),
        None => Err(format!("missing value after {}", args[*i - 1]).into()),
    }
}
