//! Menagerie - Entry Point
//!
//! Interactive host for the zoo engine: advances day ticks, issues
//! purchase/care commands and renders read-only snapshots. All simulation
//! logic lives in the library; this binary only drives it.

use clap::Parser;
use std::io::{self, Write};

use menagerie::core::error::Result;
use menagerie::core::types::{CreatureId, FoodKind, HabitatId};
use menagerie::creature::FeedOutcome;
use menagerie::zoo::Zoo;

#[derive(Parser, Debug)]
#[command(name = "menagerie", about = "Day-tick zoo management simulation")]
struct Args {
    /// Seed for the simulation rng; the same seed replays the same story
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Run this many days non-interactively, print a summary and exit
    #[arg(long)]
    days: Option<u32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menagerie=info".into()),
        )
        .init();

    let args = Args::parse();
    let mut zoo = Zoo::with_starter_layout(args.seed);
    tracing::info!(seed = args.seed, "zoo opened");

    if let Some(days) = args.days {
        for _ in 0..days {
            zoo.advance_day();
        }
        print_status(&zoo);
        return Ok(());
    }

    println!("\n=== MENAGERIE ===");
    println!("A day-tick zoo management simulation");
    println!();
    print_help();

    let stdin = io::stdin();
    loop {
        print!("\n[day {} | ${:.2}] > ", zoo.day(), zoo.balance());
        let _ = io::stdout().flush();

        let mut line = String::new();
        if stdin.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = parts.first().copied().unwrap_or("");

        let outcome = match command {
            "" => continue,
            "q" | "quit" => break,
            "h" | "help" => {
                print_help();
                Ok(())
            }
            "t" | "tick" => {
                zoo.advance_day();
                print_recent_events(&zoo, 5);
                Ok(())
            }
            "run" => match parts.get(1).and_then(|n| n.parse::<u32>().ok()) {
                Some(n) => {
                    for _ in 0..n {
                        zoo.advance_day();
                    }
                    print_recent_events(&zoo, 10);
                    Ok(())
                }
                None => {
                    println!("usage: run <days>");
                    Ok(())
                }
            },
            "s" | "status" => {
                print_status(&zoo);
                Ok(())
            }
            "log" => {
                print_recent_events(&zoo, 20);
                Ok(())
            }
            "export" => {
                match serde_json::to_string_pretty(&zoo.snapshot()) {
                    Ok(json) => println!("{json}"),
                    Err(e) => println!("export failed: {e}"),
                }
                Ok(())
            }
            "buy-food" => buy_food(&mut zoo, &parts),
            "buy-animal" => buy_animal(&mut zoo, &parts),
            "clean" => with_habitat_arg(&parts, |id| zoo.clean_habitat(id)),
            "upgrade" => with_habitat_arg(&parts, |id| zoo.upgrade_habitat(id)),
            "feed" => feed(&mut zoo, &parts),
            "med" => match parts.get(1).and_then(|n| n.parse::<u32>().ok()) {
                Some(id) => zoo.give_medicine(CreatureId(id)),
                None => {
                    println!("usage: med <creature-id>");
                    Ok(())
                }
            },
            "call" => {
                match parts.get(1).and_then(|n| n.parse::<u32>().ok()) {
                    Some(id) => {
                        let creature = zoo
                            .habitats()
                            .iter()
                            .find_map(|h| h.get(CreatureId(id)));
                        match creature {
                            Some(c) => println!("{}: {}", c.name, c.call()),
                            None => println!("no creature #{id}"),
                        }
                    }
                    None => println!("usage: call <creature-id>"),
                }
                Ok(())
            }
            "breed" => breed(&mut zoo, &parts),
            other => {
                println!("unknown command: {other} (try 'help')");
                Ok(())
            }
        };

        if let Err(e) = outcome {
            println!("error: {e}");
        }
    }

    println!("Goodbye.");
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  tick / t                         - advance one day");
    println!("  run <n>                          - advance n days");
    println!("  status / s                       - show the whole park");
    println!("  log                              - recent events");
    println!("  export                           - dump a JSON snapshot");
    println!("  buy-food <kind> <qty> <price>    - stock up the pantry");
    println!("  buy-animal <species> <habitat>   - e.g. buy-animal koala 1");
    println!("  clean <habitat>                  - clean an enclosure");
    println!("  upgrade <habitat>                - upgrade an enclosure");
    println!("  feed <creature-id> <kind>        - hand-feed one portion");
    println!("  med <creature-id>                - give one dose of medicine");
    println!("  call <creature-id>               - hear an animal's call");
    println!("  breed <id-a> <id-b>              - attempt to breed a pair");
    println!("  quit / q                         - exit");
}

fn print_status(zoo: &Zoo) {
    let snapshot = zoo.snapshot();
    println!("\n{} - day {} - balance ${:.2}", snapshot.name, snapshot.day, snapshot.balance);
    for habitat in &snapshot.habitats {
        println!(
            "  [{}] {} ({}) {}/{} residents, cleanliness {:.1}, level {}",
            habitat.id.0,
            habitat.name,
            habitat.habitat_type,
            habitat.residents.len(),
            habitat.capacity,
            habitat.cleanliness,
            habitat.upgrade_level,
        );
        for c in &habitat.residents {
            println!(
                "    #{} {} ({}, {:?}) age {:.1} hp {:.1} hunger {:.1} happy {:.1}{}",
                c.id.0,
                c.name,
                c.species,
                c.sex,
                c.age,
                c.health,
                c.hunger,
                c.happiness,
                if c.pregnant { " [pregnant]" } else { "" },
            );
        }
    }
    println!("  food: {:?}", snapshot.food);
    println!("  medicine: {:?}", snapshot.medicine);
}

fn print_recent_events(zoo: &Zoo, n: usize) {
    for event in zoo.events().tail(n) {
        println!("  {event}");
    }
}

fn buy_food(zoo: &mut Zoo, parts: &[&str]) -> Result<()> {
    let (Some(kind), Some(qty), Some(price)) = (
        parts.get(1).and_then(|s| FoodKind::parse(s)),
        parts.get(2).and_then(|s| s.parse::<u32>().ok()),
        parts.get(3).and_then(|s| s.parse::<f64>().ok()),
    ) else {
        println!("usage: buy-food <kind> <qty> <unit-price>");
        return Ok(());
    };
    zoo.buy_food(kind, qty, price)?;
    println!("bought {qty}x {kind}");
    Ok(())
}

fn buy_animal(zoo: &mut Zoo, parts: &[&str]) -> Result<()> {
    let (Some(species), Some(habitat)) = (
        parts.get(1),
        parts.get(2).and_then(|s| s.parse::<u32>().ok()),
    ) else {
        println!("usage: buy-animal <species> <habitat-id> [price]");
        return Ok(());
    };
    let price = parts.get(3).and_then(|s| s.parse::<f64>().ok()).unwrap_or(300.0);
    let id = zoo.buy_creature(species, HabitatId(habitat), price)?;
    println!("bought creature #{} for ${price:.2}", id.0);
    Ok(())
}

fn feed(zoo: &mut Zoo, parts: &[&str]) -> Result<()> {
    let (Some(id), Some(kind)) = (
        parts.get(1).and_then(|s| s.parse::<u32>().ok()),
        parts.get(2).and_then(|s| FoodKind::parse(s)),
    ) else {
        println!("usage: feed <creature-id> <kind>");
        return Ok(());
    };
    match zoo.feed_creature(CreatureId(id), kind)? {
        FeedOutcome::Eaten { nutrition } => println!("ate happily (-{nutrition:.1} hunger)"),
        FeedOutcome::Refused => println!("refused most of it"),
    }
    Ok(())
}

fn breed(zoo: &mut Zoo, parts: &[&str]) -> Result<()> {
    let (Some(a), Some(b)) = (
        parts.get(1).and_then(|s| s.parse::<u32>().ok()),
        parts.get(2).and_then(|s| s.parse::<u32>().ok()),
    ) else {
        println!("usage: breed <id-a> <id-b>");
        return Ok(());
    };
    if zoo.attempt_breed(CreatureId(a), CreatureId(b))? {
        println!("breeding succeeded - the female is pregnant");
    } else {
        println!("breeding attempt failed");
    }
    Ok(())
}

fn with_habitat_arg(parts: &[&str], f: impl FnOnce(HabitatId) -> Result<()>) -> Result<()> {
    match parts.get(1).and_then(|s| s.parse::<u32>().ok()) {
        Some(id) => f(HabitatId(id)),
        None => {
            println!("usage: {} <habitat-id>", parts.first().unwrap_or(&"?"));
            Ok(())
        }
    }
}
