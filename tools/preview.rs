/// Preview — renders the sample play to stdout for eyeballing word choice.
///
/// Usage: preview [--seed <n>] [--banks <path.ron>] [--type <text|number>]
///
/// The sample is the classic two-character script: Hamlet and Juliet enter,
/// Juliet is set to 64 + 8 and printed, Hamlet to Juliet + 32 + 1 and
/// printed, everyone exits.

use playbill::core::play::{Act, IoType, Play};
use playbill::schema::value::Value;
use playbill::wordbanks::WordBanks;
use std::path::Path;
use std::process;
use std::str::FromStr;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let mut seed: u64 = 42;
    let mut banks_path: Option<String> = None;
    let mut io_type = IoType::Text;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = match args[i].parse() {
                    Ok(n) => n,
                    Err(_) => {
                        eprintln!("ERROR: --seed expects an unsigned integer");
                        process::exit(1);
                    }
                };
            }
            "--banks" if i + 1 < args.len() => {
                i += 1;
                banks_path = Some(args[i].clone());
            }
            "--type" if i + 1 < args.len() => {
                i += 1;
                io_type = match IoType::from_str(&args[i]) {
                    Ok(t) => t,
                    Err(e) => {
                        eprintln!("ERROR: {}", e);
                        process::exit(1);
                    }
                };
            }
            other => {
                eprintln!("ERROR: unknown argument '{}'", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let banks = match banks_path {
        Some(ref path) => match WordBanks::load_from_ron(Path::new(path)) {
            Ok(banks) => banks,
            Err(e) => {
                eprintln!("ERROR: failed to load word banks: {}", e);
                process::exit(1);
            }
        },
        None => WordBanks::default(),
    };

    let mut play = Play::new("Hi? Hi.").with_seed(seed).with_banks(banks);
    let hamlet = play.character("Hamlet", "a male.");
    let juliet = play.character("Juliet", "a female.");

    let mut act = Act::new("I", "The Only Act.");
    act.scene("sceneI", "I", "The Only Scene.", move |ctx| {
        ctx.enter(&[hamlet, juliet])?;
        ctx.set(juliet, Value::sum(64, 8))?;
        ctx.print(juliet, io_type)?;
        ctx.set(hamlet, Value::sum(juliet, Value::sum(32, 1)))?;
        ctx.print(hamlet, io_type)?;
        ctx.exit(&[])?;
        Ok(())
    });
    play.add_act(act);

    match play.render() {
        Ok(code) => println!("{}", code),
        Err(e) => {
            eprintln!("ERROR: render failed: {}", e);
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Usage: preview [--seed <n>] [--banks <path.ron>] [--type <text|number>]");
}
