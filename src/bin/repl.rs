use clap::Parser;
use orokos_dice::{evaluate, render, Limits};
use std::io::{self, BufRead, Write};

/// Reads dice expressions from stdin, one per line, and prints their rolls.
#[derive(Parser, Debug)]
#[command(name = "repl", about = "Interactive dice roller")]
struct Args {
    /// Overrides one limit, e.g. `--limit rolls=200`. May be repeated.
    #[arg(long = "limit", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    limits: Vec<(String, i64)>,
}

/// Parses a single `key=value` limit override.
fn parse_key_val(s: &str) -> Result<(String, i64), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, found `{}`", s))?;
    let value = value
        .parse::<i64>()
        .map_err(|e| format!("invalid value for `{}`: {}", key, e))?;
    Ok((key.to_string(), value))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let limits = Limits::merged(args.limits);
    log::debug!("limits: {:?}", limits);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(Ok(line)) = lines.next() {
        if !line.trim().is_empty() {
            match evaluate(&line, &limits) {
                Ok(results) => {
                    let (text, symbols) = render(&results);
                    println!("{}", text);
                    if !symbols.is_empty() {
                        println!("{}", symbols.join(" "));
                    }
                }
                Err(why) => eprintln!("Error: {}", why.message()),
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_args() {
        let args = Args::try_parse_from(["repl", "--limit", "rolls=200", "--limit", "sides=20"]).unwrap();
        assert_eq!(args.limits, vec![("rolls".to_string(), 200), ("sides".to_string(), 20)]);
        let limits = Limits::merged(args.limits);
        assert_eq!(limits.max_dice_per_roll, 200);
    }

    #[test]
    fn test_no_args() {
        let args = Args::try_parse_from(["repl"]).unwrap();
        assert!(args.limits.is_empty());
    }

    #[test]
    fn test_bad_limit_args() {
        assert!(Args::try_parse_from(["repl", "--limit", "rolls"]).is_err());
        assert!(Args::try_parse_from(["repl", "--limit", "rolls=many"]).is_err());
        assert!(Args::try_parse_from(["repl", "--limit"]).is_err());
    }
}
