use libtzdef::{definitions, TzError};
use std::{env, process};

// Prints the transitions of a zone, for one year (0 for the current one) or all of them
fn run(args: &[String]) -> Result<(), TzError> {
    let requested_timezone = args.get(1).ok_or(TzError::InvalidTimezone)?;
    let year = match args.get(2) {
        Some(y) => Some(y.parse::<i32>()?),
        None => None,
    };
    let tz = definitions::get(requested_timezone)?;
    for t in tz.transition_times(year)? {
        println!("{} {} {} {}", t.time, t.utc_offset, t.isdst, t.abbreviation);
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: libtzdef <timezone> [year]");
        let zones: Vec<&str> = definitions::all_identifiers().collect();
        eprintln!("available timezones: {}", zones.join(", "));
        process::exit(1);
    }
    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
