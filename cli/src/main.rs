//! Interactive degrees-of-separation prompt.
//!
//! Loads a data directory, then loops: read two names, resolve them to
//! person identities (asking the user to pick when a name is shared),
//! run the shortest-path search, and print the chain of shared movies.

#![forbid(unsafe_code)]

use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process;

use degrees_data::{Dataset, NameResolution, PersonId};
use degrees_search::search::{shortest_path, SearchLimits, SearchOutcome};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let directory = args.next().unwrap_or_else(|| "large".to_string());
    if args.next().is_some() {
        eprintln!("Usage: degrees [directory]");
        process::exit(2);
    }

    println!("Loading data...");
    let dataset = Dataset::load(&directory)?;
    println!("Data loaded.");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let Some(source) = resolve_person(&dataset, &mut input, "Name: ")? else {
            eprintln!("Person not found.");
            process::exit(1);
        };
        let Some(target) = resolve_person(&dataset, &mut input, "Name: ")? else {
            eprintln!("Person not found.");
            process::exit(1);
        };

        let result = shortest_path(&dataset, &source, &target, SearchLimits::default())?;
        match result.outcome {
            SearchOutcome::NotConnected => println!("Not connected."),
            SearchOutcome::LimitReached => println!("Search gave up before an answer."),
            SearchOutcome::Path(path) => print_chain(&dataset, &source, &path),
        }

        let again = prompt(&mut input, "Enter \"yes\" to play again: ")?;
        if again.as_deref() != Some("yes") {
            break;
        }
    }

    Ok(())
}

/// Print the numbered "X and Y starred in Z" chain for a found path.
fn print_chain(
    dataset: &Dataset,
    source: &PersonId,
    path: &[degrees_search::node::Action<PersonId, degrees_data::MovieId>],
) {
    println!("{} degrees of separation.", path.len());
    let mut previous = source.clone();
    for (i, step) in path.iter().enumerate() {
        let person1 = person_name(dataset, &previous);
        let person2 = person_name(dataset, &step.state);
        let movie = dataset
            .movie(&step.edge)
            .map_or_else(|| step.edge.to_string(), |m| m.title.clone());
        println!("{}: {person1} and {person2} starred in {movie}", i + 1);
        previous = step.state.clone();
    }
}

fn person_name(dataset: &Dataset, id: &PersonId) -> String {
    dataset
        .person(id)
        .map_or_else(|| id.to_string(), |p| p.name.clone())
}

/// Ask for a name and resolve it, prompting for a specific identity when
/// several people share the name. `None` means the name (or the chosen
/// identity) does not resolve.
fn resolve_person(
    dataset: &Dataset,
    input: &mut impl BufRead,
    label: &str,
) -> Result<Option<PersonId>, Box<dyn Error>> {
    let Some(name) = prompt(input, label)? else {
        return Ok(None);
    };
    match dataset.resolve_name(&name) {
        NameResolution::NotFound => Ok(None),
        NameResolution::Unique(id) => Ok(Some(id)),
        NameResolution::Ambiguous(candidates) => {
            println!("Which '{name}'?");
            for candidate in &candidates {
                println!(
                    "ID: {}, Name: {}, Birth: {}",
                    candidate.id, candidate.name, candidate.birth
                );
            }
            let Some(chosen) = prompt(input, "Intended Person ID: ")? else {
                return Ok(None);
            };
            let chosen = PersonId(chosen);
            if candidates.iter().any(|c| c.id == chosen) {
                Ok(Some(chosen))
            } else {
                Ok(None)
            }
        }
    }
}

/// Print a label, flush, and read one trimmed line. `None` on EOF.
fn prompt(input: &mut impl BufRead, label: &str) -> Result<Option<String>, Box<dyn Error>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
