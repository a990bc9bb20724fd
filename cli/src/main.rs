use std::{
    fmt::{self, Display},
    io::{self, BufRead, Write},
};

use anyhow::Result;
use clap::{clap_app, crate_authors, crate_description, crate_version};
use num_bigint::BigInt;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use printer::{
    config::{Configuration, ConfigurationCategory},
    environment::Environment,
    memory::Heap,
    value::Value,
    PrintError,
};

mod info;

/// Errors encountered while interpreting the input arguments
#[derive(Debug, Error)]
enum InputError {
    #[error("Unknown printer option `{name}`{suggestion}")]
    UnknownOption { name: String, suggestion: Suggestion },

    #[error("Encountered errors while printing values:\n{errors}")]
    PrintErrors { errors: PrintErrorVec },
}

/// Optional "did you mean" hint
#[derive(Debug)]
struct Suggestion(Option<&'static str>);

impl Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(name) => write!(f, ", did you mean `{}`?", name),
            None => Ok(()),
        }
    }
}

/// New type wrapper to provide display impl
#[derive(Debug)]
struct PrintErrorVec(Vec<(usize, PrintError)>);

impl Display for PrintErrorVec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, err) in &self.0 {
            writeln!(f, "value {}: {}", idx + 1, err)?;
        }

        Ok(())
    }
}

fn main() {
    if let Err(e) = run() {
        // stdout only carries literal forms
        let _ = report(&mut io::stderr(), &e);
        std::process::exit(1);
    }
}

fn report(out: &mut impl Write, err: &anyhow::Error) -> io::Result<()> {
    writeln!(out, "Error:\n{}", err)
}

fn run() -> Result<()> {
    // diagnostics go to stderr with the error report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let matches = clap_app!(show =>
        (version: crate_version!())
        (author: crate_authors!())
        (about: crate_description!())
        (@arg values: +multiple "Values to print.  If not present each line of stdin is printed as a string.")
        (@arg strings: -s --strings "Treat every value as a string")
        (@arg list: -l --list conflicts_with[tuple] "Print all of the values as a single list")
        (@arg tuple: -t --tuple "Print all of the values as a single tuple")
        (@arg set: --set +takes_value +multiple number_of_values(1) "Set a printer option, as `name` or `name=value`")
        (@subcommand info =>
            (about: "Print documentation about literal forms")
            (@arg value: +takes_value +multiple "The documentation topic to get"))
    )
    .get_matches();

    // print documentation if requested
    if let Some(matches) = matches.subcommand_matches("info") {
        match matches.values_of("value") {
            Some(values) => {
                // if multiple inputs are entered assume they are words in a
                // space separated string
                info::info(Some(&values.collect::<Vec<_>>().join(" ")));
            }
            None => info::info(None),
        }
        return Ok(());
    }

    let mut config = Configuration::new();
    if let Some(settings) = matches.values_of("set") {
        for setting in settings {
            apply_setting(&mut config, setting)?;
        }
    }

    let mut env = Environment::new(config);
    let as_strings = matches.is_present("strings");

    let mut values = vec![];
    match matches.values_of("values") {
        Some(inputs) => {
            for input in inputs {
                values.push(to_value(env.heap_mut(), input, as_strings));
            }
        }
        None => {
            for line in io::stdin().lock().lines() {
                values.push(env.heap_mut().string(line?));
            }
        }
    }

    if matches.is_present("list") {
        values = vec![env.heap_mut().list(values)];
    } else if matches.is_present("tuple") {
        values = vec![env.heap_mut().tuple(values)];
    }

    // print everything possible, then report all failures together
    let mut errors = vec![];
    for (idx, value) in values.into_iter().enumerate() {
        match env.show(value) {
            Ok(literal) => println!("{}", literal),
            Err(err) => errors.push((idx, err)),
        }
    }

    if !errors.is_empty() {
        return Err(InputError::PrintErrors {
            errors: PrintErrorVec(errors),
        }
        .into());
    }

    Ok(())
}

/// Set a configuration flag from `name` or `name=value`, a bare name sets
/// the flag to true
fn apply_setting(config: &mut Configuration, setting: &str) -> Result<()> {
    let (name, value) = setting.split_once('=').unwrap_or((setting, "true"));
    let name = name.trim();

    let flag = match config.lookup(ConfigurationCategory::Printer, name) {
        Some(flag) => flag,
        None => {
            // try fuzzy string matching
            let suggestion = config
                .iter()
                .map(|flag| (flag.name(), strsim::normalized_damerau_levenshtein(flag.name(), name)))
                .filter(|(_, sim)| *sim >= 0.5)
                .fold(None, |acc: Option<(&'static str, f64)>, (flag, sim)| match acc {
                    Some((_, best)) if best >= sim => acc,
                    _ => Some((flag, sim)),
                })
                .map(|(flag, _)| flag);

            return Err(InputError::UnknownOption {
                name: name.to_string(),
                suggestion: Suggestion(suggestion),
            }
            .into());
        }
    };

    debug!(option = flag.name(), value, "setting printer option");
    config.set_from_str(flag, value.trim())?;

    Ok(())
}

/// Guess the shape of a command line argument.  This is not a reader, the
/// argument is only checked against a few simple forms.
fn to_value(heap: &mut Heap, input: &str, as_string: bool) -> Value {
    if as_string {
        return heap.string(input);
    }

    match input {
        "true" => return heap.bool(true),
        "false" => return heap.bool(false),
        _ => (),
    }

    if let Ok(val) = input.parse::<i64>() {
        let num = heap.integer(val);
        return heap.number(num);
    }

    if let Ok(val) = input.parse::<BigInt>() {
        let num = heap.bigint(val);
        return heap.number(num);
    }

    if let Some((numerator, denominator)) = input.split_once('/') {
        if let (Ok(numerator), Ok(denominator)) =
            (numerator.parse::<BigInt>(), denominator.parse::<BigInt>())
        {
            if let Ok(num) = heap.rational(numerator, denominator) {
                return heap.number(num);
            }
        }
    }

    let lower = input.to_ascii_lowercase();
    if lower.contains('.') || lower.contains('e') || lower.contains("inf") || lower.contains("nan") {
        if let Ok(val) = input.parse::<f64>() {
            let num = heap.double(val);
            return heap.number(num);
        }
    }

    if let Some(name) = input.strip_prefix(':') {
        if !name.is_empty() {
            return heap.symbol(name);
        }
    }

    heap.string(input)
}
