use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use wordprobe::driver::{self, LookupStats};
use wordprobe::Strategy;

/// Loads DICTIONARY into a hash table, looks up every word of QUERIES and
/// prints the average number of comparisons per matched word.
#[derive(Parser)]
#[command(name = "wordprobe", about, version)]
struct Cli {
    /// Word list to build the table from, one word per line.
    dictionary: PathBuf,
    /// Word list to look up, one word per line.
    queries: PathBuf,
    #[arg(long, value_enum, default_value_t = Strategy::TreeChaining)]
    strategy: Strategy,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("ERROR: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let stats = measure(&Cli::parse())?;
    match stats.average() {
        Some(avg) => println!("{avg:.6}"),
        None => println!("No words matched"),
    }
    Ok(())
}

fn measure(cli: &Cli) -> Result<LookupStats> {
    driver::run(cli.strategy, &cli.dictionary, &cli.queries)
        .with_context(|| format!("running {:?}", cli.strategy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    /// Invariant: A dictionary that cannot be opened is reported as an open
    /// failure naming the file, under the strategy being run.
    #[test]
    fn open_failure_is_not_reported_as_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let cli = Cli::try_parse_from([
            OsStr::new("wordprobe"),
            OsStr::new("--strategy"),
            OsStr::new("list-chaining"),
            missing.as_os_str(),
            missing.as_os_str(),
        ])
        .unwrap();

        let message = format!("{:#}", measure(&cli).unwrap_err());
        assert!(message.starts_with("running ListChaining: failed to open"), "{message}");
        assert!(message.contains("missing.txt"), "{message}");
        assert!(!message.contains("lookup"), "{message}");
    }
}
