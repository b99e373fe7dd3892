//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "subset")]
#[command(author, version, about = "Print K random lines of the input", long_about = None)]
pub struct Args {
    /// How many random lines to print
    pub count: usize,

    /// Read lines from this file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Seed the generator for reproducible output
    #[arg(long, env = "SUBSET_SEED")]
    pub seed: Option<u64>,

    /// Output format as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_count_only() {
        let args = Args::try_parse_from(["subset", "3"]).unwrap();
        assert_eq!(args.count, 3);
        assert!(args.input.is_none());
        assert!(!args.json);
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_all_flags() {
        let args =
            Args::try_parse_from(["subset", "-v", "--json", "--seed", "7", "-i", "lines.txt", "2"])
                .unwrap();
        assert_eq!(args.count, 2);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.input, Some(PathBuf::from("lines.txt")));
        assert!(args.json);
        assert!(args.verbose);
    }

    #[test]
    fn test_rejects_negative_count() {
        assert!(Args::try_parse_from(["subset", "-1"]).is_err());
        assert!(Args::try_parse_from(["subset", "many"]).is_err());
        assert!(Args::try_parse_from(["subset"]).is_err());
    }
}
