use clap::Parser;
use std::path::PathBuf;

use crate::runner::RunMode;

/// Run specific cells of a Jupyter notebook.
///
/// Exactly one selection mode is honored per invocation; when several are
/// given, the first of --all, --cell, --until, --from wins.
#[derive(Parser, Debug, Clone)]
#[command(name = "notebook_runner", about = "Run specific cells of a Jupyter notebook.", version)]
pub struct Cli {
    /// Path to the Jupyter notebook.
    #[arg(long, value_name = "PATH")]
    pub nb: Option<PathBuf>,

    /// Run all code cells in the notebook.
    #[arg(long)]
    pub all: bool,

    /// Run a specific cell by its number (1-based).
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub cell: Option<u64>,

    /// Run cells from the first until the given cell (inclusive).
    #[arg(long, value_name = "N")]
    pub until: Option<u64>,

    /// Run cells starting from the given cell number (1-based).
    #[arg(long = "from", value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub from_cell: Option<u64>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Collapse the mode flags to a selection mode, highest precedence first
    pub fn run_mode(&self) -> Option<RunMode> {
        if self.all {
            Some(RunMode::All)
        } else if let Some(n) = self.cell {
            Some(RunMode::Cell(n as usize))
        } else if let Some(n) = self.until {
            Some(RunMode::Until(n as usize))
        } else if let Some(n) = self.from_cell {
            Some(RunMode::From(n as usize))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("notebook_runner").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_single_mode_flags_map_to_run_modes() {
        assert_eq!(parse(&["--all"]).run_mode(), Some(RunMode::All));
        assert_eq!(parse(&["--cell", "2"]).run_mode(), Some(RunMode::Cell(2)));
        assert_eq!(parse(&["--until", "3"]).run_mode(), Some(RunMode::Until(3)));
        assert_eq!(parse(&["--from", "4"]).run_mode(), Some(RunMode::From(4)));
    }

    #[test]
    fn test_no_mode_flag_yields_no_mode() {
        assert_eq!(parse(&["--nb", "demo.ipynb"]).run_mode(), None);
    }

    #[test]
    fn test_mode_precedence_is_all_cell_until_from() {
        let cli = parse(&["--all", "--cell", "2", "--until", "3", "--from", "4"]);
        assert_eq!(cli.run_mode(), Some(RunMode::All));

        let cli = parse(&["--cell", "2", "--until", "3", "--from", "4"]);
        assert_eq!(cli.run_mode(), Some(RunMode::Cell(2)));

        let cli = parse(&["--until", "3", "--from", "4"]);
        assert_eq!(cli.run_mode(), Some(RunMode::Until(3)));
    }

    #[test]
    fn test_cell_numbers_are_one_based_at_the_parser() {
        let result = Cli::try_parse_from(["notebook_runner", "--cell", "0"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from(["notebook_runner", "--from", "0"]);
        assert!(result.is_err());
    }
}
