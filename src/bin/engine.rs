//! Line-protocol engine.
//!
//! Reads requests from stdin and answers on stdout, one line each.
//! Diagnostics go to stderr through the logger; set `RUST_LOG` to see more.

use std::io::{self, BufWriter};

use clap::{Parser, ValueEnum};
use infinite_ttt::{ConnectivityIndex, RunIndex, SessionConfig, Shell, WinIndex, WIN_LENGTH};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IndexOpt {
    /// Run lengths anchored at run extremes
    Run,
    /// Union-find components per axis
    Connectivity,
}

#[derive(Debug, Parser)]
#[command(name = "ttt-engine", about = "Five-in-a-row engine for an unbounded board")]
struct Args {
    /// Incremental index used for win detection
    #[arg(long, value_enum, default_value_t = IndexOpt::Run)]
    index: IndexOpt,

    /// Stones in a row needed to win
    #[arg(long, default_value_t = WIN_LENGTH, value_parser = clap::value_parser!(u32).range(1..))]
    win_length: u32,

    /// Reject moves with |x| or |y| above (stones placed + 1) * MARGIN
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
    coordinate_margin: Option<i64>,

    /// Declare a win once this many stones have been placed
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    max_game_length: Option<u64>,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        let mut config = SessionConfig::new().with_win_length(self.win_length);
        if let Some(margin) = self.coordinate_margin {
            config = config.with_coordinate_margin(margin);
        }
        if let Some(stones) = self.max_game_length {
            config = config.with_max_game_length(usize::try_from(stones).unwrap_or(usize::MAX));
        }
        config
    }
}

fn run<I: WinIndex + Default>(config: SessionConfig) -> io::Result<()> {
    let mut shell: Shell<I> = Shell::with_index(config);
    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    shell.serve(stdin, stdout)?;
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.session_config();
    log::info!("Starting with {:?}", config);

    match args.index {
        IndexOpt::Run => run::<RunIndex>(config),
        IndexOpt::Connectivity => run::<ConnectivityIndex>(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::try_parse_from(["ttt-engine"]).unwrap();
        assert!(matches!(args.index, IndexOpt::Run));
        assert_eq!(args.session_config(), SessionConfig::new());
    }

    #[test]
    fn test_policy_flags_map_to_config() {
        let args = Args::try_parse_from([
            "ttt-engine",
            "--index",
            "connectivity",
            "--win-length",
            "4",
            "--coordinate-margin",
            "100",
            "--max-game-length",
            "3",
        ])
        .unwrap();

        assert!(matches!(args.index, IndexOpt::Connectivity));
        let expected = SessionConfig::new()
            .with_win_length(4)
            .with_coordinate_margin(100)
            .with_max_game_length(3);
        assert_eq!(args.session_config(), expected);
    }

    #[test]
    fn test_out_of_range_flags_rejected() {
        assert!(Args::try_parse_from(["ttt-engine", "--win-length", "0"]).is_err());
        assert!(Args::try_parse_from(["ttt-engine", "--coordinate-margin", "-5"]).is_err());
        assert!(Args::try_parse_from(["ttt-engine", "--max-game-length", "0"]).is_err());
    }
}
