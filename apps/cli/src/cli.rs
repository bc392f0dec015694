use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about = "Portfolio catalog tooling")]
pub struct CliArgs {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a catalog and report problems
    Check(CatalogArgs),

    /// Print totals, featured split and per-category/tag counts
    Stats {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Print stats as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the gallery titles the site shows for one filter
    Filter {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Category tab to select
        #[arg(long, conflicts_with = "tag", required_unless_present = "tag")]
        category: Option<String>,

        /// Tag to select
        #[arg(long)]
        tag: Option<String>,

        /// Print titles as a JSON array
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Path to projects.json
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Separate featured.json replacing the `featured` flags
    #[arg(long, value_name = "PATH")]
    pub featured: Option<PathBuf>,
}

impl CliArgs {
    pub const fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CliArgs, Command};
    use clap::{CommandFactory, Parser};

    #[test]
    fn command_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn filter_needs_exactly_one_selector() {
        assert!(CliArgs::try_parse_from(["portfolio", "filter", "projects.json"]).is_err());
        assert!(CliArgs::try_parse_from([
            "portfolio",
            "filter",
            "projects.json",
            "--category",
            "web",
            "--tag",
            "rust"
        ])
        .is_err());

        let args =
            CliArgs::try_parse_from(["portfolio", "filter", "projects.json", "--tag", "rust"])
                .unwrap();
        match args.command {
            Command::Filter { tag, category, .. } => {
                assert_eq!(tag.as_deref(), Some("rust"));
                assert!(category.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn debug_flag_is_global() {
        let args =
            CliArgs::try_parse_from(["portfolio", "stats", "projects.json", "--json", "--debug"])
                .unwrap();
        assert!(args.debug);
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
    }
}
