use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "faskes")]
#[command(about = "Build and preview the Faskes & Alkes province pages")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Province dataset JSON (bundled dataset when omitted)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the static pages
    Build {
        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Serve the pages from a local preview server
    Serve {
        /// Address to listen on, e.g. 127.0.0.1:3000
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
    /// Print the provinces list
    List {
        /// Only show provinces whose name contains this text
        #[arg(short, long, default_value = "")]
        query: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_data_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["faskes", "list", "--query", "jawa", "--data", "p.json"])
            .unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("p.json")));
        match cli.command {
            Commands::List { query, json } => {
                assert_eq!(query, "jawa");
                assert!(!json);
            }
            _ => panic!("expected list command"),
        }
    }
}
