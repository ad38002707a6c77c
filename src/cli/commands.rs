use clap::{Parser, Subcommand};

use scheme_setu::config::DEFAULT_CONFIG_PATH;

#[derive(Parser)]
#[command(name = "scheme-setu")]
#[command(about = "Match citizens to government welfare schemes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List schemes a citizen is eligible for
    Check {
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        age: f64,

        /// Annual household income
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        income: f64,

        /// Social category (General, OBC, SC, ST, ...)
        #[arg(short = 'C', long, default_value = "General")]
        category: String,

        /// Show every scheme with the reason it matched or not
        #[arg(short, long)]
        explain: bool,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Register a new scheme
    Learn {
        /// Read the scheme record from a JSON file instead of flags
        #[arg(long, conflicts_with_all = ["name", "description", "benefit"])]
        file: Option<String>,

        #[arg(long, required_unless_present = "file")]
        name: Option<String>,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "")]
        benefit: String,

        /// Application page URL
        #[arg(long)]
        link: Option<String>,

        #[arg(long)]
        min_age: Option<f64>,

        #[arg(long)]
        max_age: Option<f64>,

        #[arg(long)]
        max_income: Option<f64>,

        /// Allowed category; repeat for several, omit to allow all
        #[arg(long = "category")]
        categories: Vec<String>,
    },

    /// List all registered schemes
    List {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show a single scheme by id
    Show {
        id: String,
    },

    /// Send one JSON request to the agent and print the response
    Request {
        message: String,
    },

    /// Serve newline-delimited JSON requests from stdin
    Serve,

    /// Create the scheme document and show configuration
    Init,
}
