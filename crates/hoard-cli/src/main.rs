//! hoard CLI - demonstration and diagnostics driver for the arena and
//! node store.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// hoard - fixed-capacity bump arena with linked records in raw bytes.
#[derive(Parser)]
#[command(name = "hoard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Basic bump allocation, usage accounting, and reset
    Alloc {
        /// Arena capacity in bytes
        #[arg(short, long, default_value = "128")]
        capacity: usize,
    },

    /// Aligned allocation, waste accounting, and the align() helper
    Align {
        /// Arena capacity in bytes
        #[arg(short, long, default_value = "128")]
        capacity: usize,
    },

    /// Build and traverse a linked list of nodes inside the arena
    Nodes {
        /// Arena capacity in bytes
        #[arg(short, long, default_value = "128")]
        capacity: usize,
    },

    /// Trigger each error kind and display the carried diagnostics
    Errors,

    /// Show the big-endian wire encoding of a stored 32-bit value
    Endian {
        /// Value to store (hexadecimal accepted with a 0x prefix)
        #[arg(short, long, default_value = "0x12345678")]
        value: String,
    },

    /// Run every demonstration in sequence
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Alloc { capacity } => commands::alloc::run(capacity),
        Commands::Align { capacity } => commands::align::run(capacity),
        Commands::Nodes { capacity } => commands::nodes::run(capacity),
        Commands::Errors => commands::errors::run(),
        Commands::Endian { value } => commands::endian::run(&value),
        Commands::Demo => commands::demo::run(),
    }
}
