//! CLI module for the Northwind catalog service

pub mod serve;

use clap::{Parser, Subcommand};

/// Northwind Catalog - cached CRUD API over the Northwind sample schema
#[derive(Parser)]
#[command(name = "northwind-catalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
}
