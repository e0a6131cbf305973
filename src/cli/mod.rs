//! CLI module for the User Management API
//!
//! Provides subcommands for running the service:
//! - `serve`: run the HTTP server
//! - `migrate`: apply pending database migrations and exit

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// User Management API - CRUD service for user records
#[derive(Parser)]
#[command(name = "user-management-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Apply pending database migrations and exit
    Migrate,
}
