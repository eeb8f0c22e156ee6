// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Table printer.
//!
//! Prints a JSON array of objects as a text table.
//!
//! ```text
//! tablefmt [FILE]
//! ```
//!
//! The document is read from `FILE`, or from stdin when it is absent or `-`.
//! Border glyphs, bold headers and column order come from the configuration
//! file managed by [`config`]. Diagnostics go to stderr and are controlled by
//! `RUST_LOG`, so stdout carries only the table.

mod config;
mod input;

use std::{env, io};

use anyhow::{Context, Result};
use crossterm::{execute, style::Print};
use tablefmt::Table;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// The entry point of the application.
///
/// Loads the configuration, reads and parses the records, then writes the
/// rendered table to stdout.
fn main() -> Result<()> {
    init_tracing();

    let config = config::load_config();
    debug!(?config, "configuration loaded");

    let path = env::args().nth(1);
    let json = input::read_input(path.as_deref()).context("Failed to read input")?;
    let rows = input::parse_records(&json).context("Failed to parse records")?;

    let table = Table::with_options(rows, config.to_options()).context("Failed to build table")?;

    let mut stdout = io::stdout();
    execute!(stdout, Print(&table), Print('\n')).context("Failed to write table")?;

    Ok(())
}

/// Installs a stderr logger filtered by `RUST_LOG`, defaulting to warnings.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
