//! CLI argument parsing and subcommand dispatch.

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP server; `memory` swaps Postgres for the in-memory store.
    Serve { memory: bool },
    /// Run the seed operation once against the configured store and exit.
    Seed,
    Usage,
}

/// Parse CLI arguments (`args[0]` is the binary name). No subcommand means `serve`.
pub fn parse(args: &[String]) -> Command {
    match args.get(1).map(|s| s.as_str()) {
        None | Some("serve") => Command::Serve {
            memory: args.iter().skip(1).any(|a| a == "--memory"),
        },
        Some("seed") => Command::Seed,
        _ => Command::Usage,
    }
}

pub fn print_usage() {
    println!("travelog-server v{}", env!("CARGO_PKG_VERSION"));
    println!("Usage: travelog-server <command>");
    println!("  serve [--memory]   Start HTTP server (default; --memory skips PostgreSQL)");
    println!("  seed               Insert the built-in trips missing from the database");
}
