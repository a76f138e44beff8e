use clap::Parser;
use lake_survey::cli::{args::Args, commands};
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Create cancellation token for coordinating graceful shutdown
        let cancellation_token = CancellationToken::new();

        let command = commands::run(args, cancellation_token.clone());
        tokio::pin!(command);

        // On CTRL+C the command is told to stop and then allowed to finish,
        // so the HTTP server can drain in-flight requests
        tokio::select! {
            result = &mut command => result,
            Ok(()) = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                cancellation_token.cancel();
                command.await
            }
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Lake Survey - Fish survey data service");
    println!("======================================");
    println!();
    println!("Load per-lake fish survey documents with county and species reference");
    println!("lists, then query, aggregate and serve them from memory.");
    println!();
    println!("USAGE:");
    println!("    lake-survey <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    serve       Load the data and serve it over HTTP");
    println!("    query       Run one survey query and print the page as JSON");
    println!("    stats       Print species or county statistics as JSON");
    println!("    summary     Load the data and print ingestion statistics");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -v, --verbose    Increase logging verbosity (repeatable)");
    println!("    -q, --quiet      Only show errors");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Serve the default data directory on 127.0.0.1:8080:");
    println!("    lake-survey serve");
    println!();
    println!("    # Serve another data directory with 16 ingestion workers:");
    println!("    lake-survey serve --data-dir /srv/lakes --bind 0.0.0.0:8080 --workers 16");
    println!();
    println!("    # Largest walleye catches in Cass County since 2015:");
    println!("    lake-survey query --species walleye --county Cass --min-year 2015 \\");
    println!("                      --sort-by total_catch --order desc");
    println!();
    println!("    # Species statistics:");
    println!("    lake-survey stats --species \"northern pike\"");
    println!();
    println!("For detailed help on any command, use:");
    println!("    lake-survey <COMMAND> --help");
}
