use clap::Parser;
use shiftfix::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(_summary) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information when no subcommand is provided
fn show_help_and_commands() {
    println!("Shiftfix - Delimited Text Repair Tool");
    println!("=====================================");
    println!();
    println!("Repair data-shifting corruption in delimiter-separated text files by");
    println!("rebuilding logical records split across multiple physical lines.");
    println!();
    println!("USAGE:");
    println!("    shiftfix <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Repair a delimited text file (main command)");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Repair a file with the default dialect (|^| delimiter, \" qualifier):");
    println!("    shiftfix process export.txt export_fixed.txt");
    println!();
    println!("    # Explicit dialect and custom error destinations:");
    println!("    shiftfix process export.txt --delimiter ',' --qualifier '\"' \\");
    println!("                     --error-log errs.log --error-transactions errs.txt");
    println!();
    println!("    # Drop unfixable records from the corrected output:");
    println!("    shiftfix process export.txt --suppress-flagged");
    println!();
    println!("For detailed help on any command, use:");
    println!("    shiftfix <COMMAND> --help");
}
