// File: ./src/cli.rs
//! Command-line arguments and help text of the `echo` binary.
use std::path::PathBuf;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub override_root: Option<PathBuf>,
    pub data_file: Option<PathBuf>,
    pub show_help: bool,
}

impl CliArgs {
    /// Scans `args` (program name first). Unknown flags are ignored, as is a
    /// flag missing its value.
    pub fn parse(args: &[String]) -> Self {
        let mut out = CliArgs::default();
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--help" | "-h" | "help" => out.show_help = true,
                "--root" | "-r" => {
                    if i + 1 < args.len() {
                        out.override_root = Some(args[i + 1].clone().into());
                        i += 1;
                    }
                }
                "--file" | "-f" => {
                    if i + 1 < args.len() {
                        out.data_file = Some(args[i + 1].clone().into());
                        i += 1;
                    }
                }
                _ => {}
            }
            i += 1;
        }
        out
    }
}

pub fn print_help(binary_name: &str) {
    println!(
        "Echo v{} - a small personal task tracker",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>] [--file <path>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -f, --file <path>     Read and write tasks in this file.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("COMMANDS:");
    println!("    todo <task>                               Add a task");
    println!("    deadline <task> /by <date>                Add a task with a due date");
    println!("    event <task> /from <start> /to <end>      Add an event");
    println!("          [/repeat daily|weekly|monthly]      ...that repeats");
    println!("    list                                      Show all tasks");
    println!("    find <keyword>                            Search descriptions");
    println!("    mark <n> / unmark <n>                     Set task n done / not done");
    println!("    delete <n>                                Remove task n");
    println!("    clear                                     Remove every task");
    println!("    bye                                       Quit");
    println!();
    println!("DATES:");
    println!("    2019-12-15 1800   Date and time (shown as Dec 15 2019, 6:00PM)");
    println!("    2019-12-15        Whole day (shown as Dec 15 2019)");
    println!("    anything else     Kept as typed (\"Sunday\", \"after lunch\")");
}
