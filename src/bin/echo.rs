// Binary entry point: reads commands from stdin, one per line.
use anyhow::Result;
use echo::cli::{CliArgs, print_help};
use echo::config::Config;
use echo::context::StandardContext;
use echo::controller::{Reply, TaskController};
use echo::storage::Storage;
use std::env;
use std::io::{self, BufRead, Write};

const DIVIDER: &str = "____________________________________________________________";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let cli = CliArgs::parse(&args);

    if cli.show_help {
        print_help("echo");
        return Ok(());
    }

    let ctx = StandardContext::new(cli.override_root);
    let config = Config::load_or_default(&ctx)?;
    if let Err(e) = echo::logging::init(&config, &ctx) {
        eprintln!("Logging disabled: {:#}", e);
    }

    let storage = match cli.data_file {
        Some(path) => Storage::new(path).with_atomic(config.atomic_save),
        None => config.storage(&ctx)?,
    };
    log::info!("Using task file {:?}", storage.path());

    let (mut controller, load_error) = TaskController::open_or_empty(storage);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    say(&mut out, "Hello! I'm Echo\nWhat can I do for you?")?;
    match load_error {
        Some(e) => say(&mut out, &format!("{}\nNo previous data found. Starting fresh!", e))?,
        None => say(&mut out, &controller.load_summary())?,
    }

    for line in io::stdin().lock().lines() {
        let reply = match line {
            Ok(line) => controller.handle(&line),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => controller.handle_unreadable(e),
            Err(e) => {
                // Nothing more can be read; treat it like end of input
                log::error!("Stopped reading input: {}", e);
                break;
            }
        };
        match reply {
            Reply::Message(text) => say(&mut out, &text)?,
            Reply::Silent => {}
            Reply::Exit => break,
        }
    }

    say(&mut out, "Bye. Hope to see you again soon!")?;
    Ok(())
}

fn say(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{}", DIVIDER)?;
    for line in text.lines() {
        writeln!(out, " {}", line)?;
    }
    writeln!(out, "{}", DIVIDER)?;
    out.flush()
}
