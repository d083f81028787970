use std::env;
use std::io::{self, Write};
use std::process;

use crossterm::tty::IsTty;

use stigmergy::clock::WallClock;
use stigmergy::demo;
use stigmergy::sequencer::Sequencer;
use stigmergy::shutdown;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("stigmergy {}", VERSION);
                return;
            }
            other => {
                eprintln!("error: unexpected argument '{}'", other);
                eprintln!("The demo takes no arguments; see --help.");
                process::exit(2);
            }
        }
    }

    if let Err(e) = shutdown::register_handler() {
        eprintln!("warning: {}", e);
    }

    let stdout = io::stdout();
    let color = stdout.is_tty();
    let sequencer =
        Sequencer::new(&demo::ACTORS, demo::script(), demo::summary()).with_color(color);
    let clock = WallClock::with_jitter(0.15);

    let mut out = stdout.lock();
    if let Err(e) = sequencer.run(&mut out, &clock) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
    let _ = out.flush();

    if shutdown::requested() {
        process::exit(130);
    }
}

fn print_help() {
    println!(
        r#"stigmergy - scripted demo of multi-agent coordination via shared artifacts

Plays a fixed console animation of four AI agents coordinating a task
through shared files and git commits, with no direct messaging. The
script is hard-coded; the program takes no arguments.

USAGE:
    stigmergy

OPTIONS:
    -h, --help       Show this help message
    -V, --version    Show version"#
    );
}
