use std::cell::RefCell;
use std::io::{stdin, stdout};
use structopt::StructOpt;

mod process;
mod scanner;

use process::Process;
use scanner::Scanner;

#[derive(Debug, StructOpt)]
struct Opts {
    /// Trace reads and the final state to stderr
    #[structopt(short, long)]
    debug: bool,
}

fn main() {
    let opts = Opts::from_args();

    let stdin = stdin();
    let input = RefCell::new(Scanner::new(stdin.lock()));
    let output = RefCell::new(stdout());

    let state = Process::new("doubler".to_string(), input, output)
        .debug(opts.debug)
        .execute();

    std::process::exit(state.exit_code());
}

#[test]
fn debug_flag() {
    assert!(Opts::from_iter(&["doubler", "--debug"]).debug);
    assert!(Opts::from_iter(&["doubler", "-d"]).debug);
    assert!(!Opts::from_iter(&["doubler"]).debug);
}
