#[macro_use]
extern crate log;
extern crate stderrlog;

use failure::Error;
use std::io;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "badgedims", about = "Print the pixel dimensions of the platform badge images.")]
struct Opt {
    #[structopt(short, long, parse(from_occurrences), help = "Increase log verbosity on stderr by adding more flags: [-v|-vv|-vvv]")]
    verbose: usize,
    #[structopt(short, long, help = "Do not log anything to stderr. The report itself is always printed.")]
    quiet: bool,
}

fn main() -> Result<(), Error> {
    init()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    badgedims::report(&mut out)?;
    trace!("Report complete");
    Ok(())
}

/// Get CLI options, initialize logging.
fn init() -> Result<Opt, Error> {
    let opt = Opt::from_args();
    stderrlog::new()
        .module(module_path!())
        .quiet(opt.quiet)
        .verbosity(opt.verbose)
        .init()?;
    trace!("Options initialized: {:?}", opt);
    Ok(opt)
}
