//! # condio
//!
//! Conditionally enabled input/output streams, demonstrated by a multilingual greeter.
//!
//! ## Getting started
//!
//! ```sh
//! # writes hello.txt and hej.txt, greeting everyone listed in names.txt (if present)
//! condio english swedish
//! ```
//!
//! Set `RUST_LOG=debug` to see which streams are opened and discarded.
use std::collections::HashSet;

use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), condio::error::Error> {
    env_logger::init();

    let opt = cli::Condio::from_args();
    debug!("cli args\n{:#?}", opt);

    let languages: HashSet<String> = opt.languages.into_iter().collect();
    condio::greeter::greet(&languages, &opt.names, &opt.dst, !opt.quiet)?;

    Ok(())
}
