//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "condio",
    about = "Greet in several languages, writing only the requested language files."
)]
/// Greeter command and parameters.
///
/// ```sh
/// condio 0.1.0
///
/// USAGE:
///     condio [FLAGS] [OPTIONS] [languages]...
///
/// FLAGS:
///     -h, --help       Prints help information
///     -q, --quiet      do not print to stdout
///     -V, --version    Prints version information
///
/// OPTIONS:
///     -d, --dst <dst>        destination of greeting files [default: .]
///     -n, --names <names>    names to greet, one per line (skipped if missing) [default: names.txt]
///
/// ARGS:
///     <languages>...    languages to greet in (english, french, german, swedish)
/// ```
pub struct Condio {
    #[structopt(help = "languages to greet in (english, french, german, swedish)")]
    pub languages: Vec<String>,
    #[structopt(
        parse(from_os_str),
        short = "n",
        long = "names",
        help = "names to greet, one per line (skipped if missing)",
        default_value = "names.txt"
    )]
    pub names: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "d",
        long = "dst",
        help = "destination of greeting files",
        default_value = "."
    )]
    pub dst: PathBuf,
    #[structopt(short = "q", long = "quiet", help = "do not print to stdout")]
    pub quiet: bool,
}
