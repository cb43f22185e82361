//! Greeting languages.
//!
//! Each language the greeter knows of has a stream alias, an output file name
//! and the two greetings it writes.
use std::collections::HashMap;

use lazy_static::lazy_static;

#[derive(Debug, PartialEq, Eq)]
pub struct Greeting {
    /// Name used on the command line.
    pub language: &'static str,
    pub alias: &'static str,
    pub filename: &'static str,
    pub world: &'static str,
    prefix: &'static str,
    suffix: &'static str,
}

impl Greeting {
    /// Greeting addressed to `name`.
    pub fn to(&self, name: &str) -> String {
        format!("{}{}{}", self.prefix, name, self.suffix)
    }
}

/// Known languages, in registration order.
pub static GREETINGS: [Greeting; 4] = [
    Greeting {
        language: "english",
        alias: "en",
        filename: "hello.txt",
        world: "Hello, world!",
        prefix: "Hello, ",
        suffix: "!",
    },
    Greeting {
        language: "french",
        alias: "fr",
        filename: "bonjour.txt",
        world: "Bonjour, monde !",
        prefix: "Bonjour, ",
        suffix: " !",
    },
    Greeting {
        language: "german",
        alias: "de",
        filename: "guten_tag.txt",
        world: "Guten Tag, Welt!",
        prefix: "Guten Tag, ",
        suffix: "!",
    },
    Greeting {
        language: "swedish",
        alias: "sw",
        filename: "hej.txt",
        world: "Hej, världen!",
        prefix: "Hej, ",
        suffix: "!",
    },
];

lazy_static! {
    /// Greetings by command line language name.
    pub static ref LANGUAGES: HashMap<&'static str, &'static Greeting> =
        GREETINGS.iter().map(|g| (g.language, g)).collect();
}
