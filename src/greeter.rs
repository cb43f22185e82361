/*! Multilingual greeter

Writes a greeting in every requested language to its own file (see [crate::lang::GREETINGS]),
then greets every name found in the names file, if there is one.

Every language stream is registered, requested or not: streams of languages that were not asked for
are discarded, so the greeting loop does not need to know which languages are enabled.
!*/
use std::{collections::HashSet, path::Path};

use log::{info, warn};

use crate::{
    error::Error,
    io::{default_alias, ConditionalStreamSet, OpenMode},
    lang::{GREETINGS, LANGUAGES},
};

/// Greet in `languages`, writing into `dst`.
///
/// Names are read (one per line) from `names` if it exists; blank lines are skipped.
/// Returns the number of greeted names.
pub fn greet(
    languages: &HashSet<String>,
    names: &Path,
    dst: &Path,
    std_enabled: bool,
) -> Result<usize, Error> {
    for unknown in languages
        .iter()
        .filter(|l| !LANGUAGES.contains_key(l.as_str()))
    {
        warn!("unknown language {}, ignoring", unknown);
    }

    let names_alias = default_alias(names);
    let io = GREETINGS.iter().fold(
        ConditionalStreamSet::new(std_enabled).register_if_exists(names, OpenMode::Read, None),
        |set, g| {
            set.register(
                languages.contains(g.language),
                dst.join(g.filename),
                OpenMode::Write,
                Some(g.alias),
            )
        },
    );
    let io = io.acquire()?;

    for g in GREETINGS.iter() {
        io.write(g.world, Some(g.alias))?;
    }

    let mut nb_names = 0;
    for name in io.lines(&names_alias)? {
        let name = name?;
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        for g in GREETINGS.iter() {
            io.write(&g.to(name), Some(g.alias))?;
        }
        nb_names += 1;
    }
    info!("greeted {} names", nb_names);

    let io = io.release()?;
    io.write("All files have been closed, only stdout remains", None)?;

    Ok(nb_names)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn langs(l: &[&str]) -> HashSet<String> {
        l.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn greet_without_names() {
        let dst = tempfile::tempdir().unwrap();
        let names = dst.path().join("names.txt");

        let n = greet(&langs(&["english", "swedish"]), &names, dst.path(), false).unwrap();

        assert_eq!(n, 0);
        assert_eq!(
            fs::read_to_string(dst.path().join("hello.txt")).unwrap(),
            "Hello, world!\n"
        );
        assert_eq!(
            fs::read_to_string(dst.path().join("hej.txt")).unwrap(),
            "Hej, världen!\n"
        );
        assert!(!dst.path().join("bonjour.txt").exists());
        assert!(!dst.path().join("guten_tag.txt").exists());
        assert!(!names.exists());
    }

    #[test]
    fn greet_names() {
        let dst = tempfile::tempdir().unwrap();
        let names = dst.path().join("names.txt");
        fs::write(&names, "  Ada \n\nGrace\n").unwrap();

        let n = greet(&langs(&["french", "klingon"]), &names, dst.path(), false).unwrap();

        assert_eq!(n, 2);
        assert_eq!(
            fs::read_to_string(dst.path().join("bonjour.txt")).unwrap(),
            "Bonjour, monde !\nBonjour, Ada !\nBonjour, Grace !\n"
        );
        assert!(!dst.path().join("hello.txt").exists());
        assert_eq!(fs::read_to_string(&names).unwrap(), "  Ada \n\nGrace\n");
    }
}
