use std::{fs, io::Read};

use condio::error::Error;
use condio::io::{default_alias, ConditionalStreamSet, EntrySpec, OpenMode};

#[test]
fn single_output_without_names() {
    let dst = tempfile::tempdir().unwrap();
    let names = dst.path().join("names.txt");
    let hello = dst.path().join("hello.txt");

    let io = ConditionalStreamSet::default()
        .register_if_exists(&names, OpenMode::Read, None)
        .register(true, &hello, OpenMode::Write, Some("en"))
        .acquire()
        .unwrap();

    io.write("Hello, world!", Some("en")).unwrap();
    assert_eq!(io.lines(&default_alias(&names)).unwrap().count(), 0);
    io.release().unwrap();

    assert_eq!(fs::read_to_string(&hello).unwrap(), "Hello, world!\n");
    assert!(!names.exists());
}

#[test]
fn disabled_output_is_untouched() {
    let dst = tempfile::tempdir().unwrap();
    let hello = dst.path().join("hello.txt");
    let bonjour = dst.path().join("bonjour.txt");
    let guten_tag = dst.path().join("guten_tag.txt");
    fs::write(&guten_tag, "already here\n").unwrap();

    let io = ConditionalStreamSet::default()
        .register(true, &hello, OpenMode::Write, Some("en"))
        .register(false, &bonjour, OpenMode::Write, Some("fr"))
        .register(false, &guten_tag, OpenMode::Write, Some("de"))
        .acquire()
        .unwrap();

    io.write("Hello, world!", Some("en")).unwrap();
    io.write("Bonjour, monde !", Some("fr")).unwrap();
    io.write("Guten Tag, Welt!", Some("de")).unwrap();
    io.release().unwrap();

    assert_eq!(fs::read_to_string(&hello).unwrap(), "Hello, world!\n");
    assert!(!bonjour.exists());
    assert_eq!(fs::read_to_string(&guten_tag).unwrap(), "already here\n");
}

#[test]
fn disabled_input_reads_nothing() {
    let dst = tempfile::tempdir().unwrap();
    let names = dst.path().join("names.txt");
    fs::write(&names, "Ada\nGrace\n").unwrap();

    let io = ConditionalStreamSet::default()
        .register_if_absent(&names, OpenMode::Read, Some("names"))
        .acquire()
        .unwrap();

    assert!(!io.is_enabled("names").unwrap());
    assert_eq!(io.lines("names").unwrap().count(), 0);

    let mut content = String::new();
    io.stream("names")
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    assert!(content.is_empty());
}

#[test]
fn enabled_flags_survive_lifecycle() {
    let entries = vec![
        EntrySpec::new(true, "a.txt", OpenMode::Write).with_alias("a"),
        EntrySpec::new(false, "b.txt", OpenMode::Write).with_alias("b"),
    ];
    let dst = tempfile::tempdir().unwrap();
    let entries: Vec<EntrySpec> = entries
        .into_iter()
        .map(|mut e| {
            e.path = dst.path().join(&e.path);
            e
        })
        .collect();

    let set = ConditionalStreamSet::with_entries(false, entries);
    assert!(set.is_enabled("a").unwrap());
    assert!(!set.is_enabled("b").unwrap());

    let io = set.acquire().unwrap();
    assert!(io.is_enabled("a").unwrap());
    assert!(!io.is_enabled("b").unwrap());

    let set = io.release().unwrap();
    assert!(set.is_enabled("a").unwrap());
    assert!(!set.is_enabled("b").unwrap());
    assert!(dst.path().join("a.txt").exists());
    assert!(!dst.path().join("b.txt").exists());
}

#[test]
fn reregistered_alias_replaces_entry() {
    let dst = tempfile::tempdir().unwrap();
    let first = dst.path().join("first.txt");
    let second = dst.path().join("second.txt");

    let io = ConditionalStreamSet::default()
        .register(true, &first, OpenMode::Write, Some("out"))
        .register(true, &second, OpenMode::Write, Some("out"))
        .acquire()
        .unwrap();
    assert_eq!(io.registry().entries().len(), 1);
    io.write("second", Some("out")).unwrap();
    io.release().unwrap();

    assert!(!first.exists());
    assert_eq!(fs::read_to_string(&second).unwrap(), "second\n");
}

#[test]
fn failed_open_propagates() {
    let dst = tempfile::tempdir().unwrap();
    let missing = dst.path().join("missing.txt");

    let err = ConditionalStreamSet::default()
        .register(true, dst.path().join("out.txt"), OpenMode::Write, None)
        .register(true, &missing, OpenMode::Read, None)
        .acquire()
        .unwrap_err();

    assert!(matches!(err, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound));
    // the first stream was opened (and closed) before the failure
    assert!(dst.path().join("out.txt").exists());
}

#[test]
fn unaddressed_write_without_stdout() {
    let io = ConditionalStreamSet::new(false).acquire().unwrap();
    io.write("nowhere", None).unwrap();
    let set = io.release().unwrap();
    set.write("still nowhere", None).unwrap();
}
