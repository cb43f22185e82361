/*! Registry of conditionally enabled streams.

Entries are registered (fluently) on a [ConditionalStreamSet], then opened all together by [ConditionalStreamSet::acquire],
which consumes the set and yields an [AcquiredSet].

```no_run
use condio::io::{ConditionalStreamSet, OpenMode};

# fn main() -> Result<(), condio::error::Error> {
let io = ConditionalStreamSet::default()
    .register_if_exists("names.txt", OpenMode::Read, None)
    .register(true, "hello.txt", OpenMode::Write, Some("en"))
    .register(false, "bonjour.txt", OpenMode::Write, Some("fr"))
    .acquire()?;

io.write("Hello, world!", Some("en"))?;
io.write("Bonjour, monde !", Some("fr"))?; // discarded

for name in io.lines("names.txt")? {
    io.write(&format!("Hello, {}!", name?.trim()), Some("en"))?;
}

let io = io.release()?;
io.write("All files have been closed, only stdout remains", None)?;
# Ok(())
# }
```
!*/
use std::{
    collections::HashMap,
    io::Write,
    path::{Path, PathBuf},
};

use log::debug;

use super::{AcquiredSet, FsOpener, OpenMode, Opener};
use crate::error::Error;

/// Alias used when none is given at registration: the path itself.
///
/// Paths that are not valid UTF-8 use their escaped [Debug](std::fmt::Debug) form,
/// so distinct paths never share a default alias.
pub fn default_alias(path: &Path) -> String {
    match path.to_str() {
        Some(s) => s.to_string(),
        None => format!("{:?}", path),
    }
}

/// One registered stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamEntry {
    alias: String,
    path: PathBuf,
    mode: OpenMode,
    enabled: bool,
}

impl StreamEntry {
    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

/// Registration arguments, used to build a set from a list of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySpec {
    pub enabled: bool,
    pub path: PathBuf,
    pub mode: OpenMode,
    pub alias: Option<String>,
}

impl EntrySpec {
    pub fn new(enabled: bool, path: impl Into<PathBuf>, mode: OpenMode) -> Self {
        Self {
            enabled,
            path: path.into(),
            mode,
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }
}

/// Named collection of conditionally enabled streams.
///
/// Registration order is kept: streams are opened in that order and closed in reverse.
/// Registering an alias twice replaces the first entry, keeping its position.
#[derive(Debug)]
pub struct ConditionalStreamSet {
    std_enabled: bool,
    entries: Vec<StreamEntry>,
    aliases: HashMap<String, usize>,
    released: bool,
}

impl Default for ConditionalStreamSet {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ConditionalStreamSet {
    /// Create an empty set. If `std_enabled` is true, unaddressed writes go to stdout.
    pub fn new(std_enabled: bool) -> Self {
        Self {
            std_enabled,
            entries: Vec::new(),
            aliases: HashMap::new(),
            released: false,
        }
    }

    /// Create a set and register each of the provided entries, in order.
    pub fn with_entries<I>(std_enabled: bool, entries: I) -> Self
    where
        I: IntoIterator<Item = EntrySpec>,
    {
        entries.into_iter().fold(Self::new(std_enabled), |set, e| {
            set.register(e.enabled, e.path, e.mode, e.alias.as_deref())
        })
    }

    /// Register a stream. No I/O is performed.
    ///
    /// `alias` defaults to the path. Returns `self` to allow chaining.
    pub fn register<P: AsRef<Path>>(
        mut self,
        enabled: bool,
        path: P,
        mode: OpenMode,
        alias: Option<&str>,
    ) -> Self {
        let path = path.as_ref().to_path_buf();
        let alias = alias
            .map(str::to_string)
            .unwrap_or_else(|| default_alias(&path));

        debug!(
            "registering {} ({:?}, mode {}, enabled: {})",
            alias, path, mode, enabled
        );

        let entry = StreamEntry {
            alias: alias.clone(),
            path,
            mode,
            enabled,
        };

        match self.aliases.get(&alias).copied() {
            Some(idx) => self.entries[idx] = entry,
            None => {
                self.aliases.insert(alias, self.entries.len());
                self.entries.push(entry);
            }
        }

        self
    }

    /// Like [Self::register], enabled if a regular file exists at `path`.
    pub fn register_if_exists<P: AsRef<Path>>(
        self,
        path: P,
        mode: OpenMode,
        alias: Option<&str>,
    ) -> Self {
        let exists = path.as_ref().is_file();
        self.register(exists, path, mode, alias)
    }

    /// Like [Self::register], enabled if no regular file exists at `path`.
    pub fn register_if_absent<P: AsRef<Path>>(
        self,
        path: P,
        mode: OpenMode,
        alias: Option<&str>,
    ) -> Self {
        let absent = !path.as_ref().is_file();
        self.register(absent, path, mode, alias)
    }

    pub fn std_enabled(&self) -> bool {
        self.std_enabled
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Registered entries, in registration order.
    pub fn entries(&self) -> &[StreamEntry] {
        &self.entries
    }

    pub fn get(&self, alias: &str) -> Result<&StreamEntry, Error> {
        self.index_of(alias).map(|idx| &self.entries[idx])
    }

    pub fn is_enabled(&self, alias: &str) -> Result<bool, Error> {
        self.get(alias).map(StreamEntry::enabled)
    }

    pub(super) fn index_of(&self, alias: &str) -> Result<usize, Error> {
        self.aliases
            .get(alias)
            .copied()
            .ok_or_else(|| Error::NotFound(alias.to_string()))
    }

    pub(super) fn mark_released(&mut self) {
        self.released = true;
    }

    /// Write outside of the acquired phase.
    ///
    /// Only unaddressed writes are possible here: they go to stdout if enabled.
    /// Addressing a registered stream fails with [Error::NotAcquired].
    pub fn write(&self, text: &str, alias: Option<&str>) -> Result<(), Error> {
        match alias {
            None => self.write_std(&mut std::io::stdout().lock(), text),
            Some(alias) => {
                self.index_of(alias)?;
                Err(Error::NotAcquired(alias.to_string()))
            }
        }
    }

    /// Write `text` and a newline to `out` if stdout is enabled.
    pub(super) fn write_std<W: Write>(&self, out: &mut W, text: &str) -> Result<(), Error> {
        if self.std_enabled {
            writeln!(out, "{}", text)?;
        }
        Ok(())
    }

    /// Open every registered stream on the filesystem.
    ///
    /// See [Self::acquire_with].
    pub fn acquire(self) -> Result<AcquiredSet, Error> {
        self.acquire_with(&mut FsOpener)
    }

    /// Open every registered stream, in registration order.
    ///
    /// Enabled entries are opened with `opener`, disabled ones get a discard handle.
    /// If an open fails, already opened streams are closed (in reverse order) and the error is returned.
    pub fn acquire_with<O: Opener>(self, opener: &mut O) -> Result<AcquiredSet<O::Stream>, Error> {
        if self.released {
            return Err(Error::Released);
        }
        AcquiredSet::open(self, opener)
    }
}
