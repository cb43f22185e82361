/*! Acquired phase of a [ConditionalStreamSet].

An [AcquiredSet] owns one [Handle] per registered entry, each behind a [RefCell] so that
a stream can be iterated ([AcquiredSet::lines]) while other streams (or the same one) are written to.

Handles are closed in reverse registration order, either explicitly with [AcquiredSet::release]
or when the [AcquiredSet] is dropped (early return, `?`, unwinding).
!*/
use std::{
    cell::{RefCell, RefMut},
    fs::File,
    fmt,
    io::{self, BufRead, Write},
};

use log::{debug, error, info};

use super::{ConditionalStreamSet, Handle, Opener, RawStream, StreamEntry};
use crate::error::Error;

#[derive(Debug)]
pub struct AcquiredSet<S = File>
where
    S: RawStream,
{
    registry: ConditionalStreamSet,
    // index-aligned with registry entries
    handles: Vec<RefCell<Handle<S>>>,
}

impl<S> AcquiredSet<S>
where
    S: RawStream,
{
    /// Open every entry of `registry`.
    ///
    /// On failure, `acquired` is dropped with the streams opened so far, which closes them.
    pub(super) fn open<O>(registry: ConditionalStreamSet, opener: &mut O) -> Result<Self, Error>
    where
        O: Opener<Stream = S>,
    {
        let mut acquired = Self {
            handles: Vec::with_capacity(registry.entries().len()),
            registry,
        };

        for entry in acquired.registry.entries() {
            let handle = if entry.enabled() {
                info!(
                    "opening {:?} as {} (mode {})",
                    entry.path(),
                    entry.alias(),
                    entry.mode()
                );
                match opener.open(entry.path(), entry.mode()) {
                    Ok(stream) => Handle::real(entry.path(), entry.mode(), stream),
                    Err(e) => {
                        error!("could not open {:?}: {}", entry.path(), e);
                        return Err(e.into());
                    }
                }
            } else {
                debug!("{} is disabled, using a discard handle", entry.alias());
                Handle::discard(entry.mode())
            };
            acquired.handles.push(RefCell::new(handle));
        }

        Ok(acquired)
    }

    /// Registry this set was acquired from.
    pub fn registry(&self) -> &ConditionalStreamSet {
        &self.registry
    }

    pub fn is_enabled(&self, alias: &str) -> Result<bool, Error> {
        self.registry.is_enabled(alias)
    }

    /// Write `text` followed by a newline.
    ///
    /// - Without `alias`, writes to stdout if it is enabled.
    /// - Fails with [Error::NotFound] if `alias` is not registered.
    /// - Does nothing if the entry is disabled.
    pub fn write(&self, text: &str, alias: Option<&str>) -> Result<(), Error> {
        let alias = match alias {
            Some(alias) => alias,
            None => return self.registry.write_std(&mut io::stdout().lock(), text),
        };

        let idx = self.registry.index_of(alias)?;
        if !self.registry.entries()[idx].enabled() {
            debug!("{} is disabled, skipping write", alias);
            return Ok(());
        }

        let mut handle = self.borrow(idx, alias)?;
        writeln!(handle, "{}", text)?;
        Ok(())
    }

    /// Get the live handle (real or discard) registered under `alias`.
    ///
    /// The handle stays borrowed until the returned guard is dropped:
    /// meanwhile, any other access to `alias` fails with [Error::Busy].
    pub fn stream(&self, alias: &str) -> Result<RefMut<'_, Handle<S>>, Error> {
        let idx = self.registry.index_of(alias)?;
        self.borrow(idx, alias)
    }

    /// Iterate over the lines of the stream registered under `alias`, without line terminators.
    ///
    /// A disabled entry yields no lines.
    pub fn lines(&self, alias: &str) -> Result<Lines<'_, S>, Error> {
        let idx = self.registry.index_of(alias)?;
        Ok(Lines {
            alias: self.registry.entries()[idx].alias(),
            handle: &self.handles[idx],
            done: false,
        })
    }

    /// Close every stream in reverse registration order and give back the (released) registry.
    ///
    /// Every stream is closed even if some fail. The first error is returned in a [ReleaseError],
    /// which still holds the released registry.
    pub fn release(mut self) -> Result<ConditionalStreamSet, ReleaseError> {
        let closed = self.close_all();
        let registry = std::mem::take(&mut self.registry);
        match closed {
            Ok(()) => Ok(registry),
            Err(error) => Err(ReleaseError { registry, error }),
        }
    }

    fn borrow(&self, idx: usize, alias: &str) -> Result<RefMut<'_, Handle<S>>, Error> {
        self.handles[idx]
            .try_borrow_mut()
            .map_err(|_| Error::Busy(alias.to_string()))
    }

    fn close_all(&mut self) -> Result<(), Error> {
        let mut first_error = None;
        while let Some(handle) = self.handles.pop() {
            let entry: &StreamEntry = &self.registry.entries()[self.handles.len()];
            if let Err(e) = handle.into_inner().close() {
                error!("could not close {}: {}", entry.alias(), e);
                first_error.get_or_insert(e);
            }
        }
        self.registry.mark_released();

        match first_error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

impl<S> Drop for AcquiredSet<S>
where
    S: RawStream,
{
    fn drop(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        debug!("dropping acquired streams without release, closing them");
        if let Err(e) = self.close_all() {
            error!("error while closing streams: {}", e);
        }
    }
}

/// Error returned by [AcquiredSet::release] when a stream failed to close.
///
/// Every stream is closed regardless: the released registry can be recovered with [ReleaseError::into_registry].
#[derive(Debug)]
pub struct ReleaseError {
    registry: ConditionalStreamSet,
    error: Error,
}

impl ReleaseError {
    pub fn error(&self) -> &Error {
        &self.error
    }

    pub fn registry(&self) -> &ConditionalStreamSet {
        &self.registry
    }

    pub fn into_registry(self) -> ConditionalStreamSet {
        self.registry
    }

    pub fn into_error(self) -> Error {
        self.error
    }
}

impl fmt::Display for ReleaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not release streams: {}", self.error)
    }
}

impl std::error::Error for ReleaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Line iterator over an acquired stream. See [AcquiredSet::lines].
///
/// The handle is only borrowed while a line is read. Iteration stops after the first error.
#[derive(Debug)]
pub struct Lines<'a, S>
where
    S: RawStream,
{
    alias: &'a str,
    handle: &'a RefCell<Handle<S>>,
    done: bool,
}

impl<'a, S> Iterator for Lines<'a, S>
where
    S: RawStream,
{
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut handle = match self.handle.try_borrow_mut() {
            Ok(handle) => handle,
            Err(_) => {
                self.done = true;
                return Some(Err(Error::Busy(self.alias.to_string())));
            }
        };

        let mut line = String::new();
        match handle.read_line(&mut line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(Ok(line))
            }
            Err(e) => {
                self.done = true;
                Some(Err(Error::Io(e)))
            }
        }
    }
}
