/*! Stream handles

A [Handle] is either backed by a real stream ([Handle::Real]) or by a discard target ([Handle::Discard]).
Both expose the same [Read]/[BufRead]/[Write] capability, so calling code never has to check whether a stream
is enabled before using it.

- [Handle::Real] wraps the opened stream into a [BufReader]. Writes go straight to the inner stream.
- [Handle::Discard] swallows writes and reads as an empty source, while still honoring its [OpenMode]:
  writing to a read-only discard handle (or reading from a write-only one) is an error, as it would be on the null device.
!*/
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read, Write},
    path::{Path, PathBuf},
};

use log::debug;

use super::{OpenMode, RawStream};

/// Holds the different kinds of stream handles.
#[derive(Debug)]
pub enum Handle<S = File>
where
    S: RawStream,
{
    Real(RealStream<S>),
    Discard(Discard),
}

impl<S> Handle<S>
where
    S: RawStream,
{
    pub fn real(path: &Path, mode: OpenMode, stream: S) -> Self {
        Self::Real(RealStream {
            path: path.to_path_buf(),
            mode,
            inner: BufReader::new(stream),
        })
    }

    pub fn discard(mode: OpenMode) -> Self {
        Self::Discard(Discard { mode })
    }

    pub fn is_discard(&self) -> bool {
        matches!(self, Self::Discard(_))
    }

    pub fn mode(&self) -> OpenMode {
        match self {
            Self::Real(r) => r.mode,
            Self::Discard(d) => d.mode,
        }
    }

    /// Close the handle.
    ///
    /// Writable real streams go through [RawStream::close] (flush, then sync for files).
    /// The underlying stream is dropped even if that fails.
    pub fn close(self) -> io::Result<()> {
        match self {
            Self::Real(r) => {
                debug!("closing {:?}", r.path);
                let mut stream = r.inner.into_inner();
                if r.mode.writable() {
                    stream.close()
                } else {
                    Ok(())
                }
            }
            Self::Discard(_) => Ok(()),
        }
    }
}

/// A stream opened on an enabled entry.
#[derive(Debug)]
pub struct RealStream<S> {
    path: PathBuf,
    mode: OpenMode,
    inner: BufReader<S>,
}

impl<S> RealStream<S> {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Discard target used in place of disabled entries.
#[derive(Debug, Clone, Copy)]
pub struct Discard {
    mode: OpenMode,
}

fn unsupported(what: &str) -> io::Error {
    io::Error::new(io::ErrorKind::Unsupported, format!("stream not {}", what))
}

impl<S> Read for Handle<S>
where
    S: RawStream,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Real(r) => r.inner.read(buf),
            Self::Discard(d) if d.mode.readable() => Ok(0),
            Self::Discard(_) => Err(unsupported("readable")),
        }
    }
}

impl<S> BufRead for Handle<S>
where
    S: RawStream,
{
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            Self::Real(r) => r.inner.fill_buf(),
            Self::Discard(d) if d.mode.readable() => Ok(&[]),
            Self::Discard(_) => Err(unsupported("readable")),
        }
    }

    fn consume(&mut self, amt: usize) {
        if let Self::Real(r) = self {
            r.inner.consume(amt)
        }
    }
}

impl<S> Write for Handle<S>
where
    S: RawStream,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Real(r) => r.inner.get_mut().write(buf),
            Self::Discard(d) if d.mode.writable() => Ok(buf.len()),
            Self::Discard(_) => Err(unsupported("writable")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Real(r) => r.inner.get_mut().flush(),
            Self::Discard(_) => Ok(()),
        }
    }
}
