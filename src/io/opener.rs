use std::{
    fs::File,
    io::{self, Read, Write},
    path::Path,
};

use super::OpenMode;

/// Streams a [super::Handle] can wrap.
///
/// [RawStream::close] runs before a writable stream is dropped: its error is the one
/// reported by [super::AcquiredSet::release].
pub trait RawStream: Read + Write {
    fn close(&mut self) -> io::Result<()> {
        self.flush()
    }
}

/// Dropping a [File] discards the error of the OS `close`, so written data is synced first.
impl RawStream for File {
    fn close(&mut self) -> io::Result<()> {
        self.flush()?;
        self.sync_all()
    }
}

/// Opens the streams of enabled entries.
///
/// [FsOpener] is the one used by [super::ConditionalStreamSet::acquire].
pub trait Opener {
    type Stream: RawStream;

    fn open(&mut self, path: &Path, mode: OpenMode) -> io::Result<Self::Stream>;
}

/// Opens files on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsOpener;

impl Opener for FsOpener {
    type Stream = File;

    fn open(&mut self, path: &Path, mode: OpenMode) -> io::Result<File> {
        mode.options().open(path)
    }
}
