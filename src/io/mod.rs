/*!
# Conditional streams

A [ConditionalStreamSet] holds named streams that are each enabled or disabled at registration time.
All streams are opened together when the set is acquired, and closed together (in reverse order) when it is released.

Disabled streams are backed by a [Discard] handle: writes are swallowed and reads yield nothing,
so calling code can use every stream unconditionally.
!*/
mod acquired;
mod handle;
mod mode;
mod opener;
mod registry;

pub use acquired::{AcquiredSet, Lines, ReleaseError};
pub use handle::{Discard, Handle, RealStream};
pub use mode::OpenMode;
pub use opener::{FsOpener, Opener, RawStream};
pub use registry::{default_alias, ConditionalStreamSet, EntrySpec, StreamEntry};
