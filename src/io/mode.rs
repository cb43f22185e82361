/*! Open modes

Modes follow the classic `fopen` strings (`r`, `w`, `a`, `x`, each optionally followed by `+`).
A `b` or `t` qualifier is accepted and ignored, since streams are always byte oriented.
!*/
use std::{fmt, fs::OpenOptions, str::FromStr};

use crate::error::Error;

/// How a stream is opened. Fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    /// `r`
    #[default]
    Read,
    /// `r+`
    ReadWrite,
    /// `w`: create or truncate.
    Write,
    /// `w+`
    WriteRead,
    /// `a`: create, always write at the end.
    Append,
    /// `a+`
    AppendRead,
    /// `x`: fail if the file already exists.
    CreateNew,
    /// `x+`
    CreateNewRead,
}

impl OpenMode {
    pub fn readable(&self) -> bool {
        !matches!(self, Self::Write | Self::Append | Self::CreateNew)
    }

    pub fn writable(&self) -> bool {
        !matches!(self, Self::Read)
    }

    /// Build the [OpenOptions] matching this mode.
    pub fn options(&self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options.read(self.readable());
        match self {
            Self::Read => {}
            Self::ReadWrite => {
                options.write(true);
            }
            Self::Write | Self::WriteRead => {
                options.write(true).create(true).truncate(true);
            }
            Self::Append | Self::AppendRead => {
                options.append(true).create(true);
            }
            Self::CreateNew | Self::CreateNewRead => {
                options.write(true).create_new(true);
            }
        }
        options
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "r",
            Self::ReadWrite => "r+",
            Self::Write => "w",
            Self::WriteRead => "w+",
            Self::Append => "a",
            Self::AppendRead => "a+",
            Self::CreateNew => "x",
            Self::CreateNewRead => "x+",
        }
    }
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpenMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut base = None;
        let mut plus = false;
        let mut qualifier = false;

        for c in s.chars() {
            match c {
                'r' | 'w' | 'a' | 'x' if base.is_none() => base = Some(c),
                '+' if !plus => plus = true,
                'b' | 't' if !qualifier => qualifier = true,
                _ => return Err(Error::InvalidMode(s.to_string())),
            }
        }

        match (base, plus) {
            (Some('r'), false) => Ok(Self::Read),
            (Some('r'), true) => Ok(Self::ReadWrite),
            (Some('w'), false) => Ok(Self::Write),
            (Some('w'), true) => Ok(Self::WriteRead),
            (Some('a'), false) => Ok(Self::Append),
            (Some('a'), true) => Ok(Self::AppendRead),
            (Some('x'), false) => Ok(Self::CreateNew),
            (Some('x'), true) => Ok(Self::CreateNewRead),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}
