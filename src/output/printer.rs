//! Terminal printer for listing lines
//!
//! This module provides `ListingPrinter` which writes listing lines to stdout,
//! highlighting directory names when colour is enabled.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::ListingLine;

use super::config::OutputConfig;

/// Writes listing lines to stdout.
pub struct ListingPrinter {
    stdout: StandardStream,
}

impl ListingPrinter {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    pub fn print_all(&mut self, lines: &[ListingLine]) -> io::Result<()> {
        for line in lines {
            write_line(&mut self.stdout, line)?;
        }
        self.stdout.flush()
    }
}

/// Write one line; only the entry name of a directory is coloured.
pub fn write_line<W: WriteColor>(out: &mut W, line: &ListingLine) -> io::Result<()> {
    write!(out, "{}{}/", line.lead(), line.parent)?;
    if line.is_dir {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "{}", line.name)?;
        out.reset()?;
    } else {
        write!(out, "{}", line.name)?;
    }
    writeln!(out)
}
