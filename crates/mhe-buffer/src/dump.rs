// ─────────────────────────────────────────────────────────────────────
// SCPN MHE — Window Dump
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Human-readable rendering of the window for diagnostics.
//! Not a wire format.

use crate::buffer::SlidingWindowBuffer;
use log::{debug, log_enabled, Level};
use mhe_types::error::MheResult;
use std::fmt;
use std::io::Write;

fn write_row(f: &mut fmt::Formatter<'_>, values: &[f64]) -> fmt::Result {
    for v in values {
        write!(f, "{v:10.6} ")?;
    }
    writeln!(f)
}

impl fmt::Display for SlidingWindowBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.iter().enumerate() {
            writeln!(f, "({i})")?;
            writeln!(f)?;
            writeln!(f, "time = {:.4}", entry.time)?;
            writeln!(f)?;
            write!(f, "sensor = ")?;
            write_row(f, entry.sensor)?;
            write!(f, "sensor mask = ")?;
            for flag in entry.mask {
                write!(f, "{flag} ")?;
            }
            writeln!(f)?;
            write!(f, "ctrl = ")?;
            write_row(f, entry.ctrl)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl SlidingWindowBuffer {
    /// Write every entry, oldest first.
    pub fn dump<W: Write>(&self, out: &mut W) -> MheResult<()> {
        write!(out, "{self}")?;
        out.flush()?;
        Ok(())
    }

    /// Dump to stdout.
    pub fn print(&self) -> MheResult<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.dump(&mut lock)
    }

    /// Dump through the `log` facade at debug level.
    pub fn log_dump(&self) {
        if log_enabled!(Level::Debug) {
            debug!(
                "sliding window ({}/{} entries):\n{}",
                self.len(),
                self.capacity(),
                self
            );
        }
    }
}
