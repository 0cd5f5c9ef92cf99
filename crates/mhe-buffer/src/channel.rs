// ─────────────────────────────────────────────────────────────────────
// SCPN MHE — Time Series Channel
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed-stride history storage for a single data stream.
//!
//! Entries are stored flat: entry `i` occupies `data[i*dim .. (i+1)*dim]`.
//! Entries `0..length` are valid and ordered oldest to newest; anything
//! past `length` is stale and never read. Storage is allocated once.

use mhe_types::error::{MheError, MheResult};
use ndarray::{ArrayView1, ArrayView2};

/// A bounded, chronologically ordered stream of fixed-dimension entries.
#[derive(Debug, Clone)]
pub struct TimeSeriesChannel<T> {
    data: Vec<T>,
    dim: usize,
    capacity: usize,
    length: usize,
}

impl<T: Copy + Default> TimeSeriesChannel<T> {
    /// Allocate `capacity * dim` slots with no valid entries.
    pub fn new(dim: usize, capacity: usize) -> MheResult<Self> {
        if dim == 0 {
            return Err(MheError::InvalidDimension(
                "channel dim must be >= 1".to_string(),
            ));
        }
        let size = capacity.checked_mul(dim).ok_or_else(|| {
            MheError::InvalidDimension(format!(
                "channel storage overflows: capacity={capacity}, dim={dim}"
            ))
        })?;
        Ok(Self {
            data: vec![T::default(); size],
            dim,
            capacity,
            length: 0,
        })
    }

    /// Drop all entries. Stale storage is left in place.
    pub fn reset(&mut self) {
        self.length = 0;
    }

    /// Write `entry` into the next free slot.
    pub fn push(&mut self, entry: &[T]) -> MheResult<()> {
        self.push_view(ArrayView1::from(entry))
    }

    /// Like [`push`](Self::push), for a view of any stride.
    pub fn push_view(&mut self, entry: ArrayView1<'_, T>) -> MheResult<()> {
        if self.length >= self.capacity {
            return Err(MheError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.check_dim(entry.len())?;
        self.write_at(self.length, entry);
        self.length += 1;
        Ok(())
    }

    /// Discard the oldest `n` entries by compacting `[n, length)` down to
    /// `[0, length - n)`. `length` is unchanged; the freed tail slots hold
    /// stale values until overwritten with [`set`](Self::set).
    pub fn shift_head(&mut self, n: usize) -> MheResult<()> {
        if n > self.length {
            return Err(MheError::OutOfRange {
                index: n,
                length: self.length,
            });
        }
        if n == 0 {
            return Ok(());
        }
        let end = self.length * self.dim;
        self.data.copy_within(n * self.dim..end, 0);
        Ok(())
    }

    /// Overwrite entry `index` in place.
    pub fn set(&mut self, entry: &[T], index: usize) -> MheResult<()> {
        self.set_view(ArrayView1::from(entry), index)
    }

    /// Like [`set`](Self::set), for a view of any stride.
    pub fn set_view(&mut self, entry: ArrayView1<'_, T>, index: usize) -> MheResult<()> {
        self.check_index(index)?;
        self.check_dim(entry.len())?;
        self.write_at(index, entry);
        Ok(())
    }

    /// Read-only view of entry `index`.
    pub fn get(&self, index: usize) -> MheResult<ArrayView1<'_, T>> {
        self.entry(index).map(ArrayView1::from)
    }

    /// Raw slice of entry `index`.
    pub fn entry(&self, index: usize) -> MheResult<&[T]> {
        self.check_index(index)?;
        let start = index * self.dim;
        Ok(&self.data[start..start + self.dim])
    }

    /// Newest valid entry, if any.
    pub fn latest(&self) -> Option<&[T]> {
        self.length
            .checked_sub(1)
            .and_then(|last| self.entry(last).ok())
    }

    /// Valid prefix as a `(length, dim)` matrix, oldest row first.
    pub fn as_matrix(&self) -> MheResult<ArrayView2<'_, T>> {
        ArrayView2::from_shape((self.length, self.dim), self.as_slice())
            .map_err(|e| MheError::InvalidDimension(e.to_string()))
    }

    /// Flat valid prefix.
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.length * self.dim]
    }

    /// Valid entries, oldest to newest.
    pub fn iter(&self) -> std::slice::ChunksExact<'_, T> {
        self.as_slice().chunks_exact(self.dim)
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn is_full(&self) -> bool {
        self.length == self.capacity
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn check_index(&self, index: usize) -> MheResult<()> {
        if index >= self.length {
            return Err(MheError::OutOfRange {
                index,
                length: self.length,
            });
        }
        Ok(())
    }

    fn check_dim(&self, got: usize) -> MheResult<()> {
        if got != self.dim {
            return Err(MheError::DimensionMismatch {
                what: "channel entry",
                expected: self.dim,
                got,
            });
        }
        Ok(())
    }

    // caller has checked index and dim
    fn write_at(&mut self, index: usize, entry: ArrayView1<'_, T>) {
        let start = index * self.dim;
        for (slot, &v) in self.data[start..start + self.dim].iter_mut().zip(entry.iter()) {
            *slot = v;
        }
    }
}
