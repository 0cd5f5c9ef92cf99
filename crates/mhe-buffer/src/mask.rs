// ─────────────────────────────────────────────────────────────────────
// SCPN MHE — Sensor Mask
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-sensor-channel validity flags.
//!
//! The buffer stamps a copy of the current mask onto every new entry.
//! Deciding which channels are valid belongs to the estimator, which
//! plugs in a [`MaskPolicy`].

use mhe_types::constants::{MASK_EXCLUDED, MASK_VALID};
use mhe_types::error::{MheError, MheResult};
use std::fmt;

/// One flag per sensor channel: `MASK_VALID` or `MASK_EXCLUDED`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorMask {
    flags: Vec<u8>,
}

impl SensorMask {
    /// All channels valid.
    pub fn all_valid(n_sensor: usize) -> Self {
        Self {
            flags: vec![MASK_VALID; n_sensor],
        }
    }

    /// Build from raw flags; only 0 and 1 are accepted.
    pub fn from_flags(flags: &[u8]) -> MheResult<Self> {
        validate_flags(flags)?;
        Ok(Self {
            flags: flags.to_vec(),
        })
    }

    pub fn fill_valid(&mut self) {
        self.flags.fill(MASK_VALID);
    }

    pub fn set(&mut self, channel: usize, valid: bool) -> MheResult<()> {
        let n = self.flags.len();
        let flag = self.flags.get_mut(channel).ok_or(MheError::OutOfRange {
            index: channel,
            length: n,
        })?;
        *flag = if valid { MASK_VALID } else { MASK_EXCLUDED };
        Ok(())
    }

    /// Replace every flag. Length and values are checked before anything
    /// is written.
    pub fn assign(&mut self, flags: &[u8]) -> MheResult<()> {
        if flags.len() != self.flags.len() {
            return Err(MheError::InvalidMask(format!(
                "expected {} flags, got {}",
                self.flags.len(),
                flags.len()
            )));
        }
        validate_flags(flags)?;
        self.flags.copy_from_slice(flags);
        Ok(())
    }

    pub fn is_valid(&self, channel: usize) -> bool {
        self.flags.get(channel) == Some(&MASK_VALID)
    }

    pub fn count_valid(&self) -> usize {
        self.flags.iter().filter(|&&f| f == MASK_VALID).count()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.flags
    }
}

impl fmt::Display for SensorMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in &self.flags {
            write!(f, "{flag} ")?;
        }
        Ok(())
    }
}

fn validate_flags(flags: &[u8]) -> MheResult<()> {
    if let Some((i, &v)) = flags
        .iter()
        .enumerate()
        .find(|&(_, &v)| v != MASK_VALID && v != MASK_EXCLUDED)
    {
        return Err(MheError::InvalidMask(format!(
            "channel {i} has flag {v}, expected {MASK_EXCLUDED} or {MASK_VALID}"
        )));
    }
    Ok(())
}

/// Estimator-supplied strategy that recomputes the mask between steps.
///
/// The policy sees the mask that will be stamped onto the next entry and
/// may flip any flag. It can fail, e.g. if its own diagnostics are stale.
pub trait MaskPolicy {
    fn update_mask(&mut self, mask: &mut SensorMask) -> MheResult<()>;
}

impl<F> MaskPolicy for F
where
    F: FnMut(&mut SensorMask) -> MheResult<()>,
{
    fn update_mask(&mut self, mask: &mut SensorMask) -> MheResult<()> {
        self(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_valid() {
        let mask = SensorMask::all_valid(4);
        assert_eq!(mask.len(), 4);
        assert_eq!(mask.count_valid(), 4);
        assert!((0..4).all(|i| mask.is_valid(i)));
        assert!(!mask.is_valid(4));
    }

    #[test]
    fn test_set_and_fill() {
        let mut mask = SensorMask::all_valid(3);
        mask.set(1, false).unwrap();
        assert_eq!(mask.as_slice(), &[1, 0, 1]);
        assert_eq!(mask.count_valid(), 2);
        mask.fill_valid();
        assert_eq!(mask.as_slice(), &[1, 1, 1]);
    }

    #[test]
    fn test_set_out_of_range() {
        let mut mask = SensorMask::all_valid(2);
        assert!(matches!(
            mask.set(2, false),
            Err(MheError::OutOfRange {
                index: 2,
                length: 2
            })
        ));
    }

    #[test]
    fn test_assign_rejects_bad_flags() {
        let mut mask = SensorMask::all_valid(3);
        assert!(matches!(
            mask.assign(&[1, 2, 0]),
            Err(MheError::InvalidMask(_))
        ));
        assert!(matches!(mask.assign(&[1, 0]), Err(MheError::InvalidMask(_))));
        // rejected writes leave the mask untouched
        assert_eq!(mask.as_slice(), &[1, 1, 1]);
        mask.assign(&[0, 0, 1]).unwrap();
        assert_eq!(mask.as_slice(), &[0, 0, 1]);
    }

    #[test]
    fn test_from_flags() {
        assert!(SensorMask::from_flags(&[0, 1, 1]).is_ok());
        assert!(SensorMask::from_flags(&[0, 7]).is_err());
    }

    #[test]
    fn test_closure_policy() {
        let mut mask = SensorMask::all_valid(3);
        let mut occlude_last = |m: &mut SensorMask| {
            let last = m.len() - 1;
            m.set(last, false)
        };
        occlude_last.update_mask(&mut mask).unwrap();
        assert_eq!(mask.as_slice(), &[1, 1, 0]);
    }

    #[test]
    fn test_closure_policy_error_propagates() {
        let mut mask = SensorMask::all_valid(2);
        let mut past_end = |m: &mut SensorMask| -> MheResult<()> {
            m.set(0, false)?;
            m.set(2, false)?;
            Ok(())
        };
        assert!(matches!(
            past_end.update_mask(&mut mask),
            Err(MheError::OutOfRange { index: 2, .. })
        ));
    }

    #[test]
    fn test_display() {
        let mask = SensorMask::from_flags(&[1, 0]).unwrap();
        assert_eq!(mask.to_string(), "1 0 ");
    }
}
