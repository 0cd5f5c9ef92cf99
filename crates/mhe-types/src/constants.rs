// ─────────────────────────────────────────────────────────────────────
// SCPN MHE — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Sensor channel is trusted and enters the estimation cost.
pub const MASK_VALID: u8 = 1;

/// Sensor channel is excluded (occluded, dropped out, saturated).
pub const MASK_EXCLUDED: u8 = 0;

/// Window length used when a config file omits `max_length`.
pub const DEFAULT_MAX_LENGTH: usize = 32;

/// The time channel stores one scalar per entry.
pub const TIME_DIM: usize = 1;
