// ─────────────────────────────────────────────────────────────────────
// SCPN MHE — Property-Based Tests (proptest) for mhe-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for mhe-types using proptest.
//!
//! Covers: ModelDims validation invariants, sensor layout consistency,
//! BufferConfig validation.

use mhe_types::config::BufferConfig;
use mhe_types::error::MheError;
use mhe_types::state::{ModelDescription, ModelDims};
use proptest::prelude::*;

// ── ModelDims Invariants ─────────────────────────────────────────────

proptest! {
    /// Any non-empty layout of non-zero widths yields valid metadata.
    #[test]
    fn layout_dims_always_valid(
        n_ctrl in 1usize..16,
        layout in prop::collection::vec(1usize..8, 1..12),
    ) {
        let dims = ModelDims::with_sensor_layout(n_ctrl, layout.clone());

        prop_assert!(dims.validate().is_ok());
        prop_assert_eq!(dims.n_sensor(), layout.len());
        prop_assert_eq!(dims.n_sensor_data(), layout.iter().sum::<usize>());
        prop_assert!(dims.n_sensor() <= dims.n_sensor_data());
    }

    /// More sensor channels than sensor scalars is always rejected.
    #[test]
    fn more_channels_than_scalars_rejected(
        n_sensor_data in 1usize..32,
        extra in 1usize..8,
    ) {
        let dims = ModelDims::new(1, n_sensor_data, n_sensor_data + extra);
        let result = dims.validate();
        prop_assert!(matches!(result, Err(MheError::InvalidDimension(_))));
    }

    /// Flat metadata is valid exactly when every count is positive and
    /// channels do not outnumber scalars.
    #[test]
    fn flat_dims_validity(
        n_ctrl in 0usize..4,
        n_sensor_data in 0usize..6,
        n_sensor in 0usize..6,
    ) {
        let dims = ModelDims::new(n_ctrl, n_sensor_data, n_sensor);
        let expect_ok = n_ctrl > 0 && n_sensor > 0 && n_sensor <= n_sensor_data;
        prop_assert_eq!(dims.validate().is_ok(), expect_ok);
    }
}

// ── BufferConfig Invariants ──────────────────────────────────────────

proptest! {
    /// Config validity requires a positive horizon on top of valid dims.
    #[test]
    fn config_requires_positive_length(
        max_length in 0usize..64,
        layout in prop::collection::vec(1usize..4, 1..6),
    ) {
        let cfg = BufferConfig::new(ModelDims::with_sensor_layout(2, layout), max_length);
        prop_assert_eq!(cfg.validate().is_ok(), max_length > 0);
    }

    /// JSON written for a valid config loads back unchanged.
    #[test]
    fn config_json_reload(
        max_length in 1usize..256,
        n_ctrl in 1usize..8,
        layout in prop::collection::vec(1usize..6, 1..8),
    ) {
        let cfg = BufferConfig::new(ModelDims::with_sensor_layout(n_ctrl, layout), max_length);
        let json = serde_json::to_string(&cfg).unwrap();
        let back = BufferConfig::from_json(&json).unwrap();
        prop_assert_eq!(back, cfg);
    }
}
