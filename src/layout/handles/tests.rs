// SPDX-FileCopyrightText: 2026 Payloom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeSet;

use crate::geometry::{Side, Size};
use crate::model::HandleRole;

use super::{
    compute_handle_layout, node_handle_layout, HandleLayoutConfig, HandleLayoutError,
    HORIZONTAL_PAIR_COUNT, SOURCE_Z_INDEX, TARGET_Z_INDEX, VERTICAL_PAIR_COUNT,
};

fn provider_size() -> Size {
    Size::new(186.0, 70.0)
}

fn config() -> HandleLayoutConfig {
    HandleLayoutConfig::default()
}

#[test]
fn vertical_side_skips_the_last_slot() {
    let handles =
        compute_handle_layout(Side::Left, 3, provider_size(), &config()).expect("layout");

    // 2 * 3 - 1 slots: the third pair keeps only its target half.
    assert_eq!(handles.len(), 5);
    let ids: Vec<&str> = handles.iter().map(|h| h.id().as_str()).collect();
    assert_eq!(
        ids,
        [
            "left-target-1",
            "left-source-1",
            "left-target-2",
            "left-source-2",
            "left-target-3",
        ]
    );
}

#[test]
fn horizontal_side_skips_slot_zero() {
    let handles =
        compute_handle_layout(Side::Top, 10, provider_size(), &config()).expect("layout");

    assert_eq!(handles.len(), 19);
    // Pair 1 lost its target half to the corner keep-out.
    assert_eq!(handles[0].id().as_str(), "top-source-1");
    assert!(handles.iter().all(|h| h.id().as_str() != "top-target-1"));
}

#[test]
fn vertical_handles_are_centered_in_the_band() {
    let size = provider_size();
    let cfg = config();
    let handles = compute_handle_layout(Side::Left, 3, size, &cfg).expect("layout");

    let band_start = (size.height - cfg.vertical_band_height) / 2.0;
    let pitch = cfg.vertical_band_height / 6.0;
    for (i, handle) in handles.iter().enumerate() {
        assert_eq!(handle.rect().top, band_start + pitch * i as f64 - 5.0);
        assert_eq!(handle.rect().left, -1.0);
        assert_eq!(handle.rect().width, cfg.vertical_handle_size + 10.0);
        assert_eq!(handle.rect().height, cfg.vertical_handle_size * 2.0);
    }
}

#[test]
fn right_side_sits_at_a_fixed_inset_from_the_node_edge() {
    let size = provider_size();
    let cfg = config();
    let handles = compute_handle_layout(Side::Right, 3, size, &cfg).expect("layout");
    for handle in &handles {
        assert_eq!(
            handle.rect().left,
            size.width - cfg.vertical_handle_size - 10.0
        );
    }
}

#[test]
fn horizontal_handles_are_distributed_in_equal_segments() {
    let size = provider_size();
    let cfg = config();
    let handles = compute_handle_layout(Side::Bottom, 10, size, &cfg).expect("layout");

    let pitch = size.width / 20.0;
    for (offset, handle) in handles.iter().enumerate() {
        let i = offset + 1; // slot 0 skipped
        if i < 19 {
            assert_eq!(handle.rect().left, pitch * i as f64);
            assert_eq!(handle.rect().width, cfg.horizontal_handle_size * 2.0);
        }
        assert_eq!(handle.rect().top, size.height / 2.0 - 5.0);
    }
}

#[test]
fn last_horizontal_slot_is_narrowed_and_shifted_inward() {
    let size = provider_size();
    let cfg = config();
    let handles = compute_handle_layout(Side::Top, 10, size, &cfg).expect("layout");

    let last = handles.last().expect("last handle");
    assert_eq!(last.rect().left, size.width - cfg.horizontal_handle_size);
    assert_eq!(last.rect().width, cfg.horizontal_handle_size);
    assert!(last.rect().left + last.rect().width <= size.width);
}

#[test]
fn source_handles_render_above_targets() {
    let handles = node_handle_layout(provider_size(), &config()).expect("layout");
    for handle in &handles {
        match handle.role() {
            HandleRole::Source => assert_eq!(handle.z_index(), SOURCE_Z_INDEX),
            HandleRole::Target => assert_eq!(handle.z_index(), TARGET_Z_INDEX),
        }
    }
    assert!(SOURCE_Z_INDEX > TARGET_Z_INDEX);
}

#[test]
fn node_layout_ids_are_unique_within_the_node() {
    let handles = node_handle_layout(provider_size(), &config()).expect("layout");
    let expected = 2 * (2 * VERTICAL_PAIR_COUNT as usize - 1)
        + 2 * (2 * HORIZONTAL_PAIR_COUNT as usize - 1);
    assert_eq!(handles.len(), expected);

    let ids: BTreeSet<&str> = handles.iter().map(|h| h.id().as_str()).collect();
    assert_eq!(ids.len(), handles.len());
}

#[test]
fn single_vertical_pair_degenerates_to_an_enlarged_stacked_pair() {
    let size = provider_size();
    let cfg = config();
    let handles = compute_handle_layout(Side::Right, 1, size, &cfg).expect("layout");

    assert_eq!(handles.len(), 2);
    let target = &handles[0];
    let source = &handles[1];
    assert_eq!(target.role(), HandleRole::Target);
    assert_eq!(source.role(), HandleRole::Source);

    // Same footprint, spanning the whole band, source stacked on top.
    assert_eq!(target.rect(), source.rect());
    assert_eq!(source.rect().height, cfg.vertical_band_height);
    assert!(source.z_index() > target.z_index());
}

#[test]
fn zero_pair_count_is_rejected_everywhere() {
    for side in Side::ALL {
        let result = compute_handle_layout(side, 0, provider_size(), &config());
        assert_eq!(
            result,
            Err(HandleLayoutError::InvalidPairCount {
                side,
                pair_count: 0
            })
        );
    }
}

#[test]
fn single_pair_count_is_rejected_on_horizontal_sides() {
    for side in [Side::Top, Side::Bottom] {
        let result = compute_handle_layout(side, 1, provider_size(), &config());
        assert_eq!(
            result,
            Err(HandleLayoutError::InvalidPairCount {
                side,
                pair_count: 1
            })
        );
    }
}

#[test]
fn handle_ids_parse_back_to_their_side_and_role() {
    let handles = node_handle_layout(provider_size(), &config()).expect("layout");
    for handle in &handles {
        let (side, role, pair_index) = handle.id().parse().expect("layout-generated id");
        assert_eq!(side, handle.side());
        assert_eq!(role, handle.role());
        assert!(pair_index >= 1);
    }
}
