// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Backward probability adaptation
//
// After each frame the token counts are blended into the probabilities the
// frame started from. A branch seen `count_sat` or more times moves the
// probability by `update_factor / 256` of the way toward the observed ratio;
// rarer branches move proportionally less.

use tracing::debug;

use crate::consts::*;
use crate::counts::CoefCounts;
use crate::enums::*;
use crate::probs::{CoefProbs, band_coeff_contexts};
use crate::util::round2_u32;

fn clip_prob(p: u32) -> u8 {
  p.clamp(1, 255) as u8
}

// Probability of the 0 branch given the branch counts
pub fn get_binary_prob(n0: u32, n1: u32) -> u8 {
  let den = n0 as u64 + n1 as u64;
  if den == 0 {
    return 128;
  }
  clip_prob(((n0 as u64 * 256 + (den >> 1)) / den) as u32)
}

pub fn weighted_prob(prob1: u8, prob2: u8, factor: u32) -> u8 {
  round2_u32(prob1 as u32 * (256 - factor) + prob2 as u32 * factor, 8) as u8
}

pub fn merge_probs(pre_prob: u8, ct: [u32; 2], count_sat: u32, max_update_factor: u32) -> u8 {
  let prob = get_binary_prob(ct[0], ct[1]);
  let count = std::cmp::min(ct[0].saturating_add(ct[1]), count_sat);
  let factor = max_update_factor * count / count_sat;
  weighted_prob(pre_prob, prob, factor)
}

// (count_sat, update_factor) for a frame
pub fn adaptation_constants(intra_only: bool, last_frame_was_key: bool) -> (u32, u32) {
  if intra_only {
    (COEF_COUNT_SAT_KEY, COEF_MAX_UPDATE_FACTOR_KEY)
  } else if last_frame_was_key {
    (COEF_COUNT_SAT_AFTER_KEY, COEF_MAX_UPDATE_FACTOR_AFTER_KEY)
  } else {
    (COEF_COUNT_SAT, COEF_MAX_UPDATE_FACTOR)
  }
}

fn adapt_tx_size(fc: &mut CoefProbs, pre_fc: &CoefProbs, counts: &CoefCounts, tx_size: TxSize,
                 count_sat: u32, update_factor: u32) {
  let pre_probs = pre_fc.table(tx_size);
  let probs = fc.table_mut(tx_size);

  for i in 0..PLANE_TYPES {
    for j in 0..REF_TYPES {
      for k in 0..COEF_BANDS {
        for l in 0..band_coeff_contexts(k) {
          let branch_ct = counts.branch_counts(tx_size, i, j, k, l);
          for m in 0..UNCONSTRAINED_NODES {
            probs[i][j][k][l][m] = merge_probs(pre_probs[i][j][k][l][m], branch_ct[m], count_sat, update_factor);
          }
        }
      }
    }
  }
}

// Blend this frame's counts into `fc`, starting from the saved context `pre_fc`
pub fn adapt_coef_probs(fc: &mut CoefProbs, pre_fc: &CoefProbs, counts: &CoefCounts,
                        intra_only: bool, last_frame_was_key: bool) {
  let (count_sat, update_factor) = adaptation_constants(intra_only, last_frame_was_key);
  debug!(count_sat, update_factor, "Adapting coefficient probabilities");

  for tx_size in TxSize::ALL {
    adapt_tx_size(fc, pre_fc, counts, tx_size, count_sat, update_factor);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn binary_prob_rounds_and_clips() {
    assert_eq!(get_binary_prob(0, 0), 128);
    assert_eq!(get_binary_prob(1, 1), 128);
    assert_eq!(get_binary_prob(1, 2), 85);
    assert_eq!(get_binary_prob(10, 0), 255);
    assert_eq!(get_binary_prob(0, 10), 1);
  }

  #[test]
  fn merge_saturates() {
    // Fully saturated counts move 112/256 of the way
    assert_eq!(merge_probs(128, [100, 0], 24, 112), round2_u32(128 * 144 + 255 * 112, 8) as u8);
    // No counts leave the probability unchanged
    assert_eq!(merge_probs(37, [0, 0], 24, 112), 37);
    // Half-saturated counts move half as far
    assert_eq!(merge_probs(100, [12, 0], 24, 128), round2_u32(100 * 192 + 255 * 64, 8) as u8);
  }

  #[test]
  fn constants_depend_on_frame_kind() {
    assert_eq!(adaptation_constants(true, true), (24, 112));
    assert_eq!(adaptation_constants(false, true), (24, 128));
    assert_eq!(adaptation_constants(false, false), (24, 112));
  }

  #[test]
  fn repeated_adaptation_converges() {
    let tx_size = TxSize::TX_8X8;
    let mut fc = CoefProbs::defaults();
    let mut counts = CoefCounts::new();
    // Context (Y, intra, band 2, ctx 1) sees only ZERO tokens, context
    // (UV, inter, band 4, ctx 3) only large tokens
    counts.tokens_mut(tx_size, PlaneType::Y, RefType::INTRA, 2, 1)[ZERO_MODEL_TOKEN] = 50;
    *counts.eob_branch_mut(tx_size, PlaneType::Y, RefType::INTRA, 2, 1) = 50;
    counts.tokens_mut(tx_size, PlaneType::UV, RefType::INTER, 4, 3)[TWO_MODEL_TOKEN] = 50;
    *counts.eob_branch_mut(tx_size, PlaneType::UV, RefType::INTER, 4, 3) = 50;

    let mut prev_zero = fc.get(tx_size, PlaneType::Y, RefType::INTRA, 2, 1)[ZERO_CONTEXT_NODE];
    let mut prev_one = fc.get(tx_size, PlaneType::UV, RefType::INTER, 4, 3)[ONE_CONTEXT_NODE];
    for _ in 0..40 {
      let pre_fc = fc.clone();
      adapt_coef_probs(&mut fc, &pre_fc, &counts, false, false);

      let zero = fc.get(tx_size, PlaneType::Y, RefType::INTRA, 2, 1)[ZERO_CONTEXT_NODE];
      let one = fc.get(tx_size, PlaneType::UV, RefType::INTER, 4, 3)[ONE_CONTEXT_NODE];
      assert!(zero >= prev_zero);
      assert!(one <= prev_one);
      prev_zero = zero;
      prev_one = one;
    }
    assert!(prev_zero >= 250);
    assert!(prev_one <= 5);

    // Nothing leaves the valid range, and unused band 0 contexts stay empty
    for tx_size in TxSize::ALL {
      let table = fc.table(tx_size);
      for plane in 0..PLANE_TYPES {
        for ref_type in 0..REF_TYPES {
          for band in 0..COEF_BANDS {
            for ctx in 0..band_coeff_contexts(band) {
              assert!(table[plane][ref_type][band][ctx].iter().all(|&p| p >= 1));
            }
            for ctx in band_coeff_contexts(band)..COEFF_CONTEXTS {
              assert_eq!(table[plane][ref_type][band][ctx], [0, 0, 0]);
            }
          }
        }
      }
    }
  }
}
