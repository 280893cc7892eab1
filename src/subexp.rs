// Forward (explicit) probability updates
//
// Before the tiles of a frame, the encoder may replace any model
// probability. Each update is coded as a flag at DIFF_UPDATE_PROB followed
// by the new value, recentred around the old one and coded with a
// terminated sub-exponential code, so small changes are cheap.

use tracing::debug;

use crate::adapt::get_binary_prob;
use crate::consts::*;
use crate::cost::{cost_bit, cost_branch};
use crate::counts::CoefCounts;
use crate::entropycode::{BoolEncoder, BoolReader};
use crate::enums::*;
use crate::error::Result;
use crate::probs::{CoefProbs, band_coeff_contexts};

const MAX_PROB: i32 = 255;

// Every 13th value first, since those are the most common deltas
const fn build_inv_map_table() -> [u8; MAX_PROB as usize] {
  let mut table = [0u8; MAX_PROB as usize];
  let mut i = 0;
  while i < 20 {
    table[i] = (7 + 13 * i) as u8;
    i += 1;
  }
  let mut v = 1;
  while v <= 253 {
    if v < 7 || (v - 7) % 13 != 0 {
      table[i] = v as u8;
      i += 1;
    }
    v += 1;
  }
  table[i] = 253;
  table
}

const fn build_map_table() -> [u8; MAX_PROB as usize - 1] {
  let inv = build_inv_map_table();
  let mut table = [0u8; MAX_PROB as usize - 1];
  let mut j = 0;
  while j < MAX_PROB as usize - 1 {
    table[inv[j] as usize - 1] = j as u8;
    j += 1;
  }
  table
}

pub const inv_map_table: [u8; MAX_PROB as usize] = build_inv_map_table();
const map_table: [u8; MAX_PROB as usize - 1] = build_map_table();

fn recenter_nonneg(v: i32, m: i32) -> i32 {
  if v > (m << 1) {
    v
  } else if v >= m {
    (v - m) << 1
  } else {
    ((m - v) << 1) - 1
  }
}

fn inv_recenter_nonneg(v: i32, m: i32) -> i32 {
  if v > 2 * m {
    return v;
  }
  if v & 1 != 0 { m - ((v + 1) >> 1) } else { m + (v >> 1) }
}

// Index coded for moving from `old` to `new`
pub fn remap_prob(new: u8, old: u8) -> usize {
  assert!(new != old && new != 0 && old != 0);
  let v = new as i32 - 1;
  let m = old as i32 - 1;
  let i = if (m << 1) <= MAX_PROB {
    recenter_nonneg(v, m) - 1
  } else {
    recenter_nonneg(MAX_PROB - 1 - v, MAX_PROB - 1 - m) - 1
  };
  map_table[i as usize] as usize
}

pub fn inv_remap_prob(delp: usize, old: u8) -> u8 {
  let v = inv_map_table[delp] as i32;
  let m = old as i32 - 1;
  let p = if (m << 1) <= MAX_PROB {
    1 + inv_recenter_nonneg(v, m)
  } else {
    MAX_PROB - inv_recenter_nonneg(v, MAX_PROB - 1 - m)
  };
  p.clamp(1, 255) as u8
}

// Values below 65 take 7 bits, the rest 8
fn encode_uniform<W: BoolEncoder>(w: &mut W, v: u32) {
  let l = 8;
  let m = (1 << l) - 191;
  if v < m {
    w.write_literal(v, l - 1);
  } else {
    w.write_literal(m + ((v - m) >> 1), l - 1);
    w.write_literal((v - m) & 1, 1);
  }
}

fn decode_uniform(r: &mut BoolReader) -> u32 {
  let l = 8;
  let m = (1 << l) - 191;
  let v = r.read_literal(l - 1);
  if v < m { v } else { (v << 1) - m + r.read_bit() as u32 }
}

pub fn encode_term_subexp<W: BoolEncoder>(w: &mut W, word: u32) {
  assert!(word < MAX_PROB as u32);
  for (bucket_start, bucket_bits) in [(0, 4), (16, 4), (32, 5)] {
    let next = bucket_start + (1 << bucket_bits);
    if word < next {
      w.write_bit(false);
      w.write_literal(word - bucket_start, bucket_bits);
      return;
    }
    w.write_bit(true);
  }
  encode_uniform(w, word - 64);
}

pub fn decode_term_subexp(r: &mut BoolReader) -> u32 {
  if !r.read_bit() {
    return r.read_literal(4);
  }
  if !r.read_bit() {
    return r.read_literal(4) + 16;
  }
  if !r.read_bit() {
    return r.read_literal(5) + 32;
  }
  decode_uniform(r) + 64
}

// Bits taken by encode_term_subexp
pub fn term_subexp_bits(word: u32) -> u32 {
  match word {
    0..=15 => 5,
    16..=31 => 6,
    32..=63 => 8,
    _ => if word - 64 < 65 { 10 } else { 11 },
  }
}

fn update_cost(new: u8, old: u8, upd: u8) -> i64 {
  let delp = remap_prob(new, old);
  let bits = (term_subexp_bits(delp as u32) << PROB_COST_SHIFT) as i64;
  bits + cost_bit(upd, true) as i64 - cost_bit(upd, false) as i64
}

// Find the probability between the current one and the one the counts
// suggest that saves the most bits once the cost of signalling it is paid.
// Returns (savings, best probability); savings of 0 means "keep `oldp`".
pub fn savings_search(ct: [u32; 2], oldp: u8, upd: u8) -> (i64, u8) {
  let old_b = cost_branch(ct, oldp) as i64;
  let target = get_binary_prob(ct[0], ct[1]);
  let mut best_savings = 0;
  let mut bestp = oldp;

  let mut newp = target;
  while newp != oldp {
    let new_b = cost_branch(ct, newp) as i64;
    let savings = old_b - new_b - update_cost(newp, oldp, upd);
    if savings > best_savings {
      best_savings = savings;
      bestp = newp;
    }
    if newp > oldp { newp -= 1 } else { newp += 1 }
  }
  (best_savings, bestp)
}

// For each (plane, ref, band, ctx, node) of one transform size: the
// savings and chosen probability
fn search_tx_size(fc: &CoefProbs, counts: &CoefCounts, tx_size: TxSize) -> Vec<(i64, u8)> {
  let table = fc.table(tx_size);
  let mut result = Vec::new();
  for i in 0..PLANE_TYPES {
    for j in 0..REF_TYPES {
      for k in 0..COEF_BANDS {
        for l in 0..band_coeff_contexts(k) {
          let branch_ct = counts.branch_counts(tx_size, i, j, k, l);
          for t in 0..UNCONSTRAINED_NODES {
            result.push(savings_search(branch_ct[t], table[i][j][k][l][t], DIFF_UPDATE_PROB));
          }
        }
      }
    }
  }
  result
}

fn write_tx_size_updates<W: BoolEncoder>(w: &mut W, fc: &mut CoefProbs, counts: &CoefCounts, tx_size: TxSize) -> usize {
  let choices = search_tx_size(fc, counts, tx_size);
  let table = fc.table(tx_size);

  // Dry run: is signalling anything at all worth the per-node flags?
  let no_update_cost = cost_bit(DIFF_UPDATE_PROB, false) as i64;
  let mut savings = 0;
  let mut num_updates = 0;
  let mut idx = 0;
  for i in 0..PLANE_TYPES {
    for j in 0..REF_TYPES {
      for k in 0..COEF_BANDS {
        for l in 0..band_coeff_contexts(k) {
          for t in 0..UNCONSTRAINED_NODES {
            let (s, newp) = choices[idx];
            idx += 1;
            if s > 0 && newp != table[i][j][k][l][t] {
              savings += s - no_update_cost;
              num_updates += 1;
            } else {
              savings -= no_update_cost;
            }
          }
        }
      }
    }
  }

  if num_updates == 0 || savings < 0 {
    w.write_bit(false);
    return 0;
  }
  w.write_bit(true);

  let table = fc.table_mut(tx_size);
  let mut idx = 0;
  for i in 0..PLANE_TYPES {
    for j in 0..REF_TYPES {
      for k in 0..COEF_BANDS {
        for l in 0..band_coeff_contexts(k) {
          for t in 0..UNCONSTRAINED_NODES {
            let (s, newp) = choices[idx];
            idx += 1;
            let oldp = &mut table[i][j][k][l][t];
            let update = s > 0 && newp != *oldp;
            w.write_bool(update, DIFF_UPDATE_PROB);
            if update {
              encode_term_subexp(w, remap_prob(newp, *oldp) as u32);
              *oldp = newp;
            }
          }
        }
      }
    }
  }
  num_updates
}

// Write updates for every transform size up to `max_tx_size`, applying them
// to `fc`. Returns the number of probabilities changed.
pub fn write_coef_updates<W: BoolEncoder>(w: &mut W, fc: &mut CoefProbs, counts: &CoefCounts, max_tx_size: TxSize) -> usize {
  let mut total = 0;
  for tx_size in TxSize::ALL {
    if tx_size > max_tx_size {
      break;
    }
    let n = write_tx_size_updates(w, fc, counts, tx_size);
    debug!(?tx_size, updates = n, "Wrote coefficient probability updates");
    total += n;
  }
  total
}

// Signal that no probabilities change
pub fn write_no_updates<W: BoolEncoder>(w: &mut W, max_tx_size: TxSize) {
  for tx_size in TxSize::ALL {
    if tx_size > max_tx_size {
      break;
    }
    w.write_bit(false);
  }
}

pub fn read_coef_updates(r: &mut BoolReader, fc: &mut CoefProbs, max_tx_size: TxSize) -> Result<usize> {
  let mut total = 0;
  for tx_size in TxSize::ALL {
    if tx_size > max_tx_size {
      break;
    }
    if !r.read_bit() {
      continue;
    }
    let table = fc.table_mut(tx_size);
    for i in 0..PLANE_TYPES {
      for j in 0..REF_TYPES {
        for k in 0..COEF_BANDS {
          for l in 0..band_coeff_contexts(k) {
            for t in 0..UNCONSTRAINED_NODES {
              if r.read_bool(DIFF_UPDATE_PROB) {
                let delp = decode_term_subexp(r) as usize;
                let p = &mut table[i][j][k][l][t];
                *p = inv_remap_prob(delp, *p);
                total += 1;
              }
            }
          }
        }
      }
    }
  }
  r.check_error("probability updates")?;
  debug!(updates = total, "Read coefficient probability updates");
  Ok(total)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cost::BitCounter;
  use crate::entropycode::BoolWriter;

  #[test]
  fn map_tables_are_inverse() {
    assert_eq!(inv_map_table[0], 7);
    assert_eq!(inv_map_table[19], 254);
    assert_eq!(inv_map_table[20], 1);
    assert_eq!(inv_map_table[254], 253);
    for j in 0..254 {
      assert_eq!(map_table[inv_map_table[j] as usize - 1] as usize, j);
    }
  }

  #[test]
  fn remapping_round_trips_every_pair() {
    for old in 1..=255u8 {
      for new in 1..=255u8 {
        if new != old {
          let delp = remap_prob(new, old);
          assert!(delp < 254);
          assert_eq!(inv_remap_prob(delp, old), new, "old {} new {}", old, new);
        }
      }
    }
  }

  #[test]
  fn subexp_words_round_trip() {
    let mut w = BoolWriter::new();
    for word in 0..255 {
      encode_term_subexp(&mut w, word);
    }
    let data = w.finalize();
    let mut r = BoolReader::new(&data).unwrap();
    for word in 0..255 {
      assert_eq!(decode_term_subexp(&mut r), word);
    }
    assert!(!r.has_error());

    for word in 0..255 {
      let mut counter = BitCounter::new();
      encode_term_subexp(&mut counter, word);
      assert_eq!(counter.cost(), (term_subexp_bits(word) as u64) << PROB_COST_SHIFT);
    }
  }

  #[test]
  fn savings_search_prefers_the_observed_ratio() {
    // 1000 zeros against 10 ones: the current 128 is far from optimal
    let (savings, bestp) = savings_search([1000, 10], 128, DIFF_UPDATE_PROB);
    assert!(savings > 0);
    assert!(bestp > 240);
    // No counts, nothing to gain
    assert_eq!(savings_search([0, 0], 90, DIFF_UPDATE_PROB), (0, 90));
  }

  #[test]
  fn updates_round_trip() {
    let mut counts = CoefCounts::new();
    let tx_size = TxSize::TX_8X8;
    for band in 1..COEF_BANDS {
      let c = counts.tokens_mut(tx_size, PlaneType::Y, RefType::INTRA, band, 0);
      c[ZERO_MODEL_TOKEN] = 500;
      c[ONE_MODEL_TOKEN] = 3;
      *counts.eob_branch_mut(tx_size, PlaneType::Y, RefType::INTRA, band, 0) = 503;
    }

    let mut enc_fc = CoefProbs::defaults();
    let mut w = BoolWriter::new();
    let updates = write_coef_updates(&mut w, &mut enc_fc, &counts, TxSize::TX_32X32);
    let data = w.finalize();
    assert!(updates > 0);
    assert_ne!(enc_fc, CoefProbs::defaults());
    // Only the transform size with counts changes
    assert_eq!(enc_fc.table(TxSize::TX_4X4), CoefProbs::defaults().table(TxSize::TX_4X4));

    let mut dec_fc = CoefProbs::defaults();
    let mut r = BoolReader::new(&data).unwrap();
    assert_eq!(read_coef_updates(&mut r, &mut dec_fc, TxSize::TX_32X32), Ok(updates));
    assert_eq!(dec_fc, enc_fc);
  }

  #[test]
  fn no_counts_means_no_updates() {
    let counts = CoefCounts::new();
    let mut fc = CoefProbs::defaults();
    let mut w = BoolWriter::new();
    assert_eq!(write_coef_updates(&mut w, &mut fc, &counts, TxSize::TX_16X16), 0);
    let data = w.finalize();

    let mut r = BoolReader::new(&data).unwrap();
    let mut dec_fc = CoefProbs::defaults();
    assert_eq!(read_coef_updates(&mut r, &mut dec_fc, TxSize::TX_16X16), Ok(0));
    assert_eq!(dec_fc, CoefProbs::defaults());
  }
}
