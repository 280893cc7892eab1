// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Coefficient token coding
//
// Coefficients are coded in scan order as tokens from `coef_tree`. The first
// three tree nodes (EOB, ZERO, ONE) use the explicit model probabilities for
// the current band and context; the rest use the Pareto row selected by the
// ONE node. The EOB node is skipped directly after a ZERO token, since a
// block never ends on a zero.

use tracing::trace;

use crate::consts::*;
use crate::counts::CoefCounts;
use crate::entropycode::{BoolEncoder, BoolReader};
use crate::enums::*;
use crate::error::{CodecError, Result};
use crate::probs::{CoefProbs, pareto_row};
use crate::scan::{ScanOrder, band_translate, get_scan};

// Everything about a transform block that selects its scan and probabilities
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TxBlock {
  pub tx_size: TxSize,
  pub tx_type: TxType,
  pub plane_type: PlaneType,
  pub ref_type: RefType,
}

impl TxBlock {
  pub fn new(tx_size: TxSize, tx_type: TxType, plane_type: PlaneType, ref_type: RefType) -> Self {
    assert!(tx_type.is_valid_for(tx_size));
    Self {
      tx_size: tx_size,
      tx_type: tx_type,
      plane_type: plane_type,
      ref_type: ref_type
    }
  }

  pub fn scan(&self) -> &'static ScanOrder {
    get_scan(self.tx_size, self.tx_type, self.ref_type)
  }

  pub fn area(&self) -> usize {
    self.tx_size.area()
  }

  fn model<'a>(&self, probs: &'a CoefProbs, band: usize, ctx: usize) -> &'a [u8; UNCONSTRAINED_NODES] {
    probs.get(self.tx_size, self.plane_type, self.ref_type, band, ctx)
  }
}

// Path through coef_tree to each token, as (branch bits, length)
pub const coef_encodings: [(u32, u32); ENTROPY_TOKENS] = [
  (2, 2),    // ZERO
  (6, 3),    // ONE
  (28, 5),   // TWO
  (58, 6),   // THREE
  (59, 6),   // FOUR
  (60, 6),   // CAT1
  (61, 6),   // CAT2
  (124, 7),  // CAT3
  (125, 7),  // CAT4
  (126, 7),  // CAT5
  (127, 7),  // CAT6
  (0, 1),    // EOB
];

pub fn token_for_level(abs_level: u32) -> Token {
  match abs_level {
    0 => Token::ZERO_TOKEN,
    1 => Token::ONE_TOKEN,
    2 => Token::TWO_TOKEN,
    3 => Token::THREE_TOKEN,
    4 => Token::FOUR_TOKEN,
    5..=6 => Token::CATEGORY1_TOKEN,
    7..=10 => Token::CATEGORY2_TOKEN,
    11..=18 => Token::CATEGORY3_TOKEN,
    19..=34 => Token::CATEGORY4_TOKEN,
    35..=66 => Token::CATEGORY5_TOKEN,
    _ => Token::CATEGORY6_TOKEN,
  }
}

pub fn cat6_bits(bit_depth: u32) -> u32 {
  match bit_depth {
    8 => 14,
    10 => 16,
    12 => 18,
    _ => panic!("Unsupported bit depth {}", bit_depth),
  }
}

// Smallest magnitude and extra-bit probabilities of each category token
pub fn token_extra(token: Token, bit_depth: u32) -> (i32, &'static [u8]) {
  match token {
    Token::CATEGORY1_TOKEN => (CAT1_MIN_VAL, &cat1_prob),
    Token::CATEGORY2_TOKEN => (CAT2_MIN_VAL, &cat2_prob),
    Token::CATEGORY3_TOKEN => (CAT3_MIN_VAL, &cat3_prob),
    Token::CATEGORY4_TOKEN => (CAT4_MIN_VAL, &cat4_prob),
    Token::CATEGORY5_TOKEN => (CAT5_MIN_VAL, &cat5_prob),
    Token::CATEGORY6_TOKEN => (CAT6_MIN_VAL, &cat6_prob[cat6_prob.len() - cat6_bits(bit_depth) as usize..]),
    Token::ZERO_TOKEN => (0, &[]),
    Token::ONE_TOKEN => (1, &[]),
    Token::TWO_TOKEN => (2, &[]),
    Token::THREE_TOKEN => (3, &[]),
    Token::FOUR_TOKEN => (4, &[]),
    Token::EOB_TOKEN => panic!("EOB_TOKEN has no magnitude"),
  }
}

// Largest magnitude a level may have at this bit depth
pub fn max_level(bit_depth: u32) -> u32 {
  (CAT6_MIN_VAL as u32) + (1 << cat6_bits(bit_depth)) - 1
}

// Write the tokens for one block. `levels` is in raster order and `eob` is
// one past the last nonzero level in scan order. `ctx` is the initial
// context from the neighbouring blocks.
pub fn encode_coefs<W: BoolEncoder>(w: &mut W, levels: &[i32], eob: usize, block: &TxBlock, ctx: usize,
                    probs: &CoefProbs, counts: &mut CoefCounts, bit_depth: u32) {
  let n = block.area();
  assert!(levels.len() == n);
  assert!(eob <= n);
  assert!(ctx < 3);

  let scan = block.scan();
  let bands = band_translate(block.tx_size);
  let mut token_cache = [0u8; 1024];
  let mut ctx = ctx;
  let mut skip_eob = false;
  let mut c = 0;

  while c < eob {
    let band = bands[c] as usize;
    let pos = scan.scan[c] as usize;
    let model = block.model(probs, band, ctx);
    let level = levels[pos];

    if !skip_eob {
      *counts.eob_branch_mut(block.tx_size, block.plane_type, block.ref_type, band, ctx) += 1;
      w.write_bool(true, model[EOB_CONTEXT_NODE]);
    }

    let token_counts = counts.tokens_mut(block.tx_size, block.plane_type, block.ref_type, band, ctx);
    if level == 0 {
      w.write_bool(false, model[ZERO_CONTEXT_NODE]);
      token_counts[ZERO_MODEL_TOKEN] += 1;
      token_cache[pos] = 0;
      skip_eob = true;
    } else {
      let abs_level = level.unsigned_abs();
      assert!(abs_level <= max_level(bit_depth), "Level {} too large for bit depth {}", level, bit_depth);
      let token = token_for_level(abs_level);

      w.write_bool(true, model[ZERO_CONTEXT_NODE]);
      if token == Token::ONE_TOKEN {
        w.write_bool(false, model[ONE_CONTEXT_NODE]);
        token_counts[ONE_MODEL_TOKEN] += 1;
      } else {
        w.write_bool(true, model[ONE_CONTEXT_NODE]);
        token_counts[TWO_MODEL_TOKEN] += 1;
        let (bits, len) = coef_encodings[token as usize];
        w.write_tree(&coef_con_tree, pareto_row(model[PIVOT_NODE]), bits, len - UNCONSTRAINED_NODES as u32, 0);

        let (base, extra_probs) = token_extra(token, bit_depth);
        let extra = abs_level - base as u32;
        let nbits = extra_probs.len();
        for (i, &prob) in extra_probs.iter().enumerate() {
          w.write_bool((extra >> (nbits - 1 - i)) & 1 != 0, prob);
        }
      }
      w.write_bit(level < 0);
      token_cache[pos] = pt_energy_class[token as usize];
      skip_eob = false;
    }

    c += 1;
    if c < n {
      ctx = scan.coef_context(&token_cache, c);
    }
  }

  if c < n {
    let band = bands[c] as usize;
    let model = block.model(probs, band, ctx);
    *counts.eob_branch_mut(block.tx_size, block.plane_type, block.ref_type, band, ctx) += 1;
    counts.tokens_mut(block.tx_size, block.plane_type, block.ref_type, band, ctx)[EOB_MODEL_TOKEN] += 1;
    w.write_bool(false, model[EOB_CONTEXT_NODE]);
  }

  trace!(tx_size = ?block.tx_size, eob, "Encoded coefficient tokens");
}

// Read the tokens for one block, writing dequantized coefficients (raster
// order) into `coeffs`. Returns the end of block.
pub fn decode_coefs(r: &mut BoolReader, coeffs: &mut [i32], block: &TxBlock, ctx: usize,
                    probs: &CoefProbs, counts: &mut CoefCounts, dequant: [i32; 2], bit_depth: u32) -> Result<usize> {
  let n = block.area();
  assert!(coeffs.len() == n);
  assert!(ctx < 3);

  let scan = block.scan();
  let bands = band_translate(block.tx_size);
  let dq_shift = if block.tx_size == TxSize::TX_32X32 { 1 } else { 0 };
  let max_value = 1i64 << (bit_depth + 7);
  let mut token_cache = [0u8; 1024];
  let mut ctx = ctx;
  let mut dqv = dequant[0];
  let mut c = 0;

  coeffs.fill(0);

  'tokens: while c < n {
    let mut band = bands[c] as usize;
    let mut model = block.model(probs, band, ctx);

    *counts.eob_branch_mut(block.tx_size, block.plane_type, block.ref_type, band, ctx) += 1;
    if !r.read_bool(model[EOB_CONTEXT_NODE]) {
      counts.tokens_mut(block.tx_size, block.plane_type, block.ref_type, band, ctx)[EOB_MODEL_TOKEN] += 1;
      break;
    }

    while !r.read_bool(model[ZERO_CONTEXT_NODE]) {
      counts.tokens_mut(block.tx_size, block.plane_type, block.ref_type, band, ctx)[ZERO_MODEL_TOKEN] += 1;
      dqv = dequant[1];
      token_cache[scan.scan[c] as usize] = 0;
      c += 1;
      if c >= n {
        break 'tokens;
      }
      ctx = scan.coef_context(&token_cache, c);
      band = bands[c] as usize;
      model = block.model(probs, band, ctx);
    }

    let token_counts = counts.tokens_mut(block.tx_size, block.plane_type, block.ref_type, band, ctx);
    let token;
    let value: i64;
    if !r.read_bool(model[ONE_CONTEXT_NODE]) {
      token_counts[ONE_MODEL_TOKEN] += 1;
      token = Token::ONE_TOKEN;
      value = 1;
    } else {
      token_counts[TWO_MODEL_TOKEN] += 1;
      token = Token::from_index(r.read_tree(&coef_con_tree, pareto_row(model[PIVOT_NODE]), 0));
      let (base, extra_probs) = token_extra(token, bit_depth);
      let mut extra = 0i64;
      for &prob in extra_probs {
        extra = (extra << 1) | (r.read_bool(prob) as i64);
      }
      value = base as i64 + extra;
    }

    let pos = scan.scan[c] as usize;
    let dequantized = (value * dqv as i64) >> dq_shift;
    let signed = if r.read_bit() { -dequantized } else { dequantized };
    if signed < -max_value || signed >= max_value {
      return Err(CodecError::CoefficientOverflow { position: c, value: signed });
    }
    coeffs[pos] = signed as i32;
    token_cache[pos] = pt_energy_class[token as usize];
    dqv = dequant[1];
    c += 1;
    if c < n {
      ctx = scan.coef_context(&token_cache, c);
    }
  }

  r.check_error("coefficient tokens")?;
  trace!(tx_size = ?block.tx_size, eob = c, "Decoded coefficient tokens");
  Ok(c)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::entropycode::BoolWriter;

  fn block_4x4() -> TxBlock {
    TxBlock::new(TxSize::TX_4X4, TxType::DCT_DCT, PlaneType::Y, RefType::INTRA)
  }

  #[test]
  fn token_classes() {
    assert_eq!(token_for_level(4), Token::FOUR_TOKEN);
    assert_eq!(token_for_level(6), Token::CATEGORY1_TOKEN);
    assert_eq!(token_for_level(18), Token::CATEGORY3_TOKEN);
    assert_eq!(token_for_level(66), Token::CATEGORY5_TOKEN);
    assert_eq!(token_for_level(67), Token::CATEGORY6_TOKEN);
    assert_eq!(max_level(8), 67 + 16383);
    assert_eq!(token_extra(Token::CATEGORY6_TOKEN, 10).1.len(), 16);
  }

  #[test]
  fn encodings_follow_the_tree() {
    for token in Token::ALL {
      let (bits, len) = coef_encodings[token as usize];
      let mut i = 0usize;
      for k in (0..len).rev() {
        let next = coef_tree[i + ((bits >> k) & 1) as usize];
        if k == 0 {
          assert_eq!(-(next as i32), token as i32, "{:?}", token);
        } else {
          i = next as usize;
        }
      }
    }
  }

  #[test]
  fn block_round_trip_with_counts() {
    let block = block_4x4();
    let levels = [3, -1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 70];
    let scan = block.scan();
    let eob = (0..16).rev().find(|&c| levels[scan.scan[c] as usize] != 0).map_or(0, |c| c + 1);
    let probs = CoefProbs::defaults();

    let mut enc_counts = CoefCounts::new();
    let mut w = BoolWriter::new();
    encode_coefs(&mut w, &levels, eob, &block, 0, &probs, &mut enc_counts, 8);
    let data = w.finalize();

    let mut dec_counts = CoefCounts::new();
    let mut r = BoolReader::new(&data).unwrap();
    let mut coeffs = [0i32; 16];
    let decoded_eob = decode_coefs(&mut r, &mut coeffs, &block, 0, &probs, &mut dec_counts, [1, 1], 8).unwrap();

    assert_eq!(decoded_eob, eob);
    assert_eq!(coeffs, levels);
    assert_eq!(enc_counts, dec_counts);
  }

  #[test]
  fn empty_block_codes_a_single_eob() {
    let block = TxBlock::new(TxSize::TX_8X8, TxType::ADST_DCT, PlaneType::UV, RefType::INTER);
    let probs = CoefProbs::defaults();
    let mut counts = CoefCounts::new();
    let mut w = BoolWriter::new();
    encode_coefs(&mut w, &[0; 64], 0, &block, 2, &probs, &mut counts, 10);
    assert_eq!(counts.coef[1][1][1][0][2][EOB_MODEL_TOKEN], 1);
    assert_eq!(counts.eob_branch[1][1][1][0][2], 1);
    assert_eq!(counts.total_tokens(TxSize::TX_8X8), 1);
  }

  #[test]
  fn dequantizes_with_dc_and_ac_steps() {
    let block = TxBlock::new(TxSize::TX_32X32, TxType::DCT_DCT, PlaneType::Y, RefType::INTRA);
    let mut levels = vec![0i32; 1024];
    levels[0] = 2;
    levels[1] = -3;
    let probs = CoefProbs::defaults();
    let mut w = BoolWriter::new();
    encode_coefs(&mut w, &levels, 2, &block, 1, &probs, &mut CoefCounts::new(), 8);
    let data = w.finalize();

    let mut r = BoolReader::new(&data).unwrap();
    let mut coeffs = vec![0i32; 1024];
    decode_coefs(&mut r, &mut coeffs, &block, 1, &probs, &mut CoefCounts::new(), [11, 20], 8).unwrap();
    assert_eq!(coeffs[0], 11);
    assert_eq!(coeffs[1], -30);
  }

  #[test]
  fn oversized_coefficients_are_rejected() {
    let block = block_4x4();
    let mut levels = [0i32; 16];
    levels[0] = 4000;
    let probs = CoefProbs::defaults();
    let mut w = BoolWriter::new();
    encode_coefs(&mut w, &levels, 1, &block, 0, &probs, &mut CoefCounts::new(), 8);
    let data = w.finalize();

    // 4000 * 20 does not fit in 16 bits
    let mut r = BoolReader::new(&data).unwrap();
    let mut coeffs = [0i32; 16];
    let result = decode_coefs(&mut r, &mut coeffs, &block, 0, &probs, &mut CoefCounts::new(), [20, 20], 8);
    assert_eq!(result, Err(CodecError::CoefficientOverflow { position: 0, value: 80000 }));
  }
}
