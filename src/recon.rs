// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Reconstruction functions

// Transform pipeline for one transform block:
// residual -> forward transform -> quantize -> tokens -> dequantize -> inverse transform
// The logic here implements the "big picture" stuff, for individual stages
// see txfm.rs, quant.rs and tokens.rs
//
// Blocks are addressed by their top-left pixel (y0, x0) within a plane.
// `recon` holds the prediction on entry and the reconstruction on exit.

use crate::array2d::Array2D;
use crate::consts::PROB_COST_SHIFT;
use crate::cost::{TokenCosts, block_rate};
use crate::counts::CoefCounts;
use crate::entropycode::{BoolEncoder, BoolReader};
use crate::enums::*;
use crate::error::Result;
use crate::probs::CoefProbs;
use crate::quant::{QuantParams, dequantize, quantize};
use crate::tokens::{TxBlock, decode_coefs, encode_coefs, max_level};
use crate::txfm::*;

// Scale applied to distortion relative to rate in rd_cost
pub const RDDIV_BITS: u32 = 7;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuantizedBlock {
  // Raster order
  pub levels: Box<[i32]>,
  pub eob: usize,
}

// Outcome of coding a block without committing anything to a bitstream
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialResult {
  pub eob: usize,
  // 1/512 bit units
  pub rate: u32,
  // Sum of squared pixel errors after reconstruction
  pub distortion: u64,
  pub levels: Box<[i32]>,
}

// Rate-distortion cost with the Lagrange multiplier `rdmult`
pub fn rd_cost(rdmult: u64, rate: u32, distortion: u64) -> u64 {
  ((rate as u64 * rdmult + (1 << (PROB_COST_SHIFT - 1))) >> PROB_COST_SHIFT) + (distortion << RDDIV_BITS)
}

// Lagrange multiplier for a quantizer step size
pub fn rd_mult(dc_step: i32) -> u64 {
  let q = dc_step as u64;
  std::cmp::max(88 * q * q / 24, 1)
}

// Calculate the residual (difference) between a given source image and the
// corresponding prediction
pub fn compute_residual(source: &Array2D<u16>, pred: &Array2D<u16>, y0: usize, x0: usize, n: usize) -> Array2D<i32> {
  Array2D::new_with(
    n, n,
    |i, j| (source[y0 + i][x0 + j] as i32) - (pred[y0 + i][x0 + j] as i32)
  )
}

pub fn transform_and_quantize(source: &Array2D<u16>, pred: &Array2D<u16>, y0: usize, x0: usize,
                              block: &TxBlock, quant: &QuantParams) -> QuantizedBlock {
  let n = block.tx_size.width();
  let mut residual = compute_residual(source, pred, y0, x0, n);
  fwd_txfm2d(&mut residual, block.tx_size, block.tx_type, quant.bit_depth);

  let mut levels = vec![0i32; n * n].into_boxed_slice();
  let eob = quantize(&residual, &mut levels, quant.dequant(block.plane_type), block.tx_size, block.scan());

  // Only reachable with tiny custom steps on extreme input
  let limit = max_level(quant.bit_depth) as i32;
  for level in levels.iter_mut() {
    *level = (*level).clamp(-limit, limit);
  }

  QuantizedBlock {
    levels: levels,
    eob: eob
  }
}

// Inverse transform dequantized coefficients and add them onto the
// prediction held in `recon`
pub fn apply_residual(recon: &mut Array2D<u16>, coeffs: &Array2D<i32>, y0: usize, x0: usize, block: &TxBlock, bd: u32) {
  let n = block.tx_size.width();
  let mut dst = Array2D::new_with(n, n, |i, j| recon[y0 + i][x0 + j]);
  inv_txfm2d_add(coeffs, &mut dst, block.tx_size, block.tx_type, bd);
  for i in 0..n {
    recon[y0 + i][x0 .. x0 + n].copy_from_slice(&dst[i]);
  }
}

pub fn reconstruct_block(qb: &QuantizedBlock, recon: &mut Array2D<u16>, y0: usize, x0: usize,
                         block: &TxBlock, quant: &QuantParams) {
  if qb.eob == 0 {
    return;
  }
  let n = block.tx_size.width();
  let mut coeffs = Array2D::zeroed(n, n);
  dequantize(&qb.levels, &mut coeffs, quant.dequant(block.plane_type), block.tx_size);
  apply_residual(recon, &coeffs, y0, x0, block, quant.bit_depth);
}

// Code one block and reconstruct it in place
pub fn encode_block<W: BoolEncoder>(w: &mut W, source: &Array2D<u16>, recon: &mut Array2D<u16>, y0: usize, x0: usize,
                                    block: &TxBlock, ctx: usize, probs: &CoefProbs, quant: &QuantParams,
                                    counts: &mut CoefCounts) -> QuantizedBlock {
  let qb = transform_and_quantize(source, recon, y0, x0, block, quant);
  encode_coefs(w, &qb.levels, qb.eob, block, ctx, probs, counts, quant.bit_depth);
  reconstruct_block(&qb, recon, y0, x0, block, quant);
  return qb;
}

// Read one block and add its residual onto the prediction in `recon`.
// Returns the end of block
pub fn decode_block(r: &mut BoolReader, recon: &mut Array2D<u16>, y0: usize, x0: usize,
                    block: &TxBlock, ctx: usize, probs: &CoefProbs, quant: &QuantParams,
                    counts: &mut CoefCounts) -> Result<usize> {
  let n = block.tx_size.width();
  let mut coeffs = Array2D::zeroed(n, n);
  let eob = decode_coefs(r, coeffs.as_mut_slice(), block, ctx, probs, counts,
                         quant.dequant(block.plane_type), quant.bit_depth)?;
  if eob > 0 {
    apply_residual(recon, &coeffs, y0, x0, block, quant.bit_depth);
  }
  Ok(eob)
}

// Evaluate coding `source` against `pred` without touching any bitstream,
// counts or pixels
pub fn trial_encode_block(source: &Array2D<u16>, pred: &Array2D<u16>, y0: usize, x0: usize,
                          block: &TxBlock, ctx: usize, quant: &QuantParams, costs: &TokenCosts) -> TrialResult {
  let n = block.tx_size.width();
  let qb = transform_and_quantize(source, pred, y0, x0, block, quant);
  let rate = block_rate(costs, &qb.levels, qb.eob, block, ctx, quant.bit_depth);

  let mut recon = Array2D::new_with(n, n, |i, j| pred[y0 + i][x0 + j]);
  reconstruct_block(&qb, &mut recon, 0, 0, block, quant);

  let mut distortion = 0u64;
  for i in 0..n {
    for j in 0..n {
      let diff = source[y0 + i][x0 + j] as i64 - recon[i][j] as i64;
      distortion += (diff * diff) as u64;
    }
  }

  TrialResult {
    eob: qb.eob,
    rate: rate,
    distortion: distortion,
    levels: qb.levels
  }
}

// Pick the transform type with the lowest rate-distortion cost
pub fn choose_tx_type(source: &Array2D<u16>, pred: &Array2D<u16>, y0: usize, x0: usize,
                      tx_size: TxSize, plane_type: PlaneType, ref_type: RefType, ctx: usize,
                      quant: &QuantParams, costs: &TokenCosts, rdmult: u64) -> (TxType, TrialResult) {
  let evaluate = |tx_type: TxType| {
    let block = TxBlock::new(tx_size, tx_type, plane_type, ref_type);
    let trial = trial_encode_block(source, pred, y0, x0, &block, ctx, quant, costs);
    (rd_cost(rdmult, trial.rate, trial.distortion), trial)
  };

  let (mut best_cost, mut best_trial) = evaluate(TxType::DCT_DCT);
  let mut best_type = TxType::DCT_DCT;
  for tx_type in [TxType::ADST_DCT, TxType::DCT_ADST, TxType::ADST_ADST] {
    if !tx_type.is_valid_for(tx_size) {
      continue;
    }
    let (cost, trial) = evaluate(tx_type);
    if cost < best_cost {
      best_cost = cost;
      best_trial = trial;
      best_type = tx_type;
    }
  }
  (best_type, best_trial)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cost::BitCounter;
  use crate::entropycode::BoolWriter;
  use rand::rngs::StdRng;
  use rand::{Rng, SeedableRng};

  fn textured(rows: usize, cols: usize, seed: u64) -> Array2D<u16> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2D::new_with(rows, cols, |i, j| {
      let base = 128 + ((i * 3 + j * 5) % 40) as i32;
      (base + rng.gen_range(-20..=20)) as u16
    })
  }

  fn flat(rows: usize, cols: usize, value: u16) -> Array2D<u16> {
    Array2D::new_with(rows, cols, |_, _| value)
  }

  #[test]
  fn encoder_and_decoder_reconstruct_identically() {
    let source = textured(64, 64, 1);
    let quant = QuantParams::new(80, Default::default(), 8);
    let probs = CoefProbs::defaults();
    let blocks = [
      (0, 0, TxBlock::new(TxSize::TX_32X32, TxType::DCT_DCT, PlaneType::Y, RefType::INTRA)),
      (0, 32, TxBlock::new(TxSize::TX_16X16, TxType::ADST_DCT, PlaneType::Y, RefType::INTRA)),
      (16, 32, TxBlock::new(TxSize::TX_8X8, TxType::DCT_ADST, PlaneType::UV, RefType::INTER)),
      (32, 0, TxBlock::new(TxSize::TX_4X4, TxType::ADST_ADST, PlaneType::Y, RefType::INTRA)),
    ];

    let mut enc_recon = flat(64, 64, 128);
    let mut enc_counts = CoefCounts::new();
    let mut w = BoolWriter::new();
    for (y0, x0, block) in &blocks {
      encode_block(&mut w, &source, &mut enc_recon, *y0, *x0, block, 0, &probs, &quant, &mut enc_counts);
    }
    let data = w.finalize();

    let mut dec_recon = flat(64, 64, 128);
    let mut dec_counts = CoefCounts::new();
    let mut r = BoolReader::new(&data).unwrap();
    for (y0, x0, block) in &blocks {
      decode_block(&mut r, &mut dec_recon, *y0, *x0, block, 0, &probs, &quant, &mut dec_counts).unwrap();
    }

    assert_eq!(enc_recon, dec_recon);
    assert_eq!(enc_counts, dec_counts);
    // The coded blocks moved toward the source
    assert_ne!(enc_recon, flat(64, 64, 128));
  }

  #[test]
  fn trial_matches_a_real_encode() {
    let source = textured(16, 16, 2);
    let pred = flat(16, 16, 140);
    let quant = QuantParams::new(40, Default::default(), 8);
    let probs = CoefProbs::defaults();
    let costs = TokenCosts::new(&probs);
    let block = TxBlock::new(TxSize::TX_16X16, TxType::DCT_DCT, PlaneType::Y, RefType::INTRA);

    let trial = trial_encode_block(&source, &pred, 0, 0, &block, 1, &quant, &costs);

    let mut counter = BitCounter::new();
    let mut recon = pred.clone();
    let mut counts = CoefCounts::new();
    let qb = encode_block(&mut counter, &source, &mut recon, 0, 0, &block, 1, &probs, &quant, &mut counts);

    assert_eq!(trial.eob, qb.eob);
    assert_eq!(trial.levels, qb.levels);
    assert_eq!(trial.rate as u64, counter.cost());
    let sse: u64 = (0..16).flat_map(|i| (0..16).map(move |j| (i, j)))
      .map(|(i, j)| (source[i][j] as i64 - recon[i][j] as i64).pow(2) as u64)
      .sum();
    assert_eq!(trial.distortion, sse);
  }

  #[test]
  fn lossless_steps_reproduce_small_residuals() {
    // With unit steps the only loss is transform rounding
    let source = textured(8, 8, 3);
    let pred = flat(8, 8, 150);
    let quant = QuantParams::from_steps(1, 1, 8);
    let block = TxBlock::new(TxSize::TX_8X8, TxType::DCT_DCT, PlaneType::Y, RefType::INTRA);
    let mut recon = pred.clone();
    let mut w = BoolWriter::new();
    encode_block(&mut w, &source, &mut recon, 0, 0, &block, 0, &CoefProbs::defaults(), &quant, &mut CoefCounts::new());
    for i in 0..8 {
      for j in 0..8 {
        assert!((source[i][j] as i32 - recon[i][j] as i32).abs() <= 2);
      }
    }
  }

  #[test]
  fn chosen_type_is_never_worse_than_dct() {
    let mut rng = StdRng::seed_from_u64(4);
    let quant = QuantParams::new(100, Default::default(), 8);
    let costs = TokenCosts::new(&CoefProbs::defaults());
    let rdmult = rd_mult(quant.steps[0][0]);
    for _ in 0..20 {
      // Residuals that grow away from the top-left edge favour ADST
      let slope = rng.gen_range(1..6);
      let source = Array2D::new_with(8, 8, |i, j| (100 + slope * (i + j) as u16 + rng.gen_range(0..3)) as u16);
      let pred = flat(8, 8, 100);
      let (tx_type, best) = choose_tx_type(&source, &pred, 0, 0, TxSize::TX_8X8, PlaneType::Y, RefType::INTRA,
                                           0, &quant, &costs, rdmult);
      let dct = trial_encode_block(&source, &pred, 0, 0,
                                   &TxBlock::new(TxSize::TX_8X8, TxType::DCT_DCT, PlaneType::Y, RefType::INTRA),
                                   0, &quant, &costs);
      assert!(rd_cost(rdmult, best.rate, best.distortion) <= rd_cost(rdmult, dct.rate, dct.distortion));
      assert!(tx_type.is_valid_for(TxSize::TX_8X8));
    }

    // Only DCT exists at 32x32
    let source = textured(32, 32, 5);
    let (tx_type, _) = choose_tx_type(&source, &flat(32, 32, 128), 0, 0, TxSize::TX_32X32, PlaneType::UV,
                                      RefType::INTER, 2, &quant, &costs, rdmult);
    assert_eq!(tx_type, TxType::DCT_DCT);
  }
}
