// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Binary arithmetic ("bool") coder
//
// Each call codes one binary decision, where `prob` is the probability
// (out of 256) that the decision is 0. A partition starts with a single 0
// marker bit and ends with 32 bits of zero padding, so that the decoder's
// lookahead never runs off the end of valid data.

use crate::error::{CodecError, Result};

// Anything that consumes binary decisions. The token writer is generic over
// this so that the same code path can produce bits, or only count them
pub trait BoolEncoder {
  fn write_bool(&mut self, bit: bool, prob: u8);

  fn write_bit(&mut self, bit: bool) {
    self.write_bool(bit, 128);
  }

  // Unsigned value, most significant bit first
  fn write_literal(&mut self, value: u32, bits: u32) {
    for bit in (0..bits).rev() {
      self.write_bit((value >> bit) & 1 != 0);
    }
  }

  // Walk `tree` from node `start`, coding the `len` low bits of `bits`
  // (most significant first) as the branch decisions
  fn write_tree(&mut self, tree: &[i8], probs: &[u8], bits: u32, len: u32, start: usize) {
    let mut i = start;
    let mut len = len;
    while len > 0 {
      len -= 1;
      let bit = (bits >> len) & 1;
      self.write_bool(bit != 0, probs[i >> 1]);
      i = tree[i + bit as usize] as usize;
    }
  }
}

pub struct BoolWriter {
  data: Vec<u8>,
  lowvalue: u32,
  range: u32,
  // Bits still to be produced before the next byte is ready, minus 24
  count: i32,
}

impl BoolWriter {
  pub fn new() -> Self {
    let mut w = Self {
      data: Vec::new(),
      lowvalue: 0,
      range: 255,
      count: -24
    };
    // Marker bit
    w.write_bit(false);
    return w;
  }

  // Add one to the bytes already written, rippling through any 0xFF bytes
  fn propagate_carry(&mut self) {
    for byte in self.data.iter_mut().rev() {
      if *byte == 0xff {
        *byte = 0;
      } else {
        *byte += 1;
        return;
      }
    }
  }

  pub fn bytes_written(&self) -> usize {
    self.data.len()
  }

  pub fn finalize(mut self) -> Box<[u8]> {
    for _ in 0..32 {
      self.write_bit(false);
    }

    // A trailing byte of the form 110xxxxx could be mistaken for a
    // superframe index, so pad with a zero byte in that case
    if let Some(&last) = self.data.last() {
      if last & 0xe0 == 0xc0 {
        self.data.push(0);
      }
    }

    return self.data.into_boxed_slice();
  }
}

impl BoolEncoder for BoolWriter {
  fn write_bool(&mut self, bit: bool, prob: u8) {
    let split = 1 + (((self.range - 1) * prob as u32) >> 8);

    if bit {
      self.lowvalue = self.lowvalue.wrapping_add(split);
      self.range -= split;
    } else {
      self.range = split;
    }

    let mut shift = self.range.leading_zeros() as i32 - 24;
    self.range <<= shift;
    self.count += shift;

    if self.count >= 0 {
      let offset = shift - self.count;
      if (self.lowvalue << (offset - 1)) & 0x8000_0000 != 0 {
        self.propagate_carry();
      }
      self.data.push((self.lowvalue >> (24 - offset)) as u8);
      self.lowvalue <<= offset;
      shift = self.count;
      self.lowvalue &= 0xff_ffff;
      self.count -= 8;
    }

    self.lowvalue <<= shift;
  }
}

impl Default for BoolWriter {
  fn default() -> Self {
    Self::new()
  }
}

pub struct BoolReader<'a> {
  data: &'a [u8],
  pos: usize,
  // Undecoded bits, aligned to the top of the word
  value: u64,
  // Number of valid bits in `value`
  bits: u32,
  range: u32,
  // Total number of bits shifted out of `value`
  consumed: usize,
}

impl<'a> BoolReader<'a> {
  pub fn new(data: &'a [u8]) -> Result<Self> {
    if data.is_empty() {
      return Err(CodecError::UnexpectedEndOfData("empty partition"));
    }

    let mut r = Self {
      data: data,
      pos: 0,
      value: 0,
      bits: 0,
      range: 255,
      consumed: 0
    };
    r.fill();

    if r.read_bit() {
      return Err(CodecError::InvalidMarkerBit);
    }
    Ok(r)
  }

  // Load whole bytes until the window is nearly full. Past the end of the
  // data the window is filled with zeros, which `has_error` accounts for
  fn fill(&mut self) {
    while self.bits <= 56 {
      let byte = if self.pos < self.data.len() { self.data[self.pos] } else { 0 };
      self.pos += 1;
      self.value |= (byte as u64) << (56 - self.bits);
      self.bits += 8;
    }
  }

  pub fn read_bool(&mut self, prob: u8) -> bool {
    let prob = prob as u32;
    let split = (self.range * prob + (256 - prob)) >> 8;

    if self.bits < 8 {
      self.fill();
    }

    let bigsplit = (split as u64) << 56;
    let bit;
    if self.value >= bigsplit {
      self.range -= split;
      self.value -= bigsplit;
      bit = true;
    } else {
      self.range = split;
      bit = false;
    }

    let shift = self.range.leading_zeros() - 24;
    self.range <<= shift;
    self.value <<= shift;
    self.bits -= shift;
    self.consumed += shift as usize;

    return bit;
  }

  pub fn read_bit(&mut self) -> bool {
    self.read_bool(128)
  }

  pub fn read_literal(&mut self, bits: u32) -> u32 {
    let mut value = 0;
    for _ in 0..bits {
      value = (value << 1) | (self.read_bit() as u32);
    }
    return value;
  }

  // Returns the (non-negative) leaf value reached from node `start`
  pub fn read_tree(&mut self, tree: &[i8], probs: &[u8], start: usize) -> usize {
    let mut i = start as i32;
    loop {
      let bit = self.read_bool(probs[(i >> 1) as usize]);
      i = tree[i as usize + bit as usize] as i32;
      if i <= 0 {
        return (-i) as usize;
      }
    }
  }

  // True once decoding has needed bits beyond the end of the partition
  pub fn has_error(&self) -> bool {
    self.consumed > 8 * self.data.len()
  }

  pub fn check_error(&self, what: &'static str) -> Result<()> {
    if self.has_error() {
      return Err(CodecError::UnexpectedEndOfData(what));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::consts::coef_tree;
  use rand::rngs::StdRng;
  use rand::{Rng, SeedableRng};

  #[test]
  fn random_decisions_round_trip() {
    let mut rng = StdRng::seed_from_u64(3);
    let decisions: Vec<(bool, u8)> = (0..5000).map(|_| {
      let prob = rng.gen_range(1..=255u8);
      // Bias the decisions so that skewed probabilities are exercised
      let bit = rng.gen_range(0..256u32) >= prob as u32;
      (bit, prob)
    }).collect();

    let mut w = BoolWriter::new();
    for &(bit, prob) in &decisions {
      w.write_bool(bit, prob);
    }
    let data = w.finalize();

    let mut r = BoolReader::new(&data).unwrap();
    for &(bit, prob) in &decisions {
      assert_eq!(r.read_bool(prob), bit);
    }
    assert!(!r.has_error());
  }

  #[test]
  fn literals_and_trees_round_trip() {
    let mut w = BoolWriter::new();
    w.write_literal(0x2a5, 10);
    // CATEGORY3_TOKEN is reached by the branch decisions 1111100
    let probs = [200, 150, 100, 90, 80, 70, 60, 50, 40, 30, 20];
    w.write_tree(&coef_tree, &probs, 0b1111100, 7, 0);
    w.write_literal(7, 3);
    let data = w.finalize();

    let mut r = BoolReader::new(&data).unwrap();
    assert_eq!(r.read_literal(10), 0x2a5);
    assert_eq!(r.read_tree(&coef_tree, &probs, 0), 7);
    assert_eq!(r.read_literal(3), 7);
    assert!(r.check_error("test").is_ok());
  }

  #[test]
  fn marker_bit_is_checked() {
    assert_eq!(BoolReader::new(&[0x80, 0, 0, 0]).err(), Some(CodecError::InvalidMarkerBit));
    assert!(BoolReader::new(&[]).is_err());
  }

  #[test]
  fn reading_past_the_end_is_detected() {
    let mut r = BoolReader::new(&[0x12]).unwrap();
    for _ in 0..64 {
      r.read_bit();
    }
    assert!(r.has_error());
  }

  #[test]
  fn carries_propagate() {
    // Long runs of unlikely ones force carries through earlier bytes
    let mut w = BoolWriter::new();
    for i in 0..2000 {
      w.write_bool(i % 7 != 0, 250);
    }
    let data = w.finalize();
    let mut r = BoolReader::new(&data).unwrap();
    for i in 0..2000 {
      assert_eq!(r.read_bool(250), i % 7 != 0);
    }
  }
}
