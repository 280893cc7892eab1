// Rate estimation
//
// Costs are in units of 1/512 bit (PROB_COST_SHIFT fractional bits), so a
// decision coded with probability 128 costs exactly 512.

use std::sync::OnceLock;

use bytemuck::allocation::zeroed_box;

use crate::consts::*;
use crate::entropycode::BoolEncoder;
use crate::enums::*;
use crate::probs::{CoefProbs, for_each_coef_context, model_to_full};
use crate::scan::band_translate;
use crate::tokens::{TxBlock, coef_encodings, token_extra, token_for_level};

fn build_prob_cost_table() -> [u16; 256] {
  let mut table = [0u16; 256];
  for p in 1..256 {
    let bits = -(p as f64 / 256.0).log2();
    table[p] = (bits * (1 << PROB_COST_SHIFT) as f64).round() as u16;
  }
  table[0] = table[1];
  return table;
}

// Cost of coding a 0 with probability `prob`
pub fn prob_cost(prob: u8) -> u32 {
  static TABLE: OnceLock<[u16; 256]> = OnceLock::new();
  TABLE.get_or_init(build_prob_cost_table)[prob as usize] as u32
}

pub fn cost_bit(prob: u8, bit: bool) -> u32 {
  if bit {
    prob_cost((256 - prob as u32).min(255) as u8)
  } else {
    prob_cost(prob)
  }
}

// Cost of ct[0] zeros and ct[1] ones
pub fn cost_branch(ct: [u32; 2], prob: u8) -> u64 {
  ct[0] as u64 * cost_bit(prob, false) as u64 + ct[1] as u64 * cost_bit(prob, true) as u64
}

// Path cost through coef_tree, starting from node `start`
fn tree_cost(probs: &[u8; ENTROPY_NODES], bits: u32, len: u32, start: usize) -> u32 {
  let mut i = start;
  let mut cost = 0;
  for k in (0..len).rev() {
    let bit = (bits >> k) & 1;
    cost += cost_bit(probs[i >> 1], bit != 0);
    i = coef_tree[i + bit as usize] as usize;
  }
  return cost;
}

// Extra bits and sign of a nonzero level
fn level_extra_cost(abs_level: u32, token: Token, bit_depth: u32) -> u32 {
  let (base, extra_probs) = token_extra(token, bit_depth);
  let extra = abs_level - base as u32;
  let nbits = extra_probs.len();
  let mut cost = cost_bit(128, false);
  for (i, &prob) in extra_probs.iter().enumerate() {
    cost += cost_bit(prob, (extra >> (nbits - 1 - i)) & 1 != 0);
  }
  return cost;
}

// [band][ctx][eob_allowed][token]
pub type BlockTokenCosts = [[[[u32; ENTROPY_TOKENS]; 2]; COEFF_CONTEXTS]; COEF_BANDS];
pub type TokenCostTable = [[[BlockTokenCosts; REF_TYPES]; PLANE_TYPES]; TX_SIZES];

// Per-token costs for every context. `eob_allowed == false` is the state
// directly after a ZERO token, where the EOB node is not coded.
pub struct TokenCosts {
  costs: Box<TokenCostTable>,
}

impl TokenCosts {
  pub fn new(probs: &CoefProbs) -> Self {
    let mut costs: Box<TokenCostTable> = zeroed_box();
    for tx_size in TxSize::ALL {
      for_each_coef_context(|plane_type, ref_type, band, ctx| {
        let full = model_to_full(probs.get(tx_size, plane_type, ref_type, band, ctx));
        let entry = &mut costs[tx_size as usize][plane_type as usize][ref_type as usize][band][ctx];
        for token in Token::ALL {
          let (bits, len) = coef_encodings[token as usize];
          entry[1][token as usize] = tree_cost(&full, bits, len, 0);
          if token != Token::EOB_TOKEN {
            entry[0][token as usize] = tree_cost(&full, bits, len - 1, 2);
          }
        }
      });
    }
    Self {
      costs: costs
    }
  }

  pub fn token_cost(&self, block: &TxBlock, band: usize, ctx: usize, eob_allowed: bool, token: Token) -> u32 {
    self.block_table(block)[band][ctx][eob_allowed as usize][token as usize]
  }

  fn block_table(&self, block: &TxBlock) -> &BlockTokenCosts {
    &self.costs[block.tx_size as usize][block.plane_type as usize][block.ref_type as usize]
  }
}

// Rate of coding `levels` (raster order) with the token writer, including
// extra bits, signs and the terminating EOB
pub fn block_rate(costs: &TokenCosts, levels: &[i32], eob: usize, block: &TxBlock, ctx: usize, bit_depth: u32) -> u32 {
  let n = block.area();
  assert!(levels.len() == n);
  assert!(eob <= n);

  let table = costs.block_table(block);
  let scan = block.scan();
  let bands = band_translate(block.tx_size);
  let mut token_cache = [0u8; 1024];
  let mut ctx = ctx;
  let mut eob_allowed = true;
  let mut rate = 0;

  for c in 0..eob {
    let pos = scan.scan[c] as usize;
    let band = bands[c] as usize;
    let abs_level = levels[pos].unsigned_abs();
    let token = token_for_level(abs_level);

    rate += table[band][ctx][eob_allowed as usize][token as usize];
    if abs_level != 0 {
      rate += level_extra_cost(abs_level, token, bit_depth);
    }
    token_cache[pos] = pt_energy_class[token as usize];
    eob_allowed = abs_level != 0;

    if c + 1 < n {
      ctx = scan.coef_context(&token_cache, c + 1);
    }
  }

  if eob < n {
    rate += table[bands[eob] as usize][ctx][1][Token::EOB_TOKEN as usize];
  }

  return rate;
}

// Bool "writer" that only accumulates the ideal cost of each decision
#[derive(Clone, Debug, Default)]
pub struct BitCounter {
  cost: u64,
}

impl BitCounter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn cost(&self) -> u64 {
    self.cost
  }

  // Rounded up to whole bits
  pub fn bits(&self) -> u64 {
    (self.cost + (1 << PROB_COST_SHIFT) - 1) >> PROB_COST_SHIFT
  }
}

impl BoolEncoder for BitCounter {
  fn write_bool(&mut self, bit: bool, prob: u8) {
    self.cost += cost_bit(prob, bit) as u64;
  }
}
