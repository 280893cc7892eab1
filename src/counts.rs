// Per-frame token statistics, consumed by probability adaptation

use bytemuck::Zeroable;
use bytemuck::allocation::zeroed_box;

use crate::consts::*;
use crate::enums::*;

pub type CoefTokenCounts = [[[[[u32; MODEL_TOKENS]; COEFF_CONTEXTS]; COEF_BANDS]; REF_TYPES]; PLANE_TYPES];
pub type EobBranchCounts = [[[[u32; COEFF_CONTEXTS]; COEF_BANDS]; REF_TYPES]; PLANE_TYPES];

#[derive(Clone, Debug, PartialEq, Eq, Zeroable)]
#[repr(C)]
pub struct CoefCounts {
  // ZERO, ONE, TWO-or-more and EOB buckets per context
  pub coef: [CoefTokenCounts; TX_SIZES],
  // Number of times the EOB node was coded per context
  pub eob_branch: [EobBranchCounts; TX_SIZES],
}

impl CoefCounts {
  // The tables are around 12KB, so they always live on the heap
  pub fn new() -> Box<Self> {
    zeroed_box()
  }

  pub fn clear(&mut self) {
    *self = Self::zeroed();
  }

  #[inline]
  pub fn tokens_mut(&mut self, tx_size: TxSize, plane_type: PlaneType, ref_type: RefType, band: usize, ctx: usize) -> &mut [u32; MODEL_TOKENS] {
    &mut self.coef[tx_size as usize][plane_type as usize][ref_type as usize][band][ctx]
  }

  #[inline]
  pub fn eob_branch_mut(&mut self, tx_size: TxSize, plane_type: PlaneType, ref_type: RefType, band: usize, ctx: usize) -> &mut u32 {
    &mut self.eob_branch[tx_size as usize][plane_type as usize][ref_type as usize][band][ctx]
  }

  pub fn add(&mut self, other: &CoefCounts) {
    for (dst, src) in self.coef.iter_mut().flatten().flatten().flatten().flatten()
                        .zip(other.coef.iter().flatten().flatten().flatten().flatten()) {
      for k in 0..MODEL_TOKENS {
        dst[k] += src[k];
      }
    }
    for (dst, src) in self.eob_branch.iter_mut().flatten().flatten().flatten()
                        .zip(other.eob_branch.iter().flatten().flatten().flatten()) {
      for k in 0..COEFF_CONTEXTS {
        dst[k] += src[k];
      }
    }
  }

  // Branch counts for the three explicit nodes: {more tokens, EOB},
  // {ZERO, nonzero}, {ONE, larger}
  pub fn branch_counts(&self, tx_size: TxSize, plane: usize, ref_type: usize, band: usize, ctx: usize) -> [[u32; 2]; UNCONSTRAINED_NODES] {
    let c = &self.coef[tx_size as usize][plane][ref_type][band][ctx];
    let eob_branch = self.eob_branch[tx_size as usize][plane][ref_type][band][ctx];
    let (n0, n1, n2, neob) = (c[ZERO_MODEL_TOKEN], c[ONE_MODEL_TOKEN], c[TWO_MODEL_TOKEN], c[EOB_MODEL_TOKEN]);
    [
      [neob, eob_branch.saturating_sub(neob)],
      [n0, n1 + n2],
      [n1, n2],
    ]
  }

  // Reduce per-tile counts into a frame total
  pub fn sum<'a, I: IntoIterator<Item = &'a CoefCounts>>(counts: I) -> Box<Self> {
    let mut total = Self::new();
    for c in counts {
      total.add(c);
    }
    return total;
  }

  // Number of coded tokens (including EOB) for one transform size
  pub fn total_tokens(&self, tx_size: TxSize) -> u64 {
    self.coef[tx_size as usize].iter().flatten().flatten().flatten().flatten()
      .map(|&c| c as u64)
      .sum()
  }

  pub fn is_empty(&self, tx_size: TxSize) -> bool {
    self.total_tokens(tx_size) == 0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sum_adds_every_bucket() {
    let mut a = CoefCounts::new();
    let mut b = CoefCounts::new();
    a.tokens_mut(TxSize::TX_8X8, PlaneType::UV, RefType::INTER, 3, 5)[ONE_MODEL_TOKEN] = 4;
    b.tokens_mut(TxSize::TX_8X8, PlaneType::UV, RefType::INTER, 3, 5)[ONE_MODEL_TOKEN] = 6;
    *b.eob_branch_mut(TxSize::TX_4X4, PlaneType::Y, RefType::INTRA, 0, 2) = 9;

    let total = CoefCounts::sum([&*a, &*b]);
    assert_eq!(total.coef[1][1][1][3][5][ONE_MODEL_TOKEN], 10);
    assert_eq!(total.eob_branch[0][0][0][0][2], 9);
    assert_eq!(total.total_tokens(TxSize::TX_8X8), 10);
    assert!(total.is_empty(TxSize::TX_32X32));
  }

  #[test]
  fn clear_zeroes_everything() {
    let mut a = CoefCounts::new();
    a.tokens_mut(TxSize::TX_32X32, PlaneType::Y, RefType::INTRA, 1, 0)[0] = 1;
    a.clear();
    assert_eq!(a, CoefCounts::new());
  }
}
