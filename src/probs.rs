// Coefficient probability model
//
// Each (tx size, plane type, ref type, band, context) holds three explicit
// node probabilities: EOB, ZERO and ONE. The remaining eight nodes of the
// token tree are derived from the ONE node (the pivot) through a fixed
// table modelling a Pareto distribution of coefficient magnitudes.

use tracing::warn;

use crate::consts::*;
use crate::default_probs::*;
use crate::enums::*;

// Number of contexts actually used in a band. Band 0 only holds the DC
// coefficient, whose context comes from the neighbouring blocks
pub fn band_coeff_contexts(band: usize) -> usize {
  if band == 0 { 3 } else { COEFF_CONTEXTS }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoefProbs {
  pub probs: [CoefModelTable; TX_SIZES],
}

impl CoefProbs {
  pub fn defaults() -> Self {
    Self {
      probs: [
        *default_coef_probs[0],
        *default_coef_probs[1],
        *default_coef_probs[2],
        *default_coef_probs[3],
      ]
    }
  }

  pub fn get(&self, tx_size: TxSize, plane_type: PlaneType, ref_type: RefType, band: usize, ctx: usize) -> &[u8; UNCONSTRAINED_NODES] {
    assert!(ctx < band_coeff_contexts(band));
    &self.probs[tx_size as usize][plane_type as usize][ref_type as usize][band][ctx]
  }

  pub fn get_mut(&mut self, tx_size: TxSize, plane_type: PlaneType, ref_type: RefType, band: usize, ctx: usize) -> &mut [u8; UNCONSTRAINED_NODES] {
    assert!(ctx < band_coeff_contexts(band));
    &mut self.probs[tx_size as usize][plane_type as usize][ref_type as usize][band][ctx]
  }

  pub fn table(&self, tx_size: TxSize) -> &CoefModelTable {
    &self.probs[tx_size as usize]
  }

  pub fn table_mut(&mut self, tx_size: TxSize) -> &mut CoefModelTable {
    &mut self.probs[tx_size as usize]
  }
}

impl Default for CoefProbs {
  fn default() -> Self {
    Self::defaults()
  }
}

pub fn default_coef_probs_table() -> CoefProbs {
  CoefProbs::defaults()
}

// Iterate over every (plane, ref, band, ctx) cell that carries probabilities
pub fn for_each_coef_context<F: FnMut(PlaneType, RefType, usize, usize)>(mut f: F) {
  for plane_type in [PlaneType::Y, PlaneType::UV] {
    for ref_type in [RefType::INTRA, RefType::INTER] {
      for band in 0..COEF_BANDS {
        for ctx in 0..band_coeff_contexts(band) {
          f(plane_type, ref_type, band, ctx);
        }
      }
    }
  }
}

pub fn pareto_table() -> &'static [[u8; MODEL_NODES]; COEFF_PROB_MODELS] {
  &pareto8_full
}

pub fn pareto_row(pivot: u8) -> &'static [u8; MODEL_NODES] {
  if pivot == 0 {
    warn!("Zero pivot probability in coefficient model, using the first Pareto row");
    return &pareto_table()[0];
  }
  &pareto_table()[pivot as usize - 1]
}

// Expand the three explicit nodes into the probabilities of all 11 tree nodes
pub fn model_to_full(model: &[u8; UNCONSTRAINED_NODES]) -> [u8; ENTROPY_NODES] {
  let mut full = [0u8; ENTROPY_NODES];
  full[..UNCONSTRAINED_NODES].copy_from_slice(model);
  full[UNCONSTRAINED_NODES..].copy_from_slice(pareto_row(model[PIVOT_NODE]));
  return full;
}
