// Scalar quantization of transform coefficients

use tracing::debug;

use crate::array2d::Array2D;
use crate::config::DeltaQ;
use crate::consts::*;
use crate::enums::*;
use crate::scan::ScanOrder;
use crate::util::clamp;

fn qindex_with_delta(qindex: i32, delta: i32) -> usize {
  clamp(qindex + delta, 0, 255) as usize
}

fn step_tables(bit_depth: u32) -> (&'static [i16; 256], &'static [i16; 256]) {
  match bit_depth {
    8 => (&dc_qlookup, &ac_qlookup),
    10 => (&dc_qlookup_10, &ac_qlookup_10),
    12 => (&dc_qlookup_12, &ac_qlookup_12),
    _ => panic!("Unsupported bit depth {}", bit_depth)
  }
}

pub fn dc_quant(qindex: i32, delta: i32, bit_depth: u32) -> i32 {
  let (dc, _) = step_tables(bit_depth);
  dc[qindex_with_delta(qindex, delta)] as i32
}

pub fn ac_quant(qindex: i32, delta: i32, bit_depth: u32) -> i32 {
  let (_, ac) = step_tables(bit_depth);
  ac[qindex_with_delta(qindex, delta)] as i32
}

// 32x32 coefficients are stored at half the scale of the smaller sizes
pub fn dq_shift(tx_size: TxSize) -> u32 {
  if tx_size == TxSize::TX_32X32 { 1 } else { 0 }
}

// Per-frame DC and AC step sizes for each plane type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuantParams {
  // [plane_type][0 = DC, 1 = AC]
  pub steps: [[i32; 2]; PLANE_TYPES],
  pub bit_depth: u32,
}

impl QuantParams {
  pub fn new(base_qindex: i32, delta_q: DeltaQ, bit_depth: u32) -> Self {
    let y = [
      dc_quant(base_qindex, delta_q.y_dc, bit_depth),
      ac_quant(base_qindex, 0, bit_depth),
    ];
    let uv = [
      dc_quant(base_qindex, delta_q.uv_dc, bit_depth),
      ac_quant(base_qindex, delta_q.uv_ac, bit_depth),
    ];
    Self {
      steps: [y, uv],
      bit_depth: bit_depth
    }
  }

  // Same DC/AC steps for every plane, bypassing the lookup tables
  pub fn from_steps(dc_step: i32, ac_step: i32, bit_depth: u32) -> Self {
    assert!(dc_step > 0 && ac_step > 0);
    Self {
      steps: [[dc_step, ac_step]; PLANE_TYPES],
      bit_depth: bit_depth
    }
  }

  pub fn dequant(&self, plane_type: PlaneType) -> [i32; 2] {
    self.steps[plane_type as usize]
  }
}

// Holds the parameters for the most recent (qindex, deltas, bit depth),
// so that they are only rebuilt when the frame-level quantizer changes
#[derive(Debug, Default)]
pub struct QuantCache {
  key: Option<(i32, DeltaQ, u32)>,
  params: Option<QuantParams>,
}

impl QuantCache {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&mut self, base_qindex: i32, delta_q: DeltaQ, bit_depth: u32) -> QuantParams {
    let key = (base_qindex, delta_q, bit_depth);
    match (self.key, self.params) {
      (Some(cached), Some(params)) if cached == key => params,
      _ => {
        let params = QuantParams::new(base_qindex, delta_q, bit_depth);
        debug!(base_qindex, bit_depth, y_dc = params.steps[0][0], y_ac = params.steps[0][1],
               "Recomputed quantizer steps");
        self.key = Some(key);
        self.params = Some(params);
        params
      }
    }
  }
}

// Quantize `coeffs` into `levels` (raster order), returning the end of block:
// one past the last nonzero level in scan order, or 0 if every level is zero
pub fn quantize(coeffs: &Array2D<i32>, levels: &mut [i32], dequant: [i32; 2], tx_size: TxSize, scan: &ScanOrder) -> usize {
  let n = tx_size.area();
  assert!(coeffs.rows() * coeffs.cols() == n);
  assert!(levels.len() == n);
  assert!(scan.len() == n);

  let shift = dq_shift(tx_size);
  let coeffs = coeffs.as_slice();
  let mut eob = 0;

  for c in 0..n {
    let pos = scan.scan[c] as usize;
    let q = dequant[(c > 0) as usize];
    let coeff = coeffs[pos];
    let abs_level = (((coeff.unsigned_abs() as i64) << shift) + ((q - 1) / 2) as i64) / q as i64;
    let level = if coeff < 0 { -(abs_level as i32) } else { abs_level as i32 };
    levels[pos] = level;
    if level != 0 {
      eob = c + 1;
    }
  }

  return eob;
}

// Rebuild coefficients from quantized levels (raster order)
pub fn dequantize(levels: &[i32], coeffs: &mut Array2D<i32>, dequant: [i32; 2], tx_size: TxSize) {
  let n = tx_size.area();
  assert!(levels.len() == n);
  assert!(coeffs.rows() * coeffs.cols() == n);

  // The shift applies to the magnitude, matching the token reader
  let shift = dq_shift(tx_size);
  let out = coeffs.as_mut_slice();
  for pos in 0..n {
    let q = dequant[(pos > 0) as usize];
    let magnitude = (levels[pos].abs() * q) >> shift;
    out[pos] = if levels[pos] < 0 { -magnitude } else { magnitude };
  }
}
