// Frame-level parameters supplied by the surrounding frame management code

use crate::consts::*;
use crate::enums::*;
use crate::error::{CodecError, Result};

// Quantizer deltas applied on top of the base index
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DeltaQ {
  pub y_dc: i32,
  pub uv_dc: i32,
  pub uv_ac: i32,
}

// Frame dimensions and chroma subsampling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameLayout {
  pub width: usize,
  pub height: usize,
  pub subsampling_x: bool,
  pub subsampling_y: bool,
}

impl FrameLayout {
  // 4:2:0 layout
  pub fn new(width: usize, height: usize) -> Self {
    Self {
      width: width,
      height: height,
      subsampling_x: true,
      subsampling_y: true
    }
  }

  pub fn with_subsampling(mut self, subsampling_x: bool, subsampling_y: bool) -> Self {
    self.subsampling_x = subsampling_x;
    self.subsampling_y = subsampling_y;
    self
  }

  // Plane size in 4x4 units, rounded up to whole 64x64 superblocks of luma
  pub fn plane_size_4x4(&self, plane: usize) -> (usize, usize) {
    let (ssx, ssy) = self.subsampling(plane);
    ((self.sb_rows() * 16) >> ssy, (self.sb_cols() * 16) >> ssx)
  }

  pub fn sb_cols(&self) -> usize {
    self.width.div_ceil(64)
  }

  pub fn sb_rows(&self) -> usize {
    self.height.div_ceil(64)
  }

  // (x, y) subsampling shifts of a plane
  pub fn subsampling(&self, plane: usize) -> (usize, usize) {
    if plane == 0 {
      (0, 0)
    } else {
      (self.subsampling_x as usize, self.subsampling_y as usize)
    }
  }

  // Plane size in pixels, including the padding up to whole superblocks
  pub fn plane_dims(&self, plane: usize) -> (usize, usize) {
    let (rows4, cols4) = self.plane_size_4x4(plane);
    (rows4 * 4, cols4 * 4)
  }

  pub fn validate(&self) -> Result<()> {
    if self.width == 0 || self.height == 0 || self.width > 65536 || self.height > 65536 {
      return Err(CodecError::invalid_config(format!(
        "frame size {}x{}", self.width, self.height
      )));
    }
    Ok(())
  }
}

// Per-frame parameters that drive quantization, context selection and adaptation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameParams {
  pub frame_type: FrameType,
  pub intra_only: bool,
  pub last_frame_was_key: bool,
  pub base_qindex: i32,
  pub delta_q: DeltaQ,
  pub bit_depth: u32,
  pub frame_context_idx: usize,
  pub refresh_frame_context: bool,
  // 0 or 1: keep contexts, 2: reset the selected context, 3: reset all
  pub reset_frame_context: u8,
  pub error_resilient: bool,
  pub tile_cols_log2: u32,
  // Encoder only: search for and signal explicit probability updates
  pub update_probs: bool,
}

impl Default for FrameParams {
  fn default() -> Self {
    Self {
      frame_type: FrameType::KEY_FRAME,
      intra_only: false,
      last_frame_was_key: false,
      base_qindex: 60,
      delta_q: DeltaQ::default(),
      bit_depth: 8,
      frame_context_idx: 0,
      refresh_frame_context: true,
      reset_frame_context: 0,
      error_resilient: false,
      tile_cols_log2: 0,
      update_probs: true,
    }
  }
}

impl FrameParams {
  pub fn key_frame() -> Self {
    Self::default()
  }

  pub fn inter_frame(last_frame_was_key: bool) -> Self {
    Self {
      frame_type: FrameType::INTER_FRAME,
      last_frame_was_key: last_frame_was_key,
      ..Self::default()
    }
  }

  pub fn with_qindex(mut self, base_qindex: i32) -> Self {
    self.base_qindex = base_qindex;
    self
  }

  pub fn with_delta_q(mut self, delta_q: DeltaQ) -> Self {
    self.delta_q = delta_q;
    self
  }

  pub fn with_bit_depth(mut self, bit_depth: u32) -> Self {
    self.bit_depth = bit_depth;
    self
  }

  pub fn with_frame_context(mut self, idx: usize) -> Self {
    self.frame_context_idx = idx;
    self
  }

  pub fn with_tile_cols_log2(mut self, tile_cols_log2: u32) -> Self {
    self.tile_cols_log2 = tile_cols_log2;
    self
  }

  pub fn with_refresh(mut self, refresh_frame_context: bool) -> Self {
    self.refresh_frame_context = refresh_frame_context;
    self
  }

  pub fn with_error_resilient(mut self, error_resilient: bool) -> Self {
    self.error_resilient = error_resilient;
    self
  }

  pub fn with_update_probs(mut self, update_probs: bool) -> Self {
    self.update_probs = update_probs;
    self
  }

  pub fn is_intra_only(&self) -> bool {
    self.frame_type == FrameType::KEY_FRAME || self.intra_only
  }

  // Adaptation is skipped for error resilient frames
  pub fn adapts_probs(&self) -> bool {
    !self.error_resilient
  }

  pub fn validate(&self, layout: &FrameLayout) -> Result<()> {
    layout.validate()?;
    if !matches!(self.bit_depth, 8 | 10 | 12) {
      return Err(CodecError::invalid_config(format!("bit depth {}", self.bit_depth)));
    }
    if !(0..=255).contains(&self.base_qindex) {
      return Err(CodecError::invalid_config(format!("base_qindex {}", self.base_qindex)));
    }
    for delta in [self.delta_q.y_dc, self.delta_q.uv_dc, self.delta_q.uv_ac] {
      if !(-15..=15).contains(&delta) {
        return Err(CodecError::invalid_config(format!("delta_q {}", delta)));
      }
    }
    if self.frame_context_idx >= FRAME_CONTEXTS {
      return Err(CodecError::invalid_config(format!(
        "frame_context_idx {}", self.frame_context_idx
      )));
    }
    if self.reset_frame_context > 3 {
      return Err(CodecError::invalid_config(format!(
        "reset_frame_context {}", self.reset_frame_context
      )));
    }
    let (min_log2, max_log2) = tile_cols_log2_range(layout.sb_cols());
    if self.tile_cols_log2 < min_log2 || self.tile_cols_log2 > max_log2 {
      return Err(CodecError::invalid_config(format!(
        "tile_cols_log2 {} outside {}..={}", self.tile_cols_log2, min_log2, max_log2
      )));
    }
    Ok(())
  }
}

// Allowed range of tile_cols_log2 for a frame `sb_cols` superblocks wide.
// Tiles are at most 64 superblocks and at least 4 superblocks wide
pub fn tile_cols_log2_range(sb_cols: usize) -> (u32, u32) {
  let mut min_log2 = 0;
  while (64usize << min_log2) < sb_cols {
    min_log2 += 1;
  }
  let mut max_log2 = 1;
  while (sb_cols >> max_log2) >= MIN_TILE_WIDTH_B64 {
    max_log2 += 1;
  }
  max_log2 -= 1;
  (min_log2, std::cmp::max(min_log2, max_log2).min(MAX_TILE_COLS_LOG2))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_params_are_valid() {
    let layout = FrameLayout::new(352, 288);
    assert_eq!(FrameParams::default().validate(&layout), Ok(()));
  }

  #[test]
  fn rejects_out_of_range_values() {
    let layout = FrameLayout::new(64, 64);
    assert!(FrameParams::default().with_bit_depth(9).validate(&layout).is_err());
    assert!(FrameParams::default().with_qindex(256).validate(&layout).is_err());
    assert!(FrameParams::default().with_frame_context(4).validate(&layout).is_err());
    assert!(FrameParams::default().with_tile_cols_log2(1).validate(&layout).is_err());
    assert!(FrameParams::default().validate(&FrameLayout::new(0, 64)).is_err());
  }

  #[test]
  fn tile_column_limits() {
    // 1920 pixels = 30 superblocks: up to 4 tile columns of >= 4 superblocks
    assert_eq!(tile_cols_log2_range(30), (0, 2));
    assert_eq!(tile_cols_log2_range(1), (0, 0));
    assert_eq!(tile_cols_log2_range(8), (0, 1));
  }

  #[test]
  fn chroma_planes_are_subsampled() {
    let layout = FrameLayout::new(100, 70);
    assert_eq!(layout.plane_size_4x4(0), (32, 32));
    assert_eq!(layout.plane_size_4x4(1), (16, 16));
    assert_eq!(layout.plane_dims(2), (64, 64));
    let layout = layout.with_subsampling(false, false);
    assert_eq!(layout.plane_size_4x4(2), (32, 32));
    assert_eq!(layout.subsampling(1), (0, 0));
  }
}
