// Tiles
//
// A frame is split into columns of 64x64 superblocks, each entropy coded
// independently with its own bool coder and its own neighbour contexts.
// Within a tile, superblocks are visited in raster order, and within a
// superblock each plane is covered by transform blocks in raster order.

use tracing::trace;

use crate::array2d::Array2D;
use crate::config::FrameLayout;
use crate::consts::*;
use crate::cost::BitCounter;
use crate::counts::CoefCounts;
use crate::entropycode::{BoolReader, BoolWriter};
use crate::enums::*;
use crate::error::{CodecError, Result};
use crate::probs::CoefProbs;
use crate::quant::QuantParams;
use crate::recon::{QuantizedBlock, decode_block, encode_block};
use crate::tokens::{TxBlock, encode_coefs};

pub type Planes = [Array2D<u16>; MAX_PLANES];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileInfo {
  pub index: usize,
  pub sb_col_start: usize,
  pub sb_col_end: usize,
}

impl TileInfo {
  // Pixel column range of the tile within `plane`
  pub fn plane_cols(&self, layout: &FrameLayout, plane: usize) -> (usize, usize) {
    let (ssx, _) = layout.subsampling(plane);
    ((self.sb_col_start * 64) >> ssx, (self.sb_col_end * 64) >> ssx)
  }
}

// Split `sb_cols` superblock columns into 1 << tile_cols_log2 tiles
pub fn get_tile_offsets(sb_cols: usize, tile_cols_log2: u32) -> Vec<TileInfo> {
  let tile_cols = 1usize << tile_cols_log2;
  (0..tile_cols).map(|idx| TileInfo {
    index: idx,
    sb_col_start: (idx * sb_cols) >> tile_cols_log2,
    sb_col_end: ((idx + 1) * sb_cols) >> tile_cols_log2,
  }).collect()
}

// Transform size per plane and transform type per transform block. This is
// decided outside the coefficient coder (by mode decision on the encoder
// side, and by mode info on the decoder side), so both ends receive it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxPlan {
  pub ref_type: RefType,
  tx_sizes: [TxSize; MAX_PLANES],
  // Raster order over each plane's grid of transform blocks
  tx_types: [Vec<TxType>; MAX_PLANES],
  grid_cols: [usize; MAX_PLANES],
}

impl TxPlan {
  pub fn uniform(layout: &FrameLayout, luma_tx_size: TxSize, chroma_tx_size: TxSize, ref_type: RefType) -> Self {
    let tx_sizes = [luma_tx_size, chroma_tx_size, chroma_tx_size];
    let grid = |plane: usize| {
      let (rows4, cols4) = layout.plane_size_4x4(plane);
      let step = tx_sizes[plane].width_4x4();
      (rows4.div_ceil(step), cols4.div_ceil(step))
    };
    Self {
      ref_type: ref_type,
      tx_sizes: tx_sizes,
      tx_types: std::array::from_fn(|plane| {
        let (rows, cols) = grid(plane);
        vec![TxType::DCT_DCT; rows * cols]
      }),
      grid_cols: std::array::from_fn(|plane| grid(plane).1),
    }
  }

  pub fn tx_size(&self, plane: usize) -> TxSize {
    self.tx_sizes[plane]
  }

  pub fn max_tx_size(&self) -> TxSize {
    self.tx_sizes.iter().copied().max().unwrap_or(TxSize::TX_4X4)
  }

  // Position in units of this plane's transform blocks
  pub fn tx_type(&self, plane: usize, row: usize, col: usize) -> TxType {
    self.tx_types[plane][row * self.grid_cols[plane] + col]
  }

  pub fn set_tx_type(&mut self, plane: usize, row: usize, col: usize, tx_type: TxType) {
    assert!(tx_type.is_valid_for(self.tx_sizes[plane]));
    let cols = self.grid_cols[plane];
    self.tx_types[plane][row * cols + col] = tx_type;
  }

  pub fn block(&self, plane: usize, row: usize, col: usize) -> TxBlock {
    TxBlock::new(self.tx_sizes[plane], self.tx_type(plane, row, col), PlaneType::from_plane(plane), self.ref_type)
  }

  // Every transform block must lie inside one superblock
  pub fn validate(&self, layout: &FrameLayout) -> Result<()> {
    for plane in 0..MAX_PLANES {
      let (ssx, ssy) = layout.subsampling(plane);
      let sb_size = 64 >> std::cmp::max(ssx, ssy);
      if self.tx_sizes[plane].width() > sb_size {
        return Err(CodecError::invalid_config(format!(
          "{:?} does not fit the {}x{} superblock of plane {}",
          self.tx_sizes[plane], sb_size, sb_size, plane
        )));
      }
      let (_, cols4) = layout.plane_size_4x4(plane);
      if self.grid_cols[plane] != cols4 / self.tx_sizes[plane].width_4x4() {
        return Err(CodecError::invalid_config(format!("transform plan does not match plane {}", plane)));
      }
    }
    Ok(())
  }
}

// Nonzero flags of the blocks above and to the left, in 4x4 units
struct EntropyContexts {
  // Indexed by 4x4 column relative to the tile start
  above: [Vec<u8>; MAX_PLANES],
  // Indexed by 4x4 row within the current superblock row
  left: [Vec<u8>; MAX_PLANES],
}

impl EntropyContexts {
  fn new(layout: &FrameLayout, tile: &TileInfo) -> Self {
    Self {
      above: std::array::from_fn(|plane| {
        let (ssx, _) = layout.subsampling(plane);
        vec![0; ((tile.sb_col_end - tile.sb_col_start) * 16) >> ssx]
      }),
      left: std::array::from_fn(|plane| {
        let (_, ssy) = layout.subsampling(plane);
        vec![0; 16 >> ssy]
      }),
    }
  }

  fn reset_left(&mut self) {
    for left in self.left.iter_mut() {
      left.fill(0);
    }
  }

  // 0, 1 or 2 depending on how many neighbours have coefficients
  fn context(&self, plane: usize, row4: usize, col4: usize, w4: usize) -> usize {
    let above = self.above[plane][col4 .. col4 + w4].iter().any(|&a| a != 0);
    let left = self.left[plane][row4 .. row4 + w4].iter().any(|&l| l != 0);
    above as usize + left as usize
  }

  fn set(&mut self, plane: usize, row4: usize, col4: usize, w4: usize, has_coeffs: bool) {
    self.above[plane][col4 .. col4 + w4].fill(has_coeffs as u8);
    self.left[plane][row4 .. row4 + w4].fill(has_coeffs as u8);
  }
}

// Where a transform block sits. Pixel positions are relative to the tile's
// first column
#[derive(Clone, Copy, Debug)]
struct BlockPos {
  plane: usize,
  y0: usize,
  x0: usize,
  block: TxBlock,
}

// Visit every transform block of the tile in coding order. `f` receives the
// block and its initial context and returns whether the block had any
// nonzero coefficients
fn walk_tile<F: FnMut(&BlockPos, usize) -> Result<bool>>(layout: &FrameLayout, plan: &TxPlan, tile: &TileInfo, mut f: F) -> Result<()> {
  let mut contexts = EntropyContexts::new(layout, tile);

  for sb_row in 0..layout.sb_rows() {
    contexts.reset_left();
    for sb_col in tile.sb_col_start..tile.sb_col_end {
      for plane in 0..MAX_PLANES {
        let (ssx, ssy) = layout.subsampling(plane);
        let sb_w4 = 16 >> ssx;
        let sb_h4 = 16 >> ssy;
        let step = plan.tx_size(plane).width_4x4();

        for r in (0..sb_h4).step_by(step) {
          for c in (0..sb_w4).step_by(step) {
            let row4 = sb_row * sb_h4 + r;
            let col4 = sb_col * sb_w4 + c;
            let local_col4 = col4 - tile.sb_col_start * sb_w4;
            let pos = BlockPos {
              plane: plane,
              y0: row4 * 4,
              x0: local_col4 * 4,
              block: plan.block(plane, row4 / step, col4 / step),
            };
            let ctx = contexts.context(plane, r, local_col4, step);
            let has_coeffs = f(&pos, ctx)?;
            contexts.set(plane, r, local_col4, step, has_coeffs);
          }
        }
      }
    }
  }
  Ok(())
}

// Copy the tile's columns out of full-frame planes
pub fn crop_tile(planes: &Planes, layout: &FrameLayout, tile: &TileInfo) -> Planes {
  std::array::from_fn(|plane| {
    let (start, end) = tile.plane_cols(layout, plane);
    let src = &planes[plane];
    Array2D::new_with(src.rows(), end - start, |i, j| src[i][start + j])
  })
}

// Copy tile-local planes back into full-frame planes
pub fn paste_tile(dst: &mut Planes, tile_planes: &Planes, layout: &FrameLayout, tile: &TileInfo) {
  for plane in 0..MAX_PLANES {
    let (start, end) = tile.plane_cols(layout, plane);
    for i in 0..dst[plane].rows() {
      dst[plane][i][start .. end].copy_from_slice(&tile_planes[plane][i]);
    }
  }
}

struct CodedBlock {
  block: TxBlock,
  ctx: usize,
  qb: QuantizedBlock,
}

// Result of the first encoder pass over a tile: quantized blocks in coding
// order, the token counts and the reconstruction
pub struct TileTokens {
  pub tile: TileInfo,
  pub counts: Box<CoefCounts>,
  pub recon: Planes,
  // Estimated size of the tile with the probabilities used for counting
  pub estimated_bits: u64,
  blocks: Vec<CodedBlock>,
}

impl TileTokens {
  pub fn num_blocks(&self) -> usize {
    self.blocks.len()
  }

  pub fn num_nonzero_blocks(&self) -> usize {
    self.blocks.iter().filter(|b| b.qb.eob > 0).count()
  }
}

pub struct TileEncoder<'a> {
  layout: &'a FrameLayout,
  plan: &'a TxPlan,
  quant: QuantParams,
  tile: TileInfo,
}

impl<'a> TileEncoder<'a> {
  pub fn new(layout: &'a FrameLayout, plan: &'a TxPlan, quant: QuantParams, tile: TileInfo) -> Self {
    Self {
      layout: layout,
      plan: plan,
      quant: quant,
      tile: tile
    }
  }

  // Transform, quantize and reconstruct every block, counting tokens
  pub fn tokenize(&self, source: &Planes, pred: &Planes, probs: &CoefProbs) -> Result<TileTokens> {
    let source = crop_tile(source, self.layout, &self.tile);
    let mut recon = crop_tile(pred, self.layout, &self.tile);
    let mut counts = CoefCounts::new();
    let mut counter = BitCounter::new();
    let mut blocks = Vec::new();

    walk_tile(self.layout, self.plan, &self.tile, |pos, ctx| {
      let qb = encode_block(&mut counter, &source[pos.plane], &mut recon[pos.plane], pos.y0, pos.x0,
                            &pos.block, ctx, probs, &self.quant, &mut counts);
      let has_coeffs = qb.eob > 0;
      blocks.push(CodedBlock {
        block: pos.block,
        ctx: ctx,
        qb: qb
      });
      Ok(has_coeffs)
    })?;

    trace!(tile = self.tile.index, blocks = blocks.len(), bits = counter.bits(), "Tokenized tile");
    Ok(TileTokens {
      tile: self.tile,
      counts: counts,
      recon: recon,
      estimated_bits: counter.bits(),
      blocks: blocks
    })
  }
}

// Write the tokens of a tokenized tile with the final frame probabilities
pub fn pack_tile(tokens: &TileTokens, probs: &CoefProbs, bit_depth: u32) -> Box<[u8]> {
  let mut w = BoolWriter::new();
  let mut counts = CoefCounts::new();
  for coded in &tokens.blocks {
    encode_coefs(&mut w, &coded.qb.levels, coded.qb.eob, &coded.block, coded.ctx, probs, &mut counts, bit_depth);
  }
  debug_assert!(counts == tokens.counts);
  let data = w.finalize();
  trace!(tile = tokens.tile.index, bytes = data.len(), "Packed tile");
  data
}

pub struct TileOutput {
  pub tile: TileInfo,
  pub counts: Box<CoefCounts>,
  pub recon: Planes,
}

pub struct TileDecoder<'a> {
  layout: &'a FrameLayout,
  plan: &'a TxPlan,
  quant: QuantParams,
  tile: TileInfo,
}

impl<'a> TileDecoder<'a> {
  pub fn new(layout: &'a FrameLayout, plan: &'a TxPlan, quant: QuantParams, tile: TileInfo) -> Self {
    Self {
      layout: layout,
      plan: plan,
      quant: quant,
      tile: tile
    }
  }

  pub fn decode(&self, data: &[u8], pred: &Planes, probs: &CoefProbs) -> Result<TileOutput> {
    let mut r = BoolReader::new(data)?;
    let mut recon = crop_tile(pred, self.layout, &self.tile);
    let mut counts = CoefCounts::new();

    walk_tile(self.layout, self.plan, &self.tile, |pos, ctx| {
      let eob = decode_block(&mut r, &mut recon[pos.plane], pos.y0, pos.x0, &pos.block, ctx, probs,
                             &self.quant, &mut counts)?;
      Ok(eob > 0)
    })?;
    r.check_error("tile data")?;

    Ok(TileOutput {
      tile: self.tile,
      counts: counts,
      recon: recon
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn planes(layout: &FrameLayout, f: impl Fn(usize, usize, usize) -> u16) -> Planes {
    std::array::from_fn(|plane| {
      let (rows, cols) = layout.plane_dims(plane);
      Array2D::new_with(rows, cols, |i, j| f(plane, i, j))
    })
  }

  #[test]
  fn tile_offsets_split_on_superblocks() {
    let tiles = get_tile_offsets(30, 2);
    let bounds: Vec<(usize, usize)> = tiles.iter().map(|t| (t.sb_col_start, t.sb_col_end)).collect();
    assert_eq!(bounds, [(0, 7), (7, 15), (15, 22), (22, 30)]);
    assert_eq!(get_tile_offsets(5, 0)[0].sb_col_end, 5);

    let layout = FrameLayout::new(1920, 1080);
    assert_eq!(tiles[1].plane_cols(&layout, 0), (448, 960));
    assert_eq!(tiles[1].plane_cols(&layout, 2), (224, 480));
  }

  #[test]
  fn contexts_count_coded_neighbours() {
    let layout = FrameLayout::new(64, 64);
    let tile = get_tile_offsets(1, 0)[0];
    let mut ctxs = EntropyContexts::new(&layout, &tile);
    assert_eq!(ctxs.context(0, 0, 0, 2), 0);
    ctxs.set(0, 0, 0, 2, true);
    // The block below sees it above, the block to the right sees it on the left
    assert_eq!(ctxs.context(0, 2, 0, 2), 1);
    assert_eq!(ctxs.context(0, 0, 2, 2), 1);
    assert_eq!(ctxs.context(0, 0, 0, 1), 2);
    ctxs.reset_left();
    assert_eq!(ctxs.context(0, 0, 0, 1), 1);
    // Chroma contexts are separate
    assert_eq!(ctxs.context(1, 0, 0, 1), 0);
  }

  #[test]
  fn plan_validation() {
    let layout = FrameLayout::new(128, 64);
    let plan = TxPlan::uniform(&layout, TxSize::TX_32X32, TxSize::TX_32X32, RefType::INTRA);
    assert!(plan.validate(&layout).is_ok());
    assert_eq!(plan.max_tx_size(), TxSize::TX_32X32);

    let mut plan = TxPlan::uniform(&layout, TxSize::TX_8X8, TxSize::TX_4X4, RefType::INTER);
    plan.set_tx_type(0, 1, 3, TxType::ADST_ADST);
    assert_eq!(plan.block(0, 1, 3).tx_type, TxType::ADST_ADST);
    assert_eq!(plan.block(1, 1, 3).plane_type, PlaneType::UV);
    assert!(plan.validate(&FrameLayout::new(256, 64)).is_err());
  }

  #[test]
  fn tiles_decode_what_they_encode() {
    let layout = FrameLayout::new(256, 64);
    let mut plan = TxPlan::uniform(&layout, TxSize::TX_8X8, TxSize::TX_4X4, RefType::INTRA);
    plan.set_tx_type(0, 2, 5, TxType::ADST_DCT);
    let source = planes(&layout, |p, i, j| (60 + p * 30 + (i * 7 + j * 3) % 50) as u16);
    let pred = planes(&layout, |_, _, _| 90);
    let quant = QuantParams::new(60, Default::default(), 8);
    let probs = CoefProbs::defaults();

    let mut running = CoefCounts::new();
    let mut per_tile = Vec::new();
    for tile in get_tile_offsets(layout.sb_cols(), 1) {
      let tokens = TileEncoder::new(&layout, &plan, quant, tile).tokenize(&source, &pred, &probs).unwrap();
      running.add(&tokens.counts);
      assert!(tokens.num_nonzero_blocks() > 0);
      // Two 64x64 superblocks: 64 luma blocks and 2 x 64 chroma blocks each
      assert_eq!(tokens.num_blocks(), 2 * (64 + 128));
      let data = pack_tile(&tokens, &probs, 8);

      let out = TileDecoder::new(&layout, &plan, quant, tile).decode(&data, &pred, &probs).unwrap();
      assert_eq!(out.recon, tokens.recon);
      assert_eq!(out.counts, tokens.counts);
      per_tile.push(out.counts);
    }
    assert_eq!(CoefCounts::sum(per_tile.iter().map(|c| &**c)), running);
  }
}
