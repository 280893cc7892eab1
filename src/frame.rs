// Frame-level coefficient coding
//
// Encoded frame layout:
//   [size][header partition] [size][tile 0] ... [size][tile n-2] [tile n-1]
// where each size is a 4-byte big-endian byte count. The header partition
// carries the forward probability updates; each tile is a separate bool
// coded partition.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::adapt::adapt_coef_probs;
use crate::array2d::Array2D;
use crate::config::{FrameLayout, FrameParams};
use crate::counts::CoefCounts;
use crate::entropycode::{BoolReader, BoolWriter};
use crate::error::{CodecError, Result};
use crate::frame_context::FrameContexts;
use crate::quant::QuantCache;
use crate::subexp::{read_coef_updates, write_coef_updates, write_no_updates};
use crate::tile::*;
use crate::util::{TILE_SIZE_BYTES, get_tile_size, put_tile_size};

// Planes sized for `layout`, padded to whole superblocks
pub fn alloc_planes(layout: &FrameLayout, value: u16) -> Planes {
  std::array::from_fn(|plane| {
    let (rows, cols) = layout.plane_dims(plane);
    Array2D::new_with(rows, cols, |_, _| value)
  })
}

fn check_planes(layout: &FrameLayout, planes: &Planes, what: &str) -> Result<()> {
  for (plane, pixels) in planes.iter().enumerate() {
    let (rows, cols) = layout.plane_dims(plane);
    if pixels.rows() != rows || pixels.cols() != cols {
      return Err(CodecError::invalid_config(format!(
        "{} plane {} is {}x{}, expected {}x{}", what, plane, pixels.cols(), pixels.rows(), cols, rows
      )));
    }
  }
  Ok(())
}

// Split a frame into its header partition and tile partitions
pub fn split_partitions(data: &[u8], num_tiles: usize) -> Result<(&[u8], Vec<&[u8]>)> {
  let num_partitions = num_tiles + 1;
  let mut partitions = Vec::with_capacity(num_partitions);
  let mut rest = data;

  for idx in 0..num_partitions {
    if idx == num_partitions - 1 {
      partitions.push(rest);
      break;
    }
    let size = get_tile_size(rest).ok_or(CodecError::UnexpectedEndOfData("partition size"))?;
    rest = &rest[TILE_SIZE_BYTES..];
    if size > rest.len() {
      return Err(CodecError::InvalidTileSize { tile: idx, size: size, remaining: rest.len() });
    }
    let (partition, remainder) = rest.split_at(size);
    partitions.push(partition);
    rest = remainder;
  }

  let tiles = partitions.split_off(1);
  Ok((partitions[0], tiles))
}

#[derive(Debug)]
pub struct EncodedFrame {
  pub data: Box<[u8]>,
  pub recon: Planes,
  // Token counts of the frame, summed over tiles
  pub counts: Box<CoefCounts>,
  // Number of probabilities changed by forward updates
  pub updates: usize,
}

pub struct FrameEncoder {
  contexts: FrameContexts,
  quant_cache: QuantCache,
}

impl FrameEncoder {
  pub fn new() -> Self {
    Self {
      contexts: FrameContexts::new(),
      quant_cache: QuantCache::new()
    }
  }

  pub fn contexts(&self) -> &FrameContexts {
    &self.contexts
  }

  pub fn encode_frame(&mut self, params: &FrameParams, layout: &FrameLayout, plan: &TxPlan,
                      source: &Planes, pred: &Planes) -> Result<EncodedFrame> {
    params.validate(layout)?;
    plan.validate(layout)?;
    check_planes(layout, source, "source")?;
    check_planes(layout, pred, "prediction")?;

    self.contexts.begin_frame(params);
    let quant = self.quant_cache.get(params.base_qindex, params.delta_q, params.bit_depth);
    let tiles = get_tile_offsets(layout.sb_cols(), params.tile_cols_log2);

    // First pass: quantize and count with the probabilities the frame starts from
    let fc = &self.contexts.fc;
    let tokens = tiles.par_iter()
      .map(|tile| TileEncoder::new(layout, plan, quant, *tile).tokenize(source, pred, fc))
      .collect::<Result<Vec<TileTokens>>>()?;
    let counts = CoefCounts::sum(tokens.iter().map(|t| &*t.counts));

    let mut header = BoolWriter::new();
    let updates = if params.update_probs {
      write_coef_updates(&mut header, &mut self.contexts.fc, &counts, plan.max_tx_size())
    } else {
      write_no_updates(&mut header, plan.max_tx_size());
      0
    };
    let header = header.finalize();

    // Second pass: write the tokens with the updated probabilities
    let fc = &self.contexts.fc;
    let tile_data: Vec<Box<[u8]>> = tokens.par_iter()
      .map(|t| pack_tile(t, fc, params.bit_depth))
      .collect();

    let mut data = Vec::new();
    put_tile_size(&mut data, header.len());
    data.extend_from_slice(&header);
    for (idx, tile) in tile_data.iter().enumerate() {
      if idx + 1 < tile_data.len() {
        put_tile_size(&mut data, tile.len());
      }
      data.extend_from_slice(tile);
    }

    let mut recon = pred.clone();
    for t in &tokens {
      paste_tile(&mut recon, &t.recon, layout, &t.tile);
    }

    if params.adapts_probs() {
      let pre_fc = self.contexts.pre_probs().clone();
      adapt_coef_probs(&mut self.contexts.fc, &pre_fc, &counts, params.is_intra_only(), params.last_frame_was_key);
    }
    self.contexts.end_frame(params);

    debug!(tiles = tiles.len(), bytes = data.len(), header_bytes = header.len(), updates, "Encoded frame");
    Ok(EncodedFrame {
      data: data.into_boxed_slice(),
      recon: recon,
      counts: counts,
      updates: updates
    })
  }
}

impl Default for FrameEncoder {
  fn default() -> Self {
    Self::new()
  }
}

#[derive(Debug)]
pub struct DecodedFrame {
  pub recon: Planes,
  pub counts: Box<CoefCounts>,
}

pub struct FrameDecoder {
  contexts: FrameContexts,
  quant_cache: QuantCache,
  corrupted: bool,
}

impl FrameDecoder {
  pub fn new() -> Self {
    Self {
      contexts: FrameContexts::new(),
      quant_cache: QuantCache::new(),
      corrupted: false
    }
  }

  pub fn contexts(&self) -> &FrameContexts {
    &self.contexts
  }

  // Whether the most recent frame failed to decode
  pub fn is_corrupted(&self) -> bool {
    self.corrupted
  }

  pub fn decode_frame(&mut self, params: &FrameParams, layout: &FrameLayout, plan: &TxPlan,
                      data: &[u8], pred: &Planes) -> Result<DecodedFrame> {
    params.validate(layout)?;
    plan.validate(layout)?;
    check_planes(layout, pred, "prediction")?;

    match self.decode_partitions(params, layout, plan, data, pred) {
      Ok((recon, counts)) => {
        self.corrupted = false;
        if params.adapts_probs() {
          let pre_fc = self.contexts.pre_probs().clone();
          adapt_coef_probs(&mut self.contexts.fc, &pre_fc, &counts, params.is_intra_only(), params.last_frame_was_key);
        }
        self.contexts.end_frame(params);
        Ok(DecodedFrame {
          recon: recon,
          counts: counts
        })
      }
      Err(err) => {
        // The saved contexts are left as they were; the next frame reloads
        // its model from them
        warn!(%err, "Frame decode failed");
        self.corrupted = true;
        Err(err)
      }
    }
  }

  fn decode_partitions(&mut self, params: &FrameParams, layout: &FrameLayout, plan: &TxPlan,
                       data: &[u8], pred: &Planes) -> Result<(Planes, Box<CoefCounts>)> {
    self.contexts.begin_frame(params);
    let quant = self.quant_cache.get(params.base_qindex, params.delta_q, params.bit_depth);
    let tiles = get_tile_offsets(layout.sb_cols(), params.tile_cols_log2);
    let (header, tile_data) = split_partitions(data, tiles.len())?;

    let mut r = BoolReader::new(header)?;
    let updates = read_coef_updates(&mut r, &mut self.contexts.fc, plan.max_tx_size())?;

    let fc = &self.contexts.fc;
    let outputs: Vec<Result<TileOutput>> = tiles.par_iter().zip(tile_data.par_iter())
      .map(|(tile, data)| TileDecoder::new(layout, plan, quant, *tile).decode(data, pred, fc))
      .collect();

    let mut recon = pred.clone();
    let mut counts = CoefCounts::new();
    for (idx, output) in outputs.into_iter().enumerate() {
      match output {
        Ok(out) => {
          paste_tile(&mut recon, &out.recon, layout, &out.tile);
          counts.add(&out.counts);
        }
        Err(err) => {
          return Err(CodecError::CorruptedFrame(format!("tile {}: {}", idx, err)));
        }
      }
    }

    debug!(tiles = tiles.len(), bytes = data.len(), updates, "Decoded frame");
    Ok((recon, counts))
  }
}

impl Default for FrameDecoder {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn frame_bytes(partitions: &[&[u8]]) -> Vec<u8> {
    let mut data = Vec::new();
    for (idx, partition) in partitions.iter().enumerate() {
      if idx + 1 < partitions.len() {
        put_tile_size(&mut data, partition.len());
      }
      data.extend_from_slice(partition);
    }
    data
  }

  #[test]
  fn partitions_split_on_size_prefixes() {
    let data = frame_bytes(&[&[1, 2], &[3, 4, 5], &[], &[6]]);
    let (header, tiles) = split_partitions(&data, 3).unwrap();
    assert_eq!(header, &[1, 2]);
    assert_eq!(tiles, [&[3u8, 4, 5][..], &[][..], &[6][..]]);

    // A single tile carries no size of its own
    let data = frame_bytes(&[&[9], &[7, 7]]);
    assert_eq!(data.len(), TILE_SIZE_BYTES + 3);
    let (header, tiles) = split_partitions(&data, 1).unwrap();
    assert_eq!(header, &[9]);
    assert_eq!(tiles, [&[7u8, 7][..]]);
  }

  #[test]
  fn bad_sizes_are_rejected() {
    let data = frame_bytes(&[&[1, 2], &[3, 4, 5], &[6]]);
    assert_eq!(split_partitions(&data[..3], 2), Err(CodecError::UnexpectedEndOfData("partition size")));
    assert_eq!(
      split_partitions(&data[..TILE_SIZE_BYTES + 2 + TILE_SIZE_BYTES + 1], 2),
      Err(CodecError::InvalidTileSize { tile: 1, size: 3, remaining: 1 })
    );
  }

  #[test]
  fn planes_must_match_the_layout() {
    let layout = FrameLayout::new(100, 60);
    let planes = alloc_planes(&layout, 128);
    assert_eq!((planes[0].rows(), planes[0].cols()), (64, 128));
    assert_eq!((planes[2].rows(), planes[2].cols()), (32, 64));
    assert!(check_planes(&layout, &planes, "source").is_ok());
    assert!(check_planes(&FrameLayout::new(200, 60), &planes, "source").is_err());
  }
}
