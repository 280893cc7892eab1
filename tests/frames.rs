// Whole-frame coding: tiles, forward updates, context management and
// recovery from damaged data

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tinyvpx::enums::*;
use tinyvpx::util::{TILE_SIZE_BYTES, get_tile_size};
use tinyvpx::{Array2D, CodecError, CoefProbs, FrameDecoder, FrameEncoder, FrameLayout, FrameParams, Planes, TxPlan,
              alloc_planes};

fn textured(layout: &FrameLayout, seed: u64, noise: u16) -> Planes {
  let mut rng = StdRng::seed_from_u64(seed);
  std::array::from_fn(|plane| {
    let (rows, cols) = layout.plane_dims(plane);
    Array2D::new_with(rows, cols, |i, j| {
      let base = 70 + 40 * plane + (i * 5 + j * 3) % 60;
      (base as u16 + rng.gen_range(0..=noise)).min(255)
    })
  })
}

fn intra_plan(layout: &FrameLayout) -> TxPlan {
  let mut plan = TxPlan::uniform(layout, TxSize::TX_8X8, TxSize::TX_4X4, RefType::INTRA);
  plan.set_tx_type(0, 3, 10, TxType::ADST_ADST);
  plan.set_tx_type(0, 5, 40, TxType::DCT_ADST);
  plan
}

#[test]
fn decoder_follows_the_encoder() {
  let layout = FrameLayout::new(512, 64);
  let plan = intra_plan(&layout);
  let source = textured(&layout, 1, 6);
  let pred = alloc_planes(&layout, 128);

  for tile_cols_log2 in [0, 1] {
    let params = FrameParams::key_frame().with_tile_cols_log2(tile_cols_log2);
    let mut encoder = FrameEncoder::new();
    let mut decoder = FrameDecoder::new();
    let encoded = encoder.encode_frame(&params, &layout, &plan, &source, &pred).unwrap();
    let decoded = decoder.decode_frame(&params, &layout, &plan, &encoded.data, &pred).unwrap();

    assert_eq!(decoded.recon, encoded.recon);
    assert_eq!(decoded.counts, encoded.counts);
    assert_eq!(decoder.contexts(), encoder.contexts());
    assert!(!decoder.is_corrupted());
  }
}

#[test]
fn tiling_does_not_change_the_picture() {
  let layout = FrameLayout::new(512, 128);
  let plan = intra_plan(&layout);
  let source = textured(&layout, 2, 10);
  let pred = alloc_planes(&layout, 120);

  let one = FrameEncoder::new()
    .encode_frame(&FrameParams::key_frame(), &layout, &plan, &source, &pred).unwrap();
  let two = FrameEncoder::new()
    .encode_frame(&FrameParams::key_frame().with_tile_cols_log2(1), &layout, &plan, &source, &pred).unwrap();

  assert_eq!(one.recon, two.recon);
  for tx_size in TxSize::ALL {
    assert_eq!(one.counts.total_tokens(tx_size), two.counts.total_tokens(tx_size));
  }
  assert!(one.counts.total_tokens(TxSize::TX_8X8) > 0);
  assert!(one.counts.is_empty(TxSize::TX_32X32));
}

#[test]
fn forward_updates_reach_the_decoder() {
  // Fine quantization of noise codes almost every coefficient, which the
  // default probabilities expect much less often
  let layout = FrameLayout::new(128, 128);
  let plan = TxPlan::uniform(&layout, TxSize::TX_16X16, TxSize::TX_8X8, RefType::INTRA);
  let source = textured(&layout, 3, 120);
  let pred = alloc_planes(&layout, 128);
  let params = FrameParams::key_frame().with_qindex(4).with_refresh(false);

  let mut encoder = FrameEncoder::new();
  let mut decoder = FrameDecoder::new();
  let encoded = encoder.encode_frame(&params, &layout, &plan, &source, &pred).unwrap();
  assert!(encoded.updates > 0);

  let decoded = decoder.decode_frame(&params, &layout, &plan, &encoded.data, &pred).unwrap();
  assert_eq!(decoded.recon, encoded.recon);
  assert_eq!(decoder.contexts().fc, encoder.contexts().fc);
  assert_ne!(decoder.contexts().fc, CoefProbs::defaults());
  // Without refresh the stored contexts keep their defaults
  assert_eq!(*decoder.contexts().saved(0), CoefProbs::defaults());

  let plain = FrameEncoder::new()
    .encode_frame(&params.clone().with_update_probs(false), &layout, &plan, &source, &pred).unwrap();
  assert_eq!(plain.updates, 0);
  assert_eq!(plain.recon, encoded.recon);
}

#[test]
fn contexts_adapt_across_frames() {
  let layout = FrameLayout::new(256, 64);
  let intra = TxPlan::uniform(&layout, TxSize::TX_8X8, TxSize::TX_4X4, RefType::INTRA);
  let inter = TxPlan::uniform(&layout, TxSize::TX_16X16, TxSize::TX_8X8, RefType::INTER);
  let pred = alloc_planes(&layout, 128);

  let frames = [
    (FrameParams::key_frame(), &intra),
    (FrameParams::inter_frame(true), &inter),
    (FrameParams::inter_frame(false).with_frame_context(2), &inter),
    (FrameParams::inter_frame(false).with_frame_context(2).with_update_probs(false), &inter),
    (FrameParams::inter_frame(false).with_error_resilient(true), &intra),
  ];

  let mut encoder = FrameEncoder::new();
  let mut decoder = FrameDecoder::new();
  for (idx, (params, plan)) in frames.iter().enumerate() {
    let source = textured(&layout, 10 + idx as u64, 8);
    let encoded = encoder.encode_frame(params, &layout, plan, &source, &pred).unwrap();
    let decoded = decoder.decode_frame(params, &layout, plan, &encoded.data, &pred).unwrap();
    assert_eq!(decoded.recon, encoded.recon, "frame {}", idx);
    assert_eq!(decoder.contexts(), encoder.contexts(), "frame {}", idx);

    match idx {
      0 => {
        // The key frame adapts and refreshes slot 0 only
        assert_ne!(*decoder.contexts().saved(0), CoefProbs::defaults());
        assert_eq!(*decoder.contexts().saved(1), CoefProbs::defaults());
      }
      2 => {
        assert_ne!(*decoder.contexts().saved(2), CoefProbs::defaults());
      }
      4 => {
        // Error resilient frames reset everything and store nothing
        for slot in 0..4 {
          assert_eq!(*decoder.contexts().saved(slot), CoefProbs::defaults());
        }
      }
      _ => {}
    }
  }
}

#[test]
fn damaged_frames_are_recoverable() {
  let layout = FrameLayout::new(512, 64);
  let plan = intra_plan(&layout);
  let pred = alloc_planes(&layout, 128);
  let key = FrameParams::key_frame().with_tile_cols_log2(1);
  let inter = FrameParams::inter_frame(true).with_tile_cols_log2(1);

  let mut encoder = FrameEncoder::new();
  let mut decoder = FrameDecoder::new();
  let first = encoder.encode_frame(&key, &layout, &plan, &textured(&layout, 20, 6), &pred).unwrap();
  decoder.decode_frame(&key, &layout, &plan, &first.data, &pred).unwrap();
  let before = decoder.contexts().clone();

  let second = encoder.encode_frame(&inter, &layout, &plan, &textured(&layout, 21, 6), &pred).unwrap();

  // Cut the last tile down to a single byte
  let header_len = get_tile_size(&second.data).unwrap();
  let tile0_at = TILE_SIZE_BYTES + header_len;
  let tile1_at = tile0_at + TILE_SIZE_BYTES + get_tile_size(&second.data[tile0_at..]).unwrap();
  let truncated = &second.data[..tile1_at + 1];
  let err = decoder.decode_frame(&inter, &layout, &plan, truncated, &pred).unwrap_err();
  assert!(matches!(err, CodecError::CorruptedFrame(ref msg) if msg.starts_with("tile 1")), "{}", err);
  assert!(err.is_recoverable());
  assert!(decoder.is_corrupted());
  for slot in 0..4 {
    assert_eq!(decoder.contexts().saved(slot), before.saved(slot));
  }

  // A size prefix pointing past the end of the data
  let err = decoder.decode_frame(&inter, &layout, &plan, &second.data[..10], &pred).unwrap_err();
  assert!(matches!(err, CodecError::InvalidTileSize { .. } | CodecError::UnexpectedEndOfData(_)));
  assert!(decoder.is_corrupted());

  // The intact frame still decodes against the untouched contexts
  let decoded = decoder.decode_frame(&inter, &layout, &plan, &second.data, &pred).unwrap();
  assert_eq!(decoded.recon, second.recon);
  assert!(!decoder.is_corrupted());
  assert_eq!(decoder.contexts(), encoder.contexts());
}

#[test]
fn bad_configurations_are_rejected() {
  let layout = FrameLayout::new(256, 64);
  let plan = intra_plan(&FrameLayout::new(512, 64));
  let pred = alloc_planes(&layout, 128);
  let mut encoder = FrameEncoder::new();

  let err = encoder.encode_frame(&FrameParams::key_frame(), &layout, &plan, &pred, &pred).unwrap_err();
  assert!(!err.is_recoverable());

  let plan = TxPlan::uniform(&layout, TxSize::TX_8X8, TxSize::TX_4X4, RefType::INTRA);
  // Two tiles need at least eight superblock columns
  let params = FrameParams::key_frame().with_tile_cols_log2(1);
  assert!(encoder.encode_frame(&params, &layout, &plan, &pred, &pred).is_err());

  let params = FrameParams::key_frame().with_bit_depth(9);
  assert!(encoder.encode_frame(&params, &layout, &plan, &pred, &pred).is_err());

  let small = alloc_planes(&FrameLayout::new(64, 64), 128);
  assert!(encoder.encode_frame(&FrameParams::key_frame(), &layout, &plan, &small, &pred).is_err());
}
