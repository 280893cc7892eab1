// Coefficient pipeline benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tinyvpx::array2d::Array2D;
use tinyvpx::counts::CoefCounts;
use tinyvpx::entropycode::{BoolReader, BoolWriter};
use tinyvpx::enums::*;
use tinyvpx::probs::CoefProbs;
use tinyvpx::tokens::{TxBlock, decode_coefs, encode_coefs};
use tinyvpx::txfm::{fwd_txfm2d, inv_txfm2d};
use tinyvpx::{FrameDecoder, FrameEncoder, FrameLayout, FrameParams, Planes, TxPlan, alloc_planes};

fn noisy_planes(layout: &FrameLayout, seed: u64) -> Planes {
  let mut rng = StdRng::seed_from_u64(seed);
  std::array::from_fn(|plane| {
    let (rows, cols) = layout.plane_dims(plane);
    Array2D::new_with(rows, cols, |i, j| (96 + (i + 2 * j) % 48 + rng.gen_range(0..16)) as u16)
  })
}

fn bench_transforms(c: &mut Criterion) {
  let mut rng = StdRng::seed_from_u64(1);
  for tx_size in TxSize::ALL {
    let n = tx_size.width();
    let residual = Array2D::new_with(n, n, |_, _| rng.gen_range(-255..=255));

    c.bench_function(&format!("fwd_inv_dct_{}x{}", n, n), |b| {
      b.iter(|| {
        let mut coeffs = residual.clone();
        fwd_txfm2d(&mut coeffs, tx_size, TxType::DCT_DCT, 8);
        inv_txfm2d(&mut coeffs, tx_size, TxType::DCT_DCT, 8);
        black_box(coeffs)
      })
    });
  }
}

fn bench_tokens(c: &mut Criterion) {
  let mut rng = StdRng::seed_from_u64(2);
  let probs = CoefProbs::defaults();
  let block = TxBlock::new(TxSize::TX_16X16, TxType::DCT_DCT, PlaneType::Y, RefType::INTRA);
  let scan = block.scan();
  let mut levels = vec![0i32; 256];
  for c in 0..96 {
    levels[scan.scan[c] as usize] = rng.gen_range(-20..=20);
  }
  let eob = (0..256).rev().find(|&c| levels[scan.scan[c] as usize] != 0).map_or(0, |c| c + 1);

  c.bench_function("encode_coefs_16x16", |b| {
    b.iter(|| {
      let mut w = BoolWriter::new();
      let mut counts = CoefCounts::new();
      encode_coefs(&mut w, black_box(&levels), eob, &block, 0, &probs, &mut counts, 8);
      w.finalize()
    })
  });

  let mut w = BoolWriter::new();
  encode_coefs(&mut w, &levels, eob, &block, 0, &probs, &mut CoefCounts::new(), 8);
  let data = w.finalize();

  c.bench_function("decode_coefs_16x16", |b| {
    b.iter(|| {
      let mut r = BoolReader::new(black_box(&data)).unwrap();
      let mut coeffs = vec![0i32; 256];
      let mut counts = CoefCounts::new();
      decode_coefs(&mut r, &mut coeffs, &block, 0, &probs, &mut counts, [1, 1], 8).unwrap()
    })
  });
}

fn bench_frames(c: &mut Criterion) {
  let layout = FrameLayout::new(512, 256);
  let plan = TxPlan::uniform(&layout, TxSize::TX_8X8, TxSize::TX_4X4, RefType::INTRA);
  let source = noisy_planes(&layout, 3);
  let pred = alloc_planes(&layout, 128);

  for tile_cols_log2 in [0, 1] {
    let params = FrameParams::key_frame().with_tile_cols_log2(tile_cols_log2);

    c.bench_function(&format!("encode_frame_512x256_{}_tiles", 1 << tile_cols_log2), |b| {
      b.iter(|| FrameEncoder::new().encode_frame(&params, &layout, &plan, &source, &pred).unwrap())
    });

    let encoded = FrameEncoder::new().encode_frame(&params, &layout, &plan, &source, &pred).unwrap();
    c.bench_function(&format!("decode_frame_512x256_{}_tiles", 1 << tile_cols_log2), |b| {
      b.iter(|| FrameDecoder::new().decode_frame(&params, &layout, &plan, &encoded.data, &pred).unwrap())
    });
  }
}

criterion_group!(benches, bench_transforms, bench_tokens, bench_frames);
criterion_main!(benches);
