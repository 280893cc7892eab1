// Token coding round trips over every transform size and plane type

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tinyvpx::counts::CoefCounts;
use tinyvpx::entropycode::{BoolReader, BoolWriter};
use tinyvpx::tokens::{TxBlock, decode_coefs, encode_coefs, max_level};
use tinyvpx::enums::*;
use tinyvpx::CoefProbs;

// Sparse levels along the scan, with the occasional large magnitude
fn random_levels(seed: u64, block: &TxBlock, density: f64, bit_depth: u32) -> (Vec<i32>, usize) {
  let mut rng = StdRng::seed_from_u64(seed);
  let n = block.area();
  let scan = block.scan();
  let limit = max_level(bit_depth) as i32;
  let mut levels = vec![0i32; n];
  let last = rng.gen_range(0..=n);
  for c in 0..last {
    if rng.gen_bool(density) {
      let mag = match rng.gen_range(0..10) {
        0 => rng.gen_range(67..=limit),
        1..=3 => rng.gen_range(3..67),
        _ => rng.gen_range(1..3),
      };
      levels[scan.scan[c] as usize] = if rng.gen_bool(0.5) { mag } else { -mag };
    }
  }
  let eob = (0..n).rev().find(|&c| levels[scan.scan[c] as usize] != 0).map_or(0, |c| c + 1);
  (levels, eob)
}

fn tx_type_for(tx_size: TxSize, idx: usize) -> TxType {
  if tx_size == TxSize::TX_32X32 { TxType::DCT_DCT } else { TxType::ALL[idx] }
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(96))]

  #[test]
  fn tokens_round_trip(seed in any::<u64>(),
                       size_idx in 0usize..4,
                       type_idx in 0usize..4,
                       uv in any::<bool>(),
                       inter in any::<bool>(),
                       ctx in 0usize..3,
                       density in 0.05f64..0.9,
                       bd_idx in 0usize..3) {
    let tx_size = TxSize::from_index(size_idx);
    let block = TxBlock::new(
      tx_size,
      tx_type_for(tx_size, type_idx),
      if uv { PlaneType::UV } else { PlaneType::Y },
      if inter { RefType::INTER } else { RefType::INTRA },
    );
    let bit_depth = [8, 10, 12][bd_idx];
    let (levels, eob) = random_levels(seed, &block, density, bit_depth);
    let probs = CoefProbs::defaults();

    let mut w = BoolWriter::new();
    let mut enc_counts = CoefCounts::new();
    encode_coefs(&mut w, &levels, eob, &block, ctx, &probs, &mut enc_counts, bit_depth);
    let data = w.finalize();

    // A unit step leaves levels unchanged, 32x32 halves the product
    let dequant = if tx_size == TxSize::TX_32X32 { [2, 2] } else { [1, 1] };
    let mut coeffs = vec![0i32; block.area()];
    let mut dec_counts = CoefCounts::new();
    let mut r = BoolReader::new(&data).unwrap();
    let decoded_eob = decode_coefs(&mut r, &mut coeffs, &block, ctx, &probs, &mut dec_counts, dequant, bit_depth).unwrap();

    prop_assert!(!r.has_error());
    prop_assert_eq!(decoded_eob, eob);
    prop_assert_eq!(coeffs, levels);
    prop_assert_eq!(dec_counts, enc_counts);
  }

  #[test]
  fn blocks_share_one_partition(seed in any::<u64>(), count in 1usize..24) {
    let mut rng = StdRng::seed_from_u64(seed);
    let probs = CoefProbs::defaults();
    let blocks: Vec<(TxBlock, usize, Vec<i32>, usize)> = (0..count).map(|i| {
      let tx_size = TxSize::from_index(rng.gen_range(0..4));
      let block = TxBlock::new(tx_size, tx_type_for(tx_size, rng.gen_range(0..4)),
                               PlaneType::from_plane(i % 3), RefType::INTRA);
      let (levels, eob) = random_levels(rng.gen(), &block, 0.3, 8);
      (block, rng.gen_range(0..3), levels, eob)
    }).collect();

    let mut w = BoolWriter::new();
    let mut counts = CoefCounts::new();
    for (block, ctx, levels, eob) in &blocks {
      encode_coefs(&mut w, levels, *eob, block, *ctx, &probs, &mut counts, 8);
    }
    let data = w.finalize();

    let mut r = BoolReader::new(&data).unwrap();
    let mut dec_counts = CoefCounts::new();
    for (block, ctx, levels, eob) in &blocks {
      let dequant = if block.tx_size == TxSize::TX_32X32 { [2, 2] } else { [1, 1] };
      let mut coeffs = vec![0i32; block.area()];
      let decoded_eob = decode_coefs(&mut r, &mut coeffs, block, *ctx, &probs, &mut dec_counts, dequant, 8).unwrap();
      prop_assert_eq!(decoded_eob, *eob);
      prop_assert_eq!(&coeffs, levels);
    }
    prop_assert_eq!(dec_counts, counts);
  }
}
