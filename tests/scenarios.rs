// Single-block pipeline checks: transform, quantize, token coding and back

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tinyvpx::consts::{COEFF_CONTEXTS, MODEL_TOKENS};
use tinyvpx::counts::CoefCounts;
use tinyvpx::entropycode::{BoolReader, BoolWriter};
use tinyvpx::probs::band_coeff_contexts;
use tinyvpx::quant::QuantParams;
use tinyvpx::recon::{decode_block, encode_block};
use tinyvpx::scan::band_translate;
use tinyvpx::tokens::{TxBlock, decode_coefs, encode_coefs};
use tinyvpx::enums::*;
use tinyvpx::{Array2D, CoefProbs};

const RESIDUAL: [i32; 16] = [
  2, 0, 0, 0,
  0, 1, 0, 0,
  0, 0, 0, 0,
  0, 0, 0, 0,
];

fn luma_intra_4x4() -> TxBlock {
  TxBlock::new(TxSize::TX_4X4, TxType::DCT_DCT, PlaneType::Y, RefType::INTRA)
}

#[test]
fn unit_steps_reproduce_a_4x4_residual() {
  let pred = Array2D::new_with(4, 4, |_, _| 128u16);
  let source = Array2D::new_with(4, 4, |i, j| (128 + RESIDUAL[i * 4 + j]) as u16);
  let quant = QuantParams::from_steps(1, 1, 8);
  let probs = CoefProbs::defaults();
  let block = luma_intra_4x4();

  let mut w = BoolWriter::new();
  let mut enc_recon = pred.clone();
  let mut enc_counts = CoefCounts::new();
  let qb = encode_block(&mut w, &source, &mut enc_recon, 0, 0, &block, 0, &probs, &quant, &mut enc_counts);
  let data = w.finalize();
  assert!(qb.eob > 0);
  assert_eq!(enc_recon, source);

  let mut dec_recon = pred.clone();
  let mut dec_counts = CoefCounts::new();
  let mut r = BoolReader::new(&data).unwrap();
  let eob = decode_block(&mut r, &mut dec_recon, 0, 0, &block, 0, &probs, &quant, &mut dec_counts).unwrap();
  assert_eq!(eob, qb.eob);
  assert_eq!(dec_recon, source);
  assert_eq!(dec_counts, enc_counts);

  // The decoded levels are exactly the encoded ones, and coding them again
  // gives the same bytes
  let mut r = BoolReader::new(&data).unwrap();
  let mut levels = vec![0i32; 16];
  decode_coefs(&mut r, &mut levels, &block, 0, &probs, &mut CoefCounts::new(), [1, 1], 8).unwrap();
  assert_eq!(&levels[..], &qb.levels[..]);

  let mut w = BoolWriter::new();
  encode_coefs(&mut w, &levels, eob, &block, 0, &probs, &mut CoefCounts::new(), 8);
  assert_eq!(w.finalize(), data);
}

#[test]
fn dc_band_only_uses_three_contexts() {
  assert_eq!(band_coeff_contexts(0), 3);
  for band in 1..6 {
    assert_eq!(band_coeff_contexts(band), COEFF_CONTEXTS);
  }
  for tx_size in TxSize::ALL {
    let bands = band_translate(tx_size);
    assert_eq!(bands[0], 0);
    assert!(bands[1..].iter().all(|&b| b != 0));
  }

  // Busy blocks with every initial context never reach contexts 3..6 in band 0
  let mut rng = StdRng::seed_from_u64(31);
  let probs = CoefProbs::defaults();
  let mut counts = CoefCounts::new();
  let mut w = BoolWriter::new();
  for _ in 0..300 {
    let tx_size = TxSize::from_index(rng.gen_range(0..4));
    let tx_type = if tx_size == TxSize::TX_32X32 { TxType::DCT_DCT } else { TxType::ALL[rng.gen_range(0..4)] };
    let block = TxBlock::new(tx_size, tx_type, PlaneType::from_plane(rng.gen_range(0..3)), RefType::INTRA);
    let n = block.area();
    let levels: Vec<i32> = (0..n).map(|_| rng.gen_range(-40..=40)).collect();
    let scan = block.scan();
    let eob = (0..n).rev().find(|&c| levels[scan.scan[c] as usize] != 0).map_or(0, |c| c + 1);
    encode_coefs(&mut w, &levels, eob, &block, rng.gen_range(0..3), &probs, &mut counts, 8);
  }

  for tx_size in TxSize::ALL {
    for plane_counts in &counts.coef[tx_size as usize] {
      for ref_counts in plane_counts {
        for ctx in 3..COEFF_CONTEXTS {
          assert_eq!(ref_counts[0][ctx], [0; MODEL_TOKENS]);
        }
      }
    }
    for plane_counts in &counts.eob_branch[tx_size as usize] {
      for ref_counts in plane_counts {
        assert!(ref_counts[0][3..].iter().all(|&c| c == 0));
      }
    }
  }
}
