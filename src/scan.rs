// Coefficient scan orders and their context neighbours
//
// The orders themselves are fixed tables in consts.rs. 32x32 blocks are
// always DCT_DCT and only have the default order.

use std::sync::OnceLock;

use crate::consts::*;
use crate::enums::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanKind {
  Default = 0,
  Row = 1,
  Col = 2
}

#[derive(Debug)]
pub struct ScanOrder {
  tx_size: TxSize,
  kind: ScanKind,
  // Scan index -> raster position
  pub scan: &'static [u16],
  // Raster position -> scan index
  pub iscan: Box<[u16]>,
  // Two raster positions per scan index, both coded before that index
  pub neighbors: Box<[u16]>,
}

impl ScanOrder {
  pub fn tx_size(&self) -> TxSize {
    self.tx_size
  }

  pub fn kind(&self) -> ScanKind {
    self.kind
  }

  pub fn len(&self) -> usize {
    self.scan.len()
  }

  // Context for the coefficient at scan index `c`, from the magnitude
  // classes already recorded in `token_cache` (indexed by raster position)
  pub fn coef_context(&self, token_cache: &[u8], c: usize) -> usize {
    let n0 = self.neighbors[2 * c] as usize;
    let n1 = self.neighbors[2 * c + 1] as usize;
    ((1 + token_cache[n0] as usize + token_cache[n1] as usize) >> 1) as usize
  }

  // Band of each scan index
  pub fn bands(&self) -> &'static [u8] {
    band_translate(self.tx_size)
  }
}

pub fn band_translate(tx_size: TxSize) -> &'static [u8] {
  if tx_size == TxSize::TX_4X4 {
    &coefband_4x4
  } else {
    &coefband_8x8plus[..tx_size.area()]
  }
}

fn scan_table(tx_size: TxSize, kind: ScanKind) -> &'static [u16] {
  match (tx_size, kind) {
    (TxSize::TX_4X4, ScanKind::Default) => &default_scan_4x4,
    (TxSize::TX_4X4, ScanKind::Row) => &row_scan_4x4,
    (TxSize::TX_4X4, ScanKind::Col) => &col_scan_4x4,
    (TxSize::TX_8X8, ScanKind::Default) => &default_scan_8x8,
    (TxSize::TX_8X8, ScanKind::Row) => &row_scan_8x8,
    (TxSize::TX_8X8, ScanKind::Col) => &col_scan_8x8,
    (TxSize::TX_16X16, ScanKind::Default) => &default_scan_16x16,
    (TxSize::TX_16X16, ScanKind::Row) => &row_scan_16x16,
    (TxSize::TX_16X16, ScanKind::Col) => &col_scan_16x16,
    (TxSize::TX_32X32, _) => &default_scan_32x32,
  }
}

fn build_scan_order(tx_size: TxSize, kind: ScanKind) -> ScanOrder {
  let w = tx_size.width();
  let n = tx_size.area();
  let kind = if tx_size == TxSize::TX_32X32 { ScanKind::Default } else { kind };
  let scan = scan_table(tx_size, kind);
  assert!(scan.len() == n);

  let mut iscan = vec![0u16; n].into_boxed_slice();
  for (i, &pos) in scan.iter().enumerate() {
    iscan[pos as usize] = i as u16;
  }

  let mut neighbors = vec![0u16; 2 * n].into_boxed_slice();
  for i in 1..n {
    let pos = scan[i] as usize;
    let (row, col) = (pos / w, pos % w);
    let above = pos.wrapping_sub(w);
    let left = pos.wrapping_sub(1);
    let (a, b) = if row > 0 && col > 0 {
      match kind {
        ScanKind::Default => (above, left),
        ScanKind::Col => (above, above),
        ScanKind::Row => (left, left),
      }
    } else if row > 0 {
      (above, above)
    } else {
      (left, left)
    };
    neighbors[2 * i] = a as u16;
    neighbors[2 * i + 1] = b as u16;
  }

  ScanOrder {
    tx_size: tx_size,
    kind: kind,
    scan: scan,
    iscan: iscan,
    neighbors: neighbors
  }
}

static SCAN_ORDERS: OnceLock<Vec<ScanOrder>> = OnceLock::new();

fn scan_orders() -> &'static [ScanOrder] {
  SCAN_ORDERS.get_or_init(|| {
    let mut orders = Vec::with_capacity(TX_SIZES * 3);
    for tx_size in TxSize::ALL {
      for kind in [ScanKind::Default, ScanKind::Row, ScanKind::Col] {
        orders.push(build_scan_order(tx_size, kind));
      }
    }
    orders
  })
}

pub fn scan_kind(tx_type: TxType, ref_type: RefType) -> ScanKind {
  if ref_type == RefType::INTER {
    return ScanKind::Default;
  }
  match tx_type {
    TxType::DCT_DCT | TxType::ADST_ADST => ScanKind::Default,
    TxType::ADST_DCT => ScanKind::Row,
    TxType::DCT_ADST => ScanKind::Col,
  }
}

pub fn get_scan_by_kind(tx_size: TxSize, kind: ScanKind) -> &'static ScanOrder {
  &scan_orders()[tx_size.index() * 3 + kind as usize]
}

pub fn get_scan(tx_size: TxSize, tx_type: TxType, ref_type: RefType) -> &'static ScanOrder {
  get_scan_by_kind(tx_size, scan_kind(tx_type, ref_type))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn all_orders() -> impl Iterator<Item = &'static ScanOrder> {
    TxSize::ALL.into_iter().flat_map(|tx_size| {
      [ScanKind::Default, ScanKind::Row, ScanKind::Col].into_iter()
        .map(move |kind| get_scan_by_kind(tx_size, kind))
    })
  }

  #[test]
  fn scan_and_iscan_are_inverse_permutations() {
    for order in all_orders() {
      let n = order.tx_size().area();
      assert_eq!(order.len(), n);
      let mut seen = vec![false; n];
      for i in 0..n {
        let pos = order.scan[i] as usize;
        assert!(!seen[pos]);
        seen[pos] = true;
        assert_eq!(order.iscan[pos] as usize, i);
      }
    }
  }

  #[test]
  fn orders_match_the_vp9_tables() {
    let order = get_scan_by_kind(TxSize::TX_4X4, ScanKind::Default);
    assert_eq!(order.scan, &[0, 4, 1, 5, 8, 2, 12, 9, 3, 6, 13, 10, 7, 14, 11, 15]);
    let order = get_scan_by_kind(TxSize::TX_4X4, ScanKind::Row);
    assert_eq!(order.scan, &[0, 1, 4, 2, 5, 3, 6, 8, 9, 7, 12, 10, 13, 11, 14, 15]);
    let order = get_scan_by_kind(TxSize::TX_4X4, ScanKind::Col);
    assert_eq!(order.scan, &[0, 4, 8, 1, 12, 5, 9, 2, 13, 6, 10, 3, 7, 14, 11, 15]);

    let order = get_scan_by_kind(TxSize::TX_8X8, ScanKind::Default);
    assert_eq!(&order.scan[..8], &[0, 8, 1, 16, 9, 2, 17, 24]);
    let order = get_scan_by_kind(TxSize::TX_16X16, ScanKind::Col);
    assert_eq!(&order.scan[..8], &[0, 16, 32, 48, 1, 64, 17, 80]);
    let order = get_scan_by_kind(TxSize::TX_32X32, ScanKind::Default);
    assert_eq!(&order.scan[..8], &[0, 32, 1, 64, 33, 2, 96, 65]);
    assert_eq!(order.scan[1023], 1023);
  }

  #[test]
  fn large_blocks_only_scan_one_way() {
    for kind in [ScanKind::Row, ScanKind::Col] {
      let order = get_scan_by_kind(TxSize::TX_32X32, kind);
      assert_eq!(order.kind(), ScanKind::Default);
      assert_eq!(order.scan, get_scan_by_kind(TxSize::TX_32X32, ScanKind::Default).scan);
    }
  }

  #[test]
  fn neighbors_are_causal() {
    for order in all_orders() {
      assert_eq!(order.neighbors.len(), 2 * order.len());
      assert_eq!((order.neighbors[0], order.neighbors[1]), (0, 0));
      for i in 1..order.len() {
        for k in 0..2 {
          let nb = order.neighbors[2 * i + k] as usize;
          assert!((order.iscan[nb] as usize) < i, "{:?} {:?} index {}", order.tx_size(), order.kind(), i);
        }
      }
    }
  }

  #[test]
  fn contexts_stay_in_range() {
    let order = get_scan_by_kind(TxSize::TX_8X8, ScanKind::Default);
    let token_cache = [5u8; 64];
    for c in 1..64 {
      assert!(order.coef_context(&token_cache, c) < COEFF_CONTEXTS);
    }
  }

  #[test]
  fn tx_type_selects_scan() {
    assert_eq!(scan_kind(TxType::ADST_DCT, RefType::INTRA), ScanKind::Row);
    assert_eq!(scan_kind(TxType::DCT_ADST, RefType::INTRA), ScanKind::Col);
    assert_eq!(scan_kind(TxType::DCT_ADST, RefType::INTER), ScanKind::Default);
    assert_eq!(get_scan(TxSize::TX_16X16, TxType::ADST_ADST, RefType::INTRA).kind(), ScanKind::Default);
  }

  #[test]
  fn band_zero_is_dc_only() {
    for tx_size in TxSize::ALL {
      let bands = band_translate(tx_size);
      assert_eq!(bands.len(), tx_size.area());
      assert_eq!(bands[0], 0);
      assert!(bands[1..].iter().all(|&b| b != 0 && (b as usize) < COEF_BANDS));
    }
  }
}
