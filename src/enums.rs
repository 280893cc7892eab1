// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Square transform sizes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TxSize {
  TX_4X4 = 0,
  TX_8X8 = 1,
  TX_16X16 = 2,
  TX_32X32 = 3
}

impl TxSize {
  pub const ALL: [TxSize; 4] = [TxSize::TX_4X4, TxSize::TX_8X8, TxSize::TX_16X16, TxSize::TX_32X32];

  pub fn from_index(index: usize) -> TxSize {
    assert!(index < 4, "invalid transform size index {}", index);
    TxSize::ALL[index]
  }

  pub fn index(self) -> usize {
    self as usize
  }

  // Side length in pixels
  pub fn width(self) -> usize {
    4 << (self as usize)
  }

  pub fn width_log2(self) -> u32 {
    2 + (self as u32)
  }

  // Side length in units of 4x4 blocks
  pub fn width_4x4(self) -> usize {
    1 << (self as usize)
  }

  pub fn area(self) -> usize {
    self.width() * self.width()
  }
}

// 1D transform kernels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxfmKind {
  DCT,
  ADST
}

// 2D transform types, named as <vertical>_<horizontal>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TxType {
  DCT_DCT = 0,
  ADST_DCT = 1,
  DCT_ADST = 2,
  ADST_ADST = 3
}

impl TxType {
  pub const ALL: [TxType; 4] = [TxType::DCT_DCT, TxType::ADST_DCT, TxType::DCT_ADST, TxType::ADST_ADST];

  // Transform applied down each column
  pub fn col_kind(self) -> TxfmKind {
    match self {
      TxType::DCT_DCT | TxType::DCT_ADST => TxfmKind::DCT,
      TxType::ADST_DCT | TxType::ADST_ADST => TxfmKind::ADST,
    }
  }

  // Transform applied along each row
  pub fn row_kind(self) -> TxfmKind {
    match self {
      TxType::DCT_DCT | TxType::ADST_DCT => TxfmKind::DCT,
      TxType::DCT_ADST | TxType::ADST_ADST => TxfmKind::ADST,
    }
  }

  // ADST kernels only exist up to 16 points
  pub fn is_valid_for(self, tx_size: TxSize) -> bool {
    tx_size != TxSize::TX_32X32 || self == TxType::DCT_DCT
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaneType {
  Y = 0,
  UV = 1
}

impl PlaneType {
  // Plane 0 is luma, planes 1 and 2 are chroma
  pub fn from_plane(plane: usize) -> PlaneType {
    if plane == 0 { PlaneType::Y } else { PlaneType::UV }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefType {
  INTRA = 0,
  INTER = 1
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FrameType {
  #[default]
  KEY_FRAME = 0,
  INTER_FRAME = 1
}

// Coefficient tokens, in tree order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
  ZERO_TOKEN = 0,
  ONE_TOKEN = 1,
  TWO_TOKEN = 2,
  THREE_TOKEN = 3,
  FOUR_TOKEN = 4,
  CATEGORY1_TOKEN = 5,
  CATEGORY2_TOKEN = 6,
  CATEGORY3_TOKEN = 7,
  CATEGORY4_TOKEN = 8,
  CATEGORY5_TOKEN = 9,
  CATEGORY6_TOKEN = 10,
  EOB_TOKEN = 11
}

impl Token {
  pub const ALL: [Token; 12] = [
    Token::ZERO_TOKEN, Token::ONE_TOKEN, Token::TWO_TOKEN, Token::THREE_TOKEN,
    Token::FOUR_TOKEN, Token::CATEGORY1_TOKEN, Token::CATEGORY2_TOKEN, Token::CATEGORY3_TOKEN,
    Token::CATEGORY4_TOKEN, Token::CATEGORY5_TOKEN, Token::CATEGORY6_TOKEN, Token::EOB_TOKEN
  ];

  pub fn from_index(index: usize) -> Token {
    Token::ALL[index]
  }
}
