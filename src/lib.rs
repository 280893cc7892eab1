// Copyright (c) 2024-2025, The tinyavif contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

// Transform, quantization and coefficient token coding for a VP9-style
// video codec, with backward probability adaptation and forward updates

// Disable name styling checks, so that we can use the VP9 bitstream names
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]

pub mod adapt;
pub mod array2d;
pub mod config;
pub mod consts;
pub mod cost;
pub mod counts;
pub mod default_probs;
pub mod entropycode;
pub mod enums;
pub mod error;
pub mod frame;
pub mod frame_context;
pub mod probs;
pub mod quant;
pub mod recon;
pub mod scan;
pub mod subexp;
pub mod tile;
pub mod tokens;
pub mod txfm;
pub mod util;

pub use crate::array2d::Array2D;
pub use crate::config::{DeltaQ, FrameLayout, FrameParams};
pub use crate::counts::CoefCounts;
pub use crate::enums::*;
pub use crate::error::{CodecError, Result};
pub use crate::frame::{DecodedFrame, EncodedFrame, FrameDecoder, FrameEncoder, alloc_planes};
pub use crate::frame_context::FrameContexts;
pub use crate::probs::CoefProbs;
pub use crate::tile::{Planes, TxPlan};
