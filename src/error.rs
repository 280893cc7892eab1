// Error types for the coefficient coding pipeline
//
// Configuration problems are reported before any coding starts. Bitstream
// corruption is reported per frame and never touches the saved probability
// contexts

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),

  // The first bit of a bool-coded partition must be zero
  #[error("Invalid bool decoder marker bit")]
  InvalidMarkerBit,

  // The bool decoder consumed more bits than the partition holds
  #[error("Unexpected end of data in {0}")]
  UnexpectedEndOfData(&'static str),

  // A dequantized coefficient does not fit the range allowed for the bit depth
  #[error("Coefficient out of range at scan position {position}: {value}")]
  CoefficientOverflow { position: usize, value: i64 },

  // Partition 0 is the frame header, tile `i` is partition `i + 1`
  #[error("Invalid size for partition {tile}: {size} bytes with {remaining} remaining")]
  InvalidTileSize { tile: usize, size: usize, remaining: usize },

  // A frame failed to decode; carries the first tile error
  #[error("Corrupted frame: {0}")]
  CorruptedFrame(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
  pub fn invalid_config(message: impl Into<String>) -> Self {
    Self::InvalidConfig(message.into())
  }

  // Corruption errors only affect the current frame; the caller may
  // continue with the next key frame or conceal
  pub fn is_recoverable(&self) -> bool {
    !matches!(self, Self::InvalidConfig(_))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_display() {
    let err = CodecError::CoefficientOverflow { position: 3, value: 1 << 20 };
    assert_eq!(err.to_string(), "Coefficient out of range at scan position 3: 1048576");

    let err = CodecError::UnexpectedEndOfData("tile 2");
    assert_eq!(err.to_string(), "Unexpected end of data in tile 2");
  }

  #[test]
  fn test_is_recoverable() {
    assert!(CodecError::InvalidMarkerBit.is_recoverable());
    assert!(CodecError::CorruptedFrame("x".into()).is_recoverable());
    assert!(!CodecError::invalid_config("bit depth 9").is_recoverable());
  }
}
