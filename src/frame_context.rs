// Saved probability contexts
//
// A stream keeps FRAME_CONTEXTS independently adapted copies of the
// coefficient model. Each frame loads one slot into `fc`, codes with it,
// adapts it and (optionally) writes it back to the same slot.

use tracing::debug;

use crate::config::FrameParams;
use crate::consts::*;
use crate::probs::CoefProbs;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameContexts {
  // Model used for the frame being coded
  pub fc: CoefProbs,
  saved: [CoefProbs; FRAME_CONTEXTS],
  current: usize,
}

impl FrameContexts {
  pub fn new() -> Self {
    Self {
      fc: CoefProbs::defaults(),
      saved: std::array::from_fn(|_| CoefProbs::defaults()),
      current: 0
    }
  }

  pub fn current(&self) -> usize {
    self.current
  }

  pub fn saved(&self, idx: usize) -> &CoefProbs {
    &self.saved[idx]
  }

  pub fn reset_all(&mut self) {
    debug!("Resetting all frame contexts");
    self.fc = CoefProbs::defaults();
    for slot in self.saved.iter_mut() {
      *slot = CoefProbs::defaults();
    }
  }

  pub fn reset_current(&mut self) {
    debug!(idx = self.current, "Resetting frame context");
    self.fc = CoefProbs::defaults();
    self.saved[self.current] = CoefProbs::defaults();
  }

  // Make slot `idx` current and load it into `fc`
  pub fn select(&mut self, idx: usize) {
    assert!(idx < FRAME_CONTEXTS);
    debug!(idx, "Selecting frame context");
    self.current = idx;
    self.fc = self.saved[idx].clone();
  }

  // Write `fc` back to the current slot
  pub fn save(&mut self) {
    debug!(idx = self.current, "Saving frame context");
    self.saved[self.current] = self.fc.clone();
  }

  pub fn swap(&mut self, a: usize, b: usize) {
    assert!(a < FRAME_CONTEXTS && b < FRAME_CONTEXTS);
    self.saved.swap(a, b);
  }

  // The probabilities the current frame started from, before any adaptation
  pub fn pre_probs(&self) -> &CoefProbs {
    &self.saved[self.current]
  }

  // Apply the frame's reset signalling and load its context.
  // Frames coded without reference to the past (key frames, intra-only and
  // error resilient frames) always use slot 0; key frames, error resilient
  // frames and reset mode 3 reset every slot, mode 2 only the signalled one.
  pub fn begin_frame(&mut self, params: &FrameParams) {
    let mut idx = params.frame_context_idx;
    if params.is_intra_only() || params.error_resilient {
      if params.frame_type == crate::enums::FrameType::KEY_FRAME
         || params.error_resilient
         || params.reset_frame_context == 3 {
        self.reset_all();
      } else if params.reset_frame_context == 2 {
        self.current = idx;
        self.reset_current();
      }
      idx = 0;
    }
    self.select(idx);
  }

  // Write the adapted model back if the frame asks for it
  pub fn end_frame(&mut self, params: &FrameParams) {
    if params.refresh_frame_context && !params.error_resilient {
      self.save();
    }
  }
}

impl Default for FrameContexts {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::enums::*;

  fn modified() -> CoefProbs {
    let mut probs = CoefProbs::defaults();
    probs.get_mut(TxSize::TX_4X4, PlaneType::Y, RefType::INTRA, 1, 1)[0] = 7;
    probs
  }

  #[test]
  fn select_and_save() {
    let mut ctxs = FrameContexts::new();
    ctxs.select(2);
    ctxs.fc = modified();
    assert_eq!(ctxs.pre_probs(), &CoefProbs::defaults());
    ctxs.save();
    assert_eq!(ctxs.saved(2), &modified());
    ctxs.select(1);
    assert_eq!(ctxs.fc, CoefProbs::defaults());
    ctxs.swap(1, 2);
    assert_eq!(ctxs.saved(1), &modified());
  }

  #[test]
  fn key_frames_reset_every_slot() {
    let mut ctxs = FrameContexts::new();
    for idx in 0..FRAME_CONTEXTS {
      ctxs.select(idx);
      ctxs.fc = modified();
      ctxs.save();
    }
    ctxs.begin_frame(&FrameParams::key_frame().with_frame_context(3));
    assert_eq!(ctxs.current(), 0);
    for idx in 0..FRAME_CONTEXTS {
      assert_eq!(ctxs.saved(idx), &CoefProbs::defaults());
    }
  }

  #[test]
  fn intra_only_reset_mode_two_resets_one_slot() {
    let mut ctxs = FrameContexts::new();
    for idx in 0..FRAME_CONTEXTS {
      ctxs.select(idx);
      ctxs.fc = modified();
      ctxs.save();
    }
    let mut params = FrameParams::inter_frame(false).with_frame_context(2);
    params.intra_only = true;
    params.reset_frame_context = 2;
    ctxs.begin_frame(&params);
    assert_eq!(ctxs.saved(2), &CoefProbs::defaults());
    assert_eq!(ctxs.saved(1), &modified());
    // Past-independent frames code with slot 0
    assert_eq!(ctxs.current(), 0);
    assert_eq!(ctxs.fc, modified());
  }

  #[test]
  fn inter_frames_load_their_slot() {
    let mut ctxs = FrameContexts::new();
    ctxs.select(1);
    ctxs.fc = modified();
    ctxs.save();
    let params = FrameParams::inter_frame(true).with_frame_context(1);
    ctxs.begin_frame(&params);
    assert_eq!(ctxs.fc, modified());

    // Error resilient frames never write back
    ctxs.fc = CoefProbs::defaults();
    ctxs.end_frame(&params.clone().with_error_resilient(true));
    assert_eq!(ctxs.saved(1), &modified());
    ctxs.end_frame(&params);
    assert_eq!(ctxs.saved(1), &CoefProbs::defaults());
  }
}
