// Forward and inverse DCT/ADST transforms for 4x4 to 32x32 blocks
//
// Every 1D kernel works in place on a slice of i32s. The forward kernels
// carry no range checks; the inverse kernels clamp the result of every
// butterfly addition to `range_bits` so that corrupt input cannot push
// intermediates outside the range a hardware decoder would use.

use std::cmp::max;

use crate::array2d::Array2D;
use crate::consts::*;
use crate::enums::*;
use crate::util::*;

fn cospi_arr(cos_bit: u32) -> &'static [i32; 64] {
  assert!(10 <= cos_bit && cos_bit <= 13);
  &av1_cospi_arr_data[(cos_bit - 10) as usize]
}

fn sinpi_arr(cos_bit: u32) -> &'static [i32; 5] {
  assert!(10 <= cos_bit && cos_bit <= 13);
  &av1_sinpi_arr_data[(cos_bit - 10) as usize]
}

fn clamp_value(value: i32, range_bits: u32) -> i32 {
  assert!(0 < range_bits);
  assert!(range_bits <= 32);

  // 1 << 31 doesn't fit in an i32, but the resulting bounds do
  let min_ = -(1i64 << (range_bits - 1));
  let max_ = (1i64 << (range_bits - 1)) - 1;
  clamp(value, min_ as i32, max_ as i32)
}

fn clamp_array(arr: &mut [i32], bits: u32) {
  for i in 0 .. arr.len() {
    arr[i] = clamp_value(arr[i], bits);
  }
}

// Divide elements of an array by 2^bits, with rounding
// Negative bits scale up instead, saturating at the i32 range
fn round_shift_array(arr: &mut [i32], bits: i32) {
  if bits == 0 {
    return;
  } else if bits < 0 {
    let shift = (-bits) as u32;
    for i in 0 .. arr.len() {
      let tmp = (arr[i] as i64) << shift;
      arr[i] = clamp(tmp, i32::MIN as i64, i32::MAX as i64) as i32;
    }
  } else {
    let shift = bits as u32;
    for i in 0 .. arr.len() {
      arr[i] = round2(arr[i], shift);
    }
  }
}

// round2(w0 * in0 + w1 * in1, cos_bit), in wrapping 32-bit arithmetic.
// Intermediates may overflow at high bit depth, but the rounded result
// always fits, so the wrapped value is still exact.
fn half_btf(w0: i32, in0: i32, w1: i32, in1: i32, cos_bit: u32) -> i32 {
  let tmp = w0.wrapping_mul(in0).wrapping_add(w1.wrapping_mul(in1));
  let offset = 1 << (cos_bit - 1);
  return (tmp.wrapping_add(offset)) >> cos_bit;
}

fn round_bits(value: i32, bits: u32) -> i32 {
  value.wrapping_add(1 << (bits - 1)) >> bits
}

// In-place 4-point forward ADST, built on the sin(k * pi / 9) basis
fn fwd_adst4(arr: &mut [i32], cos_bit: u32) {
  assert!(arr.len() == 4);

  let sinpi = sinpi_arr(cos_bit);
  let (x0, x1, x2, x3) = (arr[0], arr[1], arr[2], arr[3]);

  let s0 = sinpi[1].wrapping_mul(x0);
  let s1 = sinpi[4].wrapping_mul(x0);
  let s2 = sinpi[2].wrapping_mul(x1);
  let s3 = sinpi[1].wrapping_mul(x1);
  let s4 = sinpi[3].wrapping_mul(x2);
  let s5 = sinpi[4].wrapping_mul(x3);
  let s6 = sinpi[2].wrapping_mul(x3);
  let s7 = x0 + x1 - x3;

  let y0 = s0.wrapping_add(s2).wrapping_add(s5);
  let y1 = sinpi[3].wrapping_mul(s7);
  let y2 = s1.wrapping_sub(s3).wrapping_add(s6);
  let y3 = s4;

  arr[0] = round_bits(y0.wrapping_add(y3), cos_bit);
  arr[1] = round_bits(y1, cos_bit);
  arr[2] = round_bits(y2.wrapping_sub(y3), cos_bit);
  arr[3] = round_bits(y2.wrapping_sub(y0).wrapping_add(y3), cos_bit);
}

// In-place 4-point inverse ADST
fn inv_adst4(arr: &mut [i32], cos_bit: u32, _range_bits: u32) {
  assert!(arr.len() == 4);

  let sinpi = sinpi_arr(cos_bit);
  let (x0, x1, x2, x3) = (arr[0], arr[1], arr[2], arr[3]);

  let s0 = sinpi[1].wrapping_mul(x0);
  let s1 = sinpi[2].wrapping_mul(x0);
  let s2 = sinpi[3].wrapping_mul(x1);
  let s3 = sinpi[4].wrapping_mul(x2);
  let s4 = sinpi[1].wrapping_mul(x2);
  let s5 = sinpi[2].wrapping_mul(x3);
  let s6 = sinpi[4].wrapping_mul(x3);
  let s7 = x0.wrapping_sub(x2).wrapping_add(x3);

  let t0 = s0.wrapping_add(s3).wrapping_add(s5);
  let t1 = s1.wrapping_sub(s4).wrapping_sub(s6);
  let t2 = sinpi[3].wrapping_mul(s7);
  let t3 = s2;

  arr[0] = round_bits(t0.wrapping_add(t3), cos_bit);
  arr[1] = round_bits(t1.wrapping_add(t3), cos_bit);
  arr[2] = round_bits(t2, cos_bit);
  arr[3] = round_bits(t0.wrapping_add(t1).wrapping_sub(t3), cos_bit);
}

// In-place 4-point forward DCT
fn fwd_dct4(arr: &mut [i32], cos_bit: u32) {
  assert!(arr.len() == 4);

  let cospi = cospi_arr(cos_bit);

  let stage1 = [
    arr[0] + arr[3],
    arr[1] + arr[2],
    arr[1] - arr[2],
    arr[0] - arr[3],
  ];

  let stage2 = [
    half_btf(cospi[32], stage1[0], cospi[32], stage1[1], cos_bit),
    half_btf(cospi[32], stage1[0], -cospi[32], stage1[1], cos_bit),
    half_btf(cospi[48], stage1[2], cospi[16], stage1[3], cos_bit),
    half_btf(-cospi[16], stage1[2], cospi[48], stage1[3], cos_bit),
  ];

  let stage3 = [
    stage2[0],
    stage2[2],
    stage2[1],
    stage2[3],
  ];

  arr.copy_from_slice(&stage3);
}

// In-place 4-point inverse DCT
fn inv_dct4(arr: &mut [i32], cos_bit: u32, range_bits: u32) {
  assert!(arr.len() == 4);

  let cospi = cospi_arr(cos_bit);

  let stage1 = [
    arr[0],
    arr[2],
    arr[1],
    arr[3],
  ];

  let stage2 = [
    half_btf(cospi[32], stage1[0], cospi[32], stage1[1], cos_bit),
    half_btf(cospi[32], stage1[0], -cospi[32], stage1[1], cos_bit),
    half_btf(cospi[48], stage1[2], -cospi[16], stage1[3], cos_bit),
    half_btf(cospi[16], stage1[2], cospi[48], stage1[3], cos_bit),
  ];

  let stage3 = [
    clamp_value(stage2[0] + stage2[3], range_bits),
    clamp_value(stage2[1] + stage2[2], range_bits),
    clamp_value(stage2[1] - stage2[2], range_bits),
    clamp_value(stage2[0] - stage2[3], range_bits),
  ];

  arr.copy_from_slice(&stage3);
}

// In-place 8-point forward DCT
fn fwd_dct8(arr: &mut [i32], cos_bit: u32) {
  assert!(arr.len() == 8);

  let cospi = cospi_arr(cos_bit);

  let stage1 = [
    arr[0] + arr[7],
    arr[1] + arr[6],
    arr[2] + arr[5],
    arr[3] + arr[4],
    arr[3] - arr[4],
    arr[2] - arr[5],
    arr[1] - arr[6],
    arr[0] - arr[7],
  ];

  let stage2 = [
    stage1[0] + stage1[3],
    stage1[1] + stage1[2],
    stage1[1] - stage1[2],
    stage1[0] - stage1[3],
    stage1[4],
    half_btf(-cospi[32], stage1[5], cospi[32], stage1[6], cos_bit),
    half_btf(cospi[32], stage1[5], cospi[32], stage1[6], cos_bit),
    stage1[7],
  ];

  let stage3 = [
    half_btf(cospi[32], stage2[0], cospi[32], stage2[1], cos_bit),
    half_btf(cospi[32], stage2[0], -cospi[32], stage2[1], cos_bit),
    half_btf(cospi[48], stage2[2], cospi[16], stage2[3], cos_bit),
    half_btf(-cospi[16], stage2[2], cospi[48], stage2[3], cos_bit),
    stage2[4] + stage2[5],
    stage2[4] - stage2[5],
    stage2[7] - stage2[6],
    stage2[7] + stage2[6],
  ];

  let stage4 = [
    stage3[0],
    stage3[1],
    stage3[2],
    stage3[3],
    half_btf(cospi[56], stage3[4], cospi[8], stage3[7], cos_bit),
    half_btf(cospi[24], stage3[5], cospi[40], stage3[6], cos_bit),
    half_btf(-cospi[40], stage3[5], cospi[24], stage3[6], cos_bit),
    half_btf(-cospi[8], stage3[4], cospi[56], stage3[7], cos_bit),
  ];

  let stage5 = [
    stage4[0],
    stage4[4],
    stage4[2],
    stage4[6],
    stage4[1],
    stage4[5],
    stage4[3],
    stage4[7],
  ];

  arr.copy_from_slice(&stage5);
}

// In-place 8-point inverse DCT
fn inv_dct8(arr: &mut [i32], cos_bit: u32, range_bits: u32) {
  assert!(arr.len() == 8);

  let cospi = cospi_arr(cos_bit);

  let stage1 = [
    arr[0],
    arr[4],
    arr[2],
    arr[6],
    arr[1],
    arr[5],
    arr[3],
    arr[7],
  ];

  let stage2 = [
    stage1[0],
    stage1[1],
    stage1[2],
    stage1[3],
    half_btf(cospi[56], stage1[4], -cospi[8], stage1[7], cos_bit),
    half_btf(cospi[24], stage1[5], -cospi[40], stage1[6], cos_bit),
    half_btf(cospi[40], stage1[5], cospi[24], stage1[6], cos_bit),
    half_btf(cospi[8], stage1[4], cospi[56], stage1[7], cos_bit),
  ];

  let stage3 = [
    half_btf(cospi[32], stage2[0], cospi[32], stage2[1], cos_bit),
    half_btf(cospi[32], stage2[0], -cospi[32], stage2[1], cos_bit),
    half_btf(cospi[48], stage2[2], -cospi[16], stage2[3], cos_bit),
    half_btf(cospi[16], stage2[2], cospi[48], stage2[3], cos_bit),
    clamp_value(stage2[4] + stage2[5], range_bits),
    clamp_value(stage2[4] - stage2[5], range_bits),
    clamp_value(stage2[7] - stage2[6], range_bits),
    clamp_value(stage2[6] + stage2[7], range_bits),
  ];

  let stage4 = [
    clamp_value(stage3[0] + stage3[3], range_bits),
    clamp_value(stage3[1] + stage3[2], range_bits),
    clamp_value(stage3[1] - stage3[2], range_bits),
    clamp_value(stage3[0] - stage3[3], range_bits),
    stage3[4],
    half_btf(-cospi[32], stage3[5], cospi[32], stage3[6], cos_bit),
    half_btf(cospi[32], stage3[5], cospi[32], stage3[6], cos_bit),
    stage3[7],
  ];

  let stage5 = [
    clamp_value(stage4[0] + stage4[7], range_bits),
    clamp_value(stage4[1] + stage4[6], range_bits),
    clamp_value(stage4[2] + stage4[5], range_bits),
    clamp_value(stage4[3] + stage4[4], range_bits),
    clamp_value(stage4[3] - stage4[4], range_bits),
    clamp_value(stage4[2] - stage4[5], range_bits),
    clamp_value(stage4[1] - stage4[6], range_bits),
    clamp_value(stage4[0] - stage4[7], range_bits),
  ];

  arr.copy_from_slice(&stage5);
}

// In-place 16-point forward DCT
fn fwd_dct16(arr: &mut [i32], cos_bit: u32) {
  assert!(arr.len() == 16);

  let cospi = cospi_arr(cos_bit);

  let stage1 = [
    arr[0] + arr[15],
    arr[1] + arr[14],
    arr[2] + arr[13],
    arr[3] + arr[12],
    arr[4] + arr[11],
    arr[5] + arr[10],
    arr[6] + arr[9],
    arr[7] + arr[8],
    arr[7] - arr[8],
    arr[6] - arr[9],
    arr[5] - arr[10],
    arr[4] - arr[11],
    arr[3] - arr[12],
    arr[2] - arr[13],
    arr[1] - arr[14],
    arr[0] - arr[15],
  ];

  let stage2 = [
    stage1[0] + stage1[7],
    stage1[1] + stage1[6],
    stage1[2] + stage1[5],
    stage1[3] + stage1[4],
    stage1[3] - stage1[4],
    stage1[2] - stage1[5],
    stage1[1] - stage1[6],
    stage1[0] - stage1[7],
    stage1[8],
    stage1[9],
    half_btf(-cospi[32], stage1[10], cospi[32], stage1[13], cos_bit),
    half_btf(-cospi[32], stage1[11], cospi[32], stage1[12], cos_bit),
    half_btf(cospi[32], stage1[11], cospi[32], stage1[12], cos_bit),
    half_btf(cospi[32], stage1[10], cospi[32], stage1[13], cos_bit),
    stage1[14],
    stage1[15],
  ];

  let stage3 = [
    stage2[0] + stage2[3],
    stage2[1] + stage2[2],
    stage2[1] - stage2[2],
    stage2[0] - stage2[3],
    stage2[4],
    half_btf(-cospi[32], stage2[5], cospi[32], stage2[6], cos_bit),
    half_btf(cospi[32], stage2[5], cospi[32], stage2[6], cos_bit),
    stage2[7],
    stage2[8] + stage2[11],
    stage2[9] + stage2[10],
    stage2[9] - stage2[10],
    stage2[8] - stage2[11],
    stage2[15] - stage2[12],
    stage2[14] - stage2[13],
    stage2[14] + stage2[13],
    stage2[15] + stage2[12],
  ];

  let stage4 = [
    half_btf(cospi[32], stage3[0], cospi[32], stage3[1], cos_bit),
    half_btf(cospi[32], stage3[0], -cospi[32], stage3[1], cos_bit),
    half_btf(cospi[48], stage3[2], cospi[16], stage3[3], cos_bit),
    half_btf(-cospi[16], stage3[2], cospi[48], stage3[3], cos_bit),
    stage3[4] + stage3[5],
    stage3[4] - stage3[5],
    stage3[7] - stage3[6],
    stage3[7] + stage3[6],
    stage3[8],
    half_btf(-cospi[16], stage3[9], cospi[48], stage3[14], cos_bit),
    half_btf(-cospi[48], stage3[10], -cospi[16], stage3[13], cos_bit),
    stage3[11],
    stage3[12],
    half_btf(-cospi[16], stage3[10], cospi[48], stage3[13], cos_bit),
    half_btf(cospi[48], stage3[9], cospi[16], stage3[14], cos_bit),
    stage3[15],
  ];

  let stage5 = [
    stage4[0],
    stage4[1],
    stage4[2],
    stage4[3],
    half_btf(cospi[56], stage4[4], cospi[8], stage4[7], cos_bit),
    half_btf(cospi[24], stage4[5], cospi[40], stage4[6], cos_bit),
    half_btf(-cospi[40], stage4[5], cospi[24], stage4[6], cos_bit),
    half_btf(-cospi[8], stage4[4], cospi[56], stage4[7], cos_bit),
    stage4[8] + stage4[9],
    stage4[8] - stage4[9],
    stage4[11] - stage4[10],
    stage4[11] + stage4[10],
    stage4[12] + stage4[13],
    stage4[12] - stage4[13],
    stage4[15] - stage4[14],
    stage4[15] + stage4[14],
  ];

  let stage6 = [
    stage5[0],
    stage5[1],
    stage5[2],
    stage5[3],
    stage5[4],
    stage5[5],
    stage5[6],
    stage5[7],
    half_btf(cospi[60], stage5[8], cospi[4], stage5[15], cos_bit),
    half_btf(cospi[28], stage5[9], cospi[36], stage5[14], cos_bit),
    half_btf(cospi[44], stage5[10], cospi[20], stage5[13], cos_bit),
    half_btf(cospi[12], stage5[11], cospi[52], stage5[12], cos_bit),
    half_btf(-cospi[52], stage5[11], cospi[12], stage5[12], cos_bit),
    half_btf(-cospi[20], stage5[10], cospi[44], stage5[13], cos_bit),
    half_btf(-cospi[36], stage5[9], cospi[28], stage5[14], cos_bit),
    half_btf(-cospi[4], stage5[8], cospi[60], stage5[15], cos_bit),
  ];

  let stage7 = [
    stage6[0],
    stage6[8],
    stage6[4],
    stage6[12],
    stage6[2],
    stage6[10],
    stage6[6],
    stage6[14],
    stage6[1],
    stage6[9],
    stage6[5],
    stage6[13],
    stage6[3],
    stage6[11],
    stage6[7],
    stage6[15],
  ];

  arr.copy_from_slice(&stage7);
}

// In-place 16-point inverse DCT
fn inv_dct16(arr: &mut [i32], cos_bit: u32, range_bits: u32) {
  assert!(arr.len() == 16);

  let cospi = cospi_arr(cos_bit);

  let stage1 = [
    arr[0],
    arr[8],
    arr[4],
    arr[12],
    arr[2],
    arr[10],
    arr[6],
    arr[14],
    arr[1],
    arr[9],
    arr[5],
    arr[13],
    arr[3],
    arr[11],
    arr[7],
    arr[15],
  ];

  let stage2 = [
    stage1[0],
    stage1[1],
    stage1[2],
    stage1[3],
    stage1[4],
    stage1[5],
    stage1[6],
    stage1[7],
    half_btf(cospi[60], stage1[8], -cospi[4], stage1[15], cos_bit),
    half_btf(cospi[28], stage1[9], -cospi[36], stage1[14], cos_bit),
    half_btf(cospi[44], stage1[10], -cospi[20], stage1[13], cos_bit),
    half_btf(cospi[12], stage1[11], -cospi[52], stage1[12], cos_bit),
    half_btf(cospi[52], stage1[11], cospi[12], stage1[12], cos_bit),
    half_btf(cospi[20], stage1[10], cospi[44], stage1[13], cos_bit),
    half_btf(cospi[36], stage1[9], cospi[28], stage1[14], cos_bit),
    half_btf(cospi[4], stage1[8], cospi[60], stage1[15], cos_bit),
  ];

  let stage3 = [
    stage2[0],
    stage2[1],
    stage2[2],
    stage2[3],
    half_btf(cospi[56], stage2[4], -cospi[8], stage2[7], cos_bit),
    half_btf(cospi[24], stage2[5], -cospi[40], stage2[6], cos_bit),
    half_btf(cospi[40], stage2[5], cospi[24], stage2[6], cos_bit),
    half_btf(cospi[8], stage2[4], cospi[56], stage2[7], cos_bit),
    clamp_value(stage2[8] + stage2[9], range_bits),
    clamp_value(stage2[8] - stage2[9], range_bits),
    clamp_value(stage2[11] - stage2[10], range_bits),
    clamp_value(stage2[10] + stage2[11], range_bits),
    clamp_value(stage2[12] + stage2[13], range_bits),
    clamp_value(stage2[12] - stage2[13], range_bits),
    clamp_value(stage2[15] - stage2[14], range_bits),
    clamp_value(stage2[14] + stage2[15], range_bits),
  ];

  let stage4 = [
    half_btf(cospi[32], stage3[0], cospi[32], stage3[1], cos_bit),
    half_btf(cospi[32], stage3[0], -cospi[32], stage3[1], cos_bit),
    half_btf(cospi[48], stage3[2], -cospi[16], stage3[3], cos_bit),
    half_btf(cospi[16], stage3[2], cospi[48], stage3[3], cos_bit),
    clamp_value(stage3[4] + stage3[5], range_bits),
    clamp_value(stage3[4] - stage3[5], range_bits),
    clamp_value(stage3[7] - stage3[6], range_bits),
    clamp_value(stage3[6] + stage3[7], range_bits),
    stage3[8],
    half_btf(-cospi[16], stage3[9], cospi[48], stage3[14], cos_bit),
    half_btf(-cospi[48], stage3[10], -cospi[16], stage3[13], cos_bit),
    stage3[11],
    stage3[12],
    half_btf(-cospi[16], stage3[10], cospi[48], stage3[13], cos_bit),
    half_btf(cospi[48], stage3[9], cospi[16], stage3[14], cos_bit),
    stage3[15],
  ];

  let stage5 = [
    clamp_value(stage4[0] + stage4[3], range_bits),
    clamp_value(stage4[1] + stage4[2], range_bits),
    clamp_value(stage4[1] - stage4[2], range_bits),
    clamp_value(stage4[0] - stage4[3], range_bits),
    stage4[4],
    half_btf(-cospi[32], stage4[5], cospi[32], stage4[6], cos_bit),
    half_btf(cospi[32], stage4[5], cospi[32], stage4[6], cos_bit),
    stage4[7],
    clamp_value(stage4[8] + stage4[11], range_bits),
    clamp_value(stage4[9] + stage4[10], range_bits),
    clamp_value(stage4[9] - stage4[10], range_bits),
    clamp_value(stage4[8] - stage4[11], range_bits),
    clamp_value(stage4[15] - stage4[12], range_bits),
    clamp_value(stage4[14] - stage4[13], range_bits),
    clamp_value(stage4[13] + stage4[14], range_bits),
    clamp_value(stage4[12] + stage4[15], range_bits),
  ];

  let stage6 = [
    clamp_value(stage5[0] + stage5[7], range_bits),
    clamp_value(stage5[1] + stage5[6], range_bits),
    clamp_value(stage5[2] + stage5[5], range_bits),
    clamp_value(stage5[3] + stage5[4], range_bits),
    clamp_value(stage5[3] - stage5[4], range_bits),
    clamp_value(stage5[2] - stage5[5], range_bits),
    clamp_value(stage5[1] - stage5[6], range_bits),
    clamp_value(stage5[0] - stage5[7], range_bits),
    stage5[8],
    stage5[9],
    half_btf(-cospi[32], stage5[10], cospi[32], stage5[13], cos_bit),
    half_btf(-cospi[32], stage5[11], cospi[32], stage5[12], cos_bit),
    half_btf(cospi[32], stage5[11], cospi[32], stage5[12], cos_bit),
    half_btf(cospi[32], stage5[10], cospi[32], stage5[13], cos_bit),
    stage5[14],
    stage5[15],
  ];

  let stage7 = [
    clamp_value(stage6[0] + stage6[15], range_bits),
    clamp_value(stage6[1] + stage6[14], range_bits),
    clamp_value(stage6[2] + stage6[13], range_bits),
    clamp_value(stage6[3] + stage6[12], range_bits),
    clamp_value(stage6[4] + stage6[11], range_bits),
    clamp_value(stage6[5] + stage6[10], range_bits),
    clamp_value(stage6[6] + stage6[9], range_bits),
    clamp_value(stage6[7] + stage6[8], range_bits),
    clamp_value(stage6[7] - stage6[8], range_bits),
    clamp_value(stage6[6] - stage6[9], range_bits),
    clamp_value(stage6[5] - stage6[10], range_bits),
    clamp_value(stage6[4] - stage6[11], range_bits),
    clamp_value(stage6[3] - stage6[12], range_bits),
    clamp_value(stage6[2] - stage6[13], range_bits),
    clamp_value(stage6[1] - stage6[14], range_bits),
    clamp_value(stage6[0] - stage6[15], range_bits),
  ];

  arr.copy_from_slice(&stage7);
}

// In-place 32-point forward DCT
fn fwd_dct32(arr: &mut [i32], cos_bit: u32) {
  assert!(arr.len() == 32);

  let cospi = cospi_arr(cos_bit);

  let stage1 = [
    arr[0] + arr[31],
    arr[1] + arr[30],
    arr[2] + arr[29],
    arr[3] + arr[28],
    arr[4] + arr[27],
    arr[5] + arr[26],
    arr[6] + arr[25],
    arr[7] + arr[24],
    arr[8] + arr[23],
    arr[9] + arr[22],
    arr[10] + arr[21],
    arr[11] + arr[20],
    arr[12] + arr[19],
    arr[13] + arr[18],
    arr[14] + arr[17],
    arr[15] + arr[16],
    arr[15] - arr[16],
    arr[14] - arr[17],
    arr[13] - arr[18],
    arr[12] - arr[19],
    arr[11] - arr[20],
    arr[10] - arr[21],
    arr[9] - arr[22],
    arr[8] - arr[23],
    arr[7] - arr[24],
    arr[6] - arr[25],
    arr[5] - arr[26],
    arr[4] - arr[27],
    arr[3] - arr[28],
    arr[2] - arr[29],
    arr[1] - arr[30],
    arr[0] - arr[31],
  ];

  let stage2 = [
    stage1[0] + stage1[15],
    stage1[1] + stage1[14],
    stage1[2] + stage1[13],
    stage1[3] + stage1[12],
    stage1[4] + stage1[11],
    stage1[5] + stage1[10],
    stage1[6] + stage1[9],
    stage1[7] + stage1[8],
    stage1[7] - stage1[8],
    stage1[6] - stage1[9],
    stage1[5] - stage1[10],
    stage1[4] - stage1[11],
    stage1[3] - stage1[12],
    stage1[2] - stage1[13],
    stage1[1] - stage1[14],
    stage1[0] - stage1[15],
    stage1[16],
    stage1[17],
    stage1[18],
    stage1[19],
    half_btf(-cospi[32], stage1[20], cospi[32], stage1[27], cos_bit),
    half_btf(-cospi[32], stage1[21], cospi[32], stage1[26], cos_bit),
    half_btf(-cospi[32], stage1[22], cospi[32], stage1[25], cos_bit),
    half_btf(-cospi[32], stage1[23], cospi[32], stage1[24], cos_bit),
    half_btf(cospi[32], stage1[23], cospi[32], stage1[24], cos_bit),
    half_btf(cospi[32], stage1[22], cospi[32], stage1[25], cos_bit),
    half_btf(cospi[32], stage1[21], cospi[32], stage1[26], cos_bit),
    half_btf(cospi[32], stage1[20], cospi[32], stage1[27], cos_bit),
    stage1[28],
    stage1[29],
    stage1[30],
    stage1[31],
  ];

  let stage3 = [
    stage2[0] + stage2[7],
    stage2[1] + stage2[6],
    stage2[2] + stage2[5],
    stage2[3] + stage2[4],
    stage2[3] - stage2[4],
    stage2[2] - stage2[5],
    stage2[1] - stage2[6],
    stage2[0] - stage2[7],
    stage2[8],
    stage2[9],
    half_btf(-cospi[32], stage2[10], cospi[32], stage2[13], cos_bit),
    half_btf(-cospi[32], stage2[11], cospi[32], stage2[12], cos_bit),
    half_btf(cospi[32], stage2[11], cospi[32], stage2[12], cos_bit),
    half_btf(cospi[32], stage2[10], cospi[32], stage2[13], cos_bit),
    stage2[14],
    stage2[15],
    stage2[16] + stage2[23],
    stage2[17] + stage2[22],
    stage2[18] + stage2[21],
    stage2[19] + stage2[20],
    stage2[19] - stage2[20],
    stage2[18] - stage2[21],
    stage2[17] - stage2[22],
    stage2[16] - stage2[23],
    stage2[31] - stage2[24],
    stage2[30] - stage2[25],
    stage2[29] - stage2[26],
    stage2[28] - stage2[27],
    stage2[28] + stage2[27],
    stage2[29] + stage2[26],
    stage2[30] + stage2[25],
    stage2[31] + stage2[24],
  ];

  let stage4 = [
    stage3[0] + stage3[3],
    stage3[1] + stage3[2],
    stage3[1] - stage3[2],
    stage3[0] - stage3[3],
    stage3[4],
    half_btf(-cospi[32], stage3[5], cospi[32], stage3[6], cos_bit),
    half_btf(cospi[32], stage3[5], cospi[32], stage3[6], cos_bit),
    stage3[7],
    stage3[8] + stage3[11],
    stage3[9] + stage3[10],
    stage3[9] - stage3[10],
    stage3[8] - stage3[11],
    stage3[15] - stage3[12],
    stage3[14] - stage3[13],
    stage3[14] + stage3[13],
    stage3[15] + stage3[12],
    stage3[16],
    stage3[17],
    half_btf(-cospi[16], stage3[18], cospi[48], stage3[29], cos_bit),
    half_btf(-cospi[16], stage3[19], cospi[48], stage3[28], cos_bit),
    half_btf(-cospi[48], stage3[20], -cospi[16], stage3[27], cos_bit),
    half_btf(-cospi[48], stage3[21], -cospi[16], stage3[26], cos_bit),
    stage3[22],
    stage3[23],
    stage3[24],
    stage3[25],
    half_btf(-cospi[16], stage3[21], cospi[48], stage3[26], cos_bit),
    half_btf(-cospi[16], stage3[20], cospi[48], stage3[27], cos_bit),
    half_btf(cospi[48], stage3[19], cospi[16], stage3[28], cos_bit),
    half_btf(cospi[48], stage3[18], cospi[16], stage3[29], cos_bit),
    stage3[30],
    stage3[31],
  ];

  let stage5 = [
    half_btf(cospi[32], stage4[0], cospi[32], stage4[1], cos_bit),
    half_btf(cospi[32], stage4[0], -cospi[32], stage4[1], cos_bit),
    half_btf(cospi[48], stage4[2], cospi[16], stage4[3], cos_bit),
    half_btf(-cospi[16], stage4[2], cospi[48], stage4[3], cos_bit),
    stage4[4] + stage4[5],
    stage4[4] - stage4[5],
    stage4[7] - stage4[6],
    stage4[7] + stage4[6],
    stage4[8],
    half_btf(-cospi[16], stage4[9], cospi[48], stage4[14], cos_bit),
    half_btf(-cospi[48], stage4[10], -cospi[16], stage4[13], cos_bit),
    stage4[11],
    stage4[12],
    half_btf(-cospi[16], stage4[10], cospi[48], stage4[13], cos_bit),
    half_btf(cospi[48], stage4[9], cospi[16], stage4[14], cos_bit),
    stage4[15],
    stage4[16] + stage4[19],
    stage4[17] + stage4[18],
    stage4[17] - stage4[18],
    stage4[16] - stage4[19],
    stage4[23] - stage4[20],
    stage4[22] - stage4[21],
    stage4[22] + stage4[21],
    stage4[23] + stage4[20],
    stage4[24] + stage4[27],
    stage4[25] + stage4[26],
    stage4[25] - stage4[26],
    stage4[24] - stage4[27],
    stage4[31] - stage4[28],
    stage4[30] - stage4[29],
    stage4[30] + stage4[29],
    stage4[31] + stage4[28],
  ];

  let stage6 = [
    stage5[0],
    stage5[1],
    stage5[2],
    stage5[3],
    half_btf(cospi[56], stage5[4], cospi[8], stage5[7], cos_bit),
    half_btf(cospi[24], stage5[5], cospi[40], stage5[6], cos_bit),
    half_btf(-cospi[40], stage5[5], cospi[24], stage5[6], cos_bit),
    half_btf(-cospi[8], stage5[4], cospi[56], stage5[7], cos_bit),
    stage5[8] + stage5[9],
    stage5[8] - stage5[9],
    stage5[11] - stage5[10],
    stage5[11] + stage5[10],
    stage5[12] + stage5[13],
    stage5[12] - stage5[13],
    stage5[15] - stage5[14],
    stage5[15] + stage5[14],
    stage5[16],
    half_btf(-cospi[8], stage5[17], cospi[56], stage5[30], cos_bit),
    half_btf(-cospi[56], stage5[18], -cospi[8], stage5[29], cos_bit),
    stage5[19],
    stage5[20],
    half_btf(-cospi[40], stage5[21], cospi[24], stage5[26], cos_bit),
    half_btf(-cospi[24], stage5[22], -cospi[40], stage5[25], cos_bit),
    stage5[23],
    stage5[24],
    half_btf(-cospi[40], stage5[22], cospi[24], stage5[25], cos_bit),
    half_btf(cospi[24], stage5[21], cospi[40], stage5[26], cos_bit),
    stage5[27],
    stage5[28],
    half_btf(-cospi[8], stage5[18], cospi[56], stage5[29], cos_bit),
    half_btf(cospi[56], stage5[17], cospi[8], stage5[30], cos_bit),
    stage5[31],
  ];

  let stage7 = [
    stage6[0],
    stage6[1],
    stage6[2],
    stage6[3],
    stage6[4],
    stage6[5],
    stage6[6],
    stage6[7],
    half_btf(cospi[60], stage6[8], cospi[4], stage6[15], cos_bit),
    half_btf(cospi[28], stage6[9], cospi[36], stage6[14], cos_bit),
    half_btf(cospi[44], stage6[10], cospi[20], stage6[13], cos_bit),
    half_btf(cospi[12], stage6[11], cospi[52], stage6[12], cos_bit),
    half_btf(-cospi[52], stage6[11], cospi[12], stage6[12], cos_bit),
    half_btf(-cospi[20], stage6[10], cospi[44], stage6[13], cos_bit),
    half_btf(-cospi[36], stage6[9], cospi[28], stage6[14], cos_bit),
    half_btf(-cospi[4], stage6[8], cospi[60], stage6[15], cos_bit),
    stage6[16] + stage6[17],
    stage6[16] - stage6[17],
    stage6[19] - stage6[18],
    stage6[19] + stage6[18],
    stage6[20] + stage6[21],
    stage6[20] - stage6[21],
    stage6[23] - stage6[22],
    stage6[23] + stage6[22],
    stage6[24] + stage6[25],
    stage6[24] - stage6[25],
    stage6[27] - stage6[26],
    stage6[27] + stage6[26],
    stage6[28] + stage6[29],
    stage6[28] - stage6[29],
    stage6[31] - stage6[30],
    stage6[31] + stage6[30],
  ];

  let stage8 = [
    stage7[0],
    stage7[1],
    stage7[2],
    stage7[3],
    stage7[4],
    stage7[5],
    stage7[6],
    stage7[7],
    stage7[8],
    stage7[9],
    stage7[10],
    stage7[11],
    stage7[12],
    stage7[13],
    stage7[14],
    stage7[15],
    half_btf(cospi[62], stage7[16], cospi[2], stage7[31], cos_bit),
    half_btf(cospi[30], stage7[17], cospi[34], stage7[30], cos_bit),
    half_btf(cospi[46], stage7[18], cospi[18], stage7[29], cos_bit),
    half_btf(cospi[14], stage7[19], cospi[50], stage7[28], cos_bit),
    half_btf(cospi[54], stage7[20], cospi[10], stage7[27], cos_bit),
    half_btf(cospi[22], stage7[21], cospi[42], stage7[26], cos_bit),
    half_btf(cospi[38], stage7[22], cospi[26], stage7[25], cos_bit),
    half_btf(cospi[6], stage7[23], cospi[58], stage7[24], cos_bit),
    half_btf(-cospi[58], stage7[23], cospi[6], stage7[24], cos_bit),
    half_btf(-cospi[26], stage7[22], cospi[38], stage7[25], cos_bit),
    half_btf(-cospi[42], stage7[21], cospi[22], stage7[26], cos_bit),
    half_btf(-cospi[10], stage7[20], cospi[54], stage7[27], cos_bit),
    half_btf(-cospi[50], stage7[19], cospi[14], stage7[28], cos_bit),
    half_btf(-cospi[18], stage7[18], cospi[46], stage7[29], cos_bit),
    half_btf(-cospi[34], stage7[17], cospi[30], stage7[30], cos_bit),
    half_btf(-cospi[2], stage7[16], cospi[62], stage7[31], cos_bit),
  ];

  let stage9 = [
    stage8[0],
    stage8[16],
    stage8[8],
    stage8[24],
    stage8[4],
    stage8[20],
    stage8[12],
    stage8[28],
    stage8[2],
    stage8[18],
    stage8[10],
    stage8[26],
    stage8[6],
    stage8[22],
    stage8[14],
    stage8[30],
    stage8[1],
    stage8[17],
    stage8[9],
    stage8[25],
    stage8[5],
    stage8[21],
    stage8[13],
    stage8[29],
    stage8[3],
    stage8[19],
    stage8[11],
    stage8[27],
    stage8[7],
    stage8[23],
    stage8[15],
    stage8[31],
  ];

  arr.copy_from_slice(&stage9);
}

// In-place 32-point inverse DCT
fn inv_dct32(arr: &mut [i32], cos_bit: u32, range_bits: u32) {
  assert!(arr.len() == 32);

  let cospi = cospi_arr(cos_bit);

  let stage1 = [
    arr[0],
    arr[16],
    arr[8],
    arr[24],
    arr[4],
    arr[20],
    arr[12],
    arr[28],
    arr[2],
    arr[18],
    arr[10],
    arr[26],
    arr[6],
    arr[22],
    arr[14],
    arr[30],
    arr[1],
    arr[17],
    arr[9],
    arr[25],
    arr[5],
    arr[21],
    arr[13],
    arr[29],
    arr[3],
    arr[19],
    arr[11],
    arr[27],
    arr[7],
    arr[23],
    arr[15],
    arr[31],
  ];

  let stage2 = [
    stage1[0],
    stage1[1],
    stage1[2],
    stage1[3],
    stage1[4],
    stage1[5],
    stage1[6],
    stage1[7],
    stage1[8],
    stage1[9],
    stage1[10],
    stage1[11],
    stage1[12],
    stage1[13],
    stage1[14],
    stage1[15],
    half_btf(cospi[62], stage1[16], -cospi[2], stage1[31], cos_bit),
    half_btf(cospi[30], stage1[17], -cospi[34], stage1[30], cos_bit),
    half_btf(cospi[46], stage1[18], -cospi[18], stage1[29], cos_bit),
    half_btf(cospi[14], stage1[19], -cospi[50], stage1[28], cos_bit),
    half_btf(cospi[54], stage1[20], -cospi[10], stage1[27], cos_bit),
    half_btf(cospi[22], stage1[21], -cospi[42], stage1[26], cos_bit),
    half_btf(cospi[38], stage1[22], -cospi[26], stage1[25], cos_bit),
    half_btf(cospi[6], stage1[23], -cospi[58], stage1[24], cos_bit),
    half_btf(cospi[58], stage1[23], cospi[6], stage1[24], cos_bit),
    half_btf(cospi[26], stage1[22], cospi[38], stage1[25], cos_bit),
    half_btf(cospi[42], stage1[21], cospi[22], stage1[26], cos_bit),
    half_btf(cospi[10], stage1[20], cospi[54], stage1[27], cos_bit),
    half_btf(cospi[50], stage1[19], cospi[14], stage1[28], cos_bit),
    half_btf(cospi[18], stage1[18], cospi[46], stage1[29], cos_bit),
    half_btf(cospi[34], stage1[17], cospi[30], stage1[30], cos_bit),
    half_btf(cospi[2], stage1[16], cospi[62], stage1[31], cos_bit),
  ];

  let stage3 = [
    stage2[0],
    stage2[1],
    stage2[2],
    stage2[3],
    stage2[4],
    stage2[5],
    stage2[6],
    stage2[7],
    half_btf(cospi[60], stage2[8], -cospi[4], stage2[15], cos_bit),
    half_btf(cospi[28], stage2[9], -cospi[36], stage2[14], cos_bit),
    half_btf(cospi[44], stage2[10], -cospi[20], stage2[13], cos_bit),
    half_btf(cospi[12], stage2[11], -cospi[52], stage2[12], cos_bit),
    half_btf(cospi[52], stage2[11], cospi[12], stage2[12], cos_bit),
    half_btf(cospi[20], stage2[10], cospi[44], stage2[13], cos_bit),
    half_btf(cospi[36], stage2[9], cospi[28], stage2[14], cos_bit),
    half_btf(cospi[4], stage2[8], cospi[60], stage2[15], cos_bit),
    clamp_value(stage2[16] + stage2[17], range_bits),
    clamp_value(stage2[16] - stage2[17], range_bits),
    clamp_value(stage2[19] - stage2[18], range_bits),
    clamp_value(stage2[18] + stage2[19], range_bits),
    clamp_value(stage2[20] + stage2[21], range_bits),
    clamp_value(stage2[20] - stage2[21], range_bits),
    clamp_value(stage2[23] - stage2[22], range_bits),
    clamp_value(stage2[22] + stage2[23], range_bits),
    clamp_value(stage2[24] + stage2[25], range_bits),
    clamp_value(stage2[24] - stage2[25], range_bits),
    clamp_value(stage2[27] - stage2[26], range_bits),
    clamp_value(stage2[26] + stage2[27], range_bits),
    clamp_value(stage2[28] + stage2[29], range_bits),
    clamp_value(stage2[28] - stage2[29], range_bits),
    clamp_value(stage2[31] - stage2[30], range_bits),
    clamp_value(stage2[30] + stage2[31], range_bits),
  ];

  let stage4 = [
    stage3[0],
    stage3[1],
    stage3[2],
    stage3[3],
    half_btf(cospi[56], stage3[4], -cospi[8], stage3[7], cos_bit),
    half_btf(cospi[24], stage3[5], -cospi[40], stage3[6], cos_bit),
    half_btf(cospi[40], stage3[5], cospi[24], stage3[6], cos_bit),
    half_btf(cospi[8], stage3[4], cospi[56], stage3[7], cos_bit),
    clamp_value(stage3[8] + stage3[9], range_bits),
    clamp_value(stage3[8] - stage3[9], range_bits),
    clamp_value(stage3[11] - stage3[10], range_bits),
    clamp_value(stage3[10] + stage3[11], range_bits),
    clamp_value(stage3[12] + stage3[13], range_bits),
    clamp_value(stage3[12] - stage3[13], range_bits),
    clamp_value(stage3[15] - stage3[14], range_bits),
    clamp_value(stage3[14] + stage3[15], range_bits),
    stage3[16],
    half_btf(-cospi[8], stage3[17], cospi[56], stage3[30], cos_bit),
    half_btf(-cospi[56], stage3[18], -cospi[8], stage3[29], cos_bit),
    stage3[19],
    stage3[20],
    half_btf(-cospi[40], stage3[21], cospi[24], stage3[26], cos_bit),
    half_btf(-cospi[24], stage3[22], -cospi[40], stage3[25], cos_bit),
    stage3[23],
    stage3[24],
    half_btf(-cospi[40], stage3[22], cospi[24], stage3[25], cos_bit),
    half_btf(cospi[24], stage3[21], cospi[40], stage3[26], cos_bit),
    stage3[27],
    stage3[28],
    half_btf(-cospi[8], stage3[18], cospi[56], stage3[29], cos_bit),
    half_btf(cospi[56], stage3[17], cospi[8], stage3[30], cos_bit),
    stage3[31],
  ];

  let stage5 = [
    half_btf(cospi[32], stage4[0], cospi[32], stage4[1], cos_bit),
    half_btf(cospi[32], stage4[0], -cospi[32], stage4[1], cos_bit),
    half_btf(cospi[48], stage4[2], -cospi[16], stage4[3], cos_bit),
    half_btf(cospi[16], stage4[2], cospi[48], stage4[3], cos_bit),
    clamp_value(stage4[4] + stage4[5], range_bits),
    clamp_value(stage4[4] - stage4[5], range_bits),
    clamp_value(stage4[7] - stage4[6], range_bits),
    clamp_value(stage4[6] + stage4[7], range_bits),
    stage4[8],
    half_btf(-cospi[16], stage4[9], cospi[48], stage4[14], cos_bit),
    half_btf(-cospi[48], stage4[10], -cospi[16], stage4[13], cos_bit),
    stage4[11],
    stage4[12],
    half_btf(-cospi[16], stage4[10], cospi[48], stage4[13], cos_bit),
    half_btf(cospi[48], stage4[9], cospi[16], stage4[14], cos_bit),
    stage4[15],
    clamp_value(stage4[16] + stage4[19], range_bits),
    clamp_value(stage4[17] + stage4[18], range_bits),
    clamp_value(stage4[17] - stage4[18], range_bits),
    clamp_value(stage4[16] - stage4[19], range_bits),
    clamp_value(stage4[23] - stage4[20], range_bits),
    clamp_value(stage4[22] - stage4[21], range_bits),
    clamp_value(stage4[21] + stage4[22], range_bits),
    clamp_value(stage4[20] + stage4[23], range_bits),
    clamp_value(stage4[24] + stage4[27], range_bits),
    clamp_value(stage4[25] + stage4[26], range_bits),
    clamp_value(stage4[25] - stage4[26], range_bits),
    clamp_value(stage4[24] - stage4[27], range_bits),
    clamp_value(stage4[31] - stage4[28], range_bits),
    clamp_value(stage4[30] - stage4[29], range_bits),
    clamp_value(stage4[29] + stage4[30], range_bits),
    clamp_value(stage4[28] + stage4[31], range_bits),
  ];

  let stage6 = [
    clamp_value(stage5[0] + stage5[3], range_bits),
    clamp_value(stage5[1] + stage5[2], range_bits),
    clamp_value(stage5[1] - stage5[2], range_bits),
    clamp_value(stage5[0] - stage5[3], range_bits),
    stage5[4],
    half_btf(-cospi[32], stage5[5], cospi[32], stage5[6], cos_bit),
    half_btf(cospi[32], stage5[5], cospi[32], stage5[6], cos_bit),
    stage5[7],
    clamp_value(stage5[8] + stage5[11], range_bits),
    clamp_value(stage5[9] + stage5[10], range_bits),
    clamp_value(stage5[9] - stage5[10], range_bits),
    clamp_value(stage5[8] - stage5[11], range_bits),
    clamp_value(stage5[15] - stage5[12], range_bits),
    clamp_value(stage5[14] - stage5[13], range_bits),
    clamp_value(stage5[13] + stage5[14], range_bits),
    clamp_value(stage5[12] + stage5[15], range_bits),
    stage5[16],
    stage5[17],
    half_btf(-cospi[16], stage5[18], cospi[48], stage5[29], cos_bit),
    half_btf(-cospi[16], stage5[19], cospi[48], stage5[28], cos_bit),
    half_btf(-cospi[48], stage5[20], -cospi[16], stage5[27], cos_bit),
    half_btf(-cospi[48], stage5[21], -cospi[16], stage5[26], cos_bit),
    stage5[22],
    stage5[23],
    stage5[24],
    stage5[25],
    half_btf(-cospi[16], stage5[21], cospi[48], stage5[26], cos_bit),
    half_btf(-cospi[16], stage5[20], cospi[48], stage5[27], cos_bit),
    half_btf(cospi[48], stage5[19], cospi[16], stage5[28], cos_bit),
    half_btf(cospi[48], stage5[18], cospi[16], stage5[29], cos_bit),
    stage5[30],
    stage5[31],
  ];

  let stage7 = [
    clamp_value(stage6[0] + stage6[7], range_bits),
    clamp_value(stage6[1] + stage6[6], range_bits),
    clamp_value(stage6[2] + stage6[5], range_bits),
    clamp_value(stage6[3] + stage6[4], range_bits),
    clamp_value(stage6[3] - stage6[4], range_bits),
    clamp_value(stage6[2] - stage6[5], range_bits),
    clamp_value(stage6[1] - stage6[6], range_bits),
    clamp_value(stage6[0] - stage6[7], range_bits),
    stage6[8],
    stage6[9],
    half_btf(-cospi[32], stage6[10], cospi[32], stage6[13], cos_bit),
    half_btf(-cospi[32], stage6[11], cospi[32], stage6[12], cos_bit),
    half_btf(cospi[32], stage6[11], cospi[32], stage6[12], cos_bit),
    half_btf(cospi[32], stage6[10], cospi[32], stage6[13], cos_bit),
    stage6[14],
    stage6[15],
    clamp_value(stage6[16] + stage6[23], range_bits),
    clamp_value(stage6[17] + stage6[22], range_bits),
    clamp_value(stage6[18] + stage6[21], range_bits),
    clamp_value(stage6[19] + stage6[20], range_bits),
    clamp_value(stage6[19] - stage6[20], range_bits),
    clamp_value(stage6[18] - stage6[21], range_bits),
    clamp_value(stage6[17] - stage6[22], range_bits),
    clamp_value(stage6[16] - stage6[23], range_bits),
    clamp_value(stage6[31] - stage6[24], range_bits),
    clamp_value(stage6[30] - stage6[25], range_bits),
    clamp_value(stage6[29] - stage6[26], range_bits),
    clamp_value(stage6[28] - stage6[27], range_bits),
    clamp_value(stage6[27] + stage6[28], range_bits),
    clamp_value(stage6[26] + stage6[29], range_bits),
    clamp_value(stage6[25] + stage6[30], range_bits),
    clamp_value(stage6[24] + stage6[31], range_bits),
  ];

  let stage8 = [
    clamp_value(stage7[0] + stage7[15], range_bits),
    clamp_value(stage7[1] + stage7[14], range_bits),
    clamp_value(stage7[2] + stage7[13], range_bits),
    clamp_value(stage7[3] + stage7[12], range_bits),
    clamp_value(stage7[4] + stage7[11], range_bits),
    clamp_value(stage7[5] + stage7[10], range_bits),
    clamp_value(stage7[6] + stage7[9], range_bits),
    clamp_value(stage7[7] + stage7[8], range_bits),
    clamp_value(stage7[7] - stage7[8], range_bits),
    clamp_value(stage7[6] - stage7[9], range_bits),
    clamp_value(stage7[5] - stage7[10], range_bits),
    clamp_value(stage7[4] - stage7[11], range_bits),
    clamp_value(stage7[3] - stage7[12], range_bits),
    clamp_value(stage7[2] - stage7[13], range_bits),
    clamp_value(stage7[1] - stage7[14], range_bits),
    clamp_value(stage7[0] - stage7[15], range_bits),
    stage7[16],
    stage7[17],
    stage7[18],
    stage7[19],
    half_btf(-cospi[32], stage7[20], cospi[32], stage7[27], cos_bit),
    half_btf(-cospi[32], stage7[21], cospi[32], stage7[26], cos_bit),
    half_btf(-cospi[32], stage7[22], cospi[32], stage7[25], cos_bit),
    half_btf(-cospi[32], stage7[23], cospi[32], stage7[24], cos_bit),
    half_btf(cospi[32], stage7[23], cospi[32], stage7[24], cos_bit),
    half_btf(cospi[32], stage7[22], cospi[32], stage7[25], cos_bit),
    half_btf(cospi[32], stage7[21], cospi[32], stage7[26], cos_bit),
    half_btf(cospi[32], stage7[20], cospi[32], stage7[27], cos_bit),
    stage7[28],
    stage7[29],
    stage7[30],
    stage7[31],
  ];

  let stage9 = [
    clamp_value(stage8[0] + stage8[31], range_bits),
    clamp_value(stage8[1] + stage8[30], range_bits),
    clamp_value(stage8[2] + stage8[29], range_bits),
    clamp_value(stage8[3] + stage8[28], range_bits),
    clamp_value(stage8[4] + stage8[27], range_bits),
    clamp_value(stage8[5] + stage8[26], range_bits),
    clamp_value(stage8[6] + stage8[25], range_bits),
    clamp_value(stage8[7] + stage8[24], range_bits),
    clamp_value(stage8[8] + stage8[23], range_bits),
    clamp_value(stage8[9] + stage8[22], range_bits),
    clamp_value(stage8[10] + stage8[21], range_bits),
    clamp_value(stage8[11] + stage8[20], range_bits),
    clamp_value(stage8[12] + stage8[19], range_bits),
    clamp_value(stage8[13] + stage8[18], range_bits),
    clamp_value(stage8[14] + stage8[17], range_bits),
    clamp_value(stage8[15] + stage8[16], range_bits),
    clamp_value(stage8[15] - stage8[16], range_bits),
    clamp_value(stage8[14] - stage8[17], range_bits),
    clamp_value(stage8[13] - stage8[18], range_bits),
    clamp_value(stage8[12] - stage8[19], range_bits),
    clamp_value(stage8[11] - stage8[20], range_bits),
    clamp_value(stage8[10] - stage8[21], range_bits),
    clamp_value(stage8[9] - stage8[22], range_bits),
    clamp_value(stage8[8] - stage8[23], range_bits),
    clamp_value(stage8[7] - stage8[24], range_bits),
    clamp_value(stage8[6] - stage8[25], range_bits),
    clamp_value(stage8[5] - stage8[26], range_bits),
    clamp_value(stage8[4] - stage8[27], range_bits),
    clamp_value(stage8[3] - stage8[28], range_bits),
    clamp_value(stage8[2] - stage8[29], range_bits),
    clamp_value(stage8[1] - stage8[30], range_bits),
    clamp_value(stage8[0] - stage8[31], range_bits),
  ];

  arr.copy_from_slice(&stage9);
}

// In-place 8-point forward ADST
fn fwd_adst8(arr: &mut [i32], cos_bit: u32) {
  assert!(arr.len() == 8);

  let cospi = cospi_arr(cos_bit);

  let stage1 = [
    arr[0],
    -arr[7],
    -arr[3],
    arr[4],
    -arr[1],
    arr[6],
    arr[2],
    -arr[5],
  ];

  let stage2 = [
    stage1[0],
    stage1[1],
    half_btf(cospi[32], stage1[2], cospi[32], stage1[3], cos_bit),
    half_btf(cospi[32], stage1[2], -cospi[32], stage1[3], cos_bit),
    stage1[4],
    stage1[5],
    half_btf(cospi[32], stage1[6], cospi[32], stage1[7], cos_bit),
    half_btf(cospi[32], stage1[6], -cospi[32], stage1[7], cos_bit),
  ];

  let stage3 = [
    stage2[0] + stage2[2],
    stage2[1] + stage2[3],
    stage2[0] - stage2[2],
    stage2[1] - stage2[3],
    stage2[4] + stage2[6],
    stage2[5] + stage2[7],
    stage2[4] - stage2[6],
    stage2[5] - stage2[7],
  ];

  let stage4 = [
    stage3[0],
    stage3[1],
    stage3[2],
    stage3[3],
    half_btf(cospi[16], stage3[4], cospi[48], stage3[5], cos_bit),
    half_btf(cospi[48], stage3[4], -cospi[16], stage3[5], cos_bit),
    half_btf(-cospi[48], stage3[6], cospi[16], stage3[7], cos_bit),
    half_btf(cospi[16], stage3[6], cospi[48], stage3[7], cos_bit),
  ];

  let stage5 = [
    stage4[0] + stage4[4],
    stage4[1] + stage4[5],
    stage4[2] + stage4[6],
    stage4[3] + stage4[7],
    stage4[0] - stage4[4],
    stage4[1] - stage4[5],
    stage4[2] - stage4[6],
    stage4[3] - stage4[7],
  ];

  let stage6 = [
    half_btf(cospi[4], stage5[0], cospi[60], stage5[1], cos_bit),
    half_btf(cospi[60], stage5[0], -cospi[4], stage5[1], cos_bit),
    half_btf(cospi[20], stage5[2], cospi[44], stage5[3], cos_bit),
    half_btf(cospi[44], stage5[2], -cospi[20], stage5[3], cos_bit),
    half_btf(cospi[36], stage5[4], cospi[28], stage5[5], cos_bit),
    half_btf(cospi[28], stage5[4], -cospi[36], stage5[5], cos_bit),
    half_btf(cospi[52], stage5[6], cospi[12], stage5[7], cos_bit),
    half_btf(cospi[12], stage5[6], -cospi[52], stage5[7], cos_bit),
  ];

  let stage7 = [
    stage6[1],
    stage6[6],
    stage6[3],
    stage6[4],
    stage6[5],
    stage6[2],
    stage6[7],
    stage6[0],
  ];

  arr.copy_from_slice(&stage7);
}

// In-place 8-point inverse ADST
fn inv_adst8(arr: &mut [i32], cos_bit: u32, range_bits: u32) {
  assert!(arr.len() == 8);

  let cospi = cospi_arr(cos_bit);

  let stage1 = [
    arr[7],
    arr[0],
    arr[5],
    arr[2],
    arr[3],
    arr[4],
    arr[1],
    arr[6],
  ];

  let stage2 = [
    half_btf(cospi[4], stage1[0], cospi[60], stage1[1], cos_bit),
    half_btf(cospi[60], stage1[0], -cospi[4], stage1[1], cos_bit),
    half_btf(cospi[20], stage1[2], cospi[44], stage1[3], cos_bit),
    half_btf(cospi[44], stage1[2], -cospi[20], stage1[3], cos_bit),
    half_btf(cospi[36], stage1[4], cospi[28], stage1[5], cos_bit),
    half_btf(cospi[28], stage1[4], -cospi[36], stage1[5], cos_bit),
    half_btf(cospi[52], stage1[6], cospi[12], stage1[7], cos_bit),
    half_btf(cospi[12], stage1[6], -cospi[52], stage1[7], cos_bit),
  ];

  let stage3 = [
    clamp_value(stage2[0] + stage2[4], range_bits),
    clamp_value(stage2[1] + stage2[5], range_bits),
    clamp_value(stage2[2] + stage2[6], range_bits),
    clamp_value(stage2[3] + stage2[7], range_bits),
    clamp_value(stage2[0] - stage2[4], range_bits),
    clamp_value(stage2[1] - stage2[5], range_bits),
    clamp_value(stage2[2] - stage2[6], range_bits),
    clamp_value(stage2[3] - stage2[7], range_bits),
  ];

  let stage4 = [
    stage3[0],
    stage3[1],
    stage3[2],
    stage3[3],
    half_btf(cospi[16], stage3[4], cospi[48], stage3[5], cos_bit),
    half_btf(cospi[48], stage3[4], -cospi[16], stage3[5], cos_bit),
    half_btf(-cospi[48], stage3[6], cospi[16], stage3[7], cos_bit),
    half_btf(cospi[16], stage3[6], cospi[48], stage3[7], cos_bit),
  ];

  let stage5 = [
    clamp_value(stage4[0] + stage4[2], range_bits),
    clamp_value(stage4[1] + stage4[3], range_bits),
    clamp_value(stage4[0] - stage4[2], range_bits),
    clamp_value(stage4[1] - stage4[3], range_bits),
    clamp_value(stage4[4] + stage4[6], range_bits),
    clamp_value(stage4[5] + stage4[7], range_bits),
    clamp_value(stage4[4] - stage4[6], range_bits),
    clamp_value(stage4[5] - stage4[7], range_bits),
  ];

  let stage6 = [
    stage5[0],
    stage5[1],
    half_btf(cospi[32], stage5[2], cospi[32], stage5[3], cos_bit),
    half_btf(cospi[32], stage5[2], -cospi[32], stage5[3], cos_bit),
    stage5[4],
    stage5[5],
    half_btf(cospi[32], stage5[6], cospi[32], stage5[7], cos_bit),
    half_btf(cospi[32], stage5[6], -cospi[32], stage5[7], cos_bit),
  ];

  let stage7 = [
    stage6[0],
    -stage6[4],
    stage6[6],
    -stage6[2],
    stage6[3],
    -stage6[7],
    stage6[5],
    -stage6[1],
  ];

  arr.copy_from_slice(&stage7);
}

// In-place 16-point forward ADST
fn fwd_adst16(arr: &mut [i32], cos_bit: u32) {
  assert!(arr.len() == 16);

  let cospi = cospi_arr(cos_bit);

  let stage1 = [
    arr[0],
    -arr[15],
    -arr[7],
    arr[8],
    -arr[3],
    arr[12],
    arr[4],
    -arr[11],
    -arr[1],
    arr[14],
    arr[6],
    -arr[9],
    arr[2],
    -arr[13],
    -arr[5],
    arr[10],
  ];

  let stage2 = [
    stage1[0],
    stage1[1],
    half_btf(cospi[32], stage1[2], cospi[32], stage1[3], cos_bit),
    half_btf(cospi[32], stage1[2], -cospi[32], stage1[3], cos_bit),
    stage1[4],
    stage1[5],
    half_btf(cospi[32], stage1[6], cospi[32], stage1[7], cos_bit),
    half_btf(cospi[32], stage1[6], -cospi[32], stage1[7], cos_bit),
    stage1[8],
    stage1[9],
    half_btf(cospi[32], stage1[10], cospi[32], stage1[11], cos_bit),
    half_btf(cospi[32], stage1[10], -cospi[32], stage1[11], cos_bit),
    stage1[12],
    stage1[13],
    half_btf(cospi[32], stage1[14], cospi[32], stage1[15], cos_bit),
    half_btf(cospi[32], stage1[14], -cospi[32], stage1[15], cos_bit),
  ];

  let stage3 = [
    stage2[0] + stage2[2],
    stage2[1] + stage2[3],
    stage2[0] - stage2[2],
    stage2[1] - stage2[3],
    stage2[4] + stage2[6],
    stage2[5] + stage2[7],
    stage2[4] - stage2[6],
    stage2[5] - stage2[7],
    stage2[8] + stage2[10],
    stage2[9] + stage2[11],
    stage2[8] - stage2[10],
    stage2[9] - stage2[11],
    stage2[12] + stage2[14],
    stage2[13] + stage2[15],
    stage2[12] - stage2[14],
    stage2[13] - stage2[15],
  ];

  let stage4 = [
    stage3[0],
    stage3[1],
    stage3[2],
    stage3[3],
    half_btf(cospi[16], stage3[4], cospi[48], stage3[5], cos_bit),
    half_btf(cospi[48], stage3[4], -cospi[16], stage3[5], cos_bit),
    half_btf(-cospi[48], stage3[6], cospi[16], stage3[7], cos_bit),
    half_btf(cospi[16], stage3[6], cospi[48], stage3[7], cos_bit),
    stage3[8],
    stage3[9],
    stage3[10],
    stage3[11],
    half_btf(cospi[16], stage3[12], cospi[48], stage3[13], cos_bit),
    half_btf(cospi[48], stage3[12], -cospi[16], stage3[13], cos_bit),
    half_btf(-cospi[48], stage3[14], cospi[16], stage3[15], cos_bit),
    half_btf(cospi[16], stage3[14], cospi[48], stage3[15], cos_bit),
  ];

  let stage5 = [
    stage4[0] + stage4[4],
    stage4[1] + stage4[5],
    stage4[2] + stage4[6],
    stage4[3] + stage4[7],
    stage4[0] - stage4[4],
    stage4[1] - stage4[5],
    stage4[2] - stage4[6],
    stage4[3] - stage4[7],
    stage4[8] + stage4[12],
    stage4[9] + stage4[13],
    stage4[10] + stage4[14],
    stage4[11] + stage4[15],
    stage4[8] - stage4[12],
    stage4[9] - stage4[13],
    stage4[10] - stage4[14],
    stage4[11] - stage4[15],
  ];

  let stage6 = [
    stage5[0],
    stage5[1],
    stage5[2],
    stage5[3],
    stage5[4],
    stage5[5],
    stage5[6],
    stage5[7],
    half_btf(cospi[8], stage5[8], cospi[56], stage5[9], cos_bit),
    half_btf(cospi[56], stage5[8], -cospi[8], stage5[9], cos_bit),
    half_btf(cospi[40], stage5[10], cospi[24], stage5[11], cos_bit),
    half_btf(cospi[24], stage5[10], -cospi[40], stage5[11], cos_bit),
    half_btf(-cospi[56], stage5[12], cospi[8], stage5[13], cos_bit),
    half_btf(cospi[8], stage5[12], cospi[56], stage5[13], cos_bit),
    half_btf(-cospi[24], stage5[14], cospi[40], stage5[15], cos_bit),
    half_btf(cospi[40], stage5[14], cospi[24], stage5[15], cos_bit),
  ];

  let stage7 = [
    stage6[0] + stage6[8],
    stage6[1] + stage6[9],
    stage6[2] + stage6[10],
    stage6[3] + stage6[11],
    stage6[4] + stage6[12],
    stage6[5] + stage6[13],
    stage6[6] + stage6[14],
    stage6[7] + stage6[15],
    stage6[0] - stage6[8],
    stage6[1] - stage6[9],
    stage6[2] - stage6[10],
    stage6[3] - stage6[11],
    stage6[4] - stage6[12],
    stage6[5] - stage6[13],
    stage6[6] - stage6[14],
    stage6[7] - stage6[15],
  ];

  let stage8 = [
    half_btf(cospi[2], stage7[0], cospi[62], stage7[1], cos_bit),
    half_btf(cospi[62], stage7[0], -cospi[2], stage7[1], cos_bit),
    half_btf(cospi[10], stage7[2], cospi[54], stage7[3], cos_bit),
    half_btf(cospi[54], stage7[2], -cospi[10], stage7[3], cos_bit),
    half_btf(cospi[18], stage7[4], cospi[46], stage7[5], cos_bit),
    half_btf(cospi[46], stage7[4], -cospi[18], stage7[5], cos_bit),
    half_btf(cospi[26], stage7[6], cospi[38], stage7[7], cos_bit),
    half_btf(cospi[38], stage7[6], -cospi[26], stage7[7], cos_bit),
    half_btf(cospi[34], stage7[8], cospi[30], stage7[9], cos_bit),
    half_btf(cospi[30], stage7[8], -cospi[34], stage7[9], cos_bit),
    half_btf(cospi[42], stage7[10], cospi[22], stage7[11], cos_bit),
    half_btf(cospi[22], stage7[10], -cospi[42], stage7[11], cos_bit),
    half_btf(cospi[50], stage7[12], cospi[14], stage7[13], cos_bit),
    half_btf(cospi[14], stage7[12], -cospi[50], stage7[13], cos_bit),
    half_btf(cospi[58], stage7[14], cospi[6], stage7[15], cos_bit),
    half_btf(cospi[6], stage7[14], -cospi[58], stage7[15], cos_bit),
  ];

  let stage9 = [
    stage8[1],
    stage8[14],
    stage8[3],
    stage8[12],
    stage8[5],
    stage8[10],
    stage8[7],
    stage8[8],
    stage8[9],
    stage8[6],
    stage8[11],
    stage8[4],
    stage8[13],
    stage8[2],
    stage8[15],
    stage8[0],
  ];

  arr.copy_from_slice(&stage9);
}

// In-place 16-point inverse ADST
fn inv_adst16(arr: &mut [i32], cos_bit: u32, range_bits: u32) {
  assert!(arr.len() == 16);

  let cospi = cospi_arr(cos_bit);

  let stage1 = [
    arr[15],
    arr[0],
    arr[13],
    arr[2],
    arr[11],
    arr[4],
    arr[9],
    arr[6],
    arr[7],
    arr[8],
    arr[5],
    arr[10],
    arr[3],
    arr[12],
    arr[1],
    arr[14],
  ];

  let stage2 = [
    half_btf(cospi[2], stage1[0], cospi[62], stage1[1], cos_bit),
    half_btf(cospi[62], stage1[0], -cospi[2], stage1[1], cos_bit),
    half_btf(cospi[10], stage1[2], cospi[54], stage1[3], cos_bit),
    half_btf(cospi[54], stage1[2], -cospi[10], stage1[3], cos_bit),
    half_btf(cospi[18], stage1[4], cospi[46], stage1[5], cos_bit),
    half_btf(cospi[46], stage1[4], -cospi[18], stage1[5], cos_bit),
    half_btf(cospi[26], stage1[6], cospi[38], stage1[7], cos_bit),
    half_btf(cospi[38], stage1[6], -cospi[26], stage1[7], cos_bit),
    half_btf(cospi[34], stage1[8], cospi[30], stage1[9], cos_bit),
    half_btf(cospi[30], stage1[8], -cospi[34], stage1[9], cos_bit),
    half_btf(cospi[42], stage1[10], cospi[22], stage1[11], cos_bit),
    half_btf(cospi[22], stage1[10], -cospi[42], stage1[11], cos_bit),
    half_btf(cospi[50], stage1[12], cospi[14], stage1[13], cos_bit),
    half_btf(cospi[14], stage1[12], -cospi[50], stage1[13], cos_bit),
    half_btf(cospi[58], stage1[14], cospi[6], stage1[15], cos_bit),
    half_btf(cospi[6], stage1[14], -cospi[58], stage1[15], cos_bit),
  ];

  let stage3 = [
    clamp_value(stage2[0] + stage2[8], range_bits),
    clamp_value(stage2[1] + stage2[9], range_bits),
    clamp_value(stage2[2] + stage2[10], range_bits),
    clamp_value(stage2[3] + stage2[11], range_bits),
    clamp_value(stage2[4] + stage2[12], range_bits),
    clamp_value(stage2[5] + stage2[13], range_bits),
    clamp_value(stage2[6] + stage2[14], range_bits),
    clamp_value(stage2[7] + stage2[15], range_bits),
    clamp_value(stage2[0] - stage2[8], range_bits),
    clamp_value(stage2[1] - stage2[9], range_bits),
    clamp_value(stage2[2] - stage2[10], range_bits),
    clamp_value(stage2[3] - stage2[11], range_bits),
    clamp_value(stage2[4] - stage2[12], range_bits),
    clamp_value(stage2[5] - stage2[13], range_bits),
    clamp_value(stage2[6] - stage2[14], range_bits),
    clamp_value(stage2[7] - stage2[15], range_bits),
  ];

  let stage4 = [
    stage3[0],
    stage3[1],
    stage3[2],
    stage3[3],
    stage3[4],
    stage3[5],
    stage3[6],
    stage3[7],
    half_btf(cospi[8], stage3[8], cospi[56], stage3[9], cos_bit),
    half_btf(cospi[56], stage3[8], -cospi[8], stage3[9], cos_bit),
    half_btf(cospi[40], stage3[10], cospi[24], stage3[11], cos_bit),
    half_btf(cospi[24], stage3[10], -cospi[40], stage3[11], cos_bit),
    half_btf(-cospi[56], stage3[12], cospi[8], stage3[13], cos_bit),
    half_btf(cospi[8], stage3[12], cospi[56], stage3[13], cos_bit),
    half_btf(-cospi[24], stage3[14], cospi[40], stage3[15], cos_bit),
    half_btf(cospi[40], stage3[14], cospi[24], stage3[15], cos_bit),
  ];

  let stage5 = [
    clamp_value(stage4[0] + stage4[4], range_bits),
    clamp_value(stage4[1] + stage4[5], range_bits),
    clamp_value(stage4[2] + stage4[6], range_bits),
    clamp_value(stage4[3] + stage4[7], range_bits),
    clamp_value(stage4[0] - stage4[4], range_bits),
    clamp_value(stage4[1] - stage4[5], range_bits),
    clamp_value(stage4[2] - stage4[6], range_bits),
    clamp_value(stage4[3] - stage4[7], range_bits),
    clamp_value(stage4[8] + stage4[12], range_bits),
    clamp_value(stage4[9] + stage4[13], range_bits),
    clamp_value(stage4[10] + stage4[14], range_bits),
    clamp_value(stage4[11] + stage4[15], range_bits),
    clamp_value(stage4[8] - stage4[12], range_bits),
    clamp_value(stage4[9] - stage4[13], range_bits),
    clamp_value(stage4[10] - stage4[14], range_bits),
    clamp_value(stage4[11] - stage4[15], range_bits),
  ];

  let stage6 = [
    stage5[0],
    stage5[1],
    stage5[2],
    stage5[3],
    half_btf(cospi[16], stage5[4], cospi[48], stage5[5], cos_bit),
    half_btf(cospi[48], stage5[4], -cospi[16], stage5[5], cos_bit),
    half_btf(-cospi[48], stage5[6], cospi[16], stage5[7], cos_bit),
    half_btf(cospi[16], stage5[6], cospi[48], stage5[7], cos_bit),
    stage5[8],
    stage5[9],
    stage5[10],
    stage5[11],
    half_btf(cospi[16], stage5[12], cospi[48], stage5[13], cos_bit),
    half_btf(cospi[48], stage5[12], -cospi[16], stage5[13], cos_bit),
    half_btf(-cospi[48], stage5[14], cospi[16], stage5[15], cos_bit),
    half_btf(cospi[16], stage5[14], cospi[48], stage5[15], cos_bit),
  ];

  let stage7 = [
    clamp_value(stage6[0] + stage6[2], range_bits),
    clamp_value(stage6[1] + stage6[3], range_bits),
    clamp_value(stage6[0] - stage6[2], range_bits),
    clamp_value(stage6[1] - stage6[3], range_bits),
    clamp_value(stage6[4] + stage6[6], range_bits),
    clamp_value(stage6[5] + stage6[7], range_bits),
    clamp_value(stage6[4] - stage6[6], range_bits),
    clamp_value(stage6[5] - stage6[7], range_bits),
    clamp_value(stage6[8] + stage6[10], range_bits),
    clamp_value(stage6[9] + stage6[11], range_bits),
    clamp_value(stage6[8] - stage6[10], range_bits),
    clamp_value(stage6[9] - stage6[11], range_bits),
    clamp_value(stage6[12] + stage6[14], range_bits),
    clamp_value(stage6[13] + stage6[15], range_bits),
    clamp_value(stage6[12] - stage6[14], range_bits),
    clamp_value(stage6[13] - stage6[15], range_bits),
  ];

  let stage8 = [
    stage7[0],
    stage7[1],
    half_btf(cospi[32], stage7[2], cospi[32], stage7[3], cos_bit),
    half_btf(cospi[32], stage7[2], -cospi[32], stage7[3], cos_bit),
    stage7[4],
    stage7[5],
    half_btf(cospi[32], stage7[6], cospi[32], stage7[7], cos_bit),
    half_btf(cospi[32], stage7[6], -cospi[32], stage7[7], cos_bit),
    stage7[8],
    stage7[9],
    half_btf(cospi[32], stage7[10], cospi[32], stage7[11], cos_bit),
    half_btf(cospi[32], stage7[10], -cospi[32], stage7[11], cos_bit),
    stage7[12],
    stage7[13],
    half_btf(cospi[32], stage7[14], cospi[32], stage7[15], cos_bit),
    half_btf(cospi[32], stage7[14], -cospi[32], stage7[15], cos_bit),
  ];

  let stage9 = [
    stage8[0],
    -stage8[8],
    stage8[12],
    -stage8[4],
    stage8[6],
    -stage8[14],
    stage8[10],
    -stage8[2],
    stage8[3],
    -stage8[11],
    stage8[15],
    -stage8[7],
    stage8[5],
    -stage8[13],
    stage8[9],
    -stage8[1],
  ];

  arr.copy_from_slice(&stage9);
}

type FwdTxfm1D = fn(&mut [i32], u32);
type InvTxfm1D = fn(&mut [i32], u32, u32);

fn fwd_txfm_1d(kind: TxfmKind, tx_size: TxSize) -> FwdTxfm1D {
  match (kind, tx_size) {
    (TxfmKind::DCT, TxSize::TX_4X4) => fwd_dct4,
    (TxfmKind::DCT, TxSize::TX_8X8) => fwd_dct8,
    (TxfmKind::DCT, TxSize::TX_16X16) => fwd_dct16,
    (TxfmKind::DCT, TxSize::TX_32X32) => fwd_dct32,
    (TxfmKind::ADST, TxSize::TX_4X4) => fwd_adst4,
    (TxfmKind::ADST, TxSize::TX_8X8) => fwd_adst8,
    (TxfmKind::ADST, TxSize::TX_16X16) => fwd_adst16,
    (TxfmKind::ADST, TxSize::TX_32X32) => panic!("No 32-point ADST"),
  }
}

fn inv_txfm_1d(kind: TxfmKind, tx_size: TxSize) -> InvTxfm1D {
  match (kind, tx_size) {
    (TxfmKind::DCT, TxSize::TX_4X4) => inv_dct4,
    (TxfmKind::DCT, TxSize::TX_8X8) => inv_dct8,
    (TxfmKind::DCT, TxSize::TX_16X16) => inv_dct16,
    (TxfmKind::DCT, TxSize::TX_32X32) => inv_dct32,
    (TxfmKind::ADST, TxSize::TX_4X4) => inv_adst4,
    (TxfmKind::ADST, TxSize::TX_8X8) => inv_adst8,
    (TxfmKind::ADST, TxSize::TX_16X16) => inv_adst16,
    (TxfmKind::ADST, TxSize::TX_32X32) => panic!("No 32-point ADST"),
  }
}

// Perform a 2D forward transform composed of two 1D transforms
// C = col transform (applied first)
// R = row transform (applied second)
// The output is 8x the orthonormal transform, or 4x for 32x32 blocks
pub fn fwd_txfm2d(residual: &mut Array2D<i32>, tx_size: TxSize, tx_type: TxType, bd: u32) {
  let n = tx_size.width();
  assert!(residual.rows() == n);
  assert!(residual.cols() == n);
  assert!(tx_type.is_valid_for(tx_size));

  let txsz_idx = tx_size.index();
  let shift = &fwd_txfm_shift[txsz_idx];
  let cos_bit_col = fwd_cos_bit_col[txsz_idx];
  let cos_bit_row = fwd_cos_bit_row[txsz_idx];
  let col_txfm = fwd_txfm_1d(tx_type.col_kind(), tx_size);
  let row_txfm = fwd_txfm_1d(tx_type.row_kind(), tx_size);

  // Column transforms
  let mut transposed = residual.transpose();
  for j in 0..n {
    let col = &mut transposed[j];
    round_shift_array(col, -shift[0]);
    col_txfm(col, cos_bit_col);
    round_shift_array(col, -shift[1]);
    clamp_array(col, bd + 8);
  }

  // Row transforms
  transposed.transpose_into(residual);
  for i in 0..n {
    let row = &mut residual[i];
    row_txfm(row, cos_bit_row);
    round_shift_array(row, -shift[2]);
  }
}

// Perform a 2D inverse transform, leaving the reconstructed residual in `coeffs`
// R = row transform (applied first)
// C = col transform (applied second)
pub fn inv_txfm2d(coeffs: &mut Array2D<i32>, tx_size: TxSize, tx_type: TxType, bd: u32) {
  let n = tx_size.width();
  assert!(coeffs.rows() == n);
  assert!(coeffs.cols() == n);
  assert!(tx_type.is_valid_for(tx_size));

  let shift = &inv_txfm_shift[tx_size.index()];
  let range_row = max(bd + 8, 16);
  let range_col = max(bd + 6, 16);
  let row_txfm = inv_txfm_1d(tx_type.row_kind(), tx_size);
  let col_txfm = inv_txfm_1d(tx_type.col_kind(), tx_size);

  // Row transforms
  for i in 0..n {
    let row = &mut coeffs[i];
    clamp_array(row, bd + 8);
    row_txfm(row, INV_COS_BIT, range_row);
    round_shift_array(row, -shift[0]);
  }

  // Column transforms
  let mut transposed = coeffs.transpose();
  for j in 0..n {
    let col = &mut transposed[j];
    clamp_array(col, range_col);
    col_txfm(col, INV_COS_BIT, range_col);
    round_shift_array(col, -shift[1]);
  }

  transposed.transpose_into(coeffs);
}

// Inverse transform `coeffs` and add the result onto the prediction in `dst`
pub fn inv_txfm2d_add(coeffs: &Array2D<i32>, dst: &mut Array2D<u16>, tx_size: TxSize, tx_type: TxType, bd: u32) {
  let n = tx_size.width();
  assert!(dst.rows() == n);
  assert!(dst.cols() == n);

  let mut residual = coeffs.clone();
  inv_txfm2d(&mut residual, tx_size, tx_type, bd);

  for i in 0..n {
    for j in 0..n {
      dst[i][j] = clip_pixel(dst[i][j] as i32 + residual[i][j], bd);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::{Rng, SeedableRng};
  use std::f64::consts::PI;

  fn valid_types(tx_size: TxSize) -> Vec<TxType> {
    TxType::ALL.into_iter().filter(|t| t.is_valid_for(tx_size)).collect()
  }

  fn random_residual(rng: &mut StdRng, n: usize, limit: i32) -> Array2D<i32> {
    Array2D::new_with(n, n, |_, _| rng.gen_range(-limit..=limit))
  }

  // Orthonormal basis vectors, basis[k][i]
  fn float_basis(kind: TxfmKind, n: usize) -> Vec<Vec<f64>> {
    (0..n).map(|k| {
      (0..n).map(|i| {
        let (i, k, nf) = (i as f64, k as f64, n as f64);
        match kind {
          TxfmKind::DCT => {
            let ck = if k == 0.0 { (1.0 / nf).sqrt() } else { (2.0 / nf).sqrt() };
            ck * (PI * (2.0 * i + 1.0) * k / (2.0 * nf)).cos()
          },
          TxfmKind::ADST if n == 4 => {
            (2.0 / 3.0) * (PI * (2.0 * k + 1.0) * (i + 1.0) / 9.0).sin()
          },
          TxfmKind::ADST => {
            (2.0 / nf).sqrt() * (PI * (2.0 * i + 1.0) * (2.0 * k + 1.0) / (4.0 * nf)).sin()
          },
        }
      }).collect()
    }).collect()
  }

  #[test]
  fn round_trip_error_is_small() {
    let mut rng = StdRng::seed_from_u64(0x7866);
    for tx_size in TxSize::ALL {
      let n = tx_size.width();
      let tolerance = [1, 2, 2, 3][tx_size.index()];
      for tx_type in valid_types(tx_size) {
        for _ in 0..20 {
          let residual = random_residual(&mut rng, n, 255);
          let mut coeffs = residual.clone();
          fwd_txfm2d(&mut coeffs, tx_size, tx_type, 8);
          inv_txfm2d(&mut coeffs, tx_size, tx_type, 8);
          for i in 0..n {
            for j in 0..n {
              let err = (coeffs[i][j] - residual[i][j]).abs();
              assert!(err <= tolerance, "{:?} {:?}: error {} at ({}, {})", tx_size, tx_type, err, i, j);
            }
          }
        }
      }
    }
  }

  // Separable floating point transform: columns, then rows
  fn float_txfm2d(residual: &Array2D<i32>, col_basis: &[Vec<f64>], row_basis: &[Vec<f64>]) -> Vec<f64> {
    let n = residual.rows();
    let mut tmp = vec![0.0; n * n];
    for u in 0..n {
      for j in 0..n {
        tmp[u * n + j] = (0..n).map(|i| col_basis[u][i] * residual[i][j] as f64).sum();
      }
    }
    let mut out = vec![0.0; n * n];
    for u in 0..n {
      for v in 0..n {
        out[u * n + v] = (0..n).map(|j| row_basis[v][j] * tmp[u * n + j]).sum();
      }
    }
    out
  }

  #[test]
  fn forward_matches_float_reference() {
    let mut rng = StdRng::seed_from_u64(17);
    for tx_size in TxSize::ALL {
      let n = tx_size.width();
      let scale = if tx_size == TxSize::TX_32X32 { 4.0 } else { 8.0 };
      for tx_type in valid_types(tx_size) {
        let col_basis = float_basis(tx_type.col_kind(), n);
        let row_basis = float_basis(tx_type.row_kind(), n);
        for _ in 0..500 {
          let residual = random_residual(&mut rng, n, 255);
          let expected = float_txfm2d(&residual, &col_basis, &row_basis);
          let mut coeffs = residual.clone();
          fwd_txfm2d(&mut coeffs, tx_size, tx_type, 8);

          let total_err: f64 = coeffs.as_slice().iter().zip(expected.iter())
            .map(|(&c, &e)| (c as f64 - scale * e).abs())
            .sum();
          let avg_err = total_err / (n * n) as f64;
          assert!(avg_err <= 7.0, "{:?} {:?}: average error {}", tx_size, tx_type, avg_err);
        }
      }
    }
  }

  #[test]
  fn flat_block_has_only_dc() {
    for tx_size in TxSize::ALL {
      let n = tx_size.width();
      let mut coeffs = Array2D::new_with(n, n, |_, _| 10);
      fwd_txfm2d(&mut coeffs, tx_size, TxType::DCT_DCT, 8);
      let expected = if tx_size == TxSize::TX_32X32 { 4 * 32 * 10 } else { 8 * n as i32 * 10 };
      assert!((coeffs[0][0] - expected).abs() <= expected / 50);
      for i in 0..n {
        for j in 0..n {
          if i != 0 || j != 0 {
            assert_eq!(coeffs[i][j], 0);
          }
        }
      }
      inv_txfm2d(&mut coeffs, tx_size, TxType::DCT_DCT, 8);
      assert!(coeffs.as_slice().iter().all(|&v| v == 10));
    }
  }

  #[test]
  fn small_residual_is_exact() {
    let residual = Array2D::from_slice(4, 4, &[2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    let mut coeffs = residual.clone();
    fwd_txfm2d(&mut coeffs, TxSize::TX_4X4, TxType::DCT_DCT, 8);
    assert_eq!(coeffs.as_slice(), &[6, 7, 2, 0, 6, 7, 4, 1, 2, 4, 6, 5, -1, 1, 5, 5]);
    inv_txfm2d(&mut coeffs, TxSize::TX_4X4, TxType::DCT_DCT, 8);
    assert_eq!(coeffs, residual);
  }

  #[test]
  fn high_bitdepth_round_trip() {
    let mut rng = StdRng::seed_from_u64(12);
    for tx_size in TxSize::ALL {
      let n = tx_size.width();
      let residual = random_residual(&mut rng, n, 4095);
      let mut coeffs = residual.clone();
      fwd_txfm2d(&mut coeffs, tx_size, TxType::DCT_DCT, 12);
      inv_txfm2d(&mut coeffs, tx_size, TxType::DCT_DCT, 12);
      for i in 0..n {
        for j in 0..n {
          assert!((coeffs[i][j] - residual[i][j]).abs() <= 8);
        }
      }
    }
  }

  #[test]
  fn add_clips_to_pixel_range() {
    let mut coeffs = Array2D::new_with(8, 8, |_, _| 100);
    fwd_txfm2d(&mut coeffs, TxSize::TX_8X8, TxType::ADST_ADST, 8);
    let mut dst = Array2D::new_with(8, 8, |_, _| 200u16);
    inv_txfm2d_add(&coeffs, &mut dst, TxSize::TX_8X8, TxType::ADST_ADST, 8);
    assert!(dst.as_slice().iter().all(|&p| p == 255));
  }
}
