use byteorder::{BigEndian, ByteOrder};

// Number of bytes used to signal the size of every tile except the last one
pub const TILE_SIZE_BYTES: usize = 4;

pub fn clamp<T: PartialOrd>(value: T, low: T, high: T) -> T {
  if value < low {
    low
  } else if value > high {
    high
  } else {
    value
  }
}

// Divide by 2^n, rounding halves up
pub fn round2(x: i32, n: u32) -> i32 {
  if n == 0 {
    return x;
  }
  (x + (1 << (n - 1))) >> n
}

pub fn round2_u32(x: u32, n: u32) -> u32 {
  if n == 0 {
    return x;
  }
  (x + (1 << (n - 1))) >> n
}

pub fn clip_pixel(value: i32, bd: u32) -> u16 {
  clamp(value, 0, (1 << bd) - 1) as u16
}

// Append a big-endian tile size marker
pub fn put_tile_size(buf: &mut Vec<u8>, size: usize) {
  assert!(size <= u32::MAX as usize);
  let mut marker = [0u8; TILE_SIZE_BYTES];
  BigEndian::write_u32(&mut marker, size as u32);
  buf.extend_from_slice(&marker);
}

// Read a big-endian tile size marker from the start of `data`, if present
pub fn get_tile_size(data: &[u8]) -> Option<usize> {
  if data.len() < TILE_SIZE_BYTES {
    return None;
  }
  Some(BigEndian::read_u32(&data[..TILE_SIZE_BYTES]) as usize)
}
