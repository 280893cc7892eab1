use bytemuck::Zeroable;
use bytemuck::allocation::zeroed_slice_box;

use std::ops::{Index, IndexMut};

// Two-dimensional array type, stored in raster order
#[derive(Clone, Debug, PartialEq)]
pub struct Array2D<T> {
  rows: usize,
  cols: usize,
  stride: usize,
  data: Box<[T]>,
}

impl<T> Array2D<T> {
  pub fn rows(&self) -> usize {
    self.rows
  }

  pub fn cols(&self) -> usize {
    self.cols
  }

  // Whole backing store, row by row. Only meaningful when stride == cols,
  // which holds for every array built by this module
  pub fn as_slice(&self) -> &[T] {
    &self.data
  }

  pub fn as_mut_slice(&mut self) -> &mut [T] {
    &mut self.data
  }

  pub fn fill_with<F: FnMut(usize, usize) -> T>(&mut self, mut f: F) {
    for i in 0..self.rows {
      for j in 0..self.cols {
        self[i][j] = f(i, j);
      }
    }
  }
}

impl<T: Zeroable> Array2D<T> {
  pub fn zeroed(rows: usize, cols: usize) -> Self {
    let stride = cols;
    let num_elements = match rows.checked_mul(stride) {
      Some(n) => n,
      None => panic!("Array2D size overflow ({} x {})", rows, cols),
    };
    let data = zeroed_slice_box(num_elements);

    Self {
      rows: rows,
      cols: cols,
      stride: stride,
      data: data
    }
  }

  pub fn new_with<F: FnMut(usize, usize) -> T>(rows: usize, cols: usize, f: F) -> Self {
    let mut result = Array2D::zeroed(rows, cols);
    result.fill_with(f);
    return result;
  }

  // Build from a raster-order slice
  pub fn from_slice(rows: usize, cols: usize, values: &[T]) -> Self
  where T: Copy {
    assert!(values.len() == rows * cols);
    Self::new_with(rows, cols, |i, j| values[i * cols + j])
  }
}

impl<T: Zeroable + Copy> Array2D<T> {
  pub fn transpose_into(&self, dst: &mut Self) {
    assert!(self.rows == dst.cols);
    assert!(self.cols == dst.rows);
    for i in 0..self.cols {
      for j in 0..self.rows {
        dst[i][j] = self[j][i];
      }
    }
  }

  pub fn transpose(&self) -> Self {
    let mut dst = Array2D::zeroed(self.cols, self.rows);
    self.transpose_into(&mut dst);
    return dst;
  }

  pub fn map<F: FnMut(usize, usize, T) -> T>(&mut self, mut f: F) {
    for i in 0..self.rows {
      for j in 0..self.cols {
        self[i][j] = f(i, j, self[i][j]);
      }
    }
  }
}

// Allow indexing by array[row][col]
// array[row] returns a slice covering the whole row
impl<T> Index<usize> for Array2D<T> {
  type Output = [T];
  fn index(&self, index: usize) -> &[T] {
    if index >= self.rows {
      panic!("Array2D row index out of bounds (index {} vs. size {})", index, self.rows);
    }
    let start_index = index * self.stride;
    let end_index = start_index + self.cols;
    &self.data[start_index .. end_index]
  }
}

impl<T> IndexMut<usize> for Array2D<T> {
  fn index_mut(&mut self, index: usize) -> &mut [T] {
    if index >= self.rows {
      panic!("Array2D row index out of bounds (index {} vs. size {})", index, self.rows);
    }
    let start_index = index * self.stride;
    let end_index = start_index + self.cols;
    &mut self.data[start_index .. end_index]
  }
}
