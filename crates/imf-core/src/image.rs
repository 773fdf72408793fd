use crate::{Error, INTENSITY_MAX, INTENSITY_MIN};

/// Owned row-major image buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Image<T> {
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, Error> {
        let expected = width.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds an image from nested rows.
    ///
    /// Every row must have the same, non-zero length and there must be at
    /// least one row.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || rows.iter().any(|r| r.len() != width) {
            return Err(Error::EmptyOrNonRectangularImage);
        }

        let data = rows.into_iter().flatten().collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds an image by evaluating `f(x, y)` at every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn as_view(&self) -> ImageView<'_, T> {
        ImageView {
            width: self.width,
            height: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

impl<T: Clone> Image<T> {
    pub fn new_fill(width: usize, height: usize, value: T) -> Self {
        let len = width.checked_mul(height).expect("image size overflow");
        Self {
            width,
            height,
            data: vec![value; len],
        }
    }
}

/// Borrowed image with an element stride between row starts.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a, T> {
    width: usize,
    height: usize,
    stride: usize,
    data: &'a [T],
}

impl<'a, T> ImageView<'a, T> {
    pub fn from_slice(
        width: usize,
        height: usize,
        stride: usize,
        data: &'a [T],
    ) -> Result<Self, Error> {
        if stride < width {
            return Err(Error::InvalidStride);
        }

        let min_len = min_required_len(width, height, stride).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() < min_len {
            return Err(Error::SizeMismatch {
                expected: min_len,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn row(&self, y: usize) -> &'a [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a [T]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y * self.stride + x;
        self.data.get(idx)
    }

    /// Returns a pixel reference without bounds checks.
    ///
    /// # Safety
    /// Caller must guarantee `x < self.width()` and `y < self.height()`.
    pub unsafe fn get_unchecked(&self, x: usize, y: usize) -> &'a T {
        // SAFETY: Caller guarantees `x < width` and `y < height`. With view
        // invariants this implies `idx` is in bounds of `data`.
        unsafe { self.data.get_unchecked(y * self.stride + x) }
    }

    pub fn is_contiguous(&self) -> bool {
        self.stride == self.width
    }

    pub fn as_contiguous_slice(&self) -> Option<&'a [T]> {
        if !self.is_contiguous() {
            return None;
        }
        let len = self.width * self.height;
        self.data.get(0..len)
    }

    /// Fails with [`Error::EmptyOrNonRectangularImage`] on a zero-sized view.
    pub fn ensure_non_empty(&self) -> Result<(), Error> {
        if self.is_empty() {
            return Err(Error::EmptyOrNonRectangularImage);
        }
        Ok(())
    }
}

impl<T: Copy> ImageView<'_, T> {
    /// Copies the view into a contiguous owned image.
    pub fn to_image(&self) -> Image<T> {
        self.map(|v| v)
    }

    /// Applies `f` to every pixel, producing a new contiguous image.
    pub fn map<U>(&self, mut f: impl FnMut(T) -> U) -> Image<U> {
        let out = match self.as_contiguous_slice() {
            Some(src) => src.iter().map(|&v| f(v)).collect(),
            None => {
                let mut out = Vec::with_capacity(self.width * self.height);
                for row in self.rows() {
                    out.extend(row.iter().map(|&v| f(v)));
                }
                out
            }
        };
        Image {
            width: self.width,
            height: self.height,
            data: out,
        }
    }

    /// Combines two equally-shaped views pixel by pixel.
    pub fn zip_map<U: Copy, V>(
        &self,
        other: &ImageView<'_, U>,
        mut f: impl FnMut(T, U) -> V,
    ) -> Result<Image<V>, Error> {
        if self.shape() != other.shape() {
            return Err(Error::shape_mismatch(self.shape(), other.shape()));
        }

        let out = match (self.as_contiguous_slice(), other.as_contiguous_slice()) {
            (Some(sa), Some(sb)) => sa.iter().zip(sb).map(|(&a, &b)| f(a, b)).collect(),
            _ => {
                let mut out = Vec::with_capacity(self.width * self.height);
                for (ra, rb) in self.rows().zip(other.rows()) {
                    out.extend(ra.iter().zip(rb.iter()).map(|(&a, &b)| f(a, b)));
                }
                out
            }
        };
        Ok(Image {
            width: self.width,
            height: self.height,
            data: out,
        })
    }
}

fn min_required_len(width: usize, height: usize, stride: usize) -> Option<usize> {
    if width == 0 || height == 0 {
        return Some(0);
    }

    let rows_before_last = height.checked_sub(1)?;
    let base = rows_before_last.checked_mul(stride)?;
    base.checked_add(width)
}

pub fn to_f32(img: &ImageView<'_, u8>) -> Image<f32> {
    img.map(f32::from)
}

/// Final quantization step of every fusion rule: clamp to `[0, 255]` and
/// round to nearest. NaN maps to 0.
pub fn clamp_to_u8(img: &ImageView<'_, f32>) -> Image<u8> {
    img.map(|v| {
        if v.is_nan() {
            0
        } else {
            v.clamp(INTENSITY_MIN, INTENSITY_MAX).round() as u8
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{Image, ImageView, clamp_to_u8, to_f32};
    use crate::Error;

    #[test]
    fn view_indexing_with_stride() {
        let data = vec![1u8, 2, 3, 99, 4, 5, 6, 88];
        let view = ImageView::from_slice(3, 2, 4, &data).expect("valid view");

        assert_eq!(view.row(0), &[1, 2, 3]);
        assert_eq!(view.row(1), &[4, 5, 6]);
        assert_eq!(view.get(0, 1), Some(&4));
        assert_eq!(view.get(2, 1), Some(&6));
        assert_eq!(view.get(3, 1), None);
        assert!(!view.is_contiguous());
        assert!(view.as_contiguous_slice().is_none());

        let owned = view.to_image();
        assert_eq!(owned.data(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn strided_and_contiguous_views_combine_alike() {
        let padded = vec![
            1.0f32, 2.0, 3.0, -1.0, // row 0
            4.0, 5.0, 6.0, -1.0, // row 1
        ];
        let strided = ImageView::from_slice(3, 2, 4, &padded).expect("valid view");
        let dense = Image::from_vec(3, 2, vec![10.0f32, 20.0, 30.0, 40.0, 50.0, 60.0])
            .expect("valid");
        assert!(!strided.is_contiguous());
        assert!(dense.as_view().is_contiguous());

        let mixed = strided.zip_map(&dense.as_view(), |a, b| a + b).expect("same shape");
        let copied = strided.to_image();
        let both_dense = copied
            .as_view()
            .zip_map(&dense.as_view(), |a, b| a + b)
            .expect("same shape");
        assert_eq!(mixed, both_dense);
        assert_eq!(mixed.data(), &[11.0, 22.0, 33.0, 44.0, 55.0, 66.0]);
        assert_eq!(strided.map(|v| v * 2.0).data(), &[2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
    }

    #[test]
    fn from_rows_rejects_ragged_and_empty_input() {
        let img = Image::from_rows(vec![vec![1u8, 2], vec![3, 4], vec![5, 6]]).expect("valid");
        assert_eq!(img.shape(), (2, 3));
        assert_eq!(img.data(), &[1, 2, 3, 4, 5, 6]);

        assert_eq!(
            Image::from_rows(vec![vec![1u8, 2], vec![3]]).unwrap_err(),
            Error::EmptyOrNonRectangularImage
        );
        assert_eq!(
            Image::<u8>::from_rows(Vec::new()).unwrap_err(),
            Error::EmptyOrNonRectangularImage
        );
        assert_eq!(
            Image::<u8>::from_rows(vec![Vec::new()]).unwrap_err(),
            Error::EmptyOrNonRectangularImage
        );
    }

    #[test]
    fn from_vec_checks_length() {
        assert_eq!(
            Image::from_vec(3, 2, vec![0u8; 5]).unwrap_err(),
            Error::SizeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn zip_map_requires_matching_shapes() {
        let a = Image::new_fill(2, 2, 1.0f32);
        let b = Image::new_fill(2, 2, 2.0f32);
        let sum = a.as_view().zip_map(&b.as_view(), |x, y| x + y).expect("same shape");
        assert_eq!(sum.data(), &[3.0; 4]);

        let c = Image::new_fill(3, 2, 0.0f32);
        assert_eq!(
            a.as_view().zip_map(&c.as_view(), |x, y| x + y).unwrap_err(),
            Error::shape_mismatch((2, 2), (3, 2))
        );
    }

    #[test]
    fn clamp_to_u8_rounds_and_saturates() {
        let img = Image::from_vec(5, 1, vec![-12.0f32, 0.4, 127.5, 254.6, 1e6]).expect("valid");
        assert_eq!(clamp_to_u8(&img.as_view()).data(), &[0, 0, 128, 255, 255]);

        let nan = Image::new_fill(1, 1, f32::NAN);
        assert_eq!(clamp_to_u8(&nan.as_view()).data(), &[0]);
    }

    #[test]
    fn convert_to_f32() {
        let img8 = Image::from_vec(2, 2, vec![1u8, 2, 3, 4]).expect("valid image");
        let out8 = to_f32(&img8.as_view());
        assert_eq!(out8.data(), &[1.0, 2.0, 3.0, 4.0]);
    }
}
