use crate::{Matrix, Quat, Scalar, Vector};

/// A fixed-size, contiguous aggregate of [`Scalar`]s.
///
/// [`Vector`], [`Matrix`] and [`Quat`] all implement this trait, which lets generic code (most
/// notably the componentwise machinery in [`cw`]) treat them uniformly as flat sequences of
/// [`SIZE`] elements.
///
/// Implementations guarantee that the elements are stored contiguously and without padding, so
/// `size_of::<Self>()` equals `SIZE * size_of::<Self::Elem>()`. For matrices, the linear element
/// order is the storage order (column-major, see [`Matrix::linear_index`]).
///
/// [`cw`]: crate::cw
/// [`SIZE`]: Self::SIZE
pub trait Tuple: Sized {
    /// The scalar type of the elements.
    type Elem: Scalar;

    /// The number of elements.
    const SIZE: usize;

    /// Creates a tuple by invoking a closure with each linear element index.
    fn from_fn(f: impl FnMut(usize) -> Self::Elem) -> Self;

    /// Returns the element at linear index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`SIZE`](Self::SIZE).
    fn at(&self, index: usize) -> Self::Elem;

    /// Returns all elements as a slice, in linear order.
    fn as_slice(&self) -> &[Self::Elem];

    /// Returns all elements as a mutable slice, in linear order.
    fn as_mut_slice(&mut self) -> &mut [Self::Elem];

    /// Creates a tuple with every element set to `value`.
    fn splat(value: Self::Elem) -> Self {
        Self::from_fn(|_| value)
    }

    /// Creates a tuple by reading its elements from the front of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` holds fewer than [`SIZE`](Self::SIZE) elements.
    fn from_slice(slice: &[Self::Elem]) -> Self {
        assert!(
            slice.len() >= Self::SIZE,
            "slice holds fewer elements than the tuple"
        );
        Self::from_fn(|i| slice[i])
    }
}

impl<T: Scalar, const N: usize> Tuple for Vector<T, N> {
    type Elem = T;

    const SIZE: usize = N;

    fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Vector::from_fn(f)
    }

    fn at(&self, index: usize) -> T {
        self[index]
    }

    fn as_slice(&self) -> &[T] {
        Vector::as_slice(self)
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        Vector::as_mut_slice(self)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Tuple for Matrix<T, R, C> {
    type Elem = T;

    const SIZE: usize = R * C;

    fn from_fn(mut f: impl FnMut(usize) -> T) -> Self {
        Matrix::from_fn(|row, col| f(Self::linear_index(row, col)))
    }

    fn at(&self, index: usize) -> T {
        Matrix::as_slice(self)[index]
    }

    fn as_slice(&self) -> &[T] {
        Matrix::as_slice(self)
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        Matrix::as_mut_slice(self)
    }
}

impl<T: Scalar> Tuple for Quat<T> {
    type Elem = T;

    const SIZE: usize = 4;

    fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Quat::from_vec(Vector::from_fn(f))
    }

    fn at(&self, index: usize) -> T {
        self.as_vec()[index]
    }

    fn as_slice(&self) -> &[T] {
        self.as_vec().as_slice()
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self.as_mut_vec().as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    use std::mem;

    use crate::{vec3, Mat2x3, Matrix, Quat, Vec3f};

    use super::*;

    #[test]
    fn sizes_and_layout() {
        assert_eq!(<Vec3f as Tuple>::SIZE, 3);
        assert_eq!(<Mat2x3<i32> as Tuple>::SIZE, 6);
        assert_eq!(<Quat<f32> as Tuple>::SIZE, 4);

        assert_eq!(mem::size_of::<Vec3f>(), 3 * mem::size_of::<f32>());
        assert_eq!(mem::size_of::<Mat2x3<i32>>(), 6 * mem::size_of::<i32>());
        assert_eq!(mem::size_of::<Quat<f32>>(), 4 * mem::size_of::<f32>());
    }

    #[test]
    fn matrix_linear_order_is_storage_order() {
        let mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat.as_slice(), &[1, 4, 2, 5, 3, 6]);

        for index in 0..<Mat2x3<i32> as Tuple>::SIZE {
            let row = Mat2x3::<i32>::row_of(index);
            let col = Mat2x3::<i32>::col_of(index);
            assert_eq!(Mat2x3::<i32>::linear_index(row, col), index);
            assert_eq!(mat.at(index), mat[(row, col)]);
        }

        let rebuilt = <Mat2x3<i32> as Tuple>::from_fn(|i| mat.at(i));
        assert_eq!(rebuilt, mat);
    }

    #[test]
    fn generators() {
        let v: Vec3f = Tuple::splat(2.0);
        assert_eq!(v, vec3(2.0, 2.0, 2.0));

        let m: Matrix<i32, 2, 2> = Tuple::splat(7);
        assert_eq!(m, Matrix::from_rows([[7, 7], [7, 7]]));

        let q: Quat<f32> = Tuple::splat(0.5);
        assert_eq!(q, Quat::from_components(0.5, 0.5, 0.5, 0.5));

        let v = Vec3f::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v, vec3(1.0, 2.0, 3.0));

        let q = Quat::<f32>::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(q.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    #[should_panic = "fewer elements"]
    fn from_slice_rejects_short_slices() {
        Vec3f::from_slice(&[1.0, 2.0]);
    }

    #[test]
    fn mutation_through_slice() {
        let mut mat = Matrix::from_rows([[1, 2], [3, 4]]);
        Tuple::as_mut_slice(&mut mat)[1] = 30;
        assert_eq!(mat, Matrix::from_rows([[1, 2], [30, 4]]));
    }
}
