//! Dense matrices with exact entries.
//!
//! Eigenvalue queries only ever see small matrices, so entries live in one
//! row-major vector and every algorithm is the plain cubic one.

use std::ops::{Add, Index, IndexMut};

use tertius_poly::DensePoly;
use tertius_rings::traits::{Field, Ring};

/// A `rows x cols` matrix in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<R> {
    entries: Vec<R>,
    rows: usize,
    cols: usize,
}

impl<R: Ring> DenseMatrix<R> {
    /// The zero matrix.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            entries: vec![R::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Builds a matrix from its rows. An empty list gives the `0 x 0` matrix.
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        assert!(rows.iter().all(|r| r.len() == cols), "ragged rows");
        Self {
            rows: rows.len(),
            cols,
            entries: rows.into_iter().flatten().collect(),
        }
    }

    /// The `n x n` identity.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        m.add_diagonal(&R::one());
        m
    }

    /// Number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Whether rows == cols.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entrywise image under `f`.
    #[must_use]
    pub fn map<S: Ring>(&self, f: impl Fn(&R) -> S) -> DenseMatrix<S> {
        DenseMatrix {
            entries: self.entries.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Matrix product `self * other`.
    ///
    /// # Panics
    ///
    /// Panics on a dimension mismatch.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        assert_eq!(self.cols, other.rows, "dimension mismatch");
        let mut out = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = &self[(i, k)];
                if a.is_zero() {
                    continue;
                }
                for j in 0..other.cols {
                    out[(i, j)] = out[(i, j)].clone() + a.clone() * other[(k, j)].clone();
                }
            }
        }
        out
    }

    /// Sum of the diagonal.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    #[must_use]
    pub fn trace(&self) -> R {
        assert!(self.is_square(), "trace of a non-square matrix");
        (0..self.rows).fold(R::zero(), |acc, i| acc + self[(i, i)].clone())
    }

    /// Exchanges rows `i` and `j`.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for k in 0..self.cols {
            self.entries.swap(i * self.cols + k, j * self.cols + k);
        }
    }

    fn add_diagonal(&mut self, c: &R) {
        for i in 0..self.rows.min(self.cols) {
            self[(i, i)] = self[(i, i)].clone() + c.clone();
        }
    }
}

impl<R: Field> DenseMatrix<R> {
    /// Determinant by Gaussian elimination with row swaps.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    #[must_use]
    pub fn det(&self) -> R {
        assert!(self.is_square(), "determinant of a non-square matrix");
        let n = self.rows;
        let mut m = self.clone();
        let mut det = R::one();
        for col in 0..n {
            let Some(p) = (col..n).find(|&r| !m[(r, col)].is_zero()) else {
                return R::zero();
            };
            if p != col {
                m.swap_rows(p, col);
                det = -det;
            }
            let pivot = m[(col, col)].clone();
            for row in col + 1..n {
                let factor = m[(row, col)].field_div(&pivot);
                if factor.is_zero() {
                    continue;
                }
                for k in col..n {
                    m[(row, k)] = m[(row, k)].clone() - factor.clone() * m[(col, k)].clone();
                }
            }
            det = det * pivot;
        }
        det
    }

    /// Monic characteristic polynomial `det(xI - A)` by Faddeev-LeVerrier.
    ///
    /// Step `k` divides by `k`, so the field must have characteristic zero
    /// or larger than the dimension.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    #[must_use]
    pub fn charpoly(&self) -> DensePoly<R> {
        assert!(self.is_square(), "characteristic polynomial of a non-square matrix");
        let n = self.rows;
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = R::one();
        // M_1 = I, c_{n-k} = -tr(A M_k) / k, M_{k+1} = A M_k + c_{n-k} I
        let mut m = Self::identity(n);
        for k in 1..=n {
            let mut am = self.mul(&m);
            let c = -am.trace().field_div(&R::one().mul_by_scalar(k as i64));
            am.add_diagonal(&c);
            coeffs[n - k] = c;
            m = am;
        }
        DensePoly::new(coeffs)
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (i, j): (usize, usize)) -> &R {
        &self.entries[i * self.cols + j]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut R {
        &mut self.entries[i * self.cols + j]
    }
}

impl<R: Ring> Add for &DenseMatrix<R> {
    type Output = DenseMatrix<R>;

    fn add(self, other: Self) -> DenseMatrix<R> {
        assert_eq!((self.rows, self.cols), (other.rows, other.cols), "dimension mismatch");
        DenseMatrix {
            entries: self
                .entries
                .iter()
                .zip(&other.entries)
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}
