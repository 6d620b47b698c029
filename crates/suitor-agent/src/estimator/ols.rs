//! Ordinary least squares with an intercept.
//!
//! Training tables are tiny (a handful of rows, at most six columns) and
//! usually rank deficient, so the fit returns the minimum-norm solution:
//! the centered normal matrix is eigen-decomposed with cyclic Jacobi
//! rotations and inverted on its non-null eigenvalues only.

const MAX_SWEEPS: usize = 64;
const OFF_DIAGONAL_EPS: f64 = 1e-24;
const RELATIVE_RANK_TOL: f64 = 1e-12;

/// A fitted linear model `y = intercept + coefficients · x`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearModel {
    /// Fits `targets` on `rows`.
    ///
    /// Returns `None` when there are no rows, when a row's width differs from
    /// the first row's, or when the row and target counts disagree.
    #[must_use]
    pub fn fit(rows: &[Vec<f64>], targets: &[f64]) -> Option<Self> {
        let n = rows.len();
        if n == 0 || targets.len() != n {
            return None;
        }
        let dim = rows[0].len();
        if rows.iter().any(|row| row.len() != dim) {
            return None;
        }

        let count = n as f64;
        let mut x_mean = vec![0.0; dim];
        for row in rows {
            for (mean, x) in x_mean.iter_mut().zip(row) {
                *mean += x / count;
            }
        }
        let y_mean = targets.iter().sum::<f64>() / count;

        // Centered normal equations: (XᵀX) β = Xᵀy.
        let mut gram = vec![0.0; dim * dim];
        let mut moment = vec![0.0; dim];
        for (row, y) in rows.iter().zip(targets) {
            let centered: Vec<f64> = row.iter().zip(&x_mean).map(|(x, m)| x - m).collect();
            let dy = y - y_mean;
            for i in 0..dim {
                moment[i] += centered[i] * dy;
                for j in 0..dim {
                    gram[i * dim + j] += centered[i] * centered[j];
                }
            }
        }

        let coefficients = pseudo_solve(gram, &moment, dim);
        let intercept = y_mean - dot(&coefficients, &x_mean);
        Some(Self {
            intercept,
            coefficients,
        })
    }

    /// Fitted intercept.
    #[must_use]
    pub const fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Fitted coefficients, one per column.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Prediction for one row. Missing trailing columns count as zero.
    #[must_use]
    pub fn predict(&self, x: &[f64]) -> f64 {
        self.intercept + dot(&self.coefficients, x)
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Minimum-norm solution of `a x = b` for symmetric positive semi-definite `a`.
fn pseudo_solve(a: Vec<f64>, b: &[f64], dim: usize) -> Vec<f64> {
    let (eigenvalues, vectors) = symmetric_eigen(a, dim);
    let largest = eigenvalues.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let mut x = vec![0.0; dim];
    if largest <= f64::EPSILON {
        return x;
    }
    let tolerance = largest * RELATIVE_RANK_TOL;
    for k in 0..dim {
        let lambda = eigenvalues[k];
        if lambda <= tolerance {
            continue;
        }
        let projection: f64 = (0..dim).map(|i| vectors[i * dim + k] * b[i]).sum();
        let scale = projection / lambda;
        for i in 0..dim {
            x[i] += vectors[i * dim + k] * scale;
        }
    }
    x
}

/// Cyclic Jacobi eigen-decomposition of a row-major symmetric matrix.
///
/// Returns the eigenvalues and a row-major matrix whose columns are the
/// matching eigenvectors.
fn symmetric_eigen(mut a: Vec<f64>, dim: usize) -> (Vec<f64>, Vec<f64>) {
    let mut v = vec![0.0; dim * dim];
    for i in 0..dim {
        v[i * dim + i] = 1.0;
    }

    for _ in 0..MAX_SWEEPS {
        let mut off = 0.0;
        for p in 0..dim {
            for q in (p + 1)..dim {
                off += a[p * dim + q] * a[p * dim + q];
            }
        }
        if off <= OFF_DIAGONAL_EPS {
            break;
        }

        for p in 0..dim {
            for q in (p + 1)..dim {
                let apq = a[p * dim + q];
                if apq.abs() <= f64::MIN_POSITIVE {
                    continue;
                }
                let theta = (a[q * dim + q] - a[p * dim + p]) / (2.0 * apq);
                let t = if theta >= 0.0 {
                    1.0 / (theta + theta.mul_add(theta, 1.0).sqrt())
                } else {
                    -1.0 / (-theta + theta.mul_add(theta, 1.0).sqrt())
                };
                let c = 1.0 / t.mul_add(t, 1.0).sqrt();
                let s = t * c;

                for k in 0..dim {
                    let akp = a[k * dim + p];
                    let akq = a[k * dim + q];
                    a[k * dim + p] = c * akp - s * akq;
                    a[k * dim + q] = s * akp + c * akq;
                }
                for k in 0..dim {
                    let apk = a[p * dim + k];
                    let aqk = a[q * dim + k];
                    a[p * dim + k] = c * apk - s * aqk;
                    a[q * dim + k] = s * apk + c * aqk;
                }
                for k in 0..dim {
                    let vkp = v[k * dim + p];
                    let vkq = v[k * dim + q];
                    v[k * dim + p] = c * vkp - s * vkq;
                    v[k * dim + q] = s * vkp + c * vkq;
                }
            }
        }
    }

    let eigenvalues = (0..dim).map(|i| a[i * dim + i]).collect();
    (eigenvalues, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn exact_line_is_recovered() {
        // y = 1 + 2a - 3b
        let rows = vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![2.0, 1.0],
        ];
        let targets: Vec<f64> = rows.iter().map(|r| 1.0 + 2.0 * r[0] - 3.0 * r[1]).collect();
        let model = LinearModel::fit(&rows, &targets).unwrap();

        assert!(approx(model.intercept(), 1.0));
        assert!(approx(model.coefficients()[0], 2.0));
        assert!(approx(model.coefficients()[1], -3.0));
        assert!(approx(model.predict(&[3.0, 3.0]), -2.0));
    }

    #[test]
    fn collinear_columns_get_minimum_norm_split() {
        // b = 4 - a in every row, so only a - b is identifiable.
        let rows = vec![vec![3.0, 1.0], vec![1.0, 3.0], vec![2.0, 2.0]];
        let targets = vec![0.9, 0.1, 0.5];
        let model = LinearModel::fit(&rows, &targets).unwrap();

        assert!(approx(model.coefficients()[0], 0.2));
        assert!(approx(model.coefficients()[1], -0.2));
        assert!(approx(model.predict(&[3.0, 1.0]), 0.9));
    }

    #[test]
    fn single_row_has_zero_slope() {
        let model = LinearModel::fit(&[vec![2.0, 1.0, 0.0]], &[0.7]).unwrap();
        assert!(model.coefficients().iter().all(|c| c.abs() < 1e-12));
        assert!(approx(model.intercept(), 0.7));
    }

    #[test]
    fn more_columns_than_rows_still_fits_the_data() {
        let rows = vec![vec![1.0, 0.0, 2.0], vec![0.0, 1.0, 1.0]];
        let targets = vec![1.0, 0.0];
        let model = LinearModel::fit(&rows, &targets).unwrap();
        assert!(approx(model.predict(&rows[0]), 1.0));
        assert!(approx(model.predict(&rows[1]), 0.0));
    }

    #[test]
    fn malformed_tables_are_rejected() {
        assert!(LinearModel::fit(&[], &[]).is_none());
        assert!(LinearModel::fit(&[vec![1.0]], &[1.0, 2.0]).is_none());
        assert!(LinearModel::fit(&[vec![1.0], vec![1.0, 2.0]], &[1.0, 2.0]).is_none());
    }

    #[test]
    fn eigen_decomposition_reconstructs_matrix() {
        let a = vec![4.0, 1.0, 0.5, 1.0, 3.0, 0.2, 0.5, 0.2, 1.0];
        let (values, vectors) = symmetric_eigen(a.clone(), 3);
        for i in 0..3 {
            for j in 0..3 {
                let rebuilt: f64 = (0..3)
                    .map(|k| vectors[i * 3 + k] * values[k] * vectors[j * 3 + k])
                    .sum();
                assert!(approx(rebuilt, a[i * 3 + j]));
            }
        }
    }
}
