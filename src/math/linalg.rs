//! Linear algebra backend abstraction for the quasi-Newton minimizer.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the dense linear
//! algebra used by the projected-BFGS minimizer: the inverse-Hessian
//! descent direction and the BFGS rank-two update, standardized on the
//! nalgebra backend.
//!
//! ## Design notes
//!
//! * The inverse-Hessian approximation is stored as a flattened
//!   column-major buffer; nalgebra views are constructed per operation.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to
//!   nalgebra.
//! * Curvature guarding (skipping the update when `sᵀy` is too small) is
//!   the minimizer's responsibility; the backend applies the formula as
//!   given.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Compute the descent direction `−H·g` from the flattened inverse
    /// Hessian `h_inv` (n×n, column-major) and gradient `g`.
    fn descent_direction(h_inv: &[Self], grad: &[Self], n: usize) -> Vec<Self>;

    /// Apply the BFGS rank-two update to the flattened inverse Hessian:
    /// `H ← (I − ρ s yᵀ) H (I − ρ y sᵀ) + ρ s sᵀ` with `ρ = 1 / sᵀy`.
    fn bfgs_update(h_inv: &mut [Self], s: &[Self], y: &[Self], n: usize);

    /// Flattened n×n identity matrix.
    fn identity(n: usize) -> Vec<Self> {
        let mut matrix = vec![Self::zero(); n * n];
        for i in 0..n {
            matrix[i * n + i] = Self::one();
        }
        matrix
    }
}

impl FloatLinalg for f64 {
    #[inline]
    fn descent_direction(h_inv: &[Self], grad: &[Self], n: usize) -> Vec<Self> {
        nalgebra_backend::descent_direction_f64(h_inv, grad, n)
    }
    #[inline]
    fn bfgs_update(h_inv: &mut [Self], s: &[Self], y: &[Self], n: usize) {
        nalgebra_backend::bfgs_update_f64(h_inv, s, y, n)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn descent_direction(h_inv: &[Self], grad: &[Self], n: usize) -> Vec<Self> {
        nalgebra_backend::descent_direction_f32(h_inv, grad, n)
    }
    #[inline]
    fn bfgs_update(h_inv: &mut [Self], s: &[Self], y: &[Self], n: usize) {
        nalgebra_backend::bfgs_update_f32(h_inv, s, y, n)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    /// Compute `−H·g` using f64 precision.
    pub fn descent_direction_f64(h_inv: &[f64], grad: &[f64], n: usize) -> Vec<f64> {
        let h = DMatrix::from_column_slice(n, n, h_inv);
        let g = DVector::from_column_slice(grad);
        (-(h * g)).as_slice().to_vec()
    }

    /// Apply the BFGS rank-two inverse-Hessian update using f64 precision.
    pub fn bfgs_update_f64(h_inv: &mut [f64], s: &[f64], y: &[f64], n: usize) {
        let sy: f64 = s.iter().zip(y.iter()).map(|(&si, &yi)| si * yi).sum();
        let rho = 1.0 / sy;

        let h = DMatrix::from_column_slice(n, n, h_inv);
        let s_v = DVector::from_column_slice(s);
        let y_v = DVector::from_column_slice(y);
        let identity = DMatrix::<f64>::identity(n, n);

        let left = &identity - &s_v * y_v.transpose() * rho;
        let right = &identity - &y_v * s_v.transpose() * rho;
        let updated = left * h * right + &s_v * s_v.transpose() * rho;

        h_inv.copy_from_slice(updated.as_slice());
    }

    /// Compute `−H·g` using f32 precision.
    pub fn descent_direction_f32(h_inv: &[f32], grad: &[f32], n: usize) -> Vec<f32> {
        let h = DMatrix::from_column_slice(n, n, h_inv);
        let g = DVector::from_column_slice(grad);
        (-(h * g)).as_slice().to_vec()
    }

    /// Apply the BFGS rank-two inverse-Hessian update using f32 precision.
    pub fn bfgs_update_f32(h_inv: &mut [f32], s: &[f32], y: &[f32], n: usize) {
        let sy: f32 = s.iter().zip(y.iter()).map(|(&si, &yi)| si * yi).sum();
        let rho = 1.0 / sy;

        let h = DMatrix::from_column_slice(n, n, h_inv);
        let s_v = DVector::from_column_slice(s);
        let y_v = DVector::from_column_slice(y);
        let identity = DMatrix::<f32>::identity(n, n);

        let left = &identity - &s_v * y_v.transpose() * rho;
        let right = &identity - &y_v * s_v.transpose() * rho;
        let updated = left * h * right + &s_v * s_v.transpose() * rho;

        h_inv.copy_from_slice(updated.as_slice());
    }
}
