//! Diffusion-limited equilibration time.
//!
//! Stokes-Einstein gives `D ∝ 1/r` and the hydrodynamic radius scales as `r ∝ M^(1/3)`, so
//! the equilibration time over a fixed boundary layer grows as `τ(M) = τ₀ · (M / M₀)^(1/3)`.
//! Benzene is the reference analyte.

/// Molecular weight of benzene, g/mol.
pub const REFERENCE_MOLECULAR_WEIGHT: f64 = 78.0;

/// Equilibration time of benzene, minutes.
pub const REFERENCE_EQUILIBRATION_MINUTES: f64 = 10.0;

pub fn equilibration_time(molecular_weight: f64) -> f64 {
    REFERENCE_EQUILIBRATION_MINUTES * (molecular_weight / REFERENCE_MOLECULAR_WEIGHT).cbrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn reference_analyte_equilibrates_in_reference_time() {
        let tau = equilibration_time(REFERENCE_MOLECULAR_WEIGHT);
        assert!((tau - REFERENCE_EQUILIBRATION_MINUTES).abs() < TOLERANCE);
    }

    #[test]
    fn time_follows_the_cube_root_law() {
        let tau = equilibration_time(8.0 * REFERENCE_MOLECULAR_WEIGHT);
        assert!((tau - 2.0 * REFERENCE_EQUILIBRATION_MINUTES).abs() < TOLERANCE);

        let ratio = equilibration_time(300.0) / equilibration_time(78.0);
        assert!((ratio - (300.0_f64 / 78.0).cbrt()).abs() < TOLERANCE);
    }

    #[test]
    fn heavier_analytes_need_longer_extractions() {
        let masses = [46.0, 78.0, 100.0, 250.0, 300.0, 600.0];
        for pair in masses.windows(2) {
            assert!(equilibration_time(pair[0]) < equilibration_time(pair[1]));
        }
    }
}
