//! # 单位换算
//!
//! 极化率（CGS 体积极化率 ↔ SI 原子极化率）、波数能量、摩尔质量与数密度换算。
//!
//! ## 依赖关系
//! - 被 `optics`, `quantum_mechanics` 使用
//! - 使用 `constants` 中的 CODATA 常数与摩尔质量

use crate::constants::{self, C, EPSILON_0, EV, H, N_A};
use crate::error::Result;

use std::f64::consts::PI;

/// 体积极化率 [cm³] → 原子极化率 [F·m²]
pub fn polarizability_cgs_to_si(polarizability_cgs: f64) -> f64 {
    polarizability_cgs * 4.0 * PI * EPSILON_0 * 1e-6
}

/// 原子极化率 [F·m²] → 体积极化率 [cm³]
pub fn polarizability_si_to_cgs(polarizability_si: f64) -> f64 {
    polarizability_si * 1e6 / (4.0 * PI * EPSILON_0)
}

/// 波数 [cm⁻¹] → 能量 [J]
pub fn wavenumber_to_joules(wavenumber_cm: f64) -> f64 {
    wavenumber_cm * C * 100.0 * H
}

/// 波数 [cm⁻¹] → 能量 [eV]
pub fn wavenumber_to_electronvolt(wavenumber_cm: f64) -> f64 {
    wavenumber_to_joules(wavenumber_cm) / EV
}

/// 摩尔质量 [g/mol] → 单个粒子质量 [kg]
pub fn molar_mass_to_kilogram(molar_mass_gmol: f64) -> f64 {
    molar_mass_gmol * 1e-3 / N_A
}

/// 质量密度 [kg/m³] → 数密度 [1/m³]
pub fn mass_density_to_molar_density(mass_density: f64, molecule: &str) -> Result<f64> {
    let molar_mass = constants::molar_mass(molecule)?;
    Ok(mass_density * N_A / molar_mass * 1e3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polarizability_roundtrip_identity() {
        let cgs = 1.7403e-24;
        assert_relative_eq!(
            polarizability_si_to_cgs(polarizability_cgs_to_si(cgs)),
            cgs,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_wavenumber_energy() {
        // 1 eV ≈ 8065.544 cm⁻¹
        assert_relative_eq!(wavenumber_to_electronvolt(8065.544), 1.0, epsilon = 1e-6);
        assert_relative_eq!(wavenumber_to_joules(1.0), 1.986_445_857e-23, max_relative = 1e-9);
    }

    #[test]
    fn test_nitrogen_number_density() {
        // 1 kg/m³ of N2 → N_A / 28.0134 g/mol
        let n = mass_density_to_molar_density(1.0, "N2").unwrap();
        assert_relative_eq!(n, 2.149_7e25, max_relative = 1e-4);
        assert!(mass_density_to_molar_density(1.0, "Air").is_err());
    }

    #[test]
    fn test_molar_mass_to_kilogram() {
        assert_relative_eq!(
            molar_mass_to_kilogram(28.0134),
            4.651_75e-26,
            max_relative = 1e-5
        );
    }
}
