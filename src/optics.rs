//! # 气体光学性质
//!
//! ## 功能
//! - Kerl 温度/频率相关极化率
//! - 稀薄 (dilute) 与稠密 (dense, Lorentz-Lorenz) 折射率
//! - 介电常数、电极化率、光程
//! - Buldakov 振转态极化率展开
//! - Smith-Weintraub 大气折射率
//! - Gladstone-Dale 常数
//!
//! ## 公式
//! - dilute: n = 1 + Σαᵢ Nᵢ / (2ε₀)
//! - dense:  n = √((2x + 1)/(1 − x)),  x = Σαᵢ Nᵢ / (3ε₀)
//!
//! ## 依赖关系
//! - 使用 `constants/polarizability.rs`, `conversions.rs`, `atmosphere.rs`
//! - 使用 `quantum_mechanics.rs` 计算 Dunham 系数
//! - 被 `commands/optics.rs` 调用

use crate::atmosphere::Atmosphere;
use crate::constants::{self, C, EPSILON_0, N_A};
use crate::conversions::{mass_density_to_molar_density, polarizability_cgs_to_si};
use crate::error::{HaotError, Result};
use crate::quantum_mechanics;

use serde::Serialize;
use std::f64::consts::PI;

/// 稀薄与稠密两种近似下的成对结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiluteDense {
    pub dilute: f64,
    pub dense: f64,
}

impl DiluteDense {
    fn try_map<F>(self, f: F) -> Result<Self>
    where
        F: Fn(f64) -> Result<f64>,
    {
        Ok(Self {
            dilute: f(self.dilute)?,
            dense: f(self.dense)?,
        })
    }
}

/// Gladstone-Dale 常数 [m³/kg]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GladstoneDale {
    /// 各组分常数；给定密度时按质量分数加权
    pub species: Vec<(String, f64)>,
    /// 混合物常数（仅在给定密度时存在）
    pub total: Option<f64>,
}

/// Kerl 外推极化率 [m³]
///
/// α(ω, T) = α₀ (1 + bT + cT²) / (1 − (ω/ω₀)²)，ω = 2πc/λ
///
/// 参考: Polarizability α(ω,T,ρ) of Small Molecules in the Gas Phase
/// (https://doi.org/10.1002/bbpc.19920960517)
pub fn kerl_polarizability_temperature(
    temperature_k: f64,
    molecule: &str,
    wavelength_nm: f64,
) -> Result<f64> {
    if !(temperature_k.is_finite() && temperature_k >= 0.0) {
        return Err(HaotError::InvalidTemperature(temperature_k));
    }
    if !(wavelength_nm.is_finite() && wavelength_nm > 0.0) {
        return Err(HaotError::InvalidWavelength(wavelength_nm));
    }
    let kerl = constants::kerl_interpolation(molecule)?;

    let angular_frequency = 2.0 * PI * C / (wavelength_nm * 1e-9);
    let dispersion = 1.0 - (angular_frequency / kerl.ground_frequency).powi(2);
    if dispersion <= 0.0 {
        return Err(HaotError::InvalidArgument(format!(
            "wavelength {} nm lies at or beyond the {} resonance",
            wavelength_nm, molecule
        )));
    }

    let temperature_term = 1.0 + kerl.b * temperature_k + kerl.c * temperature_k.powi(2);
    Ok(kerl.ground_polarizability * temperature_term / dispersion)
}

/// 由温度与质量密度计算折射率（Kerl 极化率）
/// 支持 Air, H2, N2, O2
pub fn index_of_refraction_density_temperature(
    temperature_k: f64,
    mass_density: f64,
    molecule: &str,
    wavelength_nm: f64,
) -> Result<DiluteDense> {
    check_mass_density(molecule, mass_density)?;
    let pol_m3 = kerl_polarizability_temperature(temperature_k, molecule, wavelength_nm)?;
    let pol_si = polarizability_cgs_to_si(pol_m3 * 1e6);

    let number_density = if molecule == "Air" {
        mass_density * N_A / air_molar_mass()? * 1e3
    } else {
        mass_density_to_molar_density(mass_density, molecule)?
    };

    refractive_index_from_polarization(number_density * pol_si)
}

/// 由各组分质量密度计算折射率（静态极化率表）
pub fn index_of_refraction<S: AsRef<str>>(mass_density: &[(S, f64)]) -> Result<DiluteDense> {
    if mass_density.is_empty() {
        return Err(HaotError::InvalidArgument(
            "mass density list must contain at least one species".to_string(),
        ));
    }

    let mut tot_pol_molar = 0.0;
    for (species, density) in mass_density {
        let species = species.as_ref();
        check_mass_density(species, *density)?;
        let pol_si = polarizability_cgs_to_si(constants::polarizability(species)?);
        tot_pol_molar += pol_si * mass_density_to_molar_density(*density, species)?;
    }

    refractive_index_from_polarization(tot_pol_molar)
}

/// 总极化 Σαᵢ Nᵢ [F·m²/m³] → 折射率
fn refractive_index_from_polarization(tot_pol_molar: f64) -> Result<DiluteDense> {
    let dilute = 1.0 + tot_pol_molar / (2.0 * EPSILON_0);
    let x = tot_pol_molar / (3.0 * EPSILON_0);
    if x >= 1.0 {
        return Err(HaotError::InvalidArgument(format!(
            "polarization density too large for the Lorentz-Lorenz relation (x = {})",
            x
        )));
    }
    let dense = ((2.0 * x + 1.0) / (1.0 - x)).sqrt();
    Ok(DiluteDense { dilute, dense })
}

/// 介质介电常数 ε = ε₀ n²（dilute/dense 成对）
pub fn dielectric_material_const(index: DiluteDense) -> Result<DiluteDense> {
    index.try_map(permittivity_material)
}

/// 介电常数 ε = ε₀ n² [F/m]
pub fn permittivity_material(refractive_index: f64) -> Result<f64> {
    check_index(refractive_index)?;
    Ok(EPSILON_0 * refractive_index * refractive_index)
}

/// 电极化率 χ = n² − 1
pub fn electric_susceptibility(refractive_index: f64) -> Result<f64> {
    check_index(refractive_index)?;
    Ok(refractive_index * refractive_index - 1.0)
}

/// 光程 OPL = n L（dilute/dense 成对）
pub fn optical_path_length(index: DiluteDense, distance: f64) -> Result<DiluteDense> {
    check_distance(distance)?;
    index.try_map(|n| {
        check_index(n)?;
        Ok(n * distance)
    })
}

/// 分段光程 OPL = Σ nᵢ Lᵢ
pub fn optical_path_length_segments(indices: &[f64], distances: &[f64]) -> Result<f64> {
    if indices.len() != distances.len() {
        return Err(HaotError::DimensionMismatch {
            left: indices.len(),
            right: distances.len(),
        });
    }

    let mut opl = 0.0;
    for (n, d) in indices.iter().zip(distances) {
        check_index(*n)?;
        check_distance(*d)?;
        opl += n * d;
    }
    Ok(opl)
}

/// Buldakov 展开：振转态 (v, J) 的平均极化率 [m³]
/// 支持 H2, N2, O2
///
/// 参考: Temperature Dependence of Polarizability of Diatomic Homonuclear
/// Molecules (https://doi.org/10.1134/BF03355985)
pub fn buldakov_expansion(
    vibrational_number: u32,
    rotational_number: u32,
    molecule: &str,
) -> Result<f64> {
    let sc = constants::spectroscopy_constants(molecule)?;
    let d = constants::buldakov_polarizability_derivatives(molecule)?;
    let be_we = sc.b_e / sc.omega_e;

    let (_, a_1, a_2) = quantum_mechanics::potential_dunham_coef_012(molecule)?;
    let a_3 = quantum_mechanics::potential_dunham_coeff_m(a_1, a_2, 3)?;

    let j = rotational_number as f64;
    let rot_deg = j * (j + 1.0);
    let vib_deg = 2.0 * vibrational_number as f64 + 1.0;
    let vib_deg_2 = vib_deg * vib_deg;

    let term_1 = be_we * (-3.0 * a_1 * d.first + d.second) * vib_deg / 2.0;

    let term_2 = 4.0 * be_we.powi(2) * d.first * rot_deg;

    let term_31 = d.first
        * (-3.0 / 8.0 * (7.0 + 15.0 * vib_deg_2) * a_1.powi(3)
            + 1.0 / 4.0 * (23.0 + 39.0 * vib_deg_2) * a_2 * a_1
            - 15.0 / 4.0 * (5.0 + vib_deg_2) * a_3);
    let term_32 = d.second
        * (1.0 / 8.0 * (7.0 + 15.0 * vib_deg_2) * a_1.powi(2)
            + 3.0 / 4.0 * (5.0 + vib_deg_2) * a_2);
    let term_33 = -1.0 / 24.0 * (7.0 + 15.0 * vib_deg_2) * a_1 * d.third;
    let term_3 = (term_31 + term_32 + term_33) * be_we.powi(2);

    let term_41 = d.first * (24.0 * (1.0 - a_2) + 27.0 * a_1 * (1.0 + a_1));
    let term_42 = -3.0 * d.second * (1.0 + 3.0 * a_1);
    let term_43 = d.third / 8.0;
    let term_4 = (term_41 + term_42 + term_43) * rot_deg * vib_deg * be_we.powi(3);

    // Å³ → m³
    Ok((d.zeroth + term_1 + term_2 + term_3 + term_4) * 1e-30)
}

/// 大气折射率（Smith-Weintraub）
/// n = 1 + 10⁻⁶ (K₁/T)(P + K₂ e/T)，P 与 e 单位 mbar
///
/// 参考: The constants in the equation for atmospheric refractive index at
/// radio frequencies (https://ieeexplore.ieee.org/document/4051437)
pub fn atmospheric_index_of_refraction(altitude_m: f64, vapor_pressure_mbar: f64) -> Result<f64> {
    if !(vapor_pressure_mbar.is_finite() && vapor_pressure_mbar >= 0.0) {
        return Err(HaotError::InvalidArgument(format!(
            "vapor pressure must be non-negative, got {}",
            vapor_pressure_mbar
        )));
    }

    let atm = Atmosphere::at(altitude_m)?;
    let temperature = atm.temperature_k;
    let (k_1, k_2) = constants::smith_atmospheric_constants();

    let refractivity =
        (atm.pressure_mbar() + k_2 * vapor_pressure_mbar / temperature) * k_1 / temperature;

    Ok(1.0 + refractivity * 1e-6)
}

/// Gladstone-Dale 常数 [m³/kg]
///
/// 未给定密度时返回极化率表中全部组分的常数；
/// 给定密度时只返回这些组分，按质量分数加权，并给出混合物总常数。
pub fn gladstone_dale_constant<S: AsRef<str>>(
    mass_density: Option<&[(S, f64)]>,
) -> Result<GladstoneDale> {
    let Some(mass_density) = mass_density else {
        let species = constants::polarizability_table()
            .into_iter()
            .map(|(s, _)| Ok((s.to_string(), species_gladstone_dale(s)?)))
            .collect::<Result<Vec<_>>>()?;
        return Ok(GladstoneDale {
            species,
            total: None,
        });
    };

    let mut tot_density = 0.0;
    for (species, density) in mass_density {
        check_mass_density(species.as_ref(), *density)?;
        tot_density += density;
    }
    if tot_density <= 0.0 {
        return Err(HaotError::InvalidArgument(
            "total mass density must be positive".to_string(),
        ));
    }

    let species = mass_density
        .iter()
        .map(|(s, density)| {
            let s = s.as_ref();
            Ok((s.to_string(), species_gladstone_dale(s)? * density / tot_density))
        })
        .collect::<Result<Vec<_>>>()?;
    let total = species.iter().map(|(_, gd)| gd).sum();

    Ok(GladstoneDale {
        species,
        total: Some(total),
    })
}

/// 单组分 Gladstone-Dale 常数 [m³/kg]
fn species_gladstone_dale(species: &str) -> Result<f64> {
    let pol_si = polarizability_cgs_to_si(constants::polarizability(species)?);
    let molar_mass = constants::molar_mass(species)?;
    // [1/g] → [1/kg]
    Ok(pol_si * N_A / molar_mass / (2.0 * EPSILON_0) * 1e3)
}

/// 干空气摩尔质量 [g/mol]：78% N2, 21% O2, 1% Ar
fn air_molar_mass() -> Result<f64> {
    Ok(0.78 * constants::molar_mass("N2")?
        + 0.21 * constants::molar_mass("O2")?
        + 0.01 * constants::molar_mass("Ar")?)
}

fn check_index(refractive_index: f64) -> Result<()> {
    if refractive_index.is_finite() && refractive_index > 0.0 {
        Ok(())
    } else {
        Err(HaotError::InvalidRefractiveIndex(refractive_index))
    }
}

fn check_distance(distance: f64) -> Result<()> {
    if distance.is_finite() && distance >= 0.0 {
        Ok(())
    } else {
        Err(HaotError::InvalidArgument(format!(
            "distance must be non-negative, got {}",
            distance
        )))
    }
}

fn check_mass_density(species: &str, density: f64) -> Result<()> {
    if density.is_finite() && density >= 0.0 {
        Ok(())
    } else {
        Err(HaotError::InvalidArgument(format!(
            "mass density of {} must be non-negative, got {}",
            species, density
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_WAVELENGTH_NM;
    use approx::assert_relative_eq;

    #[test]
    fn test_kerl_polarizability_n2() {
        let alpha = kerl_polarizability_temperature(300.0, "N2", DEFAULT_WAVELENGTH_NM).unwrap();
        assert_relative_eq!(alpha, 1.764_568e-30, max_relative = 1e-5);
        assert!(kerl_polarizability_temperature(200.0, "H2", 633.0).is_ok());
    }

    #[test]
    fn test_kerl_polarizability_invalid_input() {
        assert!(matches!(
            kerl_polarizability_temperature(-20.0, "H2", 633.0),
            Err(HaotError::InvalidTemperature(_))
        ));
        assert!(matches!(
            kerl_polarizability_temperature(200.0, "Argon", 633.0),
            Err(HaotError::UnknownMolecule { .. })
        ));
        assert!(matches!(
            kerl_polarizability_temperature(200.0, "H2", -2300.0),
            Err(HaotError::InvalidWavelength(_))
        ));
        // 紫外共振以下
        assert!(kerl_polarizability_temperature(200.0, "N2", 50.0).is_err());
    }

    #[test]
    fn test_sea_level_air_index() {
        let n = index_of_refraction_density_temperature(288.15, 1.225, "Air", 633.0).unwrap();
        assert_relative_eq!(n.dilute - 1.0, 2.765_42e-4, max_relative = 1e-4);
        assert!(n.dense > 1.0);
        assert_relative_eq!(n.dense, n.dilute, epsilon = 1e-7);
    }

    #[test]
    fn test_density_temperature_uses_requested_molecule() {
        let n2 = index_of_refraction_density_temperature(288.15, 1.225, "N2", 633.0).unwrap();

        let alpha = kerl_polarizability_temperature(288.15, "N2", 633.0).unwrap();
        let number_density = 1.225 * N_A / 28.0134 * 1e3;
        let expected = number_density * 4.0 * PI * EPSILON_0 * alpha / (2.0 * EPSILON_0);
        assert_relative_eq!(n2.dilute - 1.0, expected, max_relative = 1e-9);
        assert_relative_eq!(n2.dilute - 1.0, 2.919_65e-4, max_relative = 1e-4);

        let air = index_of_refraction_density_temperature(288.15, 1.225, "Air", 633.0).unwrap();
        assert!((n2.dilute - air.dilute).abs() > 1e-5);
    }

    #[test]
    fn test_density_temperature_invalid_input() {
        assert!(index_of_refraction_density_temperature(200.0, 0.5, "Argon", 633.0).is_err());
        assert!(index_of_refraction_density_temperature(-20.0, 0.5, "H2", 633.0).is_err());
        assert!(index_of_refraction_density_temperature(200.0, 0.5, "H2", -2300.0).is_err());
        assert!(index_of_refraction_density_temperature(200.0, -0.5, "H2", 633.0).is_err());
    }

    #[test]
    fn test_index_of_refraction_species() {
        let n = index_of_refraction(&[("N2", 0.95), ("O2", 0.29)]).unwrap();
        assert!(n.dilute > 1.000_2 && n.dilute < 1.000_4);

        let empty: [(&str, f64); 0] = [];
        assert!(index_of_refraction(&empty).is_err());
        // H2 不在极化率表中
        assert!(index_of_refraction(&[("N2", 0.5), ("H2", 0.1)]).is_err());
    }

    #[test]
    fn test_permittivity_and_susceptibility() {
        assert_relative_eq!(permittivity_material(1.0).unwrap(), EPSILON_0);
        assert_relative_eq!(electric_susceptibility(2.0).unwrap(), 3.0);
        assert!(permittivity_material(-2.5).is_err());
        assert!(electric_susceptibility(-2.5).is_err());

        let eps = dielectric_material_const(DiluteDense {
            dilute: 1.0003,
            dense: 1.0003,
        })
        .unwrap();
        assert_relative_eq!(eps.dilute, EPSILON_0 * 1.0003 * 1.0003);
    }

    #[test]
    fn test_optical_path_length() {
        let n = DiluteDense {
            dilute: 2.5,
            dense: 2.0,
        };
        let opl = optical_path_length(n, 2.0).unwrap();
        assert_relative_eq!(opl.dilute, 5.0);
        assert_relative_eq!(opl.dense, 4.0);
        assert!(optical_path_length(n, -2.0).is_err());
        assert!(optical_path_length(
            DiluteDense {
                dilute: -2.5,
                dense: 1.0
            },
            2.0
        )
        .is_err());
    }

    #[test]
    fn test_optical_path_length_segments() {
        assert_relative_eq!(
            optical_path_length_segments(&[2.5, 2.0], &[1.0, 2.0]).unwrap(),
            6.5
        );
        assert!(matches!(
            optical_path_length_segments(&[2.5, 2.0], &[2.0, 1.0, 4.0]),
            Err(HaotError::DimensionMismatch { left: 2, right: 3 })
        ));
        assert!(optical_path_length_segments(&[2.5, 2.0], &[2.0, -4.0]).is_err());
    }

    #[test]
    fn test_buldakov_expansion_n2() {
        let ground = buldakov_expansion(0, 0, "N2").unwrap();
        assert_relative_eq!(ground, 1.7406e-30, max_relative = 1e-2);
        assert!(buldakov_expansion(1, 0, "N2").unwrap() > ground);
        assert!(buldakov_expansion(0, 10, "N2").unwrap() > ground);
        assert!(buldakov_expansion(0, 0, "NO").is_err());
    }

    #[test]
    fn test_atmospheric_index_sea_level() {
        let n = atmospheric_index_of_refraction(0.0, 0.0).unwrap();
        assert_relative_eq!(n, 1.000_272_87, epsilon = 1e-8);
        let humid = atmospheric_index_of_refraction(0.0, 10.0).unwrap();
        assert!(humid > n);
        assert!(atmospheric_index_of_refraction(0.0, -1.0).is_err());
        assert!(atmospheric_index_of_refraction(90_000.0, 0.0).is_err());
    }

    #[test]
    fn test_atmospheric_index_decreases_with_altitude() {
        let low = atmospheric_index_of_refraction(1_000.0, 0.0).unwrap();
        let high = atmospheric_index_of_refraction(30_000.0, 0.0).unwrap();
        assert!(high < low);
        assert!(high > 1.0);
    }

    #[test]
    fn test_gladstone_dale_species_table() {
        let gd = gladstone_dale_constant::<&str>(None).unwrap();
        assert_eq!(gd.species.len(), 10);
        assert!(gd.total.is_none());
        let n2 = gd.species.iter().find(|(s, _)| s == "N2").unwrap().1;
        assert_relative_eq!(n2, 2.350_66e-4, max_relative = 1e-4);
    }

    #[test]
    fn test_gladstone_dale_mixture_weighting() {
        let gd = gladstone_dale_constant(Some(&[("N2", 0.5), ("O2", 0.5)][..])).unwrap();
        assert_eq!(gd.species.len(), 2);
        let total = gd.total.unwrap();
        let sum: f64 = gd.species.iter().map(|(_, v)| v).sum();
        assert_relative_eq!(total, sum);

        let pure = gladstone_dale_constant(Some(&[("N2", 1.0)][..])).unwrap();
        assert_relative_eq!(pure.total.unwrap(), 2.350_66e-4, max_relative = 1e-4);

        assert!(gladstone_dale_constant(Some(&[("N2", 0.0)][..])).is_err());
        assert!(gladstone_dale_constant(Some(&[("Xe", 1.0)][..])).is_err());
    }
}
