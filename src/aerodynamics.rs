//! # 空气动力学函数
//!
//! 可压缩流与输运性质的闭式关系。
//!
//! ## 功能
//! - Sutherland 粘度与热导率定律
//! - 空气组分摩尔质量与声速
//! - 等熵关系、正激波关系、斜激波关系（θ-β-M）
//!
//! ## 参考
//! - Normal Shock Wave, NASA Glenn (https://www.grc.nasa.gov/www/k-12/airplane/normal.html)
//! - J. D. Anderson, *Modern Compressible Flow*, eq. 4.7 - 4.17
//!
//! ## 依赖关系
//! - 使用 `constants/transport.rs` 与 `constants/elements.rs`
//! - 被 `commands/aero.rs` 调用

use crate::constants::{self, polarizability::AIR_SPECIES, R};
use crate::error::{check_adiabatic_index, check_temperature, HaotError, Result};

use serde::Serialize;

/// 激波角求解的迭代次数（二分法，区间缩小到 2⁻⁶⁰）
const SOLVER_ITERATIONS: usize = 60;

/// 等熵关系（总参数 / 静参数）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IsentropicRelations {
    /// p₀/p
    pub pressure_s: f64,
    /// T₀/T
    pub temperature_s: f64,
    /// ρ₀/ρ
    pub density_s: f64,
}

/// 正激波关系（波后 / 波前）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalShock {
    /// 波后马赫数
    pub mach_2: f64,
    /// p₂/p₁
    pub pressure_r: f64,
    /// T₂/T₁
    pub temperature_r: f64,
    /// ρ₂/ρ₁
    pub density_r: f64,
    /// p₀₂/p₀₁
    pub pressure_tr: f64,
    /// T₀₂/T₀₁（绝热，恒为 1）
    pub temperature_tr: f64,
}

/// 斜激波关系（波后 / 波前）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObliqueShock {
    pub mach_2: f64,
    pub pressure_r: f64,
    pub temperature_r: f64,
    pub density_r: f64,
    /// 气流偏转角 θ（度）
    pub deflection_angle_deg: f64,
}

/// 斜激波解支
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShockBranch {
    /// 弱激波（波后通常为超声速）
    Weak,
    /// 强激波（波后为亚声速）
    Strong,
}

/// Sutherland 粘度定律 [kg/(m·s)]
/// 支持 Air, Argon, N2, O2
pub fn sutherland_law_viscosity(temperature_k: f64, gas: &str) -> Result<f64> {
    check_temperature(temperature_k)?;
    let c = constants::sutherland_constants(gas)?;
    Ok(sutherland(
        temperature_k,
        c.temperature_ref,
        c.viscosity_ref,
        c.sutherland_visc,
    ))
}

/// Sutherland 热导率定律 [W/(m·K)]
/// 支持 Air, Argon, N2, O2
pub fn sutherland_law_conductivity(temperature_k: f64, gas: &str) -> Result<f64> {
    check_temperature(temperature_k)?;
    let c = constants::sutherland_constants(gas)?;
    Ok(sutherland(
        temperature_k,
        c.temperature_ref,
        c.conductivity_ref,
        c.sutherland_cond,
    ))
}

fn sutherland(temperature: f64, temperature_ref: f64, value_ref: f64, sutherland_t: f64) -> f64 {
    let ratio = (temperature_ref + sutherland_t) / (temperature + sutherland_t);
    value_ref * ratio * (temperature / temperature_ref).powf(1.5)
}

/// 组分摩尔质量 [g/mol]
/// `species` 为 `None` 时返回高温空气 10 组分
pub fn air_atomic_molar_mass(species: Option<&[&str]>) -> Result<Vec<(String, f64)>> {
    let species = species.unwrap_or(&AIR_SPECIES);
    species
        .iter()
        .map(|s| Ok((s.to_string(), constants::molar_mass(s)?)))
        .collect()
}

/// 干空气平均摩尔质量 [kg/mol]
/// 78% N2, 21% O2, 0.93% Ar, 0.07% CO2（体积分数）
pub fn dry_air_molar_mass() -> Result<f64> {
    let mixture = [("N2", 78.0), ("O2", 21.0), ("Ar", 0.93), ("CO2", 0.07)];
    let mut total = 0.0;
    for (species, percent) in mixture {
        total += percent * constants::molar_mass(species)?;
    }
    // 百分比 → 分数，g → kg
    Ok(total * 1e-5)
}

/// 理想气体声速 [m/s]
pub fn speed_of_sound(temperature_k: f64, adiabatic_index: f64) -> Result<f64> {
    check_temperature(temperature_k)?;
    check_adiabatic_index(adiabatic_index)?;
    let molar_mass = dry_air_molar_mass()?;
    Ok((adiabatic_index * temperature_k * R / molar_mass).sqrt())
}

/// 等熵关系
pub fn isentropic_relations(mach: f64, adiabatic_index: f64) -> Result<IsentropicRelations> {
    if !(mach.is_finite() && mach > 0.0) {
        return Err(HaotError::InvalidMach {
            mach,
            reason: "must be greater than 0".to_string(),
        });
    }
    check_adiabatic_index(adiabatic_index)?;

    let gamma_minus = adiabatic_index - 1.0;
    let temperature_s = 1.0 + 0.5 * gamma_minus * mach * mach;

    Ok(IsentropicRelations {
        pressure_s: temperature_s.powf(adiabatic_index / gamma_minus),
        temperature_s,
        density_s: temperature_s.powf(1.0 / gamma_minus),
    })
}

/// 正激波关系
pub fn normal_shock_relations(mach_1: f64, adiabatic_index: f64) -> Result<NormalShock> {
    check_supersonic(mach_1)?;
    check_adiabatic_index(adiabatic_index)?;

    let gamma = adiabatic_index;
    let gamma_minus = gamma - 1.0;
    let gamma_plus = gamma + 1.0;
    let mach_11 = mach_1 * mach_1;

    let compression = 2.0 * gamma * mach_11 - gamma_minus;
    let expansion = gamma_minus * mach_11 + 2.0;

    let mach_2 = (expansion / compression).sqrt();
    let pressure_r = compression / gamma_plus;
    let temperature_r = compression * expansion / (gamma_plus * gamma_plus * mach_11);
    let density_r = gamma_plus * mach_11 / expansion;

    let pressure_tr = (gamma_plus / compression).powf(1.0 / gamma_minus)
        * (gamma_plus * mach_11 / expansion).powf(gamma / gamma_minus);

    Ok(NormalShock {
        mach_2,
        pressure_r,
        temperature_r,
        density_r,
        pressure_tr,
        temperature_tr: 1.0,
    })
}

/// 斜激波关系
/// 激波角须位于马赫角 μ = asin(1/M₁) 与 90° 之间
pub fn oblique_shock_relations(
    mach_1: f64,
    shock_angle_deg: f64,
    adiabatic_index: f64,
) -> Result<ObliqueShock> {
    check_supersonic(mach_1)?;
    check_adiabatic_index(adiabatic_index)?;

    let mach_angle = mach_angle_deg(mach_1);
    // 容许 μ 处的舍入误差
    if !(shock_angle_deg.is_finite()
        && shock_angle_deg >= mach_angle - 1e-9
        && shock_angle_deg <= 90.0)
    {
        return Err(HaotError::InvalidShockAngle {
            angle_deg: shock_angle_deg,
            reason: format!("must lie between the Mach angle {:.4}° and 90°", mach_angle),
        });
    }

    let gamma = adiabatic_index;
    let beta = shock_angle_deg.to_radians();
    let mach_n1 = (mach_1 * beta.sin()).max(1.0);
    let mach_n11 = mach_n1 * mach_n1;

    let deflection_angle_deg = deflection_angle(mach_1, beta, gamma).to_degrees();

    let density_r = (gamma + 1.0) * mach_n11 / ((gamma - 1.0) * mach_n11 + 2.0);
    let pressure_r = 1.0 + 2.0 * gamma * (mach_n11 - 1.0) / (gamma + 1.0);
    let temperature_r = pressure_r / density_r;

    let mach_n2 = ((mach_n11 + 2.0 / (gamma - 1.0))
        / (2.0 * gamma / (gamma - 1.0) * mach_n11 - 1.0))
        .sqrt();
    let mach_2 = mach_n2 / (shock_angle_deg - deflection_angle_deg).to_radians().sin();

    Ok(ObliqueShock {
        mach_2,
        pressure_r,
        temperature_r,
        density_r,
        deflection_angle_deg,
    })
}

/// 由偏转角反求激波角（度）
pub fn shock_angle_from_deflection(
    mach_1: f64,
    deflection_deg: f64,
    adiabatic_index: f64,
    branch: ShockBranch,
) -> Result<f64> {
    check_supersonic(mach_1)?;
    check_adiabatic_index(adiabatic_index)?;
    if !(deflection_deg.is_finite() && deflection_deg >= 0.0) {
        return Err(HaotError::InvalidArgument(format!(
            "deflection angle must be non-negative, got {}",
            deflection_deg
        )));
    }

    let (beta_max, theta_max) = max_deflection(mach_1, adiabatic_index);
    let theta = deflection_deg.to_radians();
    if theta > theta_max {
        return Err(HaotError::InvalidArgument(format!(
            "deflection {:.4}° exceeds the maximum {:.4}° at Mach {}: shock detaches",
            deflection_deg,
            theta_max.to_degrees(),
            mach_1
        )));
    }

    let mu = mach_angle_deg(mach_1).to_radians();
    let half_pi = std::f64::consts::FRAC_PI_2;
    // 弱支上 θ(β) 单调递增，强支上单调递减
    let (mut lo, mut hi, rising) = match branch {
        ShockBranch::Weak => (mu, beta_max, true),
        ShockBranch::Strong => (beta_max, half_pi, false),
    };

    for _ in 0..SOLVER_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        let below = deflection_angle(mach_1, mid, adiabatic_index) < theta;
        if below == rising {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Ok((0.5 * (lo + hi)).to_degrees())
}

/// 最大偏转角及对应激波角（度），(β_max, θ_max)
pub fn max_deflection_angle(mach_1: f64, adiabatic_index: f64) -> Result<(f64, f64)> {
    check_supersonic(mach_1)?;
    check_adiabatic_index(adiabatic_index)?;
    let (beta, theta) = max_deflection(mach_1, adiabatic_index);
    Ok((beta.to_degrees(), theta.to_degrees()))
}

/// 马赫角 μ = asin(1/M)（度）
pub fn mach_angle_deg(mach: f64) -> f64 {
    (1.0 / mach).asin().to_degrees()
}

/// θ-β-M 关系，返回偏转角（弧度）
fn deflection_angle(mach_1: f64, beta: f64, gamma: f64) -> f64 {
    let mach_n11 = (mach_1 * beta.sin()).powi(2);
    let numerator = 2.0 * (mach_n11 - 1.0) / beta.tan();
    let denominator = mach_1 * mach_1 * (gamma + (2.0 * beta).cos()) + 2.0;
    (numerator / denominator).atan()
}

/// 黄金分割搜索 θ(β) 的极大值，返回弧度 (β_max, θ_max)
fn max_deflection(mach_1: f64, gamma: f64) -> (f64, f64) {
    let inv_phi = (5.0_f64.sqrt() - 1.0) / 2.0;
    let mut lo = mach_angle_deg(mach_1).to_radians();
    let mut hi = std::f64::consts::FRAC_PI_2;

    for _ in 0..SOLVER_ITERATIONS {
        let a = hi - inv_phi * (hi - lo);
        let b = lo + inv_phi * (hi - lo);
        if deflection_angle(mach_1, a, gamma) < deflection_angle(mach_1, b, gamma) {
            lo = a;
        } else {
            hi = b;
        }
    }

    let beta = 0.5 * (lo + hi);
    (beta, deflection_angle(mach_1, beta, gamma))
}

fn check_supersonic(mach: f64) -> Result<()> {
    if mach.is_finite() && mach >= 1.0 {
        Ok(())
    } else {
        Err(HaotError::InvalidMach {
            mach,
            reason: "shock relations require a supersonic upstream Mach number (>= 1)"
                .to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_ADIABATIC_INDEX as GAMMA;
    use approx::assert_relative_eq;

    #[test]
    fn test_sutherland_viscosity_air() {
        let mu = sutherland_law_viscosity(300.0, "Air").unwrap();
        assert_relative_eq!(mu, 1.8469e-5, max_relative = 1e-4);
        // 参考温度处返回参考值
        assert_relative_eq!(
            sutherland_law_viscosity(273.0, "Air").unwrap(),
            1.716e-5,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_sutherland_conductivity_air() {
        let k = sutherland_law_conductivity(300.0, "Air").unwrap();
        // 文献值约 0.0262 W/(m·K)
        assert_relative_eq!(k, 0.026245, max_relative = 1e-4);
    }

    #[test]
    fn test_sutherland_rejects_bad_input() {
        assert!(matches!(
            sutherland_law_viscosity(-2.0, "N2"),
            Err(HaotError::InvalidTemperature(_))
        ));
        assert!(matches!(
            sutherland_law_viscosity(300.0, "H2"),
            Err(HaotError::UnknownMolecule { .. })
        ));
        assert!(sutherland_law_conductivity(-2.0, "N2").is_err());
        assert!(sutherland_law_conductivity(300.0, "H2").is_err());
    }

    #[test]
    fn test_air_molar_mass_defaults() {
        let masses = air_atomic_molar_mass(None).unwrap();
        assert_eq!(masses.len(), 10);
        let (name, n2) = &masses[8];
        assert_eq!(name, "N2");
        assert_relative_eq!(*n2, 28.0134, epsilon = 1e-9);

        let custom = air_atomic_molar_mass(Some(&["Ar", "CO2"])).unwrap();
        assert_relative_eq!(custom[0].1, 39.948, epsilon = 1e-9);
    }

    #[test]
    fn test_speed_of_sound_at_300k() {
        let a = speed_of_sound(300.0, GAMMA).unwrap();
        assert_relative_eq!(a, 347.17506, epsilon = 1e-3);
        assert!(speed_of_sound(-2.0, GAMMA).is_err());
        assert!(speed_of_sound(300.0, 1.0).is_err());
    }

    #[test]
    fn test_isentropic_low_mach() {
        let r = isentropic_relations(0.2, GAMMA).unwrap();
        assert_relative_eq!(r.pressure_s, 1.02828, epsilon = 1e-4);
        assert_relative_eq!(r.temperature_s, 1.008, epsilon = 1e-12);
        assert_relative_eq!(r.density_s, 1.0201, epsilon = 1e-4);
    }

    #[test]
    fn test_isentropic_custom_gamma() {
        let gamma = 1.3;
        let r = isentropic_relations(2.0, gamma).unwrap();
        let t = 1.0 + (gamma - 1.0) / 2.0 * 4.0;
        assert_relative_eq!(r.temperature_s, t, epsilon = 1e-12);
        assert_relative_eq!(r.pressure_s, t.powf(gamma / (gamma - 1.0)), epsilon = 1e-9);
        assert_relative_eq!(r.density_s, t.powf(1.0 / (gamma - 1.0)), epsilon = 1e-9);
    }

    #[test]
    fn test_isentropic_high_mach_and_invalid() {
        let r = isentropic_relations(10.0, GAMMA).unwrap();
        assert!(r.pressure_s > 1.0 && r.temperature_s > 1.0 && r.density_s > 1.0);
        assert!(isentropic_relations(0.0, GAMMA).is_err());
        assert!(isentropic_relations(-1.0, GAMMA).is_err());
    }

    #[test]
    fn test_normal_shock_mach_2() {
        let s = normal_shock_relations(2.0, GAMMA).unwrap();
        assert_relative_eq!(s.mach_2, 0.577350, epsilon = 1e-6);
        assert_relative_eq!(s.pressure_r, 4.5, epsilon = 1e-12);
        assert_relative_eq!(s.temperature_r, 1.6875, epsilon = 1e-12);
        assert_relative_eq!(s.density_r, 2.666667, epsilon = 1e-6);
        assert_relative_eq!(s.pressure_tr, 0.720874, epsilon = 1e-6);
        assert_eq!(s.temperature_tr, 1.0);
    }

    #[test]
    fn test_normal_shock_sonic_is_identity() {
        let s = normal_shock_relations(1.0, GAMMA).unwrap();
        for v in [s.mach_2, s.pressure_r, s.temperature_r, s.density_r, s.pressure_tr] {
            assert_relative_eq!(v, 1.0, epsilon = 1e-12);
        }
        assert!(normal_shock_relations(0.5, GAMMA).is_err());
    }

    #[test]
    fn test_oblique_shock_textbook_case() {
        // Anderson: M = 2, θ = 10° → β ≈ 39.31°, M₂ ≈ 1.64
        let s = oblique_shock_relations(2.0, 39.31, GAMMA).unwrap();
        assert_relative_eq!(s.deflection_angle_deg, 10.0, epsilon = 1e-2);
        assert_relative_eq!(s.mach_2, 1.6407, epsilon = 1e-3);
        assert_relative_eq!(s.pressure_r, 1.7063, epsilon = 1e-3);
        assert_relative_eq!(s.temperature_r, s.pressure_r / s.density_r, epsilon = 1e-12);
    }

    #[test]
    fn test_oblique_shock_at_90_degrees_is_normal_shock() {
        let oblique = oblique_shock_relations(3.0, 90.0, GAMMA).unwrap();
        let normal = normal_shock_relations(3.0, GAMMA).unwrap();
        assert_relative_eq!(oblique.deflection_angle_deg, 0.0, epsilon = 1e-9);
        assert_relative_eq!(oblique.mach_2, normal.mach_2, epsilon = 1e-9);
        assert_relative_eq!(oblique.pressure_r, normal.pressure_r, epsilon = 1e-9);
        assert_relative_eq!(oblique.density_r, normal.density_r, epsilon = 1e-9);
    }

    #[test]
    fn test_oblique_shock_rejects_angle_below_mach_angle() {
        // μ(M=2) = 30°
        assert!(matches!(
            oblique_shock_relations(2.0, 20.0, GAMMA),
            Err(HaotError::InvalidShockAngle { .. })
        ));
        assert!(oblique_shock_relations(2.0, 95.0, GAMMA).is_err());
    }

    #[test]
    fn test_shock_angle_from_deflection_branches() {
        let weak = shock_angle_from_deflection(2.0, 10.0, GAMMA, ShockBranch::Weak).unwrap();
        assert_relative_eq!(weak, 39.31, epsilon = 1e-2);

        let strong = shock_angle_from_deflection(2.0, 10.0, GAMMA, ShockBranch::Strong).unwrap();
        assert!(strong > weak);
        let check = oblique_shock_relations(2.0, strong, GAMMA).unwrap();
        assert_relative_eq!(check.deflection_angle_deg, 10.0, epsilon = 1e-6);
        assert!(check.mach_2 < 1.0);
    }

    #[test]
    fn test_detached_shock() {
        // M = 2 的最大偏转角约 22.97°
        let (_, theta_max) = max_deflection_angle(2.0, GAMMA).unwrap();
        assert_relative_eq!(theta_max, 22.97, epsilon = 1e-2);
        assert!(shock_angle_from_deflection(2.0, 30.0, GAMMA, ShockBranch::Weak).is_err());
    }
}
