//! # 量子力学：双原子分子能级与统计
//!
//! ## 功能
//! - 零点能、谐振子/刚性转子能级、Born-Oppenheimer 振转能级
//! - Boltzmann 因子、配分函数、布居分布
//! - Dunham 势能系数
//! - 约化质量、三维箱中粒子平动能级
//!
//! 能级以波数 [cm⁻¹] 表示，振动能包含零点项 (v + 1/2)。
//! 配分函数为截断求和：只累加到给定量子数。
//!
//! ## 参考
//! - Experimental Vibrational Zero-Point Energies: Diatomic Molecules
//!   (https://doi.org/10.1063/1.2436891)
//! - Anharmonic Potential Constants and Their Dependence upon Bond Length
//!   (https://doi.org/10.1063/1.1731952)
//! - A recursion formula for the coefficients of Dunham potential
//!   (https://doi.org/10.1016/j.theochem.2003.12.003)
//!
//! ## 依赖关系
//! - 使用 `constants/spectroscopy.rs`, `conversions.rs`
//! - 被 `optics::buldakov_expansion` 和 `commands/quantum.rs` 调用

use crate::constants::{self, H, K_B};
use crate::conversions::{molar_mass_to_kilogram, wavenumber_to_joules};
use crate::error::{check_temperature, HaotError, Result};

/// 能级选择
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyLevel {
    /// 仅振动能级 v（谐振子）
    Vibrational(u32),
    /// 仅转动能级 J（刚性转子，简并度 2J+1）
    Rotational(u32),
    /// 谐振子 + 刚性转子之和
    Rovibrational { v: u32, j: u32 },
    /// Born-Oppenheimer 振转能级（含非谐、离心畸变与振转耦合）
    BornOppenheimer { v: u32, j: u32 },
}

impl EnergyLevel {
    /// 转动简并度
    fn degeneracy(&self) -> f64 {
        match *self {
            EnergyLevel::Vibrational(_) => 1.0,
            EnergyLevel::Rotational(j)
            | EnergyLevel::Rovibrational { j, .. }
            | EnergyLevel::BornOppenheimer { j, .. } => 2.0 * j as f64 + 1.0,
        }
    }

    /// 能级项值 [cm⁻¹]
    pub fn term_value(&self, molecule: &str) -> Result<f64> {
        match *self {
            EnergyLevel::Vibrational(v) => vibrational_energy_k(v, molecule),
            EnergyLevel::Rotational(j) => rotational_energy_k(j, molecule),
            EnergyLevel::Rovibrational { v, j } => {
                Ok(vibrational_energy_k(v, molecule)? + rotational_energy_k(j, molecule)?)
            }
            EnergyLevel::BornOppenheimer { v, j } => {
                born_oppenheimer_approximation(v, j, molecule)
            }
        }
    }
}

/// 布居分布的量子数范围
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelSelection {
    /// 最大振动量子数
    pub max_vibrational: Option<u32>,
    /// 最大转动量子数
    pub max_rotational: Option<u32>,
    /// 使用 Born-Oppenheimer 能级（需同时给出 v 和 J）
    pub born_oppenheimer: bool,
}

/// 零点能 [cm⁻¹]
/// 支持 H2, N2, O2, NO, N2+, O2+, NO+
pub fn zero_point_energy(molecule: &str) -> Result<f64> {
    let sc = constants::spectroscopy_constants(molecule)?;

    let scope_var = sc.alpha_e * sc.omega_e / sc.b_e;

    let zpe = sc.omega_e / 2.0 - sc.omega_xe / 2.0
        + sc.omega_ye / 8.0
        + sc.b_e / 4.0
        + scope_var / 12.0
        + scope_var * scope_var / (144.0 * sc.b_e);

    Ok(zpe)
}

/// 谐振子振动能 [cm⁻¹]
pub fn vibrational_energy_k(vibrational_number: u32, molecule: &str) -> Result<f64> {
    let sc = constants::spectroscopy_constants(molecule)?;
    Ok(sc.omega_e * (vibrational_number as f64 + 0.5))
}

/// 刚性转子转动能 [cm⁻¹]
pub fn rotational_energy_k(rotational_number: u32, molecule: &str) -> Result<f64> {
    let sc = constants::spectroscopy_constants(molecule)?;
    let j = rotational_number as f64;
    Ok(sc.b_e * j * (j + 1.0))
}

/// Born-Oppenheimer 振转能级 [cm⁻¹]
pub fn born_oppenheimer_approximation(
    vibrational_number: u32,
    rotational_number: u32,
    molecule: &str,
) -> Result<f64> {
    let sc = constants::spectroscopy_constants(molecule)?;

    let vib_levels = vibrational_number as f64 + 0.5;
    let j = rotational_number as f64;
    let rot_levels = j * (j + 1.0);

    let harmonic = sc.omega_e * vib_levels + sc.b_e * rot_levels;
    let anharmonic = sc.omega_xe * vib_levels.powi(2) + sc.d_e * rot_levels.powi(2);
    let interaction = sc.alpha_e * vib_levels * rot_levels;

    Ok(harmonic - anharmonic - interaction)
}

/// Boltzmann 因子 g·exp(−E/kT)
pub fn boltzmann_factor(temperature_k: f64, molecule: &str, level: EnergyLevel) -> Result<f64> {
    check_temperature(temperature_k)?;
    let energy = wavenumber_to_joules(level.term_value(molecule)?);
    let thermal_beta = 1.0 / (K_B * temperature_k);
    Ok(level.degeneracy() * (-energy * thermal_beta).exp())
}

/// 振动配分函数（v = 0..=vibrational_number）
pub fn vibrational_partition_function(
    vibrational_number: u32,
    temperature_k: f64,
    molecule: &str,
) -> Result<f64> {
    (0..=vibrational_number)
        .map(|v| boltzmann_factor(temperature_k, molecule, EnergyLevel::Vibrational(v)))
        .sum()
}

/// 转动配分函数（J = 0..=rotational_number）
pub fn rotational_partition_function(
    rotational_number: u32,
    temperature_k: f64,
    molecule: &str,
) -> Result<f64> {
    (0..=rotational_number)
        .map(|j| boltzmann_factor(temperature_k, molecule, EnergyLevel::Rotational(j)))
        .sum()
}

/// Born-Oppenheimer 配分函数
pub fn born_oppenheimer_partition_function(
    vibrational_number: u32,
    rotational_number: u32,
    temperature_k: f64,
    molecule: &str,
) -> Result<f64> {
    let mut z_bo = 0.0;
    for j in 0..=rotational_number {
        for v in 0..=vibrational_number {
            z_bo += boltzmann_factor(
                temperature_k,
                molecule,
                EnergyLevel::BornOppenheimer { v, j },
            )?;
        }
    }
    Ok(z_bo)
}

/// 布居分布 N(v, J)/N
///
/// 返回矩阵按 `[v][J]` 索引；只给出振动量子数时为单列，只给出转动量子数时为单行。
pub fn distribution_function(
    temperature_k: f64,
    molecule: &str,
    selection: LevelSelection,
) -> Result<Vec<Vec<f64>>> {
    check_temperature(temperature_k)?;

    let (z_tot, rows, cols) = match (
        selection.max_vibrational,
        selection.max_rotational,
        selection.born_oppenheimer,
    ) {
        (None, None, _) => {
            return Err(HaotError::InvalidArgument(
                "distribution needs a vibrational and/or rotational quantum number".to_string(),
            ))
        }
        (Some(v), Some(j), true) => (
            born_oppenheimer_partition_function(v, j, temperature_k, molecule)?,
            v,
            j,
        ),
        (_, _, true) => {
            return Err(HaotError::InvalidArgument(
                "Born-Oppenheimer distribution needs both vibrational and rotational numbers"
                    .to_string(),
            ))
        }
        (v, j, false) => {
            let z_vib = match v {
                Some(v) => vibrational_partition_function(v, temperature_k, molecule)?,
                None => 1.0,
            };
            let z_rot = match j {
                Some(j) => rotational_partition_function(j, temperature_k, molecule)?,
                None => 1.0,
            };
            (z_vib * z_rot, v.unwrap_or(0), j.unwrap_or(0))
        }
    };

    let level_at = |v: u32, j: u32| match (selection.max_vibrational, selection.max_rotational) {
        _ if selection.born_oppenheimer => EnergyLevel::BornOppenheimer { v, j },
        (Some(_), Some(_)) => EnergyLevel::Rovibrational { v, j },
        (Some(_), None) => EnergyLevel::Vibrational(v),
        _ => EnergyLevel::Rotational(j),
    };

    (0..=rows)
        .map(|v| {
            (0..=cols)
                .map(|j| Ok(boltzmann_factor(temperature_k, molecule, level_at(v, j))? / z_tot))
                .collect::<Result<Vec<f64>>>()
        })
        .collect()
}

/// Dunham 势能系数 (a₀ [cm⁻¹], a₁, a₂)
pub fn potential_dunham_coef_012(molecule: &str) -> Result<(f64, f64, f64)> {
    let sc = constants::spectroscopy_constants(molecule)?;

    let a_0 = sc.omega_e.powi(2) / (4.0 * sc.b_e);
    let a_1 = -(sc.alpha_e * sc.omega_e / (6.0 * sc.b_e.powi(2)) + 1.0);
    let a_2 = 1.25 * a_1.powi(2) - (2.0 / 3.0) * (sc.omega_xe / sc.b_e);

    Ok((a_0, a_1, a_2))
}

/// 高阶 Dunham 势能系数 aₘ（m ≥ 2，m = 2 时返回 a₂）
pub fn potential_dunham_coeff_m(a_1: f64, a_2: f64, m: u32) -> Result<f64> {
    if m < 2 {
        return Err(HaotError::InvalidArgument(format!(
            "Dunham recursion starts at m = 2, got {}",
            m
        )));
    }
    if a_1 == 0.0 {
        return Err(HaotError::InvalidArgument(
            "Dunham coefficient a_1 must be non-zero".to_string(),
        ));
    }

    let m_i = m as i32;
    let mut tmp = (12.0 / a_1).powi(m_i - 2);
    tmp *= (2.0_f64.powi(m_i + 1)) - 1.0;
    tmp *= (a_2 / 7.0).powi(m_i - 1);
    for i in 0..(m - 2) {
        tmp /= (m + 2 - i) as f64;
    }

    Ok(tmp)
}

/// 约化质量 [kg]
pub fn reduced_mass_kg(molecule_1: &str, molecule_2: &str) -> Result<f64> {
    let m_1 = constants::molar_mass(molecule_1)?;
    let m_2 = constants::molar_mass(molecule_2)?;
    Ok(molar_mass_to_kilogram(m_1 * m_2 / (m_1 + m_2)))
}

/// 三维立方箱中粒子的平动能级 [J]
/// E = h²/(8 m L²) (nx² + ny² + nz²)，量子数从 1 开始
pub fn translational_energy(
    principal_numbers: [u32; 3],
    molecule: &str,
    box_length_m: f64,
) -> Result<f64> {
    if principal_numbers.iter().any(|&n| n == 0) {
        return Err(HaotError::InvalidArgument(
            "translational quantum numbers start at 1".to_string(),
        ));
    }
    if !(box_length_m.is_finite() && box_length_m > 0.0) {
        return Err(HaotError::InvalidArgument(format!(
            "box length must be positive, got {}",
            box_length_m
        )));
    }

    let mass = molar_mass_to_kilogram(constants::molar_mass(molecule)?);
    let n_sq: f64 = principal_numbers.iter().map(|&n| (n as f64).powi(2)).sum();
    Ok(H * H / (8.0 * mass * box_length_m * box_length_m) * n_sq)
}
