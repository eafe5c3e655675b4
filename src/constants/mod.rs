//! # 物理常数与查表模块
//!
//! 提供 CODATA 2018 物理常数，以及按分子名索引的静态常数表。
//!
//! ## 子模块
//! - `spectroscopy`: 双原子分子光谱常数
//! - `transport`: Sutherland 输运常数
//! - `polarizability`: 极化率、Kerl 插值、Buldakov 导数、Smith 大气常数
//! - `elements`: 原子量表与化学式摩尔质量
//!
//! ## 依赖关系
//! - 被 `aerodynamics`, `optics`, `quantum_mechanics`, `conversions` 使用
//! - 纯静态数据，一次加载多次使用

pub mod elements;
pub mod polarizability;
pub mod spectroscopy;
pub mod transport;

pub use elements::{atomic_weight, molar_mass};
pub use polarizability::{
    buldakov_polarizability_derivatives, kerl_interpolation, polarizability,
    polarizability_table, smith_atmospheric_constants, KerlConstants, PolarizabilityDerivatives,
};
pub use spectroscopy::{spectroscopy_constants, SpectroscopyConstants};
pub use transport::{sutherland_constants, SutherlandConstants};

use crate::error::HaotError;

// ─────────────────────────────────────────────────────────────
// CODATA 2018
// ─────────────────────────────────────────────────────────────

/// Boltzmann 常数 [J/K]
pub const K_B: f64 = 1.380649e-23;
/// Planck 常数 [J·s]
pub const H: f64 = 6.62607015e-34;
/// 真空光速 [m/s]
pub const C: f64 = 299_792_458.0;
/// Avogadro 常数 [1/mol]
pub const N_A: f64 = 6.02214076e23;
/// 真空介电常数 [F/m]
pub const EPSILON_0: f64 = 8.8541878128e-12;
/// 摩尔气体常数 [J/(mol·K)]
pub const R: f64 = 8.314462618;
/// 元电荷 [C]
pub const ELEMENTARY_CHARGE: f64 = 1.602176634e-19;
/// 电子伏特 [J]
pub const EV: f64 = ELEMENTARY_CHARGE;
/// 电子质量 [kg]
pub const M_E: f64 = 9.1093837015e-31;
/// 电子摩尔质量 [g/mol]
pub const M_E_GMOL: f64 = 5.48579909065e-4;

/// 默认比热比（双原子理想气体）
pub const DEFAULT_ADIABATIC_INDEX: f64 = 1.4;
/// 默认信号波长 [nm]（He-Ne 激光）
pub const DEFAULT_WAVELENGTH_NM: f64 = 633.0;

/// 构造查表失败的错误
pub(crate) fn unknown_molecule(molecule: &str, table: &str, keys: &[&str]) -> HaotError {
    let mut supported: Vec<&str> = keys.to_vec();
    supported.sort_unstable();
    HaotError::UnknownMolecule {
        molecule: molecule.to_string(),
        table: table.to_string(),
        supported: supported.join(", "),
    }
}
