//! # 极化率常数
//!
//! - 空气 11 组分（不含 Ar）的平均静态极化率 [cm³]
//! - Kerl 温度/频率插值参数
//! - Buldakov 极化率对核间距的导数
//! - Smith-Weintraub 大气折射常数
//!
//! ## 数据来源
//! - K. Kerl, U. Hohm, H. Varchmin, *Polarizability α(ω,T,ρ) of Small
//!   Molecules in the Gas Phase*, Ber. Bunsenges. Phys. Chem. 96 (1992)
//! - M. A. Buldakov et al., *Temperature Dependence of Polarizability of
//!   Diatomic Homonuclear Molecules*, Atmos. Oceanic Opt. (2016)
//! - E. K. Smith, S. Weintraub, Proc. IRE 41 (1953)
//!
//! ## 依赖关系
//! - 被 `optics` 调用
//! - 纯静态数据，无外部依赖

use crate::error::Result;

use std::collections::HashMap;
use std::sync::LazyLock;

/// 空气组分（高温空气 11 组分模型中除 Ar 外的分子、原子和离子）
pub const AIR_SPECIES: [&str; 10] = ["N+", "O+", "NO+", "N2+", "O2+", "N", "O", "NO", "N2", "O2"];

/// 平均静态极化率 [cm³]
static POLARIZABILITY: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    HashMap::from([
        ("N+", 0.559e-24),
        ("O+", 0.345e-24),
        ("NO+", 1.021e-24),
        ("N2+", 2.386e-24),
        ("O2+", 0.238e-24),
        ("N", 1.100e-24),
        ("O", 0.802e-24),
        ("NO", 1.700e-24),
        ("N2", 1.7403e-24),
        ("O2", 1.5689e-24),
    ])
});

/// 获取组分的平均静态极化率 [cm³]
pub fn polarizability(species: &str) -> Result<f64> {
    POLARIZABILITY.get(species).copied().ok_or_else(|| {
        let keys: Vec<&str> = POLARIZABILITY.keys().copied().collect();
        super::unknown_molecule(species, "polarizability table", &keys)
    })
}

/// 按 `AIR_SPECIES` 顺序返回完整极化率表 [cm³]
pub fn polarizability_table() -> Vec<(&'static str, f64)> {
    AIR_SPECIES
        .iter()
        .filter_map(|s| POLARIZABILITY.get(s).map(|p| (*s, *p)))
        .collect()
}

/// Kerl 插值参数
/// α(ω, T) = α₀ (1 + bT + cT²) / (1 − (ω/ω₀)²)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KerlConstants {
    /// 基态极化率 α₀ [m³]
    pub ground_polarizability: f64,
    /// 特征角频率 ω₀ [rad/s]
    pub ground_frequency: f64,
    /// 一次温度系数 [1/K]
    pub b: f64,
    /// 二次温度系数 [1/K²]
    pub c: f64,
}

static KERL: LazyLock<HashMap<&'static str, KerlConstants>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert(
        "H2",
        KerlConstants {
            ground_polarizability: 0.80320e-30,
            ground_frequency: 2.1399e16,
            b: 5.87e-6,
            c: 7.544e-9,
        },
    );

    m.insert(
        "N2",
        KerlConstants {
            ground_polarizability: 1.7406e-30,
            ground_frequency: 2.6049e16,
            b: 1.8e-6,
            c: 0.0,
        },
    );

    m.insert(
        "O2",
        KerlConstants {
            ground_polarizability: 1.5658e-30,
            ground_frequency: 2.1801e16,
            b: -2.369e-6,
            c: 8.687e-9,
        },
    );

    m.insert(
        "Air",
        KerlConstants {
            ground_polarizability: 1.6970e-30,
            ground_frequency: 2.47044e16,
            b: 10.6e-6,
            c: 7.909e-9,
        },
    );

    m
});

/// 获取 Kerl 插值参数（Air, H2, N2, O2）
pub fn kerl_interpolation(molecule: &str) -> Result<&'static KerlConstants> {
    KERL.get(molecule).ok_or_else(|| {
        let keys: Vec<&str> = KERL.keys().copied().collect();
        super::unknown_molecule(molecule, "Kerl interpolation", &keys)
    })
}

/// 平均极化率及其对约化位移 ξ = (r − r_e)/r_e 的导数 [Å³]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarizabilityDerivatives {
    pub zeroth: f64,
    pub first: f64,
    pub second: f64,
    pub third: f64,
}

static BULDAKOV: LazyLock<HashMap<&'static str, PolarizabilityDerivatives>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();

        m.insert(
            "H2",
            PolarizabilityDerivatives {
                zeroth: 0.7950,
                first: 0.9047,
                second: 0.4070,
                third: -0.1800,
            },
        );

        m.insert(
            "N2",
            PolarizabilityDerivatives {
                zeroth: 1.7406,
                first: 1.4880,
                second: 0.5500,
                third: -0.2500,
            },
        );

        m.insert(
            "O2",
            PolarizabilityDerivatives {
                zeroth: 1.5658,
                first: 1.3200,
                second: 0.6100,
                third: -0.2800,
            },
        );

        m
    });

/// 获取 Buldakov 极化率导数（H2, N2, O2）
pub fn buldakov_polarizability_derivatives(
    molecule: &str,
) -> Result<&'static PolarizabilityDerivatives> {
    BULDAKOV.get(molecule).ok_or_else(|| {
        let keys: Vec<&str> = BULDAKOV.keys().copied().collect();
        super::unknown_molecule(molecule, "Buldakov polarizability derivatives", &keys)
    })
}

/// Smith-Weintraub 常数 (K₁ [K/mbar], K₂ [K])
pub fn smith_atmospheric_constants() -> (f64, f64) {
    (77.6, 4810.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_species() {
        let table = polarizability_table();
        assert_eq!(table.len(), AIR_SPECIES.len());
        assert_eq!(table[0].0, "N+");
        assert_eq!(table[9].0, "O2");
    }

    #[test]
    fn test_kerl_only_supports_four_gases() {
        assert!(kerl_interpolation("Air").is_ok());
        assert!(kerl_interpolation("H2").is_ok());
        assert!(kerl_interpolation("Argon").is_err());
    }

    #[test]
    fn test_argon_has_no_polarizability_entry() {
        assert!(polarizability("Ar").is_err());
    }
}
