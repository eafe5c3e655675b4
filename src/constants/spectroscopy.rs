//! # 双原子分子光谱常数
//!
//! 基态电子态的振转光谱常数，单位 cm⁻¹（平衡核间距 r_e 单位 Å）。
//!
//! ## 数据来源
//! K. P. Huber and G. Herzberg, *Constants of Diatomic Molecules* (1979),
//! NIST Chemistry WebBook
//!
//! ## 依赖关系
//! - 被 `quantum_mechanics` 和 `optics` 调用
//! - 纯静态数据，无外部依赖

use crate::error::Result;

use std::collections::HashMap;
use std::sync::LazyLock;

/// 光谱常数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectroscopyConstants {
    /// 谐振频率 ω_e [cm⁻¹]
    pub omega_e: f64,
    /// 一阶非谐常数 ω_e x_e [cm⁻¹]
    pub omega_xe: f64,
    /// 二阶非谐常数 ω_e y_e [cm⁻¹]
    pub omega_ye: f64,
    /// 平衡转动常数 B_e [cm⁻¹]
    pub b_e: f64,
    /// 振转耦合常数 α_e [cm⁻¹]
    pub alpha_e: f64,
    /// 离心畸变常数 D_e [cm⁻¹]
    pub d_e: f64,
    /// 平衡核间距 r_e [Å]
    pub r_e: f64,
}

pub static SPECTROSCOPY_CONSTANTS: LazyLock<HashMap<&'static str, SpectroscopyConstants>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();

        m.insert(
            "H2",
            SpectroscopyConstants {
                omega_e: 4401.21,
                omega_xe: 121.33,
                omega_ye: 0.0,
                b_e: 60.853,
                alpha_e: 3.062,
                d_e: 0.0471,
                r_e: 0.74144,
            },
        );

        m.insert(
            "N2",
            SpectroscopyConstants {
                omega_e: 2358.57,
                omega_xe: 14.324,
                omega_ye: -0.00226,
                b_e: 1.998_241,
                alpha_e: 0.017_318,
                d_e: 5.76e-6,
                r_e: 1.097_68,
            },
        );

        m.insert(
            "O2",
            SpectroscopyConstants {
                omega_e: 1580.193,
                omega_xe: 11.981,
                omega_ye: 0.047_47,
                b_e: 1.437_676_6,
                alpha_e: 0.015_93,
                d_e: 4.839e-6,
                r_e: 1.207_52,
            },
        );

        m.insert(
            "NO",
            SpectroscopyConstants {
                omega_e: 1904.2,
                omega_xe: 14.075,
                omega_ye: 0.0,
                b_e: 1.671_95,
                alpha_e: 0.0171,
                d_e: 0.54e-6,
                r_e: 1.150_77,
            },
        );

        m.insert(
            "N2+",
            SpectroscopyConstants {
                omega_e: 2207.0,
                omega_xe: 16.10,
                omega_ye: -0.040,
                b_e: 1.931_76,
                alpha_e: 0.018_81,
                d_e: 6.1e-6,
                r_e: 1.116_42,
            },
        );

        m.insert(
            "O2+",
            SpectroscopyConstants {
                omega_e: 1904.7,
                omega_xe: 16.25,
                omega_ye: 0.0,
                b_e: 1.6913,
                alpha_e: 0.019_76,
                d_e: 5.29e-6,
                r_e: 1.1227,
            },
        );

        m.insert(
            "NO+",
            SpectroscopyConstants {
                omega_e: 2376.42,
                omega_xe: 16.262,
                omega_ye: -0.015_62,
                b_e: 1.997_27,
                alpha_e: 0.018_89,
                d_e: 5.64e-6,
                r_e: 1.063_22,
            },
        );

        m
    });

/// 获取分子光谱常数
pub fn spectroscopy_constants(molecule: &str) -> Result<&'static SpectroscopyConstants> {
    SPECTROSCOPY_CONSTANTS.get(molecule).ok_or_else(|| {
        let keys: Vec<&str> = SPECTROSCOPY_CONSTANTS.keys().copied().collect();
        super::unknown_molecule(molecule, "spectroscopy constants", &keys)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HaotError;

    #[test]
    fn test_lookup_n2() {
        let n2 = spectroscopy_constants("N2").unwrap();
        assert!((n2.omega_e - 2358.57).abs() < 1e-9);
        assert!(n2.b_e > 1.9 && n2.b_e < 2.1);
    }

    #[test]
    fn test_ions_are_present() {
        for ion in ["N2+", "O2+", "NO+"] {
            assert!(spectroscopy_constants(ion).is_ok(), "missing {}", ion);
        }
    }

    #[test]
    fn test_unknown_molecule_lists_supported() {
        match spectroscopy_constants("Argon") {
            Err(HaotError::UnknownMolecule { supported, .. }) => {
                assert!(supported.contains("N2"));
                assert!(supported.contains("NO+"));
            }
            other => panic!("expected UnknownMolecule, got {:?}", other),
        }
    }
}
