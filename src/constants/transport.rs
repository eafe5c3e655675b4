//! # Sutherland 输运常数
//!
//! ## 公式
//! μ(T) = μ_ref (T_ref + S_μ)/(T + S_μ) (T/T_ref)^{3/2}
//! k(T) = k_ref (T_ref + S_k)/(T + S_k) (T/T_ref)^{3/2}
//!
//! ## 数据来源
//! F. M. White, *Viscous Fluid Flow*, Tables 1-2 and 1-3
//!
//! ## 依赖关系
//! - 被 `aerodynamics` 调用
//! - 纯静态数据，无外部依赖

use crate::error::Result;

use std::collections::HashMap;
use std::sync::LazyLock;

/// Sutherland 常数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SutherlandConstants {
    /// 参考温度 [K]
    pub temperature_ref: f64,
    /// 参考动力粘度 [kg/(m·s)]
    pub viscosity_ref: f64,
    /// 粘度 Sutherland 温度 [K]
    pub sutherland_visc: f64,
    /// 参考热导率 [W/(m·K)]
    pub conductivity_ref: f64,
    /// 热导率 Sutherland 温度 [K]
    pub sutherland_cond: f64,
}

pub static SUTHERLAND_CONSTANTS: LazyLock<HashMap<&'static str, SutherlandConstants>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();

        m.insert(
            "Air",
            SutherlandConstants {
                temperature_ref: 273.0,
                viscosity_ref: 1.716e-5,
                sutherland_visc: 111.0,
                conductivity_ref: 0.0241,
                sutherland_cond: 194.0,
            },
        );

        m.insert(
            "Argon",
            SutherlandConstants {
                temperature_ref: 273.0,
                viscosity_ref: 2.125e-5,
                sutherland_visc: 114.0,
                conductivity_ref: 0.0163,
                sutherland_cond: 170.0,
            },
        );

        m.insert(
            "N2",
            SutherlandConstants {
                temperature_ref: 273.0,
                viscosity_ref: 1.663e-5,
                sutherland_visc: 107.0,
                conductivity_ref: 0.0242,
                sutherland_cond: 150.0,
            },
        );

        m.insert(
            "O2",
            SutherlandConstants {
                temperature_ref: 273.0,
                viscosity_ref: 1.919e-5,
                sutherland_visc: 139.0,
                conductivity_ref: 0.0244,
                sutherland_cond: 240.0,
            },
        );

        m
    });

/// 获取气体的 Sutherland 常数
pub fn sutherland_constants(gas: &str) -> Result<&'static SutherlandConstants> {
    SUTHERLAND_CONSTANTS.get(gas).ok_or_else(|| {
        let keys: Vec<&str> = SUTHERLAND_CONSTANTS.keys().copied().collect();
        super::unknown_molecule(gas, "Sutherland constants", &keys)
    })
}
