//! # 标准大气模型
//!
//! US Standard Atmosphere 1976（与 ICAO 标准大气在 86 km 以下一致）。
//! 输入为几何高度，内部换算为位势高度后逐层计算温度与压力。
//!
//! ## 公式
//! - 梯度层: P = P_b (T/T_b)^{−g₀/(L R)}
//! - 等温层: P = P_b exp(−g₀ Δh/(R T_b))
//!
//! ## 依赖关系
//! - 被 `optics::atmospheric_index_of_refraction` 和 `commands/optics.rs` 调用
//! - 无外部模块依赖

use crate::error::{HaotError, Result};

use serde::Serialize;

/// 标准重力加速度 [m/s²]
const G0: f64 = 9.80665;
/// 干空气比气体常数 [J/(kg·K)]
const R_AIR: f64 = 287.0531;
/// 空气比热比
const GAMMA_AIR: f64 = 1.4;
/// 位势高度换算用地球半径 [m]
const EARTH_RADIUS_M: f64 = 6_356_766.0;

/// 有效位势高度范围 [m]
pub const MIN_GEOPOTENTIAL_M: f64 = -5_000.0;
pub const MAX_GEOPOTENTIAL_M: f64 = 84_852.0;

/// 大气分层
#[derive(Debug, Clone, Copy)]
struct Layer {
    name: &'static str,
    /// 底部位势高度 [m]
    base_altitude: f64,
    /// 底部温度 [K]
    base_temperature: f64,
    /// 底部压力 [Pa]
    base_pressure: f64,
    /// 温度梯度 [K/m]
    lapse_rate: f64,
}

const LAYERS: [Layer; 7] = [
    Layer {
        name: "Troposphere",
        base_altitude: 0.0,
        base_temperature: 288.15,
        base_pressure: 101_325.0,
        lapse_rate: -0.0065,
    },
    Layer {
        name: "Tropopause",
        base_altitude: 11_000.0,
        base_temperature: 216.65,
        base_pressure: 22_632.06,
        lapse_rate: 0.0,
    },
    Layer {
        name: "Stratosphere",
        base_altitude: 20_000.0,
        base_temperature: 216.65,
        base_pressure: 5_474.889,
        lapse_rate: 0.001,
    },
    Layer {
        name: "Stratosphere",
        base_altitude: 32_000.0,
        base_temperature: 228.65,
        base_pressure: 868.0187,
        lapse_rate: 0.0028,
    },
    Layer {
        name: "Stratopause",
        base_altitude: 47_000.0,
        base_temperature: 270.65,
        base_pressure: 110.9063,
        lapse_rate: 0.0,
    },
    Layer {
        name: "Mesosphere",
        base_altitude: 51_000.0,
        base_temperature: 270.65,
        base_pressure: 66.93887,
        lapse_rate: -0.0028,
    },
    Layer {
        name: "Mesosphere",
        base_altitude: 71_000.0,
        base_temperature: 214.65,
        base_pressure: 3.956_420,
        lapse_rate: -0.002,
    },
];

/// 给定高度的大气状态
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Atmosphere {
    /// 几何高度 [m]
    pub altitude_m: f64,
    /// 位势高度 [m]
    pub geopotential_altitude_m: f64,
    /// 温度 [K]
    pub temperature_k: f64,
    /// 压力 [Pa]
    pub pressure_pa: f64,
    /// 密度 [kg/m³]
    pub density: f64,
    /// 声速 [m/s]
    pub speed_of_sound: f64,
    /// 所在大气层名称
    pub layer: &'static str,
}

impl Atmosphere {
    /// 计算几何高度处的标准大气状态
    pub fn at(altitude_m: f64) -> Result<Self> {
        let h = geopotential_altitude(altitude_m);
        if !h.is_finite() || !(MIN_GEOPOTENTIAL_M..=MAX_GEOPOTENTIAL_M).contains(&h) {
            return Err(HaotError::AltitudeOutOfRange {
                altitude_m,
                min: geometric_altitude(MIN_GEOPOTENTIAL_M),
                max: geometric_altitude(MAX_GEOPOTENTIAL_M),
            });
        }

        // 负高度沿对流层外推
        let layer = LAYERS
            .iter()
            .rev()
            .find(|layer| h >= layer.base_altitude)
            .unwrap_or(&LAYERS[0]);

        let dh = h - layer.base_altitude;
        let temperature = layer.base_temperature + layer.lapse_rate * dh;
        let pressure = if layer.lapse_rate == 0.0 {
            layer.base_pressure * (-G0 * dh / (R_AIR * layer.base_temperature)).exp()
        } else {
            layer.base_pressure
                * (temperature / layer.base_temperature).powf(-G0 / (layer.lapse_rate * R_AIR))
        };

        Ok(Self {
            altitude_m,
            geopotential_altitude_m: h,
            temperature_k: temperature,
            pressure_pa: pressure,
            density: pressure / (R_AIR * temperature),
            speed_of_sound: (GAMMA_AIR * R_AIR * temperature).sqrt(),
            layer: layer.name,
        })
    }

    /// 压力 [mbar]
    pub fn pressure_mbar(&self) -> f64 {
        self.pressure_pa * 0.01
    }
}

/// 几何高度 → 位势高度 [m]
pub fn geopotential_altitude(altitude_m: f64) -> f64 {
    EARTH_RADIUS_M * altitude_m / (EARTH_RADIUS_M + altitude_m)
}

/// 位势高度 → 几何高度 [m]
pub fn geometric_altitude(geopotential_m: f64) -> f64 {
    EARTH_RADIUS_M * geopotential_m / (EARTH_RADIUS_M - geopotential_m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sea_level() {
        let atm = Atmosphere::at(0.0).unwrap();
        assert_relative_eq!(atm.temperature_k, 288.15, epsilon = 1e-9);
        assert_relative_eq!(atm.pressure_pa, 101_325.0, epsilon = 1e-6);
        assert_relative_eq!(atm.density, 1.225, epsilon = 1e-3);
        assert_relative_eq!(atm.speed_of_sound, 340.294, epsilon = 1e-2);
        assert_eq!(atm.layer, "Troposphere");
    }

    #[test]
    fn test_layer_boundaries_are_continuous() {
        for pair in LAYERS.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            let dh = upper.base_altitude - lower.base_altitude;
            let t = lower.base_temperature + lower.lapse_rate * dh;
            assert_relative_eq!(t, upper.base_temperature, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_tropopause_values() {
        let atm = Atmosphere::at(geometric_altitude(15_000.0)).unwrap();
        assert_relative_eq!(atm.temperature_k, 216.65, epsilon = 1e-9);
        assert_relative_eq!(atm.pressure_pa, 12_044.6, max_relative = 1e-3);
        assert_eq!(atm.layer, "Tropopause");
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            Atmosphere::at(100_000.0),
            Err(HaotError::AltitudeOutOfRange { .. })
        ));
        assert!(Atmosphere::at(-6_000.0).is_err());
        assert!(Atmosphere::at(f64::NAN).is_err());
    }

    #[test]
    fn test_geopotential_roundtrip() {
        let z = 40_000.0;
        assert_relative_eq!(
            geometric_altitude(geopotential_altitude(z)),
            z,
            epsilon = 1e-6
        );
    }
}
