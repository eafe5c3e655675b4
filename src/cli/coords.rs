//! # coords 子命令 CLI 定义
//!
//! - `haversine`: 大圆距离
//! - `lla-to-ecef`: 大地坐标 → ECEF
//! - `ecef-to-lla`: ECEF → 大地坐标
//! - `dcm`: 3-2-1 欧拉角方向余弦矩阵
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/coords.rs`

use clap::{Args, Subcommand};
use haot::coordinates::MEAN_EARTH_RADIUS_M;

/// coords 主命令参数
#[derive(Args, Debug)]
pub struct CoordsArgs {
    #[command(subcommand)]
    pub command: CoordsCommands,
}

/// coords 子命令
#[derive(Subcommand, Debug)]
pub enum CoordsCommands {
    /// Great-circle distance between two points
    Haversine(HaversineArgs),

    /// Geodetic (lat, lon, alt) to Earth-centred Earth-fixed coordinates
    LlaToEcef(LlaArgs),

    /// Earth-centred Earth-fixed to geodetic (lat, lon, alt) coordinates
    EcefToLla(EcefArgs),

    /// Direction cosine matrix of a yaw-pitch-roll (3-2-1) rotation
    Dcm(DcmArgs),
}

/// haversine 子命令参数
#[derive(Args, Debug)]
pub struct HaversineArgs {
    /// Latitude of point 1 in degrees
    #[arg(allow_negative_numbers = true)]
    pub latitude_1: f64,

    /// Longitude of point 1 in degrees
    #[arg(allow_negative_numbers = true)]
    pub longitude_1: f64,

    /// Latitude of point 2 in degrees
    #[arg(allow_negative_numbers = true)]
    pub latitude_2: f64,

    /// Longitude of point 2 in degrees
    #[arg(allow_negative_numbers = true)]
    pub longitude_2: f64,

    /// Sphere radius in m
    #[arg(long, default_value_t = MEAN_EARTH_RADIUS_M)]
    pub radius: f64,
}

/// lla-to-ecef 子命令参数
#[derive(Args, Debug)]
pub struct LlaArgs {
    /// Latitude in degrees
    #[arg(allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude in degrees
    #[arg(allow_negative_numbers = true)]
    pub longitude: f64,

    /// Altitude above the WGS-84 ellipsoid in m
    #[arg(allow_negative_numbers = true, default_value_t = 0.0)]
    pub altitude: f64,
}

/// ecef-to-lla 子命令参数
#[derive(Args, Debug)]
pub struct EcefArgs {
    /// ECEF x in m
    #[arg(allow_negative_numbers = true)]
    pub x: f64,

    /// ECEF y in m
    #[arg(allow_negative_numbers = true)]
    pub y: f64,

    /// ECEF z in m
    #[arg(allow_negative_numbers = true)]
    pub z: f64,
}

/// dcm 子命令参数
#[derive(Args, Debug)]
pub struct DcmArgs {
    /// Roll angle in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub roll: f64,

    /// Pitch angle in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub pitch: f64,

    /// Yaw angle in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub yaw: f64,
}
