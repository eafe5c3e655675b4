//! # 统一错误处理模块
//!
//! 定义 haot 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// haot 统一错误类型
#[derive(Error, Debug)]
pub enum HaotError {
    // ─────────────────────────────────────────────────────────────
    // 物理输入错误
    // ─────────────────────────────────────────────────────────────
    #[error("Temperature must be greater than 0 Kelvin, got {0}")]
    InvalidTemperature(f64),

    #[error("Wavelength must be greater than 0 nanometers, got {0}")]
    InvalidWavelength(f64),

    #[error("Invalid Mach number {mach}: {reason}")]
    InvalidMach { mach: f64, reason: String },

    #[error("Adiabatic index must be greater than 1, got {0}")]
    InvalidAdiabaticIndex(f64),

    #[error("Invalid shock angle {angle_deg}°: {reason}")]
    InvalidShockAngle { angle_deg: f64, reason: String },

    #[error("Refractive index must be positive, got {0}")]
    InvalidRefractiveIndex(f64),

    #[error("Altitude {altitude_m} m is outside the standard atmosphere ({min} to {max} m)")]
    AltitudeOutOfRange { altitude_m: f64, min: f64, max: f64 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Dimension mismatch: {left} values vs {right} values")]
    DimensionMismatch { left: usize, right: usize },

    // ─────────────────────────────────────────────────────────────
    // 常数表查询错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown molecule '{molecule}' for {table} (supported: {supported})")]
    UnknownMolecule {
        molecule: String,
        table: String,
        supported: String,
    },

    #[error("Unknown element '{0}'")]
    UnknownElement(String),

    #[error("Invalid chemical formula: {0}")]
    InvalidFormula(String),

    // ─────────────────────────────────────────────────────────────
    // 参数解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // I/O 与导出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plotting failed: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, HaotError>;

/// 校验温度为正
pub(crate) fn check_temperature(temperature_k: f64) -> Result<()> {
    if temperature_k.is_finite() && temperature_k > 0.0 {
        Ok(())
    } else {
        Err(HaotError::InvalidTemperature(temperature_k))
    }
}

/// 校验比热比大于 1
pub(crate) fn check_adiabatic_index(adiabatic_index: f64) -> Result<()> {
    if adiabatic_index.is_finite() && adiabatic_index > 1.0 {
        Ok(())
    } else {
        Err(HaotError::InvalidAdiabaticIndex(adiabatic_index))
    }
}
