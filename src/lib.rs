//! # haot - 高超声速气动光学工具库
//!
//! 可压缩流、气体光学与双原子分子统计的闭式公式集合。
//!
//! ## 模块
//! - `aerodynamics` - Sutherland 定律、声速、等熵/正激波/斜激波关系
//! - `optics` - 极化率、折射率、Gladstone-Dale 常数
//! - `quantum_mechanics` - 振转能级、配分函数、Dunham 系数
//! - `atmosphere` - US Standard Atmosphere 1976
//! - `coordinates` - LLA/ECEF 变换与方向余弦矩阵
//! - `constants` - 物理常数与分子常数表
//! - `conversions` - 单位换算
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── constants/   (常数表)
//!   ├── conversions  (单位换算)
//!   ├── atmosphere   (标准大气)
//!   ├── aerodynamics
//!   ├── quantum_mechanics
//!   ├── optics       (使用 atmosphere, quantum_mechanics)
//!   ├── coordinates
//!   └── error.rs     (错误处理)
//! ```

pub mod aerodynamics;
pub mod atmosphere;
pub mod constants;
pub mod conversions;
pub mod coordinates;
pub mod error;
pub mod optics;
pub mod quantum_mechanics;

pub use error::{HaotError, Result};
