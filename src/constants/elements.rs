//! # 原子量表与化学式摩尔质量
//!
//! 解析简单化学式（如 `N2`, `CO2`, `NO+`, `O2-`, `N2 2+`）并计算平均摩尔质量。
//! 正电荷每单位扣除一个电子质量，负电荷每单位加上一个电子质量。
//!
//! ## 数据来源
//! IUPAC standard atomic weights (2009, conventional values)
//!
//! ## 依赖关系
//! - 被 `aerodynamics`, `optics`, `quantum_mechanics`, `conversions` 调用
//! - 使用 `regex` 解析化学式

use crate::constants::M_E_GMOL;
use crate::error::{HaotError, Result};

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// 标准原子量 [g/mol]
static ATOMIC_WEIGHTS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    HashMap::from([
        ("H", 1.00794),
        ("He", 4.002602),
        ("Li", 6.941),
        ("Be", 9.012182),
        ("B", 10.811),
        ("C", 12.0107),
        ("N", 14.0067),
        ("O", 15.9994),
        ("F", 18.9984032),
        ("Ne", 20.1797),
        ("Na", 22.98976928),
        ("Mg", 24.305),
        ("Al", 26.9815386),
        ("Si", 28.0855),
        ("P", 30.973762),
        ("S", 32.065),
        ("Cl", 35.453),
        ("Ar", 39.948),
        ("K", 39.0983),
        ("Ca", 40.078),
        ("Fe", 55.845),
        ("Kr", 83.798),
        ("Xe", 131.293),
    ])
});

static FORMULA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<body>(?:[A-Z][a-z]?\d*)+)\s*(?P<charge>\d*[+-]|[+-]\d*)?$")
        .expect("formula pattern is valid")
});

static ELEMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z][a-z]?)(\d*)").expect("element pattern is valid"));

/// 获取元素原子量 [g/mol]
pub fn atomic_weight(symbol: &str) -> Result<f64> {
    ATOMIC_WEIGHTS
        .get(symbol)
        .copied()
        .ok_or_else(|| HaotError::UnknownElement(symbol.to_string()))
}

/// 计算化学式的摩尔质量 [g/mol]
pub fn molar_mass(formula: &str) -> Result<f64> {
    let formula = formula.trim();
    let caps = FORMULA_RE
        .captures(formula)
        .ok_or_else(|| HaotError::InvalidFormula(formula.to_string()))?;

    let mut mass = 0.0;
    for cap in ELEMENT_RE.captures_iter(&caps["body"]) {
        let count: u32 = if cap[2].is_empty() {
            1
        } else {
            cap[2]
                .parse()
                .map_err(|_| HaotError::InvalidFormula(formula.to_string()))?
        };
        if count == 0 {
            return Err(HaotError::InvalidFormula(formula.to_string()));
        }
        mass += atomic_weight(&cap[1])? * count as f64;
    }

    let charge = caps
        .name("charge")
        .map(|m| parse_charge(m.as_str()))
        .transpose()
        .map_err(|_| HaotError::InvalidFormula(formula.to_string()))?
        .unwrap_or(0);

    Ok(mass - charge as f64 * M_E_GMOL)
}

/// 解析电荷后缀：`+`, `-`, `2+`, `+2`
fn parse_charge(suffix: &str) -> std::result::Result<i32, std::num::ParseIntError> {
    let sign = if suffix.contains('-') { -1 } else { 1 };
    let digits: String = suffix.chars().filter(|c| c.is_ascii_digit()).collect();
    let magnitude = if digits.is_empty() {
        1
    } else {
        digits.parse::<i32>()?
    };
    Ok(sign * magnitude)
}
