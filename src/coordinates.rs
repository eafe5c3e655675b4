//! # 坐标变换
//!
//! ## 功能
//! - Haversine 大圆距离
//! - 大地坐标 (LLA) ↔ 地心地固坐标 (ECEF)，WGS-84 椭球
//! - 滚转/俯仰/偏航方向余弦矩阵 (DCM) 与 3-2-1 欧拉角
//!
//! 角度输入输出均为度，长度为米。
//!
//! ## 依赖关系
//! - 被 `commands/coords.rs` 调用
//! - 无外部模块依赖

use crate::error::{HaotError, Result};

/// 三维向量
pub type Vector3 = [f64; 3];
/// 3×3 矩阵（行优先）
pub type Matrix3 = [[f64; 3]; 3];

/// 地球平均半径 [m]
pub const MEAN_EARTH_RADIUS_M: f64 = 6_371e3;

/// WGS-84 长半轴 [m]
const SEMI_MAJOR_M: f64 = 6_378_137.0;
/// WGS-84 短半轴 [m]
const SEMI_MINOR_M: f64 = 6_356_752.3142;

/// 第一偏心率的平方
fn eccentricity_squared() -> f64 {
    1.0 - (SEMI_MINOR_M / SEMI_MAJOR_M).powi(2)
}

/// 两点间 Haversine 距离，单位同 `sphere_radius`
pub fn haversine_distance(
    latitude_1: f64,
    longitude_1: f64,
    latitude_2: f64,
    longitude_2: f64,
    sphere_radius: f64,
) -> f64 {
    let lat_distance = (latitude_2 - latitude_1).to_radians();
    let lon_distance = (longitude_2 - longitude_1).to_radians();
    let lat_1 = latitude_1.to_radians();
    let lat_2 = latitude_2.to_radians();

    let tmp = (1.0 - lat_distance.cos()
        + lat_1.cos() * lat_2.cos() * (1.0 - lon_distance.cos()))
        / 2.0;
    // 舍入误差可能让 tmp 略超出 [0, 1]
    2.0 * sphere_radius * tmp.clamp(0.0, 1.0).sqrt().asin()
}

/// [纬度°, 经度°, 高度 m] → ECEF [m]
pub fn lla_to_ecef(lla: Vector3) -> Vector3 {
    let [lat_deg, lon_deg, alt_m] = lla;
    let (s_lat, c_lat) = lat_deg.to_radians().sin_cos();
    let (s_lon, c_lon) = lon_deg.to_radians().sin_cos();

    let e2 = eccentricity_squared();
    let radius_of_curvature = SEMI_MAJOR_M / (1.0 - e2 * s_lat * s_lat).sqrt();

    [
        (radius_of_curvature + alt_m) * c_lat * c_lon,
        (radius_of_curvature + alt_m) * c_lat * s_lon,
        ((1.0 - e2) * radius_of_curvature + alt_m) * s_lat,
    ]
}

/// ECEF [m] → [纬度°, 经度°, 高度 m]
///
/// Olson 闭式近似，精度优于毫米级。
/// 参考: https://danceswithcode.net/engineeringnotes/geodetic_to_ecef/geodetic_to_ecef.html
pub fn ecef_to_lla(ecef: Vector3) -> Result<Vector3> {
    let [x, y, z] = ecef;
    let radius = (x * x + y * y + z * z).sqrt();
    if !radius.is_finite() || radius == 0.0 {
        return Err(HaotError::InvalidArgument(
            "ECEF position must be finite and away from the Earth's centre".to_string(),
        ));
    }

    let e2 = eccentricity_squared();
    let a_1 = SEMI_MAJOR_M * e2;
    let a_2 = a_1 * a_1;
    let a_3 = 0.5 * a_1 * e2;
    let a_4 = 2.5 * a_2;
    let a_5 = a_1 + a_3;
    let a_6 = 1.0 - e2;

    let u = a_2 / radius;
    let v = a_3 - a_4 / radius;
    let s_2 = (z / radius).powi(2);
    let c_2 = (x * x + y * y) / (radius * radius);
    let longitude_deg = y.atan2(x).to_degrees();

    let (latitude_rad, s, c) = if c_2 > 0.3 {
        let s = (z.abs() / radius) * (1.0 + c_2 * (a_1 + u + s_2 * v) / radius);
        (s.asin(), s, (1.0 - s * s).sqrt())
    } else {
        let c = c_2.sqrt() * (1.0 - s_2 * (a_5 - u - c_2 * v) / radius);
        (c.acos(), (1.0 - c * c).sqrt(), c)
    };

    let g = 1.0 - e2 * s * s;
    let rg = SEMI_MAJOR_M / g.sqrt();
    let rf = a_6 * rg;
    let u = c_2.sqrt() * radius - rg * c;
    let v = z.abs() - rf * s;
    let f = c * u + s * v;
    let m = c * v - s * u;
    let p = m / (rf / g + f);

    let latitude_deg = (latitude_rad + p).to_degrees().copysign(z);
    let altitude_m = f + 0.5 * m * p;

    Ok([latitude_deg, longitude_deg, altitude_m])
}

// ─────────────────────────────────────────────────────────────
// 方向余弦矩阵
// ─────────────────────────────────────────────────────────────

/// 绕 x 轴的滚转 DCM
pub fn roll_dcm(roll_deg: f64) -> Matrix3 {
    let (s, c) = roll_deg.to_radians().sin_cos();
    [[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]]
}

/// 绕 y 轴的俯仰 DCM
pub fn pitch_dcm(pitch_deg: f64) -> Matrix3 {
    let (s, c) = pitch_deg.to_radians().sin_cos();
    [[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]]
}

/// 绕 z 轴的偏航 DCM
pub fn yaw_dcm(yaw_deg: f64) -> Matrix3 {
    let (s, c) = yaw_deg.to_radians().sin_cos();
    [[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]]
}

/// 3-2-1 (偏航 → 俯仰 → 滚转) DCM，等于 roll · pitch · yaw
pub fn euler_321_dcm(roll_deg: f64, pitch_deg: f64, yaw_deg: f64) -> Matrix3 {
    let (s_roll, c_roll) = roll_deg.to_radians().sin_cos();
    let (s_pitch, c_pitch) = pitch_deg.to_radians().sin_cos();
    let (s_yaw, c_yaw) = yaw_deg.to_radians().sin_cos();

    [
        [c_pitch * c_yaw, c_pitch * s_yaw, -s_pitch],
        [
            s_roll * s_pitch * c_yaw - c_roll * s_yaw,
            s_roll * s_pitch * s_yaw + c_roll * c_yaw,
            s_roll * c_pitch,
        ],
        [
            c_roll * s_pitch * c_yaw + s_roll * s_yaw,
            c_roll * s_pitch * s_yaw - s_roll * c_yaw,
            c_roll * c_pitch,
        ],
    ]
}

/// 由 3-2-1 DCM 还原 [滚转°, 俯仰°, 偏航°]
pub fn euler_angles_from_dcm(dcm: &Matrix3) -> Vector3 {
    let roll = dcm[1][2].atan2(dcm[2][2]);
    let pitch = (-dcm[0][2]).clamp(-1.0, 1.0).asin();
    let yaw = dcm[0][1].atan2(dcm[0][0]);

    [roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees()]
}

/// 矩阵乘法 a · b
pub fn matmul(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..3).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_matrix_eq(a: &Matrix3, b: &Matrix3) {
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(a[i][j], b[i][j], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_haversine_london_paris() {
        let d = haversine_distance(51.5074, -0.1278, 48.8566, 2.3522, MEAN_EARTH_RADIUS_M);
        assert_relative_eq!(d, 343_556.06, epsilon = 0.1);
    }

    #[test]
    fn test_haversine_antipodal_and_zero() {
        let half = haversine_distance(0.0, 0.0, 0.0, 180.0, MEAN_EARTH_RADIUS_M);
        assert_relative_eq!(half, std::f64::consts::PI * MEAN_EARTH_RADIUS_M, epsilon = 1e-3);
        assert_eq!(haversine_distance(10.0, 20.0, 10.0, 20.0, 1.0), 0.0);
    }

    #[test]
    fn test_lla_to_ecef_equator() {
        let ecef = lla_to_ecef([0.0, 0.0, 0.0]);
        assert_relative_eq!(ecef[0], SEMI_MAJOR_M, epsilon = 1e-6);
        assert_relative_eq!(ecef[1], 0.0, epsilon = 1e-6);
        assert_relative_eq!(ecef[2], 0.0, epsilon = 1e-6);

        let pole = lla_to_ecef([90.0, 0.0, 0.0]);
        assert_relative_eq!(pole[2], SEMI_MINOR_M, epsilon = 1e-3);
    }

    #[test]
    fn test_lla_ecef_roundtrip_all_quadrants() {
        for lla in [
            [45.0, -120.0, 1_000.0],
            [-33.9, 151.2, 50.0],
            [-60.0, -45.0, 10_000.0],
            [89.0, 170.0, 0.0],
            [10.0, 100.0, -100.0],
        ] {
            let back = ecef_to_lla(lla_to_ecef(lla)).unwrap();
            assert_relative_eq!(back[0], lla[0], epsilon = 1e-7);
            assert_relative_eq!(back[1], lla[1], epsilon = 1e-7);
            assert_relative_eq!(back[2], lla[2], epsilon = 1e-3);
        }
    }

    #[test]
    fn test_ecef_to_lla_origin() {
        assert!(ecef_to_lla([0.0, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_euler_321_is_product_of_rotations() {
        let (roll, pitch, yaw) = (10.0, -20.0, 135.0);
        let expected = matmul(&roll_dcm(roll), &matmul(&pitch_dcm(pitch), &yaw_dcm(yaw)));
        assert_matrix_eq(&euler_321_dcm(roll, pitch, yaw), &expected);
    }

    #[test]
    fn test_euler_angles_roundtrip() {
        let angles = [-150.0, 30.0, -100.0];
        let back = euler_angles_from_dcm(&euler_321_dcm(angles[0], angles[1], angles[2]));
        for (a, b) in angles.iter().zip(back) {
            assert_relative_eq!(*a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_dcm_is_orthonormal() {
        let dcm = euler_321_dcm(33.0, 12.0, 250.0);
        let mut transpose = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                transpose[i][j] = dcm[j][i];
            }
        }
        let identity = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert_matrix_eq(&matmul(&dcm, &transpose), &identity);
    }
}
