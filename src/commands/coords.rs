//! # coords 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/coords.rs` 定义的参数
//! - 使用 `haot::coordinates`

use crate::cli::coords::{CoordsArgs, CoordsCommands, DcmArgs, EcefArgs, HaversineArgs, LlaArgs};
use crate::utils::output;

use haot::coordinates;
use haot::error::Result;
use tabled::builder::Builder;

/// 执行 coords 命令
pub fn execute(args: CoordsArgs) -> Result<()> {
    match args.command {
        CoordsCommands::Haversine(a) => execute_haversine(a),
        CoordsCommands::LlaToEcef(a) => execute_lla_to_ecef(a),
        CoordsCommands::EcefToLla(a) => execute_ecef_to_lla(a),
        CoordsCommands::Dcm(a) => execute_dcm(a),
    }
}

fn execute_haversine(args: HaversineArgs) -> Result<()> {
    output::print_header("Haversine Distance");
    let d = coordinates::haversine_distance(
        args.latitude_1,
        args.longitude_1,
        args.latitude_2,
        args.longitude_2,
        args.radius,
    );
    output::print_info(&format!(
        "({}, {}) → ({}, {})",
        args.latitude_1, args.longitude_1, args.latitude_2, args.longitude_2
    ));
    output::print_value("Distance", d, "m");
    output::print_value("Distance", d / 1e3, "km");
    Ok(())
}

fn execute_lla_to_ecef(args: LlaArgs) -> Result<()> {
    output::print_header("Geodetic → ECEF (WGS-84)");
    let [x, y, z] = coordinates::lla_to_ecef([args.latitude, args.longitude, args.altitude]);
    output::print_value("x", x, "m");
    output::print_value("y", y, "m");
    output::print_value("z", z, "m");
    Ok(())
}

fn execute_ecef_to_lla(args: EcefArgs) -> Result<()> {
    output::print_header("ECEF → Geodetic (WGS-84)");
    let [lat, lon, alt] = coordinates::ecef_to_lla([args.x, args.y, args.z])?;
    output::print_value("Latitude", lat, "°");
    output::print_value("Longitude", lon, "°");
    output::print_value("Altitude", alt, "m");
    Ok(())
}

fn execute_dcm(args: DcmArgs) -> Result<()> {
    output::print_header("3-2-1 Direction Cosine Matrix");
    let dcm = coordinates::euler_321_dcm(args.roll, args.pitch, args.yaw);

    let mut builder = Builder::default();
    for row in &dcm {
        builder.push_record(row.iter().map(|c| format!("{:+.8}", c)));
    }
    println!("{}", builder.build());

    // 由矩阵还原的角度落在主值区间内
    let [roll, pitch, yaw] = coordinates::euler_angles_from_dcm(&dcm);
    output::print_value("Roll", roll, "°");
    output::print_value("Pitch", pitch, "°");
    output::print_value("Yaw", yaw, "°");
    Ok(())
}
