use super::{equilibrium_conf::EquilibriumConf, Equilibrium, EquilibriumResult};
use crate::{
    common::{dbg_id::DbgId, table::Table},
    error::Error,
    model::loading_condition::{CompartmentLoad, CompartmentProperties},
};
use std::sync::Once;
//
//
static INIT: Once = Once::new();
///
/// Once called initialisation.
fn init_once() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    })
}
///
/// Returns:
///  - ...
#[allow(clippy::unused_unit)]
fn init_each() -> () {}
//
//
fn conf() -> EquilibriumConf {
    EquilibriumConf { half_lbp: 100.0 }
}
///
/// Hydrostatic table of 2 rows, draught 8.0 and 8.5 m.
fn hydrostatic_table() -> Table {
    let row = |draught: f64, displacement: f64| {
        let mut row = vec![0.0; 30];
        // draught, displacement, lcf, lcb, vcb, kmt, mct
        (row[0], row[1], row[4], row[5], row[6], row[7], row[11]) =
            (draught, displacement, -1.0, 41.0, 4.0, 12.0, 100.0);
        row
    };
    Table::from_rows(30, [row(8.0, 9000.0), row(8.5, 9500.0)])
}
//
//
fn loads() -> CompartmentProperties {
    [
        ("Lightweight", CompartmentLoad { mass: 5000.0, lcg: 140.0, tcg: 0.0, vcg: 10.0, fsm: 0.0 }),
        ("R2.1P", CompartmentLoad { mass: 4250.0, lcg: 140.0, tcg: 0.0, vcg: 10.0, fsm: 925.0 }),
    ]
    .into_iter()
    .map(|(id, load)| (id.to_owned(), load))
    .collect()
}
///
/// Equilibrium of the loaded ship.
#[test]
fn solve() {
    init_once();
    init_each();
    let dbgid = DbgId("test Equilibrium.solve".to_owned());
    log::debug!("\n{}", dbgid);
    let result = Equilibrium::new(&dbgid, conf())
        .solve(&loads(), &hydrostatic_table())
        .unwrap();
    let trim = 9250.0 * (141.0 - 140.0) / (100.0 * 100.0);
    #[rustfmt::skip]
    let test_data = [
        // 0
        ("displacement",    result.displacement,    9250.0),
        ("lcg",             result.lcg,             140.0),
        ("tcg",             result.tcg,             0.1),
        ("vcg",             result.vcg,             10.0),
        ("draught_moulded", result.draught_moulded, 8.25),
        // 5
        ("lcf",             result.lcf,             99.0),
        ("lcb",             result.lcb,             141.0),
        ("vcb",             result.vcb,             4.0),
        ("kmt",             result.kmt,             12.0),
        ("mct",             result.mct,             100.0),
        // 10
        ("trim",            result.trim,            0.925),
        ("gm",              result.gm,              2.0),
        ("heel",            result.heel,            (0.1f64 / 2.0).atan().to_degrees()),
        ("draught_fwd",     result.draught_fwd,     8.25 - 0.5 * trim),
        ("draught_aft",     result.draught_aft,     8.25 + 0.5 * trim),
    ];
    for (step, (name, result, target)) in test_data.into_iter().enumerate() {
        assert!(
            (result - target).abs() < 1e-9,
            "{} | step={} {}: result={} target={}",
            dbgid,
            step,
            name,
            result,
            target
        );
    }
    assert!(!result.is_degenerate(), "{} | degenerate", dbgid);
}
///
/// Solving is a pure function of its inputs.
#[test]
fn solve_repeated() {
    init_once();
    init_each();
    let dbgid = DbgId("test Equilibrium.solve_repeated".to_owned());
    log::debug!("\n{}", dbgid);
    let equilibrium = Equilibrium::new(&dbgid, conf());
    let (loads, table) = (loads(), hydrostatic_table());
    let first = equilibrium.solve(&loads, &table).unwrap();
    let second = equilibrium.solve(&loads, &table).unwrap();
    assert_eq!(first, second, "{} | repeated", dbgid);
}
///
/// No compartments give zero displacement, which isn't an error.
#[test]
fn solve_degenerate() {
    init_once();
    init_each();
    let dbgid = DbgId("test Equilibrium.solve_degenerate".to_owned());
    log::debug!("\n{}", dbgid);
    let result = Equilibrium::new(&dbgid, conf())
        .solve(&CompartmentProperties::default(), &hydrostatic_table())
        .unwrap();
    assert!(result.is_degenerate(), "{} | degenerate", dbgid);
    assert_eq!(
        (result.lcg, result.tcg, result.vcg, result.trim),
        (0.0, 0.0, 0.0, 0.0),
        "{} | centers",
        dbgid
    );
    assert_eq!(result.gm, 12.0, "{} | gm", dbgid);
    assert_eq!(result.heel, 0.0, "{} | heel", dbgid);
    assert_ne!(result, EquilibriumResult::default(), "{} | hydrostatics", dbgid);
}
///
/// Hydrostatic table too short to interpolate.
#[test]
fn solve_insufficient_data() {
    init_once();
    init_each();
    let dbgid = DbgId("test Equilibrium.solve_insufficient_data".to_owned());
    log::debug!("\n{}", dbgid);
    let table = Table::from_rows(30, hydrostatic_table().rows().take(1).map(<[f64]>::to_vec));
    let result = Equilibrium::new(&dbgid, conf()).solve(&loads(), &table);
    assert!(
        matches!(result, Err(Error::InsufficientData(_))),
        "{} | result: {:?}",
        dbgid,
        result
    );
}
///
/// Longitudinal centers are measured from the aft perpendicular.
#[test]
fn hydrostatics() {
    init_once();
    init_each();
    let dbgid = DbgId("test Equilibrium.hydrostatics".to_owned());
    log::debug!("\n{}", dbgid);
    let equilibrium = Equilibrium::new(&dbgid, EquilibriumConf::default());
    let result = equilibrium.hydrostatics(&hydrostatic_table(), 9000.0).unwrap();
    assert_eq!(result.draught_moulded, 8.0, "{} | draught", dbgid);
    assert_eq!(result.lcf, 139.1 + -1.0, "{} | lcf", dbgid);
    assert_eq!(result.lcb, 139.1 + 41.0, "{} | lcb", dbgid);
}
