use super::{CompartmentLoad, LoadingCondition};
use crate::{
    common::{dbg_id::DbgId, table::Table},
    error::Error,
    model::tank_plan::{DensityTable, TankPlan},
    scanner::{cargo_hold_scanner::CargoHoldTables, sounding_scanner::SoundingTables},
};
use indexmap::IndexMap;
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
///
/// Tank plan of `fields` with densities 0.5 (slot 1) and 1.5 (slot 2).
fn tank_plan(fields: &[(&str, &[f64])]) -> TankPlan {
    let fields: IndexMap<String, Vec<f64>> = fields
        .iter()
        .map(|(id, values)| (id.to_string(), values.to_vec()))
        .collect();
    TankPlan::new(fields, DensityTable::from(vec![0.5, 1.5]))
}
///
/// Sounding table of 2 rows, fill 40% and 60%.
fn sounding_table() -> Table {
    let mut row0 = vec![0.0; 13];
    let mut row1 = vec![0.0; 13];
    // volume, fill, lcg, tcg, vcg, inertia
    (row0[1], row0[8], row0[9], row0[10], row0[11], row0[12]) = (100.0, 40.0, 10.0, 2.0, 1.0, -30.0);
    (row1[1], row1[8], row1[9], row1[10], row1[11], row1[12]) = (200.0, 60.0, 20.0, 4.0, 3.0, 10.0);
    Table::from_rows(13, [row0, row1])
}
///
/// Cargo hold table of 12 rows, capacity 1100 m3.
fn hold_table() -> Table {
    Table::from_rows(
        6,
        (0..12).map(|i| {
            let i = i as f64;
            vec![0.5 * i, 100.0 * i, 50.0 + i, 0.0, i, 0.0]
        }),
    )
}
///
/// Each class of compartments.
#[test]
fn calculate() {
    init_once();
    init_each();
    let dbgid = DbgId("test LoadingCondition.calculate".to_owned());
    log::debug!("\n{}", dbgid);
    let plan = tank_plan(&[
        ("Lightweight", &[5000.0, 60.0, 0.0, 10.0]),
        ("R1.2", &[550.0, 50.0]),
        ("R2.1P", &[150.0, 50.0, 0.0]),
        ("Crew and Stores", &[30.0, 99.0, 100.0, 1.0, 15.0, 0.5]),
        ("R3.1", &[10.0, 50.0, 1.0, 2.0, 3.0, 0.25]),
        ("Floating Condition", &[8.1, 0.5]),
    ]);
    let sounding_tables: SoundingTables = [("R2.1P".to_owned(), sounding_table())].into_iter().collect();
    let hold_tables: CargoHoldTables = [(2, hold_table())].into_iter().collect();
    let loads = LoadingCondition::new(&dbgid, &plan, &sounding_tables, &hold_tables)
        .calculate()
        .unwrap();
    #[rustfmt::skip]
    let target = [
        // 0
        ("Lightweight",     CompartmentLoad { mass: 5000.0, lcg: 60.0,  tcg: 0.0, vcg: 10.0, fsm: 0.0 }),
        ("R1.2",            CompartmentLoad { mass: 275.0,  lcg: 55.5,  tcg: 0.0, vcg: 5.5,  fsm: 0.0 }),
        ("R2.1P",           CompartmentLoad { mass: 225.0,  lcg: 15.0,  tcg: 3.0, vcg: 2.0,  fsm: 0.0 }),
        ("Crew and Stores", CompartmentLoad { mass: 30.0,   lcg: 100.0, tcg: 1.0, vcg: 15.0, fsm: 0.5 }),
        ("R3.1",            CompartmentLoad { mass: 10.0,   lcg: 1.0,   tcg: 2.0, vcg: 3.0,  fsm: 0.25 }),
    ];
    let result: Vec<(&str, CompartmentLoad)> = loads.iter().map(|(id, load)| (id, *load)).collect();
    assert_eq!(result, target.to_vec(), "{} | loads", dbgid);
    assert!(loads.get("Floating Condition").is_none(), "{} | floating condition", dbgid);
}
///
/// The first failed compartment fails the calculation.
#[test]
fn calculate_failure() {
    init_once();
    init_each();
    let dbgid = DbgId("test LoadingCondition.calculate_failure".to_owned());
    log::debug!("\n{}", dbgid);
    let lightweight: (&str, &[f64]) = ("Lightweight", &[5000.0, 60.0, 0.0, 10.0]);
    let short_hold = Table::from_rows(6, hold_table().rows().take(11).map(<[f64]>::to_vec));
    let single_row = Table::from_rows(13, sounding_table().rows().take(1).map(<[f64]>::to_vec));
    #[rustfmt::skip]
    let test_data: [(&[(&str, &[f64])], &str); 7] = [
        // 0
        (&[lightweight, ("R4.1", &[10.0, 50.0]), ("Crew", &[1.0])],  "R4.1"),
        (&[lightweight, ("Crew and Stores", &[30.0, 99.0, 100.0])],  "Crew and Stores"),
        (&[("Lightweight", &[5000.0, 60.0])],                        "Lightweight"),
        (&[lightweight, ("R1.3", &[550.0, 50.0])],                   "R1.3"),
        (&[lightweight, ("R1.4", &[550.0, 50.0])],                   "R1.4"),
        // 5
        (&[lightweight, ("R2.2S", &[150.0, 50.0])],                  "R2.2S"),
        (&[lightweight, ("R1.Z", &[150.0, 50.0])],                   "R1.Z"),
    ];
    let sounding_tables: SoundingTables = [
        ("R4.1".to_owned(), sounding_table()),
        ("R2.2S".to_owned(), single_row),
    ]
    .into_iter()
    .collect();
    let hold_tables: CargoHoldTables = [(4, short_hold)].into_iter().collect();
    for (step, (fields, target)) in test_data.into_iter().enumerate() {
        let plan = tank_plan(fields);
        let result = LoadingCondition::new(&dbgid, &plan, &sounding_tables, &hold_tables).calculate();
        assert!(
            matches!(&result, Err(Error::CompartmentResolution { id, .. }) if id == target),
            "{} | step={} target={} result={:?}",
            dbgid,
            step,
            target,
            result
        );
    }
}
///
/// Inertia moment is floored at zero.
#[test]
fn sounding_values() {
    init_once();
    init_each();
    let dbgid = DbgId("test LoadingCondition.sounding_values".to_owned());
    log::debug!("\n{}", dbgid);
    let plan = tank_plan(&[]);
    let (sounding_tables, hold_tables) = (SoundingTables::default(), CargoHoldTables::default());
    let condition = LoadingCondition::new(&dbgid, &plan, &sounding_tables, &hold_tables);
    #[rustfmt::skip]
    let test_data = [
        // 0
        (40.0, [100.0, 10.0, 2.0, 1.0, 0.0]),
        (55.0, [175.0, 17.5, 3.5, 2.5, 0.0]),
        (60.0, [200.0, 20.0, 4.0, 3.0, 10.0]),
        (70.0, [250.0, 25.0, 5.0, 4.0, 30.0]),
    ];
    for (step, (fill, target)) in test_data.into_iter().enumerate() {
        let vals = condition.sounding_values(&sounding_table(), fill).unwrap();
        let result = [vals.volume, vals.lcg, vals.tcg, vals.vcg, vals.inertia];
        assert_eq!(result, target, "{} | step={} fill={}", dbgid, step, fill);
    }
}
