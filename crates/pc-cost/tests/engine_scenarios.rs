//! End-to-end checks of correlation, pressure table and composition together.

use pc_core::{Dimension, SizeRange, Tolerances, nearly_equal};
use pc_cost::{
    CostCoefficients, CostCorrelation, CostIndex, PressureFactorTable, PressureSegment,
    compose_linear, compose_pressure_adjusted, compose_simple, superheat_factor,
};

fn purchased(k: (f64, f64, f64), size: f64, cepci: f64) -> f64 {
    let log = size.log10();
    f64::powf(10.0, k.0 + k.1 * log + k.2 * log * log) * (cepci / 397.0)
}

const KNEADER: CostCorrelation = CostCorrelation::new(
    CostCoefficients::new(5.0141, 0.5867, 0.3224),
    SizeRange::new(0.14, 3.0),
);

#[test]
fn kneader_blender_reference_year() {
    let base = KNEADER.evaluate(1.0, CostIndex::default()).unwrap();
    assert!((base.value - 103_299.92).abs() < 0.01);
    assert_eq!(base.status.label(), "OK");

    let bare = compose_simple(&base, 1.12);
    assert!((bare.value() - 115_695.91).abs() < 0.01);
    assert!(bare.is_within_range());
    assert!(nearly_equal(bare.value(), base.value * 1.12, Tolerances::default()));
}

#[test]
fn kneader_blender_below_minimum() {
    let base = KNEADER.evaluate(0.1, CostIndex::default()).unwrap();
    assert_eq!(base.status.label(), "Warning - Below minimum size");
    assert!(!base.status.within_range());
    assert!(nearly_equal(
        base.value,
        purchased((5.0141, 0.5867, 0.3224), 0.1, 397.0),
        Tolerances::default()
    ));
}

#[test]
fn escalated_cost_index() {
    let idx = CostIndex::new(816.0).unwrap();
    let base = KNEADER.evaluate(2.0, idx).unwrap();
    assert!(nearly_equal(
        base.value,
        purchased((5.0141, 0.5867, 0.3224), 2.0, 816.0),
        Tolerances::default()
    ));
    assert_eq!(compose_simple(&base, 1.12).cost_index().value(), 816.0);
}

#[test]
fn centrifugal_pump_linear_bare_module() {
    let pump = CostCorrelation::new(
        CostCoefficients::new(3.3892, 0.0536, 0.1538),
        SizeRange::new(1.0, 300.0),
    );
    let table = PressureFactorTable::new(vec![
        PressureSegment::unity_below(10.0),
        PressureSegment::new(10.0, 100.0, CostCoefficients::new(0.1347, -0.2368, 0.1021)),
    ])
    .unwrap();

    let base = pump.evaluate(100.0, CostIndex::REFERENCE).unwrap();
    let fp = table.factor(50.0).unwrap();
    let result = compose_linear(&base, 1.89, 1.89, 1.54, &fp);

    let expected = purchased((3.3892, 0.0536, 0.1538), 100.0, 397.0)
        * (1.89 + 1.89 * 1.54 * fp.value);
    assert!(nearly_equal(result.value(), expected, Tolerances::default()));
    assert_eq!(result.statuses().count(), 2);
    assert!(result.status(Dimension::Pressure).unwrap().within_range());
}

#[test]
fn furnace_with_superheat_and_high_pressure() {
    let furnace = CostCorrelation::new(
        CostCoefficients::new(3.0680, 0.6597, 0.0194),
        SizeRange::new(3000.0, 100_000.0),
    );
    let table = PressureFactorTable::new(vec![
        PressureSegment::unity_below(10.0),
        PressureSegment::new(10.0, 200.0, CostCoefficients::new(0.1405, -0.2698, 0.1293)),
    ])
    .unwrap();

    let base = furnace.evaluate(10_000.0, CostIndex::REFERENCE).unwrap();
    let fp = table.factor(250.0).unwrap();
    let ft = superheat_factor(50.0);
    let result = compose_pressure_adjusted(&base, 2.14, &fp, ft);

    assert_eq!(
        result.status(Dimension::Pressure).unwrap().label(),
        "Warning - Upper pressure limit"
    );
    assert!(result.status(Dimension::Size).unwrap().within_range());
    assert!(nearly_equal(
        result.value(),
        base.value * 2.14 * fp.value * ft,
        Tolerances::default()
    ));
    assert!(fp.value > 1.0);
}

#[test]
fn shared_table_across_threads() {
    let table = std::sync::Arc::new(
        PressureFactorTable::new(vec![
            PressureSegment::unity_below(5.0),
            PressureSegment::new(5.0, 320.0, CostCoefficients::new(-0.16742, 0.13428, 0.15058)),
        ])
        .unwrap(),
    );
    let expected = table.factor(42.0).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let table = std::sync::Arc::clone(&table);
            std::thread::spawn(move || table.factor(42.0).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
