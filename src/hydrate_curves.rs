//! Permian hydrate formation curves.
//!
//! Each curve holds the hydrate formation temperature [F] against the absolute
//! pressure [psia] for one methanol dosage [gal/MMscf]. The samples are kept in
//! their recorded order, including the repeated pressures and the local
//! temperature reversals some curves show at low pressure.
use crate::errors::MethanolError;
use crate::ipol::interpolate_linear;
use log::trace;
use serde::Serialize;

/// Methanol dosages [gal/MMscf] with a hydrate curve, ascending.
pub const DOSAGE_LEVELS: [u32; 8] = [2, 4, 6, 8, 10, 12, 14, 16];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DosageCurve {
    pub dosage: u32,
    samples: &'static [(f64, f64)],
}

impl DosageCurve {
    /// (temperature [F], pressure [psia]) pairs in recorded order.
    pub fn samples(&self) -> &'static [(f64, f64)] {
        self.samples
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.samples.iter().map(|(t, _)| *t).collect()
    }

    pub fn pressures(&self) -> Vec<f64> {
        self.samples.iter().map(|(_, p)| *p).collect()
    }

    pub fn min_pressure(&self) -> f64 {
        self.samples
            .iter()
            .fold(std::f64::MAX, |acc, (_, p)| acc.min(*p))
    }

    pub fn max_pressure(&self) -> f64 {
        self.samples
            .iter()
            .fold(std::f64::MIN, |acc, (_, p)| acc.max(*p))
    }

    /// Hydrate formation temperature [F] at an absolute pressure [psia].
    pub fn hydrate_temp_at_pressure(&self, pressure_psia: f64) -> f64 {
        hydrate_temp_at_pressure(self.samples, pressure_psia)
    }
}

/// Interpolate the hydrate formation temperature at `pressure_psia`.
///
/// Pressures outside the sampled range are clamped to the temperature of the
/// lowest (highest) pressure sample. Inside the range the first consecutive
/// pair of samples bracketing the pressure, in recorded order, is used. If the
/// samples are too irregular for any pair to bracket the pressure the last
/// sample's temperature is returned.
pub fn hydrate_temp_at_pressure(samples: &[(f64, f64)], pressure_psia: f64) -> f64 {
    let (t_last, _) = match samples.last() {
        Some(s) => *s,
        None => return std::f64::NAN,
    };

    // first occurrence of the extreme pressures
    let mut i_min = 0;
    let mut i_max = 0;
    for (i, (_, p)) in samples.iter().enumerate() {
        if *p < samples[i_min].1 {
            i_min = i;
        }
        if *p > samples[i_max].1 {
            i_max = i;
        }
    }
    let (t_min, p_min) = samples[i_min];
    let (t_max, p_max) = samples[i_max];
    if pressure_psia <= p_min {
        return t_min;
    }
    if pressure_psia >= p_max {
        return t_max;
    }

    for pair in samples.windows(2) {
        let (t0, p0) = pair[0];
        let (t1, p1) = pair[1];
        if p0 <= pressure_psia && pressure_psia <= p1 {
            trace!(
                "bracket [{} psia, {} psia] for {} psia",
                p0,
                p1,
                pressure_psia
            );
            return interpolate_linear(pressure_psia, p0, p1, t0, t1);
        }
    }
    t_last
}

pub fn dosage_levels() -> &'static [u32] {
    &DOSAGE_LEVELS
}

/// All hydrate curves, ascending in dosage.
pub fn curves() -> impl Iterator<Item = &'static DosageCurve> {
    HYDRATE_CURVES.iter()
}

/// The hydrate curve for a dosage [gal/MMscf].
pub fn curve(dosage: u32) -> Option<&'static DosageCurve> {
    HYDRATE_CURVES.iter().find(|c| c.dosage == dosage)
}

pub fn get_curve(dosage: u32) -> Result<&'static DosageCurve, MethanolError> {
    curve(dosage).ok_or(MethanolError::DosageNotFound(dosage))
}

pub static HYDRATE_CURVES: [DosageCurve; 8] = [
    DosageCurve {
        dosage: 2,
        samples: &CURVE_2,
    },
    DosageCurve {
        dosage: 4,
        samples: &CURVE_4,
    },
    DosageCurve {
        dosage: 6,
        samples: &CURVE_6,
    },
    DosageCurve {
        dosage: 8,
        samples: &CURVE_8,
    },
    DosageCurve {
        dosage: 10,
        samples: &CURVE_10,
    },
    DosageCurve {
        dosage: 12,
        samples: &CURVE_12,
    },
    DosageCurve {
        dosage: 14,
        samples: &CURVE_14,
    },
    DosageCurve {
        dosage: 16,
        samples: &CURVE_16,
    },
];

const CURVE_2: [(f64, f64); 50] = [
    (-14.18, 14.70), (8.48, 46.28), (19.49, 77.87), (26.94, 109.45), (32.59, 141.04),
    (37.17, 172.63), (41.01, 204.21), (43.41, 235.80), (45.13, 267.38), (46.66, 298.97),
    (48.02, 330.55), (49.25, 362.14), (50.37, 393.73), (51.39, 425.31), (52.33, 456.90),
    (53.20, 488.48), (54.01, 520.07), (54.76, 551.65), (55.46, 583.24), (56.11, 614.83),
    (56.72, 646.41), (57.30, 678.00), (57.85, 709.58), (58.36, 741.17), (58.84, 772.76),
    (59.30, 804.34), (59.74, 835.93), (60.15, 867.51), (60.55, 899.10), (60.92, 930.68),
    (61.28, 962.27), (61.62, 993.86), (61.95, 1025.44), (62.26, 1057.03), (62.56, 1088.61),
    (62.84, 1120.20), (63.11, 1151.79), (63.37, 1183.37), (63.62, 1214.96), (63.87, 1246.54),
    (64.10, 1278.13), (64.32, 1309.71), (64.53, 1341.30), (64.74, 1372.89), (64.94, 1404.47),
    (65.14, 1436.06), (65.34, 1467.64), (65.52, 1499.23), (65.70, 1530.81), (65.89, 1562.40),
];

const CURVE_4: [(f64, f64); 50] = [
    (-12.67, 14.70), (10.13, 46.28), (21.22, 77.87), (28.73, 109.45), (33.43, 141.04),
    (35.98, 172.63), (38.11, 204.21), (39.94, 235.80), (41.53, 267.38), (42.95, 298.97),
    (44.21, 330.55), (45.35, 362.14), (46.40, 393.73), (47.35, 425.31), (48.24, 456.90),
    (49.05, 488.48), (49.81, 520.07), (50.52, 551.65), (51.19, 583.24), (51.81, 614.83),
    (52.40, 646.41), (52.96, 678.00), (53.48, 709.58), (53.98, 741.17), (54.45, 772.76),
    (54.90, 804.34), (55.32, 835.93), (55.73, 867.51), (56.12, 899.10), (56.49, 930.68),
    (56.84, 962.27), (57.18, 993.86), (57.50, 1025.44), (57.81, 1057.03), (58.11, 1088.61),
    (58.39, 1120.20), (58.67, 1151.79), (58.93, 1183.37), (59.18, 1214.96), (59.43, 1246.54),
    (59.67, 1278.13), (59.89, 1309.71), (60.11, 1341.30), (60.32, 1372.89), (60.53, 1404.47),
    (60.74, 1436.06), (60.95, 1467.64), (61.15, 1499.23), (61.35, 1530.81), (61.54, 1562.40),
];

const CURVE_6: [(f64, f64); 50] = [
    (-11.27, 14.70), (11.67, 46.28), (22.82, 77.87), (27.28, 109.45), (30.15, 141.04),
    (32.20, 172.63), (34.09, 204.21), (35.72, 235.80), (37.14, 267.38), (38.41, 298.97),
    (39.56, 330.55), (40.60, 362.14), (41.55, 393.73), (42.44, 425.31), (43.26, 456.90),
    (44.03, 488.48), (44.74, 520.07), (45.42, 551.65), (46.06, 583.24), (46.66, 614.83),
    (47.23, 646.41), (47.77, 678.00), (48.28, 709.58), (48.77, 741.17), (49.24, 772.76),
    (49.68, 804.34), (50.11, 835.93), (50.52, 867.51), (50.91, 899.10), (51.28, 930.68),
    (51.64, 962.27), (51.98, 993.86), (52.32, 1025.44), (52.64, 1057.03), (52.94, 1088.61),
    (53.24, 1120.20), (53.52, 1151.79), (53.80, 1183.37), (54.07, 1214.96), (54.32, 1246.54),
    (54.57, 1278.13), (54.81, 1309.71), (55.05, 1341.30), (55.27, 1372.89), (55.49, 1404.47),
    (55.71, 1436.06), (55.93, 1467.64), (56.14, 1499.23), (56.35, 1530.81), (56.61, 1562.40),
];

const CURVE_8: [(f64, f64); 50] = [
    (-9.97, 14.70), (13.10, 46.28), (20.23, 77.87), (23.40, 109.45), (25.77, 141.04),
    (27.67, 172.63), (29.27, 204.21), (30.67, 235.80), (31.93, 267.38), (32.52, 298.97),
    (33.52, 330.55), (34.45, 362.14), (35.32, 393.73), (36.14, 425.31), (36.91, 456.90),
    (37.64, 488.48), (38.34, 520.07), (39.00, 551.65), (39.63, 583.24), (40.24, 614.83),
    (40.81, 646.41), (41.36, 678.00), (41.89, 709.58), (42.40, 741.17), (42.88, 772.76),
    (43.35, 804.34), (43.80, 835.93), (44.23, 867.51), (44.64, 899.10), (45.04, 930.68),
    (45.42, 962.27), (45.79, 993.86), (46.15, 1025.44), (46.49, 1057.03), (46.82, 1088.61),
    (47.15, 1120.20), (47.46, 1151.79), (47.76, 1183.37), (48.05, 1214.96), (48.33, 1246.54),
    (48.61, 1278.13), (48.87, 1309.71), (49.13, 1341.30), (49.39, 1372.89), (49.63, 1404.47),
    (49.88, 1436.06), (50.12, 1467.64), (50.08, 1467.64), (50.67, 1530.81), (50.90, 1562.40),
];

const CURVE_10: [(f64, f64); 50] = [
    (-8.75, 14.70), (12.42, 46.28), (16.02, 77.87), (18.12, 109.45), (19.59, 141.04),
    (20.77, 172.63), (21.83, 204.21), (22.84, 235.80), (23.84, 267.38), (24.81, 298.97),
    (25.78, 330.55), (26.72, 362.14), (27.64, 393.73), (28.54, 425.31), (29.41, 456.90),
    (30.24, 488.48), (31.05, 520.07), (31.83, 551.65), (32.44, 583.24), (32.47, 614.83),
    (32.66, 646.41), (33.28, 678.00), (33.87, 709.58), (34.44, 741.17), (34.99, 772.76),
    (35.52, 804.34), (36.03, 835.93), (36.52, 867.51), (37.00, 899.10), (37.45, 930.68),
    (37.89, 962.27), (38.31, 993.86), (38.73, 1025.44), (39.12, 1057.03), (39.50, 1088.61),
    (39.87, 1120.20), (40.23, 1151.79), (40.57, 1183.37), (40.91, 1214.96), (41.23, 1246.54),
    (41.54, 1278.13), (41.85, 1309.71), (42.16, 1341.30), (42.45, 1372.89), (42.74, 1404.47),
    (43.03, 1436.06), (43.31, 1467.64), (43.50, 1499.23), (43.88, 1530.81), (44.22, 1562.40),
];

const CURVE_12: [(f64, f64); 50] = [
    (-7.60, 14.70), (8.55, 46.28), (9.66, 77.87), (9.10, 109.45), (8.31, 141.04),
    (8.20, 172.63), (8.83, 204.21), (9.87, 235.80), (11.10, 267.38), (12.40, 298.97),
    (13.69, 330.55), (14.96, 362.14), (16.18, 393.73), (17.35, 425.31), (18.47, 456.90),
    (19.54, 488.48), (20.57, 520.07), (21.54, 551.65), (22.47, 583.24), (23.36, 614.83),
    (24.21, 646.41), (25.03, 678.00), (25.81, 709.58), (26.57, 741.17), (27.28, 772.76),
    (27.97, 804.34), (28.64, 835.93), (29.28, 867.51), (29.90, 899.10), (30.50, 930.68),
    (31.07, 962.27), (31.63, 993.86), (32.17, 1025.44), (32.69, 1057.03), (32.81, 1088.61),
    (32.84, 1120.20), (32.86, 1151.79), (32.88, 1183.37), (32.91, 1214.96), (32.96, 1246.54),
    (33.33, 1278.13), (33.69, 1309.71), (34.04, 1341.30), (34.38, 1372.89), (34.72, 1404.47),
    (35.05, 1436.06), (35.37, 1467.64), (35.42, 1499.23), (35.92, 1530.81), (36.40, 1562.40),
];

const CURVE_14: [(f64, f64); 50] = [
    (-6.52, 14.70), (2.49, 46.28), (-13.93, 77.87), (-15.93, 109.45), (-13.05, 141.04),
    (-10.09, 172.63), (-7.38, 204.21), (-4.93, 235.80), (-2.70, 267.38), (-0.68, 298.97),
    (1.18, 330.55), (2.89, 362.14), (4.48, 393.73), (5.95, 425.31), (7.33, 456.90),
    (8.63, 488.48), (9.84, 520.07), (10.99, 551.65), (12.07, 583.24), (13.10, 614.83),
    (14.08, 646.41), (15.00, 678.00), (15.89, 709.58), (16.74, 741.17), (17.55, 772.76),
    (18.32, 804.34), (19.07, 835.93), (19.78, 867.51), (20.47, 899.10), (21.13, 930.68),
    (21.77, 962.27), (22.38, 993.86), (22.97, 1025.44), (23.54, 1057.03), (24.10, 1088.61),
    (24.64, 1120.20), (25.16, 1151.79), (25.66, 1183.37), (26.16, 1214.96), (26.64, 1246.54),
    (27.11, 1278.13), (27.56, 1309.71), (28.01, 1341.30), (28.45, 1372.89), (28.89, 1404.47),
    (29.32, 1436.06), (29.74, 1467.64), (28.98, 1467.64), (29.70, 1499.23), (30.63, 1562.40),
];

const CURVE_16: [(f64, f64); 50] = [
    (-5.50, 14.70), (-43.70, 46.28), (-35.02, 77.87), (-28.96, 109.45), (-24.29, 141.04),
    (-20.49, 172.63), (-17.27, 204.21), (-14.49, 235.80), (-12.04, 267.38), (-9.84, 298.97),
    (-7.86, 330.55), (-6.06, 362.14), (-4.40, 393.73), (-2.86, 425.31), (-1.43, 456.90),
    (-0.10, 488.48), (1.14, 520.07), (2.31, 551.65), (3.42, 583.24), (4.46, 614.83),
    (5.45, 646.41), (6.39, 678.00), (7.28, 709.58), (8.13, 741.17), (8.94, 772.76),
    (9.71, 804.34), (10.46, 835.93), (11.17, 867.51), (11.85, 899.10), (12.50, 930.68),
    (13.13, 962.27), (13.73, 993.86), (14.32, 1025.44), (14.88, 1057.03), (15.42, 1088.61),
    (15.95, 1120.20), (16.46, 1151.79), (16.94, 1183.37), (17.43, 1214.96), (17.89, 1246.54),
    (18.35, 1278.13), (18.79, 1309.71), (19.22, 1341.30), (19.65, 1372.89), (20.07, 1404.47),
    (20.49, 1436.06), (20.91, 1467.64), (20.67, 1499.23), (21.44, 1530.81), (22.19, 1562.40),
];

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn dataset_layout() {
        let dosages: Vec<u32> = curves().map(|c| c.dosage).collect();
        assert_eq!(dosages, dosage_levels().to_vec());
        for c in curves() {
            assert_eq!(c.samples().len(), 50);
            assert_eq!(c.min_pressure(), 14.7);
            assert_eq!(c.max_pressure(), 1562.4);
            let p = c.pressures();
            assert!(p.windows(2).all(|w| w[0] <= w[1]), "curve {}", c.dosage);
        }
    }

    #[test]
    fn curve_lookup() {
        assert_eq!(curve(10).unwrap().dosage, 10);
        assert!(curve(3).is_none());
        assert_eq!(get_curve(18).unwrap_err(), MethanolError::DosageNotFound(18));
    }

    #[test]
    fn exact_sample_pressure() {
        for c in curves() {
            // the first sample bracketing a pressure is the one returned
            let mut seen = vec![];
            for (t, p) in c.samples() {
                if seen.contains(p) {
                    continue;
                }
                seen.push(*p);
                assert_eq!(c.hydrate_temp_at_pressure(*p), *t, "curve {} at {}", c.dosage, p);
            }
        }
    }

    #[test]
    fn repeated_pressure_uses_first_sample() {
        // 8 and 14 gal/MMscf both repeat 1467.64 psia
        assert_eq!(curve(8).unwrap().hydrate_temp_at_pressure(1467.64), 50.12);
        assert_eq!(curve(14).unwrap().hydrate_temp_at_pressure(1467.64), 29.74);
        let t = curve(8).unwrap().hydrate_temp_at_pressure(1500.0);
        assert!((t - 50.38223840430584).abs() < 1e-9);
    }

    #[test]
    fn clamp_outside_range() {
        let c = curve(12).unwrap();
        assert_eq!(c.hydrate_temp_at_pressure(10.0), -7.6);
        assert_eq!(c.hydrate_temp_at_pressure(0.0), -7.6);
        assert_eq!(c.hydrate_temp_at_pressure(2000.0), 36.4);
        assert_eq!(c.hydrate_temp_at_pressure(1562.4), 36.4);
    }

    #[test]
    fn interpolate_between_samples() {
        let c = curve(2).unwrap();
        let t = c.hydrate_temp_at_pressure(514.7);
        assert!((t - 53.87230769230769).abs() < 1e-9);
    }

    #[test]
    fn no_bracket_falls_back_to_last() {
        // pressure falls from its maximum to its minimum, no pair ascends through 20
        let samples = [(1.0, 30.0), (2.0, 10.0)];
        assert_eq!(hydrate_temp_at_pressure(&samples, 20.0), 2.0);
    }

    #[test]
    fn empty_samples() {
        assert!(hydrate_temp_at_pressure(&[], 100.0).is_nan());
    }

    proptest! {
        #[test]
        fn interpolated_temp_within_bracket(p in 14.7f64..1562.4) {
            for c in curves() {
                let t = c.hydrate_temp_at_pressure(p);
                let s = c.samples();
                let pair = s.windows(2).find(|w| w[0].1 <= p && p <= w[1].1).unwrap();
                let lo = pair[0].0.min(pair[1].0);
                let hi = pair[0].0.max(pair[1].0);
                prop_assert!(t >= lo - 1e-9 && t <= hi + 1e-9);
            }
        }
    }
}
