use crate::hydrate_curves::{curves, DOSAGE_LEVELS};
use crate::ipol::{interpolate_linear, round_to_step};
use crate::operating_point::OperatingPoint;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Highest absolute downstream pressure the curves are used for [psia].
pub const MAX_PRESSURE_PSIA: f64 = 1600.0;
/// The daily methanol rate is reported in quarter gallons.
pub const RATE_STEPS_PER_GALLON: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcStatus {
    Success,
    NoMethanol,
    Error,
}

impl std::fmt::Display for CalcStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CalcStatus::Success => write!(f, "success"),
            CalcStatus::NoMethanol => write!(f, "no_methanol"),
            CalcStatus::Error => write!(f, "error"),
        }
    }
}

/// Outcome of one methanol rate calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcResult {
    pub status: CalcStatus,
    /// Methanol rate [gal/day]
    pub rate: Option<f64>,
    /// Temperature after the pressure reduction [F]
    pub t2: f64,
    /// Methanol dosage [gal/MMscf]
    pub methanol_per_mmscf: Option<f64>,
    pub error: Option<String>,
    /// Hydrate formation temperature [F] per dosage [gal/MMscf] at the
    /// downstream pressure.
    pub hydrate_temps: BTreeMap<u32, f64>,
}

impl CalcResult {
    fn new(t2: f64) -> Self {
        Self {
            status: CalcStatus::Success,
            rate: None,
            t2,
            methanol_per_mmscf: None,
            error: None,
            hydrate_temps: BTreeMap::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == CalcStatus::Error
    }

    fn fail(mut self, msg: String) -> Self {
        warn!("{}", msg);
        self.status = CalcStatus::Error;
        self.error = Some(msg);
        self
    }
}

/// Methanol injection rate needed to keep the gas out of the hydrate region.
///
/// * `temperature` - upstream temperature [F]
/// * `upstream_pressure` - upstream pressure [psig]
/// * `downstream_pressure` - downstream pressure [psig]
/// * `gas_rate` - gas rate [MMscf/day]
///
/// The caller guarantees that the upstream pressure exceeds the downstream
/// pressure and that the gas rate is positive.
pub fn calculate(
    temperature: f64,
    upstream_pressure: f64,
    downstream_pressure: f64,
    gas_rate: f64,
) -> CalcResult {
    calculate_for(&OperatingPoint::new(
        temperature,
        upstream_pressure,
        downstream_pressure,
        gas_rate,
    ))
}

pub fn calculate_for(op: &OperatingPoint) -> CalcResult {
    let t2 = op.t2();
    let pressure_psia = op.pressure_psia();
    let mut result = CalcResult::new(t2);
    debug!("T2: {} F, downstream pressure: {} psia", t2, pressure_psia);

    if pressure_psia > MAX_PRESSURE_PSIA {
        return result.fail(format!(
            "Pressure {:.0} psia exceeds curve data range (limit {:.0} psia, curve data max ~1562 psia)",
            pressure_psia, MAX_PRESSURE_PSIA
        ));
    }

    let temps: Vec<f64> = curves()
        .map(|c| {
            let t = c.hydrate_temp_at_pressure(pressure_psia);
            debug!("{} gal/MMscf: hydrate formation at {:.2} F", c.dosage, t);
            result.hydrate_temps.insert(c.dosage, t);
            t
        })
        .collect();

    let temp_lowest = temps[0];
    let temp_highest = temps[temps.len() - 1];
    if t2 >= temp_lowest {
        info!("T2 {:.1} F is above the hydrate curves, no methanol needed", t2);
        result.status = CalcStatus::NoMethanol;
        result.rate = Some(0.0);
        result.methanol_per_mmscf = Some(0.0);
        return result;
    }
    if t2 < temp_highest {
        let highest = DOSAGE_LEVELS[DOSAGE_LEVELS.len() - 1];
        return result.fail(format!(
            "T2 ({:.1}\u{b0}F) is below the {} gal/MMscf hydrate curve ({:.1}\u{b0}F). More methanol needed than curves support.",
            t2, highest, temp_highest
        ));
    }

    let dosage = match dosage_for_temperature(&DOSAGE_LEVELS, &temps, t2) {
        Some(d) => d,
        None => {
            warn!("No pair of hydrate curves brackets T2 {} F", t2);
            f64::from(DOSAGE_LEVELS[DOSAGE_LEVELS.len() - 1])
        }
    };
    let rate = round_to_step(dosage * op.gas_rate, RATE_STEPS_PER_GALLON);
    info!(
        "Methanol: {:.2} gal/MMscf, {:.2} gal/day at {} MMscf/day",
        dosage, rate, op.gas_rate
    );
    result.methanol_per_mmscf = Some(dosage);
    result.rate = Some(rate);
    result
}

/// Dosage whose hydrate formation temperature equals `t2`.
///
/// `temps[i]` is the formation temperature for `dosages[i]`. The first
/// consecutive pair, in ascending dosage order, whose temperatures bracket
/// `t2` from above is interpolated.
pub fn dosage_for_temperature(dosages: &[u32], temps: &[f64], t2: f64) -> Option<f64> {
    let n = dosages.len().min(temps.len());
    for i in 1..n {
        let (d_low, d_high) = (f64::from(dosages[i - 1]), f64::from(dosages[i]));
        let (temp_low, temp_high) = (temps[i - 1], temps[i]);
        if temp_high <= t2 && t2 <= temp_low {
            return Some(interpolate_linear(t2, temp_low, temp_high, d_low, d_high));
        }
    }
    None
}
