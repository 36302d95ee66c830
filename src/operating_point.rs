use crate::config::{InputLimits, Range};
use crate::errors::MethanolError;
use serde::{Deserialize, Serialize};

/// Atmospheric offset between gauge and absolute pressure [psi].
pub const ATMOSPHERIC_PSI: f64 = 14.7;
/// Joule-Thomson cooling [F] per 100 psi of pressure drop.
pub const JT_COOLING_PER_100_PSI: f64 = 8.0;

/// Process conditions around the pressure reduction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingPoint {
    /// Lowest upstream temperature [F]
    pub temperature: f64,
    /// Highest upstream pressure [psig]
    pub upstream_pressure: f64,
    /// Lowest downstream pressure [psig]
    pub downstream_pressure: f64,
    /// Highest gas rate [MMscf/day]
    pub gas_rate: f64,
}

impl OperatingPoint {
    pub fn new(
        temperature: f64,
        upstream_pressure: f64,
        downstream_pressure: f64,
        gas_rate: f64,
    ) -> Self {
        Self {
            temperature,
            upstream_pressure,
            downstream_pressure,
            gas_rate,
        }
    }

    pub fn pressure_drop(&self) -> f64 {
        self.upstream_pressure - self.downstream_pressure
    }

    /// Temperature after the Joule-Thomson cooling across the choke [F].
    pub fn t2(&self) -> f64 {
        self.temperature - (self.pressure_drop() / 100.0) * JT_COOLING_PER_100_PSI
    }

    /// Downstream pressure [psia].
    pub fn pressure_psia(&self) -> f64 {
        self.downstream_pressure + ATMOSPHERIC_PSI
    }

    /// Check the preconditions of the rate calculation and the input limits.
    pub fn validate(&self, limits: &InputLimits) -> Result<(), MethanolError> {
        check_range("Gas rate", self.gas_rate, &limits.gas_rate)?;
        check_range("Temperature", self.temperature, &limits.temperature)?;
        check_range(
            "Upstream pressure",
            self.upstream_pressure,
            &limits.upstream_pressure,
        )?;
        check_range(
            "Downstream pressure",
            self.downstream_pressure,
            &limits.downstream_pressure,
        )?;
        if self.upstream_pressure <= self.downstream_pressure {
            return Err(MethanolError::InvalidInput(
                "Upstream pressure must be greater than downstream pressure.".to_owned(),
            ));
        }
        if self.gas_rate <= 0.0 {
            return Err(MethanolError::InvalidInput(
                "Gas rate must be greater than zero.".to_owned(),
            ));
        }
        Ok(())
    }
}

fn check_range(name: &str, value: f64, range: &Range) -> Result<(), MethanolError> {
    if value.is_nan() || !range.contains(value) {
        return Err(MethanolError::OutOfRange {
            name: name.to_owned(),
            value,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

impl Default for OperatingPoint {
    fn default() -> Self {
        OperatingPoint::new(80.0, 1100.0, 500.0, 1.0)
    }
}

impl std::fmt::Display for OperatingPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Gas rate[MMscf/day]: {}\nUpstream temperature[F]: {}\nUpstream pressure[psig]: {}\nDownstream pressure[psig]: {}\n",
            self.gas_rate, self.temperature, self.upstream_pressure, self.downstream_pressure
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn derived_conditions() {
        let op = OperatingPoint::new(80.0, 1100.0, 500.0, 1.0);
        assert_eq!(op.pressure_drop(), 600.0);
        assert_eq!(op.t2(), 32.0);
        assert!((op.pressure_psia() - 514.7).abs() < 1e-12);
    }

    #[test]
    fn small_drop_barely_cools() {
        let op = OperatingPoint::new(150.0, 600.0, 590.0, 1.0);
        assert!((op.t2() - 149.2).abs() < 1e-12);
    }

    #[test]
    fn validate_defaults() {
        assert!(OperatingPoint::default()
            .validate(&InputLimits::default())
            .is_ok());
    }

    #[test]
    fn validate_pressure_order() {
        let limits = InputLimits::default();
        let e = OperatingPoint::new(80.0, 500.0, 500.0, 1.0)
            .validate(&limits)
            .unwrap_err();
        assert_eq!(
            e.to_string(),
            "Upstream pressure must be greater than downstream pressure."
        );
        assert!(OperatingPoint::new(80.0, 400.0, 500.0, 1.0)
            .validate(&limits)
            .is_err());
    }

    #[test]
    fn validate_gas_rate() {
        let e = OperatingPoint::new(80.0, 1100.0, 500.0, 0.0)
            .validate(&InputLimits::default())
            .unwrap_err();
        assert_eq!(e.to_string(), "Gas rate must be greater than zero.");
    }

    #[test]
    fn validate_limits() {
        let limits = InputLimits::default();
        let e = OperatingPoint::new(-60.0, 1100.0, 500.0, 1.0)
            .validate(&limits)
            .unwrap_err();
        match e {
            MethanolError::OutOfRange { name, min, .. } => {
                assert_eq!(name, "Temperature");
                assert_eq!(min, -50.0);
            }
            _ => panic!("unexpected error {:?}", e),
        }
        assert!(OperatingPoint::new(80.0, 2000.0, 1590.0, 1.0)
            .validate(&limits)
            .is_err());
        assert!(OperatingPoint::new(std::f64::NAN, 1100.0, 500.0, 1.0)
            .validate(&limits)
            .is_err());
    }
}
