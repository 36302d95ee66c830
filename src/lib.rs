mod chart;
pub use chart::*;
mod config;
pub use config::*;
mod errors;
pub use errors::*;
mod hydrate_curves;
pub use hydrate_curves::*;
mod ipol;
pub use ipol::round_to_step;
mod methanol_rate;
pub use methanol_rate::*;
mod operating_point;
pub use operating_point::*;
pub mod report;

use console::Term;
use log::debug;

pub fn question(term: &Term, msg: &str) -> Result<String, MethanolError> {
    if let Err(e) = term.write_str(&format!("{}: ", msg)) {
        return Err(MethanolError::Terminal(e.to_string()));
    }
    match term.read_line() {
        Ok(ans) => Ok(ans.trim().to_owned()),
        Err(e) => Err(MethanolError::Terminal(e.to_string())),
    }
}

/// Parse an answer to the question `msg`, an empty answer gives `default`.
pub fn parse_answer_or<T>(ans: &str, msg: &str, default: T) -> Result<T, MethanolError>
where
    T: std::str::FromStr,
    <T as std::str::FromStr>::Err: std::string::ToString,
{
    let ans = ans.trim();
    if ans.is_empty() {
        return Ok(default);
    }
    ans.parse::<T>()
        .map_err(|e| MethanolError::Parse(format!("{} [{}]: {}", msg, ans, e.to_string())))
}

/// Ask for a value, an empty answer accepts `default`.
pub fn question_parse_or<T>(term: &Term, msg: &str, default: T) -> Result<T, MethanolError>
where
    T: std::str::FromStr + std::fmt::Display,
    <T as std::str::FromStr>::Err: std::string::ToString,
{
    let ans = question(term, &format!("{} [{}]", msg, default))?;
    parse_answer_or(&ans, msg, default)
}

/// Prompt for the operating conditions, offering the configured defaults.
pub fn get_operating_point_interactive(
    term: &Term,
    config: &Config,
) -> Result<OperatingPoint, MethanolError> {
    let d = &config.defaults;
    let op = OperatingPoint {
        gas_rate: question_parse_or(term, "Gas Rate (MMscf/day)", d.gas_rate)?,
        temperature: question_parse_or(term, "Lowest Upstream Temperature (F)", d.temperature)?,
        upstream_pressure: question_parse_or(
            term,
            "Highest Upstream Pressure (PSIG)",
            d.upstream_pressure,
        )?,
        downstream_pressure: question_parse_or(
            term,
            "Lowest Downstream Pressure (PSIG)",
            d.downstream_pressure,
        )?,
    };
    debug!("Interactive input:\n{}", op);
    op.validate(&config.limits)?;
    Ok(op)
}
