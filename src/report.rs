use crate::methanol_rate::{CalcResult, CalcStatus};
use console::style;

/// Plain text summary of a calculation, without terminal styling.
pub fn summary_lines(result: &CalcResult) -> Vec<String> {
    let mut lines = vec![];
    match result.status {
        CalcStatus::Error => {
            lines.push(result.error.clone().unwrap_or_default());
            lines.push(format!(
                "Adjusted Temperature (T2): {:.1} \u{b0}F",
                result.t2
            ));
        }
        CalcStatus::NoMethanol => {
            lines.push("No methanol injection required!".to_owned());
            lines.push("Methanol Rate: 0 gal/day".to_owned());
            lines.push(format!(
                "Adjusted Temperature (T2): {:.1} \u{b0}F",
                result.t2
            ));
        }
        CalcStatus::Success => {
            lines.push(format!(
                "Required Methanol Rate: {:.2} gal/day",
                result.rate.unwrap_or_default()
            ));
            lines.push(format!("Adjusted Temp (T2): {:.1} \u{b0}F", result.t2));
            lines.push(format!(
                "Rate per MMscf: {:.2} gal/MMscf",
                result.methanol_per_mmscf.unwrap_or_default()
            ));
        }
    }
    lines
}

/// Hydrate formation temperatures at the operating pressure, one row per dosage.
pub fn hydrate_table_lines(result: &CalcResult) -> Vec<String> {
    if result.hydrate_temps.is_empty() {
        return vec![];
    }
    let mut lines = vec![format!("{:>12}  {:>12}", "gal/MMscf", "hydrate [F]")];
    for (dosage, t) in &result.hydrate_temps {
        lines.push(format!("{:>12}  {:>12.1}", dosage, t));
    }
    lines
}

/// Full report, styled for the terminal.
pub fn render(result: &CalcResult) -> String {
    let summary = summary_lines(result);
    let mut out = vec![];
    for (i, line) in summary.into_iter().enumerate() {
        let styled = match (result.status, i) {
            (CalcStatus::Error, 0) => style(line).red().bold().to_string(),
            (CalcStatus::NoMethanol, 0) => style(line).green().bold().to_string(),
            (CalcStatus::Success, 0) => style(line).bold().to_string(),
            _ => line,
        };
        out.push(styled);
    }
    let table = hydrate_table_lines(result);
    if !table.is_empty() {
        out.push(String::new());
        out.extend(table);
    }
    out.join("\n")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::methanol_rate::calculate;

    #[test]
    fn success_summary() {
        let lines = summary_lines(&calculate(80.0, 1100.0, 500.0, 1.0));
        assert_eq!(
            lines,
            vec![
                "Required Methanol Rate: 9.75 gal/day".to_owned(),
                "Adjusted Temp (T2): 32.0 \u{b0}F".to_owned(),
                "Rate per MMscf: 9.70 gal/MMscf".to_owned(),
            ]
        );
    }

    #[test]
    fn no_methanol_summary() {
        let lines = summary_lines(&calculate(150.0, 600.0, 590.0, 1.0));
        assert_eq!(lines[0], "No methanol injection required!");
        assert_eq!(lines[2], "Adjusted Temperature (T2): 149.2 \u{b0}F");
    }

    #[test]
    fn error_summary() {
        let lines = summary_lines(&calculate(-40.0, 1100.0, 500.0, 1.0));
        assert!(lines[0].contains("16 gal/MMscf"));
        assert_eq!(lines[1], "Adjusted Temperature (T2): -88.0 \u{b0}F");
    }

    #[test]
    fn hydrate_table() {
        let lines = hydrate_table_lines(&calculate(80.0, 1100.0, 500.0, 1.0));
        assert_eq!(lines.len(), 9);
        assert!(lines[1].trim_start().starts_with("2 "));
        assert!(lines[1].ends_with("53.9"));
        assert!(hydrate_table_lines(&calculate(60.0, 1600.0, 1590.0, 1.0)).is_empty());
    }

    #[test]
    fn render_contains_summary() {
        let s = render(&calculate(80.0, 1100.0, 500.0, 1.0));
        assert!(s.contains("9.75 gal/day"));
        assert!(s.contains("hydrate [F]"));
    }
}
