use clap::{crate_version, App, AppSettings, Arg, ArgMatches, SubCommand};
use console::{style, Term};
use log::{debug, LevelFilter};
use methanol_check::{
    calculate_for, curves, CalcResult, get_curve, get_operating_point_interactive, report, Config,
    HydrateChart, MethanolError, OperatingPoint,
};
use simple_logger::SimpleLogger;
use std::path::Path;

fn operating_point_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    vec![
        Arg::with_name("temperature")
            .short("t")
            .long("temperature")
            .takes_value(true)
            .allow_hyphen_values(true)
            .help("Lowest upstream temperature [F]"),
        Arg::with_name("upstream")
            .short("u")
            .long("upstream")
            .takes_value(true)
            .allow_hyphen_values(true)
            .help("Highest upstream pressure [psig]"),
        Arg::with_name("downstream")
            .short("d")
            .long("downstream")
            .takes_value(true)
            .allow_hyphen_values(true)
            .help("Lowest downstream pressure [psig]"),
        Arg::with_name("gas-rate")
            .short("g")
            .long("gas-rate")
            .takes_value(true)
            .allow_hyphen_values(true)
            .help("Highest gas rate [MMscf/day]"),
    ]
}

fn build_cli<'a, 'b>() -> App<'a, 'b> {
    App::new("methanol_check")
        .version(crate_version!())
        .about("Methanol injection rate to keep gas out of the hydrate region after a pressure reduction")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .global(true)
                .help("Configuration file [JSON]"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .global(true)
                .help("Increase the log level, repeat for more detail"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .global(true)
                .help("Disable logging"),
        )
        .subcommand(
            SubCommand::with_name("calc")
                .about("Calculate the methanol injection rate")
                .args(&operating_point_args())
                .arg(
                    Arg::with_name("json")
                        .long("json")
                        .help("Print the result as JSON"),
                ),
        )
        .subcommand(
            SubCommand::with_name("interactive")
                .about("Ask for the operating conditions and calculate the methanol rate"),
        )
        .subcommand(
            SubCommand::with_name("chart")
                .about("Draw the hydrate curves with the operating point")
                .args(&operating_point_args())
                .arg(
                    Arg::with_name("svg")
                        .long("svg")
                        .takes_value(true)
                        .help("Write the chart as SVG to this file"),
                )
                .arg(
                    Arg::with_name("csv")
                        .long("csv")
                        .takes_value(true)
                        .help("Write the chart series as CSV to this file"),
                ),
        )
        .subcommand(
            SubCommand::with_name("curves")
                .about("List the hydrate curves")
                .arg(
                    Arg::with_name("dosage")
                        .long("dosage")
                        .takes_value(true)
                        .conflicts_with("pressure")
                        .help("Print the samples of one curve [gal/MMscf]"),
                )
                .arg(
                    Arg::with_name("pressure")
                        .long("pressure")
                        .takes_value(true)
                        .help("Print the hydrate temperature of every curve at this pressure [psia]"),
                ),
        )
        .subcommand(SubCommand::with_name("config").about("Print the effective configuration"))
}

fn parse_arg<T>(m: &ArgMatches, name: &str) -> Result<Option<T>, MethanolError>
where
    T: std::str::FromStr,
    <T as std::str::FromStr>::Err: std::string::ToString,
{
    match m.value_of(name) {
        None => Ok(None),
        Some(s) => s
            .parse::<T>()
            .map(Some)
            .map_err(|e| MethanolError::Parse(format!("--{} [{}]: {}", name, s, e.to_string()))),
    }
}

fn operating_point_from_args(
    m: &ArgMatches,
    config: &Config,
) -> Result<OperatingPoint, MethanolError> {
    let d = config.defaults;
    let op = OperatingPoint::new(
        parse_arg(m, "temperature")?.unwrap_or(d.temperature),
        parse_arg(m, "upstream")?.unwrap_or(d.upstream_pressure),
        parse_arg(m, "downstream")?.unwrap_or(d.downstream_pressure),
        parse_arg(m, "gas-rate")?.unwrap_or(d.gas_rate),
    );
    debug!("Operating point:\n{}", op);
    op.validate(&config.limits)?;
    Ok(op)
}

fn log_level(verbose: u64, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn exit_code(result: &CalcResult) -> i32 {
    if result.is_error() {
        1
    } else {
        0
    }
}

/// Run a subcommand, returns the process exit code.
fn run(name: &str, m: &ArgMatches, config_path: Option<&str>) -> Result<i32, MethanolError> {
    let term = Term::stdout();
    let config = Config::load(config_path.map(Path::new))?;
    match name {
        "calc" => {
            let op = operating_point_from_args(m, &config)?;
            let result = calculate_for(&op);
            if m.is_present("json") {
                term.write_line(&serde_json::to_string_pretty(&result)?)?;
            } else {
                term.write_line(&report::render(&result))?;
            }
            Ok(exit_code(&result))
        }
        "interactive" => {
            let op = get_operating_point_interactive(&term, &config)?;
            let result = calculate_for(&op);
            term.write_line("")?;
            term.write_line(&report::render(&result))?;
            Ok(exit_code(&result))
        }
        "chart" => {
            let op = operating_point_from_args(m, &config)?;
            let result = calculate_for(&op);
            let chart = HydrateChart::new(&result, op.downstream_pressure);
            let svg = m.value_of("svg");
            let csv = m.value_of("csv");
            if svg.is_none() && csv.is_none() {
                term.write_str(&chart.to_svg())?;
                return Ok(exit_code(&result));
            }
            if let Some(p) = svg {
                chart.write_svg(Path::new(p))?;
            }
            if let Some(p) = csv {
                chart.write_csv_file(Path::new(p))?;
            }
            term.write_line(&report::render(&result))?;
            Ok(exit_code(&result))
        }
        "curves" => {
            if let Some(dosage) = parse_arg::<u32>(m, "dosage")? {
                let c = get_curve(dosage)?;
                term.write_line(&format!("{} gal/MMscf", c.dosage))?;
                term.write_line(&format!("{:>10}  {:>12}", "T [F]", "P [psia]"))?;
                for (t, p) in c.samples() {
                    term.write_line(&format!("{:>10.2}  {:>12.2}", t, p))?;
                }
            } else if let Some(pressure) = parse_arg::<f64>(m, "pressure")? {
                term.write_line(&format!("Hydrate formation at {} psia", pressure))?;
                for c in curves() {
                    term.write_line(&format!(
                        "{:>4} gal/MMscf  {:>8.2} F",
                        c.dosage,
                        c.hydrate_temp_at_pressure(pressure)
                    ))?;
                }
            } else {
                for c in curves() {
                    term.write_line(&format!(
                        "{:>4} gal/MMscf  {} samples  {} .. {} psia",
                        c.dosage,
                        c.samples().len(),
                        c.min_pressure(),
                        c.max_pressure()
                    ))?;
                }
            }
            Ok(0)
        }
        "config" => {
            term.write_line(&config.to_json()?)?;
            Ok(0)
        }
        _ => Err(MethanolError::InvalidInput(format!(
            "Unknown command [{}]",
            name
        ))),
    }
}

fn main() {
    let matches = build_cli().get_matches();
    let (name, sub) = matches.subcommand();
    let sub = match sub {
        Some(s) => s,
        None => {
            eprintln!("{}", matches.usage());
            std::process::exit(2);
        }
    };

    let verbose = matches
        .occurrences_of("verbose")
        .max(sub.occurrences_of("verbose"));
    let quiet = matches.is_present("quiet") || sub.is_present("quiet");
    if let Err(e) = SimpleLogger::new()
        .with_level(log_level(verbose, quiet))
        .init()
    {
        eprintln!("Unable to initialise the logger: {}", e);
    }

    let config_path = sub.value_of("config").or_else(|| matches.value_of("config"));
    let code = match run(name, sub, config_path) {
        Ok(code) => code,
        Err(e) => {
            let _ = Term::stderr().write_line(&format!("{}", style(&e).red()));
            1
        }
    };
    std::process::exit(code);
}
