//! Hydrate curve chart with the operating point.
//!
//! The chart is built from a calculation result and rendered either as a
//! standalone SVG document or as CSV series for plotting elsewhere.
use crate::errors::MethanolError;
use crate::hydrate_curves::curves;
use crate::methanol_rate::CalcResult;
use crate::operating_point::ATMOSPHERIC_PSI;
use log::debug;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

pub const CHART_TITLE: &str = "Permian Hydrate Formation Curves";
const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 50.0;

/// Line colour of each dosage curve.
pub fn curve_color(dosage: u32) -> &'static str {
    match dosage {
        2 => "#1f77b4",
        4 => "#ff7f0e",
        6 => "#2ca02c",
        8 => "#d62728",
        10 => "#9467bd",
        12 => "#8c564b",
        14 => "#e377c2",
        16 => "#7f7f7f",
        _ => "#000000",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub color: String,
    /// (temperature [F], pressure [psia])
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guide {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydrateChart {
    pub title: String,
    /// Temperature axis [F]
    pub x_range: (f64, f64),
    /// Pressure axis [psia]
    pub y_range: (f64, f64),
    pub series: Vec<Series>,
    /// Horizontal line at the operating pressure
    pub pressure_line: Guide,
    /// Vertical line at T2
    pub t2_line: Guide,
    /// (T2, operating pressure)
    pub operating_point: (f64, f64),
}

impl HydrateChart {
    /// Chart of all hydrate curves with the operating point of `result`.
    pub fn new(result: &CalcResult, downstream_pressure: f64) -> Self {
        let pressure_psia = downstream_pressure + ATMOSPHERIC_PSI;
        let t2 = result.t2;
        let series = curves()
            .map(|c| Series {
                name: format!("{} gal/MMscf", c.dosage),
                color: curve_color(c.dosage).to_owned(),
                points: c.samples().to_vec(),
            })
            .collect();
        Self {
            title: CHART_TITLE.to_owned(),
            x_range: (-20.0, 70.0),
            y_range: (0.0, 1600.0),
            series,
            pressure_line: Guide {
                value: pressure_psia,
                label: format!("Operating Pressure: {:.0} psia", pressure_psia),
            },
            t2_line: Guide {
                value: t2,
                label: format!("T2: {:.1}\u{b0}F", t2),
            },
            operating_point: (t2, pressure_psia),
        }
    }

    fn px(&self, t: f64) -> f64 {
        let (x0, x1) = self.x_range;
        MARGIN_LEFT + (t - x0) / (x1 - x0) * (WIDTH - MARGIN_LEFT - MARGIN_RIGHT)
    }

    fn py(&self, p: f64) -> f64 {
        let (y0, y1) = self.y_range;
        HEIGHT - MARGIN_BOTTOM - (p - y0) / (y1 - y0) * (HEIGHT - MARGIN_TOP - MARGIN_BOTTOM)
    }

    pub fn to_svg(&self) -> String {
        let (x0, x1) = self.x_range;
        let (y0, y1) = self.y_range;
        let (left, right) = (self.px(x0), self.px(x1));
        let (top, bottom) = (self.py(y1), self.py(y0));
        let mut s = String::new();
        s.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\" font-size=\"12\">\n",
            w = WIDTH,
            h = HEIGHT
        ));
        s.push_str(&format!(
            "<defs><clipPath id=\"plot\"><rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\"/></clipPath></defs>\n",
            left,
            top,
            right - left,
            bottom - top
        ));
        s.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
        s.push_str(&format!(
            "<text x=\"{:.1}\" y=\"24\" text-anchor=\"middle\" font-size=\"16\">{}</text>\n",
            WIDTH / 2.0,
            escape(&self.title)
        ));

        // axes and ticks
        s.push_str(&format!(
            "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"none\" stroke=\"#444\"/>\n",
            left,
            top,
            right - left,
            bottom - top
        ));
        let mut t = x0;
        while t <= x1 {
            s.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">{}</text>\n",
                self.px(t),
                bottom + 16.0,
                t
            ));
            t += 10.0;
        }
        let mut p = y0;
        while p <= y1 {
            s.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\">{}</text>\n",
                left - 6.0,
                self.py(p) + 4.0,
                p
            ));
            p += 200.0;
        }
        s.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">Temperature (\u{b0}F)</text>\n",
            (left + right) / 2.0,
            HEIGHT - 10.0
        ));
        s.push_str(&format!(
            "<text x=\"16\" y=\"{:.1}\" text-anchor=\"middle\" transform=\"rotate(-90 16 {:.1})\">Pressure (psia)</text>\n",
            (top + bottom) / 2.0,
            (top + bottom) / 2.0
        ));

        s.push_str("<g clip-path=\"url(#plot)\" fill=\"none\" stroke-width=\"2\">\n");
        for series in &self.series {
            let pts: Vec<String> = series
                .points
                .iter()
                .map(|(t, p)| format!("{:.1},{:.1}", self.px(*t), self.py(*p)))
                .collect();
            s.push_str(&format!(
                "<polyline stroke=\"{}\" points=\"{}\"><title>{}</title></polyline>\n",
                series.color,
                pts.join(" "),
                escape(&series.name)
            ));
        }
        let yp = self.py(self.pressure_line.value);
        let xt = self.px(self.t2_line.value);
        s.push_str(&format!(
            "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"black\" stroke-width=\"1\" stroke-dasharray=\"6 4\"/>\n",
            left, yp, right, yp
        ));
        s.push_str(&format!(
            "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"black\" stroke-width=\"1\" stroke-dasharray=\"6 4\"/>\n",
            xt, top, xt, bottom
        ));
        let (mx, my) = (self.px(self.operating_point.0), self.py(self.operating_point.1));
        s.push_str(&format!(
            "<path d=\"M{:.1},{:.1} L{:.1},{:.1} M{:.1},{:.1} L{:.1},{:.1}\" stroke=\"darkred\" stroke-width=\"3\"><title>Operating Point</title></path>\n",
            mx - 7.0,
            my - 7.0,
            mx + 7.0,
            my + 7.0,
            mx - 7.0,
            my + 7.0,
            mx + 7.0,
            my - 7.0
        ));
        s.push_str("</g>\n");

        s.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\">{}</text>\n",
            right - 4.0,
            yp - 4.0,
            escape(&self.pressure_line.label)
        ));
        s.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\">{}</text>\n",
            xt - 4.0,
            top + 14.0,
            escape(&self.t2_line.label)
        ));

        // legend, top left
        for (i, series) in self.series.iter().enumerate() {
            let y = top + 16.0 + 16.0 * i as f64;
            s.push_str(&format!(
                "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-width=\"2\"/>\n",
                left + 8.0,
                y - 4.0,
                left + 28.0,
                y - 4.0,
                series.color
            ));
            s.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\">{}</text>\n",
                left + 32.0,
                y,
                escape(&series.name)
            ));
        }
        s.push_str("</svg>\n");
        s
    }

    pub fn write_svg(&self, path: &Path) -> Result<(), MethanolError> {
        debug!("Writing chart to {:?}", path);
        std::fs::write(path, self.to_svg())?;
        Ok(())
    }

    /// Write every plotted point as `series,temperature_f,pressure_psia`.
    pub fn write_csv<W: Write>(&self, w: W) -> Result<(), MethanolError> {
        let mut wtr = csv::Writer::from_writer(w);
        wtr.write_record(&["series", "temperature_f", "pressure_psia"])?;
        for series in &self.series {
            for (t, p) in &series.points {
                wtr.write_record(&[series.name.clone(), t.to_string(), p.to_string()])?;
            }
        }
        let (t2, p) = self.operating_point;
        wtr.write_record(&["Operating Point".to_owned(), t2.to_string(), p.to_string()])?;
        wtr.flush()?;
        Ok(())
    }

    pub fn write_csv_file(&self, path: &Path) -> Result<(), MethanolError> {
        debug!("Writing chart series to {:?}", path);
        let file = std::fs::File::create(path)?;
        self.write_csv(file)
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
