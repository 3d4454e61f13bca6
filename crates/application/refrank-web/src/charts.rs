//! Inline SVG chart widgets
//!
//! Charts are rendered server-side into plain SVG markup, so the Results page
//! needs no client charting library. Every function is deterministic: the same
//! data always produces byte-identical output.

use std::f64::consts::PI;
use std::fmt::Write;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 280.0;

const GRID_STROKE: &str = "#e2e8f0";
const AXIS_TEXT: &str = "#64748b";

/// Plot area inside the SVG viewport
#[derive(Debug, Clone, Copy)]
struct Frame {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Frame {
    fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }

    fn x0(&self) -> f64 {
        self.left
    }

    fn x1(&self) -> f64 {
        WIDTH - self.right
    }

    fn y0(&self) -> f64 {
        self.top
    }

    fn y1(&self) -> f64 {
        HEIGHT - self.bottom
    }

    fn width(&self) -> f64 {
        self.x1() - self.x0()
    }

    fn height(&self) -> f64 {
        self.y1() - self.y0()
    }
}

/// A line series for [`lines`]
#[derive(Debug, Clone)]
pub struct Series<'a> {
    pub name: &'a str,
    pub color: &'a str,
    pub values: Vec<f64>,
}

/// Linear map of `value` from `[d0, d1]` onto `[r0, r1]`
fn scale(value: f64, d0: f64, d1: f64, r0: f64, r1: f64) -> f64 {
    if d1 == d0 {
        return r0;
    }
    r0 + (value - d0) / (d1 - d0) * (r1 - r0)
}

/// Round a raw tick interval up to 1, 2 or 5 x 10^k
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let normalized = raw / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

/// Axis ceiling and tick step for data peaking at `max`, aiming for `ticks` intervals
pub fn nice_axis(max: f64, ticks: u32) -> (f64, f64) {
    let step = nice_step(max / ticks.max(1) as f64);
    if !max.is_finite() || max <= 0.0 {
        return (step, step);
    }
    ((max / step).ceil() * step, step)
}

/// Domains must be positive and finite; anything else becomes `1.0`
fn positive_or_one(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        1.0
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn open_svg(out: &mut String, label: &str) {
    let _ = write!(
        out,
        "<svg class=\"chart\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" role=\"img\" aria-label=\"{}\" \
         xmlns=\"http://www.w3.org/2000/svg\">",
        html_escape(label)
    );
}

fn text(out: &mut String, x: f64, y: f64, anchor: &str, size: u32, content: &str) {
    let _ = write!(
        out,
        "<text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"{anchor}\" font-size=\"{size}\" \
         fill=\"{AXIS_TEXT}\">{}</text>",
        html_escape(content)
    );
}

fn grid_line(out: &mut String, x1: f64, y1: f64, x2: f64, y2: f64) {
    let _ = write!(
        out,
        "<line class=\"grid\" x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" \
         stroke=\"{GRID_STROKE}\" stroke-dasharray=\"3 3\" />"
    );
}

/// Format a tick value without trailing noise (`0.7`, `100`)
fn tick_label(value: f64, step: f64) -> String {
    if step >= 1.0 {
        format!("{}", value.round() as i64)
    } else {
        let decimals = (-step.log10().floor()) as usize;
        format!("{value:.decimals$}")
    }
}

/// Horizontal bars on a fixed `[0, domain_max]` axis, categories on the left
pub fn horizontal_bars(data: &[(&str, f64)], domain_max: f64, fill: &str) -> String {
    let frame = Frame::new(96.0, 16.0, 8.0, 24.0);
    let domain_max = positive_or_one(domain_max);
    let (_, step) = nice_axis(domain_max, 3);
    let mut out = String::new();
    open_svg(&mut out, "Feature importance");

    for i in 0..=(domain_max / step).floor() as usize {
        let tick = step * i as f64;
        let x = scale(tick, 0.0, domain_max, frame.x0(), frame.x1());
        grid_line(&mut out, x, frame.y0(), x, frame.y1());
        text(&mut out, x, frame.y1() + 16.0, "middle", 12, &tick_label(tick, step));
    }

    let band = frame.height() / data.len().max(1) as f64;
    let bar_height = band * 0.6;
    for (i, (label, value)) in data.iter().enumerate() {
        let y = frame.y0() + band * i as f64 + (band - bar_height) / 2.0;
        let width = scale(value.clamp(0.0, domain_max), 0.0, domain_max, 0.0, frame.width());
        let _ = write!(
            out,
            "<rect class=\"bar\" x=\"{:.1}\" y=\"{y:.1}\" width=\"{width:.1}\" height=\"{bar_height:.1}\" \
             rx=\"4\" fill=\"{}\"><title>{}: {value}</title></rect>",
            frame.x0(),
            html_escape(fill),
            html_escape(label)
        );
        text(&mut out, frame.x0() - 8.0, y + bar_height / 2.0 + 4.0, "end", 12, label);
    }

    out.push_str("</svg>");
    out
}

/// Vertical columns, each with its own fill. The y axis is scaled to a nice
/// ceiling of the largest value.
pub fn columns(data: &[(&str, f64, &str)]) -> String {
    let frame = Frame::new(48.0, 16.0, 8.0, 24.0);
    let max = data.iter().map(|(_, v, _)| *v).fold(0.0, f64::max);
    let (ceiling, step) = nice_axis(max, 4);
    let mut out = String::new();
    open_svg(&mut out, "Score distribution");

    for i in 0..=(ceiling / step).round() as usize {
        let tick = step * i as f64;
        let y = scale(tick, 0.0, ceiling, frame.y1(), frame.y0());
        grid_line(&mut out, frame.x0(), y, frame.x1(), y);
        text(&mut out, frame.x0() - 8.0, y + 4.0, "end", 12, &tick_label(tick, step));
    }

    let band = frame.width() / data.len().max(1) as f64;
    let bar_width = band * 0.7;
    for (i, (label, value, fill)) in data.iter().enumerate() {
        let x = frame.x0() + band * i as f64 + (band - bar_width) / 2.0;
        let top = scale(value.max(0.0), 0.0, ceiling, frame.y1(), frame.y0());
        let _ = write!(
            out,
            "<rect class=\"bar\" x=\"{x:.1}\" y=\"{top:.1}\" width=\"{bar_width:.1}\" height=\"{:.1}\" \
             rx=\"4\" fill=\"{}\"><title>{}: {value}</title></rect>",
            frame.y1() - top,
            html_escape(fill),
            html_escape(label)
        );
        text(&mut out, x + bar_width / 2.0, frame.y1() + 16.0, "middle", 12, label);
    }

    out.push_str("</svg>");
    out
}

/// One polyline with point markers per series over shared x labels
pub fn lines(x_labels: &[String], series: &[Series<'_>], y_min: f64, y_max: f64) -> String {
    let frame = Frame::new(44.0, 16.0, 8.0, 36.0);
    let step = nice_step((y_max - y_min) / 5.0);
    let mut out = String::new();
    open_svg(&mut out, "Training and validation accuracy");

    let intervals = ((y_max - y_min) / step).round().clamp(0.0, 20.0) as usize;
    for i in 0..=intervals {
        let tick = y_min + step * i as f64;
        let y = scale(tick, y_min, y_max, frame.y1(), frame.y0());
        grid_line(&mut out, frame.x0(), y, frame.x1(), y);
        text(&mut out, frame.x0() - 8.0, y + 4.0, "end", 12, &tick_label(tick, step));
    }

    let last = x_labels.len().saturating_sub(1).max(1) as f64;
    let x_at = |i: usize| scale(i as f64, 0.0, last, frame.x0(), frame.x1());
    for (i, label) in x_labels.iter().enumerate() {
        text(&mut out, x_at(i), frame.y1() + 16.0, "middle", 12, label);
    }
    text(&mut out, frame.x0() + frame.width() / 2.0, HEIGHT - 4.0, "middle", 12, "Epoch");

    for s in series {
        let points: Vec<(f64, f64)> = s
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| (x_at(i), scale(*v, y_min, y_max, frame.y1(), frame.y0())))
            .collect();
        let path = points
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ");
        let color = html_escape(s.color);
        let _ = write!(
            out,
            "<polyline class=\"series\" points=\"{path}\" fill=\"none\" stroke=\"{color}\" \
             stroke-width=\"2\"><title>{}</title></polyline>",
            html_escape(s.name)
        );
        for (x, y) in &points {
            let _ = write!(out, "<circle class=\"point\" cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"3\" fill=\"{color}\" />");
        }
    }

    out.push_str("</svg>");
    out
}

/// Radar polygon over `axes`, radius domain `[0, max]`
pub fn radar(axes: &[(&str, f64)], max: f64, fill: &str) -> String {
    const LEVELS: usize = 5;
    let max = positive_or_one(max);
    let cx = WIDTH / 2.0;
    let cy = HEIGHT / 2.0;
    let radius = HEIGHT / 2.0 - 36.0;
    let n = axes.len().max(1) as f64;
    let angle = |i: usize| -PI / 2.0 + 2.0 * PI * i as f64 / n;
    let point = |i: usize, r: f64| (cx + r * angle(i).cos(), cy + r * angle(i).sin());
    let polygon_points = |r_of: &dyn Fn(usize) -> f64| {
        (0..axes.len())
            .map(|i| {
                let (x, y) = point(i, r_of(i));
                format!("{x:.1},{y:.1}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut out = String::new();
    open_svg(&mut out, "Model characteristics");

    for level in 1..=LEVELS {
        let r = radius * level as f64 / LEVELS as f64;
        let _ = write!(
            out,
            "<polygon class=\"radar-grid\" points=\"{}\" fill=\"none\" stroke=\"{GRID_STROKE}\" />",
            polygon_points(&|_: usize| r)
        );
    }

    for (i, (label, _)) in axes.iter().enumerate() {
        let (x, y) = point(i, radius);
        let _ = write!(
            out,
            "<line class=\"spoke\" x1=\"{cx:.1}\" y1=\"{cy:.1}\" x2=\"{x:.1}\" y2=\"{y:.1}\" stroke=\"{GRID_STROKE}\" />"
        );
        let (lx, ly) = point(i, radius + 16.0);
        let cos = angle(i).cos();
        let anchor = if cos > 0.1 {
            "start"
        } else if cos < -0.1 {
            "end"
        } else {
            "middle"
        };
        text(&mut out, lx, ly + 4.0, anchor, 11, label);
    }

    let fill = html_escape(fill);
    let _ = write!(
        out,
        "<polygon class=\"radar-area\" points=\"{}\" fill=\"{fill}\" fill-opacity=\"0.3\" \
         stroke=\"{fill}\" stroke-width=\"2\" />",
        polygon_points(&|i: usize| radius * axes[i].1.clamp(0.0, max) / max)
    );

    out.push_str("</svg>");
    out
}
