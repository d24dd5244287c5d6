// Renders a sample gauge to SVG.
//
// Usage:
//   gauge-svg [--angle <degrees>] [--digit <0-9>] [--size <px>] [-o <output.svg>]
//
// Without -o the document goes to stdout. Set RUST_LOG=gauge_geometry=trace
// to see path computation.

use std::process;

use gauge_geometry::{
    BarSegmentSpec, Color, ControlShape, DigitalBar, Drawable, DrawOp, Needle, RectD,
    SegmentCorners, SegmentOrientation,
};
use gauge_svg::SvgDocument;
use tracing::info;

/// Segments lit for each decimal digit, bit 0 = a (top) through bit 6 = g
/// (middle).
const DIGIT_SEGMENTS: [u8; 10] = [
    0b011_1111, 0b000_0110, 0b101_1011, 0b100_1111, 0b110_0110, 0b110_1101, 0b111_1101,
    0b000_0111, 0b111_1111, 0b110_1111,
];

struct Options {
    angle: f64,
    digit: usize,
    size: f64,
    output: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(o) => o,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            print_usage();
            process::exit(1);
        }
    };

    let svg = match render(&opts) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match &opts.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, svg) {
                eprintln!("Error writing {}: {}", path, e);
                process::exit(1);
            }
            info!(path = %path, "wrote svg");
        }
        None => print!("{}", svg),
    }
}

const USAGE: &str = "\
gauge-svg: render a sample dial and seven-segment digit to SVG

  --angle <degrees>   needle orientation in degrees, 0 = east, 90 = north (default 45)
  --digit <0-9>       digit shown on the segment display (default 8)
  --size <px>         dial size (default 300)
  -o <output.svg>     write to a file instead of stdout";

fn print_usage() {
    eprintln!("{}", USAGE);
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options {
        angle: 45.0,
        digit: 8,
        size: 300.0,
        output: None,
    };
    let mut i = 0;
    while i < args.len() {
        let value = || {
            args.get(i + 1)
                .ok_or_else(|| format!("{} needs a value", args[i]))
        };
        match args[i].as_str() {
            "--angle" => {
                opts.angle = value()?
                    .parse::<f64>()
                    .map_err(|_| "angle must be a number".to_string())?;
            }
            "--digit" => {
                opts.digit = value()?
                    .parse::<usize>()
                    .ok()
                    .filter(|d| *d < 10)
                    .ok_or_else(|| "digit must be 0-9".to_string())?;
            }
            "--size" => {
                opts.size = value()?
                    .parse::<f64>()
                    .ok()
                    .filter(|s| *s > 0.0)
                    .ok_or_else(|| "size must be a positive number".to_string())?;
            }
            "-o" => opts.output = Some(value()?.clone()),
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            other => return Err(format!("unknown argument {}", other)),
        }
        i += 2;
    }
    Ok(opts)
}

/// Seven segment containers inside `cell`, in a..g order.
fn segment_layout(cell: &RectD) -> [(RectD, SegmentOrientation); 7] {
    let t = (cell.width * 0.18).round();
    let half = cell.height / 2.0;
    let (x, y, w, h) = (cell.x, cell.y, cell.width, cell.height);
    let vertical = |vx: f64, vy: f64| RectD::new(vx, vy + t / 2.0, t, half - t);
    let horizontal = |hy: f64| RectD::new(x + t / 2.0, hy, w - t, t);
    [
        (horizontal(y), SegmentOrientation::Horizontal),
        (vertical(x + w - t, y), SegmentOrientation::Vertical),
        (vertical(x + w - t, y + half), SegmentOrientation::Vertical),
        (horizontal(y + h - t), SegmentOrientation::Horizontal),
        (vertical(x, y + half), SegmentOrientation::Vertical),
        (vertical(x, y), SegmentOrientation::Vertical),
        (horizontal(y + half - t / 2.0), SegmentOrientation::Horizontal),
    ]
}

fn render(opts: &Options) -> gauge_geometry::Result<String> {
    let dial = RectD::new(0.0, 0.0, opts.size, opts.size);
    let cell = RectD::new(opts.size + 40.0, opts.size * 0.2, opts.size * 0.4, opts.size * 0.6);
    let mut doc = SvgDocument::new(cell.right() + 20.0, opts.size);

    let face = gauge_geometry::control_path(&dial, ControlShape::Circular);
    let shine = gauge_geometry::shine_path(&dial, ControlShape::Circular);
    let face_color = Color::from_rgb(40, 60, 90);
    doc.push_ops(&[
        DrawOp::fill(&face, face_color),
        DrawOp::fill(
            &face,
            gauge_geometry::gradient_brush(&dial, ControlShape::Circular, Color::WHITE.with_alpha(90)),
        ),
        DrawOp::fill(&shine, Color::WHITE.with_alpha(40)),
    ]);

    let mut needle = Needle::new();
    needle.apply(|s| s.set_orientation_degrees(opts.angle))?;
    needle.ensure_paths(&dial);
    doc.push_ops(&needle.draw_ops());

    let lit = DIGIT_SEGMENTS[opts.digit];
    let mut bars = Vec::with_capacity(7);
    for (i, (container, orientation)) in segment_layout(&cell).into_iter().enumerate() {
        let mut spec = BarSegmentSpec::new(orientation);
        spec.set_corners(SegmentCorners::ALL)?;
        spec.set_tip_length((cell.width * 0.09).round())?;
        spec.set_padding(1.0)?;
        spec.set_color(Color::from_rgb(255, 64, 32))?;
        spec.set_on(lit & (1 << i) != 0)?;
        let mut bar = DigitalBar::with_spec(spec);
        bar.ensure_paths(&container);
        bars.push(bar);
    }
    for bar in &bars {
        doc.push_ops(&bar.draw_ops());
    }

    info!(angle = opts.angle, digit = opts.digit, "rendered gauge");
    Ok(doc.finish())
}
