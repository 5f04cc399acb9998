use crate::scaling::{x_scale, Color, LinearScale, OffsetRegion};
use crate::utils::Result;
use std::io::Write;

const BAR_AREA_HEIGHT: f64 = 20.0;
const PADDING: f64 = 12.0;

/// Renders the compressed gene model as an SVG image: one horizontal
/// bar per annotated region, positioned on the offset (gap-collapsed)
/// axis and scaled to `width` pixels. Regions with an unset color are
/// drawn as outlines.
pub fn generate<W: Write>(regions: &[OffsetRegion], width: u32, writer: W) -> Result<()> {
    let scale = x_scale(width, regions)?;
    let mut generator = Generator::new(scale, writer, PADDING);
    generator.generate(regions)
}

struct Generator<W: Write> {
    scale: LinearScale,
    pad: f64,
    writer: W,
}

impl<W: Write> Generator<W> {
    fn new(scale: LinearScale, writer: W, pad: f64) -> Self {
        Self { scale, pad, writer }
    }

    fn generate(&mut self, regions: &[OffsetRegion]) -> Result<()> {
        let width = self.scale.scale(compressed_end(regions)) + 2.0 * self.pad;
        let height = BAR_AREA_HEIGHT + 2.0 * self.pad;
        self.start_svg(width, height)?;
        self.add_background()?;

        let mid_y = self.pad + BAR_AREA_HEIGHT / 2.0;
        for region in regions {
            self.plot_region(region, mid_y)?;
        }

        self.end_svg()
    }

    fn plot_region(&mut self, region: &OffsetRegion, mid_y: f64) -> Result<()> {
        let left = self.pad + self.scale.scale((region.start as i64 - region.offset) as f64);
        let right = self.pad + self.scale.scale((region.stop as i64 - region.offset) as f64);
        let thickness = region.style.thickness as f64;
        let y = mid_y - thickness / 2.0;

        let fill = match region.style.color {
            Color::Unset => "fill=\"none\" stroke=\"#000000\" stroke-width=\"0.5\"".to_string(),
            _ => format!("fill=\"{}\"", region.style.color),
        };

        let line = format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {} />",
            left,
            y,
            right - left,
            thickness,
            fill
        );
        self.write_line(&line)
    }

    fn start_svg(&mut self, width: f64, height: f64) -> Result<()> {
        self.write_line(&format!(
            "<svg width=\"{:.2}\" height=\"{:.2}\" xmlns=\"http://www.w3.org/2000/svg\">",
            width, height
        ))
    }

    fn add_background(&mut self) -> Result<()> {
        self.write_line("<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\" />")
    }

    fn end_svg(&mut self) -> Result<()> {
        self.write_line("</svg>")
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line).map_err(|e| format!("Failed to write SVG: {}", e))
    }
}

fn compressed_end(regions: &[OffsetRegion]) -> f64 {
    match regions.last() {
        Some(last) => (last.stop as i64 - last.offset) as f64,
        None => 0.0,
    }
}
