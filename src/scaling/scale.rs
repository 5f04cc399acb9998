use super::offsets::OffsetRegion;
use super::style::Color;
use crate::utils::Result;

/// Result of mapping an absolute genomic position into the compressed
/// coordinate space. The compressed position is signed because region
/// offsets are.
#[derive(Debug, PartialEq, Clone)]
pub struct PositionHit {
    pub offset_position: i64,
    pub color: Color,
}

/// Finds the region containing `position` and shifts the position by
/// that region's offset. Scans the full list so that when annotated
/// regions overlap (unclipped pads) the last region in list order
/// wins. Returns `None` when no region contains the position.
pub fn position_offset(regions: &[OffsetRegion], position: u32) -> Option<PositionHit> {
    let mut hit = None;
    for region in regions {
        if position >= region.start && position <= region.stop {
            hit = Some(PositionHit {
                offset_position: position as i64 - region.offset,
                color: region.style.color.clone(),
            });
        }
    }

    hit
}

/// Linear interpolation between a domain and a range, the same shape
/// as d3's scaleLinear. A zero-span domain maps every value to the
/// start of the range.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }

        let fraction = (value - self.domain.0) / span;
        self.range.0 + fraction * (self.range.1 - self.range.0)
    }
}

/// Builds the scale from compressed genomic coordinates to pixel
/// columns in `[0, width]`. The domain runs from the start of the
/// first annotated region to the compressed end of the last one.
pub fn x_scale(width: u32, offset_regions: &[OffsetRegion]) -> Result<LinearScale> {
    let (first, last) = match (offset_regions.first(), offset_regions.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err("Cannot build a scale from an empty region list".to_string()),
    };

    let domain = (first.start as f64, (last.stop as i64 - last.offset) as f64);
    Ok(LinearScale::new(domain, (0.0, width as f64)))
}
