use super::region::FeatureType;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Color {
    Green,
    Grey,
    Yellow,
    Olive,
    Unset,
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Green => write!(formatter, "green"),
            Color::Grey => write!(formatter, "grey"),
            Color::Yellow => write!(formatter, "#FFEB3B"),
            Color::Olive => write!(formatter, "#827717"),
            Color::Unset => write!(formatter, ""),
        }
    }
}

/// Rendering attributes of a single region: fill color and the height
/// of its bar in pixels.
#[derive(Debug, PartialEq, Clone)]
pub struct Style {
    pub color: Color,
    pub thickness: u32,
}

/// Feature types without a dedicated entry fall back to a thin grey bar.
pub fn pick_style(feature_type: &FeatureType) -> Style {
    match feature_type {
        FeatureType::Cds => Style {
            color: Color::Green,
            thickness: 10,
        },
        FeatureType::Exon => Style {
            color: Color::Unset,
            thickness: 3,
        },
        FeatureType::StartPad => Style {
            color: Color::Yellow,
            thickness: 1,
        },
        FeatureType::EndPad => Style {
            color: Color::Olive,
            thickness: 1,
        },
        _ => Style {
            color: Color::Grey,
            thickness: 1,
        },
    }
}
