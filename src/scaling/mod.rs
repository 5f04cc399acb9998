pub mod offsets;
pub mod region;
pub mod scale;
pub mod style;

pub use offsets::{
    add_padding, assign_attributes, calculate_offset_regions, calculate_offsets, default_features,
    filter_regions, OffsetRegion, DEFAULT_PADDING,
};
pub use region::{read_regions, FeatureType, Region};
pub use scale::{position_offset, x_scale, LinearScale, PositionHit};
pub use style::{pick_style, Color, Style};
