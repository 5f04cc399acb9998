use super::region::{FeatureType, Region};
use super::style::{pick_style, Color, Style};
use crate::utils::Result;
use itertools::Itertools;

pub const DEFAULT_PADDING: u32 = 50;

pub fn default_features() -> Vec<FeatureType> {
    vec![FeatureType::Cds]
}

/// A region annotated with its cumulative offset into the compressed
/// coordinate space and its rendering style. A position inside the
/// region maps to `position - offset` on the compressed axis. The
/// offset is signed: overlapping padded regions contribute negative
/// gap terms that shrink it.
#[derive(Debug, PartialEq, Clone)]
pub struct OffsetRegion {
    pub feature_type: FeatureType,
    pub start: u32,
    pub stop: u32,
    pub offset: i64,
    pub style: Style,
}

/// Keeps regions whose feature type appears in `features`, preserving
/// the input order.
pub fn filter_regions(features: &[FeatureType], regions: &[Region]) -> Vec<Region> {
    regions
        .iter()
        .filter(|region| features.contains(&region.feature_type))
        .cloned()
        .collect()
}

/// Surrounds each region with synthetic pad regions: a `start_pad`
/// spanning `[start - padding, start - 1]` before every region except
/// the first and an `end_pad` spanning `[stop + 1, stop + padding]`
/// after every region. Emits `3n - 1` regions for `n >= 1` inputs.
///
/// Pads are not merged or clipped: when the gap between two regions is
/// smaller than `2 * padding`, the neighboring pads overlap. Pad
/// coordinates saturate at zero near the start of the contig.
pub fn add_padding(padding: u32, regions: &[Region]) -> Vec<Region> {
    let mut padded = Vec::with_capacity(regions.len() * 3);
    for (index, region) in regions.iter().enumerate() {
        if index != 0 {
            padded.push(Region {
                feature_type: FeatureType::StartPad,
                start: region.start.saturating_sub(padding),
                stop: region.start.saturating_sub(1),
            });
        }
        padded.push(region.clone());
        padded.push(Region {
            feature_type: FeatureType::EndPad,
            start: region.stop.saturating_add(1),
            stop: region.stop.saturating_add(padding),
        });
    }

    padded
}

/// Annotates each region with the cumulative width of the gaps that
/// precede it, collapsing every inter-region gap to zero width on the
/// compressed axis. The first region gets offset 0; region `i` gets
/// `offset[i - 1] + (start[i] - stop[i - 1])`. The gap term is
/// negative when consecutive regions overlap, as happens with pads
/// wider than the gap they fill. Styles are filled in by
/// [`assign_attributes`].
pub fn calculate_offsets(regions: &[Region]) -> Vec<OffsetRegion> {
    let mut annotated: Vec<OffsetRegion> = Vec::with_capacity(regions.len());
    for region in regions {
        let offset = match annotated.last() {
            Some(prev) => prev.offset + (region.start as i64 - prev.stop as i64),
            None => 0,
        };

        annotated.push(OffsetRegion {
            feature_type: region.feature_type.clone(),
            start: region.start,
            stop: region.stop,
            offset,
            style: Style {
                color: Color::Grey,
                thickness: 1,
            },
        });
    }

    annotated
}

/// Assigns each region the style of its feature type. Pure mapping.
pub fn assign_attributes(regions: Vec<OffsetRegion>) -> Vec<OffsetRegion> {
    regions
        .into_iter()
        .map(|region| {
            let style = pick_style(&region.feature_type);
            OffsetRegion { style, ..region }
        })
        .collect()
}

/// Runs the full pipeline: filter to the displayed feature types, pad,
/// annotate with offsets, and style. The retained regions must be
/// sorted by start and non-overlapping; violations are reported as
/// errors rather than silently producing a garbled coordinate space.
pub fn calculate_offset_regions(
    features: &[FeatureType],
    padding: u32,
    regions: &[Region],
) -> Result<Vec<OffsetRegion>> {
    let retained = filter_regions(features, regions);
    check_ordering(&retained)?;
    let padded = add_padding(padding, &retained);
    Ok(assign_attributes(calculate_offsets(&padded)))
}

fn check_ordering(regions: &[Region]) -> Result<()> {
    for (prev, next) in regions.iter().tuple_windows() {
        if next.start <= prev.stop {
            return Err(format!(
                "Region {} at {}-{} overlaps or precedes {} at {}-{}; regions must be sorted and disjoint",
                next.feature_type, next.start, next.stop, prev.feature_type, prev.start, prev.stop
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cds(start: u32, stop: u32) -> Region {
        Region::new(FeatureType::Cds, start, stop).unwrap()
    }

    #[test]
    fn filter_keeps_only_requested_features_in_order() {
        let regions = vec![
            Region::new(FeatureType::Exon, 100, 500).unwrap(),
            cds(150, 200),
            Region::new(FeatureType::Utr, 210, 260).unwrap(),
            cds(300, 400),
        ];
        let retained = filter_regions(&[FeatureType::Cds], &regions);
        assert_eq!(retained, vec![cds(150, 200), cds(300, 400)]);
    }

    #[test]
    fn filter_on_empty_feature_list_drops_everything() {
        assert!(filter_regions(&[], &[cds(100, 200)]).is_empty());
    }

    #[test]
    fn padding_emits_three_n_minus_one_regions() {
        let regions = vec![cds(100, 200), cds(300, 400), cds(500, 600)];
        assert_eq!(add_padding(10, &regions).len(), 8);
        assert_eq!(add_padding(10, &regions[..1]).len(), 2);
        assert_eq!(add_padding(10, &[]).len(), 0);
    }

    #[test]
    fn padding_surrounds_regions_without_leading_pad() {
        let padded = add_padding(10, &[cds(100, 200), cds(300, 400)]);
        let spans: Vec<(FeatureType, u32, u32)> = padded
            .iter()
            .map(|r| (r.feature_type.clone(), r.start, r.stop))
            .collect();
        assert_eq!(
            spans,
            vec![
                (FeatureType::Cds, 100, 200),
                (FeatureType::EndPad, 201, 210),
                (FeatureType::StartPad, 290, 299),
                (FeatureType::Cds, 300, 400),
                (FeatureType::EndPad, 401, 410),
            ]
        );
    }

    #[test]
    fn padding_saturates_at_contig_start() {
        // An unsorted caller can put a region starting at 0 after
        // another; the pad must not underflow.
        let padded = add_padding(50, &[cds(500, 600), cds(0, 20)]);
        assert_eq!(padded[2].feature_type, FeatureType::StartPad);
        assert_eq!(padded[2].start, 0);
        assert_eq!(padded[2].stop, 0);
    }

    #[test]
    fn offsets_accumulate_gap_widths() {
        let padded = add_padding(10, &[cds(100, 200), cds(300, 400)]);
        let annotated = calculate_offsets(&padded);
        let offsets: Vec<i64> = annotated.iter().map(|r| r.offset).collect();
        assert_eq!(offsets, vec![0, 1, 81, 82, 83]);
    }

    #[test]
    fn overlapping_regions_shrink_the_offset() {
        let annotated = calculate_offsets(&[cds(100, 200), cds(150, 250)]);
        assert_eq!(annotated[1].offset, -50);
    }

    #[test]
    fn offsets_are_non_decreasing() {
        let regions = vec![cds(5, 10), cds(11, 30), cds(200, 210), cds(1000, 2000)];
        let annotated = calculate_offsets(&regions);
        for pair in annotated.windows(2) {
            assert!(pair[0].offset <= pair[1].offset);
        }
    }

    #[test]
    fn adjacent_regions_get_unit_offset_steps() {
        // stop + 1 == next start means a gap of 1 in the original
        // formula, matching pads emitted by add_padding.
        let annotated = calculate_offsets(&[cds(100, 200), cds(201, 300)]);
        assert_eq!(annotated[1].offset, 1);
    }

    #[test]
    fn assign_attributes_is_pure() {
        let annotated = calculate_offsets(&add_padding(10, &[cds(100, 200), cds(300, 400)]));
        let once = assign_attributes(annotated.clone());
        let twice = assign_attributes(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once[0].style.color, Color::Green);
        assert_eq!(once[1].style.color.to_string(), "#827717");
    }

    #[test]
    fn pipeline_composes_all_stages() {
        let regions = vec![
            Region::new(FeatureType::Exon, 90, 450).unwrap(),
            cds(100, 200),
            cds(300, 400),
        ];
        let annotated = calculate_offset_regions(&[FeatureType::Cds], 10, &regions).unwrap();
        assert_eq!(annotated.len(), 5);
        assert_eq!(annotated[0].offset, 0);
        assert_eq!(annotated[3].start, 300);
        assert_eq!(annotated[3].offset, 82);
        assert_eq!(annotated[3].style.thickness, 10);
        assert_eq!(annotated[4].offset, 83);
    }

    #[test]
    fn pipeline_handles_padding_wider_than_gap() {
        // A gap of 10 between the retained regions is swallowed by
        // 50-wide pads; the pads overlap and the gap terms go
        // negative.
        let regions = vec![cds(100, 200), cds(211, 300)];
        let annotated = calculate_offset_regions(&[FeatureType::Cds], 50, &regions).unwrap();
        let offsets: Vec<i64> = annotated.iter().map(|r| r.offset).collect();
        assert_eq!(offsets, vec![0, 1, -88, -87, -86]);
    }

    #[test]
    fn padding_saturates_at_contig_end() {
        let padded = add_padding(50, &[cds(u32::MAX - 10, u32::MAX)]);
        assert_eq!(padded[1].feature_type, FeatureType::EndPad);
        assert_eq!(padded[1].start, u32::MAX);
        assert_eq!(padded[1].stop, u32::MAX);
    }

    #[test]
    fn pipeline_rejects_unsorted_regions() {
        let regions = vec![cds(300, 400), cds(100, 200)];
        let result = calculate_offset_regions(&[FeatureType::Cds], 10, &regions);
        assert!(result.is_err());
    }

    #[test]
    fn pipeline_rejects_overlapping_regions() {
        let regions = vec![cds(100, 200), cds(150, 250)];
        let result = calculate_offset_regions(&[FeatureType::Cds], 10, &regions);
        assert!(result.unwrap_err().contains("sorted and disjoint"));
    }

    #[test]
    fn pipeline_on_empty_input_is_empty() {
        let annotated = calculate_offset_regions(&default_features(), DEFAULT_PADDING, &[]);
        assert_eq!(annotated, Ok(Vec::new()));
    }
}
