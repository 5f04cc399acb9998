use crate::cli::PlotArgs;
use crate::diagram;
use crate::scaling::{calculate_offset_regions, read_regions, FeatureType};
use crate::utils::Result;
use std::fs::File;
use std::io::BufReader;

pub fn plot(args: PlotArgs) -> Result<()> {
    let file = File::open(&args.regions_path)
        .map_err(|e| format!("Failed to open {}: {}", args.regions_path.display(), e))?;
    let regions = read_regions(BufReader::new(file))?;
    log::info!(
        "Read {} regions from {}",
        regions.len(),
        args.regions_path.display()
    );

    let features: Vec<FeatureType> = args
        .features
        .iter()
        .map(|label| FeatureType::decode(label))
        .collect();
    let annotated = calculate_offset_regions(&features, args.padding, &regions)?;
    if annotated.is_empty() {
        return Err("No regions left to plot after filtering".to_string());
    }

    let output = File::create(&args.output_path)
        .map_err(|e| format!("Failed to create {}: {}", args.output_path, e))?;
    diagram::generate(&annotated, args.width, output)?;
    log::info!("Wrote {}", args.output_path);
    Ok(())
}
