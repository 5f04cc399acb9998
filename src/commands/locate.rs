use crate::cli::LocateArgs;
use crate::scaling::{calculate_offset_regions, position_offset, read_regions, FeatureType};
use crate::utils::Result;
use std::fs::File;
use std::io::BufReader;

pub fn locate(args: LocateArgs) -> Result<()> {
    let file = File::open(&args.regions_path)
        .map_err(|e| format!("Failed to open {}: {}", args.regions_path.display(), e))?;
    let regions = read_regions(BufReader::new(file))?;

    let features: Vec<FeatureType> = args
        .features
        .iter()
        .map(|label| FeatureType::decode(label))
        .collect();
    let annotated = calculate_offset_regions(&features, args.padding, &regions)?;

    for position in &args.positions {
        match position_offset(&annotated, *position) {
            Some(hit) => println!("{}\t{}\t{}", position, hit.offset_position, hit.color),
            None => {
                log::warn!("Position {} is outside every displayed region", position);
                println!("{}\tNA\tNA", position);
            }
        }
    }

    Ok(())
}
