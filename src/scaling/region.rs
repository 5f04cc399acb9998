use crate::utils::Result;
use std::fmt;
use std::io::BufRead;

/// Feature annotation of a transcript sub-region. Unknown labels are
/// carried through verbatim rather than rejected.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum FeatureType {
    Cds,
    Exon,
    Utr,
    StartPad,
    EndPad,
    Other(String),
}

impl FeatureType {
    pub fn decode(label: &str) -> FeatureType {
        match label {
            "CDS" => FeatureType::Cds,
            "exon" => FeatureType::Exon,
            "UTR" => FeatureType::Utr,
            "start_pad" => FeatureType::StartPad,
            "end_pad" => FeatureType::EndPad,
            _ => FeatureType::Other(label.to_string()),
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FeatureType::Cds => write!(formatter, "CDS"),
            FeatureType::Exon => write!(formatter, "exon"),
            FeatureType::Utr => write!(formatter, "UTR"),
            FeatureType::StartPad => write!(formatter, "start_pad"),
            FeatureType::EndPad => write!(formatter, "end_pad"),
            FeatureType::Other(label) => write!(formatter, "{}", label),
        }
    }
}

/// A sub-region of a transcript in absolute genomic coordinates.
/// Both endpoints are inclusive.
#[derive(Debug, PartialEq, Clone)]
pub struct Region {
    pub feature_type: FeatureType,
    pub start: u32,
    pub stop: u32,
}

impl Region {
    pub fn new(feature_type: FeatureType, start: u32, stop: u32) -> Result<Self> {
        if start > stop {
            return Err(format!("Invalid region: start {} > stop {}", start, stop));
        }

        Ok(Self {
            feature_type,
            start,
            stop,
        })
    }

    pub fn from_line(line: &str) -> Result<Self> {
        let error_msg = || format!("Invalid region encoding: {}", line);
        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.len() != 3 {
            return Err(error_msg());
        }

        let start: u32 = fields[1].parse().map_err(|_| error_msg())?;
        let stop: u32 = fields[2].parse().map_err(|_| error_msg())?;

        Self::new(FeatureType::decode(fields[0]), start, stop)
    }
}

/// Reads regions from a tab-separated file with `feature start stop`
/// records. Blank lines and `#` comments are skipped. Regions are
/// expected to be sorted by start; ordering is checked by the offset
/// pipeline rather than here.
pub fn read_regions<R: BufRead>(reader: R) -> Result<Vec<Region>> {
    let mut regions = Vec::new();
    for (line_number, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Error reading line {}: {}", line_number + 1, e))?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let region = Region::from_line(&line)
            .map_err(|e| format!("Error at line {}: {}", line_number + 1, e))?;
        regions.push(region);
    }

    Ok(regions)
}
