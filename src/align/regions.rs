//! Delimited regions of a token stream.
//!
//! A region is the run of lines closed by a delimiter line. The delimiter is not
//! part of the region, and lines after the last delimiter belong to no region.

use crate::config::LengthUnit;

/// Split `lines` into the regions closed by `delimiter`.
pub fn find_sub_regions<'a, S: AsRef<str>>(lines: &'a [S], delimiter: &str) -> Vec<&'a [S]> {
    let mut regions = Vec::new();
    let mut start = 0;
    for (idx, line) in lines.iter().enumerate() {
        if line.as_ref() == delimiter {
            regions.push(&lines[start..idx]);
            start = idx + 1;
        }
    }
    regions
}

/// Length of a region: one per line plus the length of every line.
pub fn region_length<S: AsRef<str>>(region: &[S], unit: LengthUnit) -> usize {
    region.len()
        + region
            .iter()
            .map(|line| match unit {
                LengthUnit::Codepoints => line.as_ref().chars().count(),
                LengthUnit::Bytes => line.as_ref().len(),
            })
            .sum::<usize>()
}

pub fn region_lengths<S: AsRef<str>>(regions: &[&[S]], unit: LengthUnit) -> Vec<usize> {
    regions
        .iter()
        .map(|region| region_length(region, unit))
        .collect()
}
