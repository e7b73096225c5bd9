mod edge_case_tests;
mod finder_tests;

use crate::highlight::Chunk;

/// (content, highlighted) pairs for compact assertions
pub(crate) fn pairs(chunks: &[Chunk]) -> Vec<(&str, bool)> {
    chunks.iter().map(|c| (c.content.as_str(), c.highlighted)).collect()
}

pub(crate) fn highlighted(chunks: &[Chunk]) -> Vec<&str> {
    chunks
        .iter()
        .filter(|c| c.highlighted)
        .map(|c| c.content.as_str())
        .collect()
}
