//! Progress-banded journey narration.
//!
//! Seven fixed bands cover the progress range; each carries a line templated
//! on the endpoints' names, building genes, and descriptions. The banding
//! and its half-open selection rule are the contract here — the prose itself
//! is presentation copy.

use serde::{Deserialize, Serialize};

use crate::station::Station;

/// One narration line, active while progress lies in `[start, end)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrationSegment {
    pub progress_start: f64,
    pub progress_end: f64,
    pub text: String,
    /// Keyword the panel highlights within the text.
    pub highlight: String,
}

fn segment(progress_start: f64, progress_end: f64, text: String, highlight: &str) -> NarrationSegment {
    NarrationSegment {
        progress_start,
        progress_end,
        text,
        highlight: highlight.to_owned(),
    }
}

/// Build the seven narration segments for a journey between two stations.
pub fn journey_narration(start: &Station, end: &Station) -> Vec<NarrationSegment> {
    vec![
        segment(
            0.0, 0.15,
            format!(
                "Leaving {} behind, the journey begins. The local \"{}\" manner \
                 is unmistakable here — {} The scenery starts to change along the road...",
                start.name, start.building_gene, start.description
            ),
            &start.building_gene,
        ),
        segment(
            0.15, 0.30,
            format!(
                "The outline of {} fades behind you. Roof lines begin to shift \
                 subtly; climate is quietly reworking every constructional detail...",
                start.name
            ),
            "climate",
        ),
        segment(
            0.30, 0.45,
            "Midway now, and the differences in built form are plain. Shifting \
             rainfall and sun drive roof pitch and window size onward, every \
             course of brick answering the land..."
                .to_owned(),
            "built form",
        ),
        segment(
            0.45, 0.60,
            format!(
                "Crossing the climatic divide, the constructional logic itself \
                 turns over. Out of the \"{}\" gene, a new formal code begins \
                 to surface...",
                start.building_gene
            ),
            "divide",
        ),
        segment(
            0.60, 0.75,
            format!(
                "The look of {} shows at the horizon. The traits of \"{}\" grow \
                 distinct — centuries of conversation between land and builder...",
                end.name, end.building_gene
            ),
            &end.building_gene,
        ),
        segment(
            0.75, 0.90,
            format!(
                "Nearly there, and the dwelling no longer resembles its origin. \
                 {} Environment shapes the building; the building speaks for \
                 its environment...",
                end.description
            ),
            "environment",
        ),
        segment(
            0.90, 1.0,
            format!(
                "Arriving at {}, you have watched \"{}\" become \"{}\". Not just \
                 a crossing of space — a lineage of building wisdom...",
                end.name, start.building_gene, end.building_gene
            ),
            "lineage",
        ),
    ]
}

/// The segment whose band contains `t`, by `start <= t < end` membership.
pub fn segment_at(segments: &[NarrationSegment], t: f64) -> Option<&NarrationSegment> {
    segments
        .iter()
        .find(|s| t >= s.progress_start && t < s.progress_end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::StationCatalog;

    fn sample_segments() -> Vec<NarrationSegment> {
        let catalog = StationCatalog::builtin();
        journey_narration(catalog.get("suzhou").unwrap(), catalog.get("lhasa").unwrap())
    }

    #[test]
    fn seven_contiguous_bands_cover_the_unit_interval() {
        let segments = sample_segments();
        assert_eq!(segments.len(), 7);
        assert_eq!(segments[0].progress_start, 0.0);
        assert_eq!(segments.last().unwrap().progress_end, 1.0);
        for pair in segments.windows(2) {
            assert_eq!(
                pair[0].progress_end, pair[1].progress_start,
                "bands must be contiguous"
            );
        }
    }

    #[test]
    fn selection_is_half_open() {
        let segments = sample_segments();
        assert_eq!(segment_at(&segments, 0.0).unwrap().progress_start, 0.0);
        // A band boundary belongs to the following band.
        assert_eq!(segment_at(&segments, 0.15).unwrap().progress_start, 0.15);
        assert_eq!(segment_at(&segments, 0.95).unwrap().progress_start, 0.90);
        // Exactly 1.0 falls outside every half-open band, as in the source UI.
        assert!(segment_at(&segments, 1.0).is_none());
    }

    #[test]
    fn endpoints_are_woven_into_the_text() {
        let segments = sample_segments();
        assert!(segments[0].text.contains("Suzhou"));
        assert!(segments[6].text.contains("Lhasa"));
        assert!(segments[6].text.contains("raised-beam frame"));
        assert!(segments[6].text.contains("stone blockhouse"));
    }
}
