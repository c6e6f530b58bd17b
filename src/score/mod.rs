use crate::compose;
use crate::profile::BusinessProfile;
use crate::question::Mode;
use crate::registry::VerticalDefinition;

/// Answered/total counts for one score area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaScore {
    pub area: String,
    pub answered: usize,
    pub total: usize,
}

impl AreaScore {
    pub fn percent(&self) -> u8 {
        percent(self.answered, self.total)
    }
}

/// Completeness of a profile as the share of currently applicable questions
/// already answered, in [0, 100].
///
/// The denominator is the same composed set the user is shown, including
/// suppression, so the score can never disagree with the visible flow. The
/// score is a view: it is recomputed from the current profile on every call
/// and never stored as a source of truth.
pub fn precision_score(vertical: &VerticalDefinition, mode: Mode, profile: &BusinessProfile) -> u8 {
    let active = compose::compose(vertical, mode, profile);
    let answered = active
        .iter()
        .filter(|question| profile.is_answered(&question.store_path))
        .count();
    percent(answered, active.len())
}

/// Per-area answered/total counts over the same composed set, for wizard
/// progress display. Areas appear in first-encounter order.
pub fn score_breakdown(
    vertical: &VerticalDefinition,
    mode: Mode,
    profile: &BusinessProfile,
) -> Vec<AreaScore> {
    let active = compose::compose(vertical, mode, profile);
    let mut areas: Vec<AreaScore> = Vec::new();
    for question in &active {
        let answered = profile.is_answered(&question.store_path);
        match areas.iter_mut().find(|area| area.area == question.score_area) {
            Some(area) => {
                area.total += 1;
                if answered {
                    area.answered += 1;
                }
            }
            None => areas.push(AreaScore {
                area: question.score_area.clone(),
                answered: usize::from(answered),
                total: 1,
            }),
        }
    }
    areas
}

/// An empty applicable set scores 0: nothing to answer, not a division.
fn percent(answered: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (100.0 * answered as f64 / total as f64).round() as u8
}
