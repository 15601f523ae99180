use crate::config::ScoringConstants;
use crate::stats::level::LevelResult;
use serde::Serialize;

/// AAA: a full combo where every note was a perfect and nothing was booed.
///
/// The site compares perfects with the max combo; on a full-combo run that
/// equals the note total, which is what is checked here.
pub fn is_full_clear(r: &LevelResult) -> bool {
    let j = r.judgements();
    r.full_combo() && j.miss == 0 && j.boo == 0 && j.perfect == r.note_total()
}

/// Every note of the level received a judgment.
pub fn is_passed(r: &LevelResult) -> bool {
    r.judgements().judged() == r.note_total() as u64
}

/// SDG: the score beats a run whose worst `near_perfect_allowance` notes were
/// goods and everything else perfect.
pub fn is_near_perfect(r: &LevelResult, constants: &ScoringConstants) -> bool {
    let allowance = constants.near_perfect_allowance;
    let bound = constants
        .perfect_score
        .saturating_mul((r.note_total() as i64).saturating_sub(allowance))
        .saturating_add(constants.good_score.saturating_mul(allowance));
    is_passed(r) && (r.raw_score() as i64) > bound
}

/// Whether the player holds rank 1 on the level.
///
/// Used as a stand-in for "AAA held" when only rank data is available. It is
/// an approximation: a tied AAA can sit below rank 1.
pub fn holds_top_rank(r: &LevelResult) -> bool {
    r.rank() == 1
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Achievements {
    pub full_clear: bool,
    pub near_perfect: bool,
    pub full_combo: bool,
    pub passed: bool,
}

impl Achievements {
    pub fn evaluate(r: &LevelResult, constants: &ScoringConstants) -> Self {
        Self {
            full_clear: is_full_clear(r),
            near_perfect: is_near_perfect(r, constants),
            full_combo: r.full_combo(),
            passed: is_passed(r),
        }
    }
}
