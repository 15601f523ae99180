use crate::config::{Markup, RenderOptions};
use crate::difficulty::DifficultyTable;
use crate::error::{StatsError, StatsResult};
use crate::stats::aggregate::{Aggregate, Totals, TierPointSummary};
use strum_macros::{Display, EnumIter};

pub const HEX_DIFFICULTY: &str = "FF9900";

/// The counted statistics, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Stat {
    #[strum(serialize = "AAAs")]
    FullClear,
    #[strum(serialize = "SDGs")]
    NearPerfect,
    #[strum(serialize = "FCs")]
    FullCombo,
    Passed,
    #[strum(serialize = "TPs")]
    TierPoints,
}

impl Stat {
    pub fn color(self) -> &'static str {
        match self {
            Stat::FullClear => "D95819",
            Stat::NearPerfect => "3774FF",
            Stat::FullCombo => "009900",
            Stat::Passed => "999999",
            Stat::TierPoints => "CF2222",
        }
    }
}

impl Markup {
    pub fn colored(self, text: &str, hex: &str) -> String {
        match self {
            Markup::Plain => text.to_string(),
            Markup::Bbcode => format!("[color=#{}]{}[/color]", hex, text),
        }
    }

    pub fn heading(self, title: &str) -> String {
        match self {
            Markup::Plain => format!("== {} ==", title),
            Markup::Bbcode => format!("[b][u]{}[/u][/b]", title),
        }
    }

    fn stat(self, stat: Stat) -> String {
        self.colored(&stat.to_string(), stat.color())
    }
}

/// One bucket's line. Counts that are already complete are left out; a zero
/// AAA count only shows once every level has its SDG.
pub fn bucket_line(label: &str, t: &Totals, options: &RenderOptions) -> String {
    let m = options.markup;
    let mut line = format!("{}:", m.colored(label, HEX_DIFFICULTY));
    let mut push = |stat: Stat, n: u32, d: u32| {
        line.push_str(&format!(" {}/{} {}", n, d, m.stat(stat)));
    };

    if t.achieved != 0 || t.special_grade == t.total {
        push(Stat::FullClear, t.achieved, t.total);
    }
    if t.special_grade != t.total {
        push(Stat::NearPerfect, t.special_grade, t.total);
    }
    if t.full_combo_count != t.total {
        push(Stat::FullCombo, t.full_combo_count, t.total);
    }
    if options.show_passed && t.passed_count != t.total {
        push(Stat::Passed, t.passed_count, t.total);
    }
    if t.tier_points_earned != t.tier_points_possible {
        push(Stat::TierPoints, t.tier_points_earned, t.tier_points_possible);
    }
    line
}

fn percent_line(stat: Stat, n: u32, d: u32, markup: Markup) -> StatsResult<String> {
    if d == 0 {
        return Err(StatsError::ZeroTotal(stat.to_string()));
    }
    let pct = (100 * n as u64) as f64 / d as f64;
    Ok(format!("{}: {}/{} {:.1}%", markup.stat(stat), n, d, pct))
}

/// The grand-total percentages. Fails on any zero denominator.
pub fn grand_lines(t: &Totals, options: &RenderOptions) -> StatsResult<Vec<String>> {
    let m = options.markup;
    let mut lines = vec![
        percent_line(Stat::FullClear, t.achieved, t.total, m)?,
        percent_line(Stat::NearPerfect, t.special_grade, t.total, m)?,
        percent_line(Stat::FullCombo, t.full_combo_count, t.total, m)?,
    ];
    if options.show_passed {
        lines.push(percent_line(Stat::Passed, t.passed_count, t.total, m)?);
    }
    lines.push(percent_line(
        Stat::TierPoints,
        t.tier_points_earned,
        t.tier_points_possible,
        m,
    )?);
    Ok(lines)
}

/// Difficulty buckets (hardest first), the optional per-rating breakdown,
/// then the grand totals. Blank lines separate the blocks.
pub fn render(
    aggregate: &Aggregate,
    table: &DifficultyTable,
    options: &RenderOptions,
) -> StatsResult<Vec<String>> {
    let mut lines = Vec::new();

    for (&index, totals) in &aggregate.by_tier {
        if options.hide_zero_difficulty && table.is_zero_tier(index) {
            continue;
        }
        if options.hide_fully_achieved && totals.is_fully_achieved() {
            continue;
        }
        let tier = table.tier(index).ok_or_else(|| {
            StatsError::InvalidDifficultyTable(format!("no tier at index {}", index))
        })?;
        lines.push(bucket_line(&tier.name, totals, options));
    }
    lines.push(String::new());

    if options.per_rating_breakdown {
        for (&rating, totals) in &aggregate.by_rating {
            if options.hide_zero_difficulty && rating == 0 {
                continue;
            }
            if rating > options.max_rating_breakdown {
                break;
            }
            if options.hide_fully_achieved && totals.is_fully_achieved() {
                continue;
            }
            lines.push(bucket_line(&rating.to_string(), totals, options));
        }
        lines.push(String::new());
    }

    lines.extend(grand_lines(&aggregate.grand, options)?);
    Ok(lines)
}

/// A titled block wrapping [`render`].
pub fn render_section(
    title: &str,
    aggregate: &Aggregate,
    table: &DifficultyTable,
    options: &RenderOptions,
) -> StatsResult<Vec<String>> {
    let mut lines = vec![options.markup.heading(title), String::new()];
    lines.extend(render(aggregate, table, options)?);
    lines.push(String::new());
    Ok(lines)
}

pub fn render_tier_point_summary(
    summary: &TierPointSummary,
    markup: Markup,
) -> StatsResult<Vec<String>> {
    let mut lines = vec![markup.heading("Tier Point Stats"), String::new()];

    for (size, points) in &summary.by_list_size {
        if points.is_complete() {
            continue;
        }
        lines.push(format!(
            "{}: {}/{} {}",
            markup.colored(&format!("/{}", size), HEX_DIFFICULTY),
            points.earned,
            points.possible,
            markup.stat(Stat::TierPoints)
        ));
    }
    lines.push(format!(
        "{}: {}/{} {}",
        markup.colored("+", HEX_DIFFICULTY),
        summary.bonus.earned,
        summary.bonus.possible,
        markup.stat(Stat::TierPoints)
    ));
    lines.push(String::new());
    lines.push(percent_line(
        Stat::TierPoints,
        summary.overall.earned,
        summary.overall.possible,
        markup,
    )?);
    Ok(lines)
}
