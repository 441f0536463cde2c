use crate::error::Result;
use crate::model::YearStats;

/// Machine-readable projection: one record per year with all scalar fields
/// and the top repositories. The daily calendar is excluded by the
/// serialization contract on `YearStats`.
pub fn render_machine(stats_list: &[YearStats]) -> Result<String> {
    Ok(serde_json::to_string_pretty(stats_list)?)
}
