use leptos::*;

use crate::models::{AreaStats, NationalStats};

/// Figures for the status card, by scope
#[derive(Clone)]
pub enum ScopeStats {
    National(NationalStats),
    Area { name: String, stats: AreaStats },
}

#[component]
pub fn StatusCard(stats: ScopeStats) -> impl IntoView {
    match stats {
        ScopeStats::National(stats) => {
            let next_stage = stats
                .next_stage
                .map(|stage| stage.to_string())
                .unwrap_or_else(|| "Unknown".to_string());

            view! {
                <div class="card status-card">
                    <h3>"National Loadshedding Status"</h3>
                    <div class="status-line stage-value">{format!("Stage: {}", stats.current_stage)}</div>
                    <div class="status-line">{format!("Next Stage: {}", next_stage)}</div>
                    <div class="status-line subtitle">{format_updated(&stats.updated)}</div>
                </div>
            }
            .into_view()
        }
        ScopeStats::Area { name, stats } => view! {
            <div class="card status-card">
                <h3>{format!("{} Loadshedding Status", name)}</h3>
                <div class="status-line stage-value">
                    {format!("Average Duration: {:.1}h", stats.average_duration)}
                </div>
                <div class="status-line">{format!("Total Hours: {:.1}h", stats.total_hours)}</div>
                <div class="status-line subtitle">
                    {format!("Peak: Day {}, {}:00", stats.most_common_day + 1, stats.most_common_hour)}
                </div>
            </div>
        }
        .into_view(),
    }
}

/// Format the update timestamp for display, falling back to the raw
/// string when it does not parse
fn format_updated(updated: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(updated) {
        return format!("Updated: {}", dt.format("%-d %b %Y %H:%M"));
    }
    if let Ok(dt) = updated.parse::<chrono::NaiveDateTime>() {
        return format!("Updated: {}", dt.format("%-d %b %Y %H:%M"));
    }
    format!("Updated: {}", updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_updated_parses_rfc3339() {
        assert_eq!(
            format_updated("2026-08-01T10:05:00+02:00"),
            "Updated: 1 Aug 2026 10:05"
        );
    }

    #[test]
    fn test_format_updated_parses_naive() {
        assert_eq!(
            format_updated("2026-08-01T10:05:00"),
            "Updated: 1 Aug 2026 10:05"
        );
    }

    #[test]
    fn test_format_updated_falls_back_to_raw() {
        assert_eq!(format_updated("yesterday"), "Updated: yesterday");
    }
}
