//! Aggregate figures: header badges and the results-page stat cards.

use showcase_core::Stats;

use crate::escape::escape_html;

/// Shown when there is no leader.
pub const NO_LEADER: &str = "N/A";

/// "N Projects" / "N Total Votes" badges in the header.
pub fn render_header_stats(stats: &Stats) -> String {
    format!(
        r#"<div class="header-stats"><span class="stat-badge" id="totalProjects">{} Projects</span><span class="stat-badge" id="totalVotes">{} Total Votes</span></div>"#,
        stats.total_projects, stats.total_votes
    )
}

/// The three stat cards above the leaderboard.
pub fn render_results_stats(stats: &Stats) -> String {
    let leader = stats.leader.as_deref().unwrap_or(NO_LEADER);
    format!(
        r#"<div class="stats-grid">
<div class="stat-card"><div class="stat-value" id="statsProjects">{projects}</div><div class="stat-label">Projects</div></div>
<div class="stat-card"><div class="stat-value" id="statsVotes">{votes}</div><div class="stat-label">Total Votes</div></div>
<div class="stat-card"><div class="stat-value" id="statsLeader">{leader}</div><div class="stat-label">Leading Project</div></div>
</div>"#,
        projects = stats.total_projects,
        votes = stats.total_votes,
        leader = escape_html(leader),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::ProjectStore;

    #[test]
    fn header_counts() {
        let html = render_header_stats(&ProjectStore::with_demo_projects().stats());
        assert!(html.contains("4 Projects"));
        assert!(html.contains("317 Total Votes"));
    }

    #[test]
    fn results_show_leader_or_placeholder() {
        let html = render_results_stats(&ProjectStore::with_demo_projects().stats());
        assert!(html.contains("VirtualMeet - 3D Video Conferencing"));

        let html = render_results_stats(&ProjectStore::new().stats());
        assert!(html.contains(">N/A<"));
        assert!(html.contains(r#"id="statsVotes">0<"#));
    }

    #[test]
    fn leader_title_is_escaped() {
        let stats = Stats {
            total_projects: 1,
            total_votes: 0,
            leader: Some("<b>x</b>".to_string()),
        };
        assert!(render_results_stats(&stats).contains("&lt;b&gt;x&lt;/b&gt;"));
    }
}
