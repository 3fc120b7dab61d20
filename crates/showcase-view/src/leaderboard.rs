//! # Leaderboard
//!
//! Ranked projects with badge tiers for the top three and a progress bar
//! scaled to the leader's count. Vote numbers start at `0` and count up in
//! the browser on the schedule from [`crate::counter`].

use std::fmt::Write;

use serde::Serialize;
use showcase_core::{rank_by_votes, Project};

use crate::counter;
use crate::escape::escape_html;
use crate::grid::{render_author, render_link, stagger_class};

/// Visual tier of a leaderboard rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankTier {
    Gold,
    Silver,
    Bronze,
    Other,
}

impl RankTier {
    /// Tier for a one-based rank.
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            1 => Self::Gold,
            2 => Self::Silver,
            3 => Self::Bronze,
            _ => Self::Other,
        }
    }

    /// CSS class for the row and its badge.
    pub fn css_class(self, rank: usize) -> String {
        match self {
            Self::Other => "rank-other".to_string(),
            _ => format!("rank-{rank}"),
        }
    }

    fn badge(self, rank: usize) -> String {
        match self {
            Self::Gold => r#"<i class="fas fa-crown"></i>"#.to_string(),
            Self::Silver => r#"<i class="fas fa-medal"></i>"#.to_string(),
            Self::Bronze => r#"<i class="fas fa-award"></i>"#.to_string(),
            Self::Other => format!("#{rank}"),
        }
    }
}

/// One ranked entry.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardRow<'a> {
    pub rank: usize,
    pub tier: RankTier,
    /// Bar width as a percentage of the leader's votes, 0–100.
    pub progress: f64,
    pub project: &'a Project,
}

/// Bar width in percent. A zero maximum counts as one.
pub fn progress_width(votes: u64, max_votes: u64) -> f64 {
    let max = max_votes.max(1) as f64;
    (votes as f64 / max * 100.0).min(100.0)
}

/// Rank `projects` and compute tiers and bar widths.
pub fn leaderboard_rows(projects: &[Project]) -> Vec<LeaderboardRow<'_>> {
    let ranked = rank_by_votes(projects);
    let max_votes = ranked.first().map_or(1, |p| p.votes());
    ranked
        .into_iter()
        .enumerate()
        .map(|(index, project)| {
            let rank = index + 1;
            LeaderboardRow {
                rank,
                tier: RankTier::for_rank(rank),
                progress: progress_width(project.votes(), max_votes),
                project,
            }
        })
        .collect()
}

/// Render the leaderboard, or the empty state when there are no projects.
pub fn render_leaderboard(projects: &[Project]) -> String {
    let rows = leaderboard_rows(projects);
    if rows.is_empty() {
        return concat!(
            r#"<div class="empty-state" id="resultsEmptyState">"#,
            r#"<i class="fas fa-trophy"></i>"#,
            "<h3>No results yet</h3>",
            "<p>Once projects are submitted and voted on, the rankings appear here.</p>",
            "</div>"
        )
        .to_string();
    }

    let mut html = format!(
        r#"<div class="leaderboard" id="leaderboard" data-counter-tick="{}">"#,
        counter::TICK.as_millis(),
    );
    for (index, row) in rows.iter().enumerate() {
        render_row(&mut html, index, row);
    }
    html.push_str("</div>");
    html
}

fn render_row(html: &mut String, index: usize, row: &LeaderboardRow<'_>) {
    let class = row.tier.css_class(row.rank);
    let project = row.project;
    let _ = write!(
        html,
        r#"<div class="leaderboard-item {class} stagger-{stagger}">
<div class="leaderboard-content">
<div class="rank-icon {class}">{badge}</div>
<div class="project-info">
<h3>{title}</h3>
<p>{description}</p>
<div class="project-footer">{author}{link}</div>
</div>
<div class="vote-section">
<div class="vote-number" data-target="{votes}" data-start="{start}" data-step="{step}">0</div>
<div class="vote-label">votes</div>
<div class="progress-bar-container"><div class="progress-bar-fill" style="width: {progress:.1}%"></div></div>
</div>
</div>
</div>"#,
        stagger = stagger_class(index),
        badge = row.tier.badge(row.rank),
        title = escape_html(project.title()),
        description = escape_html(project.description()),
        author = render_author(project.author()),
        link = render_link(project.link()),
        votes = project.votes(),
        start = counter::start_offset(index).as_millis(),
        step = counter::step(project.votes()),
        progress = row.progress,
    );
}
