//! # Project Grid
//!
//! One card per project, in store order. The vote button is a plain form
//! post so the page works without the script; the script only swaps in the
//! loading label while the post is in flight.

use std::fmt::Write;

use showcase_core::{Project, ProjectId, VoteRecord};

use crate::escape::escape_html;

/// Delay added per card to the entrance animation.
pub const CARD_STAGGER_MS: u64 = 150;

/// Path the vote form posts to.
pub fn vote_action(id: ProjectId) -> String {
    format!("/vote/{id}")
}

/// Stagger class shared by grid cards and leaderboard rows.
pub(crate) fn stagger_class(index: usize) -> usize {
    (index + 1).min(5)
}

/// Render the project grid, or the empty state when there are no projects.
pub fn render_grid(projects: &[Project], voted: &VoteRecord) -> String {
    if projects.is_empty() {
        return render_empty_grid();
    }
    let mut html = String::from(r#"<div class="projects-grid" id="projectsGrid">"#);
    for (index, project) in projects.iter().enumerate() {
        render_card(&mut html, index, project, voted.has_voted(project.id()));
    }
    html.push_str("</div>");
    html
}

fn render_empty_grid() -> String {
    concat!(
        r#"<div class="empty-state" id="emptyState">"#,
        r#"<i class="fas fa-folder-open"></i>"#,
        "<h3>No projects yet</h3>",
        "<p>Be the first to submit a project to the showcase.</p>",
        r#"<a class="btn primary" href="/upload">Upload a project</a>"#,
        "</div>"
    )
    .to_string()
}

fn render_card(html: &mut String, index: usize, project: &Project, has_voted: bool) {
    let _ = write!(
        html,
        r#"<div class="project-card stagger-{stagger}" style="animation-delay: {delay}ms" data-project-id="{id}">
<div class="project-header">
<h3 class="project-title">{title}</h3>
<div class="vote-count"><i class="fas fa-heart"></i><span>{votes}</span></div>
</div>
<p class="project-description">{description}</p>
<div class="project-meta">
{author}{link}
</div>
{button}
</div>"#,
        stagger = stagger_class(index),
        delay = index as u64 * CARD_STAGGER_MS,
        id = project.id(),
        title = escape_html(project.title()),
        votes = project.votes(),
        description = escape_html(project.description()),
        author = render_author(project.author()),
        link = render_link(project.link()),
        button = render_vote_button(project.id(), has_voted),
    );
}

pub(crate) fn render_author(author: &str) -> String {
    format!(
        r#"<div class="project-author"><div class="author-avatar"><i class="fas fa-user"></i></div><span class="author-name">{}</span></div>"#,
        escape_html(author)
    )
}

pub(crate) fn render_link(link: Option<&str>) -> String {
    match link {
        Some(href) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="project-link"><span>View</span><i class="fas fa-external-link-alt"></i></a>"#,
            escape_html(href)
        ),
        None => String::new(),
    }
}

fn render_vote_button(id: ProjectId, has_voted: bool) -> String {
    if has_voted {
        return r#"<button class="vote-btn voted" type="button" disabled><i class="fas fa-check"></i><span>Voted</span></button>"#
            .to_string();
    }
    format!(
        r#"<form method="post" action="{action}" class="vote-form"><button class="vote-btn primary" type="submit" data-loading-label="Voting..."><i class="fas fa-thumbs-up"></i><span>Vote</span></button></form>"#,
        action = vote_action(id)
    )
}
