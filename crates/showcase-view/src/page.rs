//! # Full Pages
//!
//! Wraps a page body in the shared document: header with navigation and
//! stats, toast container, confirmation modal, loading overlay, and the
//! inline assets.

use showcase_core::{NewProject, Project, Stats, VoteRecord};

use crate::assets::{SCRIPT, STYLESHEET};
use crate::feedback::{
    render_loading_overlay, render_success_modal, render_toast_container, Toast,
};
use crate::grid::render_grid;
use crate::leaderboard::render_leaderboard;
use crate::navigation::{Navigator, Page};
use crate::stats::{render_header_stats, render_results_stats};
use crate::upload::render_upload_form;

/// Everything around the page body.
#[derive(Debug, Clone, Copy)]
pub struct Chrome<'a> {
    pub nav: &'a Navigator,
    pub stats: &'a Stats,
    pub toasts: &'a [Toast],
    /// Show the submission confirmation modal on load.
    pub modal_open: bool,
}

/// Home page: the project grid.
pub fn render_home(projects: &[Project], voted: &VoteRecord, chrome: Chrome<'_>) -> String {
    let body = format!(
        r#"<div class="page-header"><h1>Showcase Projects</h1><p>Discover and vote for the most innovative projects.</p></div>{}"#,
        render_grid(projects, voted)
    );
    render_document(Page::Home, chrome, &body)
}

/// Upload page: the submission form, optionally refilled after a rejection.
pub fn render_upload(
    draft: Option<&NewProject>,
    invalid_field: Option<&str>,
    chrome: Chrome<'_>,
) -> String {
    let body = format!(
        r#"<div class="page-header"><h1>Submit Your Project</h1><p>Share your work with the community.</p></div>{}"#,
        render_upload_form(draft, invalid_field)
    );
    render_document(Page::Upload, chrome, &body)
}

/// Results page: stat cards and the leaderboard.
pub fn render_results(projects: &[Project], chrome: Chrome<'_>) -> String {
    let body = format!(
        r#"<div class="page-header"><h1>Leaderboard</h1><p>Projects ranked by community votes.</p></div>{}{}"#,
        render_results_stats(chrome.stats),
        render_leaderboard(projects)
    );
    render_document(Page::Results, chrome, &body)
}

fn render_nav(nav: &Navigator) -> String {
    let mut html = format!(
        r#"<nav class="nav-menu{}" id="navMenu">"#,
        if nav.menu_open() { " show" } else { "" }
    );
    for page in Page::ALL {
        let active = if page == nav.current() { " active" } else { "" };
        html.push_str(&format!(
            r#"<a class="nav-btn{active}" href="{path}" data-page="{name}"><i class="fas fa-{icon}"></i><span>{label}</span></a>"#,
            path = page.path(),
            name = page.name(),
            icon = page.icon(),
            label = page.label(),
        ));
    }
    html.push_str("</nav>");
    html
}

fn render_document(page: Page, chrome: Chrome<'_>, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · Project Showcase</title>
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
<style>{STYLESHEET}</style>
</head>
<body>
<header class="header">
<div class="logo"><i class="fas fa-rocket"></i> Project Showcase</div>
<button class="mobile-menu-btn" id="mobileMenuBtn" type="button" aria-label="Menu"><i class="fas fa-bars"></i></button>
{nav}
{stats}
</header>
<main class="page active" id="{name}Page">
{body}
</main>
{toasts}
{modal}
{overlay}
<script>{SCRIPT}</script>
</body>
</html>"#,
        title = page.label(),
        nav = render_nav(chrome.nav),
        stats = render_header_stats(chrome.stats),
        name = page.name(),
        toasts = render_toast_container(chrome.toasts),
        modal = render_success_modal(chrome.modal_open),
        overlay = render_loading_overlay(),
    )
}
