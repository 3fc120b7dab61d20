//! Demo projects loaded when the showcase starts seeded.

use chrono::{DateTime, Utc};

use crate::project::{NewProject, Project, ProjectId};

/// (title, description, link, author, votes)
type Entry = (&'static str, &'static str, &'static str, &'static str, u64);

const DEMO: [Entry; 4] = [
    (
        "AI-Powered Code Assistant",
        "An intelligent coding companion that helps developers write better code with real-time suggestions and automated refactoring.",
        "https://github.com/demo/ai-assistant",
        "Sarah Chen",
        87,
    ),
    (
        "EcoTrack - Carbon Footprint Monitor",
        "Mobile app that tracks daily activities and calculates carbon footprint with personalized recommendations for sustainable living.",
        "https://github.com/demo/ecotrack",
        "Marcus Johnson",
        72,
    ),
    (
        "VirtualMeet - 3D Video Conferencing",
        "Next-generation video conferencing platform with 3D avatars and immersive virtual meeting rooms.",
        "https://github.com/demo/virtualmeet",
        "Elena Rodriguez",
        95,
    ),
    (
        "HealthSync - Medical Data Integration",
        "Secure platform that consolidates medical records from multiple healthcare providers using blockchain technology.",
        "https://github.com/demo/healthsync",
        "Dr. James Wilson",
        63,
    ),
];

/// The demo projects with ids 1..=4, all stamped `submitted_at`.
pub fn demo_projects(submitted_at: DateTime<Utc>) -> Vec<Project> {
    build(&DEMO, submitted_at)
}

/// Number entries from 1, skipping (and logging) any that fail validation.
fn build(entries: &[Entry], submitted_at: DateTime<Utc>) -> Vec<Project> {
    entries
        .iter()
        .zip(1u64..)
        .filter_map(|(&(title, description, link, author, votes), id)| {
            match NewProject::new(title, description, author, Some(link)).validate() {
                Ok(valid) => Some(Project::from_submission(
                    ProjectId::new(id),
                    valid,
                    votes,
                    submitted_at,
                )),
                Err(err) => {
                    tracing::warn!(project_id = id, error = %err, "skipping invalid demo project");
                    None
                }
            }
        })
        .collect()
}
