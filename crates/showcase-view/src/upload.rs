//! Project submission form.

use showcase_core::project::{MAX_AUTHOR_LEN, MAX_DESCRIPTION_LEN, MAX_LINK_LEN, MAX_TITLE_LEN};
use showcase_core::NewProject;

use crate::escape::escape_html;
use crate::navigation::Page;

/// Render the upload form.
///
/// `draft` re-fills the inputs after a rejected submission; `invalid_field`
/// marks the input that failed validation.
pub fn render_upload_form(draft: Option<&NewProject>, invalid_field: Option<&str>) -> String {
    let empty = NewProject::default();
    let draft = draft.unwrap_or(&empty);
    let invalid = |field: &str| {
        if invalid_field == Some(field) {
            r#" class="invalid" aria-invalid="true""#
        } else {
            ""
        }
    };
    format!(
        r#"<form class="upload-form" id="uploadForm" method="post" action="{action}">
<div class="form-group"><label for="title">Project Title *</label><input type="text" id="title" name="title" maxlength="{title_max}" required value="{title}"{title_invalid}></div>
<div class="form-group"><label for="description">Description *</label><textarea id="description" name="description" rows="5" maxlength="{description_max}" required{description_invalid}>{description}</textarea></div>
<div class="form-group"><label for="link">Project Link</label><input type="url" id="link" name="link" maxlength="{link_max}" placeholder="https://github.com/you/project" value="{link}"{link_invalid}></div>
<div class="form-group"><label for="author">Author *</label><input type="text" id="author" name="author" maxlength="{author_max}" required value="{author}"{author_invalid}></div>
<button type="submit" class="btn primary" id="submitBtn" data-loading-label="Submitting..."><i class="fas fa-paper-plane"></i><span>Submit Project</span></button>
</form>"#,
        action = Page::Upload.path(),
        title_max = MAX_TITLE_LEN,
        title = escape_html(&draft.title),
        title_invalid = invalid("title"),
        description_max = MAX_DESCRIPTION_LEN,
        description = escape_html(&draft.description),
        description_invalid = invalid("description"),
        link_max = MAX_LINK_LEN,
        link = escape_html(draft.link.as_deref().unwrap_or_default()),
        link_invalid = invalid("link"),
        author_max = MAX_AUTHOR_LEN,
        author = escape_html(&draft.author),
        author_invalid = invalid("author"),
    )
}
