use std::{fs, io, path::Path};

use regex::{Captures, Regex};
use tracing::{debug, info};

use crate::libs::{errors::UpdateError, status::TaskStatus};

pub const DEFAULT_TODOS_FILE: &str = "TODOS.md";

#[derive(Debug, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub status: TaskStatus,
    pub lines_updated: usize,
}

/// Matches `- [<any char>] <description>`, ignoring case. The description is
/// escaped so it is matched literally.
pub fn task_pattern(description: &str) -> Result<Regex, UpdateError> {
    let pattern = format!(r"(?i)(- \[).(\] {})", regex::escape(description));
    Ok(Regex::new(&pattern)?)
}

/// Rewrites the marker of every task line matching `description` and returns
/// the new content with the number of distinct lines touched. Returns `None`
/// when nothing matched.
pub fn apply_status(
    content: &str,
    description: &str,
    status: TaskStatus,
) -> Result<Option<(String, usize)>, UpdateError> {
    let re = task_pattern(description)?;
    let mut lines: Vec<usize> = re
        .find_iter(content)
        .map(|m| content[..m.start()].matches('\n').count())
        .collect();
    if lines.is_empty() {
        return Ok(None);
    }
    lines.dedup();
    let marker = status.marker();
    let updated = re.replace_all(content, |caps: &Captures| {
        format!("{}{}{}", &caps[1], marker, &caps[2])
    });
    Ok(Some((updated.into_owned(), lines.len())))
}

pub fn update(path: &Path, description: &str, status: &str) -> Result<UpdateOutcome, UpdateError> {
    let status: TaskStatus = status.parse()?;

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => UpdateError::FileNotFound(path.to_path_buf()),
        _ => UpdateError::Io(e),
    })?;
    debug!("read {} bytes from {}", content.len(), path.display());

    let (updated, lines_updated) = apply_status(&content, description, status)?
        .ok_or_else(|| UpdateError::TaskNotFound(description.to_string()))?;

    fs::write(path, updated)?;
    info!(
        "marked {} line(s) matching {:?} as {}",
        lines_updated, description, status
    );
    Ok(UpdateOutcome {
        status,
        lines_updated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "# TODOS\n\n- [ ] Buy milk\n- [-] Write report\n- [x] Call mom\n";

    #[test]
    fn completes_a_pending_task() {
        let (updated, n) = apply_status(DOC, "Buy milk", TaskStatus::Completed)
            .unwrap()
            .unwrap();
        assert_eq!(n, 1);
        assert_eq!(
            updated,
            "# TODOS\n\n- [x] Buy milk\n- [-] Write report\n- [x] Call mom\n"
        );
    }

    #[test]
    fn reopens_a_completed_task() {
        let (updated, _) = apply_status(DOC, "Call mom", TaskStatus::Pending)
            .unwrap()
            .unwrap();
        assert!(updated.contains("- [ ] Call mom\n"));
        assert!(updated.contains("- [ ] Buy milk\n"));
    }

    #[test]
    fn matching_ignores_case_and_keeps_original_text() {
        let (updated, _) = apply_status("- [ ] buy milk\n", "BUY MILK", TaskStatus::InProgress)
            .unwrap()
            .unwrap();
        assert_eq!(updated, "- [-] buy milk\n");
    }

    #[test]
    fn description_is_literal() {
        let doc = "- [ ] fix a.b (urgent)\n- [ ] fix axb (urgent)\n";
        let (updated, n) = apply_status(doc, "fix a.b (urgent)", TaskStatus::Completed)
            .unwrap()
            .unwrap();
        assert_eq!(n, 1);
        assert_eq!(updated, "- [x] fix a.b (urgent)\n- [ ] fix axb (urgent)\n");
    }

    #[test]
    fn dollar_signs_in_description_are_not_expanded() {
        let (updated, _) = apply_status("- [ ] pay $1 fee\n", "pay $1 fee", TaskStatus::Completed)
            .unwrap()
            .unwrap();
        assert_eq!(updated, "- [x] pay $1 fee\n");
    }

    #[test]
    fn counts_lines_not_matches() {
        let (updated, n) = apply_status("- [ ] a - [ ] a\n- [ ] b\n", "a", TaskStatus::Completed)
            .unwrap()
            .unwrap();
        assert_eq!(updated, "- [x] a - [x] a\n- [ ] b\n");
        assert_eq!(n, 1);

        let (_, n) = apply_status("- [ ] a\n- [-] A\n", "a", TaskStatus::Completed)
            .unwrap()
            .unwrap();
        assert_eq!(n, 2);
    }

    #[test]
    fn unknown_task_is_none() {
        assert!(apply_status(DOC, "Walk the dog", TaskStatus::Completed)
            .unwrap()
            .is_none());
    }

    #[test]
    fn marker_must_be_a_single_char() {
        assert!(apply_status("- [] Buy milk\n", "Buy milk", TaskStatus::Completed)
            .unwrap()
            .is_none());
    }
}
