//! Breadcrumb derivation from route paths
//!
//! Pages pass their current route path; each path segment becomes a crumb
//! with a humanized label and the cumulative path up to it. Purely numeric
//! segments read as semesters, matching this portal's route shapes.

/// One breadcrumb segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub path: String,
}

/// Split a route path into ordered crumbs, always rooted at Home.
pub fn breadcrumbs(path: &str) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb {
        label: "Home".to_string(),
        path: "/".to_string(),
    }];

    let mut cumulative = String::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        cumulative.push('/');
        cumulative.push_str(segment);
        crumbs.push(Crumb {
            label: humanize(segment),
            path: cumulative.clone(),
        });
    }

    crumbs
}

/// Like [`breadcrumbs`], but with an explicit label for the terminal crumb.
///
/// Detail routes end in an opaque record id; humanizing it produces noise,
/// so those screens supply the record's real title instead.
pub fn breadcrumbs_titled(path: &str, terminal_label: &str) -> Vec<Crumb> {
    let mut crumbs = breadcrumbs(path);
    if let Some(last) = crumbs.last_mut() {
        if last.path != "/" {
            last.label = terminal_label.to_string();
        }
    }
    crumbs
}

fn humanize(segment: &str) -> String {
    if let Ok(number) = segment.parse::<u8>() {
        return format!("Semester {number}");
    }

    segment
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(path: &str) -> Vec<String> {
        breadcrumbs(path).into_iter().map(|c| c.label).collect()
    }

    #[test]
    fn test_root_is_home_only() {
        let crumbs = breadcrumbs("/");
        assert_eq!(crumbs.len(), 1);
        assert_eq!(crumbs[0].label, "Home");
        assert_eq!(crumbs[0].path, "/");
    }

    #[test]
    fn test_segments_humanize_and_accumulate() {
        let crumbs = breadcrumbs("/materials/question-papers");
        assert_eq!(
            crumbs
                .iter()
                .map(|c| (c.label.as_str(), c.path.as_str()))
                .collect::<Vec<_>>(),
            vec![
                ("Home", "/"),
                ("Materials", "/materials"),
                ("Question Papers", "/materials/question-papers"),
            ]
        );
    }

    #[test]
    fn test_numeric_segment_reads_as_semester() {
        assert_eq!(
            labels("/syllabus/computer/3"),
            vec!["Home", "Syllabus", "Computer", "Semester 3"]
        );
    }

    #[test]
    fn test_terminal_label_replaces_opaque_id() {
        let crumbs = breadcrumbs_titled(
            "/resource/3f2a9c40-6d1b-4e8f-9a2e-1c5d7b8e0f21",
            "Operating Systems Unit 1",
        );
        assert_eq!(
            crumbs.iter().map(|c| c.label.as_str()).collect::<Vec<_>>(),
            vec!["Home", "Resource", "Operating Systems Unit 1"]
        );
        // Paths are untouched; only the terminal label changes.
        assert_eq!(
            crumbs[2].path,
            "/resource/3f2a9c40-6d1b-4e8f-9a2e-1c5d7b8e0f21"
        );
    }

    #[test]
    fn test_terminal_label_never_renames_home() {
        let crumbs = breadcrumbs_titled("/", "Anything");
        assert_eq!(crumbs.len(), 1);
        assert_eq!(crumbs[0].label, "Home");
    }

    #[test]
    fn test_underscore_segments_humanize() {
        assert_eq!(
            labels("/syllabus/information_technology"),
            vec!["Home", "Syllabus", "Information Technology"]
        );
    }
}
