//! Terminal output for the devdeck CLI.

use crate::project::ProjectRecord;

// ANSI color codes
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const RED: &str = "\x1b[31m";
pub const GRAY: &str = "\x1b[90m";

pub fn print_error(msg: &str) {
    eprintln!("{RED}{BOLD}Error:{RESET} {}", msg);
}

pub fn print_warning(msg: &str) {
    eprintln!("{YELLOW}Warning:{RESET} {}", msg);
}

pub fn print_info(msg: &str) {
    println!("{CYAN}Info:{RESET} {}", msg);
}

pub fn print_success(msg: &str) {
    println!("{GREEN}✓{RESET} {}", msg);
}

/// One line of `devdeck list`: position, short id, name, path and repository.
pub fn format_project_line(position: usize, project: &ProjectRecord) -> String {
    let repo = if project.has_repo() {
        format!("  {CYAN}{}{RESET}", project.repo)
    } else {
        String::new()
    };
    format!(
        "{BOLD}{position:>3}.{RESET} {GRAY}{}{RESET}  {BOLD}{}{RESET}  {DIM}{}{RESET}{repo}",
        project.id.short(),
        project.name,
        project.path,
    )
}

/// Render the project list, one line per project, or a hint when empty.
pub fn format_project_list(projects: &[ProjectRecord]) -> String {
    if projects.is_empty() {
        return format!("{GRAY}No projects yet. Add one with 'devdeck add'.{RESET}");
    }
    projects
        .iter()
        .enumerate()
        .map(|(i, p)| format_project_line(i + 1, p))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_project_line_includes_fields() {
        let project = ProjectRecord::new("Site", "~/dev/site", "https://example.com/site");
        let line = format_project_line(2, &project);
        assert!(line.contains("  2."));
        assert!(line.contains(&project.id.short()));
        assert!(line.contains("Site"));
        assert!(line.contains("~/dev/site"));
        assert!(line.contains("https://example.com/site"));
    }

    #[test]
    fn test_format_project_line_omits_empty_repo() {
        let project = ProjectRecord::new("Site", "/srv/site", "  ");
        assert!(!format_project_line(1, &project).contains(CYAN));
    }

    #[test]
    fn test_format_project_list_numbers_from_one() {
        let projects = vec![
            ProjectRecord::new("A", "/a", ""),
            ProjectRecord::new("B", "/b", ""),
        ];
        let out = format_project_list(&projects);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("1.") && lines[0].contains('A'));
        assert!(lines[1].contains("2.") && lines[1].contains('B'));
    }

    #[test]
    fn test_format_empty_list_shows_hint() {
        assert!(format_project_list(&[]).contains("devdeck add"));
    }
}
