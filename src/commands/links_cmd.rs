use crate::commands::CommandResult;

const GITHUB: &str = "https://github.com/snigenigmatic";
const LINKEDIN: &str = "https://linkedin.com/in/c-kaustubh";
const EMAIL: &str = "snigenigmatic972@gmail.com";

/// Link targets handed to the link presenter, in display order.
pub fn link_targets() -> Vec<String> {
    vec![GITHUB.to_string(), LINKEDIN.to_string(), format!("mailto:{}", EMAIL)]
}

pub fn handle_links() -> CommandResult {
    let mut result = CommandResult::from_lines([
        "LINKS_COMMAND".to_string(),
        format!("GitHub: {}", GITHUB),
        format!("LinkedIn: {}", LINKEDIN),
        format!("Email: {}", EMAIL),
    ]);
    result.links = Some(link_targets());
    result
}
