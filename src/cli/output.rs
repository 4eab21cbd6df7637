//! Output formatting utilities

use crate::application::{CheckReport, ItemSummary};

/// Format the content inventory for display
pub fn format_item_list(items: &[ItemSummary]) -> String {
    if items.is_empty() {
        return "No content found".to_string();
    }

    let mut output = String::new();
    for item in items {
        let date = match item.date {
            Some(date) => date.format("%d-%m-%Y").to_string(),
            // No date - use spacing for alignment
            None => "          ".to_string(),
        };
        let marker = if item.live { "live " } else { "draft" };

        output.push_str(&format!("{}  {}  {}", date, marker, item.title));
        if !item.tags.is_empty() {
            output.push_str(&format!("  [{}]", item.tags.join(", ")));
        }
        output.push('\n');
    }
    output
}

/// Format a list of tag keys for display.
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("{}\n", tag));
    }

    output
}

/// Format a registry audit report for display
pub fn format_check_report(report: &CheckReport) -> String {
    if report.is_clean() {
        return "Registry and content are consistent".to_string();
    }

    let mut output = String::new();
    if !report.unregistered.is_empty() {
        output.push_str("Used but not registered (dropped from build output):\n");
        for key in &report.unregistered {
            output.push_str(&format!("  {}\n", key));
        }
    }
    if !report.unused.is_empty() {
        output.push_str("Registered but unused by live content:\n");
        for key in &report.unused {
            output.push_str(&format!("  {}\n", key));
        }
    }
    output
}
