//! Text rendering of table view models for the terminal front end.

use markdown_table::{Heading, MarkdownTable};

use crate::error::ConsoleError;

/// Renders columns and rows as a markdown table, or the page's "no data"
/// placeholder when there are no rows.
pub fn render_table(
    columns: &[&str],
    rows: &[Vec<String>],
    placeholder: &str,
) -> Result<String, ConsoleError> {
    if rows.is_empty() {
        return Ok(placeholder.to_string());
    }

    let headings = columns
        .iter()
        .map(|c| Heading::new(c.to_string(), None))
        .collect::<Vec<_>>();

    let mut table = MarkdownTable::new(rows.to_vec());
    table.with_headings(headings);
    table
        .as_markdown()
        .map_err(|e| ConsoleError::Render(format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rows_render_placeholder() {
        let rendered = render_table(&["Name", "Role"], &[], "No stakeholders found.").unwrap();
        assert_eq!(rendered, "No stakeholders found.");
    }

    #[test]
    fn test_rows_render_as_markdown() {
        let rows = vec![vec!["A. Menon".to_string(), "Developer".to_string()]];
        let rendered = render_table(&["Name", "Role"], &rows, "No stakeholders found.").unwrap();
        assert!(rendered.contains("A. Menon"));
        assert!(rendered.contains("Developer"));
        assert!(rendered.contains("Name"));
    }
}
