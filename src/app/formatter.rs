use crate::app::command::ExportedCommand;
use crate::app::models::ListState;

pub struct SummaryRenderer;

impl SummaryRenderer {
    /// Renders both lists with their counts, one entry per line.
    pub fn render_lists(state: &ListState) -> String {
        let mut output = String::new();

        output.push_str(&format!("Include ({}):\n", state.include.len()));
        for entry in &state.include {
            output.push_str(&format!("  {}\n", entry));
        }

        output.push_str(&format!("Ignore ({}):\n", state.ignore.len()));
        for entry in &state.ignore {
            output.push_str(&format!("  {}\n", entry));
        }

        output.trim_end().to_string()
    }

    /// Renders the framed export block: the command line plus the counts.
    pub fn render_export(exported: &ExportedCommand, state: &ListState) -> String {
        let mut output = String::from("=== Repomix Export ===\n");
        output.push_str(&exported.command_line);
        output.push_str("\n\n");
        output.push_str(&format!(
            "Include: {}, Ignore: {}\n",
            state.include.len(),
            state.ignore.len()
        ));
        output.push_str("======================");
        output
    }
}
