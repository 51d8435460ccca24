use crate::report::Report;

/// One line per entry; with `capabilities`, each capability output follows
/// its entry on its own indented line.
pub fn render_text_report(report: &Report, capabilities: bool) -> String {
    let mut out = String::new();
    for entry in &report.entries {
        out.push_str(&entry.description);
        out.push('\n');

        if capabilities {
            for cap in &entry.capabilities {
                out.push_str("    ");
                out.push_str(cap);
                out.push('\n');
            }
        }
    }
    out
}
