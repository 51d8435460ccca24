use crate::report::Report;

/// Pretty-printed JSON of the whole report.
pub fn render_json_report(report: &Report) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Dispatcher;
    use crate::entity::{Entity, UnknownEntity};
    use crate::registry::Registry;
    use crate::report::build_report;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    #[test]
    fn json_report_carries_entries_and_totals() {
        let mut entities: Vec<Entity> = Registry::builtin().iter().cloned().collect();
        entities.push(UnknownEntity::new("Printer").into());
        let report = build_report(&Registry::new(entities), &Dispatcher::default(), None);

        let value: Value = serde_json::from_str(&render_json_report(&report).unwrap()).unwrap();

        assert_eq!(
            value["entries"][4],
            json!({
                "index": 4,
                "kind": "Employee",
                "tag": "Employee",
                "label": "Bilel",
                "description": "Bilel is an employee works in the Medical department."
            })
        );
        assert_eq!(
            value["entries"][7],
            json!({
                "index": 7,
                "kind": "Unknown",
                "tag": "Printer",
                "label": "Printer",
                "description": "Not listed!!"
            })
        );
        assert_eq!(
            value["totals"],
            json!({
                "entities": 8,
                "reported": 8,
                "devices": 3,
                "staff": 4,
                "unknown": 1,
                "by_kind": {
                    "Keyboard": 1,
                    "Storage": 1,
                    "Audio": 1,
                    "Employee": 3,
                    "Manager": 1,
                    "Unknown": 1
                }
            })
        );
    }
}
