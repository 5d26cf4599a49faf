use serde::Serialize;
use serde_json::Value;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::ui::UiPrefs;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    ui: UiPrefs,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, table_options(ui)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rendered = render(value, flags.format, flags.ui)?;
    println!("{rendered}");
    Ok(())
}

/// Print a human hint to stderr. Suppressed by `--quiet` and for machine formats.
pub fn hint(flags: &GlobalFlags, message: impl AsRef<str>) {
    if !flags.quiet && flags.format == OutputFormat::Table {
        eprintln!("{}", message.as_ref());
    }
}

const fn table_options(ui: UiPrefs) -> table::TableOptions {
    table::TableOptions {
        max_width: ui.term_width,
        color: ui.table_color,
    }
}

fn render_table<T: Serialize>(value: &T, options: table::TableOptions) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    // Columns in first-seen key order.
    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(" | "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;
    use serde_json::json;

    use super::{render, table::render_entity_table, value_to_cell};
    use crate::cli::OutputFormat;
    use crate::ui::UiPrefs;

    #[derive(Serialize)]
    struct Row {
        id: &'static str,
        questions: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Row {
            id: "capitals",
            questions: 3,
        };
        let out = render(&value, OutputFormat::Json, UiPrefs::default()).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "capitals");
        assert_eq!(parsed["questions"], 3);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Row {
            id: "capitals",
            questions: 3,
        };
        let out = render(&value, OutputFormat::Raw, UiPrefs::default()).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let value = Row {
            id: "capitals",
            questions: 3,
        };
        let out = render(&value, OutputFormat::Table, UiPrefs::default()).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("capitals"));
    }

    #[test]
    fn table_render_for_rows_has_one_line_per_item() {
        let rows = vec![
            Row {
                id: "capitals",
                questions: 3,
            },
            Row {
                id: "rivers",
                questions: 12,
            },
        ];
        let out = render(&rows, OutputFormat::Table, UiPrefs::default()).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("id") && lines[0].contains("questions"));
        assert!(lines[3].contains("rivers"));
    }

    #[test]
    fn empty_rows_render_placeholder() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(render(&rows, OutputFormat::Table, UiPrefs::default()).unwrap(), "(no rows)");
    }

    #[test]
    fn table_render_uses_given_ui_prefs() {
        let rows = vec![json!({"grade": "perfect", "title": "x".repeat(80)})];
        let plain = render(&rows, OutputFormat::Table, UiPrefs::default()).unwrap();
        assert!(!plain.contains('\u{1b}'));

        let styled = UiPrefs {
            table_color: true,
            term_width: Some(40),
        };
        let out = render(&rows, OutputFormat::Table, styled).unwrap();
        assert!(out.contains('\u{1b}'));
        assert!(out.contains('…'));
    }

    #[test]
    fn string_lists_become_pipe_joined_cells() {
        assert_eq!(value_to_cell(&json!(["A) Paris", "B) Rome"])), "A) Paris | B) Rome");
        assert_eq!(value_to_cell(&json!(null)), "-");
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["id", "grade", "title"];
        let rows = vec![
            vec!["q-1".to_string(), "good".to_string(), "short".to_string()],
            vec![
                "q-200".to_string(),
                "keep_studying".to_string(),
                "a much longer title".to_string(),
            ],
        ];

        let table = render_entity_table(
            &headers,
            &rows,
            super::table::TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("grade"));
        assert!(lines[1].chars().all(|c| c == '-'));
    }
}
