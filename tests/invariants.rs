use techradar::assemble::assemble;
use techradar::sanitize::{keyed_row, rows_from_positional, sanitize_row, RawRow};
use techradar::validate::{validate_columns, validate_content};
use techradar::{EntryRecord, RadarError};

fn raw_row(name: &str, ring: &str, quadrant: &str, is_new: &str, description: &str) -> RawRow {
    [
        ("name", name),
        ("ring", ring),
        ("quadrant", quadrant),
        ("isNew", is_new),
        ("description", description),
    ]
    .iter()
    .map(|(column, value)| (column.to_string(), value.to_string()))
    .collect()
}

fn records_from(rows: &[RawRow]) -> Vec<EntryRecord> {
    rows.iter().map(sanitize_row).collect()
}

#[test]
fn ring_order_equals_first_seen_index_for_up_to_four_rings() {
    let rows = vec![
        raw_row("a", "Trial", "tools", "false", "d"),
        raw_row("b", "Adopt", "tools", "false", "d"),
        raw_row("c", "Trial", "platforms", "false", "d"),
        raw_row("d", "Hold", "tools", "false", "d"),
        raw_row("e", "Assess", "languages", "false", "d"),
    ];
    let radar = assemble(&records_from(&rows), "Radar", Vec::new()).unwrap();
    let ordered: Vec<(&str, usize)> = radar
        .rings
        .iter()
        .map(|ring| (ring.name.as_str(), ring.order))
        .collect();
    assert_eq!(
        ordered,
        vec![("Trial", 0), ("Adopt", 1), ("Hold", 2), ("Assess", 3)]
    );
}

#[test]
fn five_distinct_rings_yield_no_radar() {
    let rows: Vec<RawRow> = ["One", "Two", "Three", "Four", "Five"]
        .iter()
        .enumerate()
        .map(|(index, ring)| raw_row(&format!("t{index}"), ring, "tools", "false", "d"))
        .collect();
    let err = assemble(&records_from(&rows), "Radar", Vec::new()).unwrap_err();
    assert!(matches!(err, RadarError::MalformedData { .. }));
}

#[test]
fn missing_columns_fail_before_any_content_is_inspected() {
    // Content is full of blanks, but the header check must fire first.
    let columns = vec!["name".to_string(), "quadrant".to_string()];
    let err = validate_columns(&columns).unwrap_err();
    match err {
        RadarError::MalformedData { message } => {
            assert!(message.contains("ring"));
            assert!(message.contains("isNew"));
            assert!(message.contains("description"));
        }
        other => panic!("expected MalformedData, got {other:?}"),
    }
}

#[test]
fn blank_cells_fail_naming_row_and_column_before_any_entry_exists() {
    let rows = vec![
        raw_row("Tech A", "Adopt", "tools", "true", "d"),
        raw_row("Tech B", " ", "tools", "false", "d"),
        raw_row("Tech C", "Trial", "tools", "false", "d"),
    ];
    let err = validate_content(&rows).unwrap_err();
    assert!(matches!(
        err,
        RadarError::MalformedData { message }
            if message.contains("'ring'") && message.contains("row 2")
    ));
}

#[test]
fn keyed_and_positional_shapes_produce_identical_records() {
    let header: Vec<String> = ["name", "ring", "quadrant", "isNew", "description"]
        .iter()
        .map(|column| column.to_string())
        .collect();
    let values: Vec<Vec<String>> = vec![
        vec!["Tech A", " Adopt ", "tools", "TRUE", "d"],
        vec!["Tech B", "Trial", "platforms", "false", "d2"],
    ]
    .into_iter()
    .map(|row| row.into_iter().map(str::to_string).collect())
    .collect();

    let positional: Vec<EntryRecord> = rows_from_positional(&header, &values)
        .iter()
        .map(sanitize_row)
        .collect();
    let keyed: Vec<EntryRecord> = vec![
        sanitize_row(&raw_row("Tech A", " Adopt ", "tools", "TRUE", "d")),
        sanitize_row(&raw_row("Tech B", "Trial", "platforms", "false", "d2")),
    ];
    assert_eq!(positional, keyed);

    let single = keyed_row(&header, &values[0]);
    assert_eq!(sanitize_row(&single), keyed[0]);
}

#[test]
fn assembling_n_valid_rows_yields_exactly_n_entries_in_input_order() {
    let quadrants = ["tools", "platforms", "techniques", "languages"];
    let rows: Vec<RawRow> = (0..12)
        .map(|index| {
            raw_row(
                &format!("tech {index}"),
                "Adopt",
                quadrants[index % quadrants.len()],
                "false",
                "d",
            )
        })
        .collect();
    let radar = assemble(&records_from(&rows), "Radar", Vec::new()).unwrap();
    assert_eq!(radar.entry_count(), rows.len());
    for quadrant in &radar.quadrants {
        let indices: Vec<usize> = quadrant
            .entries
            .iter()
            .map(|entry| {
                entry
                    .name
                    .strip_prefix("tech ")
                    .unwrap()
                    .parse::<usize>()
                    .unwrap()
            })
            .collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted, "entries out of input order in {}", quadrant.name);
    }
}

#[test]
fn tools_scenario_matches_expected_shape() {
    let rows = vec![
        raw_row("Tech A", "Adopt", "Tools", "TRUE", "d"),
        raw_row("Tech B", "Trial", "Tools", "false", "d2"),
    ];
    let records = records_from(&rows);
    let radar = assemble(&records, "Radar", Vec::new()).unwrap();

    assert_eq!(radar.quadrants.len(), 1);
    let tools = radar.quadrant("Tools").unwrap();
    assert_eq!(tools.entries.len(), 2);
    assert_eq!(tools.entries[0].name, "Tech A");
    assert!(tools.entries[0].is_new);
    assert_eq!(tools.entries[1].name, "Tech B");
    assert!(!tools.entries[1].is_new);
    assert_eq!(radar.ring(tools.entries[0].ring).order, 0);
    assert_eq!(radar.ring(tools.entries[0].ring).name, "Adopt");
    assert_eq!(radar.ring(tools.entries[1].ring).order, 1);
    assert_eq!(radar.ring(tools.entries[1].ring).name, "Trial");
}
