use markdown_gdocs_engine::requests::types::{IndexRange, TableRange};
use markdown_gdocs_engine::{
    DocumentPlan, FormatKind, FormatRange, ListItemRange, Request, RequestGenerator, StyleSheet,
    convert, generate_requests, plan,
};
use pretty_assertions::assert_eq;

#[test]
fn title_heading() {
    let result = convert("# Title\n").unwrap();
    assert_eq!(result.plain_text, "Title\n");
    assert_eq!(
        result.format_ranges,
        vec![FormatRange::heading(1, 6, 1, "Title")]
    );
}

#[test]
fn bold_run_in_paragraph() {
    let result = convert("**bold** text").unwrap();
    // the paragraph contributes its trailing newline
    assert_eq!(result.plain_text, "bold text\n");
    assert_eq!(result.format_ranges.len(), 1);
    let range = &result.format_ranges[0];
    assert_eq!((range.kind, range.start, range.end), (FormatKind::Bold, 1, 5));
}

#[test]
fn flat_bulleted_list_becomes_one_bullet_request() {
    let result = convert("- a\n- b\n").unwrap();
    assert_eq!(result.plain_text, "a\nb\n");
    assert!(result.list_item_ranges.iter().all(|item| item.nesting_level == 0));
    assert_eq!(result.list_item_ranges.len(), 2);

    let requests = generate_requests(&result).unwrap();
    assert_eq!(requests, vec![Request::create_bullets(1, 4, false)]);
}

#[test]
fn nested_list_uses_leading_tab() {
    let result = convert("- a\n  - b\n").unwrap();
    assert_eq!(result.plain_text, "a\n\tb\n");
    insta::assert_debug_snapshot!(result.list_item_ranges, @r"
    [
        ListItemRange {
            start: 1,
            end: 3,
            ordered: false,
            nesting_level: 0,
        },
        ListItemRange {
            start: 3,
            end: 6,
            ordered: false,
            nesting_level: 1,
        },
    ]
    ");

    // one group over [1, 6), the trailing newline dropped
    let requests = generate_requests(&result).unwrap();
    assert_eq!(requests, vec![Request::create_bullets(1, 5, false)]);
}

#[test]
fn table_with_header_row() {
    let result = convert("| A | B |\n|---|---|\n| 1 | 2 |\n").unwrap();
    assert_eq!(result.plain_text, "\n");
    assert_eq!(result.tables.len(), 1);
    let table = &result.tables[0];
    assert_eq!((table.num_rows(), table.num_cols()), (2, 2));
    assert_eq!(table.insert_index, 1);

    let requests = generate_requests(&result).unwrap();
    let kinds: Vec<_> = requests.iter().map(Request::kind).collect();
    assert_eq!(
        kinds,
        vec![
            "insertTable",
            "insertText",
            "insertText",
            "insertText",
            "insertText",
            "updateTableCellStyle",
            "updateTableCellStyle",
            "updateTextStyle",
            "updateTextStyle",
        ]
    );

    assert_eq!(requests[0], Request::insert_table(1, 2, 2));
    assert_eq!(requests[1], Request::insert_text(12, "2"));
    assert_eq!(requests[2], Request::insert_text(10, "1"));
    assert_eq!(requests[3], Request::insert_text(7, "B"));
    assert_eq!(requests[4], Request::insert_text(5, "A"));

    match &requests[6] {
        Request::UpdateTableCellStyle {
            table_range: TableRange {
                table_cell_location,
                row_span,
                column_span,
            },
            fields,
            ..
        } => {
            assert_eq!(table_cell_location.table_start_location.index, 2);
            assert_eq!(table_cell_location.row_index, 0);
            assert_eq!((*row_span, *column_span), (1, 2));
            assert_eq!(fields, "backgroundColor");
        }
        other => panic!("expected header background, got {other:?}"),
    }

    let header_ranges: Vec<_> = requests[7..]
        .iter()
        .filter_map(|r| match r {
            Request::UpdateTextStyle { range, .. } => Some(*range),
            _ => None,
        })
        .collect();
    assert_eq!(header_ranges, vec![IndexRange::new(5, 6), IndexRange::new(8, 9)]);
}

#[test]
fn front_matter_is_stripped_before_conversion() {
    let markdown = "---\ntitle: Notes\ntags: [a]\n---\n# Notes\n";
    let result = convert(markdown).unwrap();
    assert_eq!(result.plain_text, "Notes\n");
}

#[test]
fn mixed_document_end_to_end() {
    let markdown = "\
# Plan

Some *emphasis* and `code`.

1. first
2. second
   - detail

> quoted

```
let x = 1;
```

---

See [docs](https://example.com).
";
    let result = convert(markdown).unwrap();
    assert_eq!(
        result.plain_text,
        "Plan\nSome emphasis and code.\nfirst\nsecond\n\tdetail\nquoted\nlet x = 1;\n\n---\nSee docs.\n"
    );

    let kinds: Vec<_> = result.format_ranges.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FormatKind::Heading,
            FormatKind::Italic,
            FormatKind::CodeInline,
            FormatKind::Blockquote,
            FormatKind::CodeBlock,
            FormatKind::Link,
        ]
    );
    assert_eq!(
        result.list_item_ranges,
        vec![
            ListItemRange {
                start: 30,
                end: 36,
                ordered: true,
                nesting_level: 0,
            },
            ListItemRange {
                start: 36,
                end: 43,
                ordered: true,
                nesting_level: 0,
            },
            ListItemRange {
                start: 43,
                end: 51,
                ordered: false,
                nesting_level: 1,
            },
        ]
    );

    let requests = generate_requests(&result).unwrap();
    assert_eq!(requests[0], Request::create_bullets(30, 42, true));
    assert_eq!(requests[1], Request::create_bullets(43, 50, false));

    // the link sits after the one tab, so it moves left by one
    let link = result.format_ranges.last().unwrap();
    let last = requests.last().unwrap();
    assert_eq!(
        last,
        &Request::text_style(
            link.start - 1,
            link.end - 1,
            StyleSheet::default().link("https://example.com")
        )
    );
}

#[test]
fn plan_uses_configured_styles() {
    let styles = StyleSheet {
        inline_code_font_size: 9.0,
        ..Default::default()
    };
    let plan = plan("`x`\n", &styles).unwrap();
    assert_eq!(
        plan.requests,
        vec![Request::text_style(1, 2, styles.inline_code())]
    );
}

#[test]
fn batch_serializes_with_text_first() {
    let result = convert("*hi*\n").unwrap();
    let plan = DocumentPlan::new(&result, &RequestGenerator::default()).unwrap();
    let value = serde_json::to_value(plan.batch()).unwrap();
    assert_eq!(
        value["requests"][0],
        serde_json::json!({"insertText": {"location": {"index": 1}, "text": "hi\n"}})
    );
    assert_eq!(value["requests"][1]["updateTextStyle"]["fields"], "italic");
}
