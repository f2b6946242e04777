use tabledom::{Element, find_element, first_by_tag, inner_html, nth_element_child};
use tablesort::{Direction, SortSummary, Sorter, sort_id};

/// Single-column table whose rows have explicit IDs and text cells.
fn text_table(cells: &[(&str, &str)]) -> Element {
    let body = Element::tbody().children(
        cells
            .iter()
            .map(|(id, text)| Element::tr().id(*id).child(Element::td(*text))),
    );
    Element::table()
        .id("t")
        .child(Element::thead().child(Element::tr().child(Element::th("Name"))))
        .child(body)
}

/// Single-column table whose cells carry numeric overrides.
fn numeric_table(cells: &[(&str, &str, &str)]) -> Element {
    let body = Element::tbody().children(cells.iter().map(|(id, num, text)| {
        Element::tr()
            .id(*id)
            .child(Element::td(*text).data("num", *num))
    }));
    Element::table().id("t").child(body)
}

fn row_ids(table: &Element) -> Vec<String> {
    first_by_tag(table, "tbody")
        .map(|body| {
            body.element_children()
                .filter(|c| c.is("tr"))
                .map(|c| c.id.clone())
                .collect()
        })
        .unwrap_or_default()
}

/// Identifier stamped on the row with the given element ID.
fn stamped(table: &Element, row: &str) -> Option<u64> {
    find_element(table, row).and_then(sort_id)
}

fn first_cells(table: &Element) -> Vec<String> {
    first_by_tag(table, "tbody")
        .map(|body| {
            body.element_children()
                .filter_map(|row| nth_element_child(row, 0))
                .map(inner_html)
                .collect()
        })
        .unwrap_or_default()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_text_ascending_and_descending() {
    let mut table = text_table(&[("b", "Banana"), ("a", "Apple"), ("c", "Cherry")]);
    let mut sorter = Sorter::default();

    sorter.sort(&mut table, 0, Direction::Ascending);
    assert_eq!(first_cells(&table), vec!["Apple", "Banana", "Cherry"]);

    sorter.sort(&mut table, 0, Direction::Descending);
    assert_eq!(first_cells(&table), vec!["Cherry", "Banana", "Apple"]);
}

#[test]
fn test_numeric_overrides() {
    let mut table = numeric_table(&[("r3", "3", "c"), ("r1", "1", "a"), ("r2", "2", "b")]);
    let mut sorter = Sorter::default();

    sorter.sort(&mut table, 0, Direction::Ascending);
    assert_eq!(row_ids(&table), vec!["r1", "r2", "r3"]);

    sorter.sort(&mut table, 0, Direction::Descending);
    assert_eq!(row_ids(&table), vec!["r3", "r2", "r1"]);
}

#[test]
fn test_empty_body_is_a_no_op() {
    let mut table = Element::table().id("t").child(Element::tbody().id("body"));
    let before = table.clone();

    let summary = Sorter::default().sort(&mut table, 0, Direction::Ascending);

    assert_eq!(summary, SortSummary::default());
    assert_eq!(table, before);
}

#[test]
fn test_missing_body_is_a_no_op() {
    let mut table = Element::table()
        .id("t")
        .child(Element::thead().child(Element::tr().child(Element::th("x"))));
    let before = table.clone();

    let summary = Sorter::default().sort(&mut table, 3, Direction::Descending);

    assert_eq!(summary.rows, 0);
    assert_eq!(table, before);
}

#[test]
fn test_equal_overrides_tie_break_on_later_row() {
    let mut table = numeric_table(&[("x", "5", "X"), ("y", "5", "Y")]);
    let mut sorter = Sorter::default();

    sorter.sort(&mut table, 0, Direction::Ascending);
    assert_eq!(row_ids(&table), vec!["y", "x"]);
    assert_eq!(stamped(&table, "x"), Some(0));
    assert_eq!(stamped(&table, "y"), Some(1));

    sorter.sort(&mut table, 0, Direction::Descending);
    assert_eq!(row_ids(&table), vec!["y", "x"]);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_sort_is_a_permutation() {
    let mut table = text_table(&[
        ("r0", "pear"),
        ("r1", "fig"),
        ("r2", "fig"),
        ("r3", "apple"),
        ("r4", "kiwi"),
    ]);
    let mut original = row_ids(&table);
    original.sort();

    let mut sorter = Sorter::default();
    for direction in [Direction::Ascending, Direction::Descending] {
        sorter.sort(&mut table, 0, direction);
        let mut after = row_ids(&table);
        after.sort();
        assert_eq!(after, original);
    }
}

#[test]
fn test_sorting_twice_matches_sorting_once() {
    let cells = [("r0", "b"), ("r1", "a"), ("r2", "b"), ("r3", "a"), ("r4", "c")];
    for direction in [Direction::Ascending, Direction::Descending] {
        let mut table = text_table(&cells);
        let mut sorter = Sorter::default();

        sorter.sort(&mut table, 0, direction);
        let once = row_ids(&table);
        sorter.sort(&mut table, 0, direction);
        assert_eq!(row_ids(&table), once, "{direction}");
    }
}

#[test]
fn test_tie_order_independent_of_direction() {
    let mut table = text_table(&[("a1", "same"), ("b", "other"), ("a2", "same"), ("a3", "same")]);
    let mut sorter = Sorter::default();

    let tied = |ids: Vec<String>| -> Vec<String> {
        ids.into_iter().filter(|id| id.starts_with('a')).collect()
    };

    sorter.sort(&mut table, 0, Direction::Ascending);
    let ascending = tied(row_ids(&table));
    sorter.sort(&mut table, 0, Direction::Descending);
    let descending = tied(row_ids(&table));

    assert_eq!(ascending, vec!["a3", "a2", "a1"]);
    assert_eq!(ascending, descending);
}

#[test]
fn test_override_beats_text() {
    let mut table = Element::table().child(
        Element::tbody()
            .child(Element::tr().id("z").child(Element::td("Z").data("num", "10")))
            .child(Element::tr().id("y").child(Element::td("A").data("num", "9"))),
    );

    Sorter::default().sort(&mut table, 0, Direction::Ascending);
    assert_eq!(row_ids(&table), vec!["y", "z"]);
}

#[test]
fn test_numeric_override_is_not_lexicographic() {
    let mut table = numeric_table(&[("ten", "10", ""), ("nine", "9", ""), ("hundred", "100", "")]);
    Sorter::default().sort(&mut table, 0, Direction::Ascending);
    assert_eq!(row_ids(&table), vec!["nine", "ten", "hundred"]);
}

#[test]
fn test_identifiers_reused_across_sorts() {
    let mut table = text_table(&[("r0", "b"), ("r1", "a"), ("r2", "c")]);
    let mut sorter = Sorter::default();

    sorter.sort(&mut table, 0, Direction::Descending);
    let first: Vec<_> = ["r0", "r1", "r2"].iter().map(|id| stamped(&table, id)).collect();
    sorter.sort(&mut table, 0, Direction::Ascending);
    let second: Vec<_> = ["r0", "r1", "r2"].iter().map(|id| stamped(&table, id)).collect();

    assert_eq!(first, vec![Some(0), Some(1), Some(2)]);
    assert_eq!(first, second);
    assert_eq!(sorter.ids().peek(), 3);
}

#[test]
fn test_identifiers_assigned_in_document_order_on_first_sort() {
    let mut table = text_table(&[("r0", "c"), ("r1", "b"), ("r2", "a")]);
    let mut sorter = Sorter::new("num");

    sorter.sort(&mut table, 0, Direction::Ascending);
    assert_eq!(stamped(&table, "r0"), Some(0));
    assert_eq!(stamped(&table, "r2"), Some(2));

    // A row added later gets the next identifier, even though it sorts first.
    tabledom::first_by_tag_mut(&mut table, "tbody")
        .unwrap()
        .push_child(Element::tr().id("r3").child(Element::td("0")));
    sorter.sort(&mut table, 0, Direction::Ascending);
    assert_eq!(stamped(&table, "r3"), Some(3));
    assert_eq!(row_ids(&table), vec!["r3", "r2", "r1", "r0"]);
}

#[test]
fn test_cloned_rows_get_their_own_identifiers() {
    let template = Element::tr().child(Element::td("X").data("num", "5"));
    let mut second = template.clone();
    *second.children_mut() = vec![Element::td("Y").data("num", "5")];
    let mut table = Element::table().child(Element::tbody().child(template).child(second));
    let mut sorter = Sorter::default();

    sorter.sort(&mut table, 0, Direction::Ascending);

    assert_eq!(first_cells(&table), vec!["Y", "X"]);
    assert_eq!(sorter.ids().peek(), 2);
}

#[test]
fn test_rows_sharing_an_element_id_get_their_own_identifiers() {
    let mut table = numeric_table(&[("r", "5", "X"), ("r", "5", "Y")]);
    let mut sorter = Sorter::default();

    sorter.sort(&mut table, 0, Direction::Ascending);
    assert_eq!(first_cells(&table), vec!["Y", "X"]);

    let body = first_by_tag(&table, "tbody").unwrap();
    let ids: Vec<_> = body.element_children().map(sort_id).collect();
    assert_eq!(ids, vec![Some(1), Some(0)]);

    sorter.sort(&mut table, 0, Direction::Descending);
    assert_eq!(first_cells(&table), vec!["Y", "X"]);
    assert_eq!(sorter.ids().peek(), 2);
}

// ============================================================================
// Fail-soft inputs
// ============================================================================

#[test]
fn test_nan_overrides_sort_last() {
    let mut table = numeric_table(&[
        ("bad", "n/a", ""),
        ("two", "2", ""),
        ("worse", "??", ""),
        ("one", "1", ""),
    ]);
    let mut sorter = Sorter::default();

    let summary = sorter.sort(&mut table, 0, Direction::Ascending);
    assert_eq!(summary.nan_values, 2);
    assert_eq!(row_ids(&table), vec!["one", "two", "worse", "bad"]);

    sorter.sort(&mut table, 0, Direction::Descending);
    assert_eq!(row_ids(&table), vec!["two", "one", "worse", "bad"]);
}

#[test]
fn test_missing_cells_sort_lowest() {
    let mut table = Element::table().child(
        Element::tbody()
            .child(
                Element::tr()
                    .id("full")
                    .child(Element::td("a"))
                    .child(Element::td("m")),
            )
            .child(Element::tr().id("short").child(Element::td("b")))
            .child(
                Element::tr()
                    .id("other")
                    .child(Element::td("c"))
                    .child(Element::td("k")),
            ),
    );
    let mut sorter = Sorter::default();

    let summary = sorter.sort(&mut table, 1, Direction::Ascending);
    assert_eq!(summary.missing_cells, 1);
    assert_eq!(row_ids(&table), vec!["short", "other", "full"]);

    sorter.sort(&mut table, 1, Direction::Descending);
    assert_eq!(row_ids(&table), vec!["full", "other", "short"]);
}

#[test]
fn test_header_cell_in_row_counts_as_missing() {
    let mut table = Element::table().child(
        Element::tbody()
            .child(Element::tr().id("th-row").child(Element::th("b")))
            .child(Element::tr().id("td-row").child(Element::td("a"))),
    );

    let summary = Sorter::default().sort(&mut table, 0, Direction::Ascending);
    assert_eq!(summary.missing_cells, 1);
    assert_eq!(row_ids(&table), vec!["th-row", "td-row"]);
}

#[test]
fn test_text_compares_raw_markup() {
    let mut table = Element::table().child(
        Element::tbody()
            .child(
                Element::tr()
                    .id("bold")
                    .child(Element::new("td").child(Element::new("b").child(Element::text("a")))),
            )
            .child(Element::tr().id("space").child(Element::td(" z")))
            .child(Element::tr().id("plain").child(Element::td("a"))),
    );

    Sorter::default().sort(&mut table, 0, Direction::Ascending);
    // " z" < "<b>a</b>" < "a" by code unit.
    assert_eq!(row_ids(&table), vec!["space", "bold", "plain"]);
}

#[test]
fn test_non_row_body_children_stay_ahead() {
    let mut table = Element::table().child(
        Element::tbody()
            .child(Element::text("\n"))
            .child(Element::tr().id("b").child(Element::td("b")))
            .child(Element::text("\n"))
            .child(Element::tr().id("a").child(Element::td("a"))),
    );

    Sorter::default().sort(&mut table, 0, Direction::Ascending);

    let body = first_by_tag(&table, "tbody").unwrap();
    let nodes = body.child_nodes();
    assert_eq!(nodes.len(), 4);
    assert!(nodes[0].is_text() && nodes[1].is_text());
    assert_eq!(nodes[2].id, "a");
    assert_eq!(nodes[3].id, "b");
}

#[test]
fn test_only_first_body_is_sorted() {
    let mut table = Element::table()
        .child(
            Element::tbody()
                .id("first")
                .child(Element::tr().id("f2").child(Element::td("2")))
                .child(Element::tr().id("f1").child(Element::td("1"))),
        )
        .child(
            Element::tbody()
                .id("second")
                .child(Element::tr().id("s2").child(Element::td("2")))
                .child(Element::tr().id("s1").child(Element::td("1"))),
        );

    Sorter::default().sort(&mut table, 0, Direction::Ascending);

    let second = tabledom::find_element(&table, "second").unwrap();
    let ids: Vec<_> = second.element_children().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["s2", "s1"]);
    assert_eq!(row_ids(&table), vec!["f1", "f2"]);
}
