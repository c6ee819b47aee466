use larder::{
    model::{InventoryItem, InventoryKind},
    table::{Column, DataTable, Pagination},
};
use std::sync::{Arc, Mutex};
use pretty_assertions::assert_eq;
use tests::prelude::*;

fn seed(test: &LarderTest, n: usize) {
    for i in 1..=n {
        test.backend().insert_item(
            &format!("Insumo {i:02}"),
            InventoryKind::Raw,
            MeasurementUnit::Grams,
            Decimal::new(i as i64 * 125, 1),
        );
    }
}

fn columns() -> Vec<Column<InventoryItem>> {
    vec![
        Column::key("Nombre", "name"),
        Column::key("Unidad", "measurementUnit"),
        Column::key("Costo", "cost").footer("Total"),
    ]
}

#[tokio::test]
async fn local_pagination_over_full_listing() {
    let test = LarderTest::new();
    seed(&test, 25);
    let page = test
        .client()
        .fetch_all_inventory_items(1, 100)
        .await
        .unwrap();

    let mut table = DataTable::new(page.items, columns()).with_config(test.client().config());

    assert_eq!(table.page_count(), 3);
    assert!(!table.is_server_paginated());

    table.last_page();
    let view = table.render();
    assert_eq!(view.rows.len(), 5);
    assert_eq!(view.rows[0], ["Insumo 21", "grams", "$ 262,50"]);
    assert_eq!(
        view.footers,
        Some(vec![String::new(), String::new(), "Total".to_string()])
    );
    assert_eq!(view.pager.page, 3);
}

#[tokio::test]
async fn server_pagination_follows_page_changes() {
    let test = LarderTest::new();
    seed(&test, 25);
    let client = test.client();

    let requested = Arc::new(Mutex::new(vec![]));
    let sink = requested.clone();

    let first = client.fetch_all_inventory_items(1, 10).await.unwrap();
    let mut table = DataTable::new(first.items.clone(), columns())
        .with_pagination(Pagination::from(&first))
        .on_page_change(move |page| sink.lock().unwrap().push(page));

    assert_eq!(table.page_count(), 3);
    assert_eq!(table.visible_rows().len(), 10);

    assert!(table.next_page());
    assert_eq!(*requested.lock().unwrap(), vec![2]);

    // the caller fetches the requested page and hands it back
    let second = client.fetch_all_inventory_items(2, 10).await.unwrap();
    table.set_data(second.items.clone());
    table.set_pagination(Some(Pagination::from(&second)));

    let view = table.render();
    assert_eq!(view.pager.page, 2);
    assert_eq!(view.rows[0][0], "Insumo 11");
    assert!(view.pager.can_previous && view.pager.can_next);

    // sorting only reorders the current page
    table.toggle_sort(2);
    table.toggle_sort(2);
    let names: Vec<_> = table.visible_rows().iter().map(|item| item.name.clone()).collect();
    assert_eq!(names.first().map(String::as_str), Some("Insumo 20"));
    assert_eq!(names.last().map(String::as_str), Some("Insumo 11"));

    assert!(table.type_page("99"));
    assert_eq!(*requested.lock().unwrap(), vec![2, 3]);
    assert_eq!(test.log().count_named("FetchInventoryItems"), 2);
}

#[tokio::test]
async fn row_click_yields_record() {
    let test = LarderTest::new();
    seed(&test, 3);
    let page = test
        .client()
        .fetch_all_inventory_items(1, 10)
        .await
        .unwrap();

    let clicked = Arc::new(Mutex::new(vec![]));
    let sink = clicked.clone();
    let mut table = DataTable::new(page.items, columns())
        .on_row_click(move |item: &InventoryItem| sink.lock().unwrap().push(item.id));

    table.type_filter("insumo 02");
    assert!(table.click_row(0));
    assert!(!table.click_row(1));

    assert_eq!(*clicked.lock().unwrap(), vec![InventoryId(2)]);
}
