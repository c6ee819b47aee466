use larder::recipe::Quantity;
use pretty_assertions::assert_eq;
use tests::prelude::*;

async fn create_form(test: &LarderTest) -> RecipeForm {
    let options = test.client().fetch_ingredient_options(None).await.unwrap();
    RecipeForm::create(options, test.client().config())
}

#[tokio::test]
async fn options_are_decoded_at_the_boundary() {
    let test = LarderTest::new();
    let bakery = bakery(test.backend());

    let options = test.client().fetch_ingredient_options(None).await.unwrap();

    let labels: Vec<_> = options.iter().map(|option| option.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "[grams] Harina 000",
            "[grams] Azúcar",
            "[grams] Manteca",
            "[units] Huevo",
            "[liters] Leche",
            "[units] Medialuna",
        ]
    );
    assert_eq!(options[0].id, bakery.flour);
    assert_eq!(options[0].unit_cost, Decimal::new(80, 2));
    assert_eq!(options[4].measurement_unit, MeasurementUnit::Liters);
}

#[tokio::test]
async fn options_are_walked_page_by_page() {
    let mut builder = Client::builder();
    builder.options_page_size(2);
    let test = LarderTest::with_builder(&builder);
    bakery(test.backend());

    let options = test.client().fetch_ingredient_options(None).await.unwrap();

    assert_eq!(options.len(), 6);
    assert_eq!(test.log().count_named("FetchInventoryItems"), 3);
}

#[tokio::test]
async fn selection_is_exclusive_across_rows() {
    let test = LarderTest::new();
    let bakery = bakery(test.backend());
    let mut recipe = create_form(&test).await;

    let first = recipe.editor().rows().rows()[0].row_id;
    assert!(recipe.set_selection(first, Some(bakery.flour)));

    let second = recipe.add_row().unwrap();
    assert!(!recipe.set_selection(second, Some(bakery.flour)));

    let view = recipe.editor().rows_view();
    assert!(view[1].options.iter().all(|option| option.id != bakery.flour));
    assert!(view[0].options.iter().any(|option| option.id == bakery.flour));
    assert!(view[1].quantity_disabled);
    assert_eq!(view[0].cost_display, "$ 0,80");
}

#[tokio::test]
async fn add_row_stops_when_every_option_is_taken() {
    let test = LarderTest::new();
    bakery(test.backend());
    let mut recipe = create_form(&test).await;
    let ids: Vec<_> = recipe
        .editor()
        .options()
        .iter()
        .map(|option| option.id)
        .collect();

    let mut row = recipe.editor().rows().rows()[0].row_id;
    for (i, id) in ids.iter().enumerate() {
        assert!(recipe.set_selection(row, Some(*id)));
        if i + 1 < ids.len() {
            row = recipe.add_row().unwrap();
        }
    }

    assert_eq!(recipe.add_row(), None);
    assert_eq!(recipe.editor().rows().len(), ids.len());

    let view = recipe.editor().rows_view();
    assert_eq!(view.last().unwrap().can_add, Some(false));
    assert!(view.iter().all(|row| row.can_remove));
}

#[tokio::test]
async fn blank_quantity_commits_default_on_blur() {
    let test = LarderTest::new();
    let bakery = bakery(test.backend());
    let mut recipe = create_form(&test).await;

    let row = recipe.editor().rows().rows()[0].row_id;
    recipe.set_selection(row, Some(bakery.eggs));
    recipe.set_quantity(row, "");
    assert_eq!(recipe.average_cost(), Decimal::ZERO);

    recipe.on_quantity_blur(row);

    assert_eq!(
        recipe.editor().rows().rows()[0].quantity,
        Quantity::Committed(Decimal::ONE)
    );
    assert_eq!(recipe.average_cost_display(), "$ 150,00");
}

#[tokio::test]
async fn blank_quantity_stays_blank_without_default() {
    let mut builder = Client::builder();
    builder.blank_quantity_default(None);
    let test = LarderTest::with_builder(&builder);
    let bakery = bakery(test.backend());
    let mut recipe = create_form(&test).await;

    let row = recipe.editor().rows().rows()[0].row_id;
    recipe.set_selection(row, Some(bakery.eggs));
    recipe.set_quantity(row, "");
    recipe.on_quantity_blur(row);

    let view = recipe.editor().rows_view();
    assert_eq!(view[0].quantity_text, "");
    assert_eq!(recipe.average_cost(), Decimal::ZERO);
}

#[tokio::test]
async fn quantity_keystrokes_are_normalized() {
    let test = LarderTest::new();
    let bakery = bakery(test.backend());
    let mut recipe = create_form(&test).await;

    let row = recipe.editor().rows().rows()[0].row_id;
    recipe.set_selection(row, Some(bakery.butter));

    assert!(recipe.set_quantity(row, "12,5"));
    assert!(!recipe.set_quantity(row, "12,5,"));
    assert_eq!(recipe.editor().rows_view()[0].quantity_text, "12.5");

    // 4,50 * 12,5
    assert_eq!(recipe.average_cost(), Decimal::new(5625, 2));

    recipe.on_quantity_blur(row);
    assert_eq!(recipe.editor().rows_view()[0].quantity_text, "12.50");
}
