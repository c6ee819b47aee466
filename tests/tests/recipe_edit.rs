use std::sync::{Arc, Mutex};
use pretty_assertions::assert_eq;
use tests::prelude::*;

async fn mount_edit(test: &LarderTest, bakery: &Bakery, notices: &NoticeLog) -> RecipeFormWrapper {
    let options = test
        .client()
        .fetch_ingredient_options(Some(bakery.croissant))
        .await
        .unwrap();

    let mut wrapper = RecipeFormWrapper::new();
    wrapper
        .mount(test.client(), Some(bakery.croissant), options, notices)
        .await;
    wrapper
}

#[tokio::test]
async fn load_maps_links_to_rows() {
    let test = LarderTest::new();
    let bakery = bakery(test.backend());
    let notices = NoticeLog::new();

    let wrapper = mount_edit(&test, &bakery, &notices).await;
    let recipe = wrapper.form().unwrap();

    assert_eq!(
        recipe.mode(),
        &Mode::Edit {
            id: bakery.croissant,
            original: bakery.croissant_links.clone(),
        }
    );

    let rows: Vec<_> = recipe
        .editor()
        .rows()
        .rows()
        .iter()
        .map(|row| (row.link_id, row.selected.as_ref().map(|option| option.id)))
        .collect();
    assert_eq!(
        rows,
        vec![
            (Some(bakery.croissant_links[0]), Some(bakery.flour)),
            (Some(bakery.croissant_links[1]), Some(bakery.butter)),
            (Some(bakery.croissant_links[2]), Some(bakery.eggs)),
        ]
    );

    // recomputed from the rows, not the stored header cost
    assert_eq!(recipe.average_cost_display(), "$ 2.225,00");
    assert_eq!(recipe.form().text("name"), "Medialuna");

    // the recipe cannot list itself
    assert!(recipe
        .editor()
        .options()
        .iter()
        .all(|option| option.id != bakery.croissant));
}

#[tokio::test]
async fn submit_reconciles_edited_composition() {
    let test = LarderTest::new();
    let bakery = bakery(test.backend());
    let notices = NoticeLog::new();
    let mut wrapper = mount_edit(&test, &bakery, &notices).await;
    let mut log = test.log();
    log.clear();

    let recipe = wrapper.form_mut().unwrap();
    let completed = Arc::new(Mutex::new(vec![]));
    let sink = completed.clone();
    recipe.on_complete(move |id| sink.lock().unwrap().push(id));

    recipe.set_description("Medialunas de manteca");

    let flour = row_of(recipe, bakery.flour);
    recipe.set_quantity(flour, "1200");
    recipe.on_quantity_blur(flour);

    recipe.remove_row(row_of(recipe, bakery.eggs));

    let milk = recipe.add_row().unwrap();
    recipe.set_selection(milk, Some(bakery.milk));
    recipe.set_quantity(milk, "0,5");
    recipe.on_quantity_blur(milk);

    let outcome = recipe.submit(test.client(), &notices).await;
    assert!(outcome.is_completed(), "unexpected outcome: {outcome:?}");

    assert_eq!(log.names()[0], "UpdateInventoryHeader");
    assert_eq!(log.count_named("UpdateIngredientLink"), 2);
    assert_eq!(log.count_named("CreateIngredientLink"), 1);
    assert_eq!(log.count_named("DeleteIngredientLink"), 1);
    assert_eq!(log.len(), 5);

    assert_eq!(*completed.lock().unwrap(), vec![bakery.croissant]);
    assert_eq!(notices.last(), Some(Notice::success("Recipe updated")));

    let links: Vec<_> = test
        .backend()
        .links_of(bakery.croissant)
        .into_iter()
        .map(|(id, link)| (id, link.ingredient_id, link.quantity))
        .collect();
    assert_eq!(links.len(), 3);
    assert_eq!(links[0], (bakery.croissant_links[0], bakery.flour, Decimal::new(1200, 0)));
    assert_eq!(links[1], (bakery.croissant_links[1], bakery.butter, Decimal::new(250, 0)));
    assert_eq!((links[2].1, links[2].2), (bakery.milk, Decimal::new(5, 1)));

    // 1200 * 0,80 + 250 * 4,50 + 0,5 * 900
    let detail = test.backend().detail(bakery.croissant).unwrap();
    assert_eq!(detail.cost, "$ 2.535,00");
    assert_eq!(detail.description, "Medialunas de manteca");
}

#[tokio::test]
async fn cleared_selection_deletes_link() {
    let test = LarderTest::new();
    let bakery = bakery(test.backend());
    let notices = NoticeLog::new();
    let mut wrapper = mount_edit(&test, &bakery, &notices).await;
    let mut log = test.log();
    log.clear();

    let recipe = wrapper.form_mut().unwrap();
    recipe.set_description("Medialunas");
    recipe.set_selection(row_of(recipe, bakery.butter), None);

    let outcome = recipe.submit(test.client(), &notices).await;
    assert!(outcome.is_completed());

    assert_eq!(log.count_named("DeleteIngredientLink"), 1);
    assert_eq!(log.count_named("CreateIngredientLink"), 0);
    assert!(test
        .backend()
        .links_of(bakery.croissant)
        .iter()
        .all(|(id, _)| *id != bakery.croissant_links[1]));
}

#[tokio::test]
async fn rejected_update_still_settles_batch() {
    let test = LarderTest::new();
    let bakery = bakery(test.backend());
    let notices = NoticeLog::new();
    let mut wrapper = mount_edit(&test, &bakery, &notices).await;
    let mut log = test.log();
    log.clear();

    let recipe = wrapper.form_mut().unwrap();
    let called = Arc::new(Mutex::new(false));
    let sink = called.clone();
    recipe.on_complete(move |_| *sink.lock().unwrap() = true);

    recipe.set_description("Medialunas");
    recipe.remove_row(row_of(recipe, bakery.flour));

    test.reject("UpdateIngredientLink");
    let outcome = recipe.submit(test.client(), &notices).await;

    let SubmitOutcome::Failed(err) = outcome else {
        panic!("unexpected outcome: {outcome:?}");
    };
    assert!(err.is_backend());
    assert!(!*called.lock().unwrap());
    assert!(notices.last().unwrap().is_error());

    // the delete went through even though both updates failed
    assert_eq!(log.count_named("UpdateIngredientLink"), 2);
    assert_eq!(log.count_named("DeleteIngredientLink"), 1);
    assert_eq!(log.failures(), 2);
    assert_eq!(test.backend().links_of(bakery.croissant).len(), 2);
}

#[tokio::test]
async fn failed_load_renders_no_form() {
    let test = LarderTest::new();
    let notices = NoticeLog::new();
    let mut wrapper = RecipeFormWrapper::new();

    test.reject("FetchInventoryItem");
    wrapper
        .mount(test.client(), Some(InventoryId(1)), vec![], &notices)
        .await;

    assert!(wrapper.state().is_failed());
    assert!(wrapper.form().is_none());
    assert_eq!(
        notices.notices(),
        vec![Notice::error("Could not load recipe for editing")]
    );
    assert_eq!(test.log().names(), ["FetchInventoryItem"]);
}
