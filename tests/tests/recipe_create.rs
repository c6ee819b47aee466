use std::sync::{Arc, Mutex};
use pretty_assertions::assert_eq;
use tests::prelude::*;

async fn mount_create(test: &LarderTest, notices: &NoticeLog) -> RecipeFormWrapper {
    let options = test.client().fetch_ingredient_options(None).await.unwrap();
    let mut wrapper = RecipeFormWrapper::new();
    wrapper.mount(test.client(), None, options, notices).await;
    wrapper
}

fn fill_header(recipe: &mut RecipeForm) {
    recipe.set_name("Budín de vainilla");
    recipe.set_description("Budín de 500 g");
    recipe.set_measurement_unit("units");
}

#[tokio::test]
async fn create_recipe_with_two_ingredients() {
    let test = LarderTest::new();
    let bakery = bakery(test.backend());
    let notices = NoticeLog::new();
    let mut wrapper = mount_create(&test, &notices).await;
    let mut log = test.log();
    log.clear();

    let recipe = wrapper.form_mut().unwrap();
    assert_eq!(recipe.mode(), &Mode::Create);

    let completed = Arc::new(Mutex::new(vec![]));
    let sink = completed.clone();
    recipe.on_complete(move |id| sink.lock().unwrap().push(id));

    fill_header(recipe);

    let first = recipe.editor().rows().rows()[0].row_id;
    recipe.set_selection(first, Some(bakery.flour));
    recipe.set_quantity(first, "500");
    recipe.on_quantity_blur(first);

    let second = recipe.add_row().unwrap();
    recipe.set_selection(second, Some(bakery.eggs));
    recipe.set_quantity(second, "3");
    recipe.on_quantity_blur(second);

    // left empty; dropped on submit
    recipe.add_row().unwrap();

    // 500 * 0,80 + 3 * 150
    assert_eq!(recipe.average_cost(), Decimal::new(850, 0));
    assert_eq!(recipe.average_cost_display(), "$ 850,00");

    let outcome = recipe.submit(test.client(), &notices).await;
    let SubmitOutcome::Completed(id) = outcome else {
        panic!("unexpected outcome: {outcome:?}");
    };

    assert_eq!(log.count_named("CreateInventoryHeader"), 1);
    assert_eq!(log.count_named("CreateIngredientLink"), 2);
    assert_eq!(log.len(), 3);
    assert_eq!(log.names()[0], "CreateInventoryHeader");

    assert_eq!(*completed.lock().unwrap(), vec![id]);
    assert_eq!(notices.last(), Some(Notice::success("Recipe created")));

    let detail = test.backend().detail(id).unwrap();
    assert_eq!(detail.name, "Budín de vainilla");
    assert_eq!(detail.cost, "$ 850,00");

    let mut links: Vec<_> = test
        .backend()
        .links_of(id)
        .into_iter()
        .map(|(_, link)| (link.ingredient_id, link.quantity, link.cost))
        .collect();
    links.sort();
    assert_eq!(
        links,
        vec![
            (bakery.flour, Decimal::new(500, 0), Decimal::new(80, 2)),
            (bakery.eggs, Decimal::new(3, 0), Decimal::new(150, 0)),
        ]
    );
}

#[tokio::test]
async fn invalid_form_issues_no_calls() {
    let test = LarderTest::new();
    bakery(test.backend());
    let notices = NoticeLog::new();
    let mut wrapper = mount_create(&test, &notices).await;
    let mut log = test.log();
    log.clear();

    let recipe = wrapper.form_mut().unwrap();
    let called = Arc::new(Mutex::new(false));
    let sink = called.clone();
    recipe.on_complete(move |_| *sink.lock().unwrap() = true);

    recipe.set_name("Sin ingredientes");
    recipe.set_description("x".repeat(101).as_str());

    let outcome = recipe.submit(test.client(), &notices).await;
    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("unexpected outcome: {outcome:?}");
    };

    let fields: Vec<_> = errors.fields().collect();
    assert_eq!(fields, ["description", "measurementUnit", "ingredients"]);
    assert!(recipe.form().error("ingredients").is_some());
    assert!(recipe.form().error("name").is_none());

    assert!(log.is_empty());
    assert!(notices.is_empty());
    assert!(!*called.lock().unwrap());
}

#[tokio::test]
async fn rejected_header_sends_no_links() {
    let test = LarderTest::new();
    let bakery = bakery(test.backend());
    let notices = NoticeLog::new();
    let mut wrapper = mount_create(&test, &notices).await;
    let mut log = test.log();
    log.clear();
    let items = test.backend().item_count();

    let recipe = wrapper.form_mut().unwrap();
    let called = Arc::new(Mutex::new(false));
    let sink = called.clone();
    recipe.on_complete(move |_| *sink.lock().unwrap() = true);

    fill_header(recipe);
    let row = recipe.editor().rows().rows()[0].row_id;
    recipe.set_selection(row, Some(bakery.sugar));

    test.reject("CreateInventoryHeader");
    let outcome = recipe.submit(test.client(), &notices).await;

    let SubmitOutcome::Failed(err) = outcome else {
        panic!("unexpected outcome: {outcome:?}");
    };
    assert!(err.is_backend());
    assert_eq!(log.names(), ["CreateInventoryHeader"]);
    assert_eq!(test.backend().item_count(), items);
    assert!(!*called.lock().unwrap());

    let notice = notices.last().unwrap();
    assert!(notice.is_error());
    assert!(notice.message.starts_with("Could not save recipe"));
}

#[tokio::test]
async fn rejected_link_keeps_form_open_for_retry() {
    let test = LarderTest::new();
    let bakery = bakery(test.backend());
    let notices = NoticeLog::new();
    let mut wrapper = mount_create(&test, &notices).await;
    let mut log = test.log();
    log.clear();
    let items = test.backend().item_count();

    let recipe = wrapper.form_mut().unwrap();
    let completed = Arc::new(Mutex::new(vec![]));
    let sink = completed.clone();
    recipe.on_complete(move |id| sink.lock().unwrap().push(id));

    fill_header(recipe);
    let first = recipe.editor().rows().rows()[0].row_id;
    recipe.set_selection(first, Some(bakery.milk));
    let second = recipe.add_row().unwrap();
    recipe.set_selection(second, Some(bakery.butter));

    test.reject("CreateIngredientLink");
    let outcome = recipe.submit(test.client(), &notices).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    // both links were attempted and the header is not rolled back
    assert_eq!(log.count_named("CreateIngredientLink"), 2);
    assert_eq!(log.failures(), 2);
    assert_eq!(test.backend().item_count(), items + 1);
    assert!(completed.lock().unwrap().is_empty());
    assert!(notices.last().unwrap().is_error());

    // the form is still usable
    test.accept_all();
    let outcome = recipe.submit(test.client(), &notices).await;

    assert!(outcome.is_completed());
    assert_eq!(completed.lock().unwrap().len(), 1);
    assert_eq!(notices.last(), Some(Notice::success("Recipe created")));
}
