use recipebook_recipe::{Error, Filters, Metadata, RecipesQuery, messages};
use temp_dir::TempDir;

mod helpers;

fn query(title: &str, cuisine_id: i64, page: u32, page_size: u32, sort: &str) -> RecipesQuery {
    RecipesQuery {
        title: title.to_owned(),
        cuisine_id,
        filters: Filters {
            page,
            page_size,
            sort: sort.to_owned(),
        },
    }
}

async fn seed(state: &helpers::State) -> anyhow::Result<Vec<i64>> {
    let mut ids = Vec::new();
    for (title, difficulty, cuisine, ingredients) in [
        ("Pancakes", "Easy", "American", &["Flour", "Egg"][..]),
        ("Beef Wellington", "Advanced", "French", &["Beef", "Pastry"][..]),
        ("Pad Thai", "Medium", "Thai", &["Noodles", "Egg", "Peanuts"][..]),
        ("Crepes", "Intermediate", "French", &["Flour", "Milk"][..]),
        ("Souffle", "Advanced", "French", &["Egg", "Cheese"][..]),
    ] {
        ids.push(
            state
                .command
                .insert(helpers::recipe(title, difficulty, cuisine, ingredients))
                .await?,
        );
    }

    Ok(ids)
}

#[tokio::test]
async fn default_listing_orders_by_id_with_metadata() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let ids = seed(&state).await?;

    let (recipes, metadata) = state.query.list(RecipesQuery::default()).await?;

    assert_eq!(recipes.iter().map(|r| r.id).collect::<Vec<_>>(), ids);
    assert_eq!(helpers::names(&recipes[2]), ["Noodles", "Egg", "Peanuts"]);
    assert_eq!(
        metadata,
        Metadata {
            current_page: 1,
            page_size: 50,
            first_page: 1,
            last_page: 1,
            total_records: 5,
        }
    );

    Ok(())
}

#[tokio::test]
async fn descending_difficulty_breaks_ties_by_id() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let ids = seed(&state).await?;

    let (recipes, _) = state.query.list(query("", 0, 1, 50, "-difficulty")).await?;

    assert_eq!(
        recipes.iter().map(|r| r.id).collect::<Vec<_>>(),
        [ids[1], ids[4], ids[2], ids[3], ids[0]]
    );

    let (again, _) = state.query.list(query("", 0, 1, 50, "-difficulty")).await?;
    assert_eq!(recipes, again);

    Ok(())
}

#[tokio::test]
async fn cuisine_name_and_title_sorts() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    seed(&state).await?;

    let (recipes, _) = state.query.list(query("", 0, 1, 50, "-cuisinename")).await?;
    let cuisines = recipes
        .iter()
        .map(|r| r.cuisine_name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(cuisines, ["Thai", "French", "French", "French", "American"]);

    let (recipes, _) = state.query.list(query("", 0, 1, 50, "title")).await?;
    let titles = recipes.iter().map(|r| r.title.as_str()).collect::<Vec<_>>();
    assert_eq!(
        titles,
        ["Beef Wellington", "Crepes", "Pad Thai", "Pancakes", "Souffle"]
    );

    Ok(())
}

#[tokio::test]
async fn pages_cover_recipes_not_rows() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let ids = seed(&state).await?;

    let (first, metadata) = state.query.list(query("", 0, 1, 2, "id")).await?;
    assert_eq!(first.iter().map(|r| r.id).collect::<Vec<_>>(), [ids[0], ids[1]]);
    assert_eq!(first[1].ingredients.len(), 2);
    assert_eq!(metadata.last_page, 3);
    assert_eq!(metadata.total_records, 5);

    let (last, metadata) = state.query.list(query("", 0, 3, 2, "id")).await?;
    assert_eq!(last.iter().map(|r| r.id).collect::<Vec<_>>(), [ids[4]]);
    assert_eq!(metadata.current_page, 3);

    let (beyond, metadata) = state.query.list(query("", 0, 9, 2, "id")).await?;
    assert!(beyond.is_empty());
    assert_eq!(metadata.total_records, 5);

    Ok(())
}

#[tokio::test]
async fn title_and_cuisine_filters() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let ids = seed(&state).await?;

    let (recipes, metadata) = state.query.list(query("PAN", 0, 1, 50, "id")).await?;
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].title, "Pancakes");
    assert_eq!(metadata.total_records, 1);

    let french = state
        .query
        .list_cuisines()
        .await?
        .into_iter()
        .find(|c| c.name == "French")
        .map(|c| c.id)
        .unwrap();

    let (recipes, _) = state.query.list(query("", french, 1, 50, "id")).await?;
    assert_eq!(
        recipes.iter().map(|r| r.id).collect::<Vec<_>>(),
        [ids[1], ids[3], ids[4]]
    );

    let (recipes, metadata) = state.query.list(query("e", french, 1, 50, "id")).await?;
    assert_eq!(recipes.len(), 3);
    assert_eq!(metadata.total_records, 3);

    let (recipes, metadata) = state.query.list(query("%", 0, 1, 50, "id")).await?;
    assert!(recipes.is_empty());
    assert_eq!(metadata, Metadata::default());

    Ok(())
}

#[tokio::test]
async fn ingredient_less_recipes_are_dropped_from_listing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    seed(&state).await?;

    let mut empty = helpers::recipe("Ice", "Easy", "American", &[]);
    empty.ingredients = None;
    state.command.insert(empty).await?;

    let (recipes, metadata) = state.query.list(RecipesQuery::default()).await?;
    assert_eq!(recipes.len(), 5);
    assert!(recipes.iter().all(|r| r.title != "Ice"));
    assert_eq!(metadata.total_records, 5);

    Ok(())
}

#[tokio::test]
async fn invalid_filters_fail_validation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let Err(Error::Validate(errors)) = state.query.list(query("", 0, 0, 500, "name")).await else {
        panic!("expected validation error");
    };

    let messages = messages(&errors);
    assert_eq!(messages["page"], "must be greater than zero");
    assert_eq!(messages["page_size"], "must be a maximum of 100");
    assert_eq!(messages["sort"], "invalid sort value");

    Ok(())
}

#[tokio::test]
async fn title_filter_folds_accented_case() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let id = state
        .command
        .insert(helpers::recipe("Crème Brûlée", "Advanced", "French", &["Cream", "Sugar"]))
        .await?;
    state
        .command
        .insert(helpers::recipe("Creme Caramel", "Medium", "French", &["Milk", "Sugar"]))
        .await?;

    for title in ["CRÈME", "brûlée", "Crème Brûlée"] {
        let (recipes, metadata) = state.query.list(query(title, 0, 1, 50, "id")).await?;
        assert_eq!(recipes.iter().map(|r| r.id).collect::<Vec<_>>(), [id], "{title}");
        assert_eq!(metadata.total_records, 1);
    }

    Ok(())
}
