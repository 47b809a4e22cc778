use super::*;

async fn create_named(db: &sea_orm::DatabaseConnection, names: &[&str]) -> Result<(), DbErr> {
    for name in names {
        CategoryFactory::new(db).name(*name).build().await?;
    }
    Ok(())
}

/// Tests fetching one slice of records in ascending name order.
///
/// Expected: Ok with the second and third names
#[tokio::test]
async fn fetches_ordered_slice() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_named(db, &["Delta", "Alpha", "Echo", "Charlie", "Bravo"]).await?;

    let repo = ResourceRepository::<CategoryAdapter>::new(db);
    let records = repo
        .fetch(
            Condition::all(),
            &[OrderKey::asc(Column::Name)],
            PageWindow::Slice {
                offset: 1,
                limit: 2,
            },
        )
        .await?;

    let names: Vec<_> = records.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Bravo", "Charlie"]);

    Ok(())
}

/// Tests fetching every record in descending order without a window.
///
/// Expected: Ok with all names in reverse order
#[tokio::test]
async fn fetches_all_records_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_named(db, &["Alpha", "Charlie", "Bravo"]).await?;

    let repo = ResourceRepository::<CategoryAdapter>::new(db);
    let records = repo
        .fetch(
            Condition::all(),
            &[OrderKey::desc(Column::Name)],
            PageWindow::All,
        )
        .await?;

    let names: Vec<_> = records.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Charlie", "Bravo", "Alpha"]);

    Ok(())
}

/// Tests that rows tied on every ordering column come back in primary key order.
///
/// Expected: Ok with the smaller identifier first
#[tokio::test]
async fn breaks_ties_by_primary_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let second = Uuid::from_u128(2);
    let first = Uuid::from_u128(1);
    CategoryFactory::new(db).id(second).position(5).build().await?;
    CategoryFactory::new(db).id(first).position(5).build().await?;

    let repo = ResourceRepository::<CategoryAdapter>::new(db);
    let records = repo
        .fetch(
            Condition::all(),
            &[OrderKey::asc(Column::Position)],
            PageWindow::All,
        )
        .await?;

    let ids: Vec<_> = records.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first, second]);

    Ok(())
}

/// Tests that a window past the last record yields nothing.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn window_past_end_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_named(db, &["Alpha", "Bravo"]).await?;

    let repo = ResourceRepository::<CategoryAdapter>::new(db);
    let records = repo
        .fetch(
            Condition::all(),
            &[],
            PageWindow::Slice {
                offset: 20,
                limit: 20,
            },
        )
        .await?;

    assert!(records.is_empty());

    Ok(())
}

/// Tests fetching a slice whose offset and limit exceed the signed 64-bit range.
///
/// Expected: Ok with no records
#[tokio::test]
async fn clamps_out_of_range_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_named(db, &["Alpha"]).await?;

    let repo = ResourceRepository::<CategoryAdapter>::new(db);
    let records = repo
        .fetch(
            Condition::all(),
            &[],
            PageWindow::Slice {
                offset: u64::MAX,
                limit: u64::MAX,
            },
        )
        .await?;

    assert!(records.is_empty());

    Ok(())
}
