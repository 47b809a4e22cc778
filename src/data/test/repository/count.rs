use super::*;

/// Tests counting every record of a resource.
///
/// Expected: Ok(3)
#[tokio::test]
async fn counts_all_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        CategoryFactory::new(db).build().await?;
    }

    let repo = ResourceRepository::<CategoryAdapter>::new(db);
    let count = repo.count(Condition::all()).await?;

    assert_eq!(count, 3);

    Ok(())
}

/// Tests counting only records matching a condition.
///
/// Expected: Ok(1)
#[tokio::test]
async fn counts_filtered_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CategoryFactory::new(db).kind(1).build().await?;
    CategoryFactory::new(db).kind(4).build().await?;

    let repo = ResourceRepository::<CategoryAdapter>::new(db);
    let count = repo
        .count(Condition::all().add(Column::Kind.eq(4)))
        .await?;

    assert_eq!(count, 1);

    Ok(())
}

/// Tests counting an empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn counts_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResourceRepository::<CategoryAdapter>::new(db);

    assert_eq!(repo.count(Condition::all()).await?, 0);

    Ok(())
}
