use super::*;

/// Tests getting a record by its canonical identifier.
///
/// Expected: Ok(Some(Model))
#[tokio::test]
async fn gets_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = CategoryFactory::new(db).name("Plumbing").build().await?;

    let repo = ResourceRepository::<CategoryAdapter>::new(db);
    let found = repo.get_by_canonical_id(category.id).await?;

    assert_eq!(found.map(|c| c.name), Some("Plumbing".to_string()));

    Ok(())
}

/// Tests getting a record that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_identifier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CategoryFactory::new(db).build().await?;

    let repo = ResourceRepository::<CategoryAdapter>::new(db);
    let found = repo.get_by_canonical_id(Uuid::new_v4()).await?;

    assert!(found.is_none());

    Ok(())
}
