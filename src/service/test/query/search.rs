use super::*;

/// Tests that a zero page size falls back to the default of 20.
///
/// Expected: Ok with 20 items on page 1 of 2
#[tokio::test]
async fn zero_page_size_uses_default_size() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..25 {
        factory::create_category(db).await?;
    }

    let service = LegacyQueryService::<CategoryAdapter>::new(db);
    let page = service.search(&SearchSpec::new().page(1, 0)).await?;

    assert_eq!(page.items.len(), 20);
    assert_eq!(page.total_count, 25);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.page_size, 20);
    assert!(page.has_next_page);
    assert!(!page.has_previous_page);
    assert_eq!(page.messages, None);

    Ok(())
}

/// Tests requesting the last partial page.
///
/// Expected: Ok with the remaining 5 items and no next page
#[tokio::test]
async fn returns_last_partial_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..25 {
        factory::create_category(db).await?;
    }

    let service = LegacyQueryService::<CategoryAdapter>::new(db);
    let page = service.search(&SearchSpec::new().page(2, 20)).await?;

    assert_eq!(page.items.len(), 5);
    assert_eq!(page.current_page, 2);
    assert!(!page.has_next_page);
    assert!(page.has_previous_page);

    Ok(())
}

/// Tests that the unpaged policy returns every record when no page size is given.
///
/// Expected: Ok with all 30 items, totalPages 0 and empty messages
#[tokio::test]
async fn unpaged_resource_returns_everything() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..30 {
        factory::create_wallet_transaction(db).await?;
    }

    let service = LegacyQueryService::<WalletTransactionAdapter>::new(db);
    let page = service.search(&SearchSpec::new().page(1, 0)).await?;

    assert_eq!(page.items.len(), 30);
    assert_eq!(page.total_count, 30);
    assert_eq!(page.total_pages, 0);
    assert!(!page.has_next_page);
    assert!(!page.has_previous_page);
    assert_eq!(page.messages, Some(vec![]));

    Ok(())
}

/// Tests that the keyword matches any searchable column, ignoring case.
///
/// Expected: Ok with the two categories mentioning plumbing
#[tokio::test]
async fn keyword_matches_any_searchable_column() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CategoryFactory::new(db).name("Plumbing").build().await?;
    CategoryFactory::new(db)
        .name("Electrical")
        .description("Often booked together with PLUMBING work")
        .build()
        .await?;
    CategoryFactory::new(db).name("Gardening").build().await?;

    let service = LegacyQueryService::<CategoryAdapter>::new(db);
    let page = service.search(&SearchSpec::new().keyword("plumb")).await?;

    let mut names: Vec<_> = page.items.iter().map(|c| c.name.clone()).collect();
    names.sort();
    assert_eq!(names, vec!["Electrical", "Plumbing"]);
    assert_eq!(page.total_count, 2);

    Ok(())
}

/// Tests that the advanced-search keyword replaces the primary keyword.
///
/// Expected: Ok matching "bar" only
#[tokio::test]
async fn advanced_keyword_takes_precedence() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CategoryFactory::new(db).name("foo").build().await?;
    CategoryFactory::new(db).name("bar").build().await?;

    let service = LegacyQueryService::<CategoryAdapter>::new(db);
    let page = service
        .search(&SearchSpec::new().keyword("foo").advanced_keyword("bar"))
        .await?;

    let names: Vec<_> = page.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["bar"]);

    Ok(())
}

/// Tests that LIKE wildcards in the keyword are matched literally.
///
/// Expected: Ok matching only the name containing a literal percent sign
#[tokio::test]
async fn keyword_wildcards_are_literal() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CategoryFactory::new(db).name("50% off").build().await?;
    CategoryFactory::new(db).name("500 items").build().await?;

    let service = LegacyQueryService::<CategoryAdapter>::new(db);
    let page = service.search(&SearchSpec::new().keyword("50%")).await?;

    let names: Vec<_> = page.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["50% off"]);

    Ok(())
}

/// Tests that an unknown ordering field is rejected on a reject-policy resource.
///
/// Expected: Err(AppError::Validation(UnknownOrderingFields(["bogusField"])))
#[tokio::test]
async fn reject_policy_names_unknown_field() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category(db).await?;

    let service = LegacyQueryService::<CategoryAdapter>::new(db);
    let result = service
        .search(&SearchSpec::new().order_by("bogusField"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::UnknownOrderingFields(fields)))
            if fields == vec!["bogusField".to_string()]
    ));

    Ok(())
}

/// Tests that an unknown ordering field is dropped on a drop-policy resource.
///
/// Expected: Ok in the default order (position ascending)
#[tokio::test]
async fn drop_policy_uses_default_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    FaqFactory::new(db).question("third").position(3).build().await?;
    FaqFactory::new(db).question("first").position(1).build().await?;
    FaqFactory::new(db).question("second").position(2).build().await?;

    let service = LegacyQueryService::<FaqAdapter>::new(db);
    let page = service
        .search(&SearchSpec::new().order_by("bogusField"))
        .await?;

    let questions: Vec<_> = page.items.iter().map(|f| f.question.as_str()).collect();
    assert_eq!(questions, vec!["first", "second", "third"]);
    assert_eq!(page.messages, Some(vec![]));

    Ok(())
}

/// Tests descending order through a renamed legacy field.
///
/// Expected: Ok sorted by position descending
#[tokio::test]
async fn orders_by_renamed_field_descending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    FaqFactory::new(db).question("low").position(1).build().await?;
    FaqFactory::new(db).question("high").position(9).build().await?;

    let service = LegacyQueryService::<FaqAdapter>::new(db);
    let page = service
        .search(&SearchSpec::new().order_by("-sortOrder"))
        .await?;

    let questions: Vec<_> = page.items.iter().map(|f| f.question.as_str()).collect();
    assert_eq!(questions, vec!["high", "low"]);

    Ok(())
}

/// Tests the numeric category type advanced field.
///
/// Expected: Ok with only categories of type 2
#[tokio::test]
async fn filters_categories_by_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CategoryFactory::new(db).kind(1).build().await?;
    CategoryFactory::new(db).kind(2).build().await?;
    CategoryFactory::new(db).kind(2).build().await?;

    let service = LegacyQueryService::<CategoryAdapter>::new(db);
    let page = service
        .search(&SearchSpec::new().advanced_field("type", "2"))
        .await?;

    assert_eq!(page.total_count, 2);
    assert!(page.items.iter().all(|c| c.kind == 2));

    Ok(())
}

/// Tests that a non-numeric category type is rejected.
///
/// Expected: Err(AppError::Validation(InvalidFieldValue))
#[tokio::test]
async fn rejects_non_numeric_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LegacyQueryService::<CategoryAdapter>::new(db);
    let result = service
        .search(&SearchSpec::new().advanced_field("type", "plumbing"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::InvalidFieldValue { field, .. })) if field == "type"
    ));

    Ok(())
}

/// Tests that advanced fields are ignored by resources that do not interpret them.
///
/// Expected: Ok with every faq
#[tokio::test]
async fn ignores_uninterpreted_advanced_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_faq(db).await?;
    factory::create_faq(db).await?;

    let service = LegacyQueryService::<FaqAdapter>::new(db);
    let page = service
        .search(&SearchSpec::new().advanced_field("type", "anything"))
        .await?;

    assert_eq!(page.total_count, 2);

    Ok(())
}

/// Tests that validation happens before the store is queried.
///
/// The database has no tables, so any query would fail with a database error.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn validates_before_touching_store() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let db = test.database().await.unwrap();

    let service = LegacyQueryService::<CategoryAdapter>::new(db);
    let result = service
        .search(&SearchSpec::new().order_by("bogusField"))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that a missing table surfaces as a store failure.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn store_failure_propagates() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let db = test.database().await.unwrap();

    let service = LegacyQueryService::<CategoryAdapter>::new(db);
    let result = service.search(&SearchSpec::new()).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

/// Tests that a page past the end is empty but keeps its metadata.
///
/// Expected: Ok with no items, current page 5 and a previous page
#[tokio::test]
async fn page_past_end_is_empty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_ticket(db).await?;
    }

    let service = LegacyQueryService::<TicketAdapter>::new(db);
    let page = service.search(&SearchSpec::new().page(5, 2)).await?;

    assert!(page.items.is_empty());
    assert_eq!(page.current_page, 5);
    assert_eq!(page.total_pages, 2);
    assert!(page.has_previous_page);
    assert!(!page.has_next_page);

    Ok(())
}

/// Tests that the largest page number is served as an empty page.
///
/// Expected: Ok with no items, the requested page and the real totals
#[tokio::test]
async fn largest_page_number_is_empty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category(db).await?;

    let service = LegacyQueryService::<CategoryAdapter>::new(db);
    let page = service.search(&SearchSpec::new().page(i64::MAX, 20)).await?;

    assert!(page.items.is_empty());
    assert_eq!(page.current_page, i64::MAX as u64);
    assert_eq!(page.total_count, 1);
    assert_eq!(page.total_pages, 1);
    assert!(page.has_previous_page);
    assert!(!page.has_next_page);

    Ok(())
}

/// Tests that a keyword with non-ASCII letters matches its stored text.
///
/// Expected: Ok matching "École" for the exact keyword and an upper-cased one
#[tokio::test]
async fn non_ascii_keyword_matches_stored_text() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CategoryFactory::new(db).name("École").build().await?;
    CategoryFactory::new(db).name("Garage").build().await?;

    let service = LegacyQueryService::<CategoryAdapter>::new(db);

    for keyword in ["École", "ÉCOLE", "cole"] {
        let page = service.search(&SearchSpec::new().keyword(keyword)).await?;

        let names: Vec<_> = page.items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["École"], "keyword {keyword}");
    }

    Ok(())
}
