use super::*;

/// Tests filtering tickets by the legacy identifier of their category.
///
/// Expected: Ok with only the tickets of that category
#[tokio::test]
async fn filters_tickets_by_legacy_category_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, ticket) = factory::helpers::create_ticket_with_category(db).await?;
    factory::helpers::create_ticket_with_category(db).await?;
    factory::create_ticket(db).await?;

    let service = LegacyQueryService::<TicketAdapter>::new(db);
    let page = service
        .search(&SearchSpec::new().filter("categoryId", virtualize(category.id).to_string()))
        .await?;

    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].id, ticket.id);

    Ok(())
}

/// Tests filtering tickets by the canonical identifier of their category.
///
/// Expected: Ok with only the tickets of that category
#[tokio::test]
async fn filters_tickets_by_canonical_category_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    for _ in 0..2 {
        TicketFactory::new(db)
            .category_id(Some(category.id))
            .build()
            .await?;
    }
    factory::create_ticket(db).await?;

    let service = LegacyQueryService::<TicketAdapter>::new(db);
    let page = service
        .search(&SearchSpec::new().filter("categoryId", category.id.to_string()))
        .await?;

    assert_eq!(page.total_count, 2);
    assert!(page
        .items
        .iter()
        .all(|t| t.category_id == Some(category.id)));

    Ok(())
}

/// Tests that an unresolvable reference yields an empty page rather than an error.
///
/// Expected: Ok with no items
#[tokio::test]
async fn unresolved_reference_matches_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_ticket_with_category(db).await?;

    let service = LegacyQueryService::<TicketAdapter>::new(db);

    for raw in ["9999999", "garbage"] {
        let page = service
            .search(&SearchSpec::new().filter("categoryId", raw))
            .await?;

        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
    }

    Ok(())
}

/// Tests filtering addresses by the legacy identifier of their zone.
///
/// Expected: Ok with only the address in that zone
#[tokio::test]
async fn filters_addresses_by_legacy_zone_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (zone, address) = factory::helpers::create_address_in_zone(db).await?;
    factory::helpers::create_address_in_zone(db).await?;

    let service = LegacyQueryService::<AddressAdapter>::new(db);
    let page = service
        .search(&SearchSpec::new().filter("zoneId", virtualize(zone.id).to_string()))
        .await?;

    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].id, address.id);
    assert_eq!(page.messages, Some(vec![]));

    Ok(())
}

/// Tests filtering repair requests by the legacy identifier of their ticket.
///
/// Expected: Ok with only the repair requests of that ticket
#[tokio::test]
async fn filters_repair_requests_by_legacy_ticket_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ticket = factory::create_ticket(db).await?;
    let other = factory::create_ticket(db).await?;
    let request = RepairRequestFactory::new(db)
        .ticket_id(Some(ticket.id))
        .build()
        .await?;
    RepairRequestFactory::new(db)
        .ticket_id(Some(other.id))
        .build()
        .await?;

    let service = LegacyQueryService::<RepairRequestAdapter>::new(db);
    let page = service
        .search(&SearchSpec::new().filter("ticketId", virtualize(ticket.id).to_string()))
        .await?;

    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].id, request.id);

    Ok(())
}

/// Tests that reference filters combine with the keyword predicate.
///
/// Expected: Ok with the matching ticket of the category only
#[tokio::test]
async fn combines_reference_filter_with_keyword() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let leak = TicketFactory::new(db)
        .category_id(Some(category.id))
        .subject("Kitchen leak")
        .build()
        .await?;
    TicketFactory::new(db)
        .category_id(Some(category.id))
        .subject("Broken socket")
        .build()
        .await?;
    TicketFactory::new(db).subject("Bathroom leak").build().await?;

    let service = LegacyQueryService::<TicketAdapter>::new(db).with_scan_options(ScanOptions {
        batch_size: 1,
        collision: CollisionPolicy::FirstMatch,
    });
    let page = service
        .search(
            &SearchSpec::new()
                .keyword("LEAK")
                .filter("categoryId", virtualize(category.id).to_string()),
        )
        .await?;

    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].id, leak.id);

    Ok(())
}

/// Tests that unpaged zone listings ignore unknown filters and report every zone.
///
/// Expected: Ok with both zones and null messages
#[tokio::test]
async fn ignores_unknown_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ZoneFactory::new(db).build().await?;
    ZoneFactory::new(db).active(false).build().await?;

    let service = LegacyQueryService::<ZoneAdapter>::new(db);
    let page = service
        .search(&SearchSpec::new().filter("cityId", "42"))
        .await?;

    assert_eq!(page.total_count, 2);
    assert_eq!(page.page_size, 2);
    assert_eq!(page.messages, None);

    Ok(())
}
