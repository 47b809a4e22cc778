use sea_orm::{sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr};
use std::marker::PhantomData;
use uuid::Uuid;

use crate::{
    data::{candidates::AdapterCandidates, repository::ResourceRepository},
    error::AppError,
    model::{legacy_id::LegacyId, page::PageEnvelope, search::SearchSpec},
    resource::{self, adapter::ResourceAdapter},
    service::{
        envelope::EnvelopeBuilder,
        identifier::{self, LegacyIdIndex, ScanOptions},
        ordering, predicate,
    },
};

/// Serves legacy list, search and detail requests for one resource.
///
/// Created per request; holds no state besides the borrowed connection and options.
pub struct LegacyQueryService<'a, A> {
    db: &'a DatabaseConnection,
    scan: ScanOptions,
    index: Option<&'a LegacyIdIndex>,
    _adapter: PhantomData<A>,
}

impl<'a, A: ResourceAdapter> LegacyQueryService<'a, A> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            scan: ScanOptions::default(),
            index: None,
            _adapter: PhantomData,
        }
    }

    pub fn with_scan_options(mut self, scan: ScanOptions) -> Self {
        self.scan = scan;
        self
    }

    /// Resolves this resource's legacy identifiers from `index` instead of scanning.
    pub fn with_index(mut self, index: &'a LegacyIdIndex) -> Self {
        self.index = Some(index);
        self
    }

    /// Runs a list or search request.
    ///
    /// Page size, ordering and advanced fields are validated before the store is
    /// touched. Reference filters are then resolved, and the matching records are
    /// counted and fetched for the requested page.
    ///
    /// # Arguments
    /// - `spec` - Normalized search request
    ///
    /// # Returns
    /// - `Ok(PageEnvelope)` - The requested page of matching records
    /// - `Err(AppError::Validation)` - Rejected page size, ordering field or field value
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn search(&self, spec: &SearchSpec) -> Result<PageEnvelope<A::Model>, AppError> {
        let builder = EnvelopeBuilder::new(A::page_size_policy(), A::messages_policy());
        let request = builder.request(spec.page_number, spec.page_size)?;

        let order_keys = ordering::translate(
            &spec.ordering,
            &A::ordering_map(),
            A::ordering_policy(),
            &A::default_order(),
        )?;

        let advanced = A::advanced_field_filter(spec.advanced_fields())?;
        let keyword = predicate::compile(&A::searchable_columns(), spec).into_condition();
        let references = self.reference_condition(spec).await?;

        let condition = Condition::all().add(keyword).add(advanced).add(references);

        tracing::debug!(
            resource = %A::KIND,
            keyword = ?predicate::effective_keyword(spec),
            page = request.page_number,
            page_size = ?request.page_size,
            "searching legacy resource"
        );

        let repo = ResourceRepository::<A>::new(self.db);
        let total_count = repo.count(condition.clone()).await?;
        let window = EnvelopeBuilder::window(request);
        let items = if window.starts_after(total_count) {
            Vec::new()
        } else {
            repo.fetch(condition, &order_keys, window).await?
        };

        Ok(builder.build(items, total_count, request))
    }

    /// Gets one record by canonical or legacy identifier.
    ///
    /// # Returns
    /// - `Ok(Model)` - The record `raw_id` refers to
    /// - `Err(AppError::NotFound)` - No record matches `raw_id`
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn detail(&self, raw_id: &str) -> Result<A::Model, AppError> {
        let id = self.resolve(raw_id).await?;

        ResourceRepository::<A>::new(self.db)
            .get_by_canonical_id(id)
            .await?
            .ok_or_else(|| not_found::<A>(raw_id))
    }

    /// Resolves a raw identifier to the canonical identifier of this resource.
    ///
    /// A canonical identifier is returned as is without checking that the record
    /// exists.
    pub async fn resolve(&self, raw_id: &str) -> Result<Uuid, AppError> {
        let resolved = match self.index {
            Some(index) => index.resolve(raw_id),
            None => {
                let candidates = AdapterCandidates::<A>::new(self.db, self.scan.batch_size);
                identifier::resolve(raw_id, &candidates, self.scan.collision).await?
            }
        };

        resolved.ok_or_else(|| not_found::<A>(raw_id))
    }

    /// Legacy identifier renderers expose for `model`.
    pub fn legacy_id(&self, model: &A::Model) -> LegacyId {
        identifier::virtualize(A::canonical_id(model))
    }

    /// Condition for the reference filters present in `spec`.
    ///
    /// A reference that resolves to nothing yields a condition matching no record.
    async fn reference_condition(&self, spec: &SearchSpec) -> Result<Condition, DbErr> {
        let mut condition = Condition::all();

        for reference in A::reference_filters() {
            let Some(raw) = spec.filters.get(reference.name) else {
                continue;
            };

            let candidates = resource::candidates_for(self.db, reference.target, self.scan.batch_size);

            match identifier::resolve(raw, candidates.as_ref(), self.scan.collision).await? {
                Some(id) => condition = condition.add(reference.column.eq(id)),
                None => {
                    tracing::debug!(
                        filter = reference.name,
                        raw = raw.as_str(),
                        "reference filter did not resolve, matching nothing"
                    );
                    condition = condition.add(Expr::cust("1 = 0"));
                }
            }
        }

        Ok(condition)
    }
}

fn not_found<A: ResourceAdapter>(raw_id: &str) -> AppError {
    AppError::NotFound(format!("{} with id {} not found", A::KIND, raw_id.trim()))
}
