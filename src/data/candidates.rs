use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::{marker::PhantomData, ops::ControlFlow};
use uuid::Uuid;

use crate::{resource::adapter::ResourceAdapter, service::identifier::CandidateSource};

/// Candidate source reading an adapter's identifiers in primary key order.
///
/// Identifiers are read in keyset-paginated batches so a scan that stops early only
/// loads the batches it visited. The adapter's scan filter is applied to every batch.
pub struct AdapterCandidates<'a, A> {
    db: &'a DatabaseConnection,
    batch_size: u64,
    _adapter: PhantomData<A>,
}

impl<'a, A: ResourceAdapter> AdapterCandidates<'a, A> {
    pub fn new(db: &'a DatabaseConnection, batch_size: u64) -> Self {
        Self {
            db,
            batch_size: batch_size.max(1),
            _adapter: PhantomData,
        }
    }

    async fn batch_after(&self, after: Option<Uuid>) -> Result<Vec<Uuid>, DbErr> {
        let id_column = A::id_column();

        let mut query = A::Entity::find()
            .select_only()
            .column(id_column)
            .filter(A::scan_filter());

        if let Some(last) = after {
            query = query.filter(id_column.gt(last));
        }

        query
            .order_by_asc(id_column)
            .limit(self.batch_size)
            .into_tuple::<Uuid>()
            .all(self.db)
            .await
    }
}

#[async_trait]
impl<'a, A: ResourceAdapter> CandidateSource for AdapterCandidates<'a, A> {
    async fn for_each_candidate(
        &self,
        visit: &mut (dyn FnMut(Uuid) -> ControlFlow<()> + Send),
    ) -> Result<(), DbErr> {
        let mut after = None;

        loop {
            let batch = self.batch_after(after).await?;

            for id in &batch {
                if visit(*id).is_break() {
                    return Ok(());
                }
            }

            if (batch.len() as u64) < self.batch_size {
                return Ok(());
            }
            after = batch.last().copied();
        }
    }
}
