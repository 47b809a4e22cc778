use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::marker::PhantomData;
use uuid::Uuid;

use crate::{
    model::{ordering::OrderKey, page::PageWindow},
    resource::adapter::{ColumnOf, ResourceAdapter},
};

pub struct ResourceRepository<'a, A> {
    db: &'a DatabaseConnection,
    _adapter: PhantomData<A>,
}

impl<'a, A: ResourceAdapter> ResourceRepository<'a, A> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            _adapter: PhantomData,
        }
    }

    /// Counts records matching `condition`.
    pub async fn count(&self, condition: Condition) -> Result<u64, DbErr> {
        A::Entity::find().filter(condition).count(self.db).await
    }

    /// Fetches the records matching `condition` within `window`.
    ///
    /// Rows are sorted by `ordering` and then by primary key so that pages never
    /// overlap when ordering columns tie.
    ///
    /// # Arguments
    /// - `condition` - Filter built from the search request
    /// - `ordering` - Sort keys in priority order
    /// - `window` - Offset and limit of the page, or every row
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching records of the page
    /// - `Err(DbErr)` - Database error during query
    pub async fn fetch(
        &self,
        condition: Condition,
        ordering: &[OrderKey<ColumnOf<A>>],
        window: PageWindow,
    ) -> Result<Vec<A::Model>, DbErr> {
        let mut query = A::Entity::find().filter(condition);

        for key in ordering {
            query = query.order_by(key.column, key.dir.into());
        }
        query = query.order_by_asc(A::id_column());

        // Offset and limit are bound as signed 64-bit values.
        if let PageWindow::Slice { offset, limit } = window {
            query = query
                .offset(offset.min(i64::MAX as u64))
                .limit(limit.min(i64::MAX as u64));
        }

        query.all(self.db).await
    }

    /// Gets a record by its canonical identifier.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Record found
    /// - `Ok(None)` - No record with that identifier
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_canonical_id(&self, id: Uuid) -> Result<Option<A::Model>, DbErr> {
        A::Entity::find()
            .filter(A::id_column().eq(id))
            .one(self.db)
            .await
    }
}
