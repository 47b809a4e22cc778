use crate::{
    data::repository::ResourceRepository,
    model::{ordering::OrderKey, page::PageWindow},
    resource::CategoryAdapter,
};
use entity::category::Column;
use sea_orm::{ColumnTrait, Condition, DbErr};
use test_utils::{builder::TestBuilder, factory::category::CategoryFactory};
use uuid::Uuid;

mod count;
mod fetch;
mod get_by_canonical_id;
