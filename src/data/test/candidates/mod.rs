use crate::{
    data::candidates::AdapterCandidates,
    resource::{CategoryAdapter, ZoneAdapter},
    service::identifier::CandidateSource,
};
use sea_orm::DbErr;
use std::ops::ControlFlow;
use test_utils::{
    builder::TestBuilder,
    factory::{category::CategoryFactory, zone::ZoneFactory},
};
use uuid::Uuid;
