use crate::{
    error::{auth::AuthError, AppError},
    service::lifecycle::LifecycleService,
};
use test_utils::builder::TestBuilder;
