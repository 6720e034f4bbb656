use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    seed::value_objects::{SeedMenuInput, SeedOutcome},
};

#[cfg_attr(test, mockall::automock)]
pub trait SeedService: Send + Sync {
    fn seed_menu(
        &self,
        input: SeedMenuInput,
    ) -> impl Future<Output = Result<SeedOutcome, CoreError>> + Send;
}
