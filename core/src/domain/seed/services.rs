use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    menu::ports::{LLMClient, MenuItemRepository},
    seed::{
        dataset::{menu_dataset, menu_dataset_len},
        ports::SeedService,
        value_objects::{SeedMenuInput, SeedOutcome, SeedPlan, SeedState},
    },
};

impl<M, HC, LLM> SeedService for Service<M, HC, LLM>
where
    M: MenuItemRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn seed_menu(&self, input: SeedMenuInput) -> Result<SeedOutcome, CoreError> {
        let existing = self.menu_item_repository.count().await?;
        let state = SeedState::from_count(existing, menu_dataset_len());
        let plan = state.plan(input.force);

        info!(?state, ?plan, force = input.force, "seeding menu");

        let outcome = match plan {
            SeedPlan::Skip => SeedOutcome::Skipped {
                existing: state.existing(),
            },
            SeedPlan::Insert => {
                let inserted = self.menu_item_repository.replace_all(menu_dataset()).await?;
                SeedOutcome::Seeded { inserted }
            }
            SeedPlan::Replace => {
                let inserted = self.menu_item_repository.replace_all(menu_dataset()).await?;
                SeedOutcome::Reseeded {
                    removed: state.existing(),
                    inserted,
                }
            }
        };

        info!(?outcome, "menu seeding finished");

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::{
        health::ports::MockHealthCheckRepository,
        menu::ports::{MockLLMClient, MockMenuItemRepository},
    };

    fn service(
        repository: MockMenuItemRepository,
    ) -> Service<MockMenuItemRepository, MockHealthCheckRepository, MockLLMClient> {
        Service::new(
            repository,
            MockHealthCheckRepository::new(),
            MockLLMClient::new(),
            Duration::from_secs(1),
        )
    }

    fn repository_with(count: u64, expect_replace: bool) -> MockMenuItemRepository {
        let mut repository = MockMenuItemRepository::new();
        repository
            .expect_count()
            .returning(move || Box::pin(async move { Ok(count) }));
        if expect_replace {
            repository
                .expect_replace_all()
                .withf(|items| items.len() as u64 == menu_dataset_len())
                .times(1)
                .returning(|items| {
                    let inserted = items.len() as u64;
                    Box::pin(async move { Ok(inserted) })
                });
        } else {
            repository.expect_replace_all().never();
        }
        repository
    }

    #[tokio::test]
    async fn test_seeds_empty_catalog() {
        let outcome = service(repository_with(0, true))
            .seed_menu(SeedMenuInput { force: false })
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SeedOutcome::Seeded {
                inserted: menu_dataset_len()
            }
        );
    }

    #[tokio::test]
    async fn test_reseeds_partial_catalog() {
        let outcome = service(repository_with(7, true))
            .seed_menu(SeedMenuInput { force: false })
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SeedOutcome::Reseeded {
                removed: 7,
                inserted: menu_dataset_len()
            }
        );
    }

    #[tokio::test]
    async fn test_skips_complete_catalog() {
        let outcome = service(repository_with(menu_dataset_len(), false))
            .seed_menu(SeedMenuInput { force: false })
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SeedOutcome::Skipped {
                existing: menu_dataset_len()
            }
        );
    }

    #[tokio::test]
    async fn test_force_reseeds_complete_catalog() {
        let outcome = service(repository_with(menu_dataset_len(), true))
            .seed_menu(SeedMenuInput { force: true })
            .await
            .unwrap();

        assert!(matches!(outcome, SeedOutcome::Reseeded { .. }));
    }
}
