use std::{sync::Arc, time::Duration};

use atelier_core_health_contracts::{HealthFeatureService, HealthStatus};
use atelier_email_contracts::EmailService;
use atelier_persistence_contracts::Database;
use atelier_shared_contracts::time::TimeService;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone, Default)]
pub struct HealthFeatureServiceImpl<Time, Db, Email> {
    time: Time,
    db: Db,
    email: Email,
    config: HealthFeatureConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
}

impl Default for HealthFeatureConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: DateTime<Utc>,
}

impl<Time, Db, Email> HealthFeatureServiceImpl<Time, Db, Email> {
    pub fn new(time: Time, db: Db, email: Email, config: HealthFeatureConfig) -> Self {
        Self {
            time,
            db,
            email,
            config,
            state: Default::default(),
        }
    }
}

impl<Time, Db, Email> HealthFeatureService for HealthFeatureServiceImpl<Time, Db, Email>
where
    Time: TimeService,
    Db: Database,
    Email: EmailService,
{
    async fn get_status(&self) -> HealthStatus {
        let now = self.time.now();
        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }

        let database = self
            .db
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping database: {err}"))
            .is_ok();

        let email = self
            .email
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping mail provider: {err}"))
            .is_ok();

        let status = HealthStatus { database, email };

        cache_guard
            .insert(CachedStatus {
                status,
                timestamp: now,
            })
            .status
    }
}

#[cfg(test)]
mod tests {
    use atelier_email_contracts::MockEmailService;
    use atelier_persistence_contracts::MockDatabase;
    use atelier_shared_contracts::time::MockTimeService;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn all_healthy() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let time = MockTimeService::new().with_now(now);

        let mut db = MockDatabase::new();
        db.expect_ping()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(()))));

        let email = MockEmailService::new().with_ping(true);

        let sut = HealthFeatureServiceImpl::new(time, db, email, Default::default());

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(
            result,
            HealthStatus {
                database: true,
                email: true,
            }
        );
    }

    #[tokio::test]
    async fn database_down() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let time = MockTimeService::new().with_now(now);

        let mut db = MockDatabase::new();
        db.expect_ping().once().return_once(|| {
            Box::pin(std::future::ready(Err(anyhow::anyhow!("connection refused"))))
        });

        let email = MockEmailService::new().with_ping(true);

        let sut = HealthFeatureServiceImpl::new(time, db, email, Default::default());

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(
            result,
            HealthStatus {
                database: false,
                email: true,
            }
        );
    }

    #[tokio::test]
    async fn cached_within_ttl() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        let mut time = MockTimeService::new();
        let mut times = [now, now + Duration::from_secs(10)].into_iter();
        time.expect_now().times(2).returning(move || times.next().unwrap());

        let mut db = MockDatabase::new();
        db.expect_ping()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(()))));

        // pinged exactly once despite two status requests
        let email = MockEmailService::new().with_ping(true);

        let sut = HealthFeatureServiceImpl::new(time, db, email, Default::default());

        // Act
        let first = sut.get_status().await;
        let second = sut.get_status().await;

        // Assert
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn cache_expires() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        let mut time = MockTimeService::new();
        let mut times = [now, now + Duration::from_secs(60)].into_iter();
        time.expect_now().times(2).returning(move || times.next().unwrap());

        let mut db = MockDatabase::new();
        db.expect_ping()
            .times(2)
            .returning(|| Box::pin(std::future::ready(Ok(()))));

        let mut email = MockEmailService::new();
        email
            .expect_ping()
            .times(2)
            .returning(|| Box::pin(std::future::ready(Ok(()))));

        let sut = HealthFeatureServiceImpl::new(time, db, email, Default::default());

        // Act
        let first = sut.get_status().await;
        let second = sut.get_status().await;

        // Assert
        assert_eq!(first, second);
    }
}
