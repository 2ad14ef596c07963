//! Database connectivity check.
//! Used by: handlers::health, health::report, state.

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;

use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::health::report::HealthResult;

pub const CONNECTED_MESSAGE: &str = "Database connection successful";

/// One round-trip against the database: connect, ping, release.
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn probe(&self, config: &DatabaseConfig) -> Result<()>;
}

/// An open connection that can be pinged once and then released.
#[async_trait]
pub trait ProbeConnection: Send + Sized {
    async fn ping(&mut self) -> Result<()>;
    async fn close(self) -> Result<()>;
}

#[async_trait]
impl ProbeConnection for MySqlConnection {
    async fn ping(&mut self) -> Result<()> {
        Connection::ping(self).await?;
        Ok(())
    }

    async fn close(self) -> Result<()> {
        Connection::close(self).await?;
        Ok(())
    }
}

/// Pings then closes `conn`. Close runs whether or not the ping succeeded;
/// a ping failure wins over a close failure.
pub async fn ping_and_close<C: ProbeConnection>(mut conn: C) -> Result<()> {
    let ping = conn.ping().await;
    let close = conn.close().await;
    ping?;
    close
}

/// Opens a fresh MySQL connection per call; nothing is pooled or reused.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlProbe;

#[async_trait]
impl DatabaseProbe for MySqlProbe {
    async fn probe(&self, config: &DatabaseConfig) -> Result<()> {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);

        let conn = MySqlConnection::connect_with(&options).await?;
        ping_and_close(conn).await
    }
}

/// Never fails: any probe error becomes `Unhealthy` carrying the error text.
pub async fn check_database(probe: &dyn DatabaseProbe, config: &DatabaseConfig) -> HealthResult {
    let result = match probe.probe(config).await {
        Ok(()) => HealthResult::Healthy {
            message: CONNECTED_MESSAGE.into(),
        },
        Err(e) => HealthResult::Unhealthy {
            message: e.to_string(),
        },
    };

    if result.is_healthy() {
        tracing::debug!(host = %config.host, port = config.port, "database probe succeeded");
    } else {
        tracing::warn!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            error = result.message(),
            "database probe failed"
        );
    }
    result
}


#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::testing::{ScriptedConnection, ScriptedProbe, StaticProbe};
    use super::*;
    use crate::error::Error;

    fn unreachable_config() -> DatabaseConfig {
        DatabaseConfig {
            host: "127.0.0.1".into(),
            port: 1,
            ..DatabaseConfig::default()
        }
    }

    #[tokio::test]
    async fn successful_probe_is_healthy() {
        let probe = StaticProbe::ok();
        let result = check_database(&probe, &DatabaseConfig::default()).await;
        assert_eq!(
            result,
            HealthResult::Healthy { message: CONNECTED_MESSAGE.into() }
        );
        assert_eq!(probe.calls(), 1);
    }

    #[tokio::test]
    async fn failed_probe_keeps_driver_message() {
        let probe = StaticProbe::failing("Access denied for user 'admin'@'10.0.0.5'");
        let result = check_database(&probe, &DatabaseConfig::default()).await;
        assert_eq!(
            result,
            HealthResult::Unhealthy {
                message: "Access denied for user 'admin'@'10.0.0.5'".into()
            }
        );
    }

    #[tokio::test]
    async fn each_check_is_a_fresh_attempt() {
        let probe = StaticProbe::ok();
        let config = DatabaseConfig::default();
        check_database(&probe, &config).await;
        check_database(&probe, &config).await;
        assert_eq!(probe.calls(), 2);
    }

    fn scripted(
        ping_error: Option<&'static str>,
        close_error: Option<&'static str>,
    ) -> (ScriptedConnection, Arc<AtomicBool>) {
        let closed = Arc::new(AtomicBool::new(false));
        let conn = ScriptedConnection { ping_error, close_error, closed: closed.clone() };
        (conn, closed)
    }

    #[tokio::test]
    async fn failed_ping_still_closes_and_reports_ping_error() {
        let (conn, closed) = scripted(Some("Lost connection to MySQL server"), None);
        let result = ping_and_close(conn).await;
        assert!(closed.load(Ordering::Relaxed));
        assert!(matches!(
            result,
            Err(Error::DependencyUnavailable(ref m)) if m == "Lost connection to MySQL server"
        ));
    }

    #[tokio::test]
    async fn ping_error_wins_over_close_error() {
        let (conn, closed) = scripted(Some("ping failed"), Some("close failed"));
        let result = ping_and_close(conn).await;
        assert!(closed.load(Ordering::Relaxed));
        assert!(matches!(result, Err(Error::DependencyUnavailable(ref m)) if m == "ping failed"));
    }

    #[tokio::test]
    async fn clean_ping_and_close_succeeds() {
        let (conn, closed) = scripted(None, None);
        assert!(ping_and_close(conn).await.is_ok());
        assert!(closed.load(Ordering::Relaxed));
    }

    #[tokio::test]
    async fn failed_close_after_good_ping_is_unhealthy() {
        let closed = Arc::new(AtomicBool::new(false));
        let probe = ScriptedProbe {
            ping_error: None,
            close_error: Some("broken pipe"),
            closed: closed.clone(),
        };
        let result = check_database(&probe, &DatabaseConfig::default()).await;
        assert!(closed.load(Ordering::Relaxed));
        assert_eq!(result, HealthResult::Unhealthy { message: "broken pipe".into() });
    }

    #[tokio::test]
    async fn mysql_probe_reports_refused_port_as_unhealthy() {
        let result = check_database(&MySqlProbe, &unreachable_config()).await;
        assert!(!result.is_healthy());
        assert!(!result.message().is_empty());
    }

    #[tokio::test]
    async fn mysql_probe_returns_dependency_error() {
        let result = MySqlProbe.probe(&unreachable_config()).await;
        assert!(matches!(result, Err(Error::DependencyUnavailable(_))));
    }
}
