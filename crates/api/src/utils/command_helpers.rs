//! Command execution helpers
//!
//! Removes the timing and logging boilerplate from individual commands.

use std::future::Future;
use std::time::Instant;

use solarquote_domain::{Result as DomainResult, Role, Session, SolarQuoteError};

use crate::utils::logging::{error_label, log_command_execution};

/// Execute a command, timing it and logging the outcome
///
/// ```rust,ignore
/// pub async fn list_team(ctx: &AppContext, session: &Session) -> Result<Vec<Salesperson>> {
///     execute_command("admin::list_team", || async {
///         require_admin(session)?;
///         ctx.team.list()
///     })
///     .await
/// }
/// ```
pub async fn execute_command<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = command_fn().await;

    let error_type = result.as_ref().err().map(error_label);
    log_command_execution(command_name, start.elapsed(), result.is_ok(), error_type);

    result
}

/// Reject sessions that are not administrators.
pub fn require_admin(session: &Session) -> DomainResult<()> {
    match session.role {
        Role::Admin => Ok(()),
        Role::Salesperson => {
            Err(SolarQuoteError::Auth("administrator access required".to_string()))
        }
    }
}

/// Team member id behind a salesperson session.
pub fn require_salesperson(session: &Session) -> DomainResult<&str> {
    match (session.role, session.salesperson_id.as_deref()) {
        (Role::Salesperson, Some(id)) => Ok(id),
        (Role::Salesperson, None) => {
            Err(SolarQuoteError::Auth("session is not linked to a team member".to_string()))
        }
        (Role::Admin, _) => Err(SolarQuoteError::Auth("salesperson access required".to_string())),
    }
}
