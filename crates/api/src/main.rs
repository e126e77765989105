//! SolarQuote - headless session runner
//!
//! Boots a session the way the dashboard does and walks one salesperson
//! quotation plus the admin overview, logging each step.

use anyhow::Context;
use solarquote_domain::{LeadStatus, Role};
use solarquote_lib::utils::logging::init_tracing;
use solarquote_lib::{
    admin_overview, default_quotation_config, open_dashboard, quick_login, save_quotation,
    AppContext, DashboardView,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = dotenvy::dotenv();

    let config = solarquote_infra::config::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    match env_file {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(e) => warn!(error = %e, "Could not load .env file"),
    }

    let ctx = AppContext::new_with_config(config);
    info!("SolarQuote session starting...");

    let sales = quick_login(&ctx, Role::Salesperson).await?;
    let lead_id = match open_dashboard(&ctx, &sales).await? {
        DashboardView::Salesperson(dashboard) => {
            info!(
                user = %dashboard.display_name,
                leads = dashboard.stats.total_leads,
                pipeline_value = dashboard.stats.total_value,
                "Salesperson dashboard"
            );
            dashboard.leads.first().map(|lead| lead.id.clone())
        }
        DashboardView::Admin(_) => None,
    };

    if let Some(lead_id) = lead_id {
        let mut quote = default_quotation_config(&ctx).await?;
        quote.set_battery_backup(true);
        let outcome = save_quotation(&ctx, &sales, &lead_id, &quote, LeadStatus::Quoted).await?;
        info!(
            lead_id = %outcome.lead.id,
            system_size_kw = outcome.quotation.system_size_kw,
            total = outcome.quotation.total_project_cost,
            payback_years = ?outcome.quotation.payback_years(),
            notice = %outcome.notice.message,
            "Quotation saved"
        );
    } else {
        info!("No leads assigned; skipping quotation");
    }

    let admin = quick_login(&ctx, Role::Admin).await?;
    let overview = admin_overview(&ctx, &admin).await?;
    info!(overview = %serde_json::to_string(&overview)?, "Admin overview");

    Ok(())
}
