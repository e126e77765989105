//! Administrator commands: team, assignment, oversight, inventory, pricing

use solarquote_core::{team_workload, AdminStats, LeadFilter, SalespersonWorkload};
use solarquote_domain::{
    HardwareDraft, HardwareItem, HardwareKind, Lead, PricingRule, PricingRules,
    Result as DomainResult, Salesperson, SalespersonForm, Session,
};

use crate::context::AppContext;
use crate::utils::command_helpers::{execute_command, require_admin};

// =============================================================================
// Sales team
// =============================================================================

/// Full roster, active or not.
pub async fn list_team(ctx: &AppContext, session: &Session) -> DomainResult<Vec<Salesperson>> {
    execute_command("admin::list_team", || async {
        require_admin(session)?;
        ctx.team.list()
    })
    .await
}

/// Add a salesperson from the admin form.
pub async fn add_salesperson(
    ctx: &AppContext,
    session: &Session,
    form: SalespersonForm,
) -> DomainResult<Salesperson> {
    execute_command("admin::add_salesperson", || async {
        require_admin(session)?;
        ctx.team.add(&form)
    })
    .await
}

/// Edit a salesperson's contact details and target.
pub async fn update_salesperson(
    ctx: &AppContext,
    session: &Session,
    salesperson_id: &str,
    form: SalespersonForm,
) -> DomainResult<Salesperson> {
    execute_command("admin::update_salesperson", || async {
        require_admin(session)?;
        ctx.team.update(salesperson_id, &form)
    })
    .await
}

/// Activate or deactivate a salesperson.
pub async fn toggle_salesperson_active(
    ctx: &AppContext,
    session: &Session,
    salesperson_id: &str,
) -> DomainResult<Salesperson> {
    execute_command("admin::toggle_salesperson_active", || async {
        require_admin(session)?;
        ctx.team.toggle_active(salesperson_id)
    })
    .await
}

// =============================================================================
// Lead assignment and oversight
// =============================================================================

/// Leads nobody owns yet, in store order
pub async fn list_unassigned_leads(ctx: &AppContext, session: &Session) -> DomainResult<Vec<Lead>> {
    execute_command("admin::list_unassigned_leads", || async {
        require_admin(session)?;
        Ok(ctx.leads.list_all()?.into_iter().filter(Lead::is_unassigned).collect())
    })
    .await
}

/// Give an unassigned lead to an active salesperson.
pub async fn assign_lead(
    ctx: &AppContext,
    session: &Session,
    lead_id: &str,
    salesperson_id: &str,
) -> DomainResult<Lead> {
    execute_command("admin::assign_lead", || async {
        require_admin(session)?;
        ctx.leads.assign_lead(lead_id, salesperson_id)
    })
    .await
}

/// Move an assigned lead to another active salesperson.
pub async fn reassign_lead(
    ctx: &AppContext,
    session: &Session,
    lead_id: &str,
    salesperson_id: &str,
) -> DomainResult<Lead> {
    execute_command("admin::reassign_lead", || async {
        require_admin(session)?;
        ctx.leads.reassign_lead(lead_id, salesperson_id)
    })
    .await
}

/// Lead load per active salesperson
pub async fn team_workload_summary(
    ctx: &AppContext,
    session: &Session,
) -> DomainResult<Vec<SalespersonWorkload>> {
    execute_command("admin::team_workload_summary", || async {
        require_admin(session)?;
        Ok(team_workload(&ctx.leads.list_all()?, &ctx.team.list()?))
    })
    .await
}

/// Company-wide lead oversight with search, status, salesperson and date filters.
pub async fn oversee_leads(
    ctx: &AppContext,
    session: &Session,
    filter: LeadFilter,
) -> DomainResult<Vec<Lead>> {
    execute_command("admin::oversee_leads", || async {
        require_admin(session)?;
        ctx.leads.filter(&filter)
    })
    .await
}

/// Company-wide figures for the admin landing page.
pub async fn admin_overview(ctx: &AppContext, session: &Session) -> DomainResult<AdminStats> {
    execute_command("admin::admin_overview", || async {
        require_admin(session)?;
        Ok(AdminStats::compute(&ctx.leads.list_all()?, &ctx.team.list()?))
    })
    .await
}

// =============================================================================
// Inventory and pricing
// =============================================================================

/// Catalog items of one kind, in catalog order.
pub async fn list_hardware(
    ctx: &AppContext,
    session: &Session,
    kind: HardwareKind,
) -> DomainResult<Vec<HardwareItem>> {
    execute_command("admin::list_hardware", || async {
        require_admin(session)?;
        ctx.catalog.list_by_kind(kind)
    })
    .await
}

/// Add an item to the catalog.
pub async fn add_hardware_item(
    ctx: &AppContext,
    session: &Session,
    kind: HardwareKind,
    draft: HardwareDraft,
) -> DomainResult<HardwareItem> {
    execute_command("admin::add_hardware_item", || async {
        require_admin(session)?;
        ctx.catalog.add_item(kind, draft)
    })
    .await
}

/// Edit an existing catalog item in place.
pub async fn update_hardware_item(
    ctx: &AppContext,
    session: &Session,
    item_id: &str,
    draft: HardwareDraft,
) -> DomainResult<HardwareItem> {
    execute_command("admin::update_hardware_item", || async {
        require_admin(session)?;
        ctx.catalog.update_item(item_id, draft)
    })
    .await
}

/// Remove an item from the catalog.
pub async fn delete_hardware_item(
    ctx: &AppContext,
    session: &Session,
    item_id: &str,
) -> DomainResult<()> {
    execute_command("admin::delete_hardware_item", || async {
        require_admin(session)?;
        ctx.catalog.delete_item(item_id)
    })
    .await
}

/// Current rates; readable by every role since the quote builder needs them.
pub async fn get_pricing_rules(ctx: &AppContext) -> DomainResult<PricingRules> {
    execute_command("admin::get_pricing_rules", || async { ctx.catalog.pricing_rules() }).await
}

/// Change one pricing rate and return the updated rules.
pub async fn set_pricing_rule(
    ctx: &AppContext,
    session: &Session,
    rule: PricingRule,
    value: f64,
) -> DomainResult<PricingRules> {
    execute_command("admin::set_pricing_rule", || async {
        require_admin(session)?;
        ctx.catalog.set_pricing_rule(rule, value)
    })
    .await
}
