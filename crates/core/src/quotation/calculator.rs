//! Quotation cost and savings calculator
//!
//! Derives system size, the seven priced terms, generation and payback from
//! a [`QuotationConfig`], the global [`PricingRules`] and the hardware
//! catalog. The computation is total: a selection that does not resolve to
//! a catalog item of the right kind prices at zero instead of failing.

use solarquote_domain::constants::{
    DAYS_PER_MONTH, GENERATION_HOURS_PER_DAY, KW_PER_LABOUR_DAY, MONTHS_PER_YEAR, TARIFF_PER_KWH,
    WATTS_PER_KW,
};
use solarquote_domain::{
    CostBreakdown, HardwareItem, HardwareKind, Payback, PricingRules, QuotationConfig,
    QuotationResult,
};

/// Resolve a selection id to a catalog item of the expected kind.
pub fn find_item<'a>(
    catalog: &'a [HardwareItem],
    id: &str,
    kind: HardwareKind,
) -> Option<&'a HardwareItem> {
    catalog.iter().find(|item| item.id == id && item.kind == kind)
}

/// `panel_count × capacity(W) / 1000`, or zero without a panel.
pub fn system_size_kw(panel_count: u32, panel: Option<&HardwareItem>) -> f64 {
    panel.map_or(0.0, |panel| f64::from(panel_count) * panel.capacity / WATTS_PER_KW)
}

/// Whole labour days: one per 2 kW, rounded up.
pub fn labour_days(system_size_kw: f64) -> u32 {
    if system_size_kw <= 0.0 {
        return 0;
    }
    // Sizes are bounded by 40 panels, far below u32::MAX days.
    (system_size_kw / KW_PER_LABOUR_DAY).ceil() as u32
}

/// Payback is only defined when the system saves something each month.
pub fn payback(total_project_cost: f64, monthly_savings: f64) -> Payback {
    if monthly_savings > 0.0 {
        let months = total_project_cost / monthly_savings;
        Payback::Finite { months, years: months / MONTHS_PER_YEAR }
    } else {
        Payback::Undefined
    }
}

/// Compute the full quotation for one configuration.
pub fn calculate(
    config: &QuotationConfig,
    rules: &PricingRules,
    catalog: &[HardwareItem],
) -> QuotationResult {
    let panel = find_item(catalog, config.panel_type(), HardwareKind::Panel);
    let battery = find_item(catalog, config.battery_type(), HardwareKind::Battery);
    let inverter = find_item(catalog, config.inverter_type(), HardwareKind::Inverter);

    let system_size_kw = system_size_kw(config.panel_count(), panel);
    let labour_days = labour_days(system_size_kw);

    let breakdown = CostBreakdown {
        panel_cost: panel.map_or(0.0, |p| p.price * f64::from(config.panel_count())),
        battery_cost: match battery {
            Some(b) if config.battery_backup() => b.price,
            _ => 0.0,
        },
        // Every system needs an inverter; there is no toggle.
        inverter_cost: inverter.map_or(0.0, |i| i.price),
        installation_cost: system_size_kw * rules.base_installation_rate,
        labour_cost: f64::from(labour_days) * rules.labour_cost_per_day,
        bird_net_cost: if config.bird_net() {
            f64::from(config.bird_net_panel_count()) * rules.bird_net_cost_per_panel
        } else {
            0.0
        },
        scaffolding_cost: if config.scaffolding_required() {
            config.scaffolding_height() * rules.scaffolding_cost_per_meter
        } else {
            0.0
        },
    };
    let total_project_cost = breakdown.total();

    let daily_generation_kwh = system_size_kw * GENERATION_HOURS_PER_DAY;
    let monthly_generation_kwh = daily_generation_kwh * DAYS_PER_MONTH;
    let monthly_savings = monthly_generation_kwh * TARIFF_PER_KWH;
    let annual_savings = monthly_savings * MONTHS_PER_YEAR;

    QuotationResult {
        system_size_kw,
        labour_days,
        breakdown,
        total_project_cost,
        daily_generation_kwh,
        monthly_generation_kwh,
        monthly_savings,
        annual_savings,
        payback: payback(total_project_cost, monthly_savings),
    }
}
