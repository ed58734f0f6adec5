use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::core::{
    customer::CustomerClass,
    engine::Quote,
    region::RegionSunHours,
    tariff::{Baseline, BracketCharge, Tariff, TariffBracket},
    topology::SystemTopology,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn format_range(bracket: &TariffBracket) -> String {
    match bracket.max {
        Some(max) => format!("{:.0}–{:.0}", bracket.min.0, max.0),
        None => format!("{:.0}+", bracket.min.0),
    }
}

pub fn build_baseline_table(customer_class: CustomerClass, baseline: &Baseline) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Customer", "Consumption", "Bill", "Average rate"]);
    table.add_row(vec![
        Cell::new(customer_class.label()),
        Cell::new(baseline.consumption).set_alignment(CellAlignment::Right),
        Cell::new(baseline.original_bill).set_alignment(CellAlignment::Right),
        Cell::new(baseline.average_rate)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Dim),
    ]);
    table
}

/// Per-bracket charges, before tax.
pub fn build_breakdown_table(charges: impl IntoIterator<Item = BracketCharge>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Bracket", "Rate", "Consumption", "Cost"]);
    for charge in charges {
        table.add_row(vec![
            Cell::new(format_range(&charge.bracket)),
            Cell::new(charge.bracket.rate).add_attribute(Attribute::Dim),
            Cell::new(charge.consumption).set_alignment(CellAlignment::Right),
            Cell::new(charge.cost).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Zero payback means it could not be computed.
fn payback_cell(payback_years: f64) -> Cell {
    if payback_years > 0.0 {
        Cell::new(format!("{payback_years:.1} years"))
    } else {
        Cell::new("unknown").add_attribute(Attribute::Dim)
    }
}

pub fn build_quote_table(quote: &Quote, topology: SystemTopology) -> Table {
    let sizing = &quote.sizing;
    let financials = &quote.financials;

    let mut table = new_table();
    let mut add_row = |label: &str, value: Cell| {
        table.add_row(vec![Cell::new(label), value.set_alignment(CellAlignment::Right)]);
    };
    add_row("Topology", Cell::new(topology));
    add_row("Sun hours", Cell::new(quote.sun_hours).add_attribute(Attribute::Dim));
    add_row("Capacity", Cell::new(sizing.recommended_capacity).add_attribute(Attribute::Bold));
    if topology.has_storage() {
        add_row("Storage", Cell::new(sizing.storage_capacity));
    }
    add_row("Panels", Cell::new(financials.number_of_panels));
    add_row("Area", Cell::new(financials.required_area));
    add_row("Generation", Cell::new(sizing.monthly_generation));
    add_row("Self-consumed", Cell::new(sizing.effective_savings));
    add_row("Investment", Cell::new(financials.total_investment));
    add_row("Monthly savings", Cell::new(financials.monthly_savings).fg(Color::Green));
    add_row("Annual savings", Cell::new(financials.annual_savings).fg(Color::Green));
    add_row("New bill", Cell::new(financials.new_bill));
    add_row("Payback", payback_cell(financials.payback_years));
    add_row("First-year ROI", Cell::new(format!("{:.1} %", financials.roi_first_year_percent)));
    add_row("CO₂ avoided", Cell::new(format!("{} per year", quote.impact.co2_reduction_yearly)));
    add_row("Trees", Cell::new(format!("{:.1}", quote.impact.tree_equivalent)));
    table
}

pub fn build_tariff_table(tariff: &Tariff) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Customer", "Consumption", "Rate"]);
    for bracket in tariff.household.iter() {
        table.add_row(vec![
            Cell::new(CustomerClass::Household.label()),
            Cell::new(format_range(bracket)),
            Cell::new(bracket.rate).set_alignment(CellAlignment::Right),
        ]);
    }
    for (class, rate) in [
        (CustomerClass::Business, tariff.flat_rates.business),
        (CustomerClass::Manufacturing, tariff.flat_rates.manufacturing),
        (CustomerClass::Administrative, tariff.flat_rates.administrative),
    ] {
        table.add_row(vec![
            Cell::new(class.label()),
            Cell::new("any").add_attribute(Attribute::Dim),
            Cell::new(rate).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_regions_table(regions: &RegionSunHours) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Region", "Sun hours"]);
    for (region, sun_hours) in regions.iter() {
        table.add_row(vec![
            Cell::new(region),
            Cell::new(sun_hours).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("other").add_attribute(Attribute::Dim),
        Cell::new(regions.fallback()).set_alignment(CellAlignment::Right),
    ]);
    table
}
