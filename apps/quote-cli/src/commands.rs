//! # Command Handlers
//!
//! Each handler turns parsed arguments into a serializable report. Printing
//! happens in `main`.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};
use wedding_core::validation::validate_selection;
use wedding_core::{
    replay, CoreError, Discount, Money, PriceCalculator, PriceTable, Selection, Service,
    ServiceAction, Year,
};

use crate::cli::Commands;
use crate::config::QuoteConfig;
use crate::error::QuoteResult;

/// A priced selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReport {
    pub year: Year,
    pub selection: Selection,
    pub base_price: Money,
    pub final_price: Money,
    pub applied_discount: Option<Discount>,
}

/// One year of the price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableReport {
    pub year: Year,
    pub services: BTreeMap<Service, Money>,
    pub bundle: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Quote(QuoteReport),
    Table(TableReport),
}

/// Runs one subcommand.
pub fn run(command: &Commands, config: &QuoteConfig) -> QuoteResult<Report> {
    match command {
        Commands::Apply { year, actions } => {
            let year = resolve_year(*year, config)?;
            let actions = actions
                .iter()
                .map(|a| a.parse::<ServiceAction>())
                .collect::<Result<Vec<_>, CoreError>>()?;

            debug!(count = actions.len(), "Replaying actions");
            let selection = replay(&Selection::new(), actions);
            quote(selection, year).map(Report::Quote)
        }
        Commands::Price { year, services } => {
            let year = resolve_year(*year, config)?;
            let selection = services
                .iter()
                .map(|s| s.parse::<Service>())
                .collect::<Result<Selection, CoreError>>()?;

            validate_selection(&selection).map_err(CoreError::from)?;
            quote(selection, year).map(Report::Quote)
        }
        Commands::Table { year } => {
            let year = resolve_year(*year, config)?;
            table(PriceTable::standard(), year).map(Report::Table)
        }
    }
}

/// `--year` wins over the configured default.
fn resolve_year(flag: Option<u16>, config: &QuoteConfig) -> QuoteResult<Year> {
    match flag {
        Some(year) => Ok(Year::try_from(year)?),
        None => config.default_year(),
    }
}

fn quote(selection: Selection, year: Year) -> QuoteResult<QuoteReport> {
    let calculator = PriceCalculator::new(&selection, year);
    let result = calculator.calculate()?;
    let applied_discount = calculator.applied_discount()?;

    info!(
        year = %year,
        base = %result.base_price,
        final_price = %result.final_price,
        "Quote computed"
    );

    Ok(QuoteReport {
        year,
        base_price: result.base_price,
        final_price: result.final_price,
        applied_discount,
        selection,
    })
}

fn table(prices: &PriceTable, year: Year) -> QuoteResult<TableReport> {
    let services = Service::ALL
        .into_iter()
        .map(|service| prices.service_price(year, service).map(|price| (service, price)))
        .collect::<Result<BTreeMap<_, _>, CoreError>>()?;

    Ok(TableReport {
        year,
        services,
        bundle: prices.bundle_price(year)?,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
