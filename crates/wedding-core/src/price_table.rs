//! # Price Table
//!
//! Static price data: one row per pricing year.
//!
//! ```text
//! ┌──────┬─────────────┬────────────────┬─────────┬─────────┬─────────┬────────┐
//! │ Year │ Photography │ VideoRecording │ Bluray  │ TwoDay  │ Session │ Bundle │
//! ├──────┼─────────────┼────────────────┼─────────┼─────────┼─────────┼────────┤
//! │ 2020 │    1700     │      1700      │   300   │   400   │   600   │  2200  │
//! │ 2021 │    1800     │      1800      │   300   │   400   │   600   │  2300  │
//! │ 2022 │    1900     │      1900      │   300   │   400   │   600   │  2500  │
//! └──────┴─────────────┴────────────────┴─────────┴─────────┴─────────┴────────┘
//! ```
//!
//! The bundle is the combined price of Photography + VideoRecording booked
//! together. It replaces both individual prices, it is never added on top.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Service, Year};

/// Prices for a single year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearPrices {
    pub year: Year,
    /// Individual service prices.
    pub services: &'static [(Service, Money)],
    /// Photography + VideoRecording bundle price.
    pub bundle: Money,
}

impl YearPrices {
    /// Returns the price of one service, if listed.
    pub fn service(&self, service: Service) -> Option<Money> {
        self.services
            .iter()
            .find(|(s, _)| *s == service)
            .map(|(_, price)| *price)
    }
}

/// Read-only price lookup, indexed by year then service.
///
/// The standard table is a `static`; every lookup borrows it immutably, so
/// any number of threads can read it at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTable {
    years: &'static [YearPrices],
}

impl PriceTable {
    /// Builds a table over `'static` rows.
    pub const fn new(years: &'static [YearPrices]) -> Self {
        PriceTable { years }
    }

    /// The published price list.
    pub fn standard() -> &'static PriceTable {
        &STANDARD
    }

    /// Returns the row for `year`, if present.
    pub fn year(&self, year: Year) -> Option<&YearPrices> {
        self.years.iter().find(|row| row.year == year)
    }

    /// Looks up the individual price of a service.
    ///
    /// ## Errors
    /// [`CoreError::ServicePriceNotFound`] if the table has no entry for the
    /// pair, [`CoreError::NegativePrice`] if the entry is below zero. Neither
    /// can happen with [`PriceTable::standard`].
    ///
    /// ## Example
    /// ```rust
    /// use wedding_core::price_table::PriceTable;
    /// use wedding_core::{Money, Service, Year};
    ///
    /// let table = PriceTable::standard();
    /// let price = table.service_price(Year::Y2021, Service::Photography).unwrap();
    /// assert_eq!(price, Money::new(1800));
    /// ```
    pub fn service_price(&self, year: Year, service: Service) -> CoreResult<Money> {
        let price = self
            .year(year)
            .and_then(|row| row.service(service))
            .ok_or(CoreError::ServicePriceNotFound { year, service })?;
        non_negative(year, service.as_str(), price)
    }

    /// Looks up the Photography + VideoRecording bundle price.
    ///
    /// ## Errors
    /// [`CoreError::BundlePriceNotFound`] if the year is missing,
    /// [`CoreError::NegativePrice`] if the bundle is below zero.
    pub fn bundle_price(&self, year: Year) -> CoreResult<Money> {
        let price = self
            .year(year)
            .map(|row| row.bundle)
            .ok_or(CoreError::BundlePriceNotFound { year })?;
        non_negative(year, "bundle", price)
    }

    /// True when every supported year has every service plus a bundle.
    pub fn is_complete(&self) -> bool {
        Year::ALL.iter().all(|year| match self.year(*year) {
            Some(row) => Service::ALL.iter().all(|s| row.service(*s).is_some()),
            None => false,
        })
    }
}

fn non_negative(year: Year, item: &str, price: Money) -> CoreResult<Money> {
    if price < Money::zero() {
        return Err(CoreError::NegativePrice {
            year,
            item: item.to_string(),
            amount: price,
        });
    }
    Ok(price)
}

// =============================================================================
// Standard Prices
// =============================================================================

// Add-on prices are the same every year; only photo/video and the bundle vary.
const fn services(photo_video: i64) -> [(Service, Money); 5] {
    [
        (Service::Photography, Money::new(photo_video)),
        (Service::VideoRecording, Money::new(photo_video)),
        (Service::BlurayPackage, Money::new(300)),
        (Service::TwoDayEvent, Money::new(400)),
        (Service::WeddingSession, Money::new(600)),
    ]
}

static SERVICES_2020: [(Service, Money); 5] = services(1700);
static SERVICES_2021: [(Service, Money); 5] = services(1800);
static SERVICES_2022: [(Service, Money); 5] = services(1900);

static STANDARD_ROWS: [YearPrices; 3] = [
    YearPrices {
        year: Year::Y2020,
        services: &SERVICES_2020,
        bundle: Money::new(2200),
    },
    YearPrices {
        year: Year::Y2021,
        services: &SERVICES_2021,
        bundle: Money::new(2300),
    },
    YearPrices {
        year: Year::Y2022,
        services: &SERVICES_2022,
        bundle: Money::new(2500),
    },
];

static STANDARD: PriceTable = PriceTable::new(&STANDARD_ROWS);

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_complete() {
        assert!(PriceTable::standard().is_complete());
    }

    #[test]
    fn test_standard_prices() {
        let table = PriceTable::standard();
        let expected = [
            (Year::Y2020, 1700, 2200),
            (Year::Y2021, 1800, 2300),
            (Year::Y2022, 1900, 2500),
        ];

        for (year, photo_video, bundle) in expected {
            assert_eq!(
                table.service_price(year, Service::Photography),
                Ok(Money::new(photo_video))
            );
            assert_eq!(
                table.service_price(year, Service::VideoRecording),
                Ok(Money::new(photo_video))
            );
            assert_eq!(table.service_price(year, Service::BlurayPackage), Ok(Money::new(300)));
            assert_eq!(table.service_price(year, Service::TwoDayEvent), Ok(Money::new(400)));
            assert_eq!(table.service_price(year, Service::WeddingSession), Ok(Money::new(600)));
            assert_eq!(table.bundle_price(year), Ok(Money::new(bundle)));
        }
    }

    #[test]
    fn test_bundle_is_cheaper_than_both_services() {
        let table = PriceTable::standard();
        for year in Year::ALL {
            let photo = table.service_price(year, Service::Photography).unwrap();
            let video = table.service_price(year, Service::VideoRecording).unwrap();
            assert!(table.bundle_price(year).unwrap() < photo + video);
        }
    }

    static PARTIAL_SERVICES: [(Service, Money); 1] = [(Service::Photography, Money::new(1000))];
    static PARTIAL_ROWS: [YearPrices; 1] = [YearPrices {
        year: Year::Y2021,
        services: &PARTIAL_SERVICES,
        bundle: Money::new(1500),
    }];

    #[test]
    fn test_missing_entries_are_errors() {
        let table = PriceTable::new(&PARTIAL_ROWS);
        assert!(!table.is_complete());

        assert_eq!(
            table.service_price(Year::Y2021, Service::WeddingSession),
            Err(CoreError::ServicePriceNotFound {
                year: Year::Y2021,
                service: Service::WeddingSession,
            })
        );
        assert_eq!(
            table.bundle_price(Year::Y2020),
            Err(CoreError::BundlePriceNotFound { year: Year::Y2020 })
        );
        assert_eq!(
            table.service_price(Year::Y2021, Service::Photography),
            Ok(Money::new(1000))
        );
    }

    static NEGATIVE_SERVICES: [(Service, Money); 2] = [
        (Service::Photography, Money::new(1000)),
        (Service::WeddingSession, Money::new(-50)),
    ];
    static NEGATIVE_ROWS: [YearPrices; 1] = [YearPrices {
        year: Year::Y2020,
        services: &NEGATIVE_SERVICES,
        bundle: Money::new(-1),
    }];

    #[test]
    fn test_negative_entries_are_errors() {
        let table = PriceTable::new(&NEGATIVE_ROWS);

        assert_eq!(
            table.service_price(Year::Y2020, Service::WeddingSession),
            Err(CoreError::NegativePrice {
                year: Year::Y2020,
                item: "WeddingSession".to_string(),
                amount: Money::new(-50),
            })
        );
        assert_eq!(
            table.bundle_price(Year::Y2020),
            Err(CoreError::NegativePrice {
                year: Year::Y2020,
                item: "bundle".to_string(),
                amount: Money::new(-1),
            })
        );
        assert_eq!(
            table.service_price(Year::Y2020, Service::Photography),
            Ok(Money::new(1000))
        );
    }
}
