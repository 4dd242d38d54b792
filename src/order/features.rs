//! Per-order feature tables

use super::columns::*;
use super::config::OrderConfig;
use crate::data::{Olist, Tables};
use crate::error::{OlistError, Result};
use polars::prelude::*;
use tracing::debug;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Order-level features derived from the Olist tables.
///
/// Every accessor builds its result from a clone of the loaded tables, so
/// the mapping itself never changes after construction.
#[derive(Debug, Clone)]
pub struct Order {
    tables: Tables,
    config: OrderConfig,
}

impl Order {
    /// Load all tables through the default [`Olist`] provider
    pub fn new() -> Result<Self> {
        Self::from_provider(&Olist::new())
    }

    /// Load all tables through `provider`
    pub fn from_provider(provider: &Olist) -> Result<Self> {
        Ok(Self::from_tables(provider.load()?))
    }

    /// Build the pipeline over tables that are already in memory
    pub fn from_tables(tables: Tables) -> Self {
        Self {
            tables,
            config: OrderConfig::default(),
        }
    }

    /// Replace the pipeline configuration
    pub fn with_config(mut self, config: OrderConfig) -> Self {
        self.config = config;
        self
    }

    /// Tables the pipeline was built from
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// Look up a loaded table by name
    pub fn table(&self, name: &str) -> Result<&DataFrame> {
        self.tables
            .get(name)
            .ok_or_else(|| OlistError::TableNotFound(name.to_string()))
    }

    /// Delivery durations in decimal days.
    ///
    /// Returns `order_id`, `wait_time`, `expected_wait_time`,
    /// `delay_vs_expected` and `order_status`. Orders missing any of the
    /// three timestamps are dropped; `delay_vs_expected` is floored at 0.
    pub fn wait_time(&self, filter_delivered: bool) -> Result<DataFrame> {
        let orders = self.table(ORDERS)?;

        let purchased = self.epoch_millis(orders, PURCHASE_TIMESTAMP)?;
        let delivered = self.epoch_millis(orders, DELIVERED_DATE)?;
        let estimated = self.epoch_millis(orders, ESTIMATED_DELIVERY_DATE)?;

        let mut lf = orders.clone().lazy();
        if filter_delivered {
            lf = lf.filter(col(ORDER_STATUS).eq(lit(self.config.delivered_status.as_str())));
        }

        let df = lf
            .filter(
                col(PURCHASE_TIMESTAMP)
                    .is_not_null()
                    .and(col(DELIVERED_DATE).is_not_null())
                    .and(col(ESTIMATED_DELIVERY_DATE).is_not_null()),
            )
            .with_columns([
                purchased.alias(PURCHASE_TIMESTAMP),
                delivered.alias(DELIVERED_DATE),
                estimated.alias(ESTIMATED_DELIVERY_DATE),
            ])
            .select([
                col(ORDER_ID),
                days_between(col(DELIVERED_DATE), col(PURCHASE_TIMESTAMP)).alias(WAIT_TIME),
                days_between(col(ESTIMATED_DELIVERY_DATE), col(PURCHASE_TIMESTAMP))
                    .alias(EXPECTED_WAIT_TIME),
                floor_at_zero(days_between(col(DELIVERED_DATE), col(ESTIMATED_DELIVERY_DATE)))
                    .alias(DELAY_VS_EXPECTED),
                col(ORDER_STATUS),
            ])
            .collect()?;

        debug!(rows = df.height(), filter_delivered, "Computed wait times");
        Ok(df)
    }

    /// Review score with five-star and one-star indicator columns
    pub fn review_score(&self) -> Result<DataFrame> {
        let reviews = self.table(ORDER_REVIEWS)?;

        let df = reviews
            .clone()
            .lazy()
            .select([
                col(ORDER_ID),
                score_indicator(5).alias(DIM_IS_FIVE_STAR),
                score_indicator(1).alias(DIM_IS_ONE_STAR),
                col(REVIEW_SCORE),
            ])
            .collect()?;

        debug!(rows = df.height(), "Computed review scores");
        Ok(df)
    }

    /// Number of item rows per order
    pub fn number_items(&self) -> Result<DataFrame> {
        let df = self
            .items_by_order()?
            .agg([len().cast(DataType::UInt32).alias(NUMBER_OF_ITEMS)])
            .collect()?;

        debug!(rows = df.height(), "Computed item counts");
        Ok(df)
    }

    /// Number of distinct sellers per order
    pub fn number_sellers(&self) -> Result<DataFrame> {
        let df = self
            .items_by_order()?
            .agg([col(SELLER_ID)
                .drop_nulls()
                .n_unique()
                .cast(DataType::UInt32)
                .alias(NUMBER_OF_SELLERS)])
            .collect()?;

        debug!(rows = df.height(), "Computed seller counts");
        Ok(df)
    }

    /// Total price and freight value per order
    pub fn price_and_freight(&self) -> Result<DataFrame> {
        let df = self
            .items_by_order()?
            .agg([
                col(PRICE).cast(DataType::Float64).sum().alias(PRICE),
                col(FREIGHT_VALUE).cast(DataType::Float64).sum().alias(FREIGHT_VALUE),
            ])
            .collect()?;

        debug!(rows = df.height(), "Computed price and freight totals");
        Ok(df)
    }

    /// All per-order features inner-joined on `order_id`.
    ///
    /// Orders absent from any feature table are dropped. An order with
    /// several reviews contributes its first review only, so the result
    /// holds one row per order.
    pub fn training_data(&self, filter_delivered: bool) -> Result<DataFrame> {
        let reviews = self
            .review_score()?
            .lazy()
            .group_by_stable([col(ORDER_ID)])
            .agg([
                col(DIM_IS_FIVE_STAR).first(),
                col(DIM_IS_ONE_STAR).first(),
                col(REVIEW_SCORE).first(),
            ]);

        let selection: Vec<Expr> = TRAINING_COLUMNS.iter().map(|name| col(*name)).collect();

        let df = self
            .wait_time(filter_delivered)?
            .lazy()
            .inner_join(reviews, col(ORDER_ID), col(ORDER_ID))
            .inner_join(self.number_items()?.lazy(), col(ORDER_ID), col(ORDER_ID))
            .inner_join(self.number_sellers()?.lazy(), col(ORDER_ID), col(ORDER_ID))
            .inner_join(self.price_and_freight()?.lazy(), col(ORDER_ID), col(ORDER_ID))
            .select(selection)
            .collect()?;

        debug!(rows = df.height(), cols = df.width(), "Built training data");
        Ok(df)
    }

    fn items_by_order(&self) -> Result<LazyGroupBy> {
        let items = self.table(ORDER_ITEMS)?;
        Ok(items.clone().lazy().group_by_stable([col(ORDER_ID)]))
    }

    /// Expression turning a timestamp column into milliseconds since the epoch.
    /// String columns are parsed with the configured format; datetime columns
    /// are used as they are.
    fn epoch_millis(&self, df: &DataFrame, name: &str) -> Result<Expr> {
        let target = DataType::Datetime(TimeUnit::Milliseconds, None);

        let parsed = match df.column(name)?.dtype() {
            DataType::String => col(name).str().strptime(
                target,
                StrptimeOptions {
                    format: self.config.timestamp_format.clone().map(Into::into),
                    strict: true,
                    exact: true,
                    ..Default::default()
                },
                lit("raise"),
            ),
            DataType::Datetime(_, _) => col(name).cast(target),
            other => {
                return Err(OlistError::DataError(format!(
                    "column '{name}' has type {other}, expected a timestamp"
                )))
            }
        };

        Ok(parsed.cast(DataType::Int64))
    }
}

fn days_between(end: Expr, start: Expr) -> Expr {
    (end - start).cast(DataType::Float64) / lit(MS_PER_DAY)
}

fn floor_at_zero(days: Expr) -> Expr {
    when(days.clone().lt(lit(0.0)))
        .then(lit(0.0))
        .otherwise(days)
}

fn score_indicator(score: i64) -> Expr {
    col(REVIEW_SCORE)
        .eq(lit(score))
        .cast(DataType::Int32)
        .fill_null(lit(0))
}
