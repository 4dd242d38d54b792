//! Table and column names used by the order pipeline

pub const ORDERS: &str = "orders";
pub const ORDER_ITEMS: &str = "order_items";
pub const ORDER_REVIEWS: &str = "order_reviews";

pub const ORDER_ID: &str = "order_id";
pub const ORDER_STATUS: &str = "order_status";
pub const PURCHASE_TIMESTAMP: &str = "order_purchase_timestamp";
pub const DELIVERED_DATE: &str = "order_delivered_customer_date";
pub const ESTIMATED_DELIVERY_DATE: &str = "order_estimated_delivery_date";

pub const PRODUCT_ID: &str = "product_id";
pub const SELLER_ID: &str = "seller_id";
pub const PRICE: &str = "price";
pub const FREIGHT_VALUE: &str = "freight_value";
pub const REVIEW_SCORE: &str = "review_score";

// Derived
pub const WAIT_TIME: &str = "wait_time";
pub const EXPECTED_WAIT_TIME: &str = "expected_wait_time";
pub const DELAY_VS_EXPECTED: &str = "delay_vs_expected";
pub const DIM_IS_FIVE_STAR: &str = "dim_is_five_star";
pub const DIM_IS_ONE_STAR: &str = "dim_is_one_star";
pub const NUMBER_OF_ITEMS: &str = "number_of_items";
pub const NUMBER_OF_SELLERS: &str = "number_of_sellers";

/// Columns of the training table, in output order
pub const TRAINING_COLUMNS: [&str; 12] = [
    ORDER_ID,
    WAIT_TIME,
    EXPECTED_WAIT_TIME,
    DELAY_VS_EXPECTED,
    ORDER_STATUS,
    DIM_IS_FIVE_STAR,
    DIM_IS_ONE_STAR,
    REVIEW_SCORE,
    NUMBER_OF_ITEMS,
    NUMBER_OF_SELLERS,
    PRICE,
    FREIGHT_VALUE,
];
