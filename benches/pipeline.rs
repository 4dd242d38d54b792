use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use olist_features::data::Tables;
use olist_features::order::{columns, Order};
use polars::prelude::*;

fn create_tables(n_orders: usize) -> Tables {
    let order_ids: Vec<String> = (0..n_orders).map(|i| format!("order_{i}")).collect();
    let status: Vec<&str> = (0..n_orders)
        .map(|i| if i % 10 == 0 { "shipped" } else { "delivered" })
        .collect();
    let purchased: Vec<String> = (0..n_orders)
        .map(|i| format!("2018-01-{:02} 08:00:00", i % 28 + 1))
        .collect();
    let delivered: Vec<String> = (0..n_orders)
        .map(|i| format!("2018-02-{:02} 17:30:00", (i * 7) % 28 + 1))
        .collect();
    let estimated: Vec<String> = (0..n_orders)
        .map(|i| format!("2018-02-{:02} 00:00:00", (i * 3) % 28 + 1))
        .collect();

    let orders = df!(
        columns::ORDER_ID => &order_ids,
        columns::ORDER_STATUS => &status,
        columns::PURCHASE_TIMESTAMP => &purchased,
        columns::DELIVERED_DATE => &delivered,
        columns::ESTIMATED_DELIVERY_DATE => &estimated
    )
    .unwrap();

    // One to three items per order
    let mut item_orders = Vec::new();
    let mut products = Vec::new();
    let mut sellers = Vec::new();
    let mut prices = Vec::new();
    let mut freight = Vec::new();
    for (i, id) in order_ids.iter().enumerate() {
        for j in 0..(i % 3 + 1) {
            item_orders.push(id.clone());
            products.push(format!("product_{}", (i + j) % 500));
            sellers.push(format!("seller_{}", (i * 31 + j) % 200));
            prices.push(10.0 + (i % 90) as f64 + j as f64 * 0.5);
            freight.push(2.0 + (j % 4) as f64);
        }
    }
    let items = df!(
        columns::ORDER_ID => &item_orders,
        columns::PRODUCT_ID => &products,
        columns::SELLER_ID => &sellers,
        columns::PRICE => &prices,
        columns::FREIGHT_VALUE => &freight
    )
    .unwrap();

    let scores: Vec<i64> = (0..n_orders).map(|i| (i % 5 + 1) as i64).collect();
    let reviews = df!(
        columns::ORDER_ID => &order_ids,
        columns::REVIEW_SCORE => &scores
    )
    .unwrap();

    let mut tables = Tables::new();
    tables.insert(columns::ORDERS.to_string(), orders);
    tables.insert(columns::ORDER_ITEMS.to_string(), items);
    tables.insert(columns::ORDER_REVIEWS.to_string(), reviews);
    tables
}

fn bench_features(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_features");
    group.sample_size(20);

    for n_orders in [1_000, 10_000, 100_000].iter() {
        let order = Order::from_tables(create_tables(*n_orders));

        group.bench_with_input(BenchmarkId::new("wait_time", n_orders), &order, |b, order| {
            b.iter(|| black_box(order.wait_time(true).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("training_data", n_orders), &order, |b, order| {
            b.iter(|| black_box(order.training_data(true).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_features);
criterion_main!(benches);
