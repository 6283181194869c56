//! Test helpers: in-process test server and database fixtures.
//!
//! Fixtures insert rows directly through the pool so tests can arrange state
//! without going through the API under test.

use axum_test::TestServer;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::db::models::users::UserDBResponse;
use crate::types::ServiceId;
use crate::{AppState, Config, build_router};

/// Build a test server over a fresh router backed by the given pool.
pub async fn create_test_app(pool: PgPool) -> TestServer {
    let state = AppState::builder().db(pool).config(Config::default()).build();
    let router = build_router(state).expect("Failed to build router");
    TestServer::new(router.into_make_service()).expect("Failed to create test server")
}

pub async fn create_test_user(pool: &PgPool, name: &str, status: bool) -> UserDBResponse {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    sqlx::query_as::<_, UserDBResponse>("INSERT INTO users (name, email, status) VALUES ($1, $2, $3) RETURNING *")
        .bind(name)
        .bind(email)
        .bind(status)
        .fetch_one(pool)
        .await
        .expect("Failed to insert test user")
}

/// Insert a recharge catalog row, returning its id.
pub async fn seed_recharge_commission(pool: &PgPool, operator_name: &str, commission: Decimal, our_commission: Decimal) -> i64 {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO recharge_commissions (operator_id, operator_name, category, server_1_commission, our_commission) \
         VALUES ('OP1', $1, 'prepaid', $2, $3) RETURNING id",
    )
    .bind(operator_name)
    .bind(commission)
    .bind(our_commission)
    .fetch_one(pool)
    .await
    .expect("Failed to insert recharge commission");
    id
}

/// Insert an electricity catalog row, returning its id.
pub async fn seed_electricity_commission(pool: &PgPool, operator_name: &str, commission: Decimal, our_commission: Decimal) -> i64 {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO electricity_commissions (operator_id, operator_name, type, commission, our_commission) \
         VALUES ('EL1', $1, 'postpaid', $2, $3) RETURNING id",
    )
    .bind(operator_name)
    .bind(commission)
    .bind(our_commission)
    .fetch_one(pool)
    .await
    .expect("Failed to insert electricity commission");
    id
}

/// Insert a bank slab row, returning its id.
pub async fn seed_bank_commission(pool: &PgPool, transaction_amount: Decimal, commission: Decimal) -> i64 {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO bank_commissions (transaction_amount, category, commission, our_commission) \
         VALUES ($1, 'imps', $2, 0) RETURNING id",
    )
    .bind(transaction_amount)
    .bind(commission)
    .fetch_one(pool)
    .await
    .expect("Failed to insert bank commission");
    id
}

/// Insert an API log row with the given correlation ids, returning its id.
pub async fn seed_api_log(
    pool: &PgPool,
    api_name: Option<&str>,
    request_id: Option<&str>,
    reference_id: Option<&str>,
    status: Option<&str>,
) -> i64 {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO api_logs (api_name, request_id, reference_id, status) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(api_name)
    .bind(request_id)
    .bind(reference_id)
    .bind(status)
    .fetch_one(pool)
    .await
    .expect("Failed to insert api log");
    id
}

pub async fn seed_whitelisted_ip(pool: &PgPool, ip_address: &str, status: bool) -> i64 {
    let (id,): (i64,) = sqlx::query_as("INSERT INTO whitelisting_ips (ip_address, status) VALUES ($1, $2) RETURNING id")
        .bind(ip_address)
        .bind(status)
        .fetch_one(pool)
        .await
        .expect("Failed to insert whitelisted ip");
    id
}

pub async fn seed_onboard_request(pool: &PgPool, full_name: &str) -> i64 {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO onboard_requests (full_name, merchantcode, mobile, email, firm) \
         VALUES ($1, 'MC001', '9000000001', 'merchant@example.com', 'Test Traders') RETURNING id",
    )
    .bind(full_name)
    .fetch_one(pool)
    .await
    .expect("Failed to insert onboard request");
    id
}

/// Service ids from the seeded catalog, in catalog order.
pub async fn seeded_service_ids(pool: &PgPool) -> Vec<ServiceId> {
    let rows: Vec<(i64,)> = sqlx::query_as("SELECT service_id FROM services ORDER BY service_id")
        .fetch_all(pool)
        .await
        .expect("Failed to list services");
    rows.into_iter().map(|(id,)| id).collect()
}
