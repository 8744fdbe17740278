//! Shared fixtures for integration tests

use booking_server::core::ServerState;
use booking_server::db::models::{
    BusinessCreate, BusinessSettings, DatePeriod, OperatingWindow, RoomCreate,
};
use booking_server::db::repository::{BusinessRepository, RoomRepository};
use chrono::{NaiveDate, NaiveTime};
use shared::BusinessKind;
use shared::request::CustomerInfo;

pub async fn test_state() -> ServerState {
    ServerState::in_memory().await
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

pub fn customer(name: &str) -> CustomerInfo {
    CustomerInfo {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: None,
    }
}

/// Restaurant with one morning window at tariff 50 and a capacity cap
pub async fn restaurant(state: &ServerState, capacity: u32) -> String {
    let mut settings = BusinessSettings::default();
    settings.operating_windows = vec![OperatingWindow {
        open: time(9, 0),
        close: time(12, 0),
        tariff: Some(50.0),
    }];
    settings.slot_duration_minutes = 30;
    settings.total_capacity = capacity;
    create_business(state, BusinessKind::Restaurant, "Dar Tajine", settings).await
}

/// Hotel open over the given period, with two rooms
pub async fn hotel(state: &ServerState, season: Option<(NaiveDate, NaiveDate)>) -> String {
    let mut settings = BusinessSettings::default();
    if let Some((start, end)) = season {
        settings.opening_periods = vec![DatePeriod { start, end }];
    }
    let id = create_business(state, BusinessKind::Hotel, "Riad Atlas", settings).await;

    let businesses = BusinessRepository::new(state.db.clone());
    let business = businesses.find_by_id(&id).await.unwrap();
    let bid = business.id.unwrap();

    let rooms = RoomRepository::new(state.db.clone());
    rooms
        .create(
            bid.clone(),
            RoomCreate {
                name: "101".into(),
                capacity: 2,
                nightly_rate: 120.0,
            },
        )
        .await
        .unwrap();
    rooms
        .create(
            bid,
            RoomCreate {
                name: "201".into(),
                capacity: 4,
                nightly_rate: 200.0,
            },
        )
        .await
        .unwrap();
    id
}

pub async fn create_business(
    state: &ServerState,
    kind: BusinessKind,
    name: &str,
    settings: BusinessSettings,
) -> String {
    let businesses = BusinessRepository::new(state.db.clone());
    let business = businesses
        .create(BusinessCreate {
            kind,
            name: name.to_string(),
            currency: None,
            timezone: None,
            settings: Some(settings),
        })
        .await
        .unwrap();
    let id = business.id.unwrap().to_string();
    businesses.set_active(&id, true).await.unwrap();
    id
}
