//! Concurrency: competing bookings for one slot must never exceed the
//! capacity, whatever the interleaving.

mod common;

use booking_server::core::ServerState;
use chrono::NaiveDate;
use common::{customer, restaurant, test_state};
use futures::future::join_all;
use rand::Rng;
use shared::request::{BookingDetails, CreateBookingRequest, SlotBooking};
use shared::BookingSource;
use std::sync::Arc;

fn slot_request(name: String, date: NaiveDate, party_size: u32) -> CreateBookingRequest {
    CreateBookingRequest {
        customer: customer(&name),
        details: BookingDetails::Restaurant(SlotBooking {
            date,
            time: "09:00".to_string(),
            party_size,
            exclusive: false,
        }),
        source: BookingSource::Website,
        notes: None,
        special_requests: None,
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_bookings_never_overbook_a_slot() {
    const CAPACITY: u32 = 10;
    const ATTEMPTS: usize = 30;

    let state = Arc::new(test_state().await);
    let business_id = restaurant(&state, CAPACITY).await;
    let date = NaiveDate::from_ymd_opt(2030, 7, 1).unwrap();

    let parties: Vec<u32> = {
        let mut rng = rand::thread_rng();
        (0..ATTEMPTS).map(|_| rng.gen_range(1..=3)).collect()
    };

    let mut handles = Vec::new();
    for (i, party_size) in parties.into_iter().enumerate() {
        let state = state.clone();
        let business_id = business_id.clone();
        handles.push(tokio::spawn(async move {
            state
                .lifecycle
                .create(
                    &business_id,
                    slot_request(format!("Guest {}", i), date, party_size),
                )
                .await
                .ok()
                .map(|r| r.party_size.unwrap())
        }));
    }

    let mut admitted_total: u32 = 0;
    let mut admitted_count = 0;
    for result in join_all(handles).await {
        if let Some(party) = result.unwrap() {
            admitted_total += party;
            admitted_count += 1;
        }
    }

    assert!(admitted_count > 0, "some bookings should be admitted");
    assert!(
        admitted_total <= CAPACITY,
        "admitted {} guests into a slot of {}",
        admitted_total,
        CAPACITY
    );

    // the stored state agrees with the admission results
    let occupancy = occupancy_at(&state, &business_id, date).await;
    assert_eq!(occupancy, admitted_total);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_bookings_across_slots_do_not_interfere() {
    const CAPACITY: u32 = 4;

    let state = Arc::new(test_state().await);
    let business_id = restaurant(&state, CAPACITY).await;
    let date = NaiveDate::from_ymd_opt(2030, 7, 1).unwrap();

    // two waves landing on different slots concurrently
    let mut handles = Vec::new();
    for i in 0..16 {
        let state = state.clone();
        let business_id = business_id.clone();
        let time = if i % 2 == 0 { "09:00" } else { "10:00" };
        handles.push(tokio::spawn(async move {
            let request = CreateBookingRequest {
                customer: customer(&format!("Wave {}", i)),
                details: BookingDetails::Restaurant(SlotBooking {
                    date,
                    time: time.to_string(),
                    party_size: 2,
                    exclusive: false,
                }),
                source: BookingSource::Website,
                notes: None,
                special_requests: None,
            };
            (time, state.lifecycle.create(&business_id, request).await.is_ok())
        }));
    }

    let mut per_slot = std::collections::HashMap::new();
    for result in join_all(handles).await {
        let (time, admitted) = result.unwrap();
        if admitted {
            *per_slot.entry(time).or_insert(0u32) += 2;
        }
    }

    // each slot fills to its own capacity independently
    assert_eq!(per_slot.get("09:00"), Some(&CAPACITY));
    assert_eq!(per_slot.get("10:00"), Some(&CAPACITY));
}

async fn occupancy_at(state: &ServerState, business_id: &str, date: NaiveDate) -> u32 {
    let business = state.settings.get(business_id).await.unwrap();
    let bid = business.id.unwrap();
    let by_slot = state.ledger.occupancy_by_slot(&bid, date).await.unwrap();
    by_slot
        .get(&chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap())
        .map(|o| o.party_total)
        .unwrap_or(0)
}
