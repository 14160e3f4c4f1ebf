//! Integration tests for fabrica-types.

use std::collections::BTreeMap;

use fabrica_types::{NodeId, Time};

#[test]
fn ids_are_ordered_by_index() {
    let mut ids = vec![NodeId(4), NodeId(0), NodeId(2)];
    ids.sort();
    assert_eq!(ids, vec![NodeId(0), NodeId(2), NodeId(4)]);
}

#[test]
fn id_round_trip() {
    let id = NodeId::from(7u32);
    assert_eq!(id.index(), 7);
}

#[test]
fn time_orders_totally() {
    let mut times = vec![Time(5.0), Time(-1.0), Time(0.0)];
    times.sort();
    assert_eq!(times, vec![Time(-1.0), Time(0.0), Time(5.0)]);
}

#[test]
fn time_as_map_key() {
    let mut map = BTreeMap::new();
    map.insert(Time(2.0), "b");
    map.insert(Time(0.0), "a");
    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, vec![Time(0.0), Time(2.0)]);
}

#[test]
fn time_displays_like_the_raw_float() {
    assert_eq!(Time(2.5).to_string(), "2.5");
    assert_eq!(Time(0.0).to_string(), "0");
}
