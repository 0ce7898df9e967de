//! Integration tests for passenger max-flow queries.

use mf_core::{BuildingId, TrackId};
use mf_flow::TransitNetwork;
use mf_graph::{Building, Track};

fn b(id: u32, occupancy: u32) -> Building {
    Building::new(BuildingId(id), occupancy)
}

fn t(id: u32, from: u32, to: u32, capacity: u32) -> Track {
    Track::new(TrackId(id), BuildingId(from), BuildingId(to), capacity)
}

fn network(buildings: &[Building], tracks: &[Track]) -> TransitNetwork {
    TransitNetwork::new(buildings, tracks).unwrap()
}

fn query(net: &mut TransitNetwork, start: u32, end: u32) -> u64 {
    net.max_passengers(BuildingId(start), BuildingId(end))
}

#[test]
fn direct_track_then_reverse_query() {
    let mut net = network(&[b(1, 100), b(2, 200)], &[t(1, 1, 2, 50)]);
    assert_eq!(query(&mut net, 1, 2), 50);
    // The first query left 50 on the reverse edge, which the next one uses
    assert_eq!(query(&mut net, 2, 1), 50);
}

#[test]
fn occupancy_caps_track_capacity() {
    let mut net = network(&[b(1, 100), b(2, 200)], &[t(1, 1, 2, 120)]);
    assert_eq!(query(&mut net, 1, 2), 100);
}

#[test]
fn track_caps_occupancy() {
    let mut net = network(&[b(1, 500), b(2, 300)], &[t(1, 1, 2, 100)]);
    assert_eq!(query(&mut net, 1, 2), 100);
}

#[test]
fn two_hop_bottleneck_and_unknown_building() {
    let mut net = network(
        &[b(1, 100), b(2, 200), b(3, 300)],
        &[t(1, 1, 2, 100), t(2, 2, 3, 50)],
    );
    assert_eq!(query(&mut net, 1, 3), 50);
    assert_eq!(query(&mut net, 1, 4), 0);
    assert_eq!(query(&mut net, 4, 1), 0);
}

#[test]
fn self_loop_query() {
    let mut net = network(&[b(1, 100)], &[t(1, 1, 1, 100)]);
    assert_eq!(query(&mut net, 1, 1), 100);

    let mut net = network(&[b(1, 100)], &[]);
    assert_eq!(query(&mut net, 1, 1), 0);
}

#[test]
fn self_loop_with_other_tracks_first() {
    // The self-loop is found even when other edges precede it in the adjacency.
    let mut net = network(&[b(1, 100), b(2, 100)], &[t(1, 1, 2, 40), t(2, 1, 1, 70)]);
    assert_eq!(query(&mut net, 1, 1), 70);
}

#[test]
fn parallel_tracks_are_all_used() {
    let mut net = network(
        &[b(1, 1000), b(2, 1000)],
        &[t(1, 1, 2, 100), t(2, 1, 2, 50), t(3, 1, 2, 25)],
    );
    assert_eq!(query(&mut net, 1, 2), 175);
}

#[test]
fn parallel_tracks_are_capped_per_track_not_per_building() {
    // Each track is clamped by the occupancies on its own; the sum may exceed them.
    let mut net = network(
        &[b(1, 100), b(2, 200)],
        &[t(1, 1, 2, 100), t(2, 1, 2, 50), t(3, 1, 2, 25)],
    );
    assert_eq!(query(&mut net, 1, 2), 175);
}

#[test]
fn six_building_bottleneck() {
    let mut net = network(
        &[b(1, 100), b(2, 200), b(3, 300), b(4, 400), b(5, 500), b(6, 600)],
        &[
            t(1, 1, 2, 100),
            t(2, 3, 4, 100),
            t(3, 4, 5, 100),
            t(4, 5, 1, 100),
            t(5, 3, 6, 25),
            t(6, 6, 4, 100),
            t(7, 2, 3, 100),
        ],
    );
    assert_eq!(query(&mut net, 1, 6), 25);
}

#[test]
fn no_tracks_no_flow() {
    let mut net = network(&[b(1, 100), b(2, 200)], &[]);
    assert_eq!(query(&mut net, 1, 2), 0);
}

#[test]
fn empty_network() {
    let mut net = network(&[], &[]);
    assert_eq!(query(&mut net, 1, 2), 0);
    assert_eq!(query(&mut net, 1, 1), 0);
}

#[test]
fn track_to_missing_building_is_ignored() {
    let mut net = network(&[b(1, 100)], &[t(1, 1, 2, 50)]);
    assert_eq!(query(&mut net, 1, 2), 0);
    assert!(net.graph().edges().is_empty());
}

#[test]
fn disconnected_and_wrong_direction() {
    let mut net = network(&[b(1, 100), b(2, 200), b(3, 300)], &[t(1, 1, 2, 100)]);
    assert_eq!(query(&mut net, 1, 3), 0);

    let mut net = network(
        &[b(1, 100), b(2, 200), b(3, 300)],
        &[t(1, 1, 2, 100), t(2, 2, 3, 100)],
    );
    assert_eq!(query(&mut net, 3, 1), 0);
}

#[test]
fn zero_capacity_and_zero_occupancy() {
    let mut net = network(
        &[b(1, 100), b(2, 200), b(3, 300)],
        &[t(1, 1, 2, 0), t(2, 2, 3, 50)],
    );
    assert_eq!(query(&mut net, 1, 3), 0);

    let mut net = network(&[b(1, 0), b(2, 0)], &[t(1, 1, 2, 100)]);
    assert_eq!(query(&mut net, 1, 2), 0);
}

#[test]
fn zero_occupancy_endpoint_on_long_chain() {
    let buildings: Vec<Building> = (1..=9).map(|i| b(i, if i == 1 { 0 } else { i * 100 })).collect();
    let tracks: Vec<Track> = (1..=8).map(|i| t(i, i, i + 1, 100)).collect();
    let mut net = network(&buildings, &tracks);
    assert_eq!(query(&mut net, 1, 9), 0);

    let buildings: Vec<Building> = (1..=9).map(|i| b(i, if i == 9 { 0 } else { i * 100 })).collect();
    let mut net = network(&buildings, &tracks);
    assert_eq!(query(&mut net, 1, 9), 0);
}

#[test]
fn split_paths() {
    let mut net = network(
        &[b(1, 100), b(2, 200), b(3, 300), b(4, 400)],
        &[t(1, 1, 2, 100), t(2, 2, 3, 50), t(3, 3, 4, 100), t(4, 1, 3, 25)],
    );
    assert_eq!(query(&mut net, 1, 4), 75);

    let mut net = network(
        &[b(1, 100), b(2, 200), b(3, 300)],
        &[t(1, 1, 2, 30), t(2, 2, 3, 50), t(3, 1, 3, 40)],
    );
    assert_eq!(query(&mut net, 1, 3), 70);
}

#[test]
fn cycles_in_both_directions() {
    let mut net = network(
        &[b(1, 100), b(2, 100), b(3, 100)],
        &[
            t(1, 1, 2, 100),
            t(2, 2, 3, 100),
            t(3, 3, 1, 100),
            t(4, 2, 1, 100),
            t(5, 3, 2, 100),
            t(6, 1, 3, 100),
        ],
    );
    assert_eq!(query(&mut net, 1, 3), 200);
}

#[test]
fn textbook_network() {
    let mut net = network(
        &[b(1, 100), b(2, 200), b(3, 300), b(4, 300), b(5, 300), b(6, 300)],
        &[
            t(1, 1, 2, 16),
            t(2, 1, 3, 13),
            t(3, 2, 3, 10),
            t(4, 3, 2, 4),
            t(5, 2, 4, 12),
            t(6, 3, 5, 14),
            t(7, 4, 3, 9),
            t(8, 5, 4, 7),
            t(9, 4, 6, 20),
            t(10, 5, 6, 4),
        ],
    );
    assert_eq!(query(&mut net, 1, 6), 23);
}

#[test]
fn small_cycle_network() {
    let mut net = network(
        &[b(1, 100), b(2, 200), b(3, 300), b(4, 300)],
        &[
            t(1, 1, 2, 2),
            t(2, 1, 3, 4),
            t(3, 2, 3, 3),
            t(4, 3, 2, 3),
            t(5, 2, 4, 4),
            t(6, 3, 4, 3),
        ],
    );
    assert_eq!(query(&mut net, 1, 4), 6);
}

#[test]
fn eight_building_network() {
    let buildings: Vec<Building> = (1..=8).map(|i| b(i, if i == 1 { 100 } else { 300 })).collect();
    let mut net = network(
        &buildings,
        &[
            t(1, 1, 2, 6),
            t(2, 1, 3, 6),
            t(3, 3, 2, 5),
            t(4, 2, 4, 4),
            t(5, 2, 5, 2),
            t(6, 3, 5, 9),
            t(7, 4, 6, 4),
            t(8, 4, 7, 7),
            t(9, 5, 4, 8),
            t(10, 5, 7, 7),
            t(11, 6, 8, 7),
            t(12, 7, 6, 11),
            t(13, 7, 8, 4),
        ],
    );
    assert_eq!(query(&mut net, 1, 8), 11);
}

#[test]
fn residuals_persist_between_queries() {
    let mut net = network(
        &[b(1, 100), b(2, 200), b(3, 150)],
        &[t(1, 1, 2, 120), t(2, 2, 3, 100)],
    );
    assert_eq!(query(&mut net, 1, 2), 100);
    assert_eq!(query(&mut net, 2, 3), 100);
    // 1 -> 2 is already saturated by the first query
    assert_eq!(query(&mut net, 1, 3), 0);
}

#[test]
fn repeated_query_never_grows() {
    let mut net = network(
        &[b(1, 100), b(2, 100), b(3, 100), b(4, 100)],
        &[t(1, 1, 2, 60), t(2, 2, 4, 60), t(3, 1, 3, 30), t(4, 3, 4, 30)],
    );
    let first = query(&mut net, 1, 4);
    let second = query(&mut net, 1, 4);
    assert_eq!(first, 90);
    assert!(second <= first);
    assert_eq!(second, 0);
    net.graph().check_invariants().unwrap();
}

#[test]
fn shared_bottleneck_with_extra_route() {
    let buildings: Vec<Building> = (1..=6).map(|i| b(i, 100)).collect();
    let base = [
        t(1, 1, 2, 100),
        t(2, 3, 4, 25),
        t(3, 4, 5, 100),
        t(4, 5, 1, 100),
        t(5, 3, 6, 25),
        t(6, 6, 4, 100),
        t(7, 2, 3, 100),
    ];
    let mut net = network(&buildings, &base);
    assert_eq!(query(&mut net, 1, 4), 50);

    let mut extended = base.to_vec();
    extended.push(t(8, 2, 4, 75));
    let mut net = network(&buildings, &extended);
    assert_eq!(query(&mut net, 1, 4), 100);
}
