//! Tests for shortest transfer path search

use rstest::{fixture, rstest};

use orbitmap::{build_from_str, shortest_transfers, OrbitArena, OrbitError};

/// The canonical reference map extended with YOU and SAN endpoints.
#[fixture]
fn transfer_map() -> OrbitArena {
    build_from_str("COM)B\nB)C\nC)D\nD)E\nE)F\nB)G\nG)H\nD)I\nE)J\nJ)K\nK)L\nK)YOU\nI)SAN")
        .unwrap()
}

fn route_ids(arena: &OrbitArena, path: &[generational_arena::Index]) -> Vec<String> {
    path.iter()
        .map(|&idx| arena.get_node(idx).unwrap().data.id.clone())
        .collect()
}

#[rstest]
fn given_reference_map_when_searching_then_four_transfers(transfer_map: OrbitArena) {
    // Act
    let path = shortest_transfers(&transfer_map, "YOU", "SAN").unwrap();

    // Assert: K -> J -> E -> D -> I is four hops away from YOU's orbit target
    assert_eq!(path.len(), 4);
    assert_eq!(route_ids(&transfer_map, &path), vec!["J", "E", "D", "I"]);
}

#[rstest]
fn given_reference_map_when_searching_reversed_then_length_is_symmetric(
    transfer_map: OrbitArena,
) {
    let forward = shortest_transfers(&transfer_map, "YOU", "SAN").unwrap();
    let backward = shortest_transfers(&transfer_map, "SAN", "YOU").unwrap();

    assert_eq!(forward.len(), backward.len());
    assert_eq!(route_ids(&transfer_map, &backward), vec!["D", "E", "J", "K"]);
}

#[rstest]
fn given_unknown_endpoint_when_searching_then_body_not_found(transfer_map: OrbitArena) {
    let result = shortest_transfers(&transfer_map, "YOU", "NOPE");

    assert!(matches!(result, Err(OrbitError::BodyNotFound(id)) if id == "NOPE"));
}

#[test]
fn given_disconnected_forest_when_searching_then_unreachable() {
    // Arrange: two trees, YOU and SAN on different ones
    let arena = build_from_str("COM)A\nA)YOU\nXXX)B\nB)SAN").unwrap();

    // Act
    let result = shortest_transfers(&arena, "YOU", "SAN");

    // Assert
    assert!(matches!(result, Err(OrbitError::Unreachable { .. })));
}

#[test]
fn given_endpoint_on_root_when_searching_then_not_in_orbit() {
    let arena = build_from_str("COM)A\nA)SAN").unwrap();

    let result = shortest_transfers(&arena, "COM", "SAN");

    assert!(matches!(result, Err(OrbitError::NotInOrbit(id)) if id == "COM"));
}

#[test]
fn given_shared_orbit_target_when_searching_then_zero_transfers() {
    let arena = build_from_str("COM)A\nA)YOU\nA)SAN").unwrap();

    let path = shortest_transfers(&arena, "YOU", "SAN").unwrap();

    assert!(path.is_empty());
}

#[test]
fn given_ancestor_descendant_endpoints_when_searching_then_route_climbs_the_chain() {
    let arena = build_from_str("COM)B\nB)C\nC)D\nD)YOU\nB)SAN").unwrap();

    let path = shortest_transfers(&arena, "YOU", "SAN").unwrap();

    // D -> C -> B: two hops up to SAN's orbit target
    assert_eq!(path.len(), 2);
}
