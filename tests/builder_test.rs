//! Tests for MapBuilder

use std::collections::BTreeSet;

use rstest::{fixture, rstest};
use tempfile::TempDir;

use orbitmap::{MapBuilder, OrbitError};

/// The canonical reference map with total orbit count 42.
#[fixture]
fn sample_map() -> &'static str {
    "COM)B\nB)C\nC)D\nD)E\nE)F\nB)G\nG)H\nD)I\nE)J\nJ)K\nK)L"
}

#[rstest]
fn given_sample_map_when_building_then_total_orbits_is_42(sample_map: &str) {
    // Act
    let arena = MapBuilder::new().build_from_str(sample_map).unwrap();

    // Assert
    assert_eq!(arena.total_orbits(), 42);
}

#[rstest]
fn given_sample_map_when_building_then_root_is_com(sample_map: &str) {
    let arena = MapBuilder::new().build_from_str(sample_map).unwrap();

    let root = arena.root().unwrap();
    assert_eq!(arena.get_node(root).unwrap().data.id, "COM");
    assert_eq!(arena.get_node(root).unwrap().depth, 0);
}

#[rstest]
fn given_sample_map_when_building_then_every_depth_is_parent_plus_one(sample_map: &str) {
    let arena = MapBuilder::new().build_from_str(sample_map).unwrap();

    for idx in arena.iter_all() {
        let node = arena.get_node(idx).unwrap();
        match node.parent {
            Some(parent) => {
                let parent_depth = arena.get_node(parent).unwrap().depth;
                assert_eq!(node.depth, parent_depth + 1, "body {}", node.data.id);
            }
            None => assert_eq!(node.depth, 0),
        }
    }
}

#[rstest]
fn given_sample_map_when_building_then_max_depth_matches_longest_chain(sample_map: &str) {
    let arena = MapBuilder::new().build_from_str(sample_map).unwrap();

    // COM -> B -> C -> D -> E -> J -> K -> L
    assert_eq!(arena.max_depth(), 7);
}

#[rstest]
fn given_sample_map_when_collecting_leaves_then_root_is_absent(sample_map: &str) {
    let arena = MapBuilder::new().build_from_str(sample_map).unwrap();

    let leaves: BTreeSet<String> = arena
        .leaves()
        .into_iter()
        .map(|idx| arena.get_node(idx).unwrap().data.id.clone())
        .collect();

    assert_eq!(
        leaves,
        ["F", "H", "I", "L"].iter().map(|s| s.to_string()).collect()
    );
    assert!(!leaves.contains("COM"));
}

#[rstest]
fn given_identical_input_when_rebuilding_then_trees_are_structurally_identical(sample_map: &str) {
    // Act
    let first = MapBuilder::new().build_from_str(sample_map).unwrap();
    let second = MapBuilder::new().build_from_str(sample_map).unwrap();

    // Assert
    let root_id = |arena: &orbitmap::OrbitArena| {
        let root = arena.root().unwrap();
        arena.get_node(root).unwrap().data.id.clone()
    };
    assert_eq!(root_id(&first), root_id(&second));

    let depths = |arena: &orbitmap::OrbitArena| {
        let mut pairs: Vec<(String, usize)> = arena
            .iter_all()
            .map(|idx| {
                let node = arena.get_node(idx).unwrap();
                (node.data.id.clone(), node.depth)
            })
            .collect();
        pairs.sort();
        pairs
    };
    assert_eq!(depths(&first), depths(&second));
}

#[test]
fn given_line_without_separator_when_building_then_no_body_and_no_error() {
    // Arrange
    let input = "JUSTONEATOM";

    // Act
    let result = MapBuilder::new().build_from_str(input);

    // Assert
    let arena = result.unwrap();
    assert!(arena.is_empty());
}

#[test]
fn given_mixed_valid_and_malformed_lines_when_building_then_only_valid_count() {
    let arena = MapBuilder::new()
        .build_from_str("COM)B\nGARBAGE\nB)C\n)D\nE)")
        .unwrap();

    assert_eq!(arena.len(), 3);
    assert_eq!(arena.total_orbits(), 3);
}

#[test]
fn given_empty_input_when_building_then_root_query_errors() {
    let arena = MapBuilder::new().build_from_str("").unwrap();

    assert!(arena.is_empty());
    assert!(matches!(arena.root(), Err(OrbitError::EmptyMap)));
    assert_eq!(arena.total_orbits(), 0);
    assert_eq!(arena.max_depth(), 0);
}

#[test]
fn given_duplicate_child_lines_when_building_then_last_write_wins() {
    let arena = MapBuilder::new()
        .build_from_str("COM)A\nCOM)B\nA)X\nB)X")
        .unwrap();

    let x = arena.find("X").unwrap();
    let b = arena.find("B").unwrap();
    let a = arena.find("A").unwrap();
    assert_eq!(arena.get_node(x).unwrap().parent, Some(b));
    assert!(arena.get_node(a).unwrap().children.is_empty());
    assert_eq!(arena.get_node(x).unwrap().depth, 2);
}

#[test]
fn given_map_file_when_building_then_matches_string_build() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("orbits.txt");
    std::fs::write(&path, "COM)B\nB)C\n").expect("write map file");

    // Act
    let arena = MapBuilder::new().build_from_file(&path).unwrap();

    // Assert
    assert_eq!(arena.len(), 3);
    assert_eq!(arena.total_orbits(), 3);
}

#[test]
fn given_nonexistent_file_when_building_then_map_not_found() {
    let result = MapBuilder::new().build_from_file(std::path::Path::new("/nonexistent/orbits.txt"));

    assert!(matches!(result, Err(OrbitError::MapNotFound(_))));
}
