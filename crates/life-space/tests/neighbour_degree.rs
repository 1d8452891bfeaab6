use life_core::Position;
use life_space::{Grid, GridError};

#[test]
fn neighbour_degree_by_cell_class() {
    let g = Grid::new(4, 3).unwrap();
    let degree = |r, c| g.neighbors(Position::new(r, c)).len();

    // corners
    assert_eq!(degree(0, 0), 3);
    assert_eq!(degree(0, 3), 3);
    assert_eq!(degree(2, 0), 3);
    assert_eq!(degree(2, 3), 3);
    // edges
    assert_eq!(degree(0, 1), 5);
    assert_eq!(degree(1, 0), 5);
    // interior
    assert_eq!(degree(1, 1), 8);
    assert_eq!(degree(1, 2), 8);
}

#[test]
fn one_wide_strip_has_two_neighbours_inside() {
    let g = Grid::new(1, 5).unwrap();
    assert_eq!(g.neighbors(Position::new(2, 0)).len(), 2);
    assert_eq!(g.neighbors(Position::new(0, 0)).len(), 1);
}

#[test]
fn error_messages_name_the_problem() {
    let err = Grid::new(0, 3).unwrap_err();
    assert!(err.to_string().contains("at least one cell"));

    let err = Grid::from_cells(2, 2, [Position::new(5, 1)]).unwrap_err();
    assert!(matches!(err, GridError::CellOutOfBounds { .. }));
    assert!(err.to_string().contains("(5, 1)"));
}
