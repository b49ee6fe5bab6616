use notekit_core::{GridError, GridModel};

#[test]
fn set_cell_then_read_returns_value() {
    let grid = GridModel::new(3, 4);
    let next = grid.set_cell(1, 2, "x").unwrap();
    assert_eq!(next.cell(1, 2).unwrap(), "x");
    assert_eq!(grid.cell(1, 2).unwrap(), "");
}

#[test]
fn set_cell_leaves_every_other_cell_unchanged() {
    let grid = GridModel::new(3, 3)
        .set_cell(0, 0, "a")
        .unwrap()
        .set_cell(2, 2, "z")
        .unwrap();
    let next = grid.set_cell(1, 1, "m").unwrap();

    for row in 0..3 {
        for col in 0..3 {
            if (row, col) == (1, 1) {
                continue;
            }
            assert_eq!(next.cell(row, col).unwrap(), grid.cell(row, col).unwrap());
        }
    }
}

#[test]
fn set_cell_shares_untouched_rows() {
    let grid = GridModel::new(3, 2);
    let next = grid.set_cell(1, 0, "v").unwrap();
    assert!(next.shares_row_with(&grid, 0));
    assert!(!next.shares_row_with(&grid, 1));
    assert!(next.shares_row_with(&grid, 2));
}

#[test]
fn set_cell_out_of_range_fails_with_invalid_index() {
    let grid = GridModel::new(2, 3);
    assert_eq!(
        grid.set_cell(0, 3, "x").unwrap_err(),
        GridError::InvalidIndex {
            row: 0,
            col: 3,
            rows: 2,
            cols: 3
        }
    );
    assert!(matches!(
        grid.set_cell(5, 0, "x"),
        Err(GridError::InvalidIndex { row: 5, .. })
    ));
}

#[test]
fn to_rows_round_trips_through_from_rows() {
    let grid = GridModel::new(2, 2).set_cell(1, 0, "b").unwrap();
    let rebuilt = GridModel::from_rows(grid.to_rows());
    assert_eq!(rebuilt, grid);
    assert_eq!(rebuilt.row(1).unwrap(), ["b".to_string(), String::new()]);
    assert!(rebuilt.row(2).is_none());
}
