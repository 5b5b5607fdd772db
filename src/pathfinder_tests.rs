use crate::common::{
    ConfigurationError, GoalTermination, Grid, PathfindingError, Point, SearchOptions,
};
use crate::pathfinder::Pathfinder;

fn pathfinder_with_grid(rows: Vec<Vec<i32>>, acceptable: &[i32]) -> Pathfinder {
    let mut pathfinder = Pathfinder::new();
    pathfinder.set_grid(Grid::new(rows).unwrap());
    pathfinder.set_acceptable_tiles(acceptable.iter().copied());
    pathfinder
}

fn diagonal_corridor() -> Vec<Vec<i32>> {
    vec![
        vec![1, 0, 0, 0, 0],
        vec![0, 1, 0, 0, 0],
        vec![0, 0, 1, 0, 0],
        vec![0, 0, 0, 1, 0],
        vec![0, 0, 0, 0, 1],
    ]
}

fn split_grid() -> Vec<Vec<i32>> {
    vec![
        vec![1, 1, 0, 1, 1],
        vec![1, 1, 0, 1, 1],
        vec![1, 1, 0, 1, 1],
        vec![1, 1, 1, 1, 1],
        vec![1, 1, 1, 1, 1],
    ]
}

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

// Every consecutive pair of points is one cardinal step, or one diagonal step when allowed
fn assert_continuous(path: &[Point], allow_diagonals: bool) {
    for pair in path.windows(2) {
        let direction = pair[0]
            .get_direction_to(pair[1])
            .unwrap_or_else(|| panic!("{:?} -> {:?} is not a single step", pair[0], pair[1]));
        assert!(allow_diagonals || !direction.is_diagonal());
    }
}

// It should find a path successfully with corner cutting enabled
#[test]
pub fn corner_cutting() {
    let mut pathfinder = pathfinder_with_grid(diagonal_corridor(), &[1]);
    pathfinder.enable_corner_cutting();
    pathfinder.enable_diagonals();

    let path = pathfinder.find_path(0, 0, 4, 4).unwrap();

    assert_eq!(path, (0..5).map(|i| p(i, i)).collect::<Vec<_>>());
}

// It should fail to find a path with corner cutting disabled
#[test]
pub fn fail_corner_cutting() {
    let mut pathfinder = pathfinder_with_grid(diagonal_corridor(), &[1]);
    pathfinder.disable_corner_cutting();
    pathfinder.enable_diagonals();

    assert_eq!(
        pathfinder.find_path(0, 0, 4, 4),
        Err(PathfindingError::PathNotFound)
    );
}

#[test]
pub fn successful_path() {
    let pathfinder = pathfinder_with_grid(split_grid(), &[1]);

    let path = pathfinder.find_path(1, 2, 3, 2).unwrap();

    assert_eq!(path, vec![p(1, 2), p(1, 3), p(2, 3), p(3, 3), p(3, 2)]);
}

#[test]
pub fn avoid_additional_point() {
    let mut pathfinder = pathfinder_with_grid(split_grid(), &[1]);
    pathfinder.avoid_point(2, 3);

    let path = pathfinder.find_path(1, 2, 3, 2).unwrap();

    assert_eq!(path.len(), 7);
    assert_eq!(path[0], p(1, 2));
    assert_eq!(path[2], p(1, 4));
    assert!(!path.contains(&p(2, 3)));

    pathfinder.stop_avoiding_point(2, 3);
    assert_eq!(pathfinder.find_path(1, 2, 3, 2).unwrap().len(), 5);
}

#[test]
pub fn stop_avoiding_all_points() {
    let mut pathfinder = pathfinder_with_grid(split_grid(), &[1]);
    pathfinder.avoid_point(2, 3);
    pathfinder.avoid_point(2, 4);
    assert_eq!(
        pathfinder.find_path(1, 2, 3, 2),
        Err(PathfindingError::PathNotFound)
    );

    pathfinder.stop_avoiding_all_points();
    assert!(!pathfinder.is_avoided(2, 3));
    assert_eq!(pathfinder.find_path(1, 2, 3, 2).unwrap().len(), 5);
}

// Clearing point costs must leave avoided points alone
#[test]
pub fn remove_all_point_costs_keeps_avoided_points() {
    let mut pathfinder = pathfinder_with_grid(split_grid(), &[1]);
    pathfinder.avoid_point(2, 3);
    pathfinder.set_point_cost(0, 0, 3.0).unwrap();

    pathfinder.remove_all_point_costs();

    assert_eq!(pathfinder.point_cost(0, 0), None);
    assert!(pathfinder.is_avoided(2, 3));
    assert_eq!(pathfinder.find_path(1, 2, 3, 2).unwrap().len(), 7);
}

#[test]
pub fn diagonals() {
    let mut pathfinder = pathfinder_with_grid(vec![vec![1; 5]; 5], &[1]);
    pathfinder.enable_diagonals();

    let path = pathfinder.find_path(0, 0, 4, 4).unwrap();

    assert_eq!(path, (0..5).map(|i| p(i, i)).collect::<Vec<_>>());
}

// It should work in a straight line with diagonals
#[test]
pub fn straight_line_diagonals() {
    let mut pathfinder = pathfinder_with_grid(
        vec![
            vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            vec![1, 1, 0, 1, 1, 1, 1, 0, 1, 1],
            vec![1, 1, 0, 1, 1, 1, 1, 0, 1, 1],
        ],
        &[1],
    );
    pathfinder.enable_diagonals();

    let path = pathfinder.find_path(0, 0, 9, 0).unwrap();

    assert_eq!(path.len(), 10);
    assert!(path.iter().all(|point| point.y == 0));
}

#[test]
pub fn same_tile() {
    let pathfinder = pathfinder_with_grid(split_grid(), &[1]);

    assert_eq!(pathfinder.find_path(1, 2, 1, 2), Ok(vec![]));
}

#[test]
pub fn unacceptable_goal_tile_is_empty() {
    let pathfinder = pathfinder_with_grid(split_grid(), &[1]);

    assert_eq!(pathfinder.find_path(1, 2, 2, 0), Ok(vec![]));
}

// It should prefer straight paths when possible
#[test]
pub fn prefer_straight_paths() {
    let mut pathfinder = pathfinder_with_grid(vec![vec![0; 3]; 3], &[0]);
    pathfinder.enable_diagonals();

    let path = pathfinder.find_path(0, 1, 2, 1).unwrap();

    assert_eq!(path, vec![p(0, 1), p(1, 1), p(2, 1)]);
}

// It should prefer diagonal paths when they are faster
#[test]
pub fn prefer_diagonal_paths() {
    let mut pathfinder = pathfinder_with_grid(vec![vec![0; 5]; 5], &[0]);
    pathfinder.enable_diagonals();

    let path = pathfinder.find_path(4, 4, 2, 2).unwrap();

    assert_eq!(path, vec![p(4, 4), p(3, 3), p(2, 2)]);
}

#[test]
pub fn missing_acceptable_tiles() {
    let mut pathfinder = Pathfinder::new();
    pathfinder.set_grid(Grid::new(split_grid()).unwrap());

    assert_eq!(
        pathfinder.find_path(0, 0, 1, 1),
        Err(PathfindingError::Configuration(ConfigurationError::NoAcceptableTiles))
    );
}

#[test]
pub fn missing_grid() {
    let mut pathfinder = Pathfinder::new();
    pathfinder.set_acceptable_tiles([1]);

    assert_eq!(
        pathfinder.find_path(0, 0, 1, 1),
        Err(PathfindingError::Configuration(ConfigurationError::NoGrid))
    );
}

#[test]
pub fn out_of_bounds_coordinates() {
    let pathfinder = pathfinder_with_grid(split_grid(), &[1]);

    for (sx, sy, ex, ey) in [
        (-1, 0, 1, 1),
        (0, -1, 1, 1),
        (0, 0, -1, 1),
        (0, 0, 1, -1),
        (5, 0, 1, 1),
        (0, 0, 1, 5),
    ] {
        let res = pathfinder.find_path(sx, sy, ex, ey);
        assert!(
            matches!(
                res,
                Err(PathfindingError::Configuration(ConfigurationError::OutOfBounds { .. }))
            ),
            "({sx}, {sy}) -> ({ex}, {ey}): {res:?}"
        );
    }
}

#[test]
pub fn invalid_costs_are_rejected() {
    let mut pathfinder = Pathfinder::new();

    for cost in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(pathfinder.set_tile_cost(1, cost).is_err());
        assert!(pathfinder.set_point_cost(0, 0, cost).is_err());
    }

    assert_eq!(pathfinder.tile_cost(1), 1.0);
    assert_eq!(pathfinder.point_cost(0, 0), None);
}

// Coordinates of 10 and above must not alias one another
#[test]
pub fn large_coordinates() {
    let mut rows = vec![vec![0; 14]; 14];
    // A staircase from (9, 10) down to (13, 13)
    for (y, row) in rows.iter_mut().enumerate().skip(10) {
        row[y] = 1;
        row[y - 1] = 1;
    }
    let mut pathfinder = pathfinder_with_grid(rows, &[1]);
    pathfinder.enable_diagonals();

    let path = pathfinder.find_path(9, 10, 13, 13).unwrap();

    assert_eq!(path.first(), Some(&p(9, 10)));
    assert_eq!(path.last(), Some(&p(13, 13)));
    assert_continuous(&path, true);
    assert!(path.iter().all(|point| point.x >= 9 && point.y >= 10));
}

#[test]
pub fn point_costs_steer_the_path() {
    let mut pathfinder = pathfinder_with_grid(vec![vec![1; 5]; 5], &[1]);

    let direct = pathfinder.search(p(0, 2), p(4, 2)).unwrap();
    assert_eq!(direct.path().len(), 5);
    assert_eq!(direct.cost(), 4.0);

    pathfinder.set_point_cost(2, 2, 10.0).unwrap();
    let detour = pathfinder.search(p(0, 2), p(4, 2)).unwrap();
    assert_eq!(detour.path().len(), 7);
    assert_eq!(detour.cost(), 6.0);
    assert!(!detour.path().contains(&p(2, 2)));

    pathfinder.remove_point_cost(2, 2);
    assert_eq!(pathfinder.search(p(0, 2), p(4, 2)).unwrap(), direct);
}

#[test]
pub fn tile_costs_steer_the_path() {
    let mut pathfinder = pathfinder_with_grid(
        vec![
            vec![1, 1, 1, 1, 1],
            vec![1, 2, 2, 2, 1],
            vec![1, 1, 1, 1, 1],
        ],
        &[1, 2],
    );
    pathfinder.set_tile_cost(2, 5.0).unwrap();
    assert_eq!(pathfinder.tile_cost(2), 5.0);

    let path = pathfinder.find_path(0, 1, 4, 1).unwrap();
    assert_eq!(path.len(), 7);
    assert!(path.iter().all(|point| point.y != 1 || point.x == 0 || point.x == 4));

    pathfinder.remove_tile_cost(2);
    assert_eq!(pathfinder.find_path(0, 1, 4, 1).unwrap().len(), 5);
}

#[test]
pub fn settled_termination_finds_cheaper_arrival() {
    let mut pathfinder = pathfinder_with_grid(vec![vec![1; 3]; 3], &[1]);
    pathfinder.enable_diagonals();
    pathfinder.set_point_cost(2, 2, 10.0).unwrap();

    let first_touch = pathfinder.search(p(0, 0), p(2, 2)).unwrap();

    pathfinder.set_goal_termination(GoalTermination::Settled);
    let settled = pathfinder.search(p(0, 0), p(2, 2)).unwrap();

    assert!(settled.cost() < first_touch.cost());
    assert_eq!(settled.path().len(), 4);
    assert_continuous(settled.path(), true);
}

// Point costs below 1.0 must not make a settled search settle for the direct route
#[test]
pub fn settled_termination_takes_discounted_detour() {
    let mut pathfinder = pathfinder_with_grid(vec![vec![1; 5]; 3], &[1]);
    for x in 0..5 {
        pathfinder.set_point_cost(x, 2, 0.01).unwrap();
    }
    pathfinder.set_point_cost(0, 1, 0.01).unwrap();
    pathfinder.set_point_cost(4, 1, 0.01).unwrap();

    let first_touch = pathfinder.search(p(0, 0), p(4, 0)).unwrap();

    pathfinder.set_goal_termination(GoalTermination::Settled);
    let settled = pathfinder.search(p(0, 0), p(4, 0)).unwrap();

    assert_eq!(
        settled.path(),
        &[
            p(0, 0),
            p(0, 1),
            p(0, 2),
            p(1, 2),
            p(2, 2),
            p(3, 2),
            p(4, 2),
            p(4, 1),
            p(4, 0)
        ]
    );
    assert!((settled.cost() - 1.07).abs() < 1e-9);
    assert!(settled.cost() < first_touch.cost());
}

#[test]
pub fn max_ops_aborts_search() {
    let mut pathfinder = pathfinder_with_grid(vec![vec![1; 20]; 20], &[1]);
    pathfinder.set_max_ops(Some(3));

    assert_eq!(
        pathfinder.find_path(0, 0, 19, 19),
        Err(PathfindingError::SearchAborted { ops: 3 })
    );

    pathfinder.set_max_ops(None);
    assert_eq!(pathfinder.find_path(0, 0, 19, 19).unwrap().len(), 39);
}

#[test]
pub fn corner_cutting_gate_on_paths() {
    let rows = vec![
        vec![1, 1, 1, 0, 1, 1],
        vec![1, 0, 1, 1, 1, 0],
        vec![1, 1, 0, 1, 0, 1],
        vec![0, 1, 1, 1, 1, 1],
        vec![1, 1, 0, 1, 0, 1],
    ];
    let mut pathfinder = pathfinder_with_grid(rows.clone(), &[1]);
    pathfinder.enable_diagonals();
    let grid = Grid::new(rows).unwrap();
    let walkable = |point: Point| grid.get(point) == Some(1);

    let path = pathfinder.find_path(0, 0, 5, 4).unwrap();
    assert_eq!(path.first(), Some(&p(0, 0)));
    assert_eq!(path.last(), Some(&p(5, 4)));
    assert_continuous(&path, true);

    for pair in path.windows(2) {
        let direction = pair[0].get_direction_to(pair[1]).unwrap();
        if let Some((a, b)) = direction.flanking() {
            assert!(walkable(pair[0].add_direction(a)));
            assert!(walkable(pair[0].add_direction(b)));
        }
    }
}

#[test]
pub fn searches_share_a_pathfinder_across_threads() {
    let mut pathfinder = pathfinder_with_grid(split_grid(), &[1]);
    pathfinder.enable_diagonals();
    let expected = pathfinder.find_path(0, 0, 4, 0).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| pathfinder.find_path(0, 0, 4, 0)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
}

#[test]
pub fn options_round_trip_through_serde() {
    let options = SearchOptions {
        allow_diagonals: true,
        allow_corner_cutting: false,
        max_ops: Some(250),
        goal_termination: GoalTermination::Settled,
    };
    let json = serde_json::to_string(&options).unwrap();
    assert!(json.contains("\"goal_termination\":\"settled\""));

    let pathfinder = Pathfinder::with_options(serde_json::from_str(&json).unwrap());
    assert_eq!(pathfinder.options(), &options);
    assert!(pathfinder.diagonals_enabled());
    assert!(!pathfinder.corner_cutting_enabled());
}
