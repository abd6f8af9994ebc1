//! Tick engine behavior through the public API.

use tui_snake::core::{advance, place_food, Food, Grid, Outcome, Position, SimpleRng, Snake};
use tui_snake::types::{Direction, FoodKind};

fn food_at(x: i32, y: i32) -> Food {
    Food {
        pos: Position::new(x, y),
        kind: FoodKind::Cherry,
    }
}

#[test]
fn test_plain_move_shifts_body() {
    // Snake [(10,10),(9,10),(8,10)] heading Right, food elsewhere.
    let grid = Grid::new(20);
    let snake = Snake::from_segments(vec![
        Position::new(10, 10),
        Position::new(9, 10),
        Position::new(8, 10),
    ]);
    let mut rng = SimpleRng::new(1);

    let Outcome::Moved { snake, ate, food } =
        advance(grid, &snake, Direction::Right, food_at(0, 0), &mut rng)
    else {
        panic!("expected a move");
    };

    assert!(!ate);
    assert!(food.is_none());
    assert_eq!(
        snake.segments().collect::<Vec<_>>(),
        vec![
            Position::new(11, 10),
            Position::new(10, 10),
            Position::new(9, 10)
        ]
    );
}

#[test]
fn test_eating_grows_and_respawns_food() {
    // Same snake, food at (11,10): length 4 and food relocated.
    let grid = Grid::new(20);
    let snake = Snake::from_segments(vec![
        Position::new(10, 10),
        Position::new(9, 10),
        Position::new(8, 10),
    ]);
    let mut rng = SimpleRng::new(77);

    let Outcome::Moved { snake, ate, food } =
        advance(grid, &snake, Direction::Right, food_at(11, 10), &mut rng)
    else {
        panic!("expected a move");
    };

    assert!(ate);
    assert_eq!(
        snake.segments().collect::<Vec<_>>(),
        vec![
            Position::new(11, 10),
            Position::new(10, 10),
            Position::new(9, 10),
            Position::new(8, 10)
        ]
    );
    let food = food.expect("plenty of free cells");
    assert!(!snake.contains(food.pos));
}

#[test]
fn test_wrapped_move_can_collide_with_body() {
    // Head at the high edge wraps to x=0 and lands on a body segment.
    let grid = Grid::new(20);
    let snake = Snake::from_segments(vec![
        Position::new(19, 10),
        Position::new(0, 10),
        Position::new(1, 10),
        Position::new(2, 10),
    ]);
    let mut rng = SimpleRng::new(1);

    assert_eq!(
        advance(grid, &snake, Direction::Right, food_at(5, 5), &mut rng),
        Outcome::Collided
    );
}

#[test]
fn test_wrap_moves_are_ordinary_moves() {
    // A lone head crossing every edge stays on the grid.
    let grid = Grid::new(20);
    let mut rng = SimpleRng::new(1);
    let cases = [
        (Position::new(19, 5), Direction::Right, Position::new(0, 5)),
        (Position::new(0, 5), Direction::Left, Position::new(19, 5)),
        (Position::new(5, 19), Direction::Down, Position::new(5, 0)),
        (Position::new(5, 0), Direction::Up, Position::new(5, 19)),
    ];
    for (start, dir, expected) in cases {
        let snake = Snake::from_segments(vec![start]);
        let Outcome::Moved { snake, .. } = advance(grid, &snake, dir, food_at(9, 9), &mut rng)
        else {
            panic!("expected a move");
        };
        assert_eq!(snake.head(), expected);
    }
}

#[test]
fn test_tail_chase_never_collides_without_growth() {
    // A 2x2 loop cycled forever is legal as long as nothing grows.
    let grid = Grid::new(20);
    let mut snake = Snake::from_segments(vec![
        Position::new(5, 5),
        Position::new(4, 5),
        Position::new(4, 6),
        Position::new(5, 6),
    ]);
    let mut rng = SimpleRng::new(1);
    let loop_dirs = [
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
    ];

    for round in 0..8 {
        let dir = loop_dirs[round % 4];
        match advance(grid, &snake, dir, food_at(0, 0), &mut rng) {
            Outcome::Moved { snake: next, .. } => snake = next,
            Outcome::Collided => panic!("tail chase collided on round {round}"),
        }
        assert_eq!(snake.len(), 4);
    }
}

#[test]
fn test_growth_makes_tail_cell_lethal() {
    let grid = Grid::new(20);
    let snake = Snake::from_segments(vec![
        Position::new(5, 5),
        Position::new(4, 5),
        Position::new(4, 6),
        Position::new(5, 6),
    ]);
    let mut rng = SimpleRng::new(1);

    // Food on the tail cell turns the same move into a collision.
    assert_eq!(
        advance(grid, &snake, Direction::Down, food_at(5, 6), &mut rng),
        Outcome::Collided
    );
}

#[test]
fn test_placement_uniform_sampling_excludes_snake() {
    let grid = Grid::new(6);
    let snake = Snake::from_segments(vec![
        Position::new(0, 0),
        Position::new(1, 0),
        Position::new(2, 0),
        Position::new(3, 0),
        Position::new(4, 0),
        Position::new(5, 0),
    ]);
    for seed in 1..200 {
        let mut rng = SimpleRng::new(seed);
        let pos = place_food(grid, &mut rng, &snake).unwrap();
        assert!(pos.y > 0, "food landed on the snake row: {pos:?}");
    }
}

#[test]
fn test_placement_terminates_on_one_free_cell() {
    // 3x3 grid with a single hole: must find it for every seed.
    let grid = Grid::new(3);
    let mut segments = Vec::new();
    for y in 0..3 {
        for x in 0..3 {
            if (x, y) != (1, 1) {
                segments.push(Position::new(x, y));
            }
        }
    }
    let snake = Snake::from_segments(segments);
    for seed in 1..100 {
        let mut rng = SimpleRng::new(seed);
        assert_eq!(
            place_food(grid, &mut rng, &snake),
            Some(Position::new(1, 1))
        );
    }
}
