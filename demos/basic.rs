//! Basic example of using the nonet engine

use nonet_core::{Grid, SolveMode, Solver, TraceKind};

fn main() {
    let puzzle =
        "..17..5.9573.241.68..5.1..27..295.18..94..3.56528....7465.8..71...159..49.8..7.5.";

    // Parse a puzzle from a string
    let mut grid = Grid::from_string(puzzle).expect("valid 81-character puzzle");
    println!("Puzzle ({} givens):", grid.given_count());
    println!("{}", grid);

    // Run one interactive-style step
    let mut preview = grid.clone();
    if let Some(forced) = preview.single_step() {
        println!("First forced cell: {} = {}\n", forced.pos, forced.value);
    }

    // Solve it
    let solver = Solver::new();
    match solver.solve(&mut grid) {
        Ok(trace) => {
            println!("Solution:");
            println!("{}", grid);
            let guesses = trace
                .iter()
                .filter(|t| t.kind == TraceKind::Guess)
                .count();
            println!(
                "Settled {} cells ({} deduced, {} guessed)",
                trace.len(),
                trace.len() - guesses,
                guesses
            );
        }
        Err(e) => println!("No solution found: {}", e),
    }

    // The fallback mode never backtracks; it mirrors interactive solving
    let mut again = Grid::from_string(puzzle).expect("valid 81-character puzzle");
    let forward = Solver::with_mode(SolveMode::NoBacktrack);
    println!(
        "\nNo-backtrack mode solved it too: {}",
        forward.solve(&mut again).is_ok() && again.is_solved()
    );
}
