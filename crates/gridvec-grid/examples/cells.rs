use gridvec_grid::{GridSpec, floor};
use gridvec_vector::Vector2D;

fn main() {
    // Floor of a few values on the default number line (size 100, offset 200)
    println!("Floor with size 100 and default offset:");
    for value in [-250.0, -150.0, -10.0, 0.0, 10.0, 120.0] {
        match floor(value, 100.0) {
            Ok(edge) => println!("  floor({:>6}) = {:>6}", value, edge),
            Err(e) => eprintln!("  floor({}) failed: {}", value, e),
        }
    }

    // A zero size is rejected
    if let Err(e) = floor(10.0, 0.0) {
        println!("\nfloor(10, 0) rejected: {}", e);
    }

    let spec = match GridSpec::with_default_offset(50.0) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("Failed to create grid: {}", e);
            return;
        }
    };
    println!("\n{}", spec);

    let points = [
        Vector2D::new(12.5, 40.0),
        Vector2D::new(-12.5, 40.0),
        Vector2D::new(49.999, 0.0),
        Vector2D::new(50.0, -0.001),
    ];
    for point in &points {
        let cell = spec.cell_of(point);
        println!("  {} -> cell {} (hash {:#018x})", point, cell, cell.hash_value());
    }
}
