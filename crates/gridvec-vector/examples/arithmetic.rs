use gridvec_vector::*;

fn main() {
    let mut position = Vector2D::new(1.0, 2.0);
    let velocity = Vector2D::new(0.25, -0.1);
    let num_steps = 5;

    println!("Initial State:");
    println!("  Position: {}", position);
    println!("  Velocity: {}", velocity);
    println!("\nMoving...");

    for i in 0..num_steps {
        match position.move_by(&velocity) {
            Ok(p) => println!("Step {:>2}: Position: {}", i + 1, p),
            Err(e) => {
                eprintln!("Error during step {}: {}", i + 1, e);
                break;
            }
        }
    }

    println!("\nCopying arithmetic:");
    println!("  {} + {} = {}", position, velocity, &position + &velocity);
    println!("  2 * {} = {}", position, 2.0 * &position);
    println!("  -{} = {}", position, -&position);
    println!("  |{}| = {}", position, position.magnitude());

    if let Err(e) = position.rotate(90.0) {
        eprintln!("Failed to rotate: {}", e);
    }
    println!("  Rotated 90 degrees: {}", position);

    let hash = position.hash();
    println!("\nHashed {} -> {:#018x}", position, hash);
    match position.rotate(90.0) {
        Ok(_) => println!("Unexpected: rotation after hashing succeeded"),
        Err(e) => println!("Rotation after hashing rejected: {}", e),
    }

    let frozen = position.freeze();
    let mut thawed = frozen.copy();
    match thawed.scale(0.5) {
        Ok(v) => println!("Scaled copy of frozen {}: {}", frozen, v),
        Err(e) => eprintln!("Failed to scale copy: {}", e),
    }
}
