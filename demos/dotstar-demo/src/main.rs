// Demonstration entry point
// Runs the matcher on the long-run regression input and one stairs count

use dotstar::{climb_stairs, matches};

fn main() {
    match matches("aaaaaaaaaaaaaaaaaaab", "a*a*b") {
        Ok(verdict) => println!("{verdict}"),
        Err(err) => eprintln!("{err}"),
    }
    println!("{}", climb_stairs(6));
}
