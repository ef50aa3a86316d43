//! Print the generated view of a few sectors around the origin.
//!
//! Run with: cargo run --example print_sector

use sector::{STARS_PER_SECTOR, sector_name, stars_for};

fn main() {
    for y in -1..=1 {
        for x in -1..=1 {
            let name = sector_name(x, y);
            let stars = stars_for(x, y);
            let brightest = stars
                .iter()
                .max_by(|a, b| a.opacity.partial_cmp(&b.opacity).unwrap())
                .unwrap();

            println!("({x:>2}, {y:>2})  {name:<18} {STARS_PER_SECTOR} stars");
            println!(
                "          brightest at ({:.1}%, {:.1}%), {} opacity {:.2}",
                brightest.x,
                brightest.y,
                brightest.color.to_hex(),
                brightest.opacity
            );
        }
    }
}
