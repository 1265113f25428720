use std::env::args_os;
use std::path::PathBuf;

use pixel_canvas::{copy_img, load_img, save_anim, Error, Pixel, ResampleFilter, Size};

const NEON_GREEN: Pixel = (57, 255, 20);
const FRAME_DURATION: u32 = 300;

fn main() -> Result<(), Error> {
    println!("Loading an existing image file and giving it laser eyes");

    let input_file = args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("cat.jpg"));
    let cat = load_img(&input_file, Some(Size::new(16, 16)), ResampleFilter::default())?;
    let mut cat_laser_eyes = copy_img(&cat);
    cat_laser_eyes[8][5] = NEON_GREEN;
    cat_laser_eyes[8][6] = NEON_GREEN;
    cat_laser_eyes[7][10] = NEON_GREEN;
    cat_laser_eyes[7][11] = NEON_GREEN;
    let anim = [cat, cat_laser_eyes];

    println!("Writing laser_eyes.gif");
    save_anim(&anim, "laser_eyes.gif", 1, FRAME_DURATION)?;
    println!("Writing laser_eyes-big.gif");
    save_anim(&anim, "laser_eyes-big.gif", 10, FRAME_DURATION)?;
    Ok(())
}
