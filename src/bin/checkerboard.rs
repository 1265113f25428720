use pixel_canvas::{create_img, height, save_img, width, Error};

fn main() -> Result<(), Error> {
    println!("A simple image: every third pixel is black");

    let mut img = create_img(16, 16, (255, 255, 255));
    let mut count = 0;
    for row in 0..height(&img) {
        for col in 0..width(&img) {
            count += 1;
            if count % 3 == 0 {
                img[row][col] = (0, 0, 0);
            }
        }
    }

    println!("Writing checkerboard.png");
    save_img(&img, "checkerboard.png", 1)?;
    println!("Writing checkerboard-big.png");
    save_img(&img, "checkerboard-big.png", 10)?;
    Ok(())
}
