use pixel_canvas::{copy_img, create_img, save_anim, Error, Image, DEFAULT_DURATION};

const HEIGHT: usize = 16;
const WIDTH: usize = 16;

fn main() -> Result<(), Error> {
    println!("A simple animation: one more row turns red in every frame");

    let mut anim: Vec<Image> = vec![create_img(HEIGHT, WIDTH, (255, 255, 255))];
    for row in 0..HEIGHT {
        let mut next_frame = copy_img(&anim[anim.len() - 1]);
        for col in 0..WIDTH {
            next_frame[row][col] = (255, 0, 0);
        }
        anim.push(next_frame);
    }

    println!("Writing row_sweep.gif");
    save_anim(&anim, "row_sweep.gif", 1, DEFAULT_DURATION)?;
    println!("Writing row_sweep-big.gif");
    save_anim(&anim, "row_sweep-big.gif", 10, DEFAULT_DURATION)?;
    Ok(())
}
