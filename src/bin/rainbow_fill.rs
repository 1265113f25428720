use pixel_canvas::{copy_img, create_img, save_anim, Error, Pixel, DEFAULT_DURATION};

const HEIGHT: usize = 16;
const WIDTH: usize = 16;
const MAX_FRAMES: usize = 60;

/// Converts hue, saturation and value, all between 0 and 1, to a pixel.
fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Pixel {
    let sector = (hue * 6.0).floor();
    let fraction = hue * 6.0 - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * fraction);
    let t = value * (1.0 - saturation * (1.0 - fraction));
    let (red, green, blue) = match sector as i64 % 6 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };
    let component = |c: f64| (c * 255.0).round() as i32;
    (component(red), component(green), component(blue))
}

fn main() -> Result<(), Error> {
    println!("A more complicated animation: pixels fill up with a rainbow");

    let total = HEIGHT * WIDTH;
    let skip = total.div_ceil(MAX_FRAMES - 1);
    let mut frame = create_img(HEIGHT, WIDTH, (255, 255, 255));
    let mut anim = vec![copy_img(&frame)];
    let mut count = 0;
    for row in 0..HEIGHT {
        for col in 0..WIDTH {
            count += 1;
            frame[row][col] = hsv_to_rgb(count as f64 / total as f64, 1.0, 1.0);
            if count % skip == 0 {
                anim.push(copy_img(&frame));
            }
        }
    }

    println!("Writing rainbow_fill.gif");
    save_anim(&anim, "rainbow_fill.gif", 1, DEFAULT_DURATION)?;
    println!("Writing rainbow_fill-big.gif");
    save_anim(&anim, "rainbow_fill-big.gif", 10, DEFAULT_DURATION)?;
    Ok(())
}
