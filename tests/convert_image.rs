use pixel_canvas::{
    convert, create_img, height, load_anim, load_img, save_anim, save_img, width, CLIParser,
    ResampleFilter, DEFAULT_DURATION,
};
use std::fs;
use std::path::PathBuf;

fn get_image_path(file_name: &str) -> PathBuf {
    let mut root_path = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
    root_path.push(file_name);
    root_path
}

fn cleanup(paths: &[&PathBuf]) {
    for path in paths {
        if path.exists() && path.is_file() {
            fs::remove_file(path).expect("Deletion of output file failed");
        }
    }
}

#[test]
fn test_convert_image_with_resize_and_scale() {
    let input_image_path = get_image_path("convert_input.png");
    let result_image_path = get_image_path("convert_result.png");
    cleanup(&[&input_image_path, &result_image_path]);
    save_img(&create_img(32, 32, (0, 128, 255)), &input_image_path, 1)
        .expect("Writing test input failed");

    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        input_image_path.to_str().unwrap(),
        result_image_path.to_str().unwrap(),
        "--size",
        "16x8",
        "--filter",
        "Nearest",
        "--scale",
        "3",
    ]);
    convert(&arguments).expect("Conversion failed");
    assert!(result_image_path.exists(), "Output file was not created");

    let result = load_img(&result_image_path, None, ResampleFilter::default())
        .expect("Output file is not a readable image");
    assert_eq!(height(&result), 24);
    assert_eq!(width(&result), 48);
    assert_eq!(result[0][0], (0, 128, 255));
    cleanup(&[&input_image_path, &result_image_path]);
}

#[test]
fn test_convert_animation() {
    let input_image_path = get_image_path("convert_input.gif");
    let result_image_path = get_image_path("convert_result.gif");
    cleanup(&[&input_image_path, &result_image_path]);
    let frames = vec![
        create_img(4, 4, (255, 0, 0)),
        create_img(4, 4, (0, 255, 0)),
        create_img(4, 4, (0, 0, 255)),
    ];
    save_anim(&frames, &input_image_path, 1, DEFAULT_DURATION)
        .expect("Writing test input failed");

    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        input_image_path.to_str().unwrap(),
        result_image_path.to_str().unwrap(),
        "--animation",
        "--scale",
        "2",
        "--duration",
        "250",
    ]);
    convert(&arguments).expect("Conversion failed");

    let result = load_anim(&result_image_path, None, ResampleFilter::default())
        .expect("Output file is not a readable animation");
    assert_eq!(result.len(), 3);
    assert_eq!((height(&result[2]), width(&result[2])), (8, 8));
    assert_eq!(result[2][7][7], (0, 0, 255));
    cleanup(&[&input_image_path, &result_image_path]);
}

#[test]
fn test_convert_missing_input_fails() {
    let input_image_path = get_image_path("convert_missing.png");
    let result_image_path = get_image_path("convert_missing_result.png");
    cleanup(&[&input_image_path, &result_image_path]);

    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        input_image_path.to_str().unwrap(),
        result_image_path.to_str().unwrap(),
    ]);
    assert!(convert(&arguments).is_err());
    assert!(!result_image_path.exists());
}
