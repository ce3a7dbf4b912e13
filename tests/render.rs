use std::fs;
use std::process::Command;

use image::Rgb;
use tourview::{render, Error, Instance, Solution};

const INSTANCE: &str = "3 0 0 2\n0 0.0 0.0\n1 1.0 0.0\n2 0.0 1.0\n";
const SOLUTION: &str = "3 2.41\n0 0.0 0.0\n1 1.0 0.0\n2 0.0 1.0\n";

#[test]
fn renders_files_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let instance_path = dir.path().join("triangle.txt");
    let solution_path = dir.path().join("triangle.sol");
    let output_path = dir.path().join("triangle.png");
    fs::write(&instance_path, INSTANCE).unwrap();
    fs::write(&solution_path, SOLUTION).unwrap();

    let instance = Instance::from_path(&instance_path).unwrap();
    let solution = Solution::from_path(&solution_path).unwrap();
    let canvas = render(&instance, &solution, 10.0).unwrap();
    canvas.save(&output_path).unwrap();

    let written = image::open(&output_path).unwrap().to_rgb8();
    assert_eq!(written.dimensions(), (60, 60));
    assert_eq!(written.get_pixel(0, 0), &Rgb([220, 235, 255]));
    // the tour edges end on the marker centers and are drawn over them
    assert_eq!(written.get_pixel(25, 25), &Rgb([40, 65, 90]));
    assert_eq!(written.get_pixel(23, 23), &Rgb([80, 135, 180]));
    assert_eq!(written.get_pixel(30, 30), &Rgb([40, 65, 90]));
}

#[test]
fn missing_instance_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    match Instance::from_path(&dir.path().join("absent.txt")) {
        Err(Error::Io(_)) => {}
        _ => panic!("expected an I/O error"),
    }
}

#[test]
fn cli_rejects_missing_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_tourview"))
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr was: {stderr}");
    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn cli_defaults_output_and_scale() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("triangle.txt"), INSTANCE).unwrap();
    fs::write(dir.path().join("triangle.sol"), SOLUTION).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_tourview"))
        .current_dir(dir.path())
        .args(["triangle.txt", "triangle.sol"])
        .status()
        .unwrap();

    assert!(status.success());
    let written = image::open(dir.path().join("out.png")).unwrap().to_rgb8();
    // default scale is 1000 pixels per unit, plus the 25 pixel border
    assert_eq!(written.dimensions(), (1050, 1050));
}

#[test]
fn cli_accepts_output_and_scale_overrides() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("triangle.txt"), INSTANCE).unwrap();
    fs::write(dir.path().join("triangle.sol"), SOLUTION).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_tourview"))
        .current_dir(dir.path())
        .args(["triangle.txt", "triangle.sol", "small.png", "10"])
        .status()
        .unwrap();

    assert!(status.success());
    let written = image::open(dir.path().join("small.png")).unwrap().to_rgb8();
    assert_eq!(written.dimensions(), (60, 60));
    assert_eq!(written.get_pixel(25, 25), &Rgb([40, 65, 90]));
    assert_eq!(written.get_pixel(23, 23), &Rgb([80, 135, 180]));
}

#[test]
fn tourgen_is_deterministic_per_seed() {
    let run = |seed: &str| {
        Command::new(env!("CARGO_BIN_EXE_tourgen"))
            .args(["-s", seed])
            .output()
            .unwrap()
    };
    let a = run("5");
    let b = run("5");
    let c = run("6");

    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
    assert_ne!(a.stdout, c.stdout);

    let instance = Instance::parse(&a.stdout[..]).unwrap();
    assert_eq!(instance.len(), 10);
    assert_eq!(instance.min_id(), 1);
    assert_eq!(instance.max_id(), 10);
}

#[test]
fn generated_instances_render() {
    let dir = tempfile::tempdir().unwrap();
    let instance_path = dir.path().join("generated.txt");

    let status = Command::new(env!("CARGO_BIN_EXE_tourgen"))
        .args(["-n", "6", "-s", "11", "-o"])
        .arg(&instance_path)
        .status()
        .unwrap();
    assert!(status.success());

    let instance = Instance::from_path(&instance_path).unwrap();
    assert_eq!(instance.len(), 6);

    // ids are always 1..=n, so a straight 1-2-3 tour is renderable
    let solution = Solution::parse("3 0.0\n1 0 0\n2 0 0\n3 0 0\n".as_bytes()).unwrap();
    let canvas = render(&instance, &solution, 2.0).unwrap();
    let output_path = dir.path().join("generated.png");
    canvas.save(&output_path).unwrap();
    assert!(output_path.exists());
}
