use crate::utils::files::{ensure_directory, has_image_extension};
use image::{DynamicImage, Rgba, RgbaImage};
use rfd::FileDialog;
use std::fs;
use std::io;
use std::path::Path;

/// Number of pixels to pad on each side
const PADDING: u32 = 50;

/// Name of the output subdirectory inside the selected folder
const OUTPUT_DIR_NAME: &str = "padded_images";

/// Surround an image with a uniform transparent border.
///
/// The source is converted to RGBA first, so alpha-less formats come out
/// fully opaque inside a fully transparent frame. The original content sits
/// at offset (padding, padding) in the result.
pub fn pad_image(img: &DynamicImage, padding: u32) -> RgbaImage {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut canvas = RgbaImage::from_pixel(
        width + 2 * padding,
        height + 2 * padding,
        Rgba([0, 0, 0, 0]),
    );
    image::imageops::replace(&mut canvas, &rgba, padding as i64, padding as i64);

    canvas
}

/// Pad every recognized image in `folder`, writing results under
/// `folder/padded_images` with unchanged filenames.
///
/// Decode and encode errors are not caught: a corrupt file halts the
/// remaining batch, leaving already-written outputs on disk.
pub fn pad_folder(folder: &Path, padding: u32) -> io::Result<()> {
    let output_dir = folder.join(OUTPUT_DIR_NAME);
    ensure_directory(&output_dir)?;

    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };

        if !has_image_extension(file_name) {
            continue;
        }

        let input_path = entry.path();
        let output_path = output_dir.join(file_name);

        let img = image::open(&input_path)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let padded = pad_image(&img, padding);

        // Output format follows the retained extension
        padded
            .save(&output_path)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    }

    println!(
        "Padded (transparent) images saved to: {}",
        output_dir.display()
    );
    Ok(())
}

/// Ask the user to pick a folder, then pad everything in it.
///
/// Declining the dialog is a clean exit, not an error.
pub fn pad_folder_interactive() -> io::Result<()> {
    let folder = FileDialog::new()
        .set_title("Select Folder Containing Images")
        .pick_folder();

    let Some(folder) = folder else {
        println!("No folder selected. Exiting.");
        return Ok(());
    };

    pad_folder(&folder, PADDING)
}
