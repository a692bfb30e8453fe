pub mod box_blur;
