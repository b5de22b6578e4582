pub mod landing;
pub mod signin;
