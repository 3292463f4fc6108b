pub mod picking;
pub use self::picking::{pick_ground_point, Camera, Ray};
