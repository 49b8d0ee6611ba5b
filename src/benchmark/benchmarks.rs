pub mod double3;
