// lottie-data: Serde structs for Lottie animated shape output
pub mod model;
