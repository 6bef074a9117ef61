pub mod interest;
pub mod material_waste;
pub mod savings;
