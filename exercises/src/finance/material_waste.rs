/// Material left over after `num_jobs` jobs, suffixed with its unit label.
///
/// The label is appended verbatim: `material_waste(100, "kg", 3, 20)` is `"40kg"`.
pub fn material_waste(total: i64, units: &str, num_jobs: i64, consumption: i64) -> String {
    let remaining = total - num_jobs * consumption;
    format!("{remaining}{units}")
}
