pub mod m1_fragment;
pub mod m2_fragment;
pub mod m3_fragment;
pub mod m4_fragment;
pub mod m5_fragment;
pub mod m6_fragment;

pub use m1_fragment::generate_m1_fragment;
pub use m2_fragment::generate_m2_fragment;
pub use m3_fragment::generate_m3_fragment;
pub use m4_fragment::generate_m4_fragment;
pub use m5_fragment::generate_m5_fragment;
pub use m6_fragment::generate_m6_fragment;

use crate::metrics::Attribute;
use crate::utils::fit::AttributeFit;

/// "Technical skills, organization and learning new tools"
pub(crate) fn list_attributes(attributes: &[Attribute]) -> String {
    let names: Vec<String> = attributes
        .iter()
        .map(|a| a.display_name().to_lowercase())
        .collect();
    match names.len() {
        0 => String::new(),
        1 => names[0].clone(),
        n => format!("{} and {}", names[..n - 1].join(", "), names[n - 1]),
    }
}

/// Largest weighted gap among `attributes` (0 when none of them has a fit)
pub(crate) fn largest_weighted_gap(fits: &[AttributeFit], attributes: &[Attribute]) -> f64 {
    fits.iter()
        .filter(|f| attributes.contains(&f.attribute))
        .map(AttributeFit::weighted_gap)
        .fold(0.0, f64::max)
}

/// Notes keyed by weighted gap, largest first; equal gaps keep their order
pub(crate) fn order_by_gap(mut notes: Vec<(f64, String)>) -> Vec<String> {
    notes.sort_by(|a, b| b.0.total_cmp(&a.0));
    notes.into_iter().map(|(_, note)| note).collect()
}
