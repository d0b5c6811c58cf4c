//! teamfit-report: HTML result pages for teamfit.

pub mod html;
