//! Random rover scenarios whose outcome is known in advance.

pub mod generator;
