//! Calculatrice RPN
//!
//! - noyau : tokenisation -> validation -> shunting-yard -> pile (pur, sans I/O)
//! - app   : état + vue egui (natif + web), aucune évaluation ici

pub mod app;
pub mod noyau;
