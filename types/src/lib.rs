//! Common types shared by the craps engine, its collaborators and clients.

pub mod casino;
