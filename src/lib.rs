pub mod graphs;
pub mod interaction;
pub mod search;
pub mod utility;
